/// Copies the provided slice into $ty using $ty::from_be_bytes and advances the buffer.
#[macro_export]
macro_rules! from_be_bytes_slice_and_advance_buf {
    ($ty:ty, $slice:expr) => {{
        let size_of = ::std::mem::size_of::<$ty>();
        let mut arr = [0u8; ::std::mem::size_of::<$ty>()];
        arr.copy_from_slice(&$slice[0..size_of]);
        ::alloy_primitives::bytes::Buf::advance($slice, size_of);
        <$ty>::from_be_bytes(arr)
    }};
}

/// Copies the provided slice into $ty using $ty::from_slice and advances the buffer.
#[macro_export]
macro_rules! from_slice_and_advance_buf {
    ($ty:ty, $slice:expr) => {{
        let size_of = ::std::mem::size_of::<$ty>();
        let value = <$ty>::from_slice(&$slice[0..size_of]);
        ::alloy_primitives::bytes::Buf::advance($slice, size_of);
        value
    }};
}
