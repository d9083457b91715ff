use alloy_primitives::{Bytes, FixedBytes};

/// A call that matched none of the public action handlers.
///
/// Forwarded verbatim to the current block-processing module: same selector, same
/// payload, same caller context, return data passed back unchanged. A call carrying
/// no payload is an empty `payload`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCall {
    /// The 4-byte selector of the forwarded call.
    pub selector: FixedBytes<4>,
    /// The raw argument bytes of the forwarded call.
    pub payload: Bytes,
}

impl RawCall {
    /// Returns a new instance of [`RawCall`].
    pub const fn new(selector: FixedBytes<4>, payload: Bytes) -> Self {
        Self { selector, payload }
    }

    /// Returns a [`RawCall`] carrying no payload.
    pub const fn empty(selector: FixedBytes<4>) -> Self {
        Self { selector, payload: Bytes::new() }
    }
}
