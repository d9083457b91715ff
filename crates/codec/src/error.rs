use rollup_gateway_primitives::UnknownOpType;

/// An error occurring during the codec process.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// An error occurring at the decoding stage.
    #[error(transparent)]
    Decoding(#[from] DecodingError),
}

/// An error occurring during the decoding of a canonical payload.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodingError {
    /// The buffer is shorter than the fixed layout of the operation.
    #[error("end of file")]
    Eof,
    /// The operation tag does not map to a known operation kind.
    #[error(transparent)]
    UnknownOpType(#[from] UnknownOpType),
    /// The buffer holds bytes past the fixed layout of the operation.
    #[error("{0} trailing bytes after operation payload")]
    TrailingBytes(usize),
}
