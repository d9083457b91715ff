//! The canonical operation codec for the rollup bridge gateway.
//!
//! Encoders are pure: two invocations with identical field values always produce
//! identical bytes, independent of any state or call context. This is what lets the
//! settlement processor independently reproduce the exact payload bytes and validate
//! them against the digest committed in the priority ledger.

pub use error::{CodecError, DecodingError};
mod error;

mod macros;

pub use ops::{DepositOp, FullExitOp, L1AddLqOp, L1RemoveLqOp, QuickSwapOp};
pub mod ops;

use rollup_gateway_primitives::OpType;

/// A fully populated priority operation.
///
/// The closed set of operation kinds the gateway registers. Encoding dispatches on an
/// exhaustive match, so a variant without an encoder is a compile error.
#[derive(Debug, Copy, Clone, PartialEq, Eq, derive_more::From)]
pub enum Operation {
    /// An L1 deposit into the layer-2 system.
    Deposit(DepositOp),
    /// A forced exit of a layer-2 account's balance.
    FullExit(FullExitOp),
    /// A cross-chain swap.
    QuickSwap(QuickSwapOp),
    /// An L1-initiated liquidity provisioning.
    AddLiquidity(L1AddLqOp),
    /// An L1-initiated liquidity withdrawal.
    RemoveLiquidity(L1RemoveLqOp),
}

impl Operation {
    /// Returns the [`OpType`] tag of the operation.
    pub const fn op_type(&self) -> OpType {
        match self {
            Self::Deposit(_) => OpType::Deposit,
            Self::FullExit(_) => OpType::FullExit,
            Self::QuickSwap(_) => OpType::QuickSwap,
            Self::AddLiquidity(_) => OpType::L1AddLq,
            Self::RemoveLiquidity(_) => OpType::L1RemoveLq,
        }
    }

    /// Encodes the operation into its canonical fixed-layout byte sequence.
    ///
    /// The payload carries no kind tag: the consumer reads the [`OpType`] from the
    /// ledger entry the payload was registered under.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Deposit(op) => op.encode(),
            Self::FullExit(op) => op.encode(),
            Self::QuickSwap(op) => op.encode(),
            Self::AddLiquidity(op) => op.encode(),
            Self::RemoveLiquidity(op) => op.encode(),
        }
    }

    /// Decodes an operation of the provided kind from the buffer.
    ///
    /// Rejects buffers holding bytes past the kind's fixed layout: a canonical
    /// payload is exactly as long as its layout.
    pub fn try_from_buf(op_type: OpType, buf: &mut &[u8]) -> Result<Self, CodecError> {
        let operation = match op_type {
            OpType::Deposit => DepositOp::try_from_buf(buf)?.into(),
            OpType::FullExit => FullExitOp::try_from_buf(buf)?.into(),
            OpType::QuickSwap => QuickSwapOp::try_from_buf(buf)?.into(),
            OpType::L1AddLq => L1AddLqOp::try_from_buf(buf)?.into(),
            OpType::L1RemoveLq => L1RemoveLqOp::try_from_buf(buf)?.into(),
        };

        if !buf.is_empty() {
            return Err(DecodingError::TrailingBytes(buf.len()).into())
        }

        Ok(operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_should_reconstruct_registered_operation() -> eyre::Result<()> {
        let op = Operation::Deposit(DepositOp {
            chain_id: 1,
            account_id: 0,
            owner: address!("000000000000000000000000000000000000dEaD"),
            token_id: 2,
            amount: 100,
        });

        let encoded = op.encode();
        let decoded = Operation::try_from_buf(op.op_type(), &mut encoded.as_slice())?;
        assert_eq!(decoded, op);

        Ok(())
    }

    #[test]
    fn test_should_reject_trailing_bytes() {
        let mut encoded = Operation::FullExit(FullExitOp::default()).encode();
        encoded.push(0);

        let err = Operation::try_from_buf(OpType::FullExit, &mut encoded.as_slice()).unwrap_err();
        assert_eq!(err, CodecError::Decoding(DecodingError::TrailingBytes(1)));
    }
}
