use crate::{error::DecodingError, from_be_bytes_slice_and_advance_buf, from_slice_and_advance_buf};

use alloy_primitives::{bytes::BufMut, Address};
use rollup_gateway_primitives::{AccountId, ChainId, TokenId};

/// A forced exit of a layer-2 account's token balance back to L1.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct FullExitOp {
    /// The chain the exit settles to.
    pub chain_id: ChainId,
    /// The layer-2 account id the exit drains.
    pub account_id: AccountId,
    /// The L1 owner the exited funds are released to.
    pub owner: Address,
    /// The layer-2 id of the exited token.
    pub token_id: TokenId,
    /// The exited amount. Zero at creation; resolved by the settlement process.
    pub amount: u128,
}

impl FullExitOp {
    /// The fixed byte length of the encoded operation.
    pub const BYTES_LENGTH: usize = 43;

    /// Encodes the operation into its canonical fixed-layout byte sequence.
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(Self::BYTES_LENGTH);
        bytes.put_slice(&self.chain_id.to_be_bytes());
        bytes.put_slice(&self.account_id.to_be_bytes());
        bytes.put_slice(self.owner.as_slice());
        bytes.put_slice(&self.token_id.to_be_bytes());
        bytes.put_slice(&self.amount.to_be_bytes());
        bytes
    }

    /// Tries to read from the input buffer into the [`FullExitOp`].
    /// Returns [`DecodingError::Eof`] if the buffer is shorter than
    /// [`Self::BYTES_LENGTH`].
    pub fn try_from_buf(buf: &mut &[u8]) -> Result<Self, DecodingError> {
        if buf.len() < Self::BYTES_LENGTH {
            return Err(DecodingError::Eof)
        }

        let chain_id = from_be_bytes_slice_and_advance_buf!(u8, buf);
        let account_id = from_be_bytes_slice_and_advance_buf!(u32, buf);
        let owner = from_slice_and_advance_buf!(Address, buf);
        let token_id = from_be_bytes_slice_and_advance_buf!(u16, buf);
        let amount = from_be_bytes_slice_and_advance_buf!(u128, buf);

        Ok(Self { chain_id, account_id, owner, token_id, amount })
    }
}
