use crate::{error::DecodingError, from_be_bytes_slice_and_advance_buf, from_slice_and_advance_buf};

use alloy_primitives::{bytes::BufMut, Address};
use rollup_gateway_primitives::{ChainId, NftId, TokenId};

/// An L1-initiated liquidity provisioning, tied to a pending liquidity-position NFT.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct L1AddLqOp {
    /// The recipient of the liquidity-position NFT.
    pub owner: Address,
    /// The chain the liquidity is provided from.
    pub chain_id: ChainId,
    /// The layer-2 id of the provided token.
    pub token_id: TokenId,
    /// The provided amount.
    pub amount: u128,
    /// The pair address the liquidity is added to.
    pub pair: Address,
    /// The minimum acceptable amount of LP tokens.
    pub min_lp_amount: u128,
    /// The amount of LP tokens. Zero at creation; resolved by the settlement process.
    pub lp_amount: u128,
    /// The id of the pending liquidity-position NFT minted at registration.
    pub nft_id: NftId,
}

impl L1AddLqOp {
    /// The fixed byte length of the encoded operation.
    pub const BYTES_LENGTH: usize = 95;

    /// Encodes the operation into its canonical fixed-layout byte sequence.
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(Self::BYTES_LENGTH);
        bytes.put_slice(self.owner.as_slice());
        bytes.put_slice(&self.chain_id.to_be_bytes());
        bytes.put_slice(&self.token_id.to_be_bytes());
        bytes.put_slice(&self.amount.to_be_bytes());
        bytes.put_slice(self.pair.as_slice());
        bytes.put_slice(&self.min_lp_amount.to_be_bytes());
        bytes.put_slice(&self.lp_amount.to_be_bytes());
        bytes.put_slice(&self.nft_id.to_be_bytes());
        bytes
    }

    /// Tries to read from the input buffer into the [`L1AddLqOp`].
    /// Returns [`DecodingError::Eof`] if the buffer is shorter than
    /// [`Self::BYTES_LENGTH`].
    pub fn try_from_buf(buf: &mut &[u8]) -> Result<Self, DecodingError> {
        if buf.len() < Self::BYTES_LENGTH {
            return Err(DecodingError::Eof)
        }

        let owner = from_slice_and_advance_buf!(Address, buf);
        let chain_id = from_be_bytes_slice_and_advance_buf!(u8, buf);
        let token_id = from_be_bytes_slice_and_advance_buf!(u16, buf);
        let amount = from_be_bytes_slice_and_advance_buf!(u128, buf);
        let pair = from_slice_and_advance_buf!(Address, buf);
        let min_lp_amount = from_be_bytes_slice_and_advance_buf!(u128, buf);
        let lp_amount = from_be_bytes_slice_and_advance_buf!(u128, buf);
        let nft_id = from_be_bytes_slice_and_advance_buf!(u32, buf);

        Ok(Self { owner, chain_id, token_id, amount, pair, min_lp_amount, lp_amount, nft_id })
    }
}
