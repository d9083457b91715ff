use crate::{error::DecodingError, from_be_bytes_slice_and_advance_buf, from_slice_and_advance_buf};

use alloy_primitives::{bytes::BufMut, Address};
use rollup_gateway_primitives::{ChainId, NftId, TokenId};

/// An L1-initiated liquidity withdrawal, burning a pending liquidity-position NFT.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct L1RemoveLqOp {
    /// The owner of the withdrawn position.
    pub owner: Address,
    /// The chain the withdrawal settles to.
    pub chain_id: ChainId,
    /// The layer-2 id of the position's token.
    pub token_id: TokenId,
    /// The minimum acceptable withdrawn amount.
    pub min_amount: u128,
    /// The withdrawn amount. Zero at creation; resolved by the settlement process.
    pub amount: u128,
    /// The pair address the liquidity is removed from.
    pub pair: Address,
    /// The amount of LP tokens held by the position.
    pub lp_amount: u128,
    /// The id of the liquidity-position NFT pending removal.
    pub nft_id: NftId,
}

impl L1RemoveLqOp {
    /// The fixed byte length of the encoded operation.
    pub const BYTES_LENGTH: usize = 95;

    /// Encodes the operation into its canonical fixed-layout byte sequence.
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(Self::BYTES_LENGTH);
        bytes.put_slice(self.owner.as_slice());
        bytes.put_slice(&self.chain_id.to_be_bytes());
        bytes.put_slice(&self.token_id.to_be_bytes());
        bytes.put_slice(&self.min_amount.to_be_bytes());
        bytes.put_slice(&self.amount.to_be_bytes());
        bytes.put_slice(self.pair.as_slice());
        bytes.put_slice(&self.lp_amount.to_be_bytes());
        bytes.put_slice(&self.nft_id.to_be_bytes());
        bytes
    }

    /// Tries to read from the input buffer into the [`L1RemoveLqOp`].
    /// Returns [`DecodingError::Eof`] if the buffer is shorter than
    /// [`Self::BYTES_LENGTH`].
    pub fn try_from_buf(buf: &mut &[u8]) -> Result<Self, DecodingError> {
        if buf.len() < Self::BYTES_LENGTH {
            return Err(DecodingError::Eof)
        }

        let owner = from_slice_and_advance_buf!(Address, buf);
        let chain_id = from_be_bytes_slice_and_advance_buf!(u8, buf);
        let token_id = from_be_bytes_slice_and_advance_buf!(u16, buf);
        let min_amount = from_be_bytes_slice_and_advance_buf!(u128, buf);
        let amount = from_be_bytes_slice_and_advance_buf!(u128, buf);
        let pair = from_slice_and_advance_buf!(Address, buf);
        let lp_amount = from_be_bytes_slice_and_advance_buf!(u128, buf);
        let nft_id = from_be_bytes_slice_and_advance_buf!(u32, buf);

        Ok(Self { owner, chain_id, token_id, min_amount, amount, pair, lp_amount, nft_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_should_encode_fixed_length() {
        let op = L1RemoveLqOp {
            owner: address!("1000000000000000000000000000000000000001"),
            chain_id: 4,
            token_id: 21,
            min_amount: 4_000,
            amount: 0,
            pair: address!("2000000000000000000000000000000000000002"),
            lp_amount: 5_000,
            nft_id: 42,
        };

        let encoded = op.encode();
        assert_eq!(encoded.len(), L1RemoveLqOp::BYTES_LENGTH);
        // the creation-time amount sentinel sits between min_amount and pair.
        assert_eq!(&encoded[39..55], &[0u8; 16]);
    }

    #[test]
    fn test_should_order_min_amount_before_amount() {
        // min_amount and amount have the same width; layout position must tell them
        // apart for the settlement consumer.
        let a = L1RemoveLqOp { min_amount: 1, amount: 0, ..Default::default() };
        let b = L1RemoveLqOp { min_amount: 0, amount: 1, ..Default::default() };
        assert_ne!(a.encode(), b.encode());
    }
}
