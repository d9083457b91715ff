use crate::{error::DecodingError, from_be_bytes_slice_and_advance_buf, from_slice_and_advance_buf};

use alloy_primitives::{bytes::BufMut, Address};
use rollup_gateway_primitives::{ChainId, Nonce, TokenId};

/// A cross-chain swap initiated on L1.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct QuickSwapOp {
    /// The chain the swap originates from.
    pub from_chain_id: ChainId,
    /// The chain the swap output settles to.
    pub to_chain_id: ChainId,
    /// The initiator of the swap.
    pub owner: Address,
    /// The layer-2 id of the input token.
    pub from_token_id: TokenId,
    /// The exact input amount pulled into custody.
    pub amount_in: u128,
    /// The recipient of the swap output.
    pub to: Address,
    /// The layer-2 id of the output token.
    pub to_token_id: TokenId,
    /// The minimum acceptable output amount.
    pub amount_out_min: u128,
    /// The output amount. Zero at creation; resolved by the settlement process.
    pub amount_out: u128,
    /// The caller-supplied nonce.
    pub nonce: Nonce,
    /// The pair address the swap is routed through.
    pub pair: Address,
    /// The layer-2 id of the fallback token accepted on output.
    pub accept_token_id: TokenId,
    /// The minimum acceptable output amount in the fallback token.
    pub accept_amount_out_min: u128,
}

impl QuickSwapOp {
    /// The fixed byte length of the encoded operation.
    pub const BYTES_LENGTH: usize = 136;

    /// Encodes the operation into its canonical fixed-layout byte sequence.
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(Self::BYTES_LENGTH);
        bytes.put_slice(&self.from_chain_id.to_be_bytes());
        bytes.put_slice(&self.to_chain_id.to_be_bytes());
        bytes.put_slice(self.owner.as_slice());
        bytes.put_slice(&self.from_token_id.to_be_bytes());
        bytes.put_slice(&self.amount_in.to_be_bytes());
        bytes.put_slice(self.to.as_slice());
        bytes.put_slice(&self.to_token_id.to_be_bytes());
        bytes.put_slice(&self.amount_out_min.to_be_bytes());
        bytes.put_slice(&self.amount_out.to_be_bytes());
        bytes.put_slice(&self.nonce.to_be_bytes());
        bytes.put_slice(self.pair.as_slice());
        bytes.put_slice(&self.accept_token_id.to_be_bytes());
        bytes.put_slice(&self.accept_amount_out_min.to_be_bytes());
        bytes
    }

    /// Tries to read from the input buffer into the [`QuickSwapOp`].
    /// Returns [`DecodingError::Eof`] if the buffer is shorter than
    /// [`Self::BYTES_LENGTH`].
    pub fn try_from_buf(buf: &mut &[u8]) -> Result<Self, DecodingError> {
        if buf.len() < Self::BYTES_LENGTH {
            return Err(DecodingError::Eof)
        }

        let from_chain_id = from_be_bytes_slice_and_advance_buf!(u8, buf);
        let to_chain_id = from_be_bytes_slice_and_advance_buf!(u8, buf);
        let owner = from_slice_and_advance_buf!(Address, buf);
        let from_token_id = from_be_bytes_slice_and_advance_buf!(u16, buf);
        let amount_in = from_be_bytes_slice_and_advance_buf!(u128, buf);
        let to = from_slice_and_advance_buf!(Address, buf);
        let to_token_id = from_be_bytes_slice_and_advance_buf!(u16, buf);
        let amount_out_min = from_be_bytes_slice_and_advance_buf!(u128, buf);
        let amount_out = from_be_bytes_slice_and_advance_buf!(u128, buf);
        let nonce = from_be_bytes_slice_and_advance_buf!(u32, buf);
        let pair = from_slice_and_advance_buf!(Address, buf);
        let accept_token_id = from_be_bytes_slice_and_advance_buf!(u16, buf);
        let accept_amount_out_min = from_be_bytes_slice_and_advance_buf!(u128, buf);

        Ok(Self {
            from_chain_id,
            to_chain_id,
            owner,
            from_token_id,
            amount_in,
            to,
            to_token_id,
            amount_out_min,
            amount_out,
            nonce,
            pair,
            accept_token_id,
            accept_amount_out_min,
        })
    }
}
