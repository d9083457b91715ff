//! Primitive types for the rollup bridge gateway.

pub use constants::*;
mod constants;

pub use op_type::{OpType, UnknownOpType};
mod op_type;

pub use pubdata::{pubdata_hash, PubdataHash};
mod pubdata;

pub use request::PriorityRequest;
mod request;

/// The identifier of a chain participating in the bridge.
pub type ChainId = u8;

/// The layer-2 identifier of a registered token.
pub type TokenId = u16;

/// The layer-2 identifier of an account.
pub type AccountId = u32;

/// The identifier of a liquidity-position NFT.
pub type NftId = u32;

/// A caller-supplied nonce for swap requests.
pub type Nonce = u32;

/// The sequence id assigned to a priority request.
pub type SequenceId = u64;
