//! The narrow seams to the gateway's external collaborators.
//!
//! Collaborators own their own state; the gateway invokes them through these
//! side-effect-declared traits and never reads or writes their storage directly.

use crate::{context::CallContext, dispatch::RawCall};
use alloy_primitives::{Address, Bytes};
use rollup_gateway_primitives::{NftId, TokenId};
use std::fmt::Debug;

/// A token known to the registry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RegisteredToken {
    /// The layer-2 id assigned to the token.
    pub token_id: TokenId,
    /// Whether deposits of the token are currently paused.
    pub paused: bool,
}

/// A liquidity position backing a liquidity-position NFT.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LiquidityPosition {
    /// The layer-2 id of the position's token.
    pub token_id: TokenId,
    /// The pair address the position provides liquidity to.
    pub pair: Address,
    /// The amount of LP tokens held by the position.
    pub lp_amount: u128,
}

/// The custody collaborator holding transferred token balances.
pub trait Vault: Debug {
    /// Pulls the exact `amount` of `token` from `from` into custody, recording the
    /// deposit. A transfer that moves anything other than the exact requested amount
    /// must be reported as an error, never silently adjusted.
    fn deposit(&mut self, token: Address, from: Address, amount: u128) -> Result<(), VaultError>;
}

/// The token-registry and pause-state lookup collaborator.
pub trait TokenRegistry: Debug {
    /// Resolves a token address to its registered layer-2 token.
    fn resolve(&self, token: Address) -> Result<RegisteredToken, TokenRegistryError>;
}

/// The liquidity-position NFT facility collaborator.
pub trait NftFacility: Debug {
    /// Mints a pending liquidity-position NFT to `to` and returns its id.
    fn mint_pending(
        &mut self,
        to: Address,
        token_id: TokenId,
        amount: u128,
        pair: Address,
        min_lp_amount: u128,
    ) -> Result<NftId, NftError>;

    /// Returns the current owner of the provided position NFT.
    fn owner_of(&self, nft_id: NftId) -> Result<Address, NftError>;

    /// Returns the liquidity position backing the provided NFT.
    fn position(&self, nft_id: NftId) -> Result<LiquidityPosition, NftError>;

    /// Marks the NFT's position as pending removal.
    fn mark_pending_removal(&mut self, nft_id: NftId) -> Result<(), NftError>;
}

/// The emergency/exodus flag lookup. Consulted by the gateway, owned elsewhere.
pub trait SystemStatus: Debug {
    /// Whether the system is in its active operating mode.
    fn is_active(&self) -> bool;
}

/// An indirection target for calls the gateway does not handle itself.
pub trait DispatchTarget: Debug {
    /// Executes the forwarded call and returns its raw return data.
    fn dispatch(&mut self, ctx: &CallContext, call: RawCall) -> Result<Bytes, DispatchError>;
}

/// An error reported by the [`Vault`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VaultError {
    /// The token transfer moved a different amount than requested.
    #[error("token transfer moved {actual} of the {expected} requested")]
    InexactTransfer {
        /// The requested amount.
        expected: u128,
        /// The amount the transfer actually moved.
        actual: u128,
    },
    /// The token transfer failed outright.
    #[error("token transfer failed: {0}")]
    TransferFailed(String),
}

/// An error reported by the [`TokenRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenRegistryError {
    /// The token address is not registered.
    #[error("unknown token {0}")]
    UnknownToken(Address),
}

/// An error reported by the [`NftFacility`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NftError {
    /// The provided id does not reference a known position NFT.
    #[error("unknown liquidity position nft {0}")]
    UnknownPosition(NftId),
    /// The facility rejected the requested operation.
    #[error("nft facility rejected the operation: {0}")]
    Rejected(String),
}

/// An error reported by a [`DispatchTarget`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// The target reverted the forwarded call.
    #[error("dispatch target reverted: {0}")]
    Reverted(String),
}
