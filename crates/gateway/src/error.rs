use crate::{
    collaborators::{DispatchError, NftError, TokenRegistryError, VaultError},
    guard::ReentrantCall,
};
use alloy_primitives::Address;
use rollup_gateway_primitives::{AccountId, NftId, MAX_ACCOUNT_ID};

/// An error that occurred in the gateway.
///
/// Every rejection unwinds the entire call with zero state change; there is no
/// partial registration and no retry channel. The caller must resubmit a fresh call
/// if circumstances change.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The one-time initializer has not run yet.
    #[error("gateway is not initialized")]
    NotInitialized,
    /// The one-time initializer already ran.
    #[error("gateway is already initialized")]
    AlreadyInitialized,
    /// The system is not in its active operating mode.
    #[error("system is not in its active operating mode")]
    Inactive,
    /// An amount argument was not strictly positive.
    #[error("amount must be strictly positive")]
    ZeroAmount,
    /// A same-chain swap referenced the same token on both sides.
    #[error("same-chain swap must target a different token id")]
    SameTokenSwap,
    /// The referenced token is paused.
    #[error("token {0} is paused")]
    TokenPaused(Address),
    /// The account id exceeds the configured maximum.
    #[error("account id {0} exceeds the maximum {MAX_ACCOUNT_ID}")]
    AccountIdTooLarge(AccountId),
    /// No liquidity-position NFT facility is configured.
    #[error("no liquidity-position nft facility is configured")]
    NftFacilityUnavailable,
    /// The caller does not own the referenced position NFT.
    #[error("caller is not the owner of position nft {0}")]
    NotPositionOwner(NftId),
    /// The entry point was re-entered mid-execution.
    #[error(transparent)]
    Reentrant(#[from] ReentrantCall),
    /// An error reported by the token registry.
    #[error(transparent)]
    TokenRegistry(#[from] TokenRegistryError),
    /// An error reported by the vault.
    #[error(transparent)]
    Vault(#[from] VaultError),
    /// An error reported by the NFT facility.
    #[error(transparent)]
    Nft(#[from] NftError),
    /// An error reported by the indirection target.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}
