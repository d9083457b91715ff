//! Common test helpers: recording mock collaborators.
//!
//! Every mock shares its inner state behind an [`Arc`], so a test can keep a clone,
//! hand the mock to the gateway, and assert on the recorded calls afterwards.

use crate::{
    collaborators::{
        DispatchError, DispatchTarget, LiquidityPosition, NftError, NftFacility, RegisteredToken,
        SystemStatus, TokenRegistry, TokenRegistryError, Vault, VaultError,
    },
    context::CallContext,
    dispatch::RawCall,
};
use alloy_primitives::{Address, Bytes};
use rollup_gateway_primitives::{NftId, TokenId};
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

/// A recording [`Vault`] mock.
#[derive(Debug, Default, Clone)]
pub struct MockVault {
    inner: Arc<Mutex<MockVaultInner>>,
}

#[derive(Debug, Default)]
struct MockVaultInner {
    deposits: Vec<(Address, Address, u128)>,
    failure: Option<VaultError>,
}

impl MockVault {
    /// Returns the recorded `(token, from, amount)` deposits.
    pub fn deposits(&self) -> Vec<(Address, Address, u128)> {
        self.inner.lock().unwrap().deposits.clone()
    }

    /// Makes the next deposit fail with the provided error.
    pub fn fail_next(&self, error: VaultError) {
        self.inner.lock().unwrap().failure = Some(error);
    }
}

impl Vault for MockVault {
    fn deposit(&mut self, token: Address, from: Address, amount: u128) -> Result<(), VaultError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(error) = inner.failure.take() {
            return Err(error)
        }
        inner.deposits.push((token, from, amount));
        Ok(())
    }
}

/// A [`TokenRegistry`] mock backed by a fixed token table.
#[derive(Debug, Default, Clone)]
pub struct MockTokenRegistry {
    tokens: HashMap<Address, RegisteredToken>,
}

impl MockTokenRegistry {
    /// Registers a token under the provided address.
    pub fn with_token(mut self, address: Address, token_id: TokenId, paused: bool) -> Self {
        self.tokens.insert(address, RegisteredToken { token_id, paused });
        self
    }
}

impl TokenRegistry for MockTokenRegistry {
    fn resolve(&self, token: Address) -> Result<RegisteredToken, TokenRegistryError> {
        self.tokens.get(&token).copied().ok_or(TokenRegistryError::UnknownToken(token))
    }
}

/// A recording [`NftFacility`] mock.
#[derive(Debug, Default, Clone)]
pub struct MockNftFacility {
    inner: Arc<Mutex<MockNftFacilityInner>>,
}

#[derive(Debug, Default)]
struct MockNftFacilityInner {
    next_id: NftId,
    owners: HashMap<NftId, Address>,
    positions: HashMap<NftId, LiquidityPosition>,
    pending_removals: Vec<NftId>,
}

impl MockNftFacility {
    /// Seeds an existing position owned by `owner`.
    pub fn insert_position(&self, nft_id: NftId, owner: Address, position: LiquidityPosition) {
        let mut inner = self.inner.lock().unwrap();
        inner.owners.insert(nft_id, owner);
        inner.positions.insert(nft_id, position);
        inner.next_id = inner.next_id.max(nft_id + 1);
    }

    /// Returns the ids marked as pending removal.
    pub fn pending_removals(&self) -> Vec<NftId> {
        self.inner.lock().unwrap().pending_removals.clone()
    }
}

impl NftFacility for MockNftFacility {
    fn mint_pending(
        &mut self,
        to: Address,
        token_id: TokenId,
        _amount: u128,
        pair: Address,
        _min_lp_amount: u128,
    ) -> Result<NftId, NftError> {
        let mut inner = self.inner.lock().unwrap();
        let nft_id = inner.next_id;
        inner.next_id += 1;
        inner.owners.insert(nft_id, to);
        inner.positions.insert(nft_id, LiquidityPosition { token_id, pair, lp_amount: 0 });
        Ok(nft_id)
    }

    fn owner_of(&self, nft_id: NftId) -> Result<Address, NftError> {
        self.inner.lock().unwrap().owners.get(&nft_id).copied().ok_or(NftError::UnknownPosition(nft_id))
    }

    fn position(&self, nft_id: NftId) -> Result<LiquidityPosition, NftError> {
        self.inner
            .lock()
            .unwrap()
            .positions
            .get(&nft_id)
            .copied()
            .ok_or(NftError::UnknownPosition(nft_id))
    }

    fn mark_pending_removal(&mut self, nft_id: NftId) -> Result<(), NftError> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.owners.contains_key(&nft_id) {
            return Err(NftError::UnknownPosition(nft_id))
        }
        inner.pending_removals.push(nft_id);
        Ok(())
    }
}

/// A [`SystemStatus`] mock with a flippable flag.
#[derive(Debug, Clone)]
pub struct MockSystemStatus {
    active: Arc<AtomicBool>,
}

impl Default for MockSystemStatus {
    fn default() -> Self {
        Self { active: Arc::new(AtomicBool::new(true)) }
    }
}

impl MockSystemStatus {
    /// Flips the active flag.
    pub fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::Relaxed);
    }
}

impl SystemStatus for MockSystemStatus {
    fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }
}

/// A recording [`DispatchTarget`] mock answering with a fixed response.
#[derive(Debug, Clone)]
pub struct MockDispatchTarget {
    response: Bytes,
    calls: Arc<Mutex<Vec<RawCall>>>,
}

impl MockDispatchTarget {
    /// Returns a target answering every call with `response`.
    pub fn new(response: Bytes) -> Self {
        Self { response, calls: Arc::new(Mutex::new(Vec::new())) }
    }

    /// Returns the recorded forwarded calls.
    pub fn calls(&self) -> Vec<RawCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl DispatchTarget for MockDispatchTarget {
    fn dispatch(&mut self, _ctx: &CallContext, call: RawCall) -> Result<Bytes, DispatchError> {
        self.calls.lock().unwrap().push(call);
        Ok(self.response.clone())
    }
}
