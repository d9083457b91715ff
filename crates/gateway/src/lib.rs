//! The gateway layer of a layer-2 rollup bridge.
//!
//! Accepts L1-initiated actions (deposits, cross-chain swaps, liquidity
//! provisioning/withdrawal, forced exits), converts each into a canonical binary
//! record via [`rollup_gateway_codec`], and appends that record to the ordered,
//! expiring [`rollup_gateway_ledger::PriorityLedger`] the layer-2 settlement process
//! later consumes and proves against. Calls the gateway does not handle itself are
//! forwarded to the separately upgradeable block-processing module through the
//! indirection dispatcher.

pub use collaborators::{
    DispatchError, DispatchTarget, LiquidityPosition, NftError, NftFacility, RegisteredToken,
    SystemStatus, TokenRegistry, TokenRegistryError, Vault, VaultError,
};
pub mod collaborators;

pub use context::CallContext;
mod context;

pub use dispatch::RawCall;
mod dispatch;

pub use error::GatewayError;
mod error;

pub use event::GatewayEvent;
mod event;

pub use guard::{ReentrancyGuard, ReentrantCall};
mod guard;

pub use upgrade::UpgradeState;
mod upgrade;

#[cfg(any(test, feature = "test-utils"))]
/// Common test helpers
pub mod test_utils;

use alloy_primitives::{Address, Bytes, B256};
use rollup_gateway_codec::{
    DepositOp, FullExitOp, L1AddLqOp, L1RemoveLqOp, Operation, QuickSwapOp,
};
use rollup_gateway_ledger::{PriorityLedger, PriorityNotification};
use rollup_gateway_primitives::{
    AccountId, ChainId, NftId, Nonce, SequenceId, TokenId, MAX_ACCOUNT_ID,
};
use std::{collections::BTreeMap, sync::Arc};
use tokio::sync::mpsc;

/// The static configuration of the gateway.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// The chain id of the local chain.
    pub local_chain_id: ChainId,
    /// The sequence id assigned to the first registered priority request.
    pub first_sequence_id: SequenceId,
}

/// The one-time initialization bundle: the collaborator capabilities plus the
/// genesis state digest seeding the ledger anchor.
#[derive(Debug)]
pub struct InitializeInput {
    /// The custody collaborator.
    pub vault: Box<dyn Vault>,
    /// The token-registry and pause-state lookup collaborator.
    pub token_registry: Box<dyn TokenRegistry>,
    /// The liquidity-position NFT facility, if one exists.
    pub nft_facility: Option<Box<dyn NftFacility>>,
    /// The emergency/exodus flag lookup.
    pub status: Box<dyn SystemStatus>,
    /// The block-processing indirection target.
    pub settlement_module: Box<dyn DispatchTarget>,
    /// The exit-processing indirection target.
    pub exit_module: Box<dyn DispatchTarget>,
    /// The genesis state digest, fixed once as `stored_block_hashes[0]`.
    pub genesis_state_hash: B256,
}

/// The new indirection targets applied atomically by a finished upgrade.
#[derive(Debug)]
pub struct UpgradeTargets {
    /// The new block-processing indirection target.
    pub settlement_module: Box<dyn DispatchTarget>,
    /// The new exit-processing indirection target.
    pub exit_module: Box<dyn DispatchTarget>,
}

/// The parameters of a cross-chain swap request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SwapParams {
    /// The address of the input token.
    pub token_in: Address,
    /// The exact input amount to pull into custody.
    pub amount_in: u128,
    /// The recipient of the swap output.
    pub to: Address,
    /// The chain the swap output settles to.
    pub to_chain_id: ChainId,
    /// The layer-2 id of the output token.
    pub to_token_id: TokenId,
    /// The minimum acceptable output amount.
    pub amount_out_min: u128,
    /// The caller-supplied nonce.
    pub nonce: Nonce,
    /// The pair address the swap is routed through.
    pub pair: Address,
    /// The layer-2 id of the fallback token accepted on output.
    pub accept_token_id: TokenId,
    /// The minimum acceptable output amount in the fallback token.
    pub accept_amount_out_min: u128,
}

/// The lifecycle state of the gateway head.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LifecycleState {
    /// The one-time initializer has not run yet.
    Uninitialized,
    /// The gateway is initialized and serving calls.
    Initialized,
}

/// The receiver halves of the gateway's outbound channels.
#[derive(Debug)]
pub struct GatewayReceivers {
    /// The ledger's low-level per-append notifications, consumed by the settlement
    /// process.
    pub notifications: mpsc::UnboundedReceiver<Arc<PriorityNotification>>,
    /// The domain events, consumed by indexers.
    pub events: mpsc::UnboundedReceiver<Arc<GatewayEvent>>,
}

/// The initialized collaborator set.
#[derive(Debug)]
struct Collaborators {
    vault: Box<dyn Vault>,
    token_registry: Box<dyn TokenRegistry>,
    nft_facility: Option<Box<dyn NftFacility>>,
    status: Box<dyn SystemStatus>,
    settlement_module: Box<dyn DispatchTarget>,
    exit_module: Box<dyn DispatchTarget>,
}

/// The contract head of the rollup bridge gateway.
#[derive(Debug)]
pub struct Gateway {
    /// The chain id of the local chain.
    local_chain_id: ChainId,
    /// The lifecycle state, checked before the one-time initializer may run.
    lifecycle: LifecycleState,
    /// The reentrancy guard held for the duration of state-mutating entry points.
    guard: ReentrancyGuard,
    /// The priority-request ledger.
    ledger: PriorityLedger,
    /// The upgrade-mode state.
    upgrade: UpgradeState,
    /// The stored block hash chain. Slot 0 holds the genesis anchor, fixed at
    /// initialization; subsequent slots belong to the settlement module.
    stored_block_hashes: BTreeMap<u64, B256>,
    /// The collaborator set, present once initialized.
    state: Option<Collaborators>,
    /// The sender part of the channel for [`GatewayEvent`].
    events: mpsc::UnboundedSender<Arc<GatewayEvent>>,
}

impl Gateway {
    /// Returns a new uninitialized gateway and the receiver halves of its channels.
    pub fn new(config: GatewayConfig) -> (Self, GatewayReceivers) {
        let (ledger, notifications) = PriorityLedger::new(config.first_sequence_id);
        let (events_sender, events) = mpsc::unbounded_channel();
        let gateway = Self {
            local_chain_id: config.local_chain_id,
            lifecycle: LifecycleState::Uninitialized,
            guard: ReentrancyGuard::default(),
            ledger,
            upgrade: UpgradeState::default(),
            stored_block_hashes: BTreeMap::new(),
            state: None,
            events: events_sender,
        };
        (gateway, GatewayReceivers { notifications, events })
    }

    /// Runs the one-time initializer, wiring the collaborators and fixing the
    /// genesis ledger anchor. A second call is rejected.
    pub fn initialize(&mut self, input: InitializeInput) -> Result<(), GatewayError> {
        if self.lifecycle == LifecycleState::Initialized {
            return Err(GatewayError::AlreadyInitialized)
        }

        self.stored_block_hashes.insert(0, input.genesis_state_hash);
        self.state = Some(Collaborators {
            vault: input.vault,
            token_registry: input.token_registry,
            nft_facility: input.nft_facility,
            status: input.status,
            settlement_module: input.settlement_module,
            exit_module: input.exit_module,
        });
        self.lifecycle = LifecycleState::Initialized;

        tracing::info!(target: "gateway", genesis = %input.genesis_state_hash, "gateway initialized");
        Ok(())
    }

    /// Registers an L1 deposit of `amount` of `token` for the layer-2 `owner`.
    pub fn deposit(
        &mut self,
        ctx: &CallContext,
        token: Address,
        amount: u128,
        owner: Address,
    ) -> Result<SequenceId, GatewayError> {
        self.locked(|gateway| gateway.deposit_inner(ctx, token, amount, owner))
    }

    /// Registers a cross-chain swap, pulling the exact input amount into custody.
    pub fn quick_swap(
        &mut self,
        ctx: &CallContext,
        params: SwapParams,
    ) -> Result<SequenceId, GatewayError> {
        self.locked(|gateway| gateway.quick_swap_inner(ctx, params))
    }

    /// Registers a liquidity provisioning, minting a pending position NFT to `to`.
    pub fn add_liquidity(
        &mut self,
        ctx: &CallContext,
        token: Address,
        amount: u128,
        to: Address,
        pair: Address,
        min_lp_amount: u128,
    ) -> Result<SequenceId, GatewayError> {
        self.locked(|gateway| gateway.add_liquidity_inner(ctx, token, amount, to, pair, min_lp_amount))
    }

    /// Registers a liquidity withdrawal for a position NFT owned by the caller.
    pub fn remove_liquidity(
        &mut self,
        ctx: &CallContext,
        nft_id: NftId,
        min_amount: u128,
    ) -> Result<SequenceId, GatewayError> {
        self.locked(|gateway| gateway.remove_liquidity_inner(ctx, nft_id, min_amount))
    }

    /// Registers a forced exit of the account's balance. No funds move at request
    /// time; the exit amount is unknown until settlement.
    pub fn request_full_exit(
        &mut self,
        ctx: &CallContext,
        account_id: AccountId,
        token: Address,
    ) -> Result<SequenceId, GatewayError> {
        self.locked(|gateway| gateway.full_exit_inner(ctx, account_id, token))
    }

    /// Forwards a call matched by none of the public action handlers to the current
    /// block-processing module, returning its raw return data unchanged.
    pub fn fallback(&mut self, ctx: &CallContext, call: RawCall) -> Result<Bytes, GatewayError> {
        self.locked(|gateway| {
            let state = gateway.collaborators_mut()?;
            Ok(state.settlement_module.dispatch(ctx, call)?)
        })
    }

    /// Acknowledges the start of the upgrade notice period. No state mutation.
    pub fn upgrade_notice_started(&self) {
        tracing::info!(target: "gateway", "upgrade notice period started");
    }

    /// Activates the upgrade preparation phase, recording the activation timestamp.
    pub fn upgrade_preparation_started(&mut self, ctx: &CallContext) -> Result<(), GatewayError> {
        self.locked(|gateway| {
            gateway.upgrade.start_preparation(ctx.block_timestamp);
            gateway
                .emit(GatewayEvent::UpgradePreparationStarted { activation_time: ctx.block_timestamp });
            tracing::info!(target: "gateway", timestamp = ctx.block_timestamp, "upgrade preparation started");
            Ok(())
        })
    }

    /// Cancels the pending upgrade, resetting the preparation state.
    pub fn upgrade_canceled(&mut self) -> Result<(), GatewayError> {
        self.locked(|gateway| {
            gateway.upgrade.reset();
            gateway.emit(GatewayEvent::UpgradeCanceled);
            tracing::info!(target: "gateway", "upgrade canceled");
            Ok(())
        })
    }

    /// Finishes the pending upgrade: resets the preparation state and atomically
    /// swaps both indirection targets. This is the only path that may change the
    /// dispatch targets.
    pub fn upgrade_finished(&mut self, targets: UpgradeTargets) -> Result<(), GatewayError> {
        self.locked(|gateway| {
            let state = gateway.collaborators_mut()?;
            state.settlement_module = targets.settlement_module;
            state.exit_module = targets.exit_module;
            gateway.upgrade.reset();
            gateway.emit(GatewayEvent::UpgradeFinished);
            tracing::info!(target: "gateway", "upgrade finished, indirection targets swapped");
            Ok(())
        })
    }

    /// Whether the system may be upgraded: the negation of the emergency flag.
    /// Upgrades are never permitted while the system is in its emergency state.
    pub fn is_ready_for_upgrade(&self) -> Result<bool, GatewayError> {
        let state = self.state.as_ref().ok_or(GatewayError::NotInitialized)?;
        Ok(state.status.is_active())
    }

    /// Returns the upgrade-mode state.
    pub const fn upgrade_state(&self) -> &UpgradeState {
        &self.upgrade
    }

    /// Returns the priority-request ledger.
    pub const fn ledger(&self) -> &PriorityLedger {
        &self.ledger
    }

    /// Returns the stored block hash at the provided index. Index 0 holds the
    /// genesis anchor.
    pub fn stored_block_hash(&self, index: u64) -> Option<B256> {
        self.stored_block_hashes.get(&index).copied()
    }

    /// Returns the lifecycle state of the gateway.
    pub const fn lifecycle(&self) -> LifecycleState {
        self.lifecycle
    }

    /// Returns the chain id of the local chain.
    pub const fn local_chain_id(&self) -> ChainId {
        self.local_chain_id
    }

    /// Runs `f` under the reentrancy guard, releasing it on every exit path.
    fn locked<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, GatewayError>,
    ) -> Result<T, GatewayError> {
        self.guard.try_enter()?;
        let result = f(self);
        self.guard.exit();
        result
    }

    fn collaborators_mut(&mut self) -> Result<&mut Collaborators, GatewayError> {
        self.state.as_mut().ok_or(GatewayError::NotInitialized)
    }

    fn deposit_inner(
        &mut self,
        ctx: &CallContext,
        token: Address,
        amount: u128,
        owner: Address,
    ) -> Result<SequenceId, GatewayError> {
        if amount == 0 {
            return Err(GatewayError::ZeroAmount)
        }

        let chain_id = self.local_chain_id;
        let state = self.collaborators_mut()?;
        if !state.status.is_active() {
            return Err(GatewayError::Inactive)
        }
        let registered = state.token_registry.resolve(token)?;
        if registered.paused {
            return Err(GatewayError::TokenPaused(token))
        }

        state.vault.deposit(token, ctx.caller, amount)?;

        let op =
            DepositOp { chain_id, account_id: 0, owner, token_id: registered.token_id, amount };
        let sequence_id = self.register(ctx, op.into());
        self.emit(GatewayEvent::Deposit {
            sequence_id,
            owner,
            token_id: registered.token_id,
            amount,
        });

        Ok(sequence_id)
    }

    fn quick_swap_inner(
        &mut self,
        ctx: &CallContext,
        params: SwapParams,
    ) -> Result<SequenceId, GatewayError> {
        if params.amount_in == 0 {
            return Err(GatewayError::ZeroAmount)
        }

        let chain_id = self.local_chain_id;
        let state = self.collaborators_mut()?;
        if !state.status.is_active() {
            return Err(GatewayError::Inactive)
        }
        let registered = state.token_registry.resolve(params.token_in)?;
        if registered.paused {
            return Err(GatewayError::TokenPaused(params.token_in))
        }
        if params.to_chain_id == chain_id && params.to_token_id == registered.token_id {
            return Err(GatewayError::SameTokenSwap)
        }

        state.vault.deposit(params.token_in, ctx.caller, params.amount_in)?;

        let op = QuickSwapOp {
            from_chain_id: chain_id,
            to_chain_id: params.to_chain_id,
            owner: ctx.caller,
            from_token_id: registered.token_id,
            amount_in: params.amount_in,
            to: params.to,
            to_token_id: params.to_token_id,
            amount_out_min: params.amount_out_min,
            amount_out: 0,
            nonce: params.nonce,
            pair: params.pair,
            accept_token_id: params.accept_token_id,
            accept_amount_out_min: params.accept_amount_out_min,
        };
        let sequence_id = self.register(ctx, op.into());
        self.emit(GatewayEvent::QuickSwap {
            sequence_id,
            owner: ctx.caller,
            from_token_id: registered.token_id,
            amount_in: params.amount_in,
            to: params.to,
            to_chain_id: params.to_chain_id,
            to_token_id: params.to_token_id,
            nonce: params.nonce,
            pair: params.pair,
        });

        Ok(sequence_id)
    }

    fn add_liquidity_inner(
        &mut self,
        ctx: &CallContext,
        token: Address,
        amount: u128,
        to: Address,
        pair: Address,
        min_lp_amount: u128,
    ) -> Result<SequenceId, GatewayError> {
        if amount == 0 {
            return Err(GatewayError::ZeroAmount)
        }

        let chain_id = self.local_chain_id;
        let state = self.collaborators_mut()?;
        if !state.status.is_active() {
            return Err(GatewayError::Inactive)
        }
        let registered = state.token_registry.resolve(token)?;
        if registered.paused {
            return Err(GatewayError::TokenPaused(token))
        }

        let Collaborators { vault, nft_facility, .. } = state;
        let facility = nft_facility.as_mut().ok_or(GatewayError::NftFacilityUnavailable)?;

        vault.deposit(token, ctx.caller, amount)?;
        let nft_id = facility.mint_pending(to, registered.token_id, amount, pair, min_lp_amount)?;

        let op = L1AddLqOp {
            owner: to,
            chain_id,
            token_id: registered.token_id,
            amount,
            pair,
            min_lp_amount,
            lp_amount: 0,
            nft_id,
        };
        let sequence_id = self.register(ctx, op.into());
        self.emit(GatewayEvent::AddLiquidity {
            sequence_id,
            owner: to,
            token_id: registered.token_id,
            amount,
            pair,
            nft_id,
        });

        Ok(sequence_id)
    }

    fn remove_liquidity_inner(
        &mut self,
        ctx: &CallContext,
        nft_id: NftId,
        min_amount: u128,
    ) -> Result<SequenceId, GatewayError> {
        let chain_id = self.local_chain_id;
        let state = self.collaborators_mut()?;
        if !state.status.is_active() {
            return Err(GatewayError::Inactive)
        }

        let facility = state.nft_facility.as_mut().ok_or(GatewayError::NftFacilityUnavailable)?;
        let owner = facility.owner_of(nft_id)?;
        if owner != ctx.caller {
            return Err(GatewayError::NotPositionOwner(nft_id))
        }

        let position = facility.position(nft_id)?;
        facility.mark_pending_removal(nft_id)?;

        let op = L1RemoveLqOp {
            owner: ctx.caller,
            chain_id,
            token_id: position.token_id,
            min_amount,
            amount: 0,
            pair: position.pair,
            lp_amount: position.lp_amount,
            nft_id,
        };
        let sequence_id = self.register(ctx, op.into());
        self.emit(GatewayEvent::RemoveLiquidity {
            sequence_id,
            owner: ctx.caller,
            token_id: position.token_id,
            lp_amount: position.lp_amount,
            pair: position.pair,
            nft_id,
        });

        Ok(sequence_id)
    }

    fn full_exit_inner(
        &mut self,
        ctx: &CallContext,
        account_id: AccountId,
        token: Address,
    ) -> Result<SequenceId, GatewayError> {
        if account_id > MAX_ACCOUNT_ID {
            return Err(GatewayError::AccountIdTooLarge(account_id))
        }

        let chain_id = self.local_chain_id;
        let state = self.collaborators_mut()?;
        if !state.status.is_active() {
            return Err(GatewayError::Inactive)
        }
        let registered = state.token_registry.resolve(token)?;

        let op = FullExitOp {
            chain_id,
            account_id,
            owner: ctx.caller,
            token_id: registered.token_id,
            amount: 0,
        };
        let sequence_id = self.register(ctx, op.into());
        self.emit(GatewayEvent::FullExit {
            sequence_id,
            account_id,
            owner: ctx.caller,
            token_id: registered.token_id,
        });

        Ok(sequence_id)
    }

    /// Encodes the operation and appends it to the ledger. The terminal step of
    /// every registration path.
    fn register(&mut self, ctx: &CallContext, operation: Operation) -> SequenceId {
        let op_type = operation.op_type();
        let payload = operation.encode();
        let sequence_id = self.ledger.append(ctx.caller, op_type, payload, ctx.block_number);
        tracing::info!(target: "gateway", %op_type, sequence_id, caller = %ctx.caller, "registered priority request");
        sequence_id
    }

    fn emit(&self, event: GatewayEvent) {
        if self.events.send(Arc::new(event)).is_err() {
            tracing::warn!(target: "gateway", "domain event channel closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        MockDispatchTarget, MockNftFacility, MockSystemStatus, MockTokenRegistry, MockVault,
    };
    use alloy_primitives::{address, b256, bytes, fixed_bytes};
    use rollup_gateway_primitives::{pubdata_hash, OpType, PRIORITY_EXPIRATION};

    const LOCAL_CHAIN_ID: ChainId = 1;
    const TOKEN: Address = address!("1000000000000000000000000000000000000001");
    const PAUSED_TOKEN: Address = address!("1000000000000000000000000000000000000002");
    const ALICE: Address = address!("2000000000000000000000000000000000000001");
    const BOB: Address = address!("2000000000000000000000000000000000000002");
    const PAIR: Address = address!("3000000000000000000000000000000000000001");
    const GENESIS: B256 =
        b256!("00000000000000000000000000000000000000000000000000000000000000aa");

    struct Mocks {
        vault: MockVault,
        nft: MockNftFacility,
        status: MockSystemStatus,
        settlement: MockDispatchTarget,
    }

    fn setup() -> (Gateway, GatewayReceivers, Mocks) {
        let (mut gateway, receivers) =
            Gateway::new(GatewayConfig { local_chain_id: LOCAL_CHAIN_ID, first_sequence_id: 0 });

        let vault = MockVault::default();
        let registry = MockTokenRegistry::default()
            .with_token(TOKEN, 2, false)
            .with_token(PAUSED_TOKEN, 3, true);
        let nft = MockNftFacility::default();
        let status = MockSystemStatus::default();
        let settlement = MockDispatchTarget::new(bytes!("01"));

        gateway
            .initialize(InitializeInput {
                vault: Box::new(vault.clone()),
                token_registry: Box::new(registry),
                nft_facility: Some(Box::new(nft.clone())),
                status: Box::new(status.clone()),
                settlement_module: Box::new(settlement.clone()),
                exit_module: Box::new(MockDispatchTarget::new(bytes!("02"))),
                genesis_state_hash: GENESIS,
            })
            .expect("initialization should succeed");

        (gateway, receivers, Mocks { vault, nft, status, settlement })
    }

    fn ctx(caller: Address) -> CallContext {
        CallContext::new(caller, 100, 1_700_000_000)
    }

    fn swap_params() -> SwapParams {
        SwapParams {
            token_in: TOKEN,
            amount_in: 500,
            to: BOB,
            to_chain_id: 2,
            to_token_id: 7,
            amount_out_min: 450,
            nonce: 1,
            pair: PAIR,
            accept_token_id: 7,
            accept_amount_out_min: 440,
        }
    }

    #[test]
    fn test_should_register_deposit() {
        let (mut gateway, mut receivers, mocks) = setup();

        let sequence_id = gateway
            .deposit(&ctx(ALICE), TOKEN, 100, ALICE)
            .expect("deposit should succeed");

        assert_eq!(sequence_id, 0);
        assert_eq!(mocks.vault.deposits(), vec![(TOKEN, ALICE, 100)]);
        assert_eq!(gateway.ledger().total_open_requests(), 1);

        let notification =
            receivers.notifications.try_recv().expect("should publish a notification");
        assert_eq!(notification.op_type, OpType::Deposit);
        assert_eq!(notification.expiration_height, 100 + PRIORITY_EXPIRATION);

        let expected = DepositOp {
            chain_id: LOCAL_CHAIN_ID,
            account_id: 0,
            owner: ALICE,
            token_id: 2,
            amount: 100,
        };
        assert_eq!(notification.payload.to_vec(), expected.encode());

        let event = receivers.events.try_recv().expect("should publish a domain event");
        assert_eq!(
            *event,
            GatewayEvent::Deposit { sequence_id: 0, owner: ALICE, token_id: 2, amount: 100 }
        );
    }

    #[test]
    fn test_should_assign_dense_ids_across_action_kinds() {
        let (mut gateway, _receivers, mocks) = setup();
        let context = ctx(ALICE);
        mocks.nft.insert_position(
            9,
            ALICE,
            LiquidityPosition { token_id: 2, pair: PAIR, lp_amount: 300 },
        );

        let ids = vec![
            gateway.deposit(&context, TOKEN, 100, ALICE).unwrap(),
            gateway.quick_swap(&context, swap_params()).unwrap(),
            gateway.add_liquidity(&context, TOKEN, 200, BOB, PAIR, 150).unwrap(),
            gateway.remove_liquidity(&context, 9, 250).unwrap(),
            gateway.request_full_exit(&context, 5, TOKEN).unwrap(),
        ];

        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        assert_eq!(gateway.ledger().total_open_requests(), 5);
    }

    #[test]
    fn test_should_commit_digest_matching_notification_payload() {
        let (mut gateway, mut receivers, _mocks) = setup();

        let sequence_id = gateway.deposit(&ctx(ALICE), TOKEN, 100, ALICE).unwrap();

        let notification = receivers.notifications.try_recv().unwrap();
        let stored = gateway.ledger().get(sequence_id).expect("request should be stored");
        assert_eq!(stored.hashed_payload, pubdata_hash(&notification.payload));
    }

    #[test]
    fn test_should_reject_zero_amount_deposit() {
        let (mut gateway, mut receivers, mocks) = setup();

        let err = gateway.deposit(&ctx(ALICE), TOKEN, 0, ALICE).unwrap_err();

        assert_eq!(err, GatewayError::ZeroAmount);
        assert!(mocks.vault.deposits().is_empty());
        assert_eq!(gateway.ledger().total_open_requests(), 0);
        assert!(receivers.notifications.try_recv().is_err());
    }

    #[test]
    fn test_should_reject_paused_token_before_custody() {
        let (mut gateway, _receivers, mocks) = setup();

        let err = gateway.deposit(&ctx(ALICE), PAUSED_TOKEN, 100, ALICE).unwrap_err();

        assert_eq!(err, GatewayError::TokenPaused(PAUSED_TOKEN));
        assert!(mocks.vault.deposits().is_empty());
    }

    #[test]
    fn test_should_reject_when_inactive() {
        let (mut gateway, _receivers, mocks) = setup();
        mocks.status.set_active(false);

        let err = gateway.deposit(&ctx(ALICE), TOKEN, 100, ALICE).unwrap_err();

        assert_eq!(err, GatewayError::Inactive);
        assert!(mocks.vault.deposits().is_empty());
    }

    #[test]
    fn test_should_unwind_on_vault_failure() {
        let (mut gateway, mut receivers, mocks) = setup();
        mocks.vault.fail_next(VaultError::InexactTransfer { expected: 100, actual: 99 });

        let err = gateway.deposit(&ctx(ALICE), TOKEN, 100, ALICE).unwrap_err();

        assert_eq!(
            err,
            GatewayError::Vault(VaultError::InexactTransfer { expected: 100, actual: 99 })
        );
        assert_eq!(gateway.ledger().total_open_requests(), 0);
        assert!(receivers.notifications.try_recv().is_err());
        assert!(receivers.events.try_recv().is_err());
    }

    #[test]
    fn test_should_reject_same_chain_same_token_swap() {
        let (mut gateway, _receivers, mocks) = setup();
        // token id 2 is the local id of TOKEN.
        let params = SwapParams { to_chain_id: LOCAL_CHAIN_ID, to_token_id: 2, ..swap_params() };

        let err = gateway.quick_swap(&ctx(ALICE), params).unwrap_err();

        assert_eq!(err, GatewayError::SameTokenSwap);
        assert!(mocks.vault.deposits().is_empty());
        assert_eq!(gateway.ledger().total_open_requests(), 0);
    }

    #[test]
    fn test_should_allow_same_chain_swap_to_different_token() {
        let (mut gateway, _receivers, _mocks) = setup();
        let params = SwapParams { to_chain_id: LOCAL_CHAIN_ID, to_token_id: 7, ..swap_params() };

        gateway.quick_swap(&ctx(ALICE), params).expect("swap should succeed");
    }

    #[test]
    fn test_should_carry_minted_nft_id_in_add_liquidity() {
        let (mut gateway, mut receivers, _mocks) = setup();

        gateway.add_liquidity(&ctx(ALICE), TOKEN, 200, BOB, PAIR, 150).unwrap();

        let notification = receivers.notifications.try_recv().unwrap();
        let decoded = Operation::try_from_buf(
            notification.op_type,
            &mut notification.payload.as_ref(),
        )
        .expect("payload should decode");
        let Operation::AddLiquidity(op) = decoded else { panic!("expected add liquidity") };
        assert_eq!(op.owner, BOB);
        assert_eq!(op.nft_id, 0);
        assert_eq!(op.lp_amount, 0);
    }

    #[test]
    fn test_should_reject_remove_liquidity_by_non_owner() {
        let (mut gateway, _receivers, mocks) = setup();
        mocks.nft.insert_position(
            9,
            ALICE,
            LiquidityPosition { token_id: 2, pair: PAIR, lp_amount: 300 },
        );

        let err = gateway.remove_liquidity(&ctx(BOB), 9, 250).unwrap_err();

        assert_eq!(err, GatewayError::NotPositionOwner(9));
        assert!(mocks.nft.pending_removals().is_empty());
        assert_eq!(gateway.ledger().total_open_requests(), 0);
    }

    #[test]
    fn test_should_register_remove_liquidity_with_prior_position() {
        let (mut gateway, mut receivers, mocks) = setup();
        mocks.nft.insert_position(
            9,
            ALICE,
            LiquidityPosition { token_id: 2, pair: PAIR, lp_amount: 300 },
        );

        gateway.remove_liquidity(&ctx(ALICE), 9, 250).unwrap();

        assert_eq!(mocks.nft.pending_removals(), vec![9]);
        let notification = receivers.notifications.try_recv().unwrap();
        let expected = L1RemoveLqOp {
            owner: ALICE,
            chain_id: LOCAL_CHAIN_ID,
            token_id: 2,
            min_amount: 250,
            amount: 0,
            pair: PAIR,
            lp_amount: 300,
            nft_id: 9,
        };
        assert_eq!(notification.payload.to_vec(), expected.encode());
    }

    #[test]
    fn test_should_reject_oversized_account_id() {
        let (mut gateway, _receivers, _mocks) = setup();

        let err =
            gateway.request_full_exit(&ctx(ALICE), MAX_ACCOUNT_ID + 1, TOKEN).unwrap_err();

        assert_eq!(err, GatewayError::AccountIdTooLarge(MAX_ACCOUNT_ID + 1));
        assert_eq!(gateway.ledger().total_open_requests(), 0);
    }

    #[test]
    fn test_should_register_full_exit_without_custody() {
        let (mut gateway, mut receivers, mocks) = setup();

        gateway.request_full_exit(&ctx(ALICE), 5, TOKEN).unwrap();

        assert!(mocks.vault.deposits().is_empty());
        let notification = receivers.notifications.try_recv().unwrap();
        assert_eq!(notification.op_type, OpType::FullExit);
        let expected = FullExitOp {
            chain_id: LOCAL_CHAIN_ID,
            account_id: 5,
            owner: ALICE,
            token_id: 2,
            amount: 0,
        };
        assert_eq!(notification.payload.to_vec(), expected.encode());
    }

    #[test]
    fn test_should_release_guard_after_failed_call() {
        let (mut gateway, _receivers, _mocks) = setup();

        gateway.deposit(&ctx(ALICE), TOKEN, 0, ALICE).unwrap_err();
        gateway.deposit(&ctx(ALICE), TOKEN, 100, ALICE).expect("guard should be released");
    }

    #[test]
    fn test_should_reject_second_initialization() {
        let (mut gateway, _receivers, _mocks) = setup();

        let err = gateway
            .initialize(InitializeInput {
                vault: Box::new(MockVault::default()),
                token_registry: Box::new(MockTokenRegistry::default()),
                nft_facility: None,
                status: Box::new(MockSystemStatus::default()),
                settlement_module: Box::new(MockDispatchTarget::new(bytes!("01"))),
                exit_module: Box::new(MockDispatchTarget::new(bytes!("02"))),
                genesis_state_hash: GENESIS,
            })
            .unwrap_err();

        assert_eq!(err, GatewayError::AlreadyInitialized);
        assert_eq!(gateway.stored_block_hash(0), Some(GENESIS));
    }

    #[test]
    fn test_should_reject_handlers_before_initialization() {
        let (mut gateway, _receivers) =
            Gateway::new(GatewayConfig { local_chain_id: LOCAL_CHAIN_ID, first_sequence_id: 0 });

        let err = gateway.deposit(&ctx(ALICE), TOKEN, 100, ALICE).unwrap_err();
        assert_eq!(err, GatewayError::NotInitialized);
    }

    #[test]
    fn test_should_forward_unmatched_calls_to_settlement_module() {
        let (mut gateway, _receivers, mocks) = setup();
        let call = RawCall::new(fixed_bytes!("deadbeef"), bytes!("0102"));

        let response = gateway.fallback(&ctx(ALICE), call.clone()).unwrap();

        assert_eq!(response, bytes!("01"));
        assert_eq!(mocks.settlement.calls(), vec![call]);
    }

    #[test]
    fn test_should_forward_calls_with_empty_payload() {
        let (mut gateway, _receivers, mocks) = setup();
        let call = RawCall::empty(fixed_bytes!("deadbeef"));

        gateway.fallback(&ctx(ALICE), call.clone()).unwrap();

        assert_eq!(mocks.settlement.calls(), vec![call]);
    }

    #[test]
    fn test_should_track_upgrade_lifecycle() {
        let (mut gateway, _receivers, _mocks) = setup();
        let context = ctx(ALICE);

        gateway.upgrade_notice_started();
        assert!(!gateway.upgrade_state().preparation_active());

        gateway.upgrade_preparation_started(&context).unwrap();
        assert!(gateway.upgrade_state().preparation_active());
        assert_eq!(gateway.upgrade_state().activation_time(), Some(context.block_timestamp));

        gateway.upgrade_canceled().unwrap();
        assert!(!gateway.upgrade_state().preparation_active());
        assert_eq!(gateway.upgrade_state().activation_time(), None);
    }

    #[test]
    fn test_should_swap_dispatch_targets_on_upgrade_finish() {
        let (mut gateway, _receivers, mocks) = setup();
        let context = ctx(ALICE);
        let new_settlement = MockDispatchTarget::new(bytes!("aa"));

        gateway.upgrade_preparation_started(&context).unwrap();
        gateway
            .upgrade_finished(UpgradeTargets {
                settlement_module: Box::new(new_settlement.clone()),
                exit_module: Box::new(MockDispatchTarget::new(bytes!("bb"))),
            })
            .unwrap();

        assert!(!gateway.upgrade_state().preparation_active());

        let call = RawCall::empty(fixed_bytes!("deadbeef"));
        let response = gateway.fallback(&context, call.clone()).unwrap();
        assert_eq!(response, bytes!("aa"));
        assert_eq!(new_settlement.calls(), vec![call]);
        assert!(mocks.settlement.calls().is_empty());
    }

    #[test]
    fn test_should_gate_upgrade_readiness_on_emergency_flag() {
        let (gateway, _receivers, mocks) = setup();

        assert_eq!(gateway.is_ready_for_upgrade(), Ok(true));
        mocks.status.set_active(false);
        assert_eq!(gateway.is_ready_for_upgrade(), Ok(false));
    }
}
