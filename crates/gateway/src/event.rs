use alloy_primitives::Address;
use rollup_gateway_primitives::{AccountId, ChainId, NftId, Nonce, SequenceId, TokenId};

/// A domain event describing a gateway action for indexers.
///
/// Distinct from the ledger's low-level [`rollup_gateway_ledger::PriorityNotification`]:
/// these carry the human-relevant subset of fields and are not consumed by the
/// settlement process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayEvent {
    /// A deposit was registered.
    Deposit {
        /// The assigned sequence id.
        sequence_id: SequenceId,
        /// The layer-2 recipient of the deposit.
        owner: Address,
        /// The layer-2 id of the deposited token.
        token_id: TokenId,
        /// The deposited amount.
        amount: u128,
    },
    /// A cross-chain swap was registered.
    QuickSwap {
        /// The assigned sequence id.
        sequence_id: SequenceId,
        /// The initiator of the swap.
        owner: Address,
        /// The layer-2 id of the input token.
        from_token_id: TokenId,
        /// The exact input amount pulled into custody.
        amount_in: u128,
        /// The recipient of the swap output.
        to: Address,
        /// The chain the swap output settles to.
        to_chain_id: ChainId,
        /// The layer-2 id of the output token.
        to_token_id: TokenId,
        /// The caller-supplied nonce.
        nonce: Nonce,
        /// The pair address the swap is routed through.
        pair: Address,
    },
    /// A liquidity provisioning was registered.
    AddLiquidity {
        /// The assigned sequence id.
        sequence_id: SequenceId,
        /// The recipient of the liquidity-position NFT.
        owner: Address,
        /// The layer-2 id of the provided token.
        token_id: TokenId,
        /// The provided amount.
        amount: u128,
        /// The pair address the liquidity is added to.
        pair: Address,
        /// The id of the pending liquidity-position NFT.
        nft_id: NftId,
    },
    /// A liquidity withdrawal was registered.
    RemoveLiquidity {
        /// The assigned sequence id.
        sequence_id: SequenceId,
        /// The owner of the withdrawn position.
        owner: Address,
        /// The layer-2 id of the position's token.
        token_id: TokenId,
        /// The amount of LP tokens held by the position.
        lp_amount: u128,
        /// The pair address the liquidity is removed from.
        pair: Address,
        /// The id of the position NFT pending removal.
        nft_id: NftId,
    },
    /// A forced exit was registered.
    FullExit {
        /// The assigned sequence id.
        sequence_id: SequenceId,
        /// The layer-2 account id the exit drains.
        account_id: AccountId,
        /// The L1 owner the exited funds are released to.
        owner: Address,
        /// The layer-2 id of the exited token.
        token_id: TokenId,
    },
    /// The upgrade preparation phase was activated.
    UpgradePreparationStarted {
        /// The timestamp the preparation phase was activated at.
        activation_time: u64,
    },
    /// The pending upgrade was canceled.
    UpgradeCanceled,
    /// The pending upgrade was finished and the indirection targets swapped.
    UpgradeFinished,
}
