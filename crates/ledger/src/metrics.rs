use metrics::Counter;
use metrics_derive::Metrics;
use rollup_gateway_primitives::OpType;

/// The metrics for the [`super::PriorityLedger`].
#[derive(Metrics)]
#[metrics(scope = "priority_ledger")]
pub struct LedgerMetrics {
    /// A counter on the appended priority requests.
    pub appended_requests: Counter,
    /// A counter on the appended deposits.
    pub deposits: Counter,
    /// A counter on the appended full exits.
    pub full_exits: Counter,
    /// A counter on the appended quick swaps.
    pub quick_swaps: Counter,
    /// A counter on the appended liquidity provisionings.
    pub add_liquidity: Counter,
    /// A counter on the appended liquidity withdrawals.
    pub remove_liquidity: Counter,
}

impl LedgerMetrics {
    /// Processed an append by updating the appropriate metrics.
    pub fn process_append(&self, op_type: OpType) {
        self.appended_requests.increment(1);
        match op_type {
            OpType::Deposit => self.deposits.increment(1),
            OpType::FullExit => self.full_exits.increment(1),
            OpType::QuickSwap => self.quick_swaps.increment(1),
            OpType::L1AddLq => self.add_liquidity.increment(1),
            OpType::L1RemoveLq => self.remove_liquidity.increment(1),
        }
    }
}
