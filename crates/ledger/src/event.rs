use alloy_primitives::{Address, Bytes};
use rollup_gateway_primitives::{OpType, SequenceId};

/// The low-level notification published once per ledger append.
///
/// Carries the full encoded payload so the settlement consumer can reconstruct the
/// operation off-chain; the ledger itself only stores the payload's digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityNotification {
    /// The caller the registration was executed for.
    pub caller: Address,
    /// The sequence id assigned to the request.
    pub sequence_id: SequenceId,
    /// The kind of the registered operation.
    pub op_type: OpType,
    /// The canonical encoded payload.
    pub payload: Bytes,
    /// The height after which the unsettled request becomes eligible to trigger the
    /// emergency fallback.
    pub expiration_height: u64,
}
