use alloy_primitives::Address;

/// The host-environment view of the current call.
///
/// The host serializes all state-mutating calls into a strict global order, so a
/// context describes exactly one call from exactly one caller.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CallContext {
    /// The caller of the entry point.
    pub caller: Address,
    /// The L1 block height the call executes at.
    pub block_number: u64,
    /// The timestamp of the block the call executes at.
    pub block_timestamp: u64,
}

impl CallContext {
    /// Returns a new instance of [`CallContext`].
    pub const fn new(caller: Address, block_number: u64, block_timestamp: u64) -> Self {
        Self { caller, block_number, block_timestamp }
    }
}
