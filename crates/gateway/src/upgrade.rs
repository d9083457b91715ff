/// The upgrade-mode state tracked by the gateway.
///
/// Mutated only by the upgrade lifecycle transitions delivered by the external
/// upgrade coordinator: notice-started is a pure acknowledgment, preparation-started
/// activates the state, and cancel/finish both reset it. The notice-period duration
/// is the published [`rollup_gateway_primitives::UPGRADE_NOTICE_PERIOD`] constant,
/// not mutable state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UpgradeState {
    preparation_active: bool,
    activation_time: Option<u64>,
}

impl UpgradeState {
    /// Whether the preparation phase is currently active.
    pub const fn preparation_active(&self) -> bool {
        self.preparation_active
    }

    /// The timestamp the preparation phase was activated at, if active.
    pub const fn activation_time(&self) -> Option<u64> {
        self.activation_time
    }

    /// Activates the preparation phase at the provided timestamp.
    pub(crate) fn start_preparation(&mut self, timestamp: u64) {
        self.preparation_active = true;
        self.activation_time = Some(timestamp);
    }

    /// Resets the state to inactive, on cancel or finish.
    pub(crate) fn reset(&mut self) {
        self.preparation_active = false;
        self.activation_time = None;
    }
}
