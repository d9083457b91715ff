/// The entry point was re-entered while a state-mutating call was in flight.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("reentrant call")]
pub struct ReentrantCall;

/// An explicit call-depth flag guarding the gateway's state-mutating entry points.
///
/// A nested call triggered from a collaborator (a token implementation calling back
/// into the gateway mid-transfer) must be rejected outright: an interleaved reentrant
/// call could append a ledger entry referencing custody not yet finalized. The flag
/// is released on every exit path, including failure.
#[derive(Debug, Default)]
pub struct ReentrancyGuard {
    entered: bool,
}

impl ReentrancyGuard {
    /// Acquires the guard, rejecting the call if it is already held.
    pub fn try_enter(&mut self) -> Result<(), ReentrantCall> {
        if self.entered {
            return Err(ReentrantCall)
        }
        self.entered = true;
        Ok(())
    }

    /// Releases the guard.
    pub fn exit(&mut self) {
        self.entered = false;
    }

    /// Whether the guard is currently held.
    pub const fn is_entered(&self) -> bool {
        self.entered
    }
}
