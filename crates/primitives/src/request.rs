use crate::{OpType, PubdataHash, SequenceId};

/// A priority request recorded in the ledger.
///
/// Created only by the registration protocol and immutable afterwards. The request
/// stores a digest of the canonical payload, not the payload itself; the full bytes
/// travel in the ledger notification for off-chain reconstruction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PriorityRequest {
    /// The strictly increasing sequence id assigned at registration.
    pub sequence_id: SequenceId,
    /// The digest of the canonical encoded payload.
    pub hashed_payload: PubdataHash,
    /// The kind of the registered operation.
    pub op_type: OpType,
    /// The L1 block height after which the unsettled request becomes eligible to
    /// trigger the emergency fallback.
    pub expiration_height: u64,
}

impl PriorityRequest {
    /// Returns a new instance of [`PriorityRequest`].
    pub const fn new(
        sequence_id: SequenceId,
        hashed_payload: PubdataHash,
        op_type: OpType,
        expiration_height: u64,
    ) -> Self {
        Self { sequence_id, hashed_payload, op_type, expiration_height }
    }

    /// Whether the request is past its expiration at the provided height.
    pub const fn is_expired(&self, current_height: u64) -> bool {
        current_height > self.expiration_height
    }
}

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for PriorityRequest {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        Ok(Self {
            sequence_id: u.arbitrary::<u32>()? as u64,
            hashed_payload: u.arbitrary()?,
            op_type: u.arbitrary()?,
            expiration_height: u.arbitrary::<u32>()? as u64,
        })
    }
}
