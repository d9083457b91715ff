//! The priority-request ledger for the rollup bridge gateway.
//!
//! An append-only, digest-committed store of L1-originated actions awaiting
//! settlement. Sequence ids are dense and gapless: the next id is always
//! `first_sequence_id + total_open_requests`, and the ledger exposes no mutation or
//! deletion surface. Entries are logically retired by the settlement consumer's own
//! bookkeeping.

pub use event::PriorityNotification;
mod event;

pub use metrics::LedgerMetrics;
mod metrics;

use alloy_primitives::Address;
use rollup_gateway_primitives::{
    pubdata_hash, OpType, PriorityRequest, SequenceId, PRIORITY_EXPIRATION,
};
use std::{collections::BTreeMap, sync::Arc};
use tokio::sync::mpsc;

/// The append-only indexed store of priority requests.
#[derive(Debug)]
pub struct PriorityLedger {
    /// The sequence id assigned to the first request.
    first_sequence_id: SequenceId,
    /// The count of requests appended since `first_sequence_id`.
    total_open_requests: u64,
    /// The appended requests, keyed by sequence id.
    requests: BTreeMap<SequenceId, PriorityRequest>,
    /// The sender part of the channel for [`PriorityNotification`].
    sender: mpsc::UnboundedSender<Arc<PriorityNotification>>,
    /// The metrics for the ledger.
    metrics: LedgerMetrics,
}

impl PriorityLedger {
    /// Returns a new ledger starting at the provided sequence id, along with the
    /// receiver half of its notification channel.
    pub fn new(
        first_sequence_id: SequenceId,
    ) -> (Self, mpsc::UnboundedReceiver<Arc<PriorityNotification>>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let ledger = Self {
            first_sequence_id,
            total_open_requests: 0,
            requests: BTreeMap::new(),
            sender,
            metrics: LedgerMetrics::default(),
        };
        (ledger, receiver)
    }

    /// Appends an encoded payload to the ledger and returns the assigned sequence id.
    ///
    /// Stores only the payload's digest, publishes a [`PriorityNotification`]
    /// carrying the full payload, and increments the open-request counter. This is
    /// the terminal, side-effect-only step of every registration path and never
    /// fails: a closed notification channel is logged and ignored, the digest
    /// commitment is already durable.
    pub fn append(
        &mut self,
        caller: Address,
        op_type: OpType,
        payload: Vec<u8>,
        current_height: u64,
    ) -> SequenceId {
        let sequence_id = self.next_sequence_id();
        let expiration_height = current_height + PRIORITY_EXPIRATION;
        let hashed_payload = pubdata_hash(&payload);

        let request = PriorityRequest::new(sequence_id, hashed_payload, op_type, expiration_height);
        self.requests.insert(sequence_id, request);

        let notification = PriorityNotification {
            caller,
            sequence_id,
            op_type,
            payload: payload.into(),
            expiration_height,
        };
        if self.sender.send(Arc::new(notification)).is_err() {
            tracing::warn!(target: "gateway::ledger", sequence_id, "notification channel closed");
        }

        self.total_open_requests += 1;
        self.metrics.process_append(op_type);

        sequence_id
    }

    /// Returns the request stored at the provided sequence id.
    pub fn get(&self, sequence_id: SequenceId) -> Option<&PriorityRequest> {
        self.requests.get(&sequence_id)
    }

    /// Returns the sequence id the next append will be assigned.
    pub const fn next_sequence_id(&self) -> SequenceId {
        self.first_sequence_id + self.total_open_requests
    }

    /// Returns the sequence id assigned to the first request.
    pub const fn first_sequence_id(&self) -> SequenceId {
        self.first_sequence_id
    }

    /// Returns the count of requests appended since the first sequence id.
    pub const fn total_open_requests(&self) -> u64 {
        self.total_open_requests
    }

    /// Whether the request at the provided sequence id is past its expiration.
    /// Returns `None` for an unknown id. Expiry is evaluated lazily; the ledger
    /// never blocks, polls or retires entries itself.
    pub fn is_expired(&self, sequence_id: SequenceId, current_height: u64) -> Option<bool> {
        self.requests.get(&sequence_id).map(|request| request.is_expired(current_height))
    }
}
