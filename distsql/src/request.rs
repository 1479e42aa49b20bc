use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::kv::{IsolationLevel, KeyRange, Priority, RequestKind};
use crate::memory::MemTracker;

/// An already serialized executor plan plus the snapshot it reads at. The bytes are never inspected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestPayload {
    pub start_ts: u64,
    pub data: Vec<u8>,
}

impl RequestPayload {
    pub fn new(start_ts: u64, data: Vec<u8>) -> Self { Self { start_ts, data } }
}

/// A fully resolved storage request, produced by [`crate::RequestBuilder::build`].
///
/// Fields are read-only; the descriptor can be shared freely between dispatch workers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestDescriptor {
    pub(crate) kind: RequestKind,
    pub(crate) start_ts: u64,
    pub(crate) data: Vec<u8>,
    pub(crate) key_ranges: Vec<KeyRange>,
    pub(crate) keep_order: bool,
    pub(crate) desc: bool,
    pub(crate) concurrency: usize,
    pub(crate) isolation_level: IsolationLevel,
    pub(crate) priority: Priority,
    pub(crate) not_fill_cache: bool,
    pub(crate) sync_log: bool,
    pub(crate) streaming: bool,
    #[serde(skip)]
    pub(crate) mem_tracker: Option<Arc<MemTracker>>,
}

impl RequestDescriptor {
    pub fn kind(&self) -> RequestKind { self.kind }

    /// Wire type code of [`Self::kind`]
    pub fn tp(&self) -> i64 { self.kind.code() }

    pub fn start_ts(&self) -> u64 { self.start_ts }

    pub fn data(&self) -> &[u8] { &self.data }

    pub fn key_ranges(&self) -> &[KeyRange] { &self.key_ranges }

    pub fn keep_order(&self) -> bool { self.keep_order }

    pub fn desc(&self) -> bool { self.desc }

    pub fn concurrency(&self) -> usize { self.concurrency }

    pub fn isolation_level(&self) -> IsolationLevel { self.isolation_level }

    pub fn priority(&self) -> Priority { self.priority }

    pub fn not_fill_cache(&self) -> bool { self.not_fill_cache }

    pub fn sync_log(&self) -> bool { self.sync_log }

    pub fn streaming(&self) -> bool { self.streaming }

    pub fn mem_tracker(&self) -> Option<&Arc<MemTracker>> { self.mem_tracker.as_ref() }
}
