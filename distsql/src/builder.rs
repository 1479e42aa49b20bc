use std::sync::Arc;

use tracing::debug;

use crate::encode::{index_ranges_to_key_ranges, index_spec_ranges_to_key_ranges, row_handles_to_key_ranges, row_ranges_to_key_ranges};
use crate::error::{BuildError, RangeError};
use crate::index_spec::IndexSpec;
use crate::kv::{IsolationLevel, KeyRange, Priority, RequestKind};
use crate::memory::MemTracker;
use crate::range::LogicalRange;
use crate::request::{RequestDescriptor, RequestPayload};
use crate::session::{SessionVars, DEF_DISTSQL_SCAN_CONCURRENCY};

/// Where the request's key ranges come from. Conversion is deferred to `build`.
#[derive(Debug, Clone)]
enum KeyRangeSource {
    Raw(Vec<KeyRange>),
    Handles { table_id: i64, handles: Vec<i64> },
    TableRanges { table_id: i64, ranges: Vec<LogicalRange> },
    IndexRanges { table_id: i64, index_id: i64, ranges: Vec<LogicalRange> },
    IndexSpecRanges { table_id: i64, spec: IndexSpec, ranges: Vec<LogicalRange> },
}

impl KeyRangeSource {
    fn to_key_ranges(&self) -> Result<Vec<KeyRange>, RangeError> {
        match self {
            KeyRangeSource::Raw(key_ranges) => Ok(key_ranges.clone()),
            KeyRangeSource::Handles { table_id, handles } => row_handles_to_key_ranges(*table_id, handles),
            KeyRangeSource::TableRanges { table_id, ranges } => row_ranges_to_key_ranges(*table_id, ranges),
            KeyRangeSource::IndexRanges { table_id, index_id, ranges } => index_ranges_to_key_ranges(*table_id, *index_id, ranges),
            KeyRangeSource::IndexSpecRanges { table_id, spec, ranges } => index_spec_ranges_to_key_ranges(*table_id, spec, ranges),
        }
    }
}

/// Policy values taken from session variables. `None` means the session expressed no preference.
#[derive(Debug, Clone, Copy)]
struct SessionDefaults {
    concurrency: usize,
    isolation_level: Option<IsolationLevel>,
    priority: Option<Priority>,
    not_fill_cache: Option<bool>,
}

/// Where a built request's memory tracker hangs. A fresh child is attached on every `build`.
#[derive(Debug, Clone)]
struct TrackerSlot {
    parent: Option<Arc<MemTracker>>,
    label: String,
    bytes_limit: i64,
}

impl TrackerSlot {
    fn attach(&self) -> Arc<MemTracker> {
        match &self.parent {
            Some(parent) => parent.attach_child(self.label.as_str(), self.bytes_limit),
            None => MemTracker::new(self.label.as_str(), self.bytes_limit),
        }
    }
}

/// Accumulates the inputs of a storage request.
///
/// Setters may be called in any order and later calls replace earlier ones for the same concern.
/// Nothing is validated or converted until [`RequestBuilder::build`], which resolves each policy field as:
/// explicit setter, then session variables, then the request kind's default.
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    ranges: Option<KeyRangeSource>,
    payload: Option<(RequestKind, RequestPayload)>,
    keep_order: bool,
    desc: bool,
    streaming: bool,
    sync_log: bool,
    concurrency: Option<usize>,
    isolation_level: Option<IsolationLevel>,
    priority: Option<Priority>,
    not_fill_cache: Option<bool>,
    session: Option<SessionDefaults>,
    mem_tracker: Option<TrackerSlot>,
}

impl RequestBuilder {
    pub fn new() -> Self { Self::default() }

    // --- Key ranges ---------------------------------------------------------

    pub fn set_key_ranges(mut self, key_ranges: Vec<KeyRange>) -> Self {
        self.ranges = Some(KeyRangeSource::Raw(key_ranges));
        self
    }

    /// Rows by handle; `handles` must be strictly ascending.
    pub fn set_table_handles(mut self, table_id: i64, handles: &[i64]) -> Self {
        self.ranges = Some(KeyRangeSource::Handles { table_id, handles: handles.to_vec() });
        self
    }

    pub fn set_table_ranges(mut self, table_id: i64, ranges: &[LogicalRange]) -> Self {
        self.ranges = Some(KeyRangeSource::TableRanges { table_id, ranges: ranges.to_vec() });
        self
    }

    pub fn set_index_ranges(mut self, table_id: i64, index_id: i64, ranges: &[LogicalRange]) -> Self {
        self.ranges = Some(KeyRangeSource::IndexRanges { table_id, index_id, ranges: ranges.to_vec() });
        self
    }

    /// Index ranges whose bound values are coerced to the index column types.
    pub fn set_index_spec_ranges(mut self, table_id: i64, spec: &IndexSpec, ranges: &[LogicalRange]) -> Self {
        self.ranges = Some(KeyRangeSource::IndexSpecRanges { table_id, spec: spec.clone(), ranges: ranges.to_vec() });
        self
    }

    // --- Payload ------------------------------------------------------------

    pub fn set_payload(mut self, kind: RequestKind, payload: RequestPayload) -> Self {
        self.payload = Some((kind, payload));
        self
    }

    pub fn set_scan_request(self, payload: RequestPayload) -> Self { self.set_payload(RequestKind::Scan, payload) }

    pub fn set_analyze_request(self, payload: RequestPayload) -> Self { self.set_payload(RequestKind::Analyze, payload) }

    pub fn set_checksum_request(self, payload: RequestPayload) -> Self { self.set_payload(RequestKind::Checksum, payload) }

    // --- Execution flags ----------------------------------------------------

    pub fn set_desc(mut self, desc: bool) -> Self {
        self.desc = desc;
        self
    }

    pub fn set_keep_order(mut self, keep_order: bool) -> Self {
        self.keep_order = keep_order;
        self
    }

    pub fn set_streaming(mut self, streaming: bool) -> Self {
        self.streaming = streaming;
        self
    }

    pub fn set_sync_log(mut self, sync_log: bool) -> Self {
        self.sync_log = sync_log;
        self
    }

    pub fn set_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = Some(concurrency);
        self
    }

    pub fn set_isolation_level(mut self, isolation_level: IsolationLevel) -> Self {
        self.isolation_level = Some(isolation_level);
        self
    }

    pub fn set_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn set_not_fill_cache(mut self, not_fill_cache: bool) -> Self {
        self.not_fill_cache = Some(not_fill_cache);
        self
    }

    /// Takes scan concurrency, isolation level, statement priority and the statement's cache flag from
    /// the session. Values the session does not ask for fall back to the request kind's defaults.
    pub fn set_from_session_vars(mut self, vars: &SessionVars) -> Self {
        self.session = Some(SessionDefaults {
            concurrency: vars.distsql_scan_concurrency,
            isolation_level: vars.requested_isolation_level(),
            priority: vars.stmt_ctx.priority.kv_priority(),
            not_fill_cache: vars.stmt_ctx.not_fill_cache.then_some(true),
        });
        self
    }

    /// Tracks result memory under `label`, as a child of the statement's tracker when it has one.
    /// Each built descriptor gets its own tracker.
    pub fn set_mem_tracker(mut self, vars: &SessionVars, label: &str) -> Self {
        self.mem_tracker =
            Some(TrackerSlot { parent: vars.stmt_ctx.mem_tracker.clone(), label: label.to_string(), bytes_limit: vars.mem_quota_distsql });
        self
    }

    // --- Finalize -----------------------------------------------------------

    /// Converts pending ranges and resolves every policy field into a new descriptor.
    ///
    /// The builder is left untouched, so building twice yields equal descriptors.
    pub fn build(&self) -> Result<RequestDescriptor, BuildError> {
        let (kind, payload) = self.payload.as_ref().ok_or(BuildError::MissingPayload)?;
        let key_ranges = match &self.ranges {
            Some(source) => source.to_key_ranges()?,
            None => Vec::new(),
        };

        let policy = kind.default_policy();
        let session = self.session.as_ref();
        let descriptor = RequestDescriptor {
            kind: *kind,
            start_ts: payload.start_ts,
            data: payload.data.clone(),
            key_ranges,
            keep_order: self.keep_order,
            desc: self.desc,
            concurrency: self.concurrency.or(session.map(|s| s.concurrency)).unwrap_or(DEF_DISTSQL_SCAN_CONCURRENCY),
            isolation_level: self.isolation_level.or(session.and_then(|s| s.isolation_level)).unwrap_or(policy.isolation_level),
            priority: self.priority.or(session.and_then(|s| s.priority)).unwrap_or(policy.priority),
            not_fill_cache: self.not_fill_cache.or(session.and_then(|s| s.not_fill_cache)).unwrap_or(policy.not_fill_cache),
            sync_log: self.sync_log,
            streaming: self.streaming,
            mem_tracker: self.mem_tracker.as_ref().map(TrackerSlot::attach),
        };

        debug!(
            "RequestBuilder.build: {:?} start_ts={} ranges={} concurrency={} isolation={:?} priority={:?} not_fill_cache={}",
            descriptor.kind,
            descriptor.start_ts,
            descriptor.key_ranges.len(),
            descriptor.concurrency,
            descriptor.isolation_level,
            descriptor.priority,
            descriptor.not_fill_cache
        );
        Ok(descriptor)
    }
}
