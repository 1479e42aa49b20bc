use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};

use tracing::warn;

/// Hierarchical memory accounting. Bytes consumed by a tracker are also charged to every ancestor.
///
/// Trackers compare by label, limit and parent identity; consumption counters are not compared.
#[derive(Debug)]
pub struct MemTracker {
    label: String,
    /// Negative means unlimited
    bytes_limit: i64,
    bytes_consumed: AtomicI64,
    max_consumed: AtomicI64,
    parent: Option<Arc<MemTracker>>,
}

impl MemTracker {
    pub fn new<S: Into<String>>(label: S, bytes_limit: i64) -> Arc<Self> {
        Arc::new(Self { label: label.into(), bytes_limit, bytes_consumed: AtomicI64::new(0), max_consumed: AtomicI64::new(0), parent: None })
    }

    /// Creates a tracker whose consumption is also charged to `self`.
    pub fn attach_child<S: Into<String>>(self: &Arc<Self>, label: S, bytes_limit: i64) -> Arc<MemTracker> {
        Arc::new(Self {
            label: label.into(),
            bytes_limit,
            bytes_consumed: AtomicI64::new(0),
            max_consumed: AtomicI64::new(0),
            parent: Some(self.clone()),
        })
    }

    /// Charges `bytes` (negative to release) to this tracker and its ancestors.
    pub fn consume(&self, bytes: i64) {
        let mut tracker = Some(self);
        while let Some(t) = tracker {
            let consumed = t.bytes_consumed.fetch_add(bytes, Ordering::Relaxed) + bytes;
            t.max_consumed.fetch_max(consumed, Ordering::Relaxed);
            if t.bytes_limit >= 0 && consumed > t.bytes_limit && bytes > 0 {
                warn!("MemTracker({}) over quota: {} > {} bytes", t.label, consumed, t.bytes_limit);
            }
            tracker = t.parent.as_deref();
        }
    }

    pub fn label(&self) -> &str { &self.label }

    pub fn bytes_limit(&self) -> i64 { self.bytes_limit }

    pub fn bytes_consumed(&self) -> i64 { self.bytes_consumed.load(Ordering::Relaxed) }

    pub fn max_consumed(&self) -> i64 { self.max_consumed.load(Ordering::Relaxed) }

    pub fn exceeds_limit(&self) -> bool { self.bytes_limit >= 0 && self.bytes_consumed() > self.bytes_limit }

    pub fn parent(&self) -> Option<&Arc<MemTracker>> { self.parent.as_ref() }
}

impl PartialEq for MemTracker {
    fn eq(&self, other: &Self) -> bool {
        let same_parent = match (&self.parent, &other.parent) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        self.label == other.label && self.bytes_limit == other.bytes_limit && same_parent
    }
}
