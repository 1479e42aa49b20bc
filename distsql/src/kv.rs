use distsql_codec::Key;
use serde::{Deserialize, Serialize};

/// Half-open key interval `[start_key, end_key)`.
///
/// A range whose start equals its end selects nothing but is still a valid scan segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyRange {
    pub start_key: Key,
    pub end_key: Key,
}

impl KeyRange {
    pub fn new(start_key: Key, end_key: Key) -> Self { Self { start_key, end_key } }

    pub fn is_empty(&self) -> bool { self.start_key >= self.end_key }

    /// True when the range covers exactly one key.
    pub fn is_point(&self) -> bool { self.end_key == self.start_key.prefix_next() }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestKind {
    /// DAG pipeline read
    Scan,
    /// Statistics collection
    Analyze,
    /// Consistency verification
    Checksum,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IsolationLevel {
    #[default]
    SnapshotIsolation,
    ReadCommitted,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    Normal,
    Low,
    High,
}

/// Policy a request kind runs under unless overridden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindPolicy {
    pub isolation_level: IsolationLevel,
    pub priority: Priority,
    pub not_fill_cache: bool,
}

impl RequestKind {
    /// Request type code understood by the storage coprocessor.
    pub fn code(&self) -> i64 {
        match self {
            RequestKind::Scan => 103,
            RequestKind::Analyze => 104,
            RequestKind::Checksum => 105,
        }
    }

    /// Analyze and checksum are one-off full scans: they bypass the block cache, and analyze also
    /// reads committed data at low priority so it never waits on writers' locks.
    pub fn default_policy(&self) -> KindPolicy {
        match self {
            RequestKind::Scan => {
                KindPolicy { isolation_level: IsolationLevel::SnapshotIsolation, priority: Priority::Normal, not_fill_cache: false }
            }
            RequestKind::Analyze => {
                KindPolicy { isolation_level: IsolationLevel::ReadCommitted, priority: Priority::Low, not_fill_cache: true }
            }
            RequestKind::Checksum => {
                KindPolicy { isolation_level: IsolationLevel::SnapshotIsolation, priority: Priority::Normal, not_fill_cache: true }
            }
        }
    }
}
