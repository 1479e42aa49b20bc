use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::kv::{IsolationLevel, Priority};
use crate::memory::MemTracker;

pub const DEF_DISTSQL_SCAN_CONCURRENCY: usize = 15;
pub const DEF_MEM_QUOTA_DISTSQL: i64 = 32 << 30;
pub const DEF_TX_ISOLATION: &str = "REPEATABLE-READ";
pub const READ_COMMITTED: &str = "READ-COMMITTED";

/// Session variables the request builder reads defaults from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionVars {
    pub distsql_scan_concurrency: usize,
    pub tx_isolation: String,
    pub mem_quota_distsql: i64,
    pub stmt_ctx: StatementContext,
}

/// Per-statement state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementContext {
    pub not_fill_cache: bool,
    pub priority: StatementPriority,
    #[serde(skip)]
    pub mem_tracker: Option<Arc<MemTracker>>,
}

/// Priority modifier written on the statement (`SELECT HIGH_PRIORITY ...`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatementPriority {
    #[default]
    NoPriority,
    Low,
    High,
    Delayed,
}

impl Default for SessionVars {
    fn default() -> Self {
        Self {
            distsql_scan_concurrency: DEF_DISTSQL_SCAN_CONCURRENCY,
            tx_isolation: DEF_TX_ISOLATION.to_string(),
            mem_quota_distsql: DEF_MEM_QUOTA_DISTSQL,
            stmt_ctx: StatementContext::default(),
        }
    }
}

impl SessionVars {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> { serde_json::from_str(json) }

    /// Isolation level the session asks for, if it departs from snapshot isolation.
    pub fn requested_isolation_level(&self) -> Option<IsolationLevel> {
        if self.tx_isolation.eq_ignore_ascii_case(READ_COMMITTED) {
            Some(IsolationLevel::ReadCommitted)
        } else {
            None
        }
    }
}

impl StatementPriority {
    /// Storage priority requested by the statement; `None` leaves the request kind's default.
    pub fn kv_priority(self) -> Option<Priority> {
        match self {
            StatementPriority::NoPriority | StatementPriority::Delayed => None,
            StatementPriority::Low => Some(Priority::Low),
            StatementPriority::High => Some(Priority::High),
        }
    }
}
