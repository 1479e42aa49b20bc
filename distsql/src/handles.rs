use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::RangeError;

/// Contiguous inclusive run of handles `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandleRun {
    pub start: i64,
    pub end: i64,
}

impl HandleRun {
    pub fn new(start: i64, end: i64) -> Self { Self { start, end } }

    pub fn single(handle: i64) -> Self { Self { start: handle, end: handle } }
}

/// Groups strictly ascending, distinct handles into maximal contiguous runs, in ascending order.
///
/// Out-of-order or duplicate input is rejected, never reordered.
pub fn coalesce_handles(handles: &[i64]) -> Result<Vec<HandleRun>, RangeError> {
    let mut runs: Vec<HandleRun> = Vec::new();
    for (position, &handle) in handles.iter().enumerate() {
        if let Some(run) = runs.last_mut() {
            if handle <= run.end {
                return Err(RangeError::UnorderedHandles { position, previous: run.end, handle });
            }
            // checked_add: a run ending at i64::MAX can never be extended
            if run.end.checked_add(1) == Some(handle) {
                run.end = handle;
                continue;
            }
        }
        runs.push(HandleRun::single(handle));
    }
    trace!("coalesced {} handles into {} runs", handles.len(), runs.len());
    Ok(runs)
}
