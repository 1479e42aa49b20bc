use distsql_codec::Datum;
use serde::{Deserialize, Serialize};

use crate::handles::HandleRun;

/// One endpoint of a logical range: a column tuple plus whether the endpoint itself is excluded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    pub values: Vec<Datum>,
    pub exclusive: bool,
}

impl Bound {
    pub fn incl<V: Into<Vec<Datum>>>(values: V) -> Self { Self { values: values.into(), exclusive: false } }
    pub fn excl<V: Into<Vec<Datum>>>(values: V) -> Self { Self { values: values.into(), exclusive: true } }
}

/// Value interval over one or more columns, as produced by range analysis of a predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicalRange {
    pub low: Bound,
    pub high: Bound,
}

impl LogicalRange {
    pub fn new(low: Bound, high: Bound) -> Self { Self { low, high } }

    /// `[low, high]`
    pub fn inclusive<V: Into<Vec<Datum>>>(low: V, high: V) -> Self { Self { low: Bound::incl(low), high: Bound::incl(high) } }

    /// Exactly the tuple `values`.
    pub fn point<V: Into<Vec<Datum>>>(values: V) -> Self {
        let values = values.into();
        Self { low: Bound::incl(values.clone()), high: Bound::incl(values) }
    }

    /// Every handle of a table.
    pub fn full_int() -> Self { Self::inclusive(vec![Datum::Int(i64::MIN)], vec![Datum::Int(i64::MAX)]) }
}

impl From<HandleRun> for LogicalRange {
    fn from(run: HandleRun) -> Self { LogicalRange::inclusive(vec![Datum::Int(run.start)], vec![Datum::Int(run.end)]) }
}
