use distsql_codec::FieldType;
use serde::{Deserialize, Serialize};

/// Secondary index identity plus the column types its key is built from, in key order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexSpec {
    pub index_id: i64,
    pub keyparts: Vec<IndexKeyPart>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexKeyPart {
    pub column: String,
    pub field_type: FieldType, // Expected type for this key component
}

impl IndexKeyPart {
    pub fn new<S: Into<String>>(column: S, field_type: FieldType) -> Self { Self { column: column.into(), field_type } }
}

impl IndexSpec {
    pub fn new(index_id: i64, keyparts: Vec<IndexKeyPart>) -> Self { Self { index_id, keyparts } }

    pub fn field_types(&self) -> Vec<FieldType> { self.keyparts.iter().map(|k| k.field_type).collect() }

    /// Name like `idx_15(name,age)`, handy in logs.
    pub fn name(&self) -> String {
        let columns: Vec<&str> = self.keyparts.iter().map(|k| k.column.as_str()).collect();
        format!("idx_{}({})", self.index_id, columns.join(","))
    }
}
