pub mod builder;
pub mod encode;
pub mod error;
pub mod handles;
pub mod index_spec;
pub mod kv;
pub mod memory;
pub mod range;
pub mod request;
pub mod session;

pub use builder::RequestBuilder;
pub use encode::{index_ranges_to_key_ranges, index_spec_ranges_to_key_ranges, row_handles_to_key_ranges, row_ranges_to_key_ranges};
pub use error::{BuildError, RangeError};
pub use handles::{coalesce_handles, HandleRun};
pub use index_spec::{IndexKeyPart, IndexSpec};
pub use kv::{IsolationLevel, KeyRange, KindPolicy, Priority, RequestKind};
pub use memory::MemTracker;
pub use range::{Bound, LogicalRange};
pub use request::{RequestDescriptor, RequestPayload};
pub use session::{SessionVars, StatementContext, StatementPriority};

pub use distsql_codec::{Datum, EncodeError, FieldType, Key};
