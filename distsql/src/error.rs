use distsql_codec::EncodeError;
use thiserror::Error;

/// Failure converting logical ranges or handles into key ranges. No partial output accompanies it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodeError),
    #[error("Handles must be strictly ascending: handle {handle} at position {position} follows {previous}")]
    UnorderedHandles { position: usize, previous: i64, handle: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error("Request has no payload; set a scan, analyze or checksum request before building")]
    MissingPayload,
}
