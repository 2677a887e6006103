use crate::attributes::types::AttributeError;
use thiserror::Error;

/// Unified error type for the crate's fallible surfaces.
///
/// Query-time evaluation is total and never returns these; only mutations
/// and the snapshot serialization surface can fail.
#[derive(Debug, Error)]
pub enum AttrGateError {
    /// Attribute or user mutation failures.
    #[error("Attribute error: {0}")]
    Attribute(#[from] AttributeError),

    /// Snapshot serialization/deserialization failures.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
