use thiserror::Error;

/// Errors raised by attribute and user mutations.
///
/// Query-side lookups never produce these: an unknown item or branch id
/// degrades to "no permission" because the catalogs are open-world.
#[derive(Debug, Clone, Error)]
pub enum AttributeError {
    /// Draft rejected before any write: empty label, empty selection,
    /// or a duplicate item id within one mapping.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Mutation addressed an attribute or user id that does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Store lock was poisoned by a panicking writer.
    #[error("Internal error: {0}")]
    Internal(String),
}
