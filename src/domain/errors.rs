use thiserror::Error;

/// Failures the return workflow can surface to a caller.
///
/// Every variant is user-presentable; nothing is swallowed inside the
/// workflow engine. `DuplicateIdentifier` is internal plumbing: the store
/// raises it when a freshly drawn RMA number collides with an existing row,
/// and the workflow consumes it by redrawing the identifier.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Order does not belong to customer")]
    Forbidden,

    #[error("{0}")]
    Ineligible(String),

    #[error("Identifier generation retries exhausted")]
    IdentifierExhausted,

    #[error("Failed to generate fulfillment artifact: {0}")]
    FulfillmentArtifact(String),

    #[error("Unsupported return method: {0}")]
    UnsupportedMethod(String),

    #[error("Duplicate identifier")]
    DuplicateIdentifier,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
