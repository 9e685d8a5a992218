//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::node::NodeKind;

/// Domain errors represent violations of the chart model.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{kind} name must not be empty")]
    EmptyName { kind: NodeKind },

    #[error("committee nesting exceeds limit of {limit} levels at: {name}")]
    DepthExceeded { name: String, limit: usize },

    #[error("invalid chart definition: {message}")]
    InvalidDefinition { message: String },
}
