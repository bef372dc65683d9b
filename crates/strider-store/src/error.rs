//! # Store Error Types
//!
//! Error types for the in-memory store layer.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Store Error Flow                                   │
//! │                                                                         │
//! │  OrderStore / ProductStore operation                                    │
//! │       │                                                                 │
//! │       ├── entity missing ────────────► StoreError::NotFound             │
//! │       ├── business rule violated ────► StoreError::Domain(CoreError)    │
//! │       │   (illegal status transition, bad form input)                   │
//! │       ▼                                                                 │
//! │  Portal service maps StoreError → ApiError for callers                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use strider_core::CoreError;
use thiserror::Error;

/// Errors surfaced by the in-memory stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Lookup by id found nothing.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A domain rule rejected the operation.
    #[error(transparent)]
    Domain(#[from] CoreError),
}

impl StoreError {
    /// Shorthand for a NotFound with a displayable id.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        StoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
