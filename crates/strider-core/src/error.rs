//! # Error Types
//!
//! Domain-specific error types for strider-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  strider-core errors (this file)                                        │
//! │  ├── CoreError        - General domain errors                           │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  strider-store errors (separate crate)                                  │
//! │  ├── StoreError       - In-memory collection failures                   │
//! │  ├── SubmitError      - Order sink rejections                           │
//! │  └── GeoError/AuthError - External capability failures                  │
//! │                                                                         │
//! │  Portal errors (in app)                                                 │
//! │  └── ApiError         - What callers see (serialized)                   │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError → caller     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (order id, status, index, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::types::OrderStatus;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Draft submitted or finalized without a selected shop.
    #[error("No shop selected for this order")]
    NoShopSelected,

    /// Draft submitted with zero line items.
    #[error("Cannot submit an empty order")]
    EmptyOrder,

    /// Line item index out of range for `remove_item`.
    #[error("No order line at index {index} (draft has {len} lines)")]
    LineOutOfRange { index: usize, len: usize },

    /// Draft has exceeded maximum allowed line items.
    #[error("Order cannot have more than {max} line items")]
    DraftTooLarge { max: usize },

    /// Item quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Order status change that the transition table forbids.
    ///
    /// ## When This Occurs
    /// - Reopening a Completed order
    /// - Any change to a Cancelled order
    #[error("Cannot move order from {from:?} to {to:?}")]
    IllegalStatusTransition { from: OrderStatus, to: OrderStatus },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., unparseable price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::LineOutOfRange { index: 3, len: 2 };
        assert_eq!(err.to_string(), "No order line at index 3 (draft has 2 lines)");

        let err = CoreError::IllegalStatusTransition {
            from: OrderStatus::Completed,
            to: OrderStatus::New,
        };
        assert_eq!(err.to_string(), "Cannot move order from Completed to New");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "size".to_string(),
        };
        assert_eq!(err.to_string(), "size is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "size".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
