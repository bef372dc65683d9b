//! # API Error Type
//!
//! Unified error type for portal operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Strider OMS                            │
//! │                                                                         │
//! │  Caller                      Portal Service                             │
//! │  ──────                      ──────────────                             │
//! │                                                                         │
//! │  submit_order(...)                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Service Method                                                  │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Draft invalid? ──── CoreError::EmptyOrder ─────────┐           │  │
//! │  │         │                                           │           │  │
//! │  │         ▼                                           ▼           │  │
//! │  │  Sink refused? ───── SubmitError::Rejected ────── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Every ApiError carries a machine code and a display message.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use strider_core::CoreError;
use strider_store::{AuthError, StoreError, SubmitError};

/// API error returned from portal operations.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "order not found: 1009"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Business rule rejected the operation (422)
    BusinessLogic,

    /// Draft manipulation failed
    OrderError,

    /// The order sink refused the submission
    SubmitFailed,

    /// Missing or invalid session / bad credentials (401)
    Unauthorized,

    /// Internal error (500)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Unauthorized, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            // Missing shop / empty order are validation failures: the rep
            // corrects the draft and retries
            CoreError::NoShopSelected | CoreError::EmptyOrder => {
                ApiError::validation(err.to_string())
            }
            CoreError::LineOutOfRange { .. } | CoreError::DraftTooLarge { .. } => {
                ApiError::new(ErrorCode::OrderError, err.to_string())
            }
            CoreError::QuantityTooLarge { .. } => ApiError::validation(err.to_string()),
            CoreError::IllegalStatusTransition { .. } => {
                ApiError::new(ErrorCode::BusinessLogic, err.to_string())
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => ApiError::not_found(entity, &id),
            StoreError::Domain(e) => e.into(),
        }
    }
}

/// Converts sink rejections to API errors.
impl From<SubmitError> for ApiError {
    fn from(err: SubmitError) -> Self {
        ApiError::new(ErrorCode::SubmitFailed, err.to_string())
    }
}

/// Converts auth failures to API errors.
impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::unauthorized(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use strider_core::types::OrderStatus;

    #[test]
    fn test_store_not_found_maps_to_not_found() {
        let err: ApiError = StoreError::not_found("order", "1009").into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "order not found: 1009");
    }

    #[test]
    fn test_illegal_transition_is_business_logic() {
        let err: ApiError = StoreError::Domain(CoreError::IllegalStatusTransition {
            from: OrderStatus::Completed,
            to: OrderStatus::New,
        })
        .into();
        assert_eq!(err.code, ErrorCode::BusinessLogic);
    }

    #[test]
    fn test_draft_readiness_failures_are_validation_errors() {
        let err: ApiError = CoreError::EmptyOrder.into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Cannot submit an empty order");

        let err: ApiError = CoreError::NoShopSelected.into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::not_found("product", "42");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "product not found: 42");
    }
}
