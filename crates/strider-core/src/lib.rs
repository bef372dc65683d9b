//! # strider-core: Pure Business Logic for Strider OMS
//!
//! This crate is the **heart** of Strider OMS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Strider OMS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Portal Services (apps/portal)                │   │
//! │  │    Catalog browse ──► Draft build ──► Submit ──► Admin views   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ strider-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   draft   │  │ analytics │  │   │
//! │  │   │  Product  │  │   Money   │  │OrderDraft │  │  revenue  │  │   │
//! │  │   │   Order   │  │  parsing  │  │ OrderItem │  │  buckets  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                strider-store (Simulated Backend)                │   │
//! │  │           in-memory catalog, order store, sink, geo              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Shop, Order, statuses, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`draft`] - Order draft assembly (the order builder)
//! - [`analytics`] - Sales aggregations over the order collection
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and database access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use strider_core::money::Money;
//!
//! // Create money from cents (never from floats!)
//! let price = Money::from_cents(1599); // $15.99
//!
//! // Line math is exact integer arithmetic
//! let subtotal = price.multiply_quantity(5);
//! assert_eq!(subtotal.cents(), 7995); // $79.95
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod analytics;
pub mod draft;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use strider_core::Money` instead of
// `use strider_core::money::Money`.

pub use draft::{DraftSummary, OrderDraft};
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum line items allowed in a single order draft.
///
/// ## Business Reason
/// Prevents runaway drafts and keeps field orders a reasonable size.
/// Can be made configurable per distributor in future versions.
pub const MAX_DRAFT_ITEMS: usize = 100;

/// Maximum quantity of a single line item.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Image path used when a product is created without one.
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";
