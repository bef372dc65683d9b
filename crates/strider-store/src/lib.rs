//! # strider-store: Simulated Backend for Strider OMS
//!
//! This crate provides the data-access layer for Strider OMS. Every
//! external collaborator the portal needs is a trait here, implemented
//! in-memory for the prototype.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Strider OMS Data Flow                             │
//! │                                                                         │
//! │  Portal service (submit_order)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   strider-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐   │   │
//! │  │   │CatalogProvider│    │   OrderSink   │    │ Geolocation  │   │   │
//! │  │   │  (trait)      │    │   (trait)     │    │Source (trait)│   │   │
//! │  │   │               │    │               │    │              │   │   │
//! │  │   │InMemoryCatalog│    │ AcceptingSink │    │FixedPosition │   │   │
//! │  │   │ + seed data   │    │ RejectingSink │    │DeniedPosition│   │   │
//! │  │   └───────────────┘    └───────┬───────┘    │NoGeolocation │   │   │
//! │  │                                │            └──────────────┘   │   │
//! │  │   ┌───────────────┐    ┌───────▼───────┐    ┌──────────────┐   │   │
//! │  │   │ ProductStore  │    │  OrderStore   │    │ Credential   │   │   │
//! │  │   │ (admin CRUD)  │    │ (admin CRUD)  │    │Verifier(trait│   │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Process memory only - nothing survives a restart (prototype scope)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`] - Catalog fetch contract and in-memory implementation
//! - [`orders`] - Submitted order collection (admin side)
//! - [`products`] - Catalog mutation (admin side)
//! - [`submit`] - Order acceptance sink
//! - [`geo`] - Geolocation capability
//! - [`session`] - Credential verification and session tokens
//! - [`seed`] - Reference data set
//! - [`error`] - Store error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod geo;
pub mod orders;
pub mod products;
pub mod seed;
pub mod session;
pub mod submit;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::{CatalogProvider, InMemoryCatalog};
pub use error::{StoreError, StoreResult};
pub use geo::{
    resolve_fix, Coordinates, DeniedPosition, FixedPosition, GeoError, GeolocationSource,
    NoGeolocation,
};
pub use orders::{OrderFilter, OrderStore};
pub use products::{ProductForm, ProductStore};
pub use session::{
    AuthError, CredentialVerifier, SessionContext, SessionToken, StaticCredentials,
};
pub use submit::{AcceptingSink, OrderReceipt, OrderSink, RejectingSink, SubmitError};
