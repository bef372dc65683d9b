//! # Strider OMS Portal
//!
//! Application layer wiring the two user-facing surfaces over the core
//! domain and the simulated backend.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Strider OMS Architecture                            │
//! │                                                                         │
//! │  ┌──────────────────┐              ┌──────────────────┐                 │
//! │  │   SalesPortal    │              │   AdminPortal    │                 │
//! │  │  ─────────────   │              │  ─────────────   │                 │
//! │  │  browse catalog  │              │  login/sessions  │                 │
//! │  │  build draft     │              │  order workflow  │                 │
//! │  │  submit order ───┼──────┐       │  product CRUD    │                 │
//! │  └────────┬─────────┘      │       │  analytics       │                 │
//! │           │                │       └────────┬─────────┘                 │
//! │           ▼                ▼                ▼                           │
//! │  ┌──────────────────────────────────────────────────────┐              │
//! │  │                  strider-store                        │              │
//! │  │   CatalogProvider  OrderSink  OrderStore  ...         │              │
//! │  └──────────────────────────┬───────────────────────────┘              │
//! │                             ▼                                           │
//! │  ┌──────────────────────────────────────────────────────┐              │
//! │  │                  strider-core                         │              │
//! │  │   Money  OrderDraft  analytics  validation            │              │
//! │  └──────────────────────────────────────────────────────┘              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod admin;
pub mod config;
pub mod error;
pub mod sales;
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use admin::AdminPortal;
pub use config::PortalConfig;
pub use error::{ApiError, ErrorCode};
pub use sales::SalesPortal;
pub use session::DraftState;

use tracing_subscriber::EnvFilter;

/// Initializes structured logging.
///
/// Default filter shows info-level for our crates; override with the
/// standard `RUST_LOG` variable.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,strider_core=debug,strider_store=debug,strider_portal=debug")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
