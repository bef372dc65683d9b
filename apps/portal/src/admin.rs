//! # Admin Portal
//!
//! The back-office surface: order management, catalog management, and
//! sales analytics. Every operation requires a live session token minted
//! by [`AdminPortal::login`].
//!
//! ## Session Gate
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Admin Access Control                               │
//! │                                                                         │
//! │  login(user, pass) ──► CredentialVerifier ──► SessionContext (token)    │
//! │                                                       │                 │
//! │  every admin call(token, ...) ──► authorize(token) ───┘                 │
//! │       │                                                                 │
//! │       ├── token live ──► operation runs                                 │
//! │       └── unknown token ──► UNAUTHORIZED, operation never starts        │
//! │                                                                         │
//! │  logout(token) evicts the session; the token is dead from then on.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use strider_core::analytics::{
    self, LocationSales, Period, PeriodRevenue, ProductSales, SalesSummary,
};
use strider_core::types::{Order, OrderStatus, PaymentStatus, Product, ProductId};
use strider_store::{
    CredentialVerifier, OrderFilter, OrderStore, ProductForm, ProductStore, SessionContext,
    SessionToken,
};
use tracing::{info, instrument};

use crate::error::ApiError;

// =============================================================================
// Admin Portal
// =============================================================================

/// The admin-side service facade.
pub struct AdminPortal {
    verifier: Arc<dyn CredentialVerifier>,
    orders: Arc<OrderStore>,
    products: ProductStore,
    sessions: Mutex<HashMap<String, SessionContext>>,
}

impl AdminPortal {
    /// Builds the portal over its collaborators. No session exists until
    /// the first successful login.
    pub fn new(
        verifier: Arc<dyn CredentialVerifier>,
        orders: Arc<OrderStore>,
        products: ProductStore,
    ) -> Self {
        AdminPortal {
            verifier,
            orders,
            products,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    // =========================================================================
    // Sessions
    // =========================================================================

    /// Verifies credentials and mints a session.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionContext, ApiError> {
        let username = self.verifier.verify(username, password).await?;
        let session = SessionContext::start(username);
        self.sessions
            .lock()
            .expect("session map mutex poisoned")
            .insert(session.token.as_str().to_string(), session.clone());
        Ok(session)
    }

    /// Ends a session. Returns `false` if the token was already dead.
    pub fn logout(&self, token: &SessionToken) -> bool {
        let evicted = self
            .sessions
            .lock()
            .expect("session map mutex poisoned")
            .remove(token.as_str())
            .is_some();
        if evicted {
            info!("admin session ended");
        }
        evicted
    }

    /// Checks that a token belongs to a live session.
    fn authorize(&self, token: &SessionToken) -> Result<(), ApiError> {
        if self
            .sessions
            .lock()
            .expect("session map mutex poisoned")
            .contains_key(token.as_str())
        {
            Ok(())
        } else {
            Err(ApiError::unauthorized("no active session for this token"))
        }
    }

    // =========================================================================
    // Order Management
    // =========================================================================

    /// Orders matching the filter, most recent first.
    pub fn list_orders(
        &self,
        token: &SessionToken,
        filter: &OrderFilter,
    ) -> Result<Vec<Order>, ApiError> {
        self.authorize(token)?;
        Ok(self.orders.list_filtered(filter))
    }

    /// One order with full line detail.
    pub fn get_order(&self, token: &SessionToken, id: &str) -> Result<Order, ApiError> {
        self.authorize(token)?;
        Ok(self.orders.get(id)?)
    }

    /// Moves an order through the fulfilment workflow. Transitions the
    /// status table forbids are rejected; re-sending the current status
    /// is a no-op.
    pub fn set_order_status(
        &self,
        token: &SessionToken,
        id: &str,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        self.authorize(token)?;
        Ok(self.orders.set_status(id, status)?)
    }

    /// Sets the payment status directly.
    pub fn set_payment_status(
        &self,
        token: &SessionToken,
        id: &str,
        status: PaymentStatus,
    ) -> Result<Order, ApiError> {
        self.authorize(token)?;
        Ok(self.orders.set_payment_status(id, status)?)
    }

    /// Flips payment between Pending and Completed.
    pub fn toggle_payment_status(
        &self,
        token: &SessionToken,
        id: &str,
    ) -> Result<Order, ApiError> {
        self.authorize(token)?;
        Ok(self.orders.toggle_payment_status(id)?)
    }

    /// Deletes an order permanently. Requires `confirmed`; an unconfirmed
    /// call does nothing and returns `false`.
    pub fn delete_order(
        &self,
        token: &SessionToken,
        id: &str,
        confirmed: bool,
    ) -> Result<bool, ApiError> {
        self.authorize(token)?;
        if !confirmed {
            return Ok(false);
        }
        self.orders.delete(id)?;
        Ok(true)
    }

    // =========================================================================
    // Product Management
    // =========================================================================

    /// The catalog as the admin sees it.
    pub fn list_products(&self, token: &SessionToken) -> Result<Vec<Product>, ApiError> {
        self.authorize(token)?;
        Ok(self.products.list())
    }

    /// Creates a product from form input. Edits are immediately visible
    /// to the sales portal's next catalog fetch.
    pub fn add_product(
        &self,
        token: &SessionToken,
        form: ProductForm,
    ) -> Result<Product, ApiError> {
        self.authorize(token)?;
        Ok(self.products.add(form)?)
    }

    /// Replaces an existing product's fields from form input.
    pub fn update_product(
        &self,
        token: &SessionToken,
        id: ProductId,
        form: ProductForm,
    ) -> Result<Product, ApiError> {
        self.authorize(token)?;
        Ok(self.products.update(id, form)?)
    }

    /// Deletes a product. Requires `confirmed`, like order deletion.
    /// Past orders keep their snapshotted lines either way.
    pub fn delete_product(
        &self,
        token: &SessionToken,
        id: ProductId,
        confirmed: bool,
    ) -> Result<bool, ApiError> {
        self.authorize(token)?;
        if !confirmed {
            return Ok(false);
        }
        self.products.delete(id)?;
        Ok(true)
    }

    // =========================================================================
    // Analytics
    // =========================================================================

    /// Headline totals across all non-cancelled orders.
    pub fn sales_summary(&self, token: &SessionToken) -> Result<SalesSummary, ApiError> {
        self.authorize(token)?;
        Ok(analytics::summarize(&self.orders.list()))
    }

    /// Revenue trend bucketed by day, week, or month.
    pub fn revenue_trend(
        &self,
        token: &SessionToken,
        period: Period,
    ) -> Result<Vec<PeriodRevenue>, ApiError> {
        self.authorize(token)?;
        Ok(analytics::revenue_by_period(&self.orders.list(), period))
    }

    /// Revenue distribution across submission locations.
    pub fn sales_by_location(&self, token: &SessionToken) -> Result<Vec<LocationSales>, ApiError> {
        self.authorize(token)?;
        Ok(analytics::location_breakdown(&self.orders.list()))
    }

    /// Best sellers ranked by units, at most `limit` rows.
    pub fn top_products(
        &self,
        token: &SessionToken,
        limit: usize,
    ) -> Result<Vec<ProductSales>, ApiError> {
        self.authorize(token)?;
        Ok(analytics::top_products(&self.orders.list(), limit))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
