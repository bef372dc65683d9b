//! # Sales Portal
//!
//! The field-rep surface: browse the catalog, pick a shop, build an order
//! draft, and submit it.
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Order Submission Flow                              │
//! │                                                                         │
//! │  submit_order(payment_method, notes)                                    │
//! │       │                                                                 │
//! │       ├── 1. claim submission slot (reject double-submit; draft         │
//! │       │      mutators refuse while the slot is held)                    │
//! │       ├── 2. draft.ready_for_submission()  ── fail fast, draft intact   │
//! │       ├── 3. resolve geolocation fix       ── memoized once per session │
//! │       │      (failure degrades to a sentinel, never blocks)             │
//! │       ├── 4. build OrderSubmission payload                              │
//! │       ├── 5. sink.submit(payload).await                                 │
//! │       │        │                                                        │
//! │       │        ├── Ok(receipt) ──► clear draft, return receipt          │
//! │       │        └── Err(..) ──────► draft preserved for retry            │
//! │       └── 6. release slot (all paths)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use strider_core::types::{OrderSubmission, PaymentMethod, Product, Shop};
use strider_core::validation::validate_search_query;
use strider_core::{DraftSummary, OrderDraft};
use strider_store::{resolve_fix, CatalogProvider, GeolocationSource, OrderReceipt, OrderSink};
use tracing::{info, instrument, warn};

use crate::error::{ApiError, ErrorCode};
use crate::session::DraftState;

// =============================================================================
// Sales Portal
// =============================================================================

/// The sales-side service facade.
///
/// Holds one rep session: catalog access, the draft, and the submission
/// path. Collaborators are trait objects so tests can swap sinks and
/// geolocation sources freely.
pub struct SalesPortal {
    catalog: Arc<dyn CatalogProvider>,
    sink: Arc<dyn OrderSink>,
    geo: Arc<dyn GeolocationSource>,
    state: DraftState,
}

/// Releases the submission slot when the attempt ends, whichever way.
struct SubmissionSlot<'a>(&'a DraftState);

impl Drop for SubmissionSlot<'_> {
    fn drop(&mut self) {
        self.0.end_submission();
    }
}

impl SalesPortal {
    /// Starts a new sales session over the given collaborators.
    pub fn new(
        catalog: Arc<dyn CatalogProvider>,
        sink: Arc<dyn OrderSink>,
        geo: Arc<dyn GeolocationSource>,
    ) -> Self {
        SalesPortal {
            catalog,
            sink,
            geo,
            state: DraftState::new(),
        }
    }

    // =========================================================================
    // Catalog Browsing
    // =========================================================================

    /// Products matching a search term (name or description, case
    /// insensitive). An empty term returns the whole catalog.
    pub async fn search_products(&self, query: &str) -> Result<Vec<Product>, ApiError> {
        let query = validate_search_query(query)
            .map_err(strider_core::CoreError::from)
            .map_err(ApiError::from)?;

        let products = self.catalog.fetch_products().await?;
        Ok(products.into_iter().filter(|p| p.matches(&query)).collect())
    }

    /// All shops a rep can sell to.
    pub async fn list_shops(&self) -> Result<Vec<Shop>, ApiError> {
        Ok(self.catalog.fetch_shops().await?)
    }

    // =========================================================================
    // Draft Building
    // =========================================================================

    /// Refuses draft mutations while a submission holds the slot. The
    /// submission path reads the draft and clears it in two separate lock
    /// acquisitions; a mutation in between would be lost unsent.
    fn ensure_draft_unlocked(&self) -> Result<(), ApiError> {
        if self.state.submission_in_flight() {
            return Err(ApiError::new(
                ErrorCode::OrderError,
                "The draft is locked while a submission is in flight",
            ));
        }
        Ok(())
    }

    /// Selects (or switches) the shop the draft is for. Existing draft
    /// lines are kept; only the destination changes.
    pub async fn select_shop(&self, shop_id: u32) -> Result<Shop, ApiError> {
        self.ensure_draft_unlocked()?;
        let shop = self.catalog.get_shop(shop_id).await?;
        self.state.with_draft_mut(|draft| draft.select_shop(shop.clone()));
        info!(shop_id, shop = %shop.name, "shop selected");
        Ok(shop)
    }

    /// Adds a line to the draft, snapshotting the product's current name
    /// and price. The size must be one the product actually carries.
    pub async fn add_to_order(
        &self,
        product_id: u32,
        size: &str,
        quantity: i64,
    ) -> Result<DraftSummary, ApiError> {
        self.ensure_draft_unlocked()?;
        let product = self.catalog.get_product(product_id).await?;

        let size = size.trim();
        if product.stock_for(size).is_none() {
            return Err(ApiError::validation(format!(
                "{} is not offered in size '{}'",
                product.name, size
            )));
        }

        self.state.with_draft_mut(|draft| {
            draft.add_item(product.id, &product.name, size, quantity, product.price)
        })?;

        info!(product_id, size, quantity, "line added to draft");
        Ok(self.draft_summary())
    }

    /// Removes one draft line by position.
    pub fn remove_from_order(&self, index: usize) -> Result<DraftSummary, ApiError> {
        self.ensure_draft_unlocked()?;
        let removed = self.state.with_draft_mut(|draft| draft.remove_item(index))?;
        info!(index, product = %removed.product_name, "line removed from draft");
        Ok(self.draft_summary())
    }

    /// A copy of the current draft for display.
    pub fn get_draft(&self) -> OrderDraft {
        self.state.with_draft(|draft| draft.clone())
    }

    /// Current draft totals.
    pub fn draft_summary(&self) -> DraftSummary {
        self.state.with_draft(|draft| DraftSummary::from(draft))
    }

    /// Abandons the draft. Destructive, so it requires `confirmed`;
    /// an unconfirmed call leaves the draft untouched and returns `false`.
    pub fn cancel_order(&self, confirmed: bool) -> Result<bool, ApiError> {
        self.ensure_draft_unlocked()?;
        if !confirmed {
            return Ok(false);
        }
        self.state.with_draft_mut(|draft| draft.clear());
        info!("draft cancelled");
        Ok(true)
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Finalizes the draft and hands it to the order sink.
    ///
    /// On acceptance the draft is cleared; on any failure it is left
    /// intact so the rep can fix or retry. Only one submission may be in
    /// flight at a time, and the draft is locked against mutation until
    /// the attempt ends: exactly what was snapshotted is what clears.
    #[instrument(skip(self, notes))]
    pub async fn submit_order(
        &self,
        payment_method: PaymentMethod,
        notes: Option<String>,
    ) -> Result<OrderReceipt, ApiError> {
        if !self.state.begin_submission() {
            warn!("submission rejected: one already in flight");
            return Err(ApiError::new(
                ErrorCode::OrderError,
                "An order submission is already in progress",
            ));
        }
        let _slot = SubmissionSlot(&self.state);

        // Fail fast before touching geolocation
        let submission = self.state.with_draft(|draft| {
            let shop = draft.ready_for_submission()?;
            Ok::<_, strider_core::CoreError>(OrderSubmission {
                shop_id: shop.id,
                shop_name: shop.name.clone(),
                payment_method,
                notes: notes.as_deref().map(str::trim).filter(|n| !n.is_empty()).map(String::from),
                location: String::new(), // filled in below
                total_amount: draft.total(),
                items: draft.items().to_vec(),
            })
        })?;

        let fix = match self.state.cached_fix() {
            Some(fix) => fix,
            None => {
                let fix = resolve_fix(self.geo.as_ref()).await;
                self.state.store_fix(fix);
                fix
            }
        };
        let submission = OrderSubmission {
            location: fix.to_string(),
            ..submission
        };

        info!(
            shop = %submission.shop_name,
            items = submission.items.len(),
            total_cents = submission.total_amount.cents(),
            payment = %submission.payment_method,
            "submitting order"
        );

        match self.sink.submit(submission).await {
            Ok(receipt) => {
                self.state.with_draft_mut(|draft| draft.clear());
                info!(order_id = %receipt.order_id, "order accepted, draft cleared");
                Ok(receipt)
            }
            Err(err) => {
                warn!(error = %err, "submission refused, draft preserved");
                Err(err.into())
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use strider_store::{AcceptingSink, FixedPosition, InMemoryCatalog, OrderStore};

    fn portal() -> (SalesPortal, Arc<OrderStore>) {
        let store = Arc::new(OrderStore::empty());
        let portal = SalesPortal::new(
            Arc::new(InMemoryCatalog::new()),
            Arc::new(AcceptingSink::new(Arc::clone(&store))),
            Arc::new(FixedPosition::colombo()),
        );
        (portal, store)
    }

    #[tokio::test]
    async fn test_search_filters_catalog() {
        let (portal, _) = portal();

        let all = portal.search_products("").await.unwrap();
        assert_eq!(all.len(), 4);

        let leather = portal.search_products("leather").await.unwrap();
        assert_eq!(leather.len(), 1);
        assert_eq!(leather[0].name, "Luxury Leather Slippers");

        let none = portal.search_products("sneaker").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_add_to_order_snapshots_catalog_price() {
        let (portal, _) = portal();

        let summary = portal.add_to_order(1, "M", 5).await.unwrap();
        assert_eq!(summary.item_count, 1);
        assert_eq!(summary.total_cents, 7995);
    }

    #[tokio::test]
    async fn test_add_rejects_unknown_product_and_size() {
        let (portal, _) = portal();

        let err = portal.add_to_order(99, "M", 1).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = portal.add_to_order(1, "XXL", 1).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_cancel_requires_confirmation() {
        let (portal, _) = portal();
        portal.add_to_order(1, "M", 1).await.unwrap();

        assert!(!portal.cancel_order(false).unwrap());
        assert_eq!(portal.draft_summary().item_count, 1);

        assert!(portal.cancel_order(true).unwrap());
        assert_eq!(portal.draft_summary().item_count, 0);
    }

    #[tokio::test]
    async fn test_submit_requires_shop_then_items() {
        let (portal, _) = portal();

        let err = portal
            .submit_order(PaymentMethod::Cash, None)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError); // no shop

        portal.select_shop(1).await.unwrap();
        let err = portal
            .submit_order(PaymentMethod::Cash, None)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError); // no items
    }

    #[tokio::test]
    async fn test_successful_submit_clears_draft_and_records_order() {
        let (portal, store) = portal();

        portal.select_shop(1).await.unwrap();
        portal.add_to_order(1, "M", 5).await.unwrap();
        portal.add_to_order(2, "L", 2).await.unwrap();

        let receipt = portal
            .submit_order(PaymentMethod::Cash, Some("  Deliver before noon ".to_string()))
            .await
            .unwrap();

        assert_eq!(receipt.total_amount.cents(), 13993);
        assert!(portal.get_draft().is_empty());
        assert!(portal.get_draft().selected_shop().is_none());

        let order = store.get(&receipt.order_id).unwrap();
        assert_eq!(order.location, "6.9271,79.8612");
        assert_eq!(order.notes.as_deref(), Some("Deliver before noon"));
    }

    #[tokio::test]
    async fn test_refused_submission_preserves_draft() {
        use strider_store::RejectingSink;

        let portal = SalesPortal::new(
            Arc::new(InMemoryCatalog::new()),
            Arc::new(RejectingSink::new("endpoint offline")),
            Arc::new(FixedPosition::colombo()),
        );

        portal.select_shop(2).await.unwrap();
        portal.add_to_order(3, "M", 4).await.unwrap();

        let err = portal
            .submit_order(PaymentMethod::Cheque, None)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::SubmitFailed);

        // Nothing lost: the rep can retry as-is
        let summary = portal.draft_summary();
        assert_eq!(summary.item_count, 1);
        assert_eq!(summary.shop_name.as_deref(), Some("Slipper World"));
    }

    #[tokio::test]
    async fn test_geolocation_denial_degrades_to_sentinel() {
        use strider_store::DeniedPosition;

        let store = Arc::new(OrderStore::empty());
        let portal = SalesPortal::new(
            Arc::new(InMemoryCatalog::new()),
            Arc::new(AcceptingSink::new(Arc::clone(&store))),
            Arc::new(DeniedPosition),
        );

        portal.select_shop(1).await.unwrap();
        portal.add_to_order(1, "M", 1).await.unwrap();

        // Denied position never blocks the submission
        let receipt = portal.submit_order(PaymentMethod::Cash, None).await.unwrap();
        let order = store.get(&receipt.order_id).unwrap();
        assert_eq!(order.location, "Location unavailable");
    }

    #[tokio::test]
    async fn test_draft_locked_while_submission_in_flight() {
        use strider_core::types::OrderSubmission;
        use strider_store::{OrderReceipt, OrderSink, SubmitError};
        use tokio::sync::Notify;

        // Sink that parks inside submit until the test releases it, so the
        // test can poke the portal mid-flight.
        struct GatedSink {
            inner: AcceptingSink,
            entered: Arc<Notify>,
            release: Arc<Notify>,
        }

        #[async_trait::async_trait]
        impl OrderSink for GatedSink {
            async fn submit(
                &self,
                submission: OrderSubmission,
            ) -> Result<OrderReceipt, SubmitError> {
                self.entered.notify_one();
                self.release.notified().await;
                self.inner.submit(submission).await
            }
        }

        let store = Arc::new(OrderStore::empty());
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let portal = Arc::new(SalesPortal::new(
            Arc::new(InMemoryCatalog::new()),
            Arc::new(GatedSink {
                inner: AcceptingSink::new(Arc::clone(&store)),
                entered: Arc::clone(&entered),
                release: Arc::clone(&release),
            }),
            Arc::new(FixedPosition::colombo()),
        ));

        portal.select_shop(1).await.unwrap();
        portal.add_to_order(1, "M", 5).await.unwrap();

        let submitting = Arc::clone(&portal);
        let handle = tokio::spawn(async move {
            submitting.submit_order(PaymentMethod::Cash, None).await
        });
        entered.notified().await;

        // While the sink call is awaited, every mutator refuses: a line
        // added here would be cleared without ever being submitted
        let err = portal.add_to_order(2, "L", 2).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderError);
        assert!(portal.remove_from_order(0).is_err());
        assert!(portal.cancel_order(true).is_err());
        assert!(portal.select_shop(2).await.is_err());

        release.notify_one();
        let receipt = handle.await.unwrap().unwrap();

        // Exactly the snapshotted draft went out, and nothing else was lost
        assert_eq!(receipt.total_amount.cents(), 7995);
        assert!(portal.get_draft().is_empty());
        assert_eq!(store.count(), 1);

        // The lock lifts once the attempt ends
        portal.add_to_order(2, "L", 2).await.unwrap();
    }

    #[tokio::test]
    async fn test_fix_resolved_once_per_session() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use strider_store::{Coordinates, GeoError, GeolocationSource};

        struct CountingSource(AtomicUsize);

        #[async_trait::async_trait]
        impl GeolocationSource for CountingSource {
            async fn current_position(&self) -> Result<Coordinates, GeoError> {
                self.0.fetch_add(1, Ordering::SeqCst);
                Ok(Coordinates {
                    latitude: 6.9271,
                    longitude: 79.8612,
                })
            }
        }

        let source = Arc::new(CountingSource(AtomicUsize::new(0)));
        let store = Arc::new(OrderStore::empty());
        let portal = SalesPortal::new(
            Arc::new(InMemoryCatalog::new()),
            Arc::new(AcceptingSink::new(Arc::clone(&store))),
            Arc::clone(&source) as Arc<dyn GeolocationSource>,
        );

        for _ in 0..3 {
            portal.select_shop(1).await.unwrap();
            portal.add_to_order(1, "M", 1).await.unwrap();
            portal.submit_order(PaymentMethod::Cash, None).await.unwrap();
        }

        assert_eq!(store.count(), 3);
        assert_eq!(source.0.load(Ordering::SeqCst), 1); // memoized after the first read
    }

    #[tokio::test]
    async fn test_submission_slot_frees_after_failed_validation() {
        let (portal, _) = portal();

        // First attempt fails validation; the slot must be released
        assert!(portal.submit_order(PaymentMethod::Cash, None).await.is_err());

        portal.select_shop(1).await.unwrap();
        portal.add_to_order(1, "M", 1).await.unwrap();
        assert!(portal.submit_order(PaymentMethod::Cash, None).await.is_ok());
    }
}
