//! # Order Sink
//!
//! The acceptance point a finalized draft is handed to. In production
//! this is the distributor's order endpoint; here it drops straight into
//! the in-memory [`OrderStore`] so the admin portal sees live submissions.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strider_core::types::{Order, OrderSubmission};
use strider_core::Money;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::orders::OrderStore;

// =============================================================================
// Types
// =============================================================================

/// Acknowledgement returned for an accepted order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    /// Id assigned to the accepted order.
    pub order_id: String,
    /// When the sink accepted it.
    pub accepted_at: DateTime<Utc>,
    /// Echo of the submitted total.
    pub total_amount: Money,
}

/// Why a sink refused a submission.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The sink looked at the payload and said no.
    #[error("order rejected: {reason}")]
    Rejected { reason: String },
}

// =============================================================================
// Contract
// =============================================================================

/// Acceptance point for finalized orders.
#[async_trait]
pub trait OrderSink: Send + Sync {
    /// Hands over a finalized submission. On success the order is owned
    /// by the receiving side; the caller keeps only the receipt.
    async fn submit(&self, submission: OrderSubmission) -> Result<OrderReceipt, SubmitError>;
}

// =============================================================================
// Implementations
// =============================================================================

/// Accepts every submission and records it into the shared [`OrderStore`].
pub struct AcceptingSink {
    store: Arc<OrderStore>,
}

impl AcceptingSink {
    pub fn new(store: Arc<OrderStore>) -> Self {
        AcceptingSink { store }
    }
}

#[async_trait]
impl OrderSink for AcceptingSink {
    async fn submit(&self, submission: OrderSubmission) -> Result<OrderReceipt, SubmitError> {
        let id = Uuid::new_v4().to_string();
        let accepted_at = Utc::now();
        let total_amount = submission.total_amount;

        info!(
            order_id = %id,
            shop = %submission.shop_name,
            items = submission.items.len(),
            total_cents = total_amount.cents(),
            "order accepted"
        );

        self.store
            .insert(Order::from_submission(id.clone(), accepted_at, submission));

        Ok(OrderReceipt {
            order_id: id,
            accepted_at,
            total_amount,
        })
    }
}

/// Refuses every submission. For exercising the failure path: a refused
/// draft must stay intact so the rep can retry.
pub struct RejectingSink {
    reason: String,
}

impl RejectingSink {
    pub fn new(reason: impl Into<String>) -> Self {
        RejectingSink {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl OrderSink for RejectingSink {
    async fn submit(&self, _submission: OrderSubmission) -> Result<OrderReceipt, SubmitError> {
        Err(SubmitError::Rejected {
            reason: self.reason.clone(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use strider_core::types::{OrderItem, OrderStatus, PaymentMethod, PaymentStatus};

    fn submission() -> OrderSubmission {
        let items = vec![
            OrderItem::new(1, "Classic Flip Flops", "M", 5, Money::from_cents(1599)),
            OrderItem::new(2, "Luxury Leather Slippers", "L", 2, Money::from_cents(2999)),
        ];
        let total = items.iter().map(|i| i.subtotal).sum();
        OrderSubmission {
            shop_id: 1,
            shop_name: "Footwear Paradise".to_string(),
            payment_method: PaymentMethod::Cash,
            notes: Some("Deliver before noon".to_string()),
            location: "6.9271,79.8612".to_string(),
            total_amount: total,
            items,
        }
    }

    #[tokio::test]
    async fn test_accepting_sink_records_order() {
        let store = Arc::new(OrderStore::empty());
        let sink = AcceptingSink::new(Arc::clone(&store));

        let receipt = sink.submit(submission()).await.unwrap();
        assert_eq!(receipt.total_amount.cents(), 13993);

        let order = store.get(&receipt.order_id).unwrap();
        assert_eq!(order.order_status, OrderStatus::New);
        assert_eq!(order.payment_status, PaymentStatus::Pending);
        assert_eq!(order.shop_name, "Footwear Paradise");
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.location, "6.9271,79.8612");
    }

    #[tokio::test]
    async fn test_each_acceptance_gets_unique_id() {
        let store = Arc::new(OrderStore::empty());
        let sink = AcceptingSink::new(Arc::clone(&store));

        let a = sink.submit(submission()).await.unwrap();
        let b = sink.submit(submission()).await.unwrap();
        assert_ne!(a.order_id, b.order_id);
        assert_eq!(store.count(), 2);
    }

    #[tokio::test]
    async fn test_receipt_serializes_camel_case() {
        let store = Arc::new(OrderStore::empty());
        let sink = AcceptingSink::new(store);

        let receipt = sink.submit(submission()).await.unwrap();
        let json = serde_json::to_value(&receipt).unwrap();

        assert!(json["orderId"].is_string());
        assert_eq!(json["totalAmount"], 13993);
        assert!(json["acceptedAt"].is_string());
    }

    #[tokio::test]
    async fn test_rejecting_sink() {
        let sink = RejectingSink::new("endpoint offline");
        let err = sink.submit(submission()).await.unwrap_err();
        assert_eq!(err.to_string(), "order rejected: endpoint offline");
    }
}
