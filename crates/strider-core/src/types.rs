//! # Domain Types
//!
//! Core domain types used throughout Strider OMS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Shop       │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id (UUID)      │       │
//! │  │  name           │   │  name           │   │  order_status   │       │
//! │  │  price (Money)  │   │  address        │   │  payment_status │       │
//! │  │  sizes[]        │   │  contact_person │   │  total (Money)  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   OrderItem     │   │  OrderStatus    │   │ PaymentMethod   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  size, qty      │   │  New            │   │  Cash           │       │
//! │  │  unit_price     │   │  Processing     │   │  Cheque         │       │
//! │  │  subtotal       │   │  Completed      │   └─────────────────┘       │
//! │  └─────────────────┘   │  Cancelled      │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! `OrderItem` freezes the product name and unit price at the moment the
//! line is added, so later catalog edits never rewrite past orders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

/// Product identifier (small integer reference data key).
pub type ProductId = u32;

/// Shop identifier (small integer reference data key).
pub type ShopId = u32;

// =============================================================================
// Product
// =============================================================================

/// Stock on hand for one size label of a product.
///
/// Sizes are kept as an ordered list (S, M, L, XL, ...) rather than a map:
/// the catalog defines the display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeStock {
    /// Size label ("S", "M", "L", "XL").
    pub size: String,

    /// Units in stock for this size.
    pub stock: i64,
}

/// A product available for ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,

    /// Display name shown in the catalog and on order lines.
    pub name: String,

    /// Short description for product cards.
    pub description: String,

    /// Unit price.
    pub price: Money,

    /// Image reference (path or URL).
    pub image_url: String,

    /// Ordered set of size labels with their stock counts.
    pub sizes: Vec<SizeStock>,
}

impl Product {
    /// Looks up the stock count for a size label, if the product carries it.
    pub fn stock_for(&self, size: &str) -> Option<i64> {
        self.sizes.iter().find(|s| s.size == size).map(|s| s.stock)
    }

    /// Case-insensitive match against name or description.
    ///
    /// Used by catalog search; an empty term matches everything.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}

// =============================================================================
// Shop
// =============================================================================

/// A retail shop that places orders. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    pub id: ShopId,
    pub name: String,
    pub address: String,
    pub contact_person: String,
}

// =============================================================================
// Order Item
// =============================================================================

/// A line item on an order.
/// Uses the snapshot pattern to freeze product data at time of selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product this line refers to.
    pub product_id: ProductId,

    /// Product name at time of selection (frozen).
    pub product_name: String,

    /// Selected size label.
    pub size: String,

    /// Quantity ordered (always positive).
    pub quantity: i64,

    /// Unit price at time of selection (frozen).
    pub unit_price: Money,

    /// Line subtotal. Invariant: always `quantity × unit_price`.
    pub subtotal: Money,
}

impl OrderItem {
    /// Builds a line item, computing the subtotal.
    ///
    /// The only constructor: callers cannot produce an item whose subtotal
    /// disagrees with `quantity × unit_price`.
    pub fn new(
        product_id: ProductId,
        product_name: impl Into<String>,
        size: impl Into<String>,
        quantity: i64,
        unit_price: Money,
    ) -> Self {
        OrderItem {
            product_id,
            product_name: product_name.into(),
            size: size.into(),
            quantity,
            unit_price,
            subtotal: unit_price.multiply_quantity(quantity),
        }
    }
}

// =============================================================================
// Payment
// =============================================================================

/// How a shop pays for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Physical cash on delivery.
    Cash,
    /// Cheque payment.
    Cheque,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "Cash"),
            PaymentMethod::Cheque => write!(f, "Cheque"),
        }
    }
}

/// Whether payment for an order has been collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Completed,
}

impl PaymentStatus {
    /// Returns the other status (the admin view toggles with a checkbox).
    pub fn toggled(self) -> Self {
        match self {
            PaymentStatus::Pending => PaymentStatus::Completed,
            PaymentStatus::Completed => PaymentStatus::Pending,
        }
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Fulfilment state of a submitted order.
///
/// ## Transition Table
/// ```text
///   New ──────► Processing ──────► Completed
///    │               │
///    └──────┬────────┘
///           ▼
///       Cancelled            (Completed and Cancelled are terminal)
/// ```
///
/// The predecessor system let admins set any status from any status; that
/// was an oversight, not a contract. Transitions here are explicit and
/// checked by [`OrderStatus::can_transition_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Order received, not yet picked.
    New,
    /// Order is being picked/packed/shipped.
    Processing,
    /// Order delivered and closed.
    Completed,
    /// Order cancelled before completion.
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::New
    }
}

impl OrderStatus {
    /// Whether the transition `self → to` is legal.
    ///
    /// Self-transitions are not listed; callers treat them as no-ops.
    pub fn can_transition_to(self, to: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, to),
            (New, Processing) | (New, Cancelled) | (Processing, Completed) | (Processing, Cancelled)
        )
    }

    /// Terminal states accept no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::New => "New",
            OrderStatus::Processing => "Processing",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        };
        write!(f, "{}", s)
    }
}

// =============================================================================
// Geolocation Fix
// =============================================================================

/// Outcome of the once-per-session geolocation request.
///
/// The three variants must stay distinguishable downstream: diagnostics
/// need to tell "user denied it" apart from "platform cannot do it".
/// Never blocks order submission; it only gates a display string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LocationFix {
    /// Coordinates were acquired.
    Acquired { latitude: f64, longitude: f64 },
    /// The capability exists but the position could not be read
    /// (permission denied, timeout, hardware error).
    Unavailable,
    /// The platform has no geolocation capability at all.
    Unsupported,
}

impl LocationFix {
    /// Sentinel string recorded when acquisition failed.
    pub const UNAVAILABLE: &'static str = "Location unavailable";

    /// Sentinel string recorded when the capability is absent.
    pub const UNSUPPORTED: &'static str = "Geolocation not supported";
}

impl fmt::Display for LocationFix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationFix::Acquired {
                latitude,
                longitude,
            } => write!(f, "{},{}", latitude, longitude),
            LocationFix::Unavailable => write!(f, "{}", Self::UNAVAILABLE),
            LocationFix::Unsupported => write!(f, "{}", Self::UNSUPPORTED),
        }
    }
}

// =============================================================================
// Order Submission Payload
// =============================================================================

/// The payload handed to the order sink when a draft is finalized.
///
/// Shape mirrors what the acceptance endpoint expects:
/// `{ shopId, shopName, paymentMethod, notes, location, totalAmount, items }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    pub shop_id: ShopId,
    pub shop_name: String,
    pub payment_method: PaymentMethod,
    /// Optional free-text instructions.
    pub notes: Option<String>,
    /// Geolocation string or a sentinel (see [`LocationFix`]).
    pub location: String,
    /// Sum of item subtotals, computed by the draft.
    pub total_amount: Money,
    pub items: Vec<OrderItem>,
}

// =============================================================================
// Order (admin side, post-submission)
// =============================================================================

/// A submitted order as the admin portal sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier (UUID v4).
    pub id: String,

    pub shop_id: ShopId,
    pub shop_name: String,

    /// When the order was submitted.
    pub order_date: DateTime<Utc>,

    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub order_status: OrderStatus,

    /// Sum of item subtotals at submission time.
    pub total_amount: Money,

    /// Geolocation string or sentinel captured at submission.
    pub location: String,

    pub items: Vec<OrderItem>,

    pub notes: Option<String>,
}

impl Order {
    /// Creates a new order from an accepted submission.
    ///
    /// New orders start as `New` / payment `Pending`.
    pub fn from_submission(id: String, submitted_at: DateTime<Utc>, s: OrderSubmission) -> Self {
        Order {
            id,
            shop_id: s.shop_id,
            shop_name: s.shop_name,
            order_date: submitted_at,
            payment_method: s.payment_method,
            payment_status: PaymentStatus::Pending,
            order_status: OrderStatus::New,
            total_amount: s.total_amount,
            location: s.location,
            items: s.items,
            notes: s.notes,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_item_subtotal_invariant() {
        let item = OrderItem::new(1, "Classic Flip Flops", "M", 5, Money::from_cents(1599));
        assert_eq!(item.subtotal.cents(), 7995);
        assert_eq!(
            item.subtotal,
            item.unit_price.multiply_quantity(item.quantity)
        );
    }

    #[test]
    fn test_status_transition_table() {
        use OrderStatus::*;

        assert!(New.can_transition_to(Processing));
        assert!(New.can_transition_to(Cancelled));
        assert!(Processing.can_transition_to(Completed));
        assert!(Processing.can_transition_to(Cancelled));

        // Skipping ahead or reopening is forbidden
        assert!(!New.can_transition_to(Completed));
        assert!(!Completed.can_transition_to(Processing));
        assert!(!Completed.can_transition_to(New));
        assert!(!Cancelled.can_transition_to(New));
        assert!(!Cancelled.can_transition_to(Processing));
    }

    #[test]
    fn test_terminal_states() {
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::New.is_terminal());
        assert!(!OrderStatus::Processing.is_terminal());
    }

    #[test]
    fn test_location_fix_display() {
        let fix = LocationFix::Acquired {
            latitude: 6.9271,
            longitude: 79.8612,
        };
        assert_eq!(fix.to_string(), "6.9271,79.8612");
        assert_eq!(LocationFix::Unavailable.to_string(), "Location unavailable");
        assert_eq!(
            LocationFix::Unsupported.to_string(),
            "Geolocation not supported"
        );
    }

    #[test]
    fn test_payment_status_toggle() {
        assert_eq!(PaymentStatus::Pending.toggled(), PaymentStatus::Completed);
        assert_eq!(PaymentStatus::Completed.toggled(), PaymentStatus::Pending);
    }

    #[test]
    fn test_product_matches_search() {
        let product = Product {
            id: 3,
            name: "Beach Sandals".to_string(),
            description: "Waterproof beach sandals".to_string(),
            price: Money::from_cents(1999),
            image_url: "/images/beach-sandals.jpg".to_string(),
            sizes: vec![],
        };

        assert!(product.matches("beach"));
        assert!(product.matches("WATERPROOF"));
        assert!(product.matches(""));
        assert!(!product.matches("leather"));
    }

    #[test]
    fn test_submission_serializes_camel_case() {
        let submission = OrderSubmission {
            shop_id: 2,
            shop_name: "Slipper World".to_string(),
            payment_method: PaymentMethod::Cheque,
            notes: None,
            location: "6.0535,80.2210".to_string(),
            total_amount: Money::from_cents(17994),
            items: vec![],
        };

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["shopId"], 2);
        assert_eq!(json["paymentMethod"], "Cheque");
        assert_eq!(json["totalAmount"], 17994);
        assert!(json["items"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_order_from_submission_defaults() {
        let submission = OrderSubmission {
            shop_id: 1,
            shop_name: "Footwear Paradise".to_string(),
            payment_method: PaymentMethod::Cash,
            notes: None,
            location: LocationFix::Unavailable.to_string(),
            total_amount: Money::from_cents(7995),
            items: vec![OrderItem::new(1, "Classic Flip Flops", "M", 5, Money::from_cents(1599))],
        };

        let order = Order::from_submission("id-1".to_string(), Utc::now(), submission);
        assert_eq!(order.order_status, OrderStatus::New);
        assert_eq!(order.payment_status, PaymentStatus::Pending);
        assert_eq!(order.total_amount.cents(), 7995);
    }
}
