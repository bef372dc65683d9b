//! # Order Store
//!
//! The submitted-order collection the admin portal works against. Holds
//! every accepted order in memory, newest first.
//!
//! ## Status Changes
//! Status changes go through [`OrderStore::set_status`], which enforces
//! the transition table on [`strider_core::types::OrderStatus`]. Setting
//! an order to the status it already has is a no-op, not an error; the
//! admin screen re-sends the current value when a dropdown is reopened.

use std::sync::Mutex;

use strider_core::types::{Order, OrderStatus, PaymentStatus, ShopId};
use strider_core::CoreError;
use tracing::{info, warn};

use crate::error::{StoreError, StoreResult};
use crate::seed;

// =============================================================================
// Filter
// =============================================================================

/// Criteria for listing orders. `None` fields do not constrain.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub shop_id: Option<ShopId>,
}

impl OrderFilter {
    fn accepts(&self, order: &Order) -> bool {
        self.status.map_or(true, |s| order.order_status == s)
            && self
                .payment_status
                .map_or(true, |p| order.payment_status == p)
            && self.shop_id.map_or(true, |id| order.shop_id == id)
    }
}

// =============================================================================
// Order Store
// =============================================================================

/// In-memory collection of submitted orders.
pub struct OrderStore {
    orders: Mutex<Vec<Order>>,
}

impl OrderStore {
    /// Creates a store pre-loaded with the seed orders.
    pub fn new() -> Self {
        OrderStore {
            orders: Mutex::new(seed::seed_orders()),
        }
    }

    /// Creates a store with no orders.
    pub fn empty() -> Self {
        OrderStore {
            orders: Mutex::new(Vec::new()),
        }
    }

    fn with_orders<T>(&self, f: impl FnOnce(&Vec<Order>) -> T) -> T {
        let guard = self.orders.lock().expect("order store mutex poisoned");
        f(&guard)
    }

    fn with_orders_mut<T>(&self, f: impl FnOnce(&mut Vec<Order>) -> T) -> T {
        let mut guard = self.orders.lock().expect("order store mutex poisoned");
        f(&mut guard)
    }

    /// All orders, most recent submission first.
    pub fn list(&self) -> Vec<Order> {
        self.with_orders(|orders| {
            let mut out = orders.clone();
            out.sort_by(|a, b| b.order_date.cmp(&a.order_date));
            out
        })
    }

    /// Orders matching the filter, most recent first.
    pub fn list_filtered(&self, filter: &OrderFilter) -> Vec<Order> {
        let mut out: Vec<Order> = self.with_orders(|orders| {
            orders.iter().filter(|o| filter.accepts(o)).cloned().collect()
        });
        out.sort_by(|a, b| b.order_date.cmp(&a.order_date));
        out
    }

    /// One order by id.
    pub fn get(&self, id: &str) -> StoreResult<Order> {
        self.with_orders(|orders| {
            orders
                .iter()
                .find(|o| o.id == id)
                .cloned()
                .ok_or_else(|| StoreError::not_found("order", id))
        })
    }

    /// Records a newly accepted order.
    pub fn insert(&self, order: Order) {
        info!(
            order_id = %order.id,
            shop = %order.shop_name,
            total_cents = order.total_amount.cents(),
            "order recorded"
        );
        self.with_orders_mut(|orders| orders.push(order));
    }

    /// Moves an order to a new fulfilment status.
    ///
    /// Rejects transitions the table forbids. Same-status requests return
    /// the order unchanged.
    pub fn set_status(&self, id: &str, to: OrderStatus) -> StoreResult<Order> {
        self.with_orders_mut(|orders| {
            let order = orders
                .iter_mut()
                .find(|o| o.id == id)
                .ok_or_else(|| StoreError::not_found("order", id))?;

            if order.order_status == to {
                return Ok(order.clone());
            }

            if !order.order_status.can_transition_to(to) {
                warn!(order_id = %id, from = %order.order_status, to = %to, "illegal status transition rejected");
                return Err(StoreError::Domain(CoreError::IllegalStatusTransition {
                    from: order.order_status,
                    to,
                }));
            }

            info!(order_id = %id, from = %order.order_status, to = %to, "order status changed");
            order.order_status = to;
            Ok(order.clone())
        })
    }

    /// Sets the payment status directly.
    pub fn set_payment_status(&self, id: &str, status: PaymentStatus) -> StoreResult<Order> {
        self.with_orders_mut(|orders| {
            let order = orders
                .iter_mut()
                .find(|o| o.id == id)
                .ok_or_else(|| StoreError::not_found("order", id))?;
            order.payment_status = status;
            info!(order_id = %id, payment_status = ?status, "payment status set");
            Ok(order.clone())
        })
    }

    /// Flips the payment status between Pending and Completed.
    pub fn toggle_payment_status(&self, id: &str) -> StoreResult<Order> {
        self.with_orders_mut(|orders| {
            let order = orders
                .iter_mut()
                .find(|o| o.id == id)
                .ok_or_else(|| StoreError::not_found("order", id))?;
            order.payment_status = order.payment_status.toggled();
            info!(order_id = %id, payment_status = ?order.payment_status, "payment status toggled");
            Ok(order.clone())
        })
    }

    /// Removes an order permanently. Confirmation is the caller's problem.
    pub fn delete(&self, id: &str) -> StoreResult<Order> {
        self.with_orders_mut(|orders| {
            let index = orders
                .iter()
                .position(|o| o.id == id)
                .ok_or_else(|| StoreError::not_found("order", id))?;
            let removed = orders.remove(index);
            info!(order_id = %id, "order deleted");
            Ok(removed)
        })
    }

    /// Number of orders held.
    pub fn count(&self) -> usize {
        self.with_orders(|orders| orders.len())
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store_lists_newest_first() {
        let store = OrderStore::new();
        let orders = store.list();

        assert_eq!(orders.len(), 4);
        for pair in orders.windows(2) {
            assert!(pair[0].order_date >= pair[1].order_date);
        }
    }

    #[test]
    fn test_filter_by_status_and_shop() {
        let store = OrderStore::new();

        let new_orders = store.list_filtered(&OrderFilter {
            status: Some(OrderStatus::New),
            ..Default::default()
        });
        assert_eq!(new_orders.len(), 1);
        assert_eq!(new_orders[0].id, "1003");

        let shop_one = store.list_filtered(&OrderFilter {
            shop_id: Some(1),
            ..Default::default()
        });
        assert_eq!(shop_one.len(), 2);

        let pending_shop_one = store.list_filtered(&OrderFilter {
            shop_id: Some(1),
            payment_status: Some(PaymentStatus::Pending),
            ..Default::default()
        });
        assert_eq!(pending_shop_one.len(), 1);
        assert_eq!(pending_shop_one[0].id, "1004");
    }

    #[test]
    fn test_status_transitions_enforced() {
        let store = OrderStore::new();

        // 1003 is New: New → Processing is legal
        let order = store.set_status("1003", OrderStatus::Processing).unwrap();
        assert_eq!(order.order_status, OrderStatus::Processing);

        // Processing → Completed is legal
        store.set_status("1003", OrderStatus::Completed).unwrap();

        // Completed is terminal
        let err = store.set_status("1003", OrderStatus::New).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Domain(CoreError::IllegalStatusTransition { .. })
        ));

        // Cancelled is terminal too (1004)
        assert!(store.set_status("1004", OrderStatus::Processing).is_err());
    }

    #[test]
    fn test_same_status_is_noop() {
        let store = OrderStore::new();

        // 1001 is already Completed; re-sending Completed must not error
        let order = store.set_status("1001", OrderStatus::Completed).unwrap();
        assert_eq!(order.order_status, OrderStatus::Completed);
    }

    #[test]
    fn test_payment_toggle() {
        let store = OrderStore::new();

        let order = store.toggle_payment_status("1002").unwrap();
        assert_eq!(order.payment_status, PaymentStatus::Completed);

        let order = store.toggle_payment_status("1002").unwrap();
        assert_eq!(order.payment_status, PaymentStatus::Pending);

        let order = store
            .set_payment_status("1002", PaymentStatus::Completed)
            .unwrap();
        assert_eq!(order.payment_status, PaymentStatus::Completed);
    }

    #[test]
    fn test_delete_and_missing_lookups() {
        let store = OrderStore::new();

        let removed = store.delete("1002").unwrap();
        assert_eq!(removed.id, "1002");
        assert_eq!(store.count(), 3);
        assert!(store.get("1002").is_err());

        assert!(store.delete("nope").is_err());
        assert!(store.set_status("nope", OrderStatus::Processing).is_err());
        assert!(store.toggle_payment_status("nope").is_err());
    }
}
