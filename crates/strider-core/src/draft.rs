//! # Order Draft
//!
//! The order builder: accumulates line items chosen by a sales rep into a
//! pending order draft scoped to one selected shop.
//!
//! ## Draft Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Order Draft Lifecycle                               │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ Shop     │────►│ Items    │────►│Submitted │       │
//! │  │  Draft   │     │ Selected │     │ Added    │     │  Order   │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │        ▲               │                │                               │
//! │        │          select_shop      add_item / remove_item               │
//! │        │               │                │                               │
//! │        └───────────────┴── clear() ◄────┘  (cancel, or post-submit)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Duplicate Lines
//! Unlike a supermarket cart, lines are NEVER merged: adding the same
//! product+size twice produces two independent lines, each removable on
//! its own. Field reps build orders rack by rack and expect the lines to
//! mirror the order in which they were keyed in.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{OrderItem, ProductId, Shop};
use crate::validation::{validate_quantity, validate_size};
use crate::MAX_DRAFT_ITEMS;

// =============================================================================
// Order Draft
// =============================================================================

/// The in-progress, unsubmitted order for one shop.
///
/// ## Invariants
/// - Every line satisfies `subtotal == quantity × unit_price`
/// - `total()` is always the sum of current line subtotals
/// - Lines require a positive quantity and a non-empty size before entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderDraft {
    /// Shop this draft is being built for.
    shop: Option<Shop>,

    /// Line items, in insertion order.
    items: Vec<OrderItem>,
}

impl OrderDraft {
    /// Creates a new empty draft (session start).
    pub fn new() -> Self {
        OrderDraft {
            shop: None,
            items: Vec::new(),
        }
    }

    /// Selects (or switches) the shop this draft is for.
    pub fn select_shop(&mut self, shop: Shop) {
        self.shop = Some(shop);
    }

    /// The currently selected shop, if any.
    pub fn selected_shop(&self) -> Option<&Shop> {
        self.shop.as_ref()
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Appends a line item with subtotal computed as `quantity × unit_price`.
    ///
    /// ## Rejections
    /// - empty/whitespace `size`
    /// - `quantity <= 0` or above [`crate::MAX_ITEM_QUANTITY`]
    /// - draft already at [`MAX_DRAFT_ITEMS`] lines
    ///
    /// Duplicates are permitted: a line matching an existing product+size
    /// is appended as its own entry, never merged.
    pub fn add_item(
        &mut self,
        product_id: ProductId,
        product_name: &str,
        size: &str,
        quantity: i64,
        unit_price: Money,
    ) -> CoreResult<()> {
        let size = validate_size(size)?;
        validate_quantity(quantity)?;

        if self.items.len() >= MAX_DRAFT_ITEMS {
            return Err(CoreError::DraftTooLarge {
                max: MAX_DRAFT_ITEMS,
            });
        }

        self.items.push(OrderItem::new(
            product_id,
            product_name,
            size,
            quantity,
            unit_price,
        ));
        Ok(())
    }

    /// Deletes one line by position.
    ///
    /// Positional on purpose: with duplicate product+size lines allowed,
    /// the index is the only unambiguous handle.
    pub fn remove_item(&mut self, index: usize) -> CoreResult<OrderItem> {
        if index >= self.items.len() {
            return Err(CoreError::LineOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Clears all items and the shop selection.
    ///
    /// The *confirmation* step guarding cancellation lives at the service
    /// layer; by the time `clear` runs the decision has been made.
    pub fn clear(&mut self) {
        self.items.clear();
        self.shop = None;
    }

    /// Number of line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Derived total: sum of line subtotals.
    pub fn total(&self) -> Money {
        self.items.iter().map(|i| i.subtotal).sum()
    }

    /// Checks if the draft has no line items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Validates the draft is submittable: a shop is selected and at least
    /// one line exists. Returns the shop on success.
    pub fn ready_for_submission(&self) -> CoreResult<&Shop> {
        let shop = self.shop.as_ref().ok_or(CoreError::NoShopSelected)?;
        if self.items.is_empty() {
            return Err(CoreError::EmptyOrder);
        }
        Ok(shop)
    }
}

// =============================================================================
// Draft Summary
// =============================================================================

/// Draft totals summary for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftSummary {
    pub shop_name: Option<String>,
    pub item_count: usize,
    pub total_quantity: i64,
    pub total_cents: i64,
}

impl From<&OrderDraft> for DraftSummary {
    fn from(draft: &OrderDraft) -> Self {
        DraftSummary {
            shop_name: draft.selected_shop().map(|s| s.name.clone()),
            item_count: draft.item_count(),
            total_quantity: draft.total_quantity(),
            total_cents: draft.total().cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_ITEM_QUANTITY;

    fn test_shop() -> Shop {
        Shop {
            id: 1,
            name: "Footwear Paradise".to_string(),
            address: "123 Main St, Colombo".to_string(),
            contact_person: "John Smith".to_string(),
        }
    }

    #[test]
    fn test_add_item_computes_subtotal() {
        let mut draft = OrderDraft::new();
        draft
            .add_item(1, "Classic Flip Flops", "M", 5, Money::from_cents(1599))
            .unwrap();

        assert_eq!(draft.item_count(), 1);
        assert_eq!(draft.items()[0].subtotal.cents(), 7995); // $79.95
    }

    #[test]
    fn test_worked_example_from_reference_data() {
        // add product 1 ($15.99 × 5, M) → $79.95
        // add product 2 ($29.99 × 2, L) → $59.98; total $139.93
        // remove index 0 → total $59.98
        let mut draft = OrderDraft::new();
        draft
            .add_item(1, "Classic Flip Flops", "M", 5, Money::from_cents(1599))
            .unwrap();
        draft
            .add_item(2, "Luxury Leather Slippers", "L", 2, Money::from_cents(2999))
            .unwrap();

        assert_eq!(draft.items()[0].subtotal.cents(), 7995);
        assert_eq!(draft.items()[1].subtotal.cents(), 5998);
        assert_eq!(draft.total().cents(), 13993);

        let removed = draft.remove_item(0).unwrap();
        assert_eq!(removed.product_id, 1);
        assert_eq!(draft.total().cents(), 5998); // no residual drift
    }

    #[test]
    fn test_duplicate_lines_not_merged() {
        let mut draft = OrderDraft::new();
        draft
            .add_item(1, "Classic Flip Flops", "M", 2, Money::from_cents(1599))
            .unwrap();
        draft
            .add_item(1, "Classic Flip Flops", "M", 3, Money::from_cents(1599))
            .unwrap();

        // Two independent lines, each tracked on its own
        assert_eq!(draft.item_count(), 2);
        assert_eq!(draft.items()[0].quantity, 2);
        assert_eq!(draft.items()[1].quantity, 3);
    }

    #[test]
    fn test_rejects_missing_size_and_bad_quantity() {
        let mut draft = OrderDraft::new();

        assert!(draft
            .add_item(1, "Classic Flip Flops", "", 1, Money::from_cents(1599))
            .is_err());
        assert!(draft
            .add_item(1, "Classic Flip Flops", "   ", 1, Money::from_cents(1599))
            .is_err());
        assert!(draft
            .add_item(1, "Classic Flip Flops", "M", 0, Money::from_cents(1599))
            .is_err());
        assert!(draft
            .add_item(1, "Classic Flip Flops", "M", -3, Money::from_cents(1599))
            .is_err());
        assert!(draft
            .add_item(
                1,
                "Classic Flip Flops",
                "M",
                MAX_ITEM_QUANTITY + 1,
                Money::from_cents(1599)
            )
            .is_err());

        assert!(draft.is_empty());
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut draft = OrderDraft::new();
        draft
            .add_item(1, "Classic Flip Flops", "M", 1, Money::from_cents(1599))
            .unwrap();

        let err = draft.remove_item(5).unwrap_err();
        assert!(matches!(err, CoreError::LineOutOfRange { index: 5, len: 1 }));
    }

    #[test]
    fn test_clear_empties_items_and_shop() {
        let mut draft = OrderDraft::new();
        draft.select_shop(test_shop());
        draft
            .add_item(1, "Classic Flip Flops", "M", 1, Money::from_cents(1599))
            .unwrap();

        draft.clear();

        assert!(draft.is_empty());
        assert!(draft.selected_shop().is_none());
        assert_eq!(draft.total(), Money::zero());
    }

    #[test]
    fn test_ready_for_submission() {
        let mut draft = OrderDraft::new();

        // No shop, no items
        assert!(matches!(
            draft.ready_for_submission(),
            Err(CoreError::NoShopSelected)
        ));

        // Shop but no items
        draft.select_shop(test_shop());
        assert!(matches!(
            draft.ready_for_submission(),
            Err(CoreError::EmptyOrder)
        ));

        // Shop and an item
        draft
            .add_item(1, "Classic Flip Flops", "M", 1, Money::from_cents(1599))
            .unwrap();
        assert_eq!(draft.ready_for_submission().unwrap().id, 1);
    }

    #[test]
    fn test_draft_summary() {
        let mut draft = OrderDraft::new();
        draft.select_shop(test_shop());
        draft
            .add_item(1, "Classic Flip Flops", "M", 5, Money::from_cents(1599))
            .unwrap();
        draft
            .add_item(2, "Luxury Leather Slippers", "L", 2, Money::from_cents(2999))
            .unwrap();

        let summary = DraftSummary::from(&draft);
        assert_eq!(summary.shop_name.as_deref(), Some("Footwear Paradise"));
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total_quantity, 7);
        assert_eq!(summary.total_cents, 13993);
    }

    #[test]
    fn test_draft_line_cap() {
        let mut draft = OrderDraft::new();
        for _ in 0..MAX_DRAFT_ITEMS {
            draft
                .add_item(1, "Classic Flip Flops", "M", 1, Money::from_cents(1599))
                .unwrap();
        }
        assert!(matches!(
            draft.add_item(1, "Classic Flip Flops", "M", 1, Money::from_cents(1599)),
            Err(CoreError::DraftTooLarge { .. })
        ));
    }
}
