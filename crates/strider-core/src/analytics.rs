//! # Sales Analytics
//!
//! Pure aggregation functions over the submitted order collection. The
//! admin dashboard renders these; nothing here knows about charts.
//!
//! Cancelled orders are excluded from every aggregate: a cancelled order
//! is not revenue, and counting it would skew the location and product
//! rankings.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Order, OrderStatus};

// =============================================================================
// Aggregate Shapes
// =============================================================================

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub total_revenue: Money,
    pub order_count: usize,
    /// Total units across all line items.
    pub units_sold: i64,
}

/// Revenue for one period bucket (a day, a week, or a month).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodRevenue {
    /// Human label for the bucket ("Apr 1", "Week of Mar 31", "Apr 2025").
    pub label: String,
    pub revenue: Money,
    pub order_count: usize,
}

/// Revenue and order count for one location string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSales {
    pub location: String,
    pub revenue: Money,
    pub order_count: usize,
}

/// Quantity and revenue for one product, ranked by quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    pub product_name: String,
    pub quantity: i64,
    pub revenue: Money,
}

/// Granularity of the revenue trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

// =============================================================================
// Aggregations
// =============================================================================

fn countable(order: &Order) -> bool {
    order.order_status != OrderStatus::Cancelled
}

/// Headline totals across all non-cancelled orders.
pub fn summarize(orders: &[Order]) -> SalesSummary {
    let mut total_revenue = Money::zero();
    let mut order_count = 0;
    let mut units_sold = 0;

    for order in orders.iter().filter(|o| countable(o)) {
        total_revenue += order.total_amount;
        order_count += 1;
        units_sold += order.items.iter().map(|i| i.quantity).sum::<i64>();
    }

    SalesSummary {
        total_revenue,
        order_count,
        units_sold,
    }
}

/// Revenue trend bucketed by period, in chronological order.
pub fn revenue_by_period(orders: &[Order], period: Period) -> Vec<PeriodRevenue> {
    // Keyed by bucket start date so iteration comes out chronological.
    let mut buckets: BTreeMap<NaiveDate, (Money, usize)> = BTreeMap::new();

    for order in orders.iter().filter(|o| countable(o)) {
        let date = order.order_date.date_naive();
        let start = bucket_start(date, period);
        let entry = buckets.entry(start).or_insert((Money::zero(), 0));
        entry.0 += order.total_amount;
        entry.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(start, (revenue, order_count))| PeriodRevenue {
            label: bucket_label(start, period),
            revenue,
            order_count,
        })
        .collect()
}

/// Revenue distribution across location strings, highest revenue first.
pub fn location_breakdown(orders: &[Order]) -> Vec<LocationSales> {
    let mut by_location: BTreeMap<&str, (Money, usize)> = BTreeMap::new();

    for order in orders.iter().filter(|o| countable(o)) {
        let entry = by_location
            .entry(order.location.as_str())
            .or_insert((Money::zero(), 0));
        entry.0 += order.total_amount;
        entry.1 += 1;
    }

    let mut rows: Vec<LocationSales> = by_location
        .into_iter()
        .map(|(location, (revenue, order_count))| LocationSales {
            location: location.to_string(),
            revenue,
            order_count,
        })
        .collect();

    rows.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    rows
}

/// Products ranked by quantity sold, at most `limit` rows.
pub fn top_products(orders: &[Order], limit: usize) -> Vec<ProductSales> {
    let mut by_product: BTreeMap<&str, (i64, Money)> = BTreeMap::new();

    for order in orders.iter().filter(|o| countable(o)) {
        for item in &order.items {
            let entry = by_product
                .entry(item.product_name.as_str())
                .or_insert((0, Money::zero()));
            entry.0 += item.quantity;
            entry.1 += item.subtotal;
        }
    }

    let mut rows: Vec<ProductSales> = by_product
        .into_iter()
        .map(|(name, (quantity, revenue))| ProductSales {
            product_name: name.to_string(),
            quantity,
            revenue,
        })
        .collect();

    rows.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    rows.truncate(limit);
    rows
}

// =============================================================================
// Bucketing Helpers
// =============================================================================

/// First date of the bucket containing `date`.
fn bucket_start(date: NaiveDate, period: Period) -> NaiveDate {
    match period {
        Period::Daily => date,
        Period::Weekly => {
            // Weeks start on Monday
            let offset = date.weekday().num_days_from_monday() as i64;
            date - Duration::days(offset)
        }
        Period::Monthly => date.with_day(1).unwrap_or(date),
    }
}

fn bucket_label(start: NaiveDate, period: Period) -> String {
    match period {
        Period::Daily => start.format("%b %-d").to_string(),
        Period::Weekly => format!("Week of {}", start.format("%b %-d")),
        Period::Monthly => start.format("%b %Y").to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
