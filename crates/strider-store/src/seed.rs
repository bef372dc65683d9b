//! # Seed Data
//!
//! Reference data set the prototype boots with: the slipper catalog, the
//! shop list, and a handful of already-submitted orders so the admin
//! portal has something to show before the first live submission.
//!
//! All of this is transient; it is rebuilt from scratch on every start.

use chrono::{TimeZone, Utc};
use strider_core::types::{
    Order, OrderItem, OrderStatus, PaymentMethod, PaymentStatus, Product, Shop, SizeStock,
};
use strider_core::Money;

fn sizes(stocks: [(&str, i64); 4]) -> Vec<SizeStock> {
    stocks
        .into_iter()
        .map(|(size, stock)| SizeStock {
            size: size.to_string(),
            stock,
        })
        .collect()
}

/// The boot catalog: four footwear products, S through XL.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Classic Flip Flops".to_string(),
            description: "Comfortable rubber flip flops for everyday wear".to_string(),
            price: Money::from_cents(1599),
            image_url: "/images/flip-flops.jpg".to_string(),
            sizes: sizes([("S", 10), ("M", 15), ("L", 20), ("XL", 8)]),
        },
        Product {
            id: 2,
            name: "Luxury Leather Slippers".to_string(),
            description: "Premium leather slippers with soft lining".to_string(),
            price: Money::from_cents(2999),
            image_url: "/images/leather-slippers.jpg".to_string(),
            sizes: sizes([("S", 5), ("M", 8), ("L", 10), ("XL", 4)]),
        },
        Product {
            id: 3,
            name: "Beach Sandals".to_string(),
            description: "Waterproof beach sandals with arch support".to_string(),
            price: Money::from_cents(1999),
            image_url: "/images/beach-sandals.jpg".to_string(),
            sizes: sizes([("S", 12), ("M", 18), ("L", 15), ("XL", 6)]),
        },
        Product {
            id: 4,
            name: "Cozy Home Slippers".to_string(),
            description: "Warm indoor slippers with memory foam".to_string(),
            price: Money::from_cents(2499),
            image_url: "/images/home-slippers.jpg".to_string(),
            sizes: sizes([("S", 7), ("M", 14), ("L", 11), ("XL", 5)]),
        },
    ]
}

/// The shop list reps sell to. Immutable reference data.
pub fn seed_shops() -> Vec<Shop> {
    vec![
        Shop {
            id: 1,
            name: "Footwear Paradise".to_string(),
            address: "123 Main Street, Colombo".to_string(),
            contact_person: "Nimal Perera".to_string(),
        },
        Shop {
            id: 2,
            name: "Slipper World".to_string(),
            address: "45 Beach Road, Galle".to_string(),
            contact_person: "Sunil Fernando".to_string(),
        },
        Shop {
            id: 3,
            name: "Comfort Feet".to_string(),
            address: "78 Hill Street, Kandy".to_string(),
            contact_person: "Kamal Silva".to_string(),
        },
    ]
}

/// Pre-submitted orders covering every status, so the admin screens and
/// analytics have data on first load.
pub fn seed_orders() -> Vec<Order> {
    let order = |id: u32,
                 shop: (u32, &str),
                 y: i32,
                 m: u32,
                 d: u32,
                 method: PaymentMethod,
                 pay: PaymentStatus,
                 status: OrderStatus,
                 location: &str,
                 items: Vec<OrderItem>| {
        let total: Money = items.iter().map(|i| i.subtotal).sum();
        Order {
            id: id.to_string(),
            shop_id: shop.0,
            shop_name: shop.1.to_string(),
            order_date: Utc
                .with_ymd_and_hms(y, m, d, 9, 30, 0)
                .single()
                .unwrap_or_else(Utc::now),
            payment_method: method,
            payment_status: pay,
            order_status: status,
            total_amount: total,
            location: location.to_string(),
            items,
            notes: None,
        }
    };

    vec![
        order(
            1001,
            (1, "Footwear Paradise"),
            2025,
            3,
            24,
            PaymentMethod::Cash,
            PaymentStatus::Completed,
            OrderStatus::Completed,
            "6.9271,79.8612",
            vec![
                OrderItem::new(1, "Classic Flip Flops", "M", 10, Money::from_cents(1599)),
                OrderItem::new(3, "Beach Sandals", "L", 5, Money::from_cents(1999)),
            ],
        ),
        order(
            1002,
            (2, "Slipper World"),
            2025,
            3,
            26,
            PaymentMethod::Cheque,
            PaymentStatus::Pending,
            OrderStatus::Processing,
            "6.0535,80.2210",
            vec![OrderItem::new(
                2,
                "Luxury Leather Slippers",
                "L",
                6,
                Money::from_cents(2999),
            )],
        ),
        order(
            1003,
            (3, "Comfort Feet"),
            2025,
            3,
            28,
            PaymentMethod::Cash,
            PaymentStatus::Pending,
            OrderStatus::New,
            "Location unavailable",
            vec![
                OrderItem::new(4, "Cozy Home Slippers", "M", 8, Money::from_cents(2499)),
                OrderItem::new(1, "Classic Flip Flops", "S", 4, Money::from_cents(1599)),
            ],
        ),
        order(
            1004,
            (1, "Footwear Paradise"),
            2025,
            3,
            29,
            PaymentMethod::Cheque,
            PaymentStatus::Pending,
            OrderStatus::Cancelled,
            "6.9271,79.8612",
            vec![OrderItem::new(
                3,
                "Beach Sandals",
                "M",
                12,
                Money::from_cents(1999),
            )],
        ),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
