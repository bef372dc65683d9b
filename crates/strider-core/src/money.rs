//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  The system this replaces kept prices as floats and even let a          │
//! │  non-numeric admin price entry coerce to NaN/0 silently.                │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    $15.99 × 5 = 1599 × 5 = 7995 cents, exactly                          │
//! │    Non-numeric price input is a typed ValidationError, never NaN        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use strider_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1599); // $15.99
//!
//! // Arithmetic operations
//! let doubled = price * 2;                        // $31.98
//! let total = price + Money::from_cents(500);     // $20.99
//!
//! // Admin forms enter prices as text; parsing is strict
//! assert_eq!(Money::parse("29.99").unwrap().cents(), 2999);
//! assert!(Money::parse("abc").is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for corrections and deltas
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► OrderItem.unit_price ──► OrderItem.subtotal
///                                                 │
///                         OrderDraft.total ◄──────┘
///                                │
///                         OrderSubmission.total ──► Order.total ──► analytics
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use strider_core::money::Money;
    ///
    /// let price = Money::from_cents(1599); // Represents $15.99
    /// assert_eq!(price.cents(), 1599);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use strider_core::money::Money;
    ///
    /// let price = Money::from_major_minor(15, 99); // $15.99
    /// assert_eq!(price.cents(), 1599);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Parses a decimal price string ("15.99", "20", "0.50") into Money.
    ///
    /// Strict on purpose: the predecessor system ran admin price entry
    /// through `parseFloat`, so `"abc"` silently became NaN and landed in
    /// the catalog as a zero price. Here it is a typed error.
    ///
    /// ## Rules
    /// - Optional single `.` separator
    /// - At most two fractional digits
    /// - No sign, no thousands separators, no currency symbol
    ///
    /// ## Example
    /// ```rust
    /// use strider_core::money::Money;
    ///
    /// assert_eq!(Money::parse("15.99").unwrap().cents(), 1599);
    /// assert_eq!(Money::parse("20").unwrap().cents(), 2000);
    /// assert_eq!(Money::parse("0.5").unwrap().cents(), 50);
    /// assert!(Money::parse("").is_err());
    /// assert!(Money::parse("1.999").is_err());
    /// assert!(Money::parse("12abc").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let input = input.trim();

        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: reason.to_string(),
        };

        if input.is_empty() {
            return Err(ValidationError::Required {
                field: "price".to_string(),
            });
        }

        let (major_str, minor_str) = match input.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (input, ""),
        };

        if major_str.is_empty() || !major_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("must be a decimal number like 15.99"));
        }

        if minor_str.len() > 2 || !minor_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("at most two decimal places allowed"));
        }

        let major: i64 = major_str
            .parse()
            .map_err(|_| invalid("whole amount too large"))?;

        // "0.5" means 50 cents, "0.50" also 50: pad to two digits
        let minor: i64 = match minor_str.len() {
            0 => 0,
            1 => minor_str.parse::<i64>().unwrap_or(0) * 10,
            _ => minor_str.parse::<i64>().unwrap_or(0),
        };

        major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .map(Money)
            .ok_or_else(|| invalid("amount too large"))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use strider_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1599); // $15.99
    /// let subtotal = unit_price.multiply_quantity(5);
    /// assert_eq!(subtotal.cents(), 7995); // $79.95, exactly
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// Rounding/formatting happens only here, at the display edge. All
/// arithmetic upstream is exact integer math.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Sum of an iterator of Money values (used for order totals).
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
