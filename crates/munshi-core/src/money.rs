//! # Money Module
//!
//! Provides the `Money` type for handling rupee amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! In floating point:   0.1 + 0.2 = 0.30000000000000004
//! In integer paisa:    10 + 20   = 30
//! ```
//! Every monetary value in the system is a whole number of paisa
//! (1 PKR = 100 paisa) held in an `i64`. The database snapshot, the
//! aggregates, and the report columns all use paisa; only display
//! formatting converts to rupees.
//!
//! ## Usage
//! ```rust
//! use munshi_core::money::Money;
//!
//! let price = Money::from_paisa(109_950); // 1,099.50 PKR
//! let total = price + Money::from_paisa(50);
//! assert_eq!(total.paisa(), 110_000);
//! assert_eq!(total.grouped(), "1,100.00");
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in paisa, the smallest PKR unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: a net profit/loss figure may be negative
/// - **Single-field tuple struct**: zero-cost abstraction over i64
/// - **Serde as a bare integer**: the snapshot stores paisa directly
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paisa.
    ///
    /// ## Example
    /// ```rust
    /// use munshi_core::money::Money;
    ///
    /// let amount = Money::from_paisa(1099);
    /// assert_eq!(amount.paisa(), 1099);
    /// ```
    #[inline]
    pub const fn from_paisa(paisa: i64) -> Self {
        Money(paisa)
    }

    /// Creates a Money value from whole rupees.
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Returns the value in paisa.
    #[inline]
    pub const fn paisa(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion (truncated toward zero).
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paisa portion (always 0-99).
    #[inline]
    pub const fn paisa_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero rupees.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is strictly positive.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies by a quantity (stock value, line totals).
    ///
    /// ## Example
    /// ```rust
    /// use munshi_core::money::Money;
    ///
    /// let unit_price = Money::from_paisa(299);
    /// assert_eq!(unit_price.multiply_quantity(3).paisa(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Formats the amount with thousands separators and two decimals,
    /// without a currency suffix. Used for report table cells.
    ///
    /// ## Example
    /// ```rust
    /// use munshi_core::money::Money;
    ///
    /// assert_eq!(Money::from_paisa(123_456_789).grouped(), "1,234,567.89");
    /// assert_eq!(Money::from_paisa(-550).grouped(), "-5.50");
    /// ```
    pub fn grouped(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let rupees = self.rupees().abs().to_string();
        let mut grouped = String::with_capacity(rupees.len() + rupees.len() / 3);
        for (i, digit) in rupees.chars().enumerate() {
            if i > 0 && (rupees.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        format!("{}{}.{:02}", sign, grouped, self.paisa_part())
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Error produced when user input cannot be read as a rupee amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid amount '{0}': expected digits with up to two decimal places")]
pub struct ParseMoneyError(pub String);

/// Parses a decimal rupee amount (`"1234"`, `"1234.5"`, `"1234.56"`)
/// without going through floating point. A leading `-` is accepted;
/// more than two fraction digits or any stray character is an error.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let err = || ParseMoneyError(raw.to_string());

        let (negative, digits) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (digits, ""),
        };

        if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(err());
        }
        if fraction.len() > 2 || !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(err());
        }

        let rupees: i64 = whole.parse().map_err(|_| err())?;
        let paisa: i64 = if fraction.is_empty() {
            0
        } else if fraction.len() == 1 {
            fraction.parse::<i64>().map_err(|_| err())? * 10
        } else {
            fraction.parse().map_err(|_| err())?
        };

        let total = rupees * 100 + paisa;
        Ok(Money(if negative { -total } else { total }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Grouped amount with the PKR suffix, as the dashboard cards and
/// report summary lines print it.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} PKR", self.grouped())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation for aggregate totals.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
