//! Rupee formatting and order-summary arithmetic.
//!
//! List prices are whole rupees, but the order summary produces fractional
//! amounts (18% tax), so the arithmetic runs on [`Decimal`] rather than
//! floats.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Flat shipping charge in rupees.
const SHIPPING_RUPEES: i64 = 99;

/// Tax rate applied to the subtotal (18% GST).
const TAX_RATE_PERCENT: i64 = 18;

/// Cost breakdown for an order: subtotal, shipping, tax, and total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Sum of line totals, in rupees.
    pub subtotal: Decimal,
    /// Flat shipping charge.
    pub shipping: Decimal,
    /// Tax on the subtotal.
    pub tax: Decimal,
    /// Subtotal + shipping + tax.
    pub total: Decimal,
}

impl OrderSummary {
    /// Compute the summary for a cart subtotal in whole rupees.
    #[must_use]
    pub fn from_subtotal(subtotal: u64) -> Self {
        let subtotal = Decimal::from(subtotal);
        let shipping = Decimal::new(SHIPPING_RUPEES, 0);
        let tax = (subtotal * Decimal::new(TAX_RATE_PERCENT, 2)).round_dp(2);
        let total = subtotal + shipping + tax;

        Self {
            subtotal,
            shipping,
            tax,
            total,
        }
    }
}

/// Format an amount as rupees with Indian digit grouping.
///
/// The last three integer digits form one group, every group above that
/// is two digits: `1234567` formats as `₹12,34,567`. Paise are shown only
/// when the amount is fractional.
#[must_use]
pub fn format_rupees(amount: Decimal) -> String {
    let amount = amount.round_dp(2);
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    let abs = amount.abs();
    let rupees = abs.trunc();
    let paise = ((abs - rupees) * Decimal::from(100)).to_u64().unwrap_or(0);

    let grouped = group_indian(&rupees.to_string());
    if paise == 0 {
        format!("{sign}₹{grouped}")
    } else {
        format!("{sign}₹{grouped}.{paise:02}")
    }
}

/// Apply Indian digit grouping to a plain digit string.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (mut rest, tail) = digits.split_at(digits.len() - 3);
    let mut groups = vec![tail.to_string()];
    while rest.len() > 2 {
        let (head, group) = rest.split_at(rest.len() - 2);
        groups.push(group.to_string());
        rest = head;
    }
    groups.push(rest.to_string());
    groups.reverse();
    groups.join(",")
}
