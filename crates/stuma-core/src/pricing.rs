//! # Order Pricing
//!
//! Pure arithmetic for the checkout screen: delivery fee schedule, order
//! totals, and rupiah formatting. Stateless by design; nothing here touches
//! manager state.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Delivery speed chosen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryOption {
    /// Regular courier, free of charge.
    Standard,
    /// Next-day courier.
    Express,
    /// Same-day courier.
    Flash,
}

impl DeliveryOption {
    /// The delivery fee in rupiah.
    #[inline]
    pub const fn fee(&self) -> f64 {
        match self {
            DeliveryOption::Standard => 0.0,
            DeliveryOption::Express => 10_000.0,
            DeliveryOption::Flash => 30_000.0,
        }
    }
}

impl Default for DeliveryOption {
    fn default() -> Self {
        DeliveryOption::Standard
    }
}

/// Order total: unit price × quantity plus the delivery fee.
pub fn order_total(unit_price: f64, quantity: u32, delivery: DeliveryOption) -> f64 {
    unit_price * f64::from(quantity) + delivery.fee()
}

/// Formats a rupiah amount for display, e.g. `Rp 500.000`.
///
/// Rupiah has no fractional unit in everyday display; the amount is rounded
/// to whole rupiah and grouped with dots.
pub fn format_rupiah(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("{}Rp {}", if whole < 0 { "-" } else { "" }, grouped)
}
