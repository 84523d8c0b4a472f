//! Display formatting helpers for monetary amounts and dates.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Formats a monetary amount for display, e.g. `"1250.50 USD"`.
pub fn format_money(amount: Decimal, currency: &str) -> String {
    format!("{} {}", amount.round_dp(DISPLAY_DECIMAL_PRECISION), currency)
}

/// Formats a goal date for display, e.g. `"Mar 15, 2027"`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
