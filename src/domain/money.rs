// src/domain/money.rs
use num_format::{Locale, ToFormattedString};

/// Formats a dollar amount the way the dashboard shows it: "$1,500" for whole
/// amounts, "$1,500.50" otherwise.
pub fn format_usd(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_formatted_string(&Locale::en);
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

    match cents % 100 {
        0 => format!("{sign}${dollars}"),
        rem => format!("{sign}${dollars}.{rem:02}"),
    }
}
