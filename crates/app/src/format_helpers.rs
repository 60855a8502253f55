//! Shared formatting utilities for the UI layer.

use dioxus::prelude::ServerFnError;
use shared_types::{AppError, ServiceResult};

/// Flatten a server function call into its data, or a message fit to show
/// the user.
pub fn display_outcome<T>(
    result: Result<ServiceResult<T>, ServerFnError>,
) -> Result<Option<T>, String> {
    match result {
        Ok(outcome) => outcome.into_result().map_err(|e| e.message),
        Err(e) => Err(AppError::friendly_message(&e.to_string())),
    }
}

/// Format a dollar amount as "$1,234.50".
pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

/// Hourly rate as "$45.00/hr".
pub fn format_rate(rate: f64) -> String {
    format!("{}/hr", format_money(rate))
}

/// Average rating as "4.8 / 5", or "No ratings yet" when absent or zero.
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) if r > 0.0 => format!("{r:.1} / 5"),
        _ => "No ratings yet".to_string(),
    }
}

/// "1 year" / "5 years" / "Less than a year".
pub fn format_experience(years: u32) -> String {
    match years {
        0 => "Less than a year".to_string(),
        1 => "1 year".to_string(),
        n => format!("{n} years"),
    }
}

/// Parse a free-text money field. Accepts "45", "45.50" and "$45".
pub fn parse_rate(input: &str) -> Option<f64> {
    input
        .trim()
        .trim_start_matches('$')
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite())
}
