//! Formatting utilities used for CLI and export outputs.

/// Worked hours as shown to the operator, e.g. `12.50`.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// Horimeter reading with two decimals, as entered on the form.
pub fn format_reading(value: f64) -> String {
    format!("{:.2}", value)
}
