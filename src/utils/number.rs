//! Decimal helpers for horimeter readings.

/// Round to 2 decimal places, ties to even (`10.125` → `10.12`).
/// Values too large to scale already have no fractional digits and are
/// returned as they are.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    let r = scaled.round_ties_even() / 100.0;
    // avoid printing "-0.00"
    if r == 0.0 { 0.0 } else { r }
}

/// Parse a non-negative, finite decimal. Surrounding whitespace is ignored.
pub fn parse_non_negative(s: &str) -> Option<f64> {
    let v = s.trim().parse::<f64>().ok()?;
    if v.is_finite() && v >= 0.0 {
        Some(v)
    } else {
        None
    }
}
