//! Formatting of evaluated results for the display.

/// Format a result for display.
///
/// Integral values are printed without a fractional part (`10.0` becomes
/// `"10"`), everything else uses the shortest decimal representation that
/// round-trips.
pub fn format_result(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        // Also folds -0 into "0"
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
