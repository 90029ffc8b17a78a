//! Monetary rounding helper.

/// Rounds a monetary amount to two decimal places (half away from zero).
///
/// Amounts are stored as decimal REAL columns and every derived value
/// (TTC price, sale totals) is rounded to the cent at the point where it
/// is computed, never on read.
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
