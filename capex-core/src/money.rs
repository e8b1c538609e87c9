//! Currency-style rounding helpers.
//!
//! Monetary amounts round half-up to cents; multiplicative factors round to
//! 4 decimal places for audit display. The same rules apply everywhere a
//! number leaves the scaling math, so totals stay consistent with their parts.

/// Round a monetary amount to 2 decimal places, half-up.
///
/// Amounts in this system are non-negative, so `f64::round` (half away from
/// zero) behaves as half-up here.
pub fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Round a multiplicative factor to 4 decimal places.
pub fn round_factor(factor: f64) -> f64 {
    (factor * 10_000.0).round() / 10_000.0
}
