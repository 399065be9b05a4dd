//! Money helpers
//!
//! All cart arithmetic runs on `Decimal`. Unit prices arrive as f64 from
//! the catalog and are converted at the boundary; rounding to two places
//! happens only when an amount is displayed or exported.

use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use shared::KioskError;

/// Display precision for Ringgit amounts.
pub const DECIMAL_PLACES: u32 = 2;

/// Malaysian Sales and Service Tax rate (6%).
pub const SST_RATE: Decimal = Decimal::from_parts(6, 0, 0, false, 2);

/// Convert an f64 price into a Decimal for computation.
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Prices must be finite and non-negative before they reach arithmetic.
pub fn validate_price(price: f64) -> Result<(), KioskError> {
    if !price.is_finite() || price < 0.0 {
        return Err(KioskError::invalid_price(price));
    }
    Ok(())
}

/// Convert back to f64, rounded half-away-from-zero to cents.
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Fixed two-decimal string, e.g. "23.64".
pub fn display_amount(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Ringgit display string, e.g. "RM 23.64".
pub fn format_rm(value: Decimal) -> String {
    format!("RM {}", display_amount(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_artifacts_do_not_leak() {
        // 0.1 + 0.2 stays 0.30 through the Decimal path
        let sum = to_decimal(0.1) + to_decimal(0.2);
        assert_eq!(to_f64(sum), 0.3);
        assert_eq!(display_amount(sum), "0.30");
    }

    #[test]
    fn test_accumulated_prices_round_once() {
        let mut total = Decimal::ZERO;
        for _ in 0..3 {
            total += to_decimal(8.90);
        }
        assert_eq!(to_f64(total), 26.70);
        assert_eq!(format_rm(total), "RM 26.70");
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        let value = Decimal::new(23_635, 3);
        assert_eq!(display_amount(value), "23.64");
    }

    #[test]
    fn test_sst_rate() {
        assert_eq!(SST_RATE, Decimal::new(6, 2));
    }

    #[test]
    fn test_validate_price_bounds() {
        assert!(validate_price(8.90).is_ok());
        assert!(validate_price(0.0).is_ok());
        assert!(matches!(
            validate_price(-1.0),
            Err(KioskError::InvalidPrice(_))
        ));
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }
}
