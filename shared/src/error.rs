//! Error types for kiosk operations
//!
//! The kiosk runs a notify-and-continue model: most tolerated conditions
//! (unknown id on remove, unmatched barcode) are no-ops, not errors. The
//! variants below are the cases that must be surfaced to the caller.

use thiserror::Error;

/// Primary error type for the kiosk engine.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum KioskError {
    /// Checkout was requested while the cart ledger holds no lines.
    #[error("cannot proceed to payment with an empty cart")]
    EmptyCart,

    /// Quantity edits below 1 are rejected; removal is a separate operation.
    #[error("quantity must be at least 1, got {0}")]
    InvalidQuantity(i64),

    /// Phone numbers must be digits only, at least 7 of them.
    #[error("invalid phone number: {0:?}")]
    InvalidPhoneNumber(String),

    /// Verification codes are exactly 6 digits.
    #[error("invalid verification code: {0:?}")]
    InvalidOtp(String),

    /// Monetary inputs must be finite and non-negative.
    #[error("price must be a finite non-negative amount, got {0}")]
    InvalidPrice(f64),

    /// The operation is only valid on a different screen.
    #[error("expected screen {expected}, session is on {actual}")]
    ScreenMismatch { expected: String, actual: String },
}

impl KioskError {
    pub fn invalid_quantity(quantity: impl Into<i64>) -> Self {
        Self::InvalidQuantity(quantity.into())
    }

    pub fn invalid_phone(number: impl Into<String>) -> Self {
        Self::InvalidPhoneNumber(number.into())
    }

    pub fn invalid_otp(code: impl Into<String>) -> Self {
        Self::InvalidOtp(code.into())
    }

    pub fn invalid_price(price: f64) -> Self {
        Self::InvalidPrice(price)
    }

    pub fn screen_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::ScreenMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}
