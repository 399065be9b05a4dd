//! Payment payload
//!
//! Builds the transaction record embedded in the checkout QR code. The
//! engine only guarantees the JSON shape; rendering the QR image is the
//! display layer's problem.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::money::{display_amount, to_f64, validate_price};
use crate::cart::CartLedger;
use shared::util::now_millis;
use shared::KioskError;

/// How the shopper settled the bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Card,
    Mobile,
    Cash,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "CARD",
            PaymentMethod::Mobile => "MOBILE",
            PaymentMethod::Cash => "CASH",
        }
    }
}

/// One purchased line in the transaction payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionLine {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub quantity: u32,
    pub price: f64,
    pub total: f64,
}

/// The payload encoded into the checkout QR code.
///
/// Monetary totals are fixed two-decimal strings; per-line amounts stay
/// numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub transaction_id: String,
    /// RFC 3339 UTC timestamp.
    pub timestamp: String,
    pub items: Vec<TransactionLine>,
    pub subtotal: String,
    pub tax: String,
    pub total: String,
    pub currency: String,
    pub payment_method: String,
}

impl TransactionRecord {
    /// Snapshot the cart into a transaction payload.
    ///
    /// An empty cart cannot be paid for.
    pub fn build(cart: &CartLedger, method: PaymentMethod) -> Result<Self, KioskError> {
        if cart.is_empty() {
            return Err(KioskError::EmptyCart);
        }
        for line in cart.lines() {
            validate_price(line.item.price)?;
        }

        let summary = cart.summary();
        let items = cart
            .lines()
            .iter()
            .map(|line| TransactionLine {
                id: line.id().to_string(),
                name: line.item.name.clone(),
                brand: line.item.brand.clone(),
                quantity: line.quantity,
                price: line.item.price,
                total: to_f64(
                    crate::cart::money::to_decimal(line.item.price)
                        * rust_decimal::Decimal::from(line.quantity),
                ),
            })
            .collect();

        let record = Self {
            transaction_id: format!("TXN{}", now_millis()),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            items,
            subtotal: display_amount(summary.subtotal),
            tax: display_amount(summary.tax),
            total: display_amount(summary.total),
            currency: "MYR".to_string(),
            payment_method: method.as_str().to_string(),
        };
        tracing::info!(
            transaction_id = %record.transaction_id,
            total = %record.total,
            method = method.as_str(),
            "transaction recorded"
        );
        Ok(record)
    }

    /// JSON string handed to the QR renderer.
    pub fn to_qr_payload(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn sample_cart() -> CartLedger {
        let catalog = Catalog::load();
        let mut cart = CartLedger::new();
        cart.add_or_increment(catalog.get("1").unwrap(), 1, None); // 8.90
        cart.add_or_increment(catalog.get("2").unwrap(), 2, None); // 4.50 x2
        cart
    }

    #[test]
    fn test_build_snapshot_totals() {
        let cart = sample_cart();
        let record = TransactionRecord::build(&cart, PaymentMethod::Cash).unwrap();

        assert!(record.transaction_id.starts_with("TXN"));
        assert_eq!(record.items.len(), 2);
        assert_eq!(record.items[1].quantity, 2);
        assert_eq!(record.items[1].total, 9.00);
        // 8.90 + 9.00 = 17.90, SST 1.074
        assert_eq!(record.subtotal, "17.90");
        assert_eq!(record.tax, "1.07");
        assert_eq!(record.total, "18.97");
        assert_eq!(record.currency, "MYR");
        assert_eq!(record.payment_method, "CASH");
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        let cart = CartLedger::new();
        let err = TransactionRecord::build(&cart, PaymentMethod::Card).unwrap_err();
        assert!(matches!(err, KioskError::EmptyCart));
    }

    #[test]
    fn test_non_finite_price_is_rejected() {
        let mut item = Catalog::load().get("1").unwrap().clone();
        item.price = f64::NAN;
        let mut cart = CartLedger::new();
        cart.add_or_increment(&item, 1, None);

        let err = TransactionRecord::build(&cart, PaymentMethod::Card).unwrap_err();
        assert!(matches!(err, KioskError::InvalidPrice(_)));
    }

    #[test]
    fn test_qr_payload_uses_camel_case_keys() {
        let cart = sample_cart();
        let record = TransactionRecord::build(&cart, PaymentMethod::Mobile).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&record.to_qr_payload().unwrap()).unwrap();

        assert!(json.get("transactionId").is_some());
        assert!(json.get("paymentMethod").is_some());
        assert_eq!(json["paymentMethod"], "MOBILE");
        assert_eq!(json["items"][0]["id"], "1");
        assert!(json["subtotal"].is_string());
    }
}
