//! Cart ledger
//!
//! Ordered list of distinct product lines for one session. Detection,
//! manual scans, and quantity edits all funnel through here so the
//! one-line-per-product invariant holds no matter who is mutating.

pub mod money;

use money::{to_decimal, SST_RATE};
use rust_decimal::Decimal;
use shared::models::{CartLine, CatalogItem};
use shared::KioskError;

/// Aggregated totals for display and payment.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub subtotal: Decimal,
    /// SST on the subtotal, unrounded. Round at display time only.
    pub tax: Decimal,
    pub total: Decimal,
    /// Sum of line quantities.
    pub units: u32,
    /// Number of distinct lines.
    pub lines: usize,
}

/// The active session's cart.
///
/// Lines keep insertion order; re-detecting a product mutates its
/// existing line in place.
#[derive(Debug, Clone, Default)]
pub struct CartLedger {
    lines: Vec<CartLine>,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct product lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities across all lines.
    pub fn total_units(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lines.iter().any(|line| line.id() == id)
    }

    /// Add a product to the cart, or fold into its existing line.
    ///
    /// Quantity is additive; a sensed weight accumulates onto whatever
    /// the line already carries.
    pub fn add_or_increment(
        &mut self,
        item: &CatalogItem,
        quantity: u32,
        weight: Option<f64>,
    ) -> &CartLine {
        let pos = self.lines.iter().position(|line| line.id() == item.id);
        match pos {
            Some(idx) => {
                let line = &mut self.lines[idx];
                line.quantity += quantity;
                if let Some(delta) = weight {
                    line.weight = Some(line.weight.unwrap_or(0.0) + delta);
                }
                tracing::debug!(id = %item.id, quantity = line.quantity, "cart line incremented");
                &self.lines[idx]
            }
            None => {
                tracing::debug!(id = %item.id, quantity, "cart line added");
                self.lines.push(CartLine::new(item.clone(), quantity, weight));
                self.lines.last().expect("just pushed")
            }
        }
    }

    /// Set an existing line's quantity.
    ///
    /// Quantities below 1 are rejected; removal goes through [`remove`].
    /// Unknown ids are a silent no-op.
    ///
    /// [`remove`]: CartLedger::remove
    pub fn set_quantity(&mut self, id: &str, quantity: u32) -> Result<(), KioskError> {
        if quantity < 1 {
            return Err(KioskError::invalid_quantity(quantity as i64));
        }
        if let Some(line) = self.lines.iter_mut().find(|line| line.id() == id) {
            line.quantity = quantity;
        }
        Ok(())
    }

    /// Drop a line. Removing an id that is not present does nothing.
    pub fn remove(&mut self, id: &str) {
        self.lines.retain(|line| line.id() != id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of price x quantity over all lines, as Decimal.
    pub fn subtotal(&self) -> Decimal {
        self.lines
            .iter()
            .map(|line| to_decimal(line.item.price) * Decimal::from(line.quantity))
            .sum()
    }

    /// 6% SST on the subtotal, unrounded.
    pub fn tax(&self) -> Decimal {
        self.subtotal() * SST_RATE
    }

    pub fn total(&self) -> Decimal {
        self.subtotal() + self.tax()
    }

    pub fn summary(&self) -> CartSummary {
        let subtotal = self.subtotal();
        let tax = subtotal * SST_RATE;
        CartSummary {
            subtotal,
            tax,
            total: subtotal + tax,
            units: self.total_units(),
            lines: self.line_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use super::money::{display_amount, format_rm};

    fn catalog() -> Catalog {
        Catalog::load()
    }

    #[test]
    fn test_totals_for_milk_and_bread() {
        let catalog = catalog();
        let mut cart = CartLedger::new();
        cart.add_or_increment(catalog.get("1").unwrap(), 2, None); // 8.90 x2
        cart.add_or_increment(catalog.get("2").unwrap(), 1, None); // 4.50

        let summary = cart.summary();
        assert_eq!(display_amount(summary.subtotal), "22.30");
        // Tax is kept unrounded internally
        assert_eq!(summary.tax, Decimal::new(1338, 3));
        assert_eq!(display_amount(summary.tax), "1.34");
        assert_eq!(format_rm(summary.total), "RM 23.64");
    }

    #[test]
    fn test_add_or_increment_folds_into_existing_line() {
        let catalog = catalog();
        let mut cart = CartLedger::new();
        cart.add_or_increment(catalog.get("8").unwrap(), 1, None);
        cart.add_or_increment(catalog.get("8").unwrap(), 2, None);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_units(), 3);
        assert_eq!(cart.lines()[0].quantity, 3);
    }

    #[test]
    fn test_weight_accumulates_on_existing_line() {
        let catalog = catalog();
        let mut cart = CartLedger::new();
        cart.add_or_increment(catalog.get("14").unwrap(), 1, Some(1.2));
        cart.add_or_increment(catalog.get("14").unwrap(), 1, Some(0.8));

        let line = &cart.lines()[0];
        assert_eq!(line.quantity, 2);
        assert_eq!(line.weight, Some(2.0));

        // No weight on the increment leaves the accumulated value alone
        cart.add_or_increment(catalog.get("14").unwrap(), 1, None);
        assert_eq!(cart.lines()[0].weight, Some(2.0));
    }

    #[test]
    fn test_totals_are_order_independent() {
        let catalog = catalog();
        let mut forward = CartLedger::new();
        let mut reverse = CartLedger::new();
        for id in ["1", "5", "9"] {
            forward.add_or_increment(catalog.get(id).unwrap(), 2, None);
        }
        for id in ["9", "5", "1"] {
            reverse.add_or_increment(catalog.get(id).unwrap(), 2, None);
        }
        assert_eq!(forward.total(), reverse.total());
    }

    #[test]
    fn test_set_quantity_rejects_zero() {
        let catalog = catalog();
        let mut cart = CartLedger::new();
        cart.add_or_increment(catalog.get("1").unwrap(), 1, None);

        let err = cart.set_quantity("1", 0).unwrap_err();
        assert!(matches!(err, KioskError::InvalidQuantity(0)));
        assert_eq!(cart.lines()[0].quantity, 1);

        cart.set_quantity("1", 5).unwrap();
        assert_eq!(cart.lines()[0].quantity, 5);

        // Unknown id is a no-op, not an error
        cart.set_quantity("999", 3).unwrap();
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let catalog = catalog();
        let mut cart = CartLedger::new();
        cart.add_or_increment(catalog.get("1").unwrap(), 1, None);
        cart.add_or_increment(catalog.get("2").unwrap(), 1, None);

        cart.remove("1");
        assert_eq!(cart.line_count(), 1);
        cart.remove("1");
        assert_eq!(cart.line_count(), 1);
        assert!(!cart.contains("1"));
        assert!(cart.contains("2"));
    }

    #[test]
    fn test_empty_cart_totals_are_zero() {
        let cart = CartLedger::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(display_amount(cart.tax()), "0.00");
    }
}
