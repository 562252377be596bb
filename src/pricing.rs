//! Sale arithmetic: subtotal, discount, VAT and grand total.
//!
//! Every amount that ends up persisted is rounded to cents, so a stored
//! total always equals its stored discounted subtotal plus stored VAT.

use thiserror::Error;

/// VAT applied to the discounted subtotal of every sale.
pub const VAT_RATE: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineItem {
    pub quantity: i32,
    pub unit_price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaleTotals {
    pub subtotal: f64,
    pub after_discount: f64,
    pub vat_amount: f64,
    pub total_amount: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    #[error("item {index}: quantity must be at least 1, got {quantity}")]
    InvalidQuantity { index: usize, quantity: i32 },

    #[error("item {index}: unit_price must be a non-negative amount")]
    InvalidUnitPrice { index: usize },

    #[error("discount_amount must be a non-negative amount")]
    InvalidDiscount,

    #[error("discount_amount {discount} exceeds subtotal {subtotal}")]
    DiscountExceedsSubtotal { discount: f64, subtotal: f64 },

    #[error("sale amounts are too large to represent")]
    AmountOverflow,
}

/// Rounds half away from zero to two decimal places.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

pub fn line_total(item: &LineItem) -> f64 {
    round_cents(f64::from(item.quantity) * item.unit_price)
}

pub fn calculate_totals(items: &[LineItem], discount_amount: f64) -> Result<SaleTotals, PricingError> {
    for (index, item) in items.iter().enumerate() {
        if item.quantity < 1 {
            return Err(PricingError::InvalidQuantity {
                index,
                quantity: item.quantity,
            });
        }
        if !is_amount(item.unit_price) {
            return Err(PricingError::InvalidUnitPrice { index });
        }
    }
    if !is_amount(discount_amount) {
        return Err(PricingError::InvalidDiscount);
    }

    let subtotal = round_cents(items.iter().map(line_total).sum());
    if !subtotal.is_finite() {
        return Err(PricingError::AmountOverflow);
    }
    let discount = round_cents(discount_amount);
    if discount > subtotal {
        return Err(PricingError::DiscountExceedsSubtotal { discount, subtotal });
    }

    let after_discount = round_cents(subtotal - discount);
    let vat_amount = round_cents(after_discount * VAT_RATE);
    let total_amount = round_cents(after_discount + vat_amount);
    if !total_amount.is_finite() {
        return Err(PricingError::AmountOverflow);
    }

    Ok(SaleTotals {
        subtotal,
        after_discount,
        vat_amount,
        total_amount,
    })
}

fn is_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
