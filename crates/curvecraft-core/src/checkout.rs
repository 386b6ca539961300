//! Checkout stub: totals a client-supplied cart and issues an order id.
//!
//! Nothing is persisted, charged, or reserved. Item prices and quantities are
//! taken from the request as-is and are not reconciled against the catalog.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::CheckoutError;

pub const ORDER_CURRENCY: &str = "USD";
pub const ORDER_MESSAGE: &str = "Order received. This is a checkout stub.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub qty: i64,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl CartItem {
    /// `price * qty`, or `None` if the product does not fit in a `Decimal`.
    #[must_use]
    pub fn line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.qty))
    }
}

/// Shipping address. Collected for the order form, unused by the stub.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub name: Option<String>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub promo_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: Uuid,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub currency: String,
    pub message: String,
}

/// Recognized promo codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoCode {
    Welcome10,
    CurveCraft15,
}

impl PromoCode {
    /// Case-insensitive lookup. Unknown or empty codes yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_uppercase().as_str() {
            "WELCOME10" => Some(Self::Welcome10),
            "CURVECRAFT15" => Some(Self::CurveCraft15),
            _ => None,
        }
    }

    /// Whole-number percentage taken off the subtotal.
    #[must_use]
    pub fn percent_off(self) -> u32 {
        match self {
            Self::Welcome10 => 10,
            Self::CurveCraft15 => 15,
        }
    }

    #[must_use]
    pub fn discount_on(self, subtotal: Decimal) -> Option<Decimal> {
        subtotal.checked_mul(Decimal::new(i64::from(self.percent_off()), 2))
    }
}

impl fmt::Display for PromoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Welcome10 => write!(f, "WELCOME10"),
            Self::CurveCraft15 => write!(f, "CURVECRAFT15"),
        }
    }
}

/// Sum of `price * qty` over every item. `None` on overflow.
#[must_use]
pub fn subtotal(items: &[CartItem]) -> Option<Decimal> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.line_total()?))
}

/// Round to cents half-to-even and floor at zero.
#[must_use]
pub fn finalize_total(amount: Decimal) -> Decimal {
    amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
        .max(Decimal::ZERO)
}

/// Price the cart and issue a fresh order id.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] when the request has no items and
/// [`CheckoutError::AmountOutOfRange`] when the cart total overflows.
pub fn checkout(request: &CheckoutRequest) -> Result<Order, CheckoutError> {
    if request.items.is_empty() {
        tracing::debug!("checkout rejected: cart is empty");
        return Err(CheckoutError::EmptyCart);
    }

    let promo = request.promo_code.as_deref().and_then(PromoCode::parse);
    let Some((subtotal, discounted)) = price_cart(&request.items, promo) else {
        tracing::debug!(
            items = request.items.len(),
            "checkout rejected: cart total out of range"
        );
        return Err(CheckoutError::AmountOutOfRange);
    };
    let total = finalize_total(discounted);
    let order_id = Uuid::new_v4();
    let promo_label = promo.map_or_else(|| "none".to_owned(), |p| p.to_string());

    tracing::info!(
        %order_id,
        items = request.items.len(),
        promo = %promo_label,
        %subtotal,
        %total,
        "checkout accepted"
    );

    Ok(Order {
        order_id,
        total,
        currency: ORDER_CURRENCY.to_owned(),
        message: ORDER_MESSAGE.to_owned(),
    })
}

/// Subtotal and the amount due after the promo discount.
fn price_cart(items: &[CartItem], promo: Option<PromoCode>) -> Option<(Decimal, Decimal)> {
    let subtotal = subtotal(items)?;
    let discount = match promo {
        Some(code) => code.discount_on(subtotal)?,
        None => Decimal::ZERO,
    };
    Some((subtotal, subtotal.checked_sub(discount)?))
}

#[cfg(test)]
#[path = "checkout_test.rs"]
mod tests;
