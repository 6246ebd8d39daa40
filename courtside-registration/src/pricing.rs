//! Pricing engine
//!
//! Pure computation: subtotal = price × party size; a backend-validated
//! discount replaces the total only when the player pays for themself
//! alone. Amounts are decimal currency units throughout (799 = 799
//! MXN), never minor units.

use rust_decimal::Decimal;

use shared::models::DiscountResult;

use crate::error::{FlowError, FlowResult};

/// Whether the payer covers only themself or both partners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartySize {
    #[default]
    One,
    Both,
}

impl PartySize {
    /// Number of entries covered (1 or 2).
    pub fn count(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Both => 2,
        }
    }

    fn factor(&self) -> Decimal {
        Decimal::from(self.count())
    }
}

/// Price breakdown for display and submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

impl Quote {
    /// Zero totals route through the free-registration path.
    pub fn is_free(&self) -> bool {
        self.total.is_zero()
    }
}

/// Subtotal before any discount.
pub fn subtotal(price: Decimal, party_size: PartySize) -> Decimal {
    price * party_size.factor()
}

/// Compute the payable quote.
///
/// The discount only applies for a single-entry payment; the backend's
/// `final_amount` is taken verbatim. A negative final amount is a
/// backend contract violation and is surfaced, not clamped.
pub fn quote(
    price: Decimal,
    party_size: PartySize,
    discount: Option<&DiscountResult>,
) -> FlowResult<Quote> {
    let subtotal = subtotal(price, party_size);

    let quote = match discount {
        Some(result) if party_size == PartySize::One => {
            if result.final_amount < Decimal::ZERO {
                return Err(FlowError::contract(format!(
                    "discount final_amount is negative: {}",
                    result.final_amount
                )));
            }
            Quote {
                subtotal,
                discount: result.discount_applied,
                total: result.final_amount,
            }
        }
        _ => Quote {
            subtotal,
            discount: Decimal::ZERO,
            total: subtotal,
        },
    };
    Ok(quote)
}

/// Format an amount for display, e.g. "$799.00 MXN".
pub fn format_amount(amount: Decimal) -> String {
    format!("${:.2} MXN", amount)
}
