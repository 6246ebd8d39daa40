//! Discount Code Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of discount a code grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Percentage,
    Fixed,
}

/// Result of validating a discount code against the backend.
///
/// `final_amount` is authoritative: the backend computes the discounted
/// total and the client displays it as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountResult {
    pub valid: bool,
    #[serde(default)]
    pub discount_applied: Decimal,
    #[serde(default)]
    pub final_amount: Decimal,
    #[serde(default)]
    pub discount_type: Option<DiscountType>,
    #[serde(default)]
    pub discount_value: Option<Decimal>,
}
