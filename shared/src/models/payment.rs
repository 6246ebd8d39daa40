//! Payment Wire Types
//!
//! Field casing follows the backend's payment API: intent fields are
//! camelCase except `discount_code`, responses are snake_case with a
//! camelCase alias for the client secret.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to create a payment intent.
///
/// Built fresh for every submission attempt; never reused across
/// retries with a stale client secret.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentRequest {
    /// Payable amount in decimal currency units (not minor units).
    pub amount: Decimal,
    pub currency: String,
    /// Required by the backend even when empty.
    pub restriction: String,
    pub player_name: String,
    pub player_uid: String,
    pub partner_uid: String,
    pub tournament_id: String,
    /// Legacy integer category id.
    pub category_id: i64,
    pub email: String,
    /// 1 = just the player, 2 = both partners.
    pub paid_for: u8,
    #[serde(rename = "discount_code", skip_serializing_if = "Option::is_none")]
    pub discount_code: Option<String>,
}

/// Response to intent creation: either a client secret for the payment
/// SDK or a free-registration outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntentResponse {
    #[serde(default, alias = "clientSecret")]
    pub client_secret: Option<String>,
    #[serde(default)]
    pub free_registration: bool,
}

/// Request to redeem a registration code in place of payment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemCodeRequest {
    pub code: String,
    pub tournament_id: String,
    pub category_id: Uuid,
    pub player_uid: String,
    pub partner_uid: String,
}
