//! Category Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tournament category as listed in the price catalog.
///
/// The backend exposes two identifiers for the same category: the
/// catalog UUID (`id`) and the legacy integer id (`category_id`). The
/// integer id is what registration payloads embed, so it is the key
/// used to correlate the catalog with the player's registrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    /// Legacy integer id shared with registration payloads.
    #[serde(rename = "category_id")]
    pub display_id: i64,
    pub name: String,
    /// Entry price per player in decimal currency units (799 = 799 MXN).
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
