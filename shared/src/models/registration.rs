//! Registration Model

use serde::{Deserialize, Serialize};

use super::Player;

/// Category reference embedded in a registration payload.
///
/// Carries only the legacy integer id; see [`super::Category`] for how
/// it correlates with the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationCategory {
    pub id: i64,
}

/// An existing registration of the player in a tournament category.
///
/// Server-owned; the flow only reads these to derive per-category
/// status, it never creates or mutates them directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub category: RegistrationCategory,
    #[serde(default)]
    pub partner: Option<Player>,
    #[serde(default)]
    pub paid_by_me: bool,
    #[serde(default)]
    pub paid_by_partner: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_payload() {
        let reg: Registration = serde_json::from_str(
            r#"{
                "category": {"id": 12},
                "partner": {"uid": "p-2", "first_name": "Luis", "last_name": "Mora"},
                "paid_by_me": true,
                "paid_by_partner": false
            }"#,
        )
        .unwrap();
        assert_eq!(reg.category.id, 12);
        assert!(reg.paid_by_me);
        assert!(!reg.paid_by_partner);
        assert_eq!(reg.partner.unwrap().uid, "p-2");
    }

    #[test]
    fn payment_flags_default_to_false() {
        let reg: Registration = serde_json::from_str(r#"{"category": {"id": 3}}"#).unwrap();
        assert!(!reg.paid_by_me);
        assert!(!reg.paid_by_partner);
        assert!(reg.partner.is_none());
    }
}
