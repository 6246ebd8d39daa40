//! Player Model

use serde::{Deserialize, Serialize};

/// A player account, as returned by partner search and embedded in
/// registrations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub uid: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl Player {
    /// Display name assembled from first and last name.
    pub fn full_name(&self) -> String {
        let name = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        );
        let name = name.trim();
        if name.is_empty() {
            "Jugador".to_string()
        } else {
            name.to_string()
        }
    }

    /// Up to two initials for the avatar placeholder.
    pub fn initials(&self) -> String {
        self.full_name()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(first: &str, last: &str) -> Player {
        Player {
            uid: "u1".into(),
            first_name: Some(first.into()),
            last_name: Some(last.into()),
            email: None,
            photo_url: None,
        }
    }

    #[test]
    fn full_name_trims_missing_parts() {
        let mut p = player("Ana", "López");
        assert_eq!(p.full_name(), "Ana López");
        p.last_name = None;
        assert_eq!(p.full_name(), "Ana");
        p.first_name = None;
        assert_eq!(p.full_name(), "Jugador");
    }

    #[test]
    fn initials_take_two() {
        assert_eq!(player("Ana", "López").initials(), "AL");
        assert_eq!(player("Ana", "").initials(), "A");
    }
}
