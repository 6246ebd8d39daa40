//! Category availability resolver
//!
//! Merges the category catalog with the player's existing registrations
//! into a per-category status and clickability flag. The two payloads
//! identify categories differently (catalog UUID vs. embedded integer
//! id); the legacy integer id is the only key the backend shares
//! between them, so correlation is pinned to it. A registration whose
//! category id matches no catalog entry is a backend defect: it is
//! logged and skipped, never guessed at by name.

use std::collections::HashMap;

use shared::models::{Category, Player, Registration};

/// Derived status of a category for the current player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryStatus {
    /// No registration; the player may start one.
    Available,
    /// Registered, neither side has paid; either party may complete.
    PendingPayment,
    /// Partner already paid; the player must complete their part.
    NeedsPayment,
    /// The player paid; nothing left to do until the partner pays.
    WaitingOnPartner,
    /// Both sides paid.
    FullyPaid,
}

impl CategoryStatus {
    /// Whether selecting this category starts or resumes a flow.
    pub fn clickable(&self) -> bool {
        matches!(
            self,
            Self::Available | Self::PendingPayment | Self::NeedsPayment
        )
    }

    /// Whether a registration exists at all.
    pub fn is_registered(&self) -> bool {
        !matches!(self, Self::Available)
    }
}

/// A catalog category merged with the player's registration state.
#[derive(Debug, Clone)]
pub struct ResolvedCategory {
    pub category: Category,
    pub status: CategoryStatus,
    /// Partner from the existing registration, if any.
    pub partner: Option<Player>,
}

impl ResolvedCategory {
    pub fn clickable(&self) -> bool {
        self.status.clickable()
    }
}

/// Categories partitioned for display: the player's own registrations
/// first, then everything still open. Catalog order is preserved within
/// each group.
#[derive(Debug, Clone, Default)]
pub struct CategoryBoard {
    pub mine: Vec<ResolvedCategory>,
    pub available: Vec<ResolvedCategory>,
}

impl CategoryBoard {
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedCategory> {
        self.mine.iter().chain(self.available.iter())
    }

    /// Look up a resolved category by its catalog id.
    pub fn find(&self, id: uuid::Uuid) -> Option<&ResolvedCategory> {
        self.iter().find(|resolved| resolved.category.id == id)
    }
}

fn status_of(registration: &Registration) -> CategoryStatus {
    match (registration.paid_by_me, registration.paid_by_partner) {
        (true, true) => CategoryStatus::FullyPaid,
        (true, false) => CategoryStatus::WaitingOnPartner,
        (false, true) => CategoryStatus::NeedsPayment,
        (false, false) => CategoryStatus::PendingPayment,
    }
}

/// Merge the catalog with the registration list.
///
/// The integer-id lookup is built once per call; callers re-resolve
/// whenever either payload changes.
pub fn resolve(catalog: &[Category], registrations: &[Registration]) -> CategoryBoard {
    let mut by_display_id: HashMap<i64, &Registration> = HashMap::new();
    for registration in registrations {
        by_display_id.insert(registration.category.id, registration);
    }

    let known: std::collections::HashSet<i64> =
        catalog.iter().map(|cat| cat.display_id).collect();
    for registration in registrations {
        if !known.contains(&registration.category.id) {
            tracing::warn!(
                category_id = registration.category.id,
                "registration references a category missing from the catalog"
            );
        }
    }

    let mut board = CategoryBoard::default();
    for category in catalog {
        match by_display_id.get(&category.display_id) {
            Some(registration) => board.mine.push(ResolvedCategory {
                category: category.clone(),
                status: status_of(registration),
                partner: registration.partner.clone(),
            }),
            None => board.available.push(ResolvedCategory {
                category: category.clone(),
                status: CategoryStatus::Available,
                partner: None,
            }),
        }
    }
    board
}
