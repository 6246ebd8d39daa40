//! Registration session
//!
//! One explicitly-constructed session per registration flow; nothing is
//! shared between sessions, so concurrent flows (e.g. two tabs) cannot
//! cross-talk. The session owns the selection and enforces its
//! invariants: a locked partner is cleared when the category changes,
//! the discount is cleared on category or party-size change, and a
//! non-clickable category selection mutates nothing.

use uuid::Uuid;

use shared::models::{DiscountResult, Player, Tournament};

use crate::availability::{self, CategoryBoard};
use crate::backend::RegistrationBackend;
use crate::discount::DiscountEngine;
use crate::error::{FlowError, FlowResult};
use crate::pricing::{self, PartySize, Quote};
use crate::steps::{Step, StepMachine};

/// How the player intends to settle the registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    Card,
    Code,
}

/// Outcome of a discount application attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountOutcome {
    /// Backend accepted the code; the discount is now applied.
    Applied,
    /// Backend rejected the code; prior discount state is untouched.
    Invalid,
    /// The category changed while the validation was in flight; the
    /// response was discarded.
    Superseded,
}

/// The session-scoped selection. Created on flow entry, discarded on
/// navigation away or success.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub category: Option<shared::models::Category>,
    pub partner: Option<Player>,
    /// True only when the partner came from an existing incomplete
    /// registration in the selected category.
    pub partner_locked: bool,
    pub payment_method: PaymentMethod,
    pub party_size: PartySize,
    pub discount: DiscountEngine,
}

/// The registration flow for one player in one tournament.
#[derive(Debug)]
pub struct RegistrationSession {
    tournament: Tournament,
    player: Player,
    board: CategoryBoard,
    steps: StepMachine,
    selection: Selection,
    submitting: bool,
    pending_secret: Option<String>,
}

impl RegistrationSession {
    /// Build a session from already-loaded payloads.
    pub fn new(
        tournament: Tournament,
        player: Player,
        catalog: Vec<shared::models::Category>,
        registrations: Vec<shared::models::Registration>,
    ) -> Self {
        let board = availability::resolve(&catalog, &registrations);
        Self {
            tournament,
            player,
            board,
            steps: StepMachine::new(),
            selection: Selection::default(),
            submitting: false,
            pending_secret: None,
        }
    }

    /// Bootstrap a session from the backend: pick the tournament with
    /// open registration, load its catalog, then the player's existing
    /// registrations.
    ///
    /// A failure to list registrations fails open: all categories show
    /// as available and the backend is left to reject duplicates at
    /// payment time.
    pub async fn load<B: RegistrationBackend>(backend: &B, player: Player) -> FlowResult<Self> {
        let tournaments = backend.tournaments().await?;
        let tournament = shared::models::active_tournament(&tournaments)
            .cloned()
            .ok_or(FlowError::NoOpenTournament)?;

        let catalog = backend
            .category_prices(&tournament.id, &tournament.tournament_type)
            .await?;

        let registrations = match backend.my_registrations(&tournament.id).await {
            Ok(registrations) => registrations,
            Err(err) => {
                tracing::warn!(error = %err, "registration list unavailable, treating all categories as available");
                Vec::new()
            }
        };

        tracing::info!(
            tournament = %tournament.id,
            categories = catalog.len(),
            registrations = registrations.len(),
            "registration session loaded"
        );
        Ok(Self::new(tournament, player, catalog, registrations))
    }

    // ========== Read-only state ==========

    pub fn tournament(&self) -> &Tournament {
        &self.tournament
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Per-category status, grouped for display.
    pub fn board(&self) -> &CategoryBoard {
        &self.board
    }

    pub fn step(&self) -> Step {
        self.steps.current()
    }

    /// Current selection snapshot (the payment UI renders totals from
    /// this; the gateway bridge populates its request from it).
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    // ========== Category selection ==========

    /// Select a category by its catalog id.
    ///
    /// Rejects non-clickable categories without touching the selection.
    /// On success: locks the partner when an incomplete registration
    /// already fixes it, clears a previously locked partner otherwise,
    /// always clears the discount, and auto-advances from the Category
    /// step.
    pub fn select_category(&mut self, id: Uuid) -> FlowResult<()> {
        let resolved = self
            .board
            .find(id)
            .ok_or_else(|| FlowError::validation("unknown category"))?;

        if !resolved.clickable() {
            return Err(FlowError::validation(
                "you are already registered in this category or waiting on your partner's payment",
            ));
        }

        self.steps.clear_auto_advance_guard();

        let locked_partner = resolved
            .status
            .is_registered()
            .then(|| resolved.partner.clone())
            .flatten();

        self.selection.category = Some(resolved.category.clone());
        match locked_partner {
            Some(partner) => {
                tracing::debug!(partner = %partner.uid, "partner locked to existing registration");
                self.selection.partner = Some(partner);
                self.selection.partner_locked = true;
            }
            None => {
                if self.selection.partner_locked {
                    self.selection.partner = None;
                    self.selection.partner_locked = false;
                }
            }
        }

        // Discounts are category-specific
        self.selection.discount.remove();

        if self.steps.current() == Step::Category {
            self.steps.auto_advance_to_partner();
        }
        Ok(())
    }

    // ========== Partner selection ==========

    /// Pick a partner from search results. Rejected while the partner
    /// is locked by an existing registration.
    pub fn set_partner(&mut self, partner: Player) -> FlowResult<()> {
        self.steps.clear_auto_advance_guard();
        if self.selection.partner_locked {
            return Err(FlowError::validation(
                "partner is fixed by an existing registration",
            ));
        }
        self.selection.partner = Some(partner);
        Ok(())
    }

    /// Remove the chosen partner. Rejected while locked.
    pub fn clear_partner(&mut self) -> FlowResult<()> {
        self.steps.clear_auto_advance_guard();
        if self.selection.partner_locked {
            return Err(FlowError::validation(
                "partner is fixed by an existing registration",
            ));
        }
        self.selection.partner = None;
        Ok(())
    }

    // ========== Payment options ==========

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.steps.clear_auto_advance_guard();
        self.selection.payment_method = method;
    }

    /// Switching to paying for both removes the discount (discounts are
    /// single-party by product rule).
    pub fn set_party_size(&mut self, party_size: PartySize) {
        self.steps.clear_auto_advance_guard();
        if party_size == PartySize::Both {
            self.selection.discount.remove();
        }
        self.selection.party_size = party_size;
    }

    // ========== Discount ==========

    /// Validate and apply a discount code.
    ///
    /// Local gates never reach the network; a rejected or failed
    /// attempt leaves any previously applied discount untouched. If the
    /// category changes while validation is in flight, the response is
    /// discarded.
    pub async fn apply_discount<B: RegistrationBackend>(
        &mut self,
        backend: &B,
        code: &str,
    ) -> FlowResult<DiscountOutcome> {
        self.steps.clear_auto_advance_guard();
        let code = code.trim();
        if code.is_empty() {
            return Err(FlowError::validation("enter a discount code"));
        }
        let category = self
            .selection
            .category
            .as_ref()
            .ok_or_else(|| FlowError::validation("select a category first"))?;
        if self.selection.party_size == PartySize::Both {
            return Err(FlowError::validation(
                "discount codes apply to single-entry payments only",
            ));
        }

        let issued_for = category.id;
        let amount = pricing::subtotal(category.price, PartySize::One);

        let result: DiscountResult = backend.validate_discount_code(code, amount).await?;

        if self.selection.category.as_ref().map(|c| c.id) != Some(issued_for) {
            tracing::debug!(%code, "discarding discount validation for a deselected category");
            return Ok(DiscountOutcome::Superseded);
        }

        if !result.valid {
            return Ok(DiscountOutcome::Invalid);
        }

        self.selection.discount.store(code.to_string(), result);
        Ok(DiscountOutcome::Applied)
    }

    /// Remove the applied discount. Idempotent.
    pub fn remove_discount(&mut self) {
        self.steps.clear_auto_advance_guard();
        self.selection.discount.remove();
    }

    // ========== Pricing ==========

    /// Current price breakdown for the selection.
    pub fn quote(&self) -> FlowResult<Quote> {
        let category = self
            .selection
            .category
            .as_ref()
            .ok_or_else(|| FlowError::validation("select a category first"))?;
        pricing::quote(
            category.price,
            self.selection.party_size,
            self.selection.discount.result(),
        )
    }

    // ========== Step navigation ==========

    /// Advance one step, with validation gates. A manual advance
    /// arriving as the very next interaction after the category
    /// auto-advance is swallowed exactly once; any other interaction in
    /// between settles the guard first.
    pub fn next_step(&mut self) -> FlowResult<Step> {
        if self.steps.consume_auto_advance_guard() {
            return Ok(self.steps.current());
        }

        match self.steps.current() {
            Step::Category if self.selection.category.is_none() => {
                return Err(FlowError::validation("select a category to continue"));
            }
            Step::Partner if self.selection.partner.is_none() => {
                return Err(FlowError::validation("select a partner to continue"));
            }
            _ => {}
        }
        self.steps.advance()
    }

    /// Go one step back. Never clears the selection.
    pub fn prev_step(&mut self) -> Step {
        self.steps.clear_auto_advance_guard();
        self.steps.retreat()
    }

    /// Force the terminal success state. Idempotent; called by the
    /// payment orchestrator and by the redirect-return handler.
    pub fn show_success(&mut self) {
        self.steps.force_success();
        self.submitting = false;
        self.pending_secret = None;
    }

    // ========== Submission bookkeeping (payment orchestrator) ==========

    /// Mark a submission in flight. No two submissions may overlap.
    pub(crate) fn begin_submission(&mut self) -> FlowResult<()> {
        if self.submitting {
            return Err(FlowError::validation("a submission is already in progress"));
        }
        self.submitting = true;
        Ok(())
    }

    pub(crate) fn end_submission(&mut self) {
        self.submitting = false;
    }

    pub(crate) fn set_pending_secret(&mut self, secret: Option<String>) {
        self.pending_secret = secret;
    }

    /// Client secret of an intent whose confirmation failed and may be
    /// retried without creating a new intent.
    pub fn pending_secret(&self) -> Option<&str> {
        self.pending_secret.as_deref()
    }
}
