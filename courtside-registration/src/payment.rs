//! Payment orchestration
//!
//! Drives a submission end to end: create an intent, route zero totals
//! through the free-registration path, confirm non-free intents with
//! the gateway SDK, and map the outcomes. A failed confirmation keeps
//! the intent's client secret so the player can retry without creating
//! a new intent; a fresh submission always starts a fresh intent.
//!
//! The alternative to card payment is redeeming a registration code,
//! which replaces the intent entirely.

use async_trait::async_trait;
use thiserror::Error;

use shared::models::{PaymentIntentRequest, RedeemCodeRequest};

use crate::backend::RegistrationBackend;
use crate::error::{FlowError, FlowResult};
use crate::pricing::PartySize;
use crate::session::RegistrationSession;

/// What the gateway reported for a confirmed intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Payment settled; the registration is complete.
    Succeeded,
    /// The gateway took over (3DS or bank redirect); the flow resumes
    /// on redirect return.
    Pending,
}

/// Gateway failure family, mirroring the SDK's error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayErrorKind {
    /// The card was declined or rejected.
    Card,
    /// The payment details failed the gateway's validation.
    Validation,
    /// Anything else (network, SDK internals).
    Other,
}

/// Error returned by the payment gateway SDK.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct GatewayError {
    pub kind: GatewayErrorKind,
    pub message: String,
}

impl GatewayError {
    pub fn card(message: impl Into<String>) -> Self {
        Self {
            kind: GatewayErrorKind::Card,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: GatewayErrorKind::Validation,
            message: message.into(),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self {
            kind: GatewayErrorKind::Other,
            message: message.into(),
        }
    }
}

/// Bridge to the payment SDK that confirms an intent by client secret.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn confirm(
        &self,
        client_secret: &str,
        receipt_email: &str,
    ) -> Result<ConfirmOutcome, GatewayError>;
}

/// How a submission ended, short of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The registration reached the Success step.
    Completed,
    /// The gateway redirected the player; completion arrives via the
    /// redirect-return query.
    RedirectPending,
}

/// Submit the current selection as a card payment.
///
/// Re-entrant calls are rejected while a submission is in flight. Any
/// previously pending client secret is discarded first; retrying a
/// failed confirmation without a new intent goes through
/// [`retry_confirmation`] instead.
pub async fn submit_card_payment<B: RegistrationBackend, G: PaymentGateway>(
    session: &mut RegistrationSession,
    backend: &B,
    gateway: &G,
) -> FlowResult<SubmitOutcome> {
    session.begin_submission()?;
    let result = submit_inner(session, backend, gateway).await;
    session.end_submission();
    result
}

async fn submit_inner<B: RegistrationBackend, G: PaymentGateway>(
    session: &mut RegistrationSession,
    backend: &B,
    gateway: &G,
) -> FlowResult<SubmitOutcome> {
    session.set_pending_secret(None);

    let quote = session.quote()?;
    let request = build_intent_request(session)?;

    tracing::info!(
        amount = %request.amount,
        category_id = request.category_id,
        paid_for = request.paid_for,
        discounted = request.discount_code.is_some(),
        "creating payment intent"
    );
    let response = backend.create_payment_intent(&request).await?;

    if quote.is_free() {
        if response.free_registration {
            session.show_success();
            return Ok(SubmitOutcome::Completed);
        }
        return Err(FlowError::contract(
            "zero amount was not confirmed as a free registration",
        ));
    }

    // A fully-discounted server-side recalculation can still come back
    // free even when the local total is positive
    if response.free_registration {
        session.show_success();
        return Ok(SubmitOutcome::Completed);
    }

    let secret = response
        .client_secret
        .ok_or(FlowError::PaymentIntentMissing)?;
    session.set_pending_secret(Some(secret.clone()));

    confirm_pending(session, gateway, &secret).await
}

/// Retry confirmation of the intent left over from a failed attempt.
/// No new intent is created.
pub async fn retry_confirmation<G: PaymentGateway>(
    session: &mut RegistrationSession,
    gateway: &G,
) -> FlowResult<SubmitOutcome> {
    session.begin_submission()?;
    let result = match session.pending_secret().map(str::to_owned) {
        Some(secret) => confirm_pending(session, gateway, &secret).await,
        None => Err(FlowError::validation("no payment awaiting confirmation")),
    };
    session.end_submission();
    result
}

async fn confirm_pending<G: PaymentGateway>(
    session: &mut RegistrationSession,
    gateway: &G,
    secret: &str,
) -> FlowResult<SubmitOutcome> {
    let email = session.player().email.clone().unwrap_or_default();

    match gateway.confirm(secret, &email).await {
        Ok(ConfirmOutcome::Succeeded) => {
            session.show_success();
            Ok(SubmitOutcome::Completed)
        }
        Ok(ConfirmOutcome::Pending) => Ok(SubmitOutcome::RedirectPending),
        Err(err) => {
            // Secret stays pending so the player can retry
            tracing::warn!(kind = ?err.kind, error = %err, "payment confirmation failed");
            match err.kind {
                GatewayErrorKind::Card | GatewayErrorKind::Validation => {
                    Err(FlowError::PaymentDeclined(err.message))
                }
                GatewayErrorKind::Other => Err(FlowError::Transient(err.message)),
            }
        }
    }
}

fn build_intent_request(session: &RegistrationSession) -> FlowResult<PaymentIntentRequest> {
    let selection = session.selection();
    let category = selection
        .category
        .as_ref()
        .ok_or_else(|| FlowError::validation("select a category first"))?;
    let partner = selection
        .partner
        .as_ref()
        .ok_or_else(|| FlowError::validation("select a partner first"))?;
    let player = session.player();

    let quote = session.quote()?;
    let discount_code = (selection.party_size == PartySize::One)
        .then(|| selection.discount.code().map(str::to_owned))
        .flatten();

    Ok(PaymentIntentRequest {
        amount: quote.total,
        currency: "mxn".into(),
        restriction: String::new(),
        player_name: player.full_name(),
        player_uid: player.uid.clone(),
        partner_uid: partner.uid.clone(),
        tournament_id: session.tournament().id.clone(),
        category_id: category.display_id,
        email: player.email.clone().unwrap_or_default(),
        paid_for: selection.party_size.count(),
        discount_code,
    })
}

/// Redeem a registration code instead of paying by card. The code
/// settles both partners' spots in one call.
pub async fn redeem_registration_code<B: RegistrationBackend>(
    session: &mut RegistrationSession,
    backend: &B,
    code: &str,
) -> FlowResult<()> {
    session.begin_submission()?;
    let result = redeem_inner(session, backend, code).await;
    session.end_submission();
    result
}

async fn redeem_inner<B: RegistrationBackend>(
    session: &mut RegistrationSession,
    backend: &B,
    code: &str,
) -> FlowResult<()> {
    let code = code.trim();
    if code.is_empty() {
        return Err(FlowError::validation("enter a registration code"));
    }
    let selection = session.selection();
    let category = selection
        .category
        .as_ref()
        .ok_or_else(|| FlowError::validation("select a category first"))?;
    let partner = selection
        .partner
        .as_ref()
        .ok_or_else(|| FlowError::validation("select a partner first"))?;

    let request = RedeemCodeRequest {
        code: code.to_owned(),
        tournament_id: session.tournament().id.clone(),
        // Redemption addresses the category by its catalog UUID, unlike
        // the intent's legacy integer id
        category_id: category.id,
        player_uid: session.player().uid.clone(),
        partner_uid: partner.uid.clone(),
    };

    tracing::info!(category_id = %request.category_id, "redeeming registration code");
    backend.redeem_code(&request).await?;
    session.show_success();
    Ok(())
}

/// Parsed redirect-return query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnParams {
    success: bool,
    sanitized: String,
}

impl ReturnParams {
    /// Parse a query string, with or without the leading `?`. The
    /// `success=true` marker is detected and stripped; everything else
    /// is kept verbatim.
    pub fn from_query(query: &str) -> Self {
        let trimmed = query.strip_prefix('?').unwrap_or(query);
        let mut success = false;
        let kept: Vec<&str> = trimmed
            .split('&')
            .filter(|pair| {
                if pair.is_empty() {
                    return false;
                }
                if *pair == "success=true" {
                    success = true;
                    return false;
                }
                true
            })
            .collect();
        let sanitized = if kept.is_empty() {
            String::new()
        } else {
            format!("?{}", kept.join("&"))
        };
        Self { success, sanitized }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// The query string with the success marker removed, for rewriting
    /// the address bar.
    pub fn sanitized_query(&self) -> &str {
        &self.sanitized
    }
}

/// Handle the gateway's redirect back into the app.
///
/// When the query carries the success marker, the session jumps to the
/// Success step and the sanitized query is returned for the host to
/// rewrite the URL with. Idempotent on an already-successful session.
pub fn handle_redirect_return(session: &mut RegistrationSession, query: &str) -> Option<String> {
    let params = ReturnParams::from_query(query);
    if !params.is_success() {
        return None;
    }
    tracing::info!("payment confirmed via redirect return");
    session.show_success();
    Some(params.sanitized)
}
