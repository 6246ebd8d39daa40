//! Courtside Registration - doubles tournament registration flow
//!
//! Orchestrates the category → partner → payment steps: reconciles the
//! category catalog with the player's existing registrations, locks the
//! partner where an incomplete registration already fixes it, prices
//! the entry (party size × base price, minus discount) and drives the
//! payment-intent checkout including the free-entry and code-redemption
//! paths.

pub mod availability;
pub mod backend;
pub mod discount;
pub mod error;
pub mod partner;
pub mod payment;
pub mod pricing;
pub mod session;
pub mod steps;

pub use availability::{CategoryBoard, CategoryStatus, ResolvedCategory};
pub use backend::RegistrationBackend;
pub use discount::DiscountEngine;
pub use error::{ConflictKind, FlowError, FlowResult};
pub use partner::PartnerSearch;
pub use payment::{
    ConfirmOutcome, GatewayError, GatewayErrorKind, PaymentGateway, ReturnParams, SubmitOutcome,
};
pub use pricing::{PartySize, Quote};
pub use session::{DiscountOutcome, PaymentMethod, RegistrationSession, Selection};
pub use steps::{Step, StepMachine};
