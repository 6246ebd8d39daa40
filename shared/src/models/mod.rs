//! Domain models

mod category;
mod discount;
mod payment;
mod player;
mod registration;
mod tournament;

pub use category::Category;
pub use discount::{DiscountResult, DiscountType};
pub use payment::{PaymentIntentRequest, PaymentIntentResponse, RedeemCodeRequest};
pub use player::Player;
pub use registration::{Registration, RegistrationCategory};
pub use tournament::{Tournament, TournamentStatus, active_tournament};
