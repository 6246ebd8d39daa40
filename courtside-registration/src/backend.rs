//! Backend trait
//!
//! Seam between the flow and the transport. Production code uses
//! [`courtside_client::HttpClient`]; tests substitute a mock.

use async_trait::async_trait;
use rust_decimal::Decimal;

use courtside_client::{ClientResult, HttpClient};
use shared::models::{
    Category, DiscountResult, PaymentIntentRequest, PaymentIntentResponse, Player,
    RedeemCodeRequest, Registration, Tournament,
};

/// The backend operations the registration flow consumes.
#[async_trait]
pub trait RegistrationBackend: Send + Sync {
    async fn tournaments(&self) -> ClientResult<Vec<Tournament>>;

    async fn category_prices(
        &self,
        tournament_id: &str,
        tournament_type: &str,
    ) -> ClientResult<Vec<Category>>;

    async fn my_registrations(&self, tournament_id: &str) -> ClientResult<Vec<Registration>>;

    async fn search_users(&self, query: &str) -> ClientResult<Vec<Player>>;

    async fn validate_discount_code(
        &self,
        code: &str,
        amount: Decimal,
    ) -> ClientResult<DiscountResult>;

    async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> ClientResult<PaymentIntentResponse>;

    async fn redeem_code(&self, request: &RedeemCodeRequest) -> ClientResult<()>;
}

#[async_trait]
impl RegistrationBackend for HttpClient {
    async fn tournaments(&self) -> ClientResult<Vec<Tournament>> {
        HttpClient::tournaments(self).await
    }

    async fn category_prices(
        &self,
        tournament_id: &str,
        tournament_type: &str,
    ) -> ClientResult<Vec<Category>> {
        HttpClient::category_prices(self, tournament_id, tournament_type).await
    }

    async fn my_registrations(&self, tournament_id: &str) -> ClientResult<Vec<Registration>> {
        HttpClient::my_registrations(self, tournament_id).await
    }

    async fn search_users(&self, query: &str) -> ClientResult<Vec<Player>> {
        HttpClient::search_users(self, query).await
    }

    async fn validate_discount_code(
        &self,
        code: &str,
        amount: Decimal,
    ) -> ClientResult<DiscountResult> {
        HttpClient::validate_discount_code(self, code, amount).await
    }

    async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> ClientResult<PaymentIntentResponse> {
        HttpClient::create_payment_intent(self, request).await
    }

    async fn redeem_code(&self, request: &RedeemCodeRequest) -> ClientResult<()> {
        HttpClient::redeem_code(self, request).await
    }
}
