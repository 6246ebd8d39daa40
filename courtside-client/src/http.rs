//! HTTP client for the tournament backend API

use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

use shared::error::ErrorBody;
use shared::models::{
    Category, DiscountResult, PaymentIntentRequest, PaymentIntentResponse, Player,
    RedeemCodeRequest, Registration, Tournament,
};

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making requests to the tournament backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&url).query(query);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.post(&url).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.message().map(str::to_string))
                .unwrap_or(text);
            tracing::warn!(status = status.as_u16(), %message, "backend returned error");

            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::LOCKED => Err(ClientError::PartnerUnavailable(message)),
                StatusCode::CONFLICT => Err(ClientError::AlreadyRegistered(message)),
                StatusCode::BAD_REQUEST => Err(ClientError::RegistrationConflict(message)),
                _ => Err(ClientError::Server {
                    status: status.as_u16(),
                    message,
                }),
            };
        }

        response.json().await.map_err(Into::into)
    }

    // ========== Tournament API ==========

    /// List tournaments (public endpoint).
    pub async fn tournaments(&self) -> ClientResult<Vec<Tournament>> {
        self.get("/api/tournaments", &[]).await
    }

    /// Category price catalog for a tournament.
    pub async fn category_prices(
        &self,
        tournament_id: &str,
        tournament_type: &str,
    ) -> ClientResult<Vec<Category>> {
        self.get(
            "/api/tournaments/category-prices",
            &[
                ("tournamentId", tournament_id),
                ("tournamentType", tournament_type),
            ],
        )
        .await
    }

    /// The authenticated player's registrations in a tournament.
    pub async fn my_registrations(&self, tournament_id: &str) -> ClientResult<Vec<Registration>> {
        self.get(
            "/api/teams/me/by-tournament",
            &[("tournamentId", tournament_id)],
        )
        .await
    }

    // ========== Partner API ==========

    /// Search players by name or email (for partner selection).
    pub async fn search_users(&self, query: &str) -> ClientResult<Vec<Player>> {
        self.get("/api/auth/search-users", &[("query", query)]).await
    }

    // ========== Payment API ==========

    /// Validate a discount code against an amount.
    pub async fn validate_discount_code(
        &self,
        code: &str,
        amount: Decimal,
    ) -> ClientResult<DiscountResult> {
        #[derive(serde::Serialize)]
        struct ValidateRequest<'a> {
            code: &'a str,
            amount: Decimal,
        }

        self.post("/api/discount-codes/validate", &ValidateRequest { code, amount })
            .await
    }

    /// Create a payment intent for a registration.
    pub async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> ClientResult<PaymentIntentResponse> {
        self.post("/api/payments/create-intent", request).await
    }

    /// Redeem a registration code in place of payment.
    pub async fn redeem_code(&self, request: &RedeemCodeRequest) -> ClientResult<()> {
        // Response body is informational only; success is the status code.
        let _: serde_json::Value = self.post("/api/payments/redeem-code", request).await?;
        Ok(())
    }
}
