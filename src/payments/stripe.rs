//! Stripe implementation of the charge service.
use super::{Charge, ChargeRequest, ChargeService};
use async_trait::async_trait;
use serde_json::Value;
use std::env;

/// Environment variable holding the Stripe secret key.
pub const SECRET_KEY_VAR: &str = "STRIPE_SECRET_KEY";

/// Environment variable overriding the Stripe API base URL.
pub const BASE_URL_VAR: &str = "STRIPE_BASE_URL";

/// Production Stripe API.
const DEFAULT_BASE_URL: &str = "https://api.stripe.com/v1";

/// Charge service backed by the Stripe charges API.
///
/// Holds the secret key, so it implements neither `Debug` nor `Display`.
pub struct StripeCharges {
    /// Shared HTTP client.
    http: reqwest::Client,
    /// API base URL, without a trailing slash.
    base_url: String,
    /// Secret key used as the Basic auth username.
    secret_key: String,
}

impl StripeCharges {
    /// Create a client for the given key, optionally against a
    /// non-production base URL.
    #[must_use]
    pub fn new(secret_key: String, base_url: Option<String>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        Self {
            http: reqwest::Client::new(),
            base_url,
            secret_key,
        }
    }

    /// Build the client from [`SECRET_KEY_VAR`] and [`BASE_URL_VAR`].
    ///
    /// # Errors
    /// Errors if [`SECRET_KEY_VAR`] is not set.
    pub fn from_env() -> anyhow::Result<Self> {
        let secret_key = env::var(SECRET_KEY_VAR)
            .map_err(|_| anyhow::anyhow!("{SECRET_KEY_VAR} is not set"))?;
        Ok(Self::new(secret_key, env::var(BASE_URL_VAR).ok()))
    }

    /// Endpoint for creating charges.
    fn url(&self) -> String {
        format!("{}/charges", self.base_url)
    }
}

#[async_trait]
impl ChargeService for StripeCharges {
    /// Submit a charge to Stripe.
    ///
    /// # Errors
    /// Errors if the request cannot be sent, if Stripe responds with a
    /// non-success status, or if the response cannot be decoded.
    async fn create(&self, request: &ChargeRequest) -> anyhow::Result<Charge> {
        let params = [
            ("amount", request.amount.to_string()),
            ("currency", request.currency.clone()),
            ("description", request.description.clone()),
            ("token", request.token.clone()),
        ];
        let response = self
            .http
            .post(self.url())
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|value| value["error"]["message"].as_str().map(ToOwned::to_owned))
                .unwrap_or(body);
            anyhow::bail!("Charge request failed with HTTP {status}: {message}");
        }

        let charge = response.json::<Charge>().await?;
        Ok(charge)
    }
}
