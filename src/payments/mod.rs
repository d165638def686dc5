//! Charging cards through an external payment provider.
use async_trait::async_trait;
use serde::Deserialize;

pub mod stripe;

/// Amount of every charge, in minor units of [`CHARGE_CURRENCY`].
pub const CHARGE_AMOUNT: i64 = 100;

/// Currency of every charge.
pub const CHARGE_CURRENCY: &str = "sgd";

/// A charge to submit to the payment provider.
///
/// Amount, currency and description are fixed; only the card token
/// varies per request. The token is opaque here, its validation is the
/// provider's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeRequest {
    /// Amount in minor units.
    pub amount: i64,
    /// ISO currency code.
    pub currency: String,
    /// Free-text description shown in the provider dashboard.
    pub description: String,
    /// Card token collected client-side.
    pub token: String,
}

impl ChargeRequest {
    /// Builds the fixed-amount charge for a submitted token.
    #[must_use]
    pub fn new(token: String) -> Self {
        Self {
            amount: CHARGE_AMOUNT,
            currency: CHARGE_CURRENCY.to_owned(),
            description: String::new(),
            token,
        }
    }
}

/// A charge accepted by the payment provider.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Charge {
    /// Provider-assigned charge identifier.
    pub id: String,
}

/// A payment provider that can create charges.
#[async_trait]
pub trait ChargeService: Send + Sync {
    /// Submit a charge to the provider.
    ///
    /// # Errors
    /// Errors if the provider rejects the charge or cannot be reached.
    async fn create(&self, request: &ChargeRequest) -> anyhow::Result<Charge>;
}
