use serde::Deserialize;
/// Form submission for the payment endpoint.
#[derive(Deserialize, Debug)]
pub struct PaymentPayload {
    /// Card token collected client-side. Not validated here; the payment
    /// provider rejects tokens it does not recognise. A missing field is
    /// submitted to the provider as an empty token.
    #[serde(default)]
    pub token: String,
}
