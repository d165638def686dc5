//! Outbound email notifications.
use async_trait::async_trait;

pub mod smtp;

/// Sender address for all notifications.
pub const SENDER: &str = "server@example.com";

/// Recipients of payment notifications.
pub const PAYMENT_RECIPIENTS: &[&str] = &["admin@example.com"];

/// Subject line of payment notifications.
const PAYMENT_SUBJECT: &str = "Payment received";

/// An email ready to hand to a [`Mailer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    /// Sender address.
    pub from: String,
    /// Recipient addresses.
    pub to: Vec<String>,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

/// Builds the notification sent after a successful charge.
#[must_use]
pub fn payment_received(charge_id: &str) -> Email {
    Email {
        from: SENDER.to_owned(),
        to: PAYMENT_RECIPIENTS
            .iter()
            .map(|recipient| (*recipient).to_owned())
            .collect(),
        subject: PAYMENT_SUBJECT.to_owned(),
        body: format!("Charge {charge_id} succeeded!"),
    }
}

/// A transport that can deliver an [`Email`].
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver the email.
    ///
    /// # Errors
    /// Errors if the message cannot be built or the transport fails.
    async fn send(&self, email: &Email) -> anyhow::Result<()>;
}
