//! SMTP implementation of the mailer.
use super::{Email, Mailer};
use async_trait::async_trait;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::env;

/// Environment variable holding the SMTP relay URL.
pub const SMTP_URL_VAR: &str = "SMTP_URL";

/// Relay used when [`SMTP_URL_VAR`] is not set.
const DEFAULT_SMTP_URL: &str = "smtp://localhost:25";

/// Mailer that delivers through an SMTP relay.
pub struct SmtpMailer {
    /// Pooled async SMTP transport.
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Create a mailer for the given `smtp://` or `smtps://` URL.
    ///
    /// # Errors
    /// Errors if the URL cannot be parsed into a transport.
    pub fn new(url: &str) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?.build();
        Ok(Self { transport })
    }

    /// Build the mailer from [`SMTP_URL_VAR`], falling back to a local
    /// relay when the variable is unset.
    ///
    /// # Errors
    /// Errors if the configured URL cannot be parsed into a transport.
    pub fn from_env() -> anyhow::Result<Self> {
        let url = env::var(SMTP_URL_VAR).unwrap_or_else(|_| String::from(DEFAULT_SMTP_URL));
        Self::new(&url)
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    /// Deliver the email through the relay.
    ///
    /// # Errors
    /// Errors if an address cannot be parsed, the message cannot be
    /// built, or the relay rejects it.
    async fn send(&self, email: &Email) -> anyhow::Result<()> {
        let mut builder = Message::builder().from(email.from.parse()?);
        for recipient in &email.to {
            builder = builder.to(recipient.parse()?);
        }
        let message = builder
            .subject(email.subject.clone())
            .body(email.body.clone())?;
        self.transport.send(message).await?;
        Ok(())
    }
}
