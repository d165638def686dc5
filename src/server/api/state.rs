//! Centralized state management for the Actix web server
use std::{fmt, sync::Arc};

use crate::{db, mail::Mailer, payments::ChargeService, posts::policy::Policy};

/// Global, read-only state
pub trait Global {
    /// Database connection
    fn db(&self) -> &db::DatabaseConnection;
    /// Payment provider used to create charges
    fn charges(&self) -> &Arc<dyn ChargeService>;
    /// Transport for outbound notification email
    fn mailer(&self) -> &Arc<dyn Mailer>;
    /// Authorization policy for post updates
    fn policy(&self) -> &Policy;
}

/// Application state
#[derive(Clone)]
pub struct App {
    /// Database connection
    pub db: db::DatabaseConnection,
    /// Payment provider used to create charges
    pub charges: Arc<dyn ChargeService>,
    /// Transport for outbound notification email
    pub mailer: Arc<dyn Mailer>,
    /// Authorization policy for post updates
    pub policy: Policy,
}

impl Global for App {
    fn db(&self) -> &db::DatabaseConnection {
        &self.db
    }

    fn charges(&self) -> &Arc<dyn ChargeService> {
        &self.charges
    }

    fn mailer(&self) -> &Arc<dyn Mailer> {
        &self.mailer
    }

    fn policy(&self) -> &Policy {
        &self.policy
    }
}

impl fmt::Debug for App {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "Perch app state for the database at {:?}",
            self.db
        )
    }
}
