//! Authorization policy for mutating posts.
use crate::db::models::post::Post;
use std::env;

/// Environment variable holding the comma-separated denylist of display names.
pub const DENIED_AUTHORS_VAR: &str = "PERCH_DENIED_AUTHORS";

/// Denylist applied when [`DENIED_AUTHORS_VAR`] is not set.
const DEFAULT_DENIED_AUTHORS: &str = "Martin";

/// Name of the group that marks a requester as a superuser.
pub const SUPERUSER_GROUP: &str = "superuser";

/// Identity attached to an inbound request.
///
/// Populated from the trusted identity headers set by the fronting
/// authentication proxy. A requester with no display name is anonymous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requester {
    /// Display name of the authenticated user, if any.
    pub display_name: Option<String>,
    /// Groups the authenticated user belongs to.
    pub groups: Vec<String>,
}

impl Requester {
    /// A requester with no identity at all.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            display_name: None,
            groups: Vec::new(),
        }
    }

    /// Whether the request carried an identity.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.display_name.is_some()
    }

    /// Whether the requester is in the superuser group.
    #[must_use]
    pub fn is_superuser(&self) -> bool {
        self.groups.iter().any(|group| group == SUPERUSER_GROUP)
    }
}

/// Outcome of an authorization check.
///
/// Deny is reported to HTTP clients as Not Found, so a denied requester
/// cannot tell a forbidden post from a missing one. The two cases stay
/// distinct here so each can be asserted on independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The update may proceed.
    Allow,
    /// The update must be rejected.
    Deny,
}

/// Denylist-driven authorization for post updates.
///
/// The denied display names come from configuration rather than being
/// baked into the check itself.
#[derive(Debug, Clone)]
pub struct Policy {
    /// Display names whose updates are rejected.
    denied_authors: Vec<String>,
}

impl Policy {
    /// Create a policy denying updates from the given display names.
    #[must_use]
    pub const fn new(denied_authors: Vec<String>) -> Self {
        Self { denied_authors }
    }

    /// Build the policy from [`DENIED_AUTHORS_VAR`], falling back to the
    /// default denylist when the variable is unset.
    #[must_use]
    pub fn from_env() -> Self {
        let raw = env::var(DENIED_AUTHORS_VAR)
            .unwrap_or_else(|_| String::from(DEFAULT_DENIED_AUTHORS));
        Self::new(parse_denied_authors(&raw))
    }

    /// Decide whether `requester` may update `post`.
    ///
    /// Anonymous requesters are allowed. Posts carry no owner, but the
    /// target stays part of the contract so ownership checks slot in
    /// without changing call sites.
    #[must_use]
    pub fn authorize(&self, requester: &Requester, _post: &Post) -> Decision {
        let denied = requester
            .display_name
            .as_ref()
            .is_some_and(|name| self.denied_authors.iter().any(|denied| denied == name));
        if denied {
            Decision::Deny
        } else {
            Decision::Allow
        }
    }
}

/// Splits a comma-separated denylist, dropping empty entries.
fn parse_denied_authors(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
