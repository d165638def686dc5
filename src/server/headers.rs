//! Headers used in the Perch server.

/// Display name of the authenticated user.
///
/// Set by the fronting authentication proxy after it has verified the
/// session; absent on anonymous requests. The application trusts this
/// header, so the proxy must strip it from inbound traffic.
pub const HTTP_X_FORWARDED_USER: &str = "X-Forwarded-User";

/// Comma-separated list of groups the authenticated user belongs to.
///
/// Set by the fronting authentication proxy alongside
/// [`HTTP_X_FORWARDED_USER`].
pub const HTTP_X_FORWARDED_GROUPS: &str = "X-Forwarded-Groups";
