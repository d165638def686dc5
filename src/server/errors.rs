//! Safe, user-facing error responses.
use derive_more::Display;

/// A centralised place to match potentially unsafe internal errors to
/// safe user-facing response bodies.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum HTTPError {
    /// The resource does not exist, or the requester may not change it.
    /// The two cases are deliberately indistinguishable to clients.
    #[display(fmt = "Not Found")]
    NotFound,
    /// Something unexpected went wrong while handling the request.
    #[display(fmt = "Internal Server Error")]
    InternalServerError,
}
