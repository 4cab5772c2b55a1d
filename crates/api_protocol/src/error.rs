//! API error codes.

/// Stable error code strings attached to error response bodies.
///
/// Clients branch on these rather than on the human-readable message.
pub mod error_codes {
    /// Request body failed validation.
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    /// Requested resource does not exist.
    pub const RESOURCE_NOT_FOUND: &str = "RESOURCE_NOT_FOUND";
    /// Missing or invalid session token.
    pub const AUTHENTICATION_REQUIRED: &str = "AUTHENTICATION_REQUIRED";
    /// Authenticated, but not allowed to perform the action.
    pub const PERMISSION_DENIED: &str = "PERMISSION_DENIED";
    /// The document changed since it was read; reload and retry.
    pub const STALE_STATE: &str = "STALE_STATE";
    /// Unexpected server-side failure.
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}
