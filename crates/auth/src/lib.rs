//! Session token authentication for Shepherd.
//!
//! Sign-in and sign-up credentials are handled by the external identity
//! provider; this crate only mints and validates the session tokens that
//! carry the resolved `{id, email, role}` identity through API requests.

mod error;
mod jwt;

pub use error::*;
pub use jwt::*;

/// Default token expiration time in hours.
pub const DEFAULT_JWT_EXPIRATION_HOURS: u64 = 24;

/// Default token issuer.
pub const DEFAULT_JWT_ISSUER: &str = "shepherd";
