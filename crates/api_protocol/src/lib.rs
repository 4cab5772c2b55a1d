//! API definitions for Shepherd server/client communication.
//!
//! This crate defines the request and response bodies exchanged over the
//! REST API, together with the stable error codes the server attaches to
//! failed requests.

mod error;
pub mod requests;
pub mod responses;
mod types;

pub use error::*;
pub use types::*;
