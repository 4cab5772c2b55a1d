//! Consultation lifecycle engine for Shepherd.
//!
//! This crate decides which actions are legal on a consultation and computes
//! the resulting state. The engine is a pure function over the consultation
//! document: it never touches storage, and every successful transition hands
//! back the post-image together with the pre-image guard the caller must use
//! for a conditional store write.

mod chat;
mod engine;
mod error;

pub use chat::*;
pub use engine::*;
pub use error::*;
