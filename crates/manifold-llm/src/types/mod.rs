//! Canonical request types shared by every provider
//!
//! These are the provider-agnostic fields a caller supplies; the convert
//! layer maps them onto each provider's wire shape.

pub mod message;
pub mod params;

pub use message::{ChatMessage, Role};
pub use params::{ChatParams, InferenceParams, Penalty};
