//! # Helpers
//!
//! One function per remote operation. Each takes the provider client to use,
//! makes exactly one call on it, and hands back the provider's answer.

pub mod bucket;
pub mod sheets;
