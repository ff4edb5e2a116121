//! Core components shared by both pipeline stages.
//!
//! This module contains the foundational building blocks of the crate:
//! - The main [`SaClient`] and its builder.
//! - The primary [`SaError`] type.

/// The main client (`SaClient`), builder, and endpoint defaults.
pub mod client;
/// The primary error type (`SaError`) for the crate.
pub mod error;

// convenient re-exports so most code can just `use crate::core::SaClient`
pub use client::{SaClient, SaClientBuilder};
pub use error::SaError;
