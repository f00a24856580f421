//! Backend access for the Dentora admin
//!
//! Deploy-time runtime configuration plus the async REST client the wizards
//! submit through. Failures are classified so callers can distinguish a
//! missing record (fall back to create mode) from a rejected payload (show
//! the reason) and infrastructure trouble.

pub mod client;
pub mod config;
pub mod error;

pub use client::{ApiClient, Attachment};
pub use config::RuntimeConfig;
pub use error::ClientError;
