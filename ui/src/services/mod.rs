//! Infrastructure Services
//!
//! - **client**: HTTP client for the registration endpoint
//! - **browser**: DOM form binding, alerts and navigation
//! - **config**: endpoint and redirect configuration
//! - **errors**: common error types
//!
//! The services are WASM-first, using browser APIs and async traits without
//! Send/Sync bounds.

pub mod browser;
pub mod client;
pub mod config;
pub mod errors;
