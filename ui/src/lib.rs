//! This crate contains the registration form controller and its UI components.

pub mod app;
pub use app::RegistrationService;

pub mod components;
pub mod registration;
pub mod services;
pub mod utils;

#[cfg(feature = "web")]
pub use services::browser::bind_register_form;
