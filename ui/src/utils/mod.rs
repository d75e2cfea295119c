//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: timestamped logging macros for the browser console

pub mod console_macros;
