//! Utility functions used across the application.
//!
//! - [`url_norm`] - Redirect target normalization

pub mod url_norm;
