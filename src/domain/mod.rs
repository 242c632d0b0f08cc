//! Domain layer containing the redirect data model.
//!
//! # Architecture
//!
//! - [`entities`] - Short codes and URL records
//! - [`resolution`] - Classified outcome of an upstream lookup
//! - [`repositories`] - Trait for the authoritative URL source
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. The cache-aside orchestration lives in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
pub mod resolution;
