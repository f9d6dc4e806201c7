//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`cache`] - Cache backends (Redis, in-process, no-op)

pub mod cache;
