//! Application layer sitting between HTTP handlers and infrastructure.
//!
//! # Modules
//!
//! - [`services`] - Response memoization on top of the cache backend

pub mod services;
