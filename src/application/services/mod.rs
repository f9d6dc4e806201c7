//! Application services.

mod view_cache;

pub use view_cache::ViewCache;
