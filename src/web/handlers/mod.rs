//! HTML template rendering handlers.

mod datetime;
mod home;

pub use datetime::datetime_handler;
pub use home::home_handler;
