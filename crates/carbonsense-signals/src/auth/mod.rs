//! One-time provider logins.

pub mod watttime_session;

pub use watttime_session::WattTimeSession;
