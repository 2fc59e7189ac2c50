//! API handlers.

mod visits;

pub use visits::{client_ip, list_visits, log_visit};
