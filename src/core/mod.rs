pub mod auth;
pub mod availability;
pub mod request;
pub mod session;
pub mod watcher;

pub use crate::domain::model::{CheckReport, OutboundRequest};
pub use crate::domain::ports::{AvailabilityInterpreter, Notifier};
pub use crate::utils::error::Result;
