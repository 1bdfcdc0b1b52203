pub mod config;
pub mod core;
pub mod domain;
pub mod notify;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliArgs;
pub use crate::config::Config;
pub use crate::core::availability::MarkerInterpreter;
pub use crate::core::watcher::Watcher;
pub use crate::domain::model::CheckReport;
pub use crate::domain::ports::{AvailabilityInterpreter, Notifier};
pub use crate::utils::error::{Result, WatchError};
