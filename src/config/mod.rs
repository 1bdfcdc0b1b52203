#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{Result, WatchError};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use std::fmt;

pub const ENV_PERSONNR: &str = "PERSONNR";
pub const ENV_PASSWORD: &str = "PASSWORD";
pub const ENV_TOPIC: &str = "TOPIC";

pub const DEFAULT_TIMEOUT_MILLIS: u64 = 10_000;

pub const LOGIN_URL: &str =
    "https://www.stockholmshem.se/logga-in/?returnUrl=/mina-sidor/smaforrad/";
pub const WIDGETS_URL: &str = "https://www.stockholmshem.se/widgets/?callback=jQuery17105048823634686723_{epoch}&widgets%5B%5D=alert&widgets%5B%5D=objektlista%40forrad&_={epoch}";

/// All configuration for one invocation, built once at startup and passed by
/// reference into each component. Credentials are read-only and never logged.
#[derive(Clone)]
pub struct Config {
    pub personnr: String,
    pub password: String,
    /// SNS topic ARN. Optional here on purpose: a missing TOPIC should only
    /// fail an invocation that actually found a unit.
    pub topic: Option<String>,
    pub timeout_millis: u64,
    pub login_url: String,
    pub widgets_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Keeps tests off the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let personnr = lookup(ENV_PERSONNR).ok_or(WatchError::MissingEnvVar {
            name: ENV_PERSONNR,
        })?;
        let password = lookup(ENV_PASSWORD).ok_or(WatchError::MissingEnvVar {
            name: ENV_PASSWORD,
        })?;

        Ok(Self {
            personnr,
            password,
            topic: lookup(ENV_TOPIC),
            timeout_millis: DEFAULT_TIMEOUT_MILLIS,
            login_url: LOGIN_URL.to_string(),
            widgets_url: WIDGETS_URL.to_string(),
        })
    }

    pub fn topic(&self) -> Result<&str> {
        self.topic
            .as_deref()
            .ok_or(WatchError::MissingEnvVar { name: ENV_TOPIC })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("personnr", &"<redacted>")
            .field("password", &"<redacted>")
            .field("topic", &self.topic)
            .field("timeout_millis", &self.timeout_millis)
            .field("login_url", &self.login_url)
            .field("widgets_url", &self.widgets_url)
            .finish()
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<()> {
        validate_url("login_url", &self.login_url)?;
        // The widgets URL still carries its {epoch} placeholders here; the
        // url crate accepts braces in the query so this parses as-is.
        validate_url("widgets_url", &self.widgets_url)?;
        validate_positive_number("timeout_millis", self.timeout_millis)?;
        Ok(())
    }
}
