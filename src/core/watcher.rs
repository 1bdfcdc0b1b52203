use crate::config::Config;
use crate::core::request::default_headers;
use crate::core::session::SessionClient;
use crate::core::{auth, availability};
use crate::domain::model::CheckReport;
use crate::domain::ports::{AvailabilityInterpreter, Notifier};
use crate::utils::error::Result;
use std::time::Duration;

/// Runs one full watch cycle: login, availability check, notify-if-available.
/// All three stages share a single session built at the start of `run`; the
/// session is dropped when the cycle ends.
pub struct Watcher<'a, N: Notifier, I: AvailabilityInterpreter> {
    config: &'a Config,
    notifier: N,
    interpreter: I,
}

impl<'a, N: Notifier, I: AvailabilityInterpreter> Watcher<'a, N, I> {
    pub fn new(config: &'a Config, notifier: N, interpreter: I) -> Self {
        Self {
            config,
            notifier,
            interpreter,
        }
    }

    pub async fn run(&self) -> Result<CheckReport> {
        let session = SessionClient::new(Duration::from_millis(self.config.timeout_millis))?;
        let headers = default_headers();

        tracing::debug!("logging in against {}", self.config.login_url);
        auth::login(&session, self.config, &headers).await?;

        tracing::debug!("checking unit availability");
        let available =
            availability::check(&session, self.config, &headers, &self.interpreter).await?;

        if !available {
            tracing::info!("no units available");
            return Ok(CheckReport {
                available: false,
                notified: false,
            });
        }

        tracing::info!("new förråd detected!");
        self.notifier.notify_available().await?;

        Ok(CheckReport {
            available: true,
            notified: true,
        })
    }
}
