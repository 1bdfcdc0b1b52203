use crate::domain::ports::Notifier;
use crate::utils::error::Result;
use async_trait::async_trait;

#[cfg(feature = "lambda")]
use crate::utils::error::WatchError;

/// Every notification is the same fixed text; nothing varies per invocation.
pub const SUBJECT: &str = "Nytt förråd!";
pub const MESSAGE: &str = "Det verkar finnas ett nytt förråd tillgängligt!\n\nGå till https://www.stockholmshem.se/mina-sidor/smaforrad/ för att kontrollera";

/// Notifier that only logs. Used by the CLI, where an actual publish during a
/// local run is usually unwanted.
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify_available(&self) -> Result<()> {
        tracing::info!(subject = SUBJECT, "{}", MESSAGE);
        Ok(())
    }
}

#[cfg(feature = "lambda")]
pub struct SnsNotifier {
    client: aws_sdk_sns::Client,
    topic: Option<String>,
}

#[cfg(feature = "lambda")]
impl SnsNotifier {
    pub fn new(client: aws_sdk_sns::Client, topic: Option<String>) -> Self {
        Self { client, topic }
    }
}

#[cfg(feature = "lambda")]
#[async_trait]
impl Notifier for SnsNotifier {
    async fn notify_available(&self) -> Result<()> {
        // The topic is resolved here rather than at startup: a missing TOPIC
        // only matters once a unit has actually been found.
        let topic = self.topic.as_deref().ok_or(WatchError::MissingEnvVar {
            name: crate::config::ENV_TOPIC,
        })?;

        self.client
            .publish()
            .topic_arn(topic)
            .subject(SUBJECT)
            .message(MESSAGE)
            .send()
            .await
            .map_err(|e| WatchError::Publish {
                message: e.to_string(),
            })?;

        tracing::info!("notification published");
        Ok(())
    }
}
