use crate::utils::error::Result;
use async_trait::async_trait;

/// Decides whether a widgets response body means any unit is available.
///
/// The default implementation is a substring heuristic on a marker phrase;
/// keeping this behind a trait lets structured parsing replace it without
/// touching the rest of the pipeline.
pub trait AvailabilityInterpreter: Send + Sync {
    fn interpret(&self, body: &[u8]) -> bool;
}

/// Destination for the "new unit available" message. Called at most once per
/// invocation, and only when availability was detected.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify_available(&self) -> Result<()>;
}
