#[cfg(feature = "lambda")]
use aws_config::BehaviorVersion;
#[cfg(feature = "lambda")]
use aws_sdk_sns::Client as SnsClient;
#[cfg(feature = "lambda")]
use forradskollen::notify::SnsNotifier;
#[cfg(feature = "lambda")]
use forradskollen::utils::logger;
#[cfg(feature = "lambda")]
use forradskollen::{CheckReport, Config, MarkerInterpreter, Watcher};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use serde::Serialize;

#[cfg(feature = "lambda")]
#[derive(Serialize)]
pub struct Response {
    pub message: String,
    #[serde(flatten)]
    pub report: CheckReport,
}

// The trigger is a scheduled EventBridge rule; the event payload carries
// nothing this function needs.
#[cfg(feature = "lambda")]
async fn function_handler(_event: LambdaEvent<serde_json::Value>) -> Result<Response, Error> {
    tracing::info!("Starting förråd check");

    let config =
        Config::from_env().map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let sns_client = SnsClient::new(&aws_config);
    let notifier = SnsNotifier::new(sns_client, config.topic.clone());

    let watcher = Watcher::new(&config, notifier, MarkerInterpreter::new());
    let report = watcher
        .run()
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    tracing::info!(
        available = report.available,
        notified = report.notified,
        "förråd check completed"
    );

    Ok(Response {
        message: "Watch cycle completed successfully".to_string(),
        report,
    })
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
