use async_trait::async_trait;
use forradskollen::core::availability::NO_HITS_MARKER;
use forradskollen::utils::error::{Result, WatchError};
use forradskollen::{Config, MarkerInterpreter, Notifier, Watcher};
use httpmock::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Clone, Default)]
struct RecordingNotifier {
    calls: Arc<AtomicUsize>,
    fail: bool,
}

impl RecordingNotifier {
    fn new() -> Self {
        Self::default()
    }

    fn failing() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            fail: true,
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify_available(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(WatchError::Publish {
                message: "topic rejected the message".to_string(),
            });
        }
        Ok(())
    }
}

fn test_config(server: &MockServer) -> Config {
    Config {
        personnr: "191212121212".to_string(),
        password: "hunter2".to_string(),
        topic: Some("arn:aws:sns:eu-north-1:123456789012:forrad".to_string()),
        timeout_millis: 5000,
        login_url: server.url("/logga-in/?returnUrl=/mina-sidor/smaforrad/"),
        widgets_url: server.url("/widgets/?callback=jq_{epoch}&_={epoch}"),
    }
}

fn mock_login(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(POST)
            .path("/logga-in/")
            .header("content-type", "application/x-www-form-urlencoded")
            .body("Username=191212121212&Password=hunter2");
        then.status(302)
            .header("Location", "/mina-sidor/smaforrad/")
            .header("Set-Cookie", "X=1; Path=/");
    })
}

#[tokio::test]
async fn no_units_found_means_no_notification() {
    let server = MockServer::start();
    let login = mock_login(&server);
    let widgets = server.mock(|when, then| {
        when.method(GET).path("/widgets/").header("cookie", "X=1");
        then.status(200)
            .body(format!("jq_123(\"<div>{}</div>\")", NO_HITS_MARKER));
    });

    let config = test_config(&server);
    let notifier = RecordingNotifier::new();
    let watcher = Watcher::new(&config, notifier.clone(), MarkerInterpreter::new());

    let report = watcher.run().await.unwrap();

    login.assert();
    widgets.assert();
    assert!(!report.available);
    assert!(!report.notified);
    assert_eq!(notifier.call_count(), 0);
}

#[tokio::test]
async fn units_found_triggers_exactly_one_notification() -> anyhow::Result<()> {
    let server = MockServer::start();
    let login = mock_login(&server);
    let widgets = server.mock(|when, then| {
        when.method(GET).path("/widgets/").header("cookie", "X=1");
        then.status(200)
            .body("jq_123(\"<div>Ledigt förråd, 2 kvm</div>\")");
    });

    let config = test_config(&server);
    let notifier = RecordingNotifier::new();
    let watcher = Watcher::new(&config, notifier.clone(), MarkerInterpreter::new());

    let report = watcher.run().await?;

    login.assert();
    widgets.assert();
    assert!(report.available);
    assert!(report.notified);
    assert_eq!(notifier.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn failed_login_stops_before_the_availability_check() {
    let server = MockServer::start();
    let login = server.mock(|when, then| {
        when.method(POST).path("/logga-in/");
        then.status(200).body("Felaktigt personnummer eller lösenord");
    });
    let widgets = server.mock(|when, then| {
        when.method(GET).path("/widgets/");
        then.status(200).body("should never be fetched");
    });

    let config = test_config(&server);
    let notifier = RecordingNotifier::new();
    let watcher = Watcher::new(&config, notifier.clone(), MarkerInterpreter::new());

    let err = watcher.run().await.unwrap_err();

    login.assert();
    widgets.assert_hits(0);
    assert!(matches!(err, WatchError::StatusMismatch { .. }));
    assert_eq!(notifier.call_count(), 0);
}

#[tokio::test]
async fn publish_failure_fails_the_invocation() {
    let server = MockServer::start();
    mock_login(&server);
    server.mock(|when, then| {
        when.method(GET).path("/widgets/");
        then.status(200).body("jq_123(\"<div>Ledigt</div>\")");
    });

    let config = test_config(&server);
    let notifier = RecordingNotifier::failing();
    let watcher = Watcher::new(&config, notifier.clone(), MarkerInterpreter::new());

    let err = watcher.run().await.unwrap_err();

    assert!(matches!(err, WatchError::Publish { .. }));
    assert_eq!(notifier.call_count(), 1);
}

#[tokio::test]
async fn session_cookie_from_login_reaches_the_widgets_request() {
    let server = MockServer::start();
    mock_login(&server);
    // Strict mock first: only a request carrying the login cookie reaches it.
    // A dropped cookie falls through to the 403 catch-all and fails the run.
    let with_cookie = server.mock(|when, then| {
        when.method(GET).path("/widgets/").header("cookie", "X=1");
        then.status(200).body(NO_HITS_MARKER);
    });
    let without_cookie = server.mock(|when, then| {
        when.method(GET).path("/widgets/");
        then.status(403).body("inte inloggad");
    });

    let config = test_config(&server);
    let watcher = Watcher::new(&config, RecordingNotifier::new(), MarkerInterpreter::new());

    watcher.run().await.unwrap();

    with_cookie.assert();
    without_cookie.assert_hits(0);
}
