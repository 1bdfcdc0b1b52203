use crate::config::Config;
use crate::core::request::build_request;
use crate::core::session::SessionClient;
use crate::domain::ports::AvailabilityInterpreter;
use crate::utils::error::Result;
use reqwest::{Method, StatusCode};
use std::collections::HashMap;

/// The phrase the widgets endpoint embeds when the unit search comes back
/// empty. Case-sensitive on purpose: the site is the source of truth and any
/// drift there must be caught by a human, not papered over.
pub const NO_HITS_MARKER: &str = "Sökningen gav inga träffar";

/// Default interpreter: a unit is available iff the "no hits" phrase is
/// absent from the body. The response is JSONP-wrapped markup, so this is a
/// substring heuristic rather than structured parsing.
pub struct MarkerInterpreter {
    marker: String,
}

impl MarkerInterpreter {
    pub fn new() -> Self {
        Self::with_marker(NO_HITS_MARKER)
    }

    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }
}

impl Default for MarkerInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl AvailabilityInterpreter for MarkerInterpreter {
    fn interpret(&self, body: &[u8]) -> bool {
        !String::from_utf8_lossy(body).contains(&self.marker)
    }
}

/// Ask the widgets endpoint whether any unit is listed, reusing the session
/// that just logged in. Expects 200; the body goes to the interpreter.
pub async fn check(
    session: &SessionClient,
    config: &Config,
    headers: &HashMap<String, String>,
    interpreter: &dyn AvailabilityInterpreter,
) -> Result<bool> {
    let request = build_request(Method::GET, &config.widgets_url, Vec::new(), headers)?;
    let body = session.send(&request, StatusCode::OK).await?;
    Ok(interpreter.interpret(&body))
}
