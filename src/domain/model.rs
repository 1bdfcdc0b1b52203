use reqwest::Method;
use serde::Serialize;
use std::collections::HashMap;
use url::Url;

/// A fully-resolved outgoing request. Immutable once built: placeholder
/// substitution and URL parsing happen in the builder, never later.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: Url,
    pub payload: Vec<u8>,
    pub headers: HashMap<String, String>,
}

/// Outcome of one watch cycle, returned to the invocation boundary.
///
/// No state is carried between invocations, so `available` reflects this
/// check only and repeated availability re-notifies every time.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CheckReport {
    pub available: bool,
    pub notified: bool,
}
