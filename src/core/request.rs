use crate::domain::model::OutboundRequest;
use crate::utils::error::{Result, WatchError};
use chrono::Utc;
use reqwest::Method;
use std::collections::HashMap;
use url::Url;

/// Placeholder replaced with the current epoch in milliseconds. The widgets
/// endpoint serves cached results unless every call looks unique.
pub const EPOCH_PLACEHOLDER: &str = "{epoch}";

/// The fixed header set the target site expects. Passed explicitly into each
/// component rather than living in a global.
pub fn default_headers() -> HashMap<String, String> {
    HashMap::from([
        (
            "User-Agent".to_string(),
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_0) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/84.0.4147.89 Safari/537.36".to_string(),
        ),
        ("Accept".to_string(), "*/*".to_string()),
        (
            "Content-Type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        ),
    ])
}

/// Resolve `{epoch}` placeholders in the template, parse the result and bundle
/// it with payload and headers. Headers are set verbatim; a key that appears
/// twice in the source map simply keeps its last value.
pub fn build_request(
    method: Method,
    url_template: &str,
    payload: Vec<u8>,
    headers: &HashMap<String, String>,
) -> Result<OutboundRequest> {
    let epoch_millis = Utc::now().timestamp_millis();
    let resolved = url_template.replace(EPOCH_PLACEHOLDER, &epoch_millis.to_string());

    let url = Url::parse(&resolved).map_err(|e| WatchError::RequestConstruction {
        method: method.to_string(),
        url: resolved.clone(),
        reason: e.to_string(),
    })?;

    Ok(OutboundRequest {
        method,
        url,
        payload,
        headers: headers.clone(),
    })
}
