use crate::config::Config;
use crate::core::request::build_request;
use crate::core::session::SessionClient;
use crate::utils::error::Result;
use reqwest::{Method, StatusCode};
use std::collections::HashMap;

/// Log in against the housing site. Success is the site answering 302; the
/// session keeps whatever cookies the response set, which is all the follow-up
/// availability request needs.
pub async fn login(
    session: &SessionClient,
    config: &Config,
    headers: &HashMap<String, String>,
) -> Result<()> {
    let payload = build_login_payload(&config.personnr, &config.password);
    let request = build_request(Method::POST, &config.login_url, payload, headers)?;
    session.send(&request, StatusCode::FOUND).await?;
    Ok(())
}

/// The endpoint accepts the raw credential bytes, so this is plain textual
/// substitution rather than a form encoder. Percent-escaping here is untested
/// against the real site and deliberately avoided.
pub fn build_login_payload(username: &str, password: &str) -> Vec<u8> {
    format!("Username={username}&Password={password}").into_bytes()
}
