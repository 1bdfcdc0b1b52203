use crate::domain::model::OutboundRequest;
use crate::utils::error::{Result, WatchError};
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{COOKIE, SET_COOKIE};
use reqwest::{redirect, Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;

/// HTTP client plus the cookie state shared by all requests of one invocation.
///
/// Redirects are never followed automatically: the login flow treats a 302 as
/// its success signal, so callers must see 3xx responses as-is. One session is
/// built per invocation and dropped afterwards.
pub struct SessionClient {
    client: Client,
    jar: Arc<Jar>,
}

impl SessionClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(redirect::Policy::none())
            .build()
            .map_err(WatchError::SessionSetup)?;

        Ok(Self {
            client,
            jar: Arc::new(Jar::default()),
        })
    }

    /// Send `request` and return the response body.
    ///
    /// The body is read in full even when the status differs from `expected`;
    /// it travels inside the mismatch error so callers can inspect what the
    /// site actually said. Cookies are merged into the session only on a
    /// status match, keyed by the URL the response finally resolved to.
    pub async fn send(&self, request: &OutboundRequest, expected: StatusCode) -> Result<Vec<u8>> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone());

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(cookies) = self.jar.cookies(&request.url) {
            builder = builder.header(COOKIE, cookies);
        }
        if !request.payload.is_empty() {
            builder = builder.body(request.payload.clone());
        }

        let response = builder.send().await?;
        let status = response.status();
        let final_url = response.url().clone();
        let set_cookies: Vec<String> = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok().map(str::to_owned))
            .collect();

        let body = response.bytes().await?.to_vec();

        if status != expected {
            return Err(WatchError::StatusMismatch {
                wanted: expected,
                got: status,
                url: final_url,
                body,
            });
        }

        for cookie in &set_cookies {
            self.jar.add_cookie_str(cookie, &final_url);
        }

        Ok(body)
    }
}
