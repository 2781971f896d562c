//! Blocking GitHub REST client
//!
//! One GET against the public events endpoint per run. Headers follow the
//! GitHub REST conventions; the bearer token and API-version header are only
//! sent when a token was supplied.

use std::time::Duration;

use reqwest::blocking;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde_json::Value;

use crate::error::Error;

const API_BASE: &str = "https://api.github.com";
const API_VERSION: &str = "2022-11-28";
const AGENT: &str = concat!("gh-activity/", env!("CARGO_PKG_VERSION"), " (+https://github.com/)");

/// Client for the public events endpoint.
pub struct GithubClient {
    http: blocking::Client,
    headers: HeaderMap,
    base_url: String,
}

impl GithubClient {
    /// Build a client with the given request timeout and optional token.
    pub fn new(timeout: Duration, token: Option<&str>) -> Result<GithubClient, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(AGENT));
        if let Some(token) = token {
            // Tokens with non-header characters are dropped rather than
            // rejected; the request then proceeds unauthenticated.
            if let Ok(mut auth) = HeaderValue::from_str(&format!("Bearer {token}")) {
                auth.set_sensitive(true);
                headers.insert(AUTHORIZATION, auth);
                headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));
            }
        }

        let http = blocking::Client::builder().timeout(timeout).build()?;

        Ok(GithubClient {
            http,
            headers,
            base_url: API_BASE.to_string(),
        })
    }

    /// Fetch one page of a user's public events and return the raw body.
    ///
    /// A status >= 400 becomes [`Error::Api`] carrying the API's `message`
    /// field when the body had one; transport failures become
    /// [`Error::Network`].
    pub fn fetch_events(&self, username: &str) -> Result<String, Error> {
        let url = format!("{}/users/{}/events", self.base_url, username);
        let response = self
            .http
            .get(&url)
            .headers(self.headers.clone())
            .query(&[("per_page", "100")])
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if status.as_u16() >= 400 {
            return Err(Error::Api {
                status: status.as_u16(),
                message: api_message(&body),
            });
        }

        Ok(body)
    }
}

/// Best-effort extraction of the `message` field from an API error body.
fn api_message(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    parsed.get("message")?.as_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_message_extracted() {
        assert_eq!(
            api_message(r#"{"message": "Not Found", "status": "404"}"#),
            Some("Not Found".to_string())
        );
    }

    #[test]
    fn test_api_message_absent() {
        assert_eq!(api_message(r#"{"detail": "nope"}"#), None);
    }

    #[test]
    fn test_api_message_unparsable_body() {
        assert_eq!(api_message("<html>rate limited</html>"), None);
    }

    #[test]
    fn test_api_message_non_string() {
        assert_eq!(api_message(r#"{"message": 42}"#), None);
    }

    #[test]
    fn test_client_builds_with_and_without_token() {
        let anonymous = GithubClient::new(Duration::from_secs(5), None).unwrap();
        assert!(!anonymous.headers.contains_key(AUTHORIZATION));

        let authed = GithubClient::new(Duration::from_secs(5), Some("ghp_abc")).unwrap();
        assert!(authed.headers.contains_key(AUTHORIZATION));
        assert!(authed.headers.contains_key("X-GitHub-Api-Version"));
    }
}
