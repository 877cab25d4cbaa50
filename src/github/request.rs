use reqwest::Url;
use tracing::debug;

use crate::error::{ActivityError, Result};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const ACCEPT: &str = "application/vnd.github+json";
pub const API_VERSION: &str = "2022-11-28";

/// A fully specified `GET /users/{username}/events` call. Building one does
/// not touch the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventsRequest {
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
}

impl EventsRequest {
    pub fn build(api_base: &str, username: &str, token: Option<&str>) -> Result<Self> {
        let username = username.trim();
        // dot segments cannot be sent as a single path segment
        if username.is_empty() || username == "." || username == ".." {
            return Err(ActivityError::InvalidUsername);
        }

        let invalid_base =
            |reason: String| ActivityError::InvalidApiBase(format!("{}: {}", api_base, reason));
        let mut url = Url::parse(api_base).map_err(|e| invalid_base(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid_base("cannot carry a path".to_string()))?
            .pop_if_empty()
            .push("users")
            .push(username)
            .push("events");

        let mut headers = vec![
            ("Accept", ACCEPT.to_string()),
            ("X-GitHub-Api-Version", API_VERSION.to_string()),
            (
                "User-Agent",
                concat!("gh-activity/", env!("CARGO_PKG_VERSION")).to_string(),
            ),
        ];

        match token.map(str::trim).filter(|t| !t.is_empty()) {
            Some(token) => headers.push(("Authorization", format!("Bearer {}", token))),
            None => debug!("no token configured, sending unauthenticated request"),
        }

        Ok(Self { url, headers })
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
