use tracing::debug;

use crate::activity::format::format_feed;
use crate::error::Result;
use crate::github::client::Transport;
use crate::github::request::{DEFAULT_API_BASE, EventsRequest};
use crate::github::response::parse_response;

pub const TOKEN_ENV: &str = "GITHUB_USER_ACTIVITY_CLI_TOKEN";
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Process environment, read once in `main` and handed down from there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let token = lookup(TOKEN_ENV).filter(|t| !t.trim().is_empty());
        let api_base = lookup(API_URL_ENV)
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Self { api_base, token }
    }
}

/// Build the request, make the one call, parse, format.
pub fn fetch_activity(
    config: &AppConfig,
    username: &str,
    transport: &impl Transport,
) -> Result<Vec<String>> {
    let request = EventsRequest::build(&config.api_base, username, config.token.as_deref())?;
    let response = transport.send(&request)?;
    let feed = parse_response(&response)?;
    debug!(events = feed.len(), username, "formatting feed");
    Ok(format_feed(&feed))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::{ActivityError, ApiErrorKind};
    use crate::github::client::RawResponse;

    struct StubTransport {
        response: RawResponse,
        seen: RefCell<Vec<EventsRequest>>,
    }

    impl StubTransport {
        fn new(status: u16, body: &str) -> Self {
            Self {
                response: RawResponse {
                    status,
                    rate_limit_remaining: None,
                    body: body.to_string(),
                },
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for StubTransport {
        fn send(&self, request: &EventsRequest) -> Result<RawResponse> {
            self.seen.borrow_mut().push(request.clone());
            Ok(self.response.clone())
        }
    }

    fn config(token: Option<&str>) -> AppConfig {
        AppConfig {
            api_base: DEFAULT_API_BASE.to_string(),
            token: token.map(str::to_string),
        }
    }

    #[test]
    fn end_to_end_feed() {
        let transport = StubTransport::new(
            200,
            r#"[{"type":"PushEvent","repo":{"name":"cgrustas/x"},"payload":{"commits":[{}]}},
                {"type":"CreateEvent","repo":{"name":"cgrustas/y"},"payload":{"ref_type":"branch"}}]"#,
        );

        let lines = fetch_activity(&config(Some("secret")), "cgrustas", &transport).unwrap();

        assert_eq!(
            lines,
            ["Pushed 1 commit to cgrustas/x", "Created a Git branch in cgrustas/y"]
        );
        let seen = transport.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].url.as_str(), "https://api.github.com/users/cgrustas/events");
        assert_eq!(seen[0].header("Authorization"), Some("Bearer secret"));
    }

    #[test]
    fn not_found_is_an_api_error() {
        let transport = StubTransport::new(404, r#"{"message":"Not Found"}"#);
        let err = fetch_activity(&config(None), "ghost-user", &transport).unwrap_err();
        assert!(matches!(
            err,
            ActivityError::Api {
                status: 404,
                kind: ApiErrorKind::NotFound,
                ..
            }
        ));
    }

    #[test]
    fn blank_username_never_reaches_transport() {
        let transport = StubTransport::new(200, "[]");
        let err = fetch_activity(&config(None), "", &transport).unwrap_err();
        assert!(matches!(err, ActivityError::InvalidUsername));
        assert!(transport.seen.borrow().is_empty());
    }

    #[test]
    fn config_reads_token_and_base_url() {
        let config = AppConfig::from_lookup(|key| match key {
            TOKEN_ENV => Some("ghp_x".to_string()),
            API_URL_ENV => Some("https://ghe.example.com/api/v3".to_string()),
            _ => None,
        });
        assert_eq!(config.token.as_deref(), Some("ghp_x"));
        assert_eq!(config.api_base, "https://ghe.example.com/api/v3");
    }

    #[test]
    fn config_defaults_when_unset_or_blank() {
        let config = AppConfig::from_lookup(|key| match key {
            TOKEN_ENV => Some(" ".to_string()),
            _ => None,
        });
        assert_eq!(config.token, None);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }
}
