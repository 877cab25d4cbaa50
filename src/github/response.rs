use serde_json::Value;
use tracing::debug;

use crate::activity::model::{ActivityFeed, Event};
use crate::error::{ActivityError, ApiErrorKind, Result};
use crate::github::client::RawResponse;

pub fn parse_response(response: &RawResponse) -> Result<ActivityFeed> {
    if !(200..300).contains(&response.status) {
        let message = api_message(response.status, &response.body);
        let kind =
            ApiErrorKind::classify(response.status, response.rate_limit_remaining, &message);
        debug!(status = response.status, %message, "GitHub API returned an error");
        return Err(ActivityError::Api {
            status: response.status,
            kind,
            message,
        });
    }

    let root: Value = serde_json::from_str(&response.body)
        .map_err(|e| ActivityError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    let Value::Array(items) = root else {
        return Err(ActivityError::MalformedResponse(
            "expected a JSON array of events".to_string(),
        ));
    };

    debug!(count = items.len(), "parsed activity feed");
    Ok(ActivityFeed::new(items.into_iter().map(Event::from_value).collect()))
}

/// GitHub error bodies look like `{"message": "...", "documentation_url": "..."}`.
fn api_message(status: u16, body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        if let Some(Value::String(message)) = map.get("message") {
            return message.clone();
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("unknown status")
        .to_string()
}
