use serde::Deserialize;
use serde::de::IgnoredAny;
use serde_json::Value;
use tracing::debug;

/// One record of `GET /users/{username}/events`. Every field is optional so
/// that a sparse or unexpected record still reaches the formatter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub repo: Option<Repo>,
    pub payload: Option<Payload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Repo {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Payload {
    pub action: Option<String>,
    pub ref_type: Option<String>,
    pub size: Option<u64>,
    pub distinct_size: Option<u64>,
    pub commits: Option<Vec<IgnoredAny>>,
    pub number: Option<u64>,
    pub pages: Option<Vec<WikiPage>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WikiPage {
    pub action: Option<String>,
}

impl Event {
    pub fn from_value(value: Value) -> Self {
        match serde_json::from_value::<Event>(value.clone()) {
            Ok(event) => event,
            Err(e) => {
                // keep whatever identifies the record, drop the rest
                debug!(error = %e, "event record did not match the expected shape");
                Event {
                    kind: value.get("type").and_then(Value::as_str).map(str::to_string),
                    repo: value
                        .pointer("/repo/name")
                        .and_then(Value::as_str)
                        .map(|name| Repo {
                            name: Some(name.to_string()),
                        }),
                    payload: None,
                }
            }
        }
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn repo_name(&self) -> Option<&str> {
        self.repo.as_ref().and_then(|r| r.name.as_deref())
    }

    pub fn action(&self) -> Option<&str> {
        self.payload.as_ref().and_then(|p| p.action.as_deref())
    }
}

/// Events of one API call, in the order the API returned them.
#[derive(Debug, Clone, Default)]
pub struct ActivityFeed {
    events: Vec<Event>,
}

impl ActivityFeed {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
