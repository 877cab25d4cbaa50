use tracing::debug;

use crate::activity::model::{ActivityFeed, Event};

const UNKNOWN_TYPE: &str = "UnknownEvent";
const UNKNOWN_REPO: &str = "an unknown repository";

/// The event types that have their own line. Anything else goes through
/// `Other` and gets the fallback line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    CommitComment,
    Create,
    Delete,
    Fork,
    Gollum,
    IssueComment,
    Issues,
    Member,
    Public,
    PullRequest,
    PullRequestReview,
    PullRequestReviewComment,
    PullRequestReviewThread,
    Push,
    Release,
    Sponsorship,
    Watch,
    Other(String),
}

impl EventKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "CommitCommentEvent" => Self::CommitComment,
            "CreateEvent" => Self::Create,
            "DeleteEvent" => Self::Delete,
            "ForkEvent" => Self::Fork,
            "GollumEvent" => Self::Gollum,
            "IssueCommentEvent" => Self::IssueComment,
            "IssuesEvent" => Self::Issues,
            "MemberEvent" => Self::Member,
            "PublicEvent" => Self::Public,
            "PullRequestEvent" => Self::PullRequest,
            "PullRequestReviewEvent" => Self::PullRequestReview,
            "PullRequestReviewCommentEvent" => Self::PullRequestReviewComment,
            "PullRequestReviewThreadEvent" => Self::PullRequestReviewThread,
            "PushEvent" => Self::Push,
            "ReleaseEvent" => Self::Release,
            "SponsorshipEvent" => Self::Sponsorship,
            "WatchEvent" => Self::Watch,
            other => Self::Other(other.to_string()),
        }
    }
}

/// One line per event, feed order preserved.
pub fn format_feed(feed: &ActivityFeed) -> Vec<String> {
    feed.iter().map(describe).collect()
}

pub fn describe(event: &Event) -> String {
    let tag = event.kind().unwrap_or(UNKNOWN_TYPE);
    let repo = event.repo_name().unwrap_or_else(|| {
        debug!(tag, "event without repo.name");
        UNKNOWN_REPO
    });
    let payload = event.payload.clone().unwrap_or_default();

    let action = |default: &str| capitalize(event.action().unwrap_or(default));
    // lowercased for matching, payload casing is not reliable
    let raw_action = event.action().map(str::to_ascii_lowercase);
    let fallback = || format!("There was a {} in {}", tag, repo);

    match EventKind::from_tag(tag) {
        EventKind::Push => {
            let count = commit_count(event);
            let noun = if count == 1 { "commit" } else { "commits" };
            format!("Pushed {} {} to {}", count, noun, repo)
        }
        EventKind::Create => format!("Created a Git {} in {}", ref_type(event), repo),
        EventKind::Delete => format!("Deleted a Git {} in {}", ref_type(event), repo),
        EventKind::Fork => format!("Forked a repository in {}", repo),
        EventKind::Watch => match raw_action.as_deref().unwrap_or("started") {
            "started" => format!("Starred in {}", repo),
            _ => fallback(),
        },
        EventKind::Issues => format!("{} a new issue in {}", action("opened"), repo),
        EventKind::IssueComment => format!("{} an issue comment in {}", action("created"), repo),
        EventKind::CommitComment => format!("{} a commit comment in {}", action("created"), repo),
        EventKind::Gollum => {
            // wiki events carry the action per page rather than on the payload
            let page_action = payload
                .pages
                .as_ref()
                .and_then(|pages| pages.first())
                .and_then(|page| page.action.as_deref());
            let verb = event.action().or(page_action).unwrap_or("updated");
            format!("{} a wiki page in {}", capitalize(verb), repo)
        }
        EventKind::Member => match raw_action.as_deref().unwrap_or("added") {
            "added" => format!("Added member to {}", repo),
            "edited" => format!("Edited changes to the collaborator permissions in {}", repo),
            other => format!("{} MemberEvent in {}", capitalize(other), repo),
        },
        EventKind::Public => format!("Private repository {} is made public", repo),
        EventKind::PullRequest => match payload.number {
            Some(number) => format!(
                "{} pull request #{} in {}",
                action("opened"),
                number,
                repo
            ),
            None => format!("{} pull request in {}", action("opened"), repo),
        },
        EventKind::PullRequestReview => {
            format!("{} pull request review in {}", action("created"), repo)
        }
        EventKind::PullRequestReviewComment => {
            format!("{} pull request review comment in {}", action("created"), repo)
        }
        EventKind::PullRequestReviewThread => match raw_action.as_deref() {
            Some("resolved") => format!("Resolved a comment thread on a pull request in {}", repo),
            Some("unresolved") => format!(
                "Unresolved a previously resolved comment thread on a pull request in {}",
                repo
            ),
            _ => fallback(),
        },
        EventKind::Release => format!("{} a release event in {}", action("published"), repo),
        EventKind::Sponsorship => {
            format!("{} a sponsorship listing in {}", action("created"), repo)
        }
        EventKind::Other(tag) => format!("There was a {} in {}", tag, repo),
    }
}

/// `size` is the authoritative count; older payloads only carry the list.
fn commit_count(event: &Event) -> u64 {
    let Some(payload) = event.payload.as_ref() else {
        return 1;
    };
    payload
        .size
        .or(payload.distinct_size)
        .or_else(|| payload.commits.as_ref().map(|c| c.len() as u64))
        .unwrap_or(1)
}

fn ref_type(event: &Event) -> &str {
    event
        .payload
        .as_ref()
        .and_then(|p| p.ref_type.as_deref())
        .unwrap_or("reference")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
