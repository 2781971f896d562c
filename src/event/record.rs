//! Normalized event records
//!
//! One feed entry arrives as a loosely-shaped JSON object; this module turns
//! it into the fixed view the description formatter consumes. Decoding never
//! fails: absent or mistyped fields fall back to documented placeholders.

use serde_json::Value;

use crate::event::timestamp::format_timestamp;

/// Repository placeholder when the event carries no `repo.name`
pub const UNKNOWN_REPO: &str = "unknown/repo";

/// The known activity feed event types, plus a fallback for anything new
/// the API starts emitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Push,
    Issues,
    IssueComment,
    PullRequest,
    PullRequestReview,
    PullRequestReviewComment,
    Watch,
    Create,
    Delete,
    Fork,
    Release,
    Public,
    Member,
    Gollum,
    CommitComment,
    /// Unrecognized type tag, kept verbatim for the generic line
    Other(String),
}

impl EventKind {
    /// Map the feed's `type` string to a kind. Unknown tags are preserved.
    pub fn from_tag(tag: &str) -> EventKind {
        match tag {
            "PushEvent" => EventKind::Push,
            "IssuesEvent" => EventKind::Issues,
            "IssueCommentEvent" => EventKind::IssueComment,
            "PullRequestEvent" => EventKind::PullRequest,
            "PullRequestReviewEvent" => EventKind::PullRequestReview,
            "PullRequestReviewCommentEvent" => EventKind::PullRequestReviewComment,
            "WatchEvent" => EventKind::Watch,
            "CreateEvent" => EventKind::Create,
            "DeleteEvent" => EventKind::Delete,
            "ForkEvent" => EventKind::Fork,
            "ReleaseEvent" => EventKind::Release,
            "PublicEvent" => EventKind::Public,
            "MemberEvent" => EventKind::Member,
            "GollumEvent" => EventKind::Gollum,
            "CommitCommentEvent" => EventKind::CommitComment,
            other => EventKind::Other(other.to_string()),
        }
    }
}

/// The decoded, default-filled view of one feed entry.
///
/// `repo_name` and `created_at_display` are always present, possibly as
/// placeholder values; the payload stays loosely typed and is read through
/// the accessor methods below.
#[derive(Debug, Clone)]
pub struct NormalizedEvent {
    pub kind: EventKind,
    pub repo_name: String,
    pub created_at_display: String,
    payload: Option<Value>,
}

impl NormalizedEvent {
    /// Decode one raw feed entry.
    ///
    /// Accepts any JSON value; anything other than an object decodes to an
    /// all-placeholder record with the generic "Event" tag.
    pub fn from_value(raw: &Value) -> NormalizedEvent {
        let kind = raw
            .get("type")
            .and_then(Value::as_str)
            .map(EventKind::from_tag)
            .unwrap_or_else(|| EventKind::Other("Event".to_string()));

        let repo_name = raw
            .get("repo")
            .and_then(|r| r.get("name"))
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_REPO)
            .to_string();

        let created_at_display = raw
            .get("created_at")
            .and_then(Value::as_str)
            .map(format_timestamp)
            .unwrap_or_default();

        let payload = raw.get("payload").filter(|p| p.is_object()).cloned();

        NormalizedEvent {
            kind,
            repo_name,
            created_at_display,
            payload,
        }
    }

    /// A string payload field, e.g. `action` or `ref_type`.
    pub fn payload_str(&self, field: &str) -> Option<&str> {
        self.payload.as_ref()?.get(field)?.as_str()
    }

    /// A string field nested one level down, e.g. `forkee.full_name`.
    pub fn payload_nested_str(&self, outer: &str, field: &str) -> Option<&str> {
        self.payload.as_ref()?.get(outer)?.get(field)?.as_str()
    }

    /// An integer field nested one level down, e.g. `issue.number`.
    pub fn payload_nested_i64(&self, outer: &str, field: &str) -> Option<i64> {
        self.payload.as_ref()?.get(outer)?.get(field)?.as_i64()
    }

    /// A boolean field nested one level down, e.g. `pull_request.merged`.
    pub fn payload_nested_bool(&self, outer: &str, field: &str) -> Option<bool> {
        self.payload.as_ref()?.get(outer)?.get(field)?.as_bool()
    }

    /// Length of an array payload field; `None` when absent or not an array.
    pub fn payload_array_len(&self, field: &str) -> Option<usize> {
        Some(self.payload.as_ref()?.get(field)?.as_array()?.len())
    }
}
