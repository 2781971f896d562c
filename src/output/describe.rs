#![forbid(unsafe_code)]

//! Event description formatting
//!
//! Maps a normalized event to one display line starting with `"- "`.
//! Dispatch is a flat match on the event kind; every payload field a line
//! needs has a documented fallback, so formatting never fails and a feed
//! with odd entries still renders completely.

use crate::event::{EventKind, NormalizedEvent};
use crate::output::color::{paint, Style};

/// Produce the display line for one event (no trailing newline).
pub fn describe_event(ev: &NormalizedEvent, use_color: bool) -> String {
    let repo = paint(&ev.repo_name, Style::Bold, use_color);
    let when = paint(&ev.created_at_display, Style::Dim, use_color);

    match &ev.kind {
        EventKind::Push => {
            let commits = ev.payload_array_len("commits").unwrap_or(0);
            let noun = if commits == 1 { "commit" } else { "commits" };
            let count = paint(&commits.to_string(), Style::Cyan, use_color);
            format!("- Pushed {count} {noun} to {repo} ({when})")
        }
        EventKind::Issues => {
            let action = ev.payload_str("action").unwrap_or("acted on");
            let num = paint(&issue_number(ev, "issue"), Style::Cyan, use_color);
            format!("- {} issue {num} in {repo} ({when})", capitalize(action))
        }
        EventKind::IssueComment => {
            let action = ev.payload_str("action").unwrap_or("commented");
            let num = paint(&issue_number(ev, "issue"), Style::Cyan, use_color);
            format!("- {} on issue {num} in {repo} ({when})", capitalize(action))
        }
        EventKind::PullRequest => {
            let mut action = ev.payload_str("action").unwrap_or("acted on");
            let merged = ev
                .payload_nested_bool("pull_request", "merged")
                .unwrap_or(false);
            // "Merged" only replaces the exact "closed" action; a reopened
            // PR that was once merged keeps its own verb.
            if merged && action == "closed" {
                action = "merged";
            }
            let num = paint(&issue_number(ev, "pull_request"), Style::Cyan, use_color);
            format!(
                "- {} pull request {num} in {repo} ({when})",
                capitalize(action)
            )
        }
        EventKind::PullRequestReview => {
            let action = ev.payload_str("action").unwrap_or("reviewed");
            let num = paint(&issue_number(ev, "pull_request"), Style::Cyan, use_color);
            format!("- {} PR {num} in {repo} ({when})", capitalize(action))
        }
        EventKind::PullRequestReviewComment => {
            let num = paint(&issue_number(ev, "pull_request"), Style::Cyan, use_color);
            format!("- Commented on PR {num} in {repo} ({when})")
        }
        EventKind::Watch => format!("- Starred {repo} ({when})"),
        EventKind::Create => {
            let ref_type = paint(
                ev.payload_str("ref_type").unwrap_or("thing"),
                Style::Green,
                use_color,
            );
            let reference = paint(
                ev.payload_str("ref").unwrap_or(&ev.repo_name),
                Style::Bold,
                use_color,
            );
            format!("- Created {ref_type} {reference} in {repo} ({when})")
        }
        EventKind::Delete => {
            let ref_type = ev.payload_str("ref_type").unwrap_or("thing");
            let reference = ev.payload_str("ref").unwrap_or("");
            let target = paint(
                format!("{ref_type} {reference}").trim(),
                Style::Yellow,
                use_color,
            );
            format!("- Deleted {target} in {repo} ({when})")
        }
        EventKind::Fork => {
            let forkee = paint(
                ev.payload_nested_str("forkee", "full_name")
                    .unwrap_or("a fork"),
                Style::Bold,
                use_color,
            );
            format!("- Forked {repo} to {forkee} ({when})")
        }
        EventKind::Release => {
            let action = ev.payload_str("action").unwrap_or("published");
            let tag = paint(
                ev.payload_nested_str("release", "tag_name")
                    .unwrap_or("a release"),
                Style::Cyan,
                use_color,
            );
            format!("- {} {tag} in {repo} ({when})", capitalize(action))
        }
        EventKind::Public => format!("- Open-sourced {repo} ({when})"),
        EventKind::Member => {
            let action = ev.payload_str("action").unwrap_or("changed");
            let member = paint(
                ev.payload_nested_str("member", "login")
                    .unwrap_or("a member"),
                Style::Cyan,
                use_color,
            );
            format!(
                "- {} collaborator {member} in {repo} ({when})",
                capitalize(action)
            )
        }
        EventKind::Gollum => format!("- Updated wiki in {repo} ({when})"),
        EventKind::CommitComment => format!("- Commented on a commit in {repo} ({when})"),
        EventKind::Other(tag) => format!("- {tag} in {repo} ({when})"),
    }
}

/// `#{number}` from a nested payload object, or `#?` when unavailable.
fn issue_number(ev: &NormalizedEvent, outer: &str) -> String {
    match ev.payload_nested_i64(outer, "number") {
        Some(n) => format!("#{n}"),
        None => "#?".to_string(),
    }
}

/// Uppercase the first character, leaving the rest unchanged.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
