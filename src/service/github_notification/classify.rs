//! Classification of raw webhook payloads into typed events.
//!
//! Dispatch is a pure mapping from the `x-github-event` tag to a per-event
//! constructor. Each constructor deserializes only the payload fields its
//! notification needs and filters on the payload's `action` where relevant.
//! Unsupported tags, filtered actions, and malformed payloads all fall
//! through to `ClassifiedEvent::Unknown`; classification never fails the
//! pipeline.

use serde::Deserialize;
use serde_json::Value;

use crate::model::github::{
    Actor, ClassifiedEvent, CommitSummary, ForkEvent, IssueAction, IssueEvent, PullRequestAction,
    PullRequestEvent, PushEvent, ReleaseEvent, StarEvent,
};

#[derive(Deserialize)]
struct RepositoryFields {
    full_name: String,
    html_url: String,
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    forks_count: u64,
}

#[derive(Deserialize)]
struct SenderFields {
    login: String,
    avatar_url: String,
    html_url: String,
}

impl From<SenderFields> for Actor {
    fn from(sender: SenderFields) -> Self {
        Actor {
            login: sender.login,
            avatar_url: sender.avatar_url,
            html_url: sender.html_url,
        }
    }
}

#[derive(Deserialize)]
struct IssuesPayload {
    action: String,
    issue: IssueFields,
    repository: RepositoryFields,
    sender: SenderFields,
}

#[derive(Deserialize)]
struct IssueFields {
    number: u64,
    title: String,
    html_url: String,
    #[serde(default)]
    labels: Vec<LabelFields>,
}

#[derive(Deserialize)]
struct LabelFields {
    name: String,
}

#[derive(Deserialize)]
struct PullRequestPayload {
    action: String,
    pull_request: PullRequestFields,
    repository: RepositoryFields,
    sender: SenderFields,
}

#[derive(Deserialize)]
struct PullRequestFields {
    number: u64,
    title: String,
    html_url: String,
    #[serde(default)]
    merged: bool,
    head: BranchRef,
    base: BranchRef,
    #[serde(default)]
    additions: i64,
    #[serde(default)]
    deletions: i64,
}

#[derive(Deserialize)]
struct BranchRef {
    #[serde(rename = "ref")]
    name: String,
}

#[derive(Deserialize)]
struct PushPayload {
    #[serde(rename = "ref")]
    git_ref: String,
    compare: String,
    #[serde(default)]
    commits: Vec<CommitFields>,
    pusher: PusherFields,
    repository: RepositoryFields,
}

#[derive(Deserialize)]
struct CommitFields {
    id: String,
    message: String,
}

#[derive(Deserialize)]
struct PusherFields {
    name: String,
}

#[derive(Deserialize)]
struct StarPayload {
    action: String,
    repository: RepositoryFields,
    sender: SenderFields,
}

#[derive(Deserialize)]
struct ForkPayload {
    repository: RepositoryFields,
    sender: SenderFields,
}

#[derive(Deserialize)]
struct ReleasePayload {
    action: String,
    release: ReleaseFields,
    repository: RepositoryFields,
    sender: SenderFields,
}

#[derive(Deserialize)]
struct ReleaseFields {
    tag_name: String,
    name: Option<String>,
    html_url: String,
    #[serde(default)]
    prerelease: bool,
}

/// Classifies a webhook payload by its event-type tag.
///
/// # Arguments
/// - `event_type` - Value of the `x-github-event` header
/// - `payload` - Parsed JSON request body
///
/// # Returns
/// - A populated event variant when the event is notification-worthy
/// - `ClassifiedEvent::Unknown` for unsupported tags, filtered actions, and
///   payloads missing the fields the event type requires
pub fn classify(event_type: &str, payload: &Value) -> ClassifiedEvent {
    match event_type {
        "issues" => classify_issues(payload),
        "pull_request" => classify_pull_request(payload),
        "push" => classify_push(payload),
        "star" => classify_star(payload),
        "fork" => classify_fork(payload),
        "release" => classify_release(payload),
        other => {
            tracing::debug!("Unhandled GitHub event type: {}", other);
            ClassifiedEvent::Unknown
        }
    }
}

/// Logs a payload that failed to deserialize and returns Unknown.
fn malformed(event_type: &str, err: serde_json::Error) -> ClassifiedEvent {
    tracing::warn!("Malformed '{}' webhook payload: {}", event_type, err);
    ClassifiedEvent::Unknown
}

fn classify_issues(payload: &Value) -> ClassifiedEvent {
    let parsed = match IssuesPayload::deserialize(payload) {
        Ok(parsed) => parsed,
        Err(err) => return malformed("issues", err),
    };

    let action = match parsed.action.as_str() {
        "opened" => IssueAction::Opened,
        "closed" => IssueAction::Closed,
        "reopened" => IssueAction::Reopened,
        other => {
            tracing::debug!("Ignoring issues action '{}'", other);
            return ClassifiedEvent::Unknown;
        }
    };

    ClassifiedEvent::Issue(IssueEvent {
        action,
        number: parsed.issue.number,
        title: parsed.issue.title,
        url: parsed.issue.html_url,
        labels: parsed.issue.labels.into_iter().map(|l| l.name).collect(),
        repository: parsed.repository.full_name,
        actor: parsed.sender.into(),
    })
}

fn classify_pull_request(payload: &Value) -> ClassifiedEvent {
    let parsed = match PullRequestPayload::deserialize(payload) {
        Ok(parsed) => parsed,
        Err(err) => return malformed("pull_request", err),
    };

    let action = match parsed.action.as_str() {
        "opened" => PullRequestAction::Opened,
        // The merged flag distinguishes a merge from a close without merge
        "closed" if parsed.pull_request.merged => PullRequestAction::Merged,
        "closed" => PullRequestAction::Closed,
        "reopened" => PullRequestAction::Reopened,
        other => {
            tracing::debug!("Ignoring pull_request action '{}'", other);
            return ClassifiedEvent::Unknown;
        }
    };

    ClassifiedEvent::PullRequest(PullRequestEvent {
        action,
        number: parsed.pull_request.number,
        title: parsed.pull_request.title,
        url: parsed.pull_request.html_url,
        head_ref: parsed.pull_request.head.name,
        base_ref: parsed.pull_request.base.name,
        additions: parsed.pull_request.additions,
        deletions: parsed.pull_request.deletions,
        repository: parsed.repository.full_name,
        actor: parsed.sender.into(),
    })
}

fn classify_push(payload: &Value) -> ClassifiedEvent {
    let parsed = match PushPayload::deserialize(payload) {
        Ok(parsed) => parsed,
        Err(err) => return malformed("push", err),
    };

    // Branch deletions and tag pushes arrive with no commits
    if parsed.commits.is_empty() {
        tracing::debug!("Ignoring push with no commits to {}", parsed.git_ref);
        return ClassifiedEvent::Unknown;
    }

    let branch = parsed
        .git_ref
        .strip_prefix("refs/heads/")
        .unwrap_or(&parsed.git_ref)
        .to_string();

    ClassifiedEvent::Push(PushEvent {
        branch,
        compare_url: parsed.compare,
        commits: parsed
            .commits
            .into_iter()
            .map(|c| CommitSummary {
                id: c.id,
                message: c.message,
            })
            .collect(),
        pusher: parsed.pusher.name,
        repository: parsed.repository.full_name,
    })
}

fn classify_star(payload: &Value) -> ClassifiedEvent {
    let parsed = match StarPayload::deserialize(payload) {
        Ok(parsed) => parsed,
        Err(err) => return malformed("star", err),
    };

    // Star removals are not reported
    if parsed.action != "created" {
        tracing::debug!("Ignoring star action '{}'", parsed.action);
        return ClassifiedEvent::Unknown;
    }

    ClassifiedEvent::Star(StarEvent {
        repository: parsed.repository.full_name,
        url: parsed.repository.html_url,
        stargazers: parsed.repository.stargazers_count,
        actor: parsed.sender.into(),
    })
}

fn classify_fork(payload: &Value) -> ClassifiedEvent {
    let parsed = match ForkPayload::deserialize(payload) {
        Ok(parsed) => parsed,
        Err(err) => return malformed("fork", err),
    };

    ClassifiedEvent::Fork(ForkEvent {
        repository: parsed.repository.full_name,
        url: parsed.repository.html_url,
        forks: parsed.repository.forks_count,
        actor: parsed.sender.into(),
    })
}

fn classify_release(payload: &Value) -> ClassifiedEvent {
    let parsed = match ReleasePayload::deserialize(payload) {
        Ok(parsed) => parsed,
        Err(err) => return malformed("release", err),
    };

    // Drafts and edits are not announced
    if parsed.action != "published" {
        tracing::debug!("Ignoring release action '{}'", parsed.action);
        return ClassifiedEvent::Unknown;
    }

    ClassifiedEvent::Release(ReleaseEvent {
        tag: parsed.release.tag_name,
        name: parsed.release.name,
        url: parsed.release.html_url,
        prerelease: parsed.release.prerelease,
        repository: parsed.repository.full_name,
        actor: parsed.sender.into(),
    })
}
