//! Typed representations of GitHub webhook events.
//!
//! The classifier maps raw webhook payloads into [`ClassifiedEvent`], a tagged
//! union with one variant per supported event type. Each variant carries only
//! the fields its notification rendering needs. Event types and actions that
//! are not notification-worthy map to [`ClassifiedEvent::Unknown`], which is
//! dropped without producing a notification.

/// The user that triggered an event, as reported by GitHub's `sender` field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actor {
    /// GitHub login name
    pub login: String,
    /// Avatar image URL
    pub avatar_url: String,
    /// Profile page URL
    pub html_url: String,
}

/// Issue actions that produce a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IssueAction {
    Opened,
    Closed,
    Reopened,
}

/// A notification-worthy `issues` event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IssueEvent {
    pub action: IssueAction,
    pub number: u64,
    pub title: String,
    pub url: String,
    /// Label names attached to the issue, in GitHub's order
    pub labels: Vec<String>,
    /// Repository full name, e.g. "owner/repo"
    pub repository: String,
    pub actor: Actor,
}

/// Pull request actions that produce a notification.
///
/// A `closed` action is split by the payload's `merged` flag into `Merged`
/// and `Closed`, which render with different titles and colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PullRequestAction {
    Opened,
    Merged,
    Closed,
    Reopened,
}

/// A notification-worthy `pull_request` event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PullRequestEvent {
    pub action: PullRequestAction,
    pub number: u64,
    pub title: String,
    pub url: String,
    /// Source branch name
    pub head_ref: String,
    /// Target branch name
    pub base_ref: String,
    pub additions: i64,
    pub deletions: i64,
    pub repository: String,
    pub actor: Actor,
}

/// A single commit in a push event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitSummary {
    /// Full commit SHA
    pub id: String,
    /// Full commit message; rendering uses the first line only
    pub message: String,
}

/// A `push` event with at least one commit.
///
/// The classifier never constructs this variant with an empty commit list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PushEvent {
    /// Branch name with the `refs/heads/` prefix stripped
    pub branch: String,
    /// GitHub compare-view URL for the pushed range
    pub compare_url: String,
    pub commits: Vec<CommitSummary>,
    /// Display name of the pusher; push payloads carry no avatar
    pub pusher: String,
    pub repository: String,
}

/// A `star` event with action "created".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StarEvent {
    pub repository: String,
    /// Repository page URL
    pub url: String,
    /// Star count after this event
    pub stargazers: u64,
    pub actor: Actor,
}

/// A `fork` event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForkEvent {
    pub repository: String,
    /// Repository page URL
    pub url: String,
    /// Fork count after this event
    pub forks: u64,
    pub actor: Actor,
}

/// A `release` event with action "published".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReleaseEvent {
    /// Release tag, e.g. "v1.2.0"
    pub tag: String,
    /// Optional human-readable release name
    pub name: Option<String>,
    pub url: String,
    pub prerelease: bool,
    pub repository: String,
    pub actor: Actor,
}

/// A classified GitHub webhook event.
///
/// `Unknown` covers unsupported event types, filtered actions, and malformed
/// payloads. It never reaches the renderer; the pipeline drops it after
/// classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClassifiedEvent {
    Issue(IssueEvent),
    PullRequest(PullRequestEvent),
    Push(PushEvent),
    Star(StarEvent),
    Fork(ForkEvent),
    Release(ReleaseEvent),
    Unknown,
}

impl ClassifiedEvent {
    /// Returns true when the event carries no notification.
    pub fn is_unknown(&self) -> bool {
        matches!(self, ClassifiedEvent::Unknown)
    }
}
