//! Rendering of classified events into bounded notifications.
//!
//! Rendering is a pure mapping with no I/O. Every supported event variant
//! produces exactly one [`RenderedNotification`]; `Unknown` produces none.
//! Titles carry a classification token plus the event's identifier (issue
//! number, PR number, release tag) where one exists.

use crate::model::github::{
    Actor, ClassifiedEvent, CommitSummary, ForkEvent, IssueAction, IssueEvent, PullRequestAction,
    PullRequestEvent, PushEvent, ReleaseEvent, StarEvent,
};
use crate::model::notification::{
    truncate_to, AuthorLine, NotificationColor, RenderedNotification,
};

/// Maximum serialized length of the commit list field on push notifications.
pub const COMMIT_LIST_MAX_LEN: usize = 1000;

/// Renders a classified event into a notification document.
///
/// # Returns
/// - `Some(RenderedNotification)` - For every supported event variant
/// - `None` - For `Unknown`; the pipeline drops the event without side effects
pub fn render(event: &ClassifiedEvent) -> Option<RenderedNotification> {
    match event {
        ClassifiedEvent::Issue(event) => Some(render_issue(event)),
        ClassifiedEvent::PullRequest(event) => Some(render_pull_request(event)),
        ClassifiedEvent::Push(event) => Some(render_push(event)),
        ClassifiedEvent::Star(event) => Some(render_star(event)),
        ClassifiedEvent::Fork(event) => Some(render_fork(event)),
        ClassifiedEvent::Release(event) => Some(render_release(event)),
        ClassifiedEvent::Unknown => None,
    }
}

fn author_line(actor: &Actor) -> AuthorLine {
    AuthorLine {
        name: actor.login.clone(),
        icon_url: Some(actor.avatar_url.clone()),
        url: Some(actor.html_url.clone()),
    }
}

fn render_issue(event: &IssueEvent) -> RenderedNotification {
    let (title, color) = match event.action {
        IssueAction::Opened => (
            format!("New Issue Opened: #{}", event.number),
            NotificationColor::Warning,
        ),
        IssueAction::Closed => (
            format!("Issue Closed: #{}", event.number),
            NotificationColor::Normal,
        ),
        IssueAction::Reopened => (
            format!("Issue Reopened: #{}", event.number),
            NotificationColor::Warning,
        ),
    };

    let labels = if event.labels.is_empty() {
        "None".to_string()
    } else {
        event.labels.join(", ")
    };

    RenderedNotification::new(title, color)
        .description(event.title.clone())
        .url(event.url.clone())
        .author(author_line(&event.actor))
        .field("Repository", event.repository.clone(), true)
        .field("Labels", labels, true)
}

fn render_pull_request(event: &PullRequestEvent) -> RenderedNotification {
    let (title, color) = match event.action {
        PullRequestAction::Opened => (
            format!("New Pull Request: #{}", event.number),
            NotificationColor::Normal,
        ),
        PullRequestAction::Merged => (
            format!("Pull Request Merged: #{}", event.number),
            NotificationColor::Normal,
        ),
        PullRequestAction::Closed => (
            format!("Pull Request Closed: #{}", event.number),
            NotificationColor::Error,
        ),
        PullRequestAction::Reopened => (
            format!("Pull Request Reopened: #{}", event.number),
            NotificationColor::Normal,
        ),
    };

    RenderedNotification::new(title, color)
        .description(event.title.clone())
        .url(event.url.clone())
        .author(author_line(&event.actor))
        .field("Repository", event.repository.clone(), true)
        .field(
            "Branch",
            format!("{} → {}", event.head_ref, event.base_ref),
            true,
        )
        .field(
            "Changes",
            format!("+{} -{}", event.additions, event.deletions),
            true,
        )
}

fn render_push(event: &PushEvent) -> RenderedNotification {
    let commit_word = if event.commits.len() == 1 {
        "commit"
    } else {
        "commits"
    };
    let title = format!(
        "{} new {} to {}",
        event.commits.len(),
        commit_word,
        event.branch
    );

    // Push payloads name the pusher but carry no avatar
    let author = AuthorLine {
        name: event.pusher.clone(),
        icon_url: None,
        url: Some(format!("https://github.com/{}", event.pusher)),
    };

    RenderedNotification::new(title, NotificationColor::Normal)
        .url(event.compare_url.clone())
        .author(author)
        .field("Repository", event.repository.clone(), true)
        .field("Branch", event.branch.clone(), true)
        .field("Commits", commit_list(&event.commits), false)
}

/// Serializes a commit list as `<short-sha> <first-line>` entries, one per
/// line, truncated to [`COMMIT_LIST_MAX_LEN`].
fn commit_list(commits: &[CommitSummary]) -> String {
    let list = commits
        .iter()
        .map(|commit| {
            let short_sha: String = commit.id.chars().take(7).collect();
            let first_line = commit.message.lines().next().unwrap_or("");
            format!("`{}` {}", short_sha, first_line)
        })
        .collect::<Vec<_>>()
        .join("\n");

    truncate_to(list, COMMIT_LIST_MAX_LEN)
}

fn render_star(event: &StarEvent) -> RenderedNotification {
    RenderedNotification::new("New Star", NotificationColor::Normal)
        .description(format!("{} starred the repository", event.actor.login))
        .url(event.url.clone())
        .author(author_line(&event.actor))
        .field("Repository", event.repository.clone(), true)
        .field("Total Stars", event.stargazers.to_string(), true)
}

fn render_fork(event: &ForkEvent) -> RenderedNotification {
    RenderedNotification::new("New Fork", NotificationColor::Normal)
        .description(format!("{} forked the repository", event.actor.login))
        .url(event.url.clone())
        .author(author_line(&event.actor))
        .field("Repository", event.repository.clone(), true)
        .field("Total Forks", event.forks.to_string(), true)
}

fn render_release(event: &ReleaseEvent) -> RenderedNotification {
    let description = event.name.clone().unwrap_or_else(|| event.tag.clone());

    RenderedNotification::new(
        format!("New Release: {}", event.tag),
        NotificationColor::Normal,
    )
    .description(description)
    .url(event.url.clone())
    .author(author_line(&event.actor))
    .field("Repository", event.repository.clone(), true)
    .field(
        "Pre-release",
        if event.prerelease { "Yes" } else { "No" },
        true,
    )
}
