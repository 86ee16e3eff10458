use crate::model::github::{
    Actor, ClassifiedEvent, CommitSummary, ForkEvent, IssueAction, IssueEvent, PullRequestAction,
    PullRequestEvent, PushEvent, ReleaseEvent, StarEvent,
};
use crate::model::notification::{NotificationColor, RenderedNotification};
use crate::service::github_notification::render::{render, COMMIT_LIST_MAX_LEN};

mod push;
mod release;

fn actor() -> Actor {
    Actor {
        login: "octocat".to_string(),
        avatar_url: "https://avatars.githubusercontent.com/u/583231".to_string(),
        html_url: "https://github.com/octocat".to_string(),
    }
}

fn issue_event(action: IssueAction) -> IssueEvent {
    IssueEvent {
        action,
        number: 42,
        title: "Widget crashes on resize".to_string(),
        url: "https://github.com/acme/widget/issues/42".to_string(),
        labels: vec!["bug".to_string(), "help wanted".to_string()],
        repository: "acme/widget".to_string(),
        actor: actor(),
    }
}

fn pull_request_event(action: PullRequestAction) -> PullRequestEvent {
    PullRequestEvent {
        action,
        number: 7,
        title: "Add resize handling".to_string(),
        url: "https://github.com/acme/widget/pull/7".to_string(),
        head_ref: "fix/resize".to_string(),
        base_ref: "main".to_string(),
        additions: 120,
        deletions: 35,
        repository: "acme/widget".to_string(),
        actor: actor(),
    }
}

fn push_event(commits: Vec<CommitSummary>) -> PushEvent {
    PushEvent {
        branch: "main".to_string(),
        compare_url: "https://github.com/acme/widget/compare/abc...def".to_string(),
        commits,
        pusher: "octocat".to_string(),
        repository: "acme/widget".to_string(),
    }
}

fn commit(id: &str, message: &str) -> CommitSummary {
    CommitSummary {
        id: id.to_string(),
        message: message.to_string(),
    }
}

/// Renders an event that must produce a notification.
fn render_some(event: ClassifiedEvent) -> RenderedNotification {
    render(&event).expect("event should produce a notification")
}

fn field_value<'a>(notification: &'a RenderedNotification, name: &str) -> &'a str {
    notification
        .fields
        .iter()
        .find(|field| field.name == name)
        .map(|field| field.value.as_str())
        .unwrap_or_else(|| panic!("missing field '{}'", name))
}

/// Tests that unknown events render nothing.
#[test]
fn unknown_renders_nothing() {
    assert!(render(&ClassifiedEvent::Unknown).is_none());
}
