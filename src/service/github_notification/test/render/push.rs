use super::*;
use crate::model::notification::TITLE_MAX_LEN;

/// Tests singular phrasing and commit formatting for a one-commit push.
#[test]
fn single_commit_renders_short_sha_and_first_line() {
    let notification = render_some(ClassifiedEvent::Push(push_event(vec![commit(
        "a1b2c3d4e5f6a7b8",
        "Fix resize handler\n\nLonger body text",
    )])));

    assert_eq!(notification.title, "1 new commit to main");
    assert_eq!(notification.color, NotificationColor::Normal);
    assert_eq!(
        field_value(&notification, "Commits"),
        "`a1b2c3d` Fix resize handler"
    );

    // Push payloads carry no avatar for the pusher
    let author = notification.author.expect("push events carry an author");
    assert_eq!(author.name, "octocat");
    assert!(author.icon_url.is_none());
    assert_eq!(author.url.as_deref(), Some("https://github.com/octocat"));
}

/// Tests plural phrasing and newline joining for a multi-commit push.
#[test]
fn multiple_commits_render_one_line_each() {
    let notification = render_some(ClassifiedEvent::Push(push_event(vec![
        commit("a1b2c3d4e5f6a7b8", "Fix resize handler"),
        commit("f6e5d4c3b2a1f6e5", "Update changelog"),
    ])));

    assert_eq!(notification.title, "2 new commits to main");
    assert_eq!(
        field_value(&notification, "Commits"),
        "`a1b2c3d` Fix resize handler\n`f6e5d4c` Update changelog"
    );
}

/// Tests that a large push stays within the commit list length cap.
///
/// 50 commits with 200-character messages would serialize far past the cap;
/// rendering must truncate deterministically instead of erroring.
#[test]
fn commit_list_never_exceeds_cap() {
    let long_message = "x".repeat(200);
    let commits: Vec<_> = (0..50)
        .map(|i| commit(&format!("{:040x}", i), &long_message))
        .collect();

    let notification = render_some(ClassifiedEvent::Push(push_event(commits)));

    assert!(field_value(&notification, "Commits").len() <= COMMIT_LIST_MAX_LEN);
}

/// Tests that truncation is deterministic across renders.
#[test]
fn commit_list_truncation_is_deterministic() {
    let long_message = "y".repeat(300);
    let commits: Vec<_> = (0..20)
        .map(|i| commit(&format!("{:040x}", i), &long_message))
        .collect();

    let first = render_some(ClassifiedEvent::Push(push_event(commits.clone())));
    let second = render_some(ClassifiedEvent::Push(push_event(commits)));

    assert_eq!(
        field_value(&first, "Commits"),
        field_value(&second, "Commits")
    );
}

/// Tests that truncation lands on a char boundary for multibyte messages.
#[test]
fn commit_list_truncates_multibyte_messages_without_panicking() {
    let multibyte_message = "é".repeat(400);
    let commits: Vec<_> = (0..5)
        .map(|i| commit(&format!("{:040x}", i), &multibyte_message))
        .collect();

    let notification = render_some(ClassifiedEvent::Push(push_event(commits)));

    assert!(field_value(&notification, "Commits").len() <= COMMIT_LIST_MAX_LEN);
}

/// Tests that an oversized branch name cannot push the title past the
/// sink's limit.
#[test]
fn title_is_truncated_to_sink_limit() {
    let mut event = push_event(vec![commit("a1b2c3d4e5f6a7b8", "Fix resize handler")]);
    event.branch = "b".repeat(400);

    let notification = render_some(ClassifiedEvent::Push(event));

    assert!(notification.title.len() <= TITLE_MAX_LEN);
}
