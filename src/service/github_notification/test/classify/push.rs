use super::*;

/// Tests that a push with commits classifies with the branch name stripped
/// of its refs/heads/ prefix.
#[test]
fn push_with_commits_yields_push_event() {
    let body = payload::push_payload(&[
        ("a1b2c3d4e5f6a7b8", "Fix resize handler\n\nLonger body text"),
        ("f6e5d4c3b2a1f6e5", "Update changelog"),
    ]);

    let event = classify("push", &body);

    let ClassifiedEvent::Push(push) = event else {
        panic!("expected push event, got {:?}", event);
    };

    assert_eq!(push.branch, "main");
    assert_eq!(push.pusher, "octocat");
    assert_eq!(push.repository, "acme/widget");
    assert_eq!(push.commits.len(), 2);
    assert_eq!(push.commits[0].id, "a1b2c3d4e5f6a7b8");
    assert_eq!(push.commits[1].message, "Update changelog");
}

/// Tests that a push with no commits is dropped.
///
/// Branch deletions and tag pushes arrive with an empty commit list; the
/// renderer must never see a push without commits.
#[test]
fn empty_commit_list_is_unknown() {
    let event = classify("push", &payload::push_payload(&[]));

    assert!(event.is_unknown());
}

/// Tests that a payload without the pusher object degrades to Unknown.
#[test]
fn missing_pusher_is_unknown() {
    let mut malformed = payload::push_payload(&[("a1b2c3d4e5f6", "Fix bug")]);
    malformed.as_object_mut().unwrap().remove("pusher");

    let event = classify("push", &malformed);

    assert!(event.is_unknown());
}
