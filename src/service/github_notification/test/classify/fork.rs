use super::*;

/// Tests that a fork classifies with the current fork count.
///
/// Fork payloads carry no action field, so every fork event notifies.
#[test]
fn fork_yields_fork_event() {
    let event = classify("fork", &payload::fork_payload());

    let ClassifiedEvent::Fork(fork) = event else {
        panic!("expected fork event, got {:?}", event);
    };

    assert_eq!(fork.repository, "acme/widget");
    assert_eq!(fork.forks, 17);
    assert_eq!(fork.actor.login, "octocat");
}

/// Tests that a payload without the sender object degrades to Unknown.
#[test]
fn missing_sender_is_unknown() {
    let mut malformed = payload::fork_payload();
    malformed.as_object_mut().unwrap().remove("sender");

    let event = classify("fork", &malformed);

    assert!(event.is_unknown());
}
