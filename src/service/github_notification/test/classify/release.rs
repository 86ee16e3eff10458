use super::*;

/// Tests that a published release classifies with its tag and name.
#[test]
fn published_yields_release_event() {
    let event = classify("release", &payload::release_payload("published", false));

    let ClassifiedEvent::Release(release) = event else {
        panic!("expected release event, got {:?}", event);
    };

    assert_eq!(release.tag, "v1.2.0");
    assert_eq!(release.name.as_deref(), Some("Widget 1.2.0"));
    assert!(!release.prerelease);
    assert_eq!(release.repository, "acme/widget");
}

/// Tests that the prerelease flag is carried through.
#[test]
fn prerelease_flag_is_preserved() {
    let event = classify("release", &payload::release_payload("published", true));

    let ClassifiedEvent::Release(release) = event else {
        panic!("expected release event");
    };
    assert!(release.prerelease);
}

/// Tests that draft creation and edits are not announced.
#[test]
fn created_and_edited_are_unknown() {
    assert!(classify("release", &payload::release_payload("created", false)).is_unknown());
    assert!(classify("release", &payload::release_payload("edited", false)).is_unknown());
}
