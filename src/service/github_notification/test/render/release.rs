use super::*;

fn release_event(name: Option<&str>, prerelease: bool) -> ReleaseEvent {
    ReleaseEvent {
        tag: "v1.2.0".to_string(),
        name: name.map(str::to_string),
        url: "https://github.com/acme/widget/releases/tag/v1.2.0".to_string(),
        prerelease,
        repository: "acme/widget".to_string(),
        actor: actor(),
    }
}

/// Tests the title and fields of a release notification.
#[test]
fn release_renders_tag_in_title() {
    let notification = render_some(ClassifiedEvent::Release(release_event(
        Some("Widget 1.2.0"),
        false,
    )));

    assert_eq!(notification.title, "New Release: v1.2.0");
    assert_eq!(notification.color, NotificationColor::Normal);
    assert_eq!(notification.description.as_deref(), Some("Widget 1.2.0"));
    assert_eq!(field_value(&notification, "Pre-release"), "No");
}

/// Tests that a nameless release falls back to the tag as description.
#[test]
fn missing_name_falls_back_to_tag() {
    let notification = render_some(ClassifiedEvent::Release(release_event(None, false)));

    assert_eq!(notification.description.as_deref(), Some("v1.2.0"));
}

/// Tests that prereleases are marked as such.
#[test]
fn prerelease_renders_yes() {
    let notification = render_some(ClassifiedEvent::Release(release_event(None, true)));

    assert_eq!(field_value(&notification, "Pre-release"), "Yes");
}
