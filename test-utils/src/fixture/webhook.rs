//! GitHub webhook payload fixtures.
//!
//! Builders for realistic webhook payload JSON, shaped like GitHub's wire
//! format. Each builder produces the subset of fields the pipeline reads,
//! plus a few it ignores, so tests exercise lenient parsing.

use serde_json::{json, Value};

/// Repository block shared by all payloads: "acme/widget" with 128 stars and
/// 17 forks.
pub fn repository() -> Value {
    json!({
        "id": 1296269,
        "full_name": "acme/widget",
        "html_url": "https://github.com/acme/widget",
        "stargazers_count": 128,
        "forks_count": 17,
        "open_issues_count": 9
    })
}

/// Sender block shared by all payloads: user "octocat".
pub fn sender() -> Value {
    json!({
        "login": "octocat",
        "avatar_url": "https://avatars.githubusercontent.com/u/583231",
        "html_url": "https://github.com/octocat"
    })
}

/// An `issues` payload for issue #42 "Widget crashes on resize" with labels
/// "bug" and "help wanted".
pub fn issues_payload(action: &str) -> Value {
    json!({
        "action": action,
        "issue": {
            "number": 42,
            "title": "Widget crashes on resize",
            "html_url": "https://github.com/acme/widget/issues/42",
            "labels": [{ "name": "bug" }, { "name": "help wanted" }]
        },
        "repository": repository(),
        "sender": sender()
    })
}

/// A `pull_request` payload for PR #7 "Add resize handling".
pub fn pull_request_payload(action: &str, merged: bool) -> Value {
    json!({
        "action": action,
        "pull_request": {
            "number": 7,
            "title": "Add resize handling",
            "html_url": "https://github.com/acme/widget/pull/7",
            "merged": merged,
            "head": { "ref": "fix/resize" },
            "base": { "ref": "main" },
            "additions": 120,
            "deletions": 35
        },
        "repository": repository(),
        "sender": sender()
    })
}

/// A `push` payload to `refs/heads/main` with the given `(sha, message)`
/// commits.
pub fn push_payload(commits: &[(&str, &str)]) -> Value {
    let commits: Vec<Value> = commits
        .iter()
        .map(|(id, message)| json!({ "id": id, "message": message }))
        .collect();

    json!({
        "ref": "refs/heads/main",
        "compare": "https://github.com/acme/widget/compare/abc...def",
        "commits": commits,
        "pusher": { "name": "octocat" },
        "repository": repository()
    })
}

/// A `star` payload with the given action.
pub fn star_payload(action: &str) -> Value {
    json!({
        "action": action,
        "repository": repository(),
        "sender": sender()
    })
}

/// A `fork` payload.
pub fn fork_payload() -> Value {
    json!({
        "forkee": { "full_name": "octocat/widget" },
        "repository": repository(),
        "sender": sender()
    })
}

/// A `release` payload for tag v1.2.0.
pub fn release_payload(action: &str, prerelease: bool) -> Value {
    json!({
        "action": action,
        "release": {
            "tag_name": "v1.2.0",
            "name": "Widget 1.2.0",
            "html_url": "https://github.com/acme/widget/releases/tag/v1.2.0",
            "prerelease": prerelease
        },
        "repository": repository(),
        "sender": sender()
    })
}
