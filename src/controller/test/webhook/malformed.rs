use super::*;

/// Tests that a declared event type with missing sub-fields degrades to a
/// drop instead of an error.
///
/// Expected: 200, zero deliveries, zero audit records
#[tokio::test]
async fn missing_event_object_is_dropped() {
    let sink = RecordingSink::new();
    let (app, db) = test_app(sink.clone()).await;

    let mut body = payload::pull_request_payload("opened", false);
    body.as_object_mut().unwrap().remove("pull_request");

    let response = app
        .oneshot(signed_request("pull_request", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(sink.delivery_count(), 0);
    assert_eq!(GithubEventRepository::new(&db).count().await.unwrap(), 0);
}

/// Tests that a signed but unparseable body is acknowledged and dropped.
///
/// Expected: 200, zero deliveries, zero audit records
#[tokio::test]
async fn unparseable_body_is_dropped() {
    let sink = RecordingSink::new();
    let (app, db) = test_app(sink.clone()).await;

    let body = b"this is not json".to_vec();
    let signature = sign(SECRET, &body);

    let response = app
        .oneshot(webhook_request("star", body, Some(signature)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(sink.delivery_count(), 0);
    assert_eq!(GithubEventRepository::new(&db).count().await.unwrap(), 0);
}
