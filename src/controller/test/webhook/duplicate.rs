use super::*;

/// Tests that a retried webhook send is processed as an independent event.
///
/// The pipeline performs no deduplication; the sender's retry policy owns
/// redelivery.
///
/// Expected: both requests succeed, two deliveries, two audit records
#[tokio::test]
async fn duplicate_payload_is_delivered_twice() {
    let sink = RecordingSink::new();
    let (app, db) = test_app(sink.clone()).await;

    let body = payload::star_payload("created");

    let first = app
        .clone()
        .oneshot(signed_request("star", &body))
        .await
        .unwrap();
    let second = app.oneshot(signed_request("star", &body)).await.unwrap();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(sink.delivery_count(), 2);

    let records = GithubEventRepository::new(&db)
        .get_by_event_type("star")
        .await
        .unwrap();
    assert_eq!(records.len(), 2);
}
