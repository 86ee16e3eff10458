use super::*;

/// Tests that only records of the requested type are returned.
///
/// Expected: two push records, the issues record excluded
#[tokio::test]
async fn returns_matching_records() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_github_event_table()
        .build()
        .await?;
    let db = test.db.unwrap();

    factory::github_event::GithubEventFactory::new(&db)
        .event_type("push")
        .build()
        .await?;
    factory::github_event::GithubEventFactory::new(&db)
        .event_type("push")
        .build()
        .await?;
    factory::github_event::GithubEventFactory::new(&db)
        .event_type("issues")
        .build()
        .await?;

    let repo = GithubEventRepository::new(&db);
    let records = repo.get_by_event_type("push").await?;

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|record| record.event_type == "push"));

    Ok(())
}

/// Tests the empty result for an event type with no records.
///
/// Expected: empty vector
#[tokio::test]
async fn returns_empty_when_no_match() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_github_event_table()
        .build()
        .await?;
    let db = test.db.unwrap();

    let repo = GithubEventRepository::new(&db);
    let records = repo.get_by_event_type("release").await?;

    assert!(records.is_empty());

    Ok(())
}
