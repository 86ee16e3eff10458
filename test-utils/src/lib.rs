//! Repoherald Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! repoherald application. This crate offers a builder pattern for creating test
//! contexts with in-memory SQLite databases, factories for audit-log entities, and
//! fixture builders for GitHub webhook payloads.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and setup
//! - **factory**: Builders for inserting test entities with sensible defaults
//! - **fixture**: GitHub webhook payload JSON builders
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_event_log() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_github_event_table()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
