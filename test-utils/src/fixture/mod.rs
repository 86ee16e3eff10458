//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory test data
//! for use in unit tests. Unlike factories, fixtures do NOT insert data into
//! the database.
//!
//! # When to Use Fixtures
//!
//! - **Unit testing**: Test classification and rendering without HTTP overhead
//! - **Endpoint testing**: Build realistic webhook request bodies
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let payload = fixture::webhook::issues_payload("opened");
//! ```

pub mod webhook;
