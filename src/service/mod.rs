//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (HTTP) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Signature verification, event classification, and
//!   notification rendering for the webhook pipeline
//! - **External Services**: The Discord delivery sink and the GitHub REST client
//! - **Domain Models**: Working with domain models rather than wire formats

pub mod github;
pub mod github_notification;
