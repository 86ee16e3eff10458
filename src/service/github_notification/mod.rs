//! GitHub webhook notification pipeline.
//!
//! The stages of the pipeline, in the order the webhook controller runs them:
//!
//! 1. [`signature`] - authenticates the raw request body against the shared
//!    webhook secret (HMAC-SHA256)
//! 2. [`classify`] - maps the event-type tag and JSON payload to a typed
//!    [`crate::model::github::ClassifiedEvent`]
//! 3. [`render`] - pure mapping from a classified event to a bounded
//!    [`crate::model::notification::RenderedNotification`]
//! 4. [`posting`] - the delivery sink that posts the rendered notification
//!    to a Discord channel
//!
//! Each stage is independent and individually testable; only the sink
//! performs I/O.

pub mod classify;
pub mod posting;
pub mod render;
pub mod signature;

#[cfg(test)]
mod test;
