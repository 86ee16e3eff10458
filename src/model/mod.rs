//! Domain models shared across the application layers.
//!
//! Models here are plain data types with no I/O: classified GitHub webhook
//! events produced by the classifier, and the rendered notification document
//! handed to the delivery sink.

pub mod github;
pub mod notification;
