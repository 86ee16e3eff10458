//! Database repository layer.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally; all
//! database queries and inserts are performed through these repositories.

pub mod github_event;
