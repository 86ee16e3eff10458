//! Cron jobs for automated community tasks.

pub mod community_tasks;
