pub mod prelude;

pub mod github_event;
