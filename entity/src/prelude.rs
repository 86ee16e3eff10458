pub use super::github_event::Entity as GithubEvent;
