use crate::data::github_event::GithubEventRepository;
use test_utils::{builder::TestBuilder, error::TestError, factory};

mod get_by_event_type;
