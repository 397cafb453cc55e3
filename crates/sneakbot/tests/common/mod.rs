//! Common test utilities
//!
//! This module is shared across all integration tests

pub mod fixtures;
pub mod recorder;

#[allow(unused_imports)]
pub use fixtures::{channel_start_message, launch_url, private_start_message, test_config, TEST_CHAT_ID, TEST_USER_ID};
#[allow(unused_imports)]
pub use recorder::{ChatCall, RecordingChat};
