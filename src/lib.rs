//! slack-members - export a Slack workspace's member directory
//!
//! This library exposes the API client, key loading and configuration used by
//! the `slack-members` binary.

pub mod api;
pub mod config;
pub mod credentials;
pub mod types;

pub use api::client::SlackClient;
pub use config::Config;
