pub mod client;
pub mod error;

pub use client::*;
pub use error::*;

// Web API methods
pub const METHOD_USERS_LIST: &str = "users.list";
pub const METHOD_CONVERSATIONS_LIST: &str = "conversations.list";
