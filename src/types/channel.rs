use serde::{Deserialize, Serialize};

use super::ResponseMetadata;

/// Public or private channel from `conversations.list`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_private: bool,
    pub num_members: Option<u64>,
}

/// `conversations.list` response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelsList {
    #[serde(default)]
    pub channels: Vec<Channel>,
    pub response_metadata: Option<ResponseMetadata>,
}
