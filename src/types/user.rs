use serde::{Deserialize, Serialize};

/// Workspace member from `users.list`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    /// Handle
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub profile: MemberProfile,
}

impl Member {
    pub fn real_name(&self) -> &str {
        self.profile.real_name.as_deref().unwrap_or_default()
    }

    pub fn email(&self) -> &str {
        self.profile.email.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberProfile {
    pub real_name: Option<String>,
    /// Absent without the `users:read.email` scope
    pub email: Option<String>,
}

/// `users.list` response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersList {
    #[serde(default)]
    pub members: Vec<Member>,
    pub response_metadata: Option<ResponseMetadata>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseMetadata {
    pub next_cursor: Option<String>,
}
