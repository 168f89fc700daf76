mod channel;
mod user;

pub use channel::*;
pub use user::*;

use serde::{Deserialize, Serialize};

/// Fields every Web API response carries alongside the method payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiStatus {
    pub ok: bool,
    pub error: Option<String>,
    pub warning: Option<String>,
}
