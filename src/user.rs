use crate::error::Result;
use crate::response::{from_json_object, FromJson};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// NexmoUser is the identity issued by `/api/jwt`: the user name and the
/// JWT the mobile SDK logs in with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NexmoUser {
    /// User name the token was issued for
    pub user_name: String,

    /// Server-side user identifier, when the server reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// JWT for the voice/messaging SDK
    pub token: String,
}

impl NexmoUser {
    /// Create a new NexmoUser
    pub fn new(user_name: String, token: String) -> Self {
        NexmoUser {
            user_name,
            user_id: None,
            token,
        }
    }

    /// Check if a non-empty token was issued
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }
}

impl FromJson for NexmoUser {
    fn from_json(json: &Map<String, Value>) -> Result<Self> {
        from_json_object(json)
    }
}
