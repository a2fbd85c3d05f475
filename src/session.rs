//! Authenticated session model
//!
//! A `Session` scopes every store operation to one user: the rest backend
//! obtains one by logging in, the memory backend fabricates a local one.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub access_token: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Session {
            user_id: user_id.into(),
            access_token: access_token.into(),
        }
    }

    /// Session for in-process backends that have no remote identity
    pub fn local() -> Self {
        Session {
            user_id: "local".to_string(),
            access_token: String::new(),
        }
    }
}
