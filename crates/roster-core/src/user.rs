// crates/roster-core/src/user.rs

use serde::{Deserialize, Serialize};

/// A user record. Identity is the username; insertion into a store
/// overwrites any previous record under the same username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique, non-empty username.
    pub username: String,
    /// Non-empty role label, e.g. "engineer".
    pub role: String,
}

impl UserRecord {
    pub fn new(username: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role: role.into(),
        }
    }
}
