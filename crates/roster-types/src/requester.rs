use serde::{Deserialize, Serialize};

/// Identity on whose behalf a directory operation runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requester {
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl Requester {
    pub fn new(username: impl Into<String>, is_admin: bool) -> Self {
        Self {
            username: username.into(),
            is_admin,
        }
    }

    pub fn admin(username: impl Into<String>) -> Self {
        Self::new(username, true)
    }

    pub fn user(username: impl Into<String>) -> Self {
        Self::new(username, false)
    }

    /// Admins may act on anyone; everyone else only on themselves.
    pub fn can_access(&self, username: &str) -> bool {
        self.is_admin || self.username == username
    }
}

impl std::fmt::Display for Requester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.username)
    }
}
