use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All stored records, keyed by username.
pub type Records = BTreeMap<String, UserRecord>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    pub age: i32,
    pub mobile: String,
    pub gender: String,
    pub blood_group: String,
    pub role: String,
}

impl UserRecord {
    /// Overwrites every field present in `update`, leaving the others alone.
    pub fn apply(&mut self, update: &UserUpdate) {
        if let Some(email) = &update.email {
            self.email = email.clone();
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(mobile) = &update.mobile {
            self.mobile = mobile.clone();
        }
        if let Some(gender) = &update.gender {
            self.gender = gender.clone();
        }
        if let Some(blood_group) = &update.blood_group {
            self.blood_group = blood_group.clone();
        }
    }
}

/// Input for creating a user: the record fields plus the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub age: i32,
    pub mobile: String,
    pub gender: String,
    pub blood_group: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "user".to_string()
}

impl NewUser {
    pub fn into_parts(self) -> (String, UserRecord) {
        let record = UserRecord {
            email: self.email,
            age: self.age,
            mobile: self.mobile,
            gender: self.gender,
            blood_group: self.blood_group,
            role: self.role,
        };
        (self.username, record)
    }
}

/// Partial update. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<String>,
}

impl UserUpdate {
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn mobile(mut self, mobile: impl Into<String>) -> Self {
        self.mobile = Some(mobile.into());
        self
    }

    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn blood_group(mut self, blood_group: impl Into<String>) -> Self {
        self.blood_group = Some(blood_group.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.age.is_none()
            && self.mobile.is_none()
            && self.gender.is_none()
            && self.blood_group.is_none()
    }
}

/// Successful outcome of mobile validation. A malformed number is an error instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MobileStatus {
    Valid,
    Excluded,
}

impl MobileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MobileStatus::Valid => "valid",
            MobileStatus::Excluded => "excluded",
        }
    }
}

impl std::fmt::Display for MobileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
