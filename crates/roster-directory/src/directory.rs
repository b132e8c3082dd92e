use fastrace::trace;
use roster_config::ReferenceData;
use roster_types::{NewUser, Records, Requester, UserRecord, UserUpdate};
use tracing::{error, info, warn};

use crate::error::{DirectoryError, FieldError};
use crate::validate::{validate_age, validate_blood_group, validate_email, validate_gender, validate_mobile};

/// In-memory user records plus the reference data used to validate them.
///
/// Operations check authorization and validate input before touching
/// `records`, so a failed call never leaves a partial write behind.
#[derive(Debug, Clone)]
pub struct Directory {
    records: Records,
    reference: ReferenceData,
}

impl Directory {
    pub fn new(reference: ReferenceData) -> Self {
        Self {
            records: Records::new(),
            reference,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, username: &str) -> bool {
        self.records.contains_key(username)
    }

    /// Loads trusted bootstrap users. Runs the same validation and duplicate
    /// checks as [`Directory::add_user`] but skips authorization.
    pub fn seed(&mut self, users: impl IntoIterator<Item = NewUser>) -> Result<usize, DirectoryError> {
        let mut count = 0;
        for new_user in users {
            self.insert_validated(new_user)?;
            count += 1;
        }
        info!("Seeded directory with {} user(s)", count);
        Ok(count)
    }

    #[trace]
    pub fn get_user_info(&self, username: &str, requester: &Requester) -> Result<&UserRecord, DirectoryError> {
        let Some(record) = self.records.get(username) else {
            error!("User {} not found", username);
            return Err(DirectoryError::NotFound {
                username: username.to_string(),
            });
        };

        if !requester.can_access(username) {
            warn!(
                "Unauthorized access attempt by {} to view {}'s information",
                requester, username
            );
            return Err(unauthorized(requester));
        }

        info!("User info for {}: {:?}", username, record);
        Ok(record)
    }

    #[trace]
    pub fn list_all_users(&self, requester: &Requester) -> Result<&Records, DirectoryError> {
        if !requester.is_admin {
            warn!("Unauthorized access attempt by {} to list all users", requester);
            return Err(unauthorized(requester));
        }

        info!("Admin {} listing all users", requester);
        Ok(&self.records)
    }

    #[trace]
    pub fn add_user(&mut self, new_user: NewUser, requester: &Requester) -> Result<&Records, DirectoryError> {
        if !requester.is_admin {
            warn!(
                "Unauthorized access attempt by {} to add new user {}",
                requester, new_user.username
            );
            return Err(unauthorized(requester));
        }

        let username = self.insert_validated(new_user)?;
        info!("Admin {} added new user {}", requester, username);
        Ok(&self.records)
    }

    #[trace]
    pub fn update_user(
        &mut self,
        username: &str,
        updates: &UserUpdate,
        requester: &Requester,
    ) -> Result<&UserRecord, DirectoryError> {
        if !self.records.contains_key(username) {
            error!("User {} not found", username);
            return Err(DirectoryError::NotFound {
                username: username.to_string(),
            });
        }

        if !requester.can_access(username) {
            warn!(
                "Unauthorized access attempt by {} to update user {}",
                requester, username
            );
            return Err(unauthorized(requester));
        }

        self.validate_update(updates)?;

        let Some(record) = self.records.get_mut(username) else {
            return Err(DirectoryError::NotFound {
                username: username.to_string(),
            });
        };
        record.apply(updates);
        info!("User {} updated user {}: {:?}", requester, username, updates);
        Ok(record)
    }

    fn insert_validated(&mut self, new_user: NewUser) -> Result<String, DirectoryError> {
        self.validate_new(&new_user)?;

        if self.records.contains_key(&new_user.username) {
            error!("User {} already exists", new_user.username);
            return Err(DirectoryError::AlreadyExists {
                username: new_user.username,
            });
        }

        let (username, record) = new_user.into_parts();
        self.records.insert(username.clone(), record);
        Ok(username)
    }

    /// Order matters: the first failing field is the one reported.
    fn validate_new(&self, new_user: &NewUser) -> Result<(), FieldError> {
        validate_email(&new_user.email)?;
        validate_age(new_user.age)?;
        validate_mobile(&new_user.mobile, &self.reference)?;
        validate_gender(&new_user.gender, &self.reference)?;
        validate_blood_group(&new_user.blood_group, &self.reference)?;
        Ok(())
    }

    fn validate_update(&self, updates: &UserUpdate) -> Result<(), FieldError> {
        if let Some(email) = &updates.email {
            validate_email(email)?;
        }
        if let Some(age) = updates.age {
            validate_age(age)?;
        }
        if let Some(mobile) = &updates.mobile {
            validate_mobile(mobile, &self.reference)?;
        }
        if let Some(gender) = &updates.gender {
            validate_gender(gender, &self.reference)?;
        }
        if let Some(blood_group) = &updates.blood_group {
            validate_blood_group(blood_group, &self.reference)?;
        }
        Ok(())
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new(ReferenceData::default())
    }
}

fn unauthorized(requester: &Requester) -> DirectoryError {
    DirectoryError::Unauthorized {
        requester: requester.username.clone(),
    }
}
