use std::sync::{Mutex, MutexGuard};

use roster_types::{NewUser, Records, Requester, UserRecord, UserUpdate};

use crate::directory::Directory;
use crate::error::DirectoryError;

/// [`Directory`] behind a mutex, for callers on more than one thread.
///
/// Each operation holds the lock for its whole read-modify-write, so
/// concurrent `add_user`/`update_user` calls cannot lose updates. Results are
/// cloned out because they cannot borrow past the lock.
#[derive(Debug, Default)]
pub struct SharedDirectory {
    inner: Mutex<Directory>,
}

impl SharedDirectory {
    pub fn new(directory: Directory) -> Self {
        Self {
            inner: Mutex::new(directory),
        }
    }

    pub fn get_user_info(&self, username: &str, requester: &Requester) -> Result<UserRecord, DirectoryError> {
        self.lock().get_user_info(username, requester).cloned()
    }

    pub fn list_all_users(&self, requester: &Requester) -> Result<Records, DirectoryError> {
        self.lock().list_all_users(requester).cloned()
    }

    pub fn add_user(&self, new_user: NewUser, requester: &Requester) -> Result<Records, DirectoryError> {
        self.lock().add_user(new_user, requester).cloned()
    }

    pub fn update_user(
        &self,
        username: &str,
        updates: &UserUpdate,
        requester: &Requester,
    ) -> Result<UserRecord, DirectoryError> {
        self.lock().update_user(username, updates, requester).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Writes only happen after validation succeeds, so a panic elsewhere
    // cannot leave the directory half-updated.
    fn lock(&self) -> MutexGuard<'_, Directory> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl From<Directory> for SharedDirectory {
    fn from(directory: Directory) -> Self {
        Self::new(directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            age: 30,
            mobile: "7776543210".to_string(),
            gender: "other".to_string(),
            blood_group: "O+".to_string(),
            role: "user".to_string(),
        }
    }

    #[test]
    fn test_concurrent_adds_are_all_kept() {
        let shared = Arc::new(SharedDirectory::default());
        let admin = Requester::admin("root");

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = Arc::clone(&shared);
                let admin = admin.clone();
                thread::spawn(move || shared.add_user(new_user(&format!("user{i}")), &admin))
            })
            .collect();

        for handle in handles {
            handle.join().unwrap().unwrap();
        }
        assert_eq!(shared.len(), 8);
    }

    #[test]
    fn test_concurrent_updates_to_one_record() {
        let mut directory = Directory::default();
        directory.seed([new_user("alice")]).unwrap();
        let shared = Arc::new(SharedDirectory::new(directory));

        let handles: Vec<_> = (0..10)
            .map(|age| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    shared.update_user("alice", &UserUpdate::default().age(age), &Requester::user("alice"))
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        let record = shared.get_user_info("alice", &Requester::user("alice")).unwrap();
        assert!((0..10).contains(&record.age));
        assert_eq!(record.email, "alice@example.com");
    }

    #[test]
    fn test_snapshot_is_detached_from_later_writes() {
        let shared = SharedDirectory::default();
        let admin = Requester::admin("root");
        shared.add_user(new_user("alice"), &admin).unwrap();

        let snapshot = shared.list_all_users(&admin).unwrap();
        shared.add_user(new_user("bob"), &admin).unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(shared.list_all_users(&admin).unwrap().len(), 2);
    }
}
