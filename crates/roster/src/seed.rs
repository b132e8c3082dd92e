use roster_config::Config;
use roster_directory::{Directory, DirectoryError};
use roster_types::NewUser;

fn sample_user(username: &str, email: &str, age: i32, mobile: &str, gender: &str, blood_group: &str, role: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: email.to_string(),
        age,
        mobile: mobile.to_string(),
        gender: gender.to_string(),
        blood_group: blood_group.to_string(),
        role: role.to_string(),
    }
}

/// Users loaded when the config file has no `[[seed]]` entries.
pub fn builtin_users() -> Vec<NewUser> {
    vec![
        sample_user("kiran", "kiran@example.com", 34, "9876543210", "male", "B+", "admin"),
        sample_user("ndines", "ndines@example.com", 29, "9123456780", "male", "O+", "user"),
        sample_user("radha2", "radha2@example.com", 26, "9988776655", "female", "A-", "user"),
    ]
}

/// Builds a directory from the configured reference data and seed users.
pub fn build_directory(config: &Config) -> Result<Directory, DirectoryError> {
    let mut directory = Directory::new(config.reference_data());
    let users = if config.seed.is_empty() {
        builtin_users()
    } else {
        config.seed.clone()
    };
    directory.seed(users)?;
    Ok(directory)
}
