use roster_directory::{Directory, DirectoryError};
use roster_types::{NewUser, Requester, UserUpdate};
use serde::Serialize;
use tracing::{error, info};

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub scenario: &'static str,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn record(scenario: &'static str, result: Result<(), DirectoryError>) -> ScenarioOutcome {
    match result {
        Ok(()) => ScenarioOutcome {
            scenario,
            ok: true,
            error: None,
        },
        Err(e) => {
            error!(severity = "critical", "{}", e);
            ScenarioOutcome {
                scenario,
                ok: false,
                error: Some(e.to_string()),
            }
        }
    }
}

/// Walks through the admin and self-service flows against `directory`.
/// Failures are logged as critical and do not stop later scenarios.
pub fn run(directory: &mut Directory) -> Vec<ScenarioOutcome> {
    let mut outcomes = Vec::new();

    let admin = Requester::admin("kiran");
    let new_user = NewUser {
        username: "dummy".to_string(),
        email: "dummy@example.com".to_string(),
        age: 30,
        mobile: "7776543210".to_string(),
        gender: "male".to_string(),
        blood_group: "A+".to_string(),
        role: "user".to_string(),
    };
    let username = new_user.username.clone();
    outcomes.push(record(
        "admin adds a user",
        directory.add_user(new_user, &admin).map(|_| {
            info!("Admin {} added new user {}", admin, username);
        }),
    ));

    let updates = UserUpdate::default().email("new_dummy@example.com");
    outcomes.push(record(
        "admin updates a user",
        directory.update_user("dummy", &updates, &admin).map(|_| {
            info!("Admin {} updated user dummy: {:?}", admin, updates);
        }),
    ));

    outcomes.push(record(
        "admin views a user",
        directory.get_user_info("ndines", &admin).map(|user| {
            info!("Admin {} viewed user ndines: {:?}", admin, user);
        }),
    ));

    let lister = Requester::admin("nkiran");
    outcomes.push(record(
        "admin lists all users",
        directory.list_all_users(&lister).map(|users| {
            info!("Admin {} listed all users: {:?}", lister, users);
        }),
    ));

    let normal = Requester::user("radha2");
    outcomes.push(record(
        "user views own record",
        directory.get_user_info("radha2", &normal).map(|user| {
            info!("Normal user {} viewed their information: {:?}", normal, user);
        }),
    ));

    outcomes.push(record(
        "user views someone else",
        directory.get_user_info("ndines", &normal).map(|_| ()),
    ));

    outcomes
}
