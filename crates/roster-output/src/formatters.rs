use roster_types::{FunctionStats, Records, UserRecord, ValidationReport};
use serde::Serialize;

pub fn format_user(username: &str, record: &UserRecord) -> String {
    let mut lines = vec![format!("{} ({})", username, record.role)];
    lines.push(format!("  email:       {}", record.email));
    lines.push(format!("  age:         {}", record.age));
    lines.push(format!("  mobile:      {}", record.mobile));
    lines.push(format!("  gender:      {}", record.gender));
    lines.push(format!("  blood group: {}", record.blood_group));
    lines.join("\n")
}

pub fn format_users(records: &Records) -> String {
    if records.is_empty() {
        return "No users".to_string();
    }

    let name_width = records.keys().map(|k| k.len()).max().unwrap_or(0).max("USERNAME".len());
    let email_width = records
        .values()
        .map(|r| r.email.len())
        .max()
        .unwrap_or(0)
        .max("EMAIL".len());

    let mut lines = vec![format!(
        "{:<name_width$}  {:<email_width$}  {:>3}  {:<10}  {:<7}  {:<5}  ROLE",
        "USERNAME", "EMAIL", "AGE", "MOBILE", "GENDER", "BLOOD"
    )];
    for (username, record) in records {
        lines.push(format!(
            "{:<name_width$}  {:<email_width$}  {:>3}  {:<10}  {:<7}  {:<5}  {}",
            username,
            record.email,
            record.age,
            record.mobile,
            record.gender,
            record.blood_group,
            record.role
        ));
    }
    lines.push(String::new());
    lines.push(format!("{} user(s)", records.len()));
    lines.join("\n")
}

pub fn format_validation_report(report: &ValidationReport) -> String {
    match (&report.error, &report.status) {
        (Some(error), _) => format!("{} '{}': {}", report.field, report.value, error),
        (None, Some(status)) => format!("{} '{}': ok ({})", report.field, report.value, status),
        (None, None) => format!("{} '{}': ok", report.field, report.value),
    }
}

pub fn format_profile(stats: &[FunctionStats]) -> String {
    if stats.is_empty() {
        return "No spans recorded".to_string();
    }

    let width = stats.iter().map(|s| s.name.len()).max().unwrap_or(0).max("FUNCTION".len());
    let mut lines = vec![format!(
        "{:<width$}  {:>5}  {:>10}  {:>8}  {:>8}  {:>8}",
        "FUNCTION", "CALLS", "TOTAL(us)", "AVG", "P90", "MAX"
    )];
    for s in stats {
        lines.push(format!(
            "{:<width$}  {:>5}  {:>10}  {:>8}  {:>8}  {:>8}",
            s.name, s.calls, s.total_us, s.avg_us, s.p90_us, s.max_us
        ));
    }
    lines.join("\n")
}

pub fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_types::FieldKind;

    fn record() -> UserRecord {
        UserRecord {
            email: "radha@example.com".to_string(),
            age: 27,
            mobile: "9123456780".to_string(),
            gender: "female".to_string(),
            blood_group: "B+".to_string(),
            role: "user".to_string(),
        }
    }

    #[test]
    fn test_format_user() {
        let out = format_user("radha2", &record());
        assert!(out.starts_with("radha2 (user)"));
        assert!(out.contains("email:       radha@example.com"));
        assert!(out.contains("blood group: B+"));
    }

    #[test]
    fn test_format_users_lists_in_key_order() {
        let mut records = Records::new();
        records.insert("zed".to_string(), record());
        records.insert("amy".to_string(), record());
        let out = format_users(&records);
        let amy = out.find("amy").unwrap();
        let zed = out.find("zed").unwrap();
        assert!(amy < zed);
        assert!(out.ends_with("2 user(s)"));
        assert_eq!(format_users(&Records::new()), "No users");
    }

    #[test]
    fn test_format_validation_report() {
        let mut report = ValidationReport {
            field: FieldKind::Mobile,
            value: "1234567890".to_string(),
            valid: true,
            status: Some("excluded".to_string()),
            error: None,
        };
        assert_eq!(format_validation_report(&report), "mobile '1234567890': ok (excluded)");

        report.valid = false;
        report.status = None;
        report.error = Some("Invalid mobile number".to_string());
        assert_eq!(
            format_validation_report(&report),
            "mobile '1234567890': Invalid mobile number"
        );
    }
}
