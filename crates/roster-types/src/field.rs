use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Email,
    Age,
    Mobile,
    Gender,
    BloodGroup,
    Country,
}

impl FieldKind {
    pub const ALL: [FieldKind; 6] = [
        FieldKind::Email,
        FieldKind::Age,
        FieldKind::Mobile,
        FieldKind::Gender,
        FieldKind::BloodGroup,
        FieldKind::Country,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Age => "age",
            FieldKind::Mobile => "mobile",
            FieldKind::Gender => "gender",
            FieldKind::BloodGroup => "blood_group",
            FieldKind::Country => "country",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| {
                let names: Vec<&str> = FieldKind::ALL.iter().map(|k| k.as_str()).collect();
                format!("Unknown field '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

/// Result of running one validator from the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub field: FieldKind,
    pub value: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_kind_parsing() {
        assert_eq!("email".parse::<FieldKind>().unwrap(), FieldKind::Email);
        assert_eq!("blood-group".parse::<FieldKind>().unwrap(), FieldKind::BloodGroup);
        assert_eq!("Blood_Group".parse::<FieldKind>().unwrap(), FieldKind::BloodGroup);
        assert!("role".parse::<FieldKind>().is_err());
    }
}
