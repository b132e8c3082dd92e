use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub const DEFAULT_GENDERS: &[&str] = &["male", "female", "other"];

pub const DEFAULT_BLOOD_GROUPS: &[&str] = &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

pub const DEFAULT_EXCLUDED_NUMBERS: &[&str] = &["0000000000", "1111111111", "1234567890", "9999999999"];

pub const DEFAULT_COUNTRIES: &[&str] = &[
    "Australia",
    "Canada",
    "France",
    "Germany",
    "India",
    "Japan",
    "Singapore",
    "United Arab Emirates",
    "United Kingdom",
    "United States",
];

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn default_genders() -> Vec<String> {
    to_strings(DEFAULT_GENDERS)
}

fn default_blood_groups() -> Vec<String> {
    to_strings(DEFAULT_BLOOD_GROUPS)
}

fn default_excluded_numbers() -> Vec<String> {
    to_strings(DEFAULT_EXCLUDED_NUMBERS)
}

fn default_countries() -> Vec<String> {
    to_strings(DEFAULT_COUNTRIES)
}

/// The `[reference]` table as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceConfig {
    #[serde(default = "default_countries")]
    pub countries: Vec<String>,
    #[serde(default = "default_excluded_numbers")]
    pub excluded_numbers: Vec<String>,
    #[serde(default = "default_genders")]
    pub genders: Vec<String>,
    #[serde(default = "default_blood_groups")]
    pub blood_groups: Vec<String>,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            countries: default_countries(),
            excluded_numbers: default_excluded_numbers(),
            genders: default_genders(),
            blood_groups: default_blood_groups(),
        }
    }
}

/// Lookup sets the validators read. Built once from [`ReferenceConfig`];
/// genders and countries are stored lower-cased, blood groups upper-cased.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    countries: HashSet<String>,
    excluded_numbers: HashSet<String>,
    genders: HashSet<String>,
    blood_groups: HashSet<String>,
}

impl ReferenceData {
    pub fn is_valid_country(&self, country: &str) -> bool {
        self.countries.contains(&country.trim().to_lowercase())
    }

    pub fn is_excluded_number(&self, mobile: &str) -> bool {
        self.excluded_numbers.contains(mobile)
    }

    pub fn is_valid_gender(&self, gender: &str) -> bool {
        self.genders.contains(&gender.to_lowercase())
    }

    pub fn is_valid_blood_group(&self, blood_group: &str) -> bool {
        self.blood_groups.contains(&blood_group.to_uppercase())
    }
}

impl From<&ReferenceConfig> for ReferenceData {
    fn from(config: &ReferenceConfig) -> Self {
        Self {
            countries: config.countries.iter().map(|c| c.trim().to_lowercase()).collect(),
            excluded_numbers: config.excluded_numbers.iter().cloned().collect(),
            genders: config.genders.iter().map(|g| g.to_lowercase()).collect(),
            blood_groups: config.blood_groups.iter().map(|b| b.to_uppercase()).collect(),
        }
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::from(&ReferenceConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups_are_case_insensitive() {
        let reference = ReferenceData::default();
        assert!(reference.is_valid_gender("Female"));
        assert!(reference.is_valid_blood_group("ab-"));
        assert!(reference.is_valid_country("  india "));
        assert!(!reference.is_valid_country("Atlantis"));
    }

    #[test]
    fn test_configured_sets_are_normalized() {
        let config = ReferenceConfig {
            genders: vec!["NonBinary".to_string()],
            blood_groups: vec!["hh".to_string()],
            ..ReferenceConfig::default()
        };
        let reference = ReferenceData::from(&config);
        assert!(reference.is_valid_gender("nonbinary"));
        assert!(!reference.is_valid_gender("male"));
        assert!(reference.is_valid_blood_group("HH"));
    }

    #[test]
    fn test_excluded_numbers_match_exactly() {
        let reference = ReferenceData::default();
        assert!(reference.is_excluded_number("1234567890"));
        assert!(!reference.is_excluded_number("7776543210"));
    }
}
