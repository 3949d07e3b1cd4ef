//! Clinic configuration.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// How strictly removals check for dependent records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RemovalPolicy {
    /// Only clients are protected (by the pets they own).
    #[default]
    Lenient,
    /// Pets and veterinarians are also protected by pending appointments.
    Strict,
}

/// Runtime options for a [`Clinic`](super::Clinic).
///
/// Defaults reproduce the permissive behavior: lenient removals, past dates
/// accepted, no prescription history, no sample data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ClinicConfig {
    /// Dependency checks applied on removal
    pub removal_policy: RemovalPolicy,
    /// Refuse appointments scheduled before the current local time
    pub reject_past_appointments: bool,
    /// Keep prescriptions produced by completed appointments
    pub retain_history: bool,
    /// Populate demo clients, pets and veterinarians on open
    pub seed_sample_data: bool,
}

impl ClinicConfig {
    /// Parse from a JSON document. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read and parse a JSON config file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading clinic config {}", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("parsing clinic config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ClinicConfig::default();
        assert_eq!(config.removal_policy, RemovalPolicy::Lenient);
        assert!(!config.reject_past_appointments);
        assert!(!config.retain_history);
        assert!(!config.seed_sample_data);
    }

    #[test]
    fn test_partial_json() {
        let config =
            ClinicConfig::from_json_str(r#"{"removal_policy": "strict", "retain_history": true}"#)
                .unwrap();
        assert_eq!(config.removal_policy, RemovalPolicy::Strict);
        assert!(config.retain_history);
        assert!(!config.reject_past_appointments);
    }

    #[test]
    fn test_empty_json_object() {
        assert_eq!(
            ClinicConfig::from_json_str("{}").unwrap(),
            ClinicConfig::default()
        );
    }

    #[test]
    fn test_invalid_policy() {
        assert!(ClinicConfig::from_json_str(r#"{"removal_policy": "paranoid"}"#).is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"reject_past_appointments": true}}"#).unwrap();

        let config = ClinicConfig::from_json_file(file.path()).unwrap();
        assert!(config.reject_past_appointments);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClinicConfig::from_json_file(dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("reading clinic config"));
    }
}
