//! Deployment configuration
//!
//! Host, API key and project ID are resolved from command-line flags with
//! environment-variable fallback (`CLOUDERA_ML_HOST`, `CLOUDERA_ML_API_KEY`,
//! `CLOUDERA_ML_PROJECT_ID`); a `.env` file is honored when present. The
//! raw host string is kept as given here and normalized once by the API
//! client.

use crate::error::{CmlError, Result};

/// Resolved connection configuration for one invocation
#[derive(Debug, Clone)]
pub struct Config {
    /// Cloudera ML host URL, as supplied (not yet normalized)
    pub host: String,
    /// API key used for every request
    pub api_key: String,
    /// Default project for project-scoped commands
    pub project_id: Option<String>,
}

impl Config {
    /// Build a configuration from already-resolved values, requiring host
    /// and API key up front. Fails with the full list of missing keys so
    /// the user can fix everything in one pass.
    pub fn resolve(
        host: Option<String>,
        api_key: Option<String>,
        project_id: Option<String>,
    ) -> Result<Self> {
        let mut missing = Vec::new();
        if host.as_deref().is_none_or(|h| h.trim().is_empty()) {
            missing.push("host");
        }
        if api_key.as_deref().is_none_or(|k| k.trim().is_empty()) {
            missing.push("api_key");
        }
        if !missing.is_empty() {
            return Err(CmlError::MissingConfiguration(missing.join(", ")));
        }

        Ok(Self {
            host: host.unwrap_or_default(),
            api_key: api_key.unwrap_or_default(),
            project_id: project_id.filter(|p| !p.trim().is_empty()),
        })
    }

    /// Project ID, required by project-scoped commands
    pub fn project_id(&self) -> Result<&str> {
        self.project_id
            .as_deref()
            .ok_or_else(|| CmlError::MissingConfiguration("project_id".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_succeeds_with_host_and_key() {
        let config = Config::resolve(
            Some("ml.example.com".into()),
            Some("key".into()),
            None,
        )
        .unwrap();
        assert_eq!(config.host, "ml.example.com");
        assert!(config.project_id.is_none());
    }

    #[test]
    fn resolve_reports_all_missing_keys_at_once() {
        let err = Config::resolve(None, None, None).unwrap_err();
        assert_eq!(err.to_string(), "Missing configuration: host, api_key");
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let err = Config::resolve(Some("  ".into()), Some("key".into()), None).unwrap_err();
        assert_eq!(err.to_string(), "Missing configuration: host");
    }

    #[test]
    fn blank_project_id_is_treated_as_absent() {
        let config =
            Config::resolve(Some("h".into()), Some("k".into()), Some("".into())).unwrap();
        assert!(config.project_id().is_err());
    }
}
