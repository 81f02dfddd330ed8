use crate::error::GpaError;
use crate::gpa::GpaPolicy;
use crate::types::subject::Level;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GpaConfig {
    pub catalog: Option<CatalogConfig>,
    pub policy: Option<PolicyConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    pub advanced_level: Option<u8>,
    pub reduced_weight_code: Option<String>,
    pub reduced_weight: Option<f64>,
    pub double_count_code: Option<String>,
}

impl GpaConfig {
    pub fn catalog_path(&self) -> Option<&PathBuf> {
        self.catalog.as_ref().and_then(|catalog| catalog.path.as_ref())
    }

    /// Call `validate` first; invalid levels fall back to the default.
    pub fn policy(&self) -> GpaPolicy {
        let defaults = GpaPolicy::default();
        match &self.policy {
            Some(policy) => GpaPolicy {
                advanced_level: policy
                    .advanced_level
                    .and_then(|level| Level::try_from(level).ok())
                    .unwrap_or(defaults.advanced_level),
                reduced_weight_code: policy
                    .reduced_weight_code
                    .clone()
                    .unwrap_or(defaults.reduced_weight_code),
                reduced_weight: policy.reduced_weight.unwrap_or(defaults.reduced_weight),
                double_count_code: policy
                    .double_count_code
                    .clone()
                    .unwrap_or(defaults.double_count_code),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), GpaError> {
        if let Some(path) = self.catalog_path() {
            if path.as_os_str().is_empty() {
                return Err(GpaError::ConfigParse(
                    "catalog.path must not be empty".to_string(),
                ));
            }
        }

        let Some(policy) = &self.policy else {
            return Ok(());
        };

        if let Some(level) = policy.advanced_level {
            if Level::try_from(level).is_err() {
                return Err(GpaError::ConfigParse(format!(
                    "policy.advanced_level must be between 1 and 4 (found {level})"
                )));
            }
        }
        if let Some(weight) = policy.reduced_weight {
            if !(weight > 0.0 && weight <= 1.0) {
                return Err(GpaError::ConfigParse(format!(
                    "policy.reduced_weight must be in (0.0, 1.0] (found {weight})"
                )));
            }
        }
        for (key, value) in [
            ("reduced_weight_code", &policy.reduced_weight_code),
            ("double_count_code", &policy.double_count_code),
        ] {
            if value.as_deref().is_some_and(|code| code.trim().is_empty()) {
                return Err(GpaError::ConfigParse(format!(
                    "policy.{key} must be a non-empty subject code"
                )));
            }
        }

        Ok(())
    }
}
