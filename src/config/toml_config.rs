use crate::core::ConfigProvider;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub catalog: CatalogConfig,
    pub source: SourceConfig,
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub name: String,
    #[serde(default)]
    pub skill_filters: Vec<String>,
    pub requested_skill: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Firebase,
    File,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub r#type: SourceKind,
    pub database_url: Option<String>,
    pub collection: Option<String>,
    pub auth_token: Option<String>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub json_logs: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn collection(&self) -> &str {
        self.source.collection.as_deref().unwrap_or("profesionales")
    }

    pub fn requested_skill(&self) -> Option<&str> {
        self.catalog.requested_skill.as_deref()
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.json_logs)
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn skill_filters(&self) -> &[String] {
        &self.catalog.skill_filters
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        match self.source.r#type {
            SourceKind::Firebase => {
                let url =
                    validation::validate_required_field("source.database_url", &self.source.database_url)?;
                validation::validate_url("source.database_url", url)?;
                validation::validate_collection("source.collection", self.collection())?;
            }
            SourceKind::File => {
                let path = validation::validate_required_field("source.path", &self.source.path)?;
                validation::validate_path("source.path", path)?;
            }
        }

        validation::validate_path("output.path", &self.output.path)?;
        validation::validate_skill_names("catalog.skill_filters", &self.catalog.skill_filters)
    }
}
