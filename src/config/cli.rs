use crate::core::ConfigProvider;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pro-catalog")]
#[command(about = "Groups a directory of professionals by skill and exports it")]
pub struct CliConfig {
    /// Realtime Database URL, e.g. https://my-app.firebaseio.com
    #[arg(long)]
    pub database_url: Option<String>,

    #[arg(long, default_value = "profesionales")]
    pub collection: String,

    #[arg(long)]
    pub auth_token: Option<String>,

    /// Read the snapshot from a JSON file instead of the database
    #[arg(long)]
    pub input_file: Option<String>,

    /// Skills to show; all skills when omitted
    #[arg(long = "oficio", value_delimiter = ',')]
    pub skill_filters: Vec<String>,

    /// Initial skill filter, as passed by the `oficio` route parameter
    #[arg(long)]
    pub requested: Option<String>,

    /// Print autocomplete suggestions for this text and exit
    #[arg(long)]
    pub suggest: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn skill_filters(&self) -> &[String] {
        &self.skill_filters
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match (&self.database_url, &self.input_file) {
            (Some(_), Some(_)) => {
                return Err(CatalogError::ConfigError {
                    message: "--database-url and --input-file are mutually exclusive".to_string(),
                })
            }
            (Some(url), None) => {
                validation::validate_url("database_url", url)?;
                validation::validate_collection("collection", &self.collection)?;
            }
            (None, Some(path)) => validation::validate_path("input_file", path)?,
            (None, None) => {
                return Err(CatalogError::MissingConfigError {
                    field: "database_url or input_file".to_string(),
                })
            }
        }

        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_skill_names("oficio", &self.skill_filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let config = CliConfig::parse_from([
            "pro-catalog",
            "--database-url",
            "https://demo.firebaseio.com",
            "--oficio",
            "Plomero,Electricista",
            "--oficio",
            "Carpintero",
        ]);

        assert_eq!(config.collection, "profesionales");
        assert_eq!(config.skill_filters, vec!["Plomero", "Electricista", "Carpintero"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_source_is_required_and_exclusive() {
        let none = CliConfig::parse_from(["pro-catalog"]);
        assert!(matches!(
            none.validate(),
            Err(CatalogError::MissingConfigError { .. })
        ));

        let both = CliConfig::parse_from([
            "pro-catalog",
            "--database-url",
            "https://demo.firebaseio.com",
            "--input-file",
            "pros.json",
        ]);
        assert!(matches!(both.validate(), Err(CatalogError::ConfigError { .. })));
    }
}
