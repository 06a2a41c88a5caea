#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

use crate::core::{RegistrySettings, Result};
use crate::utils::validation::Validate;
use toml_config::TomlConfig;

pub const DEFAULT_ORGANIZATION: &str = "default";

/// Settings after merging command-line overrides over the optional TOML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub organization: String,
    pub seed_file: Option<String>,
    pub log_level: Option<String>,
}

impl Settings {
    pub fn resolve(
        file: Option<&TomlConfig>,
        organization: Option<String>,
        seed_file: Option<String>,
    ) -> Self {
        Self {
            organization: organization
                .or_else(|| file.map(|f| f.organization().to_string()))
                .unwrap_or_else(|| DEFAULT_ORGANIZATION.to_string()),
            seed_file: seed_file.or_else(|| file.and_then(|f| f.seed_file().map(String::from))),
            log_level: file.and_then(|f| f.log_level().map(String::from)),
        }
    }

    /// Reads the config file (if any) and applies the overrides.
    pub fn load(
        config_path: Option<&str>,
        organization: Option<String>,
        seed_file: Option<String>,
    ) -> Result<Self> {
        let file = config_path.map(TomlConfig::from_file).transpose()?;
        Ok(Self::resolve(file.as_ref(), organization, seed_file))
    }
}

impl RegistrySettings for Settings {
    fn organization(&self) -> &str {
        &self.organization
    }

    fn seed_file(&self) -> Option<&str> {
        self.seed_file.as_deref()
    }

    fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        toml_config::validate_settings(self)
    }
}
