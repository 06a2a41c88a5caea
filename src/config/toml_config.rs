use crate::adapters::SeedFormat;
use crate::core::{RegistrySettings, Result};
use crate::utils::error::RegistryError;
use crate::utils::validation::{self, Validate, LOG_LEVELS};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub registry: RegistrySection,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySection {
    pub organization: String,
    pub seed_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RegistryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SEED_DIR}); unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }
}

impl RegistrySettings for TomlConfig {
    fn organization(&self) -> &str {
        &self.registry.organization
    }

    fn seed_file(&self) -> Option<&str> {
        self.registry.seed_file.as_deref()
    }

    fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_settings(self)
    }
}

/// Checks what any settings source hands the CLI. The organization name is never checked.
pub fn validate_settings<S: RegistrySettings + ?Sized>(settings: &S) -> Result<()> {
    if let Some(seed) = settings.seed_file() {
        validation::validate_path("registry.seed_file", seed)?;
        validation::validate_file_extension(
            "registry.seed_file",
            seed,
            &SeedFormat::EXTENSIONS,
        )?;
    }

    if let Some(level) = settings.log_level() {
        validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
    }

    Ok(())
}
