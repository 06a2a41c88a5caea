pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::FileUserSource;
pub use config::{toml_config::TomlConfig, Settings};
pub use core::registry::{first_element, UserManager};
pub use domain::model::User;
pub use utils::error::{RegistryError, Result};
