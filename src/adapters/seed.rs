use crate::core::{Result, User, UserSource};
use crate::utils::error::RegistryError;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedFormat {
    Json,
    Csv,
}

impl SeedFormat {
    pub const ALL: [SeedFormat; 2] = [SeedFormat::Json, SeedFormat::Csv];

    /// Recognised extensions, in the same order as [`SeedFormat::ALL`].
    pub const EXTENSIONS: [&'static str; 2] = [
        SeedFormat::ALL[0].extension(),
        SeedFormat::ALL[1].extension(),
    ];

    pub const fn extension(self) -> &'static str {
        match self {
            SeedFormat::Json => "json",
            SeedFormat::Csv => "csv",
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        Self::ALL
            .into_iter()
            .find(|format| extension.as_deref() == Some(format.extension()))
            .ok_or_else(|| RegistryError::ValidationError {
                message: format!(
                    "Cannot tell seed format of '{}': expected one of .{}",
                    path.display(),
                    Self::EXTENSIONS.join(", .")
                ),
            })
    }
}

/// Reads users from a JSON array or a CSV file with a `name,age,email` header.
#[derive(Debug, Clone)]
pub struct FileUserSource {
    path: PathBuf,
}

impl FileUserSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse_json(data: &[u8]) -> Result<Vec<User>> {
        Ok(serde_json::from_slice(data)?)
    }

    fn parse_csv(data: &[u8]) -> Result<Vec<User>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(data);

        let mut users = Vec::new();
        for row in reader.deserialize() {
            users.push(row?);
        }
        Ok(users)
    }
}

impl UserSource for FileUserSource {
    fn load_users(&self) -> Result<Vec<User>> {
        let format = SeedFormat::from_path(&self.path)?;
        tracing::debug!("Reading {:?} seed file {}", format, self.path.display());

        let data = fs::read(&self.path)?;
        let users = match format {
            SeedFormat::Json => Self::parse_json(&data)?,
            SeedFormat::Csv => Self::parse_csv(&data)?,
        };

        tracing::debug!("Loaded {} users from {}", users.len(), self.path.display());
        Ok(users)
    }
}
