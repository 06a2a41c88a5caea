use crate::domain::model::User;
use crate::utils::error::Result;

/// Something that can hand the registry an initial list of users.
pub trait UserSource {
    fn load_users(&self) -> Result<Vec<User>>;
}

pub trait RegistrySettings {
    fn organization(&self) -> &str;
    fn seed_file(&self) -> Option<&str>;
    fn log_level(&self) -> Option<&str>;
}
