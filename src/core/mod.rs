pub mod registry;

pub use crate::domain::model::User;
pub use crate::domain::ports::{RegistrySettings, UserSource};
pub use crate::utils::error::Result;
