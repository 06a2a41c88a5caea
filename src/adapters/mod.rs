// Adapters layer: concrete implementations of the domain ports.

pub mod seed;

pub use seed::{FileUserSource, SeedFormat};
