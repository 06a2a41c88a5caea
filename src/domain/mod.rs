// Domain layer: the user record and the ports (interfaces) adapters implement.
// No external dependencies beyond std/serde.

pub mod model;
pub mod ports;
