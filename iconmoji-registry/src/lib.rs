pub mod error;
pub mod parser;
pub mod source;

pub use error::RegistryError;
pub use parser::{parse_line, parse_registry};
pub use source::{DEFAULT_REGISTRY_URL, RegistrySource};
