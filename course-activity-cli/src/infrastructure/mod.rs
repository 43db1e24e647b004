pub mod definition_source;
pub mod error;
pub mod observability;

pub use definition_source::{write_output, DefinitionFormat, DefinitionSource};
pub use error::{CliError, Result};
pub use observability::LogConfig;
