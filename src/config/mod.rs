//! JSON configuration for the command-line tool.

pub mod edge;

pub use edge::{load_config, parse_config, EdgeOutputConfig, EdgeToolConfig};
