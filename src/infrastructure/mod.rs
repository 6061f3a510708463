//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where tunesearch reads its configuration and writes its trace
//! files, following platform conventions via the `dirs` crate.

pub mod paths;

pub use paths::{default_config_path, expand_tilde, get_config_dir, get_data_dir};
