//! Build-time utilities for nem-id.
//!
//! This crate provides tools for:
//! - Parsing `ids.toml` configuration files
//! - Deriving every listed namespace (and its parents) and mosaic ID
//! - Generating a Rust module of `pub const` ID items
//!
//! # Usage in build.rs
//!
//! ```ignore
//! // build.rs
//! fn main() {
//!     nem_id_build::generate("ids.toml", "src/generated_ids.rs")
//!         .expect("Failed to generate ids");
//! }
//! ```
//!
//! # Config format
//!
//! ```toml
//! module_name = "ids"   # optional
//!
//! [namespaces]
//! names = ["nem", "foo.bar.baz"]
//!
//! [mosaics]
//! names = ["nem:xem", "foo.bar.baz:tokens"]
//! ```
//!
//! IDs are a pure function of the names, so regenerating never changes an
//! existing constant's value.

mod codegen;
mod config;

pub use codegen::{const_name, generate_ids_code};
pub use config::{ConfigError, IdsConfig, MosaicEntry, NamespaceEntry};

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main entry point for build.rs integration.
///
/// Reads `ids.toml`, derives every ID and writes the generated module to
/// `output_path`. Also tells cargo to rerun when the config changes.
///
/// # Errors
///
/// Returns an error if:
/// - `ids.toml` cannot be read or parsed
/// - a name is not a valid namespace or mosaic name
/// - two names map to the same constant name
/// - the output file cannot be written
pub fn generate(
    config_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<(), GenerateError> {
    let config_path = config_path.as_ref();
    let output_path = output_path.as_ref();

    println!("cargo:rerun-if-changed={}", config_path.display());

    let config = IdsConfig::from_file(config_path)?;
    let code = generate_ids_code(&config)?;

    std::fs::write(output_path, code).map_err(|source| GenerateError::Write {
        path: output_path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        config = %config_path.display(),
        output = %output_path.display(),
        namespaces = config.namespaces().count(),
        mosaics = config.mosaics().count(),
        "generated id constants"
    );
    Ok(())
}

/// Errors that can occur during generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("'{first}' and '{second}' both map to constant {ident}")]
    DuplicateConstant {
        ident: String,
        first: String,
        second: String,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
}
