//! TOML configuration parser for ids.toml.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use nem_id::{InvalidIdentifier, LevelId, NAMESPACE_SEPARATOR};
use serde::Deserialize;
use thiserror::Error;

/// Parsed ids configuration.
#[derive(Debug, Clone)]
pub struct IdsConfig {
    /// Module name for the generated constants
    pub module_name: String,
    /// Namespaces, including auto-generated parents, sorted by name
    namespaces: Vec<NamespaceEntry>,
    /// Mosaics, sorted by full name
    mosaics: Vec<MosaicEntry>,
}

/// A namespace level with its derived ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceEntry {
    /// Full dotted name (e.g., "foo.bar")
    pub name: String,
    /// Tree depth (0 = root)
    pub depth: u8,
    /// Parent name (None for root namespaces)
    pub parent: Option<String>,
    pub id: LevelId,
}

/// A mosaic with its derived ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MosaicEntry {
    /// Full name (e.g., "nem:xem")
    pub full_name: String,
    pub namespace: String,
    pub mosaic: String,
    pub id: LevelId,
}

/// Raw TOML structure.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawIdsConfig {
    /// Optional module name (defaults to "ids")
    module_name: Option<String>,
    #[serde(default)]
    namespaces: RawNames,
    #[serde(default)]
    mosaics: RawNames,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawNames {
    #[serde(default)]
    names: Vec<String>,
}

impl IdsConfig {
    /// Parse from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content)
    }

    /// Parse from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawIdsConfig = toml::from_str(content)?;

        let module_name = raw.module_name.unwrap_or_else(|| "ids".to_string());
        if !is_rust_identifier(&module_name) {
            return Err(ConfigError::Validation(format!(
                "module_name '{}' is not a valid Rust identifier",
                module_name
            )));
        }

        let namespaces = Self::expand_namespaces(&raw.namespaces.names)?;
        let mosaics = Self::derive_mosaics(&raw.mosaics.names)?;

        Ok(Self {
            module_name,
            namespaces,
            mosaics,
        })
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &NamespaceEntry> {
        self.namespaces.iter()
    }

    pub fn mosaics(&self) -> impl Iterator<Item = &MosaicEntry> {
        self.mosaics.iter()
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.namespaces.len() + self.mosaics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty() && self.mosaics.is_empty()
    }

    /// Expand names to include all parent namespaces.
    ///
    /// e.g., "a.b.c" expands to ["a", "a.b", "a.b.c"]
    fn expand_namespaces(names: &[String]) -> Result<Vec<NamespaceEntry>, ConfigError> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut entries: Vec<NamespaceEntry> = Vec::new();

        let separator = NAMESPACE_SEPARATOR.to_string();

        for name in names {
            let parts = nem_id::split_namespace_name(name)?;
            let path = nem_id::generate_namespace_path(name)?;

            for depth in 0..parts.len() {
                let ancestor = parts[..=depth].join(separator.as_str());
                if seen.insert(ancestor.clone()) {
                    let parent = (depth > 0).then(|| parts[..depth].join(separator.as_str()));
                    entries.push(NamespaceEntry {
                        name: ancestor,
                        depth: depth as u8,
                        parent,
                        id: path[depth],
                    });
                }
            }
        }

        // Sort by name for deterministic output
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn derive_mosaics(full_names: &[String]) -> Result<Vec<MosaicEntry>, ConfigError> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut entries = Vec::new();

        for full_name in full_names {
            if !seen.insert(full_name.as_str()) {
                continue;
            }
            let (namespace, mosaic) = nem_id::split_mosaic_full_name(full_name)?;
            let id = nem_id::generate_mosaic_id(namespace, mosaic)?;
            entries.push(MosaicEntry {
                full_name: full_name.clone(),
                namespace: namespace.to_string(),
                mosaic: mosaic.to_string(),
                id,
            });
        }

        entries.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        Ok(entries)
    }
}

/// Strict and reserved keywords of the 2024 edition, which cannot name a module.
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Starts with a letter or underscore, continues with alphanumerics or
/// underscores, and is not a keyword.
fn is_rust_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    s != "_"
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !RUST_KEYWORDS.contains(&s)
}

/// Errors during config parsing.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("validation error: {0}")]
    Validation(String),
    #[error(transparent)]
    InvalidName(#[from] InvalidIdentifier),
}
