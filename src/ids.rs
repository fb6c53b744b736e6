//! Typed namespace and mosaic identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidIdentifier;
use crate::name::split_mosaic_full_name;
use crate::path::{generate_mosaic_id, generate_namespace_id};
use crate::LevelId;

/// Identifier of a namespace level, e.g. `nem` or `foo.bar`.
///
/// Serializes as the bare signed integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamespaceId(LevelId);

impl NamespaceId {
    /// The `nem` root namespace.
    pub const NEM: Self = Self(-8884663987180930485);

    /// Wrap an already derived ID.
    #[inline]
    pub const fn from_raw(id: LevelId) -> Self {
        Self(id)
    }

    /// Derive the ID of the deepest level of `name`.
    pub fn from_name(name: &str) -> Result<Self, InvalidIdentifier> {
        generate_namespace_id(name).map(Self)
    }

    #[inline]
    pub const fn id(self) -> LevelId {
        self.0
    }

    /// 16 uppercase hex digits of the ID's 64 bits, as the network displays it.
    pub fn to_hex(self) -> String {
        format!("{:016X}", self.0 as u64)
    }
}

/// Identifier of a mosaic owned by a namespace, e.g. `nem:xem`.
///
/// Serializes as the bare signed integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MosaicId(LevelId);

impl MosaicId {
    /// The `nem:xem` currency mosaic.
    pub const XEM: Self = Self(-3087871471161192663);

    /// Wrap an already derived ID.
    #[inline]
    pub const fn from_raw(id: LevelId) -> Self {
        Self(id)
    }

    /// Derive from a namespace name and a mosaic name.
    pub fn from_names(namespace_name: &str, mosaic_name: &str) -> Result<Self, InvalidIdentifier> {
        generate_mosaic_id(namespace_name, mosaic_name).map(Self)
    }

    /// Derive from a full `"<namespace>:<mosaic>"` name.
    pub fn from_full_name(full_name: &str) -> Result<Self, InvalidIdentifier> {
        let (namespace_name, mosaic_name) = split_mosaic_full_name(full_name)?;
        Self::from_names(namespace_name, mosaic_name)
    }

    #[inline]
    pub const fn id(self) -> LevelId {
        self.0
    }

    /// 16 uppercase hex digits of the ID's 64 bits, as the network displays it.
    pub fn to_hex(self) -> String {
        format!("{:016X}", self.0 as u64)
    }
}

impl fmt::Display for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Display for MosaicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<NamespaceId> for LevelId {
    fn from(id: NamespaceId) -> Self {
        id.0
    }
}

impl From<MosaicId> for LevelId {
    fn from(id: MosaicId) -> Self {
        id.0
    }
}
