//! # Namespace and Mosaic ID Derivation (nem-id)
//!
//! Converts dotted, hierarchical names (`"foo.bar.baz"`) into the 64-bit
//! identifiers used by NEM catapult networks for namespaces and mosaics.
//!
//! ## Design
//!
//! Every level of a name is hashed together with the ID of its parent level,
//! so the ID of a child depends on the entire path above it:
//!
//! ```text
//!            parent id (i64, LE)      part bytes
//!          ┌────────────────────┬──────────────────┐
//! SHA3-256 │      8 bytes       │  "foo" / "bar"   │ ──► digest[0..8] as i64 (LE)
//!          └────────────────────┴──────────────────┘
//!
//! "foo"          = H(0        || "foo")
//! "foo.bar"      = H(id(foo)  || "bar")
//! "foo.bar.baz"  = H(id(bar)  || "baz")
//! "foo.bar.baz:tokens" (mosaic) = H(id(baz) || "tokens")
//! ```
//!
//! IDs are signed: the digest prefix is reinterpreted as a two's-complement
//! `i64`, never masked to `u64`.
//!
//! ## Usage
//!
//! ```
//! use nem_id::{generate_mosaic_id, generate_namespace_path};
//!
//! let path = generate_namespace_path("nem.xem").unwrap();
//! assert_eq!(path, [-8884663987180930485, -3087871471161192663]);
//!
//! assert_eq!(generate_mosaic_id("nem", "xem").unwrap(), -3087871471161192663);
//! assert!(generate_namespace_path("a.b.c.d").is_err());
//! ```
//!
//! All functions are pure: no shared state, no I/O, safe to call from any thread.

pub mod error;
pub mod hash;
pub mod ids;
pub mod name;
pub mod path;

pub use error::{InvalidIdentifier, InvalidReason};
pub use hash::generate_id;
pub use ids::{MosaicId, NamespaceId};
pub use name::{
    is_valid_namespace_name, is_valid_part, is_valid_part_byte, split_mosaic_full_name,
    split_namespace_name, validate_part, MAX_DEPTH, MOSAIC_SEPARATOR, NAMESPACE_SEPARATOR,
};
pub use path::{generate_mosaic_id, generate_namespace_id, generate_namespace_path};

/// A single level identifier: the signed 64-bit output of one derivation step.
pub type LevelId = i64;

/// Parent context used when deriving a root level.
pub const ROOT_PARENT_ID: LevelId = 0;
