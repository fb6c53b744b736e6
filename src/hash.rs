//! Level-ID derivation — one SHA3-256 step per name part.
//!
//! The byte layout is fixed by the network: the parent ID as an 8-byte
//! little-endian two's-complement integer, followed by the raw bytes of the
//! part. The first 8 bytes of the digest, read back the same way, are the ID.

use sha3::{Digest, Sha3_256};
use zerocopy::byteorder::little_endian::I64;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::LevelId;

/// SHA3-256 digest viewed as its leading little-endian `i64`.
#[derive(FromBytes, KnownLayout, Immutable, Unaligned)]
#[repr(C)]
struct DigestPrefix {
    id: I64,
    _rest: [u8; 24],
}

/// Derive the ID of `part` nested under `parent_id`.
///
/// Use [`ROOT_PARENT_ID`](crate::ROOT_PARENT_ID) (`0`) for a root level.
/// `part` is hashed as-is; validation is the caller's job (see
/// [`generate_namespace_path`](crate::generate_namespace_path)).
pub fn generate_id(part: &str, parent_id: LevelId) -> LevelId {
    let digest: [u8; 32] = Sha3_256::new()
        .chain_update(I64::new(parent_id).as_bytes())
        .chain_update(part.as_bytes())
        .finalize()
        .into();

    let prefix: DigestPrefix = zerocopy::transmute!(digest);
    prefix.id.get()
}
