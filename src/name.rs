//! Naming grammar — which dotted names may be turned into IDs.
//!
//! ```text
//! name      = part *2( "." part )        ; 1 to 3 levels
//! full-name = name ":" part              ; mosaic, e.g. "nem:xem"
//! part      = 1*( %x61-7A / DIGIT / "_" / "-" )
//! ```
//!
//! The character rule is the same at every position of a part. Uppercase
//! letters are always rejected; nothing is case-folded.

use crate::error::{InvalidIdentifier, InvalidReason};

/// Maximum number of levels in a namespace name (root, child, grandchild).
pub const MAX_DEPTH: usize = 3;

/// Separator between namespace levels.
pub const NAMESPACE_SEPARATOR: char = '.';

/// Separator between the namespace and the mosaic in a full mosaic name.
pub const MOSAIC_SEPARATOR: char = ':';

/// Is `byte` allowed inside a part?
#[inline]
pub const fn is_valid_part_byte(byte: u8) -> bool {
    matches!(byte, b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-')
}

/// Is `part` a non-empty run of `[a-z0-9_-]`?
pub const fn is_valid_part(part: &str) -> bool {
    let bytes = part.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    let mut i = 0;
    while i < bytes.len() {
        if !is_valid_part_byte(bytes[i]) {
            return false;
        }
        i += 1;
    }
    true
}

/// Validate a single part, reporting the first offending character.
///
/// `name` is the full input, used only for the error message.
fn check_part<'a>(part: &'a str, name: &str) -> Result<&'a str, InvalidIdentifier> {
    if part.is_empty() {
        return Err(InvalidIdentifier::new(name, InvalidReason::EmptyPart));
    }
    if let Some(c) = part
        .chars()
        .find(|&c| !c.is_ascii() || !is_valid_part_byte(c as u8))
    {
        return Err(InvalidIdentifier::new(name, InvalidReason::InvalidCharacter(c)));
    }
    Ok(part)
}

/// Validate a standalone part such as a mosaic name.
///
/// An empty part is reported as [`InvalidReason::Empty`]; separators are
/// ordinary forbidden characters here, so `"a.b"` is rejected.
pub fn validate_part(part: &str) -> Result<&str, InvalidIdentifier> {
    if part.is_empty() {
        return Err(InvalidIdentifier::new(part, InvalidReason::Empty));
    }
    check_part(part, part)
}

/// Split a dotted namespace name into its validated parts, root first.
///
/// # Errors
///
/// - the name is empty
/// - the name has more than [`MAX_DEPTH`] parts
/// - any part is empty (leading, trailing or doubled `.`)
/// - any part contains a character outside `[a-z0-9_-]`
pub fn split_namespace_name(name: &str) -> Result<Vec<&str>, InvalidIdentifier> {
    if name.is_empty() {
        return Err(InvalidIdentifier::new(name, InvalidReason::Empty));
    }

    let parts: Vec<&str> = name.split(NAMESPACE_SEPARATOR).collect();
    if parts.len() > MAX_DEPTH {
        return Err(InvalidIdentifier::new(
            name,
            InvalidReason::TooManyLevels(parts.len()),
        ));
    }

    for part in &parts {
        check_part(part, name)?;
    }
    Ok(parts)
}

/// Whether `name` would be accepted by [`split_namespace_name`].
pub fn is_valid_namespace_name(name: &str) -> bool {
    split_namespace_name(name).is_ok()
}

/// Split a full mosaic name `"<namespace>:<mosaic>"` into its two halves.
///
/// Only the shape is checked here; the halves are validated when the ID is
/// derived.
pub fn split_mosaic_full_name(full_name: &str) -> Result<(&str, &str), InvalidIdentifier> {
    let mut halves = full_name.split(MOSAIC_SEPARATOR);
    match (halves.next(), halves.next(), halves.next()) {
        (Some(namespace), Some(mosaic), None) => Ok((namespace, mosaic)),
        _ => Err(InvalidIdentifier::new(
            full_name,
            InvalidReason::MalformedMosaicName,
        )),
    }
}
