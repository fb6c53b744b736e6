//! Error type for name validation.

use std::fmt;

use thiserror::Error;

/// The single failure mode of every derivation entry point: the input name
/// does not follow the naming grammar.
///
/// `reason` is diagnostic only. Callers should treat all reasons alike.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid identifier '{name}': {reason}")]
pub struct InvalidIdentifier {
    pub name: String,
    pub reason: InvalidReason,
}

impl InvalidIdentifier {
    pub(crate) fn new(name: &str, reason: InvalidReason) -> Self {
        Self {
            name: name.to_string(),
            reason,
        }
    }
}

/// Why a name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Zero-length name.
    Empty,
    /// More than [`MAX_DEPTH`](crate::MAX_DEPTH) dot-separated levels.
    TooManyLevels(usize),
    /// Leading, trailing or consecutive separator.
    EmptyPart,
    /// A character outside `[a-z0-9_-]`.
    InvalidCharacter(char),
    /// A full mosaic name without exactly one `:`.
    MalformedMosaicName,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "name is empty"),
            Self::TooManyLevels(n) => write!(
                f,
                "{} levels exceeds the maximum of {}",
                n,
                crate::MAX_DEPTH
            ),
            Self::EmptyPart => write!(f, "name contains an empty part"),
            Self::InvalidCharacter(c) => write!(f, "invalid character {:?}", c),
            Self::MalformedMosaicName => {
                write!(f, "expected '<namespace>:<mosaic>' with a single ':'")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_input_and_reason() {
        let err = InvalidIdentifier::new("a.b.c.d", InvalidReason::TooManyLevels(4));
        let msg = err.to_string();
        assert!(msg.contains("'a.b.c.d'"), "{}", msg);
        assert!(msg.contains("maximum of 3"), "{}", msg);
    }

    #[test]
    fn invalid_character_is_quoted() {
        let err = InvalidIdentifier::new("A", InvalidReason::InvalidCharacter('A'));
        assert_eq!(err.to_string(), "invalid identifier 'A': invalid character 'A'");
    }
}
