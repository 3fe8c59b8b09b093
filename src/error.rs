//! Error types for the stringprep codec.

use std::fmt;

use thiserror::Error;

/// Names the prohibition table that matched a rejected character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProhibitedClass {
    NonAsciiSpace,
    AsciiControl,
    NonAsciiControl,
    PrivateUse,
    NonCharacter,
    Surrogate,
    InappropriateForPlainText,
    InappropriateForCanonRep,
    ChangeDisplayAndDeprecated,
    Tagging,
    Unassigned,
}

impl fmt::Display for ProhibitedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProhibitedClass::NonAsciiSpace => "non-ASCII space",
            ProhibitedClass::AsciiControl => "ASCII control character",
            ProhibitedClass::NonAsciiControl => "non-ASCII control character",
            ProhibitedClass::PrivateUse => "private use character",
            ProhibitedClass::NonCharacter => "non-character code point",
            ProhibitedClass::Surrogate => "surrogate code point",
            ProhibitedClass::InappropriateForPlainText => "inappropriate for plain text",
            ProhibitedClass::InappropriateForCanonRep => {
                "inappropriate for canonical representation"
            }
            ProhibitedClass::ChangeDisplayAndDeprecated => {
                "change display property or deprecated"
            }
            ProhibitedClass::Tagging => "tagging character",
            ProhibitedClass::Unassigned => "unassigned in Unicode 3.2",
        };
        f.write_str(name)
    }
}

/// Primary error type for string preparation operations.
///
/// Every failure is fatal for the current call; callers discard any partial
/// output already appended to their sink.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringPrepError {
    #[error("invalid surrogate pair at code unit {pos}")]
    InvalidSurrogatePair { pos: usize },

    #[error("prohibited character U+{scalar:04X}: {class}")]
    ProhibitedCharacter { scalar: u32, class: ProhibitedClass },

    #[error("bidirectional check failed: {0}")]
    BidiViolation(&'static str),
}

/// Convenience Result type alias for StringPrepError.
pub type Result<T> = std::result::Result<T, StringPrepError>;
