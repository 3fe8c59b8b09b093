//! Tests for the RFC 4013 SASLprep profile.

use stringprep::saslprep::saslprep;
use stringprep::StringPrepError;

/// Lower-case ASCII strings pass through unchanged.
#[test]
fn test_ascii_passthrough() {
    assert_eq!(saslprep("hello", true).unwrap(), "hello");
    assert_eq!(saslprep("password123", true).unwrap(), "password123");
    assert_eq!(saslprep("user name", true).unwrap(), "user name");
}

/// The profile's KC normalization includes the Table B.2 case fold, so
/// upper-case input comes out folded.
#[test]
fn test_case_folding() {
    assert_eq!(saslprep("Hello", true).unwrap(), "hello");
    assert_eq!(saslprep("STRA\u{1E9B}E", true).unwrap(), "stra\u{1E61}e");
}

/// RFC 4013 section 2.1: Non-ASCII spaces mapped to ASCII space (U+0020).
#[test]
fn test_non_ascii_space_mapping() {
    // NO-BREAK SPACE (U+00A0) -> SPACE
    assert_eq!(saslprep("\u{00A0}", true).unwrap(), " ");
    // EN SPACE (U+2002) -> SPACE
    assert_eq!(saslprep("\u{2002}", true).unwrap(), " ");
    // IDEOGRAPHIC SPACE (U+3000) -> SPACE
    assert_eq!(saslprep("\u{3000}", true).unwrap(), " ");
    // Mixed with text
    assert_eq!(saslprep("a\u{00A0}b", true).unwrap(), "a b");
}

/// RFC 4013 section 2.1: Characters commonly mapped to nothing (table B.1).
#[test]
fn test_mapped_to_nothing() {
    // SOFT HYPHEN (U+00AD) should be removed
    assert_eq!(saslprep("pass\u{00AD}word", true).unwrap(), "password");
    // ZERO WIDTH SPACE (U+200B) should be removed
    assert_eq!(saslprep("pass\u{200B}word", true).unwrap(), "password");
}

/// RFC 4013 section 2.2: NFKC normalization.
#[test]
fn test_normalization() {
    // a + combining diaeresis composes
    assert_eq!(saslprep("\u{0061}\u{0308}", true).unwrap(), "\u{00E4}");
    // half-width katakana to full-width
    assert_eq!(saslprep("\u{FF8A}\u{FF9F}", true).unwrap(), "\u{30D1}");
}

/// RFC 4013 section 2.3: Prohibited characters cause an error.
#[test]
fn test_prohibited_characters() {
    // Control characters (C.2.1)
    assert!(saslprep("\u{0000}", true).is_err());
    assert!(saslprep("\u{0007}", true).is_err());
    assert!(saslprep("test\u{007F}", true).is_err());

    // Private use characters (C.3)
    assert!(saslprep("\u{E000}", true).is_err());

    // Non-character code points (C.4)
    assert!(saslprep("\u{FDD0}", true).is_err());
}

/// RFC 3454 section 6: Bidirectional text handling.
#[test]
fn test_bidirectional_check() {
    // Pure RTL text passes
    assert!(saslprep(
        "\u{0627}\u{0644}\u{0639}\u{0631}\u{0628}\u{064A}\u{0629}",
        true
    )
    .is_ok());

    // RTL with ASCII at the end fails (last char is not RandALCat)
    assert!(matches!(
        saslprep("\u{0627}abc", true).unwrap_err(),
        StringPrepError::BidiViolation(_)
    ));

    // Pure LTR text passes
    assert!(saslprep("hello", true).is_ok());
}

/// RFC 3454 Table A.1: unassigned code points are only rejected for stored
/// strings, not for queries.
#[test]
fn test_unassigned_code_points() {
    // U+0221 is unassigned in Unicode 3.2
    assert!(saslprep("\u{0221}", true).is_err());
    assert!(saslprep("\u{0221}", false).is_ok());

    assert!(saslprep("\u{038B}", true).is_err());
    assert!(saslprep("\u{038B}", false).is_ok());

    // Mixed: assigned characters work in both modes
    assert!(saslprep("hello\u{0221}world", true).is_err());
    assert_eq!(
        saslprep("hello\u{0221}world", false).unwrap(),
        "hello\u{0221}world"
    );
}

#[test]
fn test_empty_string() {
    assert_eq!(saslprep("", true).unwrap(), "");
}
