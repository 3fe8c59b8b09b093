//! Profile-driven Unicode string preparation (RFC 3454).
//!
//! The encoder runs a fixed pipeline: decode code units to scalar values,
//! apply the profile's character mappings, optionally normalize to NFKC,
//! check prohibitions and bidirectional constraints, and serialize the
//! result as UTF-8 into a caller-supplied [`ByteSink`]. Profiles are plain
//! bitmasks; SASL mechanisms OR together the flags they need (RFC 4013
//! SASLprep, RFC 5802 SCRAM username escaping).
//!
//! Any violation aborts the call with a fatal error and the caller discards
//! whatever was already appended to the sink.

use unicode_normalization::UnicodeNormalization;

use crate::builder::ByteSink;
use crate::casefold;
use crate::error::{ProhibitedClass, Result, StringPrepError};
use crate::tables;

/// Delete characters from RFC 3454 Table B.1.
pub const MAP_TO_NOTHING: u64 = 1 << 0;
/// Map non-ASCII spaces (Table C.1.2) to U+0020.
pub const MAP_TO_SPACE: u64 = 1 << 1;
/// Replace `,` with `=2C` and `=` with `=3D` (RFC 5802 section 5.1).
pub const MAP_SCRAM_LOGIN_CHARS: u64 = 1 << 2;
/// Apply Table B.2 case folding followed by NFKC normalization.
pub const NORMALIZE_KC: u64 = 1 << 3;
/// Reject Table C.1.2.
pub const FORBID_NON_ASCII_SPACES: u64 = 1 << 4;
/// Reject Table C.2.1.
pub const FORBID_ASCII_CONTROL: u64 = 1 << 5;
/// Reject Table C.2.2.
pub const FORBID_NON_ASCII_CONTROL: u64 = 1 << 6;
/// Reject Table C.3.
pub const FORBID_PRIVATE_USE: u64 = 1 << 7;
/// Reject Table C.4.
pub const FORBID_NON_CHARACTER: u64 = 1 << 8;
/// Reject Table C.5 (surrogate scalars that arrived pre-decoded).
pub const FORBID_SURROGATE: u64 = 1 << 9;
/// Reject Table C.6.
pub const FORBID_INAPPROPRIATE_FOR_PLAIN_TEXT: u64 = 1 << 10;
/// Reject Table C.7.
pub const FORBID_INAPPROPRIATE_FOR_CANON_REP: u64 = 1 << 11;
/// Reject Table C.8.
pub const FORBID_CHANGE_DISPLAY_AND_DEPRECATED: u64 = 1 << 12;
/// Reject Table C.9.
pub const FORBID_TAGGING: u64 = 1 << 13;
/// Reject code points unassigned in Unicode 3.2 (Table A.1).
pub const FORBID_UNASSIGNED: u64 = 1 << 14;

/// SASLprep (RFC 4013) for queries: unassigned code points are allowed.
pub const PROFILE_SASL_QUERY: u64 = MAP_TO_NOTHING
    | MAP_TO_SPACE
    | NORMALIZE_KC
    | FORBID_NON_ASCII_SPACES
    | FORBID_ASCII_CONTROL
    | FORBID_NON_ASCII_CONTROL
    | FORBID_PRIVATE_USE
    | FORBID_NON_CHARACTER
    | FORBID_SURROGATE
    | FORBID_INAPPROPRIATE_FOR_PLAIN_TEXT
    | FORBID_INAPPROPRIATE_FOR_CANON_REP
    | FORBID_CHANGE_DISPLAY_AND_DEPRECATED
    | FORBID_TAGGING;

/// SASLprep (RFC 4013) for stored strings: unassigned code points rejected.
pub const PROFILE_SASL_STORED: u64 = PROFILE_SASL_QUERY | FORBID_UNASSIGNED;

/// Every enabled forbid flag with its class table. Checked in order; the
/// first hit wins.
const PROHIBITIONS: &[(u64, &[(u32, u32)], ProhibitedClass)] = &[
    (FORBID_NON_ASCII_SPACES, tables::C_1_2, ProhibitedClass::NonAsciiSpace),
    (FORBID_ASCII_CONTROL, tables::C_2_1, ProhibitedClass::AsciiControl),
    (FORBID_NON_ASCII_CONTROL, tables::C_2_2, ProhibitedClass::NonAsciiControl),
    (FORBID_PRIVATE_USE, tables::C_3, ProhibitedClass::PrivateUse),
    (FORBID_NON_CHARACTER, tables::C_4, ProhibitedClass::NonCharacter),
    (FORBID_SURROGATE, tables::C_5, ProhibitedClass::Surrogate),
    (
        FORBID_INAPPROPRIATE_FOR_PLAIN_TEXT,
        tables::C_6,
        ProhibitedClass::InappropriateForPlainText,
    ),
    (
        FORBID_INAPPROPRIATE_FOR_CANON_REP,
        tables::C_7,
        ProhibitedClass::InappropriateForCanonRep,
    ),
    (
        FORBID_CHANGE_DISPLAY_AND_DEPRECATED,
        tables::C_8,
        ProhibitedClass::ChangeDisplayAndDeprecated,
    ),
    (FORBID_TAGGING, tables::C_9, ProhibitedClass::Tagging),
    (FORBID_UNASSIGNED, tables::A_1, ProhibitedClass::Unassigned),
];

/// Walks a slice of 16-bit code units, combining surrogate pairs.
///
/// A high surrogate must be directly followed by a low surrogate; anything
/// else (end of input, a BMP unit, another high surrogate, or a low
/// surrogate with no pending high) is an [`StringPrepError::InvalidSurrogatePair`].
struct Utf16Decoder<'a> {
    units: &'a [u16],
    pos: usize,
}

impl<'a> Utf16Decoder<'a> {
    fn new(units: &'a [u16]) -> Self {
        Self { units, pos: 0 }
    }
}

impl Iterator for Utf16Decoder<'_> {
    type Item = Result<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        let &unit = self.units.get(self.pos)?;
        let pos = self.pos;
        self.pos += 1;
        if (0xD800..=0xDBFF).contains(&unit) {
            match self.units.get(self.pos) {
                Some(&low) if (0xDC00..=0xDFFF).contains(&low) => {
                    self.pos += 1;
                    let scalar =
                        0x10000 + ((unit as u32 - 0xD800) << 10) + (low as u32 - 0xDC00);
                    Some(Ok(scalar))
                }
                _ => Some(Err(StringPrepError::InvalidSurrogatePair { pos })),
            }
        } else if (0xDC00..=0xDFFF).contains(&unit) {
            Some(Err(StringPrepError::InvalidSurrogatePair { pos }))
        } else {
            Some(Ok(unit as u32))
        }
    }
}

/// Applies the profile's mapping stage to one scalar, appending zero or
/// more replacement scalars. The B.2 fold takes precedence and is exclusive
/// with the remaining mappings; B.1, C.1.2 and the SCRAM characters are
/// disjoint sets, so at most one of the other arms can fire.
fn map_scalar(cp: u32, profile: u64, out: &mut Vec<u32>) {
    if profile & NORMALIZE_KC != 0 {
        if let Some(fold) = casefold::fold_lookup(cp) {
            out.extend(fold.chars().map(u32::from));
            return;
        }
    }
    if profile & MAP_TO_NOTHING != 0 && tables::in_table(cp, tables::B_1) {
        return;
    }
    if profile & MAP_TO_SPACE != 0 && tables::in_table(cp, tables::C_1_2) {
        out.push(0x20);
        return;
    }
    if profile & MAP_SCRAM_LOGIN_CHARS != 0 {
        if cp == u32::from(',') {
            out.extend([0x3D, 0x32, 0x43]); // "=2C"
            return;
        }
        if cp == u32::from('=') {
            out.extend([0x3D, 0x33, 0x44]); // "=3D"
            return;
        }
    }
    out.push(cp);
}

/// NFKC over a scalar sequence.
///
/// Surrogate scalars cannot be represented as `char`, so they partition the
/// sequence: the runs between them are normalized independently and the
/// surrogates pass through untouched for the prohibition checker to see.
fn normalize_kc(scalars: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(scalars.len());
    let mut run = String::new();
    for &cp in scalars {
        match char::from_u32(cp) {
            Some(c) => run.push(c),
            None => {
                out.extend(run.nfkc().map(u32::from));
                run.clear();
                out.push(cp);
            }
        }
    }
    out.extend(run.nfkc().map(u32::from));
    out
}

fn check_prohibited(cp: u32, profile: u64) -> Result<()> {
    for &(flag, table, class) in PROHIBITIONS {
        if profile & flag != 0 && tables::in_table(cp, table) {
            return Err(StringPrepError::ProhibitedCharacter { scalar: cp, class });
        }
    }
    Ok(())
}

/// Maps, normalizes, checks and emits an already-decoded scalar sequence.
///
/// Prohibition checking and the bidirectional scan share one forward pass
/// with the UTF-8 emitter, so a failing call can leave partial output in
/// the sink. The bidirectional verdict (RFC 3454 section 6, requirements 2
/// and 3) is delivered after the pass.
fn prepare<S: ByteSink>(input: impl Iterator<Item = u32>, out: &mut S, profile: u64) -> Result<()> {
    let mut mapped = Vec::with_capacity(input.size_hint().0);
    for cp in input {
        map_scalar(cp, profile, &mut mapped);
    }
    let checked = if profile & NORMALIZE_KC != 0 {
        normalize_kc(&mapped)
    } else {
        mapped
    };

    let mut has_randal = false;
    let mut has_l = false;
    let mut first_is_randal = false;
    let mut last_is_randal = false;
    let mut first = true;
    for &cp in &checked {
        check_prohibited(cp, profile)?;
        let randal = tables::in_table(cp, tables::D_1);
        if randal {
            has_randal = true;
        } else if tables::in_table(cp, tables::D_2) {
            has_l = true;
        }
        if first {
            first_is_randal = randal;
            first = false;
        }
        last_is_randal = randal;
        out.append_utf8_raw(cp);
    }

    if has_randal {
        if has_l {
            return Err(StringPrepError::BidiViolation(
                "RandALCat text must not contain LCat characters",
            ));
        }
        if !first_is_randal || !last_is_randal {
            return Err(StringPrepError::BidiViolation(
                "RandALCat text must start and end with RandALCat characters",
            ));
        }
    }
    Ok(())
}

/// Prepares `input` under `profile` and appends the UTF-8 result to `out`.
///
/// A `&str` is already a sequence of scalar values, so no surrogate
/// decoding takes place. On failure the sink may hold partial output, which
/// the caller must discard.
pub fn encode(input: &str, out: &mut impl ByteSink, profile: u64) -> Result<()> {
    prepare(input.chars().map(u32::from), out, profile)
}

/// Prepares a sequence of 16-bit code units, reconstructing surrogate
/// pairs. Lone or mis-ordered surrogates fail with
/// [`StringPrepError::InvalidSurrogatePair`] before any other check runs.
pub fn encode_utf16(units: &[u16], out: &mut impl ByteSink, profile: u64) -> Result<()> {
    let scalars: Vec<u32> = Utf16Decoder::new(units).collect::<Result<_>>()?;
    prepare(scalars.into_iter(), out, profile)
}

/// Prepares already-decoded scalar values.
///
/// This is the entry point for callers that decoded their input themselves;
/// unlike [`encode`], the sequence may contain surrogate scalars, which
/// survive to the prohibition stage (and are rejected there when
/// [`FORBID_SURROGATE`] is set). Values must not exceed 0x10FFFF.
pub fn encode_scalars(scalars: &[u32], out: &mut impl ByteSink, profile: u64) -> Result<()> {
    prepare(scalars.iter().copied(), out, profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ByteStringBuilder;
    use crate::casefold::B_2;

    fn prep(input: &str, profile: u64) -> Result<Vec<u8>> {
        let mut out = ByteStringBuilder::new();
        encode(input, &mut out, profile)?;
        Ok(out.into_bytes())
    }

    #[test]
    fn utf16_decoder_combines_pairs() {
        let units: Vec<u16> = "a\u{1F0A1}b".encode_utf16().collect();
        let scalars: Vec<u32> = Utf16Decoder::new(&units)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(scalars, vec![0x61, 0x1F0A1, 0x62]);
    }

    #[test]
    fn utf16_decoder_rejects_lone_surrogates() {
        for units in [
            &[0xD83Cu16][..],
            &[0xDC00],
            &[0xD83C, 0xD83C],
            &[0xDCA1, 0xD83C],
            &[0x61, 0xD800],
        ] {
            let res: Result<Vec<u32>> = Utf16Decoder::new(units).collect();
            assert!(
                matches!(res, Err(StringPrepError::InvalidSurrogatePair { .. })),
                "units {units:X?}"
            );
        }
    }

    #[test]
    fn map_stage_precedence() {
        // With NORMALIZE_KC the B.2 fold wins even for characters that are
        // also in B.1 or C.1.2 (there are none, but the fold must not fall
        // through to the identity arm).
        let mut out = Vec::new();
        map_scalar(0x0041, NORMALIZE_KC | MAP_TO_NOTHING, &mut out);
        assert_eq!(out, vec![0x61]);

        out.clear();
        map_scalar(0x00AD, MAP_TO_NOTHING, &mut out);
        assert!(out.is_empty());

        out.clear();
        map_scalar(0x3000, MAP_TO_SPACE, &mut out);
        assert_eq!(out, vec![0x20]);

        out.clear();
        map_scalar(u32::from(','), MAP_SCRAM_LOGIN_CHARS, &mut out);
        assert_eq!(out, vec![0x3D, 0x32, 0x43]);
    }

    /// Every B.2 entry, pushed through the whole pipeline: folding a key and
    /// normalizing must equal NFKC of the recorded replacement.
    #[test]
    fn full_casefold_table_roundtrip() {
        use unicode_normalization::UnicodeNormalization;

        for &(key, replacement) in B_2 {
            let c = char::from_u32(key).expect("B.2 keys are scalar values");
            let got = prep(&c.to_string(), NORMALIZE_KC).unwrap();
            let expected: String = replacement.nfkc().collect();
            assert_eq!(
                got,
                expected.as_bytes(),
                "fold of U+{key:04X} diverged"
            );
        }
    }

    #[test]
    fn normalization_composes_across_fold_boundaries() {
        // A + combining diaeresis folds to a + diaeresis and then composes.
        assert_eq!(prep("\u{0041}\u{0308}", NORMALIZE_KC).unwrap(), "\u{00E4}".as_bytes());
        // Half-width katakana to full-width.
        assert_eq!(
            prep("\u{FF8A}\u{FF9F}", NORMALIZE_KC).unwrap(),
            "\u{30D1}".as_bytes()
        );
    }

    #[test]
    fn surrogate_scalars_partition_normalization() {
        let mut out = ByteStringBuilder::new();
        encode_scalars(&[0x41, 0xD800, 0x41], &mut out, NORMALIZE_KC).unwrap();
        assert_eq!(out.as_slice(), &[0x61, 0xED, 0xA0, 0x80, 0x61]);
    }

    #[test]
    fn prohibition_checks_run_after_normalization() {
        // U+2000 EN QUAD normalizes to U+0020, so with NFKC it is no longer
        // a non-ASCII space by the time the checker runs.
        assert!(prep("\u{2000}", FORBID_NON_ASCII_SPACES).is_err());
        assert_eq!(
            prep("\u{2000}", NORMALIZE_KC | FORBID_NON_ASCII_SPACES).unwrap(),
            b" "
        );
    }

    #[test]
    fn prohibited_error_carries_scalar_and_class() {
        let err = prep("\u{E000}", FORBID_PRIVATE_USE).unwrap_err();
        assert_eq!(
            err,
            StringPrepError::ProhibitedCharacter {
                scalar: 0xE000,
                class: ProhibitedClass::PrivateUse,
            }
        );
    }

    #[test]
    fn sasl_profiles_differ_only_in_unassigned() {
        assert_eq!(PROFILE_SASL_STORED, PROFILE_SASL_QUERY | FORBID_UNASSIGNED);
        assert!(prep("\u{0221}", PROFILE_SASL_QUERY).is_ok());
        assert!(prep("\u{0221}", PROFILE_SASL_STORED).is_err());
    }

    #[test]
    fn flags_are_bit_disjoint() {
        let flags = [
            MAP_TO_NOTHING,
            MAP_TO_SPACE,
            MAP_SCRAM_LOGIN_CHARS,
            NORMALIZE_KC,
            FORBID_NON_ASCII_SPACES,
            FORBID_ASCII_CONTROL,
            FORBID_NON_ASCII_CONTROL,
            FORBID_PRIVATE_USE,
            FORBID_NON_CHARACTER,
            FORBID_SURROGATE,
            FORBID_INAPPROPRIATE_FOR_PLAIN_TEXT,
            FORBID_INAPPROPRIATE_FOR_CANON_REP,
            FORBID_CHANGE_DISPLAY_AND_DEPRECATED,
            FORBID_TAGGING,
            FORBID_UNASSIGNED,
        ];
        let mut seen = 0u64;
        for flag in flags {
            assert_eq!(flag.count_ones(), 1);
            assert_eq!(seen & flag, 0);
            seen |= flag;
        }
    }
}
