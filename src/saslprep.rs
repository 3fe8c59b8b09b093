//! RFC 4013 SASLprep profile.
//!
//! This is the stringprep profile used for preparing user names and
//! passwords in SASL authentication mechanisms, expressed as a fixed flag
//! combination over the core encoder.

use crate::builder::ByteStringBuilder;
use crate::error::Result;
use crate::stringprep::{self, PROFILE_SASL_QUERY, PROFILE_SASL_STORED};

/// Prepare a string using the SASLprep profile of stringprep (RFC 4013).
///
/// # Arguments
/// * `data` - The string to SASLprep
/// * `prohibit_unassigned_code_points` - RFC 3454 and RFCs for various SASL
///   mechanisms distinguish between `queries` (unassigned code points
///   allowed) and `stored strings` (unassigned code points prohibited).
///   When `true`, unassigned code points from Table A.1 are prohibited.
///
/// # Returns
/// The SASLprep'ed version of `data`, or an error if the string contains
/// prohibited characters or fails bidirectional checks.
pub fn saslprep(data: &str, prohibit_unassigned_code_points: bool) -> Result<String> {
    if data.is_empty() {
        return Ok(String::new());
    }

    let profile = if prohibit_unassigned_code_points {
        PROFILE_SASL_STORED
    } else {
        PROFILE_SASL_QUERY
    };

    let mut out = ByteStringBuilder::new();
    stringprep::encode(data, &mut out, profile)?;

    // str input cannot produce surrogate scalars, so the emitted bytes are
    // always valid UTF-8.
    Ok(String::from_utf8(out.into_bytes()).expect("encoder emits valid UTF-8 for str input"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_short_circuits() {
        assert_eq!(saslprep("", true).unwrap(), "");
        assert_eq!(saslprep("", false).unwrap(), "");
    }

    #[test]
    fn folds_and_normalizes() {
        // The profile's KC normalization includes the B.2 case fold.
        assert_eq!(saslprep("I\u{00AD}X", true).unwrap(), "ix");
        assert_eq!(saslprep("stra\u{00DF}e", true).unwrap(), "strasse");
    }
}
