//! stringprep - RFC 3454 string preparation and UTF-8 encoding for SASL.
//!
//! The [`stringprep::encode`] family prepares a Unicode string under a
//! profile bitmask (character mappings, NFKC normalization, prohibition
//! tables, bidirectional checks) and serializes the result as UTF-8 into a
//! caller-supplied byte sink. [`saslprep`] layers the RFC 4013 profile on
//! top.

pub mod builder;
mod casefold;
pub mod error;
pub mod saslprep;
pub mod stringprep;
mod tables;

pub use builder::{ByteSink, ByteStringBuilder};
pub use error::{ProhibitedClass, Result, StringPrepError};
pub use stringprep::encode;
