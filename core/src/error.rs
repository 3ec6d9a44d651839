//! The outcome type shared by every engine operation, and the error half of
//! it.

#![allow(clippy::module_name_repetitions)]

use std::error::Error as StdError;

use thiserror::Error;


/// The outcome of one direction of a [`PartialIso`], and of every operation
/// built on top of one.
///
/// The three cases encode the taxonomy the whole engine relies on:
///
/// * `Ok(Some(x))`: a match.
/// * `Ok(None)`: a structural mismatch, i.e. the value is outside the
///   covered subset, or the input has the wrong shape.  Always recoverable,
///   e.g. by an alternation trying its other branch.
/// * `Err(e)`: the underlying conversion itself failed.  This indicates a
///   programming or data-integrity problem rather than "wrong shape", so it
///   propagates instead of being absorbed as a mismatch.
///
/// [`PartialIso`]: ../iso/struct.PartialIso.html
pub type Partial<X> = Result<Option<X>, ConvertError>;


/// Why a conversion-backed isomorphism failed exceptionally.
///
/// Structural mismatches are *not* represented here; they are the `Ok(None)`
/// case of [`Partial`](type.Partial.html).  This type only carries failures
/// of an underlying transform, e.g. serializing a value or deserializing
/// malformed bytes.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Turning a structured value into its serialized token form failed.
    #[error("encode failed: {0}")]
    Encode(#[source] Box<dyn StdError + Send + Sync>),
    /// Turning a serialized token form back into a structured value failed.
    #[error("decode failed: {0}")]
    Decode(#[source] Box<dyn StdError + Send + Sync>),
}

impl ConvertError {
    /// Wrap an error from some encoding implementation.
    pub fn encode<E: Into<Box<dyn StdError + Send + Sync>>>(e: E) -> Self {
        ConvertError::Encode(e.into())
    }

    /// Wrap an error from some decoding implementation.
    pub fn decode<E: Into<Box<dyn StdError + Send + Sync>>>(e: E) -> Self {
        ConvertError::Decode(e.into())
    }
}


/// Equality by kind and rendered message.  The wrapped sources are arbitrary
/// boxed errors which cannot themselves be compared, but being able to
/// compare whole [`Partial`](type.Partial.html) outcomes keeps assertion
/// tables simple.
impl PartialEq for ConvertError {
    fn eq(&self, other: &Self) -> bool {
        use ConvertError::*;

        match (self, other) {
            (Encode(e1), Encode(e2)) | (Decode(e1), Decode(e2))
                => e1.to_string() == e2.to_string(),
            _
                => false,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(ConvertError::encode("no byte form").to_string(),
                   "encode failed: no byte form");
        assert_eq!(ConvertError::decode("bad byte form").to_string(),
                   "decode failed: bad byte form");
    }

    #[test]
    fn source_preserved() {
        use std::error::Error;

        let e = ConvertError::decode("bad byte form");
        assert_eq!(e.source().unwrap().to_string(), "bad byte form");
    }

    #[test]
    fn equality() {
        assert_eq!(ConvertError::encode("x"), ConvertError::encode("x"));
        assert_eq!(ConvertError::decode("x"), ConvertError::decode("x"));
        assert_ne!(ConvertError::encode("x"), ConvertError::encode("y"));
        assert_ne!(ConvertError::encode("x"), ConvertError::decode("x"));
    }
}
