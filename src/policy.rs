//! What happens when an iterator or writer meets malformed input.

use crate::{error::EncodingError, scalar::REPLACEMENT_CHARACTER};
use std::{convert::Infallible, fmt};

/// Decides the fate of a malformed sequence.
///
/// The policy is a type parameter, so the choice is made at compile time and
/// a policy that cannot fail exposes [`Infallible`] as its error type.
pub trait ErrorPolicy: fmt::Debug + Copy + Default + Send + Sync + 'static {
    /// The error surfaced to the caller.
    type Error: fmt::Debug;

    /// Whether input is validated at all. When `false`, decoders take the
    /// unchecked fast path and trust the input to be well formed.
    const VALIDATES: bool;

    /// Whether [`ErrorPolicy::on_invalid`] can return an error, which ends
    /// iteration early.
    const FALLIBLE: bool;

    /// Called with a description of the malformed sequence; returns the
    /// scalar to substitute, or the error to report.
    fn on_invalid(error: EncodingError) -> Result<u32, Self::Error>;
}

/// Skips validation entirely. Input is assumed to be well formed; anything
/// the decoder still recognizes as malformed becomes U+FFFD.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Ignore;

/// Validates input and substitutes U+FFFD for every malformed sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Replace;

/// Validates input and reports the first malformed sequence as an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Strict;

impl ErrorPolicy for Ignore {
    type Error = Infallible;

    const VALIDATES: bool = false;

    const FALLIBLE: bool = false;

    #[inline]
    fn on_invalid(_: EncodingError) -> Result<u32, Infallible> {
        Ok(REPLACEMENT_CHARACTER)
    }
}

impl ErrorPolicy for Replace {
    type Error = Infallible;

    const VALIDATES: bool = true;

    const FALLIBLE: bool = false;

    #[inline]
    fn on_invalid(error: EncodingError) -> Result<u32, Infallible> {
        log::trace!("substituting U+FFFD: {}", error);
        Ok(REPLACEMENT_CHARACTER)
    }
}

impl ErrorPolicy for Strict {
    type Error = EncodingError;

    const VALIDATES: bool = true;

    const FALLIBLE: bool = true;

    #[inline]
    fn on_invalid(error: EncodingError) -> Result<u32, EncodingError> {
        Err(error)
    }
}
