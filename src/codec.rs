//! The encoding abstraction shared by the UTF-8, UTF-16 and UTF-32 codecs.

use crate::{error::EncodingError, scalar::INVALID_SCALAR};
use std::fmt;

/// The outcome of decoding one scalar from a code-unit buffer.
///
/// `len` is always at least 1 for a non-empty buffer, even when the input is
/// malformed, so a decoder always makes progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Decoded {
    /// The decoded scalar, or `0xFFFF_FFFF` when `valid` is `false`.
    pub scalar: u32,
    /// Number of code units consumed.
    pub len: usize,
    /// Whether the consumed units form a well-formed sequence.
    pub valid: bool,
}

impl Decoded {
    #[inline]
    pub(crate) const fn ok(scalar: u32, len: usize) -> Self {
        Decoded {
            scalar,
            len,
            valid: true,
        }
    }

    #[inline]
    pub(crate) const fn invalid(len: usize) -> Self {
        Decoded {
            scalar: INVALID_SCALAR,
            len,
            valid: false,
        }
    }

    /// The result of decoding an empty buffer.
    pub(crate) const EMPTY: Decoded = Decoded::invalid(0);

    /// The scalar as a `char`, if the decode succeeded.
    pub fn to_char(self) -> Option<char> {
        if self.valid {
            char::from_u32(self.scalar)
        } else {
            None
        }
    }
}

/// A Unicode encoding form: how scalars map to sequences of fixed-width code units.
///
/// Implementors are zero-sized markers; all methods are associated functions.
pub trait Encoding: fmt::Debug + Copy + Default + Send + Sync + 'static {
    /// The code unit: `u8`, `u16` or `u32`.
    type Unit: Copy + Eq + fmt::Debug + Into<u32> + 'static;

    /// Human-readable name used in error messages.
    const NAME: &'static str;

    /// The longest sequence that encodes a single scalar.
    const MAX_UNITS: usize;

    /// Decodes the scalar at the start of `units`, validating it.
    ///
    /// Malformed input yields `valid: false` with a length of at least 1.
    /// An empty buffer yields a length of 0.
    fn decode(units: &[Self::Unit]) -> Decoded;

    /// Decodes the scalar at the start of `units` on the assumption that the
    /// input is well formed. The result for malformed input is unspecified but
    /// never reads past the end of `units`.
    fn decode_fast(units: &[Self::Unit]) -> Decoded;

    /// Decodes the scalar that ends at the end of `units`, validating it.
    ///
    /// Agrees with [`Encoding::decode`]: walking a buffer backwards produces the
    /// same scalars and lengths as walking it forwards, in reverse order.
    fn decode_prev(units: &[Self::Unit]) -> Decoded;

    /// Backward counterpart of [`Encoding::decode_fast`].
    fn decode_prev_fast(units: &[Self::Unit]) -> Decoded;

    /// Number of units needed to encode `c`.
    fn encoded_len(c: char) -> usize;

    /// Writes `c` into the front of `buf`, returning the number of units written.
    ///
    /// # Panics
    ///
    /// Panics if `buf` is shorter than [`Encoding::encoded_len`].
    fn encode(c: char, buf: &mut [Self::Unit]) -> usize;

    /// Appends the encoding of `c` to `out`.
    fn push_encoded(c: char, out: &mut Vec<Self::Unit>) {
        let start = out.len();
        out.resize(start + Self::encoded_len(c), Self::unit_from_u32(0));
        Self::encode(c, &mut out[start..]);
    }

    /// Narrows a raw value to a code unit, truncating high bits.
    fn unit_from_u32(value: u32) -> Self::Unit;

    /// How many units of a malformed sequence at the start of `units` to
    /// report in an error: the units the lead announced, as far as present.
    fn error_span(units: &[Self::Unit]) -> usize {
        units.len().min(1)
    }

    /// Builds the error for the malformed sequence starting at `units[offset]`.
    fn error_at(units: &[Self::Unit], offset: usize) -> EncodingError {
        let rest = &units[offset.min(units.len())..];
        EncodingError::from_units(Self::NAME, offset, &rest[..Self::error_span(rest)])
    }
}
