use crate::{
    codec::{Decoded, Encoding},
    error::EncodingError,
    policy::{ErrorPolicy, Replace, Strict},
    scalar::is_scalar_value,
    utf16::Utf16,
    utf8::Utf8,
};
use std::{convert::Infallible, fmt, marker::PhantomData};

/// A bidirectional cursor over the scalar values of an encoded buffer.
///
/// The cursor always rests on a unit boundary with the scalar at that boundary
/// already decoded. It doubles as an [`Iterator`] and a
/// [`DoubleEndedIterator`]; items are `Result<u32, P::Error>`, which for the
/// infallible policies can be unwrapped for free with [`CodepointIter::scalars`].
///
/// Under [`Strict`] an error halts the iterator at the failing position. Call
/// [`CodepointIter::advance`] to skip the malformed units and resume. Since
/// the cursor can be moved again after `next` returns `None`, the iterator is
/// not fused.
pub struct CodepointIter<'a, E: Encoding, P: ErrorPolicy = Replace> {
    units: &'a [E::Unit],
    offset: usize,
    back: usize,
    decoded: Decoded,
    halted: bool,
    marker: PhantomData<(E, P)>,
}

impl<'a, E: Encoding, P: ErrorPolicy> CodepointIter<'a, E, P> {
    /// A cursor at the start of `units`.
    pub fn new(units: &'a [E::Unit]) -> Self {
        Self::at(units, 0)
    }

    /// A cursor at `offset`, which is clamped to the length of `units` and is
    /// assumed to be a unit boundary.
    pub fn at(units: &'a [E::Unit], offset: usize) -> Self {
        let mut iter = CodepointIter {
            units,
            offset: offset.min(units.len()),
            back: units.len(),
            decoded: Decoded::EMPTY,
            halted: false,
            marker: PhantomData,
        };
        iter.decode_front();
        iter
    }

    fn decode_front(&mut self) {
        self.decoded = decode_with::<E, P>(&self.units[self.offset..self.back.max(self.offset)]);
    }

    /// The scalar under the cursor, or `None` at the end of the buffer.
    ///
    /// A malformed sequence is handed to the error policy.
    pub fn get(&self) -> Option<Result<u32, P::Error>> {
        if self.is_at_end() {
            return None;
        }
        if self.decoded.valid {
            Some(Ok(self.decoded.scalar))
        } else {
            Some(P::on_invalid(self.error_at(self.offset)))
        }
    }

    /// Steps past the scalar under the cursor. Does nothing at the end.
    pub fn advance(&mut self) {
        self.halted = false;
        if self.is_at_end() {
            return;
        }
        self.offset += self.decoded.len;
        self.decode_front();
    }

    /// Steps back to the previous scalar. Returns `false` at the start of the buffer.
    pub fn retreat(&mut self) -> bool {
        self.halted = false;
        if self.offset == 0 {
            return false;
        }
        let prev = decode_prev_with::<E, P>(&self.units[..self.offset]);
        self.offset -= prev.len;
        self.back = self.back.max(self.offset);
        self.decode_front();
        true
    }

    /// Moves the cursor back to the start of the buffer.
    pub fn seek_to_start(&mut self) {
        self.halted = false;
        self.offset = 0;
        self.back = self.units.len();
        self.decode_front();
    }

    /// Position of the cursor, in code units.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of units occupied by the scalar under the cursor; 0 at the end.
    pub fn unit_len(&self) -> usize {
        self.decoded.len
    }

    /// Whether the units under the cursor are well formed.
    pub fn is_valid(&self) -> bool {
        self.decoded.valid
    }

    /// Returns `true` once the cursor has passed every scalar.
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.back
    }

    /// The undecoded units between the front and back of the iterator.
    pub fn as_units(&self) -> &'a [E::Unit] {
        &self.units[self.offset..self.back.max(self.offset)]
    }

    fn error_at(&self, offset: usize) -> EncodingError {
        E::error_at(&self.units[..self.back.max(offset)], offset)
    }
}

impl<'a, E: Encoding, P: ErrorPolicy<Error = Infallible>> CodepointIter<'a, E, P> {
    /// Adapts an infallible iterator to yield plain scalars.
    pub fn scalars(self) -> Scalars<'a, E, P> {
        Scalars { inner: self }
    }
}

#[inline]
fn decode_with<E: Encoding, P: ErrorPolicy>(units: &[E::Unit]) -> Decoded {
    if P::VALIDATES {
        E::decode(units)
    } else {
        unchecked(E::decode_fast(units))
    }
}

#[inline]
fn decode_prev_with<E: Encoding, P: ErrorPolicy>(units: &[E::Unit]) -> Decoded {
    if P::VALIDATES {
        E::decode_prev(units)
    } else {
        unchecked(E::decode_prev_fast(units))
    }
}

// The fast path still never exposes a value outside the scalar range.
#[inline]
fn unchecked(mut decoded: Decoded) -> Decoded {
    if decoded.len > 0 && !is_scalar_value(decoded.scalar) {
        decoded.valid = false;
    }
    decoded
}

impl<'a, E: Encoding, P: ErrorPolicy> Iterator for CodepointIter<'a, E, P> {
    type Item = Result<u32, P::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        match self.get()? {
            Ok(scalar) => {
                self.advance();
                Some(Ok(scalar))
            }
            Err(err) => {
                self.halted = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.halted {
            return (0, Some(0));
        }
        let remaining = self.back.saturating_sub(self.offset);
        // A fallible policy may stop at the first malformed sequence.
        let lower = if P::FALLIBLE {
            0
        } else {
            (remaining + E::MAX_UNITS - 1) / E::MAX_UNITS
        };
        (lower, Some(remaining))
    }
}

impl<'a, E: Encoding, P: ErrorPolicy> DoubleEndedIterator for CodepointIter<'a, E, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.halted || self.is_at_end() {
            return None;
        }
        let prev = decode_prev_with::<E, P>(&self.units[self.offset..self.back]);
        let start = self.back - prev.len;
        let item = if prev.valid {
            Ok(prev.scalar)
        } else {
            P::on_invalid(self.error_at(start))
        };
        match item {
            Ok(scalar) => {
                self.back = start;
                Some(Ok(scalar))
            }
            Err(err) => {
                self.halted = true;
                Some(Err(err))
            }
        }
    }
}

impl<'a, E: Encoding, P: ErrorPolicy> Clone for CodepointIter<'a, E, P> {
    fn clone(&self) -> Self {
        CodepointIter {
            units: self.units,
            offset: self.offset,
            back: self.back,
            decoded: self.decoded,
            halted: self.halted,
            marker: PhantomData,
        }
    }
}

impl<'a, E: Encoding, P: ErrorPolicy> fmt::Debug for CodepointIter<'a, E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodepointIter")
            .field("encoding", &E::NAME)
            .field("offset", &self.offset)
            .field("back", &self.back)
            .field("decoded", &self.decoded)
            .finish()
    }
}

/// An iterator over plain scalar values, for policies that cannot fail.
pub struct Scalars<'a, E: Encoding, P: ErrorPolicy<Error = Infallible>> {
    inner: CodepointIter<'a, E, P>,
}

#[inline]
fn infallible(item: Result<u32, Infallible>) -> u32 {
    match item {
        Ok(scalar) => scalar,
        Err(never) => match never {},
    }
}

impl<'a, E: Encoding, P: ErrorPolicy<Error = Infallible>> Iterator for Scalars<'a, E, P> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.inner.next().map(infallible)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, E: Encoding, P: ErrorPolicy<Error = Infallible>> DoubleEndedIterator
    for Scalars<'a, E, P>
{
    fn next_back(&mut self) -> Option<u32> {
        self.inner.next_back().map(infallible)
    }
}

impl<'a, E: Encoding, P: ErrorPolicy<Error = Infallible>> fmt::Debug for Scalars<'a, E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Scalars").field(&self.inner).finish()
    }
}

fn lossy<E: Encoding>(units: &[E::Unit]) -> String {
    CodepointIter::<E, Replace>::new(units)
        .scalars()
        .map(|scalar| char::from_u32(scalar).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

/// Decodes UTF-8, replacing each malformed byte with U+FFFD.
pub fn decode_utf8_lossy(bytes: &[u8]) -> String {
    lossy::<Utf8>(bytes)
}

/// Decodes UTF-16, replacing each malformed unit with U+FFFD.
pub fn decode_utf16_lossy(units: &[u16]) -> String {
    lossy::<Utf16>(units)
}

/// Checks that `units` is well formed, reporting the first malformed sequence.
pub fn validate<E: Encoding>(units: &[E::Unit]) -> Result<(), EncodingError> {
    for item in CodepointIter::<E, Strict>::new(units) {
        item?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{policy::Ignore, utf32::Utf32};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cursor_over_euro_sign() {
        let bytes = [0xE2, 0x82, 0xAC];
        let mut iter = CodepointIter::<Utf8>::new(&bytes);
        assert_eq!(Some(Ok(0x20AC)), iter.get());
        assert_eq!(3, iter.unit_len());
        assert!(iter.is_valid());
        iter.advance();
        assert!(iter.is_at_end());
        assert_eq!(3, iter.offset());
        assert_eq!(None, iter.get());
        assert!(iter.retreat());
        assert_eq!(0, iter.offset());
        assert!(!iter.retreat());
    }

    #[test]
    fn test_surrogate_pair() {
        let units = [0xD83D, 0xDE00];
        let scalars: Vec<u32> = CodepointIter::<Utf16>::new(&units).scalars().collect();
        assert_eq!(vec![0x1F600], scalars);
        let iter = CodepointIter::<Utf16>::new(&units);
        assert_eq!(2, iter.unit_len());
    }

    #[test]
    fn test_replace_resumes_after_bad_lead() {
        let bytes = [0xFF, b'o', b'k'];
        let scalars: Vec<u32> = CodepointIter::<Utf8, Replace>::new(&bytes).scalars().collect();
        assert_eq!(vec![0xFFFD, 'o' as u32, 'k' as u32], scalars);
        assert_eq!("\u{FFFD}ok", decode_utf8_lossy(&bytes));
    }

    #[test]
    fn test_error_policy_contract() {
        let bytes = b"ab\xC3(cd";

        let ignored: Vec<u32> = CodepointIter::<Utf8, Ignore>::new(bytes).scalars().collect();
        assert!(ignored.len() >= 4);

        let replaced: Vec<u32> = CodepointIter::<Utf8, Replace>::new(bytes).scalars().collect();
        assert_eq!(1, replaced.iter().filter(|&&s| s == 0xFFFD).count());
        assert_eq!("ab\u{FFFD}(cd", decode_utf8_lossy(bytes));

        let mut strict = CodepointIter::<Utf8, Strict>::new(bytes);
        assert_eq!(Some(Ok('a' as u32)), strict.next());
        assert_eq!(Some(Ok('b' as u32)), strict.next());
        let err = strict.next().unwrap().unwrap_err();
        assert_eq!(2, err.offset());
        assert_eq!("UTF-8", err.encoding());
        assert_eq!(&[0xC3], err.units());
        assert_eq!(None, strict.next());
        assert_eq!(2, strict.offset());
        strict.advance();
        assert_eq!(Some(Ok('(' as u32)), strict.next());
    }

    #[test]
    fn test_size_hint_bounds_hold_for_every_policy() {
        let bytes = [0xFF; 8];
        let strict = CodepointIter::<Utf8, Strict>::new(&bytes);
        let (lower, upper) = strict.size_hint();
        assert_eq!((0, Some(8)), (lower, upper));
        let mut strict = strict;
        assert!(strict.next().unwrap().is_err());
        assert_eq!((0, Some(0)), strict.size_hint());
        assert_eq!(None, strict.next());

        let replace = CodepointIter::<Utf8, Replace>::new(&bytes);
        let (lower, upper) = replace.size_hint();
        let count = replace.count();
        assert!(lower <= count && Some(count) <= upper);
        assert_eq!(8, count);

        let text = "a€😀";
        let ignore = CodepointIter::<Utf8, Ignore>::new(text.as_bytes());
        let (lower, upper) = ignore.size_hint();
        assert!(lower <= 3 && Some(3) <= upper);
    }

    #[test]
    fn test_strict_error_carries_truncated_sequence() {
        let err = validate::<Utf8>(b"abc\xE2\x82").unwrap_err();
        assert_eq!(3, err.offset());
        assert_eq!(&[0xE2, 0x82], err.units());
        assert_eq!(Ok(()), validate::<Utf8>("añ€😀".as_bytes()));
        let err = validate::<Utf16>(&[0x41, 0xDC00]).unwrap_err();
        assert_eq!(1, err.offset());
        assert_eq!(&[0xDC00], err.units());
        assert!(validate::<Utf32>(&[0x41, 0x110000]).is_err());
    }

    #[test]
    fn test_backward_iteration_mirrors_forward() {
        let text = "a\u{301}€😀z";
        let bytes = text.as_bytes();
        let forward: Vec<u32> = CodepointIter::<Utf8>::new(bytes).scalars().collect();
        let mut backward: Vec<u32> = CodepointIter::<Utf8>::new(bytes).scalars().rev().collect();
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(text.chars().map(|c| c as u32).collect::<Vec<_>>(), forward);

        let mut iter = CodepointIter::<Utf8>::new(bytes);
        let mut offsets = vec![iter.offset()];
        while !iter.is_at_end() {
            iter.advance();
            offsets.push(iter.offset());
        }
        let mut back_offsets = vec![iter.offset()];
        while iter.retreat() {
            back_offsets.push(iter.offset());
        }
        back_offsets.reverse();
        assert_eq!(offsets, back_offsets);
    }

    #[test]
    fn test_meeting_in_the_middle() {
        let units: Vec<u16> = "x😀y".encode_utf16().collect();
        let mut iter = CodepointIter::<Utf16>::new(&units).scalars();
        assert_eq!(Some('x' as u32), iter.next());
        assert_eq!(Some('y' as u32), iter.next_back());
        assert_eq!(Some(0x1F600), iter.next_back());
        assert_eq!(None, iter.next());
        assert_eq!(None, iter.next_back());
    }

    #[test]
    fn test_strict_backward_error_offset() {
        let bytes = b"ok\xFF";
        let mut iter = CodepointIter::<Utf8, Strict>::new(bytes);
        let err = iter.next_back().unwrap().unwrap_err();
        assert_eq!(2, err.offset());
        assert_eq!(None, iter.next_back());
    }

    #[test]
    fn test_seek_to_start() {
        let mut iter = CodepointIter::<Utf32>::new(&[0x61, 0x62]);
        iter.advance();
        iter.advance();
        assert!(iter.is_at_end());
        iter.seek_to_start();
        assert_eq!(Some(Ok(0x61)), iter.get());
    }

    #[test]
    fn test_utf16_lossy() {
        assert_eq!("a\u{FFFD}b", decode_utf16_lossy(&[0x61, 0xD800, 0x62]));
    }
}
