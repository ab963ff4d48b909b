use crate::{
    codec::Encoding,
    codepoint_iter::CodepointIter,
    error::EncodingError,
    policy::{ErrorPolicy, Replace},
};
use smallvec::smallvec;
use std::{any::TypeId, fmt, marker::PhantomData};

/// Appends the encodings of scalar values to a borrowed buffer.
pub struct CodepointWriter<'a, E: Encoding, P: ErrorPolicy = Replace> {
    out: &'a mut Vec<E::Unit>,
    written: usize,
    marker: PhantomData<(E, P)>,
}

impl<'a, E: Encoding, P: ErrorPolicy> CodepointWriter<'a, E, P> {
    /// A writer appending to `out`. Existing contents are kept.
    pub fn new(out: &'a mut Vec<E::Unit>) -> Self {
        CodepointWriter {
            out,
            written: 0,
            marker: PhantomData,
        }
    }

    /// Appends one scalar value.
    ///
    /// A value outside the scalar range goes to the error policy, which
    /// either substitutes U+FFFD or fails without writing anything.
    pub fn push(&mut self, scalar: u32) -> Result<(), P::Error> {
        let c = match char::from_u32(scalar) {
            Some(c) => c,
            None => {
                let error = EncodingError::new(E::NAME, self.written, smallvec![scalar]);
                let replacement = P::on_invalid(error)?;
                char::from_u32(replacement).unwrap_or(char::REPLACEMENT_CHARACTER)
            }
        };
        self.push_char(c);
        Ok(())
    }

    /// Appends a `char`, which is always a valid scalar.
    pub fn push_char(&mut self, c: char) {
        E::push_encoded(c, self.out);
        self.written += 1;
    }

    /// Appends every scalar from `scalars`, stopping at the first failure.
    pub fn extend_scalars<I>(&mut self, scalars: I) -> Result<(), P::Error>
    where
        I: IntoIterator<Item = u32>,
    {
        for scalar in scalars {
            self.push(scalar)?;
        }
        Ok(())
    }

    /// Number of scalars written so far.
    pub fn written(&self) -> usize {
        self.written
    }
}

impl<'a, E: Encoding, P: ErrorPolicy> fmt::Debug for CodepointWriter<'a, E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodepointWriter")
            .field("encoding", &E::NAME)
            .field("written", &self.written)
            .field("len", &self.out.len())
            .finish()
    }
}

/// Transcodes `src` from encoding `S` to encoding `D`, appending to `dst`.
///
/// Source input is decoded under `P`. Recoding between identical encodings
/// under [`crate::Ignore`] copies the units without looking at them.
pub fn recode<S, D, P>(src: &[S::Unit], dst: &mut Vec<D::Unit>) -> Result<(), P::Error>
where
    S: Encoding,
    D: Encoding,
    P: ErrorPolicy,
{
    if !P::VALIDATES && TypeId::of::<S>() == TypeId::of::<D>() {
        dst.extend(src.iter().map(|&unit| D::unit_from_u32(unit.into())));
        return Ok(());
    }
    dst.reserve(src.len());
    let mut writer = CodepointWriter::<D, P>::new(dst);
    for scalar in CodepointIter::<S, P>::new(src) {
        writer.push(scalar?)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        policy::{Ignore, Strict},
        utf16::Utf16,
        utf32::Utf32,
        utf8::Utf8,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn test_writer_encodes_each_form() {
        let mut bytes = Vec::new();
        let mut writer = CodepointWriter::<Utf8>::new(&mut bytes);
        writer.extend_scalars([0x61, 0x20AC, 0x1F600]).unwrap();
        assert_eq!(3, writer.written());
        assert_eq!("a€😀".as_bytes(), &bytes[..]);

        let mut units = Vec::new();
        CodepointWriter::<Utf16>::new(&mut units).push_char('😀');
        assert_eq!(vec![0xD83D, 0xDE00], units);
    }

    #[test]
    fn test_writer_replaces_invalid_scalar() {
        let mut bytes = Vec::new();
        let mut writer = CodepointWriter::<Utf8, Replace>::new(&mut bytes);
        writer.extend_scalars([0x61, 0xD800, 0x62]).unwrap();
        assert_eq!("a\u{FFFD}b".as_bytes(), &bytes[..]);
    }

    #[test]
    fn test_writer_strict_rejects_invalid_scalar() {
        let mut units = Vec::new();
        let mut writer = CodepointWriter::<Utf32, Strict>::new(&mut units);
        let err = writer.extend_scalars([0x61, 0x110000, 0x62]).unwrap_err();
        assert_eq!(1, err.offset());
        assert_eq!(&[0x110000], err.units());
        assert_eq!("UTF-32", err.encoding());
        assert_eq!(1, writer.written());
        assert_eq!(vec![0x61], units);
    }

    #[test]
    fn test_recode_between_forms() {
        let text = "grüße, 世界 😀";
        let mut utf16 = Vec::new();
        recode::<Utf8, Utf16, Strict>(text.as_bytes(), &mut utf16).unwrap();
        assert_eq!(text.encode_utf16().collect::<Vec<_>>(), utf16);

        let mut utf8 = Vec::new();
        recode::<Utf16, Utf8, Replace>(&utf16, &mut utf8).unwrap();
        assert_eq!(text.as_bytes(), &utf8[..]);
    }

    #[test]
    fn test_recode_same_form_copies_under_ignore() {
        let bytes = b"\xFFraw";
        let mut out = Vec::new();
        recode::<Utf8, Utf8, Ignore>(bytes, &mut out).unwrap();
        assert_eq!(&bytes[..], &out[..]);

        let mut out = Vec::new();
        recode::<Utf8, Utf8, Replace>(bytes, &mut out).unwrap();
        assert_eq!("\u{FFFD}raw".as_bytes(), &out[..]);
    }

    #[test]
    fn test_recode_strict_reports_source_offset() {
        let mut out = Vec::new();
        let err = recode::<Utf16, Utf8, Strict>(&[0x41, 0xD800], &mut out).unwrap_err();
        assert_eq!(1, err.offset());
        assert_eq!("UTF-16", err.encoding());
    }
}
