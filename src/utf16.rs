use crate::{
    codec::{Decoded, Encoding},
    scalar::{is_high_surrogate, is_low_surrogate, is_surrogate},
};

/// The UTF-16 encoding form, in native-endian code units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Utf16;

const SURROGATE_OFFSET: u32 = 0x10000;
const HIGH_BASE: u32 = 0xD800;
const LOW_BASE: u32 = 0xDC00;

// Wrapping so the unchecked decoders cannot overflow on malformed pairs.
#[inline]
fn combine(high: u16, low: u16) -> u32 {
    let high = (high as u32).wrapping_sub(HIGH_BASE) & 0x3FF;
    let low = (low as u32).wrapping_sub(LOW_BASE) & 0x3FF;
    SURROGATE_OFFSET + (high << 10) + low
}

impl Encoding for Utf16 {
    type Unit = u16;

    const NAME: &'static str = "UTF-16";

    const MAX_UNITS: usize = 2;

    // A surrogate that is not half of a well-ordered pair is malformed on its own.
    fn decode(units: &[u16]) -> Decoded {
        match *units {
            [] => Decoded::EMPTY,
            [unit, ..] if !is_surrogate(unit as u32) => Decoded::ok(unit as u32, 1),
            [high, low, ..] if is_high_surrogate(high as u32) && is_low_surrogate(low as u32) => {
                Decoded::ok(combine(high, low), 2)
            }
            _ => Decoded::invalid(1),
        }
    }

    fn decode_fast(units: &[u16]) -> Decoded {
        match *units {
            [] => Decoded::EMPTY,
            [high, low, ..] if is_high_surrogate(high as u32) => Decoded::ok(combine(high, low), 2),
            [unit, ..] => Decoded::ok(unit as u32, 1),
        }
    }

    fn decode_prev(units: &[u16]) -> Decoded {
        match *units {
            [] => Decoded::EMPTY,
            [.., unit] if !is_surrogate(unit as u32) => Decoded::ok(unit as u32, 1),
            [.., high, low] if is_high_surrogate(high as u32) && is_low_surrogate(low as u32) => {
                Decoded::ok(combine(high, low), 2)
            }
            _ => Decoded::invalid(1),
        }
    }

    fn decode_prev_fast(units: &[u16]) -> Decoded {
        match *units {
            [] => Decoded::EMPTY,
            [.., high, low] if is_low_surrogate(low as u32) => Decoded::ok(combine(high, low), 2),
            [.., unit] => Decoded::ok(unit as u32, 1),
        }
    }

    fn encoded_len(c: char) -> usize {
        c.len_utf16()
    }

    fn encode(c: char, buf: &mut [u16]) -> usize {
        let code = c as u32;
        let available = buf.len();
        match buf {
            [a, ..] if code < SURROGATE_OFFSET => {
                *a = code as u16;
                1
            }
            [a, b, ..] => {
                let code = code - SURROGATE_OFFSET;
                *a = (HIGH_BASE + (code >> 10)) as u16;
                *b = (LOW_BASE + (code & 0x3FF)) as u16;
                2
            }
            _ => panic!(
                "encoding U+{:04X} needs {} units but the buffer holds {}",
                code,
                c.len_utf16(),
                available
            ),
        }
    }

    fn unit_from_u32(value: u32) -> u16 {
        value as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_surrogate_pair() {
        assert_eq!(Decoded::ok(0x1F600, 2), Utf16::decode(&[0xD83D, 0xDE00]));
        assert_eq!(Decoded::ok(0x1F600, 2), Utf16::decode_prev(&[0xD83D, 0xDE00]));
        assert_eq!(Decoded::ok(0x1F600, 2), Utf16::decode_fast(&[0xD83D, 0xDE00]));
        assert_eq!(Decoded::ok(0x1F600, 2), Utf16::decode_prev_fast(&[0xD83D, 0xDE00]));
    }

    #[test]
    fn test_lone_surrogates_are_invalid() {
        assert_eq!(Decoded::invalid(1), Utf16::decode(&[0xD83D]));
        assert_eq!(Decoded::invalid(1), Utf16::decode(&[0xD83D, 0x0041]));
        assert_eq!(Decoded::invalid(1), Utf16::decode(&[0xDE00, 0xD83D]));
        assert_eq!(Decoded::invalid(1), Utf16::decode_prev(&[0x0041, 0xDE00]));
        assert_eq!(Decoded::invalid(1), Utf16::decode_prev(&[0xDE00, 0xD83D]));
    }

    #[test]
    fn test_encode_matches_std() {
        for c in ['a', '\u{FFFF}', '😀', '\u{10FFFF}'] {
            let mut buf = [0u16; 2];
            let n = Utf16::encode(c, &mut buf);
            let expected: Vec<u16> = c.encode_utf16(&mut [0; 2]).to_vec();
            assert_eq!(expected, &buf[..n]);
        }
    }

    #[test]
    fn test_backward_agrees_with_forward() {
        let units = [0x41, 0xDE00, 0xD83D, 0xDE00, 0xD83D, 0xD83D, 0xDE00, 0x42];
        let mut rest = &units[..];
        let mut fwd = Vec::new();
        while !rest.is_empty() {
            let d = Utf16::decode(rest);
            rest = &rest[d.len..];
            fwd.push(d);
        }
        let mut rest = &units[..];
        let mut bwd = Vec::new();
        while !rest.is_empty() {
            let d = Utf16::decode_prev(rest);
            rest = &rest[..rest.len() - d.len];
            bwd.push(d);
        }
        bwd.reverse();
        assert_eq!(fwd, bwd);
    }

    #[test]
    fn test_every_scalar_round_trips() {
        let mut buf = [0u16; 2];
        let mut std_buf = [0u16; 2];
        for c in (0..=crate::scalar::MAX_SCALAR).filter_map(char::from_u32) {
            let len = Utf16::encode(c, &mut buf);
            let units = &buf[..len];
            assert_eq!(&*c.encode_utf16(&mut std_buf), units);
            assert_eq!(len, Utf16::encoded_len(c));
            let expected = Decoded::ok(c as u32, len);
            assert_eq!(expected, Utf16::decode(units), "{:?}", c);
            assert_eq!(expected, Utf16::decode_fast(units), "{:?}", c);
            assert_eq!(expected, Utf16::decode_prev(units), "{:?}", c);
            assert_eq!(expected, Utf16::decode_prev_fast(units), "{:?}", c);
        }
    }
}
