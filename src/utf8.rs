use crate::{
    codec::{Decoded, Encoding},
    scalar::is_scalar_value,
};

/// The UTF-8 encoding form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Utf8;

pub(crate) const MAX_BYTE_COUNT: usize = 4;

const TAG_CONT: u8 = 0b1000_0000;
const TAG_TWO_B: u8 = 0b1100_0000;
const TAG_THREE_B: u8 = 0b1110_0000;
const TAG_FOUR_B: u8 = 0b1111_0000;
const END_ONE_B: u32 = 0x80;
const END_TWO_B: u32 = 0x800;
const END_THREE_B: u32 = 0x10000;

const CONT_PREFIX_MASK: u8 = 0b1100_0000;
const CONT_VALUE_MASK: u8 = 0b0011_1111;

pub(crate) fn len(code: u32) -> usize {
    if code < END_ONE_B {
        1
    } else if code < END_TWO_B {
        2
    } else if code < END_THREE_B {
        3
    } else {
        4
    }
}

/// Sequence length announced by a lead byte, or `None` for bytes that can never
/// start a well-formed sequence (continuations, `C0`, `C1`, `F5..=FF`).
pub(crate) fn len_from_first_byte(v: u8) -> Option<usize> {
    match v {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// Like [`len_from_first_byte`], but reads only the tag bits.
fn len_from_tag(v: u8) -> usize {
    if v < 128 {
        1
    } else if v & TAG_FOUR_B == TAG_FOUR_B {
        4
    } else if v & TAG_THREE_B == TAG_THREE_B {
        3
    } else if v & TAG_TWO_B == TAG_TWO_B {
        2
    } else {
        1
    }
}

#[inline]
pub(crate) fn is_cont_byte(v: u8) -> bool {
    (v & CONT_PREFIX_MASK) == TAG_CONT
}

#[inline]
fn first_byte_value(byte: u8, width: u32) -> u32 {
    (byte & (0x7F >> width)) as u32
}

#[inline]
fn acc_cont_byte(ch: u32, byte: u8) -> u32 {
    (ch << 6) | (byte & CONT_VALUE_MASK) as u32
}

#[inline]
fn decode_value(h: u8, cont: &[u8]) -> u32 {
    let mut v = if cont.is_empty() {
        h as u32
    } else {
        first_byte_value(h, cont.len() as u32 + 1)
    };
    for c in cont.iter().cloned() {
        v = acc_cont_byte(v, c);
    }
    v
}

/// Smallest value that may be encoded with `width` bytes.
fn min_value(width: usize) -> u32 {
    match width {
        2 => END_ONE_B,
        3 => END_TWO_B,
        4 => END_THREE_B,
        _ => 0,
    }
}

impl Encoding for Utf8 {
    type Unit = u8;

    const NAME: &'static str = "UTF-8";

    const MAX_UNITS: usize = MAX_BYTE_COUNT;

    // Every malformed sequence consumes exactly one byte, which keeps the
    // backward decoder in step with the forward one.
    fn decode(units: &[u8]) -> Decoded {
        match *units {
            [] => Decoded::EMPTY,
            [head, ..] if head < 0x80 => Decoded::ok(head as u32, 1),
            [head, ref rest @ ..] => {
                let width = match len_from_first_byte(head) {
                    Some(width) => width,
                    None => return Decoded::invalid(1),
                };
                let cont_len = width - 1;
                if rest.len() < cont_len {
                    return Decoded::invalid(1);
                }
                let cont = &rest[..cont_len];
                if !cont.iter().all(|&b| is_cont_byte(b)) {
                    return Decoded::invalid(1);
                }
                let value = decode_value(head, cont);
                if value < min_value(width) || !is_scalar_value(value) {
                    return Decoded::invalid(1);
                }
                Decoded::ok(value, width)
            }
        }
    }

    fn decode_fast(units: &[u8]) -> Decoded {
        match *units {
            [] => Decoded::EMPTY,
            [head, ref rest @ ..] => {
                let cont_len = (len_from_tag(head) - 1).min(rest.len());
                Decoded::ok(decode_value(head, &rest[..cont_len]), cont_len + 1)
            }
        }
    }

    fn decode_prev(units: &[u8]) -> Decoded {
        let end = units.len();
        match *units {
            [] => Decoded::EMPTY,
            [.., last] if last < 0x80 => Decoded::ok(last as u32, 1),
            _ => {
                let start = lead_position(units);
                if is_cont_byte(units[start]) {
                    return Decoded::invalid(1);
                }
                let decoded = Self::decode(&units[start..]);
                if decoded.valid && decoded.len == end - start {
                    decoded
                } else {
                    Decoded::invalid(1)
                }
            }
        }
    }

    fn decode_prev_fast(units: &[u8]) -> Decoded {
        if units.is_empty() {
            return Decoded::EMPTY;
        }
        let start = lead_position(units);
        let decoded = Self::decode_fast(&units[start..]);
        Decoded::ok(decoded.scalar, units.len() - start)
    }

    fn encoded_len(c: char) -> usize {
        len(c as u32)
    }

    fn encode(c: char, buf: &mut [u8]) -> usize {
        let code = c as u32;
        let len = len(code);
        let available = buf.len();
        match (len, buf) {
            (1, [a, ..]) => {
                *a = code as u8;
            }
            (2, [a, b, ..]) => {
                *a = (code >> 6 & 0x1F) as u8 | TAG_TWO_B;
                *b = (code & 0x3F) as u8 | TAG_CONT;
            }
            (3, [a, b, c, ..]) => {
                *a = (code >> 12 & 0x0F) as u8 | TAG_THREE_B;
                *b = (code >> 6 & 0x3F) as u8 | TAG_CONT;
                *c = (code & 0x3F) as u8 | TAG_CONT;
            }
            (4, [a, b, c, d, ..]) => {
                *a = (code >> 18 & 0x07) as u8 | TAG_FOUR_B;
                *b = (code >> 12 & 0x3F) as u8 | TAG_CONT;
                *c = (code >> 6 & 0x3F) as u8 | TAG_CONT;
                *d = (code & 0x3F) as u8 | TAG_CONT;
            }
            _ => panic!(
                "encoding U+{:04X} needs {} bytes but the buffer holds {}",
                code, len, available
            ),
        };
        len
    }

    fn unit_from_u32(value: u32) -> u8 {
        value as u8
    }

    fn error_span(units: &[u8]) -> usize {
        match units {
            [] => 0,
            [head, rest @ ..] => {
                let cont = rest.iter().take(len_from_tag(*head) - 1);
                1 + cont.take_while(|&&b| is_cont_byte(b)).count()
            }
        }
    }
}

/// Walks back over at most three continuation bytes from the end of `units`.
fn lead_position(units: &[u8]) -> usize {
    let lower = units.len().saturating_sub(MAX_BYTE_COUNT);
    let mut start = units.len() - 1;
    while start > lower && is_cont_byte(units[start]) {
        start -= 1;
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn forward(mut bytes: &[u8]) -> Vec<Decoded> {
        let mut out = Vec::new();
        while !bytes.is_empty() {
            let d = Utf8::decode(bytes);
            bytes = &bytes[d.len..];
            out.push(d);
        }
        out
    }

    fn backward(mut bytes: &[u8]) -> Vec<Decoded> {
        let mut out = Vec::new();
        while !bytes.is_empty() {
            let d = Utf8::decode_prev(bytes);
            bytes = &bytes[..bytes.len() - d.len];
            out.push(d);
        }
        out.reverse();
        out
    }

    #[test]
    fn test_decode_euro_sign() {
        let d = Utf8::decode(&[0xE2, 0x82, 0xAC]);
        assert_eq!(Decoded::ok(0x20AC, 3), d);
        let mut buf = [0u8; 4];
        assert_eq!(3, Utf8::encode('\u{20AC}', &mut buf));
        assert_eq!(&[0xE2u8, 0x82, 0xAC], &buf[..3]);
    }

    #[test]
    fn test_encode_matches_std() {
        for c in ['\0', 'a', '\u{7F}', '\u{80}', 'é', '\u{7FF}', '\u{800}', '\u{FFFF}', '😀', '\u{10FFFF}'] {
            let mut buf = [0u8; 4];
            let n = Utf8::encode(c, &mut buf);
            assert_eq!(c.len_utf8(), n);
            assert_eq!(c.to_string().as_bytes(), &buf[..n]);
            assert_eq!(Decoded::ok(c as u32, n), Utf8::decode(&buf[..n]));
            assert_eq!(Decoded::ok(c as u32, n), Utf8::decode_fast(&buf[..n]));
            assert_eq!(Decoded::ok(c as u32, n), Utf8::decode_prev(&buf[..n]));
            assert_eq!(Decoded::ok(c as u32, n), Utf8::decode_prev_fast(&buf[..n]));
        }
    }

    #[test_case(&[0xFF] ; "never a lead")]
    #[test_case(&[0x80] ; "stray continuation")]
    #[test_case(&[0xC0, 0xAF] ; "overlong two byte")]
    #[test_case(&[0xE0, 0x80, 0xAF] ; "overlong three byte")]
    #[test_case(&[0xED, 0xA0, 0x80] ; "encoded surrogate")]
    #[test_case(&[0xF4, 0x90, 0x80, 0x80] ; "above max scalar")]
    #[test_case(&[0xE2, 0x82] ; "truncated")]
    #[test_case(&[0xE2, 0x28, 0xA1] ; "bad continuation")]
    fn test_malformed_consumes_one_byte(bytes: &[u8]) {
        let d = Utf8::decode(bytes);
        assert!(!d.valid);
        assert_eq!(1, d.len);
        assert_eq!(0xFFFF_FFFF, d.scalar);
        assert_eq!(forward(bytes), backward(bytes));
    }

    #[test]
    fn test_backward_agrees_with_forward() {
        let samples: &[&[u8]] = &[
            "héllo, wörld €😀".as_bytes(),
            &[0x61, 0xFF, 0x62, 0xE2, 0x82, 0xAC, 0x80, 0x80],
            &[0xF0, 0x9F, 0x98, 0x80, 0x80, 0x80, 0x80, 0x80],
            &[0xE2, 0x82, 0xE2, 0x82, 0xAC],
            &[0x80, 0x80, 0x80, 0x80, 0x80],
        ];
        for bytes in samples {
            assert_eq!(forward(bytes), backward(bytes));
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(0, Utf8::decode(&[]).len);
        assert_eq!(0, Utf8::decode_prev(&[]).len);
        assert!(!Utf8::decode(&[]).valid);
    }

    #[test]
    fn test_fast_decode_stays_in_bounds() {
        let d = Utf8::decode_fast(&[0xF0, 0x9F]);
        assert_eq!(2, d.len);
        let d = Utf8::decode_prev_fast(&[0x9F, 0x98, 0x80, 0x80, 0x80]);
        assert!(d.len <= 4);
    }

    #[test]
    #[should_panic]
    fn test_encode_into_short_buffer_panics() {
        let mut buf = [0u8; 2];
        Utf8::encode('€', &mut buf);
    }

    #[test]
    fn test_every_scalar_round_trips() {
        let mut buf = [0u8; MAX_BYTE_COUNT];
        let mut std_buf = [0u8; 4];
        for c in (0..=crate::scalar::MAX_SCALAR).filter_map(char::from_u32) {
            let len = Utf8::encode(c, &mut buf);
            let units = &buf[..len];
            assert_eq!(c.encode_utf8(&mut std_buf).as_bytes(), units);
            assert_eq!(len, Utf8::encoded_len(c));
            let expected = Decoded::ok(c as u32, len);
            assert_eq!(expected, Utf8::decode(units), "{:?}", c);
            assert_eq!(expected, Utf8::decode_fast(units), "{:?}", c);
            assert_eq!(expected, Utf8::decode_prev(units), "{:?}", c);
            assert_eq!(expected, Utf8::decode_prev_fast(units), "{:?}", c);
        }
    }
}
