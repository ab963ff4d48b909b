use crate::{
    codec::{Decoded, Encoding},
    scalar::is_scalar_value,
};

/// The UTF-32 encoding form, in native-endian code units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Utf32;

#[inline]
fn decode_unit(unit: u32) -> Decoded {
    if is_scalar_value(unit) {
        Decoded::ok(unit, 1)
    } else {
        Decoded::invalid(1)
    }
}

impl Encoding for Utf32 {
    type Unit = u32;

    const NAME: &'static str = "UTF-32";

    const MAX_UNITS: usize = 1;

    fn decode(units: &[u32]) -> Decoded {
        units.first().map_or(Decoded::EMPTY, |&unit| decode_unit(unit))
    }

    fn decode_fast(units: &[u32]) -> Decoded {
        units.first().map_or(Decoded::EMPTY, |&unit| Decoded::ok(unit, 1))
    }

    fn decode_prev(units: &[u32]) -> Decoded {
        units.last().map_or(Decoded::EMPTY, |&unit| decode_unit(unit))
    }

    fn decode_prev_fast(units: &[u32]) -> Decoded {
        units.last().map_or(Decoded::EMPTY, |&unit| Decoded::ok(unit, 1))
    }

    fn encoded_len(_: char) -> usize {
        1
    }

    fn encode(c: char, buf: &mut [u32]) -> usize {
        match buf {
            [a, ..] => {
                *a = c as u32;
                1
            }
            [] => panic!("encoding U+{:04X} into an empty buffer", c as u32),
        }
    }

    fn unit_from_u32(value: u32) -> u32 {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rejects_non_scalars() {
        assert_eq!(Decoded::ok(0x10FFFF, 1), Utf32::decode(&[0x10FFFF]));
        assert_eq!(Decoded::invalid(1), Utf32::decode(&[0x110000]));
        assert_eq!(Decoded::invalid(1), Utf32::decode_prev(&[0x41, 0xD800]));
        assert_eq!(Decoded::ok(0xD800, 1), Utf32::decode_fast(&[0xD800]));
        assert_eq!(Decoded::EMPTY, Utf32::decode(&[]));
    }

    #[test]
    fn test_every_scalar_round_trips() {
        let mut buf = [0u32; 1];
        for c in (0..=crate::scalar::MAX_SCALAR).filter_map(char::from_u32) {
            assert_eq!(1, Utf32::encode(c, &mut buf));
            assert_eq!([c as u32], buf);
            assert_eq!(1, Utf32::encoded_len(c));
            let expected = Decoded::ok(c as u32, 1);
            assert_eq!(expected, Utf32::decode(&buf), "{:?}", c);
            assert_eq!(expected, Utf32::decode_fast(&buf), "{:?}", c);
            assert_eq!(expected, Utf32::decode_prev(&buf), "{:?}", c);
            assert_eq!(expected, Utf32::decode_prev_fast(&buf), "{:?}", c);
        }
    }
}
