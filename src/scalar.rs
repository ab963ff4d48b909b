//! Scalar-value predicates.

use crate::table::SparseSet;

/// The greatest Unicode code point.
pub const MAX_SCALAR: u32 = 0x10FFFF;

/// U+FFFD REPLACEMENT CHARACTER, substituted for malformed input.
pub const REPLACEMENT_CHARACTER: u32 = 0xFFFD;

/// The scalar reported by a failed decode.
pub(crate) const INVALID_SCALAR: u32 = 0xFFFF_FFFF;

pub(crate) static SURROGATES: SparseSet = SparseSet::from_static(&[(0xD800, 0xDFFF)]);
static HIGH_SURROGATES: SparseSet = SparseSet::from_static(&[(0xD800, 0xDBFF)]);
static LOW_SURROGATES: SparseSet = SparseSet::from_static(&[(0xDC00, 0xDFFF)]);

/// Returns `true` for values in `0..=0x10FFFF` outside the surrogate range.
#[inline]
pub fn is_scalar_value(value: u32) -> bool {
    value <= MAX_SCALAR && !is_surrogate(value)
}

/// Returns `true` for `0xD800..=0xDFFF`.
#[inline]
pub fn is_surrogate(value: u32) -> bool {
    SURROGATES.contains(value)
}

/// Returns `true` for leading surrogates, `0xD800..=0xDBFF`.
#[inline]
pub fn is_high_surrogate(value: u32) -> bool {
    HIGH_SURROGATES.contains(value)
}

/// Returns `true` for trailing surrogates, `0xDC00..=0xDFFF`.
#[inline]
pub fn is_low_surrogate(value: u32) -> bool {
    LOW_SURROGATES.contains(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_value_bounds() {
        assert!(is_scalar_value(0));
        assert!(is_scalar_value(0xD7FF));
        assert!(!is_scalar_value(0xD800));
        assert!(!is_scalar_value(0xDFFF));
        assert!(is_scalar_value(0xE000));
        assert!(is_scalar_value(MAX_SCALAR));
        assert!(!is_scalar_value(MAX_SCALAR + 1));
        assert!(!is_scalar_value(INVALID_SCALAR));
    }

    #[test]
    fn test_surrogate_halves() {
        assert!(is_high_surrogate(0xDBFF) && !is_low_surrogate(0xDBFF));
        assert!(is_low_surrogate(0xDC00) && !is_high_surrogate(0xDC00));
        assert!(!is_surrogate(0xD7FF));
    }
}
