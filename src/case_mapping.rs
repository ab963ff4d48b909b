//! Simple and full case mappings.
//!
//! Simple mappings always produce exactly one scalar; characters without a
//! mapping map to themselves. Full mappings may expand to several scalars
//! (`ß` uppercases to `SS`) and fall back to the simple mapping otherwise.

use crate::{
    table::{ExactTable, ExtendedTable, Expansion},
    tables::case,
};

#[inline]
fn simple(table: &ExactTable<u32>, c: u32) -> u32 {
    table.get(c).copied().unwrap_or(c)
}

#[inline]
fn full(table: &ExtendedTable, c: u32, fallback: fn(u32) -> u32) -> Expansion {
    table.lookup_with(c, Some(fallback))
}

/// The simple lowercase mapping of `c`.
pub fn to_lower_simple(c: u32) -> u32 {
    simple(&case::SIMPLE_LOWER, c)
}

/// The simple uppercase mapping of `c`.
pub fn to_upper_simple(c: u32) -> u32 {
    simple(&case::SIMPLE_UPPER, c)
}

/// The simple titlecase mapping of `c`.
pub fn to_title_simple(c: u32) -> u32 {
    simple(&case::SIMPLE_TITLE, c)
}

/// The simple case folding of `c`.
pub fn fold_simple(c: u32) -> u32 {
    simple(&case::SIMPLE_FOLD, c)
}

/// The full lowercase mapping of `c`, without context-sensitive rules.
pub fn to_lower_full(c: u32) -> Expansion {
    full(&case::FULL_LOWER, c, to_lower_simple)
}

/// The full uppercase mapping of `c`.
pub fn to_upper_full(c: u32) -> Expansion {
    full(&case::FULL_UPPER, c, to_upper_simple)
}

/// The full titlecase mapping of `c`.
pub fn to_title_full(c: u32) -> Expansion {
    full(&case::FULL_TITLE, c, to_title_simple)
}

/// The full case folding of `c`.
pub fn fold_full(c: u32) -> Expansion {
    full(&case::FULL_FOLD, c, fold_simple)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    use crate::char_props::{general_category, GeneralCategory};

    #[test_case('A', 'a', 'A', 'A', 'a')]
    #[test_case('a', 'a', 'A', 'A', 'a')]
    #[test_case('ǅ', 'ǆ', 'Ǆ', 'ǅ', 'ǆ')]
    #[test_case('Σ', 'σ', 'Σ', 'Σ', 'σ')]
    #[test_case('ς', 'ς', 'Σ', 'Σ', 'σ')]
    #[test_case('İ', 'i', 'İ', 'İ', 'İ' ; "dotted capital i")]
    #[test_case('7', '7', '7', '7', '7')]
    fn test_simple_mappings(c: char, lower: char, upper: char, title: char, fold: char) {
        let c = c as u32;
        assert_eq!(lower as u32, to_lower_simple(c));
        assert_eq!(upper as u32, to_upper_simple(c));
        assert_eq!(title as u32, to_title_simple(c));
        assert_eq!(fold as u32, fold_simple(c));
    }

    #[test]
    fn test_full_mappings_expand() {
        assert_eq!(&[0x53, 0x53], &to_upper_full(0xDF)[..]);
        assert_eq!(&[0x53, 0x73], &to_title_full(0xDF)[..]);
        assert_eq!(&[0x73, 0x73], &fold_full(0xDF)[..]);
        assert_eq!(&[0x69, 0x307], &to_lower_full(0x130)[..]);
        assert_eq!(&[0x46, 0x46, 0x49], &to_upper_full(0xFB03)[..]);
    }

    #[test]
    fn test_full_mappings_fall_back_to_simple() {
        assert_eq!(&[0x61], &to_lower_full('A' as u32)[..]);
        assert_eq!(&[0x3A3], &to_upper_full(0x3C2)[..]);
        assert_eq!(&[0x37], &fold_full('7' as u32)[..]);
        assert_eq!(&[0xDF], &to_lower_full(0xDF)[..]);
    }

    // std may carry a newer Unicode version. A character that gained a case
    // pair since then maps to a code point our data does not assign, so only
    // mappings whose targets are all assigned here are compared.
    fn assigned_here(mapping: &[u32]) -> bool {
        mapping
            .iter()
            .all(|&c| general_category(c) != GeneralCategory::Unassigned)
    }

    #[test]
    fn test_mappings_agree_with_std_below_armenian() {
        let mut compared = 0;
        for c in '\u{0}'..='\u{58F}' {
            let lower: Vec<u32> = c.to_lowercase().map(|c| c as u32).collect();
            let upper: Vec<u32> = c.to_uppercase().map(|c| c as u32).collect();
            if assigned_here(&lower) {
                assert_eq!(lower, to_lower_full(c as u32).to_vec(), "lowercase of {:?}", c);
                compared += 1;
            }
            if assigned_here(&upper) {
                assert_eq!(upper, to_upper_full(c as u32).to_vec(), "uppercase of {:?}", c);
                compared += 1;
            }
        }
        assert!(compared > 2 * 0x580);
    }

    #[test]
    fn test_case_pairs_added_after_data_version_are_absent() {
        // U+019B and U+0264 gained uppercase forms in Unicode 16.
        assert_eq!(0x19B, to_upper_simple(0x19B));
        assert_eq!(&[0x264], &to_upper_full(0x264)[..]);
        assert_eq!((14, 0, 0), crate::tables::UNICODE_VERSION);
    }
}
