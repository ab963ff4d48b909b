//! Single-step canonical and compatibility decomposition, and pairwise
//! canonical composition. Full normalization is built elsewhere on top of these.

use crate::{
    table::{ExactTable, Expansion, Lookup},
    tables::decomposition::{CANONICAL, COMPATIBILITY, COMPOSITION_EXCLUSIONS},
};
use once_cell::sync::Lazy;
use smallvec::smallvec;

const S_BASE: u32 = 0xAC00;
const L_BASE: u32 = 0x1100;
const V_BASE: u32 = 0x1161;
const T_BASE: u32 = 0x11A7;
const L_COUNT: u32 = 19;
const V_COUNT: u32 = 21;
const T_COUNT: u32 = 28;
const N_COUNT: u32 = V_COUNT * T_COUNT;
const S_COUNT: u32 = L_COUNT * N_COUNT;

/// Splits a precomposed Hangul syllable into `LV, T` or `L, V`.
fn decompose_hangul(c: u32) -> Option<Expansion> {
    let s_index = c.checked_sub(S_BASE).filter(|&idx| idx < S_COUNT)?;
    let t_index = s_index % T_COUNT;
    if t_index != 0 {
        Some(smallvec![c - t_index, T_BASE + t_index])
    } else {
        let l = L_BASE + s_index / N_COUNT;
        let v = V_BASE + (s_index % N_COUNT) / T_COUNT;
        Some(smallvec![l, v])
    }
}

fn compose_hangul(a: u32, b: u32) -> Option<u32> {
    if (L_BASE..L_BASE + L_COUNT).contains(&a) && (V_BASE..V_BASE + V_COUNT).contains(&b) {
        let lv_index = (a - L_BASE) * N_COUNT + (b - V_BASE) * T_COUNT;
        return Some(S_BASE + lv_index);
    }
    let s_index = a.checked_sub(S_BASE).filter(|&idx| idx < S_COUNT)?;
    if s_index % T_COUNT == 0 && (T_BASE + 1..T_BASE + T_COUNT).contains(&b) {
        return Some(a + (b - T_BASE));
    }
    None
}

/// The canonical decomposition of `c`, one step deep; empty when `c` has none.
pub fn canonical_decomposition(c: u32) -> Expansion {
    decompose_hangul(c).unwrap_or_else(|| CANONICAL.lookup(c))
}

/// The compatibility decomposition of `c`, one step deep. Characters without
/// a compatibility mapping use their canonical one; empty when both are absent.
pub fn compatibility_decomposition(c: u32) -> Expansion {
    match COMPATIBILITY.get(c) {
        Some(expansion) => Expansion::from_slice(expansion),
        None => canonical_decomposition(c),
    }
}

/// Pairs `(a, b)` packed into one key, mapped to their primary composite.
static COMPOSITION: Lazy<ExactTable<u32, u64>> = Lazy::new(|| {
    let mut pairs: Vec<(u64, u32)> = CANONICAL
        .iter()
        .filter(|&(composite, _)| !COMPOSITION_EXCLUSIONS.contains(composite))
        .filter_map(|(composite, expansion)| match *expansion {
            [a, b] => Some((pair_key(a, b), composite)),
            _ => None,
        })
        .collect();
    pairs.sort_unstable_by_key(|&(key, _)| key);
    pairs.dedup_by_key(|&mut (key, _)| key);
    log::trace!("built canonical composition table with {} pairs", pairs.len());
    ExactTable::from_sorted(pairs, 0)
});

#[inline]
fn pair_key(a: u32, b: u32) -> u64 {
    ((a as u64) << 21) | b as u64
}

/// The primary composite of `a` followed by `b`, if one exists.
///
/// Characters excluded from composition never result, so composing the
/// canonical decomposition of an excluded character does not restore it.
pub fn canonical_composition(a: u32, b: u32) -> Option<u32> {
    compose_hangul(a, b).or_else(|| COMPOSITION.get(pair_key(a, b)).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_decomposition() {
        assert_eq!(&[0x65, 0x301], &canonical_decomposition(0xE9)[..]);
        assert!(canonical_decomposition('a' as u32).is_empty());
        // Singleton decomposition: ANGSTROM SIGN to A WITH RING ABOVE.
        assert_eq!(&[0xC5], &canonical_decomposition(0x212B)[..]);
        // One step only: U+1E08 decomposes to U+00C7 U+0301, not further.
        assert_eq!(&[0xC7, 0x301], &canonical_decomposition(0x1E08)[..]);
    }

    #[test]
    fn test_hangul_decomposition() {
        assert_eq!(&[0x1100, 0x1161], &canonical_decomposition(0xAC00)[..]);
        assert_eq!(&[0xAC00, 0x11A8], &canonical_decomposition(0xAC01)[..]);
        // Last syllable: T index 27, so the LV part is 27 below it.
        assert_eq!(&[0xD788, 0x11C2], &canonical_decomposition(0xD7A3)[..]);
        assert!(canonical_decomposition(0xD7A4).is_empty());
    }

    #[test]
    fn test_compatibility_decomposition() {
        assert_eq!(&[0x66, 0x66, 0x69], &compatibility_decomposition(0xFB03)[..]);
        assert_eq!(&[0x20], &compatibility_decomposition(0xA0)[..]);
        assert_eq!(&[0x65, 0x301], &compatibility_decomposition(0xE9)[..]);
        assert_eq!(18, compatibility_decomposition(0xFDFA).len());
        assert!(compatibility_decomposition('x' as u32).is_empty());
    }

    #[test]
    fn test_canonical_composition() {
        assert_eq!(Some(0xE9), canonical_composition(0x65, 0x301));
        assert_eq!(Some(0x1E08), canonical_composition(0xC7, 0x301));
        assert_eq!(None, canonical_composition(0x65, 0x65));
        // ANGSTROM SIGN is a singleton and never composes.
        assert_eq!(Some(0xC5), canonical_composition('A' as u32, 0x30A));
        // U+0958 is a composition exclusion.
        assert_eq!(None, canonical_composition(0x915, 0x93C));
    }

    #[test]
    fn test_composition_table_holds_every_primary_pair() {
        assert_eq!(941, COMPOSITION.len());
        assert_eq!(Ok(()), COMPOSITION.check());
    }

    #[test]
    fn test_hangul_composition() {
        assert_eq!(Some(0xAC00), canonical_composition(0x1100, 0x1161));
        assert_eq!(Some(0xAC01), canonical_composition(0xAC00, 0x11A8));
        assert_eq!(None, canonical_composition(0xAC01, 0x11A8));
        assert_eq!(None, canonical_composition(0xAC00, 0x11A7));
    }

    #[test]
    fn test_decompose_then_compose_round_trips() {
        for c in [0xE9, 0x1E08, 0xAC01, 0xD4DB, 0x1F80] {
            let parts = canonical_decomposition(c);
            assert_eq!(2, parts.len());
            assert_eq!(Some(c), canonical_composition(parts[0], parts[1]));
        }
    }
}
