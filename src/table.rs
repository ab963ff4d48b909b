//! Read-only lookup structures over sorted `(key, value)` data.
//!
//! Four kinds of table share one shape, a slice of entries ordered by key with
//! no duplicate keys, and differ only in what a lookup means:
//!
//! * [`ExactTable`]: the value stored for exactly this key.
//! * [`SparseTable`]: each entry starts a run; the value of the greatest key
//!   not above the query applies.
//! * [`SparseSet`]: membership in a list of closed, non-overlapping ranges.
//! * [`ExtendedTable`]: a short sequence of scalars per key, for one-to-many
//!   mappings such as full case mapping and decomposition.
//!
//! A miss is never an error: every lookup resolves to the table's default (or
//! a caller-supplied fallback), so property functions built on top of these
//! tables are total.

use crate::error::TableError;
use smallvec::SmallVec;
use std::{fmt, ops::Deref};

/// The widest expansion any extended table may store.
pub const MAX_EXPANSION: usize = 18;

/// The result of an extended-table lookup.
pub type Expansion = SmallVec<[u32; MAX_EXPANSION]>;

/// Entries are either compiled into the binary or loaded at runtime.
enum Storage<T: 'static> {
    Static(&'static [T]),
    Owned(Box<[T]>),
}

impl<T> Deref for Storage<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        match self {
            Storage::Static(entries) => entries,
            Storage::Owned(entries) => entries,
        }
    }
}

/// Locates `key`: `Ok` with its index, or `Err` with the insertion point.
///
/// This is the only binary search in the crate; every table kind goes through it.
#[inline]
fn search<K: Ord + Copy, V>(entries: &[(K, V)], key: K) -> Result<usize, usize> {
    entries.binary_search_by(|(k, _)| k.cmp(&key))
}

/// Index of the entry with the greatest key `<= key`.
#[inline]
fn floor<K: Ord + Copy, V>(entries: &[(K, V)], key: K) -> Option<usize> {
    match search(entries, key) {
        Ok(idx) => Some(idx),
        Err(0) => None,
        Err(idx) => Some(idx - 1),
    }
}

fn reject(err: TableError) -> TableError {
    log::debug!("rejecting property table: {}", err);
    err
}

fn check_sorted<K: Ord + Copy + Into<u64>, V>(entries: &[(K, V)]) -> Result<(), TableError> {
    for (index, pair) in entries.windows(2).enumerate() {
        if pair[1].0 <= pair[0].0 {
            return Err(reject(TableError::Unsorted {
                index: index + 1,
                key: pair[1].0.into(),
            }));
        }
    }
    Ok(())
}

/// Uniform access to a table: resolve a key to the table's notion of a value.
pub trait Lookup<K = u32> {
    /// What a lookup produces.
    type Output;

    /// Resolves `key`, falling back to the table default on a miss.
    fn lookup(&self, key: K) -> Self::Output;
}

/// Binary search for key equality, with a default for absent keys.
pub struct ExactTable<V: 'static, K: 'static = u32> {
    entries: Storage<(K, V)>,
    default: V,
}

impl<V, K> ExactTable<V, K> {
    /// Wraps compiled data. The entries must be sorted by strictly increasing key;
    /// this is checked by [`ExactTable::check`] in the crate's tests, not at runtime.
    pub const fn from_static(entries: &'static [(K, V)], default: V) -> Self {
        ExactTable {
            entries: Storage::Static(entries),
            default,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The value returned for keys that have no entry.
    pub fn default_value(&self) -> &V {
        &self.default
    }

    /// The entries, in key order.
    pub fn entries(&self) -> &[(K, V)] {
        &self.entries
    }
}

impl<V, K: Ord + Copy + Into<u64>> ExactTable<V, K> {
    /// Builds a table from runtime data, rejecting unsorted or duplicate keys.
    pub fn new(entries: Vec<(K, V)>, default: V) -> Result<Self, TableError> {
        check_sorted(&entries)?;
        Ok(ExactTable {
            entries: Storage::Owned(entries.into_boxed_slice()),
            default,
        })
    }

    /// Wraps entries already sorted by strictly increasing key.
    pub(crate) fn from_sorted(entries: Vec<(K, V)>, default: V) -> Self {
        debug_assert!(check_sorted(&entries).is_ok());
        ExactTable {
            entries: Storage::Owned(entries.into_boxed_slice()),
            default,
        }
    }

    /// Verifies the ordering invariant.
    pub fn check(&self) -> Result<(), TableError> {
        check_sorted(&self.entries)
    }

    /// The value stored for `key`, if any.
    pub fn get(&self, key: K) -> Option<&V> {
        search(&self.entries, key)
            .ok()
            .map(|idx| &self.entries[idx].1)
    }
}

impl<V: Copy, K: Ord + Copy + Into<u64>> Lookup<K> for ExactTable<V, K> {
    type Output = V;

    fn lookup(&self, key: K) -> V {
        self.get(key).copied().unwrap_or(self.default)
    }
}

/// A range-compressed table: each entry marks the start of a run of equal values.
pub struct SparseTable<V: 'static> {
    entries: Storage<(u32, V)>,
    default: V,
}

impl<V> SparseTable<V> {
    /// Wraps compiled data. The run starts must be strictly increasing.
    pub const fn from_static(entries: &'static [(u32, V)], default: V) -> Self {
        SparseTable {
            entries: Storage::Static(entries),
            default,
        }
    }

    /// Builds a table from runtime data, rejecting unsorted or duplicate keys.
    pub fn new(entries: Vec<(u32, V)>, default: V) -> Result<Self, TableError> {
        check_sorted(&entries)?;
        Ok(SparseTable {
            entries: Storage::Owned(entries.into_boxed_slice()),
            default,
        })
    }

    /// Verifies the ordering invariant.
    pub fn check(&self) -> Result<(), TableError> {
        check_sorted(&self.entries)
    }

    /// Number of runs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no runs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The value for keys below the first run.
    pub fn default_value(&self) -> &V {
        &self.default
    }

    /// The run starts and their values, in key order.
    pub fn entries(&self) -> &[(u32, V)] {
        &self.entries
    }

    /// The value of the run containing `key`, or `None` before the first run.
    pub fn get(&self, key: u32) -> Option<&V> {
        floor(&self.entries, key).map(|idx| &self.entries[idx].1)
    }
}

impl<V: Copy> Lookup for SparseTable<V> {
    type Output = V;

    fn lookup(&self, key: u32) -> V {
        self.get(key).copied().unwrap_or(self.default)
    }
}

/// Boolean membership over closed ranges `(start, end)`.
pub struct SparseSet {
    ranges: Storage<(u32, u32)>,
}

impl SparseSet {
    /// Wraps compiled ranges. They must be non-empty, sorted and non-overlapping.
    pub const fn from_static(ranges: &'static [(u32, u32)]) -> Self {
        SparseSet {
            ranges: Storage::Static(ranges),
        }
    }

    /// Builds a set from runtime ranges, validating them.
    pub fn new(ranges: Vec<(u32, u32)>) -> Result<Self, TableError> {
        Self::check_ranges(&ranges)?;
        Ok(SparseSet {
            ranges: Storage::Owned(ranges.into_boxed_slice()),
        })
    }

    fn check_ranges(ranges: &[(u32, u32)]) -> Result<(), TableError> {
        for (index, &(start, end)) in ranges.iter().enumerate() {
            if start > end {
                return Err(reject(TableError::InvalidRange { start, end }));
            }
            if index > 0 && start <= ranges[index - 1].1 {
                return Err(reject(TableError::OverlappingRange { index }));
            }
        }
        Ok(())
    }

    /// Verifies the ordering invariant.
    pub fn check(&self) -> Result<(), TableError> {
        Self::check_ranges(&self.ranges)
    }

    /// Number of ranges.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns `true` if the set has no ranges.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// The ranges, in order.
    pub fn ranges(&self) -> &[(u32, u32)] {
        &self.ranges
    }

    /// Returns `true` if `key` falls in one of the ranges.
    pub fn contains(&self, key: u32) -> bool {
        match floor(&self.ranges, key) {
            Some(idx) => key <= self.ranges[idx].1,
            None => false,
        }
    }
}

impl Lookup for SparseSet {
    type Output = bool;

    fn lookup(&self, key: u32) -> bool {
        self.contains(key)
    }
}

/// Where the expansion of one key lives in an [`ExtendedTable`]'s pool.
///
/// A zero-length slot means "no entry".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Slot {
    start: u32,
    len: u8,
}

impl Slot {
    /// A slot covering `len` scalars of the pool starting at `start`.
    pub const fn new(start: u32, len: u8) -> Self {
        Slot { start, len }
    }

    /// Returns `true` for the "no entry" slot.
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }
}

/// One-to-many mappings: each key owns a short run of scalars in a shared pool.
pub struct ExtendedTable {
    slots: Storage<(u32, Slot)>,
    pool: Storage<u32>,
}

impl ExtendedTable {
    /// Wraps compiled data.
    pub const fn from_static(slots: &'static [(u32, Slot)], pool: &'static [u32]) -> Self {
        ExtendedTable {
            slots: Storage::Static(slots),
            pool: Storage::Static(pool),
        }
    }

    /// Builds a table from runtime data, rejecting unsorted keys and
    /// expansions longer than [`MAX_EXPANSION`].
    pub fn new<I, S>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (u32, S)>,
        S: AsRef<[u32]>,
    {
        let mut slots = Vec::new();
        let mut pool = Vec::new();
        for (key, expansion) in entries {
            let expansion = expansion.as_ref();
            if expansion.len() > MAX_EXPANSION {
                return Err(reject(TableError::ExpansionTooLong {
                    key,
                    len: expansion.len(),
                }));
            }
            slots.push((key, Slot::new(pool.len() as u32, expansion.len() as u8)));
            pool.extend_from_slice(expansion);
        }
        check_sorted(&slots)?;
        Ok(ExtendedTable {
            slots: Storage::Owned(slots.into_boxed_slice()),
            pool: Storage::Owned(pool.into_boxed_slice()),
        })
    }

    /// Verifies the ordering invariant and that every slot lies inside the pool.
    pub fn check(&self) -> Result<(), TableError> {
        check_sorted(&self.slots)?;
        for &(key, slot) in self.slots.iter() {
            if slot.len as usize > MAX_EXPANSION {
                return Err(reject(TableError::ExpansionTooLong {
                    key,
                    len: slot.len as usize,
                }));
            }
            if slot.start as usize + slot.len as usize > self.pool.len() {
                return Err(reject(TableError::SlotOutOfBounds {
                    key,
                    start: slot.start,
                    len: slot.len,
                    pool: self.pool.len(),
                }));
            }
        }
        Ok(())
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the table has no keys.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn expansion(&self, slot: Slot) -> &[u32] {
        let start = slot.start as usize;
        &self.pool[start..start + slot.len as usize]
    }

    /// The stored expansion for `key`, borrowed from the pool.
    pub fn get(&self, key: u32) -> Option<&[u32]> {
        let idx = search(&self.slots, key).ok()?;
        let slot = self.slots[idx].1;
        if slot.is_empty() {
            None
        } else {
            Some(self.expansion(slot))
        }
    }

    /// The expansion for `key`; when there is none, a one-element result
    /// synthesized by `fallback`, or an empty result without one.
    pub fn lookup_with(&self, key: u32, fallback: Option<fn(u32) -> u32>) -> Expansion {
        match (self.get(key), fallback) {
            (Some(expansion), _) => Expansion::from_slice(expansion),
            (None, Some(fallback)) => smallvec::smallvec![fallback(key)],
            (None, None) => Expansion::new(),
        }
    }

    /// Iterates over every key and its expansion, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[u32])> + '_ {
        self.slots
            .iter()
            .filter(|(_, slot)| !slot.is_empty())
            .map(move |&(key, slot)| (key, self.expansion(slot)))
    }
}

impl Lookup for ExtendedTable {
    type Output = Expansion;

    fn lookup(&self, key: u32) -> Expansion {
        self.lookup_with(key, None)
    }
}

/// Resolves `key` in an exact-match table.
pub fn lookup_exact<V: Copy, K: Ord + Copy + Into<u64>>(table: &ExactTable<V, K>, key: K) -> V {
    table.lookup(key)
}

/// Resolves `key` in a range-compressed table.
pub fn lookup_sparse<V: Copy>(table: &SparseTable<V>, key: u32) -> V {
    table.lookup(key)
}

/// Tests `key` for membership in a range set.
pub fn lookup_sparse_set_membership(set: &SparseSet, key: u32) -> bool {
    set.contains(key)
}

/// Resolves `key` in an extended table, with an optional single-value fallback.
pub fn lookup_extended(
    table: &ExtendedTable,
    key: u32,
    fallback: Option<fn(u32) -> u32>,
) -> Expansion {
    table.lookup_with(key, fallback)
}

impl<V: fmt::Debug, K: fmt::Debug> fmt::Debug for ExactTable<V, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExactTable")
            .field("len", &self.entries.len())
            .field("default", &self.default)
            .finish()
    }
}

impl<V: fmt::Debug> fmt::Debug for SparseTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SparseTable")
            .field("len", &self.entries.len())
            .field("default", &self.default)
            .finish()
    }
}

impl fmt::Debug for SparseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SparseSet(")?;
        f.debug_list()
            .entries(self.ranges.iter().map(|&(start, end)| start..=end))
            .finish()?;
        write!(f, ")")
    }
}

impl fmt::Debug for ExtendedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedTable")
            .field("len", &self.slots.len())
            .field("pool", &self.pool.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables;

    #[test]
    fn test_sparse_lookup_takes_greatest_key_below() {
        let table = SparseTable::new(vec![(0, 'A'), (10, 'B'), (20, 'C')], '?').unwrap();
        assert_eq!('B', lookup_sparse(&table, 15));
        assert_eq!('A', lookup_sparse(&table, 0));
        assert_eq!('B', lookup_sparse(&table, 10));
        assert_eq!('A', lookup_sparse(&table, 9));
        assert_eq!('C', lookup_sparse(&table, 0x10FFFF));
    }

    #[test]
    fn test_sparse_lookup_before_first_run_uses_default() {
        let table = SparseTable::new(vec![(5, 1u8)], 0).unwrap();
        assert_eq!(0, table.lookup(4));
        assert_eq!(None, table.get(4));
        assert_eq!(1, table.lookup(5));
    }

    #[test]
    fn test_exact_lookup() {
        let table = ExactTable::new(vec![(1u32, 10u32), (3, 30), (7, 70)], 0).unwrap();
        assert_eq!(30, lookup_exact(&table, 3));
        assert_eq!(0, lookup_exact(&table, 4));
        assert_eq!(Some(&70), table.get(7));
        assert_eq!(None, table.get(8));
    }

    #[test]
    fn test_exact_lookup_with_wide_keys() {
        let table = ExactTable::new(vec![(1u64 << 40, 'x'), (1u64 << 41, 'y')], '-').unwrap();
        assert_eq!('y', table.lookup(1u64 << 41));
        assert_eq!('-', table.lookup(3));
    }

    #[test]
    fn test_sparse_set_membership() {
        let set = SparseSet::new(vec![(0x41, 0x5A), (0x61, 0x7A), (0x100, 0x100)]).unwrap();
        assert!(lookup_sparse_set_membership(&set, 0x41));
        assert!(lookup_sparse_set_membership(&set, 0x5A));
        assert!(!lookup_sparse_set_membership(&set, 0x5B));
        assert!(!lookup_sparse_set_membership(&set, 0x40));
        assert!(lookup_sparse_set_membership(&set, 0x100));
        assert!(!lookup_sparse_set_membership(&set, 0x101));
    }

    #[test]
    fn test_extended_lookup_and_fallback() {
        let table = ExtendedTable::new(vec![(0xDF, vec![0x53, 0x53]), (0x149, vec![0x2BC, 0x4E])])
            .unwrap();
        assert_eq!(&[0x53, 0x53], &lookup_extended(&table, 0xDF, None)[..]);
        assert!(lookup_extended(&table, 0x61, None).is_empty());
        fn upper_ascii(c: u32) -> u32 {
            c - 0x20
        }
        assert_eq!(&[0x41], &lookup_extended(&table, 0x61, Some(upper_ascii))[..]);
        let pairs: Vec<_> = table.iter().map(|(k, v)| (k, v.len())).collect();
        assert_eq!(vec![(0xDF, 2), (0x149, 2)], pairs);
    }

    #[test]
    fn test_construction_rejects_bad_order() {
        assert_eq!(
            Some(TableError::Unsorted { index: 2, key: 5 }),
            SparseTable::new(vec![(0, 0u8), (10, 1), (5, 2)], 0).err()
        );
        assert_eq!(
            Some(TableError::Unsorted { index: 1, key: 3 }),
            ExactTable::new(vec![(3u32, 0u8), (3, 1)], 0).err()
        );
        assert_eq!(
            Some(TableError::InvalidRange { start: 9, end: 2 }),
            SparseSet::new(vec![(9, 2)]).err()
        );
        assert_eq!(
            Some(TableError::OverlappingRange { index: 1 }),
            SparseSet::new(vec![(0, 9), (9, 12)]).err()
        );
        assert_eq!(
            Some(TableError::ExpansionTooLong { key: 1, len: 19 }),
            ExtendedTable::new(vec![(1, vec![0x20; 19])]).err()
        );
    }

    #[test]
    fn test_slot_outside_pool_is_rejected() {
        static SLOTS: [(u32, Slot); 2] = [(0x41, Slot::new(0, 1)), (0x42, Slot::new(1, 2))];
        let table = ExtendedTable::from_static(&SLOTS, &[0x61, 0x62]);
        assert_eq!(
            Err(TableError::SlotOutOfBounds {
                key: 0x42,
                start: 1,
                len: 2,
                pool: 2
            }),
            table.check()
        );
        static WIDE: [(u32, Slot); 1] = [(0x41, Slot::new(0, 19))];
        let table = ExtendedTable::from_static(&WIDE, &[0x20; 19]);
        assert_eq!(
            Err(TableError::ExpansionTooLong { key: 0x41, len: 19 }),
            table.check()
        );
    }

    #[test]
    fn test_compiled_tables_are_well_formed() {
        tables::general_category::TABLE.check().unwrap();
        tables::bidi::TABLE.check().unwrap();
        tables::bidi::DEFAULTS.check().unwrap();
        tables::combining_class::TABLE.check().unwrap();
        tables::combining_class::MIRRORED.check().unwrap();
        tables::case::SIMPLE_LOWER.check().unwrap();
        tables::case::SIMPLE_UPPER.check().unwrap();
        tables::case::SIMPLE_TITLE.check().unwrap();
        tables::case::SIMPLE_FOLD.check().unwrap();
        tables::case::FULL_LOWER.check().unwrap();
        tables::case::FULL_UPPER.check().unwrap();
        tables::case::FULL_TITLE.check().unwrap();
        tables::case::FULL_FOLD.check().unwrap();
        tables::decomposition::CANONICAL.check().unwrap();
        tables::decomposition::COMPATIBILITY.check().unwrap();
        tables::decomposition::COMPOSITION_EXCLUSIONS.check().unwrap();
        tables::grapheme::TABLE.check().unwrap();
        tables::word::TABLE.check().unwrap();
        tables::sentence::TABLE.check().unwrap();
        crate::scalar::SURROGATES.check().unwrap();
    }

    #[test]
    fn test_widest_compiled_expansion() {
        let widest = tables::decomposition::COMPATIBILITY
            .iter()
            .map(|(_, expansion)| expansion.len())
            .max();
        assert_eq!(Some(MAX_EXPANSION), widest);
    }
}
