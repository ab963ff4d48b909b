use smallvec::SmallVec;
use std::fmt;

/// The raw code units (or the rejected scalar value) attached to an [`EncodingError`].
pub type RawUnits = SmallVec<[u32; 4]>;

/// A malformed code-unit sequence met while decoding, or a value that is not a
/// Unicode scalar value handed to an encoder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {encoding} input at offset {offset}: [{}]", HexUnits(.units))]
pub struct EncodingError {
    encoding: &'static str,
    offset: usize,
    units: RawUnits,
}

impl EncodingError {
    pub(crate) fn new(encoding: &'static str, offset: usize, units: RawUnits) -> Self {
        EncodingError {
            encoding,
            offset,
            units,
        }
    }

    pub(crate) fn from_units<U: Copy + Into<u32>>(
        encoding: &'static str,
        offset: usize,
        units: &[U],
    ) -> Self {
        Self::new(encoding, offset, units.iter().map(|&u| u.into()).collect())
    }

    /// Name of the encoding that rejected the input, e.g. `"UTF-8"`.
    pub fn encoding(&self) -> &'static str {
        self.encoding
    }

    /// Offset of the failure. For decoding this is counted in code units from
    /// the start of the buffer; for encoding it is the index of the rejected
    /// scalar in the input stream.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The offending code units, widened to `u32`.
    pub fn units(&self) -> &[u32] {
        &self.units
    }
}

struct HexUnits<'a>(&'a RawUnits);

impl fmt::Display for HexUnits<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, unit) in self.0.iter().enumerate() {
            if idx != 0 {
                write!(f, " ")?;
            }
            write!(f, "{:#x}", unit)?;
        }
        Ok(())
    }
}

/// A violation of the ordering invariants of a property table, detected when
/// the table is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The key at `index` is not strictly greater than the key before it.
    #[error("table key {key:#x} at index {index} is not strictly increasing")]
    Unsorted {
        /// Position of the offending entry.
        index: usize,
        /// The offending key, widened to `u64`.
        key: u64,
    },
    /// A range whose start lies after its end.
    #[error("range {start:#x}..={end:#x} is empty")]
    InvalidRange {
        /// First scalar of the range.
        start: u32,
        /// Last scalar of the range.
        end: u32,
    },
    /// A range that starts at or before the end of the range preceding it.
    #[error("range at index {index} overlaps the previous range")]
    OverlappingRange {
        /// Position of the offending range.
        index: usize,
    },
    /// An expansion that does not fit the fixed capacity of an extended table.
    #[error("expansion for {key:#x} has {len} scalars, more than the maximum of {}", crate::table::MAX_EXPANSION)]
    ExpansionTooLong {
        /// The key of the offending entry.
        key: u32,
        /// Number of scalars in the rejected expansion.
        len: usize,
    },
    /// A slot of an extended table that reaches past the end of its pool.
    #[error("expansion for {key:#x} at {start}+{len} lies outside a pool of {pool} scalars")]
    SlotOutOfBounds {
        /// The key of the offending entry.
        key: u32,
        /// First pool index of the slot.
        start: u32,
        /// Length of the slot.
        len: u8,
        /// Size of the pool.
        pool: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::{EncodingError, TableError};
    use smallvec::smallvec;

    #[test]
    fn test_encoding_error_display() {
        let err = EncodingError::new("UTF-8", 3, smallvec![0xe2, 0x28]);
        assert_eq!("invalid UTF-8 input at offset 3: [0xe2 0x28]", err.to_string());
        assert_eq!(3, err.offset());
        assert_eq!("UTF-8", err.encoding());
        assert_eq!(&[0xe2, 0x28], err.units());
    }

    #[test]
    fn test_table_error_display() {
        let err = TableError::Unsorted { index: 2, key: 0x41 };
        assert_eq!(
            "table key 0x41 at index 2 is not strictly increasing",
            err.to_string()
        );
        let err = TableError::ExpansionTooLong { key: 0xfdfa, len: 19 };
        assert_eq!(
            "expansion for 0xfdfa has 19 scalars, more than the maximum of 18",
            err.to_string()
        );
        let err = TableError::SlotOutOfBounds { key: 0x41, start: 4, len: 2, pool: 5 };
        assert_eq!(
            "expansion for 0x41 at 4+2 lies outside a pool of 5 scalars",
            err.to_string()
        );
    }
}
