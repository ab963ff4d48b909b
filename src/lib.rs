#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]
//! Unicode text primitives: property tables, UTF codecs and text segmentation.
//!
//! # Property tables
//!
//! Character properties are stored in sorted, read-only tables compiled into
//! the binary (see [`ExactTable`], [`SparseTable`], [`SparseSet`] and
//! [`ExtendedTable`]). Lookups never fail; a code point the data does not
//! mention gets the property's default value. The data corresponds to
//! [`UNICODE_VERSION`].
//!
//! # Codecs
//!
//! [`Utf8`], [`Utf16`] and [`Utf32`] implement [`Encoding`]. A
//! [`CodepointIter`] walks a buffer of code units in either direction and a
//! [`CodepointWriter`] appends encoded scalars to a `Vec`. Malformed input is
//! handled by an [`ErrorPolicy`] chosen as a type parameter:
//!
//! * [`Ignore`] trusts the input and skips validation where it can.
//! * [`Replace`] substitutes U+FFFD for each malformed sequence.
//! * [`Strict`] reports an [`EncodingError`].
//!
//! ```
//! use unitext::{decode_utf8_lossy, CodepointIter, Strict, Utf8};
//!
//! assert_eq!("a\u{FFFD}b", decode_utf8_lossy(b"a\xFFb"));
//!
//! let mut chars = CodepointIter::<Utf8, Strict>::new(b"a\xFFb");
//! assert_eq!(Some(Ok(0x61)), chars.next());
//! assert_eq!(1, chars.next().unwrap().unwrap_err().offset());
//! ```
//!
//! # Segmentation
//!
//! Extended grapheme clusters, words and sentences are found with the rules
//! of UAX #29. The boundary engine ([`find_boundary`]) works on a buffer of
//! break classes and reports when it needs to see further ahead; the
//! [`Segments`] iterator grows its lookahead buffer until it can decide.
//!
//! ```
//! let words: Vec<&str> = unitext::words("can't stop").collect();
//! assert_eq!(vec!["can't", " ", "stop"], words);
//! ```

pub(crate) mod tables;

pub(crate) mod error;

pub(crate) mod table;

pub(crate) mod scalar;

pub(crate) mod codec;

pub(crate) mod utf8;

pub(crate) mod utf16;

pub(crate) mod utf32;

pub(crate) mod policy;

pub(crate) mod codepoint_iter;

pub(crate) mod codepoint_writer;

pub(crate) mod char_props;

pub(crate) mod case_mapping;

pub(crate) mod decomposition;

pub(crate) mod segment;

pub(crate) mod grapheme;

pub(crate) mod word;

pub(crate) mod sentence;

pub(crate) mod segments;

#[cfg(feature = "serde")]
mod serde_impls;

pub use tables::UNICODE_VERSION;

pub use error::{EncodingError, RawUnits, TableError};

pub use table::{
    lookup_exact, lookup_extended, lookup_sparse, lookup_sparse_set_membership, ExactTable,
    Expansion, ExtendedTable, Lookup, Slot, SparseSet, SparseTable, MAX_EXPANSION,
};

pub use scalar::{
    is_high_surrogate, is_low_surrogate, is_scalar_value, is_surrogate, MAX_SCALAR,
    REPLACEMENT_CHARACTER,
};

pub use codec::{Decoded, Encoding};

pub use utf16::Utf16;
pub use utf32::Utf32;
pub use utf8::Utf8;

pub use policy::{ErrorPolicy, Ignore, Replace, Strict};

pub use codepoint_iter::{decode_utf16_lossy, decode_utf8_lossy, validate, CodepointIter, Scalars};

pub use codepoint_writer::{recode, CodepointWriter};

pub use char_props::{
    bidi_class, canonical_combining_class, case_of, classify_with, general_category,
    grapheme_cluster_break, is_mirrored, sentence_break, word_break, BidiClass, Case,
    GeneralCategory, GraphemeClusterBreak, SentenceBreak, WordBreak,
};

pub use case_mapping::{
    fold_full, fold_simple, to_lower_full, to_lower_simple, to_title_full, to_title_simple,
    to_upper_full, to_upper_simple,
};

pub use decomposition::{
    canonical_composition, canonical_decomposition, compatibility_decomposition,
};

pub use segment::{find_boundary, verdict_at, BreakClass, Rule, Segmentation, Verdict, Window};

pub use grapheme::{GraphemeContext, Graphemes};

pub use sentence::{SentenceContext, Sentences, Terminator};

pub use word::{WordContext, Words};

pub use segments::{graphemes, sentences, words, Segments, StrSegments, DEFAULT_WINDOW};
