//! Per-character properties.
//!
//! Every function here is total: it accepts any `u32`, including unassigned
//! code points, surrogates and values above U+10FFFF, and resolves misses to
//! the property's default value.

use crate::{
    table::{Lookup, SparseTable},
    tables,
};

/// The Unicode General_Category property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeneralCategory {
    /// `Lu`
    UppercaseLetter,
    /// `Ll`
    LowercaseLetter,
    /// `Lt`
    TitlecaseLetter,
    /// `Lm`
    ModifierLetter,
    /// `Lo`
    OtherLetter,
    /// `Mn`
    NonspacingMark,
    /// `Mc`
    SpacingMark,
    /// `Me`
    EnclosingMark,
    /// `Nd`
    DecimalNumber,
    /// `Nl`
    LetterNumber,
    /// `No`
    OtherNumber,
    /// `Pc`
    ConnectorPunctuation,
    /// `Pd`
    DashPunctuation,
    /// `Ps`
    OpenPunctuation,
    /// `Pe`
    ClosePunctuation,
    /// `Pi`
    InitialPunctuation,
    /// `Pf`
    FinalPunctuation,
    /// `Po`
    OtherPunctuation,
    /// `Sm`
    MathSymbol,
    /// `Sc`
    CurrencySymbol,
    /// `Sk`
    ModifierSymbol,
    /// `So`
    OtherSymbol,
    /// `Zs`
    SpaceSeparator,
    /// `Zl`
    LineSeparator,
    /// `Zp`
    ParagraphSeparator,
    /// `Cc`
    Control,
    /// `Cf`
    Format,
    /// `Cs`
    Surrogate,
    /// `Co`
    PrivateUse,
    /// `Cn`
    Unassigned,
}

impl GeneralCategory {
    /// The two-letter property value alias, e.g. `"Lu"`.
    pub fn abbr(self) -> &'static str {
        use GeneralCategory::*;
        match self {
            UppercaseLetter => "Lu",
            LowercaseLetter => "Ll",
            TitlecaseLetter => "Lt",
            ModifierLetter => "Lm",
            OtherLetter => "Lo",
            NonspacingMark => "Mn",
            SpacingMark => "Mc",
            EnclosingMark => "Me",
            DecimalNumber => "Nd",
            LetterNumber => "Nl",
            OtherNumber => "No",
            ConnectorPunctuation => "Pc",
            DashPunctuation => "Pd",
            OpenPunctuation => "Ps",
            ClosePunctuation => "Pe",
            InitialPunctuation => "Pi",
            FinalPunctuation => "Pf",
            OtherPunctuation => "Po",
            MathSymbol => "Sm",
            CurrencySymbol => "Sc",
            ModifierSymbol => "Sk",
            OtherSymbol => "So",
            SpaceSeparator => "Zs",
            LineSeparator => "Zl",
            ParagraphSeparator => "Zp",
            Control => "Cc",
            Format => "Cf",
            Surrogate => "Cs",
            PrivateUse => "Co",
            Unassigned => "Cn",
        }
    }

    /// `L*`
    pub fn is_letter(self) -> bool {
        matches!(self.abbr().as_bytes(), [b'L', _])
    }

    /// `M*`
    pub fn is_mark(self) -> bool {
        matches!(self.abbr().as_bytes(), [b'M', _])
    }

    /// `N*`
    pub fn is_number(self) -> bool {
        matches!(self.abbr().as_bytes(), [b'N', _])
    }

    /// `P*`
    pub fn is_punctuation(self) -> bool {
        matches!(self.abbr().as_bytes(), [b'P', _])
    }

    /// `S*`
    pub fn is_symbol(self) -> bool {
        matches!(self.abbr().as_bytes(), [b'S', _])
    }

    /// `Z*`
    pub fn is_separator(self) -> bool {
        matches!(self.abbr().as_bytes(), [b'Z', _])
    }

    /// `C*`
    pub fn is_other(self) -> bool {
        matches!(self.abbr().as_bytes(), [b'C', _])
    }
}

/// The Unicode Bidi_Class property. Classification only; no reordering.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BidiClass {
    /// Left-to-right
    L,
    /// Right-to-left
    R,
    /// Arabic letter
    AL,
    /// European number
    EN,
    /// European separator
    ES,
    /// European terminator
    ET,
    /// Arabic number
    AN,
    /// Common separator
    CS,
    /// Nonspacing mark
    NSM,
    /// Boundary neutral
    BN,
    /// Paragraph separator
    B,
    /// Segment separator
    S,
    /// Whitespace
    WS,
    /// Other neutral
    ON,
    /// Left-to-right embedding
    LRE,
    /// Left-to-right override
    LRO,
    /// Right-to-left embedding
    RLE,
    /// Right-to-left override
    RLO,
    /// Pop directional format
    PDF,
    /// Left-to-right isolate
    LRI,
    /// Right-to-left isolate
    RLI,
    /// First strong isolate
    FSI,
    /// Pop directional isolate
    PDI,
}

/// Letter case, as derived from the general category and the case mappings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Case {
    /// Uppercase, or lowercasable.
    Upper,
    /// Lowercase, or uppercasable.
    Lower,
    /// Titlecase digraphs such as `ǅ`.
    Title,
    /// No case.
    Uncased,
}

/// The Grapheme_Cluster_Break property, plus the synthetic text boundaries.
#[allow(clippy::upper_case_acronyms, missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GraphemeClusterBreak {
    Other,
    CR,
    LF,
    Control,
    Extend,
    ZWJ,
    RegionalIndicator,
    Prepend,
    SpacingMark,
    L,
    V,
    T,
    LV,
    LVT,
    ExtendedPictographic,
    /// Start of text. Never assigned to a character.
    Sot,
    /// End of text. Never assigned to a character.
    Eot,
}

/// The Word_Break property, plus the synthetic text boundaries.
#[allow(clippy::upper_case_acronyms, missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WordBreak {
    Other,
    CR,
    LF,
    Newline,
    Extend,
    ZWJ,
    RegionalIndicator,
    Format,
    Katakana,
    HebrewLetter,
    ALetter,
    SingleQuote,
    DoubleQuote,
    MidNumLet,
    MidLetter,
    MidNum,
    Numeric,
    ExtendNumLet,
    WSegSpace,
    ExtendedPictographic,
    /// Start of text. Never assigned to a character.
    Sot,
    /// End of text. Never assigned to a character.
    Eot,
}

/// The Sentence_Break property, plus the synthetic text boundaries.
#[allow(clippy::upper_case_acronyms, missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SentenceBreak {
    Other,
    CR,
    LF,
    Extend,
    Sep,
    Format,
    Sp,
    Lower,
    Upper,
    OLetter,
    Numeric,
    ATerm,
    SContinue,
    STerm,
    Close,
    /// Start of text. Never assigned to a character.
    Sot,
    /// End of text. Never assigned to a character.
    Eot,
}

/// The general category of `c`; [`GeneralCategory::Unassigned`] for anything unlisted.
pub fn general_category(c: u32) -> GeneralCategory {
    tables::general_category::TABLE.lookup(c)
}

/// The bidi class of `c`.
///
/// Unassigned code points take the default of the block they sit in: `R` in
/// the Hebrew and other right-to-left blocks, `AL` in the Arabic blocks, `ET`
/// in the currency symbols block, `BN` for noncharacters and default
/// ignorables, and `L` everywhere else.
pub fn bidi_class(c: u32) -> BidiClass {
    match general_category(c) {
        GeneralCategory::Unassigned => tables::bidi::DEFAULTS.lookup(c),
        _ => tables::bidi::TABLE.lookup(c),
    }
}

/// The canonical combining class of `c`; 0 for starters.
pub fn canonical_combining_class(c: u32) -> u8 {
    tables::combining_class::TABLE.lookup(c)
}

/// Whether `c` has the Bidi_Mirrored property.
pub fn is_mirrored(c: u32) -> bool {
    tables::combining_class::MIRRORED.contains(c)
}

/// The case of `c`.
pub fn case_of(c: u32) -> Case {
    match general_category(c) {
        GeneralCategory::UppercaseLetter => Case::Upper,
        GeneralCategory::LowercaseLetter => Case::Lower,
        GeneralCategory::TitlecaseLetter => Case::Title,
        _ if tables::case::SIMPLE_LOWER.get(c).is_some() => Case::Upper,
        _ if tables::case::SIMPLE_UPPER.get(c).is_some() => Case::Lower,
        _ => Case::Uncased,
    }
}

/// The grapheme cluster break class of `c`.
pub fn grapheme_cluster_break(c: u32) -> GraphemeClusterBreak {
    tables::grapheme::TABLE.lookup(c)
}

/// The word break class of `c`.
pub fn word_break(c: u32) -> WordBreak {
    tables::word::TABLE.lookup(c)
}

/// The sentence break class of `c`.
pub fn sentence_break(c: u32) -> SentenceBreak {
    tables::sentence::TABLE.lookup(c)
}

/// Looks up `c` in a sparse table, for callers bringing their own property data.
pub fn classify_with<V: Copy>(table: &SparseTable<V>, c: u32) -> V {
    table.lookup(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::{is_scalar_value, MAX_SCALAR};
    use test_case::test_case;

    #[test_case('A', GeneralCategory::UppercaseLetter)]
    #[test_case('a', GeneralCategory::LowercaseLetter)]
    #[test_case('ǅ', GeneralCategory::TitlecaseLetter)]
    #[test_case('\u{301}', GeneralCategory::NonspacingMark)]
    #[test_case('7', GeneralCategory::DecimalNumber)]
    #[test_case('-', GeneralCategory::DashPunctuation)]
    #[test_case('€', GeneralCategory::CurrencySymbol)]
    #[test_case(' ', GeneralCategory::SpaceSeparator)]
    #[test_case('\n', GeneralCategory::Control)]
    #[test_case('\u{200D}', GeneralCategory::Format)]
    #[test_case('\u{E000}', GeneralCategory::PrivateUse)]
    #[test_case('世', GeneralCategory::OtherLetter)]
    fn test_general_category(c: char, expected: GeneralCategory) {
        assert_eq!(expected, general_category(c as u32));
    }

    #[test]
    fn test_general_category_of_unassigned_and_surrogates() {
        assert_eq!(GeneralCategory::Unassigned, general_category(0x0378));
        assert_eq!(GeneralCategory::Unassigned, general_category(0x10FFFF + 1));
        assert_eq!(GeneralCategory::Surrogate, general_category(0xD800));
        assert_eq!("Cn", GeneralCategory::Unassigned.abbr());
        assert!(GeneralCategory::TitlecaseLetter.is_letter());
        assert!(GeneralCategory::EnclosingMark.is_mark());
        assert!(!GeneralCategory::MathSymbol.is_punctuation());
    }

    #[test]
    fn test_bidi_classes() {
        assert_eq!(BidiClass::L, bidi_class('a' as u32));
        assert_eq!(BidiClass::R, bidi_class(0x05D0));
        assert_eq!(BidiClass::AL, bidi_class(0x0627));
        assert_eq!(BidiClass::EN, bidi_class('1' as u32));
        assert_eq!(BidiClass::AN, bidi_class(0x0661));
        assert_eq!(BidiClass::WS, bidi_class(' ' as u32));
        assert_eq!(BidiClass::B, bidi_class('\n' as u32));
        assert_eq!(BidiClass::NSM, bidi_class(0x0301));
        assert_eq!(BidiClass::ON, bidi_class('!' as u32));
    }

    #[test]
    fn test_bidi_defaults_for_unassigned() {
        // Unassigned points inside the Hebrew and Arabic blocks.
        assert_eq!(BidiClass::R, bidi_class(0x05FF));
        assert_eq!(BidiClass::AL, bidi_class(0x07BF));
        assert_eq!(BidiClass::ET, bidi_class(0x20CF));
        assert_eq!(BidiClass::BN, bidi_class(0xFDD0));
        assert_eq!(BidiClass::L, bidi_class(0x0378));
    }

    #[test]
    fn test_combining_class_and_mirroring() {
        assert_eq!(0, canonical_combining_class('a' as u32));
        assert_eq!(230, canonical_combining_class(0x0301));
        assert_eq!(220, canonical_combining_class(0x0316));
        assert!(is_mirrored('(' as u32));
        assert!(!is_mirrored('a' as u32));
    }

    #[test]
    fn test_case_of() {
        assert_eq!(Case::Upper, case_of('Q' as u32));
        assert_eq!(Case::Lower, case_of('q' as u32));
        assert_eq!(Case::Title, case_of('ǅ' as u32));
        assert_eq!(Case::Uncased, case_of('7' as u32));
        assert_eq!(Case::Upper, case_of(0x24B6));
    }

    #[test]
    fn test_break_classes() {
        assert_eq!(GraphemeClusterBreak::LV, grapheme_cluster_break(0xAC00));
        assert_eq!(GraphemeClusterBreak::Extend, grapheme_cluster_break(0x0301));
        assert_eq!(GraphemeClusterBreak::ZWJ, grapheme_cluster_break(0x200D));
        assert_eq!(GraphemeClusterBreak::RegionalIndicator, grapheme_cluster_break(0x1F1E6));
        assert_eq!(GraphemeClusterBreak::ExtendedPictographic, grapheme_cluster_break(0x1F600));
        assert_eq!(WordBreak::ALetter, word_break('a' as u32));
        assert_eq!(WordBreak::SingleQuote, word_break('\'' as u32));
        assert_eq!(WordBreak::MidNumLet, word_break('.' as u32));
        assert_eq!(WordBreak::MidLetter, word_break(':' as u32));
        assert_eq!(WordBreak::MidNum, word_break(',' as u32));
        assert_eq!(WordBreak::Other, word_break('-' as u32));
        assert_eq!(WordBreak::Katakana, word_break(0x30A2));
        assert_eq!(WordBreak::HebrewLetter, word_break(0x05D0));
        assert_eq!(SentenceBreak::Lower, sentence_break('a' as u32));
        assert_eq!(SentenceBreak::Upper, sentence_break('A' as u32));
        assert_eq!(SentenceBreak::ATerm, sentence_break('.' as u32));
        assert_eq!(SentenceBreak::STerm, sentence_break('?' as u32));
        assert_eq!(SentenceBreak::Close, sentence_break('"' as u32));
        assert_eq!(SentenceBreak::SContinue, sentence_break('-' as u32));
        assert_eq!(SentenceBreak::Sp, sentence_break(' ' as u32));
    }

    #[test]
    fn test_classification_is_total() {
        let mut unassigned = 0;
        for c in (0..=MAX_SCALAR).filter(|&c| is_scalar_value(c)) {
            if general_category(c) == GeneralCategory::Unassigned {
                unassigned += 1;
                assert_eq!(tables::bidi::DEFAULTS.lookup(c), bidi_class(c), "{:#x}", c);
                assert_eq!(0, canonical_combining_class(c), "{:#x}", c);
                assert_eq!(Case::Uncased, case_of(c), "{:#x}", c);
                assert!(!is_mirrored(c), "{:#x}", c);
            } else {
                assert_eq!(tables::bidi::TABLE.lookup(c), bidi_class(c), "{:#x}", c);
            }
            assert!(
                !matches!(
                    grapheme_cluster_break(c),
                    GraphemeClusterBreak::Sot | GraphemeClusterBreak::Eot
                ),
                "{:#x}",
                c
            );
            assert!(!matches!(word_break(c), WordBreak::Sot | WordBreak::Eot), "{:#x}", c);
            assert!(
                !matches!(sentence_break(c), SentenceBreak::Sot | SentenceBreak::Eot),
                "{:#x}",
                c
            );
        }
        // Noncharacters are unassigned and take BN.
        assert_eq!(BidiClass::BN, bidi_class(0xFFFF));
        assert!(unassigned > 800_000, "{}", unassigned);
    }
}
