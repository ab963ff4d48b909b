// NOTE: The following code was generated by "scripts/unicode.py", do not edit directly

#![allow(missing_docs, clippy::unreadable_literal)]

use crate::char_props::{
    BidiClass, GeneralCategory, GraphemeClusterBreak, SentenceBreak, WordBreak,
};

/// The version of Unicode that this crate's property data was generated from.
pub const UNICODE_VERSION: (u8, u8, u8) = (14, 0, 0);

pub(crate) mod general_category {
    use super::GeneralCategory::{self, *};
    use crate::table::SparseTable;

    pub(crate) static TABLE: SparseTable<GeneralCategory> = SparseTable::from_static(
        &[
            (0x0, Control), (0x20, SpaceSeparator), (0x21, OtherPunctuation), (0x24, CurrencySymbol),
            (0x25, OtherPunctuation), (0x28, OpenPunctuation), (0x29, ClosePunctuation), (0x2a, OtherPunctuation),
            (0x2b, MathSymbol), (0x2c, OtherPunctuation), (0x2d, DashPunctuation), (0x2e, OtherPunctuation),
            (0x30, DecimalNumber), (0x3a, OtherPunctuation), (0x3c, MathSymbol), (0x3f, OtherPunctuation),
            (0x41, UppercaseLetter), (0x5b, OpenPunctuation), (0x5c, OtherPunctuation), (0x5d, ClosePunctuation),
            (0x5e, ModifierSymbol), (0x5f, ConnectorPunctuation), (0x60, ModifierSymbol), (0x61, LowercaseLetter),
            (0x7b, OpenPunctuation), (0x7c, MathSymbol), (0x7d, ClosePunctuation), (0x7e, MathSymbol),
            (0x7f, Control), (0xa0, SpaceSeparator), (0xa1, OtherPunctuation), (0xa2, CurrencySymbol),
            (0xa6, OtherSymbol), (0xa7, OtherPunctuation), (0xa8, ModifierSymbol), (0xa9, OtherSymbol),
            (0xaa, OtherLetter), (0xab, InitialPunctuation), (0xac, MathSymbol), (0xad, Format),
            (0xae, OtherSymbol), (0xaf, ModifierSymbol), (0xb0, OtherSymbol), (0xb1, MathSymbol),
            (0xb2, OtherNumber), (0xb4, ModifierSymbol), (0xb5, LowercaseLetter), (0xb6, OtherPunctuation),
            (0xb8, ModifierSymbol), (0xb9, OtherNumber), (0xba, OtherLetter), (0xbb, FinalPunctuation),
            (0xbc, OtherNumber), (0xbf, OtherPunctuation), (0xc0, UppercaseLetter), (0xd7, MathSymbol),
            (0xd8, UppercaseLetter), (0xdf, LowercaseLetter), (0xf7, MathSymbol), (0xf8, LowercaseLetter),
            (0x100, UppercaseLetter), (0x101, LowercaseLetter), (0x102, UppercaseLetter), (0x103, LowercaseLetter),
            (0x104, UppercaseLetter), (0x105, LowercaseLetter), (0x106, UppercaseLetter), (0x107, LowercaseLetter),
            (0x108, UppercaseLetter), (0x109, LowercaseLetter), (0x10a, UppercaseLetter), (0x10b, LowercaseLetter),
            (0x10c, UppercaseLetter), (0x10d, LowercaseLetter), (0x10e, UppercaseLetter), (0x10f, LowercaseLetter),
            (0x110, UppercaseLetter), (0x111, LowercaseLetter), (0x112, UppercaseLetter), (0x113, LowercaseLetter),
            (0x114, UppercaseLetter), (0x115, LowercaseLetter), (0x116, UppercaseLetter), (0x117, LowercaseLetter),
            (0x118, UppercaseLetter), (0x119, LowercaseLetter), (0x11a, UppercaseLetter), (0x11b, LowercaseLetter),
            (0x11c, UppercaseLetter), (0x11d, LowercaseLetter), (0x11e, UppercaseLetter), (0x11f, LowercaseLetter),
            (0x120, UppercaseLetter), (0x121, LowercaseLetter), (0x122, UppercaseLetter), (0x123, LowercaseLetter),
            (0x124, UppercaseLetter), (0x125, LowercaseLetter), (0x126, UppercaseLetter), (0x127, LowercaseLetter),
            (0x128, UppercaseLetter), (0x129, LowercaseLetter), (0x12a, UppercaseLetter), (0x12b, LowercaseLetter),
            (0x12c, UppercaseLetter), (0x12d, LowercaseLetter), (0x12e, UppercaseLetter), (0x12f, LowercaseLetter),
            (0x130, UppercaseLetter), (0x131, LowercaseLetter), (0x132, UppercaseLetter), (0x133, LowercaseLetter),
            (0x134, UppercaseLetter), (0x135, LowercaseLetter), (0x136, UppercaseLetter), (0x137, LowercaseLetter),
            (0x139, UppercaseLetter), (0x13a, LowercaseLetter), (0x13b, UppercaseLetter), (0x13c, LowercaseLetter),
            (0x13d, UppercaseLetter), (0x13e, LowercaseLetter), (0x13f, UppercaseLetter), (0x140, LowercaseLetter),
            (0x141, UppercaseLetter), (0x142, LowercaseLetter), (0x143, UppercaseLetter), (0x144, LowercaseLetter),
            (0x145, UppercaseLetter), (0x146, LowercaseLetter), (0x147, UppercaseLetter), (0x148, LowercaseLetter),
            (0x14a, UppercaseLetter), (0x14b, LowercaseLetter), (0x14c, UppercaseLetter), (0x14d, LowercaseLetter),
            (0x14e, UppercaseLetter), (0x14f, LowercaseLetter), (0x150, UppercaseLetter), (0x151, LowercaseLetter),
            (0x152, UppercaseLetter), (0x153, LowercaseLetter), (0x154, UppercaseLetter), (0x155, LowercaseLetter),
            (0x156, UppercaseLetter), (0x157, LowercaseLetter), (0x158, UppercaseLetter), (0x159, LowercaseLetter),
            (0x15a, UppercaseLetter), (0x15b, LowercaseLetter), (0x15c, UppercaseLetter), (0x15d, LowercaseLetter),
            (0x15e, UppercaseLetter), (0x15f, LowercaseLetter), (0x160, UppercaseLetter), (0x161, LowercaseLetter),
            (0x162, UppercaseLetter), (0x163, LowercaseLetter), (0x164, UppercaseLetter), (0x165, LowercaseLetter),
            (0x166, UppercaseLetter), (0x167, LowercaseLetter), (0x168, UppercaseLetter), (0x169, LowercaseLetter),
            (0x16a, UppercaseLetter), (0x16b, LowercaseLetter), (0x16c, UppercaseLetter), (0x16d, LowercaseLetter),
            (0x16e, UppercaseLetter), (0x16f, LowercaseLetter), (0x170, UppercaseLetter), (0x171, LowercaseLetter),
            (0x172, UppercaseLetter), (0x173, LowercaseLetter), (0x174, UppercaseLetter), (0x175, LowercaseLetter),
            (0x176, UppercaseLetter), (0x177, LowercaseLetter), (0x178, UppercaseLetter), (0x17a, LowercaseLetter),
            (0x17b, UppercaseLetter), (0x17c, LowercaseLetter), (0x17d, UppercaseLetter), (0x17e, LowercaseLetter),
            (0x181, UppercaseLetter), (0x183, LowercaseLetter), (0x184, UppercaseLetter), (0x185, LowercaseLetter),
            (0x186, UppercaseLetter), (0x188, LowercaseLetter), (0x189, UppercaseLetter), (0x18c, LowercaseLetter),
            (0x18e, UppercaseLetter), (0x192, LowercaseLetter), (0x193, UppercaseLetter), (0x195, LowercaseLetter),
            (0x196, UppercaseLetter), (0x199, LowercaseLetter), (0x19c, UppercaseLetter), (0x19e, LowercaseLetter),
            (0x19f, UppercaseLetter), (0x1a1, LowercaseLetter), (0x1a2, UppercaseLetter), (0x1a3, LowercaseLetter),
            (0x1a4, UppercaseLetter), (0x1a5, LowercaseLetter), (0x1a6, UppercaseLetter), (0x1a8, LowercaseLetter),
            (0x1a9, UppercaseLetter), (0x1aa, LowercaseLetter), (0x1ac, UppercaseLetter), (0x1ad, LowercaseLetter),
            (0x1ae, UppercaseLetter), (0x1b0, LowercaseLetter), (0x1b1, UppercaseLetter), (0x1b4, LowercaseLetter),
            (0x1b5, UppercaseLetter), (0x1b6, LowercaseLetter), (0x1b7, UppercaseLetter), (0x1b9, LowercaseLetter),
            (0x1bb, OtherLetter), (0x1bc, UppercaseLetter), (0x1bd, LowercaseLetter), (0x1c0, OtherLetter),
            (0x1c4, UppercaseLetter), (0x1c5, TitlecaseLetter), (0x1c6, LowercaseLetter), (0x1c7, UppercaseLetter),
            (0x1c8, TitlecaseLetter), (0x1c9, LowercaseLetter), (0x1ca, UppercaseLetter), (0x1cb, TitlecaseLetter),
            (0x1cc, LowercaseLetter), (0x1cd, UppercaseLetter), (0x1ce, LowercaseLetter), (0x1cf, UppercaseLetter),
            (0x1d0, LowercaseLetter), (0x1d1, UppercaseLetter), (0x1d2, LowercaseLetter), (0x1d3, UppercaseLetter),
            (0x1d4, LowercaseLetter), (0x1d5, UppercaseLetter), (0x1d6, LowercaseLetter), (0x1d7, UppercaseLetter),
            (0x1d8, LowercaseLetter), (0x1d9, UppercaseLetter), (0x1da, LowercaseLetter), (0x1db, UppercaseLetter),
            (0x1dc, LowercaseLetter), (0x1de, UppercaseLetter), (0x1df, LowercaseLetter), (0x1e0, UppercaseLetter),
            (0x1e1, LowercaseLetter), (0x1e2, UppercaseLetter), (0x1e3, LowercaseLetter), (0x1e4, UppercaseLetter),
            (0x1e5, LowercaseLetter), (0x1e6, UppercaseLetter), (0x1e7, LowercaseLetter), (0x1e8, UppercaseLetter),
            (0x1e9, LowercaseLetter), (0x1ea, UppercaseLetter), (0x1eb, LowercaseLetter), (0x1ec, UppercaseLetter),
            (0x1ed, LowercaseLetter), (0x1ee, UppercaseLetter), (0x1ef, LowercaseLetter), (0x1f1, UppercaseLetter),
            (0x1f2, TitlecaseLetter), (0x1f3, LowercaseLetter), (0x1f4, UppercaseLetter), (0x1f5, LowercaseLetter),
            (0x1f6, UppercaseLetter), (0x1f9, LowercaseLetter), (0x1fa, UppercaseLetter), (0x1fb, LowercaseLetter),
            (0x1fc, UppercaseLetter), (0x1fd, LowercaseLetter), (0x1fe, UppercaseLetter), (0x1ff, LowercaseLetter),
            (0x200, UppercaseLetter), (0x201, LowercaseLetter), (0x202, UppercaseLetter), (0x203, LowercaseLetter),
            (0x204, UppercaseLetter), (0x205, LowercaseLetter), (0x206, UppercaseLetter), (0x207, LowercaseLetter),
            (0x208, UppercaseLetter), (0x209, LowercaseLetter), (0x20a, UppercaseLetter), (0x20b, LowercaseLetter),
            (0x20c, UppercaseLetter), (0x20d, LowercaseLetter), (0x20e, UppercaseLetter), (0x20f, LowercaseLetter),
            (0x210, UppercaseLetter), (0x211, LowercaseLetter), (0x212, UppercaseLetter), (0x213, LowercaseLetter),
            (0x214, UppercaseLetter), (0x215, LowercaseLetter), (0x216, UppercaseLetter), (0x217, LowercaseLetter),
            (0x218, UppercaseLetter), (0x219, LowercaseLetter), (0x21a, UppercaseLetter), (0x21b, LowercaseLetter),
            (0x21c, UppercaseLetter), (0x21d, LowercaseLetter), (0x21e, UppercaseLetter), (0x21f, LowercaseLetter),
            (0x220, UppercaseLetter), (0x221, LowercaseLetter), (0x222, UppercaseLetter), (0x223, LowercaseLetter),
            (0x224, UppercaseLetter), (0x225, LowercaseLetter), (0x226, UppercaseLetter), (0x227, LowercaseLetter),
            (0x228, UppercaseLetter), (0x229, LowercaseLetter), (0x22a, UppercaseLetter), (0x22b, LowercaseLetter),
            (0x22c, UppercaseLetter), (0x22d, LowercaseLetter), (0x22e, UppercaseLetter), (0x22f, LowercaseLetter),
            (0x230, UppercaseLetter), (0x231, LowercaseLetter), (0x232, UppercaseLetter), (0x233, LowercaseLetter),
            (0x23a, UppercaseLetter), (0x23c, LowercaseLetter), (0x23d, UppercaseLetter), (0x23f, LowercaseLetter),
            (0x241, UppercaseLetter), (0x242, LowercaseLetter), (0x243, UppercaseLetter), (0x247, LowercaseLetter),
            (0x248, UppercaseLetter), (0x249, LowercaseLetter), (0x24a, UppercaseLetter), (0x24b, LowercaseLetter),
            (0x24c, UppercaseLetter), (0x24d, LowercaseLetter), (0x24e, UppercaseLetter), (0x24f, LowercaseLetter),
            (0x294, OtherLetter), (0x295, LowercaseLetter), (0x2b0, ModifierLetter), (0x2c2, ModifierSymbol),
            (0x2c6, ModifierLetter), (0x2d2, ModifierSymbol), (0x2e0, ModifierLetter), (0x2e5, ModifierSymbol),
            (0x2ec, ModifierLetter), (0x2ed, ModifierSymbol), (0x2ee, ModifierLetter), (0x2ef, ModifierSymbol),
            (0x300, NonspacingMark), (0x370, UppercaseLetter), (0x371, LowercaseLetter), (0x372, UppercaseLetter),
            (0x373, LowercaseLetter), (0x374, ModifierLetter), (0x375, ModifierSymbol), (0x376, UppercaseLetter),
            (0x377, LowercaseLetter), (0x378, Unassigned), (0x37a, ModifierLetter), (0x37b, LowercaseLetter),
            (0x37e, OtherPunctuation), (0x37f, UppercaseLetter), (0x380, Unassigned), (0x384, ModifierSymbol),
            (0x386, UppercaseLetter), (0x387, OtherPunctuation), (0x388, UppercaseLetter), (0x38b, Unassigned),
            (0x38c, UppercaseLetter), (0x38d, Unassigned), (0x38e, UppercaseLetter), (0x390, LowercaseLetter),
            (0x391, UppercaseLetter), (0x3a2, Unassigned), (0x3a3, UppercaseLetter), (0x3ac, LowercaseLetter),
            (0x3cf, UppercaseLetter), (0x3d0, LowercaseLetter), (0x3d2, UppercaseLetter), (0x3d5, LowercaseLetter),
            (0x3d8, UppercaseLetter), (0x3d9, LowercaseLetter), (0x3da, UppercaseLetter), (0x3db, LowercaseLetter),
            (0x3dc, UppercaseLetter), (0x3dd, LowercaseLetter), (0x3de, UppercaseLetter), (0x3df, LowercaseLetter),
            (0x3e0, UppercaseLetter), (0x3e1, LowercaseLetter), (0x3e2, UppercaseLetter), (0x3e3, LowercaseLetter),
            (0x3e4, UppercaseLetter), (0x3e5, LowercaseLetter), (0x3e6, UppercaseLetter), (0x3e7, LowercaseLetter),
            (0x3e8, UppercaseLetter), (0x3e9, LowercaseLetter), (0x3ea, UppercaseLetter), (0x3eb, LowercaseLetter),
            (0x3ec, UppercaseLetter), (0x3ed, LowercaseLetter), (0x3ee, UppercaseLetter), (0x3ef, LowercaseLetter),
            (0x3f4, UppercaseLetter), (0x3f5, LowercaseLetter), (0x3f6, MathSymbol), (0x3f7, UppercaseLetter),
            (0x3f8, LowercaseLetter), (0x3f9, UppercaseLetter), (0x3fb, LowercaseLetter), (0x3fd, UppercaseLetter),
            (0x430, LowercaseLetter), (0x460, UppercaseLetter), (0x461, LowercaseLetter), (0x462, UppercaseLetter),
            (0x463, LowercaseLetter), (0x464, UppercaseLetter), (0x465, LowercaseLetter), (0x466, UppercaseLetter),
            (0x467, LowercaseLetter), (0x468, UppercaseLetter), (0x469, LowercaseLetter), (0x46a, UppercaseLetter),
            (0x46b, LowercaseLetter), (0x46c, UppercaseLetter), (0x46d, LowercaseLetter), (0x46e, UppercaseLetter),
            (0x46f, LowercaseLetter), (0x470, UppercaseLetter), (0x471, LowercaseLetter), (0x472, UppercaseLetter),
            (0x473, LowercaseLetter), (0x474, UppercaseLetter), (0x475, LowercaseLetter), (0x476, UppercaseLetter),
            (0x477, LowercaseLetter), (0x478, UppercaseLetter), (0x479, LowercaseLetter), (0x47a, UppercaseLetter),
            (0x47b, LowercaseLetter), (0x47c, UppercaseLetter), (0x47d, LowercaseLetter), (0x47e, UppercaseLetter),
            (0x47f, LowercaseLetter), (0x480, UppercaseLetter), (0x481, LowercaseLetter), (0x482, OtherSymbol),
            (0x483, NonspacingMark), (0x488, EnclosingMark), (0x48a, UppercaseLetter), (0x48b, LowercaseLetter),
            (0x48c, UppercaseLetter), (0x48d, LowercaseLetter), (0x48e, UppercaseLetter), (0x48f, LowercaseLetter),
            (0x490, UppercaseLetter), (0x491, LowercaseLetter), (0x492, UppercaseLetter), (0x493, LowercaseLetter),
            (0x494, UppercaseLetter), (0x495, LowercaseLetter), (0x496, UppercaseLetter), (0x497, LowercaseLetter),
            (0x498, UppercaseLetter), (0x499, LowercaseLetter), (0x49a, UppercaseLetter), (0x49b, LowercaseLetter),
            (0x49c, UppercaseLetter), (0x49d, LowercaseLetter), (0x49e, UppercaseLetter), (0x49f, LowercaseLetter),
            (0x4a0, UppercaseLetter), (0x4a1, LowercaseLetter), (0x4a2, UppercaseLetter), (0x4a3, LowercaseLetter),
            (0x4a4, UppercaseLetter), (0x4a5, LowercaseLetter), (0x4a6, UppercaseLetter), (0x4a7, LowercaseLetter),
            (0x4a8, UppercaseLetter), (0x4a9, LowercaseLetter), (0x4aa, UppercaseLetter), (0x4ab, LowercaseLetter),
            (0x4ac, UppercaseLetter), (0x4ad, LowercaseLetter), (0x4ae, UppercaseLetter), (0x4af, LowercaseLetter),
            (0x4b0, UppercaseLetter), (0x4b1, LowercaseLetter), (0x4b2, UppercaseLetter), (0x4b3, LowercaseLetter),
            (0x4b4, UppercaseLetter), (0x4b5, LowercaseLetter), (0x4b6, UppercaseLetter), (0x4b7, LowercaseLetter),
            (0x4b8, UppercaseLetter), (0x4b9, LowercaseLetter), (0x4ba, UppercaseLetter), (0x4bb, LowercaseLetter),
            (0x4bc, UppercaseLetter), (0x4bd, LowercaseLetter), (0x4be, UppercaseLetter), (0x4bf, LowercaseLetter),
            (0x4c0, UppercaseLetter), (0x4c2, LowercaseLetter), (0x4c3, UppercaseLetter), (0x4c4, LowercaseLetter),
            (0x4c5, UppercaseLetter), (0x4c6, LowercaseLetter), (0x4c7, UppercaseLetter), (0x4c8, LowercaseLetter),
            (0x4c9, UppercaseLetter), (0x4ca, LowercaseLetter), (0x4cb, UppercaseLetter), (0x4cc, LowercaseLetter),
            (0x4cd, UppercaseLetter), (0x4ce, LowercaseLetter), (0x4d0, UppercaseLetter), (0x4d1, LowercaseLetter),
            (0x4d2, UppercaseLetter), (0x4d3, LowercaseLetter), (0x4d4, UppercaseLetter), (0x4d5, LowercaseLetter),
            (0x4d6, UppercaseLetter), (0x4d7, LowercaseLetter), (0x4d8, UppercaseLetter), (0x4d9, LowercaseLetter),
            (0x4da, UppercaseLetter), (0x4db, LowercaseLetter), (0x4dc, UppercaseLetter), (0x4dd, LowercaseLetter),
            (0x4de, UppercaseLetter), (0x4df, LowercaseLetter), (0x4e0, UppercaseLetter), (0x4e1, LowercaseLetter),
            (0x4e2, UppercaseLetter), (0x4e3, LowercaseLetter), (0x4e4, UppercaseLetter), (0x4e5, LowercaseLetter),
            (0x4e6, UppercaseLetter), (0x4e7, LowercaseLetter), (0x4e8, UppercaseLetter), (0x4e9, LowercaseLetter),
            (0x4ea, UppercaseLetter), (0x4eb, LowercaseLetter), (0x4ec, UppercaseLetter), (0x4ed, LowercaseLetter),
            (0x4ee, UppercaseLetter), (0x4ef, LowercaseLetter), (0x4f0, UppercaseLetter), (0x4f1, LowercaseLetter),
            (0x4f2, UppercaseLetter), (0x4f3, LowercaseLetter), (0x4f4, UppercaseLetter), (0x4f5, LowercaseLetter),
            (0x4f6, UppercaseLetter), (0x4f7, LowercaseLetter), (0x4f8, UppercaseLetter), (0x4f9, LowercaseLetter),
            (0x4fa, UppercaseLetter), (0x4fb, LowercaseLetter), (0x4fc, UppercaseLetter), (0x4fd, LowercaseLetter),
            (0x4fe, UppercaseLetter), (0x4ff, LowercaseLetter), (0x500, UppercaseLetter), (0x501, LowercaseLetter),
            (0x502, UppercaseLetter), (0x503, LowercaseLetter), (0x504, UppercaseLetter), (0x505, LowercaseLetter),
            (0x506, UppercaseLetter), (0x507, LowercaseLetter), (0x508, UppercaseLetter), (0x509, LowercaseLetter),
            (0x50a, UppercaseLetter), (0x50b, LowercaseLetter), (0x50c, UppercaseLetter), (0x50d, LowercaseLetter),
            (0x50e, UppercaseLetter), (0x50f, LowercaseLetter), (0x510, UppercaseLetter), (0x511, LowercaseLetter),
            (0x512, UppercaseLetter), (0x513, LowercaseLetter), (0x514, UppercaseLetter), (0x515, LowercaseLetter),
            (0x516, UppercaseLetter), (0x517, LowercaseLetter), (0x518, UppercaseLetter), (0x519, LowercaseLetter),
            (0x51a, UppercaseLetter), (0x51b, LowercaseLetter), (0x51c, UppercaseLetter), (0x51d, LowercaseLetter),
            (0x51e, UppercaseLetter), (0x51f, LowercaseLetter), (0x520, UppercaseLetter), (0x521, LowercaseLetter),
            (0x522, UppercaseLetter), (0x523, LowercaseLetter), (0x524, UppercaseLetter), (0x525, LowercaseLetter),
            (0x526, UppercaseLetter), (0x527, LowercaseLetter), (0x528, UppercaseLetter), (0x529, LowercaseLetter),
            (0x52a, UppercaseLetter), (0x52b, LowercaseLetter), (0x52c, UppercaseLetter), (0x52d, LowercaseLetter),
            (0x52e, UppercaseLetter), (0x52f, LowercaseLetter), (0x530, Unassigned), (0x531, UppercaseLetter),
            (0x557, Unassigned), (0x559, ModifierLetter), (0x55a, OtherPunctuation), (0x560, LowercaseLetter),
            (0x589, OtherPunctuation), (0x58a, DashPunctuation), (0x58b, Unassigned), (0x58d, OtherSymbol),
            (0x58f, CurrencySymbol), (0x590, Unassigned), (0x591, NonspacingMark), (0x5be, DashPunctuation),
            (0x5bf, NonspacingMark), (0x5c0, OtherPunctuation), (0x5c1, NonspacingMark), (0x5c3, OtherPunctuation),
            (0x5c4, NonspacingMark), (0x5c6, OtherPunctuation), (0x5c7, NonspacingMark), (0x5c8, Unassigned),
            (0x5d0, OtherLetter), (0x5eb, Unassigned), (0x5ef, OtherLetter), (0x5f3, OtherPunctuation),
            (0x5f5, Unassigned), (0x600, Format), (0x606, MathSymbol), (0x609, OtherPunctuation),
            (0x60b, CurrencySymbol), (0x60c, OtherPunctuation), (0x60e, OtherSymbol), (0x610, NonspacingMark),
            (0x61b, OtherPunctuation), (0x61c, Format), (0x61d, OtherPunctuation), (0x620, OtherLetter),
            (0x640, ModifierLetter), (0x641, OtherLetter), (0x64b, NonspacingMark), (0x660, DecimalNumber),
            (0x66a, OtherPunctuation), (0x66e, OtherLetter), (0x670, NonspacingMark), (0x671, OtherLetter),
            (0x6d4, OtherPunctuation), (0x6d5, OtherLetter), (0x6d6, NonspacingMark), (0x6dd, Format),
            (0x6de, OtherSymbol), (0x6df, NonspacingMark), (0x6e5, ModifierLetter), (0x6e7, NonspacingMark),
            (0x6e9, OtherSymbol), (0x6ea, NonspacingMark), (0x6ee, OtherLetter), (0x6f0, DecimalNumber),
            (0x6fa, OtherLetter), (0x6fd, OtherSymbol), (0x6ff, OtherLetter), (0x700, OtherPunctuation),
            (0x70e, Unassigned), (0x70f, Format), (0x710, OtherLetter), (0x711, NonspacingMark),
            (0x712, OtherLetter), (0x730, NonspacingMark), (0x74b, Unassigned), (0x74d, OtherLetter),
            (0x7a6, NonspacingMark), (0x7b1, OtherLetter), (0x7b2, Unassigned), (0x7c0, DecimalNumber),
            (0x7ca, OtherLetter), (0x7eb, NonspacingMark), (0x7f4, ModifierLetter), (0x7f6, OtherSymbol),
            (0x7f7, OtherPunctuation), (0x7fa, ModifierLetter), (0x7fb, Unassigned), (0x7fd, NonspacingMark),
            (0x7fe, CurrencySymbol), (0x800, OtherLetter), (0x816, NonspacingMark), (0x81a, ModifierLetter),
            (0x81b, NonspacingMark), (0x824, ModifierLetter), (0x825, NonspacingMark), (0x828, ModifierLetter),
            (0x829, NonspacingMark), (0x82e, Unassigned), (0x830, OtherPunctuation), (0x83f, Unassigned),
            (0x840, OtherLetter), (0x859, NonspacingMark), (0x85c, Unassigned), (0x85e, OtherPunctuation),
            (0x85f, Unassigned), (0x860, OtherLetter), (0x86b, Unassigned), (0x870, OtherLetter),
            (0x888, ModifierSymbol), (0x889, OtherLetter), (0x88f, Unassigned), (0x890, Format),
            (0x892, Unassigned), (0x898, NonspacingMark), (0x8a0, OtherLetter), (0x8c9, ModifierLetter),
            (0x8ca, NonspacingMark), (0x8e2, Format), (0x8e3, NonspacingMark), (0x903, SpacingMark),
            (0x904, OtherLetter), (0x93a, NonspacingMark), (0x93b, SpacingMark), (0x93c, NonspacingMark),
            (0x93d, OtherLetter), (0x93e, SpacingMark), (0x941, NonspacingMark), (0x949, SpacingMark),
            (0x94d, NonspacingMark), (0x94e, SpacingMark), (0x950, OtherLetter), (0x951, NonspacingMark),
            (0x958, OtherLetter), (0x962, NonspacingMark), (0x964, OtherPunctuation), (0x966, DecimalNumber),
            (0x970, OtherPunctuation), (0x971, ModifierLetter), (0x972, OtherLetter), (0x981, NonspacingMark),
            (0x982, SpacingMark), (0x984, Unassigned), (0x985, OtherLetter), (0x98d, Unassigned),
            (0x98f, OtherLetter), (0x991, Unassigned), (0x993, OtherLetter), (0x9a9, Unassigned),
            (0x9aa, OtherLetter), (0x9b1, Unassigned), (0x9b2, OtherLetter), (0x9b3, Unassigned),
            (0x9b6, OtherLetter), (0x9ba, Unassigned), (0x9bc, NonspacingMark), (0x9bd, OtherLetter),
            (0x9be, SpacingMark), (0x9c1, NonspacingMark), (0x9c5, Unassigned), (0x9c7, SpacingMark),
            (0x9c9, Unassigned), (0x9cb, SpacingMark), (0x9cd, NonspacingMark), (0x9ce, OtherLetter),
            (0x9cf, Unassigned), (0x9d7, SpacingMark), (0x9d8, Unassigned), (0x9dc, OtherLetter),
            (0x9de, Unassigned), (0x9df, OtherLetter), (0x9e2, NonspacingMark), (0x9e4, Unassigned),
            (0x9e6, DecimalNumber), (0x9f0, OtherLetter), (0x9f2, CurrencySymbol), (0x9f4, OtherNumber),
            (0x9fa, OtherSymbol), (0x9fb, CurrencySymbol), (0x9fc, OtherLetter), (0x9fd, OtherPunctuation),
            (0x9fe, NonspacingMark), (0x9ff, Unassigned), (0xa01, NonspacingMark), (0xa03, SpacingMark),
            (0xa04, Unassigned), (0xa05, OtherLetter), (0xa0b, Unassigned), (0xa0f, OtherLetter),
            (0xa11, Unassigned), (0xa13, OtherLetter), (0xa29, Unassigned), (0xa2a, OtherLetter),
            (0xa31, Unassigned), (0xa32, OtherLetter), (0xa34, Unassigned), (0xa35, OtherLetter),
            (0xa37, Unassigned), (0xa38, OtherLetter), (0xa3a, Unassigned), (0xa3c, NonspacingMark),
            (0xa3d, Unassigned), (0xa3e, SpacingMark), (0xa41, NonspacingMark), (0xa43, Unassigned),
            (0xa47, NonspacingMark), (0xa49, Unassigned), (0xa4b, NonspacingMark), (0xa4e, Unassigned),
            (0xa51, NonspacingMark), (0xa52, Unassigned), (0xa59, OtherLetter), (0xa5d, Unassigned),
            (0xa5e, OtherLetter), (0xa5f, Unassigned), (0xa66, DecimalNumber), (0xa70, NonspacingMark),
            (0xa72, OtherLetter), (0xa75, NonspacingMark), (0xa76, OtherPunctuation), (0xa77, Unassigned),
            (0xa81, NonspacingMark), (0xa83, SpacingMark), (0xa84, Unassigned), (0xa85, OtherLetter),
            (0xa8e, Unassigned), (0xa8f, OtherLetter), (0xa92, Unassigned), (0xa93, OtherLetter),
            (0xaa9, Unassigned), (0xaaa, OtherLetter), (0xab1, Unassigned), (0xab2, OtherLetter),
            (0xab4, Unassigned), (0xab5, OtherLetter), (0xaba, Unassigned), (0xabc, NonspacingMark),
            (0xabd, OtherLetter), (0xabe, SpacingMark), (0xac1, NonspacingMark), (0xac6, Unassigned),
            (0xac7, NonspacingMark), (0xac9, SpacingMark), (0xaca, Unassigned), (0xacb, SpacingMark),
            (0xacd, NonspacingMark), (0xace, Unassigned), (0xad0, OtherLetter), (0xad1, Unassigned),
            (0xae0, OtherLetter), (0xae2, NonspacingMark), (0xae4, Unassigned), (0xae6, DecimalNumber),
            (0xaf0, OtherPunctuation), (0xaf1, CurrencySymbol), (0xaf2, Unassigned), (0xaf9, OtherLetter),
            (0xafa, NonspacingMark), (0xb00, Unassigned), (0xb01, NonspacingMark), (0xb02, SpacingMark),
            (0xb04, Unassigned), (0xb05, OtherLetter), (0xb0d, Unassigned), (0xb0f, OtherLetter),
            (0xb11, Unassigned), (0xb13, OtherLetter), (0xb29, Unassigned), (0xb2a, OtherLetter),
            (0xb31, Unassigned), (0xb32, OtherLetter), (0xb34, Unassigned), (0xb35, OtherLetter),
            (0xb3a, Unassigned), (0xb3c, NonspacingMark), (0xb3d, OtherLetter), (0xb3e, SpacingMark),
            (0xb3f, NonspacingMark), (0xb40, SpacingMark), (0xb41, NonspacingMark), (0xb45, Unassigned),
            (0xb47, SpacingMark), (0xb49, Unassigned), (0xb4b, SpacingMark), (0xb4d, NonspacingMark),
            (0xb4e, Unassigned), (0xb55, NonspacingMark), (0xb57, SpacingMark), (0xb58, Unassigned),
            (0xb5c, OtherLetter), (0xb5e, Unassigned), (0xb5f, OtherLetter), (0xb62, NonspacingMark),
            (0xb64, Unassigned), (0xb66, DecimalNumber), (0xb70, OtherSymbol), (0xb71, OtherLetter),
            (0xb72, OtherNumber), (0xb78, Unassigned), (0xb82, NonspacingMark), (0xb83, OtherLetter),
            (0xb84, Unassigned), (0xb85, OtherLetter), (0xb8b, Unassigned), (0xb8e, OtherLetter),
            (0xb91, Unassigned), (0xb92, OtherLetter), (0xb96, Unassigned), (0xb99, OtherLetter),
            (0xb9b, Unassigned), (0xb9c, OtherLetter), (0xb9d, Unassigned), (0xb9e, OtherLetter),
            (0xba0, Unassigned), (0xba3, OtherLetter), (0xba5, Unassigned), (0xba8, OtherLetter),
            (0xbab, Unassigned), (0xbae, OtherLetter), (0xbba, Unassigned), (0xbbe, SpacingMark),
            (0xbc0, NonspacingMark), (0xbc1, SpacingMark), (0xbc3, Unassigned), (0xbc6, SpacingMark),
            (0xbc9, Unassigned), (0xbca, SpacingMark), (0xbcd, NonspacingMark), (0xbce, Unassigned),
            (0xbd0, OtherLetter), (0xbd1, Unassigned), (0xbd7, SpacingMark), (0xbd8, Unassigned),
            (0xbe6, DecimalNumber), (0xbf0, OtherNumber), (0xbf3, OtherSymbol), (0xbf9, CurrencySymbol),
            (0xbfa, OtherSymbol), (0xbfb, Unassigned), (0xc00, NonspacingMark), (0xc01, SpacingMark),
            (0xc04, NonspacingMark), (0xc05, OtherLetter), (0xc0d, Unassigned), (0xc0e, OtherLetter),
            (0xc11, Unassigned), (0xc12, OtherLetter), (0xc29, Unassigned), (0xc2a, OtherLetter),
            (0xc3a, Unassigned), (0xc3c, NonspacingMark), (0xc3d, OtherLetter), (0xc3e, NonspacingMark),
            (0xc41, SpacingMark), (0xc45, Unassigned), (0xc46, NonspacingMark), (0xc49, Unassigned),
            (0xc4a, NonspacingMark), (0xc4e, Unassigned), (0xc55, NonspacingMark), (0xc57, Unassigned),
            (0xc58, OtherLetter), (0xc5b, Unassigned), (0xc5d, OtherLetter), (0xc5e, Unassigned),
            (0xc60, OtherLetter), (0xc62, NonspacingMark), (0xc64, Unassigned), (0xc66, DecimalNumber),
            (0xc70, Unassigned), (0xc77, OtherPunctuation), (0xc78, OtherNumber), (0xc7f, OtherSymbol),
            (0xc80, OtherLetter), (0xc81, NonspacingMark), (0xc82, SpacingMark), (0xc84, OtherPunctuation),
            (0xc85, OtherLetter), (0xc8d, Unassigned), (0xc8e, OtherLetter), (0xc91, Unassigned),
            (0xc92, OtherLetter), (0xca9, Unassigned), (0xcaa, OtherLetter), (0xcb4, Unassigned),
            (0xcb5, OtherLetter), (0xcba, Unassigned), (0xcbc, NonspacingMark), (0xcbd, OtherLetter),
            (0xcbe, SpacingMark), (0xcbf, NonspacingMark), (0xcc0, SpacingMark), (0xcc5, Unassigned),
            (0xcc6, NonspacingMark), (0xcc7, SpacingMark), (0xcc9, Unassigned), (0xcca, SpacingMark),
            (0xccc, NonspacingMark), (0xcce, Unassigned), (0xcd5, SpacingMark), (0xcd7, Unassigned),
            (0xcdd, OtherLetter), (0xcdf, Unassigned), (0xce0, OtherLetter), (0xce2, NonspacingMark),
            (0xce4, Unassigned), (0xce6, DecimalNumber), (0xcf0, Unassigned), (0xcf1, OtherLetter),
            (0xcf3, Unassigned), (0xd00, NonspacingMark), (0xd02, SpacingMark), (0xd04, OtherLetter),
            (0xd0d, Unassigned), (0xd0e, OtherLetter), (0xd11, Unassigned), (0xd12, OtherLetter),
            (0xd3b, NonspacingMark), (0xd3d, OtherLetter), (0xd3e, SpacingMark), (0xd41, NonspacingMark),
            (0xd45, Unassigned), (0xd46, SpacingMark), (0xd49, Unassigned), (0xd4a, SpacingMark),
            (0xd4d, NonspacingMark), (0xd4e, OtherLetter), (0xd4f, OtherSymbol), (0xd50, Unassigned),
            (0xd54, OtherLetter), (0xd57, SpacingMark), (0xd58, OtherNumber), (0xd5f, OtherLetter),
            (0xd62, NonspacingMark), (0xd64, Unassigned), (0xd66, DecimalNumber), (0xd70, OtherNumber),
            (0xd79, OtherSymbol), (0xd7a, OtherLetter), (0xd80, Unassigned), (0xd81, NonspacingMark),
            (0xd82, SpacingMark), (0xd84, Unassigned), (0xd85, OtherLetter), (0xd97, Unassigned),
            (0xd9a, OtherLetter), (0xdb2, Unassigned), (0xdb3, OtherLetter), (0xdbc, Unassigned),
            (0xdbd, OtherLetter), (0xdbe, Unassigned), (0xdc0, OtherLetter), (0xdc7, Unassigned),
            (0xdca, NonspacingMark), (0xdcb, Unassigned), (0xdcf, SpacingMark), (0xdd2, NonspacingMark),
            (0xdd5, Unassigned), (0xdd6, NonspacingMark), (0xdd7, Unassigned), (0xdd8, SpacingMark),
            (0xde0, Unassigned), (0xde6, DecimalNumber), (0xdf0, Unassigned), (0xdf2, SpacingMark),
            (0xdf4, OtherPunctuation), (0xdf5, Unassigned), (0xe01, OtherLetter), (0xe31, NonspacingMark),
            (0xe32, OtherLetter), (0xe34, NonspacingMark), (0xe3b, Unassigned), (0xe3f, CurrencySymbol),
            (0xe40, OtherLetter), (0xe46, ModifierLetter), (0xe47, NonspacingMark), (0xe4f, OtherPunctuation),
            (0xe50, DecimalNumber), (0xe5a, OtherPunctuation), (0xe5c, Unassigned), (0xe81, OtherLetter),
            (0xe83, Unassigned), (0xe84, OtherLetter), (0xe85, Unassigned), (0xe86, OtherLetter),
            (0xe8b, Unassigned), (0xe8c, OtherLetter), (0xea4, Unassigned), (0xea5, OtherLetter),
            (0xea6, Unassigned), (0xea7, OtherLetter), (0xeb1, NonspacingMark), (0xeb2, OtherLetter),
            (0xeb4, NonspacingMark), (0xebd, OtherLetter), (0xebe, Unassigned), (0xec0, OtherLetter),
            (0xec5, Unassigned), (0xec6, ModifierLetter), (0xec7, Unassigned), (0xec8, NonspacingMark),
            (0xece, Unassigned), (0xed0, DecimalNumber), (0xeda, Unassigned), (0xedc, OtherLetter),
            (0xee0, Unassigned), (0xf00, OtherLetter), (0xf01, OtherSymbol), (0xf04, OtherPunctuation),
            (0xf13, OtherSymbol), (0xf14, OtherPunctuation), (0xf15, OtherSymbol), (0xf18, NonspacingMark),
            (0xf1a, OtherSymbol), (0xf20, DecimalNumber), (0xf2a, OtherNumber), (0xf34, OtherSymbol),
            (0xf35, NonspacingMark), (0xf36, OtherSymbol), (0xf37, NonspacingMark), (0xf38, OtherSymbol),
            (0xf39, NonspacingMark), (0xf3a, OpenPunctuation), (0xf3b, ClosePunctuation), (0xf3c, OpenPunctuation),
            (0xf3d, ClosePunctuation), (0xf3e, SpacingMark), (0xf40, OtherLetter), (0xf48, Unassigned),
            (0xf49, OtherLetter), (0xf6d, Unassigned), (0xf71, NonspacingMark), (0xf7f, SpacingMark),
            (0xf80, NonspacingMark), (0xf85, OtherPunctuation), (0xf86, NonspacingMark), (0xf88, OtherLetter),
            (0xf8d, NonspacingMark), (0xf98, Unassigned), (0xf99, NonspacingMark), (0xfbd, Unassigned),
            (0xfbe, OtherSymbol), (0xfc6, NonspacingMark), (0xfc7, OtherSymbol), (0xfcd, Unassigned),
            (0xfce, OtherSymbol), (0xfd0, OtherPunctuation), (0xfd5, OtherSymbol), (0xfd9, OtherPunctuation),
            (0xfdb, Unassigned), (0x1000, OtherLetter), (0x102b, SpacingMark), (0x102d, NonspacingMark),
            (0x1031, SpacingMark), (0x1032, NonspacingMark), (0x1038, SpacingMark), (0x1039, NonspacingMark),
            (0x103b, SpacingMark), (0x103d, NonspacingMark), (0x103f, OtherLetter), (0x1040, DecimalNumber),
            (0x104a, OtherPunctuation), (0x1050, OtherLetter), (0x1056, SpacingMark), (0x1058, NonspacingMark),
            (0x105a, OtherLetter), (0x105e, NonspacingMark), (0x1061, OtherLetter), (0x1062, SpacingMark),
            (0x1065, OtherLetter), (0x1067, SpacingMark), (0x106e, OtherLetter), (0x1071, NonspacingMark),
            (0x1075, OtherLetter), (0x1082, NonspacingMark), (0x1083, SpacingMark), (0x1085, NonspacingMark),
            (0x1087, SpacingMark), (0x108d, NonspacingMark), (0x108e, OtherLetter), (0x108f, SpacingMark),
            (0x1090, DecimalNumber), (0x109a, SpacingMark), (0x109d, NonspacingMark), (0x109e, OtherSymbol),
            (0x10a0, UppercaseLetter), (0x10c6, Unassigned), (0x10c7, UppercaseLetter), (0x10c8, Unassigned),
            (0x10cd, UppercaseLetter), (0x10ce, Unassigned), (0x10d0, LowercaseLetter), (0x10fb, OtherPunctuation),
            (0x10fc, ModifierLetter), (0x10fd, LowercaseLetter), (0x1100, OtherLetter), (0x1249, Unassigned),
            (0x124a, OtherLetter), (0x124e, Unassigned), (0x1250, OtherLetter), (0x1257, Unassigned),
            (0x1258, OtherLetter), (0x1259, Unassigned), (0x125a, OtherLetter), (0x125e, Unassigned),
            (0x1260, OtherLetter), (0x1289, Unassigned), (0x128a, OtherLetter), (0x128e, Unassigned),
            (0x1290, OtherLetter), (0x12b1, Unassigned), (0x12b2, OtherLetter), (0x12b6, Unassigned),
            (0x12b8, OtherLetter), (0x12bf, Unassigned), (0x12c0, OtherLetter), (0x12c1, Unassigned),
            (0x12c2, OtherLetter), (0x12c6, Unassigned), (0x12c8, OtherLetter), (0x12d7, Unassigned),
            (0x12d8, OtherLetter), (0x1311, Unassigned), (0x1312, OtherLetter), (0x1316, Unassigned),
            (0x1318, OtherLetter), (0x135b, Unassigned), (0x135d, NonspacingMark), (0x1360, OtherPunctuation),
            (0x1369, OtherNumber), (0x137d, Unassigned), (0x1380, OtherLetter), (0x1390, OtherSymbol),
            (0x139a, Unassigned), (0x13a0, UppercaseLetter), (0x13f6, Unassigned), (0x13f8, LowercaseLetter),
            (0x13fe, Unassigned), (0x1400, DashPunctuation), (0x1401, OtherLetter), (0x166d, OtherSymbol),
            (0x166e, OtherPunctuation), (0x166f, OtherLetter), (0x1680, SpaceSeparator), (0x1681, OtherLetter),
            (0x169b, OpenPunctuation), (0x169c, ClosePunctuation), (0x169d, Unassigned), (0x16a0, OtherLetter),
            (0x16eb, OtherPunctuation), (0x16ee, LetterNumber), (0x16f1, OtherLetter), (0x16f9, Unassigned),
            (0x1700, OtherLetter), (0x1712, NonspacingMark), (0x1715, SpacingMark), (0x1716, Unassigned),
            (0x171f, OtherLetter), (0x1732, NonspacingMark), (0x1734, SpacingMark), (0x1735, OtherPunctuation),
            (0x1737, Unassigned), (0x1740, OtherLetter), (0x1752, NonspacingMark), (0x1754, Unassigned),
            (0x1760, OtherLetter), (0x176d, Unassigned), (0x176e, OtherLetter), (0x1771, Unassigned),
            (0x1772, NonspacingMark), (0x1774, Unassigned), (0x1780, OtherLetter), (0x17b4, NonspacingMark),
            (0x17b6, SpacingMark), (0x17b7, NonspacingMark), (0x17be, SpacingMark), (0x17c6, NonspacingMark),
            (0x17c7, SpacingMark), (0x17c9, NonspacingMark), (0x17d4, OtherPunctuation), (0x17d7, ModifierLetter),
            (0x17d8, OtherPunctuation), (0x17db, CurrencySymbol), (0x17dc, OtherLetter), (0x17dd, NonspacingMark),
            (0x17de, Unassigned), (0x17e0, DecimalNumber), (0x17ea, Unassigned), (0x17f0, OtherNumber),
            (0x17fa, Unassigned), (0x1800, OtherPunctuation), (0x1806, DashPunctuation), (0x1807, OtherPunctuation),
            (0x180b, NonspacingMark), (0x180e, Format), (0x180f, NonspacingMark), (0x1810, DecimalNumber),
            (0x181a, Unassigned), (0x1820, OtherLetter), (0x1843, ModifierLetter), (0x1844, OtherLetter),
            (0x1879, Unassigned), (0x1880, OtherLetter), (0x1885, NonspacingMark), (0x1887, OtherLetter),
            (0x18a9, NonspacingMark), (0x18aa, OtherLetter), (0x18ab, Unassigned), (0x18b0, OtherLetter),
            (0x18f6, Unassigned), (0x1900, OtherLetter), (0x191f, Unassigned), (0x1920, NonspacingMark),
            (0x1923, SpacingMark), (0x1927, NonspacingMark), (0x1929, SpacingMark), (0x192c, Unassigned),
            (0x1930, SpacingMark), (0x1932, NonspacingMark), (0x1933, SpacingMark), (0x1939, NonspacingMark),
            (0x193c, Unassigned), (0x1940, OtherSymbol), (0x1941, Unassigned), (0x1944, OtherPunctuation),
            (0x1946, DecimalNumber), (0x1950, OtherLetter), (0x196e, Unassigned), (0x1970, OtherLetter),
            (0x1975, Unassigned), (0x1980, OtherLetter), (0x19ac, Unassigned), (0x19b0, OtherLetter),
            (0x19ca, Unassigned), (0x19d0, DecimalNumber), (0x19da, OtherNumber), (0x19db, Unassigned),
            (0x19de, OtherSymbol), (0x1a00, OtherLetter), (0x1a17, NonspacingMark), (0x1a19, SpacingMark),
            (0x1a1b, NonspacingMark), (0x1a1c, Unassigned), (0x1a1e, OtherPunctuation), (0x1a20, OtherLetter),
            (0x1a55, SpacingMark), (0x1a56, NonspacingMark), (0x1a57, SpacingMark), (0x1a58, NonspacingMark),
            (0x1a5f, Unassigned), (0x1a60, NonspacingMark), (0x1a61, SpacingMark), (0x1a62, NonspacingMark),
            (0x1a63, SpacingMark), (0x1a65, NonspacingMark), (0x1a6d, SpacingMark), (0x1a73, NonspacingMark),
            (0x1a7d, Unassigned), (0x1a7f, NonspacingMark), (0x1a80, DecimalNumber), (0x1a8a, Unassigned),
            (0x1a90, DecimalNumber), (0x1a9a, Unassigned), (0x1aa0, OtherPunctuation), (0x1aa7, ModifierLetter),
            (0x1aa8, OtherPunctuation), (0x1aae, Unassigned), (0x1ab0, NonspacingMark), (0x1abe, EnclosingMark),
            (0x1abf, NonspacingMark), (0x1acf, Unassigned), (0x1b00, NonspacingMark), (0x1b04, SpacingMark),
            (0x1b05, OtherLetter), (0x1b34, NonspacingMark), (0x1b35, SpacingMark), (0x1b36, NonspacingMark),
            (0x1b3b, SpacingMark), (0x1b3c, NonspacingMark), (0x1b3d, SpacingMark), (0x1b42, NonspacingMark),
            (0x1b43, SpacingMark), (0x1b45, OtherLetter), (0x1b4d, Unassigned), (0x1b50, DecimalNumber),
            (0x1b5a, OtherPunctuation), (0x1b61, OtherSymbol), (0x1b6b, NonspacingMark), (0x1b74, OtherSymbol),
            (0x1b7d, OtherPunctuation), (0x1b7f, Unassigned), (0x1b80, NonspacingMark), (0x1b82, SpacingMark),
            (0x1b83, OtherLetter), (0x1ba1, SpacingMark), (0x1ba2, NonspacingMark), (0x1ba6, SpacingMark),
            (0x1ba8, NonspacingMark), (0x1baa, SpacingMark), (0x1bab, NonspacingMark), (0x1bae, OtherLetter),
            (0x1bb0, DecimalNumber), (0x1bba, OtherLetter), (0x1be6, NonspacingMark), (0x1be7, SpacingMark),
            (0x1be8, NonspacingMark), (0x1bea, SpacingMark), (0x1bed, NonspacingMark), (0x1bee, SpacingMark),
            (0x1bef, NonspacingMark), (0x1bf2, SpacingMark), (0x1bf4, Unassigned), (0x1bfc, OtherPunctuation),
            (0x1c00, OtherLetter), (0x1c24, SpacingMark), (0x1c2c, NonspacingMark), (0x1c34, SpacingMark),
            (0x1c36, NonspacingMark), (0x1c38, Unassigned), (0x1c3b, OtherPunctuation), (0x1c40, DecimalNumber),
            (0x1c4a, Unassigned), (0x1c4d, OtherLetter), (0x1c50, DecimalNumber), (0x1c5a, OtherLetter),
            (0x1c78, ModifierLetter), (0x1c7e, OtherPunctuation), (0x1c80, LowercaseLetter), (0x1c89, Unassigned),
            (0x1c90, UppercaseLetter), (0x1cbb, Unassigned), (0x1cbd, UppercaseLetter), (0x1cc0, OtherPunctuation),
            (0x1cc8, Unassigned), (0x1cd0, NonspacingMark), (0x1cd3, OtherPunctuation), (0x1cd4, NonspacingMark),
            (0x1ce1, SpacingMark), (0x1ce2, NonspacingMark), (0x1ce9, OtherLetter), (0x1ced, NonspacingMark),
            (0x1cee, OtherLetter), (0x1cf4, NonspacingMark), (0x1cf5, OtherLetter), (0x1cf7, SpacingMark),
            (0x1cf8, NonspacingMark), (0x1cfa, OtherLetter), (0x1cfb, Unassigned), (0x1d00, LowercaseLetter),
            (0x1d2c, ModifierLetter), (0x1d6b, LowercaseLetter), (0x1d78, ModifierLetter), (0x1d79, LowercaseLetter),
            (0x1d9b, ModifierLetter), (0x1dc0, NonspacingMark), (0x1e00, UppercaseLetter), (0x1e01, LowercaseLetter),
            (0x1e02, UppercaseLetter), (0x1e03, LowercaseLetter), (0x1e04, UppercaseLetter), (0x1e05, LowercaseLetter),
            (0x1e06, UppercaseLetter), (0x1e07, LowercaseLetter), (0x1e08, UppercaseLetter), (0x1e09, LowercaseLetter),
            (0x1e0a, UppercaseLetter), (0x1e0b, LowercaseLetter), (0x1e0c, UppercaseLetter), (0x1e0d, LowercaseLetter),
            (0x1e0e, UppercaseLetter), (0x1e0f, LowercaseLetter), (0x1e10, UppercaseLetter), (0x1e11, LowercaseLetter),
            (0x1e12, UppercaseLetter), (0x1e13, LowercaseLetter), (0x1e14, UppercaseLetter), (0x1e15, LowercaseLetter),
            (0x1e16, UppercaseLetter), (0x1e17, LowercaseLetter), (0x1e18, UppercaseLetter), (0x1e19, LowercaseLetter),
            (0x1e1a, UppercaseLetter), (0x1e1b, LowercaseLetter), (0x1e1c, UppercaseLetter), (0x1e1d, LowercaseLetter),
            (0x1e1e, UppercaseLetter), (0x1e1f, LowercaseLetter), (0x1e20, UppercaseLetter), (0x1e21, LowercaseLetter),
            (0x1e22, UppercaseLetter), (0x1e23, LowercaseLetter), (0x1e24, UppercaseLetter), (0x1e25, LowercaseLetter),
            (0x1e26, UppercaseLetter), (0x1e27, LowercaseLetter), (0x1e28, UppercaseLetter), (0x1e29, LowercaseLetter),
            (0x1e2a, UppercaseLetter), (0x1e2b, LowercaseLetter), (0x1e2c, UppercaseLetter), (0x1e2d, LowercaseLetter),
            (0x1e2e, UppercaseLetter), (0x1e2f, LowercaseLetter), (0x1e30, UppercaseLetter), (0x1e31, LowercaseLetter),
            (0x1e32, UppercaseLetter), (0x1e33, LowercaseLetter), (0x1e34, UppercaseLetter), (0x1e35, LowercaseLetter),
            (0x1e36, UppercaseLetter), (0x1e37, LowercaseLetter), (0x1e38, UppercaseLetter), (0x1e39, LowercaseLetter),
            (0x1e3a, UppercaseLetter), (0x1e3b, LowercaseLetter), (0x1e3c, UppercaseLetter), (0x1e3d, LowercaseLetter),
            (0x1e3e, UppercaseLetter), (0x1e3f, LowercaseLetter), (0x1e40, UppercaseLetter), (0x1e41, LowercaseLetter),
            (0x1e42, UppercaseLetter), (0x1e43, LowercaseLetter), (0x1e44, UppercaseLetter), (0x1e45, LowercaseLetter),
            (0x1e46, UppercaseLetter), (0x1e47, LowercaseLetter), (0x1e48, UppercaseLetter), (0x1e49, LowercaseLetter),
            (0x1e4a, UppercaseLetter), (0x1e4b, LowercaseLetter), (0x1e4c, UppercaseLetter), (0x1e4d, LowercaseLetter),
            (0x1e4e, UppercaseLetter), (0x1e4f, LowercaseLetter), (0x1e50, UppercaseLetter), (0x1e51, LowercaseLetter),
            (0x1e52, UppercaseLetter), (0x1e53, LowercaseLetter), (0x1e54, UppercaseLetter), (0x1e55, LowercaseLetter),
            (0x1e56, UppercaseLetter), (0x1e57, LowercaseLetter), (0x1e58, UppercaseLetter), (0x1e59, LowercaseLetter),
            (0x1e5a, UppercaseLetter), (0x1e5b, LowercaseLetter), (0x1e5c, UppercaseLetter), (0x1e5d, LowercaseLetter),
            (0x1e5e, UppercaseLetter), (0x1e5f, LowercaseLetter), (0x1e60, UppercaseLetter), (0x1e61, LowercaseLetter),
            (0x1e62, UppercaseLetter), (0x1e63, LowercaseLetter), (0x1e64, UppercaseLetter), (0x1e65, LowercaseLetter),
            (0x1e66, UppercaseLetter), (0x1e67, LowercaseLetter), (0x1e68, UppercaseLetter), (0x1e69, LowercaseLetter),
            (0x1e6a, UppercaseLetter), (0x1e6b, LowercaseLetter), (0x1e6c, UppercaseLetter), (0x1e6d, LowercaseLetter),
            (0x1e6e, UppercaseLetter), (0x1e6f, LowercaseLetter), (0x1e70, UppercaseLetter), (0x1e71, LowercaseLetter),
            (0x1e72, UppercaseLetter), (0x1e73, LowercaseLetter), (0x1e74, UppercaseLetter), (0x1e75, LowercaseLetter),
            (0x1e76, UppercaseLetter), (0x1e77, LowercaseLetter), (0x1e78, UppercaseLetter), (0x1e79, LowercaseLetter),
            (0x1e7a, UppercaseLetter), (0x1e7b, LowercaseLetter), (0x1e7c, UppercaseLetter), (0x1e7d, LowercaseLetter),
            (0x1e7e, UppercaseLetter), (0x1e7f, LowercaseLetter), (0x1e80, UppercaseLetter), (0x1e81, LowercaseLetter),
            (0x1e82, UppercaseLetter), (0x1e83, LowercaseLetter), (0x1e84, UppercaseLetter), (0x1e85, LowercaseLetter),
            (0x1e86, UppercaseLetter), (0x1e87, LowercaseLetter), (0x1e88, UppercaseLetter), (0x1e89, LowercaseLetter),
            (0x1e8a, UppercaseLetter), (0x1e8b, LowercaseLetter), (0x1e8c, UppercaseLetter), (0x1e8d, LowercaseLetter),
            (0x1e8e, UppercaseLetter), (0x1e8f, LowercaseLetter), (0x1e90, UppercaseLetter), (0x1e91, LowercaseLetter),
            (0x1e92, UppercaseLetter), (0x1e93, LowercaseLetter), (0x1e94, UppercaseLetter), (0x1e95, LowercaseLetter),
            (0x1e9e, UppercaseLetter), (0x1e9f, LowercaseLetter), (0x1ea0, UppercaseLetter), (0x1ea1, LowercaseLetter),
            (0x1ea2, UppercaseLetter), (0x1ea3, LowercaseLetter), (0x1ea4, UppercaseLetter), (0x1ea5, LowercaseLetter),
            (0x1ea6, UppercaseLetter), (0x1ea7, LowercaseLetter), (0x1ea8, UppercaseLetter), (0x1ea9, LowercaseLetter),
            (0x1eaa, UppercaseLetter), (0x1eab, LowercaseLetter), (0x1eac, UppercaseLetter), (0x1ead, LowercaseLetter),
            (0x1eae, UppercaseLetter), (0x1eaf, LowercaseLetter), (0x1eb0, UppercaseLetter), (0x1eb1, LowercaseLetter),
            (0x1eb2, UppercaseLetter), (0x1eb3, LowercaseLetter), (0x1eb4, UppercaseLetter), (0x1eb5, LowercaseLetter),
            (0x1eb6, UppercaseLetter), (0x1eb7, LowercaseLetter), (0x1eb8, UppercaseLetter), (0x1eb9, LowercaseLetter),
            (0x1eba, UppercaseLetter), (0x1ebb, LowercaseLetter), (0x1ebc, UppercaseLetter), (0x1ebd, LowercaseLetter),
            (0x1ebe, UppercaseLetter), (0x1ebf, LowercaseLetter), (0x1ec0, UppercaseLetter), (0x1ec1, LowercaseLetter),
            (0x1ec2, UppercaseLetter), (0x1ec3, LowercaseLetter), (0x1ec4, UppercaseLetter), (0x1ec5, LowercaseLetter),
            (0x1ec6, UppercaseLetter), (0x1ec7, LowercaseLetter), (0x1ec8, UppercaseLetter), (0x1ec9, LowercaseLetter),
            (0x1eca, UppercaseLetter), (0x1ecb, LowercaseLetter), (0x1ecc, UppercaseLetter), (0x1ecd, LowercaseLetter),
            (0x1ece, UppercaseLetter), (0x1ecf, LowercaseLetter), (0x1ed0, UppercaseLetter), (0x1ed1, LowercaseLetter),
            (0x1ed2, UppercaseLetter), (0x1ed3, LowercaseLetter), (0x1ed4, UppercaseLetter), (0x1ed5, LowercaseLetter),
            (0x1ed6, UppercaseLetter), (0x1ed7, LowercaseLetter), (0x1ed8, UppercaseLetter), (0x1ed9, LowercaseLetter),
            (0x1eda, UppercaseLetter), (0x1edb, LowercaseLetter), (0x1edc, UppercaseLetter), (0x1edd, LowercaseLetter),
            (0x1ede, UppercaseLetter), (0x1edf, LowercaseLetter), (0x1ee0, UppercaseLetter), (0x1ee1, LowercaseLetter),
            (0x1ee2, UppercaseLetter), (0x1ee3, LowercaseLetter), (0x1ee4, UppercaseLetter), (0x1ee5, LowercaseLetter),
            (0x1ee6, UppercaseLetter), (0x1ee7, LowercaseLetter), (0x1ee8, UppercaseLetter), (0x1ee9, LowercaseLetter),
            (0x1eea, UppercaseLetter), (0x1eeb, LowercaseLetter), (0x1eec, UppercaseLetter), (0x1eed, LowercaseLetter),
            (0x1eee, UppercaseLetter), (0x1eef, LowercaseLetter), (0x1ef0, UppercaseLetter), (0x1ef1, LowercaseLetter),
            (0x1ef2, UppercaseLetter), (0x1ef3, LowercaseLetter), (0x1ef4, UppercaseLetter), (0x1ef5, LowercaseLetter),
            (0x1ef6, UppercaseLetter), (0x1ef7, LowercaseLetter), (0x1ef8, UppercaseLetter), (0x1ef9, LowercaseLetter),
            (0x1efa, UppercaseLetter), (0x1efb, LowercaseLetter), (0x1efc, UppercaseLetter), (0x1efd, LowercaseLetter),
            (0x1efe, UppercaseLetter), (0x1eff, LowercaseLetter), (0x1f08, UppercaseLetter), (0x1f10, LowercaseLetter),
            (0x1f16, Unassigned), (0x1f18, UppercaseLetter), (0x1f1e, Unassigned), (0x1f20, LowercaseLetter),
            (0x1f28, UppercaseLetter), (0x1f30, LowercaseLetter), (0x1f38, UppercaseLetter), (0x1f40, LowercaseLetter),
            (0x1f46, Unassigned), (0x1f48, UppercaseLetter), (0x1f4e, Unassigned), (0x1f50, LowercaseLetter),
            (0x1f58, Unassigned), (0x1f59, UppercaseLetter), (0x1f5a, Unassigned), (0x1f5b, UppercaseLetter),
            (0x1f5c, Unassigned), (0x1f5d, UppercaseLetter), (0x1f5e, Unassigned), (0x1f5f, UppercaseLetter),
            (0x1f60, LowercaseLetter), (0x1f68, UppercaseLetter), (0x1f70, LowercaseLetter), (0x1f7e, Unassigned),
            (0x1f80, LowercaseLetter), (0x1f88, TitlecaseLetter), (0x1f90, LowercaseLetter), (0x1f98, TitlecaseLetter),
            (0x1fa0, LowercaseLetter), (0x1fa8, TitlecaseLetter), (0x1fb0, LowercaseLetter), (0x1fb5, Unassigned),
            (0x1fb6, LowercaseLetter), (0x1fb8, UppercaseLetter), (0x1fbc, TitlecaseLetter), (0x1fbd, ModifierSymbol),
            (0x1fbe, LowercaseLetter), (0x1fbf, ModifierSymbol), (0x1fc2, LowercaseLetter), (0x1fc5, Unassigned),
            (0x1fc6, LowercaseLetter), (0x1fc8, UppercaseLetter), (0x1fcc, TitlecaseLetter), (0x1fcd, ModifierSymbol),
            (0x1fd0, LowercaseLetter), (0x1fd4, Unassigned), (0x1fd6, LowercaseLetter), (0x1fd8, UppercaseLetter),
            (0x1fdc, Unassigned), (0x1fdd, ModifierSymbol), (0x1fe0, LowercaseLetter), (0x1fe8, UppercaseLetter),
            (0x1fed, ModifierSymbol), (0x1ff0, Unassigned), (0x1ff2, LowercaseLetter), (0x1ff5, Unassigned),
            (0x1ff6, LowercaseLetter), (0x1ff8, UppercaseLetter), (0x1ffc, TitlecaseLetter), (0x1ffd, ModifierSymbol),
            (0x1fff, Unassigned), (0x2000, SpaceSeparator), (0x200b, Format), (0x2010, DashPunctuation),
            (0x2016, OtherPunctuation), (0x2018, InitialPunctuation), (0x2019, FinalPunctuation), (0x201a, OpenPunctuation),
            (0x201b, InitialPunctuation), (0x201d, FinalPunctuation), (0x201e, OpenPunctuation), (0x201f, InitialPunctuation),
            (0x2020, OtherPunctuation), (0x2028, LineSeparator), (0x2029, ParagraphSeparator), (0x202a, Format),
            (0x202f, SpaceSeparator), (0x2030, OtherPunctuation), (0x2039, InitialPunctuation), (0x203a, FinalPunctuation),
            (0x203b, OtherPunctuation), (0x203f, ConnectorPunctuation), (0x2041, OtherPunctuation), (0x2044, MathSymbol),
            (0x2045, OpenPunctuation), (0x2046, ClosePunctuation), (0x2047, OtherPunctuation), (0x2052, MathSymbol),
            (0x2053, OtherPunctuation), (0x2054, ConnectorPunctuation), (0x2055, OtherPunctuation), (0x205f, SpaceSeparator),
            (0x2060, Format), (0x2065, Unassigned), (0x2066, Format), (0x2070, OtherNumber),
            (0x2071, ModifierLetter), (0x2072, Unassigned), (0x2074, OtherNumber), (0x207a, MathSymbol),
            (0x207d, OpenPunctuation), (0x207e, ClosePunctuation), (0x207f, ModifierLetter), (0x2080, OtherNumber),
            (0x208a, MathSymbol), (0x208d, OpenPunctuation), (0x208e, ClosePunctuation), (0x208f, Unassigned),
            (0x2090, ModifierLetter), (0x209d, Unassigned), (0x20a0, CurrencySymbol), (0x20c1, Unassigned),
            (0x20d0, NonspacingMark), (0x20dd, EnclosingMark), (0x20e1, NonspacingMark), (0x20e2, EnclosingMark),
            (0x20e5, NonspacingMark), (0x20f1, Unassigned), (0x2100, OtherSymbol), (0x2102, UppercaseLetter),
            (0x2103, OtherSymbol), (0x2107, UppercaseLetter), (0x2108, OtherSymbol), (0x210a, LowercaseLetter),
            (0x210b, UppercaseLetter), (0x210e, LowercaseLetter), (0x2110, UppercaseLetter), (0x2113, LowercaseLetter),
            (0x2114, OtherSymbol), (0x2115, UppercaseLetter), (0x2116, OtherSymbol), (0x2118, MathSymbol),
            (0x2119, UppercaseLetter), (0x211e, OtherSymbol), (0x2124, UppercaseLetter), (0x2125, OtherSymbol),
            (0x2126, UppercaseLetter), (0x2127, OtherSymbol), (0x2128, UppercaseLetter), (0x2129, OtherSymbol),
            (0x212a, UppercaseLetter), (0x212e, OtherSymbol), (0x212f, LowercaseLetter), (0x2130, UppercaseLetter),
            (0x2134, LowercaseLetter), (0x2135, OtherLetter), (0x2139, LowercaseLetter), (0x213a, OtherSymbol),
            (0x213c, LowercaseLetter), (0x213e, UppercaseLetter), (0x2140, MathSymbol), (0x2145, UppercaseLetter),
            (0x2146, LowercaseLetter), (0x214a, OtherSymbol), (0x214b, MathSymbol), (0x214c, OtherSymbol),
            (0x214e, LowercaseLetter), (0x214f, OtherSymbol), (0x2150, OtherNumber), (0x2160, LetterNumber),
            (0x2183, UppercaseLetter), (0x2184, LowercaseLetter), (0x2185, LetterNumber), (0x2189, OtherNumber),
            (0x218a, OtherSymbol), (0x218c, Unassigned), (0x2190, MathSymbol), (0x2195, OtherSymbol),
            (0x219a, MathSymbol), (0x219c, OtherSymbol), (0x21a0, MathSymbol), (0x21a1, OtherSymbol),
            (0x21a3, MathSymbol), (0x21a4, OtherSymbol), (0x21a6, MathSymbol), (0x21a7, OtherSymbol),
            (0x21ae, MathSymbol), (0x21af, OtherSymbol), (0x21ce, MathSymbol), (0x21d0, OtherSymbol),
            (0x21d2, MathSymbol), (0x21d3, OtherSymbol), (0x21d4, MathSymbol), (0x21d5, OtherSymbol),
            (0x21f4, MathSymbol), (0x2300, OtherSymbol), (0x2308, OpenPunctuation), (0x2309, ClosePunctuation),
            (0x230a, OpenPunctuation), (0x230b, ClosePunctuation), (0x230c, OtherSymbol), (0x2320, MathSymbol),
            (0x2322, OtherSymbol), (0x2329, OpenPunctuation), (0x232a, ClosePunctuation), (0x232b, OtherSymbol),
            (0x237c, MathSymbol), (0x237d, OtherSymbol), (0x239b, MathSymbol), (0x23b4, OtherSymbol),
            (0x23dc, MathSymbol), (0x23e2, OtherSymbol), (0x2427, Unassigned), (0x2440, OtherSymbol),
            (0x244b, Unassigned), (0x2460, OtherNumber), (0x249c, OtherSymbol), (0x24ea, OtherNumber),
            (0x2500, OtherSymbol), (0x25b7, MathSymbol), (0x25b8, OtherSymbol), (0x25c1, MathSymbol),
            (0x25c2, OtherSymbol), (0x25f8, MathSymbol), (0x2600, OtherSymbol), (0x266f, MathSymbol),
            (0x2670, OtherSymbol), (0x2768, OpenPunctuation), (0x2769, ClosePunctuation), (0x276a, OpenPunctuation),
            (0x276b, ClosePunctuation), (0x276c, OpenPunctuation), (0x276d, ClosePunctuation), (0x276e, OpenPunctuation),
            (0x276f, ClosePunctuation), (0x2770, OpenPunctuation), (0x2771, ClosePunctuation), (0x2772, OpenPunctuation),
            (0x2773, ClosePunctuation), (0x2774, OpenPunctuation), (0x2775, ClosePunctuation), (0x2776, OtherNumber),
            (0x2794, OtherSymbol), (0x27c0, MathSymbol), (0x27c5, OpenPunctuation), (0x27c6, ClosePunctuation),
            (0x27c7, MathSymbol), (0x27e6, OpenPunctuation), (0x27e7, ClosePunctuation), (0x27e8, OpenPunctuation),
            (0x27e9, ClosePunctuation), (0x27ea, OpenPunctuation), (0x27eb, ClosePunctuation), (0x27ec, OpenPunctuation),
            (0x27ed, ClosePunctuation), (0x27ee, OpenPunctuation), (0x27ef, ClosePunctuation), (0x27f0, MathSymbol),
            (0x2800, OtherSymbol), (0x2900, MathSymbol), (0x2983, OpenPunctuation), (0x2984, ClosePunctuation),
            (0x2985, OpenPunctuation), (0x2986, ClosePunctuation), (0x2987, OpenPunctuation), (0x2988, ClosePunctuation),
            (0x2989, OpenPunctuation), (0x298a, ClosePunctuation), (0x298b, OpenPunctuation), (0x298c, ClosePunctuation),
            (0x298d, OpenPunctuation), (0x298e, ClosePunctuation), (0x298f, OpenPunctuation), (0x2990, ClosePunctuation),
            (0x2991, OpenPunctuation), (0x2992, ClosePunctuation), (0x2993, OpenPunctuation), (0x2994, ClosePunctuation),
            (0x2995, OpenPunctuation), (0x2996, ClosePunctuation), (0x2997, OpenPunctuation), (0x2998, ClosePunctuation),
            (0x2999, MathSymbol), (0x29d8, OpenPunctuation), (0x29d9, ClosePunctuation), (0x29da, OpenPunctuation),
            (0x29db, ClosePunctuation), (0x29dc, MathSymbol), (0x29fc, OpenPunctuation), (0x29fd, ClosePunctuation),
            (0x29fe, MathSymbol), (0x2b00, OtherSymbol), (0x2b30, MathSymbol), (0x2b45, OtherSymbol),
            (0x2b47, MathSymbol), (0x2b4d, OtherSymbol), (0x2b74, Unassigned), (0x2b76, OtherSymbol),
            (0x2b96, Unassigned), (0x2b97, OtherSymbol), (0x2c00, UppercaseLetter), (0x2c30, LowercaseLetter),
            (0x2c60, UppercaseLetter), (0x2c61, LowercaseLetter), (0x2c62, UppercaseLetter), (0x2c65, LowercaseLetter),
            (0x2c67, UppercaseLetter), (0x2c68, LowercaseLetter), (0x2c69, UppercaseLetter), (0x2c6a, LowercaseLetter),
            (0x2c6b, UppercaseLetter), (0x2c6c, LowercaseLetter), (0x2c6d, UppercaseLetter), (0x2c71, LowercaseLetter),
            (0x2c72, UppercaseLetter), (0x2c73, LowercaseLetter), (0x2c75, UppercaseLetter), (0x2c76, LowercaseLetter),
            (0x2c7c, ModifierLetter), (0x2c7e, UppercaseLetter), (0x2c81, LowercaseLetter), (0x2c82, UppercaseLetter),
            (0x2c83, LowercaseLetter), (0x2c84, UppercaseLetter), (0x2c85, LowercaseLetter), (0x2c86, UppercaseLetter),
            (0x2c87, LowercaseLetter), (0x2c88, UppercaseLetter), (0x2c89, LowercaseLetter), (0x2c8a, UppercaseLetter),
            (0x2c8b, LowercaseLetter), (0x2c8c, UppercaseLetter), (0x2c8d, LowercaseLetter), (0x2c8e, UppercaseLetter),
            (0x2c8f, LowercaseLetter), (0x2c90, UppercaseLetter), (0x2c91, LowercaseLetter), (0x2c92, UppercaseLetter),
            (0x2c93, LowercaseLetter), (0x2c94, UppercaseLetter), (0x2c95, LowercaseLetter), (0x2c96, UppercaseLetter),
            (0x2c97, LowercaseLetter), (0x2c98, UppercaseLetter), (0x2c99, LowercaseLetter), (0x2c9a, UppercaseLetter),
            (0x2c9b, LowercaseLetter), (0x2c9c, UppercaseLetter), (0x2c9d, LowercaseLetter), (0x2c9e, UppercaseLetter),
            (0x2c9f, LowercaseLetter), (0x2ca0, UppercaseLetter), (0x2ca1, LowercaseLetter), (0x2ca2, UppercaseLetter),
            (0x2ca3, LowercaseLetter), (0x2ca4, UppercaseLetter), (0x2ca5, LowercaseLetter), (0x2ca6, UppercaseLetter),
            (0x2ca7, LowercaseLetter), (0x2ca8, UppercaseLetter), (0x2ca9, LowercaseLetter), (0x2caa, UppercaseLetter),
            (0x2cab, LowercaseLetter), (0x2cac, UppercaseLetter), (0x2cad, LowercaseLetter), (0x2cae, UppercaseLetter),
            (0x2caf, LowercaseLetter), (0x2cb0, UppercaseLetter), (0x2cb1, LowercaseLetter), (0x2cb2, UppercaseLetter),
            (0x2cb3, LowercaseLetter), (0x2cb4, UppercaseLetter), (0x2cb5, LowercaseLetter), (0x2cb6, UppercaseLetter),
            (0x2cb7, LowercaseLetter), (0x2cb8, UppercaseLetter), (0x2cb9, LowercaseLetter), (0x2cba, UppercaseLetter),
            (0x2cbb, LowercaseLetter), (0x2cbc, UppercaseLetter), (0x2cbd, LowercaseLetter), (0x2cbe, UppercaseLetter),
            (0x2cbf, LowercaseLetter), (0x2cc0, UppercaseLetter), (0x2cc1, LowercaseLetter), (0x2cc2, UppercaseLetter),
            (0x2cc3, LowercaseLetter), (0x2cc4, UppercaseLetter), (0x2cc5, LowercaseLetter), (0x2cc6, UppercaseLetter),
            (0x2cc7, LowercaseLetter), (0x2cc8, UppercaseLetter), (0x2cc9, LowercaseLetter), (0x2cca, UppercaseLetter),
            (0x2ccb, LowercaseLetter), (0x2ccc, UppercaseLetter), (0x2ccd, LowercaseLetter), (0x2cce, UppercaseLetter),
            (0x2ccf, LowercaseLetter), (0x2cd0, UppercaseLetter), (0x2cd1, LowercaseLetter), (0x2cd2, UppercaseLetter),
            (0x2cd3, LowercaseLetter), (0x2cd4, UppercaseLetter), (0x2cd5, LowercaseLetter), (0x2cd6, UppercaseLetter),
            (0x2cd7, LowercaseLetter), (0x2cd8, UppercaseLetter), (0x2cd9, LowercaseLetter), (0x2cda, UppercaseLetter),
            (0x2cdb, LowercaseLetter), (0x2cdc, UppercaseLetter), (0x2cdd, LowercaseLetter), (0x2cde, UppercaseLetter),
            (0x2cdf, LowercaseLetter), (0x2ce0, UppercaseLetter), (0x2ce1, LowercaseLetter), (0x2ce2, UppercaseLetter),
            (0x2ce3, LowercaseLetter), (0x2ce5, OtherSymbol), (0x2ceb, UppercaseLetter), (0x2cec, LowercaseLetter),
            (0x2ced, UppercaseLetter), (0x2cee, LowercaseLetter), (0x2cef, NonspacingMark), (0x2cf2, UppercaseLetter),
            (0x2cf3, LowercaseLetter), (0x2cf4, Unassigned), (0x2cf9, OtherPunctuation), (0x2cfd, OtherNumber),
            (0x2cfe, OtherPunctuation), (0x2d00, LowercaseLetter), (0x2d26, Unassigned), (0x2d27, LowercaseLetter),
            (0x2d28, Unassigned), (0x2d2d, LowercaseLetter), (0x2d2e, Unassigned), (0x2d30, OtherLetter),
            (0x2d68, Unassigned), (0x2d6f, ModifierLetter), (0x2d70, OtherPunctuation), (0x2d71, Unassigned),
            (0x2d7f, NonspacingMark), (0x2d80, OtherLetter), (0x2d97, Unassigned), (0x2da0, OtherLetter),
            (0x2da7, Unassigned), (0x2da8, OtherLetter), (0x2daf, Unassigned), (0x2db0, OtherLetter),
            (0x2db7, Unassigned), (0x2db8, OtherLetter), (0x2dbf, Unassigned), (0x2dc0, OtherLetter),
            (0x2dc7, Unassigned), (0x2dc8, OtherLetter), (0x2dcf, Unassigned), (0x2dd0, OtherLetter),
            (0x2dd7, Unassigned), (0x2dd8, OtherLetter), (0x2ddf, Unassigned), (0x2de0, NonspacingMark),
            (0x2e00, OtherPunctuation), (0x2e02, InitialPunctuation), (0x2e03, FinalPunctuation), (0x2e04, InitialPunctuation),
            (0x2e05, FinalPunctuation), (0x2e06, OtherPunctuation), (0x2e09, InitialPunctuation), (0x2e0a, FinalPunctuation),
            (0x2e0b, OtherPunctuation), (0x2e0c, InitialPunctuation), (0x2e0d, FinalPunctuation), (0x2e0e, OtherPunctuation),
            (0x2e17, DashPunctuation), (0x2e18, OtherPunctuation), (0x2e1a, DashPunctuation), (0x2e1b, OtherPunctuation),
            (0x2e1c, InitialPunctuation), (0x2e1d, FinalPunctuation), (0x2e1e, OtherPunctuation), (0x2e20, InitialPunctuation),
            (0x2e21, FinalPunctuation), (0x2e22, OpenPunctuation), (0x2e23, ClosePunctuation), (0x2e24, OpenPunctuation),
            (0x2e25, ClosePunctuation), (0x2e26, OpenPunctuation), (0x2e27, ClosePunctuation), (0x2e28, OpenPunctuation),
            (0x2e29, ClosePunctuation), (0x2e2a, OtherPunctuation), (0x2e2f, ModifierLetter), (0x2e30, OtherPunctuation),
            (0x2e3a, DashPunctuation), (0x2e3c, OtherPunctuation), (0x2e40, DashPunctuation), (0x2e41, OtherPunctuation),
            (0x2e42, OpenPunctuation), (0x2e43, OtherPunctuation), (0x2e50, OtherSymbol), (0x2e52, OtherPunctuation),
            (0x2e55, OpenPunctuation), (0x2e56, ClosePunctuation), (0x2e57, OpenPunctuation), (0x2e58, ClosePunctuation),
            (0x2e59, OpenPunctuation), (0x2e5a, ClosePunctuation), (0x2e5b, OpenPunctuation), (0x2e5c, ClosePunctuation),
            (0x2e5d, DashPunctuation), (0x2e5e, Unassigned), (0x2e80, OtherSymbol), (0x2e9a, Unassigned),
            (0x2e9b, OtherSymbol), (0x2ef4, Unassigned), (0x2f00, OtherSymbol), (0x2fd6, Unassigned),
            (0x2ff0, OtherSymbol), (0x2ffc, Unassigned), (0x3000, SpaceSeparator), (0x3001, OtherPunctuation),
            (0x3004, OtherSymbol), (0x3005, ModifierLetter), (0x3006, OtherLetter), (0x3007, LetterNumber),
            (0x3008, OpenPunctuation), (0x3009, ClosePunctuation), (0x300a, OpenPunctuation), (0x300b, ClosePunctuation),
            (0x300c, OpenPunctuation), (0x300d, ClosePunctuation), (0x300e, OpenPunctuation), (0x300f, ClosePunctuation),
            (0x3010, OpenPunctuation), (0x3011, ClosePunctuation), (0x3012, OtherSymbol), (0x3014, OpenPunctuation),
            (0x3015, ClosePunctuation), (0x3016, OpenPunctuation), (0x3017, ClosePunctuation), (0x3018, OpenPunctuation),
            (0x3019, ClosePunctuation), (0x301a, OpenPunctuation), (0x301b, ClosePunctuation), (0x301c, DashPunctuation),
            (0x301d, OpenPunctuation), (0x301e, ClosePunctuation), (0x3020, OtherSymbol), (0x3021, LetterNumber),
            (0x302a, NonspacingMark), (0x302e, SpacingMark), (0x3030, DashPunctuation), (0x3031, ModifierLetter),
            (0x3036, OtherSymbol), (0x3038, LetterNumber), (0x303b, ModifierLetter), (0x303c, OtherLetter),
            (0x303d, OtherPunctuation), (0x303e, OtherSymbol), (0x3040, Unassigned), (0x3041, OtherLetter),
            (0x3097, Unassigned), (0x3099, NonspacingMark), (0x309b, ModifierSymbol), (0x309d, ModifierLetter),
            (0x309f, OtherLetter), (0x30a0, DashPunctuation), (0x30a1, OtherLetter), (0x30fb, OtherPunctuation),
            (0x30fc, ModifierLetter), (0x30ff, OtherLetter), (0x3100, Unassigned), (0x3105, OtherLetter),
            (0x3130, Unassigned), (0x3131, OtherLetter), (0x318f, Unassigned), (0x3190, OtherSymbol),
            (0x3192, OtherNumber), (0x3196, OtherSymbol), (0x31a0, OtherLetter), (0x31c0, OtherSymbol),
            (0x31e4, Unassigned), (0x31f0, OtherLetter), (0x3200, OtherSymbol), (0x321f, Unassigned),
            (0x3220, OtherNumber), (0x322a, OtherSymbol), (0x3248, OtherNumber), (0x3250, OtherSymbol),
            (0x3251, OtherNumber), (0x3260, OtherSymbol), (0x3280, OtherNumber), (0x328a, OtherSymbol),
            (0x32b1, OtherNumber), (0x32c0, OtherSymbol), (0x3400, OtherLetter), (0x4dc0, OtherSymbol),
            (0x4e00, OtherLetter), (0xa015, ModifierLetter), (0xa016, OtherLetter), (0xa48d, Unassigned),
            (0xa490, OtherSymbol), (0xa4c7, Unassigned), (0xa4d0, OtherLetter), (0xa4f8, ModifierLetter),
            (0xa4fe, OtherPunctuation), (0xa500, OtherLetter), (0xa60c, ModifierLetter), (0xa60d, OtherPunctuation),
            (0xa610, OtherLetter), (0xa620, DecimalNumber), (0xa62a, OtherLetter), (0xa62c, Unassigned),
            (0xa640, UppercaseLetter), (0xa641, LowercaseLetter), (0xa642, UppercaseLetter), (0xa643, LowercaseLetter),
            (0xa644, UppercaseLetter), (0xa645, LowercaseLetter), (0xa646, UppercaseLetter), (0xa647, LowercaseLetter),
            (0xa648, UppercaseLetter), (0xa649, LowercaseLetter), (0xa64a, UppercaseLetter), (0xa64b, LowercaseLetter),
            (0xa64c, UppercaseLetter), (0xa64d, LowercaseLetter), (0xa64e, UppercaseLetter), (0xa64f, LowercaseLetter),
            (0xa650, UppercaseLetter), (0xa651, LowercaseLetter), (0xa652, UppercaseLetter), (0xa653, LowercaseLetter),
            (0xa654, UppercaseLetter), (0xa655, LowercaseLetter), (0xa656, UppercaseLetter), (0xa657, LowercaseLetter),
            (0xa658, UppercaseLetter), (0xa659, LowercaseLetter), (0xa65a, UppercaseLetter), (0xa65b, LowercaseLetter),
            (0xa65c, UppercaseLetter), (0xa65d, LowercaseLetter), (0xa65e, UppercaseLetter), (0xa65f, LowercaseLetter),
            (0xa660, UppercaseLetter), (0xa661, LowercaseLetter), (0xa662, UppercaseLetter), (0xa663, LowercaseLetter),
            (0xa664, UppercaseLetter), (0xa665, LowercaseLetter), (0xa666, UppercaseLetter), (0xa667, LowercaseLetter),
            (0xa668, UppercaseLetter), (0xa669, LowercaseLetter), (0xa66a, UppercaseLetter), (0xa66b, LowercaseLetter),
            (0xa66c, UppercaseLetter), (0xa66d, LowercaseLetter), (0xa66e, OtherLetter), (0xa66f, NonspacingMark),
            (0xa670, EnclosingMark), (0xa673, OtherPunctuation), (0xa674, NonspacingMark), (0xa67e, OtherPunctuation),
            (0xa67f, ModifierLetter), (0xa680, UppercaseLetter), (0xa681, LowercaseLetter), (0xa682, UppercaseLetter),
            (0xa683, LowercaseLetter), (0xa684, UppercaseLetter), (0xa685, LowercaseLetter), (0xa686, UppercaseLetter),
            (0xa687, LowercaseLetter), (0xa688, UppercaseLetter), (0xa689, LowercaseLetter), (0xa68a, UppercaseLetter),
            (0xa68b, LowercaseLetter), (0xa68c, UppercaseLetter), (0xa68d, LowercaseLetter), (0xa68e, UppercaseLetter),
            (0xa68f, LowercaseLetter), (0xa690, UppercaseLetter), (0xa691, LowercaseLetter), (0xa692, UppercaseLetter),
            (0xa693, LowercaseLetter), (0xa694, UppercaseLetter), (0xa695, LowercaseLetter), (0xa696, UppercaseLetter),
            (0xa697, LowercaseLetter), (0xa698, UppercaseLetter), (0xa699, LowercaseLetter), (0xa69a, UppercaseLetter),
            (0xa69b, LowercaseLetter), (0xa69c, ModifierLetter), (0xa69e, NonspacingMark), (0xa6a0, OtherLetter),
            (0xa6e6, LetterNumber), (0xa6f0, NonspacingMark), (0xa6f2, OtherPunctuation), (0xa6f8, Unassigned),
            (0xa700, ModifierSymbol), (0xa717, ModifierLetter), (0xa720, ModifierSymbol), (0xa722, UppercaseLetter),
            (0xa723, LowercaseLetter), (0xa724, UppercaseLetter), (0xa725, LowercaseLetter), (0xa726, UppercaseLetter),
            (0xa727, LowercaseLetter), (0xa728, UppercaseLetter), (0xa729, LowercaseLetter), (0xa72a, UppercaseLetter),
            (0xa72b, LowercaseLetter), (0xa72c, UppercaseLetter), (0xa72d, LowercaseLetter), (0xa72e, UppercaseLetter),
            (0xa72f, LowercaseLetter), (0xa732, UppercaseLetter), (0xa733, LowercaseLetter), (0xa734, UppercaseLetter),
            (0xa735, LowercaseLetter), (0xa736, UppercaseLetter), (0xa737, LowercaseLetter), (0xa738, UppercaseLetter),
            (0xa739, LowercaseLetter), (0xa73a, UppercaseLetter), (0xa73b, LowercaseLetter), (0xa73c, UppercaseLetter),
            (0xa73d, LowercaseLetter), (0xa73e, UppercaseLetter), (0xa73f, LowercaseLetter), (0xa740, UppercaseLetter),
            (0xa741, LowercaseLetter), (0xa742, UppercaseLetter), (0xa743, LowercaseLetter), (0xa744, UppercaseLetter),
            (0xa745, LowercaseLetter), (0xa746, UppercaseLetter), (0xa747, LowercaseLetter), (0xa748, UppercaseLetter),
            (0xa749, LowercaseLetter), (0xa74a, UppercaseLetter), (0xa74b, LowercaseLetter), (0xa74c, UppercaseLetter),
            (0xa74d, LowercaseLetter), (0xa74e, UppercaseLetter), (0xa74f, LowercaseLetter), (0xa750, UppercaseLetter),
            (0xa751, LowercaseLetter), (0xa752, UppercaseLetter), (0xa753, LowercaseLetter), (0xa754, UppercaseLetter),
            (0xa755, LowercaseLetter), (0xa756, UppercaseLetter), (0xa757, LowercaseLetter), (0xa758, UppercaseLetter),
            (0xa759, LowercaseLetter), (0xa75a, UppercaseLetter), (0xa75b, LowercaseLetter), (0xa75c, UppercaseLetter),
            (0xa75d, LowercaseLetter), (0xa75e, UppercaseLetter), (0xa75f, LowercaseLetter), (0xa760, UppercaseLetter),
            (0xa761, LowercaseLetter), (0xa762, UppercaseLetter), (0xa763, LowercaseLetter), (0xa764, UppercaseLetter),
            (0xa765, LowercaseLetter), (0xa766, UppercaseLetter), (0xa767, LowercaseLetter), (0xa768, UppercaseLetter),
            (0xa769, LowercaseLetter), (0xa76a, UppercaseLetter), (0xa76b, LowercaseLetter), (0xa76c, UppercaseLetter),
            (0xa76d, LowercaseLetter), (0xa76e, UppercaseLetter), (0xa76f, LowercaseLetter), (0xa770, ModifierLetter),
            (0xa771, LowercaseLetter), (0xa779, UppercaseLetter), (0xa77a, LowercaseLetter), (0xa77b, UppercaseLetter),
            (0xa77c, LowercaseLetter), (0xa77d, UppercaseLetter), (0xa77f, LowercaseLetter), (0xa780, UppercaseLetter),
            (0xa781, LowercaseLetter), (0xa782, UppercaseLetter), (0xa783, LowercaseLetter), (0xa784, UppercaseLetter),
            (0xa785, LowercaseLetter), (0xa786, UppercaseLetter), (0xa787, LowercaseLetter), (0xa788, ModifierLetter),
            (0xa789, ModifierSymbol), (0xa78b, UppercaseLetter), (0xa78c, LowercaseLetter), (0xa78d, UppercaseLetter),
            (0xa78e, LowercaseLetter), (0xa78f, OtherLetter), (0xa790, UppercaseLetter), (0xa791, LowercaseLetter),
            (0xa792, UppercaseLetter), (0xa793, LowercaseLetter), (0xa796, UppercaseLetter), (0xa797, LowercaseLetter),
            (0xa798, UppercaseLetter), (0xa799, LowercaseLetter), (0xa79a, UppercaseLetter), (0xa79b, LowercaseLetter),
            (0xa79c, UppercaseLetter), (0xa79d, LowercaseLetter), (0xa79e, UppercaseLetter), (0xa79f, LowercaseLetter),
            (0xa7a0, UppercaseLetter), (0xa7a1, LowercaseLetter), (0xa7a2, UppercaseLetter), (0xa7a3, LowercaseLetter),
            (0xa7a4, UppercaseLetter), (0xa7a5, LowercaseLetter), (0xa7a6, UppercaseLetter), (0xa7a7, LowercaseLetter),
            (0xa7a8, UppercaseLetter), (0xa7a9, LowercaseLetter), (0xa7aa, UppercaseLetter), (0xa7af, LowercaseLetter),
            (0xa7b0, UppercaseLetter), (0xa7b5, LowercaseLetter), (0xa7b6, UppercaseLetter), (0xa7b7, LowercaseLetter),
            (0xa7b8, UppercaseLetter), (0xa7b9, LowercaseLetter), (0xa7ba, UppercaseLetter), (0xa7bb, LowercaseLetter),
            (0xa7bc, UppercaseLetter), (0xa7bd, LowercaseLetter), (0xa7be, UppercaseLetter), (0xa7bf, LowercaseLetter),
            (0xa7c0, UppercaseLetter), (0xa7c1, LowercaseLetter), (0xa7c2, UppercaseLetter), (0xa7c3, LowercaseLetter),
            (0xa7c4, UppercaseLetter), (0xa7c8, LowercaseLetter), (0xa7c9, UppercaseLetter), (0xa7ca, LowercaseLetter),
            (0xa7cb, Unassigned), (0xa7d0, UppercaseLetter), (0xa7d1, LowercaseLetter), (0xa7d2, Unassigned),
            (0xa7d3, LowercaseLetter), (0xa7d4, Unassigned), (0xa7d5, LowercaseLetter), (0xa7d6, UppercaseLetter),
            (0xa7d7, LowercaseLetter), (0xa7d8, UppercaseLetter), (0xa7d9, LowercaseLetter), (0xa7da, Unassigned),
            (0xa7f2, ModifierLetter), (0xa7f5, UppercaseLetter), (0xa7f6, LowercaseLetter), (0xa7f7, OtherLetter),
            (0xa7f8, ModifierLetter), (0xa7fa, LowercaseLetter), (0xa7fb, OtherLetter), (0xa802, NonspacingMark),
            (0xa803, OtherLetter), (0xa806, NonspacingMark), (0xa807, OtherLetter), (0xa80b, NonspacingMark),
            (0xa80c, OtherLetter), (0xa823, SpacingMark), (0xa825, NonspacingMark), (0xa827, SpacingMark),
            (0xa828, OtherSymbol), (0xa82c, NonspacingMark), (0xa82d, Unassigned), (0xa830, OtherNumber),
            (0xa836, OtherSymbol), (0xa838, CurrencySymbol), (0xa839, OtherSymbol), (0xa83a, Unassigned),
            (0xa840, OtherLetter), (0xa874, OtherPunctuation), (0xa878, Unassigned), (0xa880, SpacingMark),
            (0xa882, OtherLetter), (0xa8b4, SpacingMark), (0xa8c4, NonspacingMark), (0xa8c6, Unassigned),
            (0xa8ce, OtherPunctuation), (0xa8d0, DecimalNumber), (0xa8da, Unassigned), (0xa8e0, NonspacingMark),
            (0xa8f2, OtherLetter), (0xa8f8, OtherPunctuation), (0xa8fb, OtherLetter), (0xa8fc, OtherPunctuation),
            (0xa8fd, OtherLetter), (0xa8ff, NonspacingMark), (0xa900, DecimalNumber), (0xa90a, OtherLetter),
            (0xa926, NonspacingMark), (0xa92e, OtherPunctuation), (0xa930, OtherLetter), (0xa947, NonspacingMark),
            (0xa952, SpacingMark), (0xa954, Unassigned), (0xa95f, OtherPunctuation), (0xa960, OtherLetter),
            (0xa97d, Unassigned), (0xa980, NonspacingMark), (0xa983, SpacingMark), (0xa984, OtherLetter),
            (0xa9b3, NonspacingMark), (0xa9b4, SpacingMark), (0xa9b6, NonspacingMark), (0xa9ba, SpacingMark),
            (0xa9bc, NonspacingMark), (0xa9be, SpacingMark), (0xa9c1, OtherPunctuation), (0xa9ce, Unassigned),
            (0xa9cf, ModifierLetter), (0xa9d0, DecimalNumber), (0xa9da, Unassigned), (0xa9de, OtherPunctuation),
            (0xa9e0, OtherLetter), (0xa9e5, NonspacingMark), (0xa9e6, ModifierLetter), (0xa9e7, OtherLetter),
            (0xa9f0, DecimalNumber), (0xa9fa, OtherLetter), (0xa9ff, Unassigned), (0xaa00, OtherLetter),
            (0xaa29, NonspacingMark), (0xaa2f, SpacingMark), (0xaa31, NonspacingMark), (0xaa33, SpacingMark),
            (0xaa35, NonspacingMark), (0xaa37, Unassigned), (0xaa40, OtherLetter), (0xaa43, NonspacingMark),
            (0xaa44, OtherLetter), (0xaa4c, NonspacingMark), (0xaa4d, SpacingMark), (0xaa4e, Unassigned),
            (0xaa50, DecimalNumber), (0xaa5a, Unassigned), (0xaa5c, OtherPunctuation), (0xaa60, OtherLetter),
            (0xaa70, ModifierLetter), (0xaa71, OtherLetter), (0xaa77, OtherSymbol), (0xaa7a, OtherLetter),
            (0xaa7b, SpacingMark), (0xaa7c, NonspacingMark), (0xaa7d, SpacingMark), (0xaa7e, OtherLetter),
            (0xaab0, NonspacingMark), (0xaab1, OtherLetter), (0xaab2, NonspacingMark), (0xaab5, OtherLetter),
            (0xaab7, NonspacingMark), (0xaab9, OtherLetter), (0xaabe, NonspacingMark), (0xaac0, OtherLetter),
            (0xaac1, NonspacingMark), (0xaac2, OtherLetter), (0xaac3, Unassigned), (0xaadb, OtherLetter),
            (0xaadd, ModifierLetter), (0xaade, OtherPunctuation), (0xaae0, OtherLetter), (0xaaeb, SpacingMark),
            (0xaaec, NonspacingMark), (0xaaee, SpacingMark), (0xaaf0, OtherPunctuation), (0xaaf2, OtherLetter),
            (0xaaf3, ModifierLetter), (0xaaf5, SpacingMark), (0xaaf6, NonspacingMark), (0xaaf7, Unassigned),
            (0xab01, OtherLetter), (0xab07, Unassigned), (0xab09, OtherLetter), (0xab0f, Unassigned),
            (0xab11, OtherLetter), (0xab17, Unassigned), (0xab20, OtherLetter), (0xab27, Unassigned),
            (0xab28, OtherLetter), (0xab2f, Unassigned), (0xab30, LowercaseLetter), (0xab5b, ModifierSymbol),
            (0xab5c, ModifierLetter), (0xab60, LowercaseLetter), (0xab69, ModifierLetter), (0xab6a, ModifierSymbol),
            (0xab6c, Unassigned), (0xab70, LowercaseLetter), (0xabc0, OtherLetter), (0xabe3, SpacingMark),
            (0xabe5, NonspacingMark), (0xabe6, SpacingMark), (0xabe8, NonspacingMark), (0xabe9, SpacingMark),
            (0xabeb, OtherPunctuation), (0xabec, SpacingMark), (0xabed, NonspacingMark), (0xabee, Unassigned),
            (0xabf0, DecimalNumber), (0xabfa, Unassigned), (0xac00, OtherLetter), (0xd7a4, Unassigned),
            (0xd7b0, OtherLetter), (0xd7c7, Unassigned), (0xd7cb, OtherLetter), (0xd7fc, Unassigned),
            (0xd800, Surrogate), (0xe000, PrivateUse), (0xf900, OtherLetter), (0xfa6e, Unassigned),
            (0xfa70, OtherLetter), (0xfada, Unassigned), (0xfb00, LowercaseLetter), (0xfb07, Unassigned),
            (0xfb13, LowercaseLetter), (0xfb18, Unassigned), (0xfb1d, OtherLetter), (0xfb1e, NonspacingMark),
            (0xfb1f, OtherLetter), (0xfb29, MathSymbol), (0xfb2a, OtherLetter), (0xfb37, Unassigned),
            (0xfb38, OtherLetter), (0xfb3d, Unassigned), (0xfb3e, OtherLetter), (0xfb3f, Unassigned),
            (0xfb40, OtherLetter), (0xfb42, Unassigned), (0xfb43, OtherLetter), (0xfb45, Unassigned),
            (0xfb46, OtherLetter), (0xfbb2, ModifierSymbol), (0xfbc3, Unassigned), (0xfbd3, OtherLetter),
            (0xfd3e, ClosePunctuation), (0xfd3f, OpenPunctuation), (0xfd40, OtherSymbol), (0xfd50, OtherLetter),
            (0xfd90, Unassigned), (0xfd92, OtherLetter), (0xfdc8, Unassigned), (0xfdcf, OtherSymbol),
            (0xfdd0, Unassigned), (0xfdf0, OtherLetter), (0xfdfc, CurrencySymbol), (0xfdfd, OtherSymbol),
            (0xfe00, NonspacingMark), (0xfe10, OtherPunctuation), (0xfe17, OpenPunctuation), (0xfe18, ClosePunctuation),
            (0xfe19, OtherPunctuation), (0xfe1a, Unassigned), (0xfe20, NonspacingMark), (0xfe30, OtherPunctuation),
            (0xfe31, DashPunctuation), (0xfe33, ConnectorPunctuation), (0xfe35, OpenPunctuation), (0xfe36, ClosePunctuation),
            (0xfe37, OpenPunctuation), (0xfe38, ClosePunctuation), (0xfe39, OpenPunctuation), (0xfe3a, ClosePunctuation),
            (0xfe3b, OpenPunctuation), (0xfe3c, ClosePunctuation), (0xfe3d, OpenPunctuation), (0xfe3e, ClosePunctuation),
            (0xfe3f, OpenPunctuation), (0xfe40, ClosePunctuation), (0xfe41, OpenPunctuation), (0xfe42, ClosePunctuation),
            (0xfe43, OpenPunctuation), (0xfe44, ClosePunctuation), (0xfe45, OtherPunctuation), (0xfe47, OpenPunctuation),
            (0xfe48, ClosePunctuation), (0xfe49, OtherPunctuation), (0xfe4d, ConnectorPunctuation), (0xfe50, OtherPunctuation),
            (0xfe53, Unassigned), (0xfe54, OtherPunctuation), (0xfe58, DashPunctuation), (0xfe59, OpenPunctuation),
            (0xfe5a, ClosePunctuation), (0xfe5b, OpenPunctuation), (0xfe5c, ClosePunctuation), (0xfe5d, OpenPunctuation),
            (0xfe5e, ClosePunctuation), (0xfe5f, OtherPunctuation), (0xfe62, MathSymbol), (0xfe63, DashPunctuation),
            (0xfe64, MathSymbol), (0xfe67, Unassigned), (0xfe68, OtherPunctuation), (0xfe69, CurrencySymbol),
            (0xfe6a, OtherPunctuation), (0xfe6c, Unassigned), (0xfe70, OtherLetter), (0xfe75, Unassigned),
            (0xfe76, OtherLetter), (0xfefd, Unassigned), (0xfeff, Format), (0xff00, Unassigned),
            (0xff01, OtherPunctuation), (0xff04, CurrencySymbol), (0xff05, OtherPunctuation), (0xff08, OpenPunctuation),
            (0xff09, ClosePunctuation), (0xff0a, OtherPunctuation), (0xff0b, MathSymbol), (0xff0c, OtherPunctuation),
            (0xff0d, DashPunctuation), (0xff0e, OtherPunctuation), (0xff10, DecimalNumber), (0xff1a, OtherPunctuation),
            (0xff1c, MathSymbol), (0xff1f, OtherPunctuation), (0xff21, UppercaseLetter), (0xff3b, OpenPunctuation),
            (0xff3c, OtherPunctuation), (0xff3d, ClosePunctuation), (0xff3e, ModifierSymbol), (0xff3f, ConnectorPunctuation),
            (0xff40, ModifierSymbol), (0xff41, LowercaseLetter), (0xff5b, OpenPunctuation), (0xff5c, MathSymbol),
            (0xff5d, ClosePunctuation), (0xff5e, MathSymbol), (0xff5f, OpenPunctuation), (0xff60, ClosePunctuation),
            (0xff61, OtherPunctuation), (0xff62, OpenPunctuation), (0xff63, ClosePunctuation), (0xff64, OtherPunctuation),
            (0xff66, OtherLetter), (0xff70, ModifierLetter), (0xff71, OtherLetter), (0xff9e, ModifierLetter),
            (0xffa0, OtherLetter), (0xffbf, Unassigned), (0xffc2, OtherLetter), (0xffc8, Unassigned),
            (0xffca, OtherLetter), (0xffd0, Unassigned), (0xffd2, OtherLetter), (0xffd8, Unassigned),
            (0xffda, OtherLetter), (0xffdd, Unassigned), (0xffe0, CurrencySymbol), (0xffe2, MathSymbol),
            (0xffe3, ModifierSymbol), (0xffe4, OtherSymbol), (0xffe5, CurrencySymbol), (0xffe7, Unassigned),
            (0xffe8, OtherSymbol), (0xffe9, MathSymbol), (0xffed, OtherSymbol), (0xffef, Unassigned),
            (0xfff9, Format), (0xfffc, OtherSymbol), (0xfffe, Unassigned), (0x10000, OtherLetter),
            (0x1000c, Unassigned), (0x1000d, OtherLetter), (0x10027, Unassigned), (0x10028, OtherLetter),
            (0x1003b, Unassigned), (0x1003c, OtherLetter), (0x1003e, Unassigned), (0x1003f, OtherLetter),
            (0x1004e, Unassigned), (0x10050, OtherLetter), (0x1005e, Unassigned), (0x10080, OtherLetter),
            (0x100fb, Unassigned), (0x10100, OtherPunctuation), (0x10103, Unassigned), (0x10107, OtherNumber),
            (0x10134, Unassigned), (0x10137, OtherSymbol), (0x10140, LetterNumber), (0x10175, OtherNumber),
            (0x10179, OtherSymbol), (0x1018a, OtherNumber), (0x1018c, OtherSymbol), (0x1018f, Unassigned),
            (0x10190, OtherSymbol), (0x1019d, Unassigned), (0x101a0, OtherSymbol), (0x101a1, Unassigned),
            (0x101d0, OtherSymbol), (0x101fd, NonspacingMark), (0x101fe, Unassigned), (0x10280, OtherLetter),
            (0x1029d, Unassigned), (0x102a0, OtherLetter), (0x102d1, Unassigned), (0x102e0, NonspacingMark),
            (0x102e1, OtherNumber), (0x102fc, Unassigned), (0x10300, OtherLetter), (0x10320, OtherNumber),
            (0x10324, Unassigned), (0x1032d, OtherLetter), (0x10341, LetterNumber), (0x10342, OtherLetter),
            (0x1034a, LetterNumber), (0x1034b, Unassigned), (0x10350, OtherLetter), (0x10376, NonspacingMark),
            (0x1037b, Unassigned), (0x10380, OtherLetter), (0x1039e, Unassigned), (0x1039f, OtherPunctuation),
            (0x103a0, OtherLetter), (0x103c4, Unassigned), (0x103c8, OtherLetter), (0x103d0, OtherPunctuation),
            (0x103d1, LetterNumber), (0x103d6, Unassigned), (0x10400, UppercaseLetter), (0x10428, LowercaseLetter),
            (0x10450, OtherLetter), (0x1049e, Unassigned), (0x104a0, DecimalNumber), (0x104aa, Unassigned),
            (0x104b0, UppercaseLetter), (0x104d4, Unassigned), (0x104d8, LowercaseLetter), (0x104fc, Unassigned),
            (0x10500, OtherLetter), (0x10528, Unassigned), (0x10530, OtherLetter), (0x10564, Unassigned),
            (0x1056f, OtherPunctuation), (0x10570, UppercaseLetter), (0x1057b, Unassigned), (0x1057c, UppercaseLetter),
            (0x1058b, Unassigned), (0x1058c, UppercaseLetter), (0x10593, Unassigned), (0x10594, UppercaseLetter),
            (0x10596, Unassigned), (0x10597, LowercaseLetter), (0x105a2, Unassigned), (0x105a3, LowercaseLetter),
            (0x105b2, Unassigned), (0x105b3, LowercaseLetter), (0x105ba, Unassigned), (0x105bb, LowercaseLetter),
            (0x105bd, Unassigned), (0x10600, OtherLetter), (0x10737, Unassigned), (0x10740, OtherLetter),
            (0x10756, Unassigned), (0x10760, OtherLetter), (0x10768, Unassigned), (0x10780, ModifierLetter),
            (0x10786, Unassigned), (0x10787, ModifierLetter), (0x107b1, Unassigned), (0x107b2, ModifierLetter),
            (0x107bb, Unassigned), (0x10800, OtherLetter), (0x10806, Unassigned), (0x10808, OtherLetter),
            (0x10809, Unassigned), (0x1080a, OtherLetter), (0x10836, Unassigned), (0x10837, OtherLetter),
            (0x10839, Unassigned), (0x1083c, OtherLetter), (0x1083d, Unassigned), (0x1083f, OtherLetter),
            (0x10856, Unassigned), (0x10857, OtherPunctuation), (0x10858, OtherNumber), (0x10860, OtherLetter),
            (0x10877, OtherSymbol), (0x10879, OtherNumber), (0x10880, OtherLetter), (0x1089f, Unassigned),
            (0x108a7, OtherNumber), (0x108b0, Unassigned), (0x108e0, OtherLetter), (0x108f3, Unassigned),
            (0x108f4, OtherLetter), (0x108f6, Unassigned), (0x108fb, OtherNumber), (0x10900, OtherLetter),
            (0x10916, OtherNumber), (0x1091c, Unassigned), (0x1091f, OtherPunctuation), (0x10920, OtherLetter),
            (0x1093a, Unassigned), (0x1093f, OtherPunctuation), (0x10940, Unassigned), (0x10980, OtherLetter),
            (0x109b8, Unassigned), (0x109bc, OtherNumber), (0x109be, OtherLetter), (0x109c0, OtherNumber),
            (0x109d0, Unassigned), (0x109d2, OtherNumber), (0x10a00, OtherLetter), (0x10a01, NonspacingMark),
            (0x10a04, Unassigned), (0x10a05, NonspacingMark), (0x10a07, Unassigned), (0x10a0c, NonspacingMark),
            (0x10a10, OtherLetter), (0x10a14, Unassigned), (0x10a15, OtherLetter), (0x10a18, Unassigned),
            (0x10a19, OtherLetter), (0x10a36, Unassigned), (0x10a38, NonspacingMark), (0x10a3b, Unassigned),
            (0x10a3f, NonspacingMark), (0x10a40, OtherNumber), (0x10a49, Unassigned), (0x10a50, OtherPunctuation),
            (0x10a59, Unassigned), (0x10a60, OtherLetter), (0x10a7d, OtherNumber), (0x10a7f, OtherPunctuation),
            (0x10a80, OtherLetter), (0x10a9d, OtherNumber), (0x10aa0, Unassigned), (0x10ac0, OtherLetter),
            (0x10ac8, OtherSymbol), (0x10ac9, OtherLetter), (0x10ae5, NonspacingMark), (0x10ae7, Unassigned),
            (0x10aeb, OtherNumber), (0x10af0, OtherPunctuation), (0x10af7, Unassigned), (0x10b00, OtherLetter),
            (0x10b36, Unassigned), (0x10b39, OtherPunctuation), (0x10b40, OtherLetter), (0x10b56, Unassigned),
            (0x10b58, OtherNumber), (0x10b60, OtherLetter), (0x10b73, Unassigned), (0x10b78, OtherNumber),
            (0x10b80, OtherLetter), (0x10b92, Unassigned), (0x10b99, OtherPunctuation), (0x10b9d, Unassigned),
            (0x10ba9, OtherNumber), (0x10bb0, Unassigned), (0x10c00, OtherLetter), (0x10c49, Unassigned),
            (0x10c80, UppercaseLetter), (0x10cb3, Unassigned), (0x10cc0, LowercaseLetter), (0x10cf3, Unassigned),
            (0x10cfa, OtherNumber), (0x10d00, OtherLetter), (0x10d24, NonspacingMark), (0x10d28, Unassigned),
            (0x10d30, DecimalNumber), (0x10d3a, Unassigned), (0x10e60, OtherNumber), (0x10e7f, Unassigned),
            (0x10e80, OtherLetter), (0x10eaa, Unassigned), (0x10eab, NonspacingMark), (0x10ead, DashPunctuation),
            (0x10eae, Unassigned), (0x10eb0, OtherLetter), (0x10eb2, Unassigned), (0x10f00, OtherLetter),
            (0x10f1d, OtherNumber), (0x10f27, OtherLetter), (0x10f28, Unassigned), (0x10f30, OtherLetter),
            (0x10f46, NonspacingMark), (0x10f51, OtherNumber), (0x10f55, OtherPunctuation), (0x10f5a, Unassigned),
            (0x10f70, OtherLetter), (0x10f82, NonspacingMark), (0x10f86, OtherPunctuation), (0x10f8a, Unassigned),
            (0x10fb0, OtherLetter), (0x10fc5, OtherNumber), (0x10fcc, Unassigned), (0x10fe0, OtherLetter),
            (0x10ff7, Unassigned), (0x11000, SpacingMark), (0x11001, NonspacingMark), (0x11002, SpacingMark),
            (0x11003, OtherLetter), (0x11038, NonspacingMark), (0x11047, OtherPunctuation), (0x1104e, Unassigned),
            (0x11052, OtherNumber), (0x11066, DecimalNumber), (0x11070, NonspacingMark), (0x11071, OtherLetter),
            (0x11073, NonspacingMark), (0x11075, OtherLetter), (0x11076, Unassigned), (0x1107f, NonspacingMark),
            (0x11082, SpacingMark), (0x11083, OtherLetter), (0x110b0, SpacingMark), (0x110b3, NonspacingMark),
            (0x110b7, SpacingMark), (0x110b9, NonspacingMark), (0x110bb, OtherPunctuation), (0x110bd, Format),
            (0x110be, OtherPunctuation), (0x110c2, NonspacingMark), (0x110c3, Unassigned), (0x110cd, Format),
            (0x110ce, Unassigned), (0x110d0, OtherLetter), (0x110e9, Unassigned), (0x110f0, DecimalNumber),
            (0x110fa, Unassigned), (0x11100, NonspacingMark), (0x11103, OtherLetter), (0x11127, NonspacingMark),
            (0x1112c, SpacingMark), (0x1112d, NonspacingMark), (0x11135, Unassigned), (0x11136, DecimalNumber),
            (0x11140, OtherPunctuation), (0x11144, OtherLetter), (0x11145, SpacingMark), (0x11147, OtherLetter),
            (0x11148, Unassigned), (0x11150, OtherLetter), (0x11173, NonspacingMark), (0x11174, OtherPunctuation),
            (0x11176, OtherLetter), (0x11177, Unassigned), (0x11180, NonspacingMark), (0x11182, SpacingMark),
            (0x11183, OtherLetter), (0x111b3, SpacingMark), (0x111b6, NonspacingMark), (0x111bf, SpacingMark),
            (0x111c1, OtherLetter), (0x111c5, OtherPunctuation), (0x111c9, NonspacingMark), (0x111cd, OtherPunctuation),
            (0x111ce, SpacingMark), (0x111cf, NonspacingMark), (0x111d0, DecimalNumber), (0x111da, OtherLetter),
            (0x111db, OtherPunctuation), (0x111dc, OtherLetter), (0x111dd, OtherPunctuation), (0x111e0, Unassigned),
            (0x111e1, OtherNumber), (0x111f5, Unassigned), (0x11200, OtherLetter), (0x11212, Unassigned),
            (0x11213, OtherLetter), (0x1122c, SpacingMark), (0x1122f, NonspacingMark), (0x11232, SpacingMark),
            (0x11234, NonspacingMark), (0x11235, SpacingMark), (0x11236, NonspacingMark), (0x11238, OtherPunctuation),
            (0x1123e, NonspacingMark), (0x1123f, Unassigned), (0x11280, OtherLetter), (0x11287, Unassigned),
            (0x11288, OtherLetter), (0x11289, Unassigned), (0x1128a, OtherLetter), (0x1128e, Unassigned),
            (0x1128f, OtherLetter), (0x1129e, Unassigned), (0x1129f, OtherLetter), (0x112a9, OtherPunctuation),
            (0x112aa, Unassigned), (0x112b0, OtherLetter), (0x112df, NonspacingMark), (0x112e0, SpacingMark),
            (0x112e3, NonspacingMark), (0x112eb, Unassigned), (0x112f0, DecimalNumber), (0x112fa, Unassigned),
            (0x11300, NonspacingMark), (0x11302, SpacingMark), (0x11304, Unassigned), (0x11305, OtherLetter),
            (0x1130d, Unassigned), (0x1130f, OtherLetter), (0x11311, Unassigned), (0x11313, OtherLetter),
            (0x11329, Unassigned), (0x1132a, OtherLetter), (0x11331, Unassigned), (0x11332, OtherLetter),
            (0x11334, Unassigned), (0x11335, OtherLetter), (0x1133a, Unassigned), (0x1133b, NonspacingMark),
            (0x1133d, OtherLetter), (0x1133e, SpacingMark), (0x11340, NonspacingMark), (0x11341, SpacingMark),
            (0x11345, Unassigned), (0x11347, SpacingMark), (0x11349, Unassigned), (0x1134b, SpacingMark),
            (0x1134e, Unassigned), (0x11350, OtherLetter), (0x11351, Unassigned), (0x11357, SpacingMark),
            (0x11358, Unassigned), (0x1135d, OtherLetter), (0x11362, SpacingMark), (0x11364, Unassigned),
            (0x11366, NonspacingMark), (0x1136d, Unassigned), (0x11370, NonspacingMark), (0x11375, Unassigned),
            (0x11400, OtherLetter), (0x11435, SpacingMark), (0x11438, NonspacingMark), (0x11440, SpacingMark),
            (0x11442, NonspacingMark), (0x11445, SpacingMark), (0x11446, NonspacingMark), (0x11447, OtherLetter),
            (0x1144b, OtherPunctuation), (0x11450, DecimalNumber), (0x1145a, OtherPunctuation), (0x1145c, Unassigned),
            (0x1145d, OtherPunctuation), (0x1145e, NonspacingMark), (0x1145f, OtherLetter), (0x11462, Unassigned),
            (0x11480, OtherLetter), (0x114b0, SpacingMark), (0x114b3, NonspacingMark), (0x114b9, SpacingMark),
            (0x114ba, NonspacingMark), (0x114bb, SpacingMark), (0x114bf, NonspacingMark), (0x114c1, SpacingMark),
            (0x114c2, NonspacingMark), (0x114c4, OtherLetter), (0x114c6, OtherPunctuation), (0x114c7, OtherLetter),
            (0x114c8, Unassigned), (0x114d0, DecimalNumber), (0x114da, Unassigned), (0x11580, OtherLetter),
            (0x115af, SpacingMark), (0x115b2, NonspacingMark), (0x115b6, Unassigned), (0x115b8, SpacingMark),
            (0x115bc, NonspacingMark), (0x115be, SpacingMark), (0x115bf, NonspacingMark), (0x115c1, OtherPunctuation),
            (0x115d8, OtherLetter), (0x115dc, NonspacingMark), (0x115de, Unassigned), (0x11600, OtherLetter),
            (0x11630, SpacingMark), (0x11633, NonspacingMark), (0x1163b, SpacingMark), (0x1163d, NonspacingMark),
            (0x1163e, SpacingMark), (0x1163f, NonspacingMark), (0x11641, OtherPunctuation), (0x11644, OtherLetter),
            (0x11645, Unassigned), (0x11650, DecimalNumber), (0x1165a, Unassigned), (0x11660, OtherPunctuation),
            (0x1166d, Unassigned), (0x11680, OtherLetter), (0x116ab, NonspacingMark), (0x116ac, SpacingMark),
            (0x116ad, NonspacingMark), (0x116ae, SpacingMark), (0x116b0, NonspacingMark), (0x116b6, SpacingMark),
            (0x116b7, NonspacingMark), (0x116b8, OtherLetter), (0x116b9, OtherPunctuation), (0x116ba, Unassigned),
            (0x116c0, DecimalNumber), (0x116ca, Unassigned), (0x11700, OtherLetter), (0x1171b, Unassigned),
            (0x1171d, NonspacingMark), (0x11720, SpacingMark), (0x11722, NonspacingMark), (0x11726, SpacingMark),
            (0x11727, NonspacingMark), (0x1172c, Unassigned), (0x11730, DecimalNumber), (0x1173a, OtherNumber),
            (0x1173c, OtherPunctuation), (0x1173f, OtherSymbol), (0x11740, OtherLetter), (0x11747, Unassigned),
            (0x11800, OtherLetter), (0x1182c, SpacingMark), (0x1182f, NonspacingMark), (0x11838, SpacingMark),
            (0x11839, NonspacingMark), (0x1183b, OtherPunctuation), (0x1183c, Unassigned), (0x118a0, UppercaseLetter),
            (0x118c0, LowercaseLetter), (0x118e0, DecimalNumber), (0x118ea, OtherNumber), (0x118f3, Unassigned),
            (0x118ff, OtherLetter), (0x11907, Unassigned), (0x11909, OtherLetter), (0x1190a, Unassigned),
            (0x1190c, OtherLetter), (0x11914, Unassigned), (0x11915, OtherLetter), (0x11917, Unassigned),
            (0x11918, OtherLetter), (0x11930, SpacingMark), (0x11936, Unassigned), (0x11937, SpacingMark),
            (0x11939, Unassigned), (0x1193b, NonspacingMark), (0x1193d, SpacingMark), (0x1193e, NonspacingMark),
            (0x1193f, OtherLetter), (0x11940, SpacingMark), (0x11941, OtherLetter), (0x11942, SpacingMark),
            (0x11943, NonspacingMark), (0x11944, OtherPunctuation), (0x11947, Unassigned), (0x11950, DecimalNumber),
            (0x1195a, Unassigned), (0x119a0, OtherLetter), (0x119a8, Unassigned), (0x119aa, OtherLetter),
            (0x119d1, SpacingMark), (0x119d4, NonspacingMark), (0x119d8, Unassigned), (0x119da, NonspacingMark),
            (0x119dc, SpacingMark), (0x119e0, NonspacingMark), (0x119e1, OtherLetter), (0x119e2, OtherPunctuation),
            (0x119e3, OtherLetter), (0x119e4, SpacingMark), (0x119e5, Unassigned), (0x11a00, OtherLetter),
            (0x11a01, NonspacingMark), (0x11a0b, OtherLetter), (0x11a33, NonspacingMark), (0x11a39, SpacingMark),
            (0x11a3a, OtherLetter), (0x11a3b, NonspacingMark), (0x11a3f, OtherPunctuation), (0x11a47, NonspacingMark),
            (0x11a48, Unassigned), (0x11a50, OtherLetter), (0x11a51, NonspacingMark), (0x11a57, SpacingMark),
            (0x11a59, NonspacingMark), (0x11a5c, OtherLetter), (0x11a8a, NonspacingMark), (0x11a97, SpacingMark),
            (0x11a98, NonspacingMark), (0x11a9a, OtherPunctuation), (0x11a9d, OtherLetter), (0x11a9e, OtherPunctuation),
            (0x11aa3, Unassigned), (0x11ab0, OtherLetter), (0x11af9, Unassigned), (0x11c00, OtherLetter),
            (0x11c09, Unassigned), (0x11c0a, OtherLetter), (0x11c2f, SpacingMark), (0x11c30, NonspacingMark),
            (0x11c37, Unassigned), (0x11c38, NonspacingMark), (0x11c3e, SpacingMark), (0x11c3f, NonspacingMark),
            (0x11c40, OtherLetter), (0x11c41, OtherPunctuation), (0x11c46, Unassigned), (0x11c50, DecimalNumber),
            (0x11c5a, OtherNumber), (0x11c6d, Unassigned), (0x11c70, OtherPunctuation), (0x11c72, OtherLetter),
            (0x11c90, Unassigned), (0x11c92, NonspacingMark), (0x11ca8, Unassigned), (0x11ca9, SpacingMark),
            (0x11caa, NonspacingMark), (0x11cb1, SpacingMark), (0x11cb2, NonspacingMark), (0x11cb4, SpacingMark),
            (0x11cb5, NonspacingMark), (0x11cb7, Unassigned), (0x11d00, OtherLetter), (0x11d07, Unassigned),
            (0x11d08, OtherLetter), (0x11d0a, Unassigned), (0x11d0b, OtherLetter), (0x11d31, NonspacingMark),
            (0x11d37, Unassigned), (0x11d3a, NonspacingMark), (0x11d3b, Unassigned), (0x11d3c, NonspacingMark),
            (0x11d3e, Unassigned), (0x11d3f, NonspacingMark), (0x11d46, OtherLetter), (0x11d47, NonspacingMark),
            (0x11d48, Unassigned), (0x11d50, DecimalNumber), (0x11d5a, Unassigned), (0x11d60, OtherLetter),
            (0x11d66, Unassigned), (0x11d67, OtherLetter), (0x11d69, Unassigned), (0x11d6a, OtherLetter),
            (0x11d8a, SpacingMark), (0x11d8f, Unassigned), (0x11d90, NonspacingMark), (0x11d92, Unassigned),
            (0x11d93, SpacingMark), (0x11d95, NonspacingMark), (0x11d96, SpacingMark), (0x11d97, NonspacingMark),
            (0x11d98, OtherLetter), (0x11d99, Unassigned), (0x11da0, DecimalNumber), (0x11daa, Unassigned),
            (0x11ee0, OtherLetter), (0x11ef3, NonspacingMark), (0x11ef5, SpacingMark), (0x11ef7, OtherPunctuation),
            (0x11ef9, Unassigned), (0x11fb0, OtherLetter), (0x11fb1, Unassigned), (0x11fc0, OtherNumber),
            (0x11fd5, OtherSymbol), (0x11fdd, CurrencySymbol), (0x11fe1, OtherSymbol), (0x11ff2, Unassigned),
            (0x11fff, OtherPunctuation), (0x12000, OtherLetter), (0x1239a, Unassigned), (0x12400, LetterNumber),
            (0x1246f, Unassigned), (0x12470, OtherPunctuation), (0x12475, Unassigned), (0x12480, OtherLetter),
            (0x12544, Unassigned), (0x12f90, OtherLetter), (0x12ff1, OtherPunctuation), (0x12ff3, Unassigned),
            (0x13000, OtherLetter), (0x1342f, Unassigned), (0x13430, Format), (0x13439, Unassigned),
            (0x14400, OtherLetter), (0x14647, Unassigned), (0x16800, OtherLetter), (0x16a39, Unassigned),
            (0x16a40, OtherLetter), (0x16a5f, Unassigned), (0x16a60, DecimalNumber), (0x16a6a, Unassigned),
            (0x16a6e, OtherPunctuation), (0x16a70, OtherLetter), (0x16abf, Unassigned), (0x16ac0, DecimalNumber),
            (0x16aca, Unassigned), (0x16ad0, OtherLetter), (0x16aee, Unassigned), (0x16af0, NonspacingMark),
            (0x16af5, OtherPunctuation), (0x16af6, Unassigned), (0x16b00, OtherLetter), (0x16b30, NonspacingMark),
            (0x16b37, OtherPunctuation), (0x16b3c, OtherSymbol), (0x16b40, ModifierLetter), (0x16b44, OtherPunctuation),
            (0x16b45, OtherSymbol), (0x16b46, Unassigned), (0x16b50, DecimalNumber), (0x16b5a, Unassigned),
            (0x16b5b, OtherNumber), (0x16b62, Unassigned), (0x16b63, OtherLetter), (0x16b78, Unassigned),
            (0x16b7d, OtherLetter), (0x16b90, Unassigned), (0x16e40, UppercaseLetter), (0x16e60, LowercaseLetter),
            (0x16e80, OtherNumber), (0x16e97, OtherPunctuation), (0x16e9b, Unassigned), (0x16f00, OtherLetter),
            (0x16f4b, Unassigned), (0x16f4f, NonspacingMark), (0x16f50, OtherLetter), (0x16f51, SpacingMark),
            (0x16f88, Unassigned), (0x16f8f, NonspacingMark), (0x16f93, ModifierLetter), (0x16fa0, Unassigned),
            (0x16fe0, ModifierLetter), (0x16fe2, OtherPunctuation), (0x16fe3, ModifierLetter), (0x16fe4, NonspacingMark),
            (0x16fe5, Unassigned), (0x16ff0, SpacingMark), (0x16ff2, Unassigned), (0x17000, OtherLetter),
            (0x187f8, Unassigned), (0x18800, OtherLetter), (0x18cd6, Unassigned), (0x18d00, OtherLetter),
            (0x18d09, Unassigned), (0x1aff0, ModifierLetter), (0x1aff4, Unassigned), (0x1aff5, ModifierLetter),
            (0x1affc, Unassigned), (0x1affd, ModifierLetter), (0x1afff, Unassigned), (0x1b000, OtherLetter),
            (0x1b123, Unassigned), (0x1b150, OtherLetter), (0x1b153, Unassigned), (0x1b164, OtherLetter),
            (0x1b168, Unassigned), (0x1b170, OtherLetter), (0x1b2fc, Unassigned), (0x1bc00, OtherLetter),
            (0x1bc6b, Unassigned), (0x1bc70, OtherLetter), (0x1bc7d, Unassigned), (0x1bc80, OtherLetter),
            (0x1bc89, Unassigned), (0x1bc90, OtherLetter), (0x1bc9a, Unassigned), (0x1bc9c, OtherSymbol),
            (0x1bc9d, NonspacingMark), (0x1bc9f, OtherPunctuation), (0x1bca0, Format), (0x1bca4, Unassigned),
            (0x1cf00, NonspacingMark), (0x1cf2e, Unassigned), (0x1cf30, NonspacingMark), (0x1cf47, Unassigned),
            (0x1cf50, OtherSymbol), (0x1cfc4, Unassigned), (0x1d000, OtherSymbol), (0x1d0f6, Unassigned),
            (0x1d100, OtherSymbol), (0x1d127, Unassigned), (0x1d129, OtherSymbol), (0x1d165, SpacingMark),
            (0x1d167, NonspacingMark), (0x1d16a, OtherSymbol), (0x1d16d, SpacingMark), (0x1d173, Format),
            (0x1d17b, NonspacingMark), (0x1d183, OtherSymbol), (0x1d185, NonspacingMark), (0x1d18c, OtherSymbol),
            (0x1d1aa, NonspacingMark), (0x1d1ae, OtherSymbol), (0x1d1eb, Unassigned), (0x1d200, OtherSymbol),
            (0x1d242, NonspacingMark), (0x1d245, OtherSymbol), (0x1d246, Unassigned), (0x1d2e0, OtherNumber),
            (0x1d2f4, Unassigned), (0x1d300, OtherSymbol), (0x1d357, Unassigned), (0x1d360, OtherNumber),
            (0x1d379, Unassigned), (0x1d400, UppercaseLetter), (0x1d41a, LowercaseLetter), (0x1d434, UppercaseLetter),
            (0x1d44e, LowercaseLetter), (0x1d455, Unassigned), (0x1d456, LowercaseLetter), (0x1d468, UppercaseLetter),
            (0x1d482, LowercaseLetter), (0x1d49c, UppercaseLetter), (0x1d49d, Unassigned), (0x1d49e, UppercaseLetter),
            (0x1d4a0, Unassigned), (0x1d4a2, UppercaseLetter), (0x1d4a3, Unassigned), (0x1d4a5, UppercaseLetter),
            (0x1d4a7, Unassigned), (0x1d4a9, UppercaseLetter), (0x1d4ad, Unassigned), (0x1d4ae, UppercaseLetter),
            (0x1d4b6, LowercaseLetter), (0x1d4ba, Unassigned), (0x1d4bb, LowercaseLetter), (0x1d4bc, Unassigned),
            (0x1d4bd, LowercaseLetter), (0x1d4c4, Unassigned), (0x1d4c5, LowercaseLetter), (0x1d4d0, UppercaseLetter),
            (0x1d4ea, LowercaseLetter), (0x1d504, UppercaseLetter), (0x1d506, Unassigned), (0x1d507, UppercaseLetter),
            (0x1d50b, Unassigned), (0x1d50d, UppercaseLetter), (0x1d515, Unassigned), (0x1d516, UppercaseLetter),
            (0x1d51d, Unassigned), (0x1d51e, LowercaseLetter), (0x1d538, UppercaseLetter), (0x1d53a, Unassigned),
            (0x1d53b, UppercaseLetter), (0x1d53f, Unassigned), (0x1d540, UppercaseLetter), (0x1d545, Unassigned),
            (0x1d546, UppercaseLetter), (0x1d547, Unassigned), (0x1d54a, UppercaseLetter), (0x1d551, Unassigned),
            (0x1d552, LowercaseLetter), (0x1d56c, UppercaseLetter), (0x1d586, LowercaseLetter), (0x1d5a0, UppercaseLetter),
            (0x1d5ba, LowercaseLetter), (0x1d5d4, UppercaseLetter), (0x1d5ee, LowercaseLetter), (0x1d608, UppercaseLetter),
            (0x1d622, LowercaseLetter), (0x1d63c, UppercaseLetter), (0x1d656, LowercaseLetter), (0x1d670, UppercaseLetter),
            (0x1d68a, LowercaseLetter), (0x1d6a6, Unassigned), (0x1d6a8, UppercaseLetter), (0x1d6c1, MathSymbol),
            (0x1d6c2, LowercaseLetter), (0x1d6db, MathSymbol), (0x1d6dc, LowercaseLetter), (0x1d6e2, UppercaseLetter),
            (0x1d6fb, MathSymbol), (0x1d6fc, LowercaseLetter), (0x1d715, MathSymbol), (0x1d716, LowercaseLetter),
            (0x1d71c, UppercaseLetter), (0x1d735, MathSymbol), (0x1d736, LowercaseLetter), (0x1d74f, MathSymbol),
            (0x1d750, LowercaseLetter), (0x1d756, UppercaseLetter), (0x1d76f, MathSymbol), (0x1d770, LowercaseLetter),
            (0x1d789, MathSymbol), (0x1d78a, LowercaseLetter), (0x1d790, UppercaseLetter), (0x1d7a9, MathSymbol),
            (0x1d7aa, LowercaseLetter), (0x1d7c3, MathSymbol), (0x1d7c4, LowercaseLetter), (0x1d7ca, UppercaseLetter),
            (0x1d7cb, LowercaseLetter), (0x1d7cc, Unassigned), (0x1d7ce, DecimalNumber), (0x1d800, OtherSymbol),
            (0x1da00, NonspacingMark), (0x1da37, OtherSymbol), (0x1da3b, NonspacingMark), (0x1da6d, OtherSymbol),
            (0x1da75, NonspacingMark), (0x1da76, OtherSymbol), (0x1da84, NonspacingMark), (0x1da85, OtherSymbol),
            (0x1da87, OtherPunctuation), (0x1da8c, Unassigned), (0x1da9b, NonspacingMark), (0x1daa0, Unassigned),
            (0x1daa1, NonspacingMark), (0x1dab0, Unassigned), (0x1df00, LowercaseLetter), (0x1df0a, OtherLetter),
            (0x1df0b, LowercaseLetter), (0x1df1f, Unassigned), (0x1e000, NonspacingMark), (0x1e007, Unassigned),
            (0x1e008, NonspacingMark), (0x1e019, Unassigned), (0x1e01b, NonspacingMark), (0x1e022, Unassigned),
            (0x1e023, NonspacingMark), (0x1e025, Unassigned), (0x1e026, NonspacingMark), (0x1e02b, Unassigned),
            (0x1e100, OtherLetter), (0x1e12d, Unassigned), (0x1e130, NonspacingMark), (0x1e137, ModifierLetter),
            (0x1e13e, Unassigned), (0x1e140, DecimalNumber), (0x1e14a, Unassigned), (0x1e14e, OtherLetter),
            (0x1e14f, OtherSymbol), (0x1e150, Unassigned), (0x1e290, OtherLetter), (0x1e2ae, NonspacingMark),
            (0x1e2af, Unassigned), (0x1e2c0, OtherLetter), (0x1e2ec, NonspacingMark), (0x1e2f0, DecimalNumber),
            (0x1e2fa, Unassigned), (0x1e2ff, CurrencySymbol), (0x1e300, Unassigned), (0x1e7e0, OtherLetter),
            (0x1e7e7, Unassigned), (0x1e7e8, OtherLetter), (0x1e7ec, Unassigned), (0x1e7ed, OtherLetter),
            (0x1e7ef, Unassigned), (0x1e7f0, OtherLetter), (0x1e7ff, Unassigned), (0x1e800, OtherLetter),
            (0x1e8c5, Unassigned), (0x1e8c7, OtherNumber), (0x1e8d0, NonspacingMark), (0x1e8d7, Unassigned),
            (0x1e900, UppercaseLetter), (0x1e922, LowercaseLetter), (0x1e944, NonspacingMark), (0x1e94b, ModifierLetter),
            (0x1e94c, Unassigned), (0x1e950, DecimalNumber), (0x1e95a, Unassigned), (0x1e95e, OtherPunctuation),
            (0x1e960, Unassigned), (0x1ec71, OtherNumber), (0x1ecac, OtherSymbol), (0x1ecad, OtherNumber),
            (0x1ecb0, CurrencySymbol), (0x1ecb1, OtherNumber), (0x1ecb5, Unassigned), (0x1ed01, OtherNumber),
            (0x1ed2e, OtherSymbol), (0x1ed2f, OtherNumber), (0x1ed3e, Unassigned), (0x1ee00, OtherLetter),
            (0x1ee04, Unassigned), (0x1ee05, OtherLetter), (0x1ee20, Unassigned), (0x1ee21, OtherLetter),
            (0x1ee23, Unassigned), (0x1ee24, OtherLetter), (0x1ee25, Unassigned), (0x1ee27, OtherLetter),
            (0x1ee28, Unassigned), (0x1ee29, OtherLetter), (0x1ee33, Unassigned), (0x1ee34, OtherLetter),
            (0x1ee38, Unassigned), (0x1ee39, OtherLetter), (0x1ee3a, Unassigned), (0x1ee3b, OtherLetter),
            (0x1ee3c, Unassigned), (0x1ee42, OtherLetter), (0x1ee43, Unassigned), (0x1ee47, OtherLetter),
            (0x1ee48, Unassigned), (0x1ee49, OtherLetter), (0x1ee4a, Unassigned), (0x1ee4b, OtherLetter),
            (0x1ee4c, Unassigned), (0x1ee4d, OtherLetter), (0x1ee50, Unassigned), (0x1ee51, OtherLetter),
            (0x1ee53, Unassigned), (0x1ee54, OtherLetter), (0x1ee55, Unassigned), (0x1ee57, OtherLetter),
            (0x1ee58, Unassigned), (0x1ee59, OtherLetter), (0x1ee5a, Unassigned), (0x1ee5b, OtherLetter),
            (0x1ee5c, Unassigned), (0x1ee5d, OtherLetter), (0x1ee5e, Unassigned), (0x1ee5f, OtherLetter),
            (0x1ee60, Unassigned), (0x1ee61, OtherLetter), (0x1ee63, Unassigned), (0x1ee64, OtherLetter),
            (0x1ee65, Unassigned), (0x1ee67, OtherLetter), (0x1ee6b, Unassigned), (0x1ee6c, OtherLetter),
            (0x1ee73, Unassigned), (0x1ee74, OtherLetter), (0x1ee78, Unassigned), (0x1ee79, OtherLetter),
            (0x1ee7d, Unassigned), (0x1ee7e, OtherLetter), (0x1ee7f, Unassigned), (0x1ee80, OtherLetter),
            (0x1ee8a, Unassigned), (0x1ee8b, OtherLetter), (0x1ee9c, Unassigned), (0x1eea1, OtherLetter),
            (0x1eea4, Unassigned), (0x1eea5, OtherLetter), (0x1eeaa, Unassigned), (0x1eeab, OtherLetter),
            (0x1eebc, Unassigned), (0x1eef0, MathSymbol), (0x1eef2, Unassigned), (0x1f000, OtherSymbol),
            (0x1f02c, Unassigned), (0x1f030, OtherSymbol), (0x1f094, Unassigned), (0x1f0a0, OtherSymbol),
            (0x1f0af, Unassigned), (0x1f0b1, OtherSymbol), (0x1f0c0, Unassigned), (0x1f0c1, OtherSymbol),
            (0x1f0d0, Unassigned), (0x1f0d1, OtherSymbol), (0x1f0f6, Unassigned), (0x1f100, OtherNumber),
            (0x1f10d, OtherSymbol), (0x1f1ae, Unassigned), (0x1f1e6, OtherSymbol), (0x1f203, Unassigned),
            (0x1f210, OtherSymbol), (0x1f23c, Unassigned), (0x1f240, OtherSymbol), (0x1f249, Unassigned),
            (0x1f250, OtherSymbol), (0x1f252, Unassigned), (0x1f260, OtherSymbol), (0x1f266, Unassigned),
            (0x1f300, OtherSymbol), (0x1f3fb, ModifierSymbol), (0x1f400, OtherSymbol), (0x1f6d8, Unassigned),
            (0x1f6dd, OtherSymbol), (0x1f6ed, Unassigned), (0x1f6f0, OtherSymbol), (0x1f6fd, Unassigned),
            (0x1f700, OtherSymbol), (0x1f774, Unassigned), (0x1f780, OtherSymbol), (0x1f7d9, Unassigned),
            (0x1f7e0, OtherSymbol), (0x1f7ec, Unassigned), (0x1f7f0, OtherSymbol), (0x1f7f1, Unassigned),
            (0x1f800, OtherSymbol), (0x1f80c, Unassigned), (0x1f810, OtherSymbol), (0x1f848, Unassigned),
            (0x1f850, OtherSymbol), (0x1f85a, Unassigned), (0x1f860, OtherSymbol), (0x1f888, Unassigned),
            (0x1f890, OtherSymbol), (0x1f8ae, Unassigned), (0x1f8b0, OtherSymbol), (0x1f8b2, Unassigned),
            (0x1f900, OtherSymbol), (0x1fa54, Unassigned), (0x1fa60, OtherSymbol), (0x1fa6e, Unassigned),
            (0x1fa70, OtherSymbol), (0x1fa75, Unassigned), (0x1fa78, OtherSymbol), (0x1fa7d, Unassigned),
            (0x1fa80, OtherSymbol), (0x1fa87, Unassigned), (0x1fa90, OtherSymbol), (0x1faad, Unassigned),
            (0x1fab0, OtherSymbol), (0x1fabb, Unassigned), (0x1fac0, OtherSymbol), (0x1fac6, Unassigned),
            (0x1fad0, OtherSymbol), (0x1fada, Unassigned), (0x1fae0, OtherSymbol), (0x1fae8, Unassigned),
            (0x1faf0, OtherSymbol), (0x1faf7, Unassigned), (0x1fb00, OtherSymbol), (0x1fb93, Unassigned),
            (0x1fb94, OtherSymbol), (0x1fbcb, Unassigned), (0x1fbf0, DecimalNumber), (0x1fbfa, Unassigned),
            (0x20000, OtherLetter), (0x2a6e0, Unassigned), (0x2a700, OtherLetter), (0x2b739, Unassigned),
            (0x2b740, OtherLetter), (0x2b81e, Unassigned), (0x2b820, OtherLetter), (0x2cea2, Unassigned),
            (0x2ceb0, OtherLetter), (0x2ebe1, Unassigned), (0x2f800, OtherLetter), (0x2fa1e, Unassigned),
            (0x30000, OtherLetter), (0x3134b, Unassigned), (0xe0001, Format), (0xe0002, Unassigned),
            (0xe0020, Format), (0xe0080, Unassigned), (0xe0100, NonspacingMark), (0xe01f0, Unassigned),
            (0xf0000, PrivateUse), (0xffffe, Unassigned), (0x100000, PrivateUse), (0x10fffe, Unassigned),
        ],
        Unassigned,
    );
}

pub(crate) mod bidi {
    use super::BidiClass::{self, *};
    use crate::table::SparseTable;

    pub(crate) static TABLE: SparseTable<BidiClass> = SparseTable::from_static(
        &[
            (0x0, BN), (0x9, S), (0xa, B), (0xb, S), (0xc, WS),
            (0xd, B), (0xe, BN), (0x1c, B), (0x1f, S), (0x20, WS),
            (0x21, ON), (0x23, ET), (0x26, ON), (0x2b, ES), (0x2c, CS),
            (0x2d, ES), (0x2e, CS), (0x30, EN), (0x3a, CS), (0x3b, ON),
            (0x41, L), (0x5b, ON), (0x61, L), (0x7b, ON), (0x7f, BN),
            (0x85, B), (0x86, BN), (0xa0, CS), (0xa1, ON), (0xa2, ET),
            (0xa6, ON), (0xaa, L), (0xab, ON), (0xad, BN), (0xae, ON),
            (0xb0, ET), (0xb2, EN), (0xb4, ON), (0xb5, L), (0xb6, ON),
            (0xb9, EN), (0xba, L), (0xbb, ON), (0xc0, L), (0xd7, ON),
            (0xd8, L), (0xf7, ON), (0xf8, L), (0x2b9, ON), (0x2bb, L),
            (0x2c2, ON), (0x2d0, L), (0x2d2, ON), (0x2e0, L), (0x2e5, ON),
            (0x2ee, L), (0x2ef, ON), (0x300, NSM), (0x370, L), (0x374, ON),
            (0x376, L), (0x37e, ON), (0x37f, L), (0x384, ON), (0x386, L),
            (0x387, ON), (0x388, L), (0x3f6, ON), (0x3f7, L), (0x483, NSM),
            (0x48a, L), (0x58a, ON), (0x58b, L), (0x58d, ON), (0x58f, ET),
            (0x590, L), (0x591, NSM), (0x5be, R), (0x5bf, NSM), (0x5c0, R),
            (0x5c1, NSM), (0x5c3, R), (0x5c4, NSM), (0x5c6, R), (0x5c7, NSM),
            (0x5c8, L), (0x5d0, R), (0x5eb, L), (0x5ef, R), (0x5f5, L),
            (0x600, AN), (0x606, ON), (0x608, AL), (0x609, ET), (0x60b, AL),
            (0x60c, CS), (0x60d, AL), (0x60e, ON), (0x610, NSM), (0x61b, AL),
            (0x64b, NSM), (0x660, AN), (0x66a, ET), (0x66b, AN), (0x66d, AL),
            (0x670, NSM), (0x671, AL), (0x6d6, NSM), (0x6dd, AN), (0x6de, ON),
            (0x6df, NSM), (0x6e5, AL), (0x6e7, NSM), (0x6e9, ON), (0x6ea, NSM),
            (0x6ee, AL), (0x6f0, EN), (0x6fa, AL), (0x70e, L), (0x70f, AL),
            (0x711, NSM), (0x712, AL), (0x730, NSM), (0x74b, L), (0x74d, AL),
            (0x7a6, NSM), (0x7b1, AL), (0x7b2, L), (0x7c0, R), (0x7eb, NSM),
            (0x7f4, R), (0x7f6, ON), (0x7fa, R), (0x7fb, L), (0x7fd, NSM),
            (0x7fe, R), (0x816, NSM), (0x81a, R), (0x81b, NSM), (0x824, R),
            (0x825, NSM), (0x828, R), (0x829, NSM), (0x82e, L), (0x830, R),
            (0x83f, L), (0x840, R), (0x859, NSM), (0x85c, L), (0x85e, R),
            (0x85f, L), (0x860, AL), (0x86b, L), (0x870, AL), (0x88f, L),
            (0x890, AN), (0x892, L), (0x898, NSM), (0x8a0, AL), (0x8ca, NSM),
            (0x8e2, AN), (0x8e3, NSM), (0x903, L), (0x93a, NSM), (0x93b, L),
            (0x93c, NSM), (0x93d, L), (0x941, NSM), (0x949, L), (0x94d, NSM),
            (0x94e, L), (0x951, NSM), (0x958, L), (0x962, NSM), (0x964, L),
            (0x981, NSM), (0x982, L), (0x9bc, NSM), (0x9bd, L), (0x9c1, NSM),
            (0x9c5, L), (0x9cd, NSM), (0x9ce, L), (0x9e2, NSM), (0x9e4, L),
            (0x9f2, ET), (0x9f4, L), (0x9fb, ET), (0x9fc, L), (0x9fe, NSM),
            (0x9ff, L), (0xa01, NSM), (0xa03, L), (0xa3c, NSM), (0xa3d, L),
            (0xa41, NSM), (0xa43, L), (0xa47, NSM), (0xa49, L), (0xa4b, NSM),
            (0xa4e, L), (0xa51, NSM), (0xa52, L), (0xa70, NSM), (0xa72, L),
            (0xa75, NSM), (0xa76, L), (0xa81, NSM), (0xa83, L), (0xabc, NSM),
            (0xabd, L), (0xac1, NSM), (0xac6, L), (0xac7, NSM), (0xac9, L),
            (0xacd, NSM), (0xace, L), (0xae2, NSM), (0xae4, L), (0xaf1, ET),
            (0xaf2, L), (0xafa, NSM), (0xb00, L), (0xb01, NSM), (0xb02, L),
            (0xb3c, NSM), (0xb3d, L), (0xb3f, NSM), (0xb40, L), (0xb41, NSM),
            (0xb45, L), (0xb4d, NSM), (0xb4e, L), (0xb55, NSM), (0xb57, L),
            (0xb62, NSM), (0xb64, L), (0xb82, NSM), (0xb83, L), (0xbc0, NSM),
            (0xbc1, L), (0xbcd, NSM), (0xbce, L), (0xbf3, ON), (0xbf9, ET),
            (0xbfa, ON), (0xbfb, L), (0xc00, NSM), (0xc01, L), (0xc04, NSM),
            (0xc05, L), (0xc3c, NSM), (0xc3d, L), (0xc3e, NSM), (0xc41, L),
            (0xc46, NSM), (0xc49, L), (0xc4a, NSM), (0xc4e, L), (0xc55, NSM),
            (0xc57, L), (0xc62, NSM), (0xc64, L), (0xc78, ON), (0xc7f, L),
            (0xc81, NSM), (0xc82, L), (0xcbc, NSM), (0xcbd, L), (0xccc, NSM),
            (0xcce, L), (0xce2, NSM), (0xce4, L), (0xd00, NSM), (0xd02, L),
            (0xd3b, NSM), (0xd3d, L), (0xd41, NSM), (0xd45, L), (0xd4d, NSM),
            (0xd4e, L), (0xd62, NSM), (0xd64, L), (0xd81, NSM), (0xd82, L),
            (0xdca, NSM), (0xdcb, L), (0xdd2, NSM), (0xdd5, L), (0xdd6, NSM),
            (0xdd7, L), (0xe31, NSM), (0xe32, L), (0xe34, NSM), (0xe3b, L),
            (0xe3f, ET), (0xe40, L), (0xe47, NSM), (0xe4f, L), (0xeb1, NSM),
            (0xeb2, L), (0xeb4, NSM), (0xebd, L), (0xec8, NSM), (0xece, L),
            (0xf18, NSM), (0xf1a, L), (0xf35, NSM), (0xf36, L), (0xf37, NSM),
            (0xf38, L), (0xf39, NSM), (0xf3a, ON), (0xf3e, L), (0xf71, NSM),
            (0xf7f, L), (0xf80, NSM), (0xf85, L), (0xf86, NSM), (0xf88, L),
            (0xf8d, NSM), (0xf98, L), (0xf99, NSM), (0xfbd, L), (0xfc6, NSM),
            (0xfc7, L), (0x102d, NSM), (0x1031, L), (0x1032, NSM), (0x1038, L),
            (0x1039, NSM), (0x103b, L), (0x103d, NSM), (0x103f, L), (0x1058, NSM),
            (0x105a, L), (0x105e, NSM), (0x1061, L), (0x1071, NSM), (0x1075, L),
            (0x1082, NSM), (0x1083, L), (0x1085, NSM), (0x1087, L), (0x108d, NSM),
            (0x108e, L), (0x109d, NSM), (0x109e, L), (0x135d, NSM), (0x1360, L),
            (0x1390, ON), (0x139a, L), (0x1400, ON), (0x1401, L), (0x1680, WS),
            (0x1681, L), (0x169b, ON), (0x169d, L), (0x1712, NSM), (0x1715, L),
            (0x1732, NSM), (0x1734, L), (0x1752, NSM), (0x1754, L), (0x1772, NSM),
            (0x1774, L), (0x17b4, NSM), (0x17b6, L), (0x17b7, NSM), (0x17be, L),
            (0x17c6, NSM), (0x17c7, L), (0x17c9, NSM), (0x17d4, L), (0x17db, ET),
            (0x17dc, L), (0x17dd, NSM), (0x17de, L), (0x17f0, ON), (0x17fa, L),
            (0x1800, ON), (0x180b, NSM), (0x180e, BN), (0x180f, NSM), (0x1810, L),
            (0x1885, NSM), (0x1887, L), (0x18a9, NSM), (0x18aa, L), (0x1920, NSM),
            (0x1923, L), (0x1927, NSM), (0x1929, L), (0x1932, NSM), (0x1933, L),
            (0x1939, NSM), (0x193c, L), (0x1940, ON), (0x1941, L), (0x1944, ON),
            (0x1946, L), (0x19de, ON), (0x1a00, L), (0x1a17, NSM), (0x1a19, L),
            (0x1a1b, NSM), (0x1a1c, L), (0x1a56, NSM), (0x1a57, L), (0x1a58, NSM),
            (0x1a5f, L), (0x1a60, NSM), (0x1a61, L), (0x1a62, NSM), (0x1a63, L),
            (0x1a65, NSM), (0x1a6d, L), (0x1a73, NSM), (0x1a7d, L), (0x1a7f, NSM),
            (0x1a80, L), (0x1ab0, NSM), (0x1acf, L), (0x1b00, NSM), (0x1b04, L),
            (0x1b34, NSM), (0x1b35, L), (0x1b36, NSM), (0x1b3b, L), (0x1b3c, NSM),
            (0x1b3d, L), (0x1b42, NSM), (0x1b43, L), (0x1b6b, NSM), (0x1b74, L),
            (0x1b80, NSM), (0x1b82, L), (0x1ba2, NSM), (0x1ba6, L), (0x1ba8, NSM),
            (0x1baa, L), (0x1bab, NSM), (0x1bae, L), (0x1be6, NSM), (0x1be7, L),
            (0x1be8, NSM), (0x1bea, L), (0x1bed, NSM), (0x1bee, L), (0x1bef, NSM),
            (0x1bf2, L), (0x1c2c, NSM), (0x1c34, L), (0x1c36, NSM), (0x1c38, L),
            (0x1cd0, NSM), (0x1cd3, L), (0x1cd4, NSM), (0x1ce1, L), (0x1ce2, NSM),
            (0x1ce9, L), (0x1ced, NSM), (0x1cee, L), (0x1cf4, NSM), (0x1cf5, L),
            (0x1cf8, NSM), (0x1cfa, L), (0x1dc0, NSM), (0x1e00, L), (0x1fbd, ON),
            (0x1fbe, L), (0x1fbf, ON), (0x1fc2, L), (0x1fcd, ON), (0x1fd0, L),
            (0x1fdd, ON), (0x1fe0, L), (0x1fed, ON), (0x1ff0, L), (0x1ffd, ON),
            (0x1fff, L), (0x2000, WS), (0x200b, BN), (0x200e, L), (0x200f, R),
            (0x2010, ON), (0x2028, WS), (0x2029, B), (0x202a, LRE), (0x202b, RLE),
            (0x202c, PDF), (0x202d, LRO), (0x202e, RLO), (0x202f, CS), (0x2030, ET),
            (0x2035, ON), (0x2044, CS), (0x2045, ON), (0x205f, WS), (0x2060, BN),
            (0x2065, L), (0x2066, LRI), (0x2067, RLI), (0x2068, FSI), (0x2069, PDI),
            (0x206a, BN), (0x2070, EN), (0x2071, L), (0x2074, EN), (0x207a, ES),
            (0x207c, ON), (0x207f, L), (0x2080, EN), (0x208a, ES), (0x208c, ON),
            (0x208f, L), (0x20a0, ET), (0x20c1, L), (0x20d0, NSM), (0x20f1, L),
            (0x2100, ON), (0x2102, L), (0x2103, ON), (0x2107, L), (0x2108, ON),
            (0x210a, L), (0x2114, ON), (0x2115, L), (0x2116, ON), (0x2119, L),
            (0x211e, ON), (0x2124, L), (0x2125, ON), (0x2126, L), (0x2127, ON),
            (0x2128, L), (0x2129, ON), (0x212a, L), (0x212e, ET), (0x212f, L),
            (0x213a, ON), (0x213c, L), (0x2140, ON), (0x2145, L), (0x214a, ON),
            (0x214e, L), (0x2150, ON), (0x2160, L), (0x2189, ON), (0x218c, L),
            (0x2190, ON), (0x2212, ES), (0x2213, ET), (0x2214, ON), (0x2336, L),
            (0x237b, ON), (0x2395, L), (0x2396, ON), (0x2427, L), (0x2440, ON),
            (0x244b, L), (0x2460, ON), (0x2488, EN), (0x249c, L), (0x24ea, ON),
            (0x26ac, L), (0x26ad, ON), (0x2800, L), (0x2900, ON), (0x2b74, L),
            (0x2b76, ON), (0x2b96, L), (0x2b97, ON), (0x2c00, L), (0x2ce5, ON),
            (0x2ceb, L), (0x2cef, NSM), (0x2cf2, L), (0x2cf9, ON), (0x2d00, L),
            (0x2d7f, NSM), (0x2d80, L), (0x2de0, NSM), (0x2e00, ON), (0x2e5e, L),
            (0x2e80, ON), (0x2e9a, L), (0x2e9b, ON), (0x2ef4, L), (0x2f00, ON),
            (0x2fd6, L), (0x2ff0, ON), (0x2ffc, L), (0x3000, WS), (0x3001, ON),
            (0x3005, L), (0x3008, ON), (0x3021, L), (0x302a, NSM), (0x302e, L),
            (0x3030, ON), (0x3031, L), (0x3036, ON), (0x3038, L), (0x303d, ON),
            (0x3040, L), (0x3099, NSM), (0x309b, ON), (0x309d, L), (0x30a0, ON),
            (0x30a1, L), (0x30fb, ON), (0x30fc, L), (0x31c0, ON), (0x31e4, L),
            (0x321d, ON), (0x321f, L), (0x3250, ON), (0x3260, L), (0x327c, ON),
            (0x327f, L), (0x32b1, ON), (0x32c0, L), (0x32cc, ON), (0x32d0, L),
            (0x3377, ON), (0x337b, L), (0x33de, ON), (0x33e0, L), (0x33ff, ON),
            (0x3400, L), (0x4dc0, ON), (0x4e00, L), (0xa490, ON), (0xa4c7, L),
            (0xa60d, ON), (0xa610, L), (0xa66f, NSM), (0xa673, ON), (0xa674, NSM),
            (0xa67e, ON), (0xa680, L), (0xa69e, NSM), (0xa6a0, L), (0xa6f0, NSM),
            (0xa6f2, L), (0xa700, ON), (0xa722, L), (0xa788, ON), (0xa789, L),
            (0xa802, NSM), (0xa803, L), (0xa806, NSM), (0xa807, L), (0xa80b, NSM),
            (0xa80c, L), (0xa825, NSM), (0xa827, L), (0xa828, ON), (0xa82c, NSM),
            (0xa82d, L), (0xa838, ET), (0xa83a, L), (0xa874, ON), (0xa878, L),
            (0xa8c4, NSM), (0xa8c6, L), (0xa8e0, NSM), (0xa8f2, L), (0xa8ff, NSM),
            (0xa900, L), (0xa926, NSM), (0xa92e, L), (0xa947, NSM), (0xa952, L),
            (0xa980, NSM), (0xa983, L), (0xa9b3, NSM), (0xa9b4, L), (0xa9b6, NSM),
            (0xa9ba, L), (0xa9bc, NSM), (0xa9be, L), (0xa9e5, NSM), (0xa9e6, L),
            (0xaa29, NSM), (0xaa2f, L), (0xaa31, NSM), (0xaa33, L), (0xaa35, NSM),
            (0xaa37, L), (0xaa43, NSM), (0xaa44, L), (0xaa4c, NSM), (0xaa4d, L),
            (0xaa7c, NSM), (0xaa7d, L), (0xaab0, NSM), (0xaab1, L), (0xaab2, NSM),
            (0xaab5, L), (0xaab7, NSM), (0xaab9, L), (0xaabe, NSM), (0xaac0, L),
            (0xaac1, NSM), (0xaac2, L), (0xaaec, NSM), (0xaaee, L), (0xaaf6, NSM),
            (0xaaf7, L), (0xab6a, ON), (0xab6c, L), (0xabe5, NSM), (0xabe6, L),
            (0xabe8, NSM), (0xabe9, L), (0xabed, NSM), (0xabee, L), (0xfb1d, R),
            (0xfb1e, NSM), (0xfb1f, R), (0xfb29, ES), (0xfb2a, R), (0xfb37, L),
            (0xfb38, R), (0xfb3d, L), (0xfb3e, R), (0xfb3f, L), (0xfb40, R),
            (0xfb42, L), (0xfb43, R), (0xfb45, L), (0xfb46, R), (0xfb50, AL),
            (0xfbc3, L), (0xfbd3, AL), (0xfd3e, ON), (0xfd50, AL), (0xfd90, L),
            (0xfd92, AL), (0xfdc8, L), (0xfdcf, ON), (0xfdd0, L), (0xfdf0, AL),
            (0xfdfd, ON), (0xfe00, NSM), (0xfe10, ON), (0xfe1a, L), (0xfe20, NSM),
            (0xfe30, ON), (0xfe50, CS), (0xfe51, ON), (0xfe52, CS), (0xfe53, L),
            (0xfe54, ON), (0xfe55, CS), (0xfe56, ON), (0xfe5f, ET), (0xfe60, ON),
            (0xfe62, ES), (0xfe64, ON), (0xfe67, L), (0xfe68, ON), (0xfe69, ET),
            (0xfe6b, ON), (0xfe6c, L), (0xfe70, AL), (0xfe75, L), (0xfe76, AL),
            (0xfefd, L), (0xfeff, BN), (0xff00, L), (0xff01, ON), (0xff03, ET),
            (0xff06, ON), (0xff0b, ES), (0xff0c, CS), (0xff0d, ES), (0xff0e, CS),
            (0xff10, EN), (0xff1a, CS), (0xff1b, ON), (0xff21, L), (0xff3b, ON),
            (0xff41, L), (0xff5b, ON), (0xff66, L), (0xffe0, ET), (0xffe2, ON),
            (0xffe5, ET), (0xffe7, L), (0xffe8, ON), (0xffef, L), (0xfff9, ON),
            (0xfffe, L), (0x10101, ON), (0x10102, L), (0x10140, ON), (0x1018d, L),
            (0x10190, ON), (0x1019d, L), (0x101a0, ON), (0x101a1, L), (0x101fd, NSM),
            (0x101fe, L), (0x102e0, NSM), (0x102e1, EN), (0x102fc, L), (0x10376, NSM),
            (0x1037b, L), (0x10800, R), (0x10806, L), (0x10808, R), (0x10809, L),
            (0x1080a, R), (0x10836, L), (0x10837, R), (0x10839, L), (0x1083c, R),
            (0x1083d, L), (0x1083f, R), (0x10856, L), (0x10857, R), (0x1089f, L),
            (0x108a7, R), (0x108b0, L), (0x108e0, R), (0x108f3, L), (0x108f4, R),
            (0x108f6, L), (0x108fb, R), (0x1091c, L), (0x1091f, ON), (0x10920, R),
            (0x1093a, L), (0x1093f, R), (0x10940, L), (0x10980, R), (0x109b8, L),
            (0x109bc, R), (0x109d0, L), (0x109d2, R), (0x10a01, NSM), (0x10a04, L),
            (0x10a05, NSM), (0x10a07, L), (0x10a0c, NSM), (0x10a10, R), (0x10a14, L),
            (0x10a15, R), (0x10a18, L), (0x10a19, R), (0x10a36, L), (0x10a38, NSM),
            (0x10a3b, L), (0x10a3f, NSM), (0x10a40, R), (0x10a49, L), (0x10a50, R),
            (0x10a59, L), (0x10a60, R), (0x10aa0, L), (0x10ac0, R), (0x10ae5, NSM),
            (0x10ae7, L), (0x10aeb, R), (0x10af7, L), (0x10b00, R), (0x10b36, L),
            (0x10b39, ON), (0x10b40, R), (0x10b56, L), (0x10b58, R), (0x10b73, L),
            (0x10b78, R), (0x10b92, L), (0x10b99, R), (0x10b9d, L), (0x10ba9, R),
            (0x10bb0, L), (0x10c00, R), (0x10c49, L), (0x10c80, R), (0x10cb3, L),
            (0x10cc0, R), (0x10cf3, L), (0x10cfa, R), (0x10d00, AL), (0x10d24, NSM),
            (0x10d28, L), (0x10d30, AN), (0x10d3a, L), (0x10e60, AN), (0x10e7f, L),
            (0x10e80, R), (0x10eaa, L), (0x10eab, NSM), (0x10ead, R), (0x10eae, L),
            (0x10eb0, R), (0x10eb2, L), (0x10f00, R), (0x10f28, L), (0x10f30, AL),
            (0x10f46, NSM), (0x10f51, AL), (0x10f5a, L), (0x10f70, R), (0x10f82, NSM),
            (0x10f86, R), (0x10f8a, L), (0x10fb0, R), (0x10fcc, L), (0x10fe0, R),
            (0x10ff7, L), (0x11001, NSM), (0x11002, L), (0x11038, NSM), (0x11047, L),
            (0x11052, ON), (0x11066, L), (0x11070, NSM), (0x11071, L), (0x11073, NSM),
            (0x11075, L), (0x1107f, NSM), (0x11082, L), (0x110b3, NSM), (0x110b7, L),
            (0x110b9, NSM), (0x110bb, L), (0x110c2, NSM), (0x110c3, L), (0x11100, NSM),
            (0x11103, L), (0x11127, NSM), (0x1112c, L), (0x1112d, NSM), (0x11135, L),
            (0x11173, NSM), (0x11174, L), (0x11180, NSM), (0x11182, L), (0x111b6, NSM),
            (0x111bf, L), (0x111c9, NSM), (0x111cd, L), (0x111cf, NSM), (0x111d0, L),
            (0x1122f, NSM), (0x11232, L), (0x11234, NSM), (0x11235, L), (0x11236, NSM),
            (0x11238, L), (0x1123e, NSM), (0x1123f, L), (0x112df, NSM), (0x112e0, L),
            (0x112e3, NSM), (0x112eb, L), (0x11300, NSM), (0x11302, L), (0x1133b, NSM),
            (0x1133d, L), (0x11340, NSM), (0x11341, L), (0x11366, NSM), (0x1136d, L),
            (0x11370, NSM), (0x11375, L), (0x11438, NSM), (0x11440, L), (0x11442, NSM),
            (0x11445, L), (0x11446, NSM), (0x11447, L), (0x1145e, NSM), (0x1145f, L),
            (0x114b3, NSM), (0x114b9, L), (0x114ba, NSM), (0x114bb, L), (0x114bf, NSM),
            (0x114c1, L), (0x114c2, NSM), (0x114c4, L), (0x115b2, NSM), (0x115b6, L),
            (0x115bc, NSM), (0x115be, L), (0x115bf, NSM), (0x115c1, L), (0x115dc, NSM),
            (0x115de, L), (0x11633, NSM), (0x1163b, L), (0x1163d, NSM), (0x1163e, L),
            (0x1163f, NSM), (0x11641, L), (0x11660, ON), (0x1166d, L), (0x116ab, NSM),
            (0x116ac, L), (0x116ad, NSM), (0x116ae, L), (0x116b0, NSM), (0x116b6, L),
            (0x116b7, NSM), (0x116b8, L), (0x1171d, NSM), (0x11720, L), (0x11722, NSM),
            (0x11726, L), (0x11727, NSM), (0x1172c, L), (0x1182f, NSM), (0x11838, L),
            (0x11839, NSM), (0x1183b, L), (0x1193b, NSM), (0x1193d, L), (0x1193e, NSM),
            (0x1193f, L), (0x11943, NSM), (0x11944, L), (0x119d4, NSM), (0x119d8, L),
            (0x119da, NSM), (0x119dc, L), (0x119e0, NSM), (0x119e1, L), (0x11a01, NSM),
            (0x11a07, L), (0x11a09, NSM), (0x11a0b, L), (0x11a33, NSM), (0x11a39, L),
            (0x11a3b, NSM), (0x11a3f, L), (0x11a47, NSM), (0x11a48, L), (0x11a51, NSM),
            (0x11a57, L), (0x11a59, NSM), (0x11a5c, L), (0x11a8a, NSM), (0x11a97, L),
            (0x11a98, NSM), (0x11a9a, L), (0x11c30, NSM), (0x11c37, L), (0x11c38, NSM),
            (0x11c3e, L), (0x11c92, NSM), (0x11ca8, L), (0x11caa, NSM), (0x11cb1, L),
            (0x11cb2, NSM), (0x11cb4, L), (0x11cb5, NSM), (0x11cb7, L), (0x11d31, NSM),
            (0x11d37, L), (0x11d3a, NSM), (0x11d3b, L), (0x11d3c, NSM), (0x11d3e, L),
            (0x11d3f, NSM), (0x11d46, L), (0x11d47, NSM), (0x11d48, L), (0x11d90, NSM),
            (0x11d92, L), (0x11d95, NSM), (0x11d96, L), (0x11d97, NSM), (0x11d98, L),
            (0x11ef3, NSM), (0x11ef5, L), (0x11fd5, ON), (0x11fdd, ET), (0x11fe1, ON),
            (0x11ff2, L), (0x16af0, NSM), (0x16af5, L), (0x16b30, NSM), (0x16b37, L),
            (0x16f4f, NSM), (0x16f50, L), (0x16f8f, NSM), (0x16f93, L), (0x16fe2, ON),
            (0x16fe3, L), (0x16fe4, NSM), (0x16fe5, L), (0x1bc9d, NSM), (0x1bc9f, L),
            (0x1bca0, BN), (0x1bca4, L), (0x1cf00, NSM), (0x1cf2e, L), (0x1cf30, NSM),
            (0x1cf47, L), (0x1d167, NSM), (0x1d16a, L), (0x1d173, BN), (0x1d17b, NSM),
            (0x1d183, L), (0x1d185, NSM), (0x1d18c, L), (0x1d1aa, NSM), (0x1d1ae, L),
            (0x1d1e9, ON), (0x1d1eb, L), (0x1d200, ON), (0x1d242, NSM), (0x1d245, ON),
            (0x1d246, L), (0x1d300, ON), (0x1d357, L), (0x1d6db, ON), (0x1d6dc, L),
            (0x1d715, ON), (0x1d716, L), (0x1d74f, ON), (0x1d750, L), (0x1d789, ON),
            (0x1d78a, L), (0x1d7c3, ON), (0x1d7c4, L), (0x1d7ce, EN), (0x1d800, L),
            (0x1da00, NSM), (0x1da37, L), (0x1da3b, NSM), (0x1da6d, L), (0x1da75, NSM),
            (0x1da76, L), (0x1da84, NSM), (0x1da85, L), (0x1da9b, NSM), (0x1daa0, L),
            (0x1daa1, NSM), (0x1dab0, L), (0x1e000, NSM), (0x1e007, L), (0x1e008, NSM),
            (0x1e019, L), (0x1e01b, NSM), (0x1e022, L), (0x1e023, NSM), (0x1e025, L),
            (0x1e026, NSM), (0x1e02b, L), (0x1e130, NSM), (0x1e137, L), (0x1e2ae, NSM),
            (0x1e2af, L), (0x1e2ec, NSM), (0x1e2f0, L), (0x1e2ff, ET), (0x1e300, L),
            (0x1e800, R), (0x1e8c5, L), (0x1e8c7, R), (0x1e8d0, NSM), (0x1e8d7, L),
            (0x1e900, R), (0x1e944, NSM), (0x1e94b, R), (0x1e94c, L), (0x1e950, R),
            (0x1e95a, L), (0x1e95e, R), (0x1e960, L), (0x1ec71, AL), (0x1ecb5, L),
            (0x1ed01, AL), (0x1ed3e, L), (0x1ee00, AL), (0x1ee04, L), (0x1ee05, AL),
            (0x1ee20, L), (0x1ee21, AL), (0x1ee23, L), (0x1ee24, AL), (0x1ee25, L),
            (0x1ee27, AL), (0x1ee28, L), (0x1ee29, AL), (0x1ee33, L), (0x1ee34, AL),
            (0x1ee38, L), (0x1ee39, AL), (0x1ee3a, L), (0x1ee3b, AL), (0x1ee3c, L),
            (0x1ee42, AL), (0x1ee43, L), (0x1ee47, AL), (0x1ee48, L), (0x1ee49, AL),
            (0x1ee4a, L), (0x1ee4b, AL), (0x1ee4c, L), (0x1ee4d, AL), (0x1ee50, L),
            (0x1ee51, AL), (0x1ee53, L), (0x1ee54, AL), (0x1ee55, L), (0x1ee57, AL),
            (0x1ee58, L), (0x1ee59, AL), (0x1ee5a, L), (0x1ee5b, AL), (0x1ee5c, L),
            (0x1ee5d, AL), (0x1ee5e, L), (0x1ee5f, AL), (0x1ee60, L), (0x1ee61, AL),
            (0x1ee63, L), (0x1ee64, AL), (0x1ee65, L), (0x1ee67, AL), (0x1ee6b, L),
            (0x1ee6c, AL), (0x1ee73, L), (0x1ee74, AL), (0x1ee78, L), (0x1ee79, AL),
            (0x1ee7d, L), (0x1ee7e, AL), (0x1ee7f, L), (0x1ee80, AL), (0x1ee8a, L),
            (0x1ee8b, AL), (0x1ee9c, L), (0x1eea1, AL), (0x1eea4, L), (0x1eea5, AL),
            (0x1eeaa, L), (0x1eeab, AL), (0x1eebc, L), (0x1eef0, ON), (0x1eef2, L),
            (0x1f000, ON), (0x1f02c, L), (0x1f030, ON), (0x1f094, L), (0x1f0a0, ON),
            (0x1f0af, L), (0x1f0b1, ON), (0x1f0c0, L), (0x1f0c1, ON), (0x1f0d0, L),
            (0x1f0d1, ON), (0x1f0f6, L), (0x1f100, EN), (0x1f10b, ON), (0x1f110, L),
            (0x1f12f, ON), (0x1f130, L), (0x1f16a, ON), (0x1f170, L), (0x1f1ad, ON),
            (0x1f1ae, L), (0x1f260, ON), (0x1f266, L), (0x1f300, ON), (0x1f6d8, L),
            (0x1f6dd, ON), (0x1f6ed, L), (0x1f6f0, ON), (0x1f6fd, L), (0x1f700, ON),
            (0x1f774, L), (0x1f780, ON), (0x1f7d9, L), (0x1f7e0, ON), (0x1f7ec, L),
            (0x1f7f0, ON), (0x1f7f1, L), (0x1f800, ON), (0x1f80c, L), (0x1f810, ON),
            (0x1f848, L), (0x1f850, ON), (0x1f85a, L), (0x1f860, ON), (0x1f888, L),
            (0x1f890, ON), (0x1f8ae, L), (0x1f8b0, ON), (0x1f8b2, L), (0x1f900, ON),
            (0x1fa54, L), (0x1fa60, ON), (0x1fa6e, L), (0x1fa70, ON), (0x1fa75, L),
            (0x1fa78, ON), (0x1fa7d, L), (0x1fa80, ON), (0x1fa87, L), (0x1fa90, ON),
            (0x1faad, L), (0x1fab0, ON), (0x1fabb, L), (0x1fac0, ON), (0x1fac6, L),
            (0x1fad0, ON), (0x1fada, L), (0x1fae0, ON), (0x1fae8, L), (0x1faf0, ON),
            (0x1faf7, L), (0x1fb00, ON), (0x1fb93, L), (0x1fb94, ON), (0x1fbcb, L),
            (0x1fbf0, EN), (0x1fbfa, L), (0xe0001, BN), (0xe0002, L), (0xe0020, BN),
            (0xe0080, L), (0xe0100, NSM), (0xe01f0, L),
        ],
        L,
    );

    pub(crate) static DEFAULTS: SparseTable<BidiClass> = SparseTable::from_static(
        &[
            (0x0, L), (0x590, R), (0x600, AL), (0x7c0, R), (0x860, AL),
            (0x900, L), (0x2060, BN), (0x2070, L), (0x20a0, ET), (0x20d0, L),
            (0xfb1d, R), (0xfb50, AL), (0xfdd0, BN), (0xfdf0, AL), (0xfe00, L),
            (0xfe70, AL), (0xff00, L), (0xfff0, BN), (0xfff9, L), (0xfffe, BN),
            (0x10000, L), (0x10800, R), (0x10d00, AL), (0x10d40, R), (0x10ec0, AL),
            (0x10f00, R), (0x10f30, AL), (0x10f70, R), (0x11000, L), (0x1bca0, BN),
            (0x1bca4, L), (0x1d173, BN), (0x1d17b, L), (0x1e800, R), (0x1ec70, AL),
            (0x1ecc0, R), (0x1ed00, AL), (0x1ed50, R), (0x1ee00, AL), (0x1ef00, R),
            (0x1f000, L), (0x1fffe, BN), (0x20000, L), (0x2fffe, BN), (0x30000, L),
            (0x3fffe, BN), (0x40000, L), (0x4fffe, BN), (0x50000, L), (0x5fffe, BN),
            (0x60000, L), (0x6fffe, BN), (0x70000, L), (0x7fffe, BN), (0x80000, L),
            (0x8fffe, BN), (0x90000, L), (0x9fffe, BN), (0xa0000, L), (0xafffe, BN),
            (0xb0000, L), (0xbfffe, BN), (0xc0000, L), (0xcfffe, BN), (0xd0000, L),
            (0xdfffe, BN), (0xe1000, L), (0xefffe, BN), (0xf0000, L), (0xffffe, BN),
            (0x100000, L), (0x10fffe, BN),
        ],
        L,
    );
}

pub(crate) mod combining_class {
    use crate::table::{SparseSet, SparseTable};

    pub(crate) static TABLE: SparseTable<u8> = SparseTable::from_static(
        &[
            (0x0, 0), (0x300, 230), (0x315, 232), (0x316, 220), (0x31a, 232), (0x31b, 216),
            (0x31c, 220), (0x321, 202), (0x323, 220), (0x327, 202), (0x329, 220), (0x334, 1),
            (0x339, 220), (0x33d, 230), (0x345, 240), (0x346, 230), (0x347, 220), (0x34a, 230),
            (0x34d, 220), (0x34f, 0), (0x350, 230), (0x353, 220), (0x357, 230), (0x358, 232),
            (0x359, 220), (0x35b, 230), (0x35c, 233), (0x35d, 234), (0x35f, 233), (0x360, 234),
            (0x362, 233), (0x363, 230), (0x370, 0), (0x483, 230), (0x488, 0), (0x591, 220),
            (0x592, 230), (0x596, 220), (0x597, 230), (0x59a, 222), (0x59b, 220), (0x59c, 230),
            (0x5a2, 220), (0x5a8, 230), (0x5aa, 220), (0x5ab, 230), (0x5ad, 222), (0x5ae, 228),
            (0x5af, 230), (0x5b0, 10), (0x5b1, 11), (0x5b2, 12), (0x5b3, 13), (0x5b4, 14),
            (0x5b5, 15), (0x5b6, 16), (0x5b7, 17), (0x5b8, 18), (0x5b9, 19), (0x5bb, 20),
            (0x5bc, 21), (0x5bd, 22), (0x5be, 0), (0x5bf, 23), (0x5c0, 0), (0x5c1, 24),
            (0x5c2, 25), (0x5c3, 0), (0x5c4, 230), (0x5c5, 220), (0x5c6, 0), (0x5c7, 18),
            (0x5c8, 0), (0x610, 230), (0x618, 30), (0x619, 31), (0x61a, 32), (0x61b, 0),
            (0x64b, 27), (0x64c, 28), (0x64d, 29), (0x64e, 30), (0x64f, 31), (0x650, 32),
            (0x651, 33), (0x652, 34), (0x653, 230), (0x655, 220), (0x657, 230), (0x65c, 220),
            (0x65d, 230), (0x65f, 220), (0x660, 0), (0x670, 35), (0x671, 0), (0x6d6, 230),
            (0x6dd, 0), (0x6df, 230), (0x6e3, 220), (0x6e4, 230), (0x6e5, 0), (0x6e7, 230),
            (0x6e9, 0), (0x6ea, 220), (0x6eb, 230), (0x6ed, 220), (0x6ee, 0), (0x711, 36),
            (0x712, 0), (0x730, 230), (0x731, 220), (0x732, 230), (0x734, 220), (0x735, 230),
            (0x737, 220), (0x73a, 230), (0x73b, 220), (0x73d, 230), (0x73e, 220), (0x73f, 230),
            (0x742, 220), (0x743, 230), (0x744, 220), (0x745, 230), (0x746, 220), (0x747, 230),
            (0x748, 220), (0x749, 230), (0x74b, 0), (0x7eb, 230), (0x7f2, 220), (0x7f3, 230),
            (0x7f4, 0), (0x7fd, 220), (0x7fe, 0), (0x816, 230), (0x81a, 0), (0x81b, 230),
            (0x824, 0), (0x825, 230), (0x828, 0), (0x829, 230), (0x82e, 0), (0x859, 220),
            (0x85c, 0), (0x898, 230), (0x899, 220), (0x89c, 230), (0x8a0, 0), (0x8ca, 230),
            (0x8cf, 220), (0x8d4, 230), (0x8e2, 0), (0x8e3, 220), (0x8e4, 230), (0x8e6, 220),
            (0x8e7, 230), (0x8e9, 220), (0x8ea, 230), (0x8ed, 220), (0x8f0, 27), (0x8f1, 28),
            (0x8f2, 29), (0x8f3, 230), (0x8f6, 220), (0x8f7, 230), (0x8f9, 220), (0x8fb, 230),
            (0x900, 0), (0x93c, 7), (0x93d, 0), (0x94d, 9), (0x94e, 0), (0x951, 230),
            (0x952, 220), (0x953, 230), (0x955, 0), (0x9bc, 7), (0x9bd, 0), (0x9cd, 9),
            (0x9ce, 0), (0x9fe, 230), (0x9ff, 0), (0xa3c, 7), (0xa3d, 0), (0xa4d, 9),
            (0xa4e, 0), (0xabc, 7), (0xabd, 0), (0xacd, 9), (0xace, 0), (0xb3c, 7),
            (0xb3d, 0), (0xb4d, 9), (0xb4e, 0), (0xbcd, 9), (0xbce, 0), (0xc3c, 7),
            (0xc3d, 0), (0xc4d, 9), (0xc4e, 0), (0xc55, 84), (0xc56, 91), (0xc57, 0),
            (0xcbc, 7), (0xcbd, 0), (0xccd, 9), (0xcce, 0), (0xd3b, 9), (0xd3d, 0),
            (0xd4d, 9), (0xd4e, 0), (0xdca, 9), (0xdcb, 0), (0xe38, 103), (0xe3a, 9),
            (0xe3b, 0), (0xe48, 107), (0xe4c, 0), (0xeb8, 118), (0xeba, 9), (0xebb, 0),
            (0xec8, 122), (0xecc, 0), (0xf18, 220), (0xf1a, 0), (0xf35, 220), (0xf36, 0),
            (0xf37, 220), (0xf38, 0), (0xf39, 216), (0xf3a, 0), (0xf71, 129), (0xf72, 130),
            (0xf73, 0), (0xf74, 132), (0xf75, 0), (0xf7a, 130), (0xf7e, 0), (0xf80, 130),
            (0xf81, 0), (0xf82, 230), (0xf84, 9), (0xf85, 0), (0xf86, 230), (0xf88, 0),
            (0xfc6, 220), (0xfc7, 0), (0x1037, 7), (0x1038, 0), (0x1039, 9), (0x103b, 0),
            (0x108d, 220), (0x108e, 0), (0x135d, 230), (0x1360, 0), (0x1714, 9), (0x1716, 0),
            (0x1734, 9), (0x1735, 0), (0x17d2, 9), (0x17d3, 0), (0x17dd, 230), (0x17de, 0),
            (0x18a9, 228), (0x18aa, 0), (0x1939, 222), (0x193a, 230), (0x193b, 220), (0x193c, 0),
            (0x1a17, 230), (0x1a18, 220), (0x1a19, 0), (0x1a60, 9), (0x1a61, 0), (0x1a75, 230),
            (0x1a7d, 0), (0x1a7f, 220), (0x1a80, 0), (0x1ab0, 230), (0x1ab5, 220), (0x1abb, 230),
            (0x1abd, 220), (0x1abe, 0), (0x1abf, 220), (0x1ac1, 230), (0x1ac3, 220), (0x1ac5, 230),
            (0x1aca, 220), (0x1acb, 230), (0x1acf, 0), (0x1b34, 7), (0x1b35, 0), (0x1b44, 9),
            (0x1b45, 0), (0x1b6b, 230), (0x1b6c, 220), (0x1b6d, 230), (0x1b74, 0), (0x1baa, 9),
            (0x1bac, 0), (0x1be6, 7), (0x1be7, 0), (0x1bf2, 9), (0x1bf4, 0), (0x1c37, 7),
            (0x1c38, 0), (0x1cd0, 230), (0x1cd3, 0), (0x1cd4, 1), (0x1cd5, 220), (0x1cda, 230),
            (0x1cdc, 220), (0x1ce0, 230), (0x1ce1, 0), (0x1ce2, 1), (0x1ce9, 0), (0x1ced, 220),
            (0x1cee, 0), (0x1cf4, 230), (0x1cf5, 0), (0x1cf8, 230), (0x1cfa, 0), (0x1dc0, 230),
            (0x1dc2, 220), (0x1dc3, 230), (0x1dca, 220), (0x1dcb, 230), (0x1dcd, 234), (0x1dce, 214),
            (0x1dcf, 220), (0x1dd0, 202), (0x1dd1, 230), (0x1df6, 232), (0x1df7, 228), (0x1df9, 220),
            (0x1dfa, 218), (0x1dfb, 230), (0x1dfc, 233), (0x1dfd, 220), (0x1dfe, 230), (0x1dff, 220),
            (0x1e00, 0), (0x20d0, 230), (0x20d2, 1), (0x20d4, 230), (0x20d8, 1), (0x20db, 230),
            (0x20dd, 0), (0x20e1, 230), (0x20e2, 0), (0x20e5, 1), (0x20e7, 230), (0x20e8, 220),
            (0x20e9, 230), (0x20ea, 1), (0x20ec, 220), (0x20f0, 230), (0x20f1, 0), (0x2cef, 230),
            (0x2cf2, 0), (0x2d7f, 9), (0x2d80, 0), (0x2de0, 230), (0x2e00, 0), (0x302a, 218),
            (0x302b, 228), (0x302c, 232), (0x302d, 222), (0x302e, 224), (0x3030, 0), (0x3099, 8),
            (0x309b, 0), (0xa66f, 230), (0xa670, 0), (0xa674, 230), (0xa67e, 0), (0xa69e, 230),
            (0xa6a0, 0), (0xa6f0, 230), (0xa6f2, 0), (0xa806, 9), (0xa807, 0), (0xa82c, 9),
            (0xa82d, 0), (0xa8c4, 9), (0xa8c5, 0), (0xa8e0, 230), (0xa8f2, 0), (0xa92b, 220),
            (0xa92e, 0), (0xa953, 9), (0xa954, 0), (0xa9b3, 7), (0xa9b4, 0), (0xa9c0, 9),
            (0xa9c1, 0), (0xaab0, 230), (0xaab1, 0), (0xaab2, 230), (0xaab4, 220), (0xaab5, 0),
            (0xaab7, 230), (0xaab9, 0), (0xaabe, 230), (0xaac0, 0), (0xaac1, 230), (0xaac2, 0),
            (0xaaf6, 9), (0xaaf7, 0), (0xabed, 9), (0xabee, 0), (0xfb1e, 26), (0xfb1f, 0),
            (0xfe20, 230), (0xfe27, 220), (0xfe2e, 230), (0xfe30, 0), (0x101fd, 220), (0x101fe, 0),
            (0x102e0, 220), (0x102e1, 0), (0x10376, 230), (0x1037b, 0), (0x10a0d, 220), (0x10a0e, 0),
            (0x10a0f, 230), (0x10a10, 0), (0x10a38, 230), (0x10a39, 1), (0x10a3a, 220), (0x10a3b, 0),
            (0x10a3f, 9), (0x10a40, 0), (0x10ae5, 230), (0x10ae6, 220), (0x10ae7, 0), (0x10d24, 230),
            (0x10d28, 0), (0x10eab, 230), (0x10ead, 0), (0x10f46, 220), (0x10f48, 230), (0x10f4b, 220),
            (0x10f4c, 230), (0x10f4d, 220), (0x10f51, 0), (0x10f82, 230), (0x10f83, 220), (0x10f84, 230),
            (0x10f85, 220), (0x10f86, 0), (0x11046, 9), (0x11047, 0), (0x11070, 9), (0x11071, 0),
            (0x1107f, 9), (0x11080, 0), (0x110b9, 9), (0x110ba, 7), (0x110bb, 0), (0x11100, 230),
            (0x11103, 0), (0x11133, 9), (0x11135, 0), (0x11173, 7), (0x11174, 0), (0x111c0, 9),
            (0x111c1, 0), (0x111ca, 7), (0x111cb, 0), (0x11235, 9), (0x11236, 7), (0x11237, 0),
            (0x112e9, 7), (0x112ea, 9), (0x112eb, 0), (0x1133b, 7), (0x1133d, 0), (0x1134d, 9),
            (0x1134e, 0), (0x11366, 230), (0x1136d, 0), (0x11370, 230), (0x11375, 0), (0x11442, 9),
            (0x11443, 0), (0x11446, 7), (0x11447, 0), (0x1145e, 230), (0x1145f, 0), (0x114c2, 9),
            (0x114c3, 7), (0x114c4, 0), (0x115bf, 9), (0x115c0, 7), (0x115c1, 0), (0x1163f, 9),
            (0x11640, 0), (0x116b6, 9), (0x116b7, 7), (0x116b8, 0), (0x1172b, 9), (0x1172c, 0),
            (0x11839, 9), (0x1183a, 7), (0x1183b, 0), (0x1193d, 9), (0x1193f, 0), (0x11943, 7),
            (0x11944, 0), (0x119e0, 9), (0x119e1, 0), (0x11a34, 9), (0x11a35, 0), (0x11a47, 9),
            (0x11a48, 0), (0x11a99, 9), (0x11a9a, 0), (0x11c3f, 9), (0x11c40, 0), (0x11d42, 7),
            (0x11d43, 0), (0x11d44, 9), (0x11d46, 0), (0x11d97, 9), (0x11d98, 0), (0x16af0, 1),
            (0x16af5, 0), (0x16b30, 230), (0x16b37, 0), (0x16ff0, 6), (0x16ff2, 0), (0x1bc9e, 1),
            (0x1bc9f, 0), (0x1d165, 216), (0x1d167, 1), (0x1d16a, 0), (0x1d16d, 226), (0x1d16e, 216),
            (0x1d173, 0), (0x1d17b, 220), (0x1d183, 0), (0x1d185, 230), (0x1d18a, 220), (0x1d18c, 0),
            (0x1d1aa, 230), (0x1d1ae, 0), (0x1d242, 230), (0x1d245, 0), (0x1e000, 230), (0x1e007, 0),
            (0x1e008, 230), (0x1e019, 0), (0x1e01b, 230), (0x1e022, 0), (0x1e023, 230), (0x1e025, 0),
            (0x1e026, 230), (0x1e02b, 0), (0x1e130, 230), (0x1e137, 0), (0x1e2ae, 230), (0x1e2af, 0),
            (0x1e2ec, 230), (0x1e2f0, 0), (0x1e8d0, 220), (0x1e8d7, 0), (0x1e944, 230), (0x1e94a, 7),
            (0x1e94b, 0),
        ],
        0,
    );

    pub(crate) static MIRRORED: SparseSet = SparseSet::from_static(&[
        (0x28, 0x29), (0x3c, 0x3c), (0x3e, 0x3e), (0x5b, 0x5b), (0x5d, 0x5d), (0x7b, 0x7b),
        (0x7d, 0x7d), (0xab, 0xab), (0xbb, 0xbb), (0xf3a, 0xf3d), (0x169b, 0x169c), (0x2039, 0x203a),
        (0x2045, 0x2046), (0x207d, 0x207e), (0x208d, 0x208e), (0x2140, 0x2140), (0x2201, 0x2204), (0x2208, 0x220d),
        (0x2211, 0x2211), (0x2215, 0x2216), (0x221a, 0x221d), (0x221f, 0x2222), (0x2224, 0x2224), (0x2226, 0x2226),
        (0x222b, 0x2233), (0x2239, 0x2239), (0x223b, 0x224c), (0x2252, 0x2255), (0x225f, 0x2260), (0x2262, 0x2262),
        (0x2264, 0x226b), (0x226e, 0x228c), (0x228f, 0x2292), (0x2298, 0x2298), (0x22a2, 0x22a3), (0x22a6, 0x22b8),
        (0x22be, 0x22bf), (0x22c9, 0x22cd), (0x22d0, 0x22d1), (0x22d6, 0x22ed), (0x22f0, 0x22ff), (0x2308, 0x230b),
        (0x2320, 0x2321), (0x2329, 0x232a), (0x2768, 0x2775), (0x27c0, 0x27c0), (0x27c3, 0x27c6), (0x27c8, 0x27c9),
        (0x27cb, 0x27cd), (0x27d3, 0x27d6), (0x27dc, 0x27de), (0x27e2, 0x27ef), (0x2983, 0x2998), (0x299b, 0x29a0),
        (0x29a2, 0x29af), (0x29b8, 0x29b8), (0x29c0, 0x29c5), (0x29c9, 0x29c9), (0x29ce, 0x29d2), (0x29d4, 0x29d5),
        (0x29d8, 0x29dc), (0x29e1, 0x29e1), (0x29e3, 0x29e5), (0x29e8, 0x29e9), (0x29f4, 0x29f9), (0x29fc, 0x29fd),
        (0x2a0a, 0x2a1c), (0x2a1e, 0x2a21), (0x2a24, 0x2a24), (0x2a26, 0x2a26), (0x2a29, 0x2a29), (0x2a2b, 0x2a2e),
        (0x2a34, 0x2a35), (0x2a3c, 0x2a3e), (0x2a57, 0x2a58), (0x2a64, 0x2a65), (0x2a6a, 0x2a6d), (0x2a6f, 0x2a70),
        (0x2a73, 0x2a74), (0x2a79, 0x2aa3), (0x2aa6, 0x2aad), (0x2aaf, 0x2ad6), (0x2adc, 0x2adc), (0x2ade, 0x2ade),
        (0x2ae2, 0x2ae6), (0x2aec, 0x2aee), (0x2af3, 0x2af3), (0x2af7, 0x2afb), (0x2afd, 0x2afd), (0x2bfe, 0x2bfe),
        (0x2e02, 0x2e05), (0x2e09, 0x2e0a), (0x2e0c, 0x2e0d), (0x2e1c, 0x2e1d), (0x2e20, 0x2e29), (0x2e55, 0x2e5c),
        (0x3008, 0x3011), (0x3014, 0x301b), (0xfe59, 0xfe5e), (0xfe64, 0xfe65), (0xff08, 0xff09), (0xff1c, 0xff1c),
        (0xff1e, 0xff1e), (0xff3b, 0xff3b), (0xff3d, 0xff3d), (0xff5b, 0xff5b), (0xff5d, 0xff5d), (0xff5f, 0xff60),
        (0xff62, 0xff63), (0x1d6db, 0x1d6db), (0x1d715, 0x1d715), (0x1d74f, 0x1d74f), (0x1d789, 0x1d789), (0x1d7c3, 0x1d7c3),
    ]);
}

pub(crate) mod case {
    use crate::table::{ExactTable, ExtendedTable, Slot};

    pub(crate) static SIMPLE_LOWER: ExactTable<u32> = ExactTable::from_static(
        &[
            (0x41, 0x61), (0x42, 0x62), (0x43, 0x63), (0x44, 0x64), (0x45, 0x65), (0x46, 0x66),
            (0x47, 0x67), (0x48, 0x68), (0x49, 0x69), (0x4a, 0x6a), (0x4b, 0x6b), (0x4c, 0x6c),
            (0x4d, 0x6d), (0x4e, 0x6e), (0x4f, 0x6f), (0x50, 0x70), (0x51, 0x71), (0x52, 0x72),
            (0x53, 0x73), (0x54, 0x74), (0x55, 0x75), (0x56, 0x76), (0x57, 0x77), (0x58, 0x78),
            (0x59, 0x79), (0x5a, 0x7a), (0xc0, 0xe0), (0xc1, 0xe1), (0xc2, 0xe2), (0xc3, 0xe3),
            (0xc4, 0xe4), (0xc5, 0xe5), (0xc6, 0xe6), (0xc7, 0xe7), (0xc8, 0xe8), (0xc9, 0xe9),
            (0xca, 0xea), (0xcb, 0xeb), (0xcc, 0xec), (0xcd, 0xed), (0xce, 0xee), (0xcf, 0xef),
            (0xd0, 0xf0), (0xd1, 0xf1), (0xd2, 0xf2), (0xd3, 0xf3), (0xd4, 0xf4), (0xd5, 0xf5),
            (0xd6, 0xf6), (0xd8, 0xf8), (0xd9, 0xf9), (0xda, 0xfa), (0xdb, 0xfb), (0xdc, 0xfc),
            (0xdd, 0xfd), (0xde, 0xfe), (0x100, 0x101), (0x102, 0x103), (0x104, 0x105), (0x106, 0x107),
            (0x108, 0x109), (0x10a, 0x10b), (0x10c, 0x10d), (0x10e, 0x10f), (0x110, 0x111), (0x112, 0x113),
            (0x114, 0x115), (0x116, 0x117), (0x118, 0x119), (0x11a, 0x11b), (0x11c, 0x11d), (0x11e, 0x11f),
            (0x120, 0x121), (0x122, 0x123), (0x124, 0x125), (0x126, 0x127), (0x128, 0x129), (0x12a, 0x12b),
            (0x12c, 0x12d), (0x12e, 0x12f), (0x130, 0x69), (0x132, 0x133), (0x134, 0x135), (0x136, 0x137),
            (0x139, 0x13a), (0x13b, 0x13c), (0x13d, 0x13e), (0x13f, 0x140), (0x141, 0x142), (0x143, 0x144),
            (0x145, 0x146), (0x147, 0x148), (0x14a, 0x14b), (0x14c, 0x14d), (0x14e, 0x14f), (0x150, 0x151),
            (0x152, 0x153), (0x154, 0x155), (0x156, 0x157), (0x158, 0x159), (0x15a, 0x15b), (0x15c, 0x15d),
            (0x15e, 0x15f), (0x160, 0x161), (0x162, 0x163), (0x164, 0x165), (0x166, 0x167), (0x168, 0x169),
            (0x16a, 0x16b), (0x16c, 0x16d), (0x16e, 0x16f), (0x170, 0x171), (0x172, 0x173), (0x174, 0x175),
            (0x176, 0x177), (0x178, 0xff), (0x179, 0x17a), (0x17b, 0x17c), (0x17d, 0x17e), (0x181, 0x253),
            (0x182, 0x183), (0x184, 0x185), (0x186, 0x254), (0x187, 0x188), (0x189, 0x256), (0x18a, 0x257),
            (0x18b, 0x18c), (0x18e, 0x1dd), (0x18f, 0x259), (0x190, 0x25b), (0x191, 0x192), (0x193, 0x260),
            (0x194, 0x263), (0x196, 0x269), (0x197, 0x268), (0x198, 0x199), (0x19c, 0x26f), (0x19d, 0x272),
            (0x19f, 0x275), (0x1a0, 0x1a1), (0x1a2, 0x1a3), (0x1a4, 0x1a5), (0x1a6, 0x280), (0x1a7, 0x1a8),
            (0x1a9, 0x283), (0x1ac, 0x1ad), (0x1ae, 0x288), (0x1af, 0x1b0), (0x1b1, 0x28a), (0x1b2, 0x28b),
            (0x1b3, 0x1b4), (0x1b5, 0x1b6), (0x1b7, 0x292), (0x1b8, 0x1b9), (0x1bc, 0x1bd), (0x1c4, 0x1c6),
            (0x1c5, 0x1c6), (0x1c7, 0x1c9), (0x1c8, 0x1c9), (0x1ca, 0x1cc), (0x1cb, 0x1cc), (0x1cd, 0x1ce),
            (0x1cf, 0x1d0), (0x1d1, 0x1d2), (0x1d3, 0x1d4), (0x1d5, 0x1d6), (0x1d7, 0x1d8), (0x1d9, 0x1da),
            (0x1db, 0x1dc), (0x1de, 0x1df), (0x1e0, 0x1e1), (0x1e2, 0x1e3), (0x1e4, 0x1e5), (0x1e6, 0x1e7),
            (0x1e8, 0x1e9), (0x1ea, 0x1eb), (0x1ec, 0x1ed), (0x1ee, 0x1ef), (0x1f1, 0x1f3), (0x1f2, 0x1f3),
            (0x1f4, 0x1f5), (0x1f6, 0x195), (0x1f7, 0x1bf), (0x1f8, 0x1f9), (0x1fa, 0x1fb), (0x1fc, 0x1fd),
            (0x1fe, 0x1ff), (0x200, 0x201), (0x202, 0x203), (0x204, 0x205), (0x206, 0x207), (0x208, 0x209),
            (0x20a, 0x20b), (0x20c, 0x20d), (0x20e, 0x20f), (0x210, 0x211), (0x212, 0x213), (0x214, 0x215),
            (0x216, 0x217), (0x218, 0x219), (0x21a, 0x21b), (0x21c, 0x21d), (0x21e, 0x21f), (0x220, 0x19e),
            (0x222, 0x223), (0x224, 0x225), (0x226, 0x227), (0x228, 0x229), (0x22a, 0x22b), (0x22c, 0x22d),
            (0x22e, 0x22f), (0x230, 0x231), (0x232, 0x233), (0x23a, 0x2c65), (0x23b, 0x23c), (0x23d, 0x19a),
            (0x23e, 0x2c66), (0x241, 0x242), (0x243, 0x180), (0x244, 0x289), (0x245, 0x28c), (0x246, 0x247),
            (0x248, 0x249), (0x24a, 0x24b), (0x24c, 0x24d), (0x24e, 0x24f), (0x370, 0x371), (0x372, 0x373),
            (0x376, 0x377), (0x37f, 0x3f3), (0x386, 0x3ac), (0x388, 0x3ad), (0x389, 0x3ae), (0x38a, 0x3af),
            (0x38c, 0x3cc), (0x38e, 0x3cd), (0x38f, 0x3ce), (0x391, 0x3b1), (0x392, 0x3b2), (0x393, 0x3b3),
            (0x394, 0x3b4), (0x395, 0x3b5), (0x396, 0x3b6), (0x397, 0x3b7), (0x398, 0x3b8), (0x399, 0x3b9),
            (0x39a, 0x3ba), (0x39b, 0x3bb), (0x39c, 0x3bc), (0x39d, 0x3bd), (0x39e, 0x3be), (0x39f, 0x3bf),
            (0x3a0, 0x3c0), (0x3a1, 0x3c1), (0x3a3, 0x3c3), (0x3a4, 0x3c4), (0x3a5, 0x3c5), (0x3a6, 0x3c6),
            (0x3a7, 0x3c7), (0x3a8, 0x3c8), (0x3a9, 0x3c9), (0x3aa, 0x3ca), (0x3ab, 0x3cb), (0x3cf, 0x3d7),
            (0x3d8, 0x3d9), (0x3da, 0x3db), (0x3dc, 0x3dd), (0x3de, 0x3df), (0x3e0, 0x3e1), (0x3e2, 0x3e3),
            (0x3e4, 0x3e5), (0x3e6, 0x3e7), (0x3e8, 0x3e9), (0x3ea, 0x3eb), (0x3ec, 0x3ed), (0x3ee, 0x3ef),
            (0x3f4, 0x3b8), (0x3f7, 0x3f8), (0x3f9, 0x3f2), (0x3fa, 0x3fb), (0x3fd, 0x37b), (0x3fe, 0x37c),
            (0x3ff, 0x37d), (0x400, 0x450), (0x401, 0x451), (0x402, 0x452), (0x403, 0x453), (0x404, 0x454),
            (0x405, 0x455), (0x406, 0x456), (0x407, 0x457), (0x408, 0x458), (0x409, 0x459), (0x40a, 0x45a),
            (0x40b, 0x45b), (0x40c, 0x45c), (0x40d, 0x45d), (0x40e, 0x45e), (0x40f, 0x45f), (0x410, 0x430),
            (0x411, 0x431), (0x412, 0x432), (0x413, 0x433), (0x414, 0x434), (0x415, 0x435), (0x416, 0x436),
            (0x417, 0x437), (0x418, 0x438), (0x419, 0x439), (0x41a, 0x43a), (0x41b, 0x43b), (0x41c, 0x43c),
            (0x41d, 0x43d), (0x41e, 0x43e), (0x41f, 0x43f), (0x420, 0x440), (0x421, 0x441), (0x422, 0x442),
            (0x423, 0x443), (0x424, 0x444), (0x425, 0x445), (0x426, 0x446), (0x427, 0x447), (0x428, 0x448),
            (0x429, 0x449), (0x42a, 0x44a), (0x42b, 0x44b), (0x42c, 0x44c), (0x42d, 0x44d), (0x42e, 0x44e),
            (0x42f, 0x44f), (0x460, 0x461), (0x462, 0x463), (0x464, 0x465), (0x466, 0x467), (0x468, 0x469),
            (0x46a, 0x46b), (0x46c, 0x46d), (0x46e, 0x46f), (0x470, 0x471), (0x472, 0x473), (0x474, 0x475),
            (0x476, 0x477), (0x478, 0x479), (0x47a, 0x47b), (0x47c, 0x47d), (0x47e, 0x47f), (0x480, 0x481),
            (0x48a, 0x48b), (0x48c, 0x48d), (0x48e, 0x48f), (0x490, 0x491), (0x492, 0x493), (0x494, 0x495),
            (0x496, 0x497), (0x498, 0x499), (0x49a, 0x49b), (0x49c, 0x49d), (0x49e, 0x49f), (0x4a0, 0x4a1),
            (0x4a2, 0x4a3), (0x4a4, 0x4a5), (0x4a6, 0x4a7), (0x4a8, 0x4a9), (0x4aa, 0x4ab), (0x4ac, 0x4ad),
            (0x4ae, 0x4af), (0x4b0, 0x4b1), (0x4b2, 0x4b3), (0x4b4, 0x4b5), (0x4b6, 0x4b7), (0x4b8, 0x4b9),
            (0x4ba, 0x4bb), (0x4bc, 0x4bd), (0x4be, 0x4bf), (0x4c0, 0x4cf), (0x4c1, 0x4c2), (0x4c3, 0x4c4),
            (0x4c5, 0x4c6), (0x4c7, 0x4c8), (0x4c9, 0x4ca), (0x4cb, 0x4cc), (0x4cd, 0x4ce), (0x4d0, 0x4d1),
            (0x4d2, 0x4d3), (0x4d4, 0x4d5), (0x4d6, 0x4d7), (0x4d8, 0x4d9), (0x4da, 0x4db), (0x4dc, 0x4dd),
            (0x4de, 0x4df), (0x4e0, 0x4e1), (0x4e2, 0x4e3), (0x4e4, 0x4e5), (0x4e6, 0x4e7), (0x4e8, 0x4e9),
            (0x4ea, 0x4eb), (0x4ec, 0x4ed), (0x4ee, 0x4ef), (0x4f0, 0x4f1), (0x4f2, 0x4f3), (0x4f4, 0x4f5),
            (0x4f6, 0x4f7), (0x4f8, 0x4f9), (0x4fa, 0x4fb), (0x4fc, 0x4fd), (0x4fe, 0x4ff), (0x500, 0x501),
            (0x502, 0x503), (0x504, 0x505), (0x506, 0x507), (0x508, 0x509), (0x50a, 0x50b), (0x50c, 0x50d),
            (0x50e, 0x50f), (0x510, 0x511), (0x512, 0x513), (0x514, 0x515), (0x516, 0x517), (0x518, 0x519),
            (0x51a, 0x51b), (0x51c, 0x51d), (0x51e, 0x51f), (0x520, 0x521), (0x522, 0x523), (0x524, 0x525),
            (0x526, 0x527), (0x528, 0x529), (0x52a, 0x52b), (0x52c, 0x52d), (0x52e, 0x52f), (0x531, 0x561),
            (0x532, 0x562), (0x533, 0x563), (0x534, 0x564), (0x535, 0x565), (0x536, 0x566), (0x537, 0x567),
            (0x538, 0x568), (0x539, 0x569), (0x53a, 0x56a), (0x53b, 0x56b), (0x53c, 0x56c), (0x53d, 0x56d),
            (0x53e, 0x56e), (0x53f, 0x56f), (0x540, 0x570), (0x541, 0x571), (0x542, 0x572), (0x543, 0x573),
            (0x544, 0x574), (0x545, 0x575), (0x546, 0x576), (0x547, 0x577), (0x548, 0x578), (0x549, 0x579),
            (0x54a, 0x57a), (0x54b, 0x57b), (0x54c, 0x57c), (0x54d, 0x57d), (0x54e, 0x57e), (0x54f, 0x57f),
            (0x550, 0x580), (0x551, 0x581), (0x552, 0x582), (0x553, 0x583), (0x554, 0x584), (0x555, 0x585),
            (0x556, 0x586), (0x10a0, 0x2d00), (0x10a1, 0x2d01), (0x10a2, 0x2d02), (0x10a3, 0x2d03), (0x10a4, 0x2d04),
            (0x10a5, 0x2d05), (0x10a6, 0x2d06), (0x10a7, 0x2d07), (0x10a8, 0x2d08), (0x10a9, 0x2d09), (0x10aa, 0x2d0a),
            (0x10ab, 0x2d0b), (0x10ac, 0x2d0c), (0x10ad, 0x2d0d), (0x10ae, 0x2d0e), (0x10af, 0x2d0f), (0x10b0, 0x2d10),
            (0x10b1, 0x2d11), (0x10b2, 0x2d12), (0x10b3, 0x2d13), (0x10b4, 0x2d14), (0x10b5, 0x2d15), (0x10b6, 0x2d16),
            (0x10b7, 0x2d17), (0x10b8, 0x2d18), (0x10b9, 0x2d19), (0x10ba, 0x2d1a), (0x10bb, 0x2d1b), (0x10bc, 0x2d1c),
            (0x10bd, 0x2d1d), (0x10be, 0x2d1e), (0x10bf, 0x2d1f), (0x10c0, 0x2d20), (0x10c1, 0x2d21), (0x10c2, 0x2d22),
            (0x10c3, 0x2d23), (0x10c4, 0x2d24), (0x10c5, 0x2d25), (0x10c7, 0x2d27), (0x10cd, 0x2d2d), (0x13a0, 0xab70),
            (0x13a1, 0xab71), (0x13a2, 0xab72), (0x13a3, 0xab73), (0x13a4, 0xab74), (0x13a5, 0xab75), (0x13a6, 0xab76),
            (0x13a7, 0xab77), (0x13a8, 0xab78), (0x13a9, 0xab79), (0x13aa, 0xab7a), (0x13ab, 0xab7b), (0x13ac, 0xab7c),
            (0x13ad, 0xab7d), (0x13ae, 0xab7e), (0x13af, 0xab7f), (0x13b0, 0xab80), (0x13b1, 0xab81), (0x13b2, 0xab82),
            (0x13b3, 0xab83), (0x13b4, 0xab84), (0x13b5, 0xab85), (0x13b6, 0xab86), (0x13b7, 0xab87), (0x13b8, 0xab88),
            (0x13b9, 0xab89), (0x13ba, 0xab8a), (0x13bb, 0xab8b), (0x13bc, 0xab8c), (0x13bd, 0xab8d), (0x13be, 0xab8e),
            (0x13bf, 0xab8f), (0x13c0, 0xab90), (0x13c1, 0xab91), (0x13c2, 0xab92), (0x13c3, 0xab93), (0x13c4, 0xab94),
            (0x13c5, 0xab95), (0x13c6, 0xab96), (0x13c7, 0xab97), (0x13c8, 0xab98), (0x13c9, 0xab99), (0x13ca, 0xab9a),
            (0x13cb, 0xab9b), (0x13cc, 0xab9c), (0x13cd, 0xab9d), (0x13ce, 0xab9e), (0x13cf, 0xab9f), (0x13d0, 0xaba0),
            (0x13d1, 0xaba1), (0x13d2, 0xaba2), (0x13d3, 0xaba3), (0x13d4, 0xaba4), (0x13d5, 0xaba5), (0x13d6, 0xaba6),
            (0x13d7, 0xaba7), (0x13d8, 0xaba8), (0x13d9, 0xaba9), (0x13da, 0xabaa), (0x13db, 0xabab), (0x13dc, 0xabac),
            (0x13dd, 0xabad), (0x13de, 0xabae), (0x13df, 0xabaf), (0x13e0, 0xabb0), (0x13e1, 0xabb1), (0x13e2, 0xabb2),
            (0x13e3, 0xabb3), (0x13e4, 0xabb4), (0x13e5, 0xabb5), (0x13e6, 0xabb6), (0x13e7, 0xabb7), (0x13e8, 0xabb8),
            (0x13e9, 0xabb9), (0x13ea, 0xabba), (0x13eb, 0xabbb), (0x13ec, 0xabbc), (0x13ed, 0xabbd), (0x13ee, 0xabbe),
            (0x13ef, 0xabbf), (0x13f0, 0x13f8), (0x13f1, 0x13f9), (0x13f2, 0x13fa), (0x13f3, 0x13fb), (0x13f4, 0x13fc),
            (0x13f5, 0x13fd), (0x1c90, 0x10d0), (0x1c91, 0x10d1), (0x1c92, 0x10d2), (0x1c93, 0x10d3), (0x1c94, 0x10d4),
            (0x1c95, 0x10d5), (0x1c96, 0x10d6), (0x1c97, 0x10d7), (0x1c98, 0x10d8), (0x1c99, 0x10d9), (0x1c9a, 0x10da),
            (0x1c9b, 0x10db), (0x1c9c, 0x10dc), (0x1c9d, 0x10dd), (0x1c9e, 0x10de), (0x1c9f, 0x10df), (0x1ca0, 0x10e0),
            (0x1ca1, 0x10e1), (0x1ca2, 0x10e2), (0x1ca3, 0x10e3), (0x1ca4, 0x10e4), (0x1ca5, 0x10e5), (0x1ca6, 0x10e6),
            (0x1ca7, 0x10e7), (0x1ca8, 0x10e8), (0x1ca9, 0x10e9), (0x1caa, 0x10ea), (0x1cab, 0x10eb), (0x1cac, 0x10ec),
            (0x1cad, 0x10ed), (0x1cae, 0x10ee), (0x1caf, 0x10ef), (0x1cb0, 0x10f0), (0x1cb1, 0x10f1), (0x1cb2, 0x10f2),
            (0x1cb3, 0x10f3), (0x1cb4, 0x10f4), (0x1cb5, 0x10f5), (0x1cb6, 0x10f6), (0x1cb7, 0x10f7), (0x1cb8, 0x10f8),
            (0x1cb9, 0x10f9), (0x1cba, 0x10fa), (0x1cbd, 0x10fd), (0x1cbe, 0x10fe), (0x1cbf, 0x10ff), (0x1e00, 0x1e01),
            (0x1e02, 0x1e03), (0x1e04, 0x1e05), (0x1e06, 0x1e07), (0x1e08, 0x1e09), (0x1e0a, 0x1e0b), (0x1e0c, 0x1e0d),
            (0x1e0e, 0x1e0f), (0x1e10, 0x1e11), (0x1e12, 0x1e13), (0x1e14, 0x1e15), (0x1e16, 0x1e17), (0x1e18, 0x1e19),
            (0x1e1a, 0x1e1b), (0x1e1c, 0x1e1d), (0x1e1e, 0x1e1f), (0x1e20, 0x1e21), (0x1e22, 0x1e23), (0x1e24, 0x1e25),
            (0x1e26, 0x1e27), (0x1e28, 0x1e29), (0x1e2a, 0x1e2b), (0x1e2c, 0x1e2d), (0x1e2e, 0x1e2f), (0x1e30, 0x1e31),
            (0x1e32, 0x1e33), (0x1e34, 0x1e35), (0x1e36, 0x1e37), (0x1e38, 0x1e39), (0x1e3a, 0x1e3b), (0x1e3c, 0x1e3d),
            (0x1e3e, 0x1e3f), (0x1e40, 0x1e41), (0x1e42, 0x1e43), (0x1e44, 0x1e45), (0x1e46, 0x1e47), (0x1e48, 0x1e49),
            (0x1e4a, 0x1e4b), (0x1e4c, 0x1e4d), (0x1e4e, 0x1e4f), (0x1e50, 0x1e51), (0x1e52, 0x1e53), (0x1e54, 0x1e55),
            (0x1e56, 0x1e57), (0x1e58, 0x1e59), (0x1e5a, 0x1e5b), (0x1e5c, 0x1e5d), (0x1e5e, 0x1e5f), (0x1e60, 0x1e61),
            (0x1e62, 0x1e63), (0x1e64, 0x1e65), (0x1e66, 0x1e67), (0x1e68, 0x1e69), (0x1e6a, 0x1e6b), (0x1e6c, 0x1e6d),
            (0x1e6e, 0x1e6f), (0x1e70, 0x1e71), (0x1e72, 0x1e73), (0x1e74, 0x1e75), (0x1e76, 0x1e77), (0x1e78, 0x1e79),
            (0x1e7a, 0x1e7b), (0x1e7c, 0x1e7d), (0x1e7e, 0x1e7f), (0x1e80, 0x1e81), (0x1e82, 0x1e83), (0x1e84, 0x1e85),
            (0x1e86, 0x1e87), (0x1e88, 0x1e89), (0x1e8a, 0x1e8b), (0x1e8c, 0x1e8d), (0x1e8e, 0x1e8f), (0x1e90, 0x1e91),
            (0x1e92, 0x1e93), (0x1e94, 0x1e95), (0x1e9e, 0xdf), (0x1ea0, 0x1ea1), (0x1ea2, 0x1ea3), (0x1ea4, 0x1ea5),
            (0x1ea6, 0x1ea7), (0x1ea8, 0x1ea9), (0x1eaa, 0x1eab), (0x1eac, 0x1ead), (0x1eae, 0x1eaf), (0x1eb0, 0x1eb1),
            (0x1eb2, 0x1eb3), (0x1eb4, 0x1eb5), (0x1eb6, 0x1eb7), (0x1eb8, 0x1eb9), (0x1eba, 0x1ebb), (0x1ebc, 0x1ebd),
            (0x1ebe, 0x1ebf), (0x1ec0, 0x1ec1), (0x1ec2, 0x1ec3), (0x1ec4, 0x1ec5), (0x1ec6, 0x1ec7), (0x1ec8, 0x1ec9),
            (0x1eca, 0x1ecb), (0x1ecc, 0x1ecd), (0x1ece, 0x1ecf), (0x1ed0, 0x1ed1), (0x1ed2, 0x1ed3), (0x1ed4, 0x1ed5),
            (0x1ed6, 0x1ed7), (0x1ed8, 0x1ed9), (0x1eda, 0x1edb), (0x1edc, 0x1edd), (0x1ede, 0x1edf), (0x1ee0, 0x1ee1),
            (0x1ee2, 0x1ee3), (0x1ee4, 0x1ee5), (0x1ee6, 0x1ee7), (0x1ee8, 0x1ee9), (0x1eea, 0x1eeb), (0x1eec, 0x1eed),
            (0x1eee, 0x1eef), (0x1ef0, 0x1ef1), (0x1ef2, 0x1ef3), (0x1ef4, 0x1ef5), (0x1ef6, 0x1ef7), (0x1ef8, 0x1ef9),
            (0x1efa, 0x1efb), (0x1efc, 0x1efd), (0x1efe, 0x1eff), (0x1f08, 0x1f00), (0x1f09, 0x1f01), (0x1f0a, 0x1f02),
            (0x1f0b, 0x1f03), (0x1f0c, 0x1f04), (0x1f0d, 0x1f05), (0x1f0e, 0x1f06), (0x1f0f, 0x1f07), (0x1f18, 0x1f10),
            (0x1f19, 0x1f11), (0x1f1a, 0x1f12), (0x1f1b, 0x1f13), (0x1f1c, 0x1f14), (0x1f1d, 0x1f15), (0x1f28, 0x1f20),
            (0x1f29, 0x1f21), (0x1f2a, 0x1f22), (0x1f2b, 0x1f23), (0x1f2c, 0x1f24), (0x1f2d, 0x1f25), (0x1f2e, 0x1f26),
            (0x1f2f, 0x1f27), (0x1f38, 0x1f30), (0x1f39, 0x1f31), (0x1f3a, 0x1f32), (0x1f3b, 0x1f33), (0x1f3c, 0x1f34),
            (0x1f3d, 0x1f35), (0x1f3e, 0x1f36), (0x1f3f, 0x1f37), (0x1f48, 0x1f40), (0x1f49, 0x1f41), (0x1f4a, 0x1f42),
            (0x1f4b, 0x1f43), (0x1f4c, 0x1f44), (0x1f4d, 0x1f45), (0x1f59, 0x1f51), (0x1f5b, 0x1f53), (0x1f5d, 0x1f55),
            (0x1f5f, 0x1f57), (0x1f68, 0x1f60), (0x1f69, 0x1f61), (0x1f6a, 0x1f62), (0x1f6b, 0x1f63), (0x1f6c, 0x1f64),
            (0x1f6d, 0x1f65), (0x1f6e, 0x1f66), (0x1f6f, 0x1f67), (0x1f88, 0x1f80), (0x1f89, 0x1f81), (0x1f8a, 0x1f82),
            (0x1f8b, 0x1f83), (0x1f8c, 0x1f84), (0x1f8d, 0x1f85), (0x1f8e, 0x1f86), (0x1f8f, 0x1f87), (0x1f98, 0x1f90),
            (0x1f99, 0x1f91), (0x1f9a, 0x1f92), (0x1f9b, 0x1f93), (0x1f9c, 0x1f94), (0x1f9d, 0x1f95), (0x1f9e, 0x1f96),
            (0x1f9f, 0x1f97), (0x1fa8, 0x1fa0), (0x1fa9, 0x1fa1), (0x1faa, 0x1fa2), (0x1fab, 0x1fa3), (0x1fac, 0x1fa4),
            (0x1fad, 0x1fa5), (0x1fae, 0x1fa6), (0x1faf, 0x1fa7), (0x1fb8, 0x1fb0), (0x1fb9, 0x1fb1), (0x1fba, 0x1f70),
            (0x1fbb, 0x1f71), (0x1fbc, 0x1fb3), (0x1fc8, 0x1f72), (0x1fc9, 0x1f73), (0x1fca, 0x1f74), (0x1fcb, 0x1f75),
            (0x1fcc, 0x1fc3), (0x1fd8, 0x1fd0), (0x1fd9, 0x1fd1), (0x1fda, 0x1f76), (0x1fdb, 0x1f77), (0x1fe8, 0x1fe0),
            (0x1fe9, 0x1fe1), (0x1fea, 0x1f7a), (0x1feb, 0x1f7b), (0x1fec, 0x1fe5), (0x1ff8, 0x1f78), (0x1ff9, 0x1f79),
            (0x1ffa, 0x1f7c), (0x1ffb, 0x1f7d), (0x1ffc, 0x1ff3), (0x2126, 0x3c9), (0x212a, 0x6b), (0x212b, 0xe5),
            (0x2132, 0x214e), (0x2160, 0x2170), (0x2161, 0x2171), (0x2162, 0x2172), (0x2163, 0x2173), (0x2164, 0x2174),
            (0x2165, 0x2175), (0x2166, 0x2176), (0x2167, 0x2177), (0x2168, 0x2178), (0x2169, 0x2179), (0x216a, 0x217a),
            (0x216b, 0x217b), (0x216c, 0x217c), (0x216d, 0x217d), (0x216e, 0x217e), (0x216f, 0x217f), (0x2183, 0x2184),
            (0x24b6, 0x24d0), (0x24b7, 0x24d1), (0x24b8, 0x24d2), (0x24b9, 0x24d3), (0x24ba, 0x24d4), (0x24bb, 0x24d5),
            (0x24bc, 0x24d6), (0x24bd, 0x24d7), (0x24be, 0x24d8), (0x24bf, 0x24d9), (0x24c0, 0x24da), (0x24c1, 0x24db),
            (0x24c2, 0x24dc), (0x24c3, 0x24dd), (0x24c4, 0x24de), (0x24c5, 0x24df), (0x24c6, 0x24e0), (0x24c7, 0x24e1),
            (0x24c8, 0x24e2), (0x24c9, 0x24e3), (0x24ca, 0x24e4), (0x24cb, 0x24e5), (0x24cc, 0x24e6), (0x24cd, 0x24e7),
            (0x24ce, 0x24e8), (0x24cf, 0x24e9), (0x2c00, 0x2c30), (0x2c01, 0x2c31), (0x2c02, 0x2c32), (0x2c03, 0x2c33),
            (0x2c04, 0x2c34), (0x2c05, 0x2c35), (0x2c06, 0x2c36), (0x2c07, 0x2c37), (0x2c08, 0x2c38), (0x2c09, 0x2c39),
            (0x2c0a, 0x2c3a), (0x2c0b, 0x2c3b), (0x2c0c, 0x2c3c), (0x2c0d, 0x2c3d), (0x2c0e, 0x2c3e), (0x2c0f, 0x2c3f),
            (0x2c10, 0x2c40), (0x2c11, 0x2c41), (0x2c12, 0x2c42), (0x2c13, 0x2c43), (0x2c14, 0x2c44), (0x2c15, 0x2c45),
            (0x2c16, 0x2c46), (0x2c17, 0x2c47), (0x2c18, 0x2c48), (0x2c19, 0x2c49), (0x2c1a, 0x2c4a), (0x2c1b, 0x2c4b),
            (0x2c1c, 0x2c4c), (0x2c1d, 0x2c4d), (0x2c1e, 0x2c4e), (0x2c1f, 0x2c4f), (0x2c20, 0x2c50), (0x2c21, 0x2c51),
            (0x2c22, 0x2c52), (0x2c23, 0x2c53), (0x2c24, 0x2c54), (0x2c25, 0x2c55), (0x2c26, 0x2c56), (0x2c27, 0x2c57),
            (0x2c28, 0x2c58), (0x2c29, 0x2c59), (0x2c2a, 0x2c5a), (0x2c2b, 0x2c5b), (0x2c2c, 0x2c5c), (0x2c2d, 0x2c5d),
            (0x2c2e, 0x2c5e), (0x2c2f, 0x2c5f), (0x2c60, 0x2c61), (0x2c62, 0x26b), (0x2c63, 0x1d7d), (0x2c64, 0x27d),
            (0x2c67, 0x2c68), (0x2c69, 0x2c6a), (0x2c6b, 0x2c6c), (0x2c6d, 0x251), (0x2c6e, 0x271), (0x2c6f, 0x250),
            (0x2c70, 0x252), (0x2c72, 0x2c73), (0x2c75, 0x2c76), (0x2c7e, 0x23f), (0x2c7f, 0x240), (0x2c80, 0x2c81),
            (0x2c82, 0x2c83), (0x2c84, 0x2c85), (0x2c86, 0x2c87), (0x2c88, 0x2c89), (0x2c8a, 0x2c8b), (0x2c8c, 0x2c8d),
            (0x2c8e, 0x2c8f), (0x2c90, 0x2c91), (0x2c92, 0x2c93), (0x2c94, 0x2c95), (0x2c96, 0x2c97), (0x2c98, 0x2c99),
            (0x2c9a, 0x2c9b), (0x2c9c, 0x2c9d), (0x2c9e, 0x2c9f), (0x2ca0, 0x2ca1), (0x2ca2, 0x2ca3), (0x2ca4, 0x2ca5),
            (0x2ca6, 0x2ca7), (0x2ca8, 0x2ca9), (0x2caa, 0x2cab), (0x2cac, 0x2cad), (0x2cae, 0x2caf), (0x2cb0, 0x2cb1),
            (0x2cb2, 0x2cb3), (0x2cb4, 0x2cb5), (0x2cb6, 0x2cb7), (0x2cb8, 0x2cb9), (0x2cba, 0x2cbb), (0x2cbc, 0x2cbd),
            (0x2cbe, 0x2cbf), (0x2cc0, 0x2cc1), (0x2cc2, 0x2cc3), (0x2cc4, 0x2cc5), (0x2cc6, 0x2cc7), (0x2cc8, 0x2cc9),
            (0x2cca, 0x2ccb), (0x2ccc, 0x2ccd), (0x2cce, 0x2ccf), (0x2cd0, 0x2cd1), (0x2cd2, 0x2cd3), (0x2cd4, 0x2cd5),
            (0x2cd6, 0x2cd7), (0x2cd8, 0x2cd9), (0x2cda, 0x2cdb), (0x2cdc, 0x2cdd), (0x2cde, 0x2cdf), (0x2ce0, 0x2ce1),
            (0x2ce2, 0x2ce3), (0x2ceb, 0x2cec), (0x2ced, 0x2cee), (0x2cf2, 0x2cf3), (0xa640, 0xa641), (0xa642, 0xa643),
            (0xa644, 0xa645), (0xa646, 0xa647), (0xa648, 0xa649), (0xa64a, 0xa64b), (0xa64c, 0xa64d), (0xa64e, 0xa64f),
            (0xa650, 0xa651), (0xa652, 0xa653), (0xa654, 0xa655), (0xa656, 0xa657), (0xa658, 0xa659), (0xa65a, 0xa65b),
            (0xa65c, 0xa65d), (0xa65e, 0xa65f), (0xa660, 0xa661), (0xa662, 0xa663), (0xa664, 0xa665), (0xa666, 0xa667),
            (0xa668, 0xa669), (0xa66a, 0xa66b), (0xa66c, 0xa66d), (0xa680, 0xa681), (0xa682, 0xa683), (0xa684, 0xa685),
            (0xa686, 0xa687), (0xa688, 0xa689), (0xa68a, 0xa68b), (0xa68c, 0xa68d), (0xa68e, 0xa68f), (0xa690, 0xa691),
            (0xa692, 0xa693), (0xa694, 0xa695), (0xa696, 0xa697), (0xa698, 0xa699), (0xa69a, 0xa69b), (0xa722, 0xa723),
            (0xa724, 0xa725), (0xa726, 0xa727), (0xa728, 0xa729), (0xa72a, 0xa72b), (0xa72c, 0xa72d), (0xa72e, 0xa72f),
            (0xa732, 0xa733), (0xa734, 0xa735), (0xa736, 0xa737), (0xa738, 0xa739), (0xa73a, 0xa73b), (0xa73c, 0xa73d),
            (0xa73e, 0xa73f), (0xa740, 0xa741), (0xa742, 0xa743), (0xa744, 0xa745), (0xa746, 0xa747), (0xa748, 0xa749),
            (0xa74a, 0xa74b), (0xa74c, 0xa74d), (0xa74e, 0xa74f), (0xa750, 0xa751), (0xa752, 0xa753), (0xa754, 0xa755),
            (0xa756, 0xa757), (0xa758, 0xa759), (0xa75a, 0xa75b), (0xa75c, 0xa75d), (0xa75e, 0xa75f), (0xa760, 0xa761),
            (0xa762, 0xa763), (0xa764, 0xa765), (0xa766, 0xa767), (0xa768, 0xa769), (0xa76a, 0xa76b), (0xa76c, 0xa76d),
            (0xa76e, 0xa76f), (0xa779, 0xa77a), (0xa77b, 0xa77c), (0xa77d, 0x1d79), (0xa77e, 0xa77f), (0xa780, 0xa781),
            (0xa782, 0xa783), (0xa784, 0xa785), (0xa786, 0xa787), (0xa78b, 0xa78c), (0xa78d, 0x265), (0xa790, 0xa791),
            (0xa792, 0xa793), (0xa796, 0xa797), (0xa798, 0xa799), (0xa79a, 0xa79b), (0xa79c, 0xa79d), (0xa79e, 0xa79f),
            (0xa7a0, 0xa7a1), (0xa7a2, 0xa7a3), (0xa7a4, 0xa7a5), (0xa7a6, 0xa7a7), (0xa7a8, 0xa7a9), (0xa7aa, 0x266),
            (0xa7ab, 0x25c), (0xa7ac, 0x261), (0xa7ad, 0x26c), (0xa7ae, 0x26a), (0xa7b0, 0x29e), (0xa7b1, 0x287),
            (0xa7b2, 0x29d), (0xa7b3, 0xab53), (0xa7b4, 0xa7b5), (0xa7b6, 0xa7b7), (0xa7b8, 0xa7b9), (0xa7ba, 0xa7bb),
            (0xa7bc, 0xa7bd), (0xa7be, 0xa7bf), (0xa7c0, 0xa7c1), (0xa7c2, 0xa7c3), (0xa7c4, 0xa794), (0xa7c5, 0x282),
            (0xa7c6, 0x1d8e), (0xa7c7, 0xa7c8), (0xa7c9, 0xa7ca), (0xa7d0, 0xa7d1), (0xa7d6, 0xa7d7), (0xa7d8, 0xa7d9),
            (0xa7f5, 0xa7f6), (0xff21, 0xff41), (0xff22, 0xff42), (0xff23, 0xff43), (0xff24, 0xff44), (0xff25, 0xff45),
            (0xff26, 0xff46), (0xff27, 0xff47), (0xff28, 0xff48), (0xff29, 0xff49), (0xff2a, 0xff4a), (0xff2b, 0xff4b),
            (0xff2c, 0xff4c), (0xff2d, 0xff4d), (0xff2e, 0xff4e), (0xff2f, 0xff4f), (0xff30, 0xff50), (0xff31, 0xff51),
            (0xff32, 0xff52), (0xff33, 0xff53), (0xff34, 0xff54), (0xff35, 0xff55), (0xff36, 0xff56), (0xff37, 0xff57),
            (0xff38, 0xff58), (0xff39, 0xff59), (0xff3a, 0xff5a), (0x10400, 0x10428), (0x10401, 0x10429), (0x10402, 0x1042a),
            (0x10403, 0x1042b), (0x10404, 0x1042c), (0x10405, 0x1042d), (0x10406, 0x1042e), (0x10407, 0x1042f), (0x10408, 0x10430),
            (0x10409, 0x10431), (0x1040a, 0x10432), (0x1040b, 0x10433), (0x1040c, 0x10434), (0x1040d, 0x10435), (0x1040e, 0x10436),
            (0x1040f, 0x10437), (0x10410, 0x10438), (0x10411, 0x10439), (0x10412, 0x1043a), (0x10413, 0x1043b), (0x10414, 0x1043c),
            (0x10415, 0x1043d), (0x10416, 0x1043e), (0x10417, 0x1043f), (0x10418, 0x10440), (0x10419, 0x10441), (0x1041a, 0x10442),
            (0x1041b, 0x10443), (0x1041c, 0x10444), (0x1041d, 0x10445), (0x1041e, 0x10446), (0x1041f, 0x10447), (0x10420, 0x10448),
            (0x10421, 0x10449), (0x10422, 0x1044a), (0x10423, 0x1044b), (0x10424, 0x1044c), (0x10425, 0x1044d), (0x10426, 0x1044e),
            (0x10427, 0x1044f), (0x104b0, 0x104d8), (0x104b1, 0x104d9), (0x104b2, 0x104da), (0x104b3, 0x104db), (0x104b4, 0x104dc),
            (0x104b5, 0x104dd), (0x104b6, 0x104de), (0x104b7, 0x104df), (0x104b8, 0x104e0), (0x104b9, 0x104e1), (0x104ba, 0x104e2),
            (0x104bb, 0x104e3), (0x104bc, 0x104e4), (0x104bd, 0x104e5), (0x104be, 0x104e6), (0x104bf, 0x104e7), (0x104c0, 0x104e8),
            (0x104c1, 0x104e9), (0x104c2, 0x104ea), (0x104c3, 0x104eb), (0x104c4, 0x104ec), (0x104c5, 0x104ed), (0x104c6, 0x104ee),
            (0x104c7, 0x104ef), (0x104c8, 0x104f0), (0x104c9, 0x104f1), (0x104ca, 0x104f2), (0x104cb, 0x104f3), (0x104cc, 0x104f4),
            (0x104cd, 0x104f5), (0x104ce, 0x104f6), (0x104cf, 0x104f7), (0x104d0, 0x104f8), (0x104d1, 0x104f9), (0x104d2, 0x104fa),
            (0x104d3, 0x104fb), (0x10570, 0x10597), (0x10571, 0x10598), (0x10572, 0x10599), (0x10573, 0x1059a), (0x10574, 0x1059b),
            (0x10575, 0x1059c), (0x10576, 0x1059d), (0x10577, 0x1059e), (0x10578, 0x1059f), (0x10579, 0x105a0), (0x1057a, 0x105a1),
            (0x1057c, 0x105a3), (0x1057d, 0x105a4), (0x1057e, 0x105a5), (0x1057f, 0x105a6), (0x10580, 0x105a7), (0x10581, 0x105a8),
            (0x10582, 0x105a9), (0x10583, 0x105aa), (0x10584, 0x105ab), (0x10585, 0x105ac), (0x10586, 0x105ad), (0x10587, 0x105ae),
            (0x10588, 0x105af), (0x10589, 0x105b0), (0x1058a, 0x105b1), (0x1058c, 0x105b3), (0x1058d, 0x105b4), (0x1058e, 0x105b5),
            (0x1058f, 0x105b6), (0x10590, 0x105b7), (0x10591, 0x105b8), (0x10592, 0x105b9), (0x10594, 0x105bb), (0x10595, 0x105bc),
            (0x10c80, 0x10cc0), (0x10c81, 0x10cc1), (0x10c82, 0x10cc2), (0x10c83, 0x10cc3), (0x10c84, 0x10cc4), (0x10c85, 0x10cc5),
            (0x10c86, 0x10cc6), (0x10c87, 0x10cc7), (0x10c88, 0x10cc8), (0x10c89, 0x10cc9), (0x10c8a, 0x10cca), (0x10c8b, 0x10ccb),
            (0x10c8c, 0x10ccc), (0x10c8d, 0x10ccd), (0x10c8e, 0x10cce), (0x10c8f, 0x10ccf), (0x10c90, 0x10cd0), (0x10c91, 0x10cd1),
            (0x10c92, 0x10cd2), (0x10c93, 0x10cd3), (0x10c94, 0x10cd4), (0x10c95, 0x10cd5), (0x10c96, 0x10cd6), (0x10c97, 0x10cd7),
            (0x10c98, 0x10cd8), (0x10c99, 0x10cd9), (0x10c9a, 0x10cda), (0x10c9b, 0x10cdb), (0x10c9c, 0x10cdc), (0x10c9d, 0x10cdd),
            (0x10c9e, 0x10cde), (0x10c9f, 0x10cdf), (0x10ca0, 0x10ce0), (0x10ca1, 0x10ce1), (0x10ca2, 0x10ce2), (0x10ca3, 0x10ce3),
            (0x10ca4, 0x10ce4), (0x10ca5, 0x10ce5), (0x10ca6, 0x10ce6), (0x10ca7, 0x10ce7), (0x10ca8, 0x10ce8), (0x10ca9, 0x10ce9),
            (0x10caa, 0x10cea), (0x10cab, 0x10ceb), (0x10cac, 0x10cec), (0x10cad, 0x10ced), (0x10cae, 0x10cee), (0x10caf, 0x10cef),
            (0x10cb0, 0x10cf0), (0x10cb1, 0x10cf1), (0x10cb2, 0x10cf2), (0x118a0, 0x118c0), (0x118a1, 0x118c1), (0x118a2, 0x118c2),
            (0x118a3, 0x118c3), (0x118a4, 0x118c4), (0x118a5, 0x118c5), (0x118a6, 0x118c6), (0x118a7, 0x118c7), (0x118a8, 0x118c8),
            (0x118a9, 0x118c9), (0x118aa, 0x118ca), (0x118ab, 0x118cb), (0x118ac, 0x118cc), (0x118ad, 0x118cd), (0x118ae, 0x118ce),
            (0x118af, 0x118cf), (0x118b0, 0x118d0), (0x118b1, 0x118d1), (0x118b2, 0x118d2), (0x118b3, 0x118d3), (0x118b4, 0x118d4),
            (0x118b5, 0x118d5), (0x118b6, 0x118d6), (0x118b7, 0x118d7), (0x118b8, 0x118d8), (0x118b9, 0x118d9), (0x118ba, 0x118da),
            (0x118bb, 0x118db), (0x118bc, 0x118dc), (0x118bd, 0x118dd), (0x118be, 0x118de), (0x118bf, 0x118df), (0x16e40, 0x16e60),
            (0x16e41, 0x16e61), (0x16e42, 0x16e62), (0x16e43, 0x16e63), (0x16e44, 0x16e64), (0x16e45, 0x16e65), (0x16e46, 0x16e66),
            (0x16e47, 0x16e67), (0x16e48, 0x16e68), (0x16e49, 0x16e69), (0x16e4a, 0x16e6a), (0x16e4b, 0x16e6b), (0x16e4c, 0x16e6c),
            (0x16e4d, 0x16e6d), (0x16e4e, 0x16e6e), (0x16e4f, 0x16e6f), (0x16e50, 0x16e70), (0x16e51, 0x16e71), (0x16e52, 0x16e72),
            (0x16e53, 0x16e73), (0x16e54, 0x16e74), (0x16e55, 0x16e75), (0x16e56, 0x16e76), (0x16e57, 0x16e77), (0x16e58, 0x16e78),
            (0x16e59, 0x16e79), (0x16e5a, 0x16e7a), (0x16e5b, 0x16e7b), (0x16e5c, 0x16e7c), (0x16e5d, 0x16e7d), (0x16e5e, 0x16e7e),
            (0x16e5f, 0x16e7f), (0x1e900, 0x1e922), (0x1e901, 0x1e923), (0x1e902, 0x1e924), (0x1e903, 0x1e925), (0x1e904, 0x1e926),
            (0x1e905, 0x1e927), (0x1e906, 0x1e928), (0x1e907, 0x1e929), (0x1e908, 0x1e92a), (0x1e909, 0x1e92b), (0x1e90a, 0x1e92c),
            (0x1e90b, 0x1e92d), (0x1e90c, 0x1e92e), (0x1e90d, 0x1e92f), (0x1e90e, 0x1e930), (0x1e90f, 0x1e931), (0x1e910, 0x1e932),
            (0x1e911, 0x1e933), (0x1e912, 0x1e934), (0x1e913, 0x1e935), (0x1e914, 0x1e936), (0x1e915, 0x1e937), (0x1e916, 0x1e938),
            (0x1e917, 0x1e939), (0x1e918, 0x1e93a), (0x1e919, 0x1e93b), (0x1e91a, 0x1e93c), (0x1e91b, 0x1e93d), (0x1e91c, 0x1e93e),
            (0x1e91d, 0x1e93f), (0x1e91e, 0x1e940), (0x1e91f, 0x1e941), (0x1e920, 0x1e942), (0x1e921, 0x1e943),
        ],
        0,
    );

    pub(crate) static FULL_LOWER: ExtendedTable = ExtendedTable::from_static(
        &[
            (0x130, Slot::new(0, 2)),
        ],
        &[
            0x69, 0x307,
        ],
    );

    pub(crate) static SIMPLE_UPPER: ExactTable<u32> = ExactTable::from_static(
        &[
            (0x61, 0x41), (0x62, 0x42), (0x63, 0x43), (0x64, 0x44), (0x65, 0x45), (0x66, 0x46),
            (0x67, 0x47), (0x68, 0x48), (0x69, 0x49), (0x6a, 0x4a), (0x6b, 0x4b), (0x6c, 0x4c),
            (0x6d, 0x4d), (0x6e, 0x4e), (0x6f, 0x4f), (0x70, 0x50), (0x71, 0x51), (0x72, 0x52),
            (0x73, 0x53), (0x74, 0x54), (0x75, 0x55), (0x76, 0x56), (0x77, 0x57), (0x78, 0x58),
            (0x79, 0x59), (0x7a, 0x5a), (0xb5, 0x39c), (0xe0, 0xc0), (0xe1, 0xc1), (0xe2, 0xc2),
            (0xe3, 0xc3), (0xe4, 0xc4), (0xe5, 0xc5), (0xe6, 0xc6), (0xe7, 0xc7), (0xe8, 0xc8),
            (0xe9, 0xc9), (0xea, 0xca), (0xeb, 0xcb), (0xec, 0xcc), (0xed, 0xcd), (0xee, 0xce),
            (0xef, 0xcf), (0xf0, 0xd0), (0xf1, 0xd1), (0xf2, 0xd2), (0xf3, 0xd3), (0xf4, 0xd4),
            (0xf5, 0xd5), (0xf6, 0xd6), (0xf8, 0xd8), (0xf9, 0xd9), (0xfa, 0xda), (0xfb, 0xdb),
            (0xfc, 0xdc), (0xfd, 0xdd), (0xfe, 0xde), (0xff, 0x178), (0x101, 0x100), (0x103, 0x102),
            (0x105, 0x104), (0x107, 0x106), (0x109, 0x108), (0x10b, 0x10a), (0x10d, 0x10c), (0x10f, 0x10e),
            (0x111, 0x110), (0x113, 0x112), (0x115, 0x114), (0x117, 0x116), (0x119, 0x118), (0x11b, 0x11a),
            (0x11d, 0x11c), (0x11f, 0x11e), (0x121, 0x120), (0x123, 0x122), (0x125, 0x124), (0x127, 0x126),
            (0x129, 0x128), (0x12b, 0x12a), (0x12d, 0x12c), (0x12f, 0x12e), (0x131, 0x49), (0x133, 0x132),
            (0x135, 0x134), (0x137, 0x136), (0x13a, 0x139), (0x13c, 0x13b), (0x13e, 0x13d), (0x140, 0x13f),
            (0x142, 0x141), (0x144, 0x143), (0x146, 0x145), (0x148, 0x147), (0x14b, 0x14a), (0x14d, 0x14c),
            (0x14f, 0x14e), (0x151, 0x150), (0x153, 0x152), (0x155, 0x154), (0x157, 0x156), (0x159, 0x158),
            (0x15b, 0x15a), (0x15d, 0x15c), (0x15f, 0x15e), (0x161, 0x160), (0x163, 0x162), (0x165, 0x164),
            (0x167, 0x166), (0x169, 0x168), (0x16b, 0x16a), (0x16d, 0x16c), (0x16f, 0x16e), (0x171, 0x170),
            (0x173, 0x172), (0x175, 0x174), (0x177, 0x176), (0x17a, 0x179), (0x17c, 0x17b), (0x17e, 0x17d),
            (0x17f, 0x53), (0x180, 0x243), (0x183, 0x182), (0x185, 0x184), (0x188, 0x187), (0x18c, 0x18b),
            (0x192, 0x191), (0x195, 0x1f6), (0x199, 0x198), (0x19a, 0x23d), (0x19e, 0x220), (0x1a1, 0x1a0),
            (0x1a3, 0x1a2), (0x1a5, 0x1a4), (0x1a8, 0x1a7), (0x1ad, 0x1ac), (0x1b0, 0x1af), (0x1b4, 0x1b3),
            (0x1b6, 0x1b5), (0x1b9, 0x1b8), (0x1bd, 0x1bc), (0x1bf, 0x1f7), (0x1c5, 0x1c4), (0x1c6, 0x1c4),
            (0x1c8, 0x1c7), (0x1c9, 0x1c7), (0x1cb, 0x1ca), (0x1cc, 0x1ca), (0x1ce, 0x1cd), (0x1d0, 0x1cf),
            (0x1d2, 0x1d1), (0x1d4, 0x1d3), (0x1d6, 0x1d5), (0x1d8, 0x1d7), (0x1da, 0x1d9), (0x1dc, 0x1db),
            (0x1dd, 0x18e), (0x1df, 0x1de), (0x1e1, 0x1e0), (0x1e3, 0x1e2), (0x1e5, 0x1e4), (0x1e7, 0x1e6),
            (0x1e9, 0x1e8), (0x1eb, 0x1ea), (0x1ed, 0x1ec), (0x1ef, 0x1ee), (0x1f2, 0x1f1), (0x1f3, 0x1f1),
            (0x1f5, 0x1f4), (0x1f9, 0x1f8), (0x1fb, 0x1fa), (0x1fd, 0x1fc), (0x1ff, 0x1fe), (0x201, 0x200),
            (0x203, 0x202), (0x205, 0x204), (0x207, 0x206), (0x209, 0x208), (0x20b, 0x20a), (0x20d, 0x20c),
            (0x20f, 0x20e), (0x211, 0x210), (0x213, 0x212), (0x215, 0x214), (0x217, 0x216), (0x219, 0x218),
            (0x21b, 0x21a), (0x21d, 0x21c), (0x21f, 0x21e), (0x223, 0x222), (0x225, 0x224), (0x227, 0x226),
            (0x229, 0x228), (0x22b, 0x22a), (0x22d, 0x22c), (0x22f, 0x22e), (0x231, 0x230), (0x233, 0x232),
            (0x23c, 0x23b), (0x23f, 0x2c7e), (0x240, 0x2c7f), (0x242, 0x241), (0x247, 0x246), (0x249, 0x248),
            (0x24b, 0x24a), (0x24d, 0x24c), (0x24f, 0x24e), (0x250, 0x2c6f), (0x251, 0x2c6d), (0x252, 0x2c70),
            (0x253, 0x181), (0x254, 0x186), (0x256, 0x189), (0x257, 0x18a), (0x259, 0x18f), (0x25b, 0x190),
            (0x25c, 0xa7ab), (0x260, 0x193), (0x261, 0xa7ac), (0x263, 0x194), (0x265, 0xa78d), (0x266, 0xa7aa),
            (0x268, 0x197), (0x269, 0x196), (0x26a, 0xa7ae), (0x26b, 0x2c62), (0x26c, 0xa7ad), (0x26f, 0x19c),
            (0x271, 0x2c6e), (0x272, 0x19d), (0x275, 0x19f), (0x27d, 0x2c64), (0x280, 0x1a6), (0x282, 0xa7c5),
            (0x283, 0x1a9), (0x287, 0xa7b1), (0x288, 0x1ae), (0x289, 0x244), (0x28a, 0x1b1), (0x28b, 0x1b2),
            (0x28c, 0x245), (0x292, 0x1b7), (0x29d, 0xa7b2), (0x29e, 0xa7b0), (0x345, 0x399), (0x371, 0x370),
            (0x373, 0x372), (0x377, 0x376), (0x37b, 0x3fd), (0x37c, 0x3fe), (0x37d, 0x3ff), (0x3ac, 0x386),
            (0x3ad, 0x388), (0x3ae, 0x389), (0x3af, 0x38a), (0x3b1, 0x391), (0x3b2, 0x392), (0x3b3, 0x393),
            (0x3b4, 0x394), (0x3b5, 0x395), (0x3b6, 0x396), (0x3b7, 0x397), (0x3b8, 0x398), (0x3b9, 0x399),
            (0x3ba, 0x39a), (0x3bb, 0x39b), (0x3bc, 0x39c), (0x3bd, 0x39d), (0x3be, 0x39e), (0x3bf, 0x39f),
            (0x3c0, 0x3a0), (0x3c1, 0x3a1), (0x3c2, 0x3a3), (0x3c3, 0x3a3), (0x3c4, 0x3a4), (0x3c5, 0x3a5),
            (0x3c6, 0x3a6), (0x3c7, 0x3a7), (0x3c8, 0x3a8), (0x3c9, 0x3a9), (0x3ca, 0x3aa), (0x3cb, 0x3ab),
            (0x3cc, 0x38c), (0x3cd, 0x38e), (0x3ce, 0x38f), (0x3d0, 0x392), (0x3d1, 0x398), (0x3d5, 0x3a6),
            (0x3d6, 0x3a0), (0x3d7, 0x3cf), (0x3d9, 0x3d8), (0x3db, 0x3da), (0x3dd, 0x3dc), (0x3df, 0x3de),
            (0x3e1, 0x3e0), (0x3e3, 0x3e2), (0x3e5, 0x3e4), (0x3e7, 0x3e6), (0x3e9, 0x3e8), (0x3eb, 0x3ea),
            (0x3ed, 0x3ec), (0x3ef, 0x3ee), (0x3f0, 0x39a), (0x3f1, 0x3a1), (0x3f2, 0x3f9), (0x3f3, 0x37f),
            (0x3f5, 0x395), (0x3f8, 0x3f7), (0x3fb, 0x3fa), (0x430, 0x410), (0x431, 0x411), (0x432, 0x412),
            (0x433, 0x413), (0x434, 0x414), (0x435, 0x415), (0x436, 0x416), (0x437, 0x417), (0x438, 0x418),
            (0x439, 0x419), (0x43a, 0x41a), (0x43b, 0x41b), (0x43c, 0x41c), (0x43d, 0x41d), (0x43e, 0x41e),
            (0x43f, 0x41f), (0x440, 0x420), (0x441, 0x421), (0x442, 0x422), (0x443, 0x423), (0x444, 0x424),
            (0x445, 0x425), (0x446, 0x426), (0x447, 0x427), (0x448, 0x428), (0x449, 0x429), (0x44a, 0x42a),
            (0x44b, 0x42b), (0x44c, 0x42c), (0x44d, 0x42d), (0x44e, 0x42e), (0x44f, 0x42f), (0x450, 0x400),
            (0x451, 0x401), (0x452, 0x402), (0x453, 0x403), (0x454, 0x404), (0x455, 0x405), (0x456, 0x406),
            (0x457, 0x407), (0x458, 0x408), (0x459, 0x409), (0x45a, 0x40a), (0x45b, 0x40b), (0x45c, 0x40c),
            (0x45d, 0x40d), (0x45e, 0x40e), (0x45f, 0x40f), (0x461, 0x460), (0x463, 0x462), (0x465, 0x464),
            (0x467, 0x466), (0x469, 0x468), (0x46b, 0x46a), (0x46d, 0x46c), (0x46f, 0x46e), (0x471, 0x470),
            (0x473, 0x472), (0x475, 0x474), (0x477, 0x476), (0x479, 0x478), (0x47b, 0x47a), (0x47d, 0x47c),
            (0x47f, 0x47e), (0x481, 0x480), (0x48b, 0x48a), (0x48d, 0x48c), (0x48f, 0x48e), (0x491, 0x490),
            (0x493, 0x492), (0x495, 0x494), (0x497, 0x496), (0x499, 0x498), (0x49b, 0x49a), (0x49d, 0x49c),
            (0x49f, 0x49e), (0x4a1, 0x4a0), (0x4a3, 0x4a2), (0x4a5, 0x4a4), (0x4a7, 0x4a6), (0x4a9, 0x4a8),
            (0x4ab, 0x4aa), (0x4ad, 0x4ac), (0x4af, 0x4ae), (0x4b1, 0x4b0), (0x4b3, 0x4b2), (0x4b5, 0x4b4),
            (0x4b7, 0x4b6), (0x4b9, 0x4b8), (0x4bb, 0x4ba), (0x4bd, 0x4bc), (0x4bf, 0x4be), (0x4c2, 0x4c1),
            (0x4c4, 0x4c3), (0x4c6, 0x4c5), (0x4c8, 0x4c7), (0x4ca, 0x4c9), (0x4cc, 0x4cb), (0x4ce, 0x4cd),
            (0x4cf, 0x4c0), (0x4d1, 0x4d0), (0x4d3, 0x4d2), (0x4d5, 0x4d4), (0x4d7, 0x4d6), (0x4d9, 0x4d8),
            (0x4db, 0x4da), (0x4dd, 0x4dc), (0x4df, 0x4de), (0x4e1, 0x4e0), (0x4e3, 0x4e2), (0x4e5, 0x4e4),
            (0x4e7, 0x4e6), (0x4e9, 0x4e8), (0x4eb, 0x4ea), (0x4ed, 0x4ec), (0x4ef, 0x4ee), (0x4f1, 0x4f0),
            (0x4f3, 0x4f2), (0x4f5, 0x4f4), (0x4f7, 0x4f6), (0x4f9, 0x4f8), (0x4fb, 0x4fa), (0x4fd, 0x4fc),
            (0x4ff, 0x4fe), (0x501, 0x500), (0x503, 0x502), (0x505, 0x504), (0x507, 0x506), (0x509, 0x508),
            (0x50b, 0x50a), (0x50d, 0x50c), (0x50f, 0x50e), (0x511, 0x510), (0x513, 0x512), (0x515, 0x514),
            (0x517, 0x516), (0x519, 0x518), (0x51b, 0x51a), (0x51d, 0x51c), (0x51f, 0x51e), (0x521, 0x520),
            (0x523, 0x522), (0x525, 0x524), (0x527, 0x526), (0x529, 0x528), (0x52b, 0x52a), (0x52d, 0x52c),
            (0x52f, 0x52e), (0x561, 0x531), (0x562, 0x532), (0x563, 0x533), (0x564, 0x534), (0x565, 0x535),
            (0x566, 0x536), (0x567, 0x537), (0x568, 0x538), (0x569, 0x539), (0x56a, 0x53a), (0x56b, 0x53b),
            (0x56c, 0x53c), (0x56d, 0x53d), (0x56e, 0x53e), (0x56f, 0x53f), (0x570, 0x540), (0x571, 0x541),
            (0x572, 0x542), (0x573, 0x543), (0x574, 0x544), (0x575, 0x545), (0x576, 0x546), (0x577, 0x547),
            (0x578, 0x548), (0x579, 0x549), (0x57a, 0x54a), (0x57b, 0x54b), (0x57c, 0x54c), (0x57d, 0x54d),
            (0x57e, 0x54e), (0x57f, 0x54f), (0x580, 0x550), (0x581, 0x551), (0x582, 0x552), (0x583, 0x553),
            (0x584, 0x554), (0x585, 0x555), (0x586, 0x556), (0x10d0, 0x1c90), (0x10d1, 0x1c91), (0x10d2, 0x1c92),
            (0x10d3, 0x1c93), (0x10d4, 0x1c94), (0x10d5, 0x1c95), (0x10d6, 0x1c96), (0x10d7, 0x1c97), (0x10d8, 0x1c98),
            (0x10d9, 0x1c99), (0x10da, 0x1c9a), (0x10db, 0x1c9b), (0x10dc, 0x1c9c), (0x10dd, 0x1c9d), (0x10de, 0x1c9e),
            (0x10df, 0x1c9f), (0x10e0, 0x1ca0), (0x10e1, 0x1ca1), (0x10e2, 0x1ca2), (0x10e3, 0x1ca3), (0x10e4, 0x1ca4),
            (0x10e5, 0x1ca5), (0x10e6, 0x1ca6), (0x10e7, 0x1ca7), (0x10e8, 0x1ca8), (0x10e9, 0x1ca9), (0x10ea, 0x1caa),
            (0x10eb, 0x1cab), (0x10ec, 0x1cac), (0x10ed, 0x1cad), (0x10ee, 0x1cae), (0x10ef, 0x1caf), (0x10f0, 0x1cb0),
            (0x10f1, 0x1cb1), (0x10f2, 0x1cb2), (0x10f3, 0x1cb3), (0x10f4, 0x1cb4), (0x10f5, 0x1cb5), (0x10f6, 0x1cb6),
            (0x10f7, 0x1cb7), (0x10f8, 0x1cb8), (0x10f9, 0x1cb9), (0x10fa, 0x1cba), (0x10fd, 0x1cbd), (0x10fe, 0x1cbe),
            (0x10ff, 0x1cbf), (0x13f8, 0x13f0), (0x13f9, 0x13f1), (0x13fa, 0x13f2), (0x13fb, 0x13f3), (0x13fc, 0x13f4),
            (0x13fd, 0x13f5), (0x1c80, 0x412), (0x1c81, 0x414), (0x1c82, 0x41e), (0x1c83, 0x421), (0x1c84, 0x422),
            (0x1c85, 0x422), (0x1c86, 0x42a), (0x1c87, 0x462), (0x1c88, 0xa64a), (0x1d79, 0xa77d), (0x1d7d, 0x2c63),
            (0x1d8e, 0xa7c6), (0x1e01, 0x1e00), (0x1e03, 0x1e02), (0x1e05, 0x1e04), (0x1e07, 0x1e06), (0x1e09, 0x1e08),
            (0x1e0b, 0x1e0a), (0x1e0d, 0x1e0c), (0x1e0f, 0x1e0e), (0x1e11, 0x1e10), (0x1e13, 0x1e12), (0x1e15, 0x1e14),
            (0x1e17, 0x1e16), (0x1e19, 0x1e18), (0x1e1b, 0x1e1a), (0x1e1d, 0x1e1c), (0x1e1f, 0x1e1e), (0x1e21, 0x1e20),
            (0x1e23, 0x1e22), (0x1e25, 0x1e24), (0x1e27, 0x1e26), (0x1e29, 0x1e28), (0x1e2b, 0x1e2a), (0x1e2d, 0x1e2c),
            (0x1e2f, 0x1e2e), (0x1e31, 0x1e30), (0x1e33, 0x1e32), (0x1e35, 0x1e34), (0x1e37, 0x1e36), (0x1e39, 0x1e38),
            (0x1e3b, 0x1e3a), (0x1e3d, 0x1e3c), (0x1e3f, 0x1e3e), (0x1e41, 0x1e40), (0x1e43, 0x1e42), (0x1e45, 0x1e44),
            (0x1e47, 0x1e46), (0x1e49, 0x1e48), (0x1e4b, 0x1e4a), (0x1e4d, 0x1e4c), (0x1e4f, 0x1e4e), (0x1e51, 0x1e50),
            (0x1e53, 0x1e52), (0x1e55, 0x1e54), (0x1e57, 0x1e56), (0x1e59, 0x1e58), (0x1e5b, 0x1e5a), (0x1e5d, 0x1e5c),
            (0x1e5f, 0x1e5e), (0x1e61, 0x1e60), (0x1e63, 0x1e62), (0x1e65, 0x1e64), (0x1e67, 0x1e66), (0x1e69, 0x1e68),
            (0x1e6b, 0x1e6a), (0x1e6d, 0x1e6c), (0x1e6f, 0x1e6e), (0x1e71, 0x1e70), (0x1e73, 0x1e72), (0x1e75, 0x1e74),
            (0x1e77, 0x1e76), (0x1e79, 0x1e78), (0x1e7b, 0x1e7a), (0x1e7d, 0x1e7c), (0x1e7f, 0x1e7e), (0x1e81, 0x1e80),
            (0x1e83, 0x1e82), (0x1e85, 0x1e84), (0x1e87, 0x1e86), (0x1e89, 0x1e88), (0x1e8b, 0x1e8a), (0x1e8d, 0x1e8c),
            (0x1e8f, 0x1e8e), (0x1e91, 0x1e90), (0x1e93, 0x1e92), (0x1e95, 0x1e94), (0x1e9b, 0x1e60), (0x1ea1, 0x1ea0),
            (0x1ea3, 0x1ea2), (0x1ea5, 0x1ea4), (0x1ea7, 0x1ea6), (0x1ea9, 0x1ea8), (0x1eab, 0x1eaa), (0x1ead, 0x1eac),
            (0x1eaf, 0x1eae), (0x1eb1, 0x1eb0), (0x1eb3, 0x1eb2), (0x1eb5, 0x1eb4), (0x1eb7, 0x1eb6), (0x1eb9, 0x1eb8),
            (0x1ebb, 0x1eba), (0x1ebd, 0x1ebc), (0x1ebf, 0x1ebe), (0x1ec1, 0x1ec0), (0x1ec3, 0x1ec2), (0x1ec5, 0x1ec4),
            (0x1ec7, 0x1ec6), (0x1ec9, 0x1ec8), (0x1ecb, 0x1eca), (0x1ecd, 0x1ecc), (0x1ecf, 0x1ece), (0x1ed1, 0x1ed0),
            (0x1ed3, 0x1ed2), (0x1ed5, 0x1ed4), (0x1ed7, 0x1ed6), (0x1ed9, 0x1ed8), (0x1edb, 0x1eda), (0x1edd, 0x1edc),
            (0x1edf, 0x1ede), (0x1ee1, 0x1ee0), (0x1ee3, 0x1ee2), (0x1ee5, 0x1ee4), (0x1ee7, 0x1ee6), (0x1ee9, 0x1ee8),
            (0x1eeb, 0x1eea), (0x1eed, 0x1eec), (0x1eef, 0x1eee), (0x1ef1, 0x1ef0), (0x1ef3, 0x1ef2), (0x1ef5, 0x1ef4),
            (0x1ef7, 0x1ef6), (0x1ef9, 0x1ef8), (0x1efb, 0x1efa), (0x1efd, 0x1efc), (0x1eff, 0x1efe), (0x1f00, 0x1f08),
            (0x1f01, 0x1f09), (0x1f02, 0x1f0a), (0x1f03, 0x1f0b), (0x1f04, 0x1f0c), (0x1f05, 0x1f0d), (0x1f06, 0x1f0e),
            (0x1f07, 0x1f0f), (0x1f10, 0x1f18), (0x1f11, 0x1f19), (0x1f12, 0x1f1a), (0x1f13, 0x1f1b), (0x1f14, 0x1f1c),
            (0x1f15, 0x1f1d), (0x1f20, 0x1f28), (0x1f21, 0x1f29), (0x1f22, 0x1f2a), (0x1f23, 0x1f2b), (0x1f24, 0x1f2c),
            (0x1f25, 0x1f2d), (0x1f26, 0x1f2e), (0x1f27, 0x1f2f), (0x1f30, 0x1f38), (0x1f31, 0x1f39), (0x1f32, 0x1f3a),
            (0x1f33, 0x1f3b), (0x1f34, 0x1f3c), (0x1f35, 0x1f3d), (0x1f36, 0x1f3e), (0x1f37, 0x1f3f), (0x1f40, 0x1f48),
            (0x1f41, 0x1f49), (0x1f42, 0x1f4a), (0x1f43, 0x1f4b), (0x1f44, 0x1f4c), (0x1f45, 0x1f4d), (0x1f51, 0x1f59),
            (0x1f53, 0x1f5b), (0x1f55, 0x1f5d), (0x1f57, 0x1f5f), (0x1f60, 0x1f68), (0x1f61, 0x1f69), (0x1f62, 0x1f6a),
            (0x1f63, 0x1f6b), (0x1f64, 0x1f6c), (0x1f65, 0x1f6d), (0x1f66, 0x1f6e), (0x1f67, 0x1f6f), (0x1f70, 0x1fba),
            (0x1f71, 0x1fbb), (0x1f72, 0x1fc8), (0x1f73, 0x1fc9), (0x1f74, 0x1fca), (0x1f75, 0x1fcb), (0x1f76, 0x1fda),
            (0x1f77, 0x1fdb), (0x1f78, 0x1ff8), (0x1f79, 0x1ff9), (0x1f7a, 0x1fea), (0x1f7b, 0x1feb), (0x1f7c, 0x1ffa),
            (0x1f7d, 0x1ffb), (0x1f80, 0x1f88), (0x1f81, 0x1f89), (0x1f82, 0x1f8a), (0x1f83, 0x1f8b), (0x1f84, 0x1f8c),
            (0x1f85, 0x1f8d), (0x1f86, 0x1f8e), (0x1f87, 0x1f8f), (0x1f90, 0x1f98), (0x1f91, 0x1f99), (0x1f92, 0x1f9a),
            (0x1f93, 0x1f9b), (0x1f94, 0x1f9c), (0x1f95, 0x1f9d), (0x1f96, 0x1f9e), (0x1f97, 0x1f9f), (0x1fa0, 0x1fa8),
            (0x1fa1, 0x1fa9), (0x1fa2, 0x1faa), (0x1fa3, 0x1fab), (0x1fa4, 0x1fac), (0x1fa5, 0x1fad), (0x1fa6, 0x1fae),
            (0x1fa7, 0x1faf), (0x1fb0, 0x1fb8), (0x1fb1, 0x1fb9), (0x1fb3, 0x1fbc), (0x1fbe, 0x399), (0x1fc3, 0x1fcc),
            (0x1fd0, 0x1fd8), (0x1fd1, 0x1fd9), (0x1fe0, 0x1fe8), (0x1fe1, 0x1fe9), (0x1fe5, 0x1fec), (0x1ff3, 0x1ffc),
            (0x214e, 0x2132), (0x2170, 0x2160), (0x2171, 0x2161), (0x2172, 0x2162), (0x2173, 0x2163), (0x2174, 0x2164),
            (0x2175, 0x2165), (0x2176, 0x2166), (0x2177, 0x2167), (0x2178, 0x2168), (0x2179, 0x2169), (0x217a, 0x216a),
            (0x217b, 0x216b), (0x217c, 0x216c), (0x217d, 0x216d), (0x217e, 0x216e), (0x217f, 0x216f), (0x2184, 0x2183),
            (0x24d0, 0x24b6), (0x24d1, 0x24b7), (0x24d2, 0x24b8), (0x24d3, 0x24b9), (0x24d4, 0x24ba), (0x24d5, 0x24bb),
            (0x24d6, 0x24bc), (0x24d7, 0x24bd), (0x24d8, 0x24be), (0x24d9, 0x24bf), (0x24da, 0x24c0), (0x24db, 0x24c1),
            (0x24dc, 0x24c2), (0x24dd, 0x24c3), (0x24de, 0x24c4), (0x24df, 0x24c5), (0x24e0, 0x24c6), (0x24e1, 0x24c7),
            (0x24e2, 0x24c8), (0x24e3, 0x24c9), (0x24e4, 0x24ca), (0x24e5, 0x24cb), (0x24e6, 0x24cc), (0x24e7, 0x24cd),
            (0x24e8, 0x24ce), (0x24e9, 0x24cf), (0x2c30, 0x2c00), (0x2c31, 0x2c01), (0x2c32, 0x2c02), (0x2c33, 0x2c03),
            (0x2c34, 0x2c04), (0x2c35, 0x2c05), (0x2c36, 0x2c06), (0x2c37, 0x2c07), (0x2c38, 0x2c08), (0x2c39, 0x2c09),
            (0x2c3a, 0x2c0a), (0x2c3b, 0x2c0b), (0x2c3c, 0x2c0c), (0x2c3d, 0x2c0d), (0x2c3e, 0x2c0e), (0x2c3f, 0x2c0f),
            (0x2c40, 0x2c10), (0x2c41, 0x2c11), (0x2c42, 0x2c12), (0x2c43, 0x2c13), (0x2c44, 0x2c14), (0x2c45, 0x2c15),
            (0x2c46, 0x2c16), (0x2c47, 0x2c17), (0x2c48, 0x2c18), (0x2c49, 0x2c19), (0x2c4a, 0x2c1a), (0x2c4b, 0x2c1b),
            (0x2c4c, 0x2c1c), (0x2c4d, 0x2c1d), (0x2c4e, 0x2c1e), (0x2c4f, 0x2c1f), (0x2c50, 0x2c20), (0x2c51, 0x2c21),
            (0x2c52, 0x2c22), (0x2c53, 0x2c23), (0x2c54, 0x2c24), (0x2c55, 0x2c25), (0x2c56, 0x2c26), (0x2c57, 0x2c27),
            (0x2c58, 0x2c28), (0x2c59, 0x2c29), (0x2c5a, 0x2c2a), (0x2c5b, 0x2c2b), (0x2c5c, 0x2c2c), (0x2c5d, 0x2c2d),
            (0x2c5e, 0x2c2e), (0x2c5f, 0x2c2f), (0x2c61, 0x2c60), (0x2c65, 0x23a), (0x2c66, 0x23e), (0x2c68, 0x2c67),
            (0x2c6a, 0x2c69), (0x2c6c, 0x2c6b), (0x2c73, 0x2c72), (0x2c76, 0x2c75), (0x2c81, 0x2c80), (0x2c83, 0x2c82),
            (0x2c85, 0x2c84), (0x2c87, 0x2c86), (0x2c89, 0x2c88), (0x2c8b, 0x2c8a), (0x2c8d, 0x2c8c), (0x2c8f, 0x2c8e),
            (0x2c91, 0x2c90), (0x2c93, 0x2c92), (0x2c95, 0x2c94), (0x2c97, 0x2c96), (0x2c99, 0x2c98), (0x2c9b, 0x2c9a),
            (0x2c9d, 0x2c9c), (0x2c9f, 0x2c9e), (0x2ca1, 0x2ca0), (0x2ca3, 0x2ca2), (0x2ca5, 0x2ca4), (0x2ca7, 0x2ca6),
            (0x2ca9, 0x2ca8), (0x2cab, 0x2caa), (0x2cad, 0x2cac), (0x2caf, 0x2cae), (0x2cb1, 0x2cb0), (0x2cb3, 0x2cb2),
            (0x2cb5, 0x2cb4), (0x2cb7, 0x2cb6), (0x2cb9, 0x2cb8), (0x2cbb, 0x2cba), (0x2cbd, 0x2cbc), (0x2cbf, 0x2cbe),
            (0x2cc1, 0x2cc0), (0x2cc3, 0x2cc2), (0x2cc5, 0x2cc4), (0x2cc7, 0x2cc6), (0x2cc9, 0x2cc8), (0x2ccb, 0x2cca),
            (0x2ccd, 0x2ccc), (0x2ccf, 0x2cce), (0x2cd1, 0x2cd0), (0x2cd3, 0x2cd2), (0x2cd5, 0x2cd4), (0x2cd7, 0x2cd6),
            (0x2cd9, 0x2cd8), (0x2cdb, 0x2cda), (0x2cdd, 0x2cdc), (0x2cdf, 0x2cde), (0x2ce1, 0x2ce0), (0x2ce3, 0x2ce2),
            (0x2cec, 0x2ceb), (0x2cee, 0x2ced), (0x2cf3, 0x2cf2), (0x2d00, 0x10a0), (0x2d01, 0x10a1), (0x2d02, 0x10a2),
            (0x2d03, 0x10a3), (0x2d04, 0x10a4), (0x2d05, 0x10a5), (0x2d06, 0x10a6), (0x2d07, 0x10a7), (0x2d08, 0x10a8),
            (0x2d09, 0x10a9), (0x2d0a, 0x10aa), (0x2d0b, 0x10ab), (0x2d0c, 0x10ac), (0x2d0d, 0x10ad), (0x2d0e, 0x10ae),
            (0x2d0f, 0x10af), (0x2d10, 0x10b0), (0x2d11, 0x10b1), (0x2d12, 0x10b2), (0x2d13, 0x10b3), (0x2d14, 0x10b4),
            (0x2d15, 0x10b5), (0x2d16, 0x10b6), (0x2d17, 0x10b7), (0x2d18, 0x10b8), (0x2d19, 0x10b9), (0x2d1a, 0x10ba),
            (0x2d1b, 0x10bb), (0x2d1c, 0x10bc), (0x2d1d, 0x10bd), (0x2d1e, 0x10be), (0x2d1f, 0x10bf), (0x2d20, 0x10c0),
            (0x2d21, 0x10c1), (0x2d22, 0x10c2), (0x2d23, 0x10c3), (0x2d24, 0x10c4), (0x2d25, 0x10c5), (0x2d27, 0x10c7),
            (0x2d2d, 0x10cd), (0xa641, 0xa640), (0xa643, 0xa642), (0xa645, 0xa644), (0xa647, 0xa646), (0xa649, 0xa648),
            (0xa64b, 0xa64a), (0xa64d, 0xa64c), (0xa64f, 0xa64e), (0xa651, 0xa650), (0xa653, 0xa652), (0xa655, 0xa654),
            (0xa657, 0xa656), (0xa659, 0xa658), (0xa65b, 0xa65a), (0xa65d, 0xa65c), (0xa65f, 0xa65e), (0xa661, 0xa660),
            (0xa663, 0xa662), (0xa665, 0xa664), (0xa667, 0xa666), (0xa669, 0xa668), (0xa66b, 0xa66a), (0xa66d, 0xa66c),
            (0xa681, 0xa680), (0xa683, 0xa682), (0xa685, 0xa684), (0xa687, 0xa686), (0xa689, 0xa688), (0xa68b, 0xa68a),
            (0xa68d, 0xa68c), (0xa68f, 0xa68e), (0xa691, 0xa690), (0xa693, 0xa692), (0xa695, 0xa694), (0xa697, 0xa696),
            (0xa699, 0xa698), (0xa69b, 0xa69a), (0xa723, 0xa722), (0xa725, 0xa724), (0xa727, 0xa726), (0xa729, 0xa728),
            (0xa72b, 0xa72a), (0xa72d, 0xa72c), (0xa72f, 0xa72e), (0xa733, 0xa732), (0xa735, 0xa734), (0xa737, 0xa736),
            (0xa739, 0xa738), (0xa73b, 0xa73a), (0xa73d, 0xa73c), (0xa73f, 0xa73e), (0xa741, 0xa740), (0xa743, 0xa742),
            (0xa745, 0xa744), (0xa747, 0xa746), (0xa749, 0xa748), (0xa74b, 0xa74a), (0xa74d, 0xa74c), (0xa74f, 0xa74e),
            (0xa751, 0xa750), (0xa753, 0xa752), (0xa755, 0xa754), (0xa757, 0xa756), (0xa759, 0xa758), (0xa75b, 0xa75a),
            (0xa75d, 0xa75c), (0xa75f, 0xa75e), (0xa761, 0xa760), (0xa763, 0xa762), (0xa765, 0xa764), (0xa767, 0xa766),
            (0xa769, 0xa768), (0xa76b, 0xa76a), (0xa76d, 0xa76c), (0xa76f, 0xa76e), (0xa77a, 0xa779), (0xa77c, 0xa77b),
            (0xa77f, 0xa77e), (0xa781, 0xa780), (0xa783, 0xa782), (0xa785, 0xa784), (0xa787, 0xa786), (0xa78c, 0xa78b),
            (0xa791, 0xa790), (0xa793, 0xa792), (0xa794, 0xa7c4), (0xa797, 0xa796), (0xa799, 0xa798), (0xa79b, 0xa79a),
            (0xa79d, 0xa79c), (0xa79f, 0xa79e), (0xa7a1, 0xa7a0), (0xa7a3, 0xa7a2), (0xa7a5, 0xa7a4), (0xa7a7, 0xa7a6),
            (0xa7a9, 0xa7a8), (0xa7b5, 0xa7b4), (0xa7b7, 0xa7b6), (0xa7b9, 0xa7b8), (0xa7bb, 0xa7ba), (0xa7bd, 0xa7bc),
            (0xa7bf, 0xa7be), (0xa7c1, 0xa7c0), (0xa7c3, 0xa7c2), (0xa7c8, 0xa7c7), (0xa7ca, 0xa7c9), (0xa7d1, 0xa7d0),
            (0xa7d7, 0xa7d6), (0xa7d9, 0xa7d8), (0xa7f6, 0xa7f5), (0xab53, 0xa7b3), (0xab70, 0x13a0), (0xab71, 0x13a1),
            (0xab72, 0x13a2), (0xab73, 0x13a3), (0xab74, 0x13a4), (0xab75, 0x13a5), (0xab76, 0x13a6), (0xab77, 0x13a7),
            (0xab78, 0x13a8), (0xab79, 0x13a9), (0xab7a, 0x13aa), (0xab7b, 0x13ab), (0xab7c, 0x13ac), (0xab7d, 0x13ad),
            (0xab7e, 0x13ae), (0xab7f, 0x13af), (0xab80, 0x13b0), (0xab81, 0x13b1), (0xab82, 0x13b2), (0xab83, 0x13b3),
            (0xab84, 0x13b4), (0xab85, 0x13b5), (0xab86, 0x13b6), (0xab87, 0x13b7), (0xab88, 0x13b8), (0xab89, 0x13b9),
            (0xab8a, 0x13ba), (0xab8b, 0x13bb), (0xab8c, 0x13bc), (0xab8d, 0x13bd), (0xab8e, 0x13be), (0xab8f, 0x13bf),
            (0xab90, 0x13c0), (0xab91, 0x13c1), (0xab92, 0x13c2), (0xab93, 0x13c3), (0xab94, 0x13c4), (0xab95, 0x13c5),
            (0xab96, 0x13c6), (0xab97, 0x13c7), (0xab98, 0x13c8), (0xab99, 0x13c9), (0xab9a, 0x13ca), (0xab9b, 0x13cb),
            (0xab9c, 0x13cc), (0xab9d, 0x13cd), (0xab9e, 0x13ce), (0xab9f, 0x13cf), (0xaba0, 0x13d0), (0xaba1, 0x13d1),
            (0xaba2, 0x13d2), (0xaba3, 0x13d3), (0xaba4, 0x13d4), (0xaba5, 0x13d5), (0xaba6, 0x13d6), (0xaba7, 0x13d7),
            (0xaba8, 0x13d8), (0xaba9, 0x13d9), (0xabaa, 0x13da), (0xabab, 0x13db), (0xabac, 0x13dc), (0xabad, 0x13dd),
            (0xabae, 0x13de), (0xabaf, 0x13df), (0xabb0, 0x13e0), (0xabb1, 0x13e1), (0xabb2, 0x13e2), (0xabb3, 0x13e3),
            (0xabb4, 0x13e4), (0xabb5, 0x13e5), (0xabb6, 0x13e6), (0xabb7, 0x13e7), (0xabb8, 0x13e8), (0xabb9, 0x13e9),
            (0xabba, 0x13ea), (0xabbb, 0x13eb), (0xabbc, 0x13ec), (0xabbd, 0x13ed), (0xabbe, 0x13ee), (0xabbf, 0x13ef),
            (0xff41, 0xff21), (0xff42, 0xff22), (0xff43, 0xff23), (0xff44, 0xff24), (0xff45, 0xff25), (0xff46, 0xff26),
            (0xff47, 0xff27), (0xff48, 0xff28), (0xff49, 0xff29), (0xff4a, 0xff2a), (0xff4b, 0xff2b), (0xff4c, 0xff2c),
            (0xff4d, 0xff2d), (0xff4e, 0xff2e), (0xff4f, 0xff2f), (0xff50, 0xff30), (0xff51, 0xff31), (0xff52, 0xff32),
            (0xff53, 0xff33), (0xff54, 0xff34), (0xff55, 0xff35), (0xff56, 0xff36), (0xff57, 0xff37), (0xff58, 0xff38),
            (0xff59, 0xff39), (0xff5a, 0xff3a), (0x10428, 0x10400), (0x10429, 0x10401), (0x1042a, 0x10402), (0x1042b, 0x10403),
            (0x1042c, 0x10404), (0x1042d, 0x10405), (0x1042e, 0x10406), (0x1042f, 0x10407), (0x10430, 0x10408), (0x10431, 0x10409),
            (0x10432, 0x1040a), (0x10433, 0x1040b), (0x10434, 0x1040c), (0x10435, 0x1040d), (0x10436, 0x1040e), (0x10437, 0x1040f),
            (0x10438, 0x10410), (0x10439, 0x10411), (0x1043a, 0x10412), (0x1043b, 0x10413), (0x1043c, 0x10414), (0x1043d, 0x10415),
            (0x1043e, 0x10416), (0x1043f, 0x10417), (0x10440, 0x10418), (0x10441, 0x10419), (0x10442, 0x1041a), (0x10443, 0x1041b),
            (0x10444, 0x1041c), (0x10445, 0x1041d), (0x10446, 0x1041e), (0x10447, 0x1041f), (0x10448, 0x10420), (0x10449, 0x10421),
            (0x1044a, 0x10422), (0x1044b, 0x10423), (0x1044c, 0x10424), (0x1044d, 0x10425), (0x1044e, 0x10426), (0x1044f, 0x10427),
            (0x104d8, 0x104b0), (0x104d9, 0x104b1), (0x104da, 0x104b2), (0x104db, 0x104b3), (0x104dc, 0x104b4), (0x104dd, 0x104b5),
            (0x104de, 0x104b6), (0x104df, 0x104b7), (0x104e0, 0x104b8), (0x104e1, 0x104b9), (0x104e2, 0x104ba), (0x104e3, 0x104bb),
            (0x104e4, 0x104bc), (0x104e5, 0x104bd), (0x104e6, 0x104be), (0x104e7, 0x104bf), (0x104e8, 0x104c0), (0x104e9, 0x104c1),
            (0x104ea, 0x104c2), (0x104eb, 0x104c3), (0x104ec, 0x104c4), (0x104ed, 0x104c5), (0x104ee, 0x104c6), (0x104ef, 0x104c7),
            (0x104f0, 0x104c8), (0x104f1, 0x104c9), (0x104f2, 0x104ca), (0x104f3, 0x104cb), (0x104f4, 0x104cc), (0x104f5, 0x104cd),
            (0x104f6, 0x104ce), (0x104f7, 0x104cf), (0x104f8, 0x104d0), (0x104f9, 0x104d1), (0x104fa, 0x104d2), (0x104fb, 0x104d3),
            (0x10597, 0x10570), (0x10598, 0x10571), (0x10599, 0x10572), (0x1059a, 0x10573), (0x1059b, 0x10574), (0x1059c, 0x10575),
            (0x1059d, 0x10576), (0x1059e, 0x10577), (0x1059f, 0x10578), (0x105a0, 0x10579), (0x105a1, 0x1057a), (0x105a3, 0x1057c),
            (0x105a4, 0x1057d), (0x105a5, 0x1057e), (0x105a6, 0x1057f), (0x105a7, 0x10580), (0x105a8, 0x10581), (0x105a9, 0x10582),
            (0x105aa, 0x10583), (0x105ab, 0x10584), (0x105ac, 0x10585), (0x105ad, 0x10586), (0x105ae, 0x10587), (0x105af, 0x10588),
            (0x105b0, 0x10589), (0x105b1, 0x1058a), (0x105b3, 0x1058c), (0x105b4, 0x1058d), (0x105b5, 0x1058e), (0x105b6, 0x1058f),
            (0x105b7, 0x10590), (0x105b8, 0x10591), (0x105b9, 0x10592), (0x105bb, 0x10594), (0x105bc, 0x10595), (0x10cc0, 0x10c80),
            (0x10cc1, 0x10c81), (0x10cc2, 0x10c82), (0x10cc3, 0x10c83), (0x10cc4, 0x10c84), (0x10cc5, 0x10c85), (0x10cc6, 0x10c86),
            (0x10cc7, 0x10c87), (0x10cc8, 0x10c88), (0x10cc9, 0x10c89), (0x10cca, 0x10c8a), (0x10ccb, 0x10c8b), (0x10ccc, 0x10c8c),
            (0x10ccd, 0x10c8d), (0x10cce, 0x10c8e), (0x10ccf, 0x10c8f), (0x10cd0, 0x10c90), (0x10cd1, 0x10c91), (0x10cd2, 0x10c92),
            (0x10cd3, 0x10c93), (0x10cd4, 0x10c94), (0x10cd5, 0x10c95), (0x10cd6, 0x10c96), (0x10cd7, 0x10c97), (0x10cd8, 0x10c98),
            (0x10cd9, 0x10c99), (0x10cda, 0x10c9a), (0x10cdb, 0x10c9b), (0x10cdc, 0x10c9c), (0x10cdd, 0x10c9d), (0x10cde, 0x10c9e),
            (0x10cdf, 0x10c9f), (0x10ce0, 0x10ca0), (0x10ce1, 0x10ca1), (0x10ce2, 0x10ca2), (0x10ce3, 0x10ca3), (0x10ce4, 0x10ca4),
            (0x10ce5, 0x10ca5), (0x10ce6, 0x10ca6), (0x10ce7, 0x10ca7), (0x10ce8, 0x10ca8), (0x10ce9, 0x10ca9), (0x10cea, 0x10caa),
            (0x10ceb, 0x10cab), (0x10cec, 0x10cac), (0x10ced, 0x10cad), (0x10cee, 0x10cae), (0x10cef, 0x10caf), (0x10cf0, 0x10cb0),
            (0x10cf1, 0x10cb1), (0x10cf2, 0x10cb2), (0x118c0, 0x118a0), (0x118c1, 0x118a1), (0x118c2, 0x118a2), (0x118c3, 0x118a3),
            (0x118c4, 0x118a4), (0x118c5, 0x118a5), (0x118c6, 0x118a6), (0x118c7, 0x118a7), (0x118c8, 0x118a8), (0x118c9, 0x118a9),
            (0x118ca, 0x118aa), (0x118cb, 0x118ab), (0x118cc, 0x118ac), (0x118cd, 0x118ad), (0x118ce, 0x118ae), (0x118cf, 0x118af),
            (0x118d0, 0x118b0), (0x118d1, 0x118b1), (0x118d2, 0x118b2), (0x118d3, 0x118b3), (0x118d4, 0x118b4), (0x118d5, 0x118b5),
            (0x118d6, 0x118b6), (0x118d7, 0x118b7), (0x118d8, 0x118b8), (0x118d9, 0x118b9), (0x118da, 0x118ba), (0x118db, 0x118bb),
            (0x118dc, 0x118bc), (0x118dd, 0x118bd), (0x118de, 0x118be), (0x118df, 0x118bf), (0x16e60, 0x16e40), (0x16e61, 0x16e41),
            (0x16e62, 0x16e42), (0x16e63, 0x16e43), (0x16e64, 0x16e44), (0x16e65, 0x16e45), (0x16e66, 0x16e46), (0x16e67, 0x16e47),
            (0x16e68, 0x16e48), (0x16e69, 0x16e49), (0x16e6a, 0x16e4a), (0x16e6b, 0x16e4b), (0x16e6c, 0x16e4c), (0x16e6d, 0x16e4d),
            (0x16e6e, 0x16e4e), (0x16e6f, 0x16e4f), (0x16e70, 0x16e50), (0x16e71, 0x16e51), (0x16e72, 0x16e52), (0x16e73, 0x16e53),
            (0x16e74, 0x16e54), (0x16e75, 0x16e55), (0x16e76, 0x16e56), (0x16e77, 0x16e57), (0x16e78, 0x16e58), (0x16e79, 0x16e59),
            (0x16e7a, 0x16e5a), (0x16e7b, 0x16e5b), (0x16e7c, 0x16e5c), (0x16e7d, 0x16e5d), (0x16e7e, 0x16e5e), (0x16e7f, 0x16e5f),
            (0x1e922, 0x1e900), (0x1e923, 0x1e901), (0x1e924, 0x1e902), (0x1e925, 0x1e903), (0x1e926, 0x1e904), (0x1e927, 0x1e905),
            (0x1e928, 0x1e906), (0x1e929, 0x1e907), (0x1e92a, 0x1e908), (0x1e92b, 0x1e909), (0x1e92c, 0x1e90a), (0x1e92d, 0x1e90b),
            (0x1e92e, 0x1e90c), (0x1e92f, 0x1e90d), (0x1e930, 0x1e90e), (0x1e931, 0x1e90f), (0x1e932, 0x1e910), (0x1e933, 0x1e911),
            (0x1e934, 0x1e912), (0x1e935, 0x1e913), (0x1e936, 0x1e914), (0x1e937, 0x1e915), (0x1e938, 0x1e916), (0x1e939, 0x1e917),
            (0x1e93a, 0x1e918), (0x1e93b, 0x1e919), (0x1e93c, 0x1e91a), (0x1e93d, 0x1e91b), (0x1e93e, 0x1e91c), (0x1e93f, 0x1e91d),
            (0x1e940, 0x1e91e), (0x1e941, 0x1e91f), (0x1e942, 0x1e920), (0x1e943, 0x1e921),
        ],
        0,
    );

    pub(crate) static FULL_UPPER: ExtendedTable = ExtendedTable::from_static(
        &[
            (0xdf, Slot::new(0, 2)), (0x149, Slot::new(2, 2)), (0x1f0, Slot::new(4, 2)), (0x390, Slot::new(6, 3)),
            (0x3b0, Slot::new(9, 3)), (0x587, Slot::new(12, 2)), (0x1e96, Slot::new(14, 2)), (0x1e97, Slot::new(16, 2)),
            (0x1e98, Slot::new(18, 2)), (0x1e99, Slot::new(20, 2)), (0x1e9a, Slot::new(22, 2)), (0x1f50, Slot::new(24, 2)),
            (0x1f52, Slot::new(26, 3)), (0x1f54, Slot::new(29, 3)), (0x1f56, Slot::new(32, 3)), (0x1f80, Slot::new(35, 2)),
            (0x1f81, Slot::new(37, 2)), (0x1f82, Slot::new(39, 2)), (0x1f83, Slot::new(41, 2)), (0x1f84, Slot::new(43, 2)),
            (0x1f85, Slot::new(45, 2)), (0x1f86, Slot::new(47, 2)), (0x1f87, Slot::new(49, 2)), (0x1f88, Slot::new(51, 2)),
            (0x1f89, Slot::new(53, 2)), (0x1f8a, Slot::new(55, 2)), (0x1f8b, Slot::new(57, 2)), (0x1f8c, Slot::new(59, 2)),
            (0x1f8d, Slot::new(61, 2)), (0x1f8e, Slot::new(63, 2)), (0x1f8f, Slot::new(65, 2)), (0x1f90, Slot::new(67, 2)),
            (0x1f91, Slot::new(69, 2)), (0x1f92, Slot::new(71, 2)), (0x1f93, Slot::new(73, 2)), (0x1f94, Slot::new(75, 2)),
            (0x1f95, Slot::new(77, 2)), (0x1f96, Slot::new(79, 2)), (0x1f97, Slot::new(81, 2)), (0x1f98, Slot::new(83, 2)),
            (0x1f99, Slot::new(85, 2)), (0x1f9a, Slot::new(87, 2)), (0x1f9b, Slot::new(89, 2)), (0x1f9c, Slot::new(91, 2)),
            (0x1f9d, Slot::new(93, 2)), (0x1f9e, Slot::new(95, 2)), (0x1f9f, Slot::new(97, 2)), (0x1fa0, Slot::new(99, 2)),
            (0x1fa1, Slot::new(101, 2)), (0x1fa2, Slot::new(103, 2)), (0x1fa3, Slot::new(105, 2)), (0x1fa4, Slot::new(107, 2)),
            (0x1fa5, Slot::new(109, 2)), (0x1fa6, Slot::new(111, 2)), (0x1fa7, Slot::new(113, 2)), (0x1fa8, Slot::new(115, 2)),
            (0x1fa9, Slot::new(117, 2)), (0x1faa, Slot::new(119, 2)), (0x1fab, Slot::new(121, 2)), (0x1fac, Slot::new(123, 2)),
            (0x1fad, Slot::new(125, 2)), (0x1fae, Slot::new(127, 2)), (0x1faf, Slot::new(129, 2)), (0x1fb2, Slot::new(131, 2)),
            (0x1fb3, Slot::new(133, 2)), (0x1fb4, Slot::new(135, 2)), (0x1fb6, Slot::new(137, 2)), (0x1fb7, Slot::new(139, 3)),
            (0x1fbc, Slot::new(142, 2)), (0x1fc2, Slot::new(144, 2)), (0x1fc3, Slot::new(146, 2)), (0x1fc4, Slot::new(148, 2)),
            (0x1fc6, Slot::new(150, 2)), (0x1fc7, Slot::new(152, 3)), (0x1fcc, Slot::new(155, 2)), (0x1fd2, Slot::new(157, 3)),
            (0x1fd3, Slot::new(160, 3)), (0x1fd6, Slot::new(163, 2)), (0x1fd7, Slot::new(165, 3)), (0x1fe2, Slot::new(168, 3)),
            (0x1fe3, Slot::new(171, 3)), (0x1fe4, Slot::new(174, 2)), (0x1fe6, Slot::new(176, 2)), (0x1fe7, Slot::new(178, 3)),
            (0x1ff2, Slot::new(181, 2)), (0x1ff3, Slot::new(183, 2)), (0x1ff4, Slot::new(185, 2)), (0x1ff6, Slot::new(187, 2)),
            (0x1ff7, Slot::new(189, 3)), (0x1ffc, Slot::new(192, 2)), (0xfb00, Slot::new(194, 2)), (0xfb01, Slot::new(196, 2)),
            (0xfb02, Slot::new(198, 2)), (0xfb03, Slot::new(200, 3)), (0xfb04, Slot::new(203, 3)), (0xfb05, Slot::new(206, 2)),
            (0xfb06, Slot::new(208, 2)), (0xfb13, Slot::new(210, 2)), (0xfb14, Slot::new(212, 2)), (0xfb15, Slot::new(214, 2)),
            (0xfb16, Slot::new(216, 2)), (0xfb17, Slot::new(218, 2)),
        ],
        &[
            0x53, 0x53, 0x2bc, 0x4e, 0x4a, 0x30c, 0x399, 0x308, 0x301, 0x3a5,
            0x308, 0x301, 0x535, 0x552, 0x48, 0x331, 0x54, 0x308, 0x57, 0x30a,
            0x59, 0x30a, 0x41, 0x2be, 0x3a5, 0x313, 0x3a5, 0x313, 0x300, 0x3a5,
            0x313, 0x301, 0x3a5, 0x313, 0x342, 0x1f08, 0x399, 0x1f09, 0x399, 0x1f0a,
            0x399, 0x1f0b, 0x399, 0x1f0c, 0x399, 0x1f0d, 0x399, 0x1f0e, 0x399, 0x1f0f,
            0x399, 0x1f08, 0x399, 0x1f09, 0x399, 0x1f0a, 0x399, 0x1f0b, 0x399, 0x1f0c,
            0x399, 0x1f0d, 0x399, 0x1f0e, 0x399, 0x1f0f, 0x399, 0x1f28, 0x399, 0x1f29,
            0x399, 0x1f2a, 0x399, 0x1f2b, 0x399, 0x1f2c, 0x399, 0x1f2d, 0x399, 0x1f2e,
            0x399, 0x1f2f, 0x399, 0x1f28, 0x399, 0x1f29, 0x399, 0x1f2a, 0x399, 0x1f2b,
            0x399, 0x1f2c, 0x399, 0x1f2d, 0x399, 0x1f2e, 0x399, 0x1f2f, 0x399, 0x1f68,
            0x399, 0x1f69, 0x399, 0x1f6a, 0x399, 0x1f6b, 0x399, 0x1f6c, 0x399, 0x1f6d,
            0x399, 0x1f6e, 0x399, 0x1f6f, 0x399, 0x1f68, 0x399, 0x1f69, 0x399, 0x1f6a,
            0x399, 0x1f6b, 0x399, 0x1f6c, 0x399, 0x1f6d, 0x399, 0x1f6e, 0x399, 0x1f6f,
            0x399, 0x1fba, 0x399, 0x391, 0x399, 0x386, 0x399, 0x391, 0x342, 0x391,
            0x342, 0x399, 0x391, 0x399, 0x1fca, 0x399, 0x397, 0x399, 0x389, 0x399,
            0x397, 0x342, 0x397, 0x342, 0x399, 0x397, 0x399, 0x399, 0x308, 0x300,
            0x399, 0x308, 0x301, 0x399, 0x342, 0x399, 0x308, 0x342, 0x3a5, 0x308,
            0x300, 0x3a5, 0x308, 0x301, 0x3a1, 0x313, 0x3a5, 0x342, 0x3a5, 0x308,
            0x342, 0x1ffa, 0x399, 0x3a9, 0x399, 0x38f, 0x399, 0x3a9, 0x342, 0x3a9,
            0x342, 0x399, 0x3a9, 0x399, 0x46, 0x46, 0x46, 0x49, 0x46, 0x4c,
            0x46, 0x46, 0x49, 0x46, 0x46, 0x4c, 0x53, 0x54, 0x53, 0x54,
            0x544, 0x546, 0x544, 0x535, 0x544, 0x53b, 0x54e, 0x546, 0x544, 0x53d,
        ],
    );

    pub(crate) static SIMPLE_TITLE: ExactTable<u32> = ExactTable::from_static(
        &[
            (0x61, 0x41), (0x62, 0x42), (0x63, 0x43), (0x64, 0x44), (0x65, 0x45), (0x66, 0x46),
            (0x67, 0x47), (0x68, 0x48), (0x69, 0x49), (0x6a, 0x4a), (0x6b, 0x4b), (0x6c, 0x4c),
            (0x6d, 0x4d), (0x6e, 0x4e), (0x6f, 0x4f), (0x70, 0x50), (0x71, 0x51), (0x72, 0x52),
            (0x73, 0x53), (0x74, 0x54), (0x75, 0x55), (0x76, 0x56), (0x77, 0x57), (0x78, 0x58),
            (0x79, 0x59), (0x7a, 0x5a), (0xb5, 0x39c), (0xe0, 0xc0), (0xe1, 0xc1), (0xe2, 0xc2),
            (0xe3, 0xc3), (0xe4, 0xc4), (0xe5, 0xc5), (0xe6, 0xc6), (0xe7, 0xc7), (0xe8, 0xc8),
            (0xe9, 0xc9), (0xea, 0xca), (0xeb, 0xcb), (0xec, 0xcc), (0xed, 0xcd), (0xee, 0xce),
            (0xef, 0xcf), (0xf0, 0xd0), (0xf1, 0xd1), (0xf2, 0xd2), (0xf3, 0xd3), (0xf4, 0xd4),
            (0xf5, 0xd5), (0xf6, 0xd6), (0xf8, 0xd8), (0xf9, 0xd9), (0xfa, 0xda), (0xfb, 0xdb),
            (0xfc, 0xdc), (0xfd, 0xdd), (0xfe, 0xde), (0xff, 0x178), (0x101, 0x100), (0x103, 0x102),
            (0x105, 0x104), (0x107, 0x106), (0x109, 0x108), (0x10b, 0x10a), (0x10d, 0x10c), (0x10f, 0x10e),
            (0x111, 0x110), (0x113, 0x112), (0x115, 0x114), (0x117, 0x116), (0x119, 0x118), (0x11b, 0x11a),
            (0x11d, 0x11c), (0x11f, 0x11e), (0x121, 0x120), (0x123, 0x122), (0x125, 0x124), (0x127, 0x126),
            (0x129, 0x128), (0x12b, 0x12a), (0x12d, 0x12c), (0x12f, 0x12e), (0x131, 0x49), (0x133, 0x132),
            (0x135, 0x134), (0x137, 0x136), (0x13a, 0x139), (0x13c, 0x13b), (0x13e, 0x13d), (0x140, 0x13f),
            (0x142, 0x141), (0x144, 0x143), (0x146, 0x145), (0x148, 0x147), (0x14b, 0x14a), (0x14d, 0x14c),
            (0x14f, 0x14e), (0x151, 0x150), (0x153, 0x152), (0x155, 0x154), (0x157, 0x156), (0x159, 0x158),
            (0x15b, 0x15a), (0x15d, 0x15c), (0x15f, 0x15e), (0x161, 0x160), (0x163, 0x162), (0x165, 0x164),
            (0x167, 0x166), (0x169, 0x168), (0x16b, 0x16a), (0x16d, 0x16c), (0x16f, 0x16e), (0x171, 0x170),
            (0x173, 0x172), (0x175, 0x174), (0x177, 0x176), (0x17a, 0x179), (0x17c, 0x17b), (0x17e, 0x17d),
            (0x17f, 0x53), (0x180, 0x243), (0x183, 0x182), (0x185, 0x184), (0x188, 0x187), (0x18c, 0x18b),
            (0x192, 0x191), (0x195, 0x1f6), (0x199, 0x198), (0x19a, 0x23d), (0x19e, 0x220), (0x1a1, 0x1a0),
            (0x1a3, 0x1a2), (0x1a5, 0x1a4), (0x1a8, 0x1a7), (0x1ad, 0x1ac), (0x1b0, 0x1af), (0x1b4, 0x1b3),
            (0x1b6, 0x1b5), (0x1b9, 0x1b8), (0x1bd, 0x1bc), (0x1bf, 0x1f7), (0x1c4, 0x1c5), (0x1c6, 0x1c5),
            (0x1c7, 0x1c8), (0x1c9, 0x1c8), (0x1ca, 0x1cb), (0x1cc, 0x1cb), (0x1ce, 0x1cd), (0x1d0, 0x1cf),
            (0x1d2, 0x1d1), (0x1d4, 0x1d3), (0x1d6, 0x1d5), (0x1d8, 0x1d7), (0x1da, 0x1d9), (0x1dc, 0x1db),
            (0x1dd, 0x18e), (0x1df, 0x1de), (0x1e1, 0x1e0), (0x1e3, 0x1e2), (0x1e5, 0x1e4), (0x1e7, 0x1e6),
            (0x1e9, 0x1e8), (0x1eb, 0x1ea), (0x1ed, 0x1ec), (0x1ef, 0x1ee), (0x1f1, 0x1f2), (0x1f3, 0x1f2),
            (0x1f5, 0x1f4), (0x1f9, 0x1f8), (0x1fb, 0x1fa), (0x1fd, 0x1fc), (0x1ff, 0x1fe), (0x201, 0x200),
            (0x203, 0x202), (0x205, 0x204), (0x207, 0x206), (0x209, 0x208), (0x20b, 0x20a), (0x20d, 0x20c),
            (0x20f, 0x20e), (0x211, 0x210), (0x213, 0x212), (0x215, 0x214), (0x217, 0x216), (0x219, 0x218),
            (0x21b, 0x21a), (0x21d, 0x21c), (0x21f, 0x21e), (0x223, 0x222), (0x225, 0x224), (0x227, 0x226),
            (0x229, 0x228), (0x22b, 0x22a), (0x22d, 0x22c), (0x22f, 0x22e), (0x231, 0x230), (0x233, 0x232),
            (0x23c, 0x23b), (0x23f, 0x2c7e), (0x240, 0x2c7f), (0x242, 0x241), (0x247, 0x246), (0x249, 0x248),
            (0x24b, 0x24a), (0x24d, 0x24c), (0x24f, 0x24e), (0x250, 0x2c6f), (0x251, 0x2c6d), (0x252, 0x2c70),
            (0x253, 0x181), (0x254, 0x186), (0x256, 0x189), (0x257, 0x18a), (0x259, 0x18f), (0x25b, 0x190),
            (0x25c, 0xa7ab), (0x260, 0x193), (0x261, 0xa7ac), (0x263, 0x194), (0x265, 0xa78d), (0x266, 0xa7aa),
            (0x268, 0x197), (0x269, 0x196), (0x26a, 0xa7ae), (0x26b, 0x2c62), (0x26c, 0xa7ad), (0x26f, 0x19c),
            (0x271, 0x2c6e), (0x272, 0x19d), (0x275, 0x19f), (0x27d, 0x2c64), (0x280, 0x1a6), (0x282, 0xa7c5),
            (0x283, 0x1a9), (0x287, 0xa7b1), (0x288, 0x1ae), (0x289, 0x244), (0x28a, 0x1b1), (0x28b, 0x1b2),
            (0x28c, 0x245), (0x292, 0x1b7), (0x29d, 0xa7b2), (0x29e, 0xa7b0), (0x345, 0x399), (0x371, 0x370),
            (0x373, 0x372), (0x377, 0x376), (0x37b, 0x3fd), (0x37c, 0x3fe), (0x37d, 0x3ff), (0x3ac, 0x386),
            (0x3ad, 0x388), (0x3ae, 0x389), (0x3af, 0x38a), (0x3b1, 0x391), (0x3b2, 0x392), (0x3b3, 0x393),
            (0x3b4, 0x394), (0x3b5, 0x395), (0x3b6, 0x396), (0x3b7, 0x397), (0x3b8, 0x398), (0x3b9, 0x399),
            (0x3ba, 0x39a), (0x3bb, 0x39b), (0x3bc, 0x39c), (0x3bd, 0x39d), (0x3be, 0x39e), (0x3bf, 0x39f),
            (0x3c0, 0x3a0), (0x3c1, 0x3a1), (0x3c2, 0x3a3), (0x3c3, 0x3a3), (0x3c4, 0x3a4), (0x3c5, 0x3a5),
            (0x3c6, 0x3a6), (0x3c7, 0x3a7), (0x3c8, 0x3a8), (0x3c9, 0x3a9), (0x3ca, 0x3aa), (0x3cb, 0x3ab),
            (0x3cc, 0x38c), (0x3cd, 0x38e), (0x3ce, 0x38f), (0x3d0, 0x392), (0x3d1, 0x398), (0x3d5, 0x3a6),
            (0x3d6, 0x3a0), (0x3d7, 0x3cf), (0x3d9, 0x3d8), (0x3db, 0x3da), (0x3dd, 0x3dc), (0x3df, 0x3de),
            (0x3e1, 0x3e0), (0x3e3, 0x3e2), (0x3e5, 0x3e4), (0x3e7, 0x3e6), (0x3e9, 0x3e8), (0x3eb, 0x3ea),
            (0x3ed, 0x3ec), (0x3ef, 0x3ee), (0x3f0, 0x39a), (0x3f1, 0x3a1), (0x3f2, 0x3f9), (0x3f3, 0x37f),
            (0x3f5, 0x395), (0x3f8, 0x3f7), (0x3fb, 0x3fa), (0x430, 0x410), (0x431, 0x411), (0x432, 0x412),
            (0x433, 0x413), (0x434, 0x414), (0x435, 0x415), (0x436, 0x416), (0x437, 0x417), (0x438, 0x418),
            (0x439, 0x419), (0x43a, 0x41a), (0x43b, 0x41b), (0x43c, 0x41c), (0x43d, 0x41d), (0x43e, 0x41e),
            (0x43f, 0x41f), (0x440, 0x420), (0x441, 0x421), (0x442, 0x422), (0x443, 0x423), (0x444, 0x424),
            (0x445, 0x425), (0x446, 0x426), (0x447, 0x427), (0x448, 0x428), (0x449, 0x429), (0x44a, 0x42a),
            (0x44b, 0x42b), (0x44c, 0x42c), (0x44d, 0x42d), (0x44e, 0x42e), (0x44f, 0x42f), (0x450, 0x400),
            (0x451, 0x401), (0x452, 0x402), (0x453, 0x403), (0x454, 0x404), (0x455, 0x405), (0x456, 0x406),
            (0x457, 0x407), (0x458, 0x408), (0x459, 0x409), (0x45a, 0x40a), (0x45b, 0x40b), (0x45c, 0x40c),
            (0x45d, 0x40d), (0x45e, 0x40e), (0x45f, 0x40f), (0x461, 0x460), (0x463, 0x462), (0x465, 0x464),
            (0x467, 0x466), (0x469, 0x468), (0x46b, 0x46a), (0x46d, 0x46c), (0x46f, 0x46e), (0x471, 0x470),
            (0x473, 0x472), (0x475, 0x474), (0x477, 0x476), (0x479, 0x478), (0x47b, 0x47a), (0x47d, 0x47c),
            (0x47f, 0x47e), (0x481, 0x480), (0x48b, 0x48a), (0x48d, 0x48c), (0x48f, 0x48e), (0x491, 0x490),
            (0x493, 0x492), (0x495, 0x494), (0x497, 0x496), (0x499, 0x498), (0x49b, 0x49a), (0x49d, 0x49c),
            (0x49f, 0x49e), (0x4a1, 0x4a0), (0x4a3, 0x4a2), (0x4a5, 0x4a4), (0x4a7, 0x4a6), (0x4a9, 0x4a8),
            (0x4ab, 0x4aa), (0x4ad, 0x4ac), (0x4af, 0x4ae), (0x4b1, 0x4b0), (0x4b3, 0x4b2), (0x4b5, 0x4b4),
            (0x4b7, 0x4b6), (0x4b9, 0x4b8), (0x4bb, 0x4ba), (0x4bd, 0x4bc), (0x4bf, 0x4be), (0x4c2, 0x4c1),
            (0x4c4, 0x4c3), (0x4c6, 0x4c5), (0x4c8, 0x4c7), (0x4ca, 0x4c9), (0x4cc, 0x4cb), (0x4ce, 0x4cd),
            (0x4cf, 0x4c0), (0x4d1, 0x4d0), (0x4d3, 0x4d2), (0x4d5, 0x4d4), (0x4d7, 0x4d6), (0x4d9, 0x4d8),
            (0x4db, 0x4da), (0x4dd, 0x4dc), (0x4df, 0x4de), (0x4e1, 0x4e0), (0x4e3, 0x4e2), (0x4e5, 0x4e4),
            (0x4e7, 0x4e6), (0x4e9, 0x4e8), (0x4eb, 0x4ea), (0x4ed, 0x4ec), (0x4ef, 0x4ee), (0x4f1, 0x4f0),
            (0x4f3, 0x4f2), (0x4f5, 0x4f4), (0x4f7, 0x4f6), (0x4f9, 0x4f8), (0x4fb, 0x4fa), (0x4fd, 0x4fc),
            (0x4ff, 0x4fe), (0x501, 0x500), (0x503, 0x502), (0x505, 0x504), (0x507, 0x506), (0x509, 0x508),
            (0x50b, 0x50a), (0x50d, 0x50c), (0x50f, 0x50e), (0x511, 0x510), (0x513, 0x512), (0x515, 0x514),
            (0x517, 0x516), (0x519, 0x518), (0x51b, 0x51a), (0x51d, 0x51c), (0x51f, 0x51e), (0x521, 0x520),
            (0x523, 0x522), (0x525, 0x524), (0x527, 0x526), (0x529, 0x528), (0x52b, 0x52a), (0x52d, 0x52c),
            (0x52f, 0x52e), (0x561, 0x531), (0x562, 0x532), (0x563, 0x533), (0x564, 0x534), (0x565, 0x535),
            (0x566, 0x536), (0x567, 0x537), (0x568, 0x538), (0x569, 0x539), (0x56a, 0x53a), (0x56b, 0x53b),
            (0x56c, 0x53c), (0x56d, 0x53d), (0x56e, 0x53e), (0x56f, 0x53f), (0x570, 0x540), (0x571, 0x541),
            (0x572, 0x542), (0x573, 0x543), (0x574, 0x544), (0x575, 0x545), (0x576, 0x546), (0x577, 0x547),
            (0x578, 0x548), (0x579, 0x549), (0x57a, 0x54a), (0x57b, 0x54b), (0x57c, 0x54c), (0x57d, 0x54d),
            (0x57e, 0x54e), (0x57f, 0x54f), (0x580, 0x550), (0x581, 0x551), (0x582, 0x552), (0x583, 0x553),
            (0x584, 0x554), (0x585, 0x555), (0x586, 0x556), (0x13f8, 0x13f0), (0x13f9, 0x13f1), (0x13fa, 0x13f2),
            (0x13fb, 0x13f3), (0x13fc, 0x13f4), (0x13fd, 0x13f5), (0x1c80, 0x412), (0x1c81, 0x414), (0x1c82, 0x41e),
            (0x1c83, 0x421), (0x1c84, 0x422), (0x1c85, 0x422), (0x1c86, 0x42a), (0x1c87, 0x462), (0x1c88, 0xa64a),
            (0x1d79, 0xa77d), (0x1d7d, 0x2c63), (0x1d8e, 0xa7c6), (0x1e01, 0x1e00), (0x1e03, 0x1e02), (0x1e05, 0x1e04),
            (0x1e07, 0x1e06), (0x1e09, 0x1e08), (0x1e0b, 0x1e0a), (0x1e0d, 0x1e0c), (0x1e0f, 0x1e0e), (0x1e11, 0x1e10),
            (0x1e13, 0x1e12), (0x1e15, 0x1e14), (0x1e17, 0x1e16), (0x1e19, 0x1e18), (0x1e1b, 0x1e1a), (0x1e1d, 0x1e1c),
            (0x1e1f, 0x1e1e), (0x1e21, 0x1e20), (0x1e23, 0x1e22), (0x1e25, 0x1e24), (0x1e27, 0x1e26), (0x1e29, 0x1e28),
            (0x1e2b, 0x1e2a), (0x1e2d, 0x1e2c), (0x1e2f, 0x1e2e), (0x1e31, 0x1e30), (0x1e33, 0x1e32), (0x1e35, 0x1e34),
            (0x1e37, 0x1e36), (0x1e39, 0x1e38), (0x1e3b, 0x1e3a), (0x1e3d, 0x1e3c), (0x1e3f, 0x1e3e), (0x1e41, 0x1e40),
            (0x1e43, 0x1e42), (0x1e45, 0x1e44), (0x1e47, 0x1e46), (0x1e49, 0x1e48), (0x1e4b, 0x1e4a), (0x1e4d, 0x1e4c),
            (0x1e4f, 0x1e4e), (0x1e51, 0x1e50), (0x1e53, 0x1e52), (0x1e55, 0x1e54), (0x1e57, 0x1e56), (0x1e59, 0x1e58),
            (0x1e5b, 0x1e5a), (0x1e5d, 0x1e5c), (0x1e5f, 0x1e5e), (0x1e61, 0x1e60), (0x1e63, 0x1e62), (0x1e65, 0x1e64),
            (0x1e67, 0x1e66), (0x1e69, 0x1e68), (0x1e6b, 0x1e6a), (0x1e6d, 0x1e6c), (0x1e6f, 0x1e6e), (0x1e71, 0x1e70),
            (0x1e73, 0x1e72), (0x1e75, 0x1e74), (0x1e77, 0x1e76), (0x1e79, 0x1e78), (0x1e7b, 0x1e7a), (0x1e7d, 0x1e7c),
            (0x1e7f, 0x1e7e), (0x1e81, 0x1e80), (0x1e83, 0x1e82), (0x1e85, 0x1e84), (0x1e87, 0x1e86), (0x1e89, 0x1e88),
            (0x1e8b, 0x1e8a), (0x1e8d, 0x1e8c), (0x1e8f, 0x1e8e), (0x1e91, 0x1e90), (0x1e93, 0x1e92), (0x1e95, 0x1e94),
            (0x1e9b, 0x1e60), (0x1ea1, 0x1ea0), (0x1ea3, 0x1ea2), (0x1ea5, 0x1ea4), (0x1ea7, 0x1ea6), (0x1ea9, 0x1ea8),
            (0x1eab, 0x1eaa), (0x1ead, 0x1eac), (0x1eaf, 0x1eae), (0x1eb1, 0x1eb0), (0x1eb3, 0x1eb2), (0x1eb5, 0x1eb4),
            (0x1eb7, 0x1eb6), (0x1eb9, 0x1eb8), (0x1ebb, 0x1eba), (0x1ebd, 0x1ebc), (0x1ebf, 0x1ebe), (0x1ec1, 0x1ec0),
            (0x1ec3, 0x1ec2), (0x1ec5, 0x1ec4), (0x1ec7, 0x1ec6), (0x1ec9, 0x1ec8), (0x1ecb, 0x1eca), (0x1ecd, 0x1ecc),
            (0x1ecf, 0x1ece), (0x1ed1, 0x1ed0), (0x1ed3, 0x1ed2), (0x1ed5, 0x1ed4), (0x1ed7, 0x1ed6), (0x1ed9, 0x1ed8),
            (0x1edb, 0x1eda), (0x1edd, 0x1edc), (0x1edf, 0x1ede), (0x1ee1, 0x1ee0), (0x1ee3, 0x1ee2), (0x1ee5, 0x1ee4),
            (0x1ee7, 0x1ee6), (0x1ee9, 0x1ee8), (0x1eeb, 0x1eea), (0x1eed, 0x1eec), (0x1eef, 0x1eee), (0x1ef1, 0x1ef0),
            (0x1ef3, 0x1ef2), (0x1ef5, 0x1ef4), (0x1ef7, 0x1ef6), (0x1ef9, 0x1ef8), (0x1efb, 0x1efa), (0x1efd, 0x1efc),
            (0x1eff, 0x1efe), (0x1f00, 0x1f08), (0x1f01, 0x1f09), (0x1f02, 0x1f0a), (0x1f03, 0x1f0b), (0x1f04, 0x1f0c),
            (0x1f05, 0x1f0d), (0x1f06, 0x1f0e), (0x1f07, 0x1f0f), (0x1f10, 0x1f18), (0x1f11, 0x1f19), (0x1f12, 0x1f1a),
            (0x1f13, 0x1f1b), (0x1f14, 0x1f1c), (0x1f15, 0x1f1d), (0x1f20, 0x1f28), (0x1f21, 0x1f29), (0x1f22, 0x1f2a),
            (0x1f23, 0x1f2b), (0x1f24, 0x1f2c), (0x1f25, 0x1f2d), (0x1f26, 0x1f2e), (0x1f27, 0x1f2f), (0x1f30, 0x1f38),
            (0x1f31, 0x1f39), (0x1f32, 0x1f3a), (0x1f33, 0x1f3b), (0x1f34, 0x1f3c), (0x1f35, 0x1f3d), (0x1f36, 0x1f3e),
            (0x1f37, 0x1f3f), (0x1f40, 0x1f48), (0x1f41, 0x1f49), (0x1f42, 0x1f4a), (0x1f43, 0x1f4b), (0x1f44, 0x1f4c),
            (0x1f45, 0x1f4d), (0x1f51, 0x1f59), (0x1f53, 0x1f5b), (0x1f55, 0x1f5d), (0x1f57, 0x1f5f), (0x1f60, 0x1f68),
            (0x1f61, 0x1f69), (0x1f62, 0x1f6a), (0x1f63, 0x1f6b), (0x1f64, 0x1f6c), (0x1f65, 0x1f6d), (0x1f66, 0x1f6e),
            (0x1f67, 0x1f6f), (0x1f70, 0x1fba), (0x1f71, 0x1fbb), (0x1f72, 0x1fc8), (0x1f73, 0x1fc9), (0x1f74, 0x1fca),
            (0x1f75, 0x1fcb), (0x1f76, 0x1fda), (0x1f77, 0x1fdb), (0x1f78, 0x1ff8), (0x1f79, 0x1ff9), (0x1f7a, 0x1fea),
            (0x1f7b, 0x1feb), (0x1f7c, 0x1ffa), (0x1f7d, 0x1ffb), (0x1f80, 0x1f88), (0x1f81, 0x1f89), (0x1f82, 0x1f8a),
            (0x1f83, 0x1f8b), (0x1f84, 0x1f8c), (0x1f85, 0x1f8d), (0x1f86, 0x1f8e), (0x1f87, 0x1f8f), (0x1f90, 0x1f98),
            (0x1f91, 0x1f99), (0x1f92, 0x1f9a), (0x1f93, 0x1f9b), (0x1f94, 0x1f9c), (0x1f95, 0x1f9d), (0x1f96, 0x1f9e),
            (0x1f97, 0x1f9f), (0x1fa0, 0x1fa8), (0x1fa1, 0x1fa9), (0x1fa2, 0x1faa), (0x1fa3, 0x1fab), (0x1fa4, 0x1fac),
            (0x1fa5, 0x1fad), (0x1fa6, 0x1fae), (0x1fa7, 0x1faf), (0x1fb0, 0x1fb8), (0x1fb1, 0x1fb9), (0x1fb3, 0x1fbc),
            (0x1fbe, 0x399), (0x1fc3, 0x1fcc), (0x1fd0, 0x1fd8), (0x1fd1, 0x1fd9), (0x1fe0, 0x1fe8), (0x1fe1, 0x1fe9),
            (0x1fe5, 0x1fec), (0x1ff3, 0x1ffc), (0x214e, 0x2132), (0x2170, 0x2160), (0x2171, 0x2161), (0x2172, 0x2162),
            (0x2173, 0x2163), (0x2174, 0x2164), (0x2175, 0x2165), (0x2176, 0x2166), (0x2177, 0x2167), (0x2178, 0x2168),
            (0x2179, 0x2169), (0x217a, 0x216a), (0x217b, 0x216b), (0x217c, 0x216c), (0x217d, 0x216d), (0x217e, 0x216e),
            (0x217f, 0x216f), (0x2184, 0x2183), (0x24d0, 0x24b6), (0x24d1, 0x24b7), (0x24d2, 0x24b8), (0x24d3, 0x24b9),
            (0x24d4, 0x24ba), (0x24d5, 0x24bb), (0x24d6, 0x24bc), (0x24d7, 0x24bd), (0x24d8, 0x24be), (0x24d9, 0x24bf),
            (0x24da, 0x24c0), (0x24db, 0x24c1), (0x24dc, 0x24c2), (0x24dd, 0x24c3), (0x24de, 0x24c4), (0x24df, 0x24c5),
            (0x24e0, 0x24c6), (0x24e1, 0x24c7), (0x24e2, 0x24c8), (0x24e3, 0x24c9), (0x24e4, 0x24ca), (0x24e5, 0x24cb),
            (0x24e6, 0x24cc), (0x24e7, 0x24cd), (0x24e8, 0x24ce), (0x24e9, 0x24cf), (0x2c30, 0x2c00), (0x2c31, 0x2c01),
            (0x2c32, 0x2c02), (0x2c33, 0x2c03), (0x2c34, 0x2c04), (0x2c35, 0x2c05), (0x2c36, 0x2c06), (0x2c37, 0x2c07),
            (0x2c38, 0x2c08), (0x2c39, 0x2c09), (0x2c3a, 0x2c0a), (0x2c3b, 0x2c0b), (0x2c3c, 0x2c0c), (0x2c3d, 0x2c0d),
            (0x2c3e, 0x2c0e), (0x2c3f, 0x2c0f), (0x2c40, 0x2c10), (0x2c41, 0x2c11), (0x2c42, 0x2c12), (0x2c43, 0x2c13),
            (0x2c44, 0x2c14), (0x2c45, 0x2c15), (0x2c46, 0x2c16), (0x2c47, 0x2c17), (0x2c48, 0x2c18), (0x2c49, 0x2c19),
            (0x2c4a, 0x2c1a), (0x2c4b, 0x2c1b), (0x2c4c, 0x2c1c), (0x2c4d, 0x2c1d), (0x2c4e, 0x2c1e), (0x2c4f, 0x2c1f),
            (0x2c50, 0x2c20), (0x2c51, 0x2c21), (0x2c52, 0x2c22), (0x2c53, 0x2c23), (0x2c54, 0x2c24), (0x2c55, 0x2c25),
            (0x2c56, 0x2c26), (0x2c57, 0x2c27), (0x2c58, 0x2c28), (0x2c59, 0x2c29), (0x2c5a, 0x2c2a), (0x2c5b, 0x2c2b),
            (0x2c5c, 0x2c2c), (0x2c5d, 0x2c2d), (0x2c5e, 0x2c2e), (0x2c5f, 0x2c2f), (0x2c61, 0x2c60), (0x2c65, 0x23a),
            (0x2c66, 0x23e), (0x2c68, 0x2c67), (0x2c6a, 0x2c69), (0x2c6c, 0x2c6b), (0x2c73, 0x2c72), (0x2c76, 0x2c75),
            (0x2c81, 0x2c80), (0x2c83, 0x2c82), (0x2c85, 0x2c84), (0x2c87, 0x2c86), (0x2c89, 0x2c88), (0x2c8b, 0x2c8a),
            (0x2c8d, 0x2c8c), (0x2c8f, 0x2c8e), (0x2c91, 0x2c90), (0x2c93, 0x2c92), (0x2c95, 0x2c94), (0x2c97, 0x2c96),
            (0x2c99, 0x2c98), (0x2c9b, 0x2c9a), (0x2c9d, 0x2c9c), (0x2c9f, 0x2c9e), (0x2ca1, 0x2ca0), (0x2ca3, 0x2ca2),
            (0x2ca5, 0x2ca4), (0x2ca7, 0x2ca6), (0x2ca9, 0x2ca8), (0x2cab, 0x2caa), (0x2cad, 0x2cac), (0x2caf, 0x2cae),
            (0x2cb1, 0x2cb0), (0x2cb3, 0x2cb2), (0x2cb5, 0x2cb4), (0x2cb7, 0x2cb6), (0x2cb9, 0x2cb8), (0x2cbb, 0x2cba),
            (0x2cbd, 0x2cbc), (0x2cbf, 0x2cbe), (0x2cc1, 0x2cc0), (0x2cc3, 0x2cc2), (0x2cc5, 0x2cc4), (0x2cc7, 0x2cc6),
            (0x2cc9, 0x2cc8), (0x2ccb, 0x2cca), (0x2ccd, 0x2ccc), (0x2ccf, 0x2cce), (0x2cd1, 0x2cd0), (0x2cd3, 0x2cd2),
            (0x2cd5, 0x2cd4), (0x2cd7, 0x2cd6), (0x2cd9, 0x2cd8), (0x2cdb, 0x2cda), (0x2cdd, 0x2cdc), (0x2cdf, 0x2cde),
            (0x2ce1, 0x2ce0), (0x2ce3, 0x2ce2), (0x2cec, 0x2ceb), (0x2cee, 0x2ced), (0x2cf3, 0x2cf2), (0x2d00, 0x10a0),
            (0x2d01, 0x10a1), (0x2d02, 0x10a2), (0x2d03, 0x10a3), (0x2d04, 0x10a4), (0x2d05, 0x10a5), (0x2d06, 0x10a6),
            (0x2d07, 0x10a7), (0x2d08, 0x10a8), (0x2d09, 0x10a9), (0x2d0a, 0x10aa), (0x2d0b, 0x10ab), (0x2d0c, 0x10ac),
            (0x2d0d, 0x10ad), (0x2d0e, 0x10ae), (0x2d0f, 0x10af), (0x2d10, 0x10b0), (0x2d11, 0x10b1), (0x2d12, 0x10b2),
            (0x2d13, 0x10b3), (0x2d14, 0x10b4), (0x2d15, 0x10b5), (0x2d16, 0x10b6), (0x2d17, 0x10b7), (0x2d18, 0x10b8),
            (0x2d19, 0x10b9), (0x2d1a, 0x10ba), (0x2d1b, 0x10bb), (0x2d1c, 0x10bc), (0x2d1d, 0x10bd), (0x2d1e, 0x10be),
            (0x2d1f, 0x10bf), (0x2d20, 0x10c0), (0x2d21, 0x10c1), (0x2d22, 0x10c2), (0x2d23, 0x10c3), (0x2d24, 0x10c4),
            (0x2d25, 0x10c5), (0x2d27, 0x10c7), (0x2d2d, 0x10cd), (0xa641, 0xa640), (0xa643, 0xa642), (0xa645, 0xa644),
            (0xa647, 0xa646), (0xa649, 0xa648), (0xa64b, 0xa64a), (0xa64d, 0xa64c), (0xa64f, 0xa64e), (0xa651, 0xa650),
            (0xa653, 0xa652), (0xa655, 0xa654), (0xa657, 0xa656), (0xa659, 0xa658), (0xa65b, 0xa65a), (0xa65d, 0xa65c),
            (0xa65f, 0xa65e), (0xa661, 0xa660), (0xa663, 0xa662), (0xa665, 0xa664), (0xa667, 0xa666), (0xa669, 0xa668),
            (0xa66b, 0xa66a), (0xa66d, 0xa66c), (0xa681, 0xa680), (0xa683, 0xa682), (0xa685, 0xa684), (0xa687, 0xa686),
            (0xa689, 0xa688), (0xa68b, 0xa68a), (0xa68d, 0xa68c), (0xa68f, 0xa68e), (0xa691, 0xa690), (0xa693, 0xa692),
            (0xa695, 0xa694), (0xa697, 0xa696), (0xa699, 0xa698), (0xa69b, 0xa69a), (0xa723, 0xa722), (0xa725, 0xa724),
            (0xa727, 0xa726), (0xa729, 0xa728), (0xa72b, 0xa72a), (0xa72d, 0xa72c), (0xa72f, 0xa72e), (0xa733, 0xa732),
            (0xa735, 0xa734), (0xa737, 0xa736), (0xa739, 0xa738), (0xa73b, 0xa73a), (0xa73d, 0xa73c), (0xa73f, 0xa73e),
            (0xa741, 0xa740), (0xa743, 0xa742), (0xa745, 0xa744), (0xa747, 0xa746), (0xa749, 0xa748), (0xa74b, 0xa74a),
            (0xa74d, 0xa74c), (0xa74f, 0xa74e), (0xa751, 0xa750), (0xa753, 0xa752), (0xa755, 0xa754), (0xa757, 0xa756),
            (0xa759, 0xa758), (0xa75b, 0xa75a), (0xa75d, 0xa75c), (0xa75f, 0xa75e), (0xa761, 0xa760), (0xa763, 0xa762),
            (0xa765, 0xa764), (0xa767, 0xa766), (0xa769, 0xa768), (0xa76b, 0xa76a), (0xa76d, 0xa76c), (0xa76f, 0xa76e),
            (0xa77a, 0xa779), (0xa77c, 0xa77b), (0xa77f, 0xa77e), (0xa781, 0xa780), (0xa783, 0xa782), (0xa785, 0xa784),
            (0xa787, 0xa786), (0xa78c, 0xa78b), (0xa791, 0xa790), (0xa793, 0xa792), (0xa794, 0xa7c4), (0xa797, 0xa796),
            (0xa799, 0xa798), (0xa79b, 0xa79a), (0xa79d, 0xa79c), (0xa79f, 0xa79e), (0xa7a1, 0xa7a0), (0xa7a3, 0xa7a2),
            (0xa7a5, 0xa7a4), (0xa7a7, 0xa7a6), (0xa7a9, 0xa7a8), (0xa7b5, 0xa7b4), (0xa7b7, 0xa7b6), (0xa7b9, 0xa7b8),
            (0xa7bb, 0xa7ba), (0xa7bd, 0xa7bc), (0xa7bf, 0xa7be), (0xa7c1, 0xa7c0), (0xa7c3, 0xa7c2), (0xa7c8, 0xa7c7),
            (0xa7ca, 0xa7c9), (0xa7d1, 0xa7d0), (0xa7d7, 0xa7d6), (0xa7d9, 0xa7d8), (0xa7f6, 0xa7f5), (0xab53, 0xa7b3),
            (0xab70, 0x13a0), (0xab71, 0x13a1), (0xab72, 0x13a2), (0xab73, 0x13a3), (0xab74, 0x13a4), (0xab75, 0x13a5),
            (0xab76, 0x13a6), (0xab77, 0x13a7), (0xab78, 0x13a8), (0xab79, 0x13a9), (0xab7a, 0x13aa), (0xab7b, 0x13ab),
            (0xab7c, 0x13ac), (0xab7d, 0x13ad), (0xab7e, 0x13ae), (0xab7f, 0x13af), (0xab80, 0x13b0), (0xab81, 0x13b1),
            (0xab82, 0x13b2), (0xab83, 0x13b3), (0xab84, 0x13b4), (0xab85, 0x13b5), (0xab86, 0x13b6), (0xab87, 0x13b7),
            (0xab88, 0x13b8), (0xab89, 0x13b9), (0xab8a, 0x13ba), (0xab8b, 0x13bb), (0xab8c, 0x13bc), (0xab8d, 0x13bd),
            (0xab8e, 0x13be), (0xab8f, 0x13bf), (0xab90, 0x13c0), (0xab91, 0x13c1), (0xab92, 0x13c2), (0xab93, 0x13c3),
            (0xab94, 0x13c4), (0xab95, 0x13c5), (0xab96, 0x13c6), (0xab97, 0x13c7), (0xab98, 0x13c8), (0xab99, 0x13c9),
            (0xab9a, 0x13ca), (0xab9b, 0x13cb), (0xab9c, 0x13cc), (0xab9d, 0x13cd), (0xab9e, 0x13ce), (0xab9f, 0x13cf),
            (0xaba0, 0x13d0), (0xaba1, 0x13d1), (0xaba2, 0x13d2), (0xaba3, 0x13d3), (0xaba4, 0x13d4), (0xaba5, 0x13d5),
            (0xaba6, 0x13d6), (0xaba7, 0x13d7), (0xaba8, 0x13d8), (0xaba9, 0x13d9), (0xabaa, 0x13da), (0xabab, 0x13db),
            (0xabac, 0x13dc), (0xabad, 0x13dd), (0xabae, 0x13de), (0xabaf, 0x13df), (0xabb0, 0x13e0), (0xabb1, 0x13e1),
            (0xabb2, 0x13e2), (0xabb3, 0x13e3), (0xabb4, 0x13e4), (0xabb5, 0x13e5), (0xabb6, 0x13e6), (0xabb7, 0x13e7),
            (0xabb8, 0x13e8), (0xabb9, 0x13e9), (0xabba, 0x13ea), (0xabbb, 0x13eb), (0xabbc, 0x13ec), (0xabbd, 0x13ed),
            (0xabbe, 0x13ee), (0xabbf, 0x13ef), (0xff41, 0xff21), (0xff42, 0xff22), (0xff43, 0xff23), (0xff44, 0xff24),
            (0xff45, 0xff25), (0xff46, 0xff26), (0xff47, 0xff27), (0xff48, 0xff28), (0xff49, 0xff29), (0xff4a, 0xff2a),
            (0xff4b, 0xff2b), (0xff4c, 0xff2c), (0xff4d, 0xff2d), (0xff4e, 0xff2e), (0xff4f, 0xff2f), (0xff50, 0xff30),
            (0xff51, 0xff31), (0xff52, 0xff32), (0xff53, 0xff33), (0xff54, 0xff34), (0xff55, 0xff35), (0xff56, 0xff36),
            (0xff57, 0xff37), (0xff58, 0xff38), (0xff59, 0xff39), (0xff5a, 0xff3a), (0x10428, 0x10400), (0x10429, 0x10401),
            (0x1042a, 0x10402), (0x1042b, 0x10403), (0x1042c, 0x10404), (0x1042d, 0x10405), (0x1042e, 0x10406), (0x1042f, 0x10407),
            (0x10430, 0x10408), (0x10431, 0x10409), (0x10432, 0x1040a), (0x10433, 0x1040b), (0x10434, 0x1040c), (0x10435, 0x1040d),
            (0x10436, 0x1040e), (0x10437, 0x1040f), (0x10438, 0x10410), (0x10439, 0x10411), (0x1043a, 0x10412), (0x1043b, 0x10413),
            (0x1043c, 0x10414), (0x1043d, 0x10415), (0x1043e, 0x10416), (0x1043f, 0x10417), (0x10440, 0x10418), (0x10441, 0x10419),
            (0x10442, 0x1041a), (0x10443, 0x1041b), (0x10444, 0x1041c), (0x10445, 0x1041d), (0x10446, 0x1041e), (0x10447, 0x1041f),
            (0x10448, 0x10420), (0x10449, 0x10421), (0x1044a, 0x10422), (0x1044b, 0x10423), (0x1044c, 0x10424), (0x1044d, 0x10425),
            (0x1044e, 0x10426), (0x1044f, 0x10427), (0x104d8, 0x104b0), (0x104d9, 0x104b1), (0x104da, 0x104b2), (0x104db, 0x104b3),
            (0x104dc, 0x104b4), (0x104dd, 0x104b5), (0x104de, 0x104b6), (0x104df, 0x104b7), (0x104e0, 0x104b8), (0x104e1, 0x104b9),
            (0x104e2, 0x104ba), (0x104e3, 0x104bb), (0x104e4, 0x104bc), (0x104e5, 0x104bd), (0x104e6, 0x104be), (0x104e7, 0x104bf),
            (0x104e8, 0x104c0), (0x104e9, 0x104c1), (0x104ea, 0x104c2), (0x104eb, 0x104c3), (0x104ec, 0x104c4), (0x104ed, 0x104c5),
            (0x104ee, 0x104c6), (0x104ef, 0x104c7), (0x104f0, 0x104c8), (0x104f1, 0x104c9), (0x104f2, 0x104ca), (0x104f3, 0x104cb),
            (0x104f4, 0x104cc), (0x104f5, 0x104cd), (0x104f6, 0x104ce), (0x104f7, 0x104cf), (0x104f8, 0x104d0), (0x104f9, 0x104d1),
            (0x104fa, 0x104d2), (0x104fb, 0x104d3), (0x10597, 0x10570), (0x10598, 0x10571), (0x10599, 0x10572), (0x1059a, 0x10573),
            (0x1059b, 0x10574), (0x1059c, 0x10575), (0x1059d, 0x10576), (0x1059e, 0x10577), (0x1059f, 0x10578), (0x105a0, 0x10579),
            (0x105a1, 0x1057a), (0x105a3, 0x1057c), (0x105a4, 0x1057d), (0x105a5, 0x1057e), (0x105a6, 0x1057f), (0x105a7, 0x10580),
            (0x105a8, 0x10581), (0x105a9, 0x10582), (0x105aa, 0x10583), (0x105ab, 0x10584), (0x105ac, 0x10585), (0x105ad, 0x10586),
            (0x105ae, 0x10587), (0x105af, 0x10588), (0x105b0, 0x10589), (0x105b1, 0x1058a), (0x105b3, 0x1058c), (0x105b4, 0x1058d),
            (0x105b5, 0x1058e), (0x105b6, 0x1058f), (0x105b7, 0x10590), (0x105b8, 0x10591), (0x105b9, 0x10592), (0x105bb, 0x10594),
            (0x105bc, 0x10595), (0x10cc0, 0x10c80), (0x10cc1, 0x10c81), (0x10cc2, 0x10c82), (0x10cc3, 0x10c83), (0x10cc4, 0x10c84),
            (0x10cc5, 0x10c85), (0x10cc6, 0x10c86), (0x10cc7, 0x10c87), (0x10cc8, 0x10c88), (0x10cc9, 0x10c89), (0x10cca, 0x10c8a),
            (0x10ccb, 0x10c8b), (0x10ccc, 0x10c8c), (0x10ccd, 0x10c8d), (0x10cce, 0x10c8e), (0x10ccf, 0x10c8f), (0x10cd0, 0x10c90),
            (0x10cd1, 0x10c91), (0x10cd2, 0x10c92), (0x10cd3, 0x10c93), (0x10cd4, 0x10c94), (0x10cd5, 0x10c95), (0x10cd6, 0x10c96),
            (0x10cd7, 0x10c97), (0x10cd8, 0x10c98), (0x10cd9, 0x10c99), (0x10cda, 0x10c9a), (0x10cdb, 0x10c9b), (0x10cdc, 0x10c9c),
            (0x10cdd, 0x10c9d), (0x10cde, 0x10c9e), (0x10cdf, 0x10c9f), (0x10ce0, 0x10ca0), (0x10ce1, 0x10ca1), (0x10ce2, 0x10ca2),
            (0x10ce3, 0x10ca3), (0x10ce4, 0x10ca4), (0x10ce5, 0x10ca5), (0x10ce6, 0x10ca6), (0x10ce7, 0x10ca7), (0x10ce8, 0x10ca8),
            (0x10ce9, 0x10ca9), (0x10cea, 0x10caa), (0x10ceb, 0x10cab), (0x10cec, 0x10cac), (0x10ced, 0x10cad), (0x10cee, 0x10cae),
            (0x10cef, 0x10caf), (0x10cf0, 0x10cb0), (0x10cf1, 0x10cb1), (0x10cf2, 0x10cb2), (0x118c0, 0x118a0), (0x118c1, 0x118a1),
            (0x118c2, 0x118a2), (0x118c3, 0x118a3), (0x118c4, 0x118a4), (0x118c5, 0x118a5), (0x118c6, 0x118a6), (0x118c7, 0x118a7),
            (0x118c8, 0x118a8), (0x118c9, 0x118a9), (0x118ca, 0x118aa), (0x118cb, 0x118ab), (0x118cc, 0x118ac), (0x118cd, 0x118ad),
            (0x118ce, 0x118ae), (0x118cf, 0x118af), (0x118d0, 0x118b0), (0x118d1, 0x118b1), (0x118d2, 0x118b2), (0x118d3, 0x118b3),
            (0x118d4, 0x118b4), (0x118d5, 0x118b5), (0x118d6, 0x118b6), (0x118d7, 0x118b7), (0x118d8, 0x118b8), (0x118d9, 0x118b9),
            (0x118da, 0x118ba), (0x118db, 0x118bb), (0x118dc, 0x118bc), (0x118dd, 0x118bd), (0x118de, 0x118be), (0x118df, 0x118bf),
            (0x16e60, 0x16e40), (0x16e61, 0x16e41), (0x16e62, 0x16e42), (0x16e63, 0x16e43), (0x16e64, 0x16e44), (0x16e65, 0x16e45),
            (0x16e66, 0x16e46), (0x16e67, 0x16e47), (0x16e68, 0x16e48), (0x16e69, 0x16e49), (0x16e6a, 0x16e4a), (0x16e6b, 0x16e4b),
            (0x16e6c, 0x16e4c), (0x16e6d, 0x16e4d), (0x16e6e, 0x16e4e), (0x16e6f, 0x16e4f), (0x16e70, 0x16e50), (0x16e71, 0x16e51),
            (0x16e72, 0x16e52), (0x16e73, 0x16e53), (0x16e74, 0x16e54), (0x16e75, 0x16e55), (0x16e76, 0x16e56), (0x16e77, 0x16e57),
            (0x16e78, 0x16e58), (0x16e79, 0x16e59), (0x16e7a, 0x16e5a), (0x16e7b, 0x16e5b), (0x16e7c, 0x16e5c), (0x16e7d, 0x16e5d),
            (0x16e7e, 0x16e5e), (0x16e7f, 0x16e5f), (0x1e922, 0x1e900), (0x1e923, 0x1e901), (0x1e924, 0x1e902), (0x1e925, 0x1e903),
            (0x1e926, 0x1e904), (0x1e927, 0x1e905), (0x1e928, 0x1e906), (0x1e929, 0x1e907), (0x1e92a, 0x1e908), (0x1e92b, 0x1e909),
            (0x1e92c, 0x1e90a), (0x1e92d, 0x1e90b), (0x1e92e, 0x1e90c), (0x1e92f, 0x1e90d), (0x1e930, 0x1e90e), (0x1e931, 0x1e90f),
            (0x1e932, 0x1e910), (0x1e933, 0x1e911), (0x1e934, 0x1e912), (0x1e935, 0x1e913), (0x1e936, 0x1e914), (0x1e937, 0x1e915),
            (0x1e938, 0x1e916), (0x1e939, 0x1e917), (0x1e93a, 0x1e918), (0x1e93b, 0x1e919), (0x1e93c, 0x1e91a), (0x1e93d, 0x1e91b),
            (0x1e93e, 0x1e91c), (0x1e93f, 0x1e91d), (0x1e940, 0x1e91e), (0x1e941, 0x1e91f), (0x1e942, 0x1e920), (0x1e943, 0x1e921),
        ],
        0,
    );

    pub(crate) static FULL_TITLE: ExtendedTable = ExtendedTable::from_static(
        &[
            (0xdf, Slot::new(0, 2)), (0x149, Slot::new(2, 2)), (0x1f0, Slot::new(4, 2)), (0x390, Slot::new(6, 3)),
            (0x3b0, Slot::new(9, 3)), (0x587, Slot::new(12, 2)), (0x1e96, Slot::new(14, 2)), (0x1e97, Slot::new(16, 2)),
            (0x1e98, Slot::new(18, 2)), (0x1e99, Slot::new(20, 2)), (0x1e9a, Slot::new(22, 2)), (0x1f50, Slot::new(24, 2)),
            (0x1f52, Slot::new(26, 3)), (0x1f54, Slot::new(29, 3)), (0x1f56, Slot::new(32, 3)), (0x1fb2, Slot::new(35, 2)),
            (0x1fb4, Slot::new(37, 2)), (0x1fb6, Slot::new(39, 2)), (0x1fb7, Slot::new(41, 3)), (0x1fc2, Slot::new(44, 2)),
            (0x1fc4, Slot::new(46, 2)), (0x1fc6, Slot::new(48, 2)), (0x1fc7, Slot::new(50, 3)), (0x1fd2, Slot::new(53, 3)),
            (0x1fd3, Slot::new(56, 3)), (0x1fd6, Slot::new(59, 2)), (0x1fd7, Slot::new(61, 3)), (0x1fe2, Slot::new(64, 3)),
            (0x1fe3, Slot::new(67, 3)), (0x1fe4, Slot::new(70, 2)), (0x1fe6, Slot::new(72, 2)), (0x1fe7, Slot::new(74, 3)),
            (0x1ff2, Slot::new(77, 2)), (0x1ff4, Slot::new(79, 2)), (0x1ff6, Slot::new(81, 2)), (0x1ff7, Slot::new(83, 3)),
            (0xfb00, Slot::new(86, 2)), (0xfb01, Slot::new(88, 2)), (0xfb02, Slot::new(90, 2)), (0xfb03, Slot::new(92, 3)),
            (0xfb04, Slot::new(95, 3)), (0xfb05, Slot::new(98, 2)), (0xfb06, Slot::new(100, 2)), (0xfb13, Slot::new(102, 2)),
            (0xfb14, Slot::new(104, 2)), (0xfb15, Slot::new(106, 2)), (0xfb16, Slot::new(108, 2)), (0xfb17, Slot::new(110, 2)),
        ],
        &[
            0x53, 0x73, 0x2bc, 0x4e, 0x4a, 0x30c, 0x399, 0x308, 0x301, 0x3a5,
            0x308, 0x301, 0x535, 0x582, 0x48, 0x331, 0x54, 0x308, 0x57, 0x30a,
            0x59, 0x30a, 0x41, 0x2be, 0x3a5, 0x313, 0x3a5, 0x313, 0x300, 0x3a5,
            0x313, 0x301, 0x3a5, 0x313, 0x342, 0x1fba, 0x345, 0x386, 0x345, 0x391,
            0x342, 0x391, 0x342, 0x345, 0x1fca, 0x345, 0x389, 0x345, 0x397, 0x342,
            0x397, 0x342, 0x345, 0x399, 0x308, 0x300, 0x399, 0x308, 0x301, 0x399,
            0x342, 0x399, 0x308, 0x342, 0x3a5, 0x308, 0x300, 0x3a5, 0x308, 0x301,
            0x3a1, 0x313, 0x3a5, 0x342, 0x3a5, 0x308, 0x342, 0x1ffa, 0x345, 0x38f,
            0x345, 0x3a9, 0x342, 0x3a9, 0x342, 0x345, 0x46, 0x66, 0x46, 0x69,
            0x46, 0x6c, 0x46, 0x66, 0x69, 0x46, 0x66, 0x6c, 0x53, 0x74,
            0x53, 0x74, 0x544, 0x576, 0x544, 0x565, 0x544, 0x56b, 0x54e, 0x576,
            0x544, 0x56d,
        ],
    );

    pub(crate) static SIMPLE_FOLD: ExactTable<u32> = ExactTable::from_static(
        &[
            (0x41, 0x61), (0x42, 0x62), (0x43, 0x63), (0x44, 0x64), (0x45, 0x65), (0x46, 0x66),
            (0x47, 0x67), (0x48, 0x68), (0x49, 0x69), (0x4a, 0x6a), (0x4b, 0x6b), (0x4c, 0x6c),
            (0x4d, 0x6d), (0x4e, 0x6e), (0x4f, 0x6f), (0x50, 0x70), (0x51, 0x71), (0x52, 0x72),
            (0x53, 0x73), (0x54, 0x74), (0x55, 0x75), (0x56, 0x76), (0x57, 0x77), (0x58, 0x78),
            (0x59, 0x79), (0x5a, 0x7a), (0xb5, 0x3bc), (0xc0, 0xe0), (0xc1, 0xe1), (0xc2, 0xe2),
            (0xc3, 0xe3), (0xc4, 0xe4), (0xc5, 0xe5), (0xc6, 0xe6), (0xc7, 0xe7), (0xc8, 0xe8),
            (0xc9, 0xe9), (0xca, 0xea), (0xcb, 0xeb), (0xcc, 0xec), (0xcd, 0xed), (0xce, 0xee),
            (0xcf, 0xef), (0xd0, 0xf0), (0xd1, 0xf1), (0xd2, 0xf2), (0xd3, 0xf3), (0xd4, 0xf4),
            (0xd5, 0xf5), (0xd6, 0xf6), (0xd8, 0xf8), (0xd9, 0xf9), (0xda, 0xfa), (0xdb, 0xfb),
            (0xdc, 0xfc), (0xdd, 0xfd), (0xde, 0xfe), (0x100, 0x101), (0x102, 0x103), (0x104, 0x105),
            (0x106, 0x107), (0x108, 0x109), (0x10a, 0x10b), (0x10c, 0x10d), (0x10e, 0x10f), (0x110, 0x111),
            (0x112, 0x113), (0x114, 0x115), (0x116, 0x117), (0x118, 0x119), (0x11a, 0x11b), (0x11c, 0x11d),
            (0x11e, 0x11f), (0x120, 0x121), (0x122, 0x123), (0x124, 0x125), (0x126, 0x127), (0x128, 0x129),
            (0x12a, 0x12b), (0x12c, 0x12d), (0x12e, 0x12f), (0x132, 0x133), (0x134, 0x135), (0x136, 0x137),
            (0x139, 0x13a), (0x13b, 0x13c), (0x13d, 0x13e), (0x13f, 0x140), (0x141, 0x142), (0x143, 0x144),
            (0x145, 0x146), (0x147, 0x148), (0x14a, 0x14b), (0x14c, 0x14d), (0x14e, 0x14f), (0x150, 0x151),
            (0x152, 0x153), (0x154, 0x155), (0x156, 0x157), (0x158, 0x159), (0x15a, 0x15b), (0x15c, 0x15d),
            (0x15e, 0x15f), (0x160, 0x161), (0x162, 0x163), (0x164, 0x165), (0x166, 0x167), (0x168, 0x169),
            (0x16a, 0x16b), (0x16c, 0x16d), (0x16e, 0x16f), (0x170, 0x171), (0x172, 0x173), (0x174, 0x175),
            (0x176, 0x177), (0x178, 0xff), (0x179, 0x17a), (0x17b, 0x17c), (0x17d, 0x17e), (0x17f, 0x73),
            (0x181, 0x253), (0x182, 0x183), (0x184, 0x185), (0x186, 0x254), (0x187, 0x188), (0x189, 0x256),
            (0x18a, 0x257), (0x18b, 0x18c), (0x18e, 0x1dd), (0x18f, 0x259), (0x190, 0x25b), (0x191, 0x192),
            (0x193, 0x260), (0x194, 0x263), (0x196, 0x269), (0x197, 0x268), (0x198, 0x199), (0x19c, 0x26f),
            (0x19d, 0x272), (0x19f, 0x275), (0x1a0, 0x1a1), (0x1a2, 0x1a3), (0x1a4, 0x1a5), (0x1a6, 0x280),
            (0x1a7, 0x1a8), (0x1a9, 0x283), (0x1ac, 0x1ad), (0x1ae, 0x288), (0x1af, 0x1b0), (0x1b1, 0x28a),
            (0x1b2, 0x28b), (0x1b3, 0x1b4), (0x1b5, 0x1b6), (0x1b7, 0x292), (0x1b8, 0x1b9), (0x1bc, 0x1bd),
            (0x1c4, 0x1c6), (0x1c5, 0x1c6), (0x1c7, 0x1c9), (0x1c8, 0x1c9), (0x1ca, 0x1cc), (0x1cb, 0x1cc),
            (0x1cd, 0x1ce), (0x1cf, 0x1d0), (0x1d1, 0x1d2), (0x1d3, 0x1d4), (0x1d5, 0x1d6), (0x1d7, 0x1d8),
            (0x1d9, 0x1da), (0x1db, 0x1dc), (0x1de, 0x1df), (0x1e0, 0x1e1), (0x1e2, 0x1e3), (0x1e4, 0x1e5),
            (0x1e6, 0x1e7), (0x1e8, 0x1e9), (0x1ea, 0x1eb), (0x1ec, 0x1ed), (0x1ee, 0x1ef), (0x1f1, 0x1f3),
            (0x1f2, 0x1f3), (0x1f4, 0x1f5), (0x1f6, 0x195), (0x1f7, 0x1bf), (0x1f8, 0x1f9), (0x1fa, 0x1fb),
            (0x1fc, 0x1fd), (0x1fe, 0x1ff), (0x200, 0x201), (0x202, 0x203), (0x204, 0x205), (0x206, 0x207),
            (0x208, 0x209), (0x20a, 0x20b), (0x20c, 0x20d), (0x20e, 0x20f), (0x210, 0x211), (0x212, 0x213),
            (0x214, 0x215), (0x216, 0x217), (0x218, 0x219), (0x21a, 0x21b), (0x21c, 0x21d), (0x21e, 0x21f),
            (0x220, 0x19e), (0x222, 0x223), (0x224, 0x225), (0x226, 0x227), (0x228, 0x229), (0x22a, 0x22b),
            (0x22c, 0x22d), (0x22e, 0x22f), (0x230, 0x231), (0x232, 0x233), (0x23a, 0x2c65), (0x23b, 0x23c),
            (0x23d, 0x19a), (0x23e, 0x2c66), (0x241, 0x242), (0x243, 0x180), (0x244, 0x289), (0x245, 0x28c),
            (0x246, 0x247), (0x248, 0x249), (0x24a, 0x24b), (0x24c, 0x24d), (0x24e, 0x24f), (0x345, 0x3b9),
            (0x370, 0x371), (0x372, 0x373), (0x376, 0x377), (0x37f, 0x3f3), (0x386, 0x3ac), (0x388, 0x3ad),
            (0x389, 0x3ae), (0x38a, 0x3af), (0x38c, 0x3cc), (0x38e, 0x3cd), (0x38f, 0x3ce), (0x391, 0x3b1),
            (0x392, 0x3b2), (0x393, 0x3b3), (0x394, 0x3b4), (0x395, 0x3b5), (0x396, 0x3b6), (0x397, 0x3b7),
            (0x398, 0x3b8), (0x399, 0x3b9), (0x39a, 0x3ba), (0x39b, 0x3bb), (0x39c, 0x3bc), (0x39d, 0x3bd),
            (0x39e, 0x3be), (0x39f, 0x3bf), (0x3a0, 0x3c0), (0x3a1, 0x3c1), (0x3a3, 0x3c3), (0x3a4, 0x3c4),
            (0x3a5, 0x3c5), (0x3a6, 0x3c6), (0x3a7, 0x3c7), (0x3a8, 0x3c8), (0x3a9, 0x3c9), (0x3aa, 0x3ca),
            (0x3ab, 0x3cb), (0x3c2, 0x3c3), (0x3cf, 0x3d7), (0x3d0, 0x3b2), (0x3d1, 0x3b8), (0x3d5, 0x3c6),
            (0x3d6, 0x3c0), (0x3d8, 0x3d9), (0x3da, 0x3db), (0x3dc, 0x3dd), (0x3de, 0x3df), (0x3e0, 0x3e1),
            (0x3e2, 0x3e3), (0x3e4, 0x3e5), (0x3e6, 0x3e7), (0x3e8, 0x3e9), (0x3ea, 0x3eb), (0x3ec, 0x3ed),
            (0x3ee, 0x3ef), (0x3f0, 0x3ba), (0x3f1, 0x3c1), (0x3f4, 0x3b8), (0x3f5, 0x3b5), (0x3f7, 0x3f8),
            (0x3f9, 0x3f2), (0x3fa, 0x3fb), (0x3fd, 0x37b), (0x3fe, 0x37c), (0x3ff, 0x37d), (0x400, 0x450),
            (0x401, 0x451), (0x402, 0x452), (0x403, 0x453), (0x404, 0x454), (0x405, 0x455), (0x406, 0x456),
            (0x407, 0x457), (0x408, 0x458), (0x409, 0x459), (0x40a, 0x45a), (0x40b, 0x45b), (0x40c, 0x45c),
            (0x40d, 0x45d), (0x40e, 0x45e), (0x40f, 0x45f), (0x410, 0x430), (0x411, 0x431), (0x412, 0x432),
            (0x413, 0x433), (0x414, 0x434), (0x415, 0x435), (0x416, 0x436), (0x417, 0x437), (0x418, 0x438),
            (0x419, 0x439), (0x41a, 0x43a), (0x41b, 0x43b), (0x41c, 0x43c), (0x41d, 0x43d), (0x41e, 0x43e),
            (0x41f, 0x43f), (0x420, 0x440), (0x421, 0x441), (0x422, 0x442), (0x423, 0x443), (0x424, 0x444),
            (0x425, 0x445), (0x426, 0x446), (0x427, 0x447), (0x428, 0x448), (0x429, 0x449), (0x42a, 0x44a),
            (0x42b, 0x44b), (0x42c, 0x44c), (0x42d, 0x44d), (0x42e, 0x44e), (0x42f, 0x44f), (0x460, 0x461),
            (0x462, 0x463), (0x464, 0x465), (0x466, 0x467), (0x468, 0x469), (0x46a, 0x46b), (0x46c, 0x46d),
            (0x46e, 0x46f), (0x470, 0x471), (0x472, 0x473), (0x474, 0x475), (0x476, 0x477), (0x478, 0x479),
            (0x47a, 0x47b), (0x47c, 0x47d), (0x47e, 0x47f), (0x480, 0x481), (0x48a, 0x48b), (0x48c, 0x48d),
            (0x48e, 0x48f), (0x490, 0x491), (0x492, 0x493), (0x494, 0x495), (0x496, 0x497), (0x498, 0x499),
            (0x49a, 0x49b), (0x49c, 0x49d), (0x49e, 0x49f), (0x4a0, 0x4a1), (0x4a2, 0x4a3), (0x4a4, 0x4a5),
            (0x4a6, 0x4a7), (0x4a8, 0x4a9), (0x4aa, 0x4ab), (0x4ac, 0x4ad), (0x4ae, 0x4af), (0x4b0, 0x4b1),
            (0x4b2, 0x4b3), (0x4b4, 0x4b5), (0x4b6, 0x4b7), (0x4b8, 0x4b9), (0x4ba, 0x4bb), (0x4bc, 0x4bd),
            (0x4be, 0x4bf), (0x4c0, 0x4cf), (0x4c1, 0x4c2), (0x4c3, 0x4c4), (0x4c5, 0x4c6), (0x4c7, 0x4c8),
            (0x4c9, 0x4ca), (0x4cb, 0x4cc), (0x4cd, 0x4ce), (0x4d0, 0x4d1), (0x4d2, 0x4d3), (0x4d4, 0x4d5),
            (0x4d6, 0x4d7), (0x4d8, 0x4d9), (0x4da, 0x4db), (0x4dc, 0x4dd), (0x4de, 0x4df), (0x4e0, 0x4e1),
            (0x4e2, 0x4e3), (0x4e4, 0x4e5), (0x4e6, 0x4e7), (0x4e8, 0x4e9), (0x4ea, 0x4eb), (0x4ec, 0x4ed),
            (0x4ee, 0x4ef), (0x4f0, 0x4f1), (0x4f2, 0x4f3), (0x4f4, 0x4f5), (0x4f6, 0x4f7), (0x4f8, 0x4f9),
            (0x4fa, 0x4fb), (0x4fc, 0x4fd), (0x4fe, 0x4ff), (0x500, 0x501), (0x502, 0x503), (0x504, 0x505),
            (0x506, 0x507), (0x508, 0x509), (0x50a, 0x50b), (0x50c, 0x50d), (0x50e, 0x50f), (0x510, 0x511),
            (0x512, 0x513), (0x514, 0x515), (0x516, 0x517), (0x518, 0x519), (0x51a, 0x51b), (0x51c, 0x51d),
            (0x51e, 0x51f), (0x520, 0x521), (0x522, 0x523), (0x524, 0x525), (0x526, 0x527), (0x528, 0x529),
            (0x52a, 0x52b), (0x52c, 0x52d), (0x52e, 0x52f), (0x531, 0x561), (0x532, 0x562), (0x533, 0x563),
            (0x534, 0x564), (0x535, 0x565), (0x536, 0x566), (0x537, 0x567), (0x538, 0x568), (0x539, 0x569),
            (0x53a, 0x56a), (0x53b, 0x56b), (0x53c, 0x56c), (0x53d, 0x56d), (0x53e, 0x56e), (0x53f, 0x56f),
            (0x540, 0x570), (0x541, 0x571), (0x542, 0x572), (0x543, 0x573), (0x544, 0x574), (0x545, 0x575),
            (0x546, 0x576), (0x547, 0x577), (0x548, 0x578), (0x549, 0x579), (0x54a, 0x57a), (0x54b, 0x57b),
            (0x54c, 0x57c), (0x54d, 0x57d), (0x54e, 0x57e), (0x54f, 0x57f), (0x550, 0x580), (0x551, 0x581),
            (0x552, 0x582), (0x553, 0x583), (0x554, 0x584), (0x555, 0x585), (0x556, 0x586), (0x10a0, 0x2d00),
            (0x10a1, 0x2d01), (0x10a2, 0x2d02), (0x10a3, 0x2d03), (0x10a4, 0x2d04), (0x10a5, 0x2d05), (0x10a6, 0x2d06),
            (0x10a7, 0x2d07), (0x10a8, 0x2d08), (0x10a9, 0x2d09), (0x10aa, 0x2d0a), (0x10ab, 0x2d0b), (0x10ac, 0x2d0c),
            (0x10ad, 0x2d0d), (0x10ae, 0x2d0e), (0x10af, 0x2d0f), (0x10b0, 0x2d10), (0x10b1, 0x2d11), (0x10b2, 0x2d12),
            (0x10b3, 0x2d13), (0x10b4, 0x2d14), (0x10b5, 0x2d15), (0x10b6, 0x2d16), (0x10b7, 0x2d17), (0x10b8, 0x2d18),
            (0x10b9, 0x2d19), (0x10ba, 0x2d1a), (0x10bb, 0x2d1b), (0x10bc, 0x2d1c), (0x10bd, 0x2d1d), (0x10be, 0x2d1e),
            (0x10bf, 0x2d1f), (0x10c0, 0x2d20), (0x10c1, 0x2d21), (0x10c2, 0x2d22), (0x10c3, 0x2d23), (0x10c4, 0x2d24),
            (0x10c5, 0x2d25), (0x10c7, 0x2d27), (0x10cd, 0x2d2d), (0x13f8, 0x13f0), (0x13f9, 0x13f1), (0x13fa, 0x13f2),
            (0x13fb, 0x13f3), (0x13fc, 0x13f4), (0x13fd, 0x13f5), (0x1c80, 0x432), (0x1c81, 0x434), (0x1c82, 0x43e),
            (0x1c83, 0x441), (0x1c84, 0x442), (0x1c85, 0x442), (0x1c86, 0x44a), (0x1c87, 0x463), (0x1c88, 0xa64b),
            (0x1c90, 0x10d0), (0x1c91, 0x10d1), (0x1c92, 0x10d2), (0x1c93, 0x10d3), (0x1c94, 0x10d4), (0x1c95, 0x10d5),
            (0x1c96, 0x10d6), (0x1c97, 0x10d7), (0x1c98, 0x10d8), (0x1c99, 0x10d9), (0x1c9a, 0x10da), (0x1c9b, 0x10db),
            (0x1c9c, 0x10dc), (0x1c9d, 0x10dd), (0x1c9e, 0x10de), (0x1c9f, 0x10df), (0x1ca0, 0x10e0), (0x1ca1, 0x10e1),
            (0x1ca2, 0x10e2), (0x1ca3, 0x10e3), (0x1ca4, 0x10e4), (0x1ca5, 0x10e5), (0x1ca6, 0x10e6), (0x1ca7, 0x10e7),
            (0x1ca8, 0x10e8), (0x1ca9, 0x10e9), (0x1caa, 0x10ea), (0x1cab, 0x10eb), (0x1cac, 0x10ec), (0x1cad, 0x10ed),
            (0x1cae, 0x10ee), (0x1caf, 0x10ef), (0x1cb0, 0x10f0), (0x1cb1, 0x10f1), (0x1cb2, 0x10f2), (0x1cb3, 0x10f3),
            (0x1cb4, 0x10f4), (0x1cb5, 0x10f5), (0x1cb6, 0x10f6), (0x1cb7, 0x10f7), (0x1cb8, 0x10f8), (0x1cb9, 0x10f9),
            (0x1cba, 0x10fa), (0x1cbd, 0x10fd), (0x1cbe, 0x10fe), (0x1cbf, 0x10ff), (0x1e00, 0x1e01), (0x1e02, 0x1e03),
            (0x1e04, 0x1e05), (0x1e06, 0x1e07), (0x1e08, 0x1e09), (0x1e0a, 0x1e0b), (0x1e0c, 0x1e0d), (0x1e0e, 0x1e0f),
            (0x1e10, 0x1e11), (0x1e12, 0x1e13), (0x1e14, 0x1e15), (0x1e16, 0x1e17), (0x1e18, 0x1e19), (0x1e1a, 0x1e1b),
            (0x1e1c, 0x1e1d), (0x1e1e, 0x1e1f), (0x1e20, 0x1e21), (0x1e22, 0x1e23), (0x1e24, 0x1e25), (0x1e26, 0x1e27),
            (0x1e28, 0x1e29), (0x1e2a, 0x1e2b), (0x1e2c, 0x1e2d), (0x1e2e, 0x1e2f), (0x1e30, 0x1e31), (0x1e32, 0x1e33),
            (0x1e34, 0x1e35), (0x1e36, 0x1e37), (0x1e38, 0x1e39), (0x1e3a, 0x1e3b), (0x1e3c, 0x1e3d), (0x1e3e, 0x1e3f),
            (0x1e40, 0x1e41), (0x1e42, 0x1e43), (0x1e44, 0x1e45), (0x1e46, 0x1e47), (0x1e48, 0x1e49), (0x1e4a, 0x1e4b),
            (0x1e4c, 0x1e4d), (0x1e4e, 0x1e4f), (0x1e50, 0x1e51), (0x1e52, 0x1e53), (0x1e54, 0x1e55), (0x1e56, 0x1e57),
            (0x1e58, 0x1e59), (0x1e5a, 0x1e5b), (0x1e5c, 0x1e5d), (0x1e5e, 0x1e5f), (0x1e60, 0x1e61), (0x1e62, 0x1e63),
            (0x1e64, 0x1e65), (0x1e66, 0x1e67), (0x1e68, 0x1e69), (0x1e6a, 0x1e6b), (0x1e6c, 0x1e6d), (0x1e6e, 0x1e6f),
            (0x1e70, 0x1e71), (0x1e72, 0x1e73), (0x1e74, 0x1e75), (0x1e76, 0x1e77), (0x1e78, 0x1e79), (0x1e7a, 0x1e7b),
            (0x1e7c, 0x1e7d), (0x1e7e, 0x1e7f), (0x1e80, 0x1e81), (0x1e82, 0x1e83), (0x1e84, 0x1e85), (0x1e86, 0x1e87),
            (0x1e88, 0x1e89), (0x1e8a, 0x1e8b), (0x1e8c, 0x1e8d), (0x1e8e, 0x1e8f), (0x1e90, 0x1e91), (0x1e92, 0x1e93),
            (0x1e94, 0x1e95), (0x1e9b, 0x1e61), (0x1e9e, 0xdf), (0x1ea0, 0x1ea1), (0x1ea2, 0x1ea3), (0x1ea4, 0x1ea5),
            (0x1ea6, 0x1ea7), (0x1ea8, 0x1ea9), (0x1eaa, 0x1eab), (0x1eac, 0x1ead), (0x1eae, 0x1eaf), (0x1eb0, 0x1eb1),
            (0x1eb2, 0x1eb3), (0x1eb4, 0x1eb5), (0x1eb6, 0x1eb7), (0x1eb8, 0x1eb9), (0x1eba, 0x1ebb), (0x1ebc, 0x1ebd),
            (0x1ebe, 0x1ebf), (0x1ec0, 0x1ec1), (0x1ec2, 0x1ec3), (0x1ec4, 0x1ec5), (0x1ec6, 0x1ec7), (0x1ec8, 0x1ec9),
            (0x1eca, 0x1ecb), (0x1ecc, 0x1ecd), (0x1ece, 0x1ecf), (0x1ed0, 0x1ed1), (0x1ed2, 0x1ed3), (0x1ed4, 0x1ed5),
            (0x1ed6, 0x1ed7), (0x1ed8, 0x1ed9), (0x1eda, 0x1edb), (0x1edc, 0x1edd), (0x1ede, 0x1edf), (0x1ee0, 0x1ee1),
            (0x1ee2, 0x1ee3), (0x1ee4, 0x1ee5), (0x1ee6, 0x1ee7), (0x1ee8, 0x1ee9), (0x1eea, 0x1eeb), (0x1eec, 0x1eed),
            (0x1eee, 0x1eef), (0x1ef0, 0x1ef1), (0x1ef2, 0x1ef3), (0x1ef4, 0x1ef5), (0x1ef6, 0x1ef7), (0x1ef8, 0x1ef9),
            (0x1efa, 0x1efb), (0x1efc, 0x1efd), (0x1efe, 0x1eff), (0x1f08, 0x1f00), (0x1f09, 0x1f01), (0x1f0a, 0x1f02),
            (0x1f0b, 0x1f03), (0x1f0c, 0x1f04), (0x1f0d, 0x1f05), (0x1f0e, 0x1f06), (0x1f0f, 0x1f07), (0x1f18, 0x1f10),
            (0x1f19, 0x1f11), (0x1f1a, 0x1f12), (0x1f1b, 0x1f13), (0x1f1c, 0x1f14), (0x1f1d, 0x1f15), (0x1f28, 0x1f20),
            (0x1f29, 0x1f21), (0x1f2a, 0x1f22), (0x1f2b, 0x1f23), (0x1f2c, 0x1f24), (0x1f2d, 0x1f25), (0x1f2e, 0x1f26),
            (0x1f2f, 0x1f27), (0x1f38, 0x1f30), (0x1f39, 0x1f31), (0x1f3a, 0x1f32), (0x1f3b, 0x1f33), (0x1f3c, 0x1f34),
            (0x1f3d, 0x1f35), (0x1f3e, 0x1f36), (0x1f3f, 0x1f37), (0x1f48, 0x1f40), (0x1f49, 0x1f41), (0x1f4a, 0x1f42),
            (0x1f4b, 0x1f43), (0x1f4c, 0x1f44), (0x1f4d, 0x1f45), (0x1f59, 0x1f51), (0x1f5b, 0x1f53), (0x1f5d, 0x1f55),
            (0x1f5f, 0x1f57), (0x1f68, 0x1f60), (0x1f69, 0x1f61), (0x1f6a, 0x1f62), (0x1f6b, 0x1f63), (0x1f6c, 0x1f64),
            (0x1f6d, 0x1f65), (0x1f6e, 0x1f66), (0x1f6f, 0x1f67), (0x1f88, 0x1f80), (0x1f89, 0x1f81), (0x1f8a, 0x1f82),
            (0x1f8b, 0x1f83), (0x1f8c, 0x1f84), (0x1f8d, 0x1f85), (0x1f8e, 0x1f86), (0x1f8f, 0x1f87), (0x1f98, 0x1f90),
            (0x1f99, 0x1f91), (0x1f9a, 0x1f92), (0x1f9b, 0x1f93), (0x1f9c, 0x1f94), (0x1f9d, 0x1f95), (0x1f9e, 0x1f96),
            (0x1f9f, 0x1f97), (0x1fa8, 0x1fa0), (0x1fa9, 0x1fa1), (0x1faa, 0x1fa2), (0x1fab, 0x1fa3), (0x1fac, 0x1fa4),
            (0x1fad, 0x1fa5), (0x1fae, 0x1fa6), (0x1faf, 0x1fa7), (0x1fb8, 0x1fb0), (0x1fb9, 0x1fb1), (0x1fba, 0x1f70),
            (0x1fbb, 0x1f71), (0x1fbc, 0x1fb3), (0x1fbe, 0x3b9), (0x1fc8, 0x1f72), (0x1fc9, 0x1f73), (0x1fca, 0x1f74),
            (0x1fcb, 0x1f75), (0x1fcc, 0x1fc3), (0x1fd8, 0x1fd0), (0x1fd9, 0x1fd1), (0x1fda, 0x1f76), (0x1fdb, 0x1f77),
            (0x1fe8, 0x1fe0), (0x1fe9, 0x1fe1), (0x1fea, 0x1f7a), (0x1feb, 0x1f7b), (0x1fec, 0x1fe5), (0x1ff8, 0x1f78),
            (0x1ff9, 0x1f79), (0x1ffa, 0x1f7c), (0x1ffb, 0x1f7d), (0x1ffc, 0x1ff3), (0x2126, 0x3c9), (0x212a, 0x6b),
            (0x212b, 0xe5), (0x2132, 0x214e), (0x2160, 0x2170), (0x2161, 0x2171), (0x2162, 0x2172), (0x2163, 0x2173),
            (0x2164, 0x2174), (0x2165, 0x2175), (0x2166, 0x2176), (0x2167, 0x2177), (0x2168, 0x2178), (0x2169, 0x2179),
            (0x216a, 0x217a), (0x216b, 0x217b), (0x216c, 0x217c), (0x216d, 0x217d), (0x216e, 0x217e), (0x216f, 0x217f),
            (0x2183, 0x2184), (0x24b6, 0x24d0), (0x24b7, 0x24d1), (0x24b8, 0x24d2), (0x24b9, 0x24d3), (0x24ba, 0x24d4),
            (0x24bb, 0x24d5), (0x24bc, 0x24d6), (0x24bd, 0x24d7), (0x24be, 0x24d8), (0x24bf, 0x24d9), (0x24c0, 0x24da),
            (0x24c1, 0x24db), (0x24c2, 0x24dc), (0x24c3, 0x24dd), (0x24c4, 0x24de), (0x24c5, 0x24df), (0x24c6, 0x24e0),
            (0x24c7, 0x24e1), (0x24c8, 0x24e2), (0x24c9, 0x24e3), (0x24ca, 0x24e4), (0x24cb, 0x24e5), (0x24cc, 0x24e6),
            (0x24cd, 0x24e7), (0x24ce, 0x24e8), (0x24cf, 0x24e9), (0x2c00, 0x2c30), (0x2c01, 0x2c31), (0x2c02, 0x2c32),
            (0x2c03, 0x2c33), (0x2c04, 0x2c34), (0x2c05, 0x2c35), (0x2c06, 0x2c36), (0x2c07, 0x2c37), (0x2c08, 0x2c38),
            (0x2c09, 0x2c39), (0x2c0a, 0x2c3a), (0x2c0b, 0x2c3b), (0x2c0c, 0x2c3c), (0x2c0d, 0x2c3d), (0x2c0e, 0x2c3e),
            (0x2c0f, 0x2c3f), (0x2c10, 0x2c40), (0x2c11, 0x2c41), (0x2c12, 0x2c42), (0x2c13, 0x2c43), (0x2c14, 0x2c44),
            (0x2c15, 0x2c45), (0x2c16, 0x2c46), (0x2c17, 0x2c47), (0x2c18, 0x2c48), (0x2c19, 0x2c49), (0x2c1a, 0x2c4a),
            (0x2c1b, 0x2c4b), (0x2c1c, 0x2c4c), (0x2c1d, 0x2c4d), (0x2c1e, 0x2c4e), (0x2c1f, 0x2c4f), (0x2c20, 0x2c50),
            (0x2c21, 0x2c51), (0x2c22, 0x2c52), (0x2c23, 0x2c53), (0x2c24, 0x2c54), (0x2c25, 0x2c55), (0x2c26, 0x2c56),
            (0x2c27, 0x2c57), (0x2c28, 0x2c58), (0x2c29, 0x2c59), (0x2c2a, 0x2c5a), (0x2c2b, 0x2c5b), (0x2c2c, 0x2c5c),
            (0x2c2d, 0x2c5d), (0x2c2e, 0x2c5e), (0x2c2f, 0x2c5f), (0x2c60, 0x2c61), (0x2c62, 0x26b), (0x2c63, 0x1d7d),
            (0x2c64, 0x27d), (0x2c67, 0x2c68), (0x2c69, 0x2c6a), (0x2c6b, 0x2c6c), (0x2c6d, 0x251), (0x2c6e, 0x271),
            (0x2c6f, 0x250), (0x2c70, 0x252), (0x2c72, 0x2c73), (0x2c75, 0x2c76), (0x2c7e, 0x23f), (0x2c7f, 0x240),
            (0x2c80, 0x2c81), (0x2c82, 0x2c83), (0x2c84, 0x2c85), (0x2c86, 0x2c87), (0x2c88, 0x2c89), (0x2c8a, 0x2c8b),
            (0x2c8c, 0x2c8d), (0x2c8e, 0x2c8f), (0x2c90, 0x2c91), (0x2c92, 0x2c93), (0x2c94, 0x2c95), (0x2c96, 0x2c97),
            (0x2c98, 0x2c99), (0x2c9a, 0x2c9b), (0x2c9c, 0x2c9d), (0x2c9e, 0x2c9f), (0x2ca0, 0x2ca1), (0x2ca2, 0x2ca3),
            (0x2ca4, 0x2ca5), (0x2ca6, 0x2ca7), (0x2ca8, 0x2ca9), (0x2caa, 0x2cab), (0x2cac, 0x2cad), (0x2cae, 0x2caf),
            (0x2cb0, 0x2cb1), (0x2cb2, 0x2cb3), (0x2cb4, 0x2cb5), (0x2cb6, 0x2cb7), (0x2cb8, 0x2cb9), (0x2cba, 0x2cbb),
            (0x2cbc, 0x2cbd), (0x2cbe, 0x2cbf), (0x2cc0, 0x2cc1), (0x2cc2, 0x2cc3), (0x2cc4, 0x2cc5), (0x2cc6, 0x2cc7),
            (0x2cc8, 0x2cc9), (0x2cca, 0x2ccb), (0x2ccc, 0x2ccd), (0x2cce, 0x2ccf), (0x2cd0, 0x2cd1), (0x2cd2, 0x2cd3),
            (0x2cd4, 0x2cd5), (0x2cd6, 0x2cd7), (0x2cd8, 0x2cd9), (0x2cda, 0x2cdb), (0x2cdc, 0x2cdd), (0x2cde, 0x2cdf),
            (0x2ce0, 0x2ce1), (0x2ce2, 0x2ce3), (0x2ceb, 0x2cec), (0x2ced, 0x2cee), (0x2cf2, 0x2cf3), (0xa640, 0xa641),
            (0xa642, 0xa643), (0xa644, 0xa645), (0xa646, 0xa647), (0xa648, 0xa649), (0xa64a, 0xa64b), (0xa64c, 0xa64d),
            (0xa64e, 0xa64f), (0xa650, 0xa651), (0xa652, 0xa653), (0xa654, 0xa655), (0xa656, 0xa657), (0xa658, 0xa659),
            (0xa65a, 0xa65b), (0xa65c, 0xa65d), (0xa65e, 0xa65f), (0xa660, 0xa661), (0xa662, 0xa663), (0xa664, 0xa665),
            (0xa666, 0xa667), (0xa668, 0xa669), (0xa66a, 0xa66b), (0xa66c, 0xa66d), (0xa680, 0xa681), (0xa682, 0xa683),
            (0xa684, 0xa685), (0xa686, 0xa687), (0xa688, 0xa689), (0xa68a, 0xa68b), (0xa68c, 0xa68d), (0xa68e, 0xa68f),
            (0xa690, 0xa691), (0xa692, 0xa693), (0xa694, 0xa695), (0xa696, 0xa697), (0xa698, 0xa699), (0xa69a, 0xa69b),
            (0xa722, 0xa723), (0xa724, 0xa725), (0xa726, 0xa727), (0xa728, 0xa729), (0xa72a, 0xa72b), (0xa72c, 0xa72d),
            (0xa72e, 0xa72f), (0xa732, 0xa733), (0xa734, 0xa735), (0xa736, 0xa737), (0xa738, 0xa739), (0xa73a, 0xa73b),
            (0xa73c, 0xa73d), (0xa73e, 0xa73f), (0xa740, 0xa741), (0xa742, 0xa743), (0xa744, 0xa745), (0xa746, 0xa747),
            (0xa748, 0xa749), (0xa74a, 0xa74b), (0xa74c, 0xa74d), (0xa74e, 0xa74f), (0xa750, 0xa751), (0xa752, 0xa753),
            (0xa754, 0xa755), (0xa756, 0xa757), (0xa758, 0xa759), (0xa75a, 0xa75b), (0xa75c, 0xa75d), (0xa75e, 0xa75f),
            (0xa760, 0xa761), (0xa762, 0xa763), (0xa764, 0xa765), (0xa766, 0xa767), (0xa768, 0xa769), (0xa76a, 0xa76b),
            (0xa76c, 0xa76d), (0xa76e, 0xa76f), (0xa779, 0xa77a), (0xa77b, 0xa77c), (0xa77d, 0x1d79), (0xa77e, 0xa77f),
            (0xa780, 0xa781), (0xa782, 0xa783), (0xa784, 0xa785), (0xa786, 0xa787), (0xa78b, 0xa78c), (0xa78d, 0x265),
            (0xa790, 0xa791), (0xa792, 0xa793), (0xa796, 0xa797), (0xa798, 0xa799), (0xa79a, 0xa79b), (0xa79c, 0xa79d),
            (0xa79e, 0xa79f), (0xa7a0, 0xa7a1), (0xa7a2, 0xa7a3), (0xa7a4, 0xa7a5), (0xa7a6, 0xa7a7), (0xa7a8, 0xa7a9),
            (0xa7aa, 0x266), (0xa7ab, 0x25c), (0xa7ac, 0x261), (0xa7ad, 0x26c), (0xa7ae, 0x26a), (0xa7b0, 0x29e),
            (0xa7b1, 0x287), (0xa7b2, 0x29d), (0xa7b3, 0xab53), (0xa7b4, 0xa7b5), (0xa7b6, 0xa7b7), (0xa7b8, 0xa7b9),
            (0xa7ba, 0xa7bb), (0xa7bc, 0xa7bd), (0xa7be, 0xa7bf), (0xa7c0, 0xa7c1), (0xa7c2, 0xa7c3), (0xa7c4, 0xa794),
            (0xa7c5, 0x282), (0xa7c6, 0x1d8e), (0xa7c7, 0xa7c8), (0xa7c9, 0xa7ca), (0xa7d0, 0xa7d1), (0xa7d6, 0xa7d7),
            (0xa7d8, 0xa7d9), (0xa7f5, 0xa7f6), (0xab70, 0x13a0), (0xab71, 0x13a1), (0xab72, 0x13a2), (0xab73, 0x13a3),
            (0xab74, 0x13a4), (0xab75, 0x13a5), (0xab76, 0x13a6), (0xab77, 0x13a7), (0xab78, 0x13a8), (0xab79, 0x13a9),
            (0xab7a, 0x13aa), (0xab7b, 0x13ab), (0xab7c, 0x13ac), (0xab7d, 0x13ad), (0xab7e, 0x13ae), (0xab7f, 0x13af),
            (0xab80, 0x13b0), (0xab81, 0x13b1), (0xab82, 0x13b2), (0xab83, 0x13b3), (0xab84, 0x13b4), (0xab85, 0x13b5),
            (0xab86, 0x13b6), (0xab87, 0x13b7), (0xab88, 0x13b8), (0xab89, 0x13b9), (0xab8a, 0x13ba), (0xab8b, 0x13bb),
            (0xab8c, 0x13bc), (0xab8d, 0x13bd), (0xab8e, 0x13be), (0xab8f, 0x13bf), (0xab90, 0x13c0), (0xab91, 0x13c1),
            (0xab92, 0x13c2), (0xab93, 0x13c3), (0xab94, 0x13c4), (0xab95, 0x13c5), (0xab96, 0x13c6), (0xab97, 0x13c7),
            (0xab98, 0x13c8), (0xab99, 0x13c9), (0xab9a, 0x13ca), (0xab9b, 0x13cb), (0xab9c, 0x13cc), (0xab9d, 0x13cd),
            (0xab9e, 0x13ce), (0xab9f, 0x13cf), (0xaba0, 0x13d0), (0xaba1, 0x13d1), (0xaba2, 0x13d2), (0xaba3, 0x13d3),
            (0xaba4, 0x13d4), (0xaba5, 0x13d5), (0xaba6, 0x13d6), (0xaba7, 0x13d7), (0xaba8, 0x13d8), (0xaba9, 0x13d9),
            (0xabaa, 0x13da), (0xabab, 0x13db), (0xabac, 0x13dc), (0xabad, 0x13dd), (0xabae, 0x13de), (0xabaf, 0x13df),
            (0xabb0, 0x13e0), (0xabb1, 0x13e1), (0xabb2, 0x13e2), (0xabb3, 0x13e3), (0xabb4, 0x13e4), (0xabb5, 0x13e5),
            (0xabb6, 0x13e6), (0xabb7, 0x13e7), (0xabb8, 0x13e8), (0xabb9, 0x13e9), (0xabba, 0x13ea), (0xabbb, 0x13eb),
            (0xabbc, 0x13ec), (0xabbd, 0x13ed), (0xabbe, 0x13ee), (0xabbf, 0x13ef), (0xff21, 0xff41), (0xff22, 0xff42),
            (0xff23, 0xff43), (0xff24, 0xff44), (0xff25, 0xff45), (0xff26, 0xff46), (0xff27, 0xff47), (0xff28, 0xff48),
            (0xff29, 0xff49), (0xff2a, 0xff4a), (0xff2b, 0xff4b), (0xff2c, 0xff4c), (0xff2d, 0xff4d), (0xff2e, 0xff4e),
            (0xff2f, 0xff4f), (0xff30, 0xff50), (0xff31, 0xff51), (0xff32, 0xff52), (0xff33, 0xff53), (0xff34, 0xff54),
            (0xff35, 0xff55), (0xff36, 0xff56), (0xff37, 0xff57), (0xff38, 0xff58), (0xff39, 0xff59), (0xff3a, 0xff5a),
            (0x10400, 0x10428), (0x10401, 0x10429), (0x10402, 0x1042a), (0x10403, 0x1042b), (0x10404, 0x1042c), (0x10405, 0x1042d),
            (0x10406, 0x1042e), (0x10407, 0x1042f), (0x10408, 0x10430), (0x10409, 0x10431), (0x1040a, 0x10432), (0x1040b, 0x10433),
            (0x1040c, 0x10434), (0x1040d, 0x10435), (0x1040e, 0x10436), (0x1040f, 0x10437), (0x10410, 0x10438), (0x10411, 0x10439),
            (0x10412, 0x1043a), (0x10413, 0x1043b), (0x10414, 0x1043c), (0x10415, 0x1043d), (0x10416, 0x1043e), (0x10417, 0x1043f),
            (0x10418, 0x10440), (0x10419, 0x10441), (0x1041a, 0x10442), (0x1041b, 0x10443), (0x1041c, 0x10444), (0x1041d, 0x10445),
            (0x1041e, 0x10446), (0x1041f, 0x10447), (0x10420, 0x10448), (0x10421, 0x10449), (0x10422, 0x1044a), (0x10423, 0x1044b),
            (0x10424, 0x1044c), (0x10425, 0x1044d), (0x10426, 0x1044e), (0x10427, 0x1044f), (0x104b0, 0x104d8), (0x104b1, 0x104d9),
            (0x104b2, 0x104da), (0x104b3, 0x104db), (0x104b4, 0x104dc), (0x104b5, 0x104dd), (0x104b6, 0x104de), (0x104b7, 0x104df),
            (0x104b8, 0x104e0), (0x104b9, 0x104e1), (0x104ba, 0x104e2), (0x104bb, 0x104e3), (0x104bc, 0x104e4), (0x104bd, 0x104e5),
            (0x104be, 0x104e6), (0x104bf, 0x104e7), (0x104c0, 0x104e8), (0x104c1, 0x104e9), (0x104c2, 0x104ea), (0x104c3, 0x104eb),
            (0x104c4, 0x104ec), (0x104c5, 0x104ed), (0x104c6, 0x104ee), (0x104c7, 0x104ef), (0x104c8, 0x104f0), (0x104c9, 0x104f1),
            (0x104ca, 0x104f2), (0x104cb, 0x104f3), (0x104cc, 0x104f4), (0x104cd, 0x104f5), (0x104ce, 0x104f6), (0x104cf, 0x104f7),
            (0x104d0, 0x104f8), (0x104d1, 0x104f9), (0x104d2, 0x104fa), (0x104d3, 0x104fb), (0x10570, 0x10597), (0x10571, 0x10598),
            (0x10572, 0x10599), (0x10573, 0x1059a), (0x10574, 0x1059b), (0x10575, 0x1059c), (0x10576, 0x1059d), (0x10577, 0x1059e),
            (0x10578, 0x1059f), (0x10579, 0x105a0), (0x1057a, 0x105a1), (0x1057c, 0x105a3), (0x1057d, 0x105a4), (0x1057e, 0x105a5),
            (0x1057f, 0x105a6), (0x10580, 0x105a7), (0x10581, 0x105a8), (0x10582, 0x105a9), (0x10583, 0x105aa), (0x10584, 0x105ab),
            (0x10585, 0x105ac), (0x10586, 0x105ad), (0x10587, 0x105ae), (0x10588, 0x105af), (0x10589, 0x105b0), (0x1058a, 0x105b1),
            (0x1058c, 0x105b3), (0x1058d, 0x105b4), (0x1058e, 0x105b5), (0x1058f, 0x105b6), (0x10590, 0x105b7), (0x10591, 0x105b8),
            (0x10592, 0x105b9), (0x10594, 0x105bb), (0x10595, 0x105bc), (0x10c80, 0x10cc0), (0x10c81, 0x10cc1), (0x10c82, 0x10cc2),
            (0x10c83, 0x10cc3), (0x10c84, 0x10cc4), (0x10c85, 0x10cc5), (0x10c86, 0x10cc6), (0x10c87, 0x10cc7), (0x10c88, 0x10cc8),
            (0x10c89, 0x10cc9), (0x10c8a, 0x10cca), (0x10c8b, 0x10ccb), (0x10c8c, 0x10ccc), (0x10c8d, 0x10ccd), (0x10c8e, 0x10cce),
            (0x10c8f, 0x10ccf), (0x10c90, 0x10cd0), (0x10c91, 0x10cd1), (0x10c92, 0x10cd2), (0x10c93, 0x10cd3), (0x10c94, 0x10cd4),
            (0x10c95, 0x10cd5), (0x10c96, 0x10cd6), (0x10c97, 0x10cd7), (0x10c98, 0x10cd8), (0x10c99, 0x10cd9), (0x10c9a, 0x10cda),
            (0x10c9b, 0x10cdb), (0x10c9c, 0x10cdc), (0x10c9d, 0x10cdd), (0x10c9e, 0x10cde), (0x10c9f, 0x10cdf), (0x10ca0, 0x10ce0),
            (0x10ca1, 0x10ce1), (0x10ca2, 0x10ce2), (0x10ca3, 0x10ce3), (0x10ca4, 0x10ce4), (0x10ca5, 0x10ce5), (0x10ca6, 0x10ce6),
            (0x10ca7, 0x10ce7), (0x10ca8, 0x10ce8), (0x10ca9, 0x10ce9), (0x10caa, 0x10cea), (0x10cab, 0x10ceb), (0x10cac, 0x10cec),
            (0x10cad, 0x10ced), (0x10cae, 0x10cee), (0x10caf, 0x10cef), (0x10cb0, 0x10cf0), (0x10cb1, 0x10cf1), (0x10cb2, 0x10cf2),
            (0x118a0, 0x118c0), (0x118a1, 0x118c1), (0x118a2, 0x118c2), (0x118a3, 0x118c3), (0x118a4, 0x118c4), (0x118a5, 0x118c5),
            (0x118a6, 0x118c6), (0x118a7, 0x118c7), (0x118a8, 0x118c8), (0x118a9, 0x118c9), (0x118aa, 0x118ca), (0x118ab, 0x118cb),
            (0x118ac, 0x118cc), (0x118ad, 0x118cd), (0x118ae, 0x118ce), (0x118af, 0x118cf), (0x118b0, 0x118d0), (0x118b1, 0x118d1),
            (0x118b2, 0x118d2), (0x118b3, 0x118d3), (0x118b4, 0x118d4), (0x118b5, 0x118d5), (0x118b6, 0x118d6), (0x118b7, 0x118d7),
            (0x118b8, 0x118d8), (0x118b9, 0x118d9), (0x118ba, 0x118da), (0x118bb, 0x118db), (0x118bc, 0x118dc), (0x118bd, 0x118dd),
            (0x118be, 0x118de), (0x118bf, 0x118df), (0x16e40, 0x16e60), (0x16e41, 0x16e61), (0x16e42, 0x16e62), (0x16e43, 0x16e63),
            (0x16e44, 0x16e64), (0x16e45, 0x16e65), (0x16e46, 0x16e66), (0x16e47, 0x16e67), (0x16e48, 0x16e68), (0x16e49, 0x16e69),
            (0x16e4a, 0x16e6a), (0x16e4b, 0x16e6b), (0x16e4c, 0x16e6c), (0x16e4d, 0x16e6d), (0x16e4e, 0x16e6e), (0x16e4f, 0x16e6f),
            (0x16e50, 0x16e70), (0x16e51, 0x16e71), (0x16e52, 0x16e72), (0x16e53, 0x16e73), (0x16e54, 0x16e74), (0x16e55, 0x16e75),
            (0x16e56, 0x16e76), (0x16e57, 0x16e77), (0x16e58, 0x16e78), (0x16e59, 0x16e79), (0x16e5a, 0x16e7a), (0x16e5b, 0x16e7b),
            (0x16e5c, 0x16e7c), (0x16e5d, 0x16e7d), (0x16e5e, 0x16e7e), (0x16e5f, 0x16e7f), (0x1e900, 0x1e922), (0x1e901, 0x1e923),
            (0x1e902, 0x1e924), (0x1e903, 0x1e925), (0x1e904, 0x1e926), (0x1e905, 0x1e927), (0x1e906, 0x1e928), (0x1e907, 0x1e929),
            (0x1e908, 0x1e92a), (0x1e909, 0x1e92b), (0x1e90a, 0x1e92c), (0x1e90b, 0x1e92d), (0x1e90c, 0x1e92e), (0x1e90d, 0x1e92f),
            (0x1e90e, 0x1e930), (0x1e90f, 0x1e931), (0x1e910, 0x1e932), (0x1e911, 0x1e933), (0x1e912, 0x1e934), (0x1e913, 0x1e935),
            (0x1e914, 0x1e936), (0x1e915, 0x1e937), (0x1e916, 0x1e938), (0x1e917, 0x1e939), (0x1e918, 0x1e93a), (0x1e919, 0x1e93b),
            (0x1e91a, 0x1e93c), (0x1e91b, 0x1e93d), (0x1e91c, 0x1e93e), (0x1e91d, 0x1e93f), (0x1e91e, 0x1e940), (0x1e91f, 0x1e941),
            (0x1e920, 0x1e942), (0x1e921, 0x1e943),
        ],
        0,
    );

    pub(crate) static FULL_FOLD: ExtendedTable = ExtendedTable::from_static(
        &[
            (0xdf, Slot::new(0, 2)), (0x130, Slot::new(2, 2)), (0x149, Slot::new(4, 2)), (0x1f0, Slot::new(6, 2)),
            (0x390, Slot::new(8, 3)), (0x3b0, Slot::new(11, 3)), (0x587, Slot::new(14, 2)), (0x1e96, Slot::new(16, 2)),
            (0x1e97, Slot::new(18, 2)), (0x1e98, Slot::new(20, 2)), (0x1e99, Slot::new(22, 2)), (0x1e9a, Slot::new(24, 2)),
            (0x1e9e, Slot::new(26, 2)), (0x1f50, Slot::new(28, 2)), (0x1f52, Slot::new(30, 3)), (0x1f54, Slot::new(33, 3)),
            (0x1f56, Slot::new(36, 3)), (0x1f80, Slot::new(39, 2)), (0x1f81, Slot::new(41, 2)), (0x1f82, Slot::new(43, 2)),
            (0x1f83, Slot::new(45, 2)), (0x1f84, Slot::new(47, 2)), (0x1f85, Slot::new(49, 2)), (0x1f86, Slot::new(51, 2)),
            (0x1f87, Slot::new(53, 2)), (0x1f88, Slot::new(55, 2)), (0x1f89, Slot::new(57, 2)), (0x1f8a, Slot::new(59, 2)),
            (0x1f8b, Slot::new(61, 2)), (0x1f8c, Slot::new(63, 2)), (0x1f8d, Slot::new(65, 2)), (0x1f8e, Slot::new(67, 2)),
            (0x1f8f, Slot::new(69, 2)), (0x1f90, Slot::new(71, 2)), (0x1f91, Slot::new(73, 2)), (0x1f92, Slot::new(75, 2)),
            (0x1f93, Slot::new(77, 2)), (0x1f94, Slot::new(79, 2)), (0x1f95, Slot::new(81, 2)), (0x1f96, Slot::new(83, 2)),
            (0x1f97, Slot::new(85, 2)), (0x1f98, Slot::new(87, 2)), (0x1f99, Slot::new(89, 2)), (0x1f9a, Slot::new(91, 2)),
            (0x1f9b, Slot::new(93, 2)), (0x1f9c, Slot::new(95, 2)), (0x1f9d, Slot::new(97, 2)), (0x1f9e, Slot::new(99, 2)),
            (0x1f9f, Slot::new(101, 2)), (0x1fa0, Slot::new(103, 2)), (0x1fa1, Slot::new(105, 2)), (0x1fa2, Slot::new(107, 2)),
            (0x1fa3, Slot::new(109, 2)), (0x1fa4, Slot::new(111, 2)), (0x1fa5, Slot::new(113, 2)), (0x1fa6, Slot::new(115, 2)),
            (0x1fa7, Slot::new(117, 2)), (0x1fa8, Slot::new(119, 2)), (0x1fa9, Slot::new(121, 2)), (0x1faa, Slot::new(123, 2)),
            (0x1fab, Slot::new(125, 2)), (0x1fac, Slot::new(127, 2)), (0x1fad, Slot::new(129, 2)), (0x1fae, Slot::new(131, 2)),
            (0x1faf, Slot::new(133, 2)), (0x1fb2, Slot::new(135, 2)), (0x1fb3, Slot::new(137, 2)), (0x1fb4, Slot::new(139, 2)),
            (0x1fb6, Slot::new(141, 2)), (0x1fb7, Slot::new(143, 3)), (0x1fbc, Slot::new(146, 2)), (0x1fc2, Slot::new(148, 2)),
            (0x1fc3, Slot::new(150, 2)), (0x1fc4, Slot::new(152, 2)), (0x1fc6, Slot::new(154, 2)), (0x1fc7, Slot::new(156, 3)),
            (0x1fcc, Slot::new(159, 2)), (0x1fd2, Slot::new(161, 3)), (0x1fd3, Slot::new(164, 3)), (0x1fd6, Slot::new(167, 2)),
            (0x1fd7, Slot::new(169, 3)), (0x1fe2, Slot::new(172, 3)), (0x1fe3, Slot::new(175, 3)), (0x1fe4, Slot::new(178, 2)),
            (0x1fe6, Slot::new(180, 2)), (0x1fe7, Slot::new(182, 3)), (0x1ff2, Slot::new(185, 2)), (0x1ff3, Slot::new(187, 2)),
            (0x1ff4, Slot::new(189, 2)), (0x1ff6, Slot::new(191, 2)), (0x1ff7, Slot::new(193, 3)), (0x1ffc, Slot::new(196, 2)),
            (0xfb00, Slot::new(198, 2)), (0xfb01, Slot::new(200, 2)), (0xfb02, Slot::new(202, 2)), (0xfb03, Slot::new(204, 3)),
            (0xfb04, Slot::new(207, 3)), (0xfb05, Slot::new(210, 2)), (0xfb06, Slot::new(212, 2)), (0xfb13, Slot::new(214, 2)),
            (0xfb14, Slot::new(216, 2)), (0xfb15, Slot::new(218, 2)), (0xfb16, Slot::new(220, 2)), (0xfb17, Slot::new(222, 2)),
        ],
        &[
            0x73, 0x73, 0x69, 0x307, 0x2bc, 0x6e, 0x6a, 0x30c, 0x3b9, 0x308,
            0x301, 0x3c5, 0x308, 0x301, 0x565, 0x582, 0x68, 0x331, 0x74, 0x308,
            0x77, 0x30a, 0x79, 0x30a, 0x61, 0x2be, 0x73, 0x73, 0x3c5, 0x313,
            0x3c5, 0x313, 0x300, 0x3c5, 0x313, 0x301, 0x3c5, 0x313, 0x342, 0x1f00,
            0x3b9, 0x1f01, 0x3b9, 0x1f02, 0x3b9, 0x1f03, 0x3b9, 0x1f04, 0x3b9, 0x1f05,
            0x3b9, 0x1f06, 0x3b9, 0x1f07, 0x3b9, 0x1f00, 0x3b9, 0x1f01, 0x3b9, 0x1f02,
            0x3b9, 0x1f03, 0x3b9, 0x1f04, 0x3b9, 0x1f05, 0x3b9, 0x1f06, 0x3b9, 0x1f07,
            0x3b9, 0x1f20, 0x3b9, 0x1f21, 0x3b9, 0x1f22, 0x3b9, 0x1f23, 0x3b9, 0x1f24,
            0x3b9, 0x1f25, 0x3b9, 0x1f26, 0x3b9, 0x1f27, 0x3b9, 0x1f20, 0x3b9, 0x1f21,
            0x3b9, 0x1f22, 0x3b9, 0x1f23, 0x3b9, 0x1f24, 0x3b9, 0x1f25, 0x3b9, 0x1f26,
            0x3b9, 0x1f27, 0x3b9, 0x1f60, 0x3b9, 0x1f61, 0x3b9, 0x1f62, 0x3b9, 0x1f63,
            0x3b9, 0x1f64, 0x3b9, 0x1f65, 0x3b9, 0x1f66, 0x3b9, 0x1f67, 0x3b9, 0x1f60,
            0x3b9, 0x1f61, 0x3b9, 0x1f62, 0x3b9, 0x1f63, 0x3b9, 0x1f64, 0x3b9, 0x1f65,
            0x3b9, 0x1f66, 0x3b9, 0x1f67, 0x3b9, 0x1f70, 0x3b9, 0x3b1, 0x3b9, 0x3ac,
            0x3b9, 0x3b1, 0x342, 0x3b1, 0x342, 0x3b9, 0x3b1, 0x3b9, 0x1f74, 0x3b9,
            0x3b7, 0x3b9, 0x3ae, 0x3b9, 0x3b7, 0x342, 0x3b7, 0x342, 0x3b9, 0x3b7,
            0x3b9, 0x3b9, 0x308, 0x300, 0x3b9, 0x308, 0x301, 0x3b9, 0x342, 0x3b9,
            0x308, 0x342, 0x3c5, 0x308, 0x300, 0x3c5, 0x308, 0x301, 0x3c1, 0x313,
            0x3c5, 0x342, 0x3c5, 0x308, 0x342, 0x1f7c, 0x3b9, 0x3c9, 0x3b9, 0x3ce,
            0x3b9, 0x3c9, 0x342, 0x3c9, 0x342, 0x3b9, 0x3c9, 0x3b9, 0x66, 0x66,
            0x66, 0x69, 0x66, 0x6c, 0x66, 0x66, 0x69, 0x66, 0x66, 0x6c,
            0x73, 0x74, 0x73, 0x74, 0x574, 0x576, 0x574, 0x565, 0x574, 0x56b,
            0x57e, 0x576, 0x574, 0x56d,
        ],
    );

}

pub(crate) mod decomposition {
    use crate::table::{ExtendedTable, Slot, SparseSet};

    pub(crate) static CANONICAL: ExtendedTable = ExtendedTable::from_static(
        &[
            (0xc0, Slot::new(0, 2)), (0xc1, Slot::new(2, 2)), (0xc2, Slot::new(4, 2)), (0xc3, Slot::new(6, 2)),
            (0xc4, Slot::new(8, 2)), (0xc5, Slot::new(10, 2)), (0xc7, Slot::new(12, 2)), (0xc8, Slot::new(14, 2)),
            (0xc9, Slot::new(16, 2)), (0xca, Slot::new(18, 2)), (0xcb, Slot::new(20, 2)), (0xcc, Slot::new(22, 2)),
            (0xcd, Slot::new(24, 2)), (0xce, Slot::new(26, 2)), (0xcf, Slot::new(28, 2)), (0xd1, Slot::new(30, 2)),
            (0xd2, Slot::new(32, 2)), (0xd3, Slot::new(34, 2)), (0xd4, Slot::new(36, 2)), (0xd5, Slot::new(38, 2)),
            (0xd6, Slot::new(40, 2)), (0xd9, Slot::new(42, 2)), (0xda, Slot::new(44, 2)), (0xdb, Slot::new(46, 2)),
            (0xdc, Slot::new(48, 2)), (0xdd, Slot::new(50, 2)), (0xe0, Slot::new(52, 2)), (0xe1, Slot::new(54, 2)),
            (0xe2, Slot::new(56, 2)), (0xe3, Slot::new(58, 2)), (0xe4, Slot::new(60, 2)), (0xe5, Slot::new(62, 2)),
            (0xe7, Slot::new(64, 2)), (0xe8, Slot::new(66, 2)), (0xe9, Slot::new(68, 2)), (0xea, Slot::new(70, 2)),
            (0xeb, Slot::new(72, 2)), (0xec, Slot::new(74, 2)), (0xed, Slot::new(76, 2)), (0xee, Slot::new(78, 2)),
            (0xef, Slot::new(80, 2)), (0xf1, Slot::new(82, 2)), (0xf2, Slot::new(84, 2)), (0xf3, Slot::new(86, 2)),
            (0xf4, Slot::new(88, 2)), (0xf5, Slot::new(90, 2)), (0xf6, Slot::new(92, 2)), (0xf9, Slot::new(94, 2)),
            (0xfa, Slot::new(96, 2)), (0xfb, Slot::new(98, 2)), (0xfc, Slot::new(100, 2)), (0xfd, Slot::new(102, 2)),
            (0xff, Slot::new(104, 2)), (0x100, Slot::new(106, 2)), (0x101, Slot::new(108, 2)), (0x102, Slot::new(110, 2)),
            (0x103, Slot::new(112, 2)), (0x104, Slot::new(114, 2)), (0x105, Slot::new(116, 2)), (0x106, Slot::new(118, 2)),
            (0x107, Slot::new(120, 2)), (0x108, Slot::new(122, 2)), (0x109, Slot::new(124, 2)), (0x10a, Slot::new(126, 2)),
            (0x10b, Slot::new(128, 2)), (0x10c, Slot::new(130, 2)), (0x10d, Slot::new(132, 2)), (0x10e, Slot::new(134, 2)),
            (0x10f, Slot::new(136, 2)), (0x112, Slot::new(138, 2)), (0x113, Slot::new(140, 2)), (0x114, Slot::new(142, 2)),
            (0x115, Slot::new(144, 2)), (0x116, Slot::new(146, 2)), (0x117, Slot::new(148, 2)), (0x118, Slot::new(150, 2)),
            (0x119, Slot::new(152, 2)), (0x11a, Slot::new(154, 2)), (0x11b, Slot::new(156, 2)), (0x11c, Slot::new(158, 2)),
            (0x11d, Slot::new(160, 2)), (0x11e, Slot::new(162, 2)), (0x11f, Slot::new(164, 2)), (0x120, Slot::new(166, 2)),
            (0x121, Slot::new(168, 2)), (0x122, Slot::new(170, 2)), (0x123, Slot::new(172, 2)), (0x124, Slot::new(174, 2)),
            (0x125, Slot::new(176, 2)), (0x128, Slot::new(178, 2)), (0x129, Slot::new(180, 2)), (0x12a, Slot::new(182, 2)),
            (0x12b, Slot::new(184, 2)), (0x12c, Slot::new(186, 2)), (0x12d, Slot::new(188, 2)), (0x12e, Slot::new(190, 2)),
            (0x12f, Slot::new(192, 2)), (0x130, Slot::new(194, 2)), (0x134, Slot::new(196, 2)), (0x135, Slot::new(198, 2)),
            (0x136, Slot::new(200, 2)), (0x137, Slot::new(202, 2)), (0x139, Slot::new(204, 2)), (0x13a, Slot::new(206, 2)),
            (0x13b, Slot::new(208, 2)), (0x13c, Slot::new(210, 2)), (0x13d, Slot::new(212, 2)), (0x13e, Slot::new(214, 2)),
            (0x143, Slot::new(216, 2)), (0x144, Slot::new(218, 2)), (0x145, Slot::new(220, 2)), (0x146, Slot::new(222, 2)),
            (0x147, Slot::new(224, 2)), (0x148, Slot::new(226, 2)), (0x14c, Slot::new(228, 2)), (0x14d, Slot::new(230, 2)),
            (0x14e, Slot::new(232, 2)), (0x14f, Slot::new(234, 2)), (0x150, Slot::new(236, 2)), (0x151, Slot::new(238, 2)),
            (0x154, Slot::new(240, 2)), (0x155, Slot::new(242, 2)), (0x156, Slot::new(244, 2)), (0x157, Slot::new(246, 2)),
            (0x158, Slot::new(248, 2)), (0x159, Slot::new(250, 2)), (0x15a, Slot::new(252, 2)), (0x15b, Slot::new(254, 2)),
            (0x15c, Slot::new(256, 2)), (0x15d, Slot::new(258, 2)), (0x15e, Slot::new(260, 2)), (0x15f, Slot::new(262, 2)),
            (0x160, Slot::new(264, 2)), (0x161, Slot::new(266, 2)), (0x162, Slot::new(268, 2)), (0x163, Slot::new(270, 2)),
            (0x164, Slot::new(272, 2)), (0x165, Slot::new(274, 2)), (0x168, Slot::new(276, 2)), (0x169, Slot::new(278, 2)),
            (0x16a, Slot::new(280, 2)), (0x16b, Slot::new(282, 2)), (0x16c, Slot::new(284, 2)), (0x16d, Slot::new(286, 2)),
            (0x16e, Slot::new(288, 2)), (0x16f, Slot::new(290, 2)), (0x170, Slot::new(292, 2)), (0x171, Slot::new(294, 2)),
            (0x172, Slot::new(296, 2)), (0x173, Slot::new(298, 2)), (0x174, Slot::new(300, 2)), (0x175, Slot::new(302, 2)),
            (0x176, Slot::new(304, 2)), (0x177, Slot::new(306, 2)), (0x178, Slot::new(308, 2)), (0x179, Slot::new(310, 2)),
            (0x17a, Slot::new(312, 2)), (0x17b, Slot::new(314, 2)), (0x17c, Slot::new(316, 2)), (0x17d, Slot::new(318, 2)),
            (0x17e, Slot::new(320, 2)), (0x1a0, Slot::new(322, 2)), (0x1a1, Slot::new(324, 2)), (0x1af, Slot::new(326, 2)),
            (0x1b0, Slot::new(328, 2)), (0x1cd, Slot::new(330, 2)), (0x1ce, Slot::new(332, 2)), (0x1cf, Slot::new(334, 2)),
            (0x1d0, Slot::new(336, 2)), (0x1d1, Slot::new(338, 2)), (0x1d2, Slot::new(340, 2)), (0x1d3, Slot::new(342, 2)),
            (0x1d4, Slot::new(344, 2)), (0x1d5, Slot::new(346, 2)), (0x1d6, Slot::new(348, 2)), (0x1d7, Slot::new(350, 2)),
            (0x1d8, Slot::new(352, 2)), (0x1d9, Slot::new(354, 2)), (0x1da, Slot::new(356, 2)), (0x1db, Slot::new(358, 2)),
            (0x1dc, Slot::new(360, 2)), (0x1de, Slot::new(362, 2)), (0x1df, Slot::new(364, 2)), (0x1e0, Slot::new(366, 2)),
            (0x1e1, Slot::new(368, 2)), (0x1e2, Slot::new(370, 2)), (0x1e3, Slot::new(372, 2)), (0x1e6, Slot::new(374, 2)),
            (0x1e7, Slot::new(376, 2)), (0x1e8, Slot::new(378, 2)), (0x1e9, Slot::new(380, 2)), (0x1ea, Slot::new(382, 2)),
            (0x1eb, Slot::new(384, 2)), (0x1ec, Slot::new(386, 2)), (0x1ed, Slot::new(388, 2)), (0x1ee, Slot::new(390, 2)),
            (0x1ef, Slot::new(392, 2)), (0x1f0, Slot::new(394, 2)), (0x1f4, Slot::new(396, 2)), (0x1f5, Slot::new(398, 2)),
            (0x1f8, Slot::new(400, 2)), (0x1f9, Slot::new(402, 2)), (0x1fa, Slot::new(404, 2)), (0x1fb, Slot::new(406, 2)),
            (0x1fc, Slot::new(408, 2)), (0x1fd, Slot::new(410, 2)), (0x1fe, Slot::new(412, 2)), (0x1ff, Slot::new(414, 2)),
            (0x200, Slot::new(416, 2)), (0x201, Slot::new(418, 2)), (0x202, Slot::new(420, 2)), (0x203, Slot::new(422, 2)),
            (0x204, Slot::new(424, 2)), (0x205, Slot::new(426, 2)), (0x206, Slot::new(428, 2)), (0x207, Slot::new(430, 2)),
            (0x208, Slot::new(432, 2)), (0x209, Slot::new(434, 2)), (0x20a, Slot::new(436, 2)), (0x20b, Slot::new(438, 2)),
            (0x20c, Slot::new(440, 2)), (0x20d, Slot::new(442, 2)), (0x20e, Slot::new(444, 2)), (0x20f, Slot::new(446, 2)),
            (0x210, Slot::new(448, 2)), (0x211, Slot::new(450, 2)), (0x212, Slot::new(452, 2)), (0x213, Slot::new(454, 2)),
            (0x214, Slot::new(456, 2)), (0x215, Slot::new(458, 2)), (0x216, Slot::new(460, 2)), (0x217, Slot::new(462, 2)),
            (0x218, Slot::new(464, 2)), (0x219, Slot::new(466, 2)), (0x21a, Slot::new(468, 2)), (0x21b, Slot::new(470, 2)),
            (0x21e, Slot::new(472, 2)), (0x21f, Slot::new(474, 2)), (0x226, Slot::new(476, 2)), (0x227, Slot::new(478, 2)),
            (0x228, Slot::new(480, 2)), (0x229, Slot::new(482, 2)), (0x22a, Slot::new(484, 2)), (0x22b, Slot::new(486, 2)),
            (0x22c, Slot::new(488, 2)), (0x22d, Slot::new(490, 2)), (0x22e, Slot::new(492, 2)), (0x22f, Slot::new(494, 2)),
            (0x230, Slot::new(496, 2)), (0x231, Slot::new(498, 2)), (0x232, Slot::new(500, 2)), (0x233, Slot::new(502, 2)),
            (0x340, Slot::new(504, 1)), (0x341, Slot::new(505, 1)), (0x343, Slot::new(506, 1)), (0x344, Slot::new(507, 2)),
            (0x374, Slot::new(509, 1)), (0x37e, Slot::new(510, 1)), (0x385, Slot::new(511, 2)), (0x386, Slot::new(513, 2)),
            (0x387, Slot::new(515, 1)), (0x388, Slot::new(516, 2)), (0x389, Slot::new(518, 2)), (0x38a, Slot::new(520, 2)),
            (0x38c, Slot::new(522, 2)), (0x38e, Slot::new(524, 2)), (0x38f, Slot::new(526, 2)), (0x390, Slot::new(528, 2)),
            (0x3aa, Slot::new(530, 2)), (0x3ab, Slot::new(532, 2)), (0x3ac, Slot::new(534, 2)), (0x3ad, Slot::new(536, 2)),
            (0x3ae, Slot::new(538, 2)), (0x3af, Slot::new(540, 2)), (0x3b0, Slot::new(542, 2)), (0x3ca, Slot::new(544, 2)),
            (0x3cb, Slot::new(546, 2)), (0x3cc, Slot::new(548, 2)), (0x3cd, Slot::new(550, 2)), (0x3ce, Slot::new(552, 2)),
            (0x3d3, Slot::new(554, 2)), (0x3d4, Slot::new(556, 2)), (0x400, Slot::new(558, 2)), (0x401, Slot::new(560, 2)),
            (0x403, Slot::new(562, 2)), (0x407, Slot::new(564, 2)), (0x40c, Slot::new(566, 2)), (0x40d, Slot::new(568, 2)),
            (0x40e, Slot::new(570, 2)), (0x419, Slot::new(572, 2)), (0x439, Slot::new(574, 2)), (0x450, Slot::new(576, 2)),
            (0x451, Slot::new(578, 2)), (0x453, Slot::new(580, 2)), (0x457, Slot::new(582, 2)), (0x45c, Slot::new(584, 2)),
            (0x45d, Slot::new(586, 2)), (0x45e, Slot::new(588, 2)), (0x476, Slot::new(590, 2)), (0x477, Slot::new(592, 2)),
            (0x4c1, Slot::new(594, 2)), (0x4c2, Slot::new(596, 2)), (0x4d0, Slot::new(598, 2)), (0x4d1, Slot::new(600, 2)),
            (0x4d2, Slot::new(602, 2)), (0x4d3, Slot::new(604, 2)), (0x4d6, Slot::new(606, 2)), (0x4d7, Slot::new(608, 2)),
            (0x4da, Slot::new(610, 2)), (0x4db, Slot::new(612, 2)), (0x4dc, Slot::new(614, 2)), (0x4dd, Slot::new(616, 2)),
            (0x4de, Slot::new(618, 2)), (0x4df, Slot::new(620, 2)), (0x4e2, Slot::new(622, 2)), (0x4e3, Slot::new(624, 2)),
            (0x4e4, Slot::new(626, 2)), (0x4e5, Slot::new(628, 2)), (0x4e6, Slot::new(630, 2)), (0x4e7, Slot::new(632, 2)),
            (0x4ea, Slot::new(634, 2)), (0x4eb, Slot::new(636, 2)), (0x4ec, Slot::new(638, 2)), (0x4ed, Slot::new(640, 2)),
            (0x4ee, Slot::new(642, 2)), (0x4ef, Slot::new(644, 2)), (0x4f0, Slot::new(646, 2)), (0x4f1, Slot::new(648, 2)),
            (0x4f2, Slot::new(650, 2)), (0x4f3, Slot::new(652, 2)), (0x4f4, Slot::new(654, 2)), (0x4f5, Slot::new(656, 2)),
            (0x4f8, Slot::new(658, 2)), (0x4f9, Slot::new(660, 2)), (0x622, Slot::new(662, 2)), (0x623, Slot::new(664, 2)),
            (0x624, Slot::new(666, 2)), (0x625, Slot::new(668, 2)), (0x626, Slot::new(670, 2)), (0x6c0, Slot::new(672, 2)),
            (0x6c2, Slot::new(674, 2)), (0x6d3, Slot::new(676, 2)), (0x929, Slot::new(678, 2)), (0x931, Slot::new(680, 2)),
            (0x934, Slot::new(682, 2)), (0x958, Slot::new(684, 2)), (0x959, Slot::new(686, 2)), (0x95a, Slot::new(688, 2)),
            (0x95b, Slot::new(690, 2)), (0x95c, Slot::new(692, 2)), (0x95d, Slot::new(694, 2)), (0x95e, Slot::new(696, 2)),
            (0x95f, Slot::new(698, 2)), (0x9cb, Slot::new(700, 2)), (0x9cc, Slot::new(702, 2)), (0x9dc, Slot::new(704, 2)),
            (0x9dd, Slot::new(706, 2)), (0x9df, Slot::new(708, 2)), (0xa33, Slot::new(710, 2)), (0xa36, Slot::new(712, 2)),
            (0xa59, Slot::new(714, 2)), (0xa5a, Slot::new(716, 2)), (0xa5b, Slot::new(718, 2)), (0xa5e, Slot::new(720, 2)),
            (0xb48, Slot::new(722, 2)), (0xb4b, Slot::new(724, 2)), (0xb4c, Slot::new(726, 2)), (0xb5c, Slot::new(728, 2)),
            (0xb5d, Slot::new(730, 2)), (0xb94, Slot::new(732, 2)), (0xbca, Slot::new(734, 2)), (0xbcb, Slot::new(736, 2)),
            (0xbcc, Slot::new(738, 2)), (0xc48, Slot::new(740, 2)), (0xcc0, Slot::new(742, 2)), (0xcc7, Slot::new(744, 2)),
            (0xcc8, Slot::new(746, 2)), (0xcca, Slot::new(748, 2)), (0xccb, Slot::new(750, 2)), (0xd4a, Slot::new(752, 2)),
            (0xd4b, Slot::new(754, 2)), (0xd4c, Slot::new(756, 2)), (0xdda, Slot::new(758, 2)), (0xddc, Slot::new(760, 2)),
            (0xddd, Slot::new(762, 2)), (0xdde, Slot::new(764, 2)), (0xf43, Slot::new(766, 2)), (0xf4d, Slot::new(768, 2)),
            (0xf52, Slot::new(770, 2)), (0xf57, Slot::new(772, 2)), (0xf5c, Slot::new(774, 2)), (0xf69, Slot::new(776, 2)),
            (0xf73, Slot::new(778, 2)), (0xf75, Slot::new(780, 2)), (0xf76, Slot::new(782, 2)), (0xf78, Slot::new(784, 2)),
            (0xf81, Slot::new(786, 2)), (0xf93, Slot::new(788, 2)), (0xf9d, Slot::new(790, 2)), (0xfa2, Slot::new(792, 2)),
            (0xfa7, Slot::new(794, 2)), (0xfac, Slot::new(796, 2)), (0xfb9, Slot::new(798, 2)), (0x1026, Slot::new(800, 2)),
            (0x1b06, Slot::new(802, 2)), (0x1b08, Slot::new(804, 2)), (0x1b0a, Slot::new(806, 2)), (0x1b0c, Slot::new(808, 2)),
            (0x1b0e, Slot::new(810, 2)), (0x1b12, Slot::new(812, 2)), (0x1b3b, Slot::new(814, 2)), (0x1b3d, Slot::new(816, 2)),
            (0x1b40, Slot::new(818, 2)), (0x1b41, Slot::new(820, 2)), (0x1b43, Slot::new(822, 2)), (0x1e00, Slot::new(824, 2)),
            (0x1e01, Slot::new(826, 2)), (0x1e02, Slot::new(828, 2)), (0x1e03, Slot::new(830, 2)), (0x1e04, Slot::new(832, 2)),
            (0x1e05, Slot::new(834, 2)), (0x1e06, Slot::new(836, 2)), (0x1e07, Slot::new(838, 2)), (0x1e08, Slot::new(840, 2)),
            (0x1e09, Slot::new(842, 2)), (0x1e0a, Slot::new(844, 2)), (0x1e0b, Slot::new(846, 2)), (0x1e0c, Slot::new(848, 2)),
            (0x1e0d, Slot::new(850, 2)), (0x1e0e, Slot::new(852, 2)), (0x1e0f, Slot::new(854, 2)), (0x1e10, Slot::new(856, 2)),
            (0x1e11, Slot::new(858, 2)), (0x1e12, Slot::new(860, 2)), (0x1e13, Slot::new(862, 2)), (0x1e14, Slot::new(864, 2)),
            (0x1e15, Slot::new(866, 2)), (0x1e16, Slot::new(868, 2)), (0x1e17, Slot::new(870, 2)), (0x1e18, Slot::new(872, 2)),
            (0x1e19, Slot::new(874, 2)), (0x1e1a, Slot::new(876, 2)), (0x1e1b, Slot::new(878, 2)), (0x1e1c, Slot::new(880, 2)),
            (0x1e1d, Slot::new(882, 2)), (0x1e1e, Slot::new(884, 2)), (0x1e1f, Slot::new(886, 2)), (0x1e20, Slot::new(888, 2)),
            (0x1e21, Slot::new(890, 2)), (0x1e22, Slot::new(892, 2)), (0x1e23, Slot::new(894, 2)), (0x1e24, Slot::new(896, 2)),
            (0x1e25, Slot::new(898, 2)), (0x1e26, Slot::new(900, 2)), (0x1e27, Slot::new(902, 2)), (0x1e28, Slot::new(904, 2)),
            (0x1e29, Slot::new(906, 2)), (0x1e2a, Slot::new(908, 2)), (0x1e2b, Slot::new(910, 2)), (0x1e2c, Slot::new(912, 2)),
            (0x1e2d, Slot::new(914, 2)), (0x1e2e, Slot::new(916, 2)), (0x1e2f, Slot::new(918, 2)), (0x1e30, Slot::new(920, 2)),
            (0x1e31, Slot::new(922, 2)), (0x1e32, Slot::new(924, 2)), (0x1e33, Slot::new(926, 2)), (0x1e34, Slot::new(928, 2)),
            (0x1e35, Slot::new(930, 2)), (0x1e36, Slot::new(932, 2)), (0x1e37, Slot::new(934, 2)), (0x1e38, Slot::new(936, 2)),
            (0x1e39, Slot::new(938, 2)), (0x1e3a, Slot::new(940, 2)), (0x1e3b, Slot::new(942, 2)), (0x1e3c, Slot::new(944, 2)),
            (0x1e3d, Slot::new(946, 2)), (0x1e3e, Slot::new(948, 2)), (0x1e3f, Slot::new(950, 2)), (0x1e40, Slot::new(952, 2)),
            (0x1e41, Slot::new(954, 2)), (0x1e42, Slot::new(956, 2)), (0x1e43, Slot::new(958, 2)), (0x1e44, Slot::new(960, 2)),
            (0x1e45, Slot::new(962, 2)), (0x1e46, Slot::new(964, 2)), (0x1e47, Slot::new(966, 2)), (0x1e48, Slot::new(968, 2)),
            (0x1e49, Slot::new(970, 2)), (0x1e4a, Slot::new(972, 2)), (0x1e4b, Slot::new(974, 2)), (0x1e4c, Slot::new(976, 2)),
            (0x1e4d, Slot::new(978, 2)), (0x1e4e, Slot::new(980, 2)), (0x1e4f, Slot::new(982, 2)), (0x1e50, Slot::new(984, 2)),
            (0x1e51, Slot::new(986, 2)), (0x1e52, Slot::new(988, 2)), (0x1e53, Slot::new(990, 2)), (0x1e54, Slot::new(992, 2)),
            (0x1e55, Slot::new(994, 2)), (0x1e56, Slot::new(996, 2)), (0x1e57, Slot::new(998, 2)), (0x1e58, Slot::new(1000, 2)),
            (0x1e59, Slot::new(1002, 2)), (0x1e5a, Slot::new(1004, 2)), (0x1e5b, Slot::new(1006, 2)), (0x1e5c, Slot::new(1008, 2)),
            (0x1e5d, Slot::new(1010, 2)), (0x1e5e, Slot::new(1012, 2)), (0x1e5f, Slot::new(1014, 2)), (0x1e60, Slot::new(1016, 2)),
            (0x1e61, Slot::new(1018, 2)), (0x1e62, Slot::new(1020, 2)), (0x1e63, Slot::new(1022, 2)), (0x1e64, Slot::new(1024, 2)),
            (0x1e65, Slot::new(1026, 2)), (0x1e66, Slot::new(1028, 2)), (0x1e67, Slot::new(1030, 2)), (0x1e68, Slot::new(1032, 2)),
            (0x1e69, Slot::new(1034, 2)), (0x1e6a, Slot::new(1036, 2)), (0x1e6b, Slot::new(1038, 2)), (0x1e6c, Slot::new(1040, 2)),
            (0x1e6d, Slot::new(1042, 2)), (0x1e6e, Slot::new(1044, 2)), (0x1e6f, Slot::new(1046, 2)), (0x1e70, Slot::new(1048, 2)),
            (0x1e71, Slot::new(1050, 2)), (0x1e72, Slot::new(1052, 2)), (0x1e73, Slot::new(1054, 2)), (0x1e74, Slot::new(1056, 2)),
            (0x1e75, Slot::new(1058, 2)), (0x1e76, Slot::new(1060, 2)), (0x1e77, Slot::new(1062, 2)), (0x1e78, Slot::new(1064, 2)),
            (0x1e79, Slot::new(1066, 2)), (0x1e7a, Slot::new(1068, 2)), (0x1e7b, Slot::new(1070, 2)), (0x1e7c, Slot::new(1072, 2)),
            (0x1e7d, Slot::new(1074, 2)), (0x1e7e, Slot::new(1076, 2)), (0x1e7f, Slot::new(1078, 2)), (0x1e80, Slot::new(1080, 2)),
            (0x1e81, Slot::new(1082, 2)), (0x1e82, Slot::new(1084, 2)), (0x1e83, Slot::new(1086, 2)), (0x1e84, Slot::new(1088, 2)),
            (0x1e85, Slot::new(1090, 2)), (0x1e86, Slot::new(1092, 2)), (0x1e87, Slot::new(1094, 2)), (0x1e88, Slot::new(1096, 2)),
            (0x1e89, Slot::new(1098, 2)), (0x1e8a, Slot::new(1100, 2)), (0x1e8b, Slot::new(1102, 2)), (0x1e8c, Slot::new(1104, 2)),
            (0x1e8d, Slot::new(1106, 2)), (0x1e8e, Slot::new(1108, 2)), (0x1e8f, Slot::new(1110, 2)), (0x1e90, Slot::new(1112, 2)),
            (0x1e91, Slot::new(1114, 2)), (0x1e92, Slot::new(1116, 2)), (0x1e93, Slot::new(1118, 2)), (0x1e94, Slot::new(1120, 2)),
            (0x1e95, Slot::new(1122, 2)), (0x1e96, Slot::new(1124, 2)), (0x1e97, Slot::new(1126, 2)), (0x1e98, Slot::new(1128, 2)),
            (0x1e99, Slot::new(1130, 2)), (0x1e9b, Slot::new(1132, 2)), (0x1ea0, Slot::new(1134, 2)), (0x1ea1, Slot::new(1136, 2)),
            (0x1ea2, Slot::new(1138, 2)), (0x1ea3, Slot::new(1140, 2)), (0x1ea4, Slot::new(1142, 2)), (0x1ea5, Slot::new(1144, 2)),
            (0x1ea6, Slot::new(1146, 2)), (0x1ea7, Slot::new(1148, 2)), (0x1ea8, Slot::new(1150, 2)), (0x1ea9, Slot::new(1152, 2)),
            (0x1eaa, Slot::new(1154, 2)), (0x1eab, Slot::new(1156, 2)), (0x1eac, Slot::new(1158, 2)), (0x1ead, Slot::new(1160, 2)),
            (0x1eae, Slot::new(1162, 2)), (0x1eaf, Slot::new(1164, 2)), (0x1eb0, Slot::new(1166, 2)), (0x1eb1, Slot::new(1168, 2)),
            (0x1eb2, Slot::new(1170, 2)), (0x1eb3, Slot::new(1172, 2)), (0x1eb4, Slot::new(1174, 2)), (0x1eb5, Slot::new(1176, 2)),
            (0x1eb6, Slot::new(1178, 2)), (0x1eb7, Slot::new(1180, 2)), (0x1eb8, Slot::new(1182, 2)), (0x1eb9, Slot::new(1184, 2)),
            (0x1eba, Slot::new(1186, 2)), (0x1ebb, Slot::new(1188, 2)), (0x1ebc, Slot::new(1190, 2)), (0x1ebd, Slot::new(1192, 2)),
            (0x1ebe, Slot::new(1194, 2)), (0x1ebf, Slot::new(1196, 2)), (0x1ec0, Slot::new(1198, 2)), (0x1ec1, Slot::new(1200, 2)),
            (0x1ec2, Slot::new(1202, 2)), (0x1ec3, Slot::new(1204, 2)), (0x1ec4, Slot::new(1206, 2)), (0x1ec5, Slot::new(1208, 2)),
            (0x1ec6, Slot::new(1210, 2)), (0x1ec7, Slot::new(1212, 2)), (0x1ec8, Slot::new(1214, 2)), (0x1ec9, Slot::new(1216, 2)),
            (0x1eca, Slot::new(1218, 2)), (0x1ecb, Slot::new(1220, 2)), (0x1ecc, Slot::new(1222, 2)), (0x1ecd, Slot::new(1224, 2)),
            (0x1ece, Slot::new(1226, 2)), (0x1ecf, Slot::new(1228, 2)), (0x1ed0, Slot::new(1230, 2)), (0x1ed1, Slot::new(1232, 2)),
            (0x1ed2, Slot::new(1234, 2)), (0x1ed3, Slot::new(1236, 2)), (0x1ed4, Slot::new(1238, 2)), (0x1ed5, Slot::new(1240, 2)),
            (0x1ed6, Slot::new(1242, 2)), (0x1ed7, Slot::new(1244, 2)), (0x1ed8, Slot::new(1246, 2)), (0x1ed9, Slot::new(1248, 2)),
            (0x1eda, Slot::new(1250, 2)), (0x1edb, Slot::new(1252, 2)), (0x1edc, Slot::new(1254, 2)), (0x1edd, Slot::new(1256, 2)),
            (0x1ede, Slot::new(1258, 2)), (0x1edf, Slot::new(1260, 2)), (0x1ee0, Slot::new(1262, 2)), (0x1ee1, Slot::new(1264, 2)),
            (0x1ee2, Slot::new(1266, 2)), (0x1ee3, Slot::new(1268, 2)), (0x1ee4, Slot::new(1270, 2)), (0x1ee5, Slot::new(1272, 2)),
            (0x1ee6, Slot::new(1274, 2)), (0x1ee7, Slot::new(1276, 2)), (0x1ee8, Slot::new(1278, 2)), (0x1ee9, Slot::new(1280, 2)),
            (0x1eea, Slot::new(1282, 2)), (0x1eeb, Slot::new(1284, 2)), (0x1eec, Slot::new(1286, 2)), (0x1eed, Slot::new(1288, 2)),
            (0x1eee, Slot::new(1290, 2)), (0x1eef, Slot::new(1292, 2)), (0x1ef0, Slot::new(1294, 2)), (0x1ef1, Slot::new(1296, 2)),
            (0x1ef2, Slot::new(1298, 2)), (0x1ef3, Slot::new(1300, 2)), (0x1ef4, Slot::new(1302, 2)), (0x1ef5, Slot::new(1304, 2)),
            (0x1ef6, Slot::new(1306, 2)), (0x1ef7, Slot::new(1308, 2)), (0x1ef8, Slot::new(1310, 2)), (0x1ef9, Slot::new(1312, 2)),
            (0x1f00, Slot::new(1314, 2)), (0x1f01, Slot::new(1316, 2)), (0x1f02, Slot::new(1318, 2)), (0x1f03, Slot::new(1320, 2)),
            (0x1f04, Slot::new(1322, 2)), (0x1f05, Slot::new(1324, 2)), (0x1f06, Slot::new(1326, 2)), (0x1f07, Slot::new(1328, 2)),
            (0x1f08, Slot::new(1330, 2)), (0x1f09, Slot::new(1332, 2)), (0x1f0a, Slot::new(1334, 2)), (0x1f0b, Slot::new(1336, 2)),
            (0x1f0c, Slot::new(1338, 2)), (0x1f0d, Slot::new(1340, 2)), (0x1f0e, Slot::new(1342, 2)), (0x1f0f, Slot::new(1344, 2)),
            (0x1f10, Slot::new(1346, 2)), (0x1f11, Slot::new(1348, 2)), (0x1f12, Slot::new(1350, 2)), (0x1f13, Slot::new(1352, 2)),
            (0x1f14, Slot::new(1354, 2)), (0x1f15, Slot::new(1356, 2)), (0x1f18, Slot::new(1358, 2)), (0x1f19, Slot::new(1360, 2)),
            (0x1f1a, Slot::new(1362, 2)), (0x1f1b, Slot::new(1364, 2)), (0x1f1c, Slot::new(1366, 2)), (0x1f1d, Slot::new(1368, 2)),
            (0x1f20, Slot::new(1370, 2)), (0x1f21, Slot::new(1372, 2)), (0x1f22, Slot::new(1374, 2)), (0x1f23, Slot::new(1376, 2)),
            (0x1f24, Slot::new(1378, 2)), (0x1f25, Slot::new(1380, 2)), (0x1f26, Slot::new(1382, 2)), (0x1f27, Slot::new(1384, 2)),
            (0x1f28, Slot::new(1386, 2)), (0x1f29, Slot::new(1388, 2)), (0x1f2a, Slot::new(1390, 2)), (0x1f2b, Slot::new(1392, 2)),
            (0x1f2c, Slot::new(1394, 2)), (0x1f2d, Slot::new(1396, 2)), (0x1f2e, Slot::new(1398, 2)), (0x1f2f, Slot::new(1400, 2)),
            (0x1f30, Slot::new(1402, 2)), (0x1f31, Slot::new(1404, 2)), (0x1f32, Slot::new(1406, 2)), (0x1f33, Slot::new(1408, 2)),
            (0x1f34, Slot::new(1410, 2)), (0x1f35, Slot::new(1412, 2)), (0x1f36, Slot::new(1414, 2)), (0x1f37, Slot::new(1416, 2)),
            (0x1f38, Slot::new(1418, 2)), (0x1f39, Slot::new(1420, 2)), (0x1f3a, Slot::new(1422, 2)), (0x1f3b, Slot::new(1424, 2)),
            (0x1f3c, Slot::new(1426, 2)), (0x1f3d, Slot::new(1428, 2)), (0x1f3e, Slot::new(1430, 2)), (0x1f3f, Slot::new(1432, 2)),
            (0x1f40, Slot::new(1434, 2)), (0x1f41, Slot::new(1436, 2)), (0x1f42, Slot::new(1438, 2)), (0x1f43, Slot::new(1440, 2)),
            (0x1f44, Slot::new(1442, 2)), (0x1f45, Slot::new(1444, 2)), (0x1f48, Slot::new(1446, 2)), (0x1f49, Slot::new(1448, 2)),
            (0x1f4a, Slot::new(1450, 2)), (0x1f4b, Slot::new(1452, 2)), (0x1f4c, Slot::new(1454, 2)), (0x1f4d, Slot::new(1456, 2)),
            (0x1f50, Slot::new(1458, 2)), (0x1f51, Slot::new(1460, 2)), (0x1f52, Slot::new(1462, 2)), (0x1f53, Slot::new(1464, 2)),
            (0x1f54, Slot::new(1466, 2)), (0x1f55, Slot::new(1468, 2)), (0x1f56, Slot::new(1470, 2)), (0x1f57, Slot::new(1472, 2)),
            (0x1f59, Slot::new(1474, 2)), (0x1f5b, Slot::new(1476, 2)), (0x1f5d, Slot::new(1478, 2)), (0x1f5f, Slot::new(1480, 2)),
            (0x1f60, Slot::new(1482, 2)), (0x1f61, Slot::new(1484, 2)), (0x1f62, Slot::new(1486, 2)), (0x1f63, Slot::new(1488, 2)),
            (0x1f64, Slot::new(1490, 2)), (0x1f65, Slot::new(1492, 2)), (0x1f66, Slot::new(1494, 2)), (0x1f67, Slot::new(1496, 2)),
            (0x1f68, Slot::new(1498, 2)), (0x1f69, Slot::new(1500, 2)), (0x1f6a, Slot::new(1502, 2)), (0x1f6b, Slot::new(1504, 2)),
            (0x1f6c, Slot::new(1506, 2)), (0x1f6d, Slot::new(1508, 2)), (0x1f6e, Slot::new(1510, 2)), (0x1f6f, Slot::new(1512, 2)),
            (0x1f70, Slot::new(1514, 2)), (0x1f71, Slot::new(1516, 1)), (0x1f72, Slot::new(1517, 2)), (0x1f73, Slot::new(1519, 1)),
            (0x1f74, Slot::new(1520, 2)), (0x1f75, Slot::new(1522, 1)), (0x1f76, Slot::new(1523, 2)), (0x1f77, Slot::new(1525, 1)),
            (0x1f78, Slot::new(1526, 2)), (0x1f79, Slot::new(1528, 1)), (0x1f7a, Slot::new(1529, 2)), (0x1f7b, Slot::new(1531, 1)),
            (0x1f7c, Slot::new(1532, 2)), (0x1f7d, Slot::new(1534, 1)), (0x1f80, Slot::new(1535, 2)), (0x1f81, Slot::new(1537, 2)),
            (0x1f82, Slot::new(1539, 2)), (0x1f83, Slot::new(1541, 2)), (0x1f84, Slot::new(1543, 2)), (0x1f85, Slot::new(1545, 2)),
            (0x1f86, Slot::new(1547, 2)), (0x1f87, Slot::new(1549, 2)), (0x1f88, Slot::new(1551, 2)), (0x1f89, Slot::new(1553, 2)),
            (0x1f8a, Slot::new(1555, 2)), (0x1f8b, Slot::new(1557, 2)), (0x1f8c, Slot::new(1559, 2)), (0x1f8d, Slot::new(1561, 2)),
            (0x1f8e, Slot::new(1563, 2)), (0x1f8f, Slot::new(1565, 2)), (0x1f90, Slot::new(1567, 2)), (0x1f91, Slot::new(1569, 2)),
            (0x1f92, Slot::new(1571, 2)), (0x1f93, Slot::new(1573, 2)), (0x1f94, Slot::new(1575, 2)), (0x1f95, Slot::new(1577, 2)),
            (0x1f96, Slot::new(1579, 2)), (0x1f97, Slot::new(1581, 2)), (0x1f98, Slot::new(1583, 2)), (0x1f99, Slot::new(1585, 2)),
            (0x1f9a, Slot::new(1587, 2)), (0x1f9b, Slot::new(1589, 2)), (0x1f9c, Slot::new(1591, 2)), (0x1f9d, Slot::new(1593, 2)),
            (0x1f9e, Slot::new(1595, 2)), (0x1f9f, Slot::new(1597, 2)), (0x1fa0, Slot::new(1599, 2)), (0x1fa1, Slot::new(1601, 2)),
            (0x1fa2, Slot::new(1603, 2)), (0x1fa3, Slot::new(1605, 2)), (0x1fa4, Slot::new(1607, 2)), (0x1fa5, Slot::new(1609, 2)),
            (0x1fa6, Slot::new(1611, 2)), (0x1fa7, Slot::new(1613, 2)), (0x1fa8, Slot::new(1615, 2)), (0x1fa9, Slot::new(1617, 2)),
            (0x1faa, Slot::new(1619, 2)), (0x1fab, Slot::new(1621, 2)), (0x1fac, Slot::new(1623, 2)), (0x1fad, Slot::new(1625, 2)),
            (0x1fae, Slot::new(1627, 2)), (0x1faf, Slot::new(1629, 2)), (0x1fb0, Slot::new(1631, 2)), (0x1fb1, Slot::new(1633, 2)),
            (0x1fb2, Slot::new(1635, 2)), (0x1fb3, Slot::new(1637, 2)), (0x1fb4, Slot::new(1639, 2)), (0x1fb6, Slot::new(1641, 2)),
            (0x1fb7, Slot::new(1643, 2)), (0x1fb8, Slot::new(1645, 2)), (0x1fb9, Slot::new(1647, 2)), (0x1fba, Slot::new(1649, 2)),
            (0x1fbb, Slot::new(1651, 1)), (0x1fbc, Slot::new(1652, 2)), (0x1fbe, Slot::new(1654, 1)), (0x1fc1, Slot::new(1655, 2)),
            (0x1fc2, Slot::new(1657, 2)), (0x1fc3, Slot::new(1659, 2)), (0x1fc4, Slot::new(1661, 2)), (0x1fc6, Slot::new(1663, 2)),
            (0x1fc7, Slot::new(1665, 2)), (0x1fc8, Slot::new(1667, 2)), (0x1fc9, Slot::new(1669, 1)), (0x1fca, Slot::new(1670, 2)),
            (0x1fcb, Slot::new(1672, 1)), (0x1fcc, Slot::new(1673, 2)), (0x1fcd, Slot::new(1675, 2)), (0x1fce, Slot::new(1677, 2)),
            (0x1fcf, Slot::new(1679, 2)), (0x1fd0, Slot::new(1681, 2)), (0x1fd1, Slot::new(1683, 2)), (0x1fd2, Slot::new(1685, 2)),
            (0x1fd3, Slot::new(1687, 1)), (0x1fd6, Slot::new(1688, 2)), (0x1fd7, Slot::new(1690, 2)), (0x1fd8, Slot::new(1692, 2)),
            (0x1fd9, Slot::new(1694, 2)), (0x1fda, Slot::new(1696, 2)), (0x1fdb, Slot::new(1698, 1)), (0x1fdd, Slot::new(1699, 2)),
            (0x1fde, Slot::new(1701, 2)), (0x1fdf, Slot::new(1703, 2)), (0x1fe0, Slot::new(1705, 2)), (0x1fe1, Slot::new(1707, 2)),
            (0x1fe2, Slot::new(1709, 2)), (0x1fe3, Slot::new(1711, 1)), (0x1fe4, Slot::new(1712, 2)), (0x1fe5, Slot::new(1714, 2)),
            (0x1fe6, Slot::new(1716, 2)), (0x1fe7, Slot::new(1718, 2)), (0x1fe8, Slot::new(1720, 2)), (0x1fe9, Slot::new(1722, 2)),
            (0x1fea, Slot::new(1724, 2)), (0x1feb, Slot::new(1726, 1)), (0x1fec, Slot::new(1727, 2)), (0x1fed, Slot::new(1729, 2)),
            (0x1fee, Slot::new(1731, 1)), (0x1fef, Slot::new(1732, 1)), (0x1ff2, Slot::new(1733, 2)), (0x1ff3, Slot::new(1735, 2)),
            (0x1ff4, Slot::new(1737, 2)), (0x1ff6, Slot::new(1739, 2)), (0x1ff7, Slot::new(1741, 2)), (0x1ff8, Slot::new(1743, 2)),
            (0x1ff9, Slot::new(1745, 1)), (0x1ffa, Slot::new(1746, 2)), (0x1ffb, Slot::new(1748, 1)), (0x1ffc, Slot::new(1749, 2)),
            (0x1ffd, Slot::new(1751, 1)), (0x2000, Slot::new(1752, 1)), (0x2001, Slot::new(1753, 1)), (0x2126, Slot::new(1754, 1)),
            (0x212a, Slot::new(1755, 1)), (0x212b, Slot::new(1756, 1)), (0x219a, Slot::new(1757, 2)), (0x219b, Slot::new(1759, 2)),
            (0x21ae, Slot::new(1761, 2)), (0x21cd, Slot::new(1763, 2)), (0x21ce, Slot::new(1765, 2)), (0x21cf, Slot::new(1767, 2)),
            (0x2204, Slot::new(1769, 2)), (0x2209, Slot::new(1771, 2)), (0x220c, Slot::new(1773, 2)), (0x2224, Slot::new(1775, 2)),
            (0x2226, Slot::new(1777, 2)), (0x2241, Slot::new(1779, 2)), (0x2244, Slot::new(1781, 2)), (0x2247, Slot::new(1783, 2)),
            (0x2249, Slot::new(1785, 2)), (0x2260, Slot::new(1787, 2)), (0x2262, Slot::new(1789, 2)), (0x226d, Slot::new(1791, 2)),
            (0x226e, Slot::new(1793, 2)), (0x226f, Slot::new(1795, 2)), (0x2270, Slot::new(1797, 2)), (0x2271, Slot::new(1799, 2)),
            (0x2274, Slot::new(1801, 2)), (0x2275, Slot::new(1803, 2)), (0x2278, Slot::new(1805, 2)), (0x2279, Slot::new(1807, 2)),
            (0x2280, Slot::new(1809, 2)), (0x2281, Slot::new(1811, 2)), (0x2284, Slot::new(1813, 2)), (0x2285, Slot::new(1815, 2)),
            (0x2288, Slot::new(1817, 2)), (0x2289, Slot::new(1819, 2)), (0x22ac, Slot::new(1821, 2)), (0x22ad, Slot::new(1823, 2)),
            (0x22ae, Slot::new(1825, 2)), (0x22af, Slot::new(1827, 2)), (0x22e0, Slot::new(1829, 2)), (0x22e1, Slot::new(1831, 2)),
            (0x22e2, Slot::new(1833, 2)), (0x22e3, Slot::new(1835, 2)), (0x22ea, Slot::new(1837, 2)), (0x22eb, Slot::new(1839, 2)),
            (0x22ec, Slot::new(1841, 2)), (0x22ed, Slot::new(1843, 2)), (0x2329, Slot::new(1845, 1)), (0x232a, Slot::new(1846, 1)),
            (0x2adc, Slot::new(1847, 2)), (0x304c, Slot::new(1849, 2)), (0x304e, Slot::new(1851, 2)), (0x3050, Slot::new(1853, 2)),
            (0x3052, Slot::new(1855, 2)), (0x3054, Slot::new(1857, 2)), (0x3056, Slot::new(1859, 2)), (0x3058, Slot::new(1861, 2)),
            (0x305a, Slot::new(1863, 2)), (0x305c, Slot::new(1865, 2)), (0x305e, Slot::new(1867, 2)), (0x3060, Slot::new(1869, 2)),
            (0x3062, Slot::new(1871, 2)), (0x3065, Slot::new(1873, 2)), (0x3067, Slot::new(1875, 2)), (0x3069, Slot::new(1877, 2)),
            (0x3070, Slot::new(1879, 2)), (0x3071, Slot::new(1881, 2)), (0x3073, Slot::new(1883, 2)), (0x3074, Slot::new(1885, 2)),
            (0x3076, Slot::new(1887, 2)), (0x3077, Slot::new(1889, 2)), (0x3079, Slot::new(1891, 2)), (0x307a, Slot::new(1893, 2)),
            (0x307c, Slot::new(1895, 2)), (0x307d, Slot::new(1897, 2)), (0x3094, Slot::new(1899, 2)), (0x309e, Slot::new(1901, 2)),
            (0x30ac, Slot::new(1903, 2)), (0x30ae, Slot::new(1905, 2)), (0x30b0, Slot::new(1907, 2)), (0x30b2, Slot::new(1909, 2)),
            (0x30b4, Slot::new(1911, 2)), (0x30b6, Slot::new(1913, 2)), (0x30b8, Slot::new(1915, 2)), (0x30ba, Slot::new(1917, 2)),
            (0x30bc, Slot::new(1919, 2)), (0x30be, Slot::new(1921, 2)), (0x30c0, Slot::new(1923, 2)), (0x30c2, Slot::new(1925, 2)),
            (0x30c5, Slot::new(1927, 2)), (0x30c7, Slot::new(1929, 2)), (0x30c9, Slot::new(1931, 2)), (0x30d0, Slot::new(1933, 2)),
            (0x30d1, Slot::new(1935, 2)), (0x30d3, Slot::new(1937, 2)), (0x30d4, Slot::new(1939, 2)), (0x30d6, Slot::new(1941, 2)),
            (0x30d7, Slot::new(1943, 2)), (0x30d9, Slot::new(1945, 2)), (0x30da, Slot::new(1947, 2)), (0x30dc, Slot::new(1949, 2)),
            (0x30dd, Slot::new(1951, 2)), (0x30f4, Slot::new(1953, 2)), (0x30f7, Slot::new(1955, 2)), (0x30f8, Slot::new(1957, 2)),
            (0x30f9, Slot::new(1959, 2)), (0x30fa, Slot::new(1961, 2)), (0x30fe, Slot::new(1963, 2)), (0xf900, Slot::new(1965, 1)),
            (0xf901, Slot::new(1966, 1)), (0xf902, Slot::new(1967, 1)), (0xf903, Slot::new(1968, 1)), (0xf904, Slot::new(1969, 1)),
            (0xf905, Slot::new(1970, 1)), (0xf906, Slot::new(1971, 1)), (0xf907, Slot::new(1972, 1)), (0xf908, Slot::new(1973, 1)),
            (0xf909, Slot::new(1974, 1)), (0xf90a, Slot::new(1975, 1)), (0xf90b, Slot::new(1976, 1)), (0xf90c, Slot::new(1977, 1)),
            (0xf90d, Slot::new(1978, 1)), (0xf90e, Slot::new(1979, 1)), (0xf90f, Slot::new(1980, 1)), (0xf910, Slot::new(1981, 1)),
            (0xf911, Slot::new(1982, 1)), (0xf912, Slot::new(1983, 1)), (0xf913, Slot::new(1984, 1)), (0xf914, Slot::new(1985, 1)),
            (0xf915, Slot::new(1986, 1)), (0xf916, Slot::new(1987, 1)), (0xf917, Slot::new(1988, 1)), (0xf918, Slot::new(1989, 1)),
            (0xf919, Slot::new(1990, 1)), (0xf91a, Slot::new(1991, 1)), (0xf91b, Slot::new(1992, 1)), (0xf91c, Slot::new(1993, 1)),
            (0xf91d, Slot::new(1994, 1)), (0xf91e, Slot::new(1995, 1)), (0xf91f, Slot::new(1996, 1)), (0xf920, Slot::new(1997, 1)),
            (0xf921, Slot::new(1998, 1)), (0xf922, Slot::new(1999, 1)), (0xf923, Slot::new(2000, 1)), (0xf924, Slot::new(2001, 1)),
            (0xf925, Slot::new(2002, 1)), (0xf926, Slot::new(2003, 1)), (0xf927, Slot::new(2004, 1)), (0xf928, Slot::new(2005, 1)),
            (0xf929, Slot::new(2006, 1)), (0xf92a, Slot::new(2007, 1)), (0xf92b, Slot::new(2008, 1)), (0xf92c, Slot::new(2009, 1)),
            (0xf92d, Slot::new(2010, 1)), (0xf92e, Slot::new(2011, 1)), (0xf92f, Slot::new(2012, 1)), (0xf930, Slot::new(2013, 1)),
            (0xf931, Slot::new(2014, 1)), (0xf932, Slot::new(2015, 1)), (0xf933, Slot::new(2016, 1)), (0xf934, Slot::new(2017, 1)),
            (0xf935, Slot::new(2018, 1)), (0xf936, Slot::new(2019, 1)), (0xf937, Slot::new(2020, 1)), (0xf938, Slot::new(2021, 1)),
            (0xf939, Slot::new(2022, 1)), (0xf93a, Slot::new(2023, 1)), (0xf93b, Slot::new(2024, 1)), (0xf93c, Slot::new(2025, 1)),
            (0xf93d, Slot::new(2026, 1)), (0xf93e, Slot::new(2027, 1)), (0xf93f, Slot::new(2028, 1)), (0xf940, Slot::new(2029, 1)),
            (0xf941, Slot::new(2030, 1)), (0xf942, Slot::new(2031, 1)), (0xf943, Slot::new(2032, 1)), (0xf944, Slot::new(2033, 1)),
            (0xf945, Slot::new(2034, 1)), (0xf946, Slot::new(2035, 1)), (0xf947, Slot::new(2036, 1)), (0xf948, Slot::new(2037, 1)),
            (0xf949, Slot::new(2038, 1)), (0xf94a, Slot::new(2039, 1)), (0xf94b, Slot::new(2040, 1)), (0xf94c, Slot::new(2041, 1)),
            (0xf94d, Slot::new(2042, 1)), (0xf94e, Slot::new(2043, 1)), (0xf94f, Slot::new(2044, 1)), (0xf950, Slot::new(2045, 1)),
            (0xf951, Slot::new(2046, 1)), (0xf952, Slot::new(2047, 1)), (0xf953, Slot::new(2048, 1)), (0xf954, Slot::new(2049, 1)),
            (0xf955, Slot::new(2050, 1)), (0xf956, Slot::new(2051, 1)), (0xf957, Slot::new(2052, 1)), (0xf958, Slot::new(2053, 1)),
            (0xf959, Slot::new(2054, 1)), (0xf95a, Slot::new(2055, 1)), (0xf95b, Slot::new(2056, 1)), (0xf95c, Slot::new(2057, 1)),
            (0xf95d, Slot::new(2058, 1)), (0xf95e, Slot::new(2059, 1)), (0xf95f, Slot::new(2060, 1)), (0xf960, Slot::new(2061, 1)),
            (0xf961, Slot::new(2062, 1)), (0xf962, Slot::new(2063, 1)), (0xf963, Slot::new(2064, 1)), (0xf964, Slot::new(2065, 1)),
            (0xf965, Slot::new(2066, 1)), (0xf966, Slot::new(2067, 1)), (0xf967, Slot::new(2068, 1)), (0xf968, Slot::new(2069, 1)),
            (0xf969, Slot::new(2070, 1)), (0xf96a, Slot::new(2071, 1)), (0xf96b, Slot::new(2072, 1)), (0xf96c, Slot::new(2073, 1)),
            (0xf96d, Slot::new(2074, 1)), (0xf96e, Slot::new(2075, 1)), (0xf96f, Slot::new(2076, 1)), (0xf970, Slot::new(2077, 1)),
            (0xf971, Slot::new(2078, 1)), (0xf972, Slot::new(2079, 1)), (0xf973, Slot::new(2080, 1)), (0xf974, Slot::new(2081, 1)),
            (0xf975, Slot::new(2082, 1)), (0xf976, Slot::new(2083, 1)), (0xf977, Slot::new(2084, 1)), (0xf978, Slot::new(2085, 1)),
            (0xf979, Slot::new(2086, 1)), (0xf97a, Slot::new(2087, 1)), (0xf97b, Slot::new(2088, 1)), (0xf97c, Slot::new(2089, 1)),
            (0xf97d, Slot::new(2090, 1)), (0xf97e, Slot::new(2091, 1)), (0xf97f, Slot::new(2092, 1)), (0xf980, Slot::new(2093, 1)),
            (0xf981, Slot::new(2094, 1)), (0xf982, Slot::new(2095, 1)), (0xf983, Slot::new(2096, 1)), (0xf984, Slot::new(2097, 1)),
            (0xf985, Slot::new(2098, 1)), (0xf986, Slot::new(2099, 1)), (0xf987, Slot::new(2100, 1)), (0xf988, Slot::new(2101, 1)),
            (0xf989, Slot::new(2102, 1)), (0xf98a, Slot::new(2103, 1)), (0xf98b, Slot::new(2104, 1)), (0xf98c, Slot::new(2105, 1)),
            (0xf98d, Slot::new(2106, 1)), (0xf98e, Slot::new(2107, 1)), (0xf98f, Slot::new(2108, 1)), (0xf990, Slot::new(2109, 1)),
            (0xf991, Slot::new(2110, 1)), (0xf992, Slot::new(2111, 1)), (0xf993, Slot::new(2112, 1)), (0xf994, Slot::new(2113, 1)),
            (0xf995, Slot::new(2114, 1)), (0xf996, Slot::new(2115, 1)), (0xf997, Slot::new(2116, 1)), (0xf998, Slot::new(2117, 1)),
            (0xf999, Slot::new(2118, 1)), (0xf99a, Slot::new(2119, 1)), (0xf99b, Slot::new(2120, 1)), (0xf99c, Slot::new(2121, 1)),
            (0xf99d, Slot::new(2122, 1)), (0xf99e, Slot::new(2123, 1)), (0xf99f, Slot::new(2124, 1)), (0xf9a0, Slot::new(2125, 1)),
            (0xf9a1, Slot::new(2126, 1)), (0xf9a2, Slot::new(2127, 1)), (0xf9a3, Slot::new(2128, 1)), (0xf9a4, Slot::new(2129, 1)),
            (0xf9a5, Slot::new(2130, 1)), (0xf9a6, Slot::new(2131, 1)), (0xf9a7, Slot::new(2132, 1)), (0xf9a8, Slot::new(2133, 1)),
            (0xf9a9, Slot::new(2134, 1)), (0xf9aa, Slot::new(2135, 1)), (0xf9ab, Slot::new(2136, 1)), (0xf9ac, Slot::new(2137, 1)),
            (0xf9ad, Slot::new(2138, 1)), (0xf9ae, Slot::new(2139, 1)), (0xf9af, Slot::new(2140, 1)), (0xf9b0, Slot::new(2141, 1)),
            (0xf9b1, Slot::new(2142, 1)), (0xf9b2, Slot::new(2143, 1)), (0xf9b3, Slot::new(2144, 1)), (0xf9b4, Slot::new(2145, 1)),
            (0xf9b5, Slot::new(2146, 1)), (0xf9b6, Slot::new(2147, 1)), (0xf9b7, Slot::new(2148, 1)), (0xf9b8, Slot::new(2149, 1)),
            (0xf9b9, Slot::new(2150, 1)), (0xf9ba, Slot::new(2151, 1)), (0xf9bb, Slot::new(2152, 1)), (0xf9bc, Slot::new(2153, 1)),
            (0xf9bd, Slot::new(2154, 1)), (0xf9be, Slot::new(2155, 1)), (0xf9bf, Slot::new(2156, 1)), (0xf9c0, Slot::new(2157, 1)),
            (0xf9c1, Slot::new(2158, 1)), (0xf9c2, Slot::new(2159, 1)), (0xf9c3, Slot::new(2160, 1)), (0xf9c4, Slot::new(2161, 1)),
            (0xf9c5, Slot::new(2162, 1)), (0xf9c6, Slot::new(2163, 1)), (0xf9c7, Slot::new(2164, 1)), (0xf9c8, Slot::new(2165, 1)),
            (0xf9c9, Slot::new(2166, 1)), (0xf9ca, Slot::new(2167, 1)), (0xf9cb, Slot::new(2168, 1)), (0xf9cc, Slot::new(2169, 1)),
            (0xf9cd, Slot::new(2170, 1)), (0xf9ce, Slot::new(2171, 1)), (0xf9cf, Slot::new(2172, 1)), (0xf9d0, Slot::new(2173, 1)),
            (0xf9d1, Slot::new(2174, 1)), (0xf9d2, Slot::new(2175, 1)), (0xf9d3, Slot::new(2176, 1)), (0xf9d4, Slot::new(2177, 1)),
            (0xf9d5, Slot::new(2178, 1)), (0xf9d6, Slot::new(2179, 1)), (0xf9d7, Slot::new(2180, 1)), (0xf9d8, Slot::new(2181, 1)),
            (0xf9d9, Slot::new(2182, 1)), (0xf9da, Slot::new(2183, 1)), (0xf9db, Slot::new(2184, 1)), (0xf9dc, Slot::new(2185, 1)),
            (0xf9dd, Slot::new(2186, 1)), (0xf9de, Slot::new(2187, 1)), (0xf9df, Slot::new(2188, 1)), (0xf9e0, Slot::new(2189, 1)),
            (0xf9e1, Slot::new(2190, 1)), (0xf9e2, Slot::new(2191, 1)), (0xf9e3, Slot::new(2192, 1)), (0xf9e4, Slot::new(2193, 1)),
            (0xf9e5, Slot::new(2194, 1)), (0xf9e6, Slot::new(2195, 1)), (0xf9e7, Slot::new(2196, 1)), (0xf9e8, Slot::new(2197, 1)),
            (0xf9e9, Slot::new(2198, 1)), (0xf9ea, Slot::new(2199, 1)), (0xf9eb, Slot::new(2200, 1)), (0xf9ec, Slot::new(2201, 1)),
            (0xf9ed, Slot::new(2202, 1)), (0xf9ee, Slot::new(2203, 1)), (0xf9ef, Slot::new(2204, 1)), (0xf9f0, Slot::new(2205, 1)),
            (0xf9f1, Slot::new(2206, 1)), (0xf9f2, Slot::new(2207, 1)), (0xf9f3, Slot::new(2208, 1)), (0xf9f4, Slot::new(2209, 1)),
            (0xf9f5, Slot::new(2210, 1)), (0xf9f6, Slot::new(2211, 1)), (0xf9f7, Slot::new(2212, 1)), (0xf9f8, Slot::new(2213, 1)),
            (0xf9f9, Slot::new(2214, 1)), (0xf9fa, Slot::new(2215, 1)), (0xf9fb, Slot::new(2216, 1)), (0xf9fc, Slot::new(2217, 1)),
            (0xf9fd, Slot::new(2218, 1)), (0xf9fe, Slot::new(2219, 1)), (0xf9ff, Slot::new(2220, 1)), (0xfa00, Slot::new(2221, 1)),
            (0xfa01, Slot::new(2222, 1)), (0xfa02, Slot::new(2223, 1)), (0xfa03, Slot::new(2224, 1)), (0xfa04, Slot::new(2225, 1)),
            (0xfa05, Slot::new(2226, 1)), (0xfa06, Slot::new(2227, 1)), (0xfa07, Slot::new(2228, 1)), (0xfa08, Slot::new(2229, 1)),
            (0xfa09, Slot::new(2230, 1)), (0xfa0a, Slot::new(2231, 1)), (0xfa0b, Slot::new(2232, 1)), (0xfa0c, Slot::new(2233, 1)),
            (0xfa0d, Slot::new(2234, 1)), (0xfa10, Slot::new(2235, 1)), (0xfa12, Slot::new(2236, 1)), (0xfa15, Slot::new(2237, 1)),
            (0xfa16, Slot::new(2238, 1)), (0xfa17, Slot::new(2239, 1)), (0xfa18, Slot::new(2240, 1)), (0xfa19, Slot::new(2241, 1)),
            (0xfa1a, Slot::new(2242, 1)), (0xfa1b, Slot::new(2243, 1)), (0xfa1c, Slot::new(2244, 1)), (0xfa1d, Slot::new(2245, 1)),
            (0xfa1e, Slot::new(2246, 1)), (0xfa20, Slot::new(2247, 1)), (0xfa22, Slot::new(2248, 1)), (0xfa25, Slot::new(2249, 1)),
            (0xfa26, Slot::new(2250, 1)), (0xfa2a, Slot::new(2251, 1)), (0xfa2b, Slot::new(2252, 1)), (0xfa2c, Slot::new(2253, 1)),
            (0xfa2d, Slot::new(2254, 1)), (0xfa2e, Slot::new(2255, 1)), (0xfa2f, Slot::new(2256, 1)), (0xfa30, Slot::new(2257, 1)),
            (0xfa31, Slot::new(2258, 1)), (0xfa32, Slot::new(2259, 1)), (0xfa33, Slot::new(2260, 1)), (0xfa34, Slot::new(2261, 1)),
            (0xfa35, Slot::new(2262, 1)), (0xfa36, Slot::new(2263, 1)), (0xfa37, Slot::new(2264, 1)), (0xfa38, Slot::new(2265, 1)),
            (0xfa39, Slot::new(2266, 1)), (0xfa3a, Slot::new(2267, 1)), (0xfa3b, Slot::new(2268, 1)), (0xfa3c, Slot::new(2269, 1)),
            (0xfa3d, Slot::new(2270, 1)), (0xfa3e, Slot::new(2271, 1)), (0xfa3f, Slot::new(2272, 1)), (0xfa40, Slot::new(2273, 1)),
            (0xfa41, Slot::new(2274, 1)), (0xfa42, Slot::new(2275, 1)), (0xfa43, Slot::new(2276, 1)), (0xfa44, Slot::new(2277, 1)),
            (0xfa45, Slot::new(2278, 1)), (0xfa46, Slot::new(2279, 1)), (0xfa47, Slot::new(2280, 1)), (0xfa48, Slot::new(2281, 1)),
            (0xfa49, Slot::new(2282, 1)), (0xfa4a, Slot::new(2283, 1)), (0xfa4b, Slot::new(2284, 1)), (0xfa4c, Slot::new(2285, 1)),
            (0xfa4d, Slot::new(2286, 1)), (0xfa4e, Slot::new(2287, 1)), (0xfa4f, Slot::new(2288, 1)), (0xfa50, Slot::new(2289, 1)),
            (0xfa51, Slot::new(2290, 1)), (0xfa52, Slot::new(2291, 1)), (0xfa53, Slot::new(2292, 1)), (0xfa54, Slot::new(2293, 1)),
            (0xfa55, Slot::new(2294, 1)), (0xfa56, Slot::new(2295, 1)), (0xfa57, Slot::new(2296, 1)), (0xfa58, Slot::new(2297, 1)),
            (0xfa59, Slot::new(2298, 1)), (0xfa5a, Slot::new(2299, 1)), (0xfa5b, Slot::new(2300, 1)), (0xfa5c, Slot::new(2301, 1)),
            (0xfa5d, Slot::new(2302, 1)), (0xfa5e, Slot::new(2303, 1)), (0xfa5f, Slot::new(2304, 1)), (0xfa60, Slot::new(2305, 1)),
            (0xfa61, Slot::new(2306, 1)), (0xfa62, Slot::new(2307, 1)), (0xfa63, Slot::new(2308, 1)), (0xfa64, Slot::new(2309, 1)),
            (0xfa65, Slot::new(2310, 1)), (0xfa66, Slot::new(2311, 1)), (0xfa67, Slot::new(2312, 1)), (0xfa68, Slot::new(2313, 1)),
            (0xfa69, Slot::new(2314, 1)), (0xfa6a, Slot::new(2315, 1)), (0xfa6b, Slot::new(2316, 1)), (0xfa6c, Slot::new(2317, 1)),
            (0xfa6d, Slot::new(2318, 1)), (0xfa70, Slot::new(2319, 1)), (0xfa71, Slot::new(2320, 1)), (0xfa72, Slot::new(2321, 1)),
            (0xfa73, Slot::new(2322, 1)), (0xfa74, Slot::new(2323, 1)), (0xfa75, Slot::new(2324, 1)), (0xfa76, Slot::new(2325, 1)),
            (0xfa77, Slot::new(2326, 1)), (0xfa78, Slot::new(2327, 1)), (0xfa79, Slot::new(2328, 1)), (0xfa7a, Slot::new(2329, 1)),
            (0xfa7b, Slot::new(2330, 1)), (0xfa7c, Slot::new(2331, 1)), (0xfa7d, Slot::new(2332, 1)), (0xfa7e, Slot::new(2333, 1)),
            (0xfa7f, Slot::new(2334, 1)), (0xfa80, Slot::new(2335, 1)), (0xfa81, Slot::new(2336, 1)), (0xfa82, Slot::new(2337, 1)),
            (0xfa83, Slot::new(2338, 1)), (0xfa84, Slot::new(2339, 1)), (0xfa85, Slot::new(2340, 1)), (0xfa86, Slot::new(2341, 1)),
            (0xfa87, Slot::new(2342, 1)), (0xfa88, Slot::new(2343, 1)), (0xfa89, Slot::new(2344, 1)), (0xfa8a, Slot::new(2345, 1)),
            (0xfa8b, Slot::new(2346, 1)), (0xfa8c, Slot::new(2347, 1)), (0xfa8d, Slot::new(2348, 1)), (0xfa8e, Slot::new(2349, 1)),
            (0xfa8f, Slot::new(2350, 1)), (0xfa90, Slot::new(2351, 1)), (0xfa91, Slot::new(2352, 1)), (0xfa92, Slot::new(2353, 1)),
            (0xfa93, Slot::new(2354, 1)), (0xfa94, Slot::new(2355, 1)), (0xfa95, Slot::new(2356, 1)), (0xfa96, Slot::new(2357, 1)),
            (0xfa97, Slot::new(2358, 1)), (0xfa98, Slot::new(2359, 1)), (0xfa99, Slot::new(2360, 1)), (0xfa9a, Slot::new(2361, 1)),
            (0xfa9b, Slot::new(2362, 1)), (0xfa9c, Slot::new(2363, 1)), (0xfa9d, Slot::new(2364, 1)), (0xfa9e, Slot::new(2365, 1)),
            (0xfa9f, Slot::new(2366, 1)), (0xfaa0, Slot::new(2367, 1)), (0xfaa1, Slot::new(2368, 1)), (0xfaa2, Slot::new(2369, 1)),
            (0xfaa3, Slot::new(2370, 1)), (0xfaa4, Slot::new(2371, 1)), (0xfaa5, Slot::new(2372, 1)), (0xfaa6, Slot::new(2373, 1)),
            (0xfaa7, Slot::new(2374, 1)), (0xfaa8, Slot::new(2375, 1)), (0xfaa9, Slot::new(2376, 1)), (0xfaaa, Slot::new(2377, 1)),
            (0xfaab, Slot::new(2378, 1)), (0xfaac, Slot::new(2379, 1)), (0xfaad, Slot::new(2380, 1)), (0xfaae, Slot::new(2381, 1)),
            (0xfaaf, Slot::new(2382, 1)), (0xfab0, Slot::new(2383, 1)), (0xfab1, Slot::new(2384, 1)), (0xfab2, Slot::new(2385, 1)),
            (0xfab3, Slot::new(2386, 1)), (0xfab4, Slot::new(2387, 1)), (0xfab5, Slot::new(2388, 1)), (0xfab6, Slot::new(2389, 1)),
            (0xfab7, Slot::new(2390, 1)), (0xfab8, Slot::new(2391, 1)), (0xfab9, Slot::new(2392, 1)), (0xfaba, Slot::new(2393, 1)),
            (0xfabb, Slot::new(2394, 1)), (0xfabc, Slot::new(2395, 1)), (0xfabd, Slot::new(2396, 1)), (0xfabe, Slot::new(2397, 1)),
            (0xfabf, Slot::new(2398, 1)), (0xfac0, Slot::new(2399, 1)), (0xfac1, Slot::new(2400, 1)), (0xfac2, Slot::new(2401, 1)),
            (0xfac3, Slot::new(2402, 1)), (0xfac4, Slot::new(2403, 1)), (0xfac5, Slot::new(2404, 1)), (0xfac6, Slot::new(2405, 1)),
            (0xfac7, Slot::new(2406, 1)), (0xfac8, Slot::new(2407, 1)), (0xfac9, Slot::new(2408, 1)), (0xfaca, Slot::new(2409, 1)),
            (0xfacb, Slot::new(2410, 1)), (0xfacc, Slot::new(2411, 1)), (0xfacd, Slot::new(2412, 1)), (0xface, Slot::new(2413, 1)),
            (0xfacf, Slot::new(2414, 1)), (0xfad0, Slot::new(2415, 1)), (0xfad1, Slot::new(2416, 1)), (0xfad2, Slot::new(2417, 1)),
            (0xfad3, Slot::new(2418, 1)), (0xfad4, Slot::new(2419, 1)), (0xfad5, Slot::new(2420, 1)), (0xfad6, Slot::new(2421, 1)),
            (0xfad7, Slot::new(2422, 1)), (0xfad8, Slot::new(2423, 1)), (0xfad9, Slot::new(2424, 1)), (0xfb1d, Slot::new(2425, 2)),
            (0xfb1f, Slot::new(2427, 2)), (0xfb2a, Slot::new(2429, 2)), (0xfb2b, Slot::new(2431, 2)), (0xfb2c, Slot::new(2433, 2)),
            (0xfb2d, Slot::new(2435, 2)), (0xfb2e, Slot::new(2437, 2)), (0xfb2f, Slot::new(2439, 2)), (0xfb30, Slot::new(2441, 2)),
            (0xfb31, Slot::new(2443, 2)), (0xfb32, Slot::new(2445, 2)), (0xfb33, Slot::new(2447, 2)), (0xfb34, Slot::new(2449, 2)),
            (0xfb35, Slot::new(2451, 2)), (0xfb36, Slot::new(2453, 2)), (0xfb38, Slot::new(2455, 2)), (0xfb39, Slot::new(2457, 2)),
            (0xfb3a, Slot::new(2459, 2)), (0xfb3b, Slot::new(2461, 2)), (0xfb3c, Slot::new(2463, 2)), (0xfb3e, Slot::new(2465, 2)),
            (0xfb40, Slot::new(2467, 2)), (0xfb41, Slot::new(2469, 2)), (0xfb43, Slot::new(2471, 2)), (0xfb44, Slot::new(2473, 2)),
            (0xfb46, Slot::new(2475, 2)), (0xfb47, Slot::new(2477, 2)), (0xfb48, Slot::new(2479, 2)), (0xfb49, Slot::new(2481, 2)),
            (0xfb4a, Slot::new(2483, 2)), (0xfb4b, Slot::new(2485, 2)), (0xfb4c, Slot::new(2487, 2)), (0xfb4d, Slot::new(2489, 2)),
            (0xfb4e, Slot::new(2491, 2)), (0x1109a, Slot::new(2493, 2)), (0x1109c, Slot::new(2495, 2)), (0x110ab, Slot::new(2497, 2)),
            (0x1112e, Slot::new(2499, 2)), (0x1112f, Slot::new(2501, 2)), (0x1134b, Slot::new(2503, 2)), (0x1134c, Slot::new(2505, 2)),
            (0x114bb, Slot::new(2507, 2)), (0x114bc, Slot::new(2509, 2)), (0x114be, Slot::new(2511, 2)), (0x115ba, Slot::new(2513, 2)),
            (0x115bb, Slot::new(2515, 2)), (0x11938, Slot::new(2517, 2)), (0x1d15e, Slot::new(2519, 2)), (0x1d15f, Slot::new(2521, 2)),
            (0x1d160, Slot::new(2523, 2)), (0x1d161, Slot::new(2525, 2)), (0x1d162, Slot::new(2527, 2)), (0x1d163, Slot::new(2529, 2)),
            (0x1d164, Slot::new(2531, 2)), (0x1d1bb, Slot::new(2533, 2)), (0x1d1bc, Slot::new(2535, 2)), (0x1d1bd, Slot::new(2537, 2)),
            (0x1d1be, Slot::new(2539, 2)), (0x1d1bf, Slot::new(2541, 2)), (0x1d1c0, Slot::new(2543, 2)), (0x2f800, Slot::new(2545, 1)),
            (0x2f801, Slot::new(2546, 1)), (0x2f802, Slot::new(2547, 1)), (0x2f803, Slot::new(2548, 1)), (0x2f804, Slot::new(2549, 1)),
            (0x2f805, Slot::new(2550, 1)), (0x2f806, Slot::new(2551, 1)), (0x2f807, Slot::new(2552, 1)), (0x2f808, Slot::new(2553, 1)),
            (0x2f809, Slot::new(2554, 1)), (0x2f80a, Slot::new(2555, 1)), (0x2f80b, Slot::new(2556, 1)), (0x2f80c, Slot::new(2557, 1)),
            (0x2f80d, Slot::new(2558, 1)), (0x2f80e, Slot::new(2559, 1)), (0x2f80f, Slot::new(2560, 1)), (0x2f810, Slot::new(2561, 1)),
            (0x2f811, Slot::new(2562, 1)), (0x2f812, Slot::new(2563, 1)), (0x2f813, Slot::new(2564, 1)), (0x2f814, Slot::new(2565, 1)),
            (0x2f815, Slot::new(2566, 1)), (0x2f816, Slot::new(2567, 1)), (0x2f817, Slot::new(2568, 1)), (0x2f818, Slot::new(2569, 1)),
            (0x2f819, Slot::new(2570, 1)), (0x2f81a, Slot::new(2571, 1)), (0x2f81b, Slot::new(2572, 1)), (0x2f81c, Slot::new(2573, 1)),
            (0x2f81d, Slot::new(2574, 1)), (0x2f81e, Slot::new(2575, 1)), (0x2f81f, Slot::new(2576, 1)), (0x2f820, Slot::new(2577, 1)),
            (0x2f821, Slot::new(2578, 1)), (0x2f822, Slot::new(2579, 1)), (0x2f823, Slot::new(2580, 1)), (0x2f824, Slot::new(2581, 1)),
            (0x2f825, Slot::new(2582, 1)), (0x2f826, Slot::new(2583, 1)), (0x2f827, Slot::new(2584, 1)), (0x2f828, Slot::new(2585, 1)),
            (0x2f829, Slot::new(2586, 1)), (0x2f82a, Slot::new(2587, 1)), (0x2f82b, Slot::new(2588, 1)), (0x2f82c, Slot::new(2589, 1)),
            (0x2f82d, Slot::new(2590, 1)), (0x2f82e, Slot::new(2591, 1)), (0x2f82f, Slot::new(2592, 1)), (0x2f830, Slot::new(2593, 1)),
            (0x2f831, Slot::new(2594, 1)), (0x2f832, Slot::new(2595, 1)), (0x2f833, Slot::new(2596, 1)), (0x2f834, Slot::new(2597, 1)),
            (0x2f835, Slot::new(2598, 1)), (0x2f836, Slot::new(2599, 1)), (0x2f837, Slot::new(2600, 1)), (0x2f838, Slot::new(2601, 1)),
            (0x2f839, Slot::new(2602, 1)), (0x2f83a, Slot::new(2603, 1)), (0x2f83b, Slot::new(2604, 1)), (0x2f83c, Slot::new(2605, 1)),
            (0x2f83d, Slot::new(2606, 1)), (0x2f83e, Slot::new(2607, 1)), (0x2f83f, Slot::new(2608, 1)), (0x2f840, Slot::new(2609, 1)),
            (0x2f841, Slot::new(2610, 1)), (0x2f842, Slot::new(2611, 1)), (0x2f843, Slot::new(2612, 1)), (0x2f844, Slot::new(2613, 1)),
            (0x2f845, Slot::new(2614, 1)), (0x2f846, Slot::new(2615, 1)), (0x2f847, Slot::new(2616, 1)), (0x2f848, Slot::new(2617, 1)),
            (0x2f849, Slot::new(2618, 1)), (0x2f84a, Slot::new(2619, 1)), (0x2f84b, Slot::new(2620, 1)), (0x2f84c, Slot::new(2621, 1)),
            (0x2f84d, Slot::new(2622, 1)), (0x2f84e, Slot::new(2623, 1)), (0x2f84f, Slot::new(2624, 1)), (0x2f850, Slot::new(2625, 1)),
            (0x2f851, Slot::new(2626, 1)), (0x2f852, Slot::new(2627, 1)), (0x2f853, Slot::new(2628, 1)), (0x2f854, Slot::new(2629, 1)),
            (0x2f855, Slot::new(2630, 1)), (0x2f856, Slot::new(2631, 1)), (0x2f857, Slot::new(2632, 1)), (0x2f858, Slot::new(2633, 1)),
            (0x2f859, Slot::new(2634, 1)), (0x2f85a, Slot::new(2635, 1)), (0x2f85b, Slot::new(2636, 1)), (0x2f85c, Slot::new(2637, 1)),
            (0x2f85d, Slot::new(2638, 1)), (0x2f85e, Slot::new(2639, 1)), (0x2f85f, Slot::new(2640, 1)), (0x2f860, Slot::new(2641, 1)),
            (0x2f861, Slot::new(2642, 1)), (0x2f862, Slot::new(2643, 1)), (0x2f863, Slot::new(2644, 1)), (0x2f864, Slot::new(2645, 1)),
            (0x2f865, Slot::new(2646, 1)), (0x2f866, Slot::new(2647, 1)), (0x2f867, Slot::new(2648, 1)), (0x2f868, Slot::new(2649, 1)),
            (0x2f869, Slot::new(2650, 1)), (0x2f86a, Slot::new(2651, 1)), (0x2f86b, Slot::new(2652, 1)), (0x2f86c, Slot::new(2653, 1)),
            (0x2f86d, Slot::new(2654, 1)), (0x2f86e, Slot::new(2655, 1)), (0x2f86f, Slot::new(2656, 1)), (0x2f870, Slot::new(2657, 1)),
            (0x2f871, Slot::new(2658, 1)), (0x2f872, Slot::new(2659, 1)), (0x2f873, Slot::new(2660, 1)), (0x2f874, Slot::new(2661, 1)),
            (0x2f875, Slot::new(2662, 1)), (0x2f876, Slot::new(2663, 1)), (0x2f877, Slot::new(2664, 1)), (0x2f878, Slot::new(2665, 1)),
            (0x2f879, Slot::new(2666, 1)), (0x2f87a, Slot::new(2667, 1)), (0x2f87b, Slot::new(2668, 1)), (0x2f87c, Slot::new(2669, 1)),
            (0x2f87d, Slot::new(2670, 1)), (0x2f87e, Slot::new(2671, 1)), (0x2f87f, Slot::new(2672, 1)), (0x2f880, Slot::new(2673, 1)),
            (0x2f881, Slot::new(2674, 1)), (0x2f882, Slot::new(2675, 1)), (0x2f883, Slot::new(2676, 1)), (0x2f884, Slot::new(2677, 1)),
            (0x2f885, Slot::new(2678, 1)), (0x2f886, Slot::new(2679, 1)), (0x2f887, Slot::new(2680, 1)), (0x2f888, Slot::new(2681, 1)),
            (0x2f889, Slot::new(2682, 1)), (0x2f88a, Slot::new(2683, 1)), (0x2f88b, Slot::new(2684, 1)), (0x2f88c, Slot::new(2685, 1)),
            (0x2f88d, Slot::new(2686, 1)), (0x2f88e, Slot::new(2687, 1)), (0x2f88f, Slot::new(2688, 1)), (0x2f890, Slot::new(2689, 1)),
            (0x2f891, Slot::new(2690, 1)), (0x2f892, Slot::new(2691, 1)), (0x2f893, Slot::new(2692, 1)), (0x2f894, Slot::new(2693, 1)),
            (0x2f895, Slot::new(2694, 1)), (0x2f896, Slot::new(2695, 1)), (0x2f897, Slot::new(2696, 1)), (0x2f898, Slot::new(2697, 1)),
            (0x2f899, Slot::new(2698, 1)), (0x2f89a, Slot::new(2699, 1)), (0x2f89b, Slot::new(2700, 1)), (0x2f89c, Slot::new(2701, 1)),
            (0x2f89d, Slot::new(2702, 1)), (0x2f89e, Slot::new(2703, 1)), (0x2f89f, Slot::new(2704, 1)), (0x2f8a0, Slot::new(2705, 1)),
            (0x2f8a1, Slot::new(2706, 1)), (0x2f8a2, Slot::new(2707, 1)), (0x2f8a3, Slot::new(2708, 1)), (0x2f8a4, Slot::new(2709, 1)),
            (0x2f8a5, Slot::new(2710, 1)), (0x2f8a6, Slot::new(2711, 1)), (0x2f8a7, Slot::new(2712, 1)), (0x2f8a8, Slot::new(2713, 1)),
            (0x2f8a9, Slot::new(2714, 1)), (0x2f8aa, Slot::new(2715, 1)), (0x2f8ab, Slot::new(2716, 1)), (0x2f8ac, Slot::new(2717, 1)),
            (0x2f8ad, Slot::new(2718, 1)), (0x2f8ae, Slot::new(2719, 1)), (0x2f8af, Slot::new(2720, 1)), (0x2f8b0, Slot::new(2721, 1)),
            (0x2f8b1, Slot::new(2722, 1)), (0x2f8b2, Slot::new(2723, 1)), (0x2f8b3, Slot::new(2724, 1)), (0x2f8b4, Slot::new(2725, 1)),
            (0x2f8b5, Slot::new(2726, 1)), (0x2f8b6, Slot::new(2727, 1)), (0x2f8b7, Slot::new(2728, 1)), (0x2f8b8, Slot::new(2729, 1)),
            (0x2f8b9, Slot::new(2730, 1)), (0x2f8ba, Slot::new(2731, 1)), (0x2f8bb, Slot::new(2732, 1)), (0x2f8bc, Slot::new(2733, 1)),
            (0x2f8bd, Slot::new(2734, 1)), (0x2f8be, Slot::new(2735, 1)), (0x2f8bf, Slot::new(2736, 1)), (0x2f8c0, Slot::new(2737, 1)),
            (0x2f8c1, Slot::new(2738, 1)), (0x2f8c2, Slot::new(2739, 1)), (0x2f8c3, Slot::new(2740, 1)), (0x2f8c4, Slot::new(2741, 1)),
            (0x2f8c5, Slot::new(2742, 1)), (0x2f8c6, Slot::new(2743, 1)), (0x2f8c7, Slot::new(2744, 1)), (0x2f8c8, Slot::new(2745, 1)),
            (0x2f8c9, Slot::new(2746, 1)), (0x2f8ca, Slot::new(2747, 1)), (0x2f8cb, Slot::new(2748, 1)), (0x2f8cc, Slot::new(2749, 1)),
            (0x2f8cd, Slot::new(2750, 1)), (0x2f8ce, Slot::new(2751, 1)), (0x2f8cf, Slot::new(2752, 1)), (0x2f8d0, Slot::new(2753, 1)),
            (0x2f8d1, Slot::new(2754, 1)), (0x2f8d2, Slot::new(2755, 1)), (0x2f8d3, Slot::new(2756, 1)), (0x2f8d4, Slot::new(2757, 1)),
            (0x2f8d5, Slot::new(2758, 1)), (0x2f8d6, Slot::new(2759, 1)), (0x2f8d7, Slot::new(2760, 1)), (0x2f8d8, Slot::new(2761, 1)),
            (0x2f8d9, Slot::new(2762, 1)), (0x2f8da, Slot::new(2763, 1)), (0x2f8db, Slot::new(2764, 1)), (0x2f8dc, Slot::new(2765, 1)),
            (0x2f8dd, Slot::new(2766, 1)), (0x2f8de, Slot::new(2767, 1)), (0x2f8df, Slot::new(2768, 1)), (0x2f8e0, Slot::new(2769, 1)),
            (0x2f8e1, Slot::new(2770, 1)), (0x2f8e2, Slot::new(2771, 1)), (0x2f8e3, Slot::new(2772, 1)), (0x2f8e4, Slot::new(2773, 1)),
            (0x2f8e5, Slot::new(2774, 1)), (0x2f8e6, Slot::new(2775, 1)), (0x2f8e7, Slot::new(2776, 1)), (0x2f8e8, Slot::new(2777, 1)),
            (0x2f8e9, Slot::new(2778, 1)), (0x2f8ea, Slot::new(2779, 1)), (0x2f8eb, Slot::new(2780, 1)), (0x2f8ec, Slot::new(2781, 1)),
            (0x2f8ed, Slot::new(2782, 1)), (0x2f8ee, Slot::new(2783, 1)), (0x2f8ef, Slot::new(2784, 1)), (0x2f8f0, Slot::new(2785, 1)),
            (0x2f8f1, Slot::new(2786, 1)), (0x2f8f2, Slot::new(2787, 1)), (0x2f8f3, Slot::new(2788, 1)), (0x2f8f4, Slot::new(2789, 1)),
            (0x2f8f5, Slot::new(2790, 1)), (0x2f8f6, Slot::new(2791, 1)), (0x2f8f7, Slot::new(2792, 1)), (0x2f8f8, Slot::new(2793, 1)),
            (0x2f8f9, Slot::new(2794, 1)), (0x2f8fa, Slot::new(2795, 1)), (0x2f8fb, Slot::new(2796, 1)), (0x2f8fc, Slot::new(2797, 1)),
            (0x2f8fd, Slot::new(2798, 1)), (0x2f8fe, Slot::new(2799, 1)), (0x2f8ff, Slot::new(2800, 1)), (0x2f900, Slot::new(2801, 1)),
            (0x2f901, Slot::new(2802, 1)), (0x2f902, Slot::new(2803, 1)), (0x2f903, Slot::new(2804, 1)), (0x2f904, Slot::new(2805, 1)),
            (0x2f905, Slot::new(2806, 1)), (0x2f906, Slot::new(2807, 1)), (0x2f907, Slot::new(2808, 1)), (0x2f908, Slot::new(2809, 1)),
            (0x2f909, Slot::new(2810, 1)), (0x2f90a, Slot::new(2811, 1)), (0x2f90b, Slot::new(2812, 1)), (0x2f90c, Slot::new(2813, 1)),
            (0x2f90d, Slot::new(2814, 1)), (0x2f90e, Slot::new(2815, 1)), (0x2f90f, Slot::new(2816, 1)), (0x2f910, Slot::new(2817, 1)),
            (0x2f911, Slot::new(2818, 1)), (0x2f912, Slot::new(2819, 1)), (0x2f913, Slot::new(2820, 1)), (0x2f914, Slot::new(2821, 1)),
            (0x2f915, Slot::new(2822, 1)), (0x2f916, Slot::new(2823, 1)), (0x2f917, Slot::new(2824, 1)), (0x2f918, Slot::new(2825, 1)),
            (0x2f919, Slot::new(2826, 1)), (0x2f91a, Slot::new(2827, 1)), (0x2f91b, Slot::new(2828, 1)), (0x2f91c, Slot::new(2829, 1)),
            (0x2f91d, Slot::new(2830, 1)), (0x2f91e, Slot::new(2831, 1)), (0x2f91f, Slot::new(2832, 1)), (0x2f920, Slot::new(2833, 1)),
            (0x2f921, Slot::new(2834, 1)), (0x2f922, Slot::new(2835, 1)), (0x2f923, Slot::new(2836, 1)), (0x2f924, Slot::new(2837, 1)),
            (0x2f925, Slot::new(2838, 1)), (0x2f926, Slot::new(2839, 1)), (0x2f927, Slot::new(2840, 1)), (0x2f928, Slot::new(2841, 1)),
            (0x2f929, Slot::new(2842, 1)), (0x2f92a, Slot::new(2843, 1)), (0x2f92b, Slot::new(2844, 1)), (0x2f92c, Slot::new(2845, 1)),
            (0x2f92d, Slot::new(2846, 1)), (0x2f92e, Slot::new(2847, 1)), (0x2f92f, Slot::new(2848, 1)), (0x2f930, Slot::new(2849, 1)),
            (0x2f931, Slot::new(2850, 1)), (0x2f932, Slot::new(2851, 1)), (0x2f933, Slot::new(2852, 1)), (0x2f934, Slot::new(2853, 1)),
            (0x2f935, Slot::new(2854, 1)), (0x2f936, Slot::new(2855, 1)), (0x2f937, Slot::new(2856, 1)), (0x2f938, Slot::new(2857, 1)),
            (0x2f939, Slot::new(2858, 1)), (0x2f93a, Slot::new(2859, 1)), (0x2f93b, Slot::new(2860, 1)), (0x2f93c, Slot::new(2861, 1)),
            (0x2f93d, Slot::new(2862, 1)), (0x2f93e, Slot::new(2863, 1)), (0x2f93f, Slot::new(2864, 1)), (0x2f940, Slot::new(2865, 1)),
            (0x2f941, Slot::new(2866, 1)), (0x2f942, Slot::new(2867, 1)), (0x2f943, Slot::new(2868, 1)), (0x2f944, Slot::new(2869, 1)),
            (0x2f945, Slot::new(2870, 1)), (0x2f946, Slot::new(2871, 1)), (0x2f947, Slot::new(2872, 1)), (0x2f948, Slot::new(2873, 1)),
            (0x2f949, Slot::new(2874, 1)), (0x2f94a, Slot::new(2875, 1)), (0x2f94b, Slot::new(2876, 1)), (0x2f94c, Slot::new(2877, 1)),
            (0x2f94d, Slot::new(2878, 1)), (0x2f94e, Slot::new(2879, 1)), (0x2f94f, Slot::new(2880, 1)), (0x2f950, Slot::new(2881, 1)),
            (0x2f951, Slot::new(2882, 1)), (0x2f952, Slot::new(2883, 1)), (0x2f953, Slot::new(2884, 1)), (0x2f954, Slot::new(2885, 1)),
            (0x2f955, Slot::new(2886, 1)), (0x2f956, Slot::new(2887, 1)), (0x2f957, Slot::new(2888, 1)), (0x2f958, Slot::new(2889, 1)),
            (0x2f959, Slot::new(2890, 1)), (0x2f95a, Slot::new(2891, 1)), (0x2f95b, Slot::new(2892, 1)), (0x2f95c, Slot::new(2893, 1)),
            (0x2f95d, Slot::new(2894, 1)), (0x2f95e, Slot::new(2895, 1)), (0x2f95f, Slot::new(2896, 1)), (0x2f960, Slot::new(2897, 1)),
            (0x2f961, Slot::new(2898, 1)), (0x2f962, Slot::new(2899, 1)), (0x2f963, Slot::new(2900, 1)), (0x2f964, Slot::new(2901, 1)),
            (0x2f965, Slot::new(2902, 1)), (0x2f966, Slot::new(2903, 1)), (0x2f967, Slot::new(2904, 1)), (0x2f968, Slot::new(2905, 1)),
            (0x2f969, Slot::new(2906, 1)), (0x2f96a, Slot::new(2907, 1)), (0x2f96b, Slot::new(2908, 1)), (0x2f96c, Slot::new(2909, 1)),
            (0x2f96d, Slot::new(2910, 1)), (0x2f96e, Slot::new(2911, 1)), (0x2f96f, Slot::new(2912, 1)), (0x2f970, Slot::new(2913, 1)),
            (0x2f971, Slot::new(2914, 1)), (0x2f972, Slot::new(2915, 1)), (0x2f973, Slot::new(2916, 1)), (0x2f974, Slot::new(2917, 1)),
            (0x2f975, Slot::new(2918, 1)), (0x2f976, Slot::new(2919, 1)), (0x2f977, Slot::new(2920, 1)), (0x2f978, Slot::new(2921, 1)),
            (0x2f979, Slot::new(2922, 1)), (0x2f97a, Slot::new(2923, 1)), (0x2f97b, Slot::new(2924, 1)), (0x2f97c, Slot::new(2925, 1)),
            (0x2f97d, Slot::new(2926, 1)), (0x2f97e, Slot::new(2927, 1)), (0x2f97f, Slot::new(2928, 1)), (0x2f980, Slot::new(2929, 1)),
            (0x2f981, Slot::new(2930, 1)), (0x2f982, Slot::new(2931, 1)), (0x2f983, Slot::new(2932, 1)), (0x2f984, Slot::new(2933, 1)),
            (0x2f985, Slot::new(2934, 1)), (0x2f986, Slot::new(2935, 1)), (0x2f987, Slot::new(2936, 1)), (0x2f988, Slot::new(2937, 1)),
            (0x2f989, Slot::new(2938, 1)), (0x2f98a, Slot::new(2939, 1)), (0x2f98b, Slot::new(2940, 1)), (0x2f98c, Slot::new(2941, 1)),
            (0x2f98d, Slot::new(2942, 1)), (0x2f98e, Slot::new(2943, 1)), (0x2f98f, Slot::new(2944, 1)), (0x2f990, Slot::new(2945, 1)),
            (0x2f991, Slot::new(2946, 1)), (0x2f992, Slot::new(2947, 1)), (0x2f993, Slot::new(2948, 1)), (0x2f994, Slot::new(2949, 1)),
            (0x2f995, Slot::new(2950, 1)), (0x2f996, Slot::new(2951, 1)), (0x2f997, Slot::new(2952, 1)), (0x2f998, Slot::new(2953, 1)),
            (0x2f999, Slot::new(2954, 1)), (0x2f99a, Slot::new(2955, 1)), (0x2f99b, Slot::new(2956, 1)), (0x2f99c, Slot::new(2957, 1)),
            (0x2f99d, Slot::new(2958, 1)), (0x2f99e, Slot::new(2959, 1)), (0x2f99f, Slot::new(2960, 1)), (0x2f9a0, Slot::new(2961, 1)),
            (0x2f9a1, Slot::new(2962, 1)), (0x2f9a2, Slot::new(2963, 1)), (0x2f9a3, Slot::new(2964, 1)), (0x2f9a4, Slot::new(2965, 1)),
            (0x2f9a5, Slot::new(2966, 1)), (0x2f9a6, Slot::new(2967, 1)), (0x2f9a7, Slot::new(2968, 1)), (0x2f9a8, Slot::new(2969, 1)),
            (0x2f9a9, Slot::new(2970, 1)), (0x2f9aa, Slot::new(2971, 1)), (0x2f9ab, Slot::new(2972, 1)), (0x2f9ac, Slot::new(2973, 1)),
            (0x2f9ad, Slot::new(2974, 1)), (0x2f9ae, Slot::new(2975, 1)), (0x2f9af, Slot::new(2976, 1)), (0x2f9b0, Slot::new(2977, 1)),
            (0x2f9b1, Slot::new(2978, 1)), (0x2f9b2, Slot::new(2979, 1)), (0x2f9b3, Slot::new(2980, 1)), (0x2f9b4, Slot::new(2981, 1)),
            (0x2f9b5, Slot::new(2982, 1)), (0x2f9b6, Slot::new(2983, 1)), (0x2f9b7, Slot::new(2984, 1)), (0x2f9b8, Slot::new(2985, 1)),
            (0x2f9b9, Slot::new(2986, 1)), (0x2f9ba, Slot::new(2987, 1)), (0x2f9bb, Slot::new(2988, 1)), (0x2f9bc, Slot::new(2989, 1)),
            (0x2f9bd, Slot::new(2990, 1)), (0x2f9be, Slot::new(2991, 1)), (0x2f9bf, Slot::new(2992, 1)), (0x2f9c0, Slot::new(2993, 1)),
            (0x2f9c1, Slot::new(2994, 1)), (0x2f9c2, Slot::new(2995, 1)), (0x2f9c3, Slot::new(2996, 1)), (0x2f9c4, Slot::new(2997, 1)),
            (0x2f9c5, Slot::new(2998, 1)), (0x2f9c6, Slot::new(2999, 1)), (0x2f9c7, Slot::new(3000, 1)), (0x2f9c8, Slot::new(3001, 1)),
            (0x2f9c9, Slot::new(3002, 1)), (0x2f9ca, Slot::new(3003, 1)), (0x2f9cb, Slot::new(3004, 1)), (0x2f9cc, Slot::new(3005, 1)),
            (0x2f9cd, Slot::new(3006, 1)), (0x2f9ce, Slot::new(3007, 1)), (0x2f9cf, Slot::new(3008, 1)), (0x2f9d0, Slot::new(3009, 1)),
            (0x2f9d1, Slot::new(3010, 1)), (0x2f9d2, Slot::new(3011, 1)), (0x2f9d3, Slot::new(3012, 1)), (0x2f9d4, Slot::new(3013, 1)),
            (0x2f9d5, Slot::new(3014, 1)), (0x2f9d6, Slot::new(3015, 1)), (0x2f9d7, Slot::new(3016, 1)), (0x2f9d8, Slot::new(3017, 1)),
            (0x2f9d9, Slot::new(3018, 1)), (0x2f9da, Slot::new(3019, 1)), (0x2f9db, Slot::new(3020, 1)), (0x2f9dc, Slot::new(3021, 1)),
            (0x2f9dd, Slot::new(3022, 1)), (0x2f9de, Slot::new(3023, 1)), (0x2f9df, Slot::new(3024, 1)), (0x2f9e0, Slot::new(3025, 1)),
            (0x2f9e1, Slot::new(3026, 1)), (0x2f9e2, Slot::new(3027, 1)), (0x2f9e3, Slot::new(3028, 1)), (0x2f9e4, Slot::new(3029, 1)),
            (0x2f9e5, Slot::new(3030, 1)), (0x2f9e6, Slot::new(3031, 1)), (0x2f9e7, Slot::new(3032, 1)), (0x2f9e8, Slot::new(3033, 1)),
            (0x2f9e9, Slot::new(3034, 1)), (0x2f9ea, Slot::new(3035, 1)), (0x2f9eb, Slot::new(3036, 1)), (0x2f9ec, Slot::new(3037, 1)),
            (0x2f9ed, Slot::new(3038, 1)), (0x2f9ee, Slot::new(3039, 1)), (0x2f9ef, Slot::new(3040, 1)), (0x2f9f0, Slot::new(3041, 1)),
            (0x2f9f1, Slot::new(3042, 1)), (0x2f9f2, Slot::new(3043, 1)), (0x2f9f3, Slot::new(3044, 1)), (0x2f9f4, Slot::new(3045, 1)),
            (0x2f9f5, Slot::new(3046, 1)), (0x2f9f6, Slot::new(3047, 1)), (0x2f9f7, Slot::new(3048, 1)), (0x2f9f8, Slot::new(3049, 1)),
            (0x2f9f9, Slot::new(3050, 1)), (0x2f9fa, Slot::new(3051, 1)), (0x2f9fb, Slot::new(3052, 1)), (0x2f9fc, Slot::new(3053, 1)),
            (0x2f9fd, Slot::new(3054, 1)), (0x2f9fe, Slot::new(3055, 1)), (0x2f9ff, Slot::new(3056, 1)), (0x2fa00, Slot::new(3057, 1)),
            (0x2fa01, Slot::new(3058, 1)), (0x2fa02, Slot::new(3059, 1)), (0x2fa03, Slot::new(3060, 1)), (0x2fa04, Slot::new(3061, 1)),
            (0x2fa05, Slot::new(3062, 1)), (0x2fa06, Slot::new(3063, 1)), (0x2fa07, Slot::new(3064, 1)), (0x2fa08, Slot::new(3065, 1)),
            (0x2fa09, Slot::new(3066, 1)), (0x2fa0a, Slot::new(3067, 1)), (0x2fa0b, Slot::new(3068, 1)), (0x2fa0c, Slot::new(3069, 1)),
            (0x2fa0d, Slot::new(3070, 1)), (0x2fa0e, Slot::new(3071, 1)), (0x2fa0f, Slot::new(3072, 1)), (0x2fa10, Slot::new(3073, 1)),
            (0x2fa11, Slot::new(3074, 1)), (0x2fa12, Slot::new(3075, 1)), (0x2fa13, Slot::new(3076, 1)), (0x2fa14, Slot::new(3077, 1)),
            (0x2fa15, Slot::new(3078, 1)), (0x2fa16, Slot::new(3079, 1)), (0x2fa17, Slot::new(3080, 1)), (0x2fa18, Slot::new(3081, 1)),
            (0x2fa19, Slot::new(3082, 1)), (0x2fa1a, Slot::new(3083, 1)), (0x2fa1b, Slot::new(3084, 1)), (0x2fa1c, Slot::new(3085, 1)),
            (0x2fa1d, Slot::new(3086, 1)),
        ],
        &[
            0x41, 0x300, 0x41, 0x301, 0x41, 0x302, 0x41, 0x303, 0x41, 0x308,
            0x41, 0x30a, 0x43, 0x327, 0x45, 0x300, 0x45, 0x301, 0x45, 0x302,
            0x45, 0x308, 0x49, 0x300, 0x49, 0x301, 0x49, 0x302, 0x49, 0x308,
            0x4e, 0x303, 0x4f, 0x300, 0x4f, 0x301, 0x4f, 0x302, 0x4f, 0x303,
            0x4f, 0x308, 0x55, 0x300, 0x55, 0x301, 0x55, 0x302, 0x55, 0x308,
            0x59, 0x301, 0x61, 0x300, 0x61, 0x301, 0x61, 0x302, 0x61, 0x303,
            0x61, 0x308, 0x61, 0x30a, 0x63, 0x327, 0x65, 0x300, 0x65, 0x301,
            0x65, 0x302, 0x65, 0x308, 0x69, 0x300, 0x69, 0x301, 0x69, 0x302,
            0x69, 0x308, 0x6e, 0x303, 0x6f, 0x300, 0x6f, 0x301, 0x6f, 0x302,
            0x6f, 0x303, 0x6f, 0x308, 0x75, 0x300, 0x75, 0x301, 0x75, 0x302,
            0x75, 0x308, 0x79, 0x301, 0x79, 0x308, 0x41, 0x304, 0x61, 0x304,
            0x41, 0x306, 0x61, 0x306, 0x41, 0x328, 0x61, 0x328, 0x43, 0x301,
            0x63, 0x301, 0x43, 0x302, 0x63, 0x302, 0x43, 0x307, 0x63, 0x307,
            0x43, 0x30c, 0x63, 0x30c, 0x44, 0x30c, 0x64, 0x30c, 0x45, 0x304,
            0x65, 0x304, 0x45, 0x306, 0x65, 0x306, 0x45, 0x307, 0x65, 0x307,
            0x45, 0x328, 0x65, 0x328, 0x45, 0x30c, 0x65, 0x30c, 0x47, 0x302,
            0x67, 0x302, 0x47, 0x306, 0x67, 0x306, 0x47, 0x307, 0x67, 0x307,
            0x47, 0x327, 0x67, 0x327, 0x48, 0x302, 0x68, 0x302, 0x49, 0x303,
            0x69, 0x303, 0x49, 0x304, 0x69, 0x304, 0x49, 0x306, 0x69, 0x306,
            0x49, 0x328, 0x69, 0x328, 0x49, 0x307, 0x4a, 0x302, 0x6a, 0x302,
            0x4b, 0x327, 0x6b, 0x327, 0x4c, 0x301, 0x6c, 0x301, 0x4c, 0x327,
            0x6c, 0x327, 0x4c, 0x30c, 0x6c, 0x30c, 0x4e, 0x301, 0x6e, 0x301,
            0x4e, 0x327, 0x6e, 0x327, 0x4e, 0x30c, 0x6e, 0x30c, 0x4f, 0x304,
            0x6f, 0x304, 0x4f, 0x306, 0x6f, 0x306, 0x4f, 0x30b, 0x6f, 0x30b,
            0x52, 0x301, 0x72, 0x301, 0x52, 0x327, 0x72, 0x327, 0x52, 0x30c,
            0x72, 0x30c, 0x53, 0x301, 0x73, 0x301, 0x53, 0x302, 0x73, 0x302,
            0x53, 0x327, 0x73, 0x327, 0x53, 0x30c, 0x73, 0x30c, 0x54, 0x327,
            0x74, 0x327, 0x54, 0x30c, 0x74, 0x30c, 0x55, 0x303, 0x75, 0x303,
            0x55, 0x304, 0x75, 0x304, 0x55, 0x306, 0x75, 0x306, 0x55, 0x30a,
            0x75, 0x30a, 0x55, 0x30b, 0x75, 0x30b, 0x55, 0x328, 0x75, 0x328,
            0x57, 0x302, 0x77, 0x302, 0x59, 0x302, 0x79, 0x302, 0x59, 0x308,
            0x5a, 0x301, 0x7a, 0x301, 0x5a, 0x307, 0x7a, 0x307, 0x5a, 0x30c,
            0x7a, 0x30c, 0x4f, 0x31b, 0x6f, 0x31b, 0x55, 0x31b, 0x75, 0x31b,
            0x41, 0x30c, 0x61, 0x30c, 0x49, 0x30c, 0x69, 0x30c, 0x4f, 0x30c,
            0x6f, 0x30c, 0x55, 0x30c, 0x75, 0x30c, 0xdc, 0x304, 0xfc, 0x304,
            0xdc, 0x301, 0xfc, 0x301, 0xdc, 0x30c, 0xfc, 0x30c, 0xdc, 0x300,
            0xfc, 0x300, 0xc4, 0x304, 0xe4, 0x304, 0x226, 0x304, 0x227, 0x304,
            0xc6, 0x304, 0xe6, 0x304, 0x47, 0x30c, 0x67, 0x30c, 0x4b, 0x30c,
            0x6b, 0x30c, 0x4f, 0x328, 0x6f, 0x328, 0x1ea, 0x304, 0x1eb, 0x304,
            0x1b7, 0x30c, 0x292, 0x30c, 0x6a, 0x30c, 0x47, 0x301, 0x67, 0x301,
            0x4e, 0x300, 0x6e, 0x300, 0xc5, 0x301, 0xe5, 0x301, 0xc6, 0x301,
            0xe6, 0x301, 0xd8, 0x301, 0xf8, 0x301, 0x41, 0x30f, 0x61, 0x30f,
            0x41, 0x311, 0x61, 0x311, 0x45, 0x30f, 0x65, 0x30f, 0x45, 0x311,
            0x65, 0x311, 0x49, 0x30f, 0x69, 0x30f, 0x49, 0x311, 0x69, 0x311,
            0x4f, 0x30f, 0x6f, 0x30f, 0x4f, 0x311, 0x6f, 0x311, 0x52, 0x30f,
            0x72, 0x30f, 0x52, 0x311, 0x72, 0x311, 0x55, 0x30f, 0x75, 0x30f,
            0x55, 0x311, 0x75, 0x311, 0x53, 0x326, 0x73, 0x326, 0x54, 0x326,
            0x74, 0x326, 0x48, 0x30c, 0x68, 0x30c, 0x41, 0x307, 0x61, 0x307,
            0x45, 0x327, 0x65, 0x327, 0xd6, 0x304, 0xf6, 0x304, 0xd5, 0x304,
            0xf5, 0x304, 0x4f, 0x307, 0x6f, 0x307, 0x22e, 0x304, 0x22f, 0x304,
            0x59, 0x304, 0x79, 0x304, 0x300, 0x301, 0x313, 0x308, 0x301, 0x2b9,
            0x3b, 0xa8, 0x301, 0x391, 0x301, 0xb7, 0x395, 0x301, 0x397, 0x301,
            0x399, 0x301, 0x39f, 0x301, 0x3a5, 0x301, 0x3a9, 0x301, 0x3ca, 0x301,
            0x399, 0x308, 0x3a5, 0x308, 0x3b1, 0x301, 0x3b5, 0x301, 0x3b7, 0x301,
            0x3b9, 0x301, 0x3cb, 0x301, 0x3b9, 0x308, 0x3c5, 0x308, 0x3bf, 0x301,
            0x3c5, 0x301, 0x3c9, 0x301, 0x3d2, 0x301, 0x3d2, 0x308, 0x415, 0x300,
            0x415, 0x308, 0x413, 0x301, 0x406, 0x308, 0x41a, 0x301, 0x418, 0x300,
            0x423, 0x306, 0x418, 0x306, 0x438, 0x306, 0x435, 0x300, 0x435, 0x308,
            0x433, 0x301, 0x456, 0x308, 0x43a, 0x301, 0x438, 0x300, 0x443, 0x306,
            0x474, 0x30f, 0x475, 0x30f, 0x416, 0x306, 0x436, 0x306, 0x410, 0x306,
            0x430, 0x306, 0x410, 0x308, 0x430, 0x308, 0x415, 0x306, 0x435, 0x306,
            0x4d8, 0x308, 0x4d9, 0x308, 0x416, 0x308, 0x436, 0x308, 0x417, 0x308,
            0x437, 0x308, 0x418, 0x304, 0x438, 0x304, 0x418, 0x308, 0x438, 0x308,
            0x41e, 0x308, 0x43e, 0x308, 0x4e8, 0x308, 0x4e9, 0x308, 0x42d, 0x308,
            0x44d, 0x308, 0x423, 0x304, 0x443, 0x304, 0x423, 0x308, 0x443, 0x308,
            0x423, 0x30b, 0x443, 0x30b, 0x427, 0x308, 0x447, 0x308, 0x42b, 0x308,
            0x44b, 0x308, 0x627, 0x653, 0x627, 0x654, 0x648, 0x654, 0x627, 0x655,
            0x64a, 0x654, 0x6d5, 0x654, 0x6c1, 0x654, 0x6d2, 0x654, 0x928, 0x93c,
            0x930, 0x93c, 0x933, 0x93c, 0x915, 0x93c, 0x916, 0x93c, 0x917, 0x93c,
            0x91c, 0x93c, 0x921, 0x93c, 0x922, 0x93c, 0x92b, 0x93c, 0x92f, 0x93c,
            0x9c7, 0x9be, 0x9c7, 0x9d7, 0x9a1, 0x9bc, 0x9a2, 0x9bc, 0x9af, 0x9bc,
            0xa32, 0xa3c, 0xa38, 0xa3c, 0xa16, 0xa3c, 0xa17, 0xa3c, 0xa1c, 0xa3c,
            0xa2b, 0xa3c, 0xb47, 0xb56, 0xb47, 0xb3e, 0xb47, 0xb57, 0xb21, 0xb3c,
            0xb22, 0xb3c, 0xb92, 0xbd7, 0xbc6, 0xbbe, 0xbc7, 0xbbe, 0xbc6, 0xbd7,
            0xc46, 0xc56, 0xcbf, 0xcd5, 0xcc6, 0xcd5, 0xcc6, 0xcd6, 0xcc6, 0xcc2,
            0xcca, 0xcd5, 0xd46, 0xd3e, 0xd47, 0xd3e, 0xd46, 0xd57, 0xdd9, 0xdca,
            0xdd9, 0xdcf, 0xddc, 0xdca, 0xdd9, 0xddf, 0xf42, 0xfb7, 0xf4c, 0xfb7,
            0xf51, 0xfb7, 0xf56, 0xfb7, 0xf5b, 0xfb7, 0xf40, 0xfb5, 0xf71, 0xf72,
            0xf71, 0xf74, 0xfb2, 0xf80, 0xfb3, 0xf80, 0xf71, 0xf80, 0xf92, 0xfb7,
            0xf9c, 0xfb7, 0xfa1, 0xfb7, 0xfa6, 0xfb7, 0xfab, 0xfb7, 0xf90, 0xfb5,
            0x1025, 0x102e, 0x1b05, 0x1b35, 0x1b07, 0x1b35, 0x1b09, 0x1b35, 0x1b0b, 0x1b35,
            0x1b0d, 0x1b35, 0x1b11, 0x1b35, 0x1b3a, 0x1b35, 0x1b3c, 0x1b35, 0x1b3e, 0x1b35,
            0x1b3f, 0x1b35, 0x1b42, 0x1b35, 0x41, 0x325, 0x61, 0x325, 0x42, 0x307,
            0x62, 0x307, 0x42, 0x323, 0x62, 0x323, 0x42, 0x331, 0x62, 0x331,
            0xc7, 0x301, 0xe7, 0x301, 0x44, 0x307, 0x64, 0x307, 0x44, 0x323,
            0x64, 0x323, 0x44, 0x331, 0x64, 0x331, 0x44, 0x327, 0x64, 0x327,
            0x44, 0x32d, 0x64, 0x32d, 0x112, 0x300, 0x113, 0x300, 0x112, 0x301,
            0x113, 0x301, 0x45, 0x32d, 0x65, 0x32d, 0x45, 0x330, 0x65, 0x330,
            0x228, 0x306, 0x229, 0x306, 0x46, 0x307, 0x66, 0x307, 0x47, 0x304,
            0x67, 0x304, 0x48, 0x307, 0x68, 0x307, 0x48, 0x323, 0x68, 0x323,
            0x48, 0x308, 0x68, 0x308, 0x48, 0x327, 0x68, 0x327, 0x48, 0x32e,
            0x68, 0x32e, 0x49, 0x330, 0x69, 0x330, 0xcf, 0x301, 0xef, 0x301,
            0x4b, 0x301, 0x6b, 0x301, 0x4b, 0x323, 0x6b, 0x323, 0x4b, 0x331,
            0x6b, 0x331, 0x4c, 0x323, 0x6c, 0x323, 0x1e36, 0x304, 0x1e37, 0x304,
            0x4c, 0x331, 0x6c, 0x331, 0x4c, 0x32d, 0x6c, 0x32d, 0x4d, 0x301,
            0x6d, 0x301, 0x4d, 0x307, 0x6d, 0x307, 0x4d, 0x323, 0x6d, 0x323,
            0x4e, 0x307, 0x6e, 0x307, 0x4e, 0x323, 0x6e, 0x323, 0x4e, 0x331,
            0x6e, 0x331, 0x4e, 0x32d, 0x6e, 0x32d, 0xd5, 0x301, 0xf5, 0x301,
            0xd5, 0x308, 0xf5, 0x308, 0x14c, 0x300, 0x14d, 0x300, 0x14c, 0x301,
            0x14d, 0x301, 0x50, 0x301, 0x70, 0x301, 0x50, 0x307, 0x70, 0x307,
            0x52, 0x307, 0x72, 0x307, 0x52, 0x323, 0x72, 0x323, 0x1e5a, 0x304,
            0x1e5b, 0x304, 0x52, 0x331, 0x72, 0x331, 0x53, 0x307, 0x73, 0x307,
            0x53, 0x323, 0x73, 0x323, 0x15a, 0x307, 0x15b, 0x307, 0x160, 0x307,
            0x161, 0x307, 0x1e62, 0x307, 0x1e63, 0x307, 0x54, 0x307, 0x74, 0x307,
            0x54, 0x323, 0x74, 0x323, 0x54, 0x331, 0x74, 0x331, 0x54, 0x32d,
            0x74, 0x32d, 0x55, 0x324, 0x75, 0x324, 0x55, 0x330, 0x75, 0x330,
            0x55, 0x32d, 0x75, 0x32d, 0x168, 0x301, 0x169, 0x301, 0x16a, 0x308,
            0x16b, 0x308, 0x56, 0x303, 0x76, 0x303, 0x56, 0x323, 0x76, 0x323,
            0x57, 0x300, 0x77, 0x300, 0x57, 0x301, 0x77, 0x301, 0x57, 0x308,
            0x77, 0x308, 0x57, 0x307, 0x77, 0x307, 0x57, 0x323, 0x77, 0x323,
            0x58, 0x307, 0x78, 0x307, 0x58, 0x308, 0x78, 0x308, 0x59, 0x307,
            0x79, 0x307, 0x5a, 0x302, 0x7a, 0x302, 0x5a, 0x323, 0x7a, 0x323,
            0x5a, 0x331, 0x7a, 0x331, 0x68, 0x331, 0x74, 0x308, 0x77, 0x30a,
            0x79, 0x30a, 0x17f, 0x307, 0x41, 0x323, 0x61, 0x323, 0x41, 0x309,
            0x61, 0x309, 0xc2, 0x301, 0xe2, 0x301, 0xc2, 0x300, 0xe2, 0x300,
            0xc2, 0x309, 0xe2, 0x309, 0xc2, 0x303, 0xe2, 0x303, 0x1ea0, 0x302,
            0x1ea1, 0x302, 0x102, 0x301, 0x103, 0x301, 0x102, 0x300, 0x103, 0x300,
            0x102, 0x309, 0x103, 0x309, 0x102, 0x303, 0x103, 0x303, 0x1ea0, 0x306,
            0x1ea1, 0x306, 0x45, 0x323, 0x65, 0x323, 0x45, 0x309, 0x65, 0x309,
            0x45, 0x303, 0x65, 0x303, 0xca, 0x301, 0xea, 0x301, 0xca, 0x300,
            0xea, 0x300, 0xca, 0x309, 0xea, 0x309, 0xca, 0x303, 0xea, 0x303,
            0x1eb8, 0x302, 0x1eb9, 0x302, 0x49, 0x309, 0x69, 0x309, 0x49, 0x323,
            0x69, 0x323, 0x4f, 0x323, 0x6f, 0x323, 0x4f, 0x309, 0x6f, 0x309,
            0xd4, 0x301, 0xf4, 0x301, 0xd4, 0x300, 0xf4, 0x300, 0xd4, 0x309,
            0xf4, 0x309, 0xd4, 0x303, 0xf4, 0x303, 0x1ecc, 0x302, 0x1ecd, 0x302,
            0x1a0, 0x301, 0x1a1, 0x301, 0x1a0, 0x300, 0x1a1, 0x300, 0x1a0, 0x309,
            0x1a1, 0x309, 0x1a0, 0x303, 0x1a1, 0x303, 0x1a0, 0x323, 0x1a1, 0x323,
            0x55, 0x323, 0x75, 0x323, 0x55, 0x309, 0x75, 0x309, 0x1af, 0x301,
            0x1b0, 0x301, 0x1af, 0x300, 0x1b0, 0x300, 0x1af, 0x309, 0x1b0, 0x309,
            0x1af, 0x303, 0x1b0, 0x303, 0x1af, 0x323, 0x1b0, 0x323, 0x59, 0x300,
            0x79, 0x300, 0x59, 0x323, 0x79, 0x323, 0x59, 0x309, 0x79, 0x309,
            0x59, 0x303, 0x79, 0x303, 0x3b1, 0x313, 0x3b1, 0x314, 0x1f00, 0x300,
            0x1f01, 0x300, 0x1f00, 0x301, 0x1f01, 0x301, 0x1f00, 0x342, 0x1f01, 0x342,
            0x391, 0x313, 0x391, 0x314, 0x1f08, 0x300, 0x1f09, 0x300, 0x1f08, 0x301,
            0x1f09, 0x301, 0x1f08, 0x342, 0x1f09, 0x342, 0x3b5, 0x313, 0x3b5, 0x314,
            0x1f10, 0x300, 0x1f11, 0x300, 0x1f10, 0x301, 0x1f11, 0x301, 0x395, 0x313,
            0x395, 0x314, 0x1f18, 0x300, 0x1f19, 0x300, 0x1f18, 0x301, 0x1f19, 0x301,
            0x3b7, 0x313, 0x3b7, 0x314, 0x1f20, 0x300, 0x1f21, 0x300, 0x1f20, 0x301,
            0x1f21, 0x301, 0x1f20, 0x342, 0x1f21, 0x342, 0x397, 0x313, 0x397, 0x314,
            0x1f28, 0x300, 0x1f29, 0x300, 0x1f28, 0x301, 0x1f29, 0x301, 0x1f28, 0x342,
            0x1f29, 0x342, 0x3b9, 0x313, 0x3b9, 0x314, 0x1f30, 0x300, 0x1f31, 0x300,
            0x1f30, 0x301, 0x1f31, 0x301, 0x1f30, 0x342, 0x1f31, 0x342, 0x399, 0x313,
            0x399, 0x314, 0x1f38, 0x300, 0x1f39, 0x300, 0x1f38, 0x301, 0x1f39, 0x301,
            0x1f38, 0x342, 0x1f39, 0x342, 0x3bf, 0x313, 0x3bf, 0x314, 0x1f40, 0x300,
            0x1f41, 0x300, 0x1f40, 0x301, 0x1f41, 0x301, 0x39f, 0x313, 0x39f, 0x314,
            0x1f48, 0x300, 0x1f49, 0x300, 0x1f48, 0x301, 0x1f49, 0x301, 0x3c5, 0x313,
            0x3c5, 0x314, 0x1f50, 0x300, 0x1f51, 0x300, 0x1f50, 0x301, 0x1f51, 0x301,
            0x1f50, 0x342, 0x1f51, 0x342, 0x3a5, 0x314, 0x1f59, 0x300, 0x1f59, 0x301,
            0x1f59, 0x342, 0x3c9, 0x313, 0x3c9, 0x314, 0x1f60, 0x300, 0x1f61, 0x300,
            0x1f60, 0x301, 0x1f61, 0x301, 0x1f60, 0x342, 0x1f61, 0x342, 0x3a9, 0x313,
            0x3a9, 0x314, 0x1f68, 0x300, 0x1f69, 0x300, 0x1f68, 0x301, 0x1f69, 0x301,
            0x1f68, 0x342, 0x1f69, 0x342, 0x3b1, 0x300, 0x3ac, 0x3b5, 0x300, 0x3ad,
            0x3b7, 0x300, 0x3ae, 0x3b9, 0x300, 0x3af, 0x3bf, 0x300, 0x3cc, 0x3c5,
            0x300, 0x3cd, 0x3c9, 0x300, 0x3ce, 0x1f00, 0x345, 0x1f01, 0x345, 0x1f02,
            0x345, 0x1f03, 0x345, 0x1f04, 0x345, 0x1f05, 0x345, 0x1f06, 0x345, 0x1f07,
            0x345, 0x1f08, 0x345, 0x1f09, 0x345, 0x1f0a, 0x345, 0x1f0b, 0x345, 0x1f0c,
            0x345, 0x1f0d, 0x345, 0x1f0e, 0x345, 0x1f0f, 0x345, 0x1f20, 0x345, 0x1f21,
            0x345, 0x1f22, 0x345, 0x1f23, 0x345, 0x1f24, 0x345, 0x1f25, 0x345, 0x1f26,
            0x345, 0x1f27, 0x345, 0x1f28, 0x345, 0x1f29, 0x345, 0x1f2a, 0x345, 0x1f2b,
            0x345, 0x1f2c, 0x345, 0x1f2d, 0x345, 0x1f2e, 0x345, 0x1f2f, 0x345, 0x1f60,
            0x345, 0x1f61, 0x345, 0x1f62, 0x345, 0x1f63, 0x345, 0x1f64, 0x345, 0x1f65,
            0x345, 0x1f66, 0x345, 0x1f67, 0x345, 0x1f68, 0x345, 0x1f69, 0x345, 0x1f6a,
            0x345, 0x1f6b, 0x345, 0x1f6c, 0x345, 0x1f6d, 0x345, 0x1f6e, 0x345, 0x1f6f,
            0x345, 0x3b1, 0x306, 0x3b1, 0x304, 0x1f70, 0x345, 0x3b1, 0x345, 0x3ac,
            0x345, 0x3b1, 0x342, 0x1fb6, 0x345, 0x391, 0x306, 0x391, 0x304, 0x391,
            0x300, 0x386, 0x391, 0x345, 0x3b9, 0xa8, 0x342, 0x1f74, 0x345, 0x3b7,
            0x345, 0x3ae, 0x345, 0x3b7, 0x342, 0x1fc6, 0x345, 0x395, 0x300, 0x388,
            0x397, 0x300, 0x389, 0x397, 0x345, 0x1fbf, 0x300, 0x1fbf, 0x301, 0x1fbf,
            0x342, 0x3b9, 0x306, 0x3b9, 0x304, 0x3ca, 0x300, 0x390, 0x3b9, 0x342,
            0x3ca, 0x342, 0x399, 0x306, 0x399, 0x304, 0x399, 0x300, 0x38a, 0x1ffe,
            0x300, 0x1ffe, 0x301, 0x1ffe, 0x342, 0x3c5, 0x306, 0x3c5, 0x304, 0x3cb,
            0x300, 0x3b0, 0x3c1, 0x313, 0x3c1, 0x314, 0x3c5, 0x342, 0x3cb, 0x342,
            0x3a5, 0x306, 0x3a5, 0x304, 0x3a5, 0x300, 0x38e, 0x3a1, 0x314, 0xa8,
            0x300, 0x385, 0x60, 0x1f7c, 0x345, 0x3c9, 0x345, 0x3ce, 0x345, 0x3c9,
            0x342, 0x1ff6, 0x345, 0x39f, 0x300, 0x38c, 0x3a9, 0x300, 0x38f, 0x3a9,
            0x345, 0xb4, 0x2002, 0x2003, 0x3a9, 0x4b, 0xc5, 0x2190, 0x338, 0x2192,
            0x338, 0x2194, 0x338, 0x21d0, 0x338, 0x21d4, 0x338, 0x21d2, 0x338, 0x2203,
            0x338, 0x2208, 0x338, 0x220b, 0x338, 0x2223, 0x338, 0x2225, 0x338, 0x223c,
            0x338, 0x2243, 0x338, 0x2245, 0x338, 0x2248, 0x338, 0x3d, 0x338, 0x2261,
            0x338, 0x224d, 0x338, 0x3c, 0x338, 0x3e, 0x338, 0x2264, 0x338, 0x2265,
            0x338, 0x2272, 0x338, 0x2273, 0x338, 0x2276, 0x338, 0x2277, 0x338, 0x227a,
            0x338, 0x227b, 0x338, 0x2282, 0x338, 0x2283, 0x338, 0x2286, 0x338, 0x2287,
            0x338, 0x22a2, 0x338, 0x22a8, 0x338, 0x22a9, 0x338, 0x22ab, 0x338, 0x227c,
            0x338, 0x227d, 0x338, 0x2291, 0x338, 0x2292, 0x338, 0x22b2, 0x338, 0x22b3,
            0x338, 0x22b4, 0x338, 0x22b5, 0x338, 0x3008, 0x3009, 0x2add, 0x338, 0x304b,
            0x3099, 0x304d, 0x3099, 0x304f, 0x3099, 0x3051, 0x3099, 0x3053, 0x3099, 0x3055,
            0x3099, 0x3057, 0x3099, 0x3059, 0x3099, 0x305b, 0x3099, 0x305d, 0x3099, 0x305f,
            0x3099, 0x3061, 0x3099, 0x3064, 0x3099, 0x3066, 0x3099, 0x3068, 0x3099, 0x306f,
            0x3099, 0x306f, 0x309a, 0x3072, 0x3099, 0x3072, 0x309a, 0x3075, 0x3099, 0x3075,
            0x309a, 0x3078, 0x3099, 0x3078, 0x309a, 0x307b, 0x3099, 0x307b, 0x309a, 0x3046,
            0x3099, 0x309d, 0x3099, 0x30ab, 0x3099, 0x30ad, 0x3099, 0x30af, 0x3099, 0x30b1,
            0x3099, 0x30b3, 0x3099, 0x30b5, 0x3099, 0x30b7, 0x3099, 0x30b9, 0x3099, 0x30bb,
            0x3099, 0x30bd, 0x3099, 0x30bf, 0x3099, 0x30c1, 0x3099, 0x30c4, 0x3099, 0x30c6,
            0x3099, 0x30c8, 0x3099, 0x30cf, 0x3099, 0x30cf, 0x309a, 0x30d2, 0x3099, 0x30d2,
            0x309a, 0x30d5, 0x3099, 0x30d5, 0x309a, 0x30d8, 0x3099, 0x30d8, 0x309a, 0x30db,
            0x3099, 0x30db, 0x309a, 0x30a6, 0x3099, 0x30ef, 0x3099, 0x30f0, 0x3099, 0x30f1,
            0x3099, 0x30f2, 0x3099, 0x30fd, 0x3099, 0x8c48, 0x66f4, 0x8eca, 0x8cc8, 0x6ed1,
            0x4e32, 0x53e5, 0x9f9c, 0x9f9c, 0x5951, 0x91d1, 0x5587, 0x5948, 0x61f6, 0x7669,
            0x7f85, 0x863f, 0x87ba, 0x88f8, 0x908f, 0x6a02, 0x6d1b, 0x70d9, 0x73de, 0x843d,
            0x916a, 0x99f1, 0x4e82, 0x5375, 0x6b04, 0x721b, 0x862d, 0x9e1e, 0x5d50, 0x6feb,
            0x85cd, 0x8964, 0x62c9, 0x81d8, 0x881f, 0x5eca, 0x6717, 0x6d6a, 0x72fc, 0x90ce,
            0x4f86, 0x51b7, 0x52de, 0x64c4, 0x6ad3, 0x7210, 0x76e7, 0x8001, 0x8606, 0x865c,
            0x8def, 0x9732, 0x9b6f, 0x9dfa, 0x788c, 0x797f, 0x7da0, 0x83c9, 0x9304, 0x9e7f,
            0x8ad6, 0x58df, 0x5f04, 0x7c60, 0x807e, 0x7262, 0x78ca, 0x8cc2, 0x96f7, 0x58d8,
            0x5c62, 0x6a13, 0x6dda, 0x6f0f, 0x7d2f, 0x7e37, 0x964b, 0x52d2, 0x808b, 0x51dc,
            0x51cc, 0x7a1c, 0x7dbe, 0x83f1, 0x9675, 0x8b80, 0x62cf, 0x6a02, 0x8afe, 0x4e39,
            0x5be7, 0x6012, 0x7387, 0x7570, 0x5317, 0x78fb, 0x4fbf, 0x5fa9, 0x4e0d, 0x6ccc,
            0x6578, 0x7d22, 0x53c3, 0x585e, 0x7701, 0x8449, 0x8aaa, 0x6bba, 0x8fb0, 0x6c88,
            0x62fe, 0x82e5, 0x63a0, 0x7565, 0x4eae, 0x5169, 0x51c9, 0x6881, 0x7ce7, 0x826f,
            0x8ad2, 0x91cf, 0x52f5, 0x5442, 0x5973, 0x5eec, 0x65c5, 0x6ffe, 0x792a, 0x95ad,
            0x9a6a, 0x9e97, 0x9ece, 0x529b, 0x66c6, 0x6b77, 0x8f62, 0x5e74, 0x6190, 0x6200,
            0x649a, 0x6f23, 0x7149, 0x7489, 0x79ca, 0x7df4, 0x806f, 0x8f26, 0x84ee, 0x9023,
            0x934a, 0x5217, 0x52a3, 0x54bd, 0x70c8, 0x88c2, 0x8aaa, 0x5ec9, 0x5ff5, 0x637b,
            0x6bae, 0x7c3e, 0x7375, 0x4ee4, 0x56f9, 0x5be7, 0x5dba, 0x601c, 0x73b2, 0x7469,
            0x7f9a, 0x8046, 0x9234, 0x96f6, 0x9748, 0x9818, 0x4f8b, 0x79ae, 0x91b4, 0x96b8,
            0x60e1, 0x4e86, 0x50da, 0x5bee, 0x5c3f, 0x6599, 0x6a02, 0x71ce, 0x7642, 0x84fc,
            0x907c, 0x9f8d, 0x6688, 0x962e, 0x5289, 0x677b, 0x67f3, 0x6d41, 0x6e9c, 0x7409,
            0x7559, 0x786b, 0x7d10, 0x985e, 0x516d, 0x622e, 0x9678, 0x502b, 0x5d19, 0x6dea,
            0x8f2a, 0x5f8b, 0x6144, 0x6817, 0x7387, 0x9686, 0x5229, 0x540f, 0x5c65, 0x6613,
            0x674e, 0x68a8, 0x6ce5, 0x7406, 0x75e2, 0x7f79, 0x88cf, 0x88e1, 0x91cc, 0x96e2,
            0x533f, 0x6eba, 0x541d, 0x71d0, 0x7498, 0x85fa, 0x96a3, 0x9c57, 0x9e9f, 0x6797,
            0x6dcb, 0x81e8, 0x7acb, 0x7b20, 0x7c92, 0x72c0, 0x7099, 0x8b58, 0x4ec0, 0x8336,
            0x523a, 0x5207, 0x5ea6, 0x62d3, 0x7cd6, 0x5b85, 0x6d1e, 0x66b4, 0x8f3b, 0x884c,
            0x964d, 0x898b, 0x5ed3, 0x5140, 0x55c0, 0x585a, 0x6674, 0x51de, 0x732a, 0x76ca,
            0x793c, 0x795e, 0x7965, 0x798f, 0x9756, 0x7cbe, 0x7fbd, 0x8612, 0x8af8, 0x9038,
            0x90fd, 0x98ef, 0x98fc, 0x9928, 0x9db4, 0x90de, 0x96b7, 0x4fae, 0x50e7, 0x514d,
            0x52c9, 0x52e4, 0x5351, 0x559d, 0x5606, 0x5668, 0x5840, 0x58a8, 0x5c64, 0x5c6e,
            0x6094, 0x6168, 0x618e, 0x61f2, 0x654f, 0x65e2, 0x6691, 0x6885, 0x6d77, 0x6e1a,
            0x6f22, 0x716e, 0x722b, 0x7422, 0x7891, 0x793e, 0x7949, 0x7948, 0x7950, 0x7956,
            0x795d, 0x798d, 0x798e, 0x7a40, 0x7a81, 0x7bc0, 0x7df4, 0x7e09, 0x7e41, 0x7f72,
            0x8005, 0x81ed, 0x8279, 0x8279, 0x8457, 0x8910, 0x8996, 0x8b01, 0x8b39, 0x8cd3,
            0x8d08, 0x8fb6, 0x9038, 0x96e3, 0x97ff, 0x983b, 0x6075, 0x242ee, 0x8218, 0x4e26,
            0x51b5, 0x5168, 0x4f80, 0x5145, 0x5180, 0x52c7, 0x52fa, 0x559d, 0x5555, 0x5599,
            0x55e2, 0x585a, 0x58b3, 0x5944, 0x5954, 0x5a62, 0x5b28, 0x5ed2, 0x5ed9, 0x5f69,
            0x5fad, 0x60d8, 0x614e, 0x6108, 0x618e, 0x6160, 0x61f2, 0x6234, 0x63c4, 0x641c,
            0x6452, 0x6556, 0x6674, 0x6717, 0x671b, 0x6756, 0x6b79, 0x6bba, 0x6d41, 0x6edb,
            0x6ecb, 0x6f22, 0x701e, 0x716e, 0x77a7, 0x7235, 0x72af, 0x732a, 0x7471, 0x7506,
            0x753b, 0x761d, 0x761f, 0x76ca, 0x76db, 0x76f4, 0x774a, 0x7740, 0x78cc, 0x7ab1,
            0x7bc0, 0x7c7b, 0x7d5b, 0x7df4, 0x7f3e, 0x8005, 0x8352, 0x83ef, 0x8779, 0x8941,
            0x8986, 0x8996, 0x8abf, 0x8af8, 0x8acb, 0x8b01, 0x8afe, 0x8aed, 0x8b39, 0x8b8a,
            0x8d08, 0x8f38, 0x9072, 0x9199, 0x9276, 0x967c, 0x96e3, 0x9756, 0x97db, 0x97ff,
            0x980b, 0x983b, 0x9b12, 0x9f9c, 0x2284a, 0x22844, 0x233d5, 0x3b9d, 0x4018, 0x4039,
            0x25249, 0x25cd0, 0x27ed3, 0x9f43, 0x9f8e, 0x5d9, 0x5b4, 0x5f2, 0x5b7, 0x5e9,
            0x5c1, 0x5e9, 0x5c2, 0xfb49, 0x5c1, 0xfb49, 0x5c2, 0x5d0, 0x5b7, 0x5d0,
            0x5b8, 0x5d0, 0x5bc, 0x5d1, 0x5bc, 0x5d2, 0x5bc, 0x5d3, 0x5bc, 0x5d4,
            0x5bc, 0x5d5, 0x5bc, 0x5d6, 0x5bc, 0x5d8, 0x5bc, 0x5d9, 0x5bc, 0x5da,
            0x5bc, 0x5db, 0x5bc, 0x5dc, 0x5bc, 0x5de, 0x5bc, 0x5e0, 0x5bc, 0x5e1,
            0x5bc, 0x5e3, 0x5bc, 0x5e4, 0x5bc, 0x5e6, 0x5bc, 0x5e7, 0x5bc, 0x5e8,
            0x5bc, 0x5e9, 0x5bc, 0x5ea, 0x5bc, 0x5d5, 0x5b9, 0x5d1, 0x5bf, 0x5db,
            0x5bf, 0x5e4, 0x5bf, 0x11099, 0x110ba, 0x1109b, 0x110ba, 0x110a5, 0x110ba, 0x11131,
            0x11127, 0x11132, 0x11127, 0x11347, 0x1133e, 0x11347, 0x11357, 0x114b9, 0x114ba, 0x114b9,
            0x114b0, 0x114b9, 0x114bd, 0x115b8, 0x115af, 0x115b9, 0x115af, 0x11935, 0x11930, 0x1d157,
            0x1d165, 0x1d158, 0x1d165, 0x1d15f, 0x1d16e, 0x1d15f, 0x1d16f, 0x1d15f, 0x1d170, 0x1d15f,
            0x1d171, 0x1d15f, 0x1d172, 0x1d1b9, 0x1d165, 0x1d1ba, 0x1d165, 0x1d1bb, 0x1d16e, 0x1d1bc,
            0x1d16e, 0x1d1bb, 0x1d16f, 0x1d1bc, 0x1d16f, 0x4e3d, 0x4e38, 0x4e41, 0x20122, 0x4f60,
            0x4fae, 0x4fbb, 0x5002, 0x507a, 0x5099, 0x50e7, 0x50cf, 0x349e, 0x2063a, 0x514d,
            0x5154, 0x5164, 0x5177, 0x2051c, 0x34b9, 0x5167, 0x518d, 0x2054b, 0x5197, 0x51a4,
            0x4ecc, 0x51ac, 0x51b5, 0x291df, 0x51f5, 0x5203, 0x34df, 0x523b, 0x5246, 0x5272,
            0x5277, 0x3515, 0x52c7, 0x52c9, 0x52e4, 0x52fa, 0x5305, 0x5306, 0x5317, 0x5349,
            0x5351, 0x535a, 0x5373, 0x537d, 0x537f, 0x537f, 0x537f, 0x20a2c, 0x7070, 0x53ca,
            0x53df, 0x20b63, 0x53eb, 0x53f1, 0x5406, 0x549e, 0x5438, 0x5448, 0x5468, 0x54a2,
            0x54f6, 0x5510, 0x5553, 0x5563, 0x5584, 0x5584, 0x5599, 0x55ab, 0x55b3, 0x55c2,
            0x5716, 0x5606, 0x5717, 0x5651, 0x5674, 0x5207, 0x58ee, 0x57ce, 0x57f4, 0x580d,
            0x578b, 0x5832, 0x5831, 0x58ac, 0x214e4, 0x58f2, 0x58f7, 0x5906, 0x591a, 0x5922,
            0x5962, 0x216a8, 0x216ea, 0x59ec, 0x5a1b, 0x5a27, 0x59d8, 0x5a66, 0x36ee, 0x36fc,
            0x5b08, 0x5b3e, 0x5b3e, 0x219c8, 0x5bc3, 0x5bd8, 0x5be7, 0x5bf3, 0x21b18, 0x5bff,
            0x5c06, 0x5f53, 0x5c22, 0x3781, 0x5c60, 0x5c6e, 0x5cc0, 0x5c8d, 0x21de4, 0x5d43,
            0x21de6, 0x5d6e, 0x5d6b, 0x5d7c, 0x5de1, 0x5de2, 0x382f, 0x5dfd, 0x5e28, 0x5e3d,
            0x5e69, 0x3862, 0x22183, 0x387c, 0x5eb0, 0x5eb3, 0x5eb6, 0x5eca, 0x2a392, 0x5efe,
            0x22331, 0x22331, 0x8201, 0x5f22, 0x5f22, 0x38c7, 0x232b8, 0x261da, 0x5f62, 0x5f6b,
            0x38e3, 0x5f9a, 0x5fcd, 0x5fd7, 0x5ff9, 0x6081, 0x393a, 0x391c, 0x6094, 0x226d4,
            0x60c7, 0x6148, 0x614c, 0x614e, 0x614c, 0x617a, 0x618e, 0x61b2, 0x61a4, 0x61af,
            0x61de, 0x61f2, 0x61f6, 0x6210, 0x621b, 0x625d, 0x62b1, 0x62d4, 0x6350, 0x22b0c,
            0x633d, 0x62fc, 0x6368, 0x6383, 0x63e4, 0x22bf1, 0x6422, 0x63c5, 0x63a9, 0x3a2e,
            0x6469, 0x647e, 0x649d, 0x6477, 0x3a6c, 0x654f, 0x656c, 0x2300a, 0x65e3, 0x66f8,
            0x6649, 0x3b19, 0x6691, 0x3b08, 0x3ae4, 0x5192, 0x5195, 0x6700, 0x669c, 0x80ad,
            0x43d9, 0x6717, 0x671b, 0x6721, 0x675e, 0x6753, 0x233c3, 0x3b49, 0x67fa, 0x6785,
            0x6852, 0x6885, 0x2346d, 0x688e, 0x681f, 0x6914, 0x3b9d, 0x6942, 0x69a3, 0x69ea,
            0x6aa8, 0x236a3, 0x6adb, 0x3c18, 0x6b21, 0x238a7, 0x6b54, 0x3c4e, 0x6b72, 0x6b9f,
            0x6bba, 0x6bbb, 0x23a8d, 0x21d0b, 0x23afa, 0x6c4e, 0x23cbc, 0x6cbf, 0x6ccd, 0x6c67,
            0x6d16, 0x6d3e, 0x6d77, 0x6d41, 0x6d69, 0x6d78, 0x6d85, 0x23d1e, 0x6d34, 0x6e2f,
            0x6e6e, 0x3d33, 0x6ecb, 0x6ec7, 0x23ed1, 0x6df9, 0x6f6e, 0x23f5e, 0x23f8e, 0x6fc6,
            0x7039, 0x701e, 0x701b, 0x3d96, 0x704a, 0x707d, 0x7077, 0x70ad, 0x20525, 0x7145,
            0x24263, 0x719c, 0x243ab, 0x7228, 0x7235, 0x7250, 0x24608, 0x7280, 0x7295, 0x24735,
            0x24814, 0x737a, 0x738b, 0x3eac, 0x73a5, 0x3eb8, 0x3eb8, 0x7447, 0x745c, 0x7471,
            0x7485, 0x74ca, 0x3f1b, 0x7524, 0x24c36, 0x753e, 0x24c92, 0x7570, 0x2219f, 0x7610,
            0x24fa1, 0x24fb8, 0x25044, 0x3ffc, 0x4008, 0x76f4, 0x250f3, 0x250f2, 0x25119, 0x25133,
            0x771e, 0x771f, 0x771f, 0x774a, 0x4039, 0x778b, 0x4046, 0x4096, 0x2541d, 0x784e,
            0x788c, 0x78cc, 0x40e3, 0x25626, 0x7956, 0x2569a, 0x256c5, 0x798f, 0x79eb, 0x412f,
            0x7a40, 0x7a4a, 0x7a4f, 0x2597c, 0x25aa7, 0x25aa7, 0x7aee, 0x4202, 0x25bab, 0x7bc6,
            0x7bc9, 0x4227, 0x25c80, 0x7cd2, 0x42a0, 0x7ce8, 0x7ce3, 0x7d00, 0x25f86, 0x7d63,
            0x4301, 0x7dc7, 0x7e02, 0x7e45, 0x4334, 0x26228, 0x26247, 0x4359, 0x262d9, 0x7f7a,
            0x2633e, 0x7f95, 0x7ffa, 0x8005, 0x264da, 0x26523, 0x8060, 0x265a8, 0x8070, 0x2335f,
            0x43d5, 0x80b2, 0x8103, 0x440b, 0x813e, 0x5ab5, 0x267a7, 0x267b5, 0x23393, 0x2339c,
            0x8201, 0x8204, 0x8f9e, 0x446b, 0x8291, 0x828b, 0x829d, 0x52b3, 0x82b1, 0x82b3,
            0x82bd, 0x82e6, 0x26b3c, 0x82e5, 0x831d, 0x8363, 0x83ad, 0x8323, 0x83bd, 0x83e7,
            0x8457, 0x8353, 0x83ca, 0x83cc, 0x83dc, 0x26c36, 0x26d6b, 0x26cd5, 0x452b, 0x84f1,
            0x84f3, 0x8516, 0x273ca, 0x8564, 0x26f2c, 0x455d, 0x4561, 0x26fb1, 0x270d2, 0x456b,
            0x8650, 0x865c, 0x8667, 0x8669, 0x86a9, 0x8688, 0x870e, 0x86e2, 0x8779, 0x8728,
            0x876b, 0x8786, 0x45d7, 0x87e1, 0x8801, 0x45f9, 0x8860, 0x8863, 0x27667, 0x88d7,
            0x88de, 0x4635, 0x88fa, 0x34bb, 0x278ae, 0x27966, 0x46be, 0x46c7, 0x8aa0, 0x8aed,
            0x8b8a, 0x8c55, 0x27ca8, 0x8cab, 0x8cc1, 0x8d1b, 0x8d77, 0x27f2f, 0x20804, 0x8dcb,
            0x8dbc, 0x8df0, 0x208de, 0x8ed4, 0x8f38, 0x285d2, 0x285ed, 0x9094, 0x90f1, 0x9111,
            0x2872e, 0x911b, 0x9238, 0x92d7, 0x92d8, 0x927c, 0x93f9, 0x9415, 0x28bfa, 0x958b,
            0x4995, 0x95b7, 0x28d77, 0x49e6, 0x96c3, 0x5db2, 0x9723, 0x29145, 0x2921a, 0x4a6e,
            0x4a76, 0x97e0, 0x2940a, 0x4ab2, 0x29496, 0x980b, 0x980b, 0x9829, 0x295b6, 0x98e2,
            0x4b33, 0x9929, 0x99a7, 0x99c2, 0x99fe, 0x4bce, 0x29b30, 0x9b12, 0x9c40, 0x9cfd,
            0x4cce, 0x4ced, 0x9d67, 0x2a0ce, 0x4cf8, 0x2a105, 0x2a20e, 0x2a291, 0x9ebb, 0x4d56,
            0x9ef9, 0x9efe, 0x9f05, 0x9f0f, 0x9f16, 0x9f3b, 0x2a600,
        ],
    );

    pub(crate) static COMPATIBILITY: ExtendedTable = ExtendedTable::from_static(
        &[
            (0xa0, Slot::new(0, 1)), (0xa8, Slot::new(1, 2)), (0xaa, Slot::new(3, 1)), (0xaf, Slot::new(4, 2)),
            (0xb2, Slot::new(6, 1)), (0xb3, Slot::new(7, 1)), (0xb4, Slot::new(8, 2)), (0xb5, Slot::new(10, 1)),
            (0xb8, Slot::new(11, 2)), (0xb9, Slot::new(13, 1)), (0xba, Slot::new(14, 1)), (0xbc, Slot::new(15, 3)),
            (0xbd, Slot::new(18, 3)), (0xbe, Slot::new(21, 3)), (0x132, Slot::new(24, 2)), (0x133, Slot::new(26, 2)),
            (0x13f, Slot::new(28, 2)), (0x140, Slot::new(30, 2)), (0x149, Slot::new(32, 2)), (0x17f, Slot::new(34, 1)),
            (0x1c4, Slot::new(35, 2)), (0x1c5, Slot::new(37, 2)), (0x1c6, Slot::new(39, 2)), (0x1c7, Slot::new(41, 2)),
            (0x1c8, Slot::new(43, 2)), (0x1c9, Slot::new(45, 2)), (0x1ca, Slot::new(47, 2)), (0x1cb, Slot::new(49, 2)),
            (0x1cc, Slot::new(51, 2)), (0x1f1, Slot::new(53, 2)), (0x1f2, Slot::new(55, 2)), (0x1f3, Slot::new(57, 2)),
            (0x2b0, Slot::new(59, 1)), (0x2b1, Slot::new(60, 1)), (0x2b2, Slot::new(61, 1)), (0x2b3, Slot::new(62, 1)),
            (0x2b4, Slot::new(63, 1)), (0x2b5, Slot::new(64, 1)), (0x2b6, Slot::new(65, 1)), (0x2b7, Slot::new(66, 1)),
            (0x2b8, Slot::new(67, 1)), (0x2d8, Slot::new(68, 2)), (0x2d9, Slot::new(70, 2)), (0x2da, Slot::new(72, 2)),
            (0x2db, Slot::new(74, 2)), (0x2dc, Slot::new(76, 2)), (0x2dd, Slot::new(78, 2)), (0x2e0, Slot::new(80, 1)),
            (0x2e1, Slot::new(81, 1)), (0x2e2, Slot::new(82, 1)), (0x2e3, Slot::new(83, 1)), (0x2e4, Slot::new(84, 1)),
            (0x37a, Slot::new(85, 2)), (0x384, Slot::new(87, 2)), (0x3d0, Slot::new(89, 1)), (0x3d1, Slot::new(90, 1)),
            (0x3d2, Slot::new(91, 1)), (0x3d5, Slot::new(92, 1)), (0x3d6, Slot::new(93, 1)), (0x3f0, Slot::new(94, 1)),
            (0x3f1, Slot::new(95, 1)), (0x3f2, Slot::new(96, 1)), (0x3f4, Slot::new(97, 1)), (0x3f5, Slot::new(98, 1)),
            (0x3f9, Slot::new(99, 1)), (0x587, Slot::new(100, 2)), (0x675, Slot::new(102, 2)), (0x676, Slot::new(104, 2)),
            (0x677, Slot::new(106, 2)), (0x678, Slot::new(108, 2)), (0xe33, Slot::new(110, 2)), (0xeb3, Slot::new(112, 2)),
            (0xedc, Slot::new(114, 2)), (0xedd, Slot::new(116, 2)), (0xf0c, Slot::new(118, 1)), (0xf77, Slot::new(119, 2)),
            (0xf79, Slot::new(121, 2)), (0x10fc, Slot::new(123, 1)), (0x1d2c, Slot::new(124, 1)), (0x1d2d, Slot::new(125, 1)),
            (0x1d2e, Slot::new(126, 1)), (0x1d30, Slot::new(127, 1)), (0x1d31, Slot::new(128, 1)), (0x1d32, Slot::new(129, 1)),
            (0x1d33, Slot::new(130, 1)), (0x1d34, Slot::new(131, 1)), (0x1d35, Slot::new(132, 1)), (0x1d36, Slot::new(133, 1)),
            (0x1d37, Slot::new(134, 1)), (0x1d38, Slot::new(135, 1)), (0x1d39, Slot::new(136, 1)), (0x1d3a, Slot::new(137, 1)),
            (0x1d3c, Slot::new(138, 1)), (0x1d3d, Slot::new(139, 1)), (0x1d3e, Slot::new(140, 1)), (0x1d3f, Slot::new(141, 1)),
            (0x1d40, Slot::new(142, 1)), (0x1d41, Slot::new(143, 1)), (0x1d42, Slot::new(144, 1)), (0x1d43, Slot::new(145, 1)),
            (0x1d44, Slot::new(146, 1)), (0x1d45, Slot::new(147, 1)), (0x1d46, Slot::new(148, 1)), (0x1d47, Slot::new(149, 1)),
            (0x1d48, Slot::new(150, 1)), (0x1d49, Slot::new(151, 1)), (0x1d4a, Slot::new(152, 1)), (0x1d4b, Slot::new(153, 1)),
            (0x1d4c, Slot::new(154, 1)), (0x1d4d, Slot::new(155, 1)), (0x1d4f, Slot::new(156, 1)), (0x1d50, Slot::new(157, 1)),
            (0x1d51, Slot::new(158, 1)), (0x1d52, Slot::new(159, 1)), (0x1d53, Slot::new(160, 1)), (0x1d54, Slot::new(161, 1)),
            (0x1d55, Slot::new(162, 1)), (0x1d56, Slot::new(163, 1)), (0x1d57, Slot::new(164, 1)), (0x1d58, Slot::new(165, 1)),
            (0x1d59, Slot::new(166, 1)), (0x1d5a, Slot::new(167, 1)), (0x1d5b, Slot::new(168, 1)), (0x1d5c, Slot::new(169, 1)),
            (0x1d5d, Slot::new(170, 1)), (0x1d5e, Slot::new(171, 1)), (0x1d5f, Slot::new(172, 1)), (0x1d60, Slot::new(173, 1)),
            (0x1d61, Slot::new(174, 1)), (0x1d62, Slot::new(175, 1)), (0x1d63, Slot::new(176, 1)), (0x1d64, Slot::new(177, 1)),
            (0x1d65, Slot::new(178, 1)), (0x1d66, Slot::new(179, 1)), (0x1d67, Slot::new(180, 1)), (0x1d68, Slot::new(181, 1)),
            (0x1d69, Slot::new(182, 1)), (0x1d6a, Slot::new(183, 1)), (0x1d78, Slot::new(184, 1)), (0x1d9b, Slot::new(185, 1)),
            (0x1d9c, Slot::new(186, 1)), (0x1d9d, Slot::new(187, 1)), (0x1d9e, Slot::new(188, 1)), (0x1d9f, Slot::new(189, 1)),
            (0x1da0, Slot::new(190, 1)), (0x1da1, Slot::new(191, 1)), (0x1da2, Slot::new(192, 1)), (0x1da3, Slot::new(193, 1)),
            (0x1da4, Slot::new(194, 1)), (0x1da5, Slot::new(195, 1)), (0x1da6, Slot::new(196, 1)), (0x1da7, Slot::new(197, 1)),
            (0x1da8, Slot::new(198, 1)), (0x1da9, Slot::new(199, 1)), (0x1daa, Slot::new(200, 1)), (0x1dab, Slot::new(201, 1)),
            (0x1dac, Slot::new(202, 1)), (0x1dad, Slot::new(203, 1)), (0x1dae, Slot::new(204, 1)), (0x1daf, Slot::new(205, 1)),
            (0x1db0, Slot::new(206, 1)), (0x1db1, Slot::new(207, 1)), (0x1db2, Slot::new(208, 1)), (0x1db3, Slot::new(209, 1)),
            (0x1db4, Slot::new(210, 1)), (0x1db5, Slot::new(211, 1)), (0x1db6, Slot::new(212, 1)), (0x1db7, Slot::new(213, 1)),
            (0x1db8, Slot::new(214, 1)), (0x1db9, Slot::new(215, 1)), (0x1dba, Slot::new(216, 1)), (0x1dbb, Slot::new(217, 1)),
            (0x1dbc, Slot::new(218, 1)), (0x1dbd, Slot::new(219, 1)), (0x1dbe, Slot::new(220, 1)), (0x1dbf, Slot::new(221, 1)),
            (0x1e9a, Slot::new(222, 2)), (0x1fbd, Slot::new(224, 2)), (0x1fbf, Slot::new(226, 2)), (0x1fc0, Slot::new(228, 2)),
            (0x1ffe, Slot::new(230, 2)), (0x2002, Slot::new(232, 1)), (0x2003, Slot::new(233, 1)), (0x2004, Slot::new(234, 1)),
            (0x2005, Slot::new(235, 1)), (0x2006, Slot::new(236, 1)), (0x2007, Slot::new(237, 1)), (0x2008, Slot::new(238, 1)),
            (0x2009, Slot::new(239, 1)), (0x200a, Slot::new(240, 1)), (0x2011, Slot::new(241, 1)), (0x2017, Slot::new(242, 2)),
            (0x2024, Slot::new(244, 1)), (0x2025, Slot::new(245, 2)), (0x2026, Slot::new(247, 3)), (0x202f, Slot::new(250, 1)),
            (0x2033, Slot::new(251, 2)), (0x2034, Slot::new(253, 3)), (0x2036, Slot::new(256, 2)), (0x2037, Slot::new(258, 3)),
            (0x203c, Slot::new(261, 2)), (0x203e, Slot::new(263, 2)), (0x2047, Slot::new(265, 2)), (0x2048, Slot::new(267, 2)),
            (0x2049, Slot::new(269, 2)), (0x2057, Slot::new(271, 4)), (0x205f, Slot::new(275, 1)), (0x2070, Slot::new(276, 1)),
            (0x2071, Slot::new(277, 1)), (0x2074, Slot::new(278, 1)), (0x2075, Slot::new(279, 1)), (0x2076, Slot::new(280, 1)),
            (0x2077, Slot::new(281, 1)), (0x2078, Slot::new(282, 1)), (0x2079, Slot::new(283, 1)), (0x207a, Slot::new(284, 1)),
            (0x207b, Slot::new(285, 1)), (0x207c, Slot::new(286, 1)), (0x207d, Slot::new(287, 1)), (0x207e, Slot::new(288, 1)),
            (0x207f, Slot::new(289, 1)), (0x2080, Slot::new(290, 1)), (0x2081, Slot::new(291, 1)), (0x2082, Slot::new(292, 1)),
            (0x2083, Slot::new(293, 1)), (0x2084, Slot::new(294, 1)), (0x2085, Slot::new(295, 1)), (0x2086, Slot::new(296, 1)),
            (0x2087, Slot::new(297, 1)), (0x2088, Slot::new(298, 1)), (0x2089, Slot::new(299, 1)), (0x208a, Slot::new(300, 1)),
            (0x208b, Slot::new(301, 1)), (0x208c, Slot::new(302, 1)), (0x208d, Slot::new(303, 1)), (0x208e, Slot::new(304, 1)),
            (0x2090, Slot::new(305, 1)), (0x2091, Slot::new(306, 1)), (0x2092, Slot::new(307, 1)), (0x2093, Slot::new(308, 1)),
            (0x2094, Slot::new(309, 1)), (0x2095, Slot::new(310, 1)), (0x2096, Slot::new(311, 1)), (0x2097, Slot::new(312, 1)),
            (0x2098, Slot::new(313, 1)), (0x2099, Slot::new(314, 1)), (0x209a, Slot::new(315, 1)), (0x209b, Slot::new(316, 1)),
            (0x209c, Slot::new(317, 1)), (0x20a8, Slot::new(318, 2)), (0x2100, Slot::new(320, 3)), (0x2101, Slot::new(323, 3)),
            (0x2102, Slot::new(326, 1)), (0x2103, Slot::new(327, 2)), (0x2105, Slot::new(329, 3)), (0x2106, Slot::new(332, 3)),
            (0x2107, Slot::new(335, 1)), (0x2109, Slot::new(336, 2)), (0x210a, Slot::new(338, 1)), (0x210b, Slot::new(339, 1)),
            (0x210c, Slot::new(340, 1)), (0x210d, Slot::new(341, 1)), (0x210e, Slot::new(342, 1)), (0x210f, Slot::new(343, 1)),
            (0x2110, Slot::new(344, 1)), (0x2111, Slot::new(345, 1)), (0x2112, Slot::new(346, 1)), (0x2113, Slot::new(347, 1)),
            (0x2115, Slot::new(348, 1)), (0x2116, Slot::new(349, 2)), (0x2119, Slot::new(351, 1)), (0x211a, Slot::new(352, 1)),
            (0x211b, Slot::new(353, 1)), (0x211c, Slot::new(354, 1)), (0x211d, Slot::new(355, 1)), (0x2120, Slot::new(356, 2)),
            (0x2121, Slot::new(358, 3)), (0x2122, Slot::new(361, 2)), (0x2124, Slot::new(363, 1)), (0x2128, Slot::new(364, 1)),
            (0x212c, Slot::new(365, 1)), (0x212d, Slot::new(366, 1)), (0x212f, Slot::new(367, 1)), (0x2130, Slot::new(368, 1)),
            (0x2131, Slot::new(369, 1)), (0x2133, Slot::new(370, 1)), (0x2134, Slot::new(371, 1)), (0x2135, Slot::new(372, 1)),
            (0x2136, Slot::new(373, 1)), (0x2137, Slot::new(374, 1)), (0x2138, Slot::new(375, 1)), (0x2139, Slot::new(376, 1)),
            (0x213b, Slot::new(377, 3)), (0x213c, Slot::new(380, 1)), (0x213d, Slot::new(381, 1)), (0x213e, Slot::new(382, 1)),
            (0x213f, Slot::new(383, 1)), (0x2140, Slot::new(384, 1)), (0x2145, Slot::new(385, 1)), (0x2146, Slot::new(386, 1)),
            (0x2147, Slot::new(387, 1)), (0x2148, Slot::new(388, 1)), (0x2149, Slot::new(389, 1)), (0x2150, Slot::new(390, 3)),
            (0x2151, Slot::new(393, 3)), (0x2152, Slot::new(396, 4)), (0x2153, Slot::new(400, 3)), (0x2154, Slot::new(403, 3)),
            (0x2155, Slot::new(406, 3)), (0x2156, Slot::new(409, 3)), (0x2157, Slot::new(412, 3)), (0x2158, Slot::new(415, 3)),
            (0x2159, Slot::new(418, 3)), (0x215a, Slot::new(421, 3)), (0x215b, Slot::new(424, 3)), (0x215c, Slot::new(427, 3)),
            (0x215d, Slot::new(430, 3)), (0x215e, Slot::new(433, 3)), (0x215f, Slot::new(436, 2)), (0x2160, Slot::new(438, 1)),
            (0x2161, Slot::new(439, 2)), (0x2162, Slot::new(441, 3)), (0x2163, Slot::new(444, 2)), (0x2164, Slot::new(446, 1)),
            (0x2165, Slot::new(447, 2)), (0x2166, Slot::new(449, 3)), (0x2167, Slot::new(452, 4)), (0x2168, Slot::new(456, 2)),
            (0x2169, Slot::new(458, 1)), (0x216a, Slot::new(459, 2)), (0x216b, Slot::new(461, 3)), (0x216c, Slot::new(464, 1)),
            (0x216d, Slot::new(465, 1)), (0x216e, Slot::new(466, 1)), (0x216f, Slot::new(467, 1)), (0x2170, Slot::new(468, 1)),
            (0x2171, Slot::new(469, 2)), (0x2172, Slot::new(471, 3)), (0x2173, Slot::new(474, 2)), (0x2174, Slot::new(476, 1)),
            (0x2175, Slot::new(477, 2)), (0x2176, Slot::new(479, 3)), (0x2177, Slot::new(482, 4)), (0x2178, Slot::new(486, 2)),
            (0x2179, Slot::new(488, 1)), (0x217a, Slot::new(489, 2)), (0x217b, Slot::new(491, 3)), (0x217c, Slot::new(494, 1)),
            (0x217d, Slot::new(495, 1)), (0x217e, Slot::new(496, 1)), (0x217f, Slot::new(497, 1)), (0x2189, Slot::new(498, 3)),
            (0x222c, Slot::new(501, 2)), (0x222d, Slot::new(503, 3)), (0x222f, Slot::new(506, 2)), (0x2230, Slot::new(508, 3)),
            (0x2460, Slot::new(511, 1)), (0x2461, Slot::new(512, 1)), (0x2462, Slot::new(513, 1)), (0x2463, Slot::new(514, 1)),
            (0x2464, Slot::new(515, 1)), (0x2465, Slot::new(516, 1)), (0x2466, Slot::new(517, 1)), (0x2467, Slot::new(518, 1)),
            (0x2468, Slot::new(519, 1)), (0x2469, Slot::new(520, 2)), (0x246a, Slot::new(522, 2)), (0x246b, Slot::new(524, 2)),
            (0x246c, Slot::new(526, 2)), (0x246d, Slot::new(528, 2)), (0x246e, Slot::new(530, 2)), (0x246f, Slot::new(532, 2)),
            (0x2470, Slot::new(534, 2)), (0x2471, Slot::new(536, 2)), (0x2472, Slot::new(538, 2)), (0x2473, Slot::new(540, 2)),
            (0x2474, Slot::new(542, 3)), (0x2475, Slot::new(545, 3)), (0x2476, Slot::new(548, 3)), (0x2477, Slot::new(551, 3)),
            (0x2478, Slot::new(554, 3)), (0x2479, Slot::new(557, 3)), (0x247a, Slot::new(560, 3)), (0x247b, Slot::new(563, 3)),
            (0x247c, Slot::new(566, 3)), (0x247d, Slot::new(569, 4)), (0x247e, Slot::new(573, 4)), (0x247f, Slot::new(577, 4)),
            (0x2480, Slot::new(581, 4)), (0x2481, Slot::new(585, 4)), (0x2482, Slot::new(589, 4)), (0x2483, Slot::new(593, 4)),
            (0x2484, Slot::new(597, 4)), (0x2485, Slot::new(601, 4)), (0x2486, Slot::new(605, 4)), (0x2487, Slot::new(609, 4)),
            (0x2488, Slot::new(613, 2)), (0x2489, Slot::new(615, 2)), (0x248a, Slot::new(617, 2)), (0x248b, Slot::new(619, 2)),
            (0x248c, Slot::new(621, 2)), (0x248d, Slot::new(623, 2)), (0x248e, Slot::new(625, 2)), (0x248f, Slot::new(627, 2)),
            (0x2490, Slot::new(629, 2)), (0x2491, Slot::new(631, 3)), (0x2492, Slot::new(634, 3)), (0x2493, Slot::new(637, 3)),
            (0x2494, Slot::new(640, 3)), (0x2495, Slot::new(643, 3)), (0x2496, Slot::new(646, 3)), (0x2497, Slot::new(649, 3)),
            (0x2498, Slot::new(652, 3)), (0x2499, Slot::new(655, 3)), (0x249a, Slot::new(658, 3)), (0x249b, Slot::new(661, 3)),
            (0x249c, Slot::new(664, 3)), (0x249d, Slot::new(667, 3)), (0x249e, Slot::new(670, 3)), (0x249f, Slot::new(673, 3)),
            (0x24a0, Slot::new(676, 3)), (0x24a1, Slot::new(679, 3)), (0x24a2, Slot::new(682, 3)), (0x24a3, Slot::new(685, 3)),
            (0x24a4, Slot::new(688, 3)), (0x24a5, Slot::new(691, 3)), (0x24a6, Slot::new(694, 3)), (0x24a7, Slot::new(697, 3)),
            (0x24a8, Slot::new(700, 3)), (0x24a9, Slot::new(703, 3)), (0x24aa, Slot::new(706, 3)), (0x24ab, Slot::new(709, 3)),
            (0x24ac, Slot::new(712, 3)), (0x24ad, Slot::new(715, 3)), (0x24ae, Slot::new(718, 3)), (0x24af, Slot::new(721, 3)),
            (0x24b0, Slot::new(724, 3)), (0x24b1, Slot::new(727, 3)), (0x24b2, Slot::new(730, 3)), (0x24b3, Slot::new(733, 3)),
            (0x24b4, Slot::new(736, 3)), (0x24b5, Slot::new(739, 3)), (0x24b6, Slot::new(742, 1)), (0x24b7, Slot::new(743, 1)),
            (0x24b8, Slot::new(744, 1)), (0x24b9, Slot::new(745, 1)), (0x24ba, Slot::new(746, 1)), (0x24bb, Slot::new(747, 1)),
            (0x24bc, Slot::new(748, 1)), (0x24bd, Slot::new(749, 1)), (0x24be, Slot::new(750, 1)), (0x24bf, Slot::new(751, 1)),
            (0x24c0, Slot::new(752, 1)), (0x24c1, Slot::new(753, 1)), (0x24c2, Slot::new(754, 1)), (0x24c3, Slot::new(755, 1)),
            (0x24c4, Slot::new(756, 1)), (0x24c5, Slot::new(757, 1)), (0x24c6, Slot::new(758, 1)), (0x24c7, Slot::new(759, 1)),
            (0x24c8, Slot::new(760, 1)), (0x24c9, Slot::new(761, 1)), (0x24ca, Slot::new(762, 1)), (0x24cb, Slot::new(763, 1)),
            (0x24cc, Slot::new(764, 1)), (0x24cd, Slot::new(765, 1)), (0x24ce, Slot::new(766, 1)), (0x24cf, Slot::new(767, 1)),
            (0x24d0, Slot::new(768, 1)), (0x24d1, Slot::new(769, 1)), (0x24d2, Slot::new(770, 1)), (0x24d3, Slot::new(771, 1)),
            (0x24d4, Slot::new(772, 1)), (0x24d5, Slot::new(773, 1)), (0x24d6, Slot::new(774, 1)), (0x24d7, Slot::new(775, 1)),
            (0x24d8, Slot::new(776, 1)), (0x24d9, Slot::new(777, 1)), (0x24da, Slot::new(778, 1)), (0x24db, Slot::new(779, 1)),
            (0x24dc, Slot::new(780, 1)), (0x24dd, Slot::new(781, 1)), (0x24de, Slot::new(782, 1)), (0x24df, Slot::new(783, 1)),
            (0x24e0, Slot::new(784, 1)), (0x24e1, Slot::new(785, 1)), (0x24e2, Slot::new(786, 1)), (0x24e3, Slot::new(787, 1)),
            (0x24e4, Slot::new(788, 1)), (0x24e5, Slot::new(789, 1)), (0x24e6, Slot::new(790, 1)), (0x24e7, Slot::new(791, 1)),
            (0x24e8, Slot::new(792, 1)), (0x24e9, Slot::new(793, 1)), (0x24ea, Slot::new(794, 1)), (0x2a0c, Slot::new(795, 4)),
            (0x2a74, Slot::new(799, 3)), (0x2a75, Slot::new(802, 2)), (0x2a76, Slot::new(804, 3)), (0x2c7c, Slot::new(807, 1)),
            (0x2c7d, Slot::new(808, 1)), (0x2d6f, Slot::new(809, 1)), (0x2e9f, Slot::new(810, 1)), (0x2ef3, Slot::new(811, 1)),
            (0x2f00, Slot::new(812, 1)), (0x2f01, Slot::new(813, 1)), (0x2f02, Slot::new(814, 1)), (0x2f03, Slot::new(815, 1)),
            (0x2f04, Slot::new(816, 1)), (0x2f05, Slot::new(817, 1)), (0x2f06, Slot::new(818, 1)), (0x2f07, Slot::new(819, 1)),
            (0x2f08, Slot::new(820, 1)), (0x2f09, Slot::new(821, 1)), (0x2f0a, Slot::new(822, 1)), (0x2f0b, Slot::new(823, 1)),
            (0x2f0c, Slot::new(824, 1)), (0x2f0d, Slot::new(825, 1)), (0x2f0e, Slot::new(826, 1)), (0x2f0f, Slot::new(827, 1)),
            (0x2f10, Slot::new(828, 1)), (0x2f11, Slot::new(829, 1)), (0x2f12, Slot::new(830, 1)), (0x2f13, Slot::new(831, 1)),
            (0x2f14, Slot::new(832, 1)), (0x2f15, Slot::new(833, 1)), (0x2f16, Slot::new(834, 1)), (0x2f17, Slot::new(835, 1)),
            (0x2f18, Slot::new(836, 1)), (0x2f19, Slot::new(837, 1)), (0x2f1a, Slot::new(838, 1)), (0x2f1b, Slot::new(839, 1)),
            (0x2f1c, Slot::new(840, 1)), (0x2f1d, Slot::new(841, 1)), (0x2f1e, Slot::new(842, 1)), (0x2f1f, Slot::new(843, 1)),
            (0x2f20, Slot::new(844, 1)), (0x2f21, Slot::new(845, 1)), (0x2f22, Slot::new(846, 1)), (0x2f23, Slot::new(847, 1)),
            (0x2f24, Slot::new(848, 1)), (0x2f25, Slot::new(849, 1)), (0x2f26, Slot::new(850, 1)), (0x2f27, Slot::new(851, 1)),
            (0x2f28, Slot::new(852, 1)), (0x2f29, Slot::new(853, 1)), (0x2f2a, Slot::new(854, 1)), (0x2f2b, Slot::new(855, 1)),
            (0x2f2c, Slot::new(856, 1)), (0x2f2d, Slot::new(857, 1)), (0x2f2e, Slot::new(858, 1)), (0x2f2f, Slot::new(859, 1)),
            (0x2f30, Slot::new(860, 1)), (0x2f31, Slot::new(861, 1)), (0x2f32, Slot::new(862, 1)), (0x2f33, Slot::new(863, 1)),
            (0x2f34, Slot::new(864, 1)), (0x2f35, Slot::new(865, 1)), (0x2f36, Slot::new(866, 1)), (0x2f37, Slot::new(867, 1)),
            (0x2f38, Slot::new(868, 1)), (0x2f39, Slot::new(869, 1)), (0x2f3a, Slot::new(870, 1)), (0x2f3b, Slot::new(871, 1)),
            (0x2f3c, Slot::new(872, 1)), (0x2f3d, Slot::new(873, 1)), (0x2f3e, Slot::new(874, 1)), (0x2f3f, Slot::new(875, 1)),
            (0x2f40, Slot::new(876, 1)), (0x2f41, Slot::new(877, 1)), (0x2f42, Slot::new(878, 1)), (0x2f43, Slot::new(879, 1)),
            (0x2f44, Slot::new(880, 1)), (0x2f45, Slot::new(881, 1)), (0x2f46, Slot::new(882, 1)), (0x2f47, Slot::new(883, 1)),
            (0x2f48, Slot::new(884, 1)), (0x2f49, Slot::new(885, 1)), (0x2f4a, Slot::new(886, 1)), (0x2f4b, Slot::new(887, 1)),
            (0x2f4c, Slot::new(888, 1)), (0x2f4d, Slot::new(889, 1)), (0x2f4e, Slot::new(890, 1)), (0x2f4f, Slot::new(891, 1)),
            (0x2f50, Slot::new(892, 1)), (0x2f51, Slot::new(893, 1)), (0x2f52, Slot::new(894, 1)), (0x2f53, Slot::new(895, 1)),
            (0x2f54, Slot::new(896, 1)), (0x2f55, Slot::new(897, 1)), (0x2f56, Slot::new(898, 1)), (0x2f57, Slot::new(899, 1)),
            (0x2f58, Slot::new(900, 1)), (0x2f59, Slot::new(901, 1)), (0x2f5a, Slot::new(902, 1)), (0x2f5b, Slot::new(903, 1)),
            (0x2f5c, Slot::new(904, 1)), (0x2f5d, Slot::new(905, 1)), (0x2f5e, Slot::new(906, 1)), (0x2f5f, Slot::new(907, 1)),
            (0x2f60, Slot::new(908, 1)), (0x2f61, Slot::new(909, 1)), (0x2f62, Slot::new(910, 1)), (0x2f63, Slot::new(911, 1)),
            (0x2f64, Slot::new(912, 1)), (0x2f65, Slot::new(913, 1)), (0x2f66, Slot::new(914, 1)), (0x2f67, Slot::new(915, 1)),
            (0x2f68, Slot::new(916, 1)), (0x2f69, Slot::new(917, 1)), (0x2f6a, Slot::new(918, 1)), (0x2f6b, Slot::new(919, 1)),
            (0x2f6c, Slot::new(920, 1)), (0x2f6d, Slot::new(921, 1)), (0x2f6e, Slot::new(922, 1)), (0x2f6f, Slot::new(923, 1)),
            (0x2f70, Slot::new(924, 1)), (0x2f71, Slot::new(925, 1)), (0x2f72, Slot::new(926, 1)), (0x2f73, Slot::new(927, 1)),
            (0x2f74, Slot::new(928, 1)), (0x2f75, Slot::new(929, 1)), (0x2f76, Slot::new(930, 1)), (0x2f77, Slot::new(931, 1)),
            (0x2f78, Slot::new(932, 1)), (0x2f79, Slot::new(933, 1)), (0x2f7a, Slot::new(934, 1)), (0x2f7b, Slot::new(935, 1)),
            (0x2f7c, Slot::new(936, 1)), (0x2f7d, Slot::new(937, 1)), (0x2f7e, Slot::new(938, 1)), (0x2f7f, Slot::new(939, 1)),
            (0x2f80, Slot::new(940, 1)), (0x2f81, Slot::new(941, 1)), (0x2f82, Slot::new(942, 1)), (0x2f83, Slot::new(943, 1)),
            (0x2f84, Slot::new(944, 1)), (0x2f85, Slot::new(945, 1)), (0x2f86, Slot::new(946, 1)), (0x2f87, Slot::new(947, 1)),
            (0x2f88, Slot::new(948, 1)), (0x2f89, Slot::new(949, 1)), (0x2f8a, Slot::new(950, 1)), (0x2f8b, Slot::new(951, 1)),
            (0x2f8c, Slot::new(952, 1)), (0x2f8d, Slot::new(953, 1)), (0x2f8e, Slot::new(954, 1)), (0x2f8f, Slot::new(955, 1)),
            (0x2f90, Slot::new(956, 1)), (0x2f91, Slot::new(957, 1)), (0x2f92, Slot::new(958, 1)), (0x2f93, Slot::new(959, 1)),
            (0x2f94, Slot::new(960, 1)), (0x2f95, Slot::new(961, 1)), (0x2f96, Slot::new(962, 1)), (0x2f97, Slot::new(963, 1)),
            (0x2f98, Slot::new(964, 1)), (0x2f99, Slot::new(965, 1)), (0x2f9a, Slot::new(966, 1)), (0x2f9b, Slot::new(967, 1)),
            (0x2f9c, Slot::new(968, 1)), (0x2f9d, Slot::new(969, 1)), (0x2f9e, Slot::new(970, 1)), (0x2f9f, Slot::new(971, 1)),
            (0x2fa0, Slot::new(972, 1)), (0x2fa1, Slot::new(973, 1)), (0x2fa2, Slot::new(974, 1)), (0x2fa3, Slot::new(975, 1)),
            (0x2fa4, Slot::new(976, 1)), (0x2fa5, Slot::new(977, 1)), (0x2fa6, Slot::new(978, 1)), (0x2fa7, Slot::new(979, 1)),
            (0x2fa8, Slot::new(980, 1)), (0x2fa9, Slot::new(981, 1)), (0x2faa, Slot::new(982, 1)), (0x2fab, Slot::new(983, 1)),
            (0x2fac, Slot::new(984, 1)), (0x2fad, Slot::new(985, 1)), (0x2fae, Slot::new(986, 1)), (0x2faf, Slot::new(987, 1)),
            (0x2fb0, Slot::new(988, 1)), (0x2fb1, Slot::new(989, 1)), (0x2fb2, Slot::new(990, 1)), (0x2fb3, Slot::new(991, 1)),
            (0x2fb4, Slot::new(992, 1)), (0x2fb5, Slot::new(993, 1)), (0x2fb6, Slot::new(994, 1)), (0x2fb7, Slot::new(995, 1)),
            (0x2fb8, Slot::new(996, 1)), (0x2fb9, Slot::new(997, 1)), (0x2fba, Slot::new(998, 1)), (0x2fbb, Slot::new(999, 1)),
            (0x2fbc, Slot::new(1000, 1)), (0x2fbd, Slot::new(1001, 1)), (0x2fbe, Slot::new(1002, 1)), (0x2fbf, Slot::new(1003, 1)),
            (0x2fc0, Slot::new(1004, 1)), (0x2fc1, Slot::new(1005, 1)), (0x2fc2, Slot::new(1006, 1)), (0x2fc3, Slot::new(1007, 1)),
            (0x2fc4, Slot::new(1008, 1)), (0x2fc5, Slot::new(1009, 1)), (0x2fc6, Slot::new(1010, 1)), (0x2fc7, Slot::new(1011, 1)),
            (0x2fc8, Slot::new(1012, 1)), (0x2fc9, Slot::new(1013, 1)), (0x2fca, Slot::new(1014, 1)), (0x2fcb, Slot::new(1015, 1)),
            (0x2fcc, Slot::new(1016, 1)), (0x2fcd, Slot::new(1017, 1)), (0x2fce, Slot::new(1018, 1)), (0x2fcf, Slot::new(1019, 1)),
            (0x2fd0, Slot::new(1020, 1)), (0x2fd1, Slot::new(1021, 1)), (0x2fd2, Slot::new(1022, 1)), (0x2fd3, Slot::new(1023, 1)),
            (0x2fd4, Slot::new(1024, 1)), (0x2fd5, Slot::new(1025, 1)), (0x3000, Slot::new(1026, 1)), (0x3036, Slot::new(1027, 1)),
            (0x3038, Slot::new(1028, 1)), (0x3039, Slot::new(1029, 1)), (0x303a, Slot::new(1030, 1)), (0x309b, Slot::new(1031, 2)),
            (0x309c, Slot::new(1033, 2)), (0x309f, Slot::new(1035, 2)), (0x30ff, Slot::new(1037, 2)), (0x3131, Slot::new(1039, 1)),
            (0x3132, Slot::new(1040, 1)), (0x3133, Slot::new(1041, 1)), (0x3134, Slot::new(1042, 1)), (0x3135, Slot::new(1043, 1)),
            (0x3136, Slot::new(1044, 1)), (0x3137, Slot::new(1045, 1)), (0x3138, Slot::new(1046, 1)), (0x3139, Slot::new(1047, 1)),
            (0x313a, Slot::new(1048, 1)), (0x313b, Slot::new(1049, 1)), (0x313c, Slot::new(1050, 1)), (0x313d, Slot::new(1051, 1)),
            (0x313e, Slot::new(1052, 1)), (0x313f, Slot::new(1053, 1)), (0x3140, Slot::new(1054, 1)), (0x3141, Slot::new(1055, 1)),
            (0x3142, Slot::new(1056, 1)), (0x3143, Slot::new(1057, 1)), (0x3144, Slot::new(1058, 1)), (0x3145, Slot::new(1059, 1)),
            (0x3146, Slot::new(1060, 1)), (0x3147, Slot::new(1061, 1)), (0x3148, Slot::new(1062, 1)), (0x3149, Slot::new(1063, 1)),
            (0x314a, Slot::new(1064, 1)), (0x314b, Slot::new(1065, 1)), (0x314c, Slot::new(1066, 1)), (0x314d, Slot::new(1067, 1)),
            (0x314e, Slot::new(1068, 1)), (0x314f, Slot::new(1069, 1)), (0x3150, Slot::new(1070, 1)), (0x3151, Slot::new(1071, 1)),
            (0x3152, Slot::new(1072, 1)), (0x3153, Slot::new(1073, 1)), (0x3154, Slot::new(1074, 1)), (0x3155, Slot::new(1075, 1)),
            (0x3156, Slot::new(1076, 1)), (0x3157, Slot::new(1077, 1)), (0x3158, Slot::new(1078, 1)), (0x3159, Slot::new(1079, 1)),
            (0x315a, Slot::new(1080, 1)), (0x315b, Slot::new(1081, 1)), (0x315c, Slot::new(1082, 1)), (0x315d, Slot::new(1083, 1)),
            (0x315e, Slot::new(1084, 1)), (0x315f, Slot::new(1085, 1)), (0x3160, Slot::new(1086, 1)), (0x3161, Slot::new(1087, 1)),
            (0x3162, Slot::new(1088, 1)), (0x3163, Slot::new(1089, 1)), (0x3164, Slot::new(1090, 1)), (0x3165, Slot::new(1091, 1)),
            (0x3166, Slot::new(1092, 1)), (0x3167, Slot::new(1093, 1)), (0x3168, Slot::new(1094, 1)), (0x3169, Slot::new(1095, 1)),
            (0x316a, Slot::new(1096, 1)), (0x316b, Slot::new(1097, 1)), (0x316c, Slot::new(1098, 1)), (0x316d, Slot::new(1099, 1)),
            (0x316e, Slot::new(1100, 1)), (0x316f, Slot::new(1101, 1)), (0x3170, Slot::new(1102, 1)), (0x3171, Slot::new(1103, 1)),
            (0x3172, Slot::new(1104, 1)), (0x3173, Slot::new(1105, 1)), (0x3174, Slot::new(1106, 1)), (0x3175, Slot::new(1107, 1)),
            (0x3176, Slot::new(1108, 1)), (0x3177, Slot::new(1109, 1)), (0x3178, Slot::new(1110, 1)), (0x3179, Slot::new(1111, 1)),
            (0x317a, Slot::new(1112, 1)), (0x317b, Slot::new(1113, 1)), (0x317c, Slot::new(1114, 1)), (0x317d, Slot::new(1115, 1)),
            (0x317e, Slot::new(1116, 1)), (0x317f, Slot::new(1117, 1)), (0x3180, Slot::new(1118, 1)), (0x3181, Slot::new(1119, 1)),
            (0x3182, Slot::new(1120, 1)), (0x3183, Slot::new(1121, 1)), (0x3184, Slot::new(1122, 1)), (0x3185, Slot::new(1123, 1)),
            (0x3186, Slot::new(1124, 1)), (0x3187, Slot::new(1125, 1)), (0x3188, Slot::new(1126, 1)), (0x3189, Slot::new(1127, 1)),
            (0x318a, Slot::new(1128, 1)), (0x318b, Slot::new(1129, 1)), (0x318c, Slot::new(1130, 1)), (0x318d, Slot::new(1131, 1)),
            (0x318e, Slot::new(1132, 1)), (0x3192, Slot::new(1133, 1)), (0x3193, Slot::new(1134, 1)), (0x3194, Slot::new(1135, 1)),
            (0x3195, Slot::new(1136, 1)), (0x3196, Slot::new(1137, 1)), (0x3197, Slot::new(1138, 1)), (0x3198, Slot::new(1139, 1)),
            (0x3199, Slot::new(1140, 1)), (0x319a, Slot::new(1141, 1)), (0x319b, Slot::new(1142, 1)), (0x319c, Slot::new(1143, 1)),
            (0x319d, Slot::new(1144, 1)), (0x319e, Slot::new(1145, 1)), (0x319f, Slot::new(1146, 1)), (0x3200, Slot::new(1147, 3)),
            (0x3201, Slot::new(1150, 3)), (0x3202, Slot::new(1153, 3)), (0x3203, Slot::new(1156, 3)), (0x3204, Slot::new(1159, 3)),
            (0x3205, Slot::new(1162, 3)), (0x3206, Slot::new(1165, 3)), (0x3207, Slot::new(1168, 3)), (0x3208, Slot::new(1171, 3)),
            (0x3209, Slot::new(1174, 3)), (0x320a, Slot::new(1177, 3)), (0x320b, Slot::new(1180, 3)), (0x320c, Slot::new(1183, 3)),
            (0x320d, Slot::new(1186, 3)), (0x320e, Slot::new(1189, 4)), (0x320f, Slot::new(1193, 4)), (0x3210, Slot::new(1197, 4)),
            (0x3211, Slot::new(1201, 4)), (0x3212, Slot::new(1205, 4)), (0x3213, Slot::new(1209, 4)), (0x3214, Slot::new(1213, 4)),
            (0x3215, Slot::new(1217, 4)), (0x3216, Slot::new(1221, 4)), (0x3217, Slot::new(1225, 4)), (0x3218, Slot::new(1229, 4)),
            (0x3219, Slot::new(1233, 4)), (0x321a, Slot::new(1237, 4)), (0x321b, Slot::new(1241, 4)), (0x321c, Slot::new(1245, 4)),
            (0x321d, Slot::new(1249, 7)), (0x321e, Slot::new(1256, 6)), (0x3220, Slot::new(1262, 3)), (0x3221, Slot::new(1265, 3)),
            (0x3222, Slot::new(1268, 3)), (0x3223, Slot::new(1271, 3)), (0x3224, Slot::new(1274, 3)), (0x3225, Slot::new(1277, 3)),
            (0x3226, Slot::new(1280, 3)), (0x3227, Slot::new(1283, 3)), (0x3228, Slot::new(1286, 3)), (0x3229, Slot::new(1289, 3)),
            (0x322a, Slot::new(1292, 3)), (0x322b, Slot::new(1295, 3)), (0x322c, Slot::new(1298, 3)), (0x322d, Slot::new(1301, 3)),
            (0x322e, Slot::new(1304, 3)), (0x322f, Slot::new(1307, 3)), (0x3230, Slot::new(1310, 3)), (0x3231, Slot::new(1313, 3)),
            (0x3232, Slot::new(1316, 3)), (0x3233, Slot::new(1319, 3)), (0x3234, Slot::new(1322, 3)), (0x3235, Slot::new(1325, 3)),
            (0x3236, Slot::new(1328, 3)), (0x3237, Slot::new(1331, 3)), (0x3238, Slot::new(1334, 3)), (0x3239, Slot::new(1337, 3)),
            (0x323a, Slot::new(1340, 3)), (0x323b, Slot::new(1343, 3)), (0x323c, Slot::new(1346, 3)), (0x323d, Slot::new(1349, 3)),
            (0x323e, Slot::new(1352, 3)), (0x323f, Slot::new(1355, 3)), (0x3240, Slot::new(1358, 3)), (0x3241, Slot::new(1361, 3)),
            (0x3242, Slot::new(1364, 3)), (0x3243, Slot::new(1367, 3)), (0x3244, Slot::new(1370, 1)), (0x3245, Slot::new(1371, 1)),
            (0x3246, Slot::new(1372, 1)), (0x3247, Slot::new(1373, 1)), (0x3250, Slot::new(1374, 3)), (0x3251, Slot::new(1377, 2)),
            (0x3252, Slot::new(1379, 2)), (0x3253, Slot::new(1381, 2)), (0x3254, Slot::new(1383, 2)), (0x3255, Slot::new(1385, 2)),
            (0x3256, Slot::new(1387, 2)), (0x3257, Slot::new(1389, 2)), (0x3258, Slot::new(1391, 2)), (0x3259, Slot::new(1393, 2)),
            (0x325a, Slot::new(1395, 2)), (0x325b, Slot::new(1397, 2)), (0x325c, Slot::new(1399, 2)), (0x325d, Slot::new(1401, 2)),
            (0x325e, Slot::new(1403, 2)), (0x325f, Slot::new(1405, 2)), (0x3260, Slot::new(1407, 1)), (0x3261, Slot::new(1408, 1)),
            (0x3262, Slot::new(1409, 1)), (0x3263, Slot::new(1410, 1)), (0x3264, Slot::new(1411, 1)), (0x3265, Slot::new(1412, 1)),
            (0x3266, Slot::new(1413, 1)), (0x3267, Slot::new(1414, 1)), (0x3268, Slot::new(1415, 1)), (0x3269, Slot::new(1416, 1)),
            (0x326a, Slot::new(1417, 1)), (0x326b, Slot::new(1418, 1)), (0x326c, Slot::new(1419, 1)), (0x326d, Slot::new(1420, 1)),
            (0x326e, Slot::new(1421, 2)), (0x326f, Slot::new(1423, 2)), (0x3270, Slot::new(1425, 2)), (0x3271, Slot::new(1427, 2)),
            (0x3272, Slot::new(1429, 2)), (0x3273, Slot::new(1431, 2)), (0x3274, Slot::new(1433, 2)), (0x3275, Slot::new(1435, 2)),
            (0x3276, Slot::new(1437, 2)), (0x3277, Slot::new(1439, 2)), (0x3278, Slot::new(1441, 2)), (0x3279, Slot::new(1443, 2)),
            (0x327a, Slot::new(1445, 2)), (0x327b, Slot::new(1447, 2)), (0x327c, Slot::new(1449, 5)), (0x327d, Slot::new(1454, 4)),
            (0x327e, Slot::new(1458, 2)), (0x3280, Slot::new(1460, 1)), (0x3281, Slot::new(1461, 1)), (0x3282, Slot::new(1462, 1)),
            (0x3283, Slot::new(1463, 1)), (0x3284, Slot::new(1464, 1)), (0x3285, Slot::new(1465, 1)), (0x3286, Slot::new(1466, 1)),
            (0x3287, Slot::new(1467, 1)), (0x3288, Slot::new(1468, 1)), (0x3289, Slot::new(1469, 1)), (0x328a, Slot::new(1470, 1)),
            (0x328b, Slot::new(1471, 1)), (0x328c, Slot::new(1472, 1)), (0x328d, Slot::new(1473, 1)), (0x328e, Slot::new(1474, 1)),
            (0x328f, Slot::new(1475, 1)), (0x3290, Slot::new(1476, 1)), (0x3291, Slot::new(1477, 1)), (0x3292, Slot::new(1478, 1)),
            (0x3293, Slot::new(1479, 1)), (0x3294, Slot::new(1480, 1)), (0x3295, Slot::new(1481, 1)), (0x3296, Slot::new(1482, 1)),
            (0x3297, Slot::new(1483, 1)), (0x3298, Slot::new(1484, 1)), (0x3299, Slot::new(1485, 1)), (0x329a, Slot::new(1486, 1)),
            (0x329b, Slot::new(1487, 1)), (0x329c, Slot::new(1488, 1)), (0x329d, Slot::new(1489, 1)), (0x329e, Slot::new(1490, 1)),
            (0x329f, Slot::new(1491, 1)), (0x32a0, Slot::new(1492, 1)), (0x32a1, Slot::new(1493, 1)), (0x32a2, Slot::new(1494, 1)),
            (0x32a3, Slot::new(1495, 1)), (0x32a4, Slot::new(1496, 1)), (0x32a5, Slot::new(1497, 1)), (0x32a6, Slot::new(1498, 1)),
            (0x32a7, Slot::new(1499, 1)), (0x32a8, Slot::new(1500, 1)), (0x32a9, Slot::new(1501, 1)), (0x32aa, Slot::new(1502, 1)),
            (0x32ab, Slot::new(1503, 1)), (0x32ac, Slot::new(1504, 1)), (0x32ad, Slot::new(1505, 1)), (0x32ae, Slot::new(1506, 1)),
            (0x32af, Slot::new(1507, 1)), (0x32b0, Slot::new(1508, 1)), (0x32b1, Slot::new(1509, 2)), (0x32b2, Slot::new(1511, 2)),
            (0x32b3, Slot::new(1513, 2)), (0x32b4, Slot::new(1515, 2)), (0x32b5, Slot::new(1517, 2)), (0x32b6, Slot::new(1519, 2)),
            (0x32b7, Slot::new(1521, 2)), (0x32b8, Slot::new(1523, 2)), (0x32b9, Slot::new(1525, 2)), (0x32ba, Slot::new(1527, 2)),
            (0x32bb, Slot::new(1529, 2)), (0x32bc, Slot::new(1531, 2)), (0x32bd, Slot::new(1533, 2)), (0x32be, Slot::new(1535, 2)),
            (0x32bf, Slot::new(1537, 2)), (0x32c0, Slot::new(1539, 2)), (0x32c1, Slot::new(1541, 2)), (0x32c2, Slot::new(1543, 2)),
            (0x32c3, Slot::new(1545, 2)), (0x32c4, Slot::new(1547, 2)), (0x32c5, Slot::new(1549, 2)), (0x32c6, Slot::new(1551, 2)),
            (0x32c7, Slot::new(1553, 2)), (0x32c8, Slot::new(1555, 2)), (0x32c9, Slot::new(1557, 3)), (0x32ca, Slot::new(1560, 3)),
            (0x32cb, Slot::new(1563, 3)), (0x32cc, Slot::new(1566, 2)), (0x32cd, Slot::new(1568, 3)), (0x32ce, Slot::new(1571, 2)),
            (0x32cf, Slot::new(1573, 3)), (0x32d0, Slot::new(1576, 1)), (0x32d1, Slot::new(1577, 1)), (0x32d2, Slot::new(1578, 1)),
            (0x32d3, Slot::new(1579, 1)), (0x32d4, Slot::new(1580, 1)), (0x32d5, Slot::new(1581, 1)), (0x32d6, Slot::new(1582, 1)),
            (0x32d7, Slot::new(1583, 1)), (0x32d8, Slot::new(1584, 1)), (0x32d9, Slot::new(1585, 1)), (0x32da, Slot::new(1586, 1)),
            (0x32db, Slot::new(1587, 1)), (0x32dc, Slot::new(1588, 1)), (0x32dd, Slot::new(1589, 1)), (0x32de, Slot::new(1590, 1)),
            (0x32df, Slot::new(1591, 1)), (0x32e0, Slot::new(1592, 1)), (0x32e1, Slot::new(1593, 1)), (0x32e2, Slot::new(1594, 1)),
            (0x32e3, Slot::new(1595, 1)), (0x32e4, Slot::new(1596, 1)), (0x32e5, Slot::new(1597, 1)), (0x32e6, Slot::new(1598, 1)),
            (0x32e7, Slot::new(1599, 1)), (0x32e8, Slot::new(1600, 1)), (0x32e9, Slot::new(1601, 1)), (0x32ea, Slot::new(1602, 1)),
            (0x32eb, Slot::new(1603, 1)), (0x32ec, Slot::new(1604, 1)), (0x32ed, Slot::new(1605, 1)), (0x32ee, Slot::new(1606, 1)),
            (0x32ef, Slot::new(1607, 1)), (0x32f0, Slot::new(1608, 1)), (0x32f1, Slot::new(1609, 1)), (0x32f2, Slot::new(1610, 1)),
            (0x32f3, Slot::new(1611, 1)), (0x32f4, Slot::new(1612, 1)), (0x32f5, Slot::new(1613, 1)), (0x32f6, Slot::new(1614, 1)),
            (0x32f7, Slot::new(1615, 1)), (0x32f8, Slot::new(1616, 1)), (0x32f9, Slot::new(1617, 1)), (0x32fa, Slot::new(1618, 1)),
            (0x32fb, Slot::new(1619, 1)), (0x32fc, Slot::new(1620, 1)), (0x32fd, Slot::new(1621, 1)), (0x32fe, Slot::new(1622, 1)),
            (0x32ff, Slot::new(1623, 2)), (0x3300, Slot::new(1625, 4)), (0x3301, Slot::new(1629, 4)), (0x3302, Slot::new(1633, 4)),
            (0x3303, Slot::new(1637, 3)), (0x3304, Slot::new(1640, 4)), (0x3305, Slot::new(1644, 3)), (0x3306, Slot::new(1647, 3)),
            (0x3307, Slot::new(1650, 5)), (0x3308, Slot::new(1655, 4)), (0x3309, Slot::new(1659, 3)), (0x330a, Slot::new(1662, 3)),
            (0x330b, Slot::new(1665, 3)), (0x330c, Slot::new(1668, 4)), (0x330d, Slot::new(1672, 4)), (0x330e, Slot::new(1676, 3)),
            (0x330f, Slot::new(1679, 3)), (0x3310, Slot::new(1682, 2)), (0x3311, Slot::new(1684, 3)), (0x3312, Slot::new(1687, 4)),
            (0x3313, Slot::new(1691, 4)), (0x3314, Slot::new(1695, 2)), (0x3315, Slot::new(1697, 5)), (0x3316, Slot::new(1702, 6)),
            (0x3317, Slot::new(1708, 5)), (0x3318, Slot::new(1713, 3)), (0x3319, Slot::new(1716, 5)), (0x331a, Slot::new(1721, 5)),
            (0x331b, Slot::new(1726, 4)), (0x331c, Slot::new(1730, 3)), (0x331d, Slot::new(1733, 3)), (0x331e, Slot::new(1736, 3)),
            (0x331f, Slot::new(1739, 4)), (0x3320, Slot::new(1743, 5)), (0x3321, Slot::new(1748, 4)), (0x3322, Slot::new(1752, 3)),
            (0x3323, Slot::new(1755, 3)), (0x3324, Slot::new(1758, 3)), (0x3325, Slot::new(1761, 2)), (0x3326, Slot::new(1763, 2)),
            (0x3327, Slot::new(1765, 2)), (0x3328, Slot::new(1767, 2)), (0x3329, Slot::new(1769, 3)), (0x332a, Slot::new(1772, 3)),
            (0x332b, Slot::new(1775, 5)), (0x332c, Slot::new(1780, 3)), (0x332d, Slot::new(1783, 4)), (0x332e, Slot::new(1787, 5)),
            (0x332f, Slot::new(1792, 3)), (0x3330, Slot::new(1795, 2)), (0x3331, Slot::new(1797, 2)), (0x3332, Slot::new(1799, 5)),
            (0x3333, Slot::new(1804, 4)), (0x3334, Slot::new(1808, 5)), (0x3335, Slot::new(1813, 3)), (0x3336, Slot::new(1816, 5)),
            (0x3337, Slot::new(1821, 2)), (0x3338, Slot::new(1823, 3)), (0x3339, Slot::new(1826, 3)), (0x333a, Slot::new(1829, 3)),
            (0x333b, Slot::new(1832, 3)), (0x333c, Slot::new(1835, 3)), (0x333d, Slot::new(1838, 4)), (0x333e, Slot::new(1842, 3)),
            (0x333f, Slot::new(1845, 2)), (0x3340, Slot::new(1847, 3)), (0x3341, Slot::new(1850, 3)), (0x3342, Slot::new(1853, 3)),
            (0x3343, Slot::new(1856, 4)), (0x3344, Slot::new(1860, 3)), (0x3345, Slot::new(1863, 3)), (0x3346, Slot::new(1866, 3)),
            (0x3347, Slot::new(1869, 5)), (0x3348, Slot::new(1874, 4)), (0x3349, Slot::new(1878, 2)), (0x334a, Slot::new(1880, 5)),
            (0x334b, Slot::new(1885, 2)), (0x334c, Slot::new(1887, 4)), (0x334d, Slot::new(1891, 4)), (0x334e, Slot::new(1895, 3)),
            (0x334f, Slot::new(1898, 3)), (0x3350, Slot::new(1901, 3)), (0x3351, Slot::new(1904, 4)), (0x3352, Slot::new(1908, 2)),
            (0x3353, Slot::new(1910, 3)), (0x3354, Slot::new(1913, 4)), (0x3355, Slot::new(1917, 2)), (0x3356, Slot::new(1919, 5)),
            (0x3357, Slot::new(1924, 3)), (0x3358, Slot::new(1927, 2)), (0x3359, Slot::new(1929, 2)), (0x335a, Slot::new(1931, 2)),
            (0x335b, Slot::new(1933, 2)), (0x335c, Slot::new(1935, 2)), (0x335d, Slot::new(1937, 2)), (0x335e, Slot::new(1939, 2)),
            (0x335f, Slot::new(1941, 2)), (0x3360, Slot::new(1943, 2)), (0x3361, Slot::new(1945, 2)), (0x3362, Slot::new(1947, 3)),
            (0x3363, Slot::new(1950, 3)), (0x3364, Slot::new(1953, 3)), (0x3365, Slot::new(1956, 3)), (0x3366, Slot::new(1959, 3)),
            (0x3367, Slot::new(1962, 3)), (0x3368, Slot::new(1965, 3)), (0x3369, Slot::new(1968, 3)), (0x336a, Slot::new(1971, 3)),
            (0x336b, Slot::new(1974, 3)), (0x336c, Slot::new(1977, 3)), (0x336d, Slot::new(1980, 3)), (0x336e, Slot::new(1983, 3)),
            (0x336f, Slot::new(1986, 3)), (0x3370, Slot::new(1989, 3)), (0x3371, Slot::new(1992, 3)), (0x3372, Slot::new(1995, 2)),
            (0x3373, Slot::new(1997, 2)), (0x3374, Slot::new(1999, 3)), (0x3375, Slot::new(2002, 2)), (0x3376, Slot::new(2004, 2)),
            (0x3377, Slot::new(2006, 2)), (0x3378, Slot::new(2008, 3)), (0x3379, Slot::new(2011, 3)), (0x337a, Slot::new(2014, 2)),
            (0x337b, Slot::new(2016, 2)), (0x337c, Slot::new(2018, 2)), (0x337d, Slot::new(2020, 2)), (0x337e, Slot::new(2022, 2)),
            (0x337f, Slot::new(2024, 4)), (0x3380, Slot::new(2028, 2)), (0x3381, Slot::new(2030, 2)), (0x3382, Slot::new(2032, 2)),
            (0x3383, Slot::new(2034, 2)), (0x3384, Slot::new(2036, 2)), (0x3385, Slot::new(2038, 2)), (0x3386, Slot::new(2040, 2)),
            (0x3387, Slot::new(2042, 2)), (0x3388, Slot::new(2044, 3)), (0x3389, Slot::new(2047, 4)), (0x338a, Slot::new(2051, 2)),
            (0x338b, Slot::new(2053, 2)), (0x338c, Slot::new(2055, 2)), (0x338d, Slot::new(2057, 2)), (0x338e, Slot::new(2059, 2)),
            (0x338f, Slot::new(2061, 2)), (0x3390, Slot::new(2063, 2)), (0x3391, Slot::new(2065, 3)), (0x3392, Slot::new(2068, 3)),
            (0x3393, Slot::new(2071, 3)), (0x3394, Slot::new(2074, 3)), (0x3395, Slot::new(2077, 2)), (0x3396, Slot::new(2079, 2)),
            (0x3397, Slot::new(2081, 2)), (0x3398, Slot::new(2083, 2)), (0x3399, Slot::new(2085, 2)), (0x339a, Slot::new(2087, 2)),
            (0x339b, Slot::new(2089, 2)), (0x339c, Slot::new(2091, 2)), (0x339d, Slot::new(2093, 2)), (0x339e, Slot::new(2095, 2)),
            (0x339f, Slot::new(2097, 3)), (0x33a0, Slot::new(2100, 3)), (0x33a1, Slot::new(2103, 2)), (0x33a2, Slot::new(2105, 3)),
            (0x33a3, Slot::new(2108, 3)), (0x33a4, Slot::new(2111, 3)), (0x33a5, Slot::new(2114, 2)), (0x33a6, Slot::new(2116, 3)),
            (0x33a7, Slot::new(2119, 3)), (0x33a8, Slot::new(2122, 4)), (0x33a9, Slot::new(2126, 2)), (0x33aa, Slot::new(2128, 3)),
            (0x33ab, Slot::new(2131, 3)), (0x33ac, Slot::new(2134, 3)), (0x33ad, Slot::new(2137, 3)), (0x33ae, Slot::new(2140, 5)),
            (0x33af, Slot::new(2145, 6)), (0x33b0, Slot::new(2151, 2)), (0x33b1, Slot::new(2153, 2)), (0x33b2, Slot::new(2155, 2)),
            (0x33b3, Slot::new(2157, 2)), (0x33b4, Slot::new(2159, 2)), (0x33b5, Slot::new(2161, 2)), (0x33b6, Slot::new(2163, 2)),
            (0x33b7, Slot::new(2165, 2)), (0x33b8, Slot::new(2167, 2)), (0x33b9, Slot::new(2169, 2)), (0x33ba, Slot::new(2171, 2)),
            (0x33bb, Slot::new(2173, 2)), (0x33bc, Slot::new(2175, 2)), (0x33bd, Slot::new(2177, 2)), (0x33be, Slot::new(2179, 2)),
            (0x33bf, Slot::new(2181, 2)), (0x33c0, Slot::new(2183, 2)), (0x33c1, Slot::new(2185, 2)), (0x33c2, Slot::new(2187, 4)),
            (0x33c3, Slot::new(2191, 2)), (0x33c4, Slot::new(2193, 2)), (0x33c5, Slot::new(2195, 2)), (0x33c6, Slot::new(2197, 4)),
            (0x33c7, Slot::new(2201, 3)), (0x33c8, Slot::new(2204, 2)), (0x33c9, Slot::new(2206, 2)), (0x33ca, Slot::new(2208, 2)),
            (0x33cb, Slot::new(2210, 2)), (0x33cc, Slot::new(2212, 2)), (0x33cd, Slot::new(2214, 2)), (0x33ce, Slot::new(2216, 2)),
            (0x33cf, Slot::new(2218, 2)), (0x33d0, Slot::new(2220, 2)), (0x33d1, Slot::new(2222, 2)), (0x33d2, Slot::new(2224, 3)),
            (0x33d3, Slot::new(2227, 2)), (0x33d4, Slot::new(2229, 2)), (0x33d5, Slot::new(2231, 3)), (0x33d6, Slot::new(2234, 3)),
            (0x33d7, Slot::new(2237, 2)), (0x33d8, Slot::new(2239, 4)), (0x33d9, Slot::new(2243, 3)), (0x33da, Slot::new(2246, 2)),
            (0x33db, Slot::new(2248, 2)), (0x33dc, Slot::new(2250, 2)), (0x33dd, Slot::new(2252, 2)), (0x33de, Slot::new(2254, 3)),
            (0x33df, Slot::new(2257, 3)), (0x33e0, Slot::new(2260, 2)), (0x33e1, Slot::new(2262, 2)), (0x33e2, Slot::new(2264, 2)),
            (0x33e3, Slot::new(2266, 2)), (0x33e4, Slot::new(2268, 2)), (0x33e5, Slot::new(2270, 2)), (0x33e6, Slot::new(2272, 2)),
            (0x33e7, Slot::new(2274, 2)), (0x33e8, Slot::new(2276, 2)), (0x33e9, Slot::new(2278, 3)), (0x33ea, Slot::new(2281, 3)),
            (0x33eb, Slot::new(2284, 3)), (0x33ec, Slot::new(2287, 3)), (0x33ed, Slot::new(2290, 3)), (0x33ee, Slot::new(2293, 3)),
            (0x33ef, Slot::new(2296, 3)), (0x33f0, Slot::new(2299, 3)), (0x33f1, Slot::new(2302, 3)), (0x33f2, Slot::new(2305, 3)),
            (0x33f3, Slot::new(2308, 3)), (0x33f4, Slot::new(2311, 3)), (0x33f5, Slot::new(2314, 3)), (0x33f6, Slot::new(2317, 3)),
            (0x33f7, Slot::new(2320, 3)), (0x33f8, Slot::new(2323, 3)), (0x33f9, Slot::new(2326, 3)), (0x33fa, Slot::new(2329, 3)),
            (0x33fb, Slot::new(2332, 3)), (0x33fc, Slot::new(2335, 3)), (0x33fd, Slot::new(2338, 3)), (0x33fe, Slot::new(2341, 3)),
            (0x33ff, Slot::new(2344, 3)), (0xa69c, Slot::new(2347, 1)), (0xa69d, Slot::new(2348, 1)), (0xa770, Slot::new(2349, 1)),
            (0xa7f2, Slot::new(2350, 1)), (0xa7f3, Slot::new(2351, 1)), (0xa7f4, Slot::new(2352, 1)), (0xa7f8, Slot::new(2353, 1)),
            (0xa7f9, Slot::new(2354, 1)), (0xab5c, Slot::new(2355, 1)), (0xab5d, Slot::new(2356, 1)), (0xab5e, Slot::new(2357, 1)),
            (0xab5f, Slot::new(2358, 1)), (0xab69, Slot::new(2359, 1)), (0xfb00, Slot::new(2360, 2)), (0xfb01, Slot::new(2362, 2)),
            (0xfb02, Slot::new(2364, 2)), (0xfb03, Slot::new(2366, 3)), (0xfb04, Slot::new(2369, 3)), (0xfb05, Slot::new(2372, 2)),
            (0xfb06, Slot::new(2374, 2)), (0xfb13, Slot::new(2376, 2)), (0xfb14, Slot::new(2378, 2)), (0xfb15, Slot::new(2380, 2)),
            (0xfb16, Slot::new(2382, 2)), (0xfb17, Slot::new(2384, 2)), (0xfb20, Slot::new(2386, 1)), (0xfb21, Slot::new(2387, 1)),
            (0xfb22, Slot::new(2388, 1)), (0xfb23, Slot::new(2389, 1)), (0xfb24, Slot::new(2390, 1)), (0xfb25, Slot::new(2391, 1)),
            (0xfb26, Slot::new(2392, 1)), (0xfb27, Slot::new(2393, 1)), (0xfb28, Slot::new(2394, 1)), (0xfb29, Slot::new(2395, 1)),
            (0xfb4f, Slot::new(2396, 2)), (0xfb50, Slot::new(2398, 1)), (0xfb51, Slot::new(2399, 1)), (0xfb52, Slot::new(2400, 1)),
            (0xfb53, Slot::new(2401, 1)), (0xfb54, Slot::new(2402, 1)), (0xfb55, Slot::new(2403, 1)), (0xfb56, Slot::new(2404, 1)),
            (0xfb57, Slot::new(2405, 1)), (0xfb58, Slot::new(2406, 1)), (0xfb59, Slot::new(2407, 1)), (0xfb5a, Slot::new(2408, 1)),
            (0xfb5b, Slot::new(2409, 1)), (0xfb5c, Slot::new(2410, 1)), (0xfb5d, Slot::new(2411, 1)), (0xfb5e, Slot::new(2412, 1)),
            (0xfb5f, Slot::new(2413, 1)), (0xfb60, Slot::new(2414, 1)), (0xfb61, Slot::new(2415, 1)), (0xfb62, Slot::new(2416, 1)),
            (0xfb63, Slot::new(2417, 1)), (0xfb64, Slot::new(2418, 1)), (0xfb65, Slot::new(2419, 1)), (0xfb66, Slot::new(2420, 1)),
            (0xfb67, Slot::new(2421, 1)), (0xfb68, Slot::new(2422, 1)), (0xfb69, Slot::new(2423, 1)), (0xfb6a, Slot::new(2424, 1)),
            (0xfb6b, Slot::new(2425, 1)), (0xfb6c, Slot::new(2426, 1)), (0xfb6d, Slot::new(2427, 1)), (0xfb6e, Slot::new(2428, 1)),
            (0xfb6f, Slot::new(2429, 1)), (0xfb70, Slot::new(2430, 1)), (0xfb71, Slot::new(2431, 1)), (0xfb72, Slot::new(2432, 1)),
            (0xfb73, Slot::new(2433, 1)), (0xfb74, Slot::new(2434, 1)), (0xfb75, Slot::new(2435, 1)), (0xfb76, Slot::new(2436, 1)),
            (0xfb77, Slot::new(2437, 1)), (0xfb78, Slot::new(2438, 1)), (0xfb79, Slot::new(2439, 1)), (0xfb7a, Slot::new(2440, 1)),
            (0xfb7b, Slot::new(2441, 1)), (0xfb7c, Slot::new(2442, 1)), (0xfb7d, Slot::new(2443, 1)), (0xfb7e, Slot::new(2444, 1)),
            (0xfb7f, Slot::new(2445, 1)), (0xfb80, Slot::new(2446, 1)), (0xfb81, Slot::new(2447, 1)), (0xfb82, Slot::new(2448, 1)),
            (0xfb83, Slot::new(2449, 1)), (0xfb84, Slot::new(2450, 1)), (0xfb85, Slot::new(2451, 1)), (0xfb86, Slot::new(2452, 1)),
            (0xfb87, Slot::new(2453, 1)), (0xfb88, Slot::new(2454, 1)), (0xfb89, Slot::new(2455, 1)), (0xfb8a, Slot::new(2456, 1)),
            (0xfb8b, Slot::new(2457, 1)), (0xfb8c, Slot::new(2458, 1)), (0xfb8d, Slot::new(2459, 1)), (0xfb8e, Slot::new(2460, 1)),
            (0xfb8f, Slot::new(2461, 1)), (0xfb90, Slot::new(2462, 1)), (0xfb91, Slot::new(2463, 1)), (0xfb92, Slot::new(2464, 1)),
            (0xfb93, Slot::new(2465, 1)), (0xfb94, Slot::new(2466, 1)), (0xfb95, Slot::new(2467, 1)), (0xfb96, Slot::new(2468, 1)),
            (0xfb97, Slot::new(2469, 1)), (0xfb98, Slot::new(2470, 1)), (0xfb99, Slot::new(2471, 1)), (0xfb9a, Slot::new(2472, 1)),
            (0xfb9b, Slot::new(2473, 1)), (0xfb9c, Slot::new(2474, 1)), (0xfb9d, Slot::new(2475, 1)), (0xfb9e, Slot::new(2476, 1)),
            (0xfb9f, Slot::new(2477, 1)), (0xfba0, Slot::new(2478, 1)), (0xfba1, Slot::new(2479, 1)), (0xfba2, Slot::new(2480, 1)),
            (0xfba3, Slot::new(2481, 1)), (0xfba4, Slot::new(2482, 1)), (0xfba5, Slot::new(2483, 1)), (0xfba6, Slot::new(2484, 1)),
            (0xfba7, Slot::new(2485, 1)), (0xfba8, Slot::new(2486, 1)), (0xfba9, Slot::new(2487, 1)), (0xfbaa, Slot::new(2488, 1)),
            (0xfbab, Slot::new(2489, 1)), (0xfbac, Slot::new(2490, 1)), (0xfbad, Slot::new(2491, 1)), (0xfbae, Slot::new(2492, 1)),
            (0xfbaf, Slot::new(2493, 1)), (0xfbb0, Slot::new(2494, 1)), (0xfbb1, Slot::new(2495, 1)), (0xfbd3, Slot::new(2496, 1)),
            (0xfbd4, Slot::new(2497, 1)), (0xfbd5, Slot::new(2498, 1)), (0xfbd6, Slot::new(2499, 1)), (0xfbd7, Slot::new(2500, 1)),
            (0xfbd8, Slot::new(2501, 1)), (0xfbd9, Slot::new(2502, 1)), (0xfbda, Slot::new(2503, 1)), (0xfbdb, Slot::new(2504, 1)),
            (0xfbdc, Slot::new(2505, 1)), (0xfbdd, Slot::new(2506, 1)), (0xfbde, Slot::new(2507, 1)), (0xfbdf, Slot::new(2508, 1)),
            (0xfbe0, Slot::new(2509, 1)), (0xfbe1, Slot::new(2510, 1)), (0xfbe2, Slot::new(2511, 1)), (0xfbe3, Slot::new(2512, 1)),
            (0xfbe4, Slot::new(2513, 1)), (0xfbe5, Slot::new(2514, 1)), (0xfbe6, Slot::new(2515, 1)), (0xfbe7, Slot::new(2516, 1)),
            (0xfbe8, Slot::new(2517, 1)), (0xfbe9, Slot::new(2518, 1)), (0xfbea, Slot::new(2519, 2)), (0xfbeb, Slot::new(2521, 2)),
            (0xfbec, Slot::new(2523, 2)), (0xfbed, Slot::new(2525, 2)), (0xfbee, Slot::new(2527, 2)), (0xfbef, Slot::new(2529, 2)),
            (0xfbf0, Slot::new(2531, 2)), (0xfbf1, Slot::new(2533, 2)), (0xfbf2, Slot::new(2535, 2)), (0xfbf3, Slot::new(2537, 2)),
            (0xfbf4, Slot::new(2539, 2)), (0xfbf5, Slot::new(2541, 2)), (0xfbf6, Slot::new(2543, 2)), (0xfbf7, Slot::new(2545, 2)),
            (0xfbf8, Slot::new(2547, 2)), (0xfbf9, Slot::new(2549, 2)), (0xfbfa, Slot::new(2551, 2)), (0xfbfb, Slot::new(2553, 2)),
            (0xfbfc, Slot::new(2555, 1)), (0xfbfd, Slot::new(2556, 1)), (0xfbfe, Slot::new(2557, 1)), (0xfbff, Slot::new(2558, 1)),
            (0xfc00, Slot::new(2559, 2)), (0xfc01, Slot::new(2561, 2)), (0xfc02, Slot::new(2563, 2)), (0xfc03, Slot::new(2565, 2)),
            (0xfc04, Slot::new(2567, 2)), (0xfc05, Slot::new(2569, 2)), (0xfc06, Slot::new(2571, 2)), (0xfc07, Slot::new(2573, 2)),
            (0xfc08, Slot::new(2575, 2)), (0xfc09, Slot::new(2577, 2)), (0xfc0a, Slot::new(2579, 2)), (0xfc0b, Slot::new(2581, 2)),
            (0xfc0c, Slot::new(2583, 2)), (0xfc0d, Slot::new(2585, 2)), (0xfc0e, Slot::new(2587, 2)), (0xfc0f, Slot::new(2589, 2)),
            (0xfc10, Slot::new(2591, 2)), (0xfc11, Slot::new(2593, 2)), (0xfc12, Slot::new(2595, 2)), (0xfc13, Slot::new(2597, 2)),
            (0xfc14, Slot::new(2599, 2)), (0xfc15, Slot::new(2601, 2)), (0xfc16, Slot::new(2603, 2)), (0xfc17, Slot::new(2605, 2)),
            (0xfc18, Slot::new(2607, 2)), (0xfc19, Slot::new(2609, 2)), (0xfc1a, Slot::new(2611, 2)), (0xfc1b, Slot::new(2613, 2)),
            (0xfc1c, Slot::new(2615, 2)), (0xfc1d, Slot::new(2617, 2)), (0xfc1e, Slot::new(2619, 2)), (0xfc1f, Slot::new(2621, 2)),
            (0xfc20, Slot::new(2623, 2)), (0xfc21, Slot::new(2625, 2)), (0xfc22, Slot::new(2627, 2)), (0xfc23, Slot::new(2629, 2)),
            (0xfc24, Slot::new(2631, 2)), (0xfc25, Slot::new(2633, 2)), (0xfc26, Slot::new(2635, 2)), (0xfc27, Slot::new(2637, 2)),
            (0xfc28, Slot::new(2639, 2)), (0xfc29, Slot::new(2641, 2)), (0xfc2a, Slot::new(2643, 2)), (0xfc2b, Slot::new(2645, 2)),
            (0xfc2c, Slot::new(2647, 2)), (0xfc2d, Slot::new(2649, 2)), (0xfc2e, Slot::new(2651, 2)), (0xfc2f, Slot::new(2653, 2)),
            (0xfc30, Slot::new(2655, 2)), (0xfc31, Slot::new(2657, 2)), (0xfc32, Slot::new(2659, 2)), (0xfc33, Slot::new(2661, 2)),
            (0xfc34, Slot::new(2663, 2)), (0xfc35, Slot::new(2665, 2)), (0xfc36, Slot::new(2667, 2)), (0xfc37, Slot::new(2669, 2)),
            (0xfc38, Slot::new(2671, 2)), (0xfc39, Slot::new(2673, 2)), (0xfc3a, Slot::new(2675, 2)), (0xfc3b, Slot::new(2677, 2)),
            (0xfc3c, Slot::new(2679, 2)), (0xfc3d, Slot::new(2681, 2)), (0xfc3e, Slot::new(2683, 2)), (0xfc3f, Slot::new(2685, 2)),
            (0xfc40, Slot::new(2687, 2)), (0xfc41, Slot::new(2689, 2)), (0xfc42, Slot::new(2691, 2)), (0xfc43, Slot::new(2693, 2)),
            (0xfc44, Slot::new(2695, 2)), (0xfc45, Slot::new(2697, 2)), (0xfc46, Slot::new(2699, 2)), (0xfc47, Slot::new(2701, 2)),
            (0xfc48, Slot::new(2703, 2)), (0xfc49, Slot::new(2705, 2)), (0xfc4a, Slot::new(2707, 2)), (0xfc4b, Slot::new(2709, 2)),
            (0xfc4c, Slot::new(2711, 2)), (0xfc4d, Slot::new(2713, 2)), (0xfc4e, Slot::new(2715, 2)), (0xfc4f, Slot::new(2717, 2)),
            (0xfc50, Slot::new(2719, 2)), (0xfc51, Slot::new(2721, 2)), (0xfc52, Slot::new(2723, 2)), (0xfc53, Slot::new(2725, 2)),
            (0xfc54, Slot::new(2727, 2)), (0xfc55, Slot::new(2729, 2)), (0xfc56, Slot::new(2731, 2)), (0xfc57, Slot::new(2733, 2)),
            (0xfc58, Slot::new(2735, 2)), (0xfc59, Slot::new(2737, 2)), (0xfc5a, Slot::new(2739, 2)), (0xfc5b, Slot::new(2741, 2)),
            (0xfc5c, Slot::new(2743, 2)), (0xfc5d, Slot::new(2745, 2)), (0xfc5e, Slot::new(2747, 3)), (0xfc5f, Slot::new(2750, 3)),
            (0xfc60, Slot::new(2753, 3)), (0xfc61, Slot::new(2756, 3)), (0xfc62, Slot::new(2759, 3)), (0xfc63, Slot::new(2762, 3)),
            (0xfc64, Slot::new(2765, 2)), (0xfc65, Slot::new(2767, 2)), (0xfc66, Slot::new(2769, 2)), (0xfc67, Slot::new(2771, 2)),
            (0xfc68, Slot::new(2773, 2)), (0xfc69, Slot::new(2775, 2)), (0xfc6a, Slot::new(2777, 2)), (0xfc6b, Slot::new(2779, 2)),
            (0xfc6c, Slot::new(2781, 2)), (0xfc6d, Slot::new(2783, 2)), (0xfc6e, Slot::new(2785, 2)), (0xfc6f, Slot::new(2787, 2)),
            (0xfc70, Slot::new(2789, 2)), (0xfc71, Slot::new(2791, 2)), (0xfc72, Slot::new(2793, 2)), (0xfc73, Slot::new(2795, 2)),
            (0xfc74, Slot::new(2797, 2)), (0xfc75, Slot::new(2799, 2)), (0xfc76, Slot::new(2801, 2)), (0xfc77, Slot::new(2803, 2)),
            (0xfc78, Slot::new(2805, 2)), (0xfc79, Slot::new(2807, 2)), (0xfc7a, Slot::new(2809, 2)), (0xfc7b, Slot::new(2811, 2)),
            (0xfc7c, Slot::new(2813, 2)), (0xfc7d, Slot::new(2815, 2)), (0xfc7e, Slot::new(2817, 2)), (0xfc7f, Slot::new(2819, 2)),
            (0xfc80, Slot::new(2821, 2)), (0xfc81, Slot::new(2823, 2)), (0xfc82, Slot::new(2825, 2)), (0xfc83, Slot::new(2827, 2)),
            (0xfc84, Slot::new(2829, 2)), (0xfc85, Slot::new(2831, 2)), (0xfc86, Slot::new(2833, 2)), (0xfc87, Slot::new(2835, 2)),
            (0xfc88, Slot::new(2837, 2)), (0xfc89, Slot::new(2839, 2)), (0xfc8a, Slot::new(2841, 2)), (0xfc8b, Slot::new(2843, 2)),
            (0xfc8c, Slot::new(2845, 2)), (0xfc8d, Slot::new(2847, 2)), (0xfc8e, Slot::new(2849, 2)), (0xfc8f, Slot::new(2851, 2)),
            (0xfc90, Slot::new(2853, 2)), (0xfc91, Slot::new(2855, 2)), (0xfc92, Slot::new(2857, 2)), (0xfc93, Slot::new(2859, 2)),
            (0xfc94, Slot::new(2861, 2)), (0xfc95, Slot::new(2863, 2)), (0xfc96, Slot::new(2865, 2)), (0xfc97, Slot::new(2867, 2)),
            (0xfc98, Slot::new(2869, 2)), (0xfc99, Slot::new(2871, 2)), (0xfc9a, Slot::new(2873, 2)), (0xfc9b, Slot::new(2875, 2)),
            (0xfc9c, Slot::new(2877, 2)), (0xfc9d, Slot::new(2879, 2)), (0xfc9e, Slot::new(2881, 2)), (0xfc9f, Slot::new(2883, 2)),
            (0xfca0, Slot::new(2885, 2)), (0xfca1, Slot::new(2887, 2)), (0xfca2, Slot::new(2889, 2)), (0xfca3, Slot::new(2891, 2)),
            (0xfca4, Slot::new(2893, 2)), (0xfca5, Slot::new(2895, 2)), (0xfca6, Slot::new(2897, 2)), (0xfca7, Slot::new(2899, 2)),
            (0xfca8, Slot::new(2901, 2)), (0xfca9, Slot::new(2903, 2)), (0xfcaa, Slot::new(2905, 2)), (0xfcab, Slot::new(2907, 2)),
            (0xfcac, Slot::new(2909, 2)), (0xfcad, Slot::new(2911, 2)), (0xfcae, Slot::new(2913, 2)), (0xfcaf, Slot::new(2915, 2)),
            (0xfcb0, Slot::new(2917, 2)), (0xfcb1, Slot::new(2919, 2)), (0xfcb2, Slot::new(2921, 2)), (0xfcb3, Slot::new(2923, 2)),
            (0xfcb4, Slot::new(2925, 2)), (0xfcb5, Slot::new(2927, 2)), (0xfcb6, Slot::new(2929, 2)), (0xfcb7, Slot::new(2931, 2)),
            (0xfcb8, Slot::new(2933, 2)), (0xfcb9, Slot::new(2935, 2)), (0xfcba, Slot::new(2937, 2)), (0xfcbb, Slot::new(2939, 2)),
            (0xfcbc, Slot::new(2941, 2)), (0xfcbd, Slot::new(2943, 2)), (0xfcbe, Slot::new(2945, 2)), (0xfcbf, Slot::new(2947, 2)),
            (0xfcc0, Slot::new(2949, 2)), (0xfcc1, Slot::new(2951, 2)), (0xfcc2, Slot::new(2953, 2)), (0xfcc3, Slot::new(2955, 2)),
            (0xfcc4, Slot::new(2957, 2)), (0xfcc5, Slot::new(2959, 2)), (0xfcc6, Slot::new(2961, 2)), (0xfcc7, Slot::new(2963, 2)),
            (0xfcc8, Slot::new(2965, 2)), (0xfcc9, Slot::new(2967, 2)), (0xfcca, Slot::new(2969, 2)), (0xfccb, Slot::new(2971, 2)),
            (0xfccc, Slot::new(2973, 2)), (0xfccd, Slot::new(2975, 2)), (0xfcce, Slot::new(2977, 2)), (0xfccf, Slot::new(2979, 2)),
            (0xfcd0, Slot::new(2981, 2)), (0xfcd1, Slot::new(2983, 2)), (0xfcd2, Slot::new(2985, 2)), (0xfcd3, Slot::new(2987, 2)),
            (0xfcd4, Slot::new(2989, 2)), (0xfcd5, Slot::new(2991, 2)), (0xfcd6, Slot::new(2993, 2)), (0xfcd7, Slot::new(2995, 2)),
            (0xfcd8, Slot::new(2997, 2)), (0xfcd9, Slot::new(2999, 2)), (0xfcda, Slot::new(3001, 2)), (0xfcdb, Slot::new(3003, 2)),
            (0xfcdc, Slot::new(3005, 2)), (0xfcdd, Slot::new(3007, 2)), (0xfcde, Slot::new(3009, 2)), (0xfcdf, Slot::new(3011, 2)),
            (0xfce0, Slot::new(3013, 2)), (0xfce1, Slot::new(3015, 2)), (0xfce2, Slot::new(3017, 2)), (0xfce3, Slot::new(3019, 2)),
            (0xfce4, Slot::new(3021, 2)), (0xfce5, Slot::new(3023, 2)), (0xfce6, Slot::new(3025, 2)), (0xfce7, Slot::new(3027, 2)),
            (0xfce8, Slot::new(3029, 2)), (0xfce9, Slot::new(3031, 2)), (0xfcea, Slot::new(3033, 2)), (0xfceb, Slot::new(3035, 2)),
            (0xfcec, Slot::new(3037, 2)), (0xfced, Slot::new(3039, 2)), (0xfcee, Slot::new(3041, 2)), (0xfcef, Slot::new(3043, 2)),
            (0xfcf0, Slot::new(3045, 2)), (0xfcf1, Slot::new(3047, 2)), (0xfcf2, Slot::new(3049, 3)), (0xfcf3, Slot::new(3052, 3)),
            (0xfcf4, Slot::new(3055, 3)), (0xfcf5, Slot::new(3058, 2)), (0xfcf6, Slot::new(3060, 2)), (0xfcf7, Slot::new(3062, 2)),
            (0xfcf8, Slot::new(3064, 2)), (0xfcf9, Slot::new(3066, 2)), (0xfcfa, Slot::new(3068, 2)), (0xfcfb, Slot::new(3070, 2)),
            (0xfcfc, Slot::new(3072, 2)), (0xfcfd, Slot::new(3074, 2)), (0xfcfe, Slot::new(3076, 2)), (0xfcff, Slot::new(3078, 2)),
            (0xfd00, Slot::new(3080, 2)), (0xfd01, Slot::new(3082, 2)), (0xfd02, Slot::new(3084, 2)), (0xfd03, Slot::new(3086, 2)),
            (0xfd04, Slot::new(3088, 2)), (0xfd05, Slot::new(3090, 2)), (0xfd06, Slot::new(3092, 2)), (0xfd07, Slot::new(3094, 2)),
            (0xfd08, Slot::new(3096, 2)), (0xfd09, Slot::new(3098, 2)), (0xfd0a, Slot::new(3100, 2)), (0xfd0b, Slot::new(3102, 2)),
            (0xfd0c, Slot::new(3104, 2)), (0xfd0d, Slot::new(3106, 2)), (0xfd0e, Slot::new(3108, 2)), (0xfd0f, Slot::new(3110, 2)),
            (0xfd10, Slot::new(3112, 2)), (0xfd11, Slot::new(3114, 2)), (0xfd12, Slot::new(3116, 2)), (0xfd13, Slot::new(3118, 2)),
            (0xfd14, Slot::new(3120, 2)), (0xfd15, Slot::new(3122, 2)), (0xfd16, Slot::new(3124, 2)), (0xfd17, Slot::new(3126, 2)),
            (0xfd18, Slot::new(3128, 2)), (0xfd19, Slot::new(3130, 2)), (0xfd1a, Slot::new(3132, 2)), (0xfd1b, Slot::new(3134, 2)),
            (0xfd1c, Slot::new(3136, 2)), (0xfd1d, Slot::new(3138, 2)), (0xfd1e, Slot::new(3140, 2)), (0xfd1f, Slot::new(3142, 2)),
            (0xfd20, Slot::new(3144, 2)), (0xfd21, Slot::new(3146, 2)), (0xfd22, Slot::new(3148, 2)), (0xfd23, Slot::new(3150, 2)),
            (0xfd24, Slot::new(3152, 2)), (0xfd25, Slot::new(3154, 2)), (0xfd26, Slot::new(3156, 2)), (0xfd27, Slot::new(3158, 2)),
            (0xfd28, Slot::new(3160, 2)), (0xfd29, Slot::new(3162, 2)), (0xfd2a, Slot::new(3164, 2)), (0xfd2b, Slot::new(3166, 2)),
            (0xfd2c, Slot::new(3168, 2)), (0xfd2d, Slot::new(3170, 2)), (0xfd2e, Slot::new(3172, 2)), (0xfd2f, Slot::new(3174, 2)),
            (0xfd30, Slot::new(3176, 2)), (0xfd31, Slot::new(3178, 2)), (0xfd32, Slot::new(3180, 2)), (0xfd33, Slot::new(3182, 2)),
            (0xfd34, Slot::new(3184, 2)), (0xfd35, Slot::new(3186, 2)), (0xfd36, Slot::new(3188, 2)), (0xfd37, Slot::new(3190, 2)),
            (0xfd38, Slot::new(3192, 2)), (0xfd39, Slot::new(3194, 2)), (0xfd3a, Slot::new(3196, 2)), (0xfd3b, Slot::new(3198, 2)),
            (0xfd3c, Slot::new(3200, 2)), (0xfd3d, Slot::new(3202, 2)), (0xfd50, Slot::new(3204, 3)), (0xfd51, Slot::new(3207, 3)),
            (0xfd52, Slot::new(3210, 3)), (0xfd53, Slot::new(3213, 3)), (0xfd54, Slot::new(3216, 3)), (0xfd55, Slot::new(3219, 3)),
            (0xfd56, Slot::new(3222, 3)), (0xfd57, Slot::new(3225, 3)), (0xfd58, Slot::new(3228, 3)), (0xfd59, Slot::new(3231, 3)),
            (0xfd5a, Slot::new(3234, 3)), (0xfd5b, Slot::new(3237, 3)), (0xfd5c, Slot::new(3240, 3)), (0xfd5d, Slot::new(3243, 3)),
            (0xfd5e, Slot::new(3246, 3)), (0xfd5f, Slot::new(3249, 3)), (0xfd60, Slot::new(3252, 3)), (0xfd61, Slot::new(3255, 3)),
            (0xfd62, Slot::new(3258, 3)), (0xfd63, Slot::new(3261, 3)), (0xfd64, Slot::new(3264, 3)), (0xfd65, Slot::new(3267, 3)),
            (0xfd66, Slot::new(3270, 3)), (0xfd67, Slot::new(3273, 3)), (0xfd68, Slot::new(3276, 3)), (0xfd69, Slot::new(3279, 3)),
            (0xfd6a, Slot::new(3282, 3)), (0xfd6b, Slot::new(3285, 3)), (0xfd6c, Slot::new(3288, 3)), (0xfd6d, Slot::new(3291, 3)),
            (0xfd6e, Slot::new(3294, 3)), (0xfd6f, Slot::new(3297, 3)), (0xfd70, Slot::new(3300, 3)), (0xfd71, Slot::new(3303, 3)),
            (0xfd72, Slot::new(3306, 3)), (0xfd73, Slot::new(3309, 3)), (0xfd74, Slot::new(3312, 3)), (0xfd75, Slot::new(3315, 3)),
            (0xfd76, Slot::new(3318, 3)), (0xfd77, Slot::new(3321, 3)), (0xfd78, Slot::new(3324, 3)), (0xfd79, Slot::new(3327, 3)),
            (0xfd7a, Slot::new(3330, 3)), (0xfd7b, Slot::new(3333, 3)), (0xfd7c, Slot::new(3336, 3)), (0xfd7d, Slot::new(3339, 3)),
            (0xfd7e, Slot::new(3342, 3)), (0xfd7f, Slot::new(3345, 3)), (0xfd80, Slot::new(3348, 3)), (0xfd81, Slot::new(3351, 3)),
            (0xfd82, Slot::new(3354, 3)), (0xfd83, Slot::new(3357, 3)), (0xfd84, Slot::new(3360, 3)), (0xfd85, Slot::new(3363, 3)),
            (0xfd86, Slot::new(3366, 3)), (0xfd87, Slot::new(3369, 3)), (0xfd88, Slot::new(3372, 3)), (0xfd89, Slot::new(3375, 3)),
            (0xfd8a, Slot::new(3378, 3)), (0xfd8b, Slot::new(3381, 3)), (0xfd8c, Slot::new(3384, 3)), (0xfd8d, Slot::new(3387, 3)),
            (0xfd8e, Slot::new(3390, 3)), (0xfd8f, Slot::new(3393, 3)), (0xfd92, Slot::new(3396, 3)), (0xfd93, Slot::new(3399, 3)),
            (0xfd94, Slot::new(3402, 3)), (0xfd95, Slot::new(3405, 3)), (0xfd96, Slot::new(3408, 3)), (0xfd97, Slot::new(3411, 3)),
            (0xfd98, Slot::new(3414, 3)), (0xfd99, Slot::new(3417, 3)), (0xfd9a, Slot::new(3420, 3)), (0xfd9b, Slot::new(3423, 3)),
            (0xfd9c, Slot::new(3426, 3)), (0xfd9d, Slot::new(3429, 3)), (0xfd9e, Slot::new(3432, 3)), (0xfd9f, Slot::new(3435, 3)),
            (0xfda0, Slot::new(3438, 3)), (0xfda1, Slot::new(3441, 3)), (0xfda2, Slot::new(3444, 3)), (0xfda3, Slot::new(3447, 3)),
            (0xfda4, Slot::new(3450, 3)), (0xfda5, Slot::new(3453, 3)), (0xfda6, Slot::new(3456, 3)), (0xfda7, Slot::new(3459, 3)),
            (0xfda8, Slot::new(3462, 3)), (0xfda9, Slot::new(3465, 3)), (0xfdaa, Slot::new(3468, 3)), (0xfdab, Slot::new(3471, 3)),
            (0xfdac, Slot::new(3474, 3)), (0xfdad, Slot::new(3477, 3)), (0xfdae, Slot::new(3480, 3)), (0xfdaf, Slot::new(3483, 3)),
            (0xfdb0, Slot::new(3486, 3)), (0xfdb1, Slot::new(3489, 3)), (0xfdb2, Slot::new(3492, 3)), (0xfdb3, Slot::new(3495, 3)),
            (0xfdb4, Slot::new(3498, 3)), (0xfdb5, Slot::new(3501, 3)), (0xfdb6, Slot::new(3504, 3)), (0xfdb7, Slot::new(3507, 3)),
            (0xfdb8, Slot::new(3510, 3)), (0xfdb9, Slot::new(3513, 3)), (0xfdba, Slot::new(3516, 3)), (0xfdbb, Slot::new(3519, 3)),
            (0xfdbc, Slot::new(3522, 3)), (0xfdbd, Slot::new(3525, 3)), (0xfdbe, Slot::new(3528, 3)), (0xfdbf, Slot::new(3531, 3)),
            (0xfdc0, Slot::new(3534, 3)), (0xfdc1, Slot::new(3537, 3)), (0xfdc2, Slot::new(3540, 3)), (0xfdc3, Slot::new(3543, 3)),
            (0xfdc4, Slot::new(3546, 3)), (0xfdc5, Slot::new(3549, 3)), (0xfdc6, Slot::new(3552, 3)), (0xfdc7, Slot::new(3555, 3)),
            (0xfdf0, Slot::new(3558, 3)), (0xfdf1, Slot::new(3561, 3)), (0xfdf2, Slot::new(3564, 4)), (0xfdf3, Slot::new(3568, 4)),
            (0xfdf4, Slot::new(3572, 4)), (0xfdf5, Slot::new(3576, 4)), (0xfdf6, Slot::new(3580, 4)), (0xfdf7, Slot::new(3584, 4)),
            (0xfdf8, Slot::new(3588, 4)), (0xfdf9, Slot::new(3592, 3)), (0xfdfa, Slot::new(3595, 18)), (0xfdfb, Slot::new(3613, 8)),
            (0xfdfc, Slot::new(3621, 4)), (0xfe10, Slot::new(3625, 1)), (0xfe11, Slot::new(3626, 1)), (0xfe12, Slot::new(3627, 1)),
            (0xfe13, Slot::new(3628, 1)), (0xfe14, Slot::new(3629, 1)), (0xfe15, Slot::new(3630, 1)), (0xfe16, Slot::new(3631, 1)),
            (0xfe17, Slot::new(3632, 1)), (0xfe18, Slot::new(3633, 1)), (0xfe19, Slot::new(3634, 1)), (0xfe30, Slot::new(3635, 1)),
            (0xfe31, Slot::new(3636, 1)), (0xfe32, Slot::new(3637, 1)), (0xfe33, Slot::new(3638, 1)), (0xfe34, Slot::new(3639, 1)),
            (0xfe35, Slot::new(3640, 1)), (0xfe36, Slot::new(3641, 1)), (0xfe37, Slot::new(3642, 1)), (0xfe38, Slot::new(3643, 1)),
            (0xfe39, Slot::new(3644, 1)), (0xfe3a, Slot::new(3645, 1)), (0xfe3b, Slot::new(3646, 1)), (0xfe3c, Slot::new(3647, 1)),
            (0xfe3d, Slot::new(3648, 1)), (0xfe3e, Slot::new(3649, 1)), (0xfe3f, Slot::new(3650, 1)), (0xfe40, Slot::new(3651, 1)),
            (0xfe41, Slot::new(3652, 1)), (0xfe42, Slot::new(3653, 1)), (0xfe43, Slot::new(3654, 1)), (0xfe44, Slot::new(3655, 1)),
            (0xfe47, Slot::new(3656, 1)), (0xfe48, Slot::new(3657, 1)), (0xfe49, Slot::new(3658, 1)), (0xfe4a, Slot::new(3659, 1)),
            (0xfe4b, Slot::new(3660, 1)), (0xfe4c, Slot::new(3661, 1)), (0xfe4d, Slot::new(3662, 1)), (0xfe4e, Slot::new(3663, 1)),
            (0xfe4f, Slot::new(3664, 1)), (0xfe50, Slot::new(3665, 1)), (0xfe51, Slot::new(3666, 1)), (0xfe52, Slot::new(3667, 1)),
            (0xfe54, Slot::new(3668, 1)), (0xfe55, Slot::new(3669, 1)), (0xfe56, Slot::new(3670, 1)), (0xfe57, Slot::new(3671, 1)),
            (0xfe58, Slot::new(3672, 1)), (0xfe59, Slot::new(3673, 1)), (0xfe5a, Slot::new(3674, 1)), (0xfe5b, Slot::new(3675, 1)),
            (0xfe5c, Slot::new(3676, 1)), (0xfe5d, Slot::new(3677, 1)), (0xfe5e, Slot::new(3678, 1)), (0xfe5f, Slot::new(3679, 1)),
            (0xfe60, Slot::new(3680, 1)), (0xfe61, Slot::new(3681, 1)), (0xfe62, Slot::new(3682, 1)), (0xfe63, Slot::new(3683, 1)),
            (0xfe64, Slot::new(3684, 1)), (0xfe65, Slot::new(3685, 1)), (0xfe66, Slot::new(3686, 1)), (0xfe68, Slot::new(3687, 1)),
            (0xfe69, Slot::new(3688, 1)), (0xfe6a, Slot::new(3689, 1)), (0xfe6b, Slot::new(3690, 1)), (0xfe70, Slot::new(3691, 2)),
            (0xfe71, Slot::new(3693, 2)), (0xfe72, Slot::new(3695, 2)), (0xfe74, Slot::new(3697, 2)), (0xfe76, Slot::new(3699, 2)),
            (0xfe77, Slot::new(3701, 2)), (0xfe78, Slot::new(3703, 2)), (0xfe79, Slot::new(3705, 2)), (0xfe7a, Slot::new(3707, 2)),
            (0xfe7b, Slot::new(3709, 2)), (0xfe7c, Slot::new(3711, 2)), (0xfe7d, Slot::new(3713, 2)), (0xfe7e, Slot::new(3715, 2)),
            (0xfe7f, Slot::new(3717, 2)), (0xfe80, Slot::new(3719, 1)), (0xfe81, Slot::new(3720, 1)), (0xfe82, Slot::new(3721, 1)),
            (0xfe83, Slot::new(3722, 1)), (0xfe84, Slot::new(3723, 1)), (0xfe85, Slot::new(3724, 1)), (0xfe86, Slot::new(3725, 1)),
            (0xfe87, Slot::new(3726, 1)), (0xfe88, Slot::new(3727, 1)), (0xfe89, Slot::new(3728, 1)), (0xfe8a, Slot::new(3729, 1)),
            (0xfe8b, Slot::new(3730, 1)), (0xfe8c, Slot::new(3731, 1)), (0xfe8d, Slot::new(3732, 1)), (0xfe8e, Slot::new(3733, 1)),
            (0xfe8f, Slot::new(3734, 1)), (0xfe90, Slot::new(3735, 1)), (0xfe91, Slot::new(3736, 1)), (0xfe92, Slot::new(3737, 1)),
            (0xfe93, Slot::new(3738, 1)), (0xfe94, Slot::new(3739, 1)), (0xfe95, Slot::new(3740, 1)), (0xfe96, Slot::new(3741, 1)),
            (0xfe97, Slot::new(3742, 1)), (0xfe98, Slot::new(3743, 1)), (0xfe99, Slot::new(3744, 1)), (0xfe9a, Slot::new(3745, 1)),
            (0xfe9b, Slot::new(3746, 1)), (0xfe9c, Slot::new(3747, 1)), (0xfe9d, Slot::new(3748, 1)), (0xfe9e, Slot::new(3749, 1)),
            (0xfe9f, Slot::new(3750, 1)), (0xfea0, Slot::new(3751, 1)), (0xfea1, Slot::new(3752, 1)), (0xfea2, Slot::new(3753, 1)),
            (0xfea3, Slot::new(3754, 1)), (0xfea4, Slot::new(3755, 1)), (0xfea5, Slot::new(3756, 1)), (0xfea6, Slot::new(3757, 1)),
            (0xfea7, Slot::new(3758, 1)), (0xfea8, Slot::new(3759, 1)), (0xfea9, Slot::new(3760, 1)), (0xfeaa, Slot::new(3761, 1)),
            (0xfeab, Slot::new(3762, 1)), (0xfeac, Slot::new(3763, 1)), (0xfead, Slot::new(3764, 1)), (0xfeae, Slot::new(3765, 1)),
            (0xfeaf, Slot::new(3766, 1)), (0xfeb0, Slot::new(3767, 1)), (0xfeb1, Slot::new(3768, 1)), (0xfeb2, Slot::new(3769, 1)),
            (0xfeb3, Slot::new(3770, 1)), (0xfeb4, Slot::new(3771, 1)), (0xfeb5, Slot::new(3772, 1)), (0xfeb6, Slot::new(3773, 1)),
            (0xfeb7, Slot::new(3774, 1)), (0xfeb8, Slot::new(3775, 1)), (0xfeb9, Slot::new(3776, 1)), (0xfeba, Slot::new(3777, 1)),
            (0xfebb, Slot::new(3778, 1)), (0xfebc, Slot::new(3779, 1)), (0xfebd, Slot::new(3780, 1)), (0xfebe, Slot::new(3781, 1)),
            (0xfebf, Slot::new(3782, 1)), (0xfec0, Slot::new(3783, 1)), (0xfec1, Slot::new(3784, 1)), (0xfec2, Slot::new(3785, 1)),
            (0xfec3, Slot::new(3786, 1)), (0xfec4, Slot::new(3787, 1)), (0xfec5, Slot::new(3788, 1)), (0xfec6, Slot::new(3789, 1)),
            (0xfec7, Slot::new(3790, 1)), (0xfec8, Slot::new(3791, 1)), (0xfec9, Slot::new(3792, 1)), (0xfeca, Slot::new(3793, 1)),
            (0xfecb, Slot::new(3794, 1)), (0xfecc, Slot::new(3795, 1)), (0xfecd, Slot::new(3796, 1)), (0xfece, Slot::new(3797, 1)),
            (0xfecf, Slot::new(3798, 1)), (0xfed0, Slot::new(3799, 1)), (0xfed1, Slot::new(3800, 1)), (0xfed2, Slot::new(3801, 1)),
            (0xfed3, Slot::new(3802, 1)), (0xfed4, Slot::new(3803, 1)), (0xfed5, Slot::new(3804, 1)), (0xfed6, Slot::new(3805, 1)),
            (0xfed7, Slot::new(3806, 1)), (0xfed8, Slot::new(3807, 1)), (0xfed9, Slot::new(3808, 1)), (0xfeda, Slot::new(3809, 1)),
            (0xfedb, Slot::new(3810, 1)), (0xfedc, Slot::new(3811, 1)), (0xfedd, Slot::new(3812, 1)), (0xfede, Slot::new(3813, 1)),
            (0xfedf, Slot::new(3814, 1)), (0xfee0, Slot::new(3815, 1)), (0xfee1, Slot::new(3816, 1)), (0xfee2, Slot::new(3817, 1)),
            (0xfee3, Slot::new(3818, 1)), (0xfee4, Slot::new(3819, 1)), (0xfee5, Slot::new(3820, 1)), (0xfee6, Slot::new(3821, 1)),
            (0xfee7, Slot::new(3822, 1)), (0xfee8, Slot::new(3823, 1)), (0xfee9, Slot::new(3824, 1)), (0xfeea, Slot::new(3825, 1)),
            (0xfeeb, Slot::new(3826, 1)), (0xfeec, Slot::new(3827, 1)), (0xfeed, Slot::new(3828, 1)), (0xfeee, Slot::new(3829, 1)),
            (0xfeef, Slot::new(3830, 1)), (0xfef0, Slot::new(3831, 1)), (0xfef1, Slot::new(3832, 1)), (0xfef2, Slot::new(3833, 1)),
            (0xfef3, Slot::new(3834, 1)), (0xfef4, Slot::new(3835, 1)), (0xfef5, Slot::new(3836, 2)), (0xfef6, Slot::new(3838, 2)),
            (0xfef7, Slot::new(3840, 2)), (0xfef8, Slot::new(3842, 2)), (0xfef9, Slot::new(3844, 2)), (0xfefa, Slot::new(3846, 2)),
            (0xfefb, Slot::new(3848, 2)), (0xfefc, Slot::new(3850, 2)), (0xff01, Slot::new(3852, 1)), (0xff02, Slot::new(3853, 1)),
            (0xff03, Slot::new(3854, 1)), (0xff04, Slot::new(3855, 1)), (0xff05, Slot::new(3856, 1)), (0xff06, Slot::new(3857, 1)),
            (0xff07, Slot::new(3858, 1)), (0xff08, Slot::new(3859, 1)), (0xff09, Slot::new(3860, 1)), (0xff0a, Slot::new(3861, 1)),
            (0xff0b, Slot::new(3862, 1)), (0xff0c, Slot::new(3863, 1)), (0xff0d, Slot::new(3864, 1)), (0xff0e, Slot::new(3865, 1)),
            (0xff0f, Slot::new(3866, 1)), (0xff10, Slot::new(3867, 1)), (0xff11, Slot::new(3868, 1)), (0xff12, Slot::new(3869, 1)),
            (0xff13, Slot::new(3870, 1)), (0xff14, Slot::new(3871, 1)), (0xff15, Slot::new(3872, 1)), (0xff16, Slot::new(3873, 1)),
            (0xff17, Slot::new(3874, 1)), (0xff18, Slot::new(3875, 1)), (0xff19, Slot::new(3876, 1)), (0xff1a, Slot::new(3877, 1)),
            (0xff1b, Slot::new(3878, 1)), (0xff1c, Slot::new(3879, 1)), (0xff1d, Slot::new(3880, 1)), (0xff1e, Slot::new(3881, 1)),
            (0xff1f, Slot::new(3882, 1)), (0xff20, Slot::new(3883, 1)), (0xff21, Slot::new(3884, 1)), (0xff22, Slot::new(3885, 1)),
            (0xff23, Slot::new(3886, 1)), (0xff24, Slot::new(3887, 1)), (0xff25, Slot::new(3888, 1)), (0xff26, Slot::new(3889, 1)),
            (0xff27, Slot::new(3890, 1)), (0xff28, Slot::new(3891, 1)), (0xff29, Slot::new(3892, 1)), (0xff2a, Slot::new(3893, 1)),
            (0xff2b, Slot::new(3894, 1)), (0xff2c, Slot::new(3895, 1)), (0xff2d, Slot::new(3896, 1)), (0xff2e, Slot::new(3897, 1)),
            (0xff2f, Slot::new(3898, 1)), (0xff30, Slot::new(3899, 1)), (0xff31, Slot::new(3900, 1)), (0xff32, Slot::new(3901, 1)),
            (0xff33, Slot::new(3902, 1)), (0xff34, Slot::new(3903, 1)), (0xff35, Slot::new(3904, 1)), (0xff36, Slot::new(3905, 1)),
            (0xff37, Slot::new(3906, 1)), (0xff38, Slot::new(3907, 1)), (0xff39, Slot::new(3908, 1)), (0xff3a, Slot::new(3909, 1)),
            (0xff3b, Slot::new(3910, 1)), (0xff3c, Slot::new(3911, 1)), (0xff3d, Slot::new(3912, 1)), (0xff3e, Slot::new(3913, 1)),
            (0xff3f, Slot::new(3914, 1)), (0xff40, Slot::new(3915, 1)), (0xff41, Slot::new(3916, 1)), (0xff42, Slot::new(3917, 1)),
            (0xff43, Slot::new(3918, 1)), (0xff44, Slot::new(3919, 1)), (0xff45, Slot::new(3920, 1)), (0xff46, Slot::new(3921, 1)),
            (0xff47, Slot::new(3922, 1)), (0xff48, Slot::new(3923, 1)), (0xff49, Slot::new(3924, 1)), (0xff4a, Slot::new(3925, 1)),
            (0xff4b, Slot::new(3926, 1)), (0xff4c, Slot::new(3927, 1)), (0xff4d, Slot::new(3928, 1)), (0xff4e, Slot::new(3929, 1)),
            (0xff4f, Slot::new(3930, 1)), (0xff50, Slot::new(3931, 1)), (0xff51, Slot::new(3932, 1)), (0xff52, Slot::new(3933, 1)),
            (0xff53, Slot::new(3934, 1)), (0xff54, Slot::new(3935, 1)), (0xff55, Slot::new(3936, 1)), (0xff56, Slot::new(3937, 1)),
            (0xff57, Slot::new(3938, 1)), (0xff58, Slot::new(3939, 1)), (0xff59, Slot::new(3940, 1)), (0xff5a, Slot::new(3941, 1)),
            (0xff5b, Slot::new(3942, 1)), (0xff5c, Slot::new(3943, 1)), (0xff5d, Slot::new(3944, 1)), (0xff5e, Slot::new(3945, 1)),
            (0xff5f, Slot::new(3946, 1)), (0xff60, Slot::new(3947, 1)), (0xff61, Slot::new(3948, 1)), (0xff62, Slot::new(3949, 1)),
            (0xff63, Slot::new(3950, 1)), (0xff64, Slot::new(3951, 1)), (0xff65, Slot::new(3952, 1)), (0xff66, Slot::new(3953, 1)),
            (0xff67, Slot::new(3954, 1)), (0xff68, Slot::new(3955, 1)), (0xff69, Slot::new(3956, 1)), (0xff6a, Slot::new(3957, 1)),
            (0xff6b, Slot::new(3958, 1)), (0xff6c, Slot::new(3959, 1)), (0xff6d, Slot::new(3960, 1)), (0xff6e, Slot::new(3961, 1)),
            (0xff6f, Slot::new(3962, 1)), (0xff70, Slot::new(3963, 1)), (0xff71, Slot::new(3964, 1)), (0xff72, Slot::new(3965, 1)),
            (0xff73, Slot::new(3966, 1)), (0xff74, Slot::new(3967, 1)), (0xff75, Slot::new(3968, 1)), (0xff76, Slot::new(3969, 1)),
            (0xff77, Slot::new(3970, 1)), (0xff78, Slot::new(3971, 1)), (0xff79, Slot::new(3972, 1)), (0xff7a, Slot::new(3973, 1)),
            (0xff7b, Slot::new(3974, 1)), (0xff7c, Slot::new(3975, 1)), (0xff7d, Slot::new(3976, 1)), (0xff7e, Slot::new(3977, 1)),
            (0xff7f, Slot::new(3978, 1)), (0xff80, Slot::new(3979, 1)), (0xff81, Slot::new(3980, 1)), (0xff82, Slot::new(3981, 1)),
            (0xff83, Slot::new(3982, 1)), (0xff84, Slot::new(3983, 1)), (0xff85, Slot::new(3984, 1)), (0xff86, Slot::new(3985, 1)),
            (0xff87, Slot::new(3986, 1)), (0xff88, Slot::new(3987, 1)), (0xff89, Slot::new(3988, 1)), (0xff8a, Slot::new(3989, 1)),
            (0xff8b, Slot::new(3990, 1)), (0xff8c, Slot::new(3991, 1)), (0xff8d, Slot::new(3992, 1)), (0xff8e, Slot::new(3993, 1)),
            (0xff8f, Slot::new(3994, 1)), (0xff90, Slot::new(3995, 1)), (0xff91, Slot::new(3996, 1)), (0xff92, Slot::new(3997, 1)),
            (0xff93, Slot::new(3998, 1)), (0xff94, Slot::new(3999, 1)), (0xff95, Slot::new(4000, 1)), (0xff96, Slot::new(4001, 1)),
            (0xff97, Slot::new(4002, 1)), (0xff98, Slot::new(4003, 1)), (0xff99, Slot::new(4004, 1)), (0xff9a, Slot::new(4005, 1)),
            (0xff9b, Slot::new(4006, 1)), (0xff9c, Slot::new(4007, 1)), (0xff9d, Slot::new(4008, 1)), (0xff9e, Slot::new(4009, 1)),
            (0xff9f, Slot::new(4010, 1)), (0xffa0, Slot::new(4011, 1)), (0xffa1, Slot::new(4012, 1)), (0xffa2, Slot::new(4013, 1)),
            (0xffa3, Slot::new(4014, 1)), (0xffa4, Slot::new(4015, 1)), (0xffa5, Slot::new(4016, 1)), (0xffa6, Slot::new(4017, 1)),
            (0xffa7, Slot::new(4018, 1)), (0xffa8, Slot::new(4019, 1)), (0xffa9, Slot::new(4020, 1)), (0xffaa, Slot::new(4021, 1)),
            (0xffab, Slot::new(4022, 1)), (0xffac, Slot::new(4023, 1)), (0xffad, Slot::new(4024, 1)), (0xffae, Slot::new(4025, 1)),
            (0xffaf, Slot::new(4026, 1)), (0xffb0, Slot::new(4027, 1)), (0xffb1, Slot::new(4028, 1)), (0xffb2, Slot::new(4029, 1)),
            (0xffb3, Slot::new(4030, 1)), (0xffb4, Slot::new(4031, 1)), (0xffb5, Slot::new(4032, 1)), (0xffb6, Slot::new(4033, 1)),
            (0xffb7, Slot::new(4034, 1)), (0xffb8, Slot::new(4035, 1)), (0xffb9, Slot::new(4036, 1)), (0xffba, Slot::new(4037, 1)),
            (0xffbb, Slot::new(4038, 1)), (0xffbc, Slot::new(4039, 1)), (0xffbd, Slot::new(4040, 1)), (0xffbe, Slot::new(4041, 1)),
            (0xffc2, Slot::new(4042, 1)), (0xffc3, Slot::new(4043, 1)), (0xffc4, Slot::new(4044, 1)), (0xffc5, Slot::new(4045, 1)),
            (0xffc6, Slot::new(4046, 1)), (0xffc7, Slot::new(4047, 1)), (0xffca, Slot::new(4048, 1)), (0xffcb, Slot::new(4049, 1)),
            (0xffcc, Slot::new(4050, 1)), (0xffcd, Slot::new(4051, 1)), (0xffce, Slot::new(4052, 1)), (0xffcf, Slot::new(4053, 1)),
            (0xffd2, Slot::new(4054, 1)), (0xffd3, Slot::new(4055, 1)), (0xffd4, Slot::new(4056, 1)), (0xffd5, Slot::new(4057, 1)),
            (0xffd6, Slot::new(4058, 1)), (0xffd7, Slot::new(4059, 1)), (0xffda, Slot::new(4060, 1)), (0xffdb, Slot::new(4061, 1)),
            (0xffdc, Slot::new(4062, 1)), (0xffe0, Slot::new(4063, 1)), (0xffe1, Slot::new(4064, 1)), (0xffe2, Slot::new(4065, 1)),
            (0xffe3, Slot::new(4066, 1)), (0xffe4, Slot::new(4067, 1)), (0xffe5, Slot::new(4068, 1)), (0xffe6, Slot::new(4069, 1)),
            (0xffe8, Slot::new(4070, 1)), (0xffe9, Slot::new(4071, 1)), (0xffea, Slot::new(4072, 1)), (0xffeb, Slot::new(4073, 1)),
            (0xffec, Slot::new(4074, 1)), (0xffed, Slot::new(4075, 1)), (0xffee, Slot::new(4076, 1)), (0x10781, Slot::new(4077, 1)),
            (0x10782, Slot::new(4078, 1)), (0x10783, Slot::new(4079, 1)), (0x10784, Slot::new(4080, 1)), (0x10785, Slot::new(4081, 1)),
            (0x10787, Slot::new(4082, 1)), (0x10788, Slot::new(4083, 1)), (0x10789, Slot::new(4084, 1)), (0x1078a, Slot::new(4085, 1)),
            (0x1078b, Slot::new(4086, 1)), (0x1078c, Slot::new(4087, 1)), (0x1078d, Slot::new(4088, 1)), (0x1078e, Slot::new(4089, 1)),
            (0x1078f, Slot::new(4090, 1)), (0x10790, Slot::new(4091, 1)), (0x10791, Slot::new(4092, 1)), (0x10792, Slot::new(4093, 1)),
            (0x10793, Slot::new(4094, 1)), (0x10794, Slot::new(4095, 1)), (0x10795, Slot::new(4096, 1)), (0x10796, Slot::new(4097, 1)),
            (0x10797, Slot::new(4098, 1)), (0x10798, Slot::new(4099, 1)), (0x10799, Slot::new(4100, 1)), (0x1079a, Slot::new(4101, 1)),
            (0x1079b, Slot::new(4102, 1)), (0x1079c, Slot::new(4103, 1)), (0x1079d, Slot::new(4104, 1)), (0x1079e, Slot::new(4105, 1)),
            (0x1079f, Slot::new(4106, 1)), (0x107a0, Slot::new(4107, 1)), (0x107a1, Slot::new(4108, 1)), (0x107a2, Slot::new(4109, 1)),
            (0x107a3, Slot::new(4110, 1)), (0x107a4, Slot::new(4111, 1)), (0x107a5, Slot::new(4112, 1)), (0x107a6, Slot::new(4113, 1)),
            (0x107a7, Slot::new(4114, 1)), (0x107a8, Slot::new(4115, 1)), (0x107a9, Slot::new(4116, 1)), (0x107aa, Slot::new(4117, 1)),
            (0x107ab, Slot::new(4118, 1)), (0x107ac, Slot::new(4119, 1)), (0x107ad, Slot::new(4120, 1)), (0x107ae, Slot::new(4121, 1)),
            (0x107af, Slot::new(4122, 1)), (0x107b0, Slot::new(4123, 1)), (0x107b2, Slot::new(4124, 1)), (0x107b3, Slot::new(4125, 1)),
            (0x107b4, Slot::new(4126, 1)), (0x107b5, Slot::new(4127, 1)), (0x107b6, Slot::new(4128, 1)), (0x107b7, Slot::new(4129, 1)),
            (0x107b8, Slot::new(4130, 1)), (0x107b9, Slot::new(4131, 1)), (0x107ba, Slot::new(4132, 1)), (0x1d400, Slot::new(4133, 1)),
            (0x1d401, Slot::new(4134, 1)), (0x1d402, Slot::new(4135, 1)), (0x1d403, Slot::new(4136, 1)), (0x1d404, Slot::new(4137, 1)),
            (0x1d405, Slot::new(4138, 1)), (0x1d406, Slot::new(4139, 1)), (0x1d407, Slot::new(4140, 1)), (0x1d408, Slot::new(4141, 1)),
            (0x1d409, Slot::new(4142, 1)), (0x1d40a, Slot::new(4143, 1)), (0x1d40b, Slot::new(4144, 1)), (0x1d40c, Slot::new(4145, 1)),
            (0x1d40d, Slot::new(4146, 1)), (0x1d40e, Slot::new(4147, 1)), (0x1d40f, Slot::new(4148, 1)), (0x1d410, Slot::new(4149, 1)),
            (0x1d411, Slot::new(4150, 1)), (0x1d412, Slot::new(4151, 1)), (0x1d413, Slot::new(4152, 1)), (0x1d414, Slot::new(4153, 1)),
            (0x1d415, Slot::new(4154, 1)), (0x1d416, Slot::new(4155, 1)), (0x1d417, Slot::new(4156, 1)), (0x1d418, Slot::new(4157, 1)),
            (0x1d419, Slot::new(4158, 1)), (0x1d41a, Slot::new(4159, 1)), (0x1d41b, Slot::new(4160, 1)), (0x1d41c, Slot::new(4161, 1)),
            (0x1d41d, Slot::new(4162, 1)), (0x1d41e, Slot::new(4163, 1)), (0x1d41f, Slot::new(4164, 1)), (0x1d420, Slot::new(4165, 1)),
            (0x1d421, Slot::new(4166, 1)), (0x1d422, Slot::new(4167, 1)), (0x1d423, Slot::new(4168, 1)), (0x1d424, Slot::new(4169, 1)),
            (0x1d425, Slot::new(4170, 1)), (0x1d426, Slot::new(4171, 1)), (0x1d427, Slot::new(4172, 1)), (0x1d428, Slot::new(4173, 1)),
            (0x1d429, Slot::new(4174, 1)), (0x1d42a, Slot::new(4175, 1)), (0x1d42b, Slot::new(4176, 1)), (0x1d42c, Slot::new(4177, 1)),
            (0x1d42d, Slot::new(4178, 1)), (0x1d42e, Slot::new(4179, 1)), (0x1d42f, Slot::new(4180, 1)), (0x1d430, Slot::new(4181, 1)),
            (0x1d431, Slot::new(4182, 1)), (0x1d432, Slot::new(4183, 1)), (0x1d433, Slot::new(4184, 1)), (0x1d434, Slot::new(4185, 1)),
            (0x1d435, Slot::new(4186, 1)), (0x1d436, Slot::new(4187, 1)), (0x1d437, Slot::new(4188, 1)), (0x1d438, Slot::new(4189, 1)),
            (0x1d439, Slot::new(4190, 1)), (0x1d43a, Slot::new(4191, 1)), (0x1d43b, Slot::new(4192, 1)), (0x1d43c, Slot::new(4193, 1)),
            (0x1d43d, Slot::new(4194, 1)), (0x1d43e, Slot::new(4195, 1)), (0x1d43f, Slot::new(4196, 1)), (0x1d440, Slot::new(4197, 1)),
            (0x1d441, Slot::new(4198, 1)), (0x1d442, Slot::new(4199, 1)), (0x1d443, Slot::new(4200, 1)), (0x1d444, Slot::new(4201, 1)),
            (0x1d445, Slot::new(4202, 1)), (0x1d446, Slot::new(4203, 1)), (0x1d447, Slot::new(4204, 1)), (0x1d448, Slot::new(4205, 1)),
            (0x1d449, Slot::new(4206, 1)), (0x1d44a, Slot::new(4207, 1)), (0x1d44b, Slot::new(4208, 1)), (0x1d44c, Slot::new(4209, 1)),
            (0x1d44d, Slot::new(4210, 1)), (0x1d44e, Slot::new(4211, 1)), (0x1d44f, Slot::new(4212, 1)), (0x1d450, Slot::new(4213, 1)),
            (0x1d451, Slot::new(4214, 1)), (0x1d452, Slot::new(4215, 1)), (0x1d453, Slot::new(4216, 1)), (0x1d454, Slot::new(4217, 1)),
            (0x1d456, Slot::new(4218, 1)), (0x1d457, Slot::new(4219, 1)), (0x1d458, Slot::new(4220, 1)), (0x1d459, Slot::new(4221, 1)),
            (0x1d45a, Slot::new(4222, 1)), (0x1d45b, Slot::new(4223, 1)), (0x1d45c, Slot::new(4224, 1)), (0x1d45d, Slot::new(4225, 1)),
            (0x1d45e, Slot::new(4226, 1)), (0x1d45f, Slot::new(4227, 1)), (0x1d460, Slot::new(4228, 1)), (0x1d461, Slot::new(4229, 1)),
            (0x1d462, Slot::new(4230, 1)), (0x1d463, Slot::new(4231, 1)), (0x1d464, Slot::new(4232, 1)), (0x1d465, Slot::new(4233, 1)),
            (0x1d466, Slot::new(4234, 1)), (0x1d467, Slot::new(4235, 1)), (0x1d468, Slot::new(4236, 1)), (0x1d469, Slot::new(4237, 1)),
            (0x1d46a, Slot::new(4238, 1)), (0x1d46b, Slot::new(4239, 1)), (0x1d46c, Slot::new(4240, 1)), (0x1d46d, Slot::new(4241, 1)),
            (0x1d46e, Slot::new(4242, 1)), (0x1d46f, Slot::new(4243, 1)), (0x1d470, Slot::new(4244, 1)), (0x1d471, Slot::new(4245, 1)),
            (0x1d472, Slot::new(4246, 1)), (0x1d473, Slot::new(4247, 1)), (0x1d474, Slot::new(4248, 1)), (0x1d475, Slot::new(4249, 1)),
            (0x1d476, Slot::new(4250, 1)), (0x1d477, Slot::new(4251, 1)), (0x1d478, Slot::new(4252, 1)), (0x1d479, Slot::new(4253, 1)),
            (0x1d47a, Slot::new(4254, 1)), (0x1d47b, Slot::new(4255, 1)), (0x1d47c, Slot::new(4256, 1)), (0x1d47d, Slot::new(4257, 1)),
            (0x1d47e, Slot::new(4258, 1)), (0x1d47f, Slot::new(4259, 1)), (0x1d480, Slot::new(4260, 1)), (0x1d481, Slot::new(4261, 1)),
            (0x1d482, Slot::new(4262, 1)), (0x1d483, Slot::new(4263, 1)), (0x1d484, Slot::new(4264, 1)), (0x1d485, Slot::new(4265, 1)),
            (0x1d486, Slot::new(4266, 1)), (0x1d487, Slot::new(4267, 1)), (0x1d488, Slot::new(4268, 1)), (0x1d489, Slot::new(4269, 1)),
            (0x1d48a, Slot::new(4270, 1)), (0x1d48b, Slot::new(4271, 1)), (0x1d48c, Slot::new(4272, 1)), (0x1d48d, Slot::new(4273, 1)),
            (0x1d48e, Slot::new(4274, 1)), (0x1d48f, Slot::new(4275, 1)), (0x1d490, Slot::new(4276, 1)), (0x1d491, Slot::new(4277, 1)),
            (0x1d492, Slot::new(4278, 1)), (0x1d493, Slot::new(4279, 1)), (0x1d494, Slot::new(4280, 1)), (0x1d495, Slot::new(4281, 1)),
            (0x1d496, Slot::new(4282, 1)), (0x1d497, Slot::new(4283, 1)), (0x1d498, Slot::new(4284, 1)), (0x1d499, Slot::new(4285, 1)),
            (0x1d49a, Slot::new(4286, 1)), (0x1d49b, Slot::new(4287, 1)), (0x1d49c, Slot::new(4288, 1)), (0x1d49e, Slot::new(4289, 1)),
            (0x1d49f, Slot::new(4290, 1)), (0x1d4a2, Slot::new(4291, 1)), (0x1d4a5, Slot::new(4292, 1)), (0x1d4a6, Slot::new(4293, 1)),
            (0x1d4a9, Slot::new(4294, 1)), (0x1d4aa, Slot::new(4295, 1)), (0x1d4ab, Slot::new(4296, 1)), (0x1d4ac, Slot::new(4297, 1)),
            (0x1d4ae, Slot::new(4298, 1)), (0x1d4af, Slot::new(4299, 1)), (0x1d4b0, Slot::new(4300, 1)), (0x1d4b1, Slot::new(4301, 1)),
            (0x1d4b2, Slot::new(4302, 1)), (0x1d4b3, Slot::new(4303, 1)), (0x1d4b4, Slot::new(4304, 1)), (0x1d4b5, Slot::new(4305, 1)),
            (0x1d4b6, Slot::new(4306, 1)), (0x1d4b7, Slot::new(4307, 1)), (0x1d4b8, Slot::new(4308, 1)), (0x1d4b9, Slot::new(4309, 1)),
            (0x1d4bb, Slot::new(4310, 1)), (0x1d4bd, Slot::new(4311, 1)), (0x1d4be, Slot::new(4312, 1)), (0x1d4bf, Slot::new(4313, 1)),
            (0x1d4c0, Slot::new(4314, 1)), (0x1d4c1, Slot::new(4315, 1)), (0x1d4c2, Slot::new(4316, 1)), (0x1d4c3, Slot::new(4317, 1)),
            (0x1d4c5, Slot::new(4318, 1)), (0x1d4c6, Slot::new(4319, 1)), (0x1d4c7, Slot::new(4320, 1)), (0x1d4c8, Slot::new(4321, 1)),
            (0x1d4c9, Slot::new(4322, 1)), (0x1d4ca, Slot::new(4323, 1)), (0x1d4cb, Slot::new(4324, 1)), (0x1d4cc, Slot::new(4325, 1)),
            (0x1d4cd, Slot::new(4326, 1)), (0x1d4ce, Slot::new(4327, 1)), (0x1d4cf, Slot::new(4328, 1)), (0x1d4d0, Slot::new(4329, 1)),
            (0x1d4d1, Slot::new(4330, 1)), (0x1d4d2, Slot::new(4331, 1)), (0x1d4d3, Slot::new(4332, 1)), (0x1d4d4, Slot::new(4333, 1)),
            (0x1d4d5, Slot::new(4334, 1)), (0x1d4d6, Slot::new(4335, 1)), (0x1d4d7, Slot::new(4336, 1)), (0x1d4d8, Slot::new(4337, 1)),
            (0x1d4d9, Slot::new(4338, 1)), (0x1d4da, Slot::new(4339, 1)), (0x1d4db, Slot::new(4340, 1)), (0x1d4dc, Slot::new(4341, 1)),
            (0x1d4dd, Slot::new(4342, 1)), (0x1d4de, Slot::new(4343, 1)), (0x1d4df, Slot::new(4344, 1)), (0x1d4e0, Slot::new(4345, 1)),
            (0x1d4e1, Slot::new(4346, 1)), (0x1d4e2, Slot::new(4347, 1)), (0x1d4e3, Slot::new(4348, 1)), (0x1d4e4, Slot::new(4349, 1)),
            (0x1d4e5, Slot::new(4350, 1)), (0x1d4e6, Slot::new(4351, 1)), (0x1d4e7, Slot::new(4352, 1)), (0x1d4e8, Slot::new(4353, 1)),
            (0x1d4e9, Slot::new(4354, 1)), (0x1d4ea, Slot::new(4355, 1)), (0x1d4eb, Slot::new(4356, 1)), (0x1d4ec, Slot::new(4357, 1)),
            (0x1d4ed, Slot::new(4358, 1)), (0x1d4ee, Slot::new(4359, 1)), (0x1d4ef, Slot::new(4360, 1)), (0x1d4f0, Slot::new(4361, 1)),
            (0x1d4f1, Slot::new(4362, 1)), (0x1d4f2, Slot::new(4363, 1)), (0x1d4f3, Slot::new(4364, 1)), (0x1d4f4, Slot::new(4365, 1)),
            (0x1d4f5, Slot::new(4366, 1)), (0x1d4f6, Slot::new(4367, 1)), (0x1d4f7, Slot::new(4368, 1)), (0x1d4f8, Slot::new(4369, 1)),
            (0x1d4f9, Slot::new(4370, 1)), (0x1d4fa, Slot::new(4371, 1)), (0x1d4fb, Slot::new(4372, 1)), (0x1d4fc, Slot::new(4373, 1)),
            (0x1d4fd, Slot::new(4374, 1)), (0x1d4fe, Slot::new(4375, 1)), (0x1d4ff, Slot::new(4376, 1)), (0x1d500, Slot::new(4377, 1)),
            (0x1d501, Slot::new(4378, 1)), (0x1d502, Slot::new(4379, 1)), (0x1d503, Slot::new(4380, 1)), (0x1d504, Slot::new(4381, 1)),
            (0x1d505, Slot::new(4382, 1)), (0x1d507, Slot::new(4383, 1)), (0x1d508, Slot::new(4384, 1)), (0x1d509, Slot::new(4385, 1)),
            (0x1d50a, Slot::new(4386, 1)), (0x1d50d, Slot::new(4387, 1)), (0x1d50e, Slot::new(4388, 1)), (0x1d50f, Slot::new(4389, 1)),
            (0x1d510, Slot::new(4390, 1)), (0x1d511, Slot::new(4391, 1)), (0x1d512, Slot::new(4392, 1)), (0x1d513, Slot::new(4393, 1)),
            (0x1d514, Slot::new(4394, 1)), (0x1d516, Slot::new(4395, 1)), (0x1d517, Slot::new(4396, 1)), (0x1d518, Slot::new(4397, 1)),
            (0x1d519, Slot::new(4398, 1)), (0x1d51a, Slot::new(4399, 1)), (0x1d51b, Slot::new(4400, 1)), (0x1d51c, Slot::new(4401, 1)),
            (0x1d51e, Slot::new(4402, 1)), (0x1d51f, Slot::new(4403, 1)), (0x1d520, Slot::new(4404, 1)), (0x1d521, Slot::new(4405, 1)),
            (0x1d522, Slot::new(4406, 1)), (0x1d523, Slot::new(4407, 1)), (0x1d524, Slot::new(4408, 1)), (0x1d525, Slot::new(4409, 1)),
            (0x1d526, Slot::new(4410, 1)), (0x1d527, Slot::new(4411, 1)), (0x1d528, Slot::new(4412, 1)), (0x1d529, Slot::new(4413, 1)),
            (0x1d52a, Slot::new(4414, 1)), (0x1d52b, Slot::new(4415, 1)), (0x1d52c, Slot::new(4416, 1)), (0x1d52d, Slot::new(4417, 1)),
            (0x1d52e, Slot::new(4418, 1)), (0x1d52f, Slot::new(4419, 1)), (0x1d530, Slot::new(4420, 1)), (0x1d531, Slot::new(4421, 1)),
            (0x1d532, Slot::new(4422, 1)), (0x1d533, Slot::new(4423, 1)), (0x1d534, Slot::new(4424, 1)), (0x1d535, Slot::new(4425, 1)),
            (0x1d536, Slot::new(4426, 1)), (0x1d537, Slot::new(4427, 1)), (0x1d538, Slot::new(4428, 1)), (0x1d539, Slot::new(4429, 1)),
            (0x1d53b, Slot::new(4430, 1)), (0x1d53c, Slot::new(4431, 1)), (0x1d53d, Slot::new(4432, 1)), (0x1d53e, Slot::new(4433, 1)),
            (0x1d540, Slot::new(4434, 1)), (0x1d541, Slot::new(4435, 1)), (0x1d542, Slot::new(4436, 1)), (0x1d543, Slot::new(4437, 1)),
            (0x1d544, Slot::new(4438, 1)), (0x1d546, Slot::new(4439, 1)), (0x1d54a, Slot::new(4440, 1)), (0x1d54b, Slot::new(4441, 1)),
            (0x1d54c, Slot::new(4442, 1)), (0x1d54d, Slot::new(4443, 1)), (0x1d54e, Slot::new(4444, 1)), (0x1d54f, Slot::new(4445, 1)),
            (0x1d550, Slot::new(4446, 1)), (0x1d552, Slot::new(4447, 1)), (0x1d553, Slot::new(4448, 1)), (0x1d554, Slot::new(4449, 1)),
            (0x1d555, Slot::new(4450, 1)), (0x1d556, Slot::new(4451, 1)), (0x1d557, Slot::new(4452, 1)), (0x1d558, Slot::new(4453, 1)),
            (0x1d559, Slot::new(4454, 1)), (0x1d55a, Slot::new(4455, 1)), (0x1d55b, Slot::new(4456, 1)), (0x1d55c, Slot::new(4457, 1)),
            (0x1d55d, Slot::new(4458, 1)), (0x1d55e, Slot::new(4459, 1)), (0x1d55f, Slot::new(4460, 1)), (0x1d560, Slot::new(4461, 1)),
            (0x1d561, Slot::new(4462, 1)), (0x1d562, Slot::new(4463, 1)), (0x1d563, Slot::new(4464, 1)), (0x1d564, Slot::new(4465, 1)),
            (0x1d565, Slot::new(4466, 1)), (0x1d566, Slot::new(4467, 1)), (0x1d567, Slot::new(4468, 1)), (0x1d568, Slot::new(4469, 1)),
            (0x1d569, Slot::new(4470, 1)), (0x1d56a, Slot::new(4471, 1)), (0x1d56b, Slot::new(4472, 1)), (0x1d56c, Slot::new(4473, 1)),
            (0x1d56d, Slot::new(4474, 1)), (0x1d56e, Slot::new(4475, 1)), (0x1d56f, Slot::new(4476, 1)), (0x1d570, Slot::new(4477, 1)),
            (0x1d571, Slot::new(4478, 1)), (0x1d572, Slot::new(4479, 1)), (0x1d573, Slot::new(4480, 1)), (0x1d574, Slot::new(4481, 1)),
            (0x1d575, Slot::new(4482, 1)), (0x1d576, Slot::new(4483, 1)), (0x1d577, Slot::new(4484, 1)), (0x1d578, Slot::new(4485, 1)),
            (0x1d579, Slot::new(4486, 1)), (0x1d57a, Slot::new(4487, 1)), (0x1d57b, Slot::new(4488, 1)), (0x1d57c, Slot::new(4489, 1)),
            (0x1d57d, Slot::new(4490, 1)), (0x1d57e, Slot::new(4491, 1)), (0x1d57f, Slot::new(4492, 1)), (0x1d580, Slot::new(4493, 1)),
            (0x1d581, Slot::new(4494, 1)), (0x1d582, Slot::new(4495, 1)), (0x1d583, Slot::new(4496, 1)), (0x1d584, Slot::new(4497, 1)),
            (0x1d585, Slot::new(4498, 1)), (0x1d586, Slot::new(4499, 1)), (0x1d587, Slot::new(4500, 1)), (0x1d588, Slot::new(4501, 1)),
            (0x1d589, Slot::new(4502, 1)), (0x1d58a, Slot::new(4503, 1)), (0x1d58b, Slot::new(4504, 1)), (0x1d58c, Slot::new(4505, 1)),
            (0x1d58d, Slot::new(4506, 1)), (0x1d58e, Slot::new(4507, 1)), (0x1d58f, Slot::new(4508, 1)), (0x1d590, Slot::new(4509, 1)),
            (0x1d591, Slot::new(4510, 1)), (0x1d592, Slot::new(4511, 1)), (0x1d593, Slot::new(4512, 1)), (0x1d594, Slot::new(4513, 1)),
            (0x1d595, Slot::new(4514, 1)), (0x1d596, Slot::new(4515, 1)), (0x1d597, Slot::new(4516, 1)), (0x1d598, Slot::new(4517, 1)),
            (0x1d599, Slot::new(4518, 1)), (0x1d59a, Slot::new(4519, 1)), (0x1d59b, Slot::new(4520, 1)), (0x1d59c, Slot::new(4521, 1)),
            (0x1d59d, Slot::new(4522, 1)), (0x1d59e, Slot::new(4523, 1)), (0x1d59f, Slot::new(4524, 1)), (0x1d5a0, Slot::new(4525, 1)),
            (0x1d5a1, Slot::new(4526, 1)), (0x1d5a2, Slot::new(4527, 1)), (0x1d5a3, Slot::new(4528, 1)), (0x1d5a4, Slot::new(4529, 1)),
            (0x1d5a5, Slot::new(4530, 1)), (0x1d5a6, Slot::new(4531, 1)), (0x1d5a7, Slot::new(4532, 1)), (0x1d5a8, Slot::new(4533, 1)),
            (0x1d5a9, Slot::new(4534, 1)), (0x1d5aa, Slot::new(4535, 1)), (0x1d5ab, Slot::new(4536, 1)), (0x1d5ac, Slot::new(4537, 1)),
            (0x1d5ad, Slot::new(4538, 1)), (0x1d5ae, Slot::new(4539, 1)), (0x1d5af, Slot::new(4540, 1)), (0x1d5b0, Slot::new(4541, 1)),
            (0x1d5b1, Slot::new(4542, 1)), (0x1d5b2, Slot::new(4543, 1)), (0x1d5b3, Slot::new(4544, 1)), (0x1d5b4, Slot::new(4545, 1)),
            (0x1d5b5, Slot::new(4546, 1)), (0x1d5b6, Slot::new(4547, 1)), (0x1d5b7, Slot::new(4548, 1)), (0x1d5b8, Slot::new(4549, 1)),
            (0x1d5b9, Slot::new(4550, 1)), (0x1d5ba, Slot::new(4551, 1)), (0x1d5bb, Slot::new(4552, 1)), (0x1d5bc, Slot::new(4553, 1)),
            (0x1d5bd, Slot::new(4554, 1)), (0x1d5be, Slot::new(4555, 1)), (0x1d5bf, Slot::new(4556, 1)), (0x1d5c0, Slot::new(4557, 1)),
            (0x1d5c1, Slot::new(4558, 1)), (0x1d5c2, Slot::new(4559, 1)), (0x1d5c3, Slot::new(4560, 1)), (0x1d5c4, Slot::new(4561, 1)),
            (0x1d5c5, Slot::new(4562, 1)), (0x1d5c6, Slot::new(4563, 1)), (0x1d5c7, Slot::new(4564, 1)), (0x1d5c8, Slot::new(4565, 1)),
            (0x1d5c9, Slot::new(4566, 1)), (0x1d5ca, Slot::new(4567, 1)), (0x1d5cb, Slot::new(4568, 1)), (0x1d5cc, Slot::new(4569, 1)),
            (0x1d5cd, Slot::new(4570, 1)), (0x1d5ce, Slot::new(4571, 1)), (0x1d5cf, Slot::new(4572, 1)), (0x1d5d0, Slot::new(4573, 1)),
            (0x1d5d1, Slot::new(4574, 1)), (0x1d5d2, Slot::new(4575, 1)), (0x1d5d3, Slot::new(4576, 1)), (0x1d5d4, Slot::new(4577, 1)),
            (0x1d5d5, Slot::new(4578, 1)), (0x1d5d6, Slot::new(4579, 1)), (0x1d5d7, Slot::new(4580, 1)), (0x1d5d8, Slot::new(4581, 1)),
            (0x1d5d9, Slot::new(4582, 1)), (0x1d5da, Slot::new(4583, 1)), (0x1d5db, Slot::new(4584, 1)), (0x1d5dc, Slot::new(4585, 1)),
            (0x1d5dd, Slot::new(4586, 1)), (0x1d5de, Slot::new(4587, 1)), (0x1d5df, Slot::new(4588, 1)), (0x1d5e0, Slot::new(4589, 1)),
            (0x1d5e1, Slot::new(4590, 1)), (0x1d5e2, Slot::new(4591, 1)), (0x1d5e3, Slot::new(4592, 1)), (0x1d5e4, Slot::new(4593, 1)),
            (0x1d5e5, Slot::new(4594, 1)), (0x1d5e6, Slot::new(4595, 1)), (0x1d5e7, Slot::new(4596, 1)), (0x1d5e8, Slot::new(4597, 1)),
            (0x1d5e9, Slot::new(4598, 1)), (0x1d5ea, Slot::new(4599, 1)), (0x1d5eb, Slot::new(4600, 1)), (0x1d5ec, Slot::new(4601, 1)),
            (0x1d5ed, Slot::new(4602, 1)), (0x1d5ee, Slot::new(4603, 1)), (0x1d5ef, Slot::new(4604, 1)), (0x1d5f0, Slot::new(4605, 1)),
            (0x1d5f1, Slot::new(4606, 1)), (0x1d5f2, Slot::new(4607, 1)), (0x1d5f3, Slot::new(4608, 1)), (0x1d5f4, Slot::new(4609, 1)),
            (0x1d5f5, Slot::new(4610, 1)), (0x1d5f6, Slot::new(4611, 1)), (0x1d5f7, Slot::new(4612, 1)), (0x1d5f8, Slot::new(4613, 1)),
            (0x1d5f9, Slot::new(4614, 1)), (0x1d5fa, Slot::new(4615, 1)), (0x1d5fb, Slot::new(4616, 1)), (0x1d5fc, Slot::new(4617, 1)),
            (0x1d5fd, Slot::new(4618, 1)), (0x1d5fe, Slot::new(4619, 1)), (0x1d5ff, Slot::new(4620, 1)), (0x1d600, Slot::new(4621, 1)),
            (0x1d601, Slot::new(4622, 1)), (0x1d602, Slot::new(4623, 1)), (0x1d603, Slot::new(4624, 1)), (0x1d604, Slot::new(4625, 1)),
            (0x1d605, Slot::new(4626, 1)), (0x1d606, Slot::new(4627, 1)), (0x1d607, Slot::new(4628, 1)), (0x1d608, Slot::new(4629, 1)),
            (0x1d609, Slot::new(4630, 1)), (0x1d60a, Slot::new(4631, 1)), (0x1d60b, Slot::new(4632, 1)), (0x1d60c, Slot::new(4633, 1)),
            (0x1d60d, Slot::new(4634, 1)), (0x1d60e, Slot::new(4635, 1)), (0x1d60f, Slot::new(4636, 1)), (0x1d610, Slot::new(4637, 1)),
            (0x1d611, Slot::new(4638, 1)), (0x1d612, Slot::new(4639, 1)), (0x1d613, Slot::new(4640, 1)), (0x1d614, Slot::new(4641, 1)),
            (0x1d615, Slot::new(4642, 1)), (0x1d616, Slot::new(4643, 1)), (0x1d617, Slot::new(4644, 1)), (0x1d618, Slot::new(4645, 1)),
            (0x1d619, Slot::new(4646, 1)), (0x1d61a, Slot::new(4647, 1)), (0x1d61b, Slot::new(4648, 1)), (0x1d61c, Slot::new(4649, 1)),
            (0x1d61d, Slot::new(4650, 1)), (0x1d61e, Slot::new(4651, 1)), (0x1d61f, Slot::new(4652, 1)), (0x1d620, Slot::new(4653, 1)),
            (0x1d621, Slot::new(4654, 1)), (0x1d622, Slot::new(4655, 1)), (0x1d623, Slot::new(4656, 1)), (0x1d624, Slot::new(4657, 1)),
            (0x1d625, Slot::new(4658, 1)), (0x1d626, Slot::new(4659, 1)), (0x1d627, Slot::new(4660, 1)), (0x1d628, Slot::new(4661, 1)),
            (0x1d629, Slot::new(4662, 1)), (0x1d62a, Slot::new(4663, 1)), (0x1d62b, Slot::new(4664, 1)), (0x1d62c, Slot::new(4665, 1)),
            (0x1d62d, Slot::new(4666, 1)), (0x1d62e, Slot::new(4667, 1)), (0x1d62f, Slot::new(4668, 1)), (0x1d630, Slot::new(4669, 1)),
            (0x1d631, Slot::new(4670, 1)), (0x1d632, Slot::new(4671, 1)), (0x1d633, Slot::new(4672, 1)), (0x1d634, Slot::new(4673, 1)),
            (0x1d635, Slot::new(4674, 1)), (0x1d636, Slot::new(4675, 1)), (0x1d637, Slot::new(4676, 1)), (0x1d638, Slot::new(4677, 1)),
            (0x1d639, Slot::new(4678, 1)), (0x1d63a, Slot::new(4679, 1)), (0x1d63b, Slot::new(4680, 1)), (0x1d63c, Slot::new(4681, 1)),
            (0x1d63d, Slot::new(4682, 1)), (0x1d63e, Slot::new(4683, 1)), (0x1d63f, Slot::new(4684, 1)), (0x1d640, Slot::new(4685, 1)),
            (0x1d641, Slot::new(4686, 1)), (0x1d642, Slot::new(4687, 1)), (0x1d643, Slot::new(4688, 1)), (0x1d644, Slot::new(4689, 1)),
            (0x1d645, Slot::new(4690, 1)), (0x1d646, Slot::new(4691, 1)), (0x1d647, Slot::new(4692, 1)), (0x1d648, Slot::new(4693, 1)),
            (0x1d649, Slot::new(4694, 1)), (0x1d64a, Slot::new(4695, 1)), (0x1d64b, Slot::new(4696, 1)), (0x1d64c, Slot::new(4697, 1)),
            (0x1d64d, Slot::new(4698, 1)), (0x1d64e, Slot::new(4699, 1)), (0x1d64f, Slot::new(4700, 1)), (0x1d650, Slot::new(4701, 1)),
            (0x1d651, Slot::new(4702, 1)), (0x1d652, Slot::new(4703, 1)), (0x1d653, Slot::new(4704, 1)), (0x1d654, Slot::new(4705, 1)),
            (0x1d655, Slot::new(4706, 1)), (0x1d656, Slot::new(4707, 1)), (0x1d657, Slot::new(4708, 1)), (0x1d658, Slot::new(4709, 1)),
            (0x1d659, Slot::new(4710, 1)), (0x1d65a, Slot::new(4711, 1)), (0x1d65b, Slot::new(4712, 1)), (0x1d65c, Slot::new(4713, 1)),
            (0x1d65d, Slot::new(4714, 1)), (0x1d65e, Slot::new(4715, 1)), (0x1d65f, Slot::new(4716, 1)), (0x1d660, Slot::new(4717, 1)),
            (0x1d661, Slot::new(4718, 1)), (0x1d662, Slot::new(4719, 1)), (0x1d663, Slot::new(4720, 1)), (0x1d664, Slot::new(4721, 1)),
            (0x1d665, Slot::new(4722, 1)), (0x1d666, Slot::new(4723, 1)), (0x1d667, Slot::new(4724, 1)), (0x1d668, Slot::new(4725, 1)),
            (0x1d669, Slot::new(4726, 1)), (0x1d66a, Slot::new(4727, 1)), (0x1d66b, Slot::new(4728, 1)), (0x1d66c, Slot::new(4729, 1)),
            (0x1d66d, Slot::new(4730, 1)), (0x1d66e, Slot::new(4731, 1)), (0x1d66f, Slot::new(4732, 1)), (0x1d670, Slot::new(4733, 1)),
            (0x1d671, Slot::new(4734, 1)), (0x1d672, Slot::new(4735, 1)), (0x1d673, Slot::new(4736, 1)), (0x1d674, Slot::new(4737, 1)),
            (0x1d675, Slot::new(4738, 1)), (0x1d676, Slot::new(4739, 1)), (0x1d677, Slot::new(4740, 1)), (0x1d678, Slot::new(4741, 1)),
            (0x1d679, Slot::new(4742, 1)), (0x1d67a, Slot::new(4743, 1)), (0x1d67b, Slot::new(4744, 1)), (0x1d67c, Slot::new(4745, 1)),
            (0x1d67d, Slot::new(4746, 1)), (0x1d67e, Slot::new(4747, 1)), (0x1d67f, Slot::new(4748, 1)), (0x1d680, Slot::new(4749, 1)),
            (0x1d681, Slot::new(4750, 1)), (0x1d682, Slot::new(4751, 1)), (0x1d683, Slot::new(4752, 1)), (0x1d684, Slot::new(4753, 1)),
            (0x1d685, Slot::new(4754, 1)), (0x1d686, Slot::new(4755, 1)), (0x1d687, Slot::new(4756, 1)), (0x1d688, Slot::new(4757, 1)),
            (0x1d689, Slot::new(4758, 1)), (0x1d68a, Slot::new(4759, 1)), (0x1d68b, Slot::new(4760, 1)), (0x1d68c, Slot::new(4761, 1)),
            (0x1d68d, Slot::new(4762, 1)), (0x1d68e, Slot::new(4763, 1)), (0x1d68f, Slot::new(4764, 1)), (0x1d690, Slot::new(4765, 1)),
            (0x1d691, Slot::new(4766, 1)), (0x1d692, Slot::new(4767, 1)), (0x1d693, Slot::new(4768, 1)), (0x1d694, Slot::new(4769, 1)),
            (0x1d695, Slot::new(4770, 1)), (0x1d696, Slot::new(4771, 1)), (0x1d697, Slot::new(4772, 1)), (0x1d698, Slot::new(4773, 1)),
            (0x1d699, Slot::new(4774, 1)), (0x1d69a, Slot::new(4775, 1)), (0x1d69b, Slot::new(4776, 1)), (0x1d69c, Slot::new(4777, 1)),
            (0x1d69d, Slot::new(4778, 1)), (0x1d69e, Slot::new(4779, 1)), (0x1d69f, Slot::new(4780, 1)), (0x1d6a0, Slot::new(4781, 1)),
            (0x1d6a1, Slot::new(4782, 1)), (0x1d6a2, Slot::new(4783, 1)), (0x1d6a3, Slot::new(4784, 1)), (0x1d6a4, Slot::new(4785, 1)),
            (0x1d6a5, Slot::new(4786, 1)), (0x1d6a8, Slot::new(4787, 1)), (0x1d6a9, Slot::new(4788, 1)), (0x1d6aa, Slot::new(4789, 1)),
            (0x1d6ab, Slot::new(4790, 1)), (0x1d6ac, Slot::new(4791, 1)), (0x1d6ad, Slot::new(4792, 1)), (0x1d6ae, Slot::new(4793, 1)),
            (0x1d6af, Slot::new(4794, 1)), (0x1d6b0, Slot::new(4795, 1)), (0x1d6b1, Slot::new(4796, 1)), (0x1d6b2, Slot::new(4797, 1)),
            (0x1d6b3, Slot::new(4798, 1)), (0x1d6b4, Slot::new(4799, 1)), (0x1d6b5, Slot::new(4800, 1)), (0x1d6b6, Slot::new(4801, 1)),
            (0x1d6b7, Slot::new(4802, 1)), (0x1d6b8, Slot::new(4803, 1)), (0x1d6b9, Slot::new(4804, 1)), (0x1d6ba, Slot::new(4805, 1)),
            (0x1d6bb, Slot::new(4806, 1)), (0x1d6bc, Slot::new(4807, 1)), (0x1d6bd, Slot::new(4808, 1)), (0x1d6be, Slot::new(4809, 1)),
            (0x1d6bf, Slot::new(4810, 1)), (0x1d6c0, Slot::new(4811, 1)), (0x1d6c1, Slot::new(4812, 1)), (0x1d6c2, Slot::new(4813, 1)),
            (0x1d6c3, Slot::new(4814, 1)), (0x1d6c4, Slot::new(4815, 1)), (0x1d6c5, Slot::new(4816, 1)), (0x1d6c6, Slot::new(4817, 1)),
            (0x1d6c7, Slot::new(4818, 1)), (0x1d6c8, Slot::new(4819, 1)), (0x1d6c9, Slot::new(4820, 1)), (0x1d6ca, Slot::new(4821, 1)),
            (0x1d6cb, Slot::new(4822, 1)), (0x1d6cc, Slot::new(4823, 1)), (0x1d6cd, Slot::new(4824, 1)), (0x1d6ce, Slot::new(4825, 1)),
            (0x1d6cf, Slot::new(4826, 1)), (0x1d6d0, Slot::new(4827, 1)), (0x1d6d1, Slot::new(4828, 1)), (0x1d6d2, Slot::new(4829, 1)),
            (0x1d6d3, Slot::new(4830, 1)), (0x1d6d4, Slot::new(4831, 1)), (0x1d6d5, Slot::new(4832, 1)), (0x1d6d6, Slot::new(4833, 1)),
            (0x1d6d7, Slot::new(4834, 1)), (0x1d6d8, Slot::new(4835, 1)), (0x1d6d9, Slot::new(4836, 1)), (0x1d6da, Slot::new(4837, 1)),
            (0x1d6db, Slot::new(4838, 1)), (0x1d6dc, Slot::new(4839, 1)), (0x1d6dd, Slot::new(4840, 1)), (0x1d6de, Slot::new(4841, 1)),
            (0x1d6df, Slot::new(4842, 1)), (0x1d6e0, Slot::new(4843, 1)), (0x1d6e1, Slot::new(4844, 1)), (0x1d6e2, Slot::new(4845, 1)),
            (0x1d6e3, Slot::new(4846, 1)), (0x1d6e4, Slot::new(4847, 1)), (0x1d6e5, Slot::new(4848, 1)), (0x1d6e6, Slot::new(4849, 1)),
            (0x1d6e7, Slot::new(4850, 1)), (0x1d6e8, Slot::new(4851, 1)), (0x1d6e9, Slot::new(4852, 1)), (0x1d6ea, Slot::new(4853, 1)),
            (0x1d6eb, Slot::new(4854, 1)), (0x1d6ec, Slot::new(4855, 1)), (0x1d6ed, Slot::new(4856, 1)), (0x1d6ee, Slot::new(4857, 1)),
            (0x1d6ef, Slot::new(4858, 1)), (0x1d6f0, Slot::new(4859, 1)), (0x1d6f1, Slot::new(4860, 1)), (0x1d6f2, Slot::new(4861, 1)),
            (0x1d6f3, Slot::new(4862, 1)), (0x1d6f4, Slot::new(4863, 1)), (0x1d6f5, Slot::new(4864, 1)), (0x1d6f6, Slot::new(4865, 1)),
            (0x1d6f7, Slot::new(4866, 1)), (0x1d6f8, Slot::new(4867, 1)), (0x1d6f9, Slot::new(4868, 1)), (0x1d6fa, Slot::new(4869, 1)),
            (0x1d6fb, Slot::new(4870, 1)), (0x1d6fc, Slot::new(4871, 1)), (0x1d6fd, Slot::new(4872, 1)), (0x1d6fe, Slot::new(4873, 1)),
            (0x1d6ff, Slot::new(4874, 1)), (0x1d700, Slot::new(4875, 1)), (0x1d701, Slot::new(4876, 1)), (0x1d702, Slot::new(4877, 1)),
            (0x1d703, Slot::new(4878, 1)), (0x1d704, Slot::new(4879, 1)), (0x1d705, Slot::new(4880, 1)), (0x1d706, Slot::new(4881, 1)),
            (0x1d707, Slot::new(4882, 1)), (0x1d708, Slot::new(4883, 1)), (0x1d709, Slot::new(4884, 1)), (0x1d70a, Slot::new(4885, 1)),
            (0x1d70b, Slot::new(4886, 1)), (0x1d70c, Slot::new(4887, 1)), (0x1d70d, Slot::new(4888, 1)), (0x1d70e, Slot::new(4889, 1)),
            (0x1d70f, Slot::new(4890, 1)), (0x1d710, Slot::new(4891, 1)), (0x1d711, Slot::new(4892, 1)), (0x1d712, Slot::new(4893, 1)),
            (0x1d713, Slot::new(4894, 1)), (0x1d714, Slot::new(4895, 1)), (0x1d715, Slot::new(4896, 1)), (0x1d716, Slot::new(4897, 1)),
            (0x1d717, Slot::new(4898, 1)), (0x1d718, Slot::new(4899, 1)), (0x1d719, Slot::new(4900, 1)), (0x1d71a, Slot::new(4901, 1)),
            (0x1d71b, Slot::new(4902, 1)), (0x1d71c, Slot::new(4903, 1)), (0x1d71d, Slot::new(4904, 1)), (0x1d71e, Slot::new(4905, 1)),
            (0x1d71f, Slot::new(4906, 1)), (0x1d720, Slot::new(4907, 1)), (0x1d721, Slot::new(4908, 1)), (0x1d722, Slot::new(4909, 1)),
            (0x1d723, Slot::new(4910, 1)), (0x1d724, Slot::new(4911, 1)), (0x1d725, Slot::new(4912, 1)), (0x1d726, Slot::new(4913, 1)),
            (0x1d727, Slot::new(4914, 1)), (0x1d728, Slot::new(4915, 1)), (0x1d729, Slot::new(4916, 1)), (0x1d72a, Slot::new(4917, 1)),
            (0x1d72b, Slot::new(4918, 1)), (0x1d72c, Slot::new(4919, 1)), (0x1d72d, Slot::new(4920, 1)), (0x1d72e, Slot::new(4921, 1)),
            (0x1d72f, Slot::new(4922, 1)), (0x1d730, Slot::new(4923, 1)), (0x1d731, Slot::new(4924, 1)), (0x1d732, Slot::new(4925, 1)),
            (0x1d733, Slot::new(4926, 1)), (0x1d734, Slot::new(4927, 1)), (0x1d735, Slot::new(4928, 1)), (0x1d736, Slot::new(4929, 1)),
            (0x1d737, Slot::new(4930, 1)), (0x1d738, Slot::new(4931, 1)), (0x1d739, Slot::new(4932, 1)), (0x1d73a, Slot::new(4933, 1)),
            (0x1d73b, Slot::new(4934, 1)), (0x1d73c, Slot::new(4935, 1)), (0x1d73d, Slot::new(4936, 1)), (0x1d73e, Slot::new(4937, 1)),
            (0x1d73f, Slot::new(4938, 1)), (0x1d740, Slot::new(4939, 1)), (0x1d741, Slot::new(4940, 1)), (0x1d742, Slot::new(4941, 1)),
            (0x1d743, Slot::new(4942, 1)), (0x1d744, Slot::new(4943, 1)), (0x1d745, Slot::new(4944, 1)), (0x1d746, Slot::new(4945, 1)),
            (0x1d747, Slot::new(4946, 1)), (0x1d748, Slot::new(4947, 1)), (0x1d749, Slot::new(4948, 1)), (0x1d74a, Slot::new(4949, 1)),
            (0x1d74b, Slot::new(4950, 1)), (0x1d74c, Slot::new(4951, 1)), (0x1d74d, Slot::new(4952, 1)), (0x1d74e, Slot::new(4953, 1)),
            (0x1d74f, Slot::new(4954, 1)), (0x1d750, Slot::new(4955, 1)), (0x1d751, Slot::new(4956, 1)), (0x1d752, Slot::new(4957, 1)),
            (0x1d753, Slot::new(4958, 1)), (0x1d754, Slot::new(4959, 1)), (0x1d755, Slot::new(4960, 1)), (0x1d756, Slot::new(4961, 1)),
            (0x1d757, Slot::new(4962, 1)), (0x1d758, Slot::new(4963, 1)), (0x1d759, Slot::new(4964, 1)), (0x1d75a, Slot::new(4965, 1)),
            (0x1d75b, Slot::new(4966, 1)), (0x1d75c, Slot::new(4967, 1)), (0x1d75d, Slot::new(4968, 1)), (0x1d75e, Slot::new(4969, 1)),
            (0x1d75f, Slot::new(4970, 1)), (0x1d760, Slot::new(4971, 1)), (0x1d761, Slot::new(4972, 1)), (0x1d762, Slot::new(4973, 1)),
            (0x1d763, Slot::new(4974, 1)), (0x1d764, Slot::new(4975, 1)), (0x1d765, Slot::new(4976, 1)), (0x1d766, Slot::new(4977, 1)),
            (0x1d767, Slot::new(4978, 1)), (0x1d768, Slot::new(4979, 1)), (0x1d769, Slot::new(4980, 1)), (0x1d76a, Slot::new(4981, 1)),
            (0x1d76b, Slot::new(4982, 1)), (0x1d76c, Slot::new(4983, 1)), (0x1d76d, Slot::new(4984, 1)), (0x1d76e, Slot::new(4985, 1)),
            (0x1d76f, Slot::new(4986, 1)), (0x1d770, Slot::new(4987, 1)), (0x1d771, Slot::new(4988, 1)), (0x1d772, Slot::new(4989, 1)),
            (0x1d773, Slot::new(4990, 1)), (0x1d774, Slot::new(4991, 1)), (0x1d775, Slot::new(4992, 1)), (0x1d776, Slot::new(4993, 1)),
            (0x1d777, Slot::new(4994, 1)), (0x1d778, Slot::new(4995, 1)), (0x1d779, Slot::new(4996, 1)), (0x1d77a, Slot::new(4997, 1)),
            (0x1d77b, Slot::new(4998, 1)), (0x1d77c, Slot::new(4999, 1)), (0x1d77d, Slot::new(5000, 1)), (0x1d77e, Slot::new(5001, 1)),
            (0x1d77f, Slot::new(5002, 1)), (0x1d780, Slot::new(5003, 1)), (0x1d781, Slot::new(5004, 1)), (0x1d782, Slot::new(5005, 1)),
            (0x1d783, Slot::new(5006, 1)), (0x1d784, Slot::new(5007, 1)), (0x1d785, Slot::new(5008, 1)), (0x1d786, Slot::new(5009, 1)),
            (0x1d787, Slot::new(5010, 1)), (0x1d788, Slot::new(5011, 1)), (0x1d789, Slot::new(5012, 1)), (0x1d78a, Slot::new(5013, 1)),
            (0x1d78b, Slot::new(5014, 1)), (0x1d78c, Slot::new(5015, 1)), (0x1d78d, Slot::new(5016, 1)), (0x1d78e, Slot::new(5017, 1)),
            (0x1d78f, Slot::new(5018, 1)), (0x1d790, Slot::new(5019, 1)), (0x1d791, Slot::new(5020, 1)), (0x1d792, Slot::new(5021, 1)),
            (0x1d793, Slot::new(5022, 1)), (0x1d794, Slot::new(5023, 1)), (0x1d795, Slot::new(5024, 1)), (0x1d796, Slot::new(5025, 1)),
            (0x1d797, Slot::new(5026, 1)), (0x1d798, Slot::new(5027, 1)), (0x1d799, Slot::new(5028, 1)), (0x1d79a, Slot::new(5029, 1)),
            (0x1d79b, Slot::new(5030, 1)), (0x1d79c, Slot::new(5031, 1)), (0x1d79d, Slot::new(5032, 1)), (0x1d79e, Slot::new(5033, 1)),
            (0x1d79f, Slot::new(5034, 1)), (0x1d7a0, Slot::new(5035, 1)), (0x1d7a1, Slot::new(5036, 1)), (0x1d7a2, Slot::new(5037, 1)),
            (0x1d7a3, Slot::new(5038, 1)), (0x1d7a4, Slot::new(5039, 1)), (0x1d7a5, Slot::new(5040, 1)), (0x1d7a6, Slot::new(5041, 1)),
            (0x1d7a7, Slot::new(5042, 1)), (0x1d7a8, Slot::new(5043, 1)), (0x1d7a9, Slot::new(5044, 1)), (0x1d7aa, Slot::new(5045, 1)),
            (0x1d7ab, Slot::new(5046, 1)), (0x1d7ac, Slot::new(5047, 1)), (0x1d7ad, Slot::new(5048, 1)), (0x1d7ae, Slot::new(5049, 1)),
            (0x1d7af, Slot::new(5050, 1)), (0x1d7b0, Slot::new(5051, 1)), (0x1d7b1, Slot::new(5052, 1)), (0x1d7b2, Slot::new(5053, 1)),
            (0x1d7b3, Slot::new(5054, 1)), (0x1d7b4, Slot::new(5055, 1)), (0x1d7b5, Slot::new(5056, 1)), (0x1d7b6, Slot::new(5057, 1)),
            (0x1d7b7, Slot::new(5058, 1)), (0x1d7b8, Slot::new(5059, 1)), (0x1d7b9, Slot::new(5060, 1)), (0x1d7ba, Slot::new(5061, 1)),
            (0x1d7bb, Slot::new(5062, 1)), (0x1d7bc, Slot::new(5063, 1)), (0x1d7bd, Slot::new(5064, 1)), (0x1d7be, Slot::new(5065, 1)),
            (0x1d7bf, Slot::new(5066, 1)), (0x1d7c0, Slot::new(5067, 1)), (0x1d7c1, Slot::new(5068, 1)), (0x1d7c2, Slot::new(5069, 1)),
            (0x1d7c3, Slot::new(5070, 1)), (0x1d7c4, Slot::new(5071, 1)), (0x1d7c5, Slot::new(5072, 1)), (0x1d7c6, Slot::new(5073, 1)),
            (0x1d7c7, Slot::new(5074, 1)), (0x1d7c8, Slot::new(5075, 1)), (0x1d7c9, Slot::new(5076, 1)), (0x1d7ca, Slot::new(5077, 1)),
            (0x1d7cb, Slot::new(5078, 1)), (0x1d7ce, Slot::new(5079, 1)), (0x1d7cf, Slot::new(5080, 1)), (0x1d7d0, Slot::new(5081, 1)),
            (0x1d7d1, Slot::new(5082, 1)), (0x1d7d2, Slot::new(5083, 1)), (0x1d7d3, Slot::new(5084, 1)), (0x1d7d4, Slot::new(5085, 1)),
            (0x1d7d5, Slot::new(5086, 1)), (0x1d7d6, Slot::new(5087, 1)), (0x1d7d7, Slot::new(5088, 1)), (0x1d7d8, Slot::new(5089, 1)),
            (0x1d7d9, Slot::new(5090, 1)), (0x1d7da, Slot::new(5091, 1)), (0x1d7db, Slot::new(5092, 1)), (0x1d7dc, Slot::new(5093, 1)),
            (0x1d7dd, Slot::new(5094, 1)), (0x1d7de, Slot::new(5095, 1)), (0x1d7df, Slot::new(5096, 1)), (0x1d7e0, Slot::new(5097, 1)),
            (0x1d7e1, Slot::new(5098, 1)), (0x1d7e2, Slot::new(5099, 1)), (0x1d7e3, Slot::new(5100, 1)), (0x1d7e4, Slot::new(5101, 1)),
            (0x1d7e5, Slot::new(5102, 1)), (0x1d7e6, Slot::new(5103, 1)), (0x1d7e7, Slot::new(5104, 1)), (0x1d7e8, Slot::new(5105, 1)),
            (0x1d7e9, Slot::new(5106, 1)), (0x1d7ea, Slot::new(5107, 1)), (0x1d7eb, Slot::new(5108, 1)), (0x1d7ec, Slot::new(5109, 1)),
            (0x1d7ed, Slot::new(5110, 1)), (0x1d7ee, Slot::new(5111, 1)), (0x1d7ef, Slot::new(5112, 1)), (0x1d7f0, Slot::new(5113, 1)),
            (0x1d7f1, Slot::new(5114, 1)), (0x1d7f2, Slot::new(5115, 1)), (0x1d7f3, Slot::new(5116, 1)), (0x1d7f4, Slot::new(5117, 1)),
            (0x1d7f5, Slot::new(5118, 1)), (0x1d7f6, Slot::new(5119, 1)), (0x1d7f7, Slot::new(5120, 1)), (0x1d7f8, Slot::new(5121, 1)),
            (0x1d7f9, Slot::new(5122, 1)), (0x1d7fa, Slot::new(5123, 1)), (0x1d7fb, Slot::new(5124, 1)), (0x1d7fc, Slot::new(5125, 1)),
            (0x1d7fd, Slot::new(5126, 1)), (0x1d7fe, Slot::new(5127, 1)), (0x1d7ff, Slot::new(5128, 1)), (0x1ee00, Slot::new(5129, 1)),
            (0x1ee01, Slot::new(5130, 1)), (0x1ee02, Slot::new(5131, 1)), (0x1ee03, Slot::new(5132, 1)), (0x1ee05, Slot::new(5133, 1)),
            (0x1ee06, Slot::new(5134, 1)), (0x1ee07, Slot::new(5135, 1)), (0x1ee08, Slot::new(5136, 1)), (0x1ee09, Slot::new(5137, 1)),
            (0x1ee0a, Slot::new(5138, 1)), (0x1ee0b, Slot::new(5139, 1)), (0x1ee0c, Slot::new(5140, 1)), (0x1ee0d, Slot::new(5141, 1)),
            (0x1ee0e, Slot::new(5142, 1)), (0x1ee0f, Slot::new(5143, 1)), (0x1ee10, Slot::new(5144, 1)), (0x1ee11, Slot::new(5145, 1)),
            (0x1ee12, Slot::new(5146, 1)), (0x1ee13, Slot::new(5147, 1)), (0x1ee14, Slot::new(5148, 1)), (0x1ee15, Slot::new(5149, 1)),
            (0x1ee16, Slot::new(5150, 1)), (0x1ee17, Slot::new(5151, 1)), (0x1ee18, Slot::new(5152, 1)), (0x1ee19, Slot::new(5153, 1)),
            (0x1ee1a, Slot::new(5154, 1)), (0x1ee1b, Slot::new(5155, 1)), (0x1ee1c, Slot::new(5156, 1)), (0x1ee1d, Slot::new(5157, 1)),
            (0x1ee1e, Slot::new(5158, 1)), (0x1ee1f, Slot::new(5159, 1)), (0x1ee21, Slot::new(5160, 1)), (0x1ee22, Slot::new(5161, 1)),
            (0x1ee24, Slot::new(5162, 1)), (0x1ee27, Slot::new(5163, 1)), (0x1ee29, Slot::new(5164, 1)), (0x1ee2a, Slot::new(5165, 1)),
            (0x1ee2b, Slot::new(5166, 1)), (0x1ee2c, Slot::new(5167, 1)), (0x1ee2d, Slot::new(5168, 1)), (0x1ee2e, Slot::new(5169, 1)),
            (0x1ee2f, Slot::new(5170, 1)), (0x1ee30, Slot::new(5171, 1)), (0x1ee31, Slot::new(5172, 1)), (0x1ee32, Slot::new(5173, 1)),
            (0x1ee34, Slot::new(5174, 1)), (0x1ee35, Slot::new(5175, 1)), (0x1ee36, Slot::new(5176, 1)), (0x1ee37, Slot::new(5177, 1)),
            (0x1ee39, Slot::new(5178, 1)), (0x1ee3b, Slot::new(5179, 1)), (0x1ee42, Slot::new(5180, 1)), (0x1ee47, Slot::new(5181, 1)),
            (0x1ee49, Slot::new(5182, 1)), (0x1ee4b, Slot::new(5183, 1)), (0x1ee4d, Slot::new(5184, 1)), (0x1ee4e, Slot::new(5185, 1)),
            (0x1ee4f, Slot::new(5186, 1)), (0x1ee51, Slot::new(5187, 1)), (0x1ee52, Slot::new(5188, 1)), (0x1ee54, Slot::new(5189, 1)),
            (0x1ee57, Slot::new(5190, 1)), (0x1ee59, Slot::new(5191, 1)), (0x1ee5b, Slot::new(5192, 1)), (0x1ee5d, Slot::new(5193, 1)),
            (0x1ee5f, Slot::new(5194, 1)), (0x1ee61, Slot::new(5195, 1)), (0x1ee62, Slot::new(5196, 1)), (0x1ee64, Slot::new(5197, 1)),
            (0x1ee67, Slot::new(5198, 1)), (0x1ee68, Slot::new(5199, 1)), (0x1ee69, Slot::new(5200, 1)), (0x1ee6a, Slot::new(5201, 1)),
            (0x1ee6c, Slot::new(5202, 1)), (0x1ee6d, Slot::new(5203, 1)), (0x1ee6e, Slot::new(5204, 1)), (0x1ee6f, Slot::new(5205, 1)),
            (0x1ee70, Slot::new(5206, 1)), (0x1ee71, Slot::new(5207, 1)), (0x1ee72, Slot::new(5208, 1)), (0x1ee74, Slot::new(5209, 1)),
            (0x1ee75, Slot::new(5210, 1)), (0x1ee76, Slot::new(5211, 1)), (0x1ee77, Slot::new(5212, 1)), (0x1ee79, Slot::new(5213, 1)),
            (0x1ee7a, Slot::new(5214, 1)), (0x1ee7b, Slot::new(5215, 1)), (0x1ee7c, Slot::new(5216, 1)), (0x1ee7e, Slot::new(5217, 1)),
            (0x1ee80, Slot::new(5218, 1)), (0x1ee81, Slot::new(5219, 1)), (0x1ee82, Slot::new(5220, 1)), (0x1ee83, Slot::new(5221, 1)),
            (0x1ee84, Slot::new(5222, 1)), (0x1ee85, Slot::new(5223, 1)), (0x1ee86, Slot::new(5224, 1)), (0x1ee87, Slot::new(5225, 1)),
            (0x1ee88, Slot::new(5226, 1)), (0x1ee89, Slot::new(5227, 1)), (0x1ee8b, Slot::new(5228, 1)), (0x1ee8c, Slot::new(5229, 1)),
            (0x1ee8d, Slot::new(5230, 1)), (0x1ee8e, Slot::new(5231, 1)), (0x1ee8f, Slot::new(5232, 1)), (0x1ee90, Slot::new(5233, 1)),
            (0x1ee91, Slot::new(5234, 1)), (0x1ee92, Slot::new(5235, 1)), (0x1ee93, Slot::new(5236, 1)), (0x1ee94, Slot::new(5237, 1)),
            (0x1ee95, Slot::new(5238, 1)), (0x1ee96, Slot::new(5239, 1)), (0x1ee97, Slot::new(5240, 1)), (0x1ee98, Slot::new(5241, 1)),
            (0x1ee99, Slot::new(5242, 1)), (0x1ee9a, Slot::new(5243, 1)), (0x1ee9b, Slot::new(5244, 1)), (0x1eea1, Slot::new(5245, 1)),
            (0x1eea2, Slot::new(5246, 1)), (0x1eea3, Slot::new(5247, 1)), (0x1eea5, Slot::new(5248, 1)), (0x1eea6, Slot::new(5249, 1)),
            (0x1eea7, Slot::new(5250, 1)), (0x1eea8, Slot::new(5251, 1)), (0x1eea9, Slot::new(5252, 1)), (0x1eeab, Slot::new(5253, 1)),
            (0x1eeac, Slot::new(5254, 1)), (0x1eead, Slot::new(5255, 1)), (0x1eeae, Slot::new(5256, 1)), (0x1eeaf, Slot::new(5257, 1)),
            (0x1eeb0, Slot::new(5258, 1)), (0x1eeb1, Slot::new(5259, 1)), (0x1eeb2, Slot::new(5260, 1)), (0x1eeb3, Slot::new(5261, 1)),
            (0x1eeb4, Slot::new(5262, 1)), (0x1eeb5, Slot::new(5263, 1)), (0x1eeb6, Slot::new(5264, 1)), (0x1eeb7, Slot::new(5265, 1)),
            (0x1eeb8, Slot::new(5266, 1)), (0x1eeb9, Slot::new(5267, 1)), (0x1eeba, Slot::new(5268, 1)), (0x1eebb, Slot::new(5269, 1)),
            (0x1f100, Slot::new(5270, 2)), (0x1f101, Slot::new(5272, 2)), (0x1f102, Slot::new(5274, 2)), (0x1f103, Slot::new(5276, 2)),
            (0x1f104, Slot::new(5278, 2)), (0x1f105, Slot::new(5280, 2)), (0x1f106, Slot::new(5282, 2)), (0x1f107, Slot::new(5284, 2)),
            (0x1f108, Slot::new(5286, 2)), (0x1f109, Slot::new(5288, 2)), (0x1f10a, Slot::new(5290, 2)), (0x1f110, Slot::new(5292, 3)),
            (0x1f111, Slot::new(5295, 3)), (0x1f112, Slot::new(5298, 3)), (0x1f113, Slot::new(5301, 3)), (0x1f114, Slot::new(5304, 3)),
            (0x1f115, Slot::new(5307, 3)), (0x1f116, Slot::new(5310, 3)), (0x1f117, Slot::new(5313, 3)), (0x1f118, Slot::new(5316, 3)),
            (0x1f119, Slot::new(5319, 3)), (0x1f11a, Slot::new(5322, 3)), (0x1f11b, Slot::new(5325, 3)), (0x1f11c, Slot::new(5328, 3)),
            (0x1f11d, Slot::new(5331, 3)), (0x1f11e, Slot::new(5334, 3)), (0x1f11f, Slot::new(5337, 3)), (0x1f120, Slot::new(5340, 3)),
            (0x1f121, Slot::new(5343, 3)), (0x1f122, Slot::new(5346, 3)), (0x1f123, Slot::new(5349, 3)), (0x1f124, Slot::new(5352, 3)),
            (0x1f125, Slot::new(5355, 3)), (0x1f126, Slot::new(5358, 3)), (0x1f127, Slot::new(5361, 3)), (0x1f128, Slot::new(5364, 3)),
            (0x1f129, Slot::new(5367, 3)), (0x1f12a, Slot::new(5370, 3)), (0x1f12b, Slot::new(5373, 1)), (0x1f12c, Slot::new(5374, 1)),
            (0x1f12d, Slot::new(5375, 2)), (0x1f12e, Slot::new(5377, 2)), (0x1f130, Slot::new(5379, 1)), (0x1f131, Slot::new(5380, 1)),
            (0x1f132, Slot::new(5381, 1)), (0x1f133, Slot::new(5382, 1)), (0x1f134, Slot::new(5383, 1)), (0x1f135, Slot::new(5384, 1)),
            (0x1f136, Slot::new(5385, 1)), (0x1f137, Slot::new(5386, 1)), (0x1f138, Slot::new(5387, 1)), (0x1f139, Slot::new(5388, 1)),
            (0x1f13a, Slot::new(5389, 1)), (0x1f13b, Slot::new(5390, 1)), (0x1f13c, Slot::new(5391, 1)), (0x1f13d, Slot::new(5392, 1)),
            (0x1f13e, Slot::new(5393, 1)), (0x1f13f, Slot::new(5394, 1)), (0x1f140, Slot::new(5395, 1)), (0x1f141, Slot::new(5396, 1)),
            (0x1f142, Slot::new(5397, 1)), (0x1f143, Slot::new(5398, 1)), (0x1f144, Slot::new(5399, 1)), (0x1f145, Slot::new(5400, 1)),
            (0x1f146, Slot::new(5401, 1)), (0x1f147, Slot::new(5402, 1)), (0x1f148, Slot::new(5403, 1)), (0x1f149, Slot::new(5404, 1)),
            (0x1f14a, Slot::new(5405, 2)), (0x1f14b, Slot::new(5407, 2)), (0x1f14c, Slot::new(5409, 2)), (0x1f14d, Slot::new(5411, 2)),
            (0x1f14e, Slot::new(5413, 3)), (0x1f14f, Slot::new(5416, 2)), (0x1f16a, Slot::new(5418, 2)), (0x1f16b, Slot::new(5420, 2)),
            (0x1f16c, Slot::new(5422, 2)), (0x1f190, Slot::new(5424, 2)), (0x1f200, Slot::new(5426, 2)), (0x1f201, Slot::new(5428, 2)),
            (0x1f202, Slot::new(5430, 1)), (0x1f210, Slot::new(5431, 1)), (0x1f211, Slot::new(5432, 1)), (0x1f212, Slot::new(5433, 1)),
            (0x1f213, Slot::new(5434, 1)), (0x1f214, Slot::new(5435, 1)), (0x1f215, Slot::new(5436, 1)), (0x1f216, Slot::new(5437, 1)),
            (0x1f217, Slot::new(5438, 1)), (0x1f218, Slot::new(5439, 1)), (0x1f219, Slot::new(5440, 1)), (0x1f21a, Slot::new(5441, 1)),
            (0x1f21b, Slot::new(5442, 1)), (0x1f21c, Slot::new(5443, 1)), (0x1f21d, Slot::new(5444, 1)), (0x1f21e, Slot::new(5445, 1)),
            (0x1f21f, Slot::new(5446, 1)), (0x1f220, Slot::new(5447, 1)), (0x1f221, Slot::new(5448, 1)), (0x1f222, Slot::new(5449, 1)),
            (0x1f223, Slot::new(5450, 1)), (0x1f224, Slot::new(5451, 1)), (0x1f225, Slot::new(5452, 1)), (0x1f226, Slot::new(5453, 1)),
            (0x1f227, Slot::new(5454, 1)), (0x1f228, Slot::new(5455, 1)), (0x1f229, Slot::new(5456, 1)), (0x1f22a, Slot::new(5457, 1)),
            (0x1f22b, Slot::new(5458, 1)), (0x1f22c, Slot::new(5459, 1)), (0x1f22d, Slot::new(5460, 1)), (0x1f22e, Slot::new(5461, 1)),
            (0x1f22f, Slot::new(5462, 1)), (0x1f230, Slot::new(5463, 1)), (0x1f231, Slot::new(5464, 1)), (0x1f232, Slot::new(5465, 1)),
            (0x1f233, Slot::new(5466, 1)), (0x1f234, Slot::new(5467, 1)), (0x1f235, Slot::new(5468, 1)), (0x1f236, Slot::new(5469, 1)),
            (0x1f237, Slot::new(5470, 1)), (0x1f238, Slot::new(5471, 1)), (0x1f239, Slot::new(5472, 1)), (0x1f23a, Slot::new(5473, 1)),
            (0x1f23b, Slot::new(5474, 1)), (0x1f240, Slot::new(5475, 3)), (0x1f241, Slot::new(5478, 3)), (0x1f242, Slot::new(5481, 3)),
            (0x1f243, Slot::new(5484, 3)), (0x1f244, Slot::new(5487, 3)), (0x1f245, Slot::new(5490, 3)), (0x1f246, Slot::new(5493, 3)),
            (0x1f247, Slot::new(5496, 3)), (0x1f248, Slot::new(5499, 3)), (0x1f250, Slot::new(5502, 1)), (0x1f251, Slot::new(5503, 1)),
            (0x1fbf0, Slot::new(5504, 1)), (0x1fbf1, Slot::new(5505, 1)), (0x1fbf2, Slot::new(5506, 1)), (0x1fbf3, Slot::new(5507, 1)),
            (0x1fbf4, Slot::new(5508, 1)), (0x1fbf5, Slot::new(5509, 1)), (0x1fbf6, Slot::new(5510, 1)), (0x1fbf7, Slot::new(5511, 1)),
            (0x1fbf8, Slot::new(5512, 1)), (0x1fbf9, Slot::new(5513, 1)),
        ],
        &[
            0x20, 0x20, 0x308, 0x61, 0x20, 0x304, 0x32, 0x33, 0x20, 0x301,
            0x3bc, 0x20, 0x327, 0x31, 0x6f, 0x31, 0x2044, 0x34, 0x31, 0x2044,
            0x32, 0x33, 0x2044, 0x34, 0x49, 0x4a, 0x69, 0x6a, 0x4c, 0xb7,
            0x6c, 0xb7, 0x2bc, 0x6e, 0x73, 0x44, 0x17d, 0x44, 0x17e, 0x64,
            0x17e, 0x4c, 0x4a, 0x4c, 0x6a, 0x6c, 0x6a, 0x4e, 0x4a, 0x4e,
            0x6a, 0x6e, 0x6a, 0x44, 0x5a, 0x44, 0x7a, 0x64, 0x7a, 0x68,
            0x266, 0x6a, 0x72, 0x279, 0x27b, 0x281, 0x77, 0x79, 0x20, 0x306,
            0x20, 0x307, 0x20, 0x30a, 0x20, 0x328, 0x20, 0x303, 0x20, 0x30b,
            0x263, 0x6c, 0x73, 0x78, 0x295, 0x20, 0x345, 0x20, 0x301, 0x3b2,
            0x3b8, 0x3a5, 0x3c6, 0x3c0, 0x3ba, 0x3c1, 0x3c2, 0x398, 0x3b5, 0x3a3,
            0x565, 0x582, 0x627, 0x674, 0x648, 0x674, 0x6c7, 0x674, 0x64a, 0x674,
            0xe4d, 0xe32, 0xecd, 0xeb2, 0xeab, 0xe99, 0xeab, 0xea1, 0xf0b, 0xfb2,
            0xf81, 0xfb3, 0xf81, 0x10dc, 0x41, 0xc6, 0x42, 0x44, 0x45, 0x18e,
            0x47, 0x48, 0x49, 0x4a, 0x4b, 0x4c, 0x4d, 0x4e, 0x4f, 0x222,
            0x50, 0x52, 0x54, 0x55, 0x57, 0x61, 0x250, 0x251, 0x1d02, 0x62,
            0x64, 0x65, 0x259, 0x25b, 0x25c, 0x67, 0x6b, 0x6d, 0x14b, 0x6f,
            0x254, 0x1d16, 0x1d17, 0x70, 0x74, 0x75, 0x1d1d, 0x26f, 0x76, 0x1d25,
            0x3b2, 0x3b3, 0x3b4, 0x3c6, 0x3c7, 0x69, 0x72, 0x75, 0x76, 0x3b2,
            0x3b3, 0x3c1, 0x3c6, 0x3c7, 0x43d, 0x252, 0x63, 0x255, 0xf0, 0x25c,
            0x66, 0x25f, 0x261, 0x265, 0x268, 0x269, 0x26a, 0x1d7b, 0x29d, 0x26d,
            0x1d85, 0x29f, 0x271, 0x270, 0x272, 0x273, 0x274, 0x275, 0x278, 0x282,
            0x283, 0x1ab, 0x289, 0x28a, 0x1d1c, 0x28b, 0x28c, 0x7a, 0x290, 0x291,
            0x292, 0x3b8, 0x61, 0x2be, 0x20, 0x313, 0x20, 0x313, 0x20, 0x342,
            0x20, 0x314, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
            0x20, 0x2010, 0x20, 0x333, 0x2e, 0x2e, 0x2e, 0x2e, 0x2e, 0x2e,
            0x20, 0x2032, 0x2032, 0x2032, 0x2032, 0x2032, 0x2035, 0x2035, 0x2035, 0x2035,
            0x2035, 0x21, 0x21, 0x20, 0x305, 0x3f, 0x3f, 0x3f, 0x21, 0x21,
            0x3f, 0x2032, 0x2032, 0x2032, 0x2032, 0x20, 0x30, 0x69, 0x34, 0x35,
            0x36, 0x37, 0x38, 0x39, 0x2b, 0x2212, 0x3d, 0x28, 0x29, 0x6e,
            0x30, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39,
            0x2b, 0x2212, 0x3d, 0x28, 0x29, 0x61, 0x65, 0x6f, 0x78, 0x259,
            0x68, 0x6b, 0x6c, 0x6d, 0x6e, 0x70, 0x73, 0x74, 0x52, 0x73,
            0x61, 0x2f, 0x63, 0x61, 0x2f, 0x73, 0x43, 0xb0, 0x43, 0x63,
            0x2f, 0x6f, 0x63, 0x2f, 0x75, 0x190, 0xb0, 0x46, 0x67, 0x48,
            0x48, 0x48, 0x68, 0x127, 0x49, 0x49, 0x4c, 0x6c, 0x4e, 0x4e,
            0x6f, 0x50, 0x51, 0x52, 0x52, 0x52, 0x53, 0x4d, 0x54, 0x45,
            0x4c, 0x54, 0x4d, 0x5a, 0x5a, 0x42, 0x43, 0x65, 0x45, 0x46,
            0x4d, 0x6f, 0x5d0, 0x5d1, 0x5d2, 0x5d3, 0x69, 0x46, 0x41, 0x58,
            0x3c0, 0x3b3, 0x393, 0x3a0, 0x2211, 0x44, 0x64, 0x65, 0x69, 0x6a,
            0x31, 0x2044, 0x37, 0x31, 0x2044, 0x39, 0x31, 0x2044, 0x31, 0x30,
            0x31, 0x2044, 0x33, 0x32, 0x2044, 0x33, 0x31, 0x2044, 0x35, 0x32,
            0x2044, 0x35, 0x33, 0x2044, 0x35, 0x34, 0x2044, 0x35, 0x31, 0x2044,
            0x36, 0x35, 0x2044, 0x36, 0x31, 0x2044, 0x38, 0x33, 0x2044, 0x38,
            0x35, 0x2044, 0x38, 0x37, 0x2044, 0x38, 0x31, 0x2044, 0x49, 0x49,
            0x49, 0x49, 0x49, 0x49, 0x49, 0x56, 0x56, 0x56, 0x49, 0x56,
            0x49, 0x49, 0x56, 0x49, 0x49, 0x49, 0x49, 0x58, 0x58, 0x58,
            0x49, 0x58, 0x49, 0x49, 0x4c, 0x43, 0x44, 0x4d, 0x69, 0x69,
            0x69, 0x69, 0x69, 0x69, 0x69, 0x76, 0x76, 0x76, 0x69, 0x76,
            0x69, 0x69, 0x76, 0x69, 0x69, 0x69, 0x69, 0x78, 0x78, 0x78,
            0x69, 0x78, 0x69, 0x69, 0x6c, 0x63, 0x64, 0x6d, 0x30, 0x2044,
            0x33, 0x222b, 0x222b, 0x222b, 0x222b, 0x222b, 0x222e, 0x222e, 0x222e, 0x222e,
            0x222e, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39,
            0x31, 0x30, 0x31, 0x31, 0x31, 0x32, 0x31, 0x33, 0x31, 0x34,
            0x31, 0x35, 0x31, 0x36, 0x31, 0x37, 0x31, 0x38, 0x31, 0x39,
            0x32, 0x30, 0x28, 0x31, 0x29, 0x28, 0x32, 0x29, 0x28, 0x33,
            0x29, 0x28, 0x34, 0x29, 0x28, 0x35, 0x29, 0x28, 0x36, 0x29,
            0x28, 0x37, 0x29, 0x28, 0x38, 0x29, 0x28, 0x39, 0x29, 0x28,
            0x31, 0x30, 0x29, 0x28, 0x31, 0x31, 0x29, 0x28, 0x31, 0x32,
            0x29, 0x28, 0x31, 0x33, 0x29, 0x28, 0x31, 0x34, 0x29, 0x28,
            0x31, 0x35, 0x29, 0x28, 0x31, 0x36, 0x29, 0x28, 0x31, 0x37,
            0x29, 0x28, 0x31, 0x38, 0x29, 0x28, 0x31, 0x39, 0x29, 0x28,
            0x32, 0x30, 0x29, 0x31, 0x2e, 0x32, 0x2e, 0x33, 0x2e, 0x34,
            0x2e, 0x35, 0x2e, 0x36, 0x2e, 0x37, 0x2e, 0x38, 0x2e, 0x39,
            0x2e, 0x31, 0x30, 0x2e, 0x31, 0x31, 0x2e, 0x31, 0x32, 0x2e,
            0x31, 0x33, 0x2e, 0x31, 0x34, 0x2e, 0x31, 0x35, 0x2e, 0x31,
            0x36, 0x2e, 0x31, 0x37, 0x2e, 0x31, 0x38, 0x2e, 0x31, 0x39,
            0x2e, 0x32, 0x30, 0x2e, 0x28, 0x61, 0x29, 0x28, 0x62, 0x29,
            0x28, 0x63, 0x29, 0x28, 0x64, 0x29, 0x28, 0x65, 0x29, 0x28,
            0x66, 0x29, 0x28, 0x67, 0x29, 0x28, 0x68, 0x29, 0x28, 0x69,
            0x29, 0x28, 0x6a, 0x29, 0x28, 0x6b, 0x29, 0x28, 0x6c, 0x29,
            0x28, 0x6d, 0x29, 0x28, 0x6e, 0x29, 0x28, 0x6f, 0x29, 0x28,
            0x70, 0x29, 0x28, 0x71, 0x29, 0x28, 0x72, 0x29, 0x28, 0x73,
            0x29, 0x28, 0x74, 0x29, 0x28, 0x75, 0x29, 0x28, 0x76, 0x29,
            0x28, 0x77, 0x29, 0x28, 0x78, 0x29, 0x28, 0x79, 0x29, 0x28,
            0x7a, 0x29, 0x41, 0x42, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48,
            0x49, 0x4a, 0x4b, 0x4c, 0x4d, 0x4e, 0x4f, 0x50, 0x51, 0x52,
            0x53, 0x54, 0x55, 0x56, 0x57, 0x58, 0x59, 0x5a, 0x61, 0x62,
            0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69, 0x6a, 0x6b, 0x6c,
            0x6d, 0x6e, 0x6f, 0x70, 0x71, 0x72, 0x73, 0x74, 0x75, 0x76,
            0x77, 0x78, 0x79, 0x7a, 0x30, 0x222b, 0x222b, 0x222b, 0x222b, 0x3a,
            0x3a, 0x3d, 0x3d, 0x3d, 0x3d, 0x3d, 0x3d, 0x6a, 0x56, 0x2d61,
            0x6bcd, 0x9f9f, 0x4e00, 0x4e28, 0x4e36, 0x4e3f, 0x4e59, 0x4e85, 0x4e8c, 0x4ea0,
            0x4eba, 0x513f, 0x5165, 0x516b, 0x5182, 0x5196, 0x51ab, 0x51e0, 0x51f5, 0x5200,
            0x529b, 0x52f9, 0x5315, 0x531a, 0x5338, 0x5341, 0x535c, 0x5369, 0x5382, 0x53b6,
            0x53c8, 0x53e3, 0x56d7, 0x571f, 0x58eb, 0x5902, 0x590a, 0x5915, 0x5927, 0x5973,
            0x5b50, 0x5b80, 0x5bf8, 0x5c0f, 0x5c22, 0x5c38, 0x5c6e, 0x5c71, 0x5ddb, 0x5de5,
            0x5df1, 0x5dfe, 0x5e72, 0x5e7a, 0x5e7f, 0x5ef4, 0x5efe, 0x5f0b, 0x5f13, 0x5f50,
            0x5f61, 0x5f73, 0x5fc3, 0x6208, 0x6236, 0x624b, 0x652f, 0x6534, 0x6587, 0x6597,
            0x65a4, 0x65b9, 0x65e0, 0x65e5, 0x66f0, 0x6708, 0x6728, 0x6b20, 0x6b62, 0x6b79,
            0x6bb3, 0x6bcb, 0x6bd4, 0x6bdb, 0x6c0f, 0x6c14, 0x6c34, 0x706b, 0x722a, 0x7236,
            0x723b, 0x723f, 0x7247, 0x7259, 0x725b, 0x72ac, 0x7384, 0x7389, 0x74dc, 0x74e6,
            0x7518, 0x751f, 0x7528, 0x7530, 0x758b, 0x7592, 0x7676, 0x767d, 0x76ae, 0x76bf,
            0x76ee, 0x77db, 0x77e2, 0x77f3, 0x793a, 0x79b8, 0x79be, 0x7a74, 0x7acb, 0x7af9,
            0x7c73, 0x7cf8, 0x7f36, 0x7f51, 0x7f8a, 0x7fbd, 0x8001, 0x800c, 0x8012, 0x8033,
            0x807f, 0x8089, 0x81e3, 0x81ea, 0x81f3, 0x81fc, 0x820c, 0x821b, 0x821f, 0x826e,
            0x8272, 0x8278, 0x864d, 0x866b, 0x8840, 0x884c, 0x8863, 0x897e, 0x898b, 0x89d2,
            0x8a00, 0x8c37, 0x8c46, 0x8c55, 0x8c78, 0x8c9d, 0x8d64, 0x8d70, 0x8db3, 0x8eab,
            0x8eca, 0x8f9b, 0x8fb0, 0x8fb5, 0x9091, 0x9149, 0x91c6, 0x91cc, 0x91d1, 0x9577,
            0x9580, 0x961c, 0x96b6, 0x96b9, 0x96e8, 0x9751, 0x975e, 0x9762, 0x9769, 0x97cb,
            0x97ed, 0x97f3, 0x9801, 0x98a8, 0x98db, 0x98df, 0x9996, 0x9999, 0x99ac, 0x9aa8,
            0x9ad8, 0x9adf, 0x9b25, 0x9b2f, 0x9b32, 0x9b3c, 0x9b5a, 0x9ce5, 0x9e75, 0x9e7f,
            0x9ea5, 0x9ebb, 0x9ec3, 0x9ecd, 0x9ed1, 0x9ef9, 0x9efd, 0x9f0e, 0x9f13, 0x9f20,
            0x9f3b, 0x9f4a, 0x9f52, 0x9f8d, 0x9f9c, 0x9fa0, 0x20, 0x3012, 0x5341, 0x5344,
            0x5345, 0x20, 0x3099, 0x20, 0x309a, 0x3088, 0x308a, 0x30b3, 0x30c8, 0x1100,
            0x1101, 0x11aa, 0x1102, 0x11ac, 0x11ad, 0x1103, 0x1104, 0x1105, 0x11b0, 0x11b1,
            0x11b2, 0x11b3, 0x11b4, 0x11b5, 0x111a, 0x1106, 0x1107, 0x1108, 0x1121, 0x1109,
            0x110a, 0x110b, 0x110c, 0x110d, 0x110e, 0x110f, 0x1110, 0x1111, 0x1112, 0x1161,
            0x1162, 0x1163, 0x1164, 0x1165, 0x1166, 0x1167, 0x1168, 0x1169, 0x116a, 0x116b,
            0x116c, 0x116d, 0x116e, 0x116f, 0x1170, 0x1171, 0x1172, 0x1173, 0x1174, 0x1175,
            0x1160, 0x1114, 0x1115, 0x11c7, 0x11c8, 0x11cc, 0x11ce, 0x11d3, 0x11d7, 0x11d9,
            0x111c, 0x11dd, 0x11df, 0x111d, 0x111e, 0x1120, 0x1122, 0x1123, 0x1127, 0x1129,
            0x112b, 0x112c, 0x112d, 0x112e, 0x112f, 0x1132, 0x1136, 0x1140, 0x1147, 0x114c,
            0x11f1, 0x11f2, 0x1157, 0x1158, 0x1159, 0x1184, 0x1185, 0x1188, 0x1191, 0x1192,
            0x1194, 0x119e, 0x11a1, 0x4e00, 0x4e8c, 0x4e09, 0x56db, 0x4e0a, 0x4e2d, 0x4e0b,
            0x7532, 0x4e59, 0x4e19, 0x4e01, 0x5929, 0x5730, 0x4eba, 0x28, 0x1100, 0x29,
            0x28, 0x1102, 0x29, 0x28, 0x1103, 0x29, 0x28, 0x1105, 0x29, 0x28,
            0x1106, 0x29, 0x28, 0x1107, 0x29, 0x28, 0x1109, 0x29, 0x28, 0x110b,
            0x29, 0x28, 0x110c, 0x29, 0x28, 0x110e, 0x29, 0x28, 0x110f, 0x29,
            0x28, 0x1110, 0x29, 0x28, 0x1111, 0x29, 0x28, 0x1112, 0x29, 0x28,
            0x1100, 0x1161, 0x29, 0x28, 0x1102, 0x1161, 0x29, 0x28, 0x1103, 0x1161,
            0x29, 0x28, 0x1105, 0x1161, 0x29, 0x28, 0x1106, 0x1161, 0x29, 0x28,
            0x1107, 0x1161, 0x29, 0x28, 0x1109, 0x1161, 0x29, 0x28, 0x110b, 0x1161,
            0x29, 0x28, 0x110c, 0x1161, 0x29, 0x28, 0x110e, 0x1161, 0x29, 0x28,
            0x110f, 0x1161, 0x29, 0x28, 0x1110, 0x1161, 0x29, 0x28, 0x1111, 0x1161,
            0x29, 0x28, 0x1112, 0x1161, 0x29, 0x28, 0x110c, 0x116e, 0x29, 0x28,
            0x110b, 0x1169, 0x110c, 0x1165, 0x11ab, 0x29, 0x28, 0x110b, 0x1169, 0x1112,
            0x116e, 0x29, 0x28, 0x4e00, 0x29, 0x28, 0x4e8c, 0x29, 0x28, 0x4e09,
            0x29, 0x28, 0x56db, 0x29, 0x28, 0x4e94, 0x29, 0x28, 0x516d, 0x29,
            0x28, 0x4e03, 0x29, 0x28, 0x516b, 0x29, 0x28, 0x4e5d, 0x29, 0x28,
            0x5341, 0x29, 0x28, 0x6708, 0x29, 0x28, 0x706b, 0x29, 0x28, 0x6c34,
            0x29, 0x28, 0x6728, 0x29, 0x28, 0x91d1, 0x29, 0x28, 0x571f, 0x29,
            0x28, 0x65e5, 0x29, 0x28, 0x682a, 0x29, 0x28, 0x6709, 0x29, 0x28,
            0x793e, 0x29, 0x28, 0x540d, 0x29, 0x28, 0x7279, 0x29, 0x28, 0x8ca1,
            0x29, 0x28, 0x795d, 0x29, 0x28, 0x52b4, 0x29, 0x28, 0x4ee3, 0x29,
            0x28, 0x547c, 0x29, 0x28, 0x5b66, 0x29, 0x28, 0x76e3, 0x29, 0x28,
            0x4f01, 0x29, 0x28, 0x8cc7, 0x29, 0x28, 0x5354, 0x29, 0x28, 0x796d,
            0x29, 0x28, 0x4f11, 0x29, 0x28, 0x81ea, 0x29, 0x28, 0x81f3, 0x29,
            0x554f, 0x5e7c, 0x6587, 0x7b8f, 0x50, 0x54, 0x45, 0x32, 0x31, 0x32,
            0x32, 0x32, 0x33, 0x32, 0x34, 0x32, 0x35, 0x32, 0x36, 0x32,
            0x37, 0x32, 0x38, 0x32, 0x39, 0x33, 0x30, 0x33, 0x31, 0x33,
            0x32, 0x33, 0x33, 0x33, 0x34, 0x33, 0x35, 0x1100, 0x1102, 0x1103,
            0x1105, 0x1106, 0x1107, 0x1109, 0x110b, 0x110c, 0x110e, 0x110f, 0x1110, 0x1111,
            0x1112, 0x1100, 0x1161, 0x1102, 0x1161, 0x1103, 0x1161, 0x1105, 0x1161, 0x1106,
            0x1161, 0x1107, 0x1161, 0x1109, 0x1161, 0x110b, 0x1161, 0x110c, 0x1161, 0x110e,
            0x1161, 0x110f, 0x1161, 0x1110, 0x1161, 0x1111, 0x1161, 0x1112, 0x1161, 0x110e,
            0x1161, 0x11b7, 0x1100, 0x1169, 0x110c, 0x116e, 0x110b, 0x1174, 0x110b, 0x116e,
            0x4e00, 0x4e8c, 0x4e09, 0x56db, 0x4e94, 0x516d, 0x4e03, 0x516b, 0x4e5d, 0x5341,
            0x6708, 0x706b, 0x6c34, 0x6728, 0x91d1, 0x571f, 0x65e5, 0x682a, 0x6709, 0x793e,
            0x540d, 0x7279, 0x8ca1, 0x795d, 0x52b4, 0x79d8, 0x7537, 0x5973, 0x9069, 0x512a,
            0x5370, 0x6ce8, 0x9805, 0x4f11, 0x5199, 0x6b63, 0x4e0a, 0x4e2d, 0x4e0b, 0x5de6,
            0x53f3, 0x533b, 0x5b97, 0x5b66, 0x76e3, 0x4f01, 0x8cc7, 0x5354, 0x591c, 0x33,
            0x36, 0x33, 0x37, 0x33, 0x38, 0x33, 0x39, 0x34, 0x30, 0x34,
            0x31, 0x34, 0x32, 0x34, 0x33, 0x34, 0x34, 0x34, 0x35, 0x34,
            0x36, 0x34, 0x37, 0x34, 0x38, 0x34, 0x39, 0x35, 0x30, 0x31,
            0x6708, 0x32, 0x6708, 0x33, 0x6708, 0x34, 0x6708, 0x35, 0x6708, 0x36,
            0x6708, 0x37, 0x6708, 0x38, 0x6708, 0x39, 0x6708, 0x31, 0x30, 0x6708,
            0x31, 0x31, 0x6708, 0x31, 0x32, 0x6708, 0x48, 0x67, 0x65, 0x72,
            0x67, 0x65, 0x56, 0x4c, 0x54, 0x44, 0x30a2, 0x30a4, 0x30a6, 0x30a8,
            0x30aa, 0x30ab, 0x30ad, 0x30af, 0x30b1, 0x30b3, 0x30b5, 0x30b7, 0x30b9, 0x30bb,
            0x30bd, 0x30bf, 0x30c1, 0x30c4, 0x30c6, 0x30c8, 0x30ca, 0x30cb, 0x30cc, 0x30cd,
            0x30ce, 0x30cf, 0x30d2, 0x30d5, 0x30d8, 0x30db, 0x30de, 0x30df, 0x30e0, 0x30e1,
            0x30e2, 0x30e4, 0x30e6, 0x30e8, 0x30e9, 0x30ea, 0x30eb, 0x30ec, 0x30ed, 0x30ef,
            0x30f0, 0x30f1, 0x30f2, 0x4ee4, 0x548c, 0x30a2, 0x30d1, 0x30fc, 0x30c8, 0x30a2,
            0x30eb, 0x30d5, 0x30a1, 0x30a2, 0x30f3, 0x30da, 0x30a2, 0x30a2, 0x30fc, 0x30eb,
            0x30a4, 0x30cb, 0x30f3, 0x30b0, 0x30a4, 0x30f3, 0x30c1, 0x30a6, 0x30a9, 0x30f3,
            0x30a8, 0x30b9, 0x30af, 0x30fc, 0x30c9, 0x30a8, 0x30fc, 0x30ab, 0x30fc, 0x30aa,
            0x30f3, 0x30b9, 0x30aa, 0x30fc, 0x30e0, 0x30ab, 0x30a4, 0x30ea, 0x30ab, 0x30e9,
            0x30c3, 0x30c8, 0x30ab, 0x30ed, 0x30ea, 0x30fc, 0x30ac, 0x30ed, 0x30f3, 0x30ac,
            0x30f3, 0x30de, 0x30ae, 0x30ac, 0x30ae, 0x30cb, 0x30fc, 0x30ad, 0x30e5, 0x30ea,
            0x30fc, 0x30ae, 0x30eb, 0x30c0, 0x30fc, 0x30ad, 0x30ed, 0x30ad, 0x30ed, 0x30b0,
            0x30e9, 0x30e0, 0x30ad, 0x30ed, 0x30e1, 0x30fc, 0x30c8, 0x30eb, 0x30ad, 0x30ed,
            0x30ef, 0x30c3, 0x30c8, 0x30b0, 0x30e9, 0x30e0, 0x30b0, 0x30e9, 0x30e0, 0x30c8,
            0x30f3, 0x30af, 0x30eb, 0x30bc, 0x30a4, 0x30ed, 0x30af, 0x30ed, 0x30fc, 0x30cd,
            0x30b1, 0x30fc, 0x30b9, 0x30b3, 0x30eb, 0x30ca, 0x30b3, 0x30fc, 0x30dd, 0x30b5,
            0x30a4, 0x30af, 0x30eb, 0x30b5, 0x30f3, 0x30c1, 0x30fc, 0x30e0, 0x30b7, 0x30ea,
            0x30f3, 0x30b0, 0x30bb, 0x30f3, 0x30c1, 0x30bb, 0x30f3, 0x30c8, 0x30c0, 0x30fc,
            0x30b9, 0x30c7, 0x30b7, 0x30c9, 0x30eb, 0x30c8, 0x30f3, 0x30ca, 0x30ce, 0x30ce,
            0x30c3, 0x30c8, 0x30cf, 0x30a4, 0x30c4, 0x30d1, 0x30fc, 0x30bb, 0x30f3, 0x30c8,
            0x30d1, 0x30fc, 0x30c4, 0x30d0, 0x30fc, 0x30ec, 0x30eb, 0x30d4, 0x30a2, 0x30b9,
            0x30c8, 0x30eb, 0x30d4, 0x30af, 0x30eb, 0x30d4, 0x30b3, 0x30d3, 0x30eb, 0x30d5,
            0x30a1, 0x30e9, 0x30c3, 0x30c9, 0x30d5, 0x30a3, 0x30fc, 0x30c8, 0x30d6, 0x30c3,
            0x30b7, 0x30a7, 0x30eb, 0x30d5, 0x30e9, 0x30f3, 0x30d8, 0x30af, 0x30bf, 0x30fc,
            0x30eb, 0x30da, 0x30bd, 0x30da, 0x30cb, 0x30d2, 0x30d8, 0x30eb, 0x30c4, 0x30da,
            0x30f3, 0x30b9, 0x30da, 0x30fc, 0x30b8, 0x30d9, 0x30fc, 0x30bf, 0x30dd, 0x30a4,
            0x30f3, 0x30c8, 0x30dc, 0x30eb, 0x30c8, 0x30db, 0x30f3, 0x30dd, 0x30f3, 0x30c9,
            0x30db, 0x30fc, 0x30eb, 0x30db, 0x30fc, 0x30f3, 0x30de, 0x30a4, 0x30af, 0x30ed,
            0x30de, 0x30a4, 0x30eb, 0x30de, 0x30c3, 0x30cf, 0x30de, 0x30eb, 0x30af, 0x30de,
            0x30f3, 0x30b7, 0x30e7, 0x30f3, 0x30df, 0x30af, 0x30ed, 0x30f3, 0x30df, 0x30ea,
            0x30df, 0x30ea, 0x30d0, 0x30fc, 0x30eb, 0x30e1, 0x30ac, 0x30e1, 0x30ac, 0x30c8,
            0x30f3, 0x30e1, 0x30fc, 0x30c8, 0x30eb, 0x30e4, 0x30fc, 0x30c9, 0x30e4, 0x30fc,
            0x30eb, 0x30e6, 0x30a2, 0x30f3, 0x30ea, 0x30c3, 0x30c8, 0x30eb, 0x30ea, 0x30e9,
            0x30eb, 0x30d4, 0x30fc, 0x30eb, 0x30fc, 0x30d6, 0x30eb, 0x30ec, 0x30e0, 0x30ec,
            0x30f3, 0x30c8, 0x30b2, 0x30f3, 0x30ef, 0x30c3, 0x30c8, 0x30, 0x70b9, 0x31,
            0x70b9, 0x32, 0x70b9, 0x33, 0x70b9, 0x34, 0x70b9, 0x35, 0x70b9, 0x36,
            0x70b9, 0x37, 0x70b9, 0x38, 0x70b9, 0x39, 0x70b9, 0x31, 0x30, 0x70b9,
            0x31, 0x31, 0x70b9, 0x31, 0x32, 0x70b9, 0x31, 0x33, 0x70b9, 0x31,
            0x34, 0x70b9, 0x31, 0x35, 0x70b9, 0x31, 0x36, 0x70b9, 0x31, 0x37,
            0x70b9, 0x31, 0x38, 0x70b9, 0x31, 0x39, 0x70b9, 0x32, 0x30, 0x70b9,
            0x32, 0x31, 0x70b9, 0x32, 0x32, 0x70b9, 0x32, 0x33, 0x70b9, 0x32,
            0x34, 0x70b9, 0x68, 0x50, 0x61, 0x64, 0x61, 0x41, 0x55, 0x62,
            0x61, 0x72, 0x6f, 0x56, 0x70, 0x63, 0x64, 0x6d, 0x64, 0x6d,
            0xb2, 0x64, 0x6d, 0xb3, 0x49, 0x55, 0x5e73, 0x6210, 0x662d, 0x548c,
            0x5927, 0x6b63, 0x660e, 0x6cbb, 0x682a, 0x5f0f, 0x4f1a, 0x793e, 0x70, 0x41,
            0x6e, 0x41, 0x3bc, 0x41, 0x6d, 0x41, 0x6b, 0x41, 0x4b, 0x42,
            0x4d, 0x42, 0x47, 0x42, 0x63, 0x61, 0x6c, 0x6b, 0x63, 0x61,
            0x6c, 0x70, 0x46, 0x6e, 0x46, 0x3bc, 0x46, 0x3bc, 0x67, 0x6d,
            0x67, 0x6b, 0x67, 0x48, 0x7a, 0x6b, 0x48, 0x7a, 0x4d, 0x48,
            0x7a, 0x47, 0x48, 0x7a, 0x54, 0x48, 0x7a, 0x3bc, 0x2113, 0x6d,
            0x2113, 0x64, 0x2113, 0x6b, 0x2113, 0x66, 0x6d, 0x6e, 0x6d, 0x3bc,
            0x6d, 0x6d, 0x6d, 0x63, 0x6d, 0x6b, 0x6d, 0x6d, 0x6d, 0xb2,
            0x63, 0x6d, 0xb2, 0x6d, 0xb2, 0x6b, 0x6d, 0xb2, 0x6d, 0x6d,
            0xb3, 0x63, 0x6d, 0xb3, 0x6d, 0xb3, 0x6b, 0x6d, 0xb3, 0x6d,
            0x2215, 0x73, 0x6d, 0x2215, 0x73, 0xb2, 0x50, 0x61, 0x6b, 0x50,
            0x61, 0x4d, 0x50, 0x61, 0x47, 0x50, 0x61, 0x72, 0x61, 0x64,
            0x72, 0x61, 0x64, 0x2215, 0x73, 0x72, 0x61, 0x64, 0x2215, 0x73,
            0xb2, 0x70, 0x73, 0x6e, 0x73, 0x3bc, 0x73, 0x6d, 0x73, 0x70,
            0x56, 0x6e, 0x56, 0x3bc, 0x56, 0x6d, 0x56, 0x6b, 0x56, 0x4d,
            0x56, 0x70, 0x57, 0x6e, 0x57, 0x3bc, 0x57, 0x6d, 0x57, 0x6b,
            0x57, 0x4d, 0x57, 0x6b, 0x3a9, 0x4d, 0x3a9, 0x61, 0x2e, 0x6d,
            0x2e, 0x42, 0x71, 0x63, 0x63, 0x63, 0x64, 0x43, 0x2215, 0x6b,
            0x67, 0x43, 0x6f, 0x2e, 0x64, 0x42, 0x47, 0x79, 0x68, 0x61,
            0x48, 0x50, 0x69, 0x6e, 0x4b, 0x4b, 0x4b, 0x4d, 0x6b, 0x74,
            0x6c, 0x6d, 0x6c, 0x6e, 0x6c, 0x6f, 0x67, 0x6c, 0x78, 0x6d,
            0x62, 0x6d, 0x69, 0x6c, 0x6d, 0x6f, 0x6c, 0x50, 0x48, 0x70,
            0x2e, 0x6d, 0x2e, 0x50, 0x50, 0x4d, 0x50, 0x52, 0x73, 0x72,
            0x53, 0x76, 0x57, 0x62, 0x56, 0x2215, 0x6d, 0x41, 0x2215, 0x6d,
            0x31, 0x65e5, 0x32, 0x65e5, 0x33, 0x65e5, 0x34, 0x65e5, 0x35, 0x65e5,
            0x36, 0x65e5, 0x37, 0x65e5, 0x38, 0x65e5, 0x39, 0x65e5, 0x31, 0x30,
            0x65e5, 0x31, 0x31, 0x65e5, 0x31, 0x32, 0x65e5, 0x31, 0x33, 0x65e5,
            0x31, 0x34, 0x65e5, 0x31, 0x35, 0x65e5, 0x31, 0x36, 0x65e5, 0x31,
            0x37, 0x65e5, 0x31, 0x38, 0x65e5, 0x31, 0x39, 0x65e5, 0x32, 0x30,
            0x65e5, 0x32, 0x31, 0x65e5, 0x32, 0x32, 0x65e5, 0x32, 0x33, 0x65e5,
            0x32, 0x34, 0x65e5, 0x32, 0x35, 0x65e5, 0x32, 0x36, 0x65e5, 0x32,
            0x37, 0x65e5, 0x32, 0x38, 0x65e5, 0x32, 0x39, 0x65e5, 0x33, 0x30,
            0x65e5, 0x33, 0x31, 0x65e5, 0x67, 0x61, 0x6c, 0x44a, 0x44c, 0xa76f,
            0x43, 0x46, 0x51, 0x126, 0x153, 0xa727, 0xab37, 0x26b, 0xab52, 0x28d,
            0x66, 0x66, 0x66, 0x69, 0x66, 0x6c, 0x66, 0x66, 0x69, 0x66,
            0x66, 0x6c, 0x17f, 0x74, 0x73, 0x74, 0x574, 0x576, 0x574, 0x565,
            0x574, 0x56b, 0x57e, 0x576, 0x574, 0x56d, 0x5e2, 0x5d0, 0x5d3, 0x5d4,
            0x5db, 0x5dc, 0x5dd, 0x5e8, 0x5ea, 0x2b, 0x5d0, 0x5dc, 0x671, 0x671,
            0x67b, 0x67b, 0x67b, 0x67b, 0x67e, 0x67e, 0x67e, 0x67e, 0x680, 0x680,
            0x680, 0x680, 0x67a, 0x67a, 0x67a, 0x67a, 0x67f, 0x67f, 0x67f, 0x67f,
            0x679, 0x679, 0x679, 0x679, 0x6a4, 0x6a4, 0x6a4, 0x6a4, 0x6a6, 0x6a6,
            0x6a6, 0x6a6, 0x684, 0x684, 0x684, 0x684, 0x683, 0x683, 0x683, 0x683,
            0x686, 0x686, 0x686, 0x686, 0x687, 0x687, 0x687, 0x687, 0x68d, 0x68d,
            0x68c, 0x68c, 0x68e, 0x68e, 0x688, 0x688, 0x698, 0x698, 0x691, 0x691,
            0x6a9, 0x6a9, 0x6a9, 0x6a9, 0x6af, 0x6af, 0x6af, 0x6af, 0x6b3, 0x6b3,
            0x6b3, 0x6b3, 0x6b1, 0x6b1, 0x6b1, 0x6b1, 0x6ba, 0x6ba, 0x6bb, 0x6bb,
            0x6bb, 0x6bb, 0x6c0, 0x6c0, 0x6c1, 0x6c1, 0x6c1, 0x6c1, 0x6be, 0x6be,
            0x6be, 0x6be, 0x6d2, 0x6d2, 0x6d3, 0x6d3, 0x6ad, 0x6ad, 0x6ad, 0x6ad,
            0x6c7, 0x6c7, 0x6c6, 0x6c6, 0x6c8, 0x6c8, 0x677, 0x6cb, 0x6cb, 0x6c5,
            0x6c5, 0x6c9, 0x6c9, 0x6d0, 0x6d0, 0x6d0, 0x6d0, 0x649, 0x649, 0x626,
            0x627, 0x626, 0x627, 0x626, 0x6d5, 0x626, 0x6d5, 0x626, 0x648, 0x626,
            0x648, 0x626, 0x6c7, 0x626, 0x6c7, 0x626, 0x6c6, 0x626, 0x6c6, 0x626,
            0x6c8, 0x626, 0x6c8, 0x626, 0x6d0, 0x626, 0x6d0, 0x626, 0x6d0, 0x626,
            0x649, 0x626, 0x649, 0x626, 0x649, 0x6cc, 0x6cc, 0x6cc, 0x6cc, 0x626,
            0x62c, 0x626, 0x62d, 0x626, 0x645, 0x626, 0x649, 0x626, 0x64a, 0x628,
            0x62c, 0x628, 0x62d, 0x628, 0x62e, 0x628, 0x645, 0x628, 0x649, 0x628,
            0x64a, 0x62a, 0x62c, 0x62a, 0x62d, 0x62a, 0x62e, 0x62a, 0x645, 0x62a,
            0x649, 0x62a, 0x64a, 0x62b, 0x62c, 0x62b, 0x645, 0x62b, 0x649, 0x62b,
            0x64a, 0x62c, 0x62d, 0x62c, 0x645, 0x62d, 0x62c, 0x62d, 0x645, 0x62e,
            0x62c, 0x62e, 0x62d, 0x62e, 0x645, 0x633, 0x62c, 0x633, 0x62d, 0x633,
            0x62e, 0x633, 0x645, 0x635, 0x62d, 0x635, 0x645, 0x636, 0x62c, 0x636,
            0x62d, 0x636, 0x62e, 0x636, 0x645, 0x637, 0x62d, 0x637, 0x645, 0x638,
            0x645, 0x639, 0x62c, 0x639, 0x645, 0x63a, 0x62c, 0x63a, 0x645, 0x641,
            0x62c, 0x641, 0x62d, 0x641, 0x62e, 0x641, 0x645, 0x641, 0x649, 0x641,
            0x64a, 0x642, 0x62d, 0x642, 0x645, 0x642, 0x649, 0x642, 0x64a, 0x643,
            0x627, 0x643, 0x62c, 0x643, 0x62d, 0x643, 0x62e, 0x643, 0x644, 0x643,
            0x645, 0x643, 0x649, 0x643, 0x64a, 0x644, 0x62c, 0x644, 0x62d, 0x644,
            0x62e, 0x644, 0x645, 0x644, 0x649, 0x644, 0x64a, 0x645, 0x62c, 0x645,
            0x62d, 0x645, 0x62e, 0x645, 0x645, 0x645, 0x649, 0x645, 0x64a, 0x646,
            0x62c, 0x646, 0x62d, 0x646, 0x62e, 0x646, 0x645, 0x646, 0x649, 0x646,
            0x64a, 0x647, 0x62c, 0x647, 0x645, 0x647, 0x649, 0x647, 0x64a, 0x64a,
            0x62c, 0x64a, 0x62d, 0x64a, 0x62e, 0x64a, 0x645, 0x64a, 0x649, 0x64a,
            0x64a, 0x630, 0x670, 0x631, 0x670, 0x649, 0x670, 0x20, 0x64c, 0x651,
            0x20, 0x64d, 0x651, 0x20, 0x64e, 0x651, 0x20, 0x64f, 0x651, 0x20,
            0x650, 0x651, 0x20, 0x651, 0x670, 0x626, 0x631, 0x626, 0x632, 0x626,
            0x645, 0x626, 0x646, 0x626, 0x649, 0x626, 0x64a, 0x628, 0x631, 0x628,
            0x632, 0x628, 0x645, 0x628, 0x646, 0x628, 0x649, 0x628, 0x64a, 0x62a,
            0x631, 0x62a, 0x632, 0x62a, 0x645, 0x62a, 0x646, 0x62a, 0x649, 0x62a,
            0x64a, 0x62b, 0x631, 0x62b, 0x632, 0x62b, 0x645, 0x62b, 0x646, 0x62b,
            0x649, 0x62b, 0x64a, 0x641, 0x649, 0x641, 0x64a, 0x642, 0x649, 0x642,
            0x64a, 0x643, 0x627, 0x643, 0x644, 0x643, 0x645, 0x643, 0x649, 0x643,
            0x64a, 0x644, 0x645, 0x644, 0x649, 0x644, 0x64a, 0x645, 0x627, 0x645,
            0x645, 0x646, 0x631, 0x646, 0x632, 0x646, 0x645, 0x646, 0x646, 0x646,
            0x649, 0x646, 0x64a, 0x649, 0x670, 0x64a, 0x631, 0x64a, 0x632, 0x64a,
            0x645, 0x64a, 0x646, 0x64a, 0x649, 0x64a, 0x64a, 0x626, 0x62c, 0x626,
            0x62d, 0x626, 0x62e, 0x626, 0x645, 0x626, 0x647, 0x628, 0x62c, 0x628,
            0x62d, 0x628, 0x62e, 0x628, 0x645, 0x628, 0x647, 0x62a, 0x62c, 0x62a,
            0x62d, 0x62a, 0x62e, 0x62a, 0x645, 0x62a, 0x647, 0x62b, 0x645, 0x62c,
            0x62d, 0x62c, 0x645, 0x62d, 0x62c, 0x62d, 0x645, 0x62e, 0x62c, 0x62e,
            0x645, 0x633, 0x62c, 0x633, 0x62d, 0x633, 0x62e, 0x633, 0x645, 0x635,
            0x62d, 0x635, 0x62e, 0x635, 0x645, 0x636, 0x62c, 0x636, 0x62d, 0x636,
            0x62e, 0x636, 0x645, 0x637, 0x62d, 0x638, 0x645, 0x639, 0x62c, 0x639,
            0x645, 0x63a, 0x62c, 0x63a, 0x645, 0x641, 0x62c, 0x641, 0x62d, 0x641,
            0x62e, 0x641, 0x645, 0x642, 0x62d, 0x642, 0x645, 0x643, 0x62c, 0x643,
            0x62d, 0x643, 0x62e, 0x643, 0x644, 0x643, 0x645, 0x644, 0x62c, 0x644,
            0x62d, 0x644, 0x62e, 0x644, 0x645, 0x644, 0x647, 0x645, 0x62c, 0x645,
            0x62d, 0x645, 0x62e, 0x645, 0x645, 0x646, 0x62c, 0x646, 0x62d, 0x646,
            0x62e, 0x646, 0x645, 0x646, 0x647, 0x647, 0x62c, 0x647, 0x645, 0x647,
            0x670, 0x64a, 0x62c, 0x64a, 0x62d, 0x64a, 0x62e, 0x64a, 0x645, 0x64a,
            0x647, 0x626, 0x645, 0x626, 0x647, 0x628, 0x645, 0x628, 0x647, 0x62a,
            0x645, 0x62a, 0x647, 0x62b, 0x645, 0x62b, 0x647, 0x633, 0x645, 0x633,
            0x647, 0x634, 0x645, 0x634, 0x647, 0x643, 0x644, 0x643, 0x645, 0x644,
            0x645, 0x646, 0x645, 0x646, 0x647, 0x64a, 0x645, 0x64a, 0x647, 0x640,
            0x64e, 0x651, 0x640, 0x64f, 0x651, 0x640, 0x650, 0x651, 0x637, 0x649,
            0x637, 0x64a, 0x639, 0x649, 0x639, 0x64a, 0x63a, 0x649, 0x63a, 0x64a,
            0x633, 0x649, 0x633, 0x64a, 0x634, 0x649, 0x634, 0x64a, 0x62d, 0x649,
            0x62d, 0x64a, 0x62c, 0x649, 0x62c, 0x64a, 0x62e, 0x649, 0x62e, 0x64a,
            0x635, 0x649, 0x635, 0x64a, 0x636, 0x649, 0x636, 0x64a, 0x634, 0x62c,
            0x634, 0x62d, 0x634, 0x62e, 0x634, 0x645, 0x634, 0x631, 0x633, 0x631,
            0x635, 0x631, 0x636, 0x631, 0x637, 0x649, 0x637, 0x64a, 0x639, 0x649,
            0x639, 0x64a, 0x63a, 0x649, 0x63a, 0x64a, 0x633, 0x649, 0x633, 0x64a,
            0x634, 0x649, 0x634, 0x64a, 0x62d, 0x649, 0x62d, 0x64a, 0x62c, 0x649,
            0x62c, 0x64a, 0x62e, 0x649, 0x62e, 0x64a, 0x635, 0x649, 0x635, 0x64a,
            0x636, 0x649, 0x636, 0x64a, 0x634, 0x62c, 0x634, 0x62d, 0x634, 0x62e,
            0x634, 0x645, 0x634, 0x631, 0x633, 0x631, 0x635, 0x631, 0x636, 0x631,
            0x634, 0x62c, 0x634, 0x62d, 0x634, 0x62e, 0x634, 0x645, 0x633, 0x647,
            0x634, 0x647, 0x637, 0x645, 0x633, 0x62c, 0x633, 0x62d, 0x633, 0x62e,
            0x634, 0x62c, 0x634, 0x62d, 0x634, 0x62e, 0x637, 0x645, 0x638, 0x645,
            0x627, 0x64b, 0x627, 0x64b, 0x62a, 0x62c, 0x645, 0x62a, 0x62d, 0x62c,
            0x62a, 0x62d, 0x62c, 0x62a, 0x62d, 0x645, 0x62a, 0x62e, 0x645, 0x62a,
            0x645, 0x62c, 0x62a, 0x645, 0x62d, 0x62a, 0x645, 0x62e, 0x62c, 0x645,
            0x62d, 0x62c, 0x645, 0x62d, 0x62d, 0x645, 0x64a, 0x62d, 0x645, 0x649,
            0x633, 0x62d, 0x62c, 0x633, 0x62c, 0x62d, 0x633, 0x62c, 0x649, 0x633,
            0x645, 0x62d, 0x633, 0x645, 0x62d, 0x633, 0x645, 0x62c, 0x633, 0x645,
            0x645, 0x633, 0x645, 0x645, 0x635, 0x62d, 0x62d, 0x635, 0x62d, 0x62d,
            0x635, 0x645, 0x645, 0x634, 0x62d, 0x645, 0x634, 0x62d, 0x645, 0x634,
            0x62c, 0x64a, 0x634, 0x645, 0x62e, 0x634, 0x645, 0x62e, 0x634, 0x645,
            0x645, 0x634, 0x645, 0x645, 0x636, 0x62d, 0x649, 0x636, 0x62e, 0x645,
            0x636, 0x62e, 0x645, 0x637, 0x645, 0x62d, 0x637, 0x645, 0x62d, 0x637,
            0x645, 0x645, 0x637, 0x645, 0x64a, 0x639, 0x62c, 0x645, 0x639, 0x645,
            0x645, 0x639, 0x645, 0x645, 0x639, 0x645, 0x649, 0x63a, 0x645, 0x645,
            0x63a, 0x645, 0x64a, 0x63a, 0x645, 0x649, 0x641, 0x62e, 0x645, 0x641,
            0x62e, 0x645, 0x642, 0x645, 0x62d, 0x642, 0x645, 0x645, 0x644, 0x62d,
            0x645, 0x644, 0x62d, 0x64a, 0x644, 0x62d, 0x649, 0x644, 0x62c, 0x62c,
            0x644, 0x62c, 0x62c, 0x644, 0x62e, 0x645, 0x644, 0x62e, 0x645, 0x644,
            0x645, 0x62d, 0x644, 0x645, 0x62d, 0x645, 0x62d, 0x62c, 0x645, 0x62d,
            0x645, 0x645, 0x62d, 0x64a, 0x645, 0x62c, 0x62d, 0x645, 0x62c, 0x645,
            0x645, 0x62e, 0x62c, 0x645, 0x62e, 0x645, 0x645, 0x62c, 0x62e, 0x647,
            0x645, 0x62c, 0x647, 0x645, 0x645, 0x646, 0x62d, 0x645, 0x646, 0x62d,
            0x649, 0x646, 0x62c, 0x645, 0x646, 0x62c, 0x645, 0x646, 0x62c, 0x649,
            0x646, 0x645, 0x64a, 0x646, 0x645, 0x649, 0x64a, 0x645, 0x645, 0x64a,
            0x645, 0x645, 0x628, 0x62e, 0x64a, 0x62a, 0x62c, 0x64a, 0x62a, 0x62c,
            0x649, 0x62a, 0x62e, 0x64a, 0x62a, 0x62e, 0x649, 0x62a, 0x645, 0x64a,
            0x62a, 0x645, 0x649, 0x62c, 0x645, 0x64a, 0x62c, 0x62d, 0x649, 0x62c,
            0x645, 0x649, 0x633, 0x62e, 0x649, 0x635, 0x62d, 0x64a, 0x634, 0x62d,
            0x64a, 0x636, 0x62d, 0x64a, 0x644, 0x62c, 0x64a, 0x644, 0x645, 0x64a,
            0x64a, 0x62d, 0x64a, 0x64a, 0x62c, 0x64a, 0x64a, 0x645, 0x64a, 0x645,
            0x645, 0x64a, 0x642, 0x645, 0x64a, 0x646, 0x62d, 0x64a, 0x642, 0x645,
            0x62d, 0x644, 0x62d, 0x645, 0x639, 0x645, 0x64a, 0x643, 0x645, 0x64a,
            0x646, 0x62c, 0x62d, 0x645, 0x62e, 0x64a, 0x644, 0x62c, 0x645, 0x643,
            0x645, 0x645, 0x644, 0x62c, 0x645, 0x646, 0x62c, 0x62d, 0x62c, 0x62d,
            0x64a, 0x62d, 0x62c, 0x64a, 0x645, 0x62c, 0x64a, 0x641, 0x645, 0x64a,
            0x628, 0x62d, 0x64a, 0x643, 0x645, 0x645, 0x639, 0x62c, 0x645, 0x635,
            0x645, 0x645, 0x633, 0x62e, 0x64a, 0x646, 0x62c, 0x64a, 0x635, 0x644,
            0x6d2, 0x642, 0x644, 0x6d2, 0x627, 0x644, 0x644, 0x647, 0x627, 0x643,
            0x628, 0x631, 0x645, 0x62d, 0x645, 0x62f, 0x635, 0x644, 0x639, 0x645,
            0x631, 0x633, 0x648, 0x644, 0x639, 0x644, 0x64a, 0x647, 0x648, 0x633,
            0x644, 0x645, 0x635, 0x644, 0x649, 0x635, 0x644, 0x649, 0x20, 0x627,
            0x644, 0x644, 0x647, 0x20, 0x639, 0x644, 0x64a, 0x647, 0x20, 0x648,
            0x633, 0x644, 0x645, 0x62c, 0x644, 0x20, 0x62c, 0x644, 0x627, 0x644,
            0x647, 0x631, 0x6cc, 0x627, 0x644, 0x2c, 0x3001, 0x3002, 0x3a, 0x3b,
            0x21, 0x3f, 0x3016, 0x3017, 0x2026, 0x2025, 0x2014, 0x2013, 0x5f, 0x5f,
            0x28, 0x29, 0x7b, 0x7d, 0x3014, 0x3015, 0x3010, 0x3011, 0x300a, 0x300b,
            0x3008, 0x3009, 0x300c, 0x300d, 0x300e, 0x300f, 0x5b, 0x5d, 0x203e, 0x203e,
            0x203e, 0x203e, 0x5f, 0x5f, 0x5f, 0x2c, 0x3001, 0x2e, 0x3b, 0x3a,
            0x3f, 0x21, 0x2014, 0x28, 0x29, 0x7b, 0x7d, 0x3014, 0x3015, 0x23,
            0x26, 0x2a, 0x2b, 0x2d, 0x3c, 0x3e, 0x3d, 0x5c, 0x24, 0x25,
            0x40, 0x20, 0x64b, 0x640, 0x64b, 0x20, 0x64c, 0x20, 0x64d, 0x20,
            0x64e, 0x640, 0x64e, 0x20, 0x64f, 0x640, 0x64f, 0x20, 0x650, 0x640,
            0x650, 0x20, 0x651, 0x640, 0x651, 0x20, 0x652, 0x640, 0x652, 0x621,
            0x622, 0x622, 0x623, 0x623, 0x624, 0x624, 0x625, 0x625, 0x626, 0x626,
            0x626, 0x626, 0x627, 0x627, 0x628, 0x628, 0x628, 0x628, 0x629, 0x629,
            0x62a, 0x62a, 0x62a, 0x62a, 0x62b, 0x62b, 0x62b, 0x62b, 0x62c, 0x62c,
            0x62c, 0x62c, 0x62d, 0x62d, 0x62d, 0x62d, 0x62e, 0x62e, 0x62e, 0x62e,
            0x62f, 0x62f, 0x630, 0x630, 0x631, 0x631, 0x632, 0x632, 0x633, 0x633,
            0x633, 0x633, 0x634, 0x634, 0x634, 0x634, 0x635, 0x635, 0x635, 0x635,
            0x636, 0x636, 0x636, 0x636, 0x637, 0x637, 0x637, 0x637, 0x638, 0x638,
            0x638, 0x638, 0x639, 0x639, 0x639, 0x639, 0x63a, 0x63a, 0x63a, 0x63a,
            0x641, 0x641, 0x641, 0x641, 0x642, 0x642, 0x642, 0x642, 0x643, 0x643,
            0x643, 0x643, 0x644, 0x644, 0x644, 0x644, 0x645, 0x645, 0x645, 0x645,
            0x646, 0x646, 0x646, 0x646, 0x647, 0x647, 0x647, 0x647, 0x648, 0x648,
            0x649, 0x649, 0x64a, 0x64a, 0x64a, 0x64a, 0x644, 0x622, 0x644, 0x622,
            0x644, 0x623, 0x644, 0x623, 0x644, 0x625, 0x644, 0x625, 0x644, 0x627,
            0x644, 0x627, 0x21, 0x22, 0x23, 0x24, 0x25, 0x26, 0x27, 0x28,
            0x29, 0x2a, 0x2b, 0x2c, 0x2d, 0x2e, 0x2f, 0x30, 0x31, 0x32,
            0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39, 0x3a, 0x3b, 0x3c,
            0x3d, 0x3e, 0x3f, 0x40, 0x41, 0x42, 0x43, 0x44, 0x45, 0x46,
            0x47, 0x48, 0x49, 0x4a, 0x4b, 0x4c, 0x4d, 0x4e, 0x4f, 0x50,
            0x51, 0x52, 0x53, 0x54, 0x55, 0x56, 0x57, 0x58, 0x59, 0x5a,
            0x5b, 0x5c, 0x5d, 0x5e, 0x5f, 0x60, 0x61, 0x62, 0x63, 0x64,
            0x65, 0x66, 0x67, 0x68, 0x69, 0x6a, 0x6b, 0x6c, 0x6d, 0x6e,
            0x6f, 0x70, 0x71, 0x72, 0x73, 0x74, 0x75, 0x76, 0x77, 0x78,
            0x79, 0x7a, 0x7b, 0x7c, 0x7d, 0x7e, 0x2985, 0x2986, 0x3002, 0x300c,
            0x300d, 0x3001, 0x30fb, 0x30f2, 0x30a1, 0x30a3, 0x30a5, 0x30a7, 0x30a9, 0x30e3,
            0x30e5, 0x30e7, 0x30c3, 0x30fc, 0x30a2, 0x30a4, 0x30a6, 0x30a8, 0x30aa, 0x30ab,
            0x30ad, 0x30af, 0x30b1, 0x30b3, 0x30b5, 0x30b7, 0x30b9, 0x30bb, 0x30bd, 0x30bf,
            0x30c1, 0x30c4, 0x30c6, 0x30c8, 0x30ca, 0x30cb, 0x30cc, 0x30cd, 0x30ce, 0x30cf,
            0x30d2, 0x30d5, 0x30d8, 0x30db, 0x30de, 0x30df, 0x30e0, 0x30e1, 0x30e2, 0x30e4,
            0x30e6, 0x30e8, 0x30e9, 0x30ea, 0x30eb, 0x30ec, 0x30ed, 0x30ef, 0x30f3, 0x3099,
            0x309a, 0x3164, 0x3131, 0x3132, 0x3133, 0x3134, 0x3135, 0x3136, 0x3137, 0x3138,
            0x3139, 0x313a, 0x313b, 0x313c, 0x313d, 0x313e, 0x313f, 0x3140, 0x3141, 0x3142,
            0x3143, 0x3144, 0x3145, 0x3146, 0x3147, 0x3148, 0x3149, 0x314a, 0x314b, 0x314c,
            0x314d, 0x314e, 0x314f, 0x3150, 0x3151, 0x3152, 0x3153, 0x3154, 0x3155, 0x3156,
            0x3157, 0x3158, 0x3159, 0x315a, 0x315b, 0x315c, 0x315d, 0x315e, 0x315f, 0x3160,
            0x3161, 0x3162, 0x3163, 0xa2, 0xa3, 0xac, 0xaf, 0xa6, 0xa5, 0x20a9,
            0x2502, 0x2190, 0x2191, 0x2192, 0x2193, 0x25a0, 0x25cb, 0x2d0, 0x2d1, 0xe6,
            0x299, 0x253, 0x2a3, 0xab66, 0x2a5, 0x2a4, 0x256, 0x257, 0x1d91, 0x258,
            0x25e, 0x2a9, 0x264, 0x262, 0x260, 0x29b, 0x127, 0x29c, 0x267, 0x284,
            0x2aa, 0x2ab, 0x26c, 0x1df04, 0xa78e, 0x26e, 0x1df05, 0x28e, 0x1df06, 0xf8,
            0x276, 0x277, 0x71, 0x27a, 0x1df08, 0x27d, 0x27e, 0x280, 0x2a8, 0x2a6,
            0xab67, 0x2a7, 0x288, 0x2c71, 0x28f, 0x2a1, 0x2a2, 0x298, 0x1c0, 0x1c1,
            0x1c2, 0x1df0a, 0x1df1e, 0x41, 0x42, 0x43, 0x44, 0x45, 0x46, 0x47,
            0x48, 0x49, 0x4a, 0x4b, 0x4c, 0x4d, 0x4e, 0x4f, 0x50, 0x51,
            0x52, 0x53, 0x54, 0x55, 0x56, 0x57, 0x58, 0x59, 0x5a, 0x61,
            0x62, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69, 0x6a, 0x6b,
            0x6c, 0x6d, 0x6e, 0x6f, 0x70, 0x71, 0x72, 0x73, 0x74, 0x75,
            0x76, 0x77, 0x78, 0x79, 0x7a, 0x41, 0x42, 0x43, 0x44, 0x45,
            0x46, 0x47, 0x48, 0x49, 0x4a, 0x4b, 0x4c, 0x4d, 0x4e, 0x4f,
            0x50, 0x51, 0x52, 0x53, 0x54, 0x55, 0x56, 0x57, 0x58, 0x59,
            0x5a, 0x61, 0x62, 0x63, 0x64, 0x65, 0x66, 0x67, 0x69, 0x6a,
            0x6b, 0x6c, 0x6d, 0x6e, 0x6f, 0x70, 0x71, 0x72, 0x73, 0x74,
            0x75, 0x76, 0x77, 0x78, 0x79, 0x7a, 0x41, 0x42, 0x43, 0x44,
            0x45, 0x46, 0x47, 0x48, 0x49, 0x4a, 0x4b, 0x4c, 0x4d, 0x4e,
            0x4f, 0x50, 0x51, 0x52, 0x53, 0x54, 0x55, 0x56, 0x57, 0x58,
            0x59, 0x5a, 0x61, 0x62, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68,
            0x69, 0x6a, 0x6b, 0x6c, 0x6d, 0x6e, 0x6f, 0x70, 0x71, 0x72,
            0x73, 0x74, 0x75, 0x76, 0x77, 0x78, 0x79, 0x7a, 0x41, 0x43,
            0x44, 0x47, 0x4a, 0x4b, 0x4e, 0x4f, 0x50, 0x51, 0x53, 0x54,
            0x55, 0x56, 0x57, 0x58, 0x59, 0x5a, 0x61, 0x62, 0x63, 0x64,
            0x66, 0x68, 0x69, 0x6a, 0x6b, 0x6c, 0x6d, 0x6e, 0x70, 0x71,
            0x72, 0x73, 0x74, 0x75, 0x76, 0x77, 0x78, 0x79, 0x7a, 0x41,
            0x42, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48, 0x49, 0x4a, 0x4b,
            0x4c, 0x4d, 0x4e, 0x4f, 0x50, 0x51, 0x52, 0x53, 0x54, 0x55,
            0x56, 0x57, 0x58, 0x59, 0x5a, 0x61, 0x62, 0x63, 0x64, 0x65,
            0x66, 0x67, 0x68, 0x69, 0x6a, 0x6b, 0x6c, 0x6d, 0x6e, 0x6f,
            0x70, 0x71, 0x72, 0x73, 0x74, 0x75, 0x76, 0x77, 0x78, 0x79,
            0x7a, 0x41, 0x42, 0x44, 0x45, 0x46, 0x47, 0x4a, 0x4b, 0x4c,
            0x4d, 0x4e, 0x4f, 0x50, 0x51, 0x53, 0x54, 0x55, 0x56, 0x57,
            0x58, 0x59, 0x61, 0x62, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68,
            0x69, 0x6a, 0x6b, 0x6c, 0x6d, 0x6e, 0x6f, 0x70, 0x71, 0x72,
            0x73, 0x74, 0x75, 0x76, 0x77, 0x78, 0x79, 0x7a, 0x41, 0x42,
            0x44, 0x45, 0x46, 0x47, 0x49, 0x4a, 0x4b, 0x4c, 0x4d, 0x4f,
            0x53, 0x54, 0x55, 0x56, 0x57, 0x58, 0x59, 0x61, 0x62, 0x63,
            0x64, 0x65, 0x66, 0x67, 0x68, 0x69, 0x6a, 0x6b, 0x6c, 0x6d,
            0x6e, 0x6f, 0x70, 0x71, 0x72, 0x73, 0x74, 0x75, 0x76, 0x77,
            0x78, 0x79, 0x7a, 0x41, 0x42, 0x43, 0x44, 0x45, 0x46, 0x47,
            0x48, 0x49, 0x4a, 0x4b, 0x4c, 0x4d, 0x4e, 0x4f, 0x50, 0x51,
            0x52, 0x53, 0x54, 0x55, 0x56, 0x57, 0x58, 0x59, 0x5a, 0x61,
            0x62, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69, 0x6a, 0x6b,
            0x6c, 0x6d, 0x6e, 0x6f, 0x70, 0x71, 0x72, 0x73, 0x74, 0x75,
            0x76, 0x77, 0x78, 0x79, 0x7a, 0x41, 0x42, 0x43, 0x44, 0x45,
            0x46, 0x47, 0x48, 0x49, 0x4a, 0x4b, 0x4c, 0x4d, 0x4e, 0x4f,
            0x50, 0x51, 0x52, 0x53, 0x54, 0x55, 0x56, 0x57, 0x58, 0x59,
            0x5a, 0x61, 0x62, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69,
            0x6a, 0x6b, 0x6c, 0x6d, 0x6e, 0x6f, 0x70, 0x71, 0x72, 0x73,
            0x74, 0x75, 0x76, 0x77, 0x78, 0x79, 0x7a, 0x41, 0x42, 0x43,
            0x44, 0x45, 0x46, 0x47, 0x48, 0x49, 0x4a, 0x4b, 0x4c, 0x4d,
            0x4e, 0x4f, 0x50, 0x51, 0x52, 0x53, 0x54, 0x55, 0x56, 0x57,
            0x58, 0x59, 0x5a, 0x61, 0x62, 0x63, 0x64, 0x65, 0x66, 0x67,
            0x68, 0x69, 0x6a, 0x6b, 0x6c, 0x6d, 0x6e, 0x6f, 0x70, 0x71,
            0x72, 0x73, 0x74, 0x75, 0x76, 0x77, 0x78, 0x79, 0x7a, 0x41,
            0x42, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48, 0x49, 0x4a, 0x4b,
            0x4c, 0x4d, 0x4e, 0x4f, 0x50, 0x51, 0x52, 0x53, 0x54, 0x55,
            0x56, 0x57, 0x58, 0x59, 0x5a, 0x61, 0x62, 0x63, 0x64, 0x65,
            0x66, 0x67, 0x68, 0x69, 0x6a, 0x6b, 0x6c, 0x6d, 0x6e, 0x6f,
            0x70, 0x71, 0x72, 0x73, 0x74, 0x75, 0x76, 0x77, 0x78, 0x79,
            0x7a, 0x41, 0x42, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48, 0x49,
            0x4a, 0x4b, 0x4c, 0x4d, 0x4e, 0x4f, 0x50, 0x51, 0x52, 0x53,
            0x54, 0x55, 0x56, 0x57, 0x58, 0x59, 0x5a, 0x61, 0x62, 0x63,
            0x64, 0x65, 0x66, 0x67, 0x68, 0x69, 0x6a, 0x6b, 0x6c, 0x6d,
            0x6e, 0x6f, 0x70, 0x71, 0x72, 0x73, 0x74, 0x75, 0x76, 0x77,
            0x78, 0x79, 0x7a, 0x41, 0x42, 0x43, 0x44, 0x45, 0x46, 0x47,
            0x48, 0x49, 0x4a, 0x4b, 0x4c, 0x4d, 0x4e, 0x4f, 0x50, 0x51,
            0x52, 0x53, 0x54, 0x55, 0x56, 0x57, 0x58, 0x59, 0x5a, 0x61,
            0x62, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69, 0x6a, 0x6b,
            0x6c, 0x6d, 0x6e, 0x6f, 0x70, 0x71, 0x72, 0x73, 0x74, 0x75,
            0x76, 0x77, 0x78, 0x79, 0x7a, 0x131, 0x237, 0x391, 0x392, 0x393,
            0x394, 0x395, 0x396, 0x397, 0x398, 0x399, 0x39a, 0x39b, 0x39c, 0x39d,
            0x39e, 0x39f, 0x3a0, 0x3a1, 0x3f4, 0x3a3, 0x3a4, 0x3a5, 0x3a6, 0x3a7,
            0x3a8, 0x3a9, 0x2207, 0x3b1, 0x3b2, 0x3b3, 0x3b4, 0x3b5, 0x3b6, 0x3b7,
            0x3b8, 0x3b9, 0x3ba, 0x3bb, 0x3bc, 0x3bd, 0x3be, 0x3bf, 0x3c0, 0x3c1,
            0x3c2, 0x3c3, 0x3c4, 0x3c5, 0x3c6, 0x3c7, 0x3c8, 0x3c9, 0x2202, 0x3f5,
            0x3d1, 0x3f0, 0x3d5, 0x3f1, 0x3d6, 0x391, 0x392, 0x393, 0x394, 0x395,
            0x396, 0x397, 0x398, 0x399, 0x39a, 0x39b, 0x39c, 0x39d, 0x39e, 0x39f,
            0x3a0, 0x3a1, 0x3f4, 0x3a3, 0x3a4, 0x3a5, 0x3a6, 0x3a7, 0x3a8, 0x3a9,
            0x2207, 0x3b1, 0x3b2, 0x3b3, 0x3b4, 0x3b5, 0x3b6, 0x3b7, 0x3b8, 0x3b9,
            0x3ba, 0x3bb, 0x3bc, 0x3bd, 0x3be, 0x3bf, 0x3c0, 0x3c1, 0x3c2, 0x3c3,
            0x3c4, 0x3c5, 0x3c6, 0x3c7, 0x3c8, 0x3c9, 0x2202, 0x3f5, 0x3d1, 0x3f0,
            0x3d5, 0x3f1, 0x3d6, 0x391, 0x392, 0x393, 0x394, 0x395, 0x396, 0x397,
            0x398, 0x399, 0x39a, 0x39b, 0x39c, 0x39d, 0x39e, 0x39f, 0x3a0, 0x3a1,
            0x3f4, 0x3a3, 0x3a4, 0x3a5, 0x3a6, 0x3a7, 0x3a8, 0x3a9, 0x2207, 0x3b1,
            0x3b2, 0x3b3, 0x3b4, 0x3b5, 0x3b6, 0x3b7, 0x3b8, 0x3b9, 0x3ba, 0x3bb,
            0x3bc, 0x3bd, 0x3be, 0x3bf, 0x3c0, 0x3c1, 0x3c2, 0x3c3, 0x3c4, 0x3c5,
            0x3c6, 0x3c7, 0x3c8, 0x3c9, 0x2202, 0x3f5, 0x3d1, 0x3f0, 0x3d5, 0x3f1,
            0x3d6, 0x391, 0x392, 0x393, 0x394, 0x395, 0x396, 0x397, 0x398, 0x399,
            0x39a, 0x39b, 0x39c, 0x39d, 0x39e, 0x39f, 0x3a0, 0x3a1, 0x3f4, 0x3a3,
            0x3a4, 0x3a5, 0x3a6, 0x3a7, 0x3a8, 0x3a9, 0x2207, 0x3b1, 0x3b2, 0x3b3,
            0x3b4, 0x3b5, 0x3b6, 0x3b7, 0x3b8, 0x3b9, 0x3ba, 0x3bb, 0x3bc, 0x3bd,
            0x3be, 0x3bf, 0x3c0, 0x3c1, 0x3c2, 0x3c3, 0x3c4, 0x3c5, 0x3c6, 0x3c7,
            0x3c8, 0x3c9, 0x2202, 0x3f5, 0x3d1, 0x3f0, 0x3d5, 0x3f1, 0x3d6, 0x391,
            0x392, 0x393, 0x394, 0x395, 0x396, 0x397, 0x398, 0x399, 0x39a, 0x39b,
            0x39c, 0x39d, 0x39e, 0x39f, 0x3a0, 0x3a1, 0x3f4, 0x3a3, 0x3a4, 0x3a5,
            0x3a6, 0x3a7, 0x3a8, 0x3a9, 0x2207, 0x3b1, 0x3b2, 0x3b3, 0x3b4, 0x3b5,
            0x3b6, 0x3b7, 0x3b8, 0x3b9, 0x3ba, 0x3bb, 0x3bc, 0x3bd, 0x3be, 0x3bf,
            0x3c0, 0x3c1, 0x3c2, 0x3c3, 0x3c4, 0x3c5, 0x3c6, 0x3c7, 0x3c8, 0x3c9,
            0x2202, 0x3f5, 0x3d1, 0x3f0, 0x3d5, 0x3f1, 0x3d6, 0x3dc, 0x3dd, 0x30,
            0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39, 0x30,
            0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39, 0x30,
            0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39, 0x30,
            0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39, 0x30,
            0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39, 0x627,
            0x628, 0x62c, 0x62f, 0x648, 0x632, 0x62d, 0x637, 0x64a, 0x643, 0x644,
            0x645, 0x646, 0x633, 0x639, 0x641, 0x635, 0x642, 0x631, 0x634, 0x62a,
            0x62b, 0x62e, 0x630, 0x636, 0x638, 0x63a, 0x66e, 0x6ba, 0x6a1, 0x66f,
            0x628, 0x62c, 0x647, 0x62d, 0x64a, 0x643, 0x644, 0x645, 0x646, 0x633,
            0x639, 0x641, 0x635, 0x642, 0x634, 0x62a, 0x62b, 0x62e, 0x636, 0x63a,
            0x62c, 0x62d, 0x64a, 0x644, 0x646, 0x633, 0x639, 0x635, 0x642, 0x634,
            0x62e, 0x636, 0x63a, 0x6ba, 0x66f, 0x628, 0x62c, 0x647, 0x62d, 0x637,
            0x64a, 0x643, 0x645, 0x646, 0x633, 0x639, 0x641, 0x635, 0x642, 0x634,
            0x62a, 0x62b, 0x62e, 0x636, 0x638, 0x63a, 0x66e, 0x6a1, 0x627, 0x628,
            0x62c, 0x62f, 0x647, 0x648, 0x632, 0x62d, 0x637, 0x64a, 0x644, 0x645,
            0x646, 0x633, 0x639, 0x641, 0x635, 0x642, 0x631, 0x634, 0x62a, 0x62b,
            0x62e, 0x630, 0x636, 0x638, 0x63a, 0x628, 0x62c, 0x62f, 0x648, 0x632,
            0x62d, 0x637, 0x64a, 0x644, 0x645, 0x646, 0x633, 0x639, 0x641, 0x635,
            0x642, 0x631, 0x634, 0x62a, 0x62b, 0x62e, 0x630, 0x636, 0x638, 0x63a,
            0x30, 0x2e, 0x30, 0x2c, 0x31, 0x2c, 0x32, 0x2c, 0x33, 0x2c,
            0x34, 0x2c, 0x35, 0x2c, 0x36, 0x2c, 0x37, 0x2c, 0x38, 0x2c,
            0x39, 0x2c, 0x28, 0x41, 0x29, 0x28, 0x42, 0x29, 0x28, 0x43,
            0x29, 0x28, 0x44, 0x29, 0x28, 0x45, 0x29, 0x28, 0x46, 0x29,
            0x28, 0x47, 0x29, 0x28, 0x48, 0x29, 0x28, 0x49, 0x29, 0x28,
            0x4a, 0x29, 0x28, 0x4b, 0x29, 0x28, 0x4c, 0x29, 0x28, 0x4d,
            0x29, 0x28, 0x4e, 0x29, 0x28, 0x4f, 0x29, 0x28, 0x50, 0x29,
            0x28, 0x51, 0x29, 0x28, 0x52, 0x29, 0x28, 0x53, 0x29, 0x28,
            0x54, 0x29, 0x28, 0x55, 0x29, 0x28, 0x56, 0x29, 0x28, 0x57,
            0x29, 0x28, 0x58, 0x29, 0x28, 0x59, 0x29, 0x28, 0x5a, 0x29,
            0x3014, 0x53, 0x3015, 0x43, 0x52, 0x43, 0x44, 0x57, 0x5a, 0x41,
            0x42, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48, 0x49, 0x4a, 0x4b,
            0x4c, 0x4d, 0x4e, 0x4f, 0x50, 0x51, 0x52, 0x53, 0x54, 0x55,
            0x56, 0x57, 0x58, 0x59, 0x5a, 0x48, 0x56, 0x4d, 0x56, 0x53,
            0x44, 0x53, 0x53, 0x50, 0x50, 0x56, 0x57, 0x43, 0x4d, 0x43,
            0x4d, 0x44, 0x4d, 0x52, 0x44, 0x4a, 0x307b, 0x304b, 0x30b3, 0x30b3,
            0x30b5, 0x624b, 0x5b57, 0x53cc, 0x30c7, 0x4e8c, 0x591a, 0x89e3, 0x5929, 0x4ea4,
            0x6620, 0x7121, 0x6599, 0x524d, 0x5f8c, 0x518d, 0x65b0, 0x521d, 0x7d42, 0x751f,
            0x8ca9, 0x58f0, 0x5439, 0x6f14, 0x6295, 0x6355, 0x4e00, 0x4e09, 0x904a, 0x5de6,
            0x4e2d, 0x53f3, 0x6307, 0x8d70, 0x6253, 0x7981, 0x7a7a, 0x5408, 0x6e80, 0x6709,
            0x6708, 0x7533, 0x5272, 0x55b6, 0x914d, 0x3014, 0x672c, 0x3015, 0x3014, 0x4e09,
            0x3015, 0x3014, 0x4e8c, 0x3015, 0x3014, 0x5b89, 0x3015, 0x3014, 0x70b9, 0x3015,
            0x3014, 0x6253, 0x3015, 0x3014, 0x76d7, 0x3015, 0x3014, 0x52dd, 0x3015, 0x3014,
            0x6557, 0x3015, 0x5f97, 0x53ef, 0x30, 0x31, 0x32, 0x33, 0x34, 0x35,
            0x36, 0x37, 0x38, 0x39,
        ],
    );

    pub(crate) static COMPOSITION_EXCLUSIONS: SparseSet = SparseSet::from_static(&[
        (0x340, 0x341), (0x343, 0x344), (0x374, 0x374), (0x37e, 0x37e), (0x387, 0x387), (0x958, 0x95f),
        (0x9dc, 0x9dd), (0x9df, 0x9df), (0xa33, 0xa33), (0xa36, 0xa36), (0xa59, 0xa5b), (0xa5e, 0xa5e),
        (0xb5c, 0xb5d), (0xf43, 0xf43), (0xf4d, 0xf4d), (0xf52, 0xf52), (0xf57, 0xf57), (0xf5c, 0xf5c),
        (0xf69, 0xf69), (0xf73, 0xf73), (0xf75, 0xf76), (0xf78, 0xf78), (0xf81, 0xf81), (0xf93, 0xf93),
        (0xf9d, 0xf9d), (0xfa2, 0xfa2), (0xfa7, 0xfa7), (0xfac, 0xfac), (0xfb9, 0xfb9), (0x1f71, 0x1f71),
        (0x1f73, 0x1f73), (0x1f75, 0x1f75), (0x1f77, 0x1f77), (0x1f79, 0x1f79), (0x1f7b, 0x1f7b), (0x1f7d, 0x1f7d),
        (0x1fbb, 0x1fbb), (0x1fbe, 0x1fbe), (0x1fc9, 0x1fc9), (0x1fcb, 0x1fcb), (0x1fd3, 0x1fd3), (0x1fdb, 0x1fdb),
        (0x1fe3, 0x1fe3), (0x1feb, 0x1feb), (0x1fee, 0x1fef), (0x1ff9, 0x1ff9), (0x1ffb, 0x1ffb), (0x1ffd, 0x1ffd),
        (0x2000, 0x2001), (0x2126, 0x2126), (0x212a, 0x212b), (0x2329, 0x232a), (0x2adc, 0x2adc), (0xf900, 0xfa0d),
        (0xfa10, 0xfa10), (0xfa12, 0xfa12), (0xfa15, 0xfa1e), (0xfa20, 0xfa20), (0xfa22, 0xfa22), (0xfa25, 0xfa26),
        (0xfa2a, 0xfa6d), (0xfa70, 0xfad9), (0xfb1d, 0xfb1d), (0xfb1f, 0xfb1f), (0xfb2a, 0xfb36), (0xfb38, 0xfb3c),
        (0xfb3e, 0xfb3e), (0xfb40, 0xfb41), (0xfb43, 0xfb44), (0xfb46, 0xfb4e), (0x1d15e, 0x1d164), (0x1d1bb, 0x1d1c0),
        (0x2f800, 0x2fa1d),
    ]);
}

pub(crate) mod grapheme {
    use super::GraphemeClusterBreak::{self, *};
    use crate::table::SparseTable;

    pub(crate) static TABLE: SparseTable<GraphemeClusterBreak> = SparseTable::from_static(
        &[
            (0x0, Control), (0xa, LF), (0xb, Control), (0xd, CR),
            (0xe, Control), (0x20, Other), (0x7f, Control), (0xa0, Other),
            (0xa9, ExtendedPictographic), (0xaa, Other), (0xad, Control), (0xae, ExtendedPictographic),
            (0xaf, Other), (0x300, Extend), (0x370, Other), (0x483, Extend),
            (0x48a, Other), (0x591, Extend), (0x5be, Other), (0x5bf, Extend),
            (0x5c0, Other), (0x5c1, Extend), (0x5c3, Other), (0x5c4, Extend),
            (0x5c6, Other), (0x5c7, Extend), (0x5c8, Other), (0x600, Prepend),
            (0x606, Other), (0x610, Extend), (0x61b, Other), (0x61c, Control),
            (0x61d, Other), (0x64b, Extend), (0x660, Other), (0x670, Extend),
            (0x671, Other), (0x6d6, Extend), (0x6dd, Prepend), (0x6de, Other),
            (0x6df, Extend), (0x6e5, Other), (0x6e7, Extend), (0x6e9, Other),
            (0x6ea, Extend), (0x6ee, Other), (0x70f, Prepend), (0x710, Other),
            (0x711, Extend), (0x712, Other), (0x730, Extend), (0x74b, Other),
            (0x7a6, Extend), (0x7b1, Other), (0x7eb, Extend), (0x7f4, Other),
            (0x7fd, Extend), (0x7fe, Other), (0x816, Extend), (0x81a, Other),
            (0x81b, Extend), (0x824, Other), (0x825, Extend), (0x828, Other),
            (0x829, Extend), (0x82e, Other), (0x859, Extend), (0x85c, Other),
            (0x890, Prepend), (0x892, Other), (0x898, Extend), (0x8a0, Other),
            (0x8ca, Extend), (0x8e2, Prepend), (0x8e3, Extend), (0x903, SpacingMark),
            (0x904, Other), (0x93a, Extend), (0x93b, SpacingMark), (0x93c, Extend),
            (0x93d, Other), (0x93e, SpacingMark), (0x941, Extend), (0x949, SpacingMark),
            (0x94d, Extend), (0x94e, SpacingMark), (0x950, Other), (0x951, Extend),
            (0x958, Other), (0x962, Extend), (0x964, Other), (0x981, Extend),
            (0x982, SpacingMark), (0x984, Other), (0x9bc, Extend), (0x9bd, Other),
            (0x9be, Extend), (0x9bf, SpacingMark), (0x9c1, Extend), (0x9c5, Other),
            (0x9c7, SpacingMark), (0x9c9, Other), (0x9cb, SpacingMark), (0x9cd, Extend),
            (0x9ce, Other), (0x9d7, Extend), (0x9d8, Other), (0x9e2, Extend),
            (0x9e4, Other), (0x9fe, Extend), (0x9ff, Other), (0xa01, Extend),
            (0xa03, SpacingMark), (0xa04, Other), (0xa3c, Extend), (0xa3d, Other),
            (0xa3e, SpacingMark), (0xa41, Extend), (0xa43, Other), (0xa47, Extend),
            (0xa49, Other), (0xa4b, Extend), (0xa4e, Other), (0xa51, Extend),
            (0xa52, Other), (0xa70, Extend), (0xa72, Other), (0xa75, Extend),
            (0xa76, Other), (0xa81, Extend), (0xa83, SpacingMark), (0xa84, Other),
            (0xabc, Extend), (0xabd, Other), (0xabe, SpacingMark), (0xac1, Extend),
            (0xac6, Other), (0xac7, Extend), (0xac9, SpacingMark), (0xaca, Other),
            (0xacb, SpacingMark), (0xacd, Extend), (0xace, Other), (0xae2, Extend),
            (0xae4, Other), (0xafa, Extend), (0xb00, Other), (0xb01, Extend),
            (0xb02, SpacingMark), (0xb04, Other), (0xb3c, Extend), (0xb3d, Other),
            (0xb3e, Extend), (0xb40, SpacingMark), (0xb41, Extend), (0xb45, Other),
            (0xb47, SpacingMark), (0xb49, Other), (0xb4b, SpacingMark), (0xb4d, Extend),
            (0xb4e, Other), (0xb55, Extend), (0xb58, Other), (0xb62, Extend),
            (0xb64, Other), (0xb82, Extend), (0xb83, Other), (0xbbe, Extend),
            (0xbbf, SpacingMark), (0xbc0, Extend), (0xbc1, SpacingMark), (0xbc3, Other),
            (0xbc6, SpacingMark), (0xbc9, Other), (0xbca, SpacingMark), (0xbcd, Extend),
            (0xbce, Other), (0xbd7, Extend), (0xbd8, Other), (0xc00, Extend),
            (0xc01, SpacingMark), (0xc04, Extend), (0xc05, Other), (0xc3c, Extend),
            (0xc3d, Other), (0xc3e, Extend), (0xc41, SpacingMark), (0xc45, Other),
            (0xc46, Extend), (0xc49, Other), (0xc4a, Extend), (0xc4e, Other),
            (0xc55, Extend), (0xc57, Other), (0xc62, Extend), (0xc64, Other),
            (0xc81, Extend), (0xc82, SpacingMark), (0xc84, Other), (0xcbc, Extend),
            (0xcbd, Other), (0xcbe, SpacingMark), (0xcbf, Extend), (0xcc0, SpacingMark),
            (0xcc2, Extend), (0xcc3, SpacingMark), (0xcc5, Other), (0xcc6, Extend),
            (0xcc7, SpacingMark), (0xcc9, Other), (0xcca, SpacingMark), (0xccc, Extend),
            (0xcce, Other), (0xcd5, Extend), (0xcd7, Other), (0xce2, Extend),
            (0xce4, Other), (0xd00, Extend), (0xd02, SpacingMark), (0xd04, Other),
            (0xd3b, Extend), (0xd3d, Other), (0xd3e, Extend), (0xd3f, SpacingMark),
            (0xd41, Extend), (0xd45, Other), (0xd46, SpacingMark), (0xd49, Other),
            (0xd4a, SpacingMark), (0xd4d, Extend), (0xd4e, Prepend), (0xd4f, Other),
            (0xd57, Extend), (0xd58, Other), (0xd62, Extend), (0xd64, Other),
            (0xd81, Extend), (0xd82, SpacingMark), (0xd84, Other), (0xdca, Extend),
            (0xdcb, Other), (0xdcf, Extend), (0xdd0, SpacingMark), (0xdd2, Extend),
            (0xdd5, Other), (0xdd6, Extend), (0xdd7, Other), (0xdd8, SpacingMark),
            (0xddf, Extend), (0xde0, Other), (0xdf2, SpacingMark), (0xdf4, Other),
            (0xe31, Extend), (0xe32, Other), (0xe33, SpacingMark), (0xe34, Extend),
            (0xe3b, Other), (0xe47, Extend), (0xe4f, Other), (0xeb1, Extend),
            (0xeb2, Other), (0xeb3, SpacingMark), (0xeb4, Extend), (0xebd, Other),
            (0xec8, Extend), (0xece, Other), (0xf18, Extend), (0xf1a, Other),
            (0xf35, Extend), (0xf36, Other), (0xf37, Extend), (0xf38, Other),
            (0xf39, Extend), (0xf3a, Other), (0xf3e, SpacingMark), (0xf40, Other),
            (0xf71, Extend), (0xf7f, SpacingMark), (0xf80, Extend), (0xf85, Other),
            (0xf86, Extend), (0xf88, Other), (0xf8d, Extend), (0xf98, Other),
            (0xf99, Extend), (0xfbd, Other), (0xfc6, Extend), (0xfc7, Other),
            (0x102d, Extend), (0x1031, SpacingMark), (0x1032, Extend), (0x1038, Other),
            (0x1039, Extend), (0x103b, SpacingMark), (0x103d, Extend), (0x103f, Other),
            (0x1056, SpacingMark), (0x1058, Extend), (0x105a, Other), (0x105e, Extend),
            (0x1061, Other), (0x1071, Extend), (0x1075, Other), (0x1082, Extend),
            (0x1083, Other), (0x1084, SpacingMark), (0x1085, Extend), (0x1087, Other),
            (0x108d, Extend), (0x108e, Other), (0x109d, Extend), (0x109e, Other),
            (0x1100, L), (0x1160, V), (0x11a8, T), (0x1200, Other),
            (0x135d, Extend), (0x1360, Other), (0x1712, Extend), (0x1715, SpacingMark),
            (0x1716, Other), (0x1732, Extend), (0x1734, SpacingMark), (0x1735, Other),
            (0x1752, Extend), (0x1754, Other), (0x1772, Extend), (0x1774, Other),
            (0x17b4, Extend), (0x17b6, SpacingMark), (0x17b7, Extend), (0x17be, SpacingMark),
            (0x17c6, Extend), (0x17c7, SpacingMark), (0x17c9, Extend), (0x17d4, Other),
            (0x17dd, Extend), (0x17de, Other), (0x180b, Extend), (0x180e, Control),
            (0x180f, Extend), (0x1810, Other), (0x1885, Extend), (0x1887, Other),
            (0x18a9, Extend), (0x18aa, Other), (0x1920, Extend), (0x1923, SpacingMark),
            (0x1927, Extend), (0x1929, SpacingMark), (0x192c, Other), (0x1930, SpacingMark),
            (0x1932, Extend), (0x1933, SpacingMark), (0x1939, Extend), (0x193c, Other),
            (0x1a17, Extend), (0x1a19, SpacingMark), (0x1a1b, Extend), (0x1a1c, Other),
            (0x1a55, SpacingMark), (0x1a56, Extend), (0x1a57, SpacingMark), (0x1a58, Extend),
            (0x1a5f, Other), (0x1a60, Extend), (0x1a61, Other), (0x1a62, Extend),
            (0x1a63, Other), (0x1a65, Extend), (0x1a6d, SpacingMark), (0x1a73, Extend),
            (0x1a7d, Other), (0x1a7f, Extend), (0x1a80, Other), (0x1ab0, Extend),
            (0x1acf, Other), (0x1b00, Extend), (0x1b04, SpacingMark), (0x1b05, Other),
            (0x1b34, Extend), (0x1b3b, SpacingMark), (0x1b3c, Extend), (0x1b3d, SpacingMark),
            (0x1b42, Extend), (0x1b43, SpacingMark), (0x1b45, Other), (0x1b6b, Extend),
            (0x1b74, Other), (0x1b80, Extend), (0x1b82, SpacingMark), (0x1b83, Other),
            (0x1ba1, SpacingMark), (0x1ba2, Extend), (0x1ba6, SpacingMark), (0x1ba8, Extend),
            (0x1baa, SpacingMark), (0x1bab, Extend), (0x1bae, Other), (0x1be6, Extend),
            (0x1be7, SpacingMark), (0x1be8, Extend), (0x1bea, SpacingMark), (0x1bed, Extend),
            (0x1bee, SpacingMark), (0x1bef, Extend), (0x1bf2, SpacingMark), (0x1bf4, Other),
            (0x1c24, SpacingMark), (0x1c2c, Extend), (0x1c34, SpacingMark), (0x1c36, Extend),
            (0x1c38, Other), (0x1cd0, Extend), (0x1cd3, Other), (0x1cd4, Extend),
            (0x1ce1, SpacingMark), (0x1ce2, Extend), (0x1ce9, Other), (0x1ced, Extend),
            (0x1cee, Other), (0x1cf4, Extend), (0x1cf5, Other), (0x1cf7, SpacingMark),
            (0x1cf8, Extend), (0x1cfa, Other), (0x1dc0, Extend), (0x1e00, Other),
            (0x200b, Control), (0x200c, Extend), (0x200d, ZWJ), (0x200e, Control),
            (0x2010, Other), (0x2028, Control), (0x202f, Other), (0x203c, ExtendedPictographic),
            (0x203d, Other), (0x2049, ExtendedPictographic), (0x204a, Other), (0x2060, Control),
            (0x2070, Other), (0x20d0, Extend), (0x20f1, Other), (0x2122, ExtendedPictographic),
            (0x2123, Other), (0x2139, ExtendedPictographic), (0x213a, Other), (0x2194, ExtendedPictographic),
            (0x219a, Other), (0x21a9, ExtendedPictographic), (0x21ab, Other), (0x231a, ExtendedPictographic),
            (0x231c, Other), (0x2328, ExtendedPictographic), (0x2329, Other), (0x2388, ExtendedPictographic),
            (0x2389, Other), (0x23cf, ExtendedPictographic), (0x23d0, Other), (0x23e9, ExtendedPictographic),
            (0x23f4, Other), (0x23f8, ExtendedPictographic), (0x23fb, Other), (0x24c2, ExtendedPictographic),
            (0x24c3, Other), (0x25aa, ExtendedPictographic), (0x25ac, Other), (0x25b6, ExtendedPictographic),
            (0x25b7, Other), (0x25c0, ExtendedPictographic), (0x25c1, Other), (0x25fb, ExtendedPictographic),
            (0x25ff, Other), (0x2600, ExtendedPictographic), (0x2606, Other), (0x2607, ExtendedPictographic),
            (0x2613, Other), (0x2614, ExtendedPictographic), (0x2686, Other), (0x2690, ExtendedPictographic),
            (0x2706, Other), (0x2708, ExtendedPictographic), (0x2713, Other), (0x2714, ExtendedPictographic),
            (0x2715, Other), (0x2716, ExtendedPictographic), (0x2717, Other), (0x271d, ExtendedPictographic),
            (0x271e, Other), (0x2721, ExtendedPictographic), (0x2722, Other), (0x2728, ExtendedPictographic),
            (0x2729, Other), (0x2733, ExtendedPictographic), (0x2735, Other), (0x2744, ExtendedPictographic),
            (0x2745, Other), (0x2747, ExtendedPictographic), (0x2748, Other), (0x274c, ExtendedPictographic),
            (0x274d, Other), (0x274e, ExtendedPictographic), (0x274f, Other), (0x2753, ExtendedPictographic),
            (0x2756, Other), (0x2757, ExtendedPictographic), (0x2758, Other), (0x2763, ExtendedPictographic),
            (0x2768, Other), (0x2795, ExtendedPictographic), (0x2798, Other), (0x27a1, ExtendedPictographic),
            (0x27a2, Other), (0x27b0, ExtendedPictographic), (0x27b1, Other), (0x27bf, ExtendedPictographic),
            (0x27c0, Other), (0x2934, ExtendedPictographic), (0x2936, Other), (0x2b05, ExtendedPictographic),
            (0x2b08, Other), (0x2b1b, ExtendedPictographic), (0x2b1d, Other), (0x2b50, ExtendedPictographic),
            (0x2b51, Other), (0x2b55, ExtendedPictographic), (0x2b56, Other), (0x2cef, Extend),
            (0x2cf2, Other), (0x2d7f, Extend), (0x2d80, Other), (0x2de0, Extend),
            (0x2e00, Other), (0x302a, Extend), (0x3030, ExtendedPictographic), (0x3031, Other),
            (0x303d, ExtendedPictographic), (0x303e, Other), (0x3099, Extend), (0x309b, Other),
            (0x3297, ExtendedPictographic), (0x3298, Other), (0x3299, ExtendedPictographic), (0x329a, Other),
            (0xa66f, Extend), (0xa673, Other), (0xa674, Extend), (0xa67e, Other),
            (0xa69e, Extend), (0xa6a0, Other), (0xa6f0, Extend), (0xa6f2, Other),
            (0xa802, Extend), (0xa803, Other), (0xa806, Extend), (0xa807, Other),
            (0xa80b, Extend), (0xa80c, Other), (0xa823, SpacingMark), (0xa825, Extend),
            (0xa827, SpacingMark), (0xa828, Other), (0xa82c, Extend), (0xa82d, Other),
            (0xa880, SpacingMark), (0xa882, Other), (0xa8b4, SpacingMark), (0xa8c4, Extend),
            (0xa8c6, Other), (0xa8e0, Extend), (0xa8f2, Other), (0xa8ff, Extend),
            (0xa900, Other), (0xa926, Extend), (0xa92e, Other), (0xa947, Extend),
            (0xa952, SpacingMark), (0xa954, Other), (0xa960, L), (0xa97d, Other),
            (0xa980, Extend), (0xa983, SpacingMark), (0xa984, Other), (0xa9b3, Extend),
            (0xa9b4, SpacingMark), (0xa9b6, Extend), (0xa9ba, SpacingMark), (0xa9bc, Extend),
            (0xa9be, SpacingMark), (0xa9c1, Other), (0xa9e5, Extend), (0xa9e6, Other),
            (0xaa29, Extend), (0xaa2f, SpacingMark), (0xaa31, Extend), (0xaa33, SpacingMark),
            (0xaa35, Extend), (0xaa37, Other), (0xaa43, Extend), (0xaa44, Other),
            (0xaa4c, Extend), (0xaa4d, SpacingMark), (0xaa4e, Other), (0xaa7c, Extend),
            (0xaa7d, Other), (0xaab0, Extend), (0xaab1, Other), (0xaab2, Extend),
            (0xaab5, Other), (0xaab7, Extend), (0xaab9, Other), (0xaabe, Extend),
            (0xaac0, Other), (0xaac1, Extend), (0xaac2, Other), (0xaaeb, SpacingMark),
            (0xaaec, Extend), (0xaaee, SpacingMark), (0xaaf0, Other), (0xaaf5, SpacingMark),
            (0xaaf6, Extend), (0xaaf7, Other), (0xabe3, SpacingMark), (0xabe5, Extend),
            (0xabe6, SpacingMark), (0xabe8, Extend), (0xabe9, SpacingMark), (0xabeb, Other),
            (0xabec, SpacingMark), (0xabed, Extend), (0xabee, Other), (0xac00, LV),
            (0xac01, LVT), (0xac1c, LV), (0xac1d, LVT), (0xac38, LV),
            (0xac39, LVT), (0xac54, LV), (0xac55, LVT), (0xac70, LV),
            (0xac71, LVT), (0xac8c, LV), (0xac8d, LVT), (0xaca8, LV),
            (0xaca9, LVT), (0xacc4, LV), (0xacc5, LVT), (0xace0, LV),
            (0xace1, LVT), (0xacfc, LV), (0xacfd, LVT), (0xad18, LV),
            (0xad19, LVT), (0xad34, LV), (0xad35, LVT), (0xad50, LV),
            (0xad51, LVT), (0xad6c, LV), (0xad6d, LVT), (0xad88, LV),
            (0xad89, LVT), (0xada4, LV), (0xada5, LVT), (0xadc0, LV),
            (0xadc1, LVT), (0xaddc, LV), (0xaddd, LVT), (0xadf8, LV),
            (0xadf9, LVT), (0xae14, LV), (0xae15, LVT), (0xae30, LV),
            (0xae31, LVT), (0xae4c, LV), (0xae4d, LVT), (0xae68, LV),
            (0xae69, LVT), (0xae84, LV), (0xae85, LVT), (0xaea0, LV),
            (0xaea1, LVT), (0xaebc, LV), (0xaebd, LVT), (0xaed8, LV),
            (0xaed9, LVT), (0xaef4, LV), (0xaef5, LVT), (0xaf10, LV),
            (0xaf11, LVT), (0xaf2c, LV), (0xaf2d, LVT), (0xaf48, LV),
            (0xaf49, LVT), (0xaf64, LV), (0xaf65, LVT), (0xaf80, LV),
            (0xaf81, LVT), (0xaf9c, LV), (0xaf9d, LVT), (0xafb8, LV),
            (0xafb9, LVT), (0xafd4, LV), (0xafd5, LVT), (0xaff0, LV),
            (0xaff1, LVT), (0xb00c, LV), (0xb00d, LVT), (0xb028, LV),
            (0xb029, LVT), (0xb044, LV), (0xb045, LVT), (0xb060, LV),
            (0xb061, LVT), (0xb07c, LV), (0xb07d, LVT), (0xb098, LV),
            (0xb099, LVT), (0xb0b4, LV), (0xb0b5, LVT), (0xb0d0, LV),
            (0xb0d1, LVT), (0xb0ec, LV), (0xb0ed, LVT), (0xb108, LV),
            (0xb109, LVT), (0xb124, LV), (0xb125, LVT), (0xb140, LV),
            (0xb141, LVT), (0xb15c, LV), (0xb15d, LVT), (0xb178, LV),
            (0xb179, LVT), (0xb194, LV), (0xb195, LVT), (0xb1b0, LV),
            (0xb1b1, LVT), (0xb1cc, LV), (0xb1cd, LVT), (0xb1e8, LV),
            (0xb1e9, LVT), (0xb204, LV), (0xb205, LVT), (0xb220, LV),
            (0xb221, LVT), (0xb23c, LV), (0xb23d, LVT), (0xb258, LV),
            (0xb259, LVT), (0xb274, LV), (0xb275, LVT), (0xb290, LV),
            (0xb291, LVT), (0xb2ac, LV), (0xb2ad, LVT), (0xb2c8, LV),
            (0xb2c9, LVT), (0xb2e4, LV), (0xb2e5, LVT), (0xb300, LV),
            (0xb301, LVT), (0xb31c, LV), (0xb31d, LVT), (0xb338, LV),
            (0xb339, LVT), (0xb354, LV), (0xb355, LVT), (0xb370, LV),
            (0xb371, LVT), (0xb38c, LV), (0xb38d, LVT), (0xb3a8, LV),
            (0xb3a9, LVT), (0xb3c4, LV), (0xb3c5, LVT), (0xb3e0, LV),
            (0xb3e1, LVT), (0xb3fc, LV), (0xb3fd, LVT), (0xb418, LV),
            (0xb419, LVT), (0xb434, LV), (0xb435, LVT), (0xb450, LV),
            (0xb451, LVT), (0xb46c, LV), (0xb46d, LVT), (0xb488, LV),
            (0xb489, LVT), (0xb4a4, LV), (0xb4a5, LVT), (0xb4c0, LV),
            (0xb4c1, LVT), (0xb4dc, LV), (0xb4dd, LVT), (0xb4f8, LV),
            (0xb4f9, LVT), (0xb514, LV), (0xb515, LVT), (0xb530, LV),
            (0xb531, LVT), (0xb54c, LV), (0xb54d, LVT), (0xb568, LV),
            (0xb569, LVT), (0xb584, LV), (0xb585, LVT), (0xb5a0, LV),
            (0xb5a1, LVT), (0xb5bc, LV), (0xb5bd, LVT), (0xb5d8, LV),
            (0xb5d9, LVT), (0xb5f4, LV), (0xb5f5, LVT), (0xb610, LV),
            (0xb611, LVT), (0xb62c, LV), (0xb62d, LVT), (0xb648, LV),
            (0xb649, LVT), (0xb664, LV), (0xb665, LVT), (0xb680, LV),
            (0xb681, LVT), (0xb69c, LV), (0xb69d, LVT), (0xb6b8, LV),
            (0xb6b9, LVT), (0xb6d4, LV), (0xb6d5, LVT), (0xb6f0, LV),
            (0xb6f1, LVT), (0xb70c, LV), (0xb70d, LVT), (0xb728, LV),
            (0xb729, LVT), (0xb744, LV), (0xb745, LVT), (0xb760, LV),
            (0xb761, LVT), (0xb77c, LV), (0xb77d, LVT), (0xb798, LV),
            (0xb799, LVT), (0xb7b4, LV), (0xb7b5, LVT), (0xb7d0, LV),
            (0xb7d1, LVT), (0xb7ec, LV), (0xb7ed, LVT), (0xb808, LV),
            (0xb809, LVT), (0xb824, LV), (0xb825, LVT), (0xb840, LV),
            (0xb841, LVT), (0xb85c, LV), (0xb85d, LVT), (0xb878, LV),
            (0xb879, LVT), (0xb894, LV), (0xb895, LVT), (0xb8b0, LV),
            (0xb8b1, LVT), (0xb8cc, LV), (0xb8cd, LVT), (0xb8e8, LV),
            (0xb8e9, LVT), (0xb904, LV), (0xb905, LVT), (0xb920, LV),
            (0xb921, LVT), (0xb93c, LV), (0xb93d, LVT), (0xb958, LV),
            (0xb959, LVT), (0xb974, LV), (0xb975, LVT), (0xb990, LV),
            (0xb991, LVT), (0xb9ac, LV), (0xb9ad, LVT), (0xb9c8, LV),
            (0xb9c9, LVT), (0xb9e4, LV), (0xb9e5, LVT), (0xba00, LV),
            (0xba01, LVT), (0xba1c, LV), (0xba1d, LVT), (0xba38, LV),
            (0xba39, LVT), (0xba54, LV), (0xba55, LVT), (0xba70, LV),
            (0xba71, LVT), (0xba8c, LV), (0xba8d, LVT), (0xbaa8, LV),
            (0xbaa9, LVT), (0xbac4, LV), (0xbac5, LVT), (0xbae0, LV),
            (0xbae1, LVT), (0xbafc, LV), (0xbafd, LVT), (0xbb18, LV),
            (0xbb19, LVT), (0xbb34, LV), (0xbb35, LVT), (0xbb50, LV),
            (0xbb51, LVT), (0xbb6c, LV), (0xbb6d, LVT), (0xbb88, LV),
            (0xbb89, LVT), (0xbba4, LV), (0xbba5, LVT), (0xbbc0, LV),
            (0xbbc1, LVT), (0xbbdc, LV), (0xbbdd, LVT), (0xbbf8, LV),
            (0xbbf9, LVT), (0xbc14, LV), (0xbc15, LVT), (0xbc30, LV),
            (0xbc31, LVT), (0xbc4c, LV), (0xbc4d, LVT), (0xbc68, LV),
            (0xbc69, LVT), (0xbc84, LV), (0xbc85, LVT), (0xbca0, LV),
            (0xbca1, LVT), (0xbcbc, LV), (0xbcbd, LVT), (0xbcd8, LV),
            (0xbcd9, LVT), (0xbcf4, LV), (0xbcf5, LVT), (0xbd10, LV),
            (0xbd11, LVT), (0xbd2c, LV), (0xbd2d, LVT), (0xbd48, LV),
            (0xbd49, LVT), (0xbd64, LV), (0xbd65, LVT), (0xbd80, LV),
            (0xbd81, LVT), (0xbd9c, LV), (0xbd9d, LVT), (0xbdb8, LV),
            (0xbdb9, LVT), (0xbdd4, LV), (0xbdd5, LVT), (0xbdf0, LV),
            (0xbdf1, LVT), (0xbe0c, LV), (0xbe0d, LVT), (0xbe28, LV),
            (0xbe29, LVT), (0xbe44, LV), (0xbe45, LVT), (0xbe60, LV),
            (0xbe61, LVT), (0xbe7c, LV), (0xbe7d, LVT), (0xbe98, LV),
            (0xbe99, LVT), (0xbeb4, LV), (0xbeb5, LVT), (0xbed0, LV),
            (0xbed1, LVT), (0xbeec, LV), (0xbeed, LVT), (0xbf08, LV),
            (0xbf09, LVT), (0xbf24, LV), (0xbf25, LVT), (0xbf40, LV),
            (0xbf41, LVT), (0xbf5c, LV), (0xbf5d, LVT), (0xbf78, LV),
            (0xbf79, LVT), (0xbf94, LV), (0xbf95, LVT), (0xbfb0, LV),
            (0xbfb1, LVT), (0xbfcc, LV), (0xbfcd, LVT), (0xbfe8, LV),
            (0xbfe9, LVT), (0xc004, LV), (0xc005, LVT), (0xc020, LV),
            (0xc021, LVT), (0xc03c, LV), (0xc03d, LVT), (0xc058, LV),
            (0xc059, LVT), (0xc074, LV), (0xc075, LVT), (0xc090, LV),
            (0xc091, LVT), (0xc0ac, LV), (0xc0ad, LVT), (0xc0c8, LV),
            (0xc0c9, LVT), (0xc0e4, LV), (0xc0e5, LVT), (0xc100, LV),
            (0xc101, LVT), (0xc11c, LV), (0xc11d, LVT), (0xc138, LV),
            (0xc139, LVT), (0xc154, LV), (0xc155, LVT), (0xc170, LV),
            (0xc171, LVT), (0xc18c, LV), (0xc18d, LVT), (0xc1a8, LV),
            (0xc1a9, LVT), (0xc1c4, LV), (0xc1c5, LVT), (0xc1e0, LV),
            (0xc1e1, LVT), (0xc1fc, LV), (0xc1fd, LVT), (0xc218, LV),
            (0xc219, LVT), (0xc234, LV), (0xc235, LVT), (0xc250, LV),
            (0xc251, LVT), (0xc26c, LV), (0xc26d, LVT), (0xc288, LV),
            (0xc289, LVT), (0xc2a4, LV), (0xc2a5, LVT), (0xc2c0, LV),
            (0xc2c1, LVT), (0xc2dc, LV), (0xc2dd, LVT), (0xc2f8, LV),
            (0xc2f9, LVT), (0xc314, LV), (0xc315, LVT), (0xc330, LV),
            (0xc331, LVT), (0xc34c, LV), (0xc34d, LVT), (0xc368, LV),
            (0xc369, LVT), (0xc384, LV), (0xc385, LVT), (0xc3a0, LV),
            (0xc3a1, LVT), (0xc3bc, LV), (0xc3bd, LVT), (0xc3d8, LV),
            (0xc3d9, LVT), (0xc3f4, LV), (0xc3f5, LVT), (0xc410, LV),
            (0xc411, LVT), (0xc42c, LV), (0xc42d, LVT), (0xc448, LV),
            (0xc449, LVT), (0xc464, LV), (0xc465, LVT), (0xc480, LV),
            (0xc481, LVT), (0xc49c, LV), (0xc49d, LVT), (0xc4b8, LV),
            (0xc4b9, LVT), (0xc4d4, LV), (0xc4d5, LVT), (0xc4f0, LV),
            (0xc4f1, LVT), (0xc50c, LV), (0xc50d, LVT), (0xc528, LV),
            (0xc529, LVT), (0xc544, LV), (0xc545, LVT), (0xc560, LV),
            (0xc561, LVT), (0xc57c, LV), (0xc57d, LVT), (0xc598, LV),
            (0xc599, LVT), (0xc5b4, LV), (0xc5b5, LVT), (0xc5d0, LV),
            (0xc5d1, LVT), (0xc5ec, LV), (0xc5ed, LVT), (0xc608, LV),
            (0xc609, LVT), (0xc624, LV), (0xc625, LVT), (0xc640, LV),
            (0xc641, LVT), (0xc65c, LV), (0xc65d, LVT), (0xc678, LV),
            (0xc679, LVT), (0xc694, LV), (0xc695, LVT), (0xc6b0, LV),
            (0xc6b1, LVT), (0xc6cc, LV), (0xc6cd, LVT), (0xc6e8, LV),
            (0xc6e9, LVT), (0xc704, LV), (0xc705, LVT), (0xc720, LV),
            (0xc721, LVT), (0xc73c, LV), (0xc73d, LVT), (0xc758, LV),
            (0xc759, LVT), (0xc774, LV), (0xc775, LVT), (0xc790, LV),
            (0xc791, LVT), (0xc7ac, LV), (0xc7ad, LVT), (0xc7c8, LV),
            (0xc7c9, LVT), (0xc7e4, LV), (0xc7e5, LVT), (0xc800, LV),
            (0xc801, LVT), (0xc81c, LV), (0xc81d, LVT), (0xc838, LV),
            (0xc839, LVT), (0xc854, LV), (0xc855, LVT), (0xc870, LV),
            (0xc871, LVT), (0xc88c, LV), (0xc88d, LVT), (0xc8a8, LV),
            (0xc8a9, LVT), (0xc8c4, LV), (0xc8c5, LVT), (0xc8e0, LV),
            (0xc8e1, LVT), (0xc8fc, LV), (0xc8fd, LVT), (0xc918, LV),
            (0xc919, LVT), (0xc934, LV), (0xc935, LVT), (0xc950, LV),
            (0xc951, LVT), (0xc96c, LV), (0xc96d, LVT), (0xc988, LV),
            (0xc989, LVT), (0xc9a4, LV), (0xc9a5, LVT), (0xc9c0, LV),
            (0xc9c1, LVT), (0xc9dc, LV), (0xc9dd, LVT), (0xc9f8, LV),
            (0xc9f9, LVT), (0xca14, LV), (0xca15, LVT), (0xca30, LV),
            (0xca31, LVT), (0xca4c, LV), (0xca4d, LVT), (0xca68, LV),
            (0xca69, LVT), (0xca84, LV), (0xca85, LVT), (0xcaa0, LV),
            (0xcaa1, LVT), (0xcabc, LV), (0xcabd, LVT), (0xcad8, LV),
            (0xcad9, LVT), (0xcaf4, LV), (0xcaf5, LVT), (0xcb10, LV),
            (0xcb11, LVT), (0xcb2c, LV), (0xcb2d, LVT), (0xcb48, LV),
            (0xcb49, LVT), (0xcb64, LV), (0xcb65, LVT), (0xcb80, LV),
            (0xcb81, LVT), (0xcb9c, LV), (0xcb9d, LVT), (0xcbb8, LV),
            (0xcbb9, LVT), (0xcbd4, LV), (0xcbd5, LVT), (0xcbf0, LV),
            (0xcbf1, LVT), (0xcc0c, LV), (0xcc0d, LVT), (0xcc28, LV),
            (0xcc29, LVT), (0xcc44, LV), (0xcc45, LVT), (0xcc60, LV),
            (0xcc61, LVT), (0xcc7c, LV), (0xcc7d, LVT), (0xcc98, LV),
            (0xcc99, LVT), (0xccb4, LV), (0xccb5, LVT), (0xccd0, LV),
            (0xccd1, LVT), (0xccec, LV), (0xcced, LVT), (0xcd08, LV),
            (0xcd09, LVT), (0xcd24, LV), (0xcd25, LVT), (0xcd40, LV),
            (0xcd41, LVT), (0xcd5c, LV), (0xcd5d, LVT), (0xcd78, LV),
            (0xcd79, LVT), (0xcd94, LV), (0xcd95, LVT), (0xcdb0, LV),
            (0xcdb1, LVT), (0xcdcc, LV), (0xcdcd, LVT), (0xcde8, LV),
            (0xcde9, LVT), (0xce04, LV), (0xce05, LVT), (0xce20, LV),
            (0xce21, LVT), (0xce3c, LV), (0xce3d, LVT), (0xce58, LV),
            (0xce59, LVT), (0xce74, LV), (0xce75, LVT), (0xce90, LV),
            (0xce91, LVT), (0xceac, LV), (0xcead, LVT), (0xcec8, LV),
            (0xcec9, LVT), (0xcee4, LV), (0xcee5, LVT), (0xcf00, LV),
            (0xcf01, LVT), (0xcf1c, LV), (0xcf1d, LVT), (0xcf38, LV),
            (0xcf39, LVT), (0xcf54, LV), (0xcf55, LVT), (0xcf70, LV),
            (0xcf71, LVT), (0xcf8c, LV), (0xcf8d, LVT), (0xcfa8, LV),
            (0xcfa9, LVT), (0xcfc4, LV), (0xcfc5, LVT), (0xcfe0, LV),
            (0xcfe1, LVT), (0xcffc, LV), (0xcffd, LVT), (0xd018, LV),
            (0xd019, LVT), (0xd034, LV), (0xd035, LVT), (0xd050, LV),
            (0xd051, LVT), (0xd06c, LV), (0xd06d, LVT), (0xd088, LV),
            (0xd089, LVT), (0xd0a4, LV), (0xd0a5, LVT), (0xd0c0, LV),
            (0xd0c1, LVT), (0xd0dc, LV), (0xd0dd, LVT), (0xd0f8, LV),
            (0xd0f9, LVT), (0xd114, LV), (0xd115, LVT), (0xd130, LV),
            (0xd131, LVT), (0xd14c, LV), (0xd14d, LVT), (0xd168, LV),
            (0xd169, LVT), (0xd184, LV), (0xd185, LVT), (0xd1a0, LV),
            (0xd1a1, LVT), (0xd1bc, LV), (0xd1bd, LVT), (0xd1d8, LV),
            (0xd1d9, LVT), (0xd1f4, LV), (0xd1f5, LVT), (0xd210, LV),
            (0xd211, LVT), (0xd22c, LV), (0xd22d, LVT), (0xd248, LV),
            (0xd249, LVT), (0xd264, LV), (0xd265, LVT), (0xd280, LV),
            (0xd281, LVT), (0xd29c, LV), (0xd29d, LVT), (0xd2b8, LV),
            (0xd2b9, LVT), (0xd2d4, LV), (0xd2d5, LVT), (0xd2f0, LV),
            (0xd2f1, LVT), (0xd30c, LV), (0xd30d, LVT), (0xd328, LV),
            (0xd329, LVT), (0xd344, LV), (0xd345, LVT), (0xd360, LV),
            (0xd361, LVT), (0xd37c, LV), (0xd37d, LVT), (0xd398, LV),
            (0xd399, LVT), (0xd3b4, LV), (0xd3b5, LVT), (0xd3d0, LV),
            (0xd3d1, LVT), (0xd3ec, LV), (0xd3ed, LVT), (0xd408, LV),
            (0xd409, LVT), (0xd424, LV), (0xd425, LVT), (0xd440, LV),
            (0xd441, LVT), (0xd45c, LV), (0xd45d, LVT), (0xd478, LV),
            (0xd479, LVT), (0xd494, LV), (0xd495, LVT), (0xd4b0, LV),
            (0xd4b1, LVT), (0xd4cc, LV), (0xd4cd, LVT), (0xd4e8, LV),
            (0xd4e9, LVT), (0xd504, LV), (0xd505, LVT), (0xd520, LV),
            (0xd521, LVT), (0xd53c, LV), (0xd53d, LVT), (0xd558, LV),
            (0xd559, LVT), (0xd574, LV), (0xd575, LVT), (0xd590, LV),
            (0xd591, LVT), (0xd5ac, LV), (0xd5ad, LVT), (0xd5c8, LV),
            (0xd5c9, LVT), (0xd5e4, LV), (0xd5e5, LVT), (0xd600, LV),
            (0xd601, LVT), (0xd61c, LV), (0xd61d, LVT), (0xd638, LV),
            (0xd639, LVT), (0xd654, LV), (0xd655, LVT), (0xd670, LV),
            (0xd671, LVT), (0xd68c, LV), (0xd68d, LVT), (0xd6a8, LV),
            (0xd6a9, LVT), (0xd6c4, LV), (0xd6c5, LVT), (0xd6e0, LV),
            (0xd6e1, LVT), (0xd6fc, LV), (0xd6fd, LVT), (0xd718, LV),
            (0xd719, LVT), (0xd734, LV), (0xd735, LVT), (0xd750, LV),
            (0xd751, LVT), (0xd76c, LV), (0xd76d, LVT), (0xd788, LV),
            (0xd789, LVT), (0xd7a4, Other), (0xd7b0, V), (0xd7c7, Other),
            (0xd7cb, T), (0xd7fc, Other), (0xfb1e, Extend), (0xfb1f, Other),
            (0xfe00, Extend), (0xfe10, Other), (0xfe20, Extend), (0xfe30, Other),
            (0xfeff, Control), (0xff00, Other), (0xff9e, Extend), (0xffa0, Other),
            (0xfff0, Control), (0xfffc, Other), (0x101fd, Extend), (0x101fe, Other),
            (0x102e0, Extend), (0x102e1, Other), (0x10376, Extend), (0x1037b, Other),
            (0x10a01, Extend), (0x10a04, Other), (0x10a05, Extend), (0x10a07, Other),
            (0x10a0c, Extend), (0x10a10, Other), (0x10a38, Extend), (0x10a3b, Other),
            (0x10a3f, Extend), (0x10a40, Other), (0x10ae5, Extend), (0x10ae7, Other),
            (0x10d24, Extend), (0x10d28, Other), (0x10eab, Extend), (0x10ead, Other),
            (0x10f46, Extend), (0x10f51, Other), (0x10f82, Extend), (0x10f86, Other),
            (0x11000, SpacingMark), (0x11001, Extend), (0x11002, SpacingMark), (0x11003, Other),
            (0x11038, Extend), (0x11047, Other), (0x11070, Extend), (0x11071, Other),
            (0x11073, Extend), (0x11075, Other), (0x1107f, Extend), (0x11082, SpacingMark),
            (0x11083, Other), (0x110b0, SpacingMark), (0x110b3, Extend), (0x110b7, SpacingMark),
            (0x110b9, Extend), (0x110bb, Other), (0x110bd, Prepend), (0x110be, Other),
            (0x110c2, Extend), (0x110c3, Other), (0x110cd, Prepend), (0x110ce, Other),
            (0x11100, Extend), (0x11103, Other), (0x11127, Extend), (0x1112c, SpacingMark),
            (0x1112d, Extend), (0x11135, Other), (0x11145, SpacingMark), (0x11147, Other),
            (0x11173, Extend), (0x11174, Other), (0x11180, Extend), (0x11182, SpacingMark),
            (0x11183, Other), (0x111b3, SpacingMark), (0x111b6, Extend), (0x111bf, SpacingMark),
            (0x111c1, Other), (0x111c2, Prepend), (0x111c4, Other), (0x111c9, Extend),
            (0x111cd, Other), (0x111ce, SpacingMark), (0x111cf, Extend), (0x111d0, Other),
            (0x1122c, SpacingMark), (0x1122f, Extend), (0x11232, SpacingMark), (0x11234, Extend),
            (0x11235, SpacingMark), (0x11236, Extend), (0x11238, Other), (0x1123e, Extend),
            (0x1123f, Other), (0x112df, Extend), (0x112e0, SpacingMark), (0x112e3, Extend),
            (0x112eb, Other), (0x11300, Extend), (0x11302, SpacingMark), (0x11304, Other),
            (0x1133b, Extend), (0x1133d, Other), (0x1133e, Extend), (0x1133f, SpacingMark),
            (0x11340, Extend), (0x11341, SpacingMark), (0x11345, Other), (0x11347, SpacingMark),
            (0x11349, Other), (0x1134b, SpacingMark), (0x1134e, Other), (0x11357, Extend),
            (0x11358, Other), (0x11362, SpacingMark), (0x11364, Other), (0x11366, Extend),
            (0x1136d, Other), (0x11370, Extend), (0x11375, Other), (0x11435, SpacingMark),
            (0x11438, Extend), (0x11440, SpacingMark), (0x11442, Extend), (0x11445, SpacingMark),
            (0x11446, Extend), (0x11447, Other), (0x1145e, Extend), (0x1145f, Other),
            (0x114b0, Extend), (0x114b1, SpacingMark), (0x114b3, Extend), (0x114b9, SpacingMark),
            (0x114ba, Extend), (0x114bb, SpacingMark), (0x114bd, Extend), (0x114be, SpacingMark),
            (0x114bf, Extend), (0x114c1, SpacingMark), (0x114c2, Extend), (0x114c4, Other),
            (0x115af, Extend), (0x115b0, SpacingMark), (0x115b2, Extend), (0x115b6, Other),
            (0x115b8, SpacingMark), (0x115bc, Extend), (0x115be, SpacingMark), (0x115bf, Extend),
            (0x115c1, Other), (0x115dc, Extend), (0x115de, Other), (0x11630, SpacingMark),
            (0x11633, Extend), (0x1163b, SpacingMark), (0x1163d, Extend), (0x1163e, SpacingMark),
            (0x1163f, Extend), (0x11641, Other), (0x116ab, Extend), (0x116ac, SpacingMark),
            (0x116ad, Extend), (0x116ae, SpacingMark), (0x116b0, Extend), (0x116b6, SpacingMark),
            (0x116b7, Extend), (0x116b8, Other), (0x1171d, Extend), (0x11720, Other),
            (0x11722, Extend), (0x11726, SpacingMark), (0x11727, Extend), (0x1172c, Other),
            (0x1182c, SpacingMark), (0x1182f, Extend), (0x11838, SpacingMark), (0x11839, Extend),
            (0x1183b, Other), (0x11930, Extend), (0x11931, SpacingMark), (0x11936, Other),
            (0x11937, SpacingMark), (0x11939, Other), (0x1193b, Extend), (0x1193d, SpacingMark),
            (0x1193e, Extend), (0x1193f, Prepend), (0x11940, SpacingMark), (0x11941, Prepend),
            (0x11942, SpacingMark), (0x11943, Extend), (0x11944, Other), (0x119d1, SpacingMark),
            (0x119d4, Extend), (0x119d8, Other), (0x119da, Extend), (0x119dc, SpacingMark),
            (0x119e0, Extend), (0x119e1, Other), (0x119e4, SpacingMark), (0x119e5, Other),
            (0x11a01, Extend), (0x11a0b, Other), (0x11a33, Extend), (0x11a39, SpacingMark),
            (0x11a3a, Prepend), (0x11a3b, Extend), (0x11a3f, Other), (0x11a47, Extend),
            (0x11a48, Other), (0x11a51, Extend), (0x11a57, SpacingMark), (0x11a59, Extend),
            (0x11a5c, Other), (0x11a84, Prepend), (0x11a8a, Extend), (0x11a97, SpacingMark),
            (0x11a98, Extend), (0x11a9a, Other), (0x11c2f, SpacingMark), (0x11c30, Extend),
            (0x11c37, Other), (0x11c38, Extend), (0x11c3e, SpacingMark), (0x11c3f, Extend),
            (0x11c40, Other), (0x11c92, Extend), (0x11ca8, Other), (0x11ca9, SpacingMark),
            (0x11caa, Extend), (0x11cb1, SpacingMark), (0x11cb2, Extend), (0x11cb4, SpacingMark),
            (0x11cb5, Extend), (0x11cb7, Other), (0x11d31, Extend), (0x11d37, Other),
            (0x11d3a, Extend), (0x11d3b, Other), (0x11d3c, Extend), (0x11d3e, Other),
            (0x11d3f, Extend), (0x11d46, Prepend), (0x11d47, Extend), (0x11d48, Other),
            (0x11d8a, SpacingMark), (0x11d8f, Other), (0x11d90, Extend), (0x11d92, Other),
            (0x11d93, SpacingMark), (0x11d95, Extend), (0x11d96, SpacingMark), (0x11d97, Extend),
            (0x11d98, Other), (0x11ef3, Extend), (0x11ef5, SpacingMark), (0x11ef7, Other),
            (0x13430, Control), (0x13439, Other), (0x16af0, Extend), (0x16af5, Other),
            (0x16b30, Extend), (0x16b37, Other), (0x16f4f, Extend), (0x16f50, Other),
            (0x16f51, SpacingMark), (0x16f88, Other), (0x16f8f, Extend), (0x16f93, Other),
            (0x16fe4, Extend), (0x16fe5, Other), (0x16ff0, SpacingMark), (0x16ff2, Other),
            (0x1bc9d, Extend), (0x1bc9f, Other), (0x1bca0, Control), (0x1bca4, Other),
            (0x1cf00, Extend), (0x1cf2e, Other), (0x1cf30, Extend), (0x1cf47, Other),
            (0x1d165, Extend), (0x1d166, SpacingMark), (0x1d167, Extend), (0x1d16a, Other),
            (0x1d16d, SpacingMark), (0x1d16e, Extend), (0x1d173, Control), (0x1d17b, Extend),
            (0x1d183, Other), (0x1d185, Extend), (0x1d18c, Other), (0x1d1aa, Extend),
            (0x1d1ae, Other), (0x1d242, Extend), (0x1d245, Other), (0x1da00, Extend),
            (0x1da37, Other), (0x1da3b, Extend), (0x1da6d, Other), (0x1da75, Extend),
            (0x1da76, Other), (0x1da84, Extend), (0x1da85, Other), (0x1da9b, Extend),
            (0x1daa0, Other), (0x1daa1, Extend), (0x1dab0, Other), (0x1e000, Extend),
            (0x1e007, Other), (0x1e008, Extend), (0x1e019, Other), (0x1e01b, Extend),
            (0x1e022, Other), (0x1e023, Extend), (0x1e025, Other), (0x1e026, Extend),
            (0x1e02b, Other), (0x1e130, Extend), (0x1e137, Other), (0x1e2ae, Extend),
            (0x1e2af, Other), (0x1e2ec, Extend), (0x1e2f0, Other), (0x1e8d0, Extend),
            (0x1e8d7, Other), (0x1e944, Extend), (0x1e94b, Other), (0x1f000, ExtendedPictographic),
            (0x1f100, Other), (0x1f10d, ExtendedPictographic), (0x1f110, Other), (0x1f12f, ExtendedPictographic),
            (0x1f130, Other), (0x1f16c, ExtendedPictographic), (0x1f172, Other), (0x1f17e, ExtendedPictographic),
            (0x1f180, Other), (0x1f18e, ExtendedPictographic), (0x1f18f, Other), (0x1f191, ExtendedPictographic),
            (0x1f19b, Other), (0x1f1ad, ExtendedPictographic), (0x1f1e6, RegionalIndicator), (0x1f200, Other),
            (0x1f201, ExtendedPictographic), (0x1f210, Other), (0x1f21a, ExtendedPictographic), (0x1f21b, Other),
            (0x1f22f, ExtendedPictographic), (0x1f230, Other), (0x1f232, ExtendedPictographic), (0x1f23b, Other),
            (0x1f23c, ExtendedPictographic), (0x1f240, Other), (0x1f249, ExtendedPictographic), (0x1f3fb, Extend),
            (0x1f400, ExtendedPictographic), (0x1f53e, Other), (0x1f546, ExtendedPictographic), (0x1f650, Other),
            (0x1f680, ExtendedPictographic), (0x1f700, Other), (0x1f774, ExtendedPictographic), (0x1f780, Other),
            (0x1f7d5, ExtendedPictographic), (0x1f800, Other), (0x1f80c, ExtendedPictographic), (0x1f810, Other),
            (0x1f848, ExtendedPictographic), (0x1f850, Other), (0x1f85a, ExtendedPictographic), (0x1f860, Other),
            (0x1f888, ExtendedPictographic), (0x1f890, Other), (0x1f8ae, ExtendedPictographic), (0x1f900, Other),
            (0x1f90c, ExtendedPictographic), (0x1f93b, Other), (0x1f93c, ExtendedPictographic), (0x1f946, Other),
            (0x1f947, ExtendedPictographic), (0x1fb00, Other), (0x1fc00, ExtendedPictographic), (0x1fffe, Other),
            (0xe0000, Control), (0xe0020, Extend), (0xe0080, Control), (0xe0100, Extend),
            (0xe01f0, Control), (0xe1000, Other),
        ],
        Other,
    );
}

pub(crate) mod word {
    use super::WordBreak::{self, *};
    use crate::table::SparseTable;

    pub(crate) static TABLE: SparseTable<WordBreak> = SparseTable::from_static(
        &[
            (0x0, Other), (0xa, LF), (0xb, Newline), (0xd, CR),
            (0xe, Other), (0x20, WSegSpace), (0x21, Other), (0x22, DoubleQuote),
            (0x23, Other), (0x27, SingleQuote), (0x28, Other), (0x2c, MidNum),
            (0x2d, Other), (0x2e, MidNumLet), (0x2f, Other), (0x30, Numeric),
            (0x3a, MidLetter), (0x3b, MidNum), (0x3c, Other), (0x41, ALetter),
            (0x5b, Other), (0x5f, ExtendNumLet), (0x60, Other), (0x61, ALetter),
            (0x7b, Other), (0x85, Newline), (0x86, Other), (0xa9, ExtendedPictographic),
            (0xaa, ALetter), (0xab, Other), (0xad, Format), (0xae, ExtendedPictographic),
            (0xaf, Other), (0xb5, ALetter), (0xb6, Other), (0xb7, MidLetter),
            (0xb8, Other), (0xba, ALetter), (0xbb, Other), (0xc0, ALetter),
            (0xd7, Other), (0xd8, ALetter), (0xf7, Other), (0xf8, ALetter),
            (0x2d8, Other), (0x2de, ALetter), (0x300, Extend), (0x370, ALetter),
            (0x375, Other), (0x376, ALetter), (0x378, Other), (0x37a, ALetter),
            (0x37e, MidNum), (0x37f, ALetter), (0x380, Other), (0x386, ALetter),
            (0x387, MidLetter), (0x388, ALetter), (0x38b, Other), (0x38c, ALetter),
            (0x38d, Other), (0x38e, ALetter), (0x3a2, Other), (0x3a3, ALetter),
            (0x3f6, Other), (0x3f7, ALetter), (0x482, Other), (0x483, Extend),
            (0x48a, ALetter), (0x530, Other), (0x531, ALetter), (0x557, Other),
            (0x559, ALetter), (0x55d, Other), (0x55e, ALetter), (0x55f, MidLetter),
            (0x560, ALetter), (0x589, MidNum), (0x58a, ALetter), (0x58b, Other),
            (0x591, Extend), (0x5be, Other), (0x5bf, Extend), (0x5c0, Other),
            (0x5c1, Extend), (0x5c3, Other), (0x5c4, Extend), (0x5c6, Other),
            (0x5c7, Extend), (0x5c8, Other), (0x5d0, HebrewLetter), (0x5eb, Other),
            (0x5ef, HebrewLetter), (0x5f3, ALetter), (0x5f4, MidLetter), (0x5f5, Other),
            (0x600, Format), (0x606, Other), (0x60c, MidNum), (0x60e, Other),
            (0x610, Extend), (0x61b, Other), (0x61c, Format), (0x61d, Other),
            (0x620, ALetter), (0x64b, Extend), (0x660, Numeric), (0x66a, Other),
            (0x66b, Numeric), (0x66c, MidNum), (0x66d, Other), (0x66e, ALetter),
            (0x670, Extend), (0x671, ALetter), (0x6d4, Other), (0x6d5, ALetter),
            (0x6d6, Extend), (0x6dd, Format), (0x6de, Other), (0x6df, Extend),
            (0x6e5, ALetter), (0x6e7, Extend), (0x6e9, Other), (0x6ea, Extend),
            (0x6ee, ALetter), (0x6f0, Numeric), (0x6fa, ALetter), (0x6fd, Other),
            (0x6ff, ALetter), (0x700, Other), (0x70f, Format), (0x710, ALetter),
            (0x711, Extend), (0x712, ALetter), (0x730, Extend), (0x74b, Other),
            (0x74d, ALetter), (0x7a6, Extend), (0x7b1, ALetter), (0x7b2, Other),
            (0x7c0, Numeric), (0x7ca, ALetter), (0x7eb, Extend), (0x7f4, ALetter),
            (0x7f6, Other), (0x7f8, MidNum), (0x7f9, Other), (0x7fa, ALetter),
            (0x7fb, Other), (0x7fd, Extend), (0x7fe, Other), (0x800, ALetter),
            (0x816, Extend), (0x81a, ALetter), (0x81b, Extend), (0x824, ALetter),
            (0x825, Extend), (0x828, ALetter), (0x829, Extend), (0x82e, Other),
            (0x840, ALetter), (0x859, Extend), (0x85c, Other), (0x860, ALetter),
            (0x86b, Other), (0x870, ALetter), (0x888, Other), (0x889, ALetter),
            (0x88f, Other), (0x890, Format), (0x892, Other), (0x898, Extend),
            (0x8a0, ALetter), (0x8ca, Extend), (0x8e2, Format), (0x8e3, Extend),
            (0x904, ALetter), (0x93a, Extend), (0x93d, ALetter), (0x93e, Extend),
            (0x950, ALetter), (0x951, Extend), (0x958, ALetter), (0x962, Extend),
            (0x964, Other), (0x966, Numeric), (0x970, Other), (0x971, ALetter),
            (0x981, Extend), (0x984, Other), (0x985, ALetter), (0x98d, Other),
            (0x98f, ALetter), (0x991, Other), (0x993, ALetter), (0x9a9, Other),
            (0x9aa, ALetter), (0x9b1, Other), (0x9b2, ALetter), (0x9b3, Other),
            (0x9b6, ALetter), (0x9ba, Other), (0x9bc, Extend), (0x9bd, ALetter),
            (0x9be, Extend), (0x9c5, Other), (0x9c7, Extend), (0x9c9, Other),
            (0x9cb, Extend), (0x9ce, ALetter), (0x9cf, Other), (0x9d7, Extend),
            (0x9d8, Other), (0x9dc, ALetter), (0x9de, Other), (0x9df, ALetter),
            (0x9e2, Extend), (0x9e4, Other), (0x9e6, Numeric), (0x9f0, ALetter),
            (0x9f2, Other), (0x9fc, ALetter), (0x9fd, Other), (0x9fe, Extend),
            (0x9ff, Other), (0xa01, Extend), (0xa04, Other), (0xa05, ALetter),
            (0xa0b, Other), (0xa0f, ALetter), (0xa11, Other), (0xa13, ALetter),
            (0xa29, Other), (0xa2a, ALetter), (0xa31, Other), (0xa32, ALetter),
            (0xa34, Other), (0xa35, ALetter), (0xa37, Other), (0xa38, ALetter),
            (0xa3a, Other), (0xa3c, Extend), (0xa3d, Other), (0xa3e, Extend),
            (0xa43, Other), (0xa47, Extend), (0xa49, Other), (0xa4b, Extend),
            (0xa4e, Other), (0xa51, Extend), (0xa52, Other), (0xa59, ALetter),
            (0xa5d, Other), (0xa5e, ALetter), (0xa5f, Other), (0xa66, Numeric),
            (0xa70, Extend), (0xa72, ALetter), (0xa75, Extend), (0xa76, Other),
            (0xa81, Extend), (0xa84, Other), (0xa85, ALetter), (0xa8e, Other),
            (0xa8f, ALetter), (0xa92, Other), (0xa93, ALetter), (0xaa9, Other),
            (0xaaa, ALetter), (0xab1, Other), (0xab2, ALetter), (0xab4, Other),
            (0xab5, ALetter), (0xaba, Other), (0xabc, Extend), (0xabd, ALetter),
            (0xabe, Extend), (0xac6, Other), (0xac7, Extend), (0xaca, Other),
            (0xacb, Extend), (0xace, Other), (0xad0, ALetter), (0xad1, Other),
            (0xae0, ALetter), (0xae2, Extend), (0xae4, Other), (0xae6, Numeric),
            (0xaf0, Other), (0xaf9, ALetter), (0xafa, Extend), (0xb00, Other),
            (0xb01, Extend), (0xb04, Other), (0xb05, ALetter), (0xb0d, Other),
            (0xb0f, ALetter), (0xb11, Other), (0xb13, ALetter), (0xb29, Other),
            (0xb2a, ALetter), (0xb31, Other), (0xb32, ALetter), (0xb34, Other),
            (0xb35, ALetter), (0xb3a, Other), (0xb3c, Extend), (0xb3d, ALetter),
            (0xb3e, Extend), (0xb45, Other), (0xb47, Extend), (0xb49, Other),
            (0xb4b, Extend), (0xb4e, Other), (0xb55, Extend), (0xb58, Other),
            (0xb5c, ALetter), (0xb5e, Other), (0xb5f, ALetter), (0xb62, Extend),
            (0xb64, Other), (0xb66, Numeric), (0xb70, Other), (0xb71, ALetter),
            (0xb72, Other), (0xb82, Extend), (0xb83, ALetter), (0xb84, Other),
            (0xb85, ALetter), (0xb8b, Other), (0xb8e, ALetter), (0xb91, Other),
            (0xb92, ALetter), (0xb96, Other), (0xb99, ALetter), (0xb9b, Other),
            (0xb9c, ALetter), (0xb9d, Other), (0xb9e, ALetter), (0xba0, Other),
            (0xba3, ALetter), (0xba5, Other), (0xba8, ALetter), (0xbab, Other),
            (0xbae, ALetter), (0xbba, Other), (0xbbe, Extend), (0xbc3, Other),
            (0xbc6, Extend), (0xbc9, Other), (0xbca, Extend), (0xbce, Other),
            (0xbd0, ALetter), (0xbd1, Other), (0xbd7, Extend), (0xbd8, Other),
            (0xbe6, Numeric), (0xbf0, Other), (0xc00, Extend), (0xc05, ALetter),
            (0xc0d, Other), (0xc0e, ALetter), (0xc11, Other), (0xc12, ALetter),
            (0xc29, Other), (0xc2a, ALetter), (0xc3a, Other), (0xc3c, Extend),
            (0xc3d, ALetter), (0xc3e, Extend), (0xc45, Other), (0xc46, Extend),
            (0xc49, Other), (0xc4a, Extend), (0xc4e, Other), (0xc55, Extend),
            (0xc57, Other), (0xc58, ALetter), (0xc5b, Other), (0xc5d, ALetter),
            (0xc5e, Other), (0xc60, ALetter), (0xc62, Extend), (0xc64, Other),
            (0xc66, Numeric), (0xc70, Other), (0xc80, ALetter), (0xc81, Extend),
            (0xc84, Other), (0xc85, ALetter), (0xc8d, Other), (0xc8e, ALetter),
            (0xc91, Other), (0xc92, ALetter), (0xca9, Other), (0xcaa, ALetter),
            (0xcb4, Other), (0xcb5, ALetter), (0xcba, Other), (0xcbc, Extend),
            (0xcbd, ALetter), (0xcbe, Extend), (0xcc5, Other), (0xcc6, Extend),
            (0xcc9, Other), (0xcca, Extend), (0xcce, Other), (0xcd5, Extend),
            (0xcd7, Other), (0xcdd, ALetter), (0xcdf, Other), (0xce0, ALetter),
            (0xce2, Extend), (0xce4, Other), (0xce6, Numeric), (0xcf0, Other),
            (0xcf1, ALetter), (0xcf3, Other), (0xd00, Extend), (0xd04, ALetter),
            (0xd0d, Other), (0xd0e, ALetter), (0xd11, Other), (0xd12, ALetter),
            (0xd3b, Extend), (0xd3d, ALetter), (0xd3e, Extend), (0xd45, Other),
            (0xd46, Extend), (0xd49, Other), (0xd4a, Extend), (0xd4e, ALetter),
            (0xd4f, Other), (0xd54, ALetter), (0xd57, Extend), (0xd58, Other),
            (0xd5f, ALetter), (0xd62, Extend), (0xd64, Other), (0xd66, Numeric),
            (0xd70, Other), (0xd7a, ALetter), (0xd80, Other), (0xd81, Extend),
            (0xd84, Other), (0xd85, ALetter), (0xd97, Other), (0xd9a, ALetter),
            (0xdb2, Other), (0xdb3, ALetter), (0xdbc, Other), (0xdbd, ALetter),
            (0xdbe, Other), (0xdc0, ALetter), (0xdc7, Other), (0xdca, Extend),
            (0xdcb, Other), (0xdcf, Extend), (0xdd5, Other), (0xdd6, Extend),
            (0xdd7, Other), (0xdd8, Extend), (0xde0, Other), (0xde6, Numeric),
            (0xdf0, Other), (0xdf2, Extend), (0xdf4, Other), (0xe31, Extend),
            (0xe32, Other), (0xe34, Extend), (0xe3b, Other), (0xe47, Extend),
            (0xe4f, Other), (0xe50, Numeric), (0xe5a, Other), (0xeb1, Extend),
            (0xeb2, Other), (0xeb4, Extend), (0xebd, Other), (0xec8, Extend),
            (0xece, Other), (0xed0, Numeric), (0xeda, Other), (0xf00, ALetter),
            (0xf01, Other), (0xf18, Extend), (0xf1a, Other), (0xf20, Numeric),
            (0xf2a, Other), (0xf35, Extend), (0xf36, Other), (0xf37, Extend),
            (0xf38, Other), (0xf39, Extend), (0xf3a, Other), (0xf3e, Extend),
            (0xf40, ALetter), (0xf48, Other), (0xf49, ALetter), (0xf6d, Other),
            (0xf71, Extend), (0xf85, Other), (0xf86, Extend), (0xf88, ALetter),
            (0xf8d, Extend), (0xf98, Other), (0xf99, Extend), (0xfbd, Other),
            (0xfc6, Extend), (0xfc7, Other), (0x102b, Extend), (0x103f, Other),
            (0x1040, Numeric), (0x104a, Other), (0x1056, Extend), (0x105a, Other),
            (0x105e, Extend), (0x1061, Other), (0x1062, Extend), (0x1065, Other),
            (0x1067, Extend), (0x106e, Other), (0x1071, Extend), (0x1075, Other),
            (0x1082, Extend), (0x108e, Other), (0x108f, Extend), (0x1090, Numeric),
            (0x109a, Extend), (0x109e, Other), (0x10a0, ALetter), (0x10c6, Other),
            (0x10c7, ALetter), (0x10c8, Other), (0x10cd, ALetter), (0x10ce, Other),
            (0x10d0, ALetter), (0x10fb, Other), (0x10fc, ALetter), (0x1249, Other),
            (0x124a, ALetter), (0x124e, Other), (0x1250, ALetter), (0x1257, Other),
            (0x1258, ALetter), (0x1259, Other), (0x125a, ALetter), (0x125e, Other),
            (0x1260, ALetter), (0x1289, Other), (0x128a, ALetter), (0x128e, Other),
            (0x1290, ALetter), (0x12b1, Other), (0x12b2, ALetter), (0x12b6, Other),
            (0x12b8, ALetter), (0x12bf, Other), (0x12c0, ALetter), (0x12c1, Other),
            (0x12c2, ALetter), (0x12c6, Other), (0x12c8, ALetter), (0x12d7, Other),
            (0x12d8, ALetter), (0x1311, Other), (0x1312, ALetter), (0x1316, Other),
            (0x1318, ALetter), (0x135b, Other), (0x135d, Extend), (0x1360, Other),
            (0x1380, ALetter), (0x1390, Other), (0x13a0, ALetter), (0x13f6, Other),
            (0x13f8, ALetter), (0x13fe, Other), (0x1401, ALetter), (0x166d, Other),
            (0x166f, ALetter), (0x1680, WSegSpace), (0x1681, ALetter), (0x169b, Other),
            (0x16a0, ALetter), (0x16eb, Other), (0x16ee, ALetter), (0x16f9, Other),
            (0x1700, ALetter), (0x1712, Extend), (0x1716, Other), (0x171f, ALetter),
            (0x1732, Extend), (0x1735, Other), (0x1740, ALetter), (0x1752, Extend),
            (0x1754, Other), (0x1760, ALetter), (0x176d, Other), (0x176e, ALetter),
            (0x1771, Other), (0x1772, Extend), (0x1774, Other), (0x17b4, Extend),
            (0x17d4, Other), (0x17dd, Extend), (0x17de, Other), (0x17e0, Numeric),
            (0x17ea, Other), (0x180b, Extend), (0x180e, Format), (0x180f, Extend),
            (0x1810, Numeric), (0x181a, Other), (0x1820, ALetter), (0x1879, Other),
            (0x1880, ALetter), (0x1885, Extend), (0x1887, ALetter), (0x18a9, Extend),
            (0x18aa, ALetter), (0x18ab, Other), (0x18b0, ALetter), (0x18f6, Other),
            (0x1900, ALetter), (0x191f, Other), (0x1920, Extend), (0x192c, Other),
            (0x1930, Extend), (0x193c, Other), (0x1946, Numeric), (0x1950, Other),
            (0x19d0, Numeric), (0x19da, Other), (0x1a00, ALetter), (0x1a17, Extend),
            (0x1a1c, Other), (0x1a55, Extend), (0x1a5f, Other), (0x1a60, Extend),
            (0x1a7d, Other), (0x1a7f, Extend), (0x1a80, Numeric), (0x1a8a, Other),
            (0x1a90, Numeric), (0x1a9a, Other), (0x1ab0, Extend), (0x1acf, Other),
            (0x1b00, Extend), (0x1b05, ALetter), (0x1b34, Extend), (0x1b45, ALetter),
            (0x1b4d, Other), (0x1b50, Numeric), (0x1b5a, Other), (0x1b6b, Extend),
            (0x1b74, Other), (0x1b80, Extend), (0x1b83, ALetter), (0x1ba1, Extend),
            (0x1bae, ALetter), (0x1bb0, Numeric), (0x1bba, ALetter), (0x1be6, Extend),
            (0x1bf4, Other), (0x1c00, ALetter), (0x1c24, Extend), (0x1c38, Other),
            (0x1c40, Numeric), (0x1c4a, Other), (0x1c4d, ALetter), (0x1c50, Numeric),
            (0x1c5a, ALetter), (0x1c7e, Other), (0x1c80, ALetter), (0x1c89, Other),
            (0x1c90, ALetter), (0x1cbb, Other), (0x1cbd, ALetter), (0x1cc0, Other),
            (0x1cd0, Extend), (0x1cd3, Other), (0x1cd4, Extend), (0x1ce9, ALetter),
            (0x1ced, Extend), (0x1cee, ALetter), (0x1cf4, Extend), (0x1cf5, ALetter),
            (0x1cf7, Extend), (0x1cfa, ALetter), (0x1cfb, Other), (0x1d00, ALetter),
            (0x1dc0, Extend), (0x1e00, ALetter), (0x1f16, Other), (0x1f18, ALetter),
            (0x1f1e, Other), (0x1f20, ALetter), (0x1f46, Other), (0x1f48, ALetter),
            (0x1f4e, Other), (0x1f50, ALetter), (0x1f58, Other), (0x1f59, ALetter),
            (0x1f5a, Other), (0x1f5b, ALetter), (0x1f5c, Other), (0x1f5d, ALetter),
            (0x1f5e, Other), (0x1f5f, ALetter), (0x1f7e, Other), (0x1f80, ALetter),
            (0x1fb5, Other), (0x1fb6, ALetter), (0x1fbd, Other), (0x1fbe, ALetter),
            (0x1fbf, Other), (0x1fc2, ALetter), (0x1fc5, Other), (0x1fc6, ALetter),
            (0x1fcd, Other), (0x1fd0, ALetter), (0x1fd4, Other), (0x1fd6, ALetter),
            (0x1fdc, Other), (0x1fe0, ALetter), (0x1fed, Other), (0x1ff2, ALetter),
            (0x1ff5, Other), (0x1ff6, ALetter), (0x1ffd, Other), (0x2000, WSegSpace),
            (0x2007, Other), (0x2008, WSegSpace), (0x200b, Other), (0x200c, Extend),
            (0x200d, ZWJ), (0x200e, Format), (0x2010, Other), (0x2018, MidNumLet),
            (0x201a, Other), (0x2024, MidNumLet), (0x2025, Other), (0x2027, MidLetter),
            (0x2028, Newline), (0x202a, Format), (0x202f, ExtendNumLet), (0x2030, Other),
            (0x203c, ExtendedPictographic), (0x203d, Other), (0x203f, ExtendNumLet), (0x2041, Other),
            (0x2044, MidNum), (0x2045, Other), (0x2049, ExtendedPictographic), (0x204a, Other),
            (0x2054, ExtendNumLet), (0x2055, Other), (0x205f, WSegSpace), (0x2060, Format),
            (0x2065, Other), (0x2066, Format), (0x2070, Other), (0x2071, ALetter),
            (0x2072, Other), (0x207f, ALetter), (0x2080, Other), (0x2090, ALetter),
            (0x209d, Other), (0x20d0, Extend), (0x20f1, Other), (0x2102, ALetter),
            (0x2103, Other), (0x2107, ALetter), (0x2108, Other), (0x210a, ALetter),
            (0x2114, Other), (0x2115, ALetter), (0x2116, Other), (0x2119, ALetter),
            (0x211e, Other), (0x2122, ExtendedPictographic), (0x2123, Other), (0x2124, ALetter),
            (0x2125, Other), (0x2126, ALetter), (0x2127, Other), (0x2128, ALetter),
            (0x2129, Other), (0x212a, ALetter), (0x212e, Other), (0x212f, ALetter),
            (0x213a, Other), (0x213c, ALetter), (0x2140, Other), (0x2145, ALetter),
            (0x214a, Other), (0x214e, ALetter), (0x214f, Other), (0x2160, ALetter),
            (0x2189, Other), (0x2194, ExtendedPictographic), (0x219a, Other), (0x21a9, ExtendedPictographic),
            (0x21ab, Other), (0x231a, ExtendedPictographic), (0x231c, Other), (0x2328, ExtendedPictographic),
            (0x2329, Other), (0x2388, ExtendedPictographic), (0x2389, Other), (0x23cf, ExtendedPictographic),
            (0x23d0, Other), (0x23e9, ExtendedPictographic), (0x23f4, Other), (0x23f8, ExtendedPictographic),
            (0x23fb, Other), (0x24b6, ALetter), (0x24ea, Other), (0x25aa, ExtendedPictographic),
            (0x25ac, Other), (0x25b6, ExtendedPictographic), (0x25b7, Other), (0x25c0, ExtendedPictographic),
            (0x25c1, Other), (0x25fb, ExtendedPictographic), (0x25ff, Other), (0x2600, ExtendedPictographic),
            (0x2606, Other), (0x2607, ExtendedPictographic), (0x2613, Other), (0x2614, ExtendedPictographic),
            (0x2686, Other), (0x2690, ExtendedPictographic), (0x2706, Other), (0x2708, ExtendedPictographic),
            (0x2713, Other), (0x2714, ExtendedPictographic), (0x2715, Other), (0x2716, ExtendedPictographic),
            (0x2717, Other), (0x271d, ExtendedPictographic), (0x271e, Other), (0x2721, ExtendedPictographic),
            (0x2722, Other), (0x2728, ExtendedPictographic), (0x2729, Other), (0x2733, ExtendedPictographic),
            (0x2735, Other), (0x2744, ExtendedPictographic), (0x2745, Other), (0x2747, ExtendedPictographic),
            (0x2748, Other), (0x274c, ExtendedPictographic), (0x274d, Other), (0x274e, ExtendedPictographic),
            (0x274f, Other), (0x2753, ExtendedPictographic), (0x2756, Other), (0x2757, ExtendedPictographic),
            (0x2758, Other), (0x2763, ExtendedPictographic), (0x2768, Other), (0x2795, ExtendedPictographic),
            (0x2798, Other), (0x27a1, ExtendedPictographic), (0x27a2, Other), (0x27b0, ExtendedPictographic),
            (0x27b1, Other), (0x27bf, ExtendedPictographic), (0x27c0, Other), (0x2934, ExtendedPictographic),
            (0x2936, Other), (0x2b05, ExtendedPictographic), (0x2b08, Other), (0x2b1b, ExtendedPictographic),
            (0x2b1d, Other), (0x2b50, ExtendedPictographic), (0x2b51, Other), (0x2b55, ExtendedPictographic),
            (0x2b56, Other), (0x2c00, ALetter), (0x2ce5, Other), (0x2ceb, ALetter),
            (0x2cef, Extend), (0x2cf2, ALetter), (0x2cf4, Other), (0x2d00, ALetter),
            (0x2d26, Other), (0x2d27, ALetter), (0x2d28, Other), (0x2d2d, ALetter),
            (0x2d2e, Other), (0x2d30, ALetter), (0x2d68, Other), (0x2d6f, ALetter),
            (0x2d70, Other), (0x2d7f, Extend), (0x2d80, ALetter), (0x2d97, Other),
            (0x2da0, ALetter), (0x2da7, Other), (0x2da8, ALetter), (0x2daf, Other),
            (0x2db0, ALetter), (0x2db7, Other), (0x2db8, ALetter), (0x2dbf, Other),
            (0x2dc0, ALetter), (0x2dc7, Other), (0x2dc8, ALetter), (0x2dcf, Other),
            (0x2dd0, ALetter), (0x2dd7, Other), (0x2dd8, ALetter), (0x2ddf, Other),
            (0x2de0, Extend), (0x2e00, Other), (0x2e2f, ALetter), (0x2e30, Other),
            (0x3000, WSegSpace), (0x3001, Other), (0x3005, ALetter), (0x3006, Other),
            (0x302a, Extend), (0x3030, ExtendedPictographic), (0x3031, Katakana), (0x3036, Other),
            (0x303b, ALetter), (0x303d, ExtendedPictographic), (0x303e, Other), (0x3099, Extend),
            (0x309b, Katakana), (0x309d, Other), (0x30a0, Katakana), (0x30fb, Other),
            (0x30fc, Katakana), (0x3100, Other), (0x3105, ALetter), (0x3130, Other),
            (0x3131, ALetter), (0x318f, Other), (0x31a0, ALetter), (0x31c0, Other),
            (0x31f0, Katakana), (0x3200, Other), (0x3297, ExtendedPictographic), (0x3298, Other),
            (0x3299, ExtendedPictographic), (0x329a, Other), (0x32d0, Katakana), (0x32ff, Other),
            (0x3300, Katakana), (0x3358, Other), (0xa000, ALetter), (0xa48d, Other),
            (0xa4d0, ALetter), (0xa4fe, Other), (0xa500, ALetter), (0xa60d, Other),
            (0xa610, ALetter), (0xa620, Numeric), (0xa62a, ALetter), (0xa62c, Other),
            (0xa640, ALetter), (0xa66f, Extend), (0xa673, Other), (0xa674, Extend),
            (0xa67e, Other), (0xa67f, ALetter), (0xa69e, Extend), (0xa6a0, ALetter),
            (0xa6f0, Extend), (0xa6f2, Other), (0xa708, ALetter), (0xa7cb, Other),
            (0xa7d0, ALetter), (0xa7d2, Other), (0xa7d3, ALetter), (0xa7d4, Other),
            (0xa7d5, ALetter), (0xa7da, Other), (0xa7f2, ALetter), (0xa802, Extend),
            (0xa803, ALetter), (0xa806, Extend), (0xa807, ALetter), (0xa80b, Extend),
            (0xa80c, ALetter), (0xa823, Extend), (0xa828, Other), (0xa82c, Extend),
            (0xa82d, Other), (0xa840, ALetter), (0xa874, Other), (0xa880, Extend),
            (0xa882, ALetter), (0xa8b4, Extend), (0xa8c6, Other), (0xa8d0, Numeric),
            (0xa8da, Other), (0xa8e0, Extend), (0xa8f2, ALetter), (0xa8f8, Other),
            (0xa8fb, ALetter), (0xa8fc, Other), (0xa8fd, ALetter), (0xa8ff, Extend),
            (0xa900, Numeric), (0xa90a, ALetter), (0xa926, Extend), (0xa92e, Other),
            (0xa930, ALetter), (0xa947, Extend), (0xa954, Other), (0xa960, ALetter),
            (0xa97d, Other), (0xa980, Extend), (0xa984, ALetter), (0xa9b3, Extend),
            (0xa9c1, Other), (0xa9cf, ALetter), (0xa9d0, Numeric), (0xa9da, Other),
            (0xa9e5, Extend), (0xa9e6, Other), (0xa9f0, Numeric), (0xa9fa, Other),
            (0xaa00, ALetter), (0xaa29, Extend), (0xaa37, Other), (0xaa40, ALetter),
            (0xaa43, Extend), (0xaa44, ALetter), (0xaa4c, Extend), (0xaa4e, Other),
            (0xaa50, Numeric), (0xaa5a, Other), (0xaa7b, Extend), (0xaa7e, Other),
            (0xaab0, Extend), (0xaab1, Other), (0xaab2, Extend), (0xaab5, Other),
            (0xaab7, Extend), (0xaab9, Other), (0xaabe, Extend), (0xaac0, Other),
            (0xaac1, Extend), (0xaac2, Other), (0xaae0, ALetter), (0xaaeb, Extend),
            (0xaaf0, Other), (0xaaf2, ALetter), (0xaaf5, Extend), (0xaaf7, Other),
            (0xab01, ALetter), (0xab07, Other), (0xab09, ALetter), (0xab0f, Other),
            (0xab11, ALetter), (0xab17, Other), (0xab20, ALetter), (0xab27, Other),
            (0xab28, ALetter), (0xab2f, Other), (0xab30, ALetter), (0xab6c, Other),
            (0xab70, ALetter), (0xabe3, Extend), (0xabeb, Other), (0xabec, Extend),
            (0xabee, Other), (0xabf0, Numeric), (0xabfa, Other), (0xac00, ALetter),
            (0xd7a4, Other), (0xd7b0, ALetter), (0xd7c7, Other), (0xd7cb, ALetter),
            (0xd7fc, Other), (0xfb00, ALetter), (0xfb07, Other), (0xfb13, ALetter),
            (0xfb18, Other), (0xfb1d, HebrewLetter), (0xfb1e, Extend), (0xfb1f, HebrewLetter),
            (0xfb29, Other), (0xfb2a, HebrewLetter), (0xfb37, Other), (0xfb38, HebrewLetter),
            (0xfb3d, Other), (0xfb3e, HebrewLetter), (0xfb3f, Other), (0xfb40, HebrewLetter),
            (0xfb42, Other), (0xfb43, HebrewLetter), (0xfb45, Other), (0xfb46, HebrewLetter),
            (0xfb50, ALetter), (0xfbb2, Other), (0xfbd3, ALetter), (0xfd3e, Other),
            (0xfd50, ALetter), (0xfd90, Other), (0xfd92, ALetter), (0xfdc8, Other),
            (0xfdf0, ALetter), (0xfdfc, Other), (0xfe00, Extend), (0xfe10, MidNum),
            (0xfe11, Other), (0xfe13, MidLetter), (0xfe14, MidNum), (0xfe15, Other),
            (0xfe20, Extend), (0xfe30, Other), (0xfe33, ExtendNumLet), (0xfe35, Other),
            (0xfe4d, ExtendNumLet), (0xfe50, MidNum), (0xfe51, Other), (0xfe52, MidNumLet),
            (0xfe53, Other), (0xfe54, MidNum), (0xfe55, MidLetter), (0xfe56, Other),
            (0xfe70, ALetter), (0xfe75, Other), (0xfe76, ALetter), (0xfefd, Other),
            (0xfeff, Format), (0xff00, Other), (0xff07, MidNumLet), (0xff08, Other),
            (0xff0c, MidNum), (0xff0d, Other), (0xff0e, MidNumLet), (0xff0f, Other),
            (0xff1a, MidLetter), (0xff1b, MidNum), (0xff1c, Other), (0xff21, ALetter),
            (0xff3b, Other), (0xff3f, ExtendNumLet), (0xff40, Other), (0xff41, ALetter),
            (0xff5b, Other), (0xff66, Katakana), (0xff9e, Extend), (0xffa0, ALetter),
            (0xffbf, Other), (0xffc2, ALetter), (0xffc8, Other), (0xffca, ALetter),
            (0xffd0, Other), (0xffd2, ALetter), (0xffd8, Other), (0xffda, ALetter),
            (0xffdd, Other), (0xfff9, Format), (0xfffc, Other), (0x10000, ALetter),
            (0x1000c, Other), (0x1000d, ALetter), (0x10027, Other), (0x10028, ALetter),
            (0x1003b, Other), (0x1003c, ALetter), (0x1003e, Other), (0x1003f, ALetter),
            (0x1004e, Other), (0x10050, ALetter), (0x1005e, Other), (0x10080, ALetter),
            (0x100fb, Other), (0x10140, ALetter), (0x10175, Other), (0x101fd, Extend),
            (0x101fe, Other), (0x10280, ALetter), (0x1029d, Other), (0x102a0, ALetter),
            (0x102d1, Other), (0x102e0, Extend), (0x102e1, Other), (0x10300, ALetter),
            (0x10320, Other), (0x1032d, ALetter), (0x1034b, Other), (0x10350, ALetter),
            (0x10376, Extend), (0x1037b, Other), (0x10380, ALetter), (0x1039e, Other),
            (0x103a0, ALetter), (0x103c4, Other), (0x103c8, ALetter), (0x103d0, Other),
            (0x103d1, ALetter), (0x103d6, Other), (0x10400, ALetter), (0x1049e, Other),
            (0x104a0, Numeric), (0x104aa, Other), (0x104b0, ALetter), (0x104d4, Other),
            (0x104d8, ALetter), (0x104fc, Other), (0x10500, ALetter), (0x10528, Other),
            (0x10530, ALetter), (0x10564, Other), (0x10570, ALetter), (0x1057b, Other),
            (0x1057c, ALetter), (0x1058b, Other), (0x1058c, ALetter), (0x10593, Other),
            (0x10594, ALetter), (0x10596, Other), (0x10597, ALetter), (0x105a2, Other),
            (0x105a3, ALetter), (0x105b2, Other), (0x105b3, ALetter), (0x105ba, Other),
            (0x105bb, ALetter), (0x105bd, Other), (0x10600, ALetter), (0x10737, Other),
            (0x10740, ALetter), (0x10756, Other), (0x10760, ALetter), (0x10768, Other),
            (0x10780, ALetter), (0x10786, Other), (0x10787, ALetter), (0x107b1, Other),
            (0x107b2, ALetter), (0x107bb, Other), (0x10800, ALetter), (0x10806, Other),
            (0x10808, ALetter), (0x10809, Other), (0x1080a, ALetter), (0x10836, Other),
            (0x10837, ALetter), (0x10839, Other), (0x1083c, ALetter), (0x1083d, Other),
            (0x1083f, ALetter), (0x10856, Other), (0x10860, ALetter), (0x10877, Other),
            (0x10880, ALetter), (0x1089f, Other), (0x108e0, ALetter), (0x108f3, Other),
            (0x108f4, ALetter), (0x108f6, Other), (0x10900, ALetter), (0x10916, Other),
            (0x10920, ALetter), (0x1093a, Other), (0x10980, ALetter), (0x109b8, Other),
            (0x109be, ALetter), (0x109c0, Other), (0x10a00, ALetter), (0x10a01, Extend),
            (0x10a04, Other), (0x10a05, Extend), (0x10a07, Other), (0x10a0c, Extend),
            (0x10a10, ALetter), (0x10a14, Other), (0x10a15, ALetter), (0x10a18, Other),
            (0x10a19, ALetter), (0x10a36, Other), (0x10a38, Extend), (0x10a3b, Other),
            (0x10a3f, Extend), (0x10a40, Other), (0x10a60, ALetter), (0x10a7d, Other),
            (0x10a80, ALetter), (0x10a9d, Other), (0x10ac0, ALetter), (0x10ac8, Other),
            (0x10ac9, ALetter), (0x10ae5, Extend), (0x10ae7, Other), (0x10b00, ALetter),
            (0x10b36, Other), (0x10b40, ALetter), (0x10b56, Other), (0x10b60, ALetter),
            (0x10b73, Other), (0x10b80, ALetter), (0x10b92, Other), (0x10c00, ALetter),
            (0x10c49, Other), (0x10c80, ALetter), (0x10cb3, Other), (0x10cc0, ALetter),
            (0x10cf3, Other), (0x10d00, ALetter), (0x10d24, Extend), (0x10d28, Other),
            (0x10d30, Numeric), (0x10d3a, Other), (0x10e80, ALetter), (0x10eaa, Other),
            (0x10eab, Extend), (0x10ead, Other), (0x10eb0, ALetter), (0x10eb2, Other),
            (0x10f00, ALetter), (0x10f1d, Other), (0x10f27, ALetter), (0x10f28, Other),
            (0x10f30, ALetter), (0x10f46, Extend), (0x10f51, Other), (0x10f70, ALetter),
            (0x10f82, Extend), (0x10f86, Other), (0x10fb0, ALetter), (0x10fc5, Other),
            (0x10fe0, ALetter), (0x10ff7, Other), (0x11000, Extend), (0x11003, ALetter),
            (0x11038, Extend), (0x11047, Other), (0x11066, Numeric), (0x11070, Extend),
            (0x11071, ALetter), (0x11073, Extend), (0x11075, ALetter), (0x11076, Other),
            (0x1107f, Extend), (0x11083, ALetter), (0x110b0, Extend), (0x110bb, Other),
            (0x110bd, Format), (0x110be, Other), (0x110c2, Extend), (0x110c3, Other),
            (0x110cd, Format), (0x110ce, Other), (0x110d0, ALetter), (0x110e9, Other),
            (0x110f0, Numeric), (0x110fa, Other), (0x11100, Extend), (0x11103, ALetter),
            (0x11127, Extend), (0x11135, Other), (0x11136, Numeric), (0x11140, Other),
            (0x11144, ALetter), (0x11145, Extend), (0x11147, ALetter), (0x11148, Other),
            (0x11150, ALetter), (0x11173, Extend), (0x11174, Other), (0x11176, ALetter),
            (0x11177, Other), (0x11180, Extend), (0x11183, ALetter), (0x111b3, Extend),
            (0x111c1, ALetter), (0x111c5, Other), (0x111c9, Extend), (0x111cd, Other),
            (0x111ce, Extend), (0x111d0, Numeric), (0x111da, ALetter), (0x111db, Other),
            (0x111dc, ALetter), (0x111dd, Other), (0x11200, ALetter), (0x11212, Other),
            (0x11213, ALetter), (0x1122c, Extend), (0x11238, Other), (0x1123e, Extend),
            (0x1123f, Other), (0x11280, ALetter), (0x11287, Other), (0x11288, ALetter),
            (0x11289, Other), (0x1128a, ALetter), (0x1128e, Other), (0x1128f, ALetter),
            (0x1129e, Other), (0x1129f, ALetter), (0x112a9, Other), (0x112b0, ALetter),
            (0x112df, Extend), (0x112eb, Other), (0x112f0, Numeric), (0x112fa, Other),
            (0x11300, Extend), (0x11304, Other), (0x11305, ALetter), (0x1130d, Other),
            (0x1130f, ALetter), (0x11311, Other), (0x11313, ALetter), (0x11329, Other),
            (0x1132a, ALetter), (0x11331, Other), (0x11332, ALetter), (0x11334, Other),
            (0x11335, ALetter), (0x1133a, Other), (0x1133b, Extend), (0x1133d, ALetter),
            (0x1133e, Extend), (0x11345, Other), (0x11347, Extend), (0x11349, Other),
            (0x1134b, Extend), (0x1134e, Other), (0x11350, ALetter), (0x11351, Other),
            (0x11357, Extend), (0x11358, Other), (0x1135d, ALetter), (0x11362, Extend),
            (0x11364, Other), (0x11366, Extend), (0x1136d, Other), (0x11370, Extend),
            (0x11375, Other), (0x11400, ALetter), (0x11435, Extend), (0x11447, ALetter),
            (0x1144b, Other), (0x11450, Numeric), (0x1145a, Other), (0x1145e, Extend),
            (0x1145f, ALetter), (0x11462, Other), (0x11480, ALetter), (0x114b0, Extend),
            (0x114c4, ALetter), (0x114c6, Other), (0x114c7, ALetter), (0x114c8, Other),
            (0x114d0, Numeric), (0x114da, Other), (0x11580, ALetter), (0x115af, Extend),
            (0x115b6, Other), (0x115b8, Extend), (0x115c1, Other), (0x115d8, ALetter),
            (0x115dc, Extend), (0x115de, Other), (0x11600, ALetter), (0x11630, Extend),
            (0x11641, Other), (0x11644, ALetter), (0x11645, Other), (0x11650, Numeric),
            (0x1165a, Other), (0x11680, ALetter), (0x116ab, Extend), (0x116b8, ALetter),
            (0x116b9, Other), (0x116c0, Numeric), (0x116ca, Other), (0x1171d, Extend),
            (0x1172c, Other), (0x11730, Numeric), (0x1173a, Other), (0x11800, ALetter),
            (0x1182c, Extend), (0x1183b, Other), (0x118a0, ALetter), (0x118e0, Numeric),
            (0x118ea, Other), (0x118ff, ALetter), (0x11907, Other), (0x11909, ALetter),
            (0x1190a, Other), (0x1190c, ALetter), (0x11914, Other), (0x11915, ALetter),
            (0x11917, Other), (0x11918, ALetter), (0x11930, Extend), (0x11936, Other),
            (0x11937, Extend), (0x11939, Other), (0x1193b, Extend), (0x1193f, ALetter),
            (0x11940, Extend), (0x11941, ALetter), (0x11942, Extend), (0x11944, Other),
            (0x11950, Numeric), (0x1195a, Other), (0x119a0, ALetter), (0x119a8, Other),
            (0x119aa, ALetter), (0x119d1, Extend), (0x119d8, Other), (0x119da, Extend),
            (0x119e1, ALetter), (0x119e2, Other), (0x119e3, ALetter), (0x119e4, Extend),
            (0x119e5, Other), (0x11a00, ALetter), (0x11a01, Extend), (0x11a0b, ALetter),
            (0x11a33, Extend), (0x11a3a, ALetter), (0x11a3b, Extend), (0x11a3f, Other),
            (0x11a47, Extend), (0x11a48, Other), (0x11a50, ALetter), (0x11a51, Extend),
            (0x11a5c, ALetter), (0x11a8a, Extend), (0x11a9a, Other), (0x11a9d, ALetter),
            (0x11a9e, Other), (0x11ab0, ALetter), (0x11af9, Other), (0x11c00, ALetter),
            (0x11c09, Other), (0x11c0a, ALetter), (0x11c2f, Extend), (0x11c37, Other),
            (0x11c38, Extend), (0x11c40, ALetter), (0x11c41, Other), (0x11c50, Numeric),
            (0x11c5a, Other), (0x11c72, ALetter), (0x11c90, Other), (0x11c92, Extend),
            (0x11ca8, Other), (0x11ca9, Extend), (0x11cb7, Other), (0x11d00, ALetter),
            (0x11d07, Other), (0x11d08, ALetter), (0x11d0a, Other), (0x11d0b, ALetter),
            (0x11d31, Extend), (0x11d37, Other), (0x11d3a, Extend), (0x11d3b, Other),
            (0x11d3c, Extend), (0x11d3e, Other), (0x11d3f, Extend), (0x11d46, ALetter),
            (0x11d47, Extend), (0x11d48, Other), (0x11d50, Numeric), (0x11d5a, Other),
            (0x11d60, ALetter), (0x11d66, Other), (0x11d67, ALetter), (0x11d69, Other),
            (0x11d6a, ALetter), (0x11d8a, Extend), (0x11d8f, Other), (0x11d90, Extend),
            (0x11d92, Other), (0x11d93, Extend), (0x11d98, ALetter), (0x11d99, Other),
            (0x11da0, Numeric), (0x11daa, Other), (0x11ee0, ALetter), (0x11ef3, Extend),
            (0x11ef7, Other), (0x11fb0, ALetter), (0x11fb1, Other), (0x12000, ALetter),
            (0x1239a, Other), (0x12400, ALetter), (0x1246f, Other), (0x12480, ALetter),
            (0x12544, Other), (0x12f90, ALetter), (0x12ff1, Other), (0x13000, ALetter),
            (0x1342f, Other), (0x13430, Format), (0x13439, Other), (0x14400, ALetter),
            (0x14647, Other), (0x16800, ALetter), (0x16a39, Other), (0x16a40, ALetter),
            (0x16a5f, Other), (0x16a60, Numeric), (0x16a6a, Other), (0x16a70, ALetter),
            (0x16abf, Other), (0x16ac0, Numeric), (0x16aca, Other), (0x16ad0, ALetter),
            (0x16aee, Other), (0x16af0, Extend), (0x16af5, Other), (0x16b00, ALetter),
            (0x16b30, Extend), (0x16b37, Other), (0x16b40, ALetter), (0x16b44, Other),
            (0x16b50, Numeric), (0x16b5a, Other), (0x16b63, ALetter), (0x16b78, Other),
            (0x16b7d, ALetter), (0x16b90, Other), (0x16e40, ALetter), (0x16e80, Other),
            (0x16f00, ALetter), (0x16f4b, Other), (0x16f4f, Extend), (0x16f50, ALetter),
            (0x16f51, Extend), (0x16f88, Other), (0x16f8f, Extend), (0x16f93, ALetter),
            (0x16fa0, Other), (0x16fe1, ALetter), (0x16fe2, Other), (0x16fe3, ALetter),
            (0x16fe4, Extend), (0x16fe5, Other), (0x16ff0, Extend), (0x16ff2, Other),
            (0x17000, ALetter), (0x187f8, Other), (0x18d00, ALetter), (0x18d09, Other),
            (0x1aff0, Katakana), (0x1aff4, Other), (0x1aff5, Katakana), (0x1affc, Other),
            (0x1affd, Katakana), (0x1afff, Other), (0x1b000, Katakana), (0x1b001, Other),
            (0x1b002, ALetter), (0x1b11f, Other), (0x1b120, Katakana), (0x1b123, Other),
            (0x1b164, Katakana), (0x1b168, Other), (0x1bc00, ALetter), (0x1bc6b, Other),
            (0x1bc70, ALetter), (0x1bc7d, Other), (0x1bc80, ALetter), (0x1bc89, Other),
            (0x1bc90, ALetter), (0x1bc9a, Other), (0x1bc9d, Extend), (0x1bc9f, Other),
            (0x1bca0, Format), (0x1bca4, Other), (0x1cf00, Extend), (0x1cf2e, Other),
            (0x1cf30, Extend), (0x1cf47, Other), (0x1d165, Extend), (0x1d16a, Other),
            (0x1d16d, Extend), (0x1d173, Format), (0x1d17b, Extend), (0x1d183, Other),
            (0x1d185, Extend), (0x1d18c, Other), (0x1d1aa, Extend), (0x1d1ae, Other),
            (0x1d242, Extend), (0x1d245, Other), (0x1d400, ALetter), (0x1d455, Other),
            (0x1d456, ALetter), (0x1d49d, Other), (0x1d49e, ALetter), (0x1d4a0, Other),
            (0x1d4a2, ALetter), (0x1d4a3, Other), (0x1d4a5, ALetter), (0x1d4a7, Other),
            (0x1d4a9, ALetter), (0x1d4ad, Other), (0x1d4ae, ALetter), (0x1d4ba, Other),
            (0x1d4bb, ALetter), (0x1d4bc, Other), (0x1d4bd, ALetter), (0x1d4c4, Other),
            (0x1d4c5, ALetter), (0x1d506, Other), (0x1d507, ALetter), (0x1d50b, Other),
            (0x1d50d, ALetter), (0x1d515, Other), (0x1d516, ALetter), (0x1d51d, Other),
            (0x1d51e, ALetter), (0x1d53a, Other), (0x1d53b, ALetter), (0x1d53f, Other),
            (0x1d540, ALetter), (0x1d545, Other), (0x1d546, ALetter), (0x1d547, Other),
            (0x1d54a, ALetter), (0x1d551, Other), (0x1d552, ALetter), (0x1d6a6, Other),
            (0x1d6a8, ALetter), (0x1d6c1, Other), (0x1d6c2, ALetter), (0x1d6db, Other),
            (0x1d6dc, ALetter), (0x1d6fb, Other), (0x1d6fc, ALetter), (0x1d715, Other),
            (0x1d716, ALetter), (0x1d735, Other), (0x1d736, ALetter), (0x1d74f, Other),
            (0x1d750, ALetter), (0x1d76f, Other), (0x1d770, ALetter), (0x1d789, Other),
            (0x1d78a, ALetter), (0x1d7a9, Other), (0x1d7aa, ALetter), (0x1d7c3, Other),
            (0x1d7c4, ALetter), (0x1d7cc, Other), (0x1d7ce, Numeric), (0x1d800, Other),
            (0x1da00, Extend), (0x1da37, Other), (0x1da3b, Extend), (0x1da6d, Other),
            (0x1da75, Extend), (0x1da76, Other), (0x1da84, Extend), (0x1da85, Other),
            (0x1da9b, Extend), (0x1daa0, Other), (0x1daa1, Extend), (0x1dab0, Other),
            (0x1df00, ALetter), (0x1df1f, Other), (0x1e000, Extend), (0x1e007, Other),
            (0x1e008, Extend), (0x1e019, Other), (0x1e01b, Extend), (0x1e022, Other),
            (0x1e023, Extend), (0x1e025, Other), (0x1e026, Extend), (0x1e02b, Other),
            (0x1e100, ALetter), (0x1e12d, Other), (0x1e130, Extend), (0x1e137, ALetter),
            (0x1e13e, Other), (0x1e140, Numeric), (0x1e14a, Other), (0x1e14e, ALetter),
            (0x1e14f, Other), (0x1e290, ALetter), (0x1e2ae, Extend), (0x1e2af, Other),
            (0x1e2c0, ALetter), (0x1e2ec, Extend), (0x1e2f0, Numeric), (0x1e2fa, Other),
            (0x1e7e0, ALetter), (0x1e7e7, Other), (0x1e7e8, ALetter), (0x1e7ec, Other),
            (0x1e7ed, ALetter), (0x1e7ef, Other), (0x1e7f0, ALetter), (0x1e7ff, Other),
            (0x1e800, ALetter), (0x1e8c5, Other), (0x1e8d0, Extend), (0x1e8d7, Other),
            (0x1e900, ALetter), (0x1e944, Extend), (0x1e94b, ALetter), (0x1e94c, Other),
            (0x1e950, Numeric), (0x1e95a, Other), (0x1ee00, ALetter), (0x1ee04, Other),
            (0x1ee05, ALetter), (0x1ee20, Other), (0x1ee21, ALetter), (0x1ee23, Other),
            (0x1ee24, ALetter), (0x1ee25, Other), (0x1ee27, ALetter), (0x1ee28, Other),
            (0x1ee29, ALetter), (0x1ee33, Other), (0x1ee34, ALetter), (0x1ee38, Other),
            (0x1ee39, ALetter), (0x1ee3a, Other), (0x1ee3b, ALetter), (0x1ee3c, Other),
            (0x1ee42, ALetter), (0x1ee43, Other), (0x1ee47, ALetter), (0x1ee48, Other),
            (0x1ee49, ALetter), (0x1ee4a, Other), (0x1ee4b, ALetter), (0x1ee4c, Other),
            (0x1ee4d, ALetter), (0x1ee50, Other), (0x1ee51, ALetter), (0x1ee53, Other),
            (0x1ee54, ALetter), (0x1ee55, Other), (0x1ee57, ALetter), (0x1ee58, Other),
            (0x1ee59, ALetter), (0x1ee5a, Other), (0x1ee5b, ALetter), (0x1ee5c, Other),
            (0x1ee5d, ALetter), (0x1ee5e, Other), (0x1ee5f, ALetter), (0x1ee60, Other),
            (0x1ee61, ALetter), (0x1ee63, Other), (0x1ee64, ALetter), (0x1ee65, Other),
            (0x1ee67, ALetter), (0x1ee6b, Other), (0x1ee6c, ALetter), (0x1ee73, Other),
            (0x1ee74, ALetter), (0x1ee78, Other), (0x1ee79, ALetter), (0x1ee7d, Other),
            (0x1ee7e, ALetter), (0x1ee7f, Other), (0x1ee80, ALetter), (0x1ee8a, Other),
            (0x1ee8b, ALetter), (0x1ee9c, Other), (0x1eea1, ALetter), (0x1eea4, Other),
            (0x1eea5, ALetter), (0x1eeaa, Other), (0x1eeab, ALetter), (0x1eebc, Other),
            (0x1f000, ExtendedPictographic), (0x1f100, Other), (0x1f10d, ExtendedPictographic), (0x1f110, Other),
            (0x1f12f, ExtendedPictographic), (0x1f130, ALetter), (0x1f14a, Other), (0x1f150, ALetter),
            (0x1f16a, Other), (0x1f16c, ExtendedPictographic), (0x1f170, ALetter), (0x1f18a, Other),
            (0x1f18e, ExtendedPictographic), (0x1f18f, Other), (0x1f191, ExtendedPictographic), (0x1f19b, Other),
            (0x1f1ad, ExtendedPictographic), (0x1f1e6, RegionalIndicator), (0x1f200, Other), (0x1f201, ExtendedPictographic),
            (0x1f210, Other), (0x1f21a, ExtendedPictographic), (0x1f21b, Other), (0x1f22f, ExtendedPictographic),
            (0x1f230, Other), (0x1f232, ExtendedPictographic), (0x1f23b, Other), (0x1f23c, ExtendedPictographic),
            (0x1f240, Other), (0x1f249, ExtendedPictographic), (0x1f3fb, Extend), (0x1f400, ExtendedPictographic),
            (0x1f53e, Other), (0x1f546, ExtendedPictographic), (0x1f650, Other), (0x1f680, ExtendedPictographic),
            (0x1f700, Other), (0x1f774, ExtendedPictographic), (0x1f780, Other), (0x1f7d5, ExtendedPictographic),
            (0x1f800, Other), (0x1f80c, ExtendedPictographic), (0x1f810, Other), (0x1f848, ExtendedPictographic),
            (0x1f850, Other), (0x1f85a, ExtendedPictographic), (0x1f860, Other), (0x1f888, ExtendedPictographic),
            (0x1f890, Other), (0x1f8ae, ExtendedPictographic), (0x1f900, Other), (0x1f90c, ExtendedPictographic),
            (0x1f93b, Other), (0x1f93c, ExtendedPictographic), (0x1f946, Other), (0x1f947, ExtendedPictographic),
            (0x1fb00, Other), (0x1fbf0, Numeric), (0x1fbfa, Other), (0x1fc00, ExtendedPictographic),
            (0x1fffe, Other), (0xe0001, Format), (0xe0002, Other), (0xe0020, Format),
            (0xe0080, Other), (0xe0100, Extend), (0xe01f0, Other),
        ],
        Other,
    );
}

pub(crate) mod sentence {
    use super::SentenceBreak::{self, *};
    use crate::table::SparseTable;

    pub(crate) static TABLE: SparseTable<SentenceBreak> = SparseTable::from_static(
        &[
            (0x0, Other), (0x9, Sp), (0xa, LF), (0xb, Sp),
            (0xd, CR), (0xe, Other), (0x20, Sp), (0x21, STerm),
            (0x22, Close), (0x23, Other), (0x27, Close), (0x2a, Other),
            (0x2c, SContinue), (0x2e, ATerm), (0x2f, Other), (0x30, Numeric),
            (0x3a, SContinue), (0x3b, Other), (0x3f, STerm), (0x40, Other),
            (0x41, Upper), (0x5b, Close), (0x5c, Other), (0x5d, Close),
            (0x5e, Other), (0x61, Lower), (0x7b, Close), (0x7c, Other),
            (0x7d, Close), (0x7e, Other), (0x85, Sep), (0x86, Other),
            (0xa0, Sp), (0xa1, Other), (0xaa, Lower), (0xab, Close),
            (0xac, Other), (0xad, Format), (0xae, Other), (0xb5, Lower),
            (0xb6, Other), (0xba, Lower), (0xbb, Close), (0xbc, Other),
            (0xc0, Upper), (0xd7, Other), (0xd8, Upper), (0xdf, Lower),
            (0xf7, Other), (0xf8, Lower), (0x100, Upper), (0x101, Lower),
            (0x102, Upper), (0x103, Lower), (0x104, Upper), (0x105, Lower),
            (0x106, Upper), (0x107, Lower), (0x108, Upper), (0x109, Lower),
            (0x10a, Upper), (0x10b, Lower), (0x10c, Upper), (0x10d, Lower),
            (0x10e, Upper), (0x10f, Lower), (0x110, Upper), (0x111, Lower),
            (0x112, Upper), (0x113, Lower), (0x114, Upper), (0x115, Lower),
            (0x116, Upper), (0x117, Lower), (0x118, Upper), (0x119, Lower),
            (0x11a, Upper), (0x11b, Lower), (0x11c, Upper), (0x11d, Lower),
            (0x11e, Upper), (0x11f, Lower), (0x120, Upper), (0x121, Lower),
            (0x122, Upper), (0x123, Lower), (0x124, Upper), (0x125, Lower),
            (0x126, Upper), (0x127, Lower), (0x128, Upper), (0x129, Lower),
            (0x12a, Upper), (0x12b, Lower), (0x12c, Upper), (0x12d, Lower),
            (0x12e, Upper), (0x12f, Lower), (0x130, Upper), (0x131, Lower),
            (0x132, Upper), (0x133, Lower), (0x134, Upper), (0x135, Lower),
            (0x136, Upper), (0x137, Lower), (0x139, Upper), (0x13a, Lower),
            (0x13b, Upper), (0x13c, Lower), (0x13d, Upper), (0x13e, Lower),
            (0x13f, Upper), (0x140, Lower), (0x141, Upper), (0x142, Lower),
            (0x143, Upper), (0x144, Lower), (0x145, Upper), (0x146, Lower),
            (0x147, Upper), (0x148, Lower), (0x14a, Upper), (0x14b, Lower),
            (0x14c, Upper), (0x14d, Lower), (0x14e, Upper), (0x14f, Lower),
            (0x150, Upper), (0x151, Lower), (0x152, Upper), (0x153, Lower),
            (0x154, Upper), (0x155, Lower), (0x156, Upper), (0x157, Lower),
            (0x158, Upper), (0x159, Lower), (0x15a, Upper), (0x15b, Lower),
            (0x15c, Upper), (0x15d, Lower), (0x15e, Upper), (0x15f, Lower),
            (0x160, Upper), (0x161, Lower), (0x162, Upper), (0x163, Lower),
            (0x164, Upper), (0x165, Lower), (0x166, Upper), (0x167, Lower),
            (0x168, Upper), (0x169, Lower), (0x16a, Upper), (0x16b, Lower),
            (0x16c, Upper), (0x16d, Lower), (0x16e, Upper), (0x16f, Lower),
            (0x170, Upper), (0x171, Lower), (0x172, Upper), (0x173, Lower),
            (0x174, Upper), (0x175, Lower), (0x176, Upper), (0x177, Lower),
            (0x178, Upper), (0x17a, Lower), (0x17b, Upper), (0x17c, Lower),
            (0x17d, Upper), (0x17e, Lower), (0x181, Upper), (0x183, Lower),
            (0x184, Upper), (0x185, Lower), (0x186, Upper), (0x188, Lower),
            (0x189, Upper), (0x18c, Lower), (0x18e, Upper), (0x192, Lower),
            (0x193, Upper), (0x195, Lower), (0x196, Upper), (0x199, Lower),
            (0x19c, Upper), (0x19e, Lower), (0x19f, Upper), (0x1a1, Lower),
            (0x1a2, Upper), (0x1a3, Lower), (0x1a4, Upper), (0x1a5, Lower),
            (0x1a6, Upper), (0x1a8, Lower), (0x1a9, Upper), (0x1aa, Lower),
            (0x1ac, Upper), (0x1ad, Lower), (0x1ae, Upper), (0x1b0, Lower),
            (0x1b1, Upper), (0x1b4, Lower), (0x1b5, Upper), (0x1b6, Lower),
            (0x1b7, Upper), (0x1b9, Lower), (0x1bb, OLetter), (0x1bc, Upper),
            (0x1bd, Lower), (0x1c0, OLetter), (0x1c4, Upper), (0x1c6, Lower),
            (0x1c7, Upper), (0x1c9, Lower), (0x1ca, Upper), (0x1cc, Lower),
            (0x1cd, Upper), (0x1ce, Lower), (0x1cf, Upper), (0x1d0, Lower),
            (0x1d1, Upper), (0x1d2, Lower), (0x1d3, Upper), (0x1d4, Lower),
            (0x1d5, Upper), (0x1d6, Lower), (0x1d7, Upper), (0x1d8, Lower),
            (0x1d9, Upper), (0x1da, Lower), (0x1db, Upper), (0x1dc, Lower),
            (0x1de, Upper), (0x1df, Lower), (0x1e0, Upper), (0x1e1, Lower),
            (0x1e2, Upper), (0x1e3, Lower), (0x1e4, Upper), (0x1e5, Lower),
            (0x1e6, Upper), (0x1e7, Lower), (0x1e8, Upper), (0x1e9, Lower),
            (0x1ea, Upper), (0x1eb, Lower), (0x1ec, Upper), (0x1ed, Lower),
            (0x1ee, Upper), (0x1ef, Lower), (0x1f1, Upper), (0x1f3, Lower),
            (0x1f4, Upper), (0x1f5, Lower), (0x1f6, Upper), (0x1f9, Lower),
            (0x1fa, Upper), (0x1fb, Lower), (0x1fc, Upper), (0x1fd, Lower),
            (0x1fe, Upper), (0x1ff, Lower), (0x200, Upper), (0x201, Lower),
            (0x202, Upper), (0x203, Lower), (0x204, Upper), (0x205, Lower),
            (0x206, Upper), (0x207, Lower), (0x208, Upper), (0x209, Lower),
            (0x20a, Upper), (0x20b, Lower), (0x20c, Upper), (0x20d, Lower),
            (0x20e, Upper), (0x20f, Lower), (0x210, Upper), (0x211, Lower),
            (0x212, Upper), (0x213, Lower), (0x214, Upper), (0x215, Lower),
            (0x216, Upper), (0x217, Lower), (0x218, Upper), (0x219, Lower),
            (0x21a, Upper), (0x21b, Lower), (0x21c, Upper), (0x21d, Lower),
            (0x21e, Upper), (0x21f, Lower), (0x220, Upper), (0x221, Lower),
            (0x222, Upper), (0x223, Lower), (0x224, Upper), (0x225, Lower),
            (0x226, Upper), (0x227, Lower), (0x228, Upper), (0x229, Lower),
            (0x22a, Upper), (0x22b, Lower), (0x22c, Upper), (0x22d, Lower),
            (0x22e, Upper), (0x22f, Lower), (0x230, Upper), (0x231, Lower),
            (0x232, Upper), (0x233, Lower), (0x23a, Upper), (0x23c, Lower),
            (0x23d, Upper), (0x23f, Lower), (0x241, Upper), (0x242, Lower),
            (0x243, Upper), (0x247, Lower), (0x248, Upper), (0x249, Lower),
            (0x24a, Upper), (0x24b, Lower), (0x24c, Upper), (0x24d, Lower),
            (0x24e, Upper), (0x24f, Lower), (0x294, OLetter), (0x295, Lower),
            (0x2b9, OLetter), (0x2c0, Lower), (0x2c2, Other), (0x2c6, OLetter),
            (0x2d2, Other), (0x2e0, Lower), (0x2e5, Other), (0x2ec, OLetter),
            (0x2ed, Other), (0x2ee, OLetter), (0x2ef, Other), (0x300, Extend),
            (0x370, Upper), (0x371, Lower), (0x372, Upper), (0x373, Lower),
            (0x374, OLetter), (0x375, Other), (0x376, Upper), (0x377, Lower),
            (0x378, Other), (0x37a, Lower), (0x37e, Other), (0x37f, Upper),
            (0x380, Other), (0x386, Upper), (0x387, Other), (0x388, Upper),
            (0x38b, Other), (0x38c, Upper), (0x38d, Other), (0x38e, Upper),
            (0x390, Lower), (0x391, Upper), (0x3a2, Other), (0x3a3, Upper),
            (0x3ac, Lower), (0x3cf, Upper), (0x3d0, Lower), (0x3d2, Upper),
            (0x3d5, Lower), (0x3d8, Upper), (0x3d9, Lower), (0x3da, Upper),
            (0x3db, Lower), (0x3dc, Upper), (0x3dd, Lower), (0x3de, Upper),
            (0x3df, Lower), (0x3e0, Upper), (0x3e1, Lower), (0x3e2, Upper),
            (0x3e3, Lower), (0x3e4, Upper), (0x3e5, Lower), (0x3e6, Upper),
            (0x3e7, Lower), (0x3e8, Upper), (0x3e9, Lower), (0x3ea, Upper),
            (0x3eb, Lower), (0x3ec, Upper), (0x3ed, Lower), (0x3ee, Upper),
            (0x3ef, Lower), (0x3f4, Upper), (0x3f5, Lower), (0x3f6, Other),
            (0x3f7, Upper), (0x3f8, Lower), (0x3f9, Upper), (0x3fb, Lower),
            (0x3fd, Upper), (0x430, Lower), (0x460, Upper), (0x461, Lower),
            (0x462, Upper), (0x463, Lower), (0x464, Upper), (0x465, Lower),
            (0x466, Upper), (0x467, Lower), (0x468, Upper), (0x469, Lower),
            (0x46a, Upper), (0x46b, Lower), (0x46c, Upper), (0x46d, Lower),
            (0x46e, Upper), (0x46f, Lower), (0x470, Upper), (0x471, Lower),
            (0x472, Upper), (0x473, Lower), (0x474, Upper), (0x475, Lower),
            (0x476, Upper), (0x477, Lower), (0x478, Upper), (0x479, Lower),
            (0x47a, Upper), (0x47b, Lower), (0x47c, Upper), (0x47d, Lower),
            (0x47e, Upper), (0x47f, Lower), (0x480, Upper), (0x481, Lower),
            (0x482, Other), (0x483, Extend), (0x48a, Upper), (0x48b, Lower),
            (0x48c, Upper), (0x48d, Lower), (0x48e, Upper), (0x48f, Lower),
            (0x490, Upper), (0x491, Lower), (0x492, Upper), (0x493, Lower),
            (0x494, Upper), (0x495, Lower), (0x496, Upper), (0x497, Lower),
            (0x498, Upper), (0x499, Lower), (0x49a, Upper), (0x49b, Lower),
            (0x49c, Upper), (0x49d, Lower), (0x49e, Upper), (0x49f, Lower),
            (0x4a0, Upper), (0x4a1, Lower), (0x4a2, Upper), (0x4a3, Lower),
            (0x4a4, Upper), (0x4a5, Lower), (0x4a6, Upper), (0x4a7, Lower),
            (0x4a8, Upper), (0x4a9, Lower), (0x4aa, Upper), (0x4ab, Lower),
            (0x4ac, Upper), (0x4ad, Lower), (0x4ae, Upper), (0x4af, Lower),
            (0x4b0, Upper), (0x4b1, Lower), (0x4b2, Upper), (0x4b3, Lower),
            (0x4b4, Upper), (0x4b5, Lower), (0x4b6, Upper), (0x4b7, Lower),
            (0x4b8, Upper), (0x4b9, Lower), (0x4ba, Upper), (0x4bb, Lower),
            (0x4bc, Upper), (0x4bd, Lower), (0x4be, Upper), (0x4bf, Lower),
            (0x4c0, Upper), (0x4c2, Lower), (0x4c3, Upper), (0x4c4, Lower),
            (0x4c5, Upper), (0x4c6, Lower), (0x4c7, Upper), (0x4c8, Lower),
            (0x4c9, Upper), (0x4ca, Lower), (0x4cb, Upper), (0x4cc, Lower),
            (0x4cd, Upper), (0x4ce, Lower), (0x4d0, Upper), (0x4d1, Lower),
            (0x4d2, Upper), (0x4d3, Lower), (0x4d4, Upper), (0x4d5, Lower),
            (0x4d6, Upper), (0x4d7, Lower), (0x4d8, Upper), (0x4d9, Lower),
            (0x4da, Upper), (0x4db, Lower), (0x4dc, Upper), (0x4dd, Lower),
            (0x4de, Upper), (0x4df, Lower), (0x4e0, Upper), (0x4e1, Lower),
            (0x4e2, Upper), (0x4e3, Lower), (0x4e4, Upper), (0x4e5, Lower),
            (0x4e6, Upper), (0x4e7, Lower), (0x4e8, Upper), (0x4e9, Lower),
            (0x4ea, Upper), (0x4eb, Lower), (0x4ec, Upper), (0x4ed, Lower),
            (0x4ee, Upper), (0x4ef, Lower), (0x4f0, Upper), (0x4f1, Lower),
            (0x4f2, Upper), (0x4f3, Lower), (0x4f4, Upper), (0x4f5, Lower),
            (0x4f6, Upper), (0x4f7, Lower), (0x4f8, Upper), (0x4f9, Lower),
            (0x4fa, Upper), (0x4fb, Lower), (0x4fc, Upper), (0x4fd, Lower),
            (0x4fe, Upper), (0x4ff, Lower), (0x500, Upper), (0x501, Lower),
            (0x502, Upper), (0x503, Lower), (0x504, Upper), (0x505, Lower),
            (0x506, Upper), (0x507, Lower), (0x508, Upper), (0x509, Lower),
            (0x50a, Upper), (0x50b, Lower), (0x50c, Upper), (0x50d, Lower),
            (0x50e, Upper), (0x50f, Lower), (0x510, Upper), (0x511, Lower),
            (0x512, Upper), (0x513, Lower), (0x514, Upper), (0x515, Lower),
            (0x516, Upper), (0x517, Lower), (0x518, Upper), (0x519, Lower),
            (0x51a, Upper), (0x51b, Lower), (0x51c, Upper), (0x51d, Lower),
            (0x51e, Upper), (0x51f, Lower), (0x520, Upper), (0x521, Lower),
            (0x522, Upper), (0x523, Lower), (0x524, Upper), (0x525, Lower),
            (0x526, Upper), (0x527, Lower), (0x528, Upper), (0x529, Lower),
            (0x52a, Upper), (0x52b, Lower), (0x52c, Upper), (0x52d, Lower),
            (0x52e, Upper), (0x52f, Lower), (0x530, Other), (0x531, Upper),
            (0x557, Other), (0x559, OLetter), (0x55a, Other), (0x55d, SContinue),
            (0x55e, Other), (0x560, Lower), (0x589, STerm), (0x58a, Other),
            (0x591, Extend), (0x5be, Other), (0x5bf, Extend), (0x5c0, Other),
            (0x5c1, Extend), (0x5c3, Other), (0x5c4, Extend), (0x5c6, Other),
            (0x5c7, Extend), (0x5c8, Other), (0x5d0, OLetter), (0x5eb, Other),
            (0x5ef, OLetter), (0x5f4, Other), (0x600, Format), (0x606, Other),
            (0x60c, SContinue), (0x60e, Other), (0x610, Extend), (0x61b, Other),
            (0x61c, Format), (0x61d, STerm), (0x620, OLetter), (0x64b, Extend),
            (0x660, Numeric), (0x66a, Other), (0x66b, Numeric), (0x66d, Other),
            (0x66e, OLetter), (0x670, Extend), (0x671, OLetter), (0x6d4, STerm),
            (0x6d5, OLetter), (0x6d6, Extend), (0x6dd, Format), (0x6de, Other),
            (0x6df, Extend), (0x6e5, OLetter), (0x6e7, Extend), (0x6e9, Other),
            (0x6ea, Extend), (0x6ee, OLetter), (0x6f0, Numeric), (0x6fa, OLetter),
            (0x6fd, Other), (0x6ff, OLetter), (0x700, STerm), (0x703, Other),
            (0x70f, Format), (0x710, OLetter), (0x711, Extend), (0x712, OLetter),
            (0x730, Extend), (0x74b, Other), (0x74d, OLetter), (0x7a6, Extend),
            (0x7b1, OLetter), (0x7b2, Other), (0x7c0, Numeric), (0x7ca, OLetter),
            (0x7eb, Extend), (0x7f4, OLetter), (0x7f6, Other), (0x7f8, SContinue),
            (0x7f9, STerm), (0x7fa, OLetter), (0x7fb, Other), (0x7fd, Extend),
            (0x7fe, Other), (0x800, OLetter), (0x816, Extend), (0x81a, OLetter),
            (0x81b, Extend), (0x824, OLetter), (0x825, Extend), (0x828, OLetter),
            (0x829, Extend), (0x82e, Other), (0x837, STerm), (0x838, Other),
            (0x839, STerm), (0x83a, Other), (0x83d, STerm), (0x83f, Other),
            (0x840, OLetter), (0x859, Extend), (0x85c, Other), (0x860, OLetter),
            (0x86b, Other), (0x870, OLetter), (0x888, Other), (0x889, OLetter),
            (0x88f, Other), (0x890, Format), (0x892, Other), (0x898, Extend),
            (0x8a0, OLetter), (0x8ca, Extend), (0x8e2, Format), (0x8e3, Extend),
            (0x904, OLetter), (0x93a, Extend), (0x93d, OLetter), (0x93e, Extend),
            (0x950, OLetter), (0x951, Extend), (0x958, OLetter), (0x962, Extend),
            (0x964, STerm), (0x966, Numeric), (0x970, Other), (0x971, OLetter),
            (0x981, Extend), (0x984, Other), (0x985, OLetter), (0x98d, Other),
            (0x98f, OLetter), (0x991, Other), (0x993, OLetter), (0x9a9, Other),
            (0x9aa, OLetter), (0x9b1, Other), (0x9b2, OLetter), (0x9b3, Other),
            (0x9b6, OLetter), (0x9ba, Other), (0x9bc, Extend), (0x9bd, OLetter),
            (0x9be, Extend), (0x9c5, Other), (0x9c7, Extend), (0x9c9, Other),
            (0x9cb, Extend), (0x9ce, OLetter), (0x9cf, Other), (0x9d7, Extend),
            (0x9d8, Other), (0x9dc, OLetter), (0x9de, Other), (0x9df, OLetter),
            (0x9e2, Extend), (0x9e4, Other), (0x9e6, Numeric), (0x9f0, OLetter),
            (0x9f2, Other), (0x9fc, OLetter), (0x9fd, Other), (0x9fe, Extend),
            (0x9ff, Other), (0xa01, Extend), (0xa04, Other), (0xa05, OLetter),
            (0xa0b, Other), (0xa0f, OLetter), (0xa11, Other), (0xa13, OLetter),
            (0xa29, Other), (0xa2a, OLetter), (0xa31, Other), (0xa32, OLetter),
            (0xa34, Other), (0xa35, OLetter), (0xa37, Other), (0xa38, OLetter),
            (0xa3a, Other), (0xa3c, Extend), (0xa3d, Other), (0xa3e, Extend),
            (0xa43, Other), (0xa47, Extend), (0xa49, Other), (0xa4b, Extend),
            (0xa4e, Other), (0xa51, Extend), (0xa52, Other), (0xa59, OLetter),
            (0xa5d, Other), (0xa5e, OLetter), (0xa5f, Other), (0xa66, Numeric),
            (0xa70, Extend), (0xa72, OLetter), (0xa75, Extend), (0xa76, Other),
            (0xa81, Extend), (0xa84, Other), (0xa85, OLetter), (0xa8e, Other),
            (0xa8f, OLetter), (0xa92, Other), (0xa93, OLetter), (0xaa9, Other),
            (0xaaa, OLetter), (0xab1, Other), (0xab2, OLetter), (0xab4, Other),
            (0xab5, OLetter), (0xaba, Other), (0xabc, Extend), (0xabd, OLetter),
            (0xabe, Extend), (0xac6, Other), (0xac7, Extend), (0xaca, Other),
            (0xacb, Extend), (0xace, Other), (0xad0, OLetter), (0xad1, Other),
            (0xae0, OLetter), (0xae2, Extend), (0xae4, Other), (0xae6, Numeric),
            (0xaf0, Other), (0xaf9, OLetter), (0xafa, Extend), (0xb00, Other),
            (0xb01, Extend), (0xb04, Other), (0xb05, OLetter), (0xb0d, Other),
            (0xb0f, OLetter), (0xb11, Other), (0xb13, OLetter), (0xb29, Other),
            (0xb2a, OLetter), (0xb31, Other), (0xb32, OLetter), (0xb34, Other),
            (0xb35, OLetter), (0xb3a, Other), (0xb3c, Extend), (0xb3d, OLetter),
            (0xb3e, Extend), (0xb45, Other), (0xb47, Extend), (0xb49, Other),
            (0xb4b, Extend), (0xb4e, Other), (0xb55, Extend), (0xb58, Other),
            (0xb5c, OLetter), (0xb5e, Other), (0xb5f, OLetter), (0xb62, Extend),
            (0xb64, Other), (0xb66, Numeric), (0xb70, Other), (0xb71, OLetter),
            (0xb72, Other), (0xb82, Extend), (0xb83, OLetter), (0xb84, Other),
            (0xb85, OLetter), (0xb8b, Other), (0xb8e, OLetter), (0xb91, Other),
            (0xb92, OLetter), (0xb96, Other), (0xb99, OLetter), (0xb9b, Other),
            (0xb9c, OLetter), (0xb9d, Other), (0xb9e, OLetter), (0xba0, Other),
            (0xba3, OLetter), (0xba5, Other), (0xba8, OLetter), (0xbab, Other),
            (0xbae, OLetter), (0xbba, Other), (0xbbe, Extend), (0xbc3, Other),
            (0xbc6, Extend), (0xbc9, Other), (0xbca, Extend), (0xbce, Other),
            (0xbd0, OLetter), (0xbd1, Other), (0xbd7, Extend), (0xbd8, Other),
            (0xbe6, Numeric), (0xbf0, Other), (0xc00, Extend), (0xc05, OLetter),
            (0xc0d, Other), (0xc0e, OLetter), (0xc11, Other), (0xc12, OLetter),
            (0xc29, Other), (0xc2a, OLetter), (0xc3a, Other), (0xc3c, Extend),
            (0xc3d, OLetter), (0xc3e, Extend), (0xc45, Other), (0xc46, Extend),
            (0xc49, Other), (0xc4a, Extend), (0xc4e, Other), (0xc55, Extend),
            (0xc57, Other), (0xc58, OLetter), (0xc5b, Other), (0xc5d, OLetter),
            (0xc5e, Other), (0xc60, OLetter), (0xc62, Extend), (0xc64, Other),
            (0xc66, Numeric), (0xc70, Other), (0xc80, OLetter), (0xc81, Extend),
            (0xc84, Other), (0xc85, OLetter), (0xc8d, Other), (0xc8e, OLetter),
            (0xc91, Other), (0xc92, OLetter), (0xca9, Other), (0xcaa, OLetter),
            (0xcb4, Other), (0xcb5, OLetter), (0xcba, Other), (0xcbc, Extend),
            (0xcbd, OLetter), (0xcbe, Extend), (0xcc5, Other), (0xcc6, Extend),
            (0xcc9, Other), (0xcca, Extend), (0xcce, Other), (0xcd5, Extend),
            (0xcd7, Other), (0xcdd, OLetter), (0xcdf, Other), (0xce0, OLetter),
            (0xce2, Extend), (0xce4, Other), (0xce6, Numeric), (0xcf0, Other),
            (0xcf1, OLetter), (0xcf3, Other), (0xd00, Extend), (0xd04, OLetter),
            (0xd0d, Other), (0xd0e, OLetter), (0xd11, Other), (0xd12, OLetter),
            (0xd3b, Extend), (0xd3d, OLetter), (0xd3e, Extend), (0xd45, Other),
            (0xd46, Extend), (0xd49, Other), (0xd4a, Extend), (0xd4e, OLetter),
            (0xd4f, Other), (0xd54, OLetter), (0xd57, Extend), (0xd58, Other),
            (0xd5f, OLetter), (0xd62, Extend), (0xd64, Other), (0xd66, Numeric),
            (0xd70, Other), (0xd7a, OLetter), (0xd80, Other), (0xd81, Extend),
            (0xd84, Other), (0xd85, OLetter), (0xd97, Other), (0xd9a, OLetter),
            (0xdb2, Other), (0xdb3, OLetter), (0xdbc, Other), (0xdbd, OLetter),
            (0xdbe, Other), (0xdc0, OLetter), (0xdc7, Other), (0xdca, Extend),
            (0xdcb, Other), (0xdcf, Extend), (0xdd5, Other), (0xdd6, Extend),
            (0xdd7, Other), (0xdd8, Extend), (0xde0, Other), (0xde6, Numeric),
            (0xdf0, Other), (0xdf2, Extend), (0xdf4, Other), (0xe01, OLetter),
            (0xe31, Extend), (0xe32, OLetter), (0xe34, Extend), (0xe3b, Other),
            (0xe40, OLetter), (0xe47, Extend), (0xe4f, Other), (0xe50, Numeric),
            (0xe5a, Other), (0xe81, OLetter), (0xe83, Other), (0xe84, OLetter),
            (0xe85, Other), (0xe86, OLetter), (0xe8b, Other), (0xe8c, OLetter),
            (0xea4, Other), (0xea5, OLetter), (0xea6, Other), (0xea7, OLetter),
            (0xeb1, Extend), (0xeb2, OLetter), (0xeb4, Extend), (0xebd, OLetter),
            (0xebe, Other), (0xec0, OLetter), (0xec5, Other), (0xec6, OLetter),
            (0xec7, Other), (0xec8, Extend), (0xece, Other), (0xed0, Numeric),
            (0xeda, Other), (0xedc, OLetter), (0xee0, Other), (0xf00, OLetter),
            (0xf01, Other), (0xf18, Extend), (0xf1a, Other), (0xf20, Numeric),
            (0xf2a, Other), (0xf35, Extend), (0xf36, Other), (0xf37, Extend),
            (0xf38, Other), (0xf39, Extend), (0xf3a, Close), (0xf3e, Extend),
            (0xf40, OLetter), (0xf48, Other), (0xf49, OLetter), (0xf6d, Other),
            (0xf71, Extend), (0xf85, Other), (0xf86, Extend), (0xf88, OLetter),
            (0xf8d, Extend), (0xf98, Other), (0xf99, Extend), (0xfbd, Other),
            (0xfc6, Extend), (0xfc7, Other), (0x1000, OLetter), (0x102b, Extend),
            (0x103f, OLetter), (0x1040, Numeric), (0x104a, STerm), (0x104c, Other),
            (0x1050, OLetter), (0x1056, Extend), (0x105a, OLetter), (0x105e, Extend),
            (0x1061, OLetter), (0x1062, Extend), (0x1065, OLetter), (0x1067, Extend),
            (0x106e, OLetter), (0x1071, Extend), (0x1075, OLetter), (0x1082, Extend),
            (0x108e, OLetter), (0x108f, Extend), (0x1090, Numeric), (0x109a, Extend),
            (0x109e, Other), (0x10a0, Upper), (0x10c6, Other), (0x10c7, Upper),
            (0x10c8, Other), (0x10cd, Upper), (0x10ce, Other), (0x10d0, Lower),
            (0x10fb, Other), (0x10fc, Lower), (0x1100, OLetter), (0x1249, Other),
            (0x124a, OLetter), (0x124e, Other), (0x1250, OLetter), (0x1257, Other),
            (0x1258, OLetter), (0x1259, Other), (0x125a, OLetter), (0x125e, Other),
            (0x1260, OLetter), (0x1289, Other), (0x128a, OLetter), (0x128e, Other),
            (0x1290, OLetter), (0x12b1, Other), (0x12b2, OLetter), (0x12b6, Other),
            (0x12b8, OLetter), (0x12bf, Other), (0x12c0, OLetter), (0x12c1, Other),
            (0x12c2, OLetter), (0x12c6, Other), (0x12c8, OLetter), (0x12d7, Other),
            (0x12d8, OLetter), (0x1311, Other), (0x1312, OLetter), (0x1316, Other),
            (0x1318, OLetter), (0x135b, Other), (0x135d, Extend), (0x1360, Other),
            (0x1362, STerm), (0x1363, Other), (0x1367, STerm), (0x1369, Other),
            (0x1380, OLetter), (0x1390, Other), (0x13a0, Upper), (0x13f6, Other),
            (0x13f8, Lower), (0x13fe, Other), (0x1401, OLetter), (0x166d, Other),
            (0x166e, STerm), (0x166f, OLetter), (0x1680, Sp), (0x1681, OLetter),
            (0x169b, Close), (0x169d, Other), (0x16a0, OLetter), (0x16eb, Other),
            (0x16ee, OLetter), (0x16f9, Other), (0x1700, OLetter), (0x1712, Extend),
            (0x1716, Other), (0x171f, OLetter), (0x1732, Extend), (0x1735, STerm),
            (0x1737, Other), (0x1740, OLetter), (0x1752, Extend), (0x1754, Other),
            (0x1760, OLetter), (0x176d, Other), (0x176e, OLetter), (0x1771, Other),
            (0x1772, Extend), (0x1774, Other), (0x1780, OLetter), (0x17b4, Extend),
            (0x17d4, Other), (0x17d7, OLetter), (0x17d8, Other), (0x17dc, OLetter),
            (0x17dd, Extend), (0x17de, Other), (0x17e0, Numeric), (0x17ea, Other),
            (0x1802, SContinue), (0x1803, STerm), (0x1804, Other), (0x1808, SContinue),
            (0x1809, STerm), (0x180a, Other), (0x180b, Extend), (0x180e, Format),
            (0x180f, Extend), (0x1810, Numeric), (0x181a, Other), (0x1820, OLetter),
            (0x1879, Other), (0x1880, OLetter), (0x1885, Extend), (0x1887, OLetter),
            (0x18a9, Extend), (0x18aa, OLetter), (0x18ab, Other), (0x18b0, OLetter),
            (0x18f6, Other), (0x1900, OLetter), (0x191f, Other), (0x1920, Extend),
            (0x192c, Other), (0x1930, Extend), (0x193c, Other), (0x1944, STerm),
            (0x1946, Numeric), (0x1950, OLetter), (0x196e, Other), (0x1970, OLetter),
            (0x1975, Other), (0x1980, OLetter), (0x19ac, Other), (0x19b0, OLetter),
            (0x19ca, Other), (0x19d0, Numeric), (0x19da, Other), (0x1a00, OLetter),
            (0x1a17, Extend), (0x1a1c, Other), (0x1a20, OLetter), (0x1a55, Extend),
            (0x1a5f, Other), (0x1a60, Extend), (0x1a7d, Other), (0x1a7f, Extend),
            (0x1a80, Numeric), (0x1a8a, Other), (0x1a90, Numeric), (0x1a9a, Other),
            (0x1aa7, OLetter), (0x1aa8, STerm), (0x1aac, Other), (0x1ab0, Extend),
            (0x1acf, Other), (0x1b00, Extend), (0x1b05, OLetter), (0x1b34, Extend),
            (0x1b45, OLetter), (0x1b4d, Other), (0x1b50, Numeric), (0x1b5a, STerm),
            (0x1b5c, Other), (0x1b5e, STerm), (0x1b60, Other), (0x1b6b, Extend),
            (0x1b74, Other), (0x1b80, Extend), (0x1b83, OLetter), (0x1ba1, Extend),
            (0x1bae, OLetter), (0x1bb0, Numeric), (0x1bba, OLetter), (0x1be6, Extend),
            (0x1bf4, Other), (0x1c00, OLetter), (0x1c24, Extend), (0x1c38, Other),
            (0x1c3b, STerm), (0x1c3d, Other), (0x1c40, Numeric), (0x1c4a, Other),
            (0x1c4d, OLetter), (0x1c50, Numeric), (0x1c5a, OLetter), (0x1c7e, STerm),
            (0x1c80, Lower), (0x1c89, Other), (0x1c90, Upper), (0x1cbb, Other),
            (0x1cbd, Upper), (0x1cc0, Other), (0x1cd0, Extend), (0x1cd3, Other),
            (0x1cd4, Extend), (0x1ce9, OLetter), (0x1ced, Extend), (0x1cee, OLetter),
            (0x1cf4, Extend), (0x1cf5, OLetter), (0x1cf7, Extend), (0x1cfa, OLetter),
            (0x1cfb, Other), (0x1d00, Lower), (0x1dc0, Extend), (0x1e00, Upper),
            (0x1e01, Lower), (0x1e02, Upper), (0x1e03, Lower), (0x1e04, Upper),
            (0x1e05, Lower), (0x1e06, Upper), (0x1e07, Lower), (0x1e08, Upper),
            (0x1e09, Lower), (0x1e0a, Upper), (0x1e0b, Lower), (0x1e0c, Upper),
            (0x1e0d, Lower), (0x1e0e, Upper), (0x1e0f, Lower), (0x1e10, Upper),
            (0x1e11, Lower), (0x1e12, Upper), (0x1e13, Lower), (0x1e14, Upper),
            (0x1e15, Lower), (0x1e16, Upper), (0x1e17, Lower), (0x1e18, Upper),
            (0x1e19, Lower), (0x1e1a, Upper), (0x1e1b, Lower), (0x1e1c, Upper),
            (0x1e1d, Lower), (0x1e1e, Upper), (0x1e1f, Lower), (0x1e20, Upper),
            (0x1e21, Lower), (0x1e22, Upper), (0x1e23, Lower), (0x1e24, Upper),
            (0x1e25, Lower), (0x1e26, Upper), (0x1e27, Lower), (0x1e28, Upper),
            (0x1e29, Lower), (0x1e2a, Upper), (0x1e2b, Lower), (0x1e2c, Upper),
            (0x1e2d, Lower), (0x1e2e, Upper), (0x1e2f, Lower), (0x1e30, Upper),
            (0x1e31, Lower), (0x1e32, Upper), (0x1e33, Lower), (0x1e34, Upper),
            (0x1e35, Lower), (0x1e36, Upper), (0x1e37, Lower), (0x1e38, Upper),
            (0x1e39, Lower), (0x1e3a, Upper), (0x1e3b, Lower), (0x1e3c, Upper),
            (0x1e3d, Lower), (0x1e3e, Upper), (0x1e3f, Lower), (0x1e40, Upper),
            (0x1e41, Lower), (0x1e42, Upper), (0x1e43, Lower), (0x1e44, Upper),
            (0x1e45, Lower), (0x1e46, Upper), (0x1e47, Lower), (0x1e48, Upper),
            (0x1e49, Lower), (0x1e4a, Upper), (0x1e4b, Lower), (0x1e4c, Upper),
            (0x1e4d, Lower), (0x1e4e, Upper), (0x1e4f, Lower), (0x1e50, Upper),
            (0x1e51, Lower), (0x1e52, Upper), (0x1e53, Lower), (0x1e54, Upper),
            (0x1e55, Lower), (0x1e56, Upper), (0x1e57, Lower), (0x1e58, Upper),
            (0x1e59, Lower), (0x1e5a, Upper), (0x1e5b, Lower), (0x1e5c, Upper),
            (0x1e5d, Lower), (0x1e5e, Upper), (0x1e5f, Lower), (0x1e60, Upper),
            (0x1e61, Lower), (0x1e62, Upper), (0x1e63, Lower), (0x1e64, Upper),
            (0x1e65, Lower), (0x1e66, Upper), (0x1e67, Lower), (0x1e68, Upper),
            (0x1e69, Lower), (0x1e6a, Upper), (0x1e6b, Lower), (0x1e6c, Upper),
            (0x1e6d, Lower), (0x1e6e, Upper), (0x1e6f, Lower), (0x1e70, Upper),
            (0x1e71, Lower), (0x1e72, Upper), (0x1e73, Lower), (0x1e74, Upper),
            (0x1e75, Lower), (0x1e76, Upper), (0x1e77, Lower), (0x1e78, Upper),
            (0x1e79, Lower), (0x1e7a, Upper), (0x1e7b, Lower), (0x1e7c, Upper),
            (0x1e7d, Lower), (0x1e7e, Upper), (0x1e7f, Lower), (0x1e80, Upper),
            (0x1e81, Lower), (0x1e82, Upper), (0x1e83, Lower), (0x1e84, Upper),
            (0x1e85, Lower), (0x1e86, Upper), (0x1e87, Lower), (0x1e88, Upper),
            (0x1e89, Lower), (0x1e8a, Upper), (0x1e8b, Lower), (0x1e8c, Upper),
            (0x1e8d, Lower), (0x1e8e, Upper), (0x1e8f, Lower), (0x1e90, Upper),
            (0x1e91, Lower), (0x1e92, Upper), (0x1e93, Lower), (0x1e94, Upper),
            (0x1e95, Lower), (0x1e9e, Upper), (0x1e9f, Lower), (0x1ea0, Upper),
            (0x1ea1, Lower), (0x1ea2, Upper), (0x1ea3, Lower), (0x1ea4, Upper),
            (0x1ea5, Lower), (0x1ea6, Upper), (0x1ea7, Lower), (0x1ea8, Upper),
            (0x1ea9, Lower), (0x1eaa, Upper), (0x1eab, Lower), (0x1eac, Upper),
            (0x1ead, Lower), (0x1eae, Upper), (0x1eaf, Lower), (0x1eb0, Upper),
            (0x1eb1, Lower), (0x1eb2, Upper), (0x1eb3, Lower), (0x1eb4, Upper),
            (0x1eb5, Lower), (0x1eb6, Upper), (0x1eb7, Lower), (0x1eb8, Upper),
            (0x1eb9, Lower), (0x1eba, Upper), (0x1ebb, Lower), (0x1ebc, Upper),
            (0x1ebd, Lower), (0x1ebe, Upper), (0x1ebf, Lower), (0x1ec0, Upper),
            (0x1ec1, Lower), (0x1ec2, Upper), (0x1ec3, Lower), (0x1ec4, Upper),
            (0x1ec5, Lower), (0x1ec6, Upper), (0x1ec7, Lower), (0x1ec8, Upper),
            (0x1ec9, Lower), (0x1eca, Upper), (0x1ecb, Lower), (0x1ecc, Upper),
            (0x1ecd, Lower), (0x1ece, Upper), (0x1ecf, Lower), (0x1ed0, Upper),
            (0x1ed1, Lower), (0x1ed2, Upper), (0x1ed3, Lower), (0x1ed4, Upper),
            (0x1ed5, Lower), (0x1ed6, Upper), (0x1ed7, Lower), (0x1ed8, Upper),
            (0x1ed9, Lower), (0x1eda, Upper), (0x1edb, Lower), (0x1edc, Upper),
            (0x1edd, Lower), (0x1ede, Upper), (0x1edf, Lower), (0x1ee0, Upper),
            (0x1ee1, Lower), (0x1ee2, Upper), (0x1ee3, Lower), (0x1ee4, Upper),
            (0x1ee5, Lower), (0x1ee6, Upper), (0x1ee7, Lower), (0x1ee8, Upper),
            (0x1ee9, Lower), (0x1eea, Upper), (0x1eeb, Lower), (0x1eec, Upper),
            (0x1eed, Lower), (0x1eee, Upper), (0x1eef, Lower), (0x1ef0, Upper),
            (0x1ef1, Lower), (0x1ef2, Upper), (0x1ef3, Lower), (0x1ef4, Upper),
            (0x1ef5, Lower), (0x1ef6, Upper), (0x1ef7, Lower), (0x1ef8, Upper),
            (0x1ef9, Lower), (0x1efa, Upper), (0x1efb, Lower), (0x1efc, Upper),
            (0x1efd, Lower), (0x1efe, Upper), (0x1eff, Lower), (0x1f08, Upper),
            (0x1f10, Lower), (0x1f16, Other), (0x1f18, Upper), (0x1f1e, Other),
            (0x1f20, Lower), (0x1f28, Upper), (0x1f30, Lower), (0x1f38, Upper),
            (0x1f40, Lower), (0x1f46, Other), (0x1f48, Upper), (0x1f4e, Other),
            (0x1f50, Lower), (0x1f58, Other), (0x1f59, Upper), (0x1f5a, Other),
            (0x1f5b, Upper), (0x1f5c, Other), (0x1f5d, Upper), (0x1f5e, Other),
            (0x1f5f, Upper), (0x1f60, Lower), (0x1f68, Upper), (0x1f70, Lower),
            (0x1f7e, Other), (0x1f80, Lower), (0x1f88, Upper), (0x1f90, Lower),
            (0x1f98, Upper), (0x1fa0, Lower), (0x1fa8, Upper), (0x1fb0, Lower),
            (0x1fb5, Other), (0x1fb6, Lower), (0x1fb8, Upper), (0x1fbd, Other),
            (0x1fbe, Lower), (0x1fbf, Other), (0x1fc2, Lower), (0x1fc5, Other),
            (0x1fc6, Lower), (0x1fc8, Upper), (0x1fcd, Other), (0x1fd0, Lower),
            (0x1fd4, Other), (0x1fd6, Lower), (0x1fd8, Upper), (0x1fdc, Other),
            (0x1fe0, Lower), (0x1fe8, Upper), (0x1fed, Other), (0x1ff2, Lower),
            (0x1ff5, Other), (0x1ff6, Lower), (0x1ff8, Upper), (0x1ffd, Other),
            (0x2000, Sp), (0x200b, Format), (0x200c, Extend), (0x200e, Format),
            (0x2010, Other), (0x2013, SContinue), (0x2015, Other), (0x2018, Close),
            (0x2020, Other), (0x2024, ATerm), (0x2025, Other), (0x2028, Sep),
            (0x202a, Format), (0x202f, Sp), (0x2030, Other), (0x2039, Close),
            (0x203b, Other), (0x203c, STerm), (0x203e, Other), (0x2045, Close),
            (0x2047, STerm), (0x204a, Other), (0x205f, Sp), (0x2060, Format),
            (0x2065, Other), (0x2066, Format), (0x2070, Other), (0x2071, Lower),
            (0x2072, Other), (0x207d, Close), (0x207f, Lower), (0x2080, Other),
            (0x208d, Close), (0x208f, Other), (0x2090, Lower), (0x209d, Other),
            (0x20d0, Extend), (0x20f1, Other), (0x2102, Upper), (0x2103, Other),
            (0x2107, Upper), (0x2108, Other), (0x210a, Lower), (0x210b, Upper),
            (0x210e, Lower), (0x2110, Upper), (0x2113, Lower), (0x2114, Other),
            (0x2115, Upper), (0x2116, Other), (0x2119, Upper), (0x211e, Other),
            (0x2124, Upper), (0x2125, Other), (0x2126, Upper), (0x2127, Other),
            (0x2128, Upper), (0x2129, Other), (0x212a, Upper), (0x212e, Other),
            (0x212f, Lower), (0x2130, Upper), (0x2134, Lower), (0x2135, OLetter),
            (0x2139, Lower), (0x213a, Other), (0x213c, Lower), (0x213e, Upper),
            (0x2140, Other), (0x2145, Upper), (0x2146, Lower), (0x214a, Other),
            (0x214e, Lower), (0x214f, Other), (0x2160, Upper), (0x2170, Lower),
            (0x2180, OLetter), (0x2183, Upper), (0x2184, Lower), (0x2185, OLetter),
            (0x2189, Other), (0x2308, Close), (0x230c, Other), (0x2329, Close),
            (0x232b, Other), (0x24b6, Upper), (0x24d0, Lower), (0x24ea, Other),
            (0x2768, Close), (0x2776, Other), (0x27c5, Close), (0x27c7, Other),
            (0x27e6, Close), (0x27f0, Other), (0x2983, Close), (0x2999, Other),
            (0x29d8, Close), (0x29dc, Other), (0x29fc, Close), (0x29fe, Other),
            (0x2c00, Upper), (0x2c30, Lower), (0x2c60, Upper), (0x2c61, Lower),
            (0x2c62, Upper), (0x2c65, Lower), (0x2c67, Upper), (0x2c68, Lower),
            (0x2c69, Upper), (0x2c6a, Lower), (0x2c6b, Upper), (0x2c6c, Lower),
            (0x2c6d, Upper), (0x2c71, Lower), (0x2c72, Upper), (0x2c73, Lower),
            (0x2c75, Upper), (0x2c76, Lower), (0x2c7e, Upper), (0x2c81, Lower),
            (0x2c82, Upper), (0x2c83, Lower), (0x2c84, Upper), (0x2c85, Lower),
            (0x2c86, Upper), (0x2c87, Lower), (0x2c88, Upper), (0x2c89, Lower),
            (0x2c8a, Upper), (0x2c8b, Lower), (0x2c8c, Upper), (0x2c8d, Lower),
            (0x2c8e, Upper), (0x2c8f, Lower), (0x2c90, Upper), (0x2c91, Lower),
            (0x2c92, Upper), (0x2c93, Lower), (0x2c94, Upper), (0x2c95, Lower),
            (0x2c96, Upper), (0x2c97, Lower), (0x2c98, Upper), (0x2c99, Lower),
            (0x2c9a, Upper), (0x2c9b, Lower), (0x2c9c, Upper), (0x2c9d, Lower),
            (0x2c9e, Upper), (0x2c9f, Lower), (0x2ca0, Upper), (0x2ca1, Lower),
            (0x2ca2, Upper), (0x2ca3, Lower), (0x2ca4, Upper), (0x2ca5, Lower),
            (0x2ca6, Upper), (0x2ca7, Lower), (0x2ca8, Upper), (0x2ca9, Lower),
            (0x2caa, Upper), (0x2cab, Lower), (0x2cac, Upper), (0x2cad, Lower),
            (0x2cae, Upper), (0x2caf, Lower), (0x2cb0, Upper), (0x2cb1, Lower),
            (0x2cb2, Upper), (0x2cb3, Lower), (0x2cb4, Upper), (0x2cb5, Lower),
            (0x2cb6, Upper), (0x2cb7, Lower), (0x2cb8, Upper), (0x2cb9, Lower),
            (0x2cba, Upper), (0x2cbb, Lower), (0x2cbc, Upper), (0x2cbd, Lower),
            (0x2cbe, Upper), (0x2cbf, Lower), (0x2cc0, Upper), (0x2cc1, Lower),
            (0x2cc2, Upper), (0x2cc3, Lower), (0x2cc4, Upper), (0x2cc5, Lower),
            (0x2cc6, Upper), (0x2cc7, Lower), (0x2cc8, Upper), (0x2cc9, Lower),
            (0x2cca, Upper), (0x2ccb, Lower), (0x2ccc, Upper), (0x2ccd, Lower),
            (0x2cce, Upper), (0x2ccf, Lower), (0x2cd0, Upper), (0x2cd1, Lower),
            (0x2cd2, Upper), (0x2cd3, Lower), (0x2cd4, Upper), (0x2cd5, Lower),
            (0x2cd6, Upper), (0x2cd7, Lower), (0x2cd8, Upper), (0x2cd9, Lower),
            (0x2cda, Upper), (0x2cdb, Lower), (0x2cdc, Upper), (0x2cdd, Lower),
            (0x2cde, Upper), (0x2cdf, Lower), (0x2ce0, Upper), (0x2ce1, Lower),
            (0x2ce2, Upper), (0x2ce3, Lower), (0x2ce5, Other), (0x2ceb, Upper),
            (0x2cec, Lower), (0x2ced, Upper), (0x2cee, Lower), (0x2cef, Extend),
            (0x2cf2, Upper), (0x2cf3, Lower), (0x2cf4, Other), (0x2d00, Lower),
            (0x2d26, Other), (0x2d27, Lower), (0x2d28, Other), (0x2d2d, Lower),
            (0x2d2e, Other), (0x2d30, OLetter), (0x2d68, Other), (0x2d6f, OLetter),
            (0x2d70, Other), (0x2d7f, Extend), (0x2d80, OLetter), (0x2d97, Other),
            (0x2da0, OLetter), (0x2da7, Other), (0x2da8, OLetter), (0x2daf, Other),
            (0x2db0, OLetter), (0x2db7, Other), (0x2db8, OLetter), (0x2dbf, Other),
            (0x2dc0, OLetter), (0x2dc7, Other), (0x2dc8, OLetter), (0x2dcf, Other),
            (0x2dd0, OLetter), (0x2dd7, Other), (0x2dd8, OLetter), (0x2ddf, Other),
            (0x2de0, Extend), (0x2e00, Other), (0x2e02, Close), (0x2e06, Other),
            (0x2e09, Close), (0x2e0b, Other), (0x2e0c, Close), (0x2e0e, Other),
            (0x2e1c, Close), (0x2e1e, Other), (0x2e20, Close), (0x2e2a, Other),
            (0x2e2e, STerm), (0x2e2f, OLetter), (0x2e30, Other), (0x2e3c, STerm),
            (0x2e3d, Other), (0x2e42, Close), (0x2e43, Other), (0x2e55, Close),
            (0x2e5d, Other), (0x3000, Sp), (0x3001, SContinue), (0x3002, STerm),
            (0x3003, Other), (0x3005, OLetter), (0x3008, Close), (0x3012, Other),
            (0x3014, Close), (0x301c, Other), (0x301d, Close), (0x3020, Other),
            (0x3021, OLetter), (0x302a, Extend), (0x3030, Other), (0x3031, OLetter),
            (0x3036, Other), (0x3038, OLetter), (0x303d, Other), (0x3041, OLetter),
            (0x3097, Other), (0x3099, Extend), (0x309b, Other), (0x309d, OLetter),
            (0x30a0, Other), (0x30a1, OLetter), (0x30fb, Other), (0x30fc, OLetter),
            (0x3100, Other), (0x3105, OLetter), (0x3130, Other), (0x3131, OLetter),
            (0x318f, Other), (0x31a0, OLetter), (0x31c0, Other), (0x31f0, OLetter),
            (0x3200, Other), (0x3400, OLetter), (0x4dc0, Other), (0x4e00, OLetter),
            (0xa48d, Other), (0xa4d0, OLetter), (0xa4fe, Other), (0xa4ff, STerm),
            (0xa500, OLetter), (0xa60d, Other), (0xa60e, STerm), (0xa610, OLetter),
            (0xa620, Numeric), (0xa62a, OLetter), (0xa62c, Other), (0xa640, Upper),
            (0xa641, Lower), (0xa642, Upper), (0xa643, Lower), (0xa644, Upper),
            (0xa645, Lower), (0xa646, Upper), (0xa647, Lower), (0xa648, Upper),
            (0xa649, Lower), (0xa64a, Upper), (0xa64b, Lower), (0xa64c, Upper),
            (0xa64d, Lower), (0xa64e, Upper), (0xa64f, Lower), (0xa650, Upper),
            (0xa651, Lower), (0xa652, Upper), (0xa653, Lower), (0xa654, Upper),
            (0xa655, Lower), (0xa656, Upper), (0xa657, Lower), (0xa658, Upper),
            (0xa659, Lower), (0xa65a, Upper), (0xa65b, Lower), (0xa65c, Upper),
            (0xa65d, Lower), (0xa65e, Upper), (0xa65f, Lower), (0xa660, Upper),
            (0xa661, Lower), (0xa662, Upper), (0xa663, Lower), (0xa664, Upper),
            (0xa665, Lower), (0xa666, Upper), (0xa667, Lower), (0xa668, Upper),
            (0xa669, Lower), (0xa66a, Upper), (0xa66b, Lower), (0xa66c, Upper),
            (0xa66d, Lower), (0xa66e, OLetter), (0xa66f, Extend), (0xa673, Other),
            (0xa674, Extend), (0xa67e, Other), (0xa67f, OLetter), (0xa680, Upper),
            (0xa681, Lower), (0xa682, Upper), (0xa683, Lower), (0xa684, Upper),
            (0xa685, Lower), (0xa686, Upper), (0xa687, Lower), (0xa688, Upper),
            (0xa689, Lower), (0xa68a, Upper), (0xa68b, Lower), (0xa68c, Upper),
            (0xa68d, Lower), (0xa68e, Upper), (0xa68f, Lower), (0xa690, Upper),
            (0xa691, Lower), (0xa692, Upper), (0xa693, Lower), (0xa694, Upper),
            (0xa695, Lower), (0xa696, Upper), (0xa697, Lower), (0xa698, Upper),
            (0xa699, Lower), (0xa69a, Upper), (0xa69b, Lower), (0xa69e, Extend),
            (0xa6a0, OLetter), (0xa6f0, Extend), (0xa6f2, Other), (0xa6f3, STerm),
            (0xa6f4, Other), (0xa6f7, STerm), (0xa6f8, Other), (0xa717, OLetter),
            (0xa720, Other), (0xa722, Upper), (0xa723, Lower), (0xa724, Upper),
            (0xa725, Lower), (0xa726, Upper), (0xa727, Lower), (0xa728, Upper),
            (0xa729, Lower), (0xa72a, Upper), (0xa72b, Lower), (0xa72c, Upper),
            (0xa72d, Lower), (0xa72e, Upper), (0xa72f, Lower), (0xa732, Upper),
            (0xa733, Lower), (0xa734, Upper), (0xa735, Lower), (0xa736, Upper),
            (0xa737, Lower), (0xa738, Upper), (0xa739, Lower), (0xa73a, Upper),
            (0xa73b, Lower), (0xa73c, Upper), (0xa73d, Lower), (0xa73e, Upper),
            (0xa73f, Lower), (0xa740, Upper), (0xa741, Lower), (0xa742, Upper),
            (0xa743, Lower), (0xa744, Upper), (0xa745, Lower), (0xa746, Upper),
            (0xa747, Lower), (0xa748, Upper), (0xa749, Lower), (0xa74a, Upper),
            (0xa74b, Lower), (0xa74c, Upper), (0xa74d, Lower), (0xa74e, Upper),
            (0xa74f, Lower), (0xa750, Upper), (0xa751, Lower), (0xa752, Upper),
            (0xa753, Lower), (0xa754, Upper), (0xa755, Lower), (0xa756, Upper),
            (0xa757, Lower), (0xa758, Upper), (0xa759, Lower), (0xa75a, Upper),
            (0xa75b, Lower), (0xa75c, Upper), (0xa75d, Lower), (0xa75e, Upper),
            (0xa75f, Lower), (0xa760, Upper), (0xa761, Lower), (0xa762, Upper),
            (0xa763, Lower), (0xa764, Upper), (0xa765, Lower), (0xa766, Upper),
            (0xa767, Lower), (0xa768, Upper), (0xa769, Lower), (0xa76a, Upper),
            (0xa76b, Lower), (0xa76c, Upper), (0xa76d, Lower), (0xa76e, Upper),
            (0xa76f, Lower), (0xa779, Upper), (0xa77a, Lower), (0xa77b, Upper),
            (0xa77c, Lower), (0xa77d, Upper), (0xa77f, Lower), (0xa780, Upper),
            (0xa781, Lower), (0xa782, Upper), (0xa783, Lower), (0xa784, Upper),
            (0xa785, Lower), (0xa786, Upper), (0xa787, Lower), (0xa788, OLetter),
            (0xa789, Other), (0xa78b, Upper), (0xa78c, Lower), (0xa78d, Upper),
            (0xa78e, Lower), (0xa78f, OLetter), (0xa790, Upper), (0xa791, Lower),
            (0xa792, Upper), (0xa793, Lower), (0xa796, Upper), (0xa797, Lower),
            (0xa798, Upper), (0xa799, Lower), (0xa79a, Upper), (0xa79b, Lower),
            (0xa79c, Upper), (0xa79d, Lower), (0xa79e, Upper), (0xa79f, Lower),
            (0xa7a0, Upper), (0xa7a1, Lower), (0xa7a2, Upper), (0xa7a3, Lower),
            (0xa7a4, Upper), (0xa7a5, Lower), (0xa7a6, Upper), (0xa7a7, Lower),
            (0xa7a8, Upper), (0xa7a9, Lower), (0xa7aa, Upper), (0xa7af, Lower),
            (0xa7b0, Upper), (0xa7b5, Lower), (0xa7b6, Upper), (0xa7b7, Lower),
            (0xa7b8, Upper), (0xa7b9, Lower), (0xa7ba, Upper), (0xa7bb, Lower),
            (0xa7bc, Upper), (0xa7bd, Lower), (0xa7be, Upper), (0xa7bf, Lower),
            (0xa7c0, Upper), (0xa7c1, Lower), (0xa7c2, Upper), (0xa7c3, Lower),
            (0xa7c4, Upper), (0xa7c8, Lower), (0xa7c9, Upper), (0xa7ca, Lower),
            (0xa7cb, Other), (0xa7d0, Upper), (0xa7d1, Lower), (0xa7d2, Other),
            (0xa7d3, Lower), (0xa7d4, Other), (0xa7d5, Lower), (0xa7d6, Upper),
            (0xa7d7, Lower), (0xa7d8, Upper), (0xa7d9, Lower), (0xa7da, Other),
            (0xa7f2, OLetter), (0xa7f5, Upper), (0xa7f6, Lower), (0xa7f7, OLetter),
            (0xa7f8, Lower), (0xa7fb, OLetter), (0xa802, Extend), (0xa803, OLetter),
            (0xa806, Extend), (0xa807, OLetter), (0xa80b, Extend), (0xa80c, OLetter),
            (0xa823, Extend), (0xa828, Other), (0xa82c, Extend), (0xa82d, Other),
            (0xa840, OLetter), (0xa874, Other), (0xa876, STerm), (0xa878, Other),
            (0xa880, Extend), (0xa882, OLetter), (0xa8b4, Extend), (0xa8c6, Other),
            (0xa8ce, STerm), (0xa8d0, Numeric), (0xa8da, Other), (0xa8e0, Extend),
            (0xa8f2, OLetter), (0xa8f8, Other), (0xa8fb, OLetter), (0xa8fc, Other),
            (0xa8fd, OLetter), (0xa8ff, Extend), (0xa900, Numeric), (0xa90a, OLetter),
            (0xa926, Extend), (0xa92e, Other), (0xa92f, STerm), (0xa930, OLetter),
            (0xa947, Extend), (0xa954, Other), (0xa960, OLetter), (0xa97d, Other),
            (0xa980, Extend), (0xa984, OLetter), (0xa9b3, Extend), (0xa9c1, Other),
            (0xa9c8, STerm), (0xa9ca, Other), (0xa9cf, OLetter), (0xa9d0, Numeric),
            (0xa9da, Other), (0xa9e0, OLetter), (0xa9e5, Extend), (0xa9e6, OLetter),
            (0xa9f0, Numeric), (0xa9fa, OLetter), (0xa9ff, Other), (0xaa00, OLetter),
            (0xaa29, Extend), (0xaa37, Other), (0xaa40, OLetter), (0xaa43, Extend),
            (0xaa44, OLetter), (0xaa4c, Extend), (0xaa4e, Other), (0xaa50, Numeric),
            (0xaa5a, Other), (0xaa5d, STerm), (0xaa60, OLetter), (0xaa77, Other),
            (0xaa7a, OLetter), (0xaa7b, Extend), (0xaa7e, OLetter), (0xaab0, Extend),
            (0xaab1, OLetter), (0xaab2, Extend), (0xaab5, OLetter), (0xaab7, Extend),
            (0xaab9, OLetter), (0xaabe, Extend), (0xaac0, OLetter), (0xaac1, Extend),
            (0xaac2, OLetter), (0xaac3, Other), (0xaadb, OLetter), (0xaade, Other),
            (0xaae0, OLetter), (0xaaeb, Extend), (0xaaf0, STerm), (0xaaf2, OLetter),
            (0xaaf5, Extend), (0xaaf7, Other), (0xab01, OLetter), (0xab07, Other),
            (0xab09, OLetter), (0xab0f, Other), (0xab11, OLetter), (0xab17, Other),
            (0xab20, OLetter), (0xab27, Other), (0xab28, OLetter), (0xab2f, Other),
            (0xab30, Lower), (0xab5b, Other), (0xab5c, Lower), (0xab6a, Other),
            (0xab70, Lower), (0xabc0, OLetter), (0xabe3, Extend), (0xabeb, STerm),
            (0xabec, Extend), (0xabee, Other), (0xabf0, Numeric), (0xabfa, Other),
            (0xac00, OLetter), (0xd7a4, Other), (0xd7b0, OLetter), (0xd7c7, Other),
            (0xd7cb, OLetter), (0xd7fc, Other), (0xf900, OLetter), (0xfa6e, Other),
            (0xfa70, OLetter), (0xfada, Other), (0xfb00, Lower), (0xfb07, Other),
            (0xfb13, Lower), (0xfb18, Other), (0xfb1d, OLetter), (0xfb1e, Extend),
            (0xfb1f, OLetter), (0xfb29, Other), (0xfb2a, OLetter), (0xfb37, Other),
            (0xfb38, OLetter), (0xfb3d, Other), (0xfb3e, OLetter), (0xfb3f, Other),
            (0xfb40, OLetter), (0xfb42, Other), (0xfb43, OLetter), (0xfb45, Other),
            (0xfb46, OLetter), (0xfbb2, Other), (0xfbd3, OLetter), (0xfd3e, Close),
            (0xfd40, Other), (0xfd50, OLetter), (0xfd90, Other), (0xfd92, OLetter),
            (0xfdc8, Other), (0xfdf0, OLetter), (0xfdfc, Other), (0xfe00, Extend),
            (0xfe10, SContinue), (0xfe12, Other), (0xfe13, SContinue), (0xfe14, Other),
            (0xfe17, Close), (0xfe19, Other), (0xfe20, Extend), (0xfe30, Other),
            (0xfe31, SContinue), (0xfe33, Other), (0xfe35, Close), (0xfe45, Other),
            (0xfe47, Close), (0xfe49, Other), (0xfe50, SContinue), (0xfe52, ATerm),
            (0xfe53, Other), (0xfe55, SContinue), (0xfe56, STerm), (0xfe58, SContinue),
            (0xfe59, Close), (0xfe5f, Other), (0xfe63, SContinue), (0xfe64, Other),
            (0xfe70, OLetter), (0xfe75, Other), (0xfe76, OLetter), (0xfefd, Other),
            (0xfeff, Format), (0xff00, Other), (0xff01, STerm), (0xff02, Other),
            (0xff08, Close), (0xff0a, Other), (0xff0c, SContinue), (0xff0e, ATerm),
            (0xff0f, Other), (0xff1a, SContinue), (0xff1b, Other), (0xff1f, STerm),
            (0xff20, Other), (0xff21, Upper), (0xff3b, Close), (0xff3c, Other),
            (0xff3d, Close), (0xff3e, Other), (0xff41, Lower), (0xff5b, Close),
            (0xff5c, Other), (0xff5d, Close), (0xff5e, Other), (0xff5f, Close),
            (0xff61, STerm), (0xff62, Close), (0xff64, SContinue), (0xff65, Other),
            (0xff66, OLetter), (0xff9e, Extend), (0xffa0, OLetter), (0xffbf, Other),
            (0xffc2, OLetter), (0xffc8, Other), (0xffca, OLetter), (0xffd0, Other),
            (0xffd2, OLetter), (0xffd8, Other), (0xffda, OLetter), (0xffdd, Other),
            (0xfff9, Format), (0xfffc, Other), (0x10000, OLetter), (0x1000c, Other),
            (0x1000d, OLetter), (0x10027, Other), (0x10028, OLetter), (0x1003b, Other),
            (0x1003c, OLetter), (0x1003e, Other), (0x1003f, OLetter), (0x1004e, Other),
            (0x10050, OLetter), (0x1005e, Other), (0x10080, OLetter), (0x100fb, Other),
            (0x10140, OLetter), (0x10175, Other), (0x101fd, Extend), (0x101fe, Other),
            (0x10280, OLetter), (0x1029d, Other), (0x102a0, OLetter), (0x102d1, Other),
            (0x102e0, Extend), (0x102e1, Other), (0x10300, OLetter), (0x10320, Other),
            (0x1032d, OLetter), (0x1034b, Other), (0x10350, OLetter), (0x10376, Extend),
            (0x1037b, Other), (0x10380, OLetter), (0x1039e, Other), (0x103a0, OLetter),
            (0x103c4, Other), (0x103c8, OLetter), (0x103d0, Other), (0x103d1, OLetter),
            (0x103d6, Other), (0x10400, Upper), (0x10428, Lower), (0x10450, OLetter),
            (0x1049e, Other), (0x104a0, Numeric), (0x104aa, Other), (0x104b0, Upper),
            (0x104d4, Other), (0x104d8, Lower), (0x104fc, Other), (0x10500, OLetter),
            (0x10528, Other), (0x10530, OLetter), (0x10564, Other), (0x10570, Upper),
            (0x1057b, Other), (0x1057c, Upper), (0x1058b, Other), (0x1058c, Upper),
            (0x10593, Other), (0x10594, Upper), (0x10596, Other), (0x10597, Lower),
            (0x105a2, Other), (0x105a3, Lower), (0x105b2, Other), (0x105b3, Lower),
            (0x105ba, Other), (0x105bb, Lower), (0x105bd, Other), (0x10600, OLetter),
            (0x10737, Other), (0x10740, OLetter), (0x10756, Other), (0x10760, OLetter),
            (0x10768, Other), (0x10780, Lower), (0x10781, OLetter), (0x10783, Lower),
            (0x10786, Other), (0x10787, Lower), (0x107b1, Other), (0x107b2, Lower),
            (0x107bb, Other), (0x10800, OLetter), (0x10806, Other), (0x10808, OLetter),
            (0x10809, Other), (0x1080a, OLetter), (0x10836, Other), (0x10837, OLetter),
            (0x10839, Other), (0x1083c, OLetter), (0x1083d, Other), (0x1083f, OLetter),
            (0x10856, Other), (0x10860, OLetter), (0x10877, Other), (0x10880, OLetter),
            (0x1089f, Other), (0x108e0, OLetter), (0x108f3, Other), (0x108f4, OLetter),
            (0x108f6, Other), (0x10900, OLetter), (0x10916, Other), (0x10920, OLetter),
            (0x1093a, Other), (0x10980, OLetter), (0x109b8, Other), (0x109be, OLetter),
            (0x109c0, Other), (0x10a00, OLetter), (0x10a01, Extend), (0x10a04, Other),
            (0x10a05, Extend), (0x10a07, Other), (0x10a0c, Extend), (0x10a10, OLetter),
            (0x10a14, Other), (0x10a15, OLetter), (0x10a18, Other), (0x10a19, OLetter),
            (0x10a36, Other), (0x10a38, Extend), (0x10a3b, Other), (0x10a3f, Extend),
            (0x10a40, Other), (0x10a56, STerm), (0x10a58, Other), (0x10a60, OLetter),
            (0x10a7d, Other), (0x10a80, OLetter), (0x10a9d, Other), (0x10ac0, OLetter),
            (0x10ac8, Other), (0x10ac9, OLetter), (0x10ae5, Extend), (0x10ae7, Other),
            (0x10b00, OLetter), (0x10b36, Other), (0x10b40, OLetter), (0x10b56, Other),
            (0x10b60, OLetter), (0x10b73, Other), (0x10b80, OLetter), (0x10b92, Other),
            (0x10c00, OLetter), (0x10c49, Other), (0x10c80, Upper), (0x10cb3, Other),
            (0x10cc0, Lower), (0x10cf3, Other), (0x10d00, OLetter), (0x10d24, Extend),
            (0x10d28, Other), (0x10d30, Numeric), (0x10d3a, Other), (0x10e80, OLetter),
            (0x10eaa, Other), (0x10eab, Extend), (0x10ead, Other), (0x10eb0, OLetter),
            (0x10eb2, Other), (0x10f00, OLetter), (0x10f1d, Other), (0x10f27, OLetter),
            (0x10f28, Other), (0x10f30, OLetter), (0x10f46, Extend), (0x10f51, Other),
            (0x10f55, STerm), (0x10f5a, Other), (0x10f70, OLetter), (0x10f82, Extend),
            (0x10f86, STerm), (0x10f8a, Other), (0x10fb0, OLetter), (0x10fc5, Other),
            (0x10fe0, OLetter), (0x10ff7, Other), (0x11000, Extend), (0x11003, OLetter),
            (0x11038, Extend), (0x11047, STerm), (0x11049, Other), (0x11066, Numeric),
            (0x11070, Extend), (0x11071, OLetter), (0x11073, Extend), (0x11075, OLetter),
            (0x11076, Other), (0x1107f, Extend), (0x11083, OLetter), (0x110b0, Extend),
            (0x110bb, Other), (0x110bd, Format), (0x110be, STerm), (0x110c2, Extend),
            (0x110c3, Other), (0x110cd, Format), (0x110ce, Other), (0x110d0, OLetter),
            (0x110e9, Other), (0x110f0, Numeric), (0x110fa, Other), (0x11100, Extend),
            (0x11103, OLetter), (0x11127, Extend), (0x11135, Other), (0x11136, Numeric),
            (0x11140, Other), (0x11141, STerm), (0x11144, OLetter), (0x11145, Extend),
            (0x11147, OLetter), (0x11148, Other), (0x11150, OLetter), (0x11173, Extend),
            (0x11174, Other), (0x11176, OLetter), (0x11177, Other), (0x11180, Extend),
            (0x11183, OLetter), (0x111b3, Extend), (0x111c1, OLetter), (0x111c5, STerm),
            (0x111c7, Other), (0x111c9, Extend), (0x111cd, STerm), (0x111ce, Extend),
            (0x111d0, Numeric), (0x111da, OLetter), (0x111db, Other), (0x111dc, OLetter),
            (0x111dd, Other), (0x111de, STerm), (0x111e0, Other), (0x11200, OLetter),
            (0x11212, Other), (0x11213, OLetter), (0x1122c, Extend), (0x11238, STerm),
            (0x1123a, Other), (0x1123b, STerm), (0x1123d, Other), (0x1123e, Extend),
            (0x1123f, Other), (0x11280, OLetter), (0x11287, Other), (0x11288, OLetter),
            (0x11289, Other), (0x1128a, OLetter), (0x1128e, Other), (0x1128f, OLetter),
            (0x1129e, Other), (0x1129f, OLetter), (0x112a9, STerm), (0x112aa, Other),
            (0x112b0, OLetter), (0x112df, Extend), (0x112eb, Other), (0x112f0, Numeric),
            (0x112fa, Other), (0x11300, Extend), (0x11304, Other), (0x11305, OLetter),
            (0x1130d, Other), (0x1130f, OLetter), (0x11311, Other), (0x11313, OLetter),
            (0x11329, Other), (0x1132a, OLetter), (0x11331, Other), (0x11332, OLetter),
            (0x11334, Other), (0x11335, OLetter), (0x1133a, Other), (0x1133b, Extend),
            (0x1133d, OLetter), (0x1133e, Extend), (0x11345, Other), (0x11347, Extend),
            (0x11349, Other), (0x1134b, Extend), (0x1134e, Other), (0x11350, OLetter),
            (0x11351, Other), (0x11357, Extend), (0x11358, Other), (0x1135d, OLetter),
            (0x11362, Extend), (0x11364, Other), (0x11366, Extend), (0x1136d, Other),
            (0x11370, Extend), (0x11375, Other), (0x11400, OLetter), (0x11435, Extend),
            (0x11447, OLetter), (0x1144b, STerm), (0x1144d, Other), (0x11450, Numeric),
            (0x1145a, Other), (0x1145e, Extend), (0x1145f, OLetter), (0x11462, Other),
            (0x11480, OLetter), (0x114b0, Extend), (0x114c4, OLetter), (0x114c6, Other),
            (0x114c7, OLetter), (0x114c8, Other), (0x114d0, Numeric), (0x114da, Other),
            (0x11580, OLetter), (0x115af, Extend), (0x115b6, Other), (0x115b8, Extend),
            (0x115c1, Other), (0x115c2, STerm), (0x115c4, Other), (0x115c9, STerm),
            (0x115d8, OLetter), (0x115dc, Extend), (0x115de, Other), (0x11600, OLetter),
            (0x11630, Extend), (0x11641, STerm), (0x11643, Other), (0x11644, OLetter),
            (0x11645, Other), (0x11650, Numeric), (0x1165a, Other), (0x11680, OLetter),
            (0x116ab, Extend), (0x116b8, OLetter), (0x116b9, Other), (0x116c0, Numeric),
            (0x116ca, Other), (0x11700, OLetter), (0x1171b, Other), (0x1171d, Extend),
            (0x1172c, Other), (0x11730, Numeric), (0x1173a, Other), (0x1173c, STerm),
            (0x1173f, Other), (0x11740, OLetter), (0x11747, Other), (0x11800, OLetter),
            (0x1182c, Extend), (0x1183b, Other), (0x118a0, Upper), (0x118c0, Lower),
            (0x118e0, Numeric), (0x118ea, Other), (0x118ff, OLetter), (0x11907, Other),
            (0x11909, OLetter), (0x1190a, Other), (0x1190c, OLetter), (0x11914, Other),
            (0x11915, OLetter), (0x11917, Other), (0x11918, OLetter), (0x11930, Extend),
            (0x11936, Other), (0x11937, Extend), (0x11939, Other), (0x1193b, Extend),
            (0x1193f, OLetter), (0x11940, Extend), (0x11941, OLetter), (0x11942, Extend),
            (0x11944, STerm), (0x11945, Other), (0x11946, STerm), (0x11947, Other),
            (0x11950, Numeric), (0x1195a, Other), (0x119a0, OLetter), (0x119a8, Other),
            (0x119aa, OLetter), (0x119d1, Extend), (0x119d8, Other), (0x119da, Extend),
            (0x119e1, OLetter), (0x119e2, Other), (0x119e3, OLetter), (0x119e4, Extend),
            (0x119e5, Other), (0x11a00, OLetter), (0x11a01, Extend), (0x11a0b, OLetter),
            (0x11a33, Extend), (0x11a3a, OLetter), (0x11a3b, Extend), (0x11a3f, Other),
            (0x11a42, STerm), (0x11a44, Other), (0x11a47, Extend), (0x11a48, Other),
            (0x11a50, OLetter), (0x11a51, Extend), (0x11a5c, OLetter), (0x11a8a, Extend),
            (0x11a9a, Other), (0x11a9b, STerm), (0x11a9d, OLetter), (0x11a9e, Other),
            (0x11ab0, OLetter), (0x11af9, Other), (0x11c00, OLetter), (0x11c09, Other),
            (0x11c0a, OLetter), (0x11c2f, Extend), (0x11c37, Other), (0x11c38, Extend),
            (0x11c40, OLetter), (0x11c41, STerm), (0x11c43, Other), (0x11c50, Numeric),
            (0x11c5a, Other), (0x11c72, OLetter), (0x11c90, Other), (0x11c92, Extend),
            (0x11ca8, Other), (0x11ca9, Extend), (0x11cb7, Other), (0x11d00, OLetter),
            (0x11d07, Other), (0x11d08, OLetter), (0x11d0a, Other), (0x11d0b, OLetter),
            (0x11d31, Extend), (0x11d37, Other), (0x11d3a, Extend), (0x11d3b, Other),
            (0x11d3c, Extend), (0x11d3e, Other), (0x11d3f, Extend), (0x11d46, OLetter),
            (0x11d47, Extend), (0x11d48, Other), (0x11d50, Numeric), (0x11d5a, Other),
            (0x11d60, OLetter), (0x11d66, Other), (0x11d67, OLetter), (0x11d69, Other),
            (0x11d6a, OLetter), (0x11d8a, Extend), (0x11d8f, Other), (0x11d90, Extend),
            (0x11d92, Other), (0x11d93, Extend), (0x11d98, OLetter), (0x11d99, Other),
            (0x11da0, Numeric), (0x11daa, Other), (0x11ee0, OLetter), (0x11ef3, Extend),
            (0x11ef7, STerm), (0x11ef9, Other), (0x11fb0, OLetter), (0x11fb1, Other),
            (0x12000, OLetter), (0x1239a, Other), (0x12400, OLetter), (0x1246f, Other),
            (0x12480, OLetter), (0x12544, Other), (0x12f90, OLetter), (0x12ff1, Other),
            (0x13000, OLetter), (0x1342f, Other), (0x13430, Format), (0x13439, Other),
            (0x14400, OLetter), (0x14647, Other), (0x16800, OLetter), (0x16a39, Other),
            (0x16a40, OLetter), (0x16a5f, Other), (0x16a60, Numeric), (0x16a6a, Other),
            (0x16a6e, STerm), (0x16a70, OLetter), (0x16abf, Other), (0x16ac0, Numeric),
            (0x16aca, Other), (0x16ad0, OLetter), (0x16aee, Other), (0x16af0, Extend),
            (0x16af5, STerm), (0x16af6, Other), (0x16b00, OLetter), (0x16b30, Extend),
            (0x16b37, STerm), (0x16b39, Other), (0x16b40, OLetter), (0x16b44, STerm),
            (0x16b45, Other), (0x16b50, Numeric), (0x16b5a, Other), (0x16b63, OLetter),
            (0x16b78, Other), (0x16b7d, OLetter), (0x16b90, Other), (0x16e40, Upper),
            (0x16e60, Lower), (0x16e80, Other), (0x16e98, STerm), (0x16e99, Other),
            (0x16f00, OLetter), (0x16f4b, Other), (0x16f4f, Extend), (0x16f50, OLetter),
            (0x16f51, Extend), (0x16f88, Other), (0x16f8f, Extend), (0x16f93, OLetter),
            (0x16fa0, Other), (0x16fe0, OLetter), (0x16fe2, Other), (0x16fe3, OLetter),
            (0x16fe4, Extend), (0x16fe5, Other), (0x16ff0, Extend), (0x16ff2, Other),
            (0x17000, OLetter), (0x187f8, Other), (0x18800, OLetter), (0x18cd6, Other),
            (0x18d00, OLetter), (0x18d09, Other), (0x1aff0, OLetter), (0x1aff4, Other),
            (0x1aff5, OLetter), (0x1affc, Other), (0x1affd, OLetter), (0x1afff, Other),
            (0x1b000, OLetter), (0x1b123, Other), (0x1b150, OLetter), (0x1b153, Other),
            (0x1b164, OLetter), (0x1b168, Other), (0x1b170, OLetter), (0x1b2fc, Other),
            (0x1bc00, OLetter), (0x1bc6b, Other), (0x1bc70, OLetter), (0x1bc7d, Other),
            (0x1bc80, OLetter), (0x1bc89, Other), (0x1bc90, OLetter), (0x1bc9a, Other),
            (0x1bc9d, Extend), (0x1bc9f, STerm), (0x1bca0, Format), (0x1bca4, Other),
            (0x1cf00, Extend), (0x1cf2e, Other), (0x1cf30, Extend), (0x1cf47, Other),
            (0x1d165, Extend), (0x1d16a, Other), (0x1d16d, Extend), (0x1d173, Format),
            (0x1d17b, Extend), (0x1d183, Other), (0x1d185, Extend), (0x1d18c, Other),
            (0x1d1aa, Extend), (0x1d1ae, Other), (0x1d242, Extend), (0x1d245, Other),
            (0x1d400, Upper), (0x1d41a, Lower), (0x1d434, Upper), (0x1d44e, Lower),
            (0x1d455, Other), (0x1d456, Lower), (0x1d468, Upper), (0x1d482, Lower),
            (0x1d49c, Upper), (0x1d49d, Other), (0x1d49e, Upper), (0x1d4a0, Other),
            (0x1d4a2, Upper), (0x1d4a3, Other), (0x1d4a5, Upper), (0x1d4a7, Other),
            (0x1d4a9, Upper), (0x1d4ad, Other), (0x1d4ae, Upper), (0x1d4b6, Lower),
            (0x1d4ba, Other), (0x1d4bb, Lower), (0x1d4bc, Other), (0x1d4bd, Lower),
            (0x1d4c4, Other), (0x1d4c5, Lower), (0x1d4d0, Upper), (0x1d4ea, Lower),
            (0x1d504, Upper), (0x1d506, Other), (0x1d507, Upper), (0x1d50b, Other),
            (0x1d50d, Upper), (0x1d515, Other), (0x1d516, Upper), (0x1d51d, Other),
            (0x1d51e, Lower), (0x1d538, Upper), (0x1d53a, Other), (0x1d53b, Upper),
            (0x1d53f, Other), (0x1d540, Upper), (0x1d545, Other), (0x1d546, Upper),
            (0x1d547, Other), (0x1d54a, Upper), (0x1d551, Other), (0x1d552, Lower),
            (0x1d56c, Upper), (0x1d586, Lower), (0x1d5a0, Upper), (0x1d5ba, Lower),
            (0x1d5d4, Upper), (0x1d5ee, Lower), (0x1d608, Upper), (0x1d622, Lower),
            (0x1d63c, Upper), (0x1d656, Lower), (0x1d670, Upper), (0x1d68a, Lower),
            (0x1d6a6, Other), (0x1d6a8, Upper), (0x1d6c1, Other), (0x1d6c2, Lower),
            (0x1d6db, Other), (0x1d6dc, Lower), (0x1d6e2, Upper), (0x1d6fb, Other),
            (0x1d6fc, Lower), (0x1d715, Other), (0x1d716, Lower), (0x1d71c, Upper),
            (0x1d735, Other), (0x1d736, Lower), (0x1d74f, Other), (0x1d750, Lower),
            (0x1d756, Upper), (0x1d76f, Other), (0x1d770, Lower), (0x1d789, Other),
            (0x1d78a, Lower), (0x1d790, Upper), (0x1d7a9, Other), (0x1d7aa, Lower),
            (0x1d7c3, Other), (0x1d7c4, Lower), (0x1d7ca, Upper), (0x1d7cb, Lower),
            (0x1d7cc, Other), (0x1d7ce, Numeric), (0x1d800, Other), (0x1da00, Extend),
            (0x1da37, Other), (0x1da3b, Extend), (0x1da6d, Other), (0x1da75, Extend),
            (0x1da76, Other), (0x1da84, Extend), (0x1da85, Other), (0x1da88, STerm),
            (0x1da89, Other), (0x1da9b, Extend), (0x1daa0, Other), (0x1daa1, Extend),
            (0x1dab0, Other), (0x1df00, Lower), (0x1df0a, OLetter), (0x1df0b, Lower),
            (0x1df1f, Other), (0x1e000, Extend), (0x1e007, Other), (0x1e008, Extend),
            (0x1e019, Other), (0x1e01b, Extend), (0x1e022, Other), (0x1e023, Extend),
            (0x1e025, Other), (0x1e026, Extend), (0x1e02b, Other), (0x1e030, Lower),
            (0x1e06e, Other), (0x1e100, OLetter), (0x1e12d, Other), (0x1e130, Extend),
            (0x1e137, OLetter), (0x1e13e, Other), (0x1e140, Numeric), (0x1e14a, Other),
            (0x1e14e, OLetter), (0x1e14f, Other), (0x1e290, OLetter), (0x1e2ae, Extend),
            (0x1e2af, Other), (0x1e2c0, OLetter), (0x1e2ec, Extend), (0x1e2f0, Numeric),
            (0x1e2fa, Other), (0x1e7e0, OLetter), (0x1e7e7, Other), (0x1e7e8, OLetter),
            (0x1e7ec, Other), (0x1e7ed, OLetter), (0x1e7ef, Other), (0x1e7f0, OLetter),
            (0x1e7ff, Other), (0x1e800, OLetter), (0x1e8c5, Other), (0x1e8d0, Extend),
            (0x1e8d7, Other), (0x1e900, Upper), (0x1e922, Lower), (0x1e944, Extend),
            (0x1e94b, OLetter), (0x1e94c, Other), (0x1e950, Numeric), (0x1e95a, Other),
            (0x1ee00, OLetter), (0x1ee04, Other), (0x1ee05, OLetter), (0x1ee20, Other),
            (0x1ee21, OLetter), (0x1ee23, Other), (0x1ee24, OLetter), (0x1ee25, Other),
            (0x1ee27, OLetter), (0x1ee28, Other), (0x1ee29, OLetter), (0x1ee33, Other),
            (0x1ee34, OLetter), (0x1ee38, Other), (0x1ee39, OLetter), (0x1ee3a, Other),
            (0x1ee3b, OLetter), (0x1ee3c, Other), (0x1ee42, OLetter), (0x1ee43, Other),
            (0x1ee47, OLetter), (0x1ee48, Other), (0x1ee49, OLetter), (0x1ee4a, Other),
            (0x1ee4b, OLetter), (0x1ee4c, Other), (0x1ee4d, OLetter), (0x1ee50, Other),
            (0x1ee51, OLetter), (0x1ee53, Other), (0x1ee54, OLetter), (0x1ee55, Other),
            (0x1ee57, OLetter), (0x1ee58, Other), (0x1ee59, OLetter), (0x1ee5a, Other),
            (0x1ee5b, OLetter), (0x1ee5c, Other), (0x1ee5d, OLetter), (0x1ee5e, Other),
            (0x1ee5f, OLetter), (0x1ee60, Other), (0x1ee61, OLetter), (0x1ee63, Other),
            (0x1ee64, OLetter), (0x1ee65, Other), (0x1ee67, OLetter), (0x1ee6b, Other),
            (0x1ee6c, OLetter), (0x1ee73, Other), (0x1ee74, OLetter), (0x1ee78, Other),
            (0x1ee79, OLetter), (0x1ee7d, Other), (0x1ee7e, OLetter), (0x1ee7f, Other),
            (0x1ee80, OLetter), (0x1ee8a, Other), (0x1ee8b, OLetter), (0x1ee9c, Other),
            (0x1eea1, OLetter), (0x1eea4, Other), (0x1eea5, OLetter), (0x1eeaa, Other),
            (0x1eeab, OLetter), (0x1eebc, Other), (0x1f130, Upper), (0x1f14a, Other),
            (0x1f150, Upper), (0x1f16a, Other), (0x1f170, Upper), (0x1f18a, Other),
            (0x1fbf0, Numeric), (0x1fbfa, Other), (0x20000, OLetter), (0x2a6e0, Other),
            (0x2a700, OLetter), (0x2b739, Other), (0x2b740, OLetter), (0x2b81e, Other),
            (0x2b820, OLetter), (0x2cea2, Other), (0x2ceb0, OLetter), (0x2ebe1, Other),
            (0x2f800, OLetter), (0x2fa1e, Other), (0x30000, OLetter), (0x3134b, Other),
            (0xe0001, Format), (0xe0002, Other), (0xe0020, Extend), (0xe0080, Other),
            (0xe0100, Extend), (0xe01f0, Other),
        ],
        Other,
    );
}

