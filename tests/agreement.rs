use pretty_assertions::assert_eq;
use unicode_segmentation::UnicodeSegmentation;
use unitext::{
    canonical_composition, canonical_decomposition, compatibility_decomposition, Graphemes,
    Segmentation, Segments, Sentences, Utf16, Utf32, Words,
};

const SAMPLES: &[&str] = &[
    "The quick (\"brown\") fox can't jump 32.3 feet, right?",
    "Hello, world!\r\nSecond line. third part\n\nNew paragraph",
    "e.g. this is it. Next one? Yes! \u{201C}Quoted.\u{201D} Done",
    "\u{C7}a co\u{FB}te 1,234.56 \u{20AC}. Tr\u{E8}s cher! Non?",
    "\u{416}\u{438}\u{43B}\u{438}-\u{431}\u{44B}\u{43B}\u{438}. \u{41A}\u{43E}\u{43D}\u{435}\u{446}.",
    "\u{65E5}\u{672C}\u{8A9E}\u{306E}\u{30C6}\u{30AD}\u{30B9}\u{30C8}\u{3002}\u{6B21}\u{3002}",
    "\u{D55C}\u{AD6D}\u{C5B4} \u{1112}\u{1161}\u{11AB}",
    "a\u{301}\u{302}b\t\tc  d\u{200D}e",
    "\u{1F44D}\u{1F3FD} ok \u{1F1FA}\u{1F1F8}\u{1F1EB}\u{1F1F7}\u{1F1EC} \u{1F469}\u{200D}\u{1F4BB}!",
];

/// Segments `text` from its UTF-16 form and maps the unit ranges back to `&str`.
fn utf16_pieces<S: Segmentation>(text: &str) -> Vec<String> {
    let units: Vec<u16> = text.encode_utf16().collect();
    Segments::<S, Utf16>::new(&units)
        .map(|range| String::from_utf16(&units[range.unwrap()]).unwrap())
        .collect()
}

#[test]
fn test_graphemes_agree_with_unicode_segmentation() {
    for text in SAMPLES {
        let expected: Vec<&str> = text.graphemes(true).collect();
        assert_eq!(expected, unitext::graphemes(text).collect::<Vec<_>>());
        assert_eq!(expected, utf16_pieces::<Graphemes>(text));
    }
}

#[test]
fn test_words_agree_with_unicode_segmentation() {
    for text in SAMPLES {
        let expected: Vec<&str> = text.split_word_bounds().collect();
        assert_eq!(expected, unitext::words(text).collect::<Vec<_>>());
        assert_eq!(expected, utf16_pieces::<Words>(text));
    }
}

#[test]
fn test_sentences_agree_with_unicode_segmentation() {
    for text in SAMPLES {
        let expected: Vec<&str> = text.split_sentence_bounds().collect();
        assert_eq!(expected, unitext::sentences(text).collect::<Vec<_>>());
        assert_eq!(expected, utf16_pieces::<Sentences>(text));
    }
}

#[test]
fn test_segments_tile_the_input() {
    let text = SAMPLES.concat();
    let units: Vec<u32> = text.chars().map(|c| c as u32).collect();
    for window in [2, 3, 16] {
        let mut next = 0;
        for range in Segments::<Sentences, Utf32>::with_window(&units, window) {
            let range = range.unwrap();
            assert_eq!(next, range.start);
            assert!(range.end > range.start);
            next = range.end;
        }
        assert_eq!(units.len(), next);
    }
}

fn full_decomposition(c: u32, step: fn(u32) -> unitext::Expansion, out: &mut Vec<u32>) {
    let expansion = step(c);
    if expansion.is_empty() {
        out.push(c);
    } else {
        for &part in expansion.iter() {
            full_decomposition(part, step, out);
        }
    }
}

#[test]
fn test_decompositions_agree_with_unicode_normalization() {
    let mut checked = 0;
    for c in (0..0x3_0000).filter_map(char::from_u32) {
        let code = c as u32;
        if !canonical_decomposition(code).is_empty() {
            let mut ours = Vec::new();
            full_decomposition(code, canonical_decomposition, &mut ours);
            let mut theirs = Vec::new();
            unicode_normalization::char::decompose_canonical(c, |d| theirs.push(d as u32));
            assert_eq!(theirs, ours, "canonical decomposition of {:?}", c);
            checked += 1;
        }
        if !compatibility_decomposition(code).is_empty() {
            let mut ours = Vec::new();
            full_decomposition(code, compatibility_decomposition, &mut ours);
            let mut theirs = Vec::new();
            unicode_normalization::char::decompose_compatible(c, |d| theirs.push(d as u32));
            assert_eq!(theirs, ours, "compatibility decomposition of {:?}", c);
        }
    }
    assert!(checked > 10_000);
}

#[test]
fn test_compositions_agree_with_unicode_normalization() {
    for c in (0..0x3_0000).filter_map(char::from_u32) {
        if let [a, b] = canonical_decomposition(c as u32)[..] {
            let (ca, cb) = (char::from_u32(a).unwrap(), char::from_u32(b).unwrap());
            let theirs = unicode_normalization::char::compose(ca, cb).map(|c| c as u32);
            assert_eq!(theirs, canonical_composition(a, b), "composition of {:?}", c);
        }
    }
}
