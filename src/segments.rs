use crate::{
    codec::Encoding,
    codepoint_iter::CodepointIter,
    grapheme::Graphemes,
    policy::{ErrorPolicy, Ignore, Replace},
    segment::{find_boundary, Segmentation},
    sentence::Sentences,
    utf8::Utf8,
    word::Words,
};
use std::{collections::VecDeque, fmt, iter::FusedIterator, ops::Range};

/// Lookahead, in characters, buffered before the first boundary search.
pub const DEFAULT_WINDOW: usize = 4;

/// An iterator over the segments of an encoded buffer, as ranges of code units.
///
/// Characters are decoded and classified into a lookahead buffer on demand.
/// When the boundary engine cannot decide with what is buffered, the buffer
/// grows geometrically and the search is retried; emitted segments are
/// trimmed from the front.
///
/// Under [`Strict`](crate::Strict) a malformed sequence ends the input early:
/// the characters before it are segmented as if the text stopped there, and
/// the error is yielded once they are all emitted.
pub struct Segments<'a, S: Segmentation, E: Encoding = Utf8, P: ErrorPolicy = Replace> {
    chars: CodepointIter<'a, E, P>,
    classes: VecDeque<S::Class>,
    offsets: VecDeque<usize>,
    initial_window: usize,
    window: usize,
    eof: bool,
    pending: Option<P::Error>,
    failed: bool,
}

impl<'a, S: Segmentation, E: Encoding, P: ErrorPolicy> Segments<'a, S, E, P> {
    /// Segments `units` with the default lookahead.
    pub fn new(units: &'a [E::Unit]) -> Self {
        Self::with_window(units, DEFAULT_WINDOW)
    }

    /// Segments `units`, buffering `window` characters (at least two) before
    /// the first boundary search of each segment.
    pub fn with_window(units: &'a [E::Unit], window: usize) -> Self {
        let window = window.max(2);
        Segments {
            chars: CodepointIter::new(units),
            classes: VecDeque::with_capacity(window),
            offsets: VecDeque::with_capacity(window),
            initial_window: window,
            window,
            eof: false,
            pending: None,
            failed: false,
        }
    }

    /// Number of characters currently buffered.
    pub fn buffered(&self) -> usize {
        self.classes.len()
    }

    fn fill(&mut self) {
        while !self.eof && self.classes.len() < self.window {
            let offset = self.chars.offset();
            match self.chars.next() {
                Some(Ok(scalar)) => {
                    self.classes.push_back(S::classify(scalar));
                    self.offsets.push_back(offset);
                }
                Some(Err(err)) => {
                    self.pending = Some(err);
                    self.eof = true;
                }
                None => self.eof = true,
            }
        }
    }
}

impl<'a, S: Segmentation, E: Encoding, P: ErrorPolicy> Iterator for Segments<'a, S, E, P> {
    type Item = Result<Range<usize>, P::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            self.fill();
            if self.classes.is_empty() {
                self.failed = true;
                return self.pending.take().map(Err);
            }
            let boundary = find_boundary::<S>(self.classes.make_contiguous(), self.eof);
            if boundary == 0 {
                self.window = (self.window * 2).max(self.classes.len() + 1);
                log::trace!(
                    "no boundary among {} buffered characters, growing lookahead to {}",
                    self.classes.len(),
                    self.window
                );
                continue;
            }
            let start = self.offsets[0];
            let end = match self.offsets.get(boundary) {
                Some(&end) => end,
                None => self.chars.offset(),
            };
            self.classes.drain(..boundary);
            self.offsets.drain(..boundary);
            self.window = self.initial_window;
            return Some(Ok(start..end));
        }
    }
}

impl<'a, S: Segmentation, E: Encoding, P: ErrorPolicy> FusedIterator for Segments<'a, S, E, P> {}

impl<'a, S: Segmentation, E: Encoding, P: ErrorPolicy> fmt::Debug for Segments<'a, S, E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segments")
            .field("kind", &S::default())
            .field("offset", &self.offsets.front().copied().unwrap_or_else(|| self.chars.offset()))
            .field("buffered", &self.classes.len())
            .field("window", &self.window)
            .field("eof", &self.eof)
            .finish()
    }
}

/// Segments of a `&str`, as string slices.
pub struct StrSegments<'a, S: Segmentation> {
    text: &'a str,
    inner: Segments<'a, S, Utf8, Ignore>,
}

impl<'a, S: Segmentation> StrSegments<'a, S> {
    /// Segments `text`.
    pub fn new(text: &'a str) -> Self {
        StrSegments {
            text,
            inner: Segments::new(text.as_bytes()),
        }
    }
}

impl<'a, S: Segmentation> Iterator for StrSegments<'a, S> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let range = match self.inner.next()? {
            Ok(range) => range,
            Err(never) => match never {},
        };
        self.text.get(range)
    }
}

impl<'a, S: Segmentation> FusedIterator for StrSegments<'a, S> {}

impl<'a, S: Segmentation> fmt::Debug for StrSegments<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StrSegments").field(&self.inner).finish()
    }
}

/// The extended grapheme clusters of `text`.
pub fn graphemes(text: &str) -> StrSegments<'_, Graphemes> {
    StrSegments::new(text)
}

/// The words of `text`, along with the punctuation and whitespace between them.
pub fn words(text: &str) -> StrSegments<'_, Words> {
    StrSegments::new(text)
}

/// The sentences of `text`.
pub fn sentences(text: &str) -> StrSegments<'_, Sentences> {
    StrSegments::new(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{policy::Strict, utf16::Utf16};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_base_letter_with_two_marks() {
        let text = "e\u{301}\u{323}x";
        assert_eq!(vec!["e\u{301}\u{323}", "x"], graphemes(text).collect::<Vec<_>>());
    }

    #[test]
    fn test_hyphen_and_apostrophe() {
        assert_eq!(vec!["co", "-", "operate"], words("co-operate").collect::<Vec<_>>());
        assert_eq!(vec!["don't"], words("don't").collect::<Vec<_>>());
    }

    #[test]
    fn test_sentences() {
        let text = "Mr. Smith arrived. It was 3.5 km away! Really?";
        assert_eq!(
            vec!["Mr. ", "Smith arrived. ", "It was 3.5 km away! ", "Really?"],
            sentences(text).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_segments_cover_input() {
        let text = "Ça va? Très bien.\r\nLes 2 émojis 👩\u{200D}💻 et 🇫🇷 sont là…  Fin";
        for pieces in [
            graphemes(text).collect::<Vec<_>>(),
            words(text).collect::<Vec<_>>(),
            sentences(text).collect::<Vec<_>>(),
        ] {
            assert!(pieces.iter().all(|piece| !piece.is_empty()));
            assert_eq!(text, pieces.concat());
        }
    }

    #[test]
    fn test_long_runs_grow_lookahead() {
        let mut text = String::from("a");
        text.extend(std::iter::repeat('\u{300}').take(100));
        text.push('b');
        let clusters: Vec<&str> = graphemes(&text).collect();
        assert_eq!(2, clusters.len());
        assert_eq!("b", clusters[1]);

        let units: Vec<u16> = text.encode_utf16().collect();
        let ranges: Vec<_> = Segments::<Graphemes, Utf16>::with_window(&units, 2)
            .map(|range| range.unwrap())
            .collect();
        assert_eq!(vec![0..101, 101..102], ranges);
    }

    #[test]
    fn test_long_mark_run_in_words_and_sentences() {
        let mut text = String::from("a");
        text.extend(std::iter::repeat('\u{300}').take(20_000));
        text.push_str(" b");
        let pieces: Vec<&str> = words(&text).collect();
        assert_eq!(3, pieces.len());
        assert_eq!([" ", "b"], pieces[1..]);

        let mut text = String::from("Done.");
        text.extend(std::iter::repeat(' ').take(20_000));
        text.push_str("Next");
        let pieces: Vec<&str> = sentences(&text).collect();
        assert_eq!(2, pieces.len());
        assert_eq!("Next", pieces[1]);
    }

    #[test]
    fn test_ranges_are_in_code_units() {
        let units: Vec<u16> = "a😀b".encode_utf16().collect();
        let ranges: Vec<_> = Segments::<Graphemes, Utf16>::new(&units)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(vec![0..1, 1..3, 3..4], ranges);
    }

    #[test]
    fn test_strict_segmentation_emits_segments_before_error() {
        let bytes = b"ab \xFFcd";
        let mut segments = Segments::<Words, Utf8, Strict>::new(bytes);
        let items: Vec<_> = segments.by_ref().map(|item| item.map_err(|err| err.offset())).collect();
        assert_eq!(vec![Ok(0..2), Ok(2..3), Err(3)], items);
        assert_eq!(None, segments.next());

        let bytes = b"Hi. \xC0\x80";
        let items: Vec<_> = Segments::<Sentences, Utf8, Strict>::with_window(bytes, 2)
            .map(|item| item.map_err(|err| err.offset()))
            .collect();
        assert_eq!(vec![Ok(0..4), Err(4)], items);
    }

    #[test]
    fn test_strict_error_at_start() {
        let items: Vec<_> = Segments::<Graphemes, Utf8, Strict>::new(b"\xFFab")
            .map(|item| item.map_err(|err| err.offset()))
            .collect();
        assert_eq!(vec![Err(0)], items);
    }

    #[test]
    fn test_replace_segments_malformed_input() {
        let bytes = b"ab\xFFcd";
        let ranges: Vec<_> = Segments::<Graphemes, Utf8, Replace>::new(bytes)
            .map(|range| range.unwrap())
            .collect();
        assert_eq!(vec![0..1, 1..2, 2..3, 3..4, 4..5], ranges);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(None, graphemes("").next());
        assert_eq!(None, Segments::<Sentences>::new(&[]).next());
    }
}
