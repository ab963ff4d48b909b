//! Extended grapheme cluster boundaries.

use crate::{
    char_props::{grapheme_cluster_break, GraphemeClusterBreak},
    segment::{BreakClass, Rule, Segmentation, Verdict, Window},
};
use GraphemeClusterBreak::*;

impl BreakClass for GraphemeClusterBreak {
    const SOT: Self = Sot;
    const EOT: Self = Eot;
}

/// Segmentation into user-perceived characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Graphemes;

type W<'w> = Window<'w, GraphemeClusterBreak>;

/// What the characters before a candidate offset end with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GraphemeContext {
    /// Length of the run of regional indicators ending at the offset.
    pub regional_run: usize,
    /// Whether the text ends with `ExtPict Extend*`.
    pub in_pictograph: bool,
    /// Whether the text ends with `ExtPict Extend* ZWJ`.
    pub pictograph_zwj: bool,
}

fn gb3(w: &W<'_>, i: usize, _: &GraphemeContext) -> Verdict {
    match (w.before(i), w.after(i)) {
        (CR, LF) => Verdict::Keep,
        _ => Verdict::Pass,
    }
}

fn gb4(w: &W<'_>, i: usize, _: &GraphemeContext) -> Verdict {
    match w.before(i) {
        Control | CR | LF => Verdict::Break,
        _ => Verdict::Pass,
    }
}

fn gb5(w: &W<'_>, i: usize, _: &GraphemeContext) -> Verdict {
    match w.after(i) {
        Control | CR | LF => Verdict::Break,
        _ => Verdict::Pass,
    }
}

// Hangul syllable sequences.
fn gb6_8(w: &W<'_>, i: usize, _: &GraphemeContext) -> Verdict {
    match (w.before(i), w.after(i)) {
        (L, L | V | LV | LVT) | (LV | V, V | T) | (LVT | T, T) => Verdict::Keep,
        _ => Verdict::Pass,
    }
}

fn gb9(w: &W<'_>, i: usize, _: &GraphemeContext) -> Verdict {
    match w.after(i) {
        Extend | ZWJ | SpacingMark => Verdict::Keep,
        _ => Verdict::Pass,
    }
}

fn gb9b(w: &W<'_>, i: usize, _: &GraphemeContext) -> Verdict {
    match w.before(i) {
        Prepend => Verdict::Keep,
        _ => Verdict::Pass,
    }
}

// ExtPict Extend* ZWJ x ExtPict
fn gb11(w: &W<'_>, i: usize, ctx: &GraphemeContext) -> Verdict {
    if ctx.pictograph_zwj && w.after(i) == ExtendedPictographic {
        Verdict::Keep
    } else {
        Verdict::Pass
    }
}

// Regional indicators pair up from the start of a run.
fn gb12_13(w: &W<'_>, i: usize, ctx: &GraphemeContext) -> Verdict {
    if (w.before(i), w.after(i)) != (RegionalIndicator, RegionalIndicator) {
        return Verdict::Pass;
    }
    if ctx.regional_run % 2 == 1 {
        Verdict::Keep
    } else {
        Verdict::Break
    }
}

impl Segmentation for Graphemes {
    type Class = GraphemeClusterBreak;
    type Context = GraphemeContext;

    const DEFAULT: Verdict = Verdict::Break;

    const RULES: &'static [Rule<GraphemeClusterBreak, GraphemeContext>] =
        &[gb3, gb4, gb5, gb6_8, gb9, gb9b, gb11, gb12_13];

    fn classify(c: u32) -> GraphemeClusterBreak {
        grapheme_cluster_break(c)
    }

    fn start() -> GraphemeContext {
        GraphemeContext::default()
    }

    fn step(previous: &GraphemeContext, w: &W<'_>, i: usize) -> GraphemeContext {
        let class = w.before(i);
        GraphemeContext {
            regional_run: match class {
                RegionalIndicator => previous.regional_run + 1,
                _ => 0,
            },
            in_pictograph: match class {
                ExtendedPictographic => true,
                Extend => previous.in_pictograph,
                _ => false,
            },
            pictograph_zwj: class == ZWJ && previous.in_pictograph,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::find_boundary;

    fn boundaries(classes: &[GraphemeClusterBreak]) -> Vec<usize> {
        let mut out = Vec::new();
        let mut start = 0;
        while start < classes.len() {
            let n = find_boundary::<Graphemes>(&classes[start..], true);
            assert!(n > 0);
            start += n;
            out.push(start);
        }
        out
    }

    #[test]
    fn test_base_with_two_marks_is_one_cluster() {
        assert_eq!(vec![3], boundaries(&[Other, Extend, Extend]));
    }

    #[test]
    fn test_crlf_stays_together() {
        assert_eq!(vec![1, 3, 4], boundaries(&[Other, CR, LF, Other]));
        assert_eq!(vec![1, 2], boundaries(&[CR, Extend]));
    }

    #[test]
    fn test_hangul_syllables() {
        assert_eq!(vec![3, 4], boundaries(&[L, V, T, L]));
        assert_eq!(vec![2, 3], boundaries(&[LV, T, LV]));
        assert_eq!(vec![1, 2], boundaries(&[LVT, V]));
    }

    #[test]
    fn test_regional_indicators_pair() {
        let flags = [RegionalIndicator; 5];
        assert_eq!(vec![2, 4, 5], boundaries(&flags));
    }

    #[test]
    fn test_emoji_zwj_sequence() {
        let seq = [ExtendedPictographic, Extend, ZWJ, ExtendedPictographic, Other];
        assert_eq!(vec![4, 5], boundaries(&seq));
        assert_eq!(vec![2, 3], boundaries(&[Other, ZWJ, ExtendedPictographic]));
    }

    #[test]
    fn test_prepend_and_spacing_mark() {
        assert_eq!(vec![3], boundaries(&[Prepend, Other, SpacingMark]));
        assert_eq!(vec![1, 2], boundaries(&[Prepend, LF]));
    }

    #[test]
    fn test_long_flag_run_pairs_from_its_start() {
        let mut classes = vec![Other];
        classes.extend(std::iter::repeat(RegionalIndicator).take(20_001));
        let expected: Vec<usize> = std::iter::once(1)
            .chain((3..=20_001).step_by(2))
            .chain(std::iter::once(20_002))
            .collect();
        assert_eq!(expected, boundaries(&classes));
        let ctx = Graphemes::context(&Window::new(&classes, true), 4);
        assert_eq!(3, ctx.regional_run);
    }

    #[test]
    fn test_zwj_must_follow_a_pictograph() {
        let seq = [ExtendedPictographic, Extend, Extend, ZWJ, ExtendedPictographic];
        assert_eq!(vec![5], boundaries(&seq));
        let seq = [ExtendedPictographic, Other, ZWJ, ExtendedPictographic];
        assert_eq!(vec![1, 3, 4], boundaries(&seq));
    }

    #[test]
    fn test_undecided_without_eof() {
        assert_eq!(0, find_boundary::<Graphemes>(&[Other, Extend], false));
        assert_eq!(2, find_boundary::<Graphemes>(&[Other, Extend, Other], false));
        assert_eq!(0, find_boundary::<Graphemes>(&[], true));
        assert_eq!(1, find_boundary::<Graphemes>(&[Other], true));
    }
}
