//! Sentence boundaries.

use crate::{
    char_props::{sentence_break, SentenceBreak},
    segment::{BreakClass, Rule, Segmentation, Verdict, Window},
};
use SentenceBreak::*;

impl BreakClass for SentenceBreak {
    const SOT: Self = Sot;
    const EOT: Self = Eot;
}

/// Segmentation into sentences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sentences;

type W<'w> = Window<'w, SentenceBreak>;

/// A sentence terminator seen before a candidate offset, possibly followed by
/// closing punctuation and then spaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Terminator {
    /// `ATerm` or `STerm`.
    pub class: SentenceBreak,
    /// Whether spaces follow the terminator and its closing punctuation.
    pub spaced: bool,
}

/// The left-hand context of a candidate offset, with `Extend` and `Format`
/// folded into the character they follow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SentenceContext {
    /// The nearest significant class before the offset.
    pub left: SentenceBreak,
    /// The significant class before `left`.
    pub before_left: SentenceBreak,
    /// The `(STerm | ATerm) Close* Sp*` sequence ending at the offset, if any.
    pub terminator: Option<Terminator>,
    // After an `ATerm`: the index where the SB8 scan stopped and the class
    // found there (`None` if undecided). Reused while the offset has not
    // passed that index.
    lookahead: Option<(usize, Option<SentenceBreak>)>,
}

fn is_ignorable(class: SentenceBreak) -> bool {
    matches!(class, Extend | Format)
}

fn is_para_sep(class: SentenceBreak) -> bool {
    matches!(class, Sep | CR | LF)
}

// Extends the terminator sequence with the next significant class.
fn extend_terminator(terminator: Option<Terminator>, class: SentenceBreak) -> Option<Terminator> {
    match class {
        STerm | ATerm => Some(Terminator { class, spaced: false }),
        Close => terminator.filter(|t| !t.spaced),
        Sp => terminator.map(|t| Terminator { spaced: true, ..t }),
        _ => None,
    }
}

// Classes the SB8 scan stops at.
fn ends_sb8_scan(class: SentenceBreak) -> bool {
    matches!(class, OLetter | Upper | Lower | Sep | CR | LF | STerm | ATerm)
}

fn sb3(w: &W<'_>, i: usize, _: &SentenceContext) -> Verdict {
    match (w.before(i), w.after(i)) {
        (CR, LF) => Verdict::Keep,
        _ => Verdict::Pass,
    }
}

fn sb4(w: &W<'_>, i: usize, _: &SentenceContext) -> Verdict {
    if is_para_sep(w.before(i)) {
        Verdict::Break
    } else {
        Verdict::Pass
    }
}

fn sb5(w: &W<'_>, i: usize, _: &SentenceContext) -> Verdict {
    if is_ignorable(w.after(i)) {
        Verdict::Keep
    } else {
        Verdict::Pass
    }
}

// Decimal points and abbreviations such as "U.S.".
fn sb6_7(w: &W<'_>, i: usize, ctx: &SentenceContext) -> Verdict {
    match (ctx.before_left, ctx.left, w.after(i)) {
        (_, ATerm, Numeric) => Verdict::Keep,
        (Upper | Lower, ATerm, Upper) => Verdict::Keep,
        _ => Verdict::Pass,
    }
}

// A full stop followed, eventually, by a lowercase letter does not end a sentence.
fn sb8(_: &W<'_>, _: usize, ctx: &SentenceContext) -> Verdict {
    match (ctx.terminator, ctx.lookahead) {
        (Some(Terminator { class: ATerm, .. }), Some((_, stop))) => match stop {
            None => Verdict::Defer,
            Some(Lower) => Verdict::Keep,
            Some(_) => Verdict::Pass,
        },
        _ => Verdict::Pass,
    }
}

fn sb8a(w: &W<'_>, i: usize, ctx: &SentenceContext) -> Verdict {
    match (ctx.terminator, w.after(i)) {
        (Some(_), SContinue | STerm | ATerm) => Verdict::Keep,
        _ => Verdict::Pass,
    }
}

fn sb9_10(w: &W<'_>, i: usize, ctx: &SentenceContext) -> Verdict {
    match (ctx.terminator, w.after(i)) {
        (Some(Terminator { spaced: false, .. }), Close) => Verdict::Keep,
        (Some(_), Sp | Sep | CR | LF) => Verdict::Keep,
        _ => Verdict::Pass,
    }
}

fn sb11(_: &W<'_>, _: usize, ctx: &SentenceContext) -> Verdict {
    match ctx.terminator {
        Some(_) => Verdict::Break,
        None => Verdict::Pass,
    }
}

impl Segmentation for Sentences {
    type Class = SentenceBreak;
    type Context = SentenceContext;

    const DEFAULT: Verdict = Verdict::Keep;

    const RULES: &'static [Rule<SentenceBreak, SentenceContext>] =
        &[sb3, sb4, sb5, sb6_7, sb8, sb8a, sb9_10, sb11];

    fn classify(c: u32) -> SentenceBreak {
        sentence_break(c)
    }

    fn start() -> SentenceContext {
        SentenceContext {
            left: Sot,
            before_left: Sot,
            terminator: None,
            lookahead: None,
        }
    }

    fn step(previous: &SentenceContext, w: &W<'_>, i: usize) -> SentenceContext {
        let class = w.before(i);
        let mut ctx = *previous;
        if !is_ignorable(class) {
            ctx.before_left = previous.left;
            ctx.left = class;
            ctx.terminator = extend_terminator(previous.terminator, class);
        }
        ctx.lookahead = match ctx.terminator {
            Some(Terminator { class: ATerm, .. }) => match previous.lookahead {
                Some((at, stop)) if at >= i => Some((at, stop)),
                _ => {
                    let at = w.next_index(i, |class| !ends_sb8_scan(class));
                    Some((at, w.get(at)))
                }
            },
            _ => None,
        };
        ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::find_boundary;
    use pretty_assertions::assert_eq;

    fn boundaries(classes: &[SentenceBreak]) -> Vec<usize> {
        let mut out = Vec::new();
        let mut start = 0;
        while start < classes.len() {
            let n = find_boundary::<Sentences>(&classes[start..], true);
            assert!(n > 0);
            start += n;
            out.push(start);
        }
        out
    }

    #[test]
    fn test_break_after_full_stop_and_space() {
        // "Hi. Yo"
        let classes = [Upper, Lower, ATerm, Sp, Upper, Lower];
        assert_eq!(vec![4, 6], boundaries(&classes));
    }

    #[test]
    fn test_lowercase_continuation_keeps_sentence() {
        // "etc. and"
        let classes = [Lower, ATerm, Sp, Lower];
        assert_eq!(vec![4], boundaries(&classes));
        // The lowercase letter may come after other punctuation.
        let classes = [Lower, ATerm, Sp, Close, Other, Lower];
        assert_eq!(vec![6], boundaries(&classes));
    }

    #[test]
    fn test_lowercase_lookahead_defers() {
        let classes = [Lower, ATerm, Sp, Other];
        assert_eq!(0, find_boundary::<Sentences>(&classes, false));
        assert_eq!(3, find_boundary::<Sentences>(&classes, true));
    }

    #[test]
    fn test_closing_punctuation_and_spaces_stay_with_sentence() {
        // `Go!" Now`
        let classes = [Upper, Lower, STerm, Close, Sp, Sp, Upper];
        assert_eq!(vec![6, 7], boundaries(&classes));
    }

    #[test]
    fn test_paragraph_separator_breaks() {
        let classes = [Upper, Lower, CR, LF, Upper];
        assert_eq!(vec![4, 5], boundaries(&classes));
        let classes = [Lower, STerm, LF, Upper];
        assert_eq!(vec![3, 4], boundaries(&classes));
    }

    #[test]
    fn test_numbers_and_abbreviations() {
        // "3.14"
        assert_eq!(vec![4], boundaries(&[Numeric, ATerm, Numeric, Numeric]));
        // "U.S.A"
        assert_eq!(vec![5], boundaries(&[Upper, ATerm, Upper, ATerm, Upper]));
    }

    #[test]
    fn test_continuation_punctuation() {
        // "wait?, no"
        let classes = [Lower, STerm, SContinue, Sp, Lower];
        assert_eq!(vec![5], boundaries(&classes));
    }

    #[test]
    fn test_terminator_context() {
        let classes = [Lower, ATerm, Extend, Close, Sp, Upper];
        let w = Window::new(&classes, true);
        let ctx = Sentences::context(&w, 5);
        assert_eq!(Sp, ctx.left);
        assert_eq!(Some(Terminator { class: ATerm, spaced: true }), ctx.terminator);
        let ctx = Sentences::context(&w, 4);
        assert_eq!(Some(Terminator { class: ATerm, spaced: false }), ctx.terminator);
        assert_eq!(None, Sentences::context(&w, 1).terminator);
        assert_eq!(Some((5, Some(Upper))), ctx.lookahead);
    }

    #[test]
    fn test_space_after_terminator_ends_the_sequence() {
        let classes = [Lower, STerm, Sp, Close, Upper];
        let w = Window::new(&classes, true);
        assert_eq!(None, Sentences::context(&w, 4).terminator);
        assert_eq!(vec![3, 5], boundaries(&classes));
    }

    #[test]
    fn test_long_space_run_after_full_stop() {
        let mut classes = vec![Lower, ATerm];
        classes.extend(std::iter::repeat(Sp).take(20_000));
        classes.push(Lower);
        assert_eq!(vec![20_003], boundaries(&classes));
        let last = classes.len() - 1;
        classes[last] = Upper;
        assert_eq!(vec![20_002, 20_003], boundaries(&classes));
        assert_eq!(0, find_boundary::<Sentences>(&classes[..last], false));
    }
}
