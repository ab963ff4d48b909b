//! Word boundaries.

use crate::{
    char_props::{word_break, WordBreak},
    segment::{BreakClass, Rule, Segmentation, Verdict, Window},
};
use WordBreak::*;

impl BreakClass for WordBreak {
    const SOT: Self = Sot;
    const EOT: Self = Eot;
}

/// Segmentation into words, punctuation and runs of whitespace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Words;

type W<'w> = Window<'w, WordBreak>;

/// The left-hand context of a candidate offset, with `Extend`, `Format` and
/// `ZWJ` folded into the character they follow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordContext {
    /// The nearest significant class before the offset.
    pub left: WordBreak,
    /// The significant class before `left`.
    pub before_left: WordBreak,
    /// Length of the run of significant regional indicators ending at `left`.
    pub regional_run: usize,
}

fn is_ignorable(class: WordBreak) -> bool {
    matches!(class, Extend | Format | ZWJ)
}

fn is_ah_letter(class: WordBreak) -> bool {
    matches!(class, ALetter | HebrewLetter)
}

fn is_mid_num_let_q(class: WordBreak) -> bool {
    matches!(class, MidNumLet | SingleQuote)
}

/// The next significant class after the one at offset `i`.
fn lookahead(w: &W<'_>, i: usize) -> Option<WordBreak> {
    w.next_class(i + 1, is_ignorable)
}

fn wb3(w: &W<'_>, i: usize, _: &WordContext) -> Verdict {
    match (w.before(i), w.after(i)) {
        (CR, LF) => Verdict::Keep,
        _ => Verdict::Pass,
    }
}

fn wb3a_3b(w: &W<'_>, i: usize, _: &WordContext) -> Verdict {
    match (w.before(i), w.after(i)) {
        (Newline | CR | LF, _) | (_, Newline | CR | LF) => Verdict::Break,
        _ => Verdict::Pass,
    }
}

fn wb3c(w: &W<'_>, i: usize, _: &WordContext) -> Verdict {
    match (w.before(i), w.after(i)) {
        (ZWJ, ExtendedPictographic) => Verdict::Keep,
        _ => Verdict::Pass,
    }
}

fn wb3d(w: &W<'_>, i: usize, _: &WordContext) -> Verdict {
    match (w.before(i), w.after(i)) {
        (WSegSpace, WSegSpace) => Verdict::Keep,
        _ => Verdict::Pass,
    }
}

fn wb4(w: &W<'_>, i: usize, _: &WordContext) -> Verdict {
    if is_ignorable(w.after(i)) {
        Verdict::Keep
    } else {
        Verdict::Pass
    }
}

// Letters, with a single mid-letter punctuation in between.
fn wb5_7(w: &W<'_>, i: usize, ctx: &WordContext) -> Verdict {
    let right = w.after(i);
    if is_ah_letter(ctx.left) && is_ah_letter(right) {
        return Verdict::Keep;
    }
    if is_ah_letter(ctx.left) && (right == MidLetter || is_mid_num_let_q(right)) {
        return match lookahead(w, i) {
            None => Verdict::Defer,
            Some(next) if is_ah_letter(next) => Verdict::Keep,
            Some(_) => Verdict::Pass,
        };
    }
    if is_ah_letter(ctx.before_left)
        && (ctx.left == MidLetter || is_mid_num_let_q(ctx.left))
        && is_ah_letter(right)
    {
        return Verdict::Keep;
    }
    Verdict::Pass
}

fn wb7a_7c(w: &W<'_>, i: usize, ctx: &WordContext) -> Verdict {
    let right = w.after(i);
    match (ctx.before_left, ctx.left, right) {
        (_, HebrewLetter, SingleQuote) => Verdict::Keep,
        (_, HebrewLetter, DoubleQuote) => match lookahead(w, i) {
            None => Verdict::Defer,
            Some(HebrewLetter) => Verdict::Keep,
            Some(_) => Verdict::Pass,
        },
        (HebrewLetter, DoubleQuote, HebrewLetter) => Verdict::Keep,
        _ => Verdict::Pass,
    }
}

// Digits, alone or attached to letters, with a single separator in between.
fn wb8_12(w: &W<'_>, i: usize, ctx: &WordContext) -> Verdict {
    let right = w.after(i);
    match (ctx.left, right) {
        (Numeric, Numeric) => return Verdict::Keep,
        (left, Numeric) if is_ah_letter(left) => return Verdict::Keep,
        (Numeric, right) if is_ah_letter(right) => return Verdict::Keep,
        _ => {}
    }
    if ctx.before_left == Numeric
        && (ctx.left == MidNum || is_mid_num_let_q(ctx.left))
        && right == Numeric
    {
        return Verdict::Keep;
    }
    if ctx.left == Numeric && (right == MidNum || is_mid_num_let_q(right)) {
        return match lookahead(w, i) {
            None => Verdict::Defer,
            Some(Numeric) => Verdict::Keep,
            Some(_) => Verdict::Pass,
        };
    }
    Verdict::Pass
}

fn wb13_13b(w: &W<'_>, i: usize, ctx: &WordContext) -> Verdict {
    match (ctx.left, w.after(i)) {
        (Katakana, Katakana) => Verdict::Keep,
        (ALetter | HebrewLetter | Numeric | Katakana | ExtendNumLet, ExtendNumLet) => Verdict::Keep,
        (ExtendNumLet, ALetter | HebrewLetter | Numeric | Katakana) => Verdict::Keep,
        _ => Verdict::Pass,
    }
}

fn wb15_16(w: &W<'_>, i: usize, ctx: &WordContext) -> Verdict {
    if (ctx.left, w.after(i)) != (RegionalIndicator, RegionalIndicator) {
        return Verdict::Pass;
    }
    if ctx.regional_run % 2 == 1 {
        Verdict::Keep
    } else {
        Verdict::Break
    }
}

impl Segmentation for Words {
    type Class = WordBreak;
    type Context = WordContext;

    const DEFAULT: Verdict = Verdict::Break;

    const RULES: &'static [Rule<WordBreak, WordContext>] = &[
        wb3, wb3a_3b, wb3c, wb3d, wb4, wb5_7, wb7a_7c, wb8_12, wb13_13b, wb15_16,
    ];

    fn classify(c: u32) -> WordBreak {
        word_break(c)
    }

    fn start() -> WordContext {
        WordContext {
            left: Sot,
            before_left: Sot,
            regional_run: 0,
        }
    }

    fn step(previous: &WordContext, w: &W<'_>, i: usize) -> WordContext {
        let class = w.before(i);
        if is_ignorable(class) {
            return *previous;
        }
        WordContext {
            left: class,
            before_left: previous.left,
            regional_run: match class {
                RegionalIndicator => previous.regional_run + 1,
                _ => 0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::find_boundary;
    use pretty_assertions::assert_eq;

    fn boundaries(classes: &[WordBreak]) -> Vec<usize> {
        let mut out = Vec::new();
        let mut start = 0;
        while start < classes.len() {
            let n = find_boundary::<Words>(&classes[start..], true);
            assert!(n > 0);
            start += n;
            out.push(start);
        }
        out
    }

    #[test]
    fn test_hyphenated_word_splits_at_hyphen() {
        // c o - o p
        let classes = [ALetter, ALetter, Other, ALetter, ALetter];
        assert_eq!(vec![2, 3, 5], boundaries(&classes));
    }

    #[test]
    fn test_apostrophe_between_letters_keeps_word() {
        // d o n ' t
        let classes = [ALetter, ALetter, ALetter, SingleQuote, ALetter];
        assert_eq!(vec![5], boundaries(&classes));
        // a trailing apostrophe is its own segment
        assert_eq!(vec![2, 3], boundaries(&[ALetter, ALetter, SingleQuote]));
    }

    #[test]
    fn test_mid_letter_defers_at_buffer_end() {
        let classes = [ALetter, ALetter, MidLetter];
        assert_eq!(0, find_boundary::<Words>(&classes, false));
        assert_eq!(2, find_boundary::<Words>(&classes, true));
        let classes = [ALetter, MidLetter, Extend, Format];
        assert_eq!(0, find_boundary::<Words>(&classes, false));
    }

    #[test]
    fn test_numbers_with_separators() {
        // 3 . 1 4 , 5
        let classes = [Numeric, MidNumLet, Numeric, Numeric, MidNum, Numeric];
        assert_eq!(vec![6], boundaries(&classes));
        assert_eq!(vec![1, 2], boundaries(&[Numeric, MidNum]));
        assert_eq!(vec![3], boundaries(&[ALetter, Numeric, ALetter]));
    }

    #[test]
    fn test_ignorables_attach_to_previous() {
        let classes = [ALetter, Extend, Format, ALetter];
        assert_eq!(vec![4], boundaries(&classes));
        assert_eq!(vec![1, 2, 3], boundaries(&[LF, Extend, ALetter]));
    }

    #[test]
    fn test_whitespace_runs() {
        assert_eq!(vec![1, 3, 4], boundaries(&[ALetter, WSegSpace, WSegSpace, ALetter]));
        assert_eq!(vec![1, 3], boundaries(&[Other, CR, LF]));
    }

    #[test]
    fn test_hebrew_quotes() {
        let classes = [HebrewLetter, DoubleQuote, HebrewLetter];
        assert_eq!(vec![3], boundaries(&classes));
        assert_eq!(vec![2], boundaries(&[HebrewLetter, SingleQuote]));
    }

    #[test]
    fn test_katakana_and_extend_num_let() {
        assert_eq!(vec![2], boundaries(&[Katakana, Katakana]));
        assert_eq!(vec![3], boundaries(&[ALetter, ExtendNumLet, Numeric]));
    }

    #[test]
    fn test_regional_indicators_pair() {
        let classes = [RegionalIndicator, RegionalIndicator, RegionalIndicator];
        assert_eq!(vec![2, 3], boundaries(&classes));
        let classes = [RegionalIndicator, Extend, RegionalIndicator, Format, RegionalIndicator];
        assert_eq!(vec![4, 5], boundaries(&classes));
    }

    #[test]
    fn test_context_skips_ignorables() {
        let classes = [Numeric, MidNum, Extend, ZWJ, Format, Numeric];
        let ctx = Words::context(&Window::new(&classes, true), 5);
        assert_eq!(MidNum, ctx.left);
        assert_eq!(Numeric, ctx.before_left);
        assert_eq!(vec![6], boundaries(&classes));
    }

    #[test]
    fn test_long_extend_run_stays_with_its_letter() {
        let mut classes = vec![ALetter];
        classes.extend(std::iter::repeat(Extend).take(20_000));
        classes.extend([WSegSpace, ALetter]);
        assert_eq!(vec![20_001, 20_002, 20_003], boundaries(&classes));
        assert_eq!(0, find_boundary::<Words>(&classes[..20_001], false));
    }
}
