//! The boundary engine shared by grapheme, word and sentence segmentation.
//!
//! The engine is a pure function over a buffer of break classes. It walks the
//! candidate offsets in order and, at each one, asks an ordered list of rules
//! for a [`Verdict`]. The first rule that does not [`Verdict::Pass`] decides.
//!
//! When a rule has to look past the end of the buffer and more input may
//! follow, it answers [`Verdict::Defer`] and the engine reports "no boundary
//! yet" by returning 0. The caller then grows the buffer and asks again.

use std::fmt;

/// A break-property class usable in a lookahead buffer.
pub trait BreakClass: Copy + Eq + fmt::Debug + 'static {
    /// The synthetic class read before the first buffered character.
    const SOT: Self;
    /// The synthetic class read past the last character once input is exhausted.
    const EOT: Self;
}

/// A rule's answer for one candidate offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The rule does not apply; ask the next one.
    Pass,
    /// There is a boundary here.
    Break,
    /// There is no boundary here.
    Keep,
    /// Undecidable until more input is buffered.
    Defer,
}

/// A read-only view of the lookahead buffer handed to rules.
///
/// Offset `i` is the boundary between `classes[i - 1]` and `classes[i]`.
#[derive(Clone, Copy)]
pub struct Window<'w, C> {
    classes: &'w [C],
    eof: bool,
}

impl<'w, C: BreakClass> Window<'w, C> {
    /// A view over `classes`; `eof` tells whether the input ends with them.
    pub fn new(classes: &'w [C], eof: bool) -> Self {
        Window { classes, eof }
    }

    /// Number of buffered classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns `true` if nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Whether the buffer holds the rest of the input.
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// The class at `index`: `EOT` past the end once the input is exhausted,
    /// `None` if more input may follow.
    pub fn get(&self, index: usize) -> Option<C> {
        match self.classes.get(index) {
            Some(&class) => Some(class),
            None if self.eof => Some(C::EOT),
            None => None,
        }
    }

    /// The class immediately before offset `i`; `SOT` at offset 0.
    pub fn before(&self, i: usize) -> C {
        match i.checked_sub(1) {
            Some(index) => self.classes[index],
            None => C::SOT,
        }
    }

    /// The class immediately after offset `i`, which must be inside the buffer.
    pub fn after(&self, i: usize) -> C {
        self.classes[i]
    }

    /// Index of the first class at or after `start` that `skip` rejects, or
    /// the buffer length if there is none.
    pub fn next_index(&self, start: usize, skip: impl Fn(C) -> bool) -> usize {
        let start = start.min(self.classes.len());
        self.classes[start..]
            .iter()
            .position(|&class| !skip(class))
            .map_or(self.classes.len(), |at| start + at)
    }

    /// The first class at or after `start` that `skip` rejects.
    ///
    /// Running off the buffer yields `EOT` at end of input, or `None` when
    /// more input may follow.
    pub fn next_class(&self, start: usize, skip: impl Fn(C) -> bool) -> Option<C> {
        self.get(self.next_index(start, skip))
    }
}

impl<C: fmt::Debug> fmt::Debug for Window<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("classes", &self.classes)
            .field("eof", &self.eof)
            .finish()
    }
}

/// A boundary rule: inspects offset `i` of the window, with the context the
/// segmentation kind computed for that offset.
pub type Rule<C, X> = fn(&Window<'_, C>, usize, &X) -> Verdict;

/// A kind of text segmentation: a class per character and rules over them.
pub trait Segmentation: Copy + Default + fmt::Debug + 'static {
    /// The per-character break class.
    type Class: BreakClass;

    /// Facts about the text before an offset shared by several rules.
    ///
    /// The engine carries it forward one character at a time, so rules never
    /// scan back over the buffer.
    type Context: Copy;

    /// The verdict when no rule applies.
    const DEFAULT: Verdict;

    /// The rules, in evaluation order.
    const RULES: &'static [Rule<Self::Class, Self::Context>];

    /// The break class of a scalar value.
    fn classify(c: u32) -> Self::Class;

    /// The context at offset 0.
    fn start() -> Self::Context;

    /// The context at offset `i`, given the one at `i - 1`. The character
    /// just passed is `window.before(i)`.
    fn step(previous: &Self::Context, window: &Window<'_, Self::Class>, i: usize)
        -> Self::Context;

    /// The context at offset `i`, built from the start of the window.
    fn context(window: &Window<'_, Self::Class>, i: usize) -> Self::Context {
        (1..=i).fold(Self::start(), |context, at| Self::step(&context, window, at))
    }
}

fn run_rules<S: Segmentation>(
    window: &Window<'_, S::Class>,
    i: usize,
    context: &S::Context,
) -> Verdict {
    S::RULES
        .iter()
        .map(|rule| rule(window, i, context))
        .find(|&verdict| verdict != Verdict::Pass)
        .unwrap_or(S::DEFAULT)
}

/// The verdict of `S`'s rules at offset `i`, where `0 < i < classes.len()`.
pub fn verdict_at<S: Segmentation>(window: &Window<'_, S::Class>, i: usize) -> Verdict {
    run_rules::<S>(window, i, &S::context(window, i))
}

/// Finds the first boundary in `classes`.
///
/// Returns the offset of the boundary, or 0 when none can be determined from
/// the buffer: it is empty, or a rule needs to see further than the buffer
/// reaches while `eof` is `false`. At end of input the end of the buffer is
/// always a boundary.
pub fn find_boundary<S: Segmentation>(classes: &[S::Class], eof: bool) -> usize {
    let window = Window::new(classes, eof);
    let mut context = S::start();
    for i in 1..classes.len() {
        context = S::step(&context, &window, i);
        match run_rules::<S>(&window, i, &context) {
            Verdict::Break => return i,
            Verdict::Defer => return 0,
            Verdict::Keep | Verdict::Pass => {}
        }
    }
    if eof {
        classes.len()
    } else {
        0
    }
}
