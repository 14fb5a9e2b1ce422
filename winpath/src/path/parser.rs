//! The path tokenizer.
//!
//! The parser is a small state machine that consumes Unicode scalars left to
//! right. It classifies the prefix form (relative, rooted, drive, UNC,
//! extended-length local, extended-length UNC) and splits the remainder into
//! directory components and a trailing name.
//!
//! Exactly one case needs to look back: after the extended-length marker
//! `\\?\`, a component other than `UNC` is not a host but the start of a
//! local path (`\\?\C:\...`). The cursor is rewound over that one component
//! and parsing resumes in the drive state, which can never lead back into
//! the UNC prefix states.

use crate::path::types::ParsedPath;
use crate::path::validate::{validate_length, validate_scalar};

/// The only separator recognized by the parser.
pub const SEPARATOR: char = '\\';

/// Component that marks an extended-length path after a leading `\\`.
const EXTENDED_MARKER: &str = "?";

/// Component that marks an extended-length UNC path after `\\?\`.
const EXTENDED_UNC_MARKER: &str = "UNC";

/// Position inside a `\\`-prefixed path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UncStage {
    /// Nothing read yet after the leading `\\`.
    PlainStart,
    /// `\\?\` has been read.
    ExtendedMarkerSeen,
    /// `\\?\UNC\` has been read.
    ExtendedUncSeen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    UncPrefix(UncStage),
    Drive,
    PathComponent,
}

/// Forward cursor over the scalars of the input, with a bounded rewind.
#[derive(Debug)]
pub(crate) struct ScalarCursor {
    scalars: Vec<char>,
    pos: usize,
    rewound: usize,
}

impl ScalarCursor {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            scalars: input.chars().collect(),
            pos: 0,
            rewound: 0,
        }
    }

    /// Total number of scalars in the input.
    pub(crate) fn len(&self) -> usize {
        self.scalars.len()
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.scalars.get(self.pos).copied()
    }

    pub(crate) fn peek_nth(&self, n: usize) -> Option<char> {
        self.scalars.get(self.pos + n).copied()
    }

    pub(crate) fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.scalars.len());
    }

    /// Step back over `count` scalars that were just read as one component.
    ///
    /// May be used once per parse.
    pub(crate) fn rewind(&mut self, count: usize) {
        debug_assert!(count <= self.pos, "rewind past start of input");
        debug_assert_eq!(self.rewound, 0, "cursor rewound twice");
        self.pos -= count.min(self.pos);
        self.rewound += count;
    }

    /// Number of scalars re-read because of a rewind.
    pub(crate) fn rewound(&self) -> usize {
        self.rewound
    }
}

/// Accumulator for the component currently being read.
#[derive(Debug, Default)]
struct Pending {
    scalars: Vec<char>,
    start: usize,
}

impl Pending {
    fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }

    fn len(&self) -> usize {
        self.scalars.len()
    }

    fn push(&mut self, c: char, offset: usize) {
        if self.scalars.is_empty() {
            self.start = offset;
        }
        self.scalars.push(c);
    }

    fn take(&mut self) -> String {
        let component = self.scalars.iter().collect();
        self.scalars.clear();
        component
    }

    fn is(&self, marker: &str) -> bool {
        self.scalars.iter().copied().eq(marker.chars())
    }
}

/// Statistics gathered while parsing, used to check termination bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(test), allow(dead_code))] // Read by unit and property tests
pub(crate) struct ParseStats {
    /// Scalars re-read because of the extended-local rewind.
    pub(crate) rewound: usize,
    /// Length of the longest component encountered.
    pub(crate) longest_component: usize,
    /// Number of state-machine steps taken.
    pub(crate) steps: usize,
}

struct Parser {
    cursor: ScalarCursor,
    state: State,
    pending: Pending,
    path: ParsedPath,
    longest_component: usize,
    steps: usize,
}

impl Parser {
    fn new(input: &str) -> Self {
        Self {
            cursor: ScalarCursor::new(input),
            state: State::Start,
            pending: Pending::default(),
            path: ParsedPath::default(),
            longest_component: 0,
            steps: 0,
        }
    }

    fn transition(&mut self, next: State) {
        log::trace!(
            "{:?} -> {:?} at scalar {}",
            self.state,
            next,
            self.cursor.position()
        );
        self.state = next;
    }

    fn run(mut self) -> (ParsedPath, ParseStats) {
        loop {
            self.steps += 1;
            let more = match self.state {
                State::Start => self.step_start(),
                State::Drive => self.step_drive(),
                State::UncPrefix(stage) => self.step_unc(stage),
                State::PathComponent => self.step_component(),
            };
            if !more {
                break;
            }
        }

        if !self.pending.is_empty() {
            self.note_component_len();
            self.path.name = Some(self.pending.take());
        }

        if let Some(err) = validate_length(self.cursor.len(), self.path.extended_length) {
            self.path.errors.push(err);
        }

        let stats = ParseStats {
            rewound: self.cursor.rewound(),
            longest_component: self.longest_component,
            steps: self.steps,
        };
        (self.path, stats)
    }

    fn step_start(&mut self) -> bool {
        match (self.cursor.peek(), self.cursor.peek_nth(1)) {
            (None, _) => false,
            (Some(SEPARATOR), Some(SEPARATOR)) => {
                self.cursor.advance(2);
                self.transition(State::UncPrefix(UncStage::PlainStart));
                true
            }
            (Some(SEPARATOR), _) => {
                self.cursor.advance(1);
                self.path.absolute = true;
                self.transition(State::PathComponent);
                true
            }
            (Some(_), _) => {
                self.transition(State::Drive);
                true
            }
        }
    }

    fn step_drive(&mut self) -> bool {
        if let (Some(letter), Some(':')) = (self.cursor.peek(), self.cursor.peek_nth(1)) {
            if letter.is_ascii_alphabetic() {
                self.path.device = Some(letter.to_ascii_uppercase());
                self.cursor.advance(2);
                if self.cursor.peek() == Some(SEPARATOR) {
                    self.path.absolute = true;
                }
            }
        }
        // A failed drive match consumes nothing; the scalars are re-read as
        // the first path component.
        self.transition(State::PathComponent);
        true
    }

    fn step_unc(&mut self, stage: UncStage) -> bool {
        match self.cursor.peek() {
            Some(SEPARATOR) => {
                if self.pending.is_empty() {
                    self.cursor.advance(1);
                } else {
                    self.commit_prefix(stage);
                }
                true
            }
            Some(c) => {
                self.pending.push(c, self.cursor.position());
                self.cursor.advance(1);
                true
            }
            None if self.pending.is_empty() => false,
            None => {
                self.commit_prefix(stage);
                true
            }
        }
    }

    /// Resolve a completed component of the `\\` prefix.
    ///
    /// The cursor sits on the separator that ended the component, or at the
    /// end of input.
    fn commit_prefix(&mut self, stage: UncStage) {
        match stage {
            UncStage::PlainStart if self.pending.is(EXTENDED_MARKER) => {
                self.pending.take();
                self.path.extended_length = true;
                self.skip_separator();
                self.transition(State::UncPrefix(UncStage::ExtendedMarkerSeen));
            }
            UncStage::ExtendedMarkerSeen if self.pending.is(EXTENDED_UNC_MARKER) => {
                self.pending.take();
                self.skip_separator();
                self.transition(State::UncPrefix(UncStage::ExtendedUncSeen));
            }
            UncStage::ExtendedMarkerSeen => {
                let count = self.pending.len();
                self.pending.take();
                log::trace!("extended-length local path, re-reading {count} scalars");
                self.cursor.rewind(count);
                self.transition(State::Drive);
            }
            UncStage::PlainStart | UncStage::ExtendedUncSeen => {
                self.note_component_len();
                let start = self.pending.start;
                let host = self.pending.take();
                for (i, c) in host.chars().enumerate() {
                    if let Some(err) = validate_scalar(c, start + i) {
                        self.path.errors.push(err);
                    }
                }
                self.path.node = Some(host);
                self.path.remote = true;
                self.skip_separator();
                self.transition(State::PathComponent);
            }
        }
    }

    fn step_component(&mut self) -> bool {
        match self.cursor.peek() {
            None => false,
            Some(SEPARATOR) => {
                self.cursor.advance(1);
                if !self.pending.is_empty() {
                    self.note_component_len();
                    let dir = self.pending.take();
                    self.path.dirs.push(dir);
                }
                true
            }
            Some(c) => {
                let offset = self.cursor.position();
                if let Some(err) = validate_scalar(c, offset) {
                    self.path.errors.push(err);
                }
                self.pending.push(c, offset);
                self.cursor.advance(1);
                true
            }
        }
    }

    fn skip_separator(&mut self) {
        if self.cursor.peek() == Some(SEPARATOR) {
            self.cursor.advance(1);
        }
    }

    fn note_component_len(&mut self) {
        self.longest_component = self.longest_component.max(self.pending.len());
    }
}

/// Parse `input` into a [`ParsedPath`].
///
/// # Examples
///
/// ```
/// let path = winpath::parse(r"\\?\UNC\peaches\msys64");
/// assert_eq!(path.node(), Some("peaches"));
/// assert_eq!(path.name(), Some("msys64"));
/// assert!(path.is_extended_length());
/// assert!(path.is_remote());
/// ```
#[must_use]
pub fn parse(input: &str) -> ParsedPath {
    parse_with_stats(input).0
}

pub(crate) fn parse_with_stats(input: &str) -> (ParsedPath, ParseStats) {
    Parser::new(input).run()
}
