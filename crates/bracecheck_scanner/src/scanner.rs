//! The delimiter-balance scanner.
//!
//! A single pass over the source text classifies each character's lexical
//! context (code, line comment, block comment, string) and maintains a
//! stack of open brackets. This is a heuristic shared across C-like,
//! string-templated languages, not a real lexer: it catches the most common
//! authoring error, an unbalanced delimiter, without building a parser.

use std::ops::ControlFlow;

use crate::char_codes::*;
use bracecheck_diagnostics::{messages, Diagnostic, DiagnosticCollection};

/// One still-open bracket: the character and the 1-based line it opened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketFrame {
    pub bracket: char,
    pub line: u32,
}

/// How many trailing frames an unclosed-at-EOF diagnostic reports.
const MAX_REPORTED_FRAMES: usize = 5;

/// The scanner walks source text line by line, carrying string/comment
/// state across lines, and records bracket-balance diagnostics.
pub struct Scanner {
    /// Source lines, each keeping its terminator. A pending escape at end
    /// of line must consume the line break itself, so the break has to be
    /// part of the character stream.
    lines: Vec<Vec<char>>,
    /// The quote character that opened the current string, if any.
    string_delimiter: Option<char>,
    /// Whether we are inside an unterminated `/* ... */` region. Carried
    /// across lines until closed.
    in_block_comment: bool,
    /// Whether the previous character inside a string was an unconsumed
    /// backslash. Only meaningful while inside a string.
    escape_pending: bool,
    /// Open brackets, most recently opened last.
    bracket_stack: Vec<BracketFrame>,
    /// Accumulated diagnostics.
    diagnostics: DiagnosticCollection,
}

impl Scanner {
    /// Create a new scanner for the given source text.
    pub fn new(text: &str) -> Self {
        Self {
            lines: text
                .split_inclusive(LINE_FEED)
                .map(|line| line.chars().collect())
                .collect(),
            string_delimiter: None,
            in_block_comment: false,
            escape_pending: false,
            bracket_stack: Vec::new(),
            diagnostics: DiagnosticCollection::new(),
        }
    }

    /// Run the pass over the whole text.
    ///
    /// A mismatched closing bracket terminates the pass immediately: once
    /// brackets are out of sync, later pairings would only cascade false
    /// positives. Unmatched closers are non-fatal.
    pub fn scan(&mut self) {
        let lines = std::mem::take(&mut self.lines);
        let mut terminated = false;
        for (idx, line) in lines.iter().enumerate() {
            if self.scan_line(idx as u32 + 1, line).is_break() {
                terminated = true;
                break;
            }
        }
        self.lines = lines;
        if !terminated {
            self.finish();
        }
    }

    /// Get the accumulated diagnostics.
    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.diagnostics
    }

    /// Take the accumulated diagnostics, leaving an empty collection.
    pub fn take_diagnostics(&mut self) -> DiagnosticCollection {
        std::mem::take(&mut self.diagnostics)
    }

    /// The brackets still open, earliest first.
    pub fn open_frames(&self) -> &[BracketFrame] {
        &self.bracket_stack
    }

    /// Scan one line. `Break` means a mismatched closer ended the pass.
    fn scan_line(&mut self, line_number: u32, line: &[char]) -> ControlFlow<()> {
        // Line-comment mode never carries across lines.
        let mut in_line_comment = false;
        let mut i = 0;

        while i < line.len() {
            let ch = line[i];

            // A backslash in a string neutralizes the very next character,
            // including a quote, a comment starter, or the line break.
            if self.string_delimiter.is_some() && self.escape_pending {
                self.escape_pending = false;
                i += 1;
                continue;
            }

            // Comment starts are only recognized in plain code. The
            // lookahead must not advance the cursor when a lone `/` is not
            // followed by `/` or `*`.
            if self.string_delimiter.is_none()
                && !self.in_block_comment
                && !in_line_comment
                && ch == SLASH
            {
                match line.get(i + 1) {
                    Some(&SLASH) => {
                        in_line_comment = true;
                        i += 2;
                        continue;
                    }
                    Some(&ASTERISK) => {
                        self.in_block_comment = true;
                        i += 2;
                        continue;
                    }
                    _ => {}
                }
            }

            if in_line_comment {
                i += 1;
                continue;
            }

            if self.in_block_comment {
                if ch == ASTERISK && line.get(i + 1) == Some(&SLASH) {
                    self.in_block_comment = false;
                    i += 2;
                } else {
                    i += 1;
                }
                continue;
            }

            if let Some(delimiter) = self.string_delimiter {
                if ch == BACKSLASH {
                    self.escape_pending = true;
                } else if ch == delimiter {
                    self.string_delimiter = None;
                }
                // Everything else, brackets and comment starters included,
                // is inert string content.
                i += 1;
                continue;
            }

            if is_string_delimiter(ch) {
                self.string_delimiter = Some(ch);
                i += 1;
                continue;
            }

            if is_open_bracket(ch) {
                self.bracket_stack.push(BracketFrame {
                    bracket: ch,
                    line: line_number,
                });
            } else if is_close_bracket(ch) {
                self.check_close_bracket(ch, line_number)?;
            }

            i += 1;
        }

        ControlFlow::Continue(())
    }

    /// Handle a closing bracket in plain code.
    fn check_close_bracket(&mut self, ch: char, line_number: u32) -> ControlFlow<()> {
        let Some(frame) = self.bracket_stack.pop() else {
            // No frame is consumed, so the stack stays keyed to real
            // unclosed opens. Scanning continues.
            self.diagnostics.add(Diagnostic::with_line(
                line_number,
                &messages::UNMATCHED_CLOSING_0_AT_LINE_1,
                &[&ch.to_string(), &line_number.to_string()],
            ));
            return ControlFlow::Continue(());
        };

        if matching_open_bracket(ch) != Some(frame.bracket) {
            self.diagnostics.add(Diagnostic::with_line(
                line_number,
                &messages::MISMATCHED_CLOSING_0_AT_LINE_1,
                &[
                    &ch.to_string(),
                    &line_number.to_string(),
                    &frame.bracket.to_string(),
                    &frame.line.to_string(),
                ],
            ));
            // The first mismatch is treated as conclusive.
            return ControlFlow::Break(());
        }

        ControlFlow::Continue(())
    }

    /// End-of-file handling, only reached when no mismatch ended the pass.
    fn finish(&mut self) {
        if self.bracket_stack.is_empty() {
            self.diagnostics
                .add(Diagnostic::new(&messages::NO_UNCLOSED_BLOCKS_FOUND, &[]));
            return;
        }

        let start = self.bracket_stack.len().saturating_sub(MAX_REPORTED_FRAMES);
        let mut diagnostic = Diagnostic::new(&messages::UNCLOSED_BLOCKS_AT_EOF, &[]);
        for frame in &self.bracket_stack[start..] {
            diagnostic = diagnostic.with_related(Diagnostic::with_line(
                frame.line,
                &messages::_0_FORM_LINE_1,
                &[&frame.bracket.to_string(), &frame.line.to_string()],
            ));
        }
        self.diagnostics.add(diagnostic);
    }
}
