//! Hand-rolled stacked-state scanner for inspection strings.
//!
//! The grammar is narrow enough that a declarative lexer would be
//! overkill: a state stack (never deeper than two — an outer state plus
//! at most one object sub-state), a one-character lookback, and re-scan
//! semantics for the two-character markers (`=>` from `=` then `>`,
//! `..` from two dots) cover all of it.
//!
//! # Design
//!
//! Each loop iteration examines one character under the top-of-stack
//! state. A handler may request a re-scan ("repeat"), in which case the
//! cursor does not advance and the same character is examined again under
//! the new top of stack. Repeat is a loop, not recursion, so pathological
//! input cannot overflow the call stack. The loop runs one position past
//! the end of input so a token still accumulating at end-of-string is
//! flushed.
//!
//! Unrecognized characters are consumed silently rather than rejected:
//! the scanner feeds a best-effort display layer, not a validator.

use thiserror::Error;

use crate::kind::TokenKind;

/// Hard cap on state-stack depth. The grammar needs at most two entries;
/// anything deeper is a scanner bug, not bad input.
const MAX_DEPTH: usize = 4;

/// Hard cap on consecutive re-scans of a single position. Every repeat
/// pops a state, so the chain is bounded by stack depth; a longer chain
/// means the scanner stopped making progress.
const MAX_REPEATS: usize = 8;

/// Scanner-internal inconsistency.
///
/// No input can produce these: both variants guard invariants of the
/// state machine itself. They are surfaced rather than swallowed so the
/// rendering layer above can decide how to degrade.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// The state stack grew past [`MAX_DEPTH`].
    #[error("scanner state stack exceeded depth {} at position {at}", MAX_DEPTH)]
    DepthExceeded {
        /// Character position at which the push was attempted.
        at: usize,
    },
    /// The same position was re-scanned more than [`MAX_REPEATS`] times.
    #[error("scanner stopped making progress at position {at}")]
    Stuck {
        /// Character position the scanner was stuck at.
        at: usize,
    },
}

/// Tokenize `input`, delivering each `(kind, text)` token to `emit`.
///
/// Single forward pass; pure function of `input` with no state shared
/// across calls. Always terminates, and always returns `Ok` for any
/// input — malformed input yields a best-effort token sequence, never an
/// error. `Err` is reserved for internal inconsistency (see
/// [`ScanError`]).
///
/// The `text` argument borrows from scanner-internal storage and is only
/// valid for the duration of one callback invocation.
pub fn tokenize<F>(input: &str, mut emit: F) -> Result<(), ScanError>
where
    F: FnMut(TokenKind, &str),
{
    Scanner::new(input).run(&mut emit)
}

/// Scanning state, stacked during a scan.
///
/// `Object` dispatches into the three nested sub-states below it; every
/// other state sits directly on an empty stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Symbol,
    Str,
    Keyword,
    Number,
    Object,
    ObjectClass,
    ObjectAddr,
    ObjectLine,
}

struct Scanner {
    chars: Vec<char>,
    /// Cursor into `chars`; runs to `chars.len()` inclusive so the final
    /// iteration (with no character) can flush a pending token.
    pos: usize,
    /// Previously consumed character. Not updated on repeat.
    last: Option<char>,
    /// Accumulator for the token currently being built.
    buf: String,
    stack: Vec<State>,
    /// Consecutive repeats at the current position, reset on advance.
    repeats: usize,
}

impl Scanner {
    fn new(input: &str) -> Self {
        Scanner {
            chars: input.chars().collect(),
            pos: 0,
            last: None,
            buf: String::new(),
            stack: Vec::new(),
            repeats: 0,
        }
    }

    fn run<F>(&mut self, emit: &mut F) -> Result<(), ScanError>
    where
        F: FnMut(TokenKind, &str),
    {
        while self.pos <= self.chars.len() {
            let c = self.chars.get(self.pos).copied();
            let repeat = match self.stack.last().copied() {
                None => self.top_level(c, emit)?,
                Some(State::Symbol) => self.symbol(c, emit),
                Some(State::Str) => self.string(c, emit),
                Some(State::Keyword) => self.keyword(c, emit),
                Some(State::Number) => self.number(c, emit),
                Some(State::Object) => self.object(c, emit)?,
                Some(State::ObjectClass) => self.object_class(c, emit),
                Some(State::ObjectAddr) => self.object_addr(c, emit),
                Some(State::ObjectLine) => self.object_line(c, emit),
            };
            if repeat {
                self.repeats += 1;
                if self.repeats > MAX_REPEATS {
                    return Err(ScanError::Stuck { at: self.pos });
                }
            } else {
                self.repeats = 0;
                self.last = c;
                self.pos += 1;
            }
        }
        Ok(())
    }

    fn push(&mut self, state: State) -> Result<(), ScanError> {
        if self.stack.len() >= MAX_DEPTH {
            return Err(ScanError::DepthExceeded { at: self.pos });
        }
        self.stack.push(state);
        Ok(())
    }

    /// Emit the accumulated text as `kind` and reset the accumulator.
    fn flush<F>(&mut self, kind: TokenKind, emit: &mut F)
    where
        F: FnMut(TokenKind, &str),
    {
        emit(kind, &self.buf);
        self.buf.clear();
    }

    // ─── Top level (empty stack) ───────────────────────────────────────

    fn top_level<F>(&mut self, c: Option<char>, emit: &mut F) -> Result<bool, ScanError>
    where
        F: FnMut(TokenKind, &str),
    {
        let Some(c) = c else {
            return Ok(false);
        };
        match c {
            ':' => self.push(State::Symbol)?,
            '"' => self.push(State::Str)?,
            '#' => self.push(State::Object)?,
            'a'..='z' | 'A'..='Z' => {
                self.push(State::Keyword)?;
                return Ok(true);
            }
            '0'..='9' | '-' => {
                self.push(State::Number)?;
                return Ok(true);
            }
            '{' => emit(TokenKind::OpenHash, "{"),
            '}' => emit(TokenKind::CloseHash, "}"),
            '[' => emit(TokenKind::OpenArray, "["),
            ']' => emit(TokenKind::CloseArray, "]"),
            ',' => emit(TokenKind::Comma, ","),
            // `=` on its own is consumed silently below; it only matters
            // as lookback for the two-character hash arrow.
            '>' if self.last == Some('=') => emit(TokenKind::Refers, "=>"),
            '.' if self.last == Some('.') => emit(TokenKind::Range, ".."),
            c if c.is_ascii_whitespace() => {
                let mut tmp = [0u8; 4];
                emit(TokenKind::Whitespace, c.encode_utf8(&mut tmp));
            }
            // Unrecognized characters are dropped, not errors.
            _ => {}
        }
        Ok(false)
    }

    // ─── Symbols, strings, words, numbers ──────────────────────────────

    fn symbol<F>(&mut self, c: Option<char>, emit: &mut F) -> bool
    where
        F: FnMut(TokenKind, &str),
    {
        if let Some(c) = c {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '!' | '?') {
                self.buf.push(c);
                return false;
            }
        }
        emit(TokenKind::SymbolPrefix, ":");
        self.flush(TokenKind::Symbol, emit);
        self.stack.pop();
        c.is_some()
    }

    fn string<F>(&mut self, c: Option<char>, emit: &mut F) -> bool
    where
        F: FnMut(TokenKind, &str),
    {
        match c {
            Some('"') if self.last == Some('\\') => {
                // Escaped quote: the backslash is already in the buffer;
                // collapse it into a literal quote and keep accumulating.
                self.buf.pop();
                self.buf.push('"');
            }
            Some('"') => {
                emit(TokenKind::OpenString, "\"");
                self.flush(TokenKind::String, emit);
                self.stack.pop();
                emit(TokenKind::CloseString, "\"");
            }
            Some(c) => self.buf.push(c),
            None => {
                // Unterminated string: flush what accumulated, with no
                // closing quote to match.
                emit(TokenKind::OpenString, "\"");
                self.flush(TokenKind::String, emit);
                self.stack.pop();
            }
        }
        false
    }

    fn keyword<F>(&mut self, c: Option<char>, emit: &mut F) -> bool
    where
        F: FnMut(TokenKind, &str),
    {
        if let Some(c) = c {
            if c.is_ascii_alphanumeric() || c == '_' {
                self.buf.push(c);
                return false;
            }
        }
        // A capitalized word is a class constant, not a keyword.
        let kind = if self.buf.starts_with(|ch: char| ch.is_ascii_uppercase()) {
            TokenKind::Class
        } else {
            TokenKind::Keyword
        };
        self.flush(kind, emit);
        self.stack.pop();
        c.is_some()
    }

    fn number<F>(&mut self, c: Option<char>, emit: &mut F) -> bool
    where
        F: FnMut(TokenKind, &str),
    {
        match c {
            Some(c) if c.is_ascii_digit() || c == 'e' || c == '-' => {
                self.buf.push(c);
                false
            }
            Some('.') if self.last == Some('.') => {
                // Second dot of a range: the first was buffered as a
                // decimal point one step ago. Take it back, close the
                // number, and emit the range marker directly.
                debug_assert!(self.buf.ends_with('.'));
                self.buf.pop();
                self.flush(TokenKind::Number, emit);
                self.stack.pop();
                emit(TokenKind::Range, "..");
                false
            }
            Some('.') => {
                // Decimal point until the next character proves otherwise.
                self.buf.push('.');
                false
            }
            _ => {
                self.flush(TokenKind::Number, emit);
                self.stack.pop();
                c.is_some()
            }
        }
    }

    // ─── Object references ─────────────────────────────────────────────

    /// Dispatch state for `#<Class:0xADDR@LINE>` references. Never
    /// accumulates characters itself; it opens, closes, or hands off to
    /// one of the three sub-states.
    fn object<F>(&mut self, c: Option<char>, emit: &mut F) -> Result<bool, ScanError>
    where
        F: FnMut(TokenKind, &str),
    {
        match c {
            Some('<') => {
                emit(TokenKind::OpenObject, "#<");
                self.push(State::ObjectClass)?;
            }
            Some(':') => self.push(State::ObjectAddr)?,
            Some('@') => self.push(State::ObjectLine)?,
            Some('>') => {
                emit(TokenKind::CloseObject, ">");
                self.stack.pop();
                self.buf.clear();
            }
            // Anything else inside an object reference is dropped.
            _ => {}
        }
        Ok(false)
    }

    fn object_class<F>(&mut self, c: Option<char>, emit: &mut F) -> bool
    where
        F: FnMut(TokenKind, &str),
    {
        match c {
            Some(':') | None => {
                self.flush(TokenKind::Class, emit);
                self.stack.pop();
                c.is_some()
            }
            Some(c) => {
                self.buf.push(c);
                false
            }
        }
    }

    fn object_addr<F>(&mut self, c: Option<char>, emit: &mut F) -> bool
    where
        F: FnMut(TokenKind, &str),
    {
        match c {
            // A bare `>` here is consumed with no emit; the closing
            // marker is handled one level up, after the address has been
            // flushed by `@`. Historical behavior, kept as-is.
            Some('>') => false,
            Some('@') | None => {
                emit(TokenKind::ObjectAddrPrefix, ":");
                self.flush(TokenKind::ObjectAddr, emit);
                self.stack.pop();
                c.is_some()
            }
            Some(c) => {
                self.buf.push(c);
                false
            }
        }
    }

    fn object_line<F>(&mut self, c: Option<char>, emit: &mut F) -> bool
    where
        F: FnMut(TokenKind, &str),
    {
        match c {
            Some('>') | None => {
                emit(TokenKind::ObjectLinePrefix, "@");
                self.flush(TokenKind::ObjectLine, emit);
                self.stack.pop();
                c.is_some()
            }
            Some(c) => {
                self.buf.push(c);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests;
