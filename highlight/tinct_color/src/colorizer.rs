//! Best-effort colorization over the token stream.

use std::borrow::Cow;
use std::fmt::Display;

use tinct_lexer_core::{tokenize, TokenKind};
use tracing::debug;

use crate::palette::ColorName;
use crate::scheme::Scheme;

/// Wrap `text` in the escape for `color`, resetting afterwards.
///
/// With no color the text passes through unmodified (and unallocated).
pub fn colorize_string(text: &str, color: Option<ColorName>) -> Cow<'_, str> {
    match color {
        Some(color) => Cow::Owned(format!(
            "{}{}{}",
            color.escape(),
            text,
            ColorName::Nothing.escape()
        )),
        None => Cow::Borrowed(text),
    }
}

/// Colorizes inspection strings.
///
/// Each instance owns its [`Scheme`]; there is no process-wide color
/// table. Callers that want to share one configuration across threads
/// can clone the colorizer or wrap it themselves.
#[derive(Clone, Debug, Default)]
pub struct Colorizer {
    scheme: Scheme,
}

impl Colorizer {
    /// A colorizer using the given scheme.
    pub fn new(scheme: Scheme) -> Colorizer {
        Colorizer { scheme }
    }

    /// The active scheme.
    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// Mutable access to the active scheme, for tweaking single entries.
    pub fn scheme_mut(&mut self) -> &mut Scheme {
        &mut self.scheme
    }

    /// Replace the active scheme wholesale.
    pub fn set_scheme(&mut self, scheme: Scheme) {
        self.scheme = scheme;
    }

    /// Colorize `input`, falling back to the original string.
    ///
    /// Total: scans `input`, wraps every token in its configured color,
    /// and returns the reassembled string. If the scanner reports an
    /// internal fault, the input comes back verbatim — the caller's
    /// output must never be blocked by a highlighting bug.
    pub fn colorize(&self, input: &str) -> String {
        self.colorize_with(input, |emit| tokenize(input, emit))
    }

    /// Render `input` through an arbitrary scan function.
    ///
    /// This is the error boundary: a failed scan is reported as a debug
    /// event and collapses to the uncolorized input.
    fn colorize_with<E, S>(&self, input: &str, scan: S) -> String
    where
        E: Display,
        S: FnOnce(&mut dyn FnMut(TokenKind, &str)) -> Result<(), E>,
    {
        let mut out = String::with_capacity(input.len());
        let result = scan(&mut |kind, text| {
            out.push_str(&colorize_string(text, self.scheme.color(kind)));
        });
        match result {
            Ok(()) => out,
            Err(err) => {
                debug!(%err, "scan failed, returning input uncolorized");
                input.to_owned()
            }
        }
    }
}
