//! Color schemes: token kind → symbolic color.
//!
//! A [`Scheme`] is plain data. Two built-ins ship with the crate — the
//! default scheme and a high-contrast variant useful when auditing which
//! token gets which color — and either can be installed wholesale or
//! adjusted one entry at a time. Kinds absent from a scheme render
//! uncolored.
//!
//! Schemes serialize as a flat snake_case map, so an embedding console
//! can load a custom one from its configuration file:
//!
//! ```
//! let scheme: tinct_color::Scheme =
//!     serde_json::from_str(r#"{"number": "light_blue"}"#)?;
//! # Ok::<(), serde_json::Error>(())
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tinct_lexer_core::TokenKind;

use crate::palette::ColorName;

/// The built-in default scheme.
const DEFAULT_COLORS: &[(TokenKind, ColorName)] = &[
    // delimiters
    (TokenKind::Comma, ColorName::Blue),
    (TokenKind::Refers, ColorName::Blue),
    // containers
    (TokenKind::OpenHash, ColorName::Green),
    (TokenKind::CloseHash, ColorName::Green),
    (TokenKind::OpenArray, ColorName::Green),
    (TokenKind::CloseArray, ColorName::Green),
    // object references
    (TokenKind::OpenObject, ColorName::LightRed),
    (TokenKind::ObjectAddrPrefix, ColorName::Blue),
    (TokenKind::ObjectLinePrefix, ColorName::Blue),
    (TokenKind::CloseObject, ColorName::LightRed),
    // symbols
    (TokenKind::SymbolPrefix, ColorName::Yellow),
    (TokenKind::Symbol, ColorName::Yellow),
    // strings
    (TokenKind::OpenString, ColorName::Red),
    (TokenKind::String, ColorName::Cyan),
    (TokenKind::CloseString, ColorName::Red),
    // misc
    (TokenKind::Number, ColorName::Cyan),
    (TokenKind::Keyword, ColorName::Green),
    (TokenKind::Class, ColorName::LightGreen),
    (TokenKind::Range, ColorName::Red),
];

/// The built-in high-contrast scheme. Every kind gets a loud, distinct
/// color, which makes it easy to see where one token ends and the next
/// begins.
const HIGH_CONTRAST_COLORS: &[(TokenKind, ColorName)] = &[
    (TokenKind::Comma, ColorName::Red),
    (TokenKind::Refers, ColorName::Red),
    (TokenKind::OpenHash, ColorName::Blue),
    (TokenKind::CloseHash, ColorName::Blue),
    (TokenKind::OpenArray, ColorName::Green),
    (TokenKind::CloseArray, ColorName::Green),
    (TokenKind::OpenObject, ColorName::LightRed),
    (TokenKind::Class, ColorName::LightGreen),
    (TokenKind::ObjectAddr, ColorName::Purple),
    (TokenKind::ObjectLine, ColorName::LightPurple),
    (TokenKind::CloseObject, ColorName::LightRed),
    (TokenKind::SymbolPrefix, ColorName::Yellow),
    (TokenKind::Symbol, ColorName::Yellow),
    (TokenKind::Number, ColorName::Cyan),
    (TokenKind::String, ColorName::Cyan),
    (TokenKind::Keyword, ColorName::White),
    (TokenKind::Range, ColorName::LightBlue),
];

/// A mapping from token kind to symbolic color name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scheme {
    map: HashMap<TokenKind, ColorName>,
}

impl Scheme {
    /// A scheme with no entries; everything renders uncolored.
    pub fn empty() -> Scheme {
        Scheme {
            map: HashMap::new(),
        }
    }

    /// The built-in default scheme.
    pub fn default_colors() -> Scheme {
        Scheme {
            map: DEFAULT_COLORS.iter().copied().collect(),
        }
    }

    /// The built-in high-contrast scheme.
    pub fn high_contrast() -> Scheme {
        Scheme {
            map: HIGH_CONTRAST_COLORS.iter().copied().collect(),
        }
    }

    /// The color configured for `kind`, if any.
    pub fn color(&self, kind: TokenKind) -> Option<ColorName> {
        self.map.get(&kind).copied()
    }

    /// Configure the color for a single kind.
    pub fn set(&mut self, kind: TokenKind, color: ColorName) {
        self.map.insert(kind, color);
    }

    /// Remove the entry for `kind`, leaving it uncolored. Returns the
    /// color it had.
    pub fn unset(&mut self, kind: TokenKind) -> Option<ColorName> {
        self.map.remove(&kind)
    }

    /// Number of configured entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no entries are configured.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for Scheme {
    fn default() -> Scheme {
        Scheme::default_colors()
    }
}
