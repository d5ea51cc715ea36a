//! Token kinds for inspection strings.
//!
//! The set is closed: it covers exactly the grammar emitted by a generic
//! value-inspection formatter, nothing more. Kind names double as the
//! stable snake_case identifiers used by color-scheme configuration, so
//! the enum derives serde with `rename_all = "snake_case"`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a scanned fragment of an inspection string is.
///
/// Discriminants are grouped into semantic ranges so related kinds stay
/// adjacent as the set evolves: containers 0-15, punctuation 16-31,
/// symbols 32-47, strings 48-63, words and numbers 64-79, object
/// references 80-95.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    // === Containers ===
    /// `{` opening a hash.
    OpenHash = 0,
    /// `}` closing a hash.
    CloseHash = 1,
    /// `[` opening an array.
    OpenArray = 2,
    /// `]` closing an array.
    CloseArray = 3,

    // === Punctuation ===
    /// A single whitespace character.
    Whitespace = 16,
    /// `,` between container elements.
    Comma = 17,
    /// `=>` between a hash key and its value.
    Refers = 18,
    /// `..` between range endpoints.
    Range = 19,

    // === Symbols ===
    /// The `:` sigil introducing a symbol.
    SymbolPrefix = 32,
    /// The body of a symbol, sigil excluded.
    Symbol = 33,

    // === Strings ===
    /// The opening `"` of a quoted string.
    OpenString = 48,
    /// The body of a quoted string, with escaped quotes collapsed.
    String = 49,
    /// The closing `"` of a quoted string.
    CloseString = 50,

    // === Words and numbers ===
    /// A bare lowercase word (`nil`, `true`, a variable name).
    Keyword = 64,
    /// A capitalized constant, standalone or inside an object reference.
    Class = 65,
    /// An integer or float, including `-` sign and exponent.
    Number = 66,

    // === Object references ===
    /// The `#<` opening an object reference.
    OpenObject = 80,
    /// The `:` between an object's class and its address.
    ObjectAddrPrefix = 81,
    /// The address portion of an object reference.
    ObjectAddr = 82,
    /// The `@` between an object's address and its line marker.
    ObjectLinePrefix = 83,
    /// The line marker portion of an object reference.
    ObjectLine = 84,
    /// The `>` closing an object reference.
    CloseObject = 85,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 22] = [
        TokenKind::OpenHash,
        TokenKind::CloseHash,
        TokenKind::OpenArray,
        TokenKind::CloseArray,
        TokenKind::Whitespace,
        TokenKind::Comma,
        TokenKind::Refers,
        TokenKind::Range,
        TokenKind::SymbolPrefix,
        TokenKind::Symbol,
        TokenKind::OpenString,
        TokenKind::String,
        TokenKind::CloseString,
        TokenKind::Keyword,
        TokenKind::Class,
        TokenKind::Number,
        TokenKind::OpenObject,
        TokenKind::ObjectAddrPrefix,
        TokenKind::ObjectAddr,
        TokenKind::ObjectLinePrefix,
        TokenKind::ObjectLine,
        TokenKind::CloseObject,
    ];

    /// Stable snake_case name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::OpenHash => "open_hash",
            TokenKind::CloseHash => "close_hash",
            TokenKind::OpenArray => "open_array",
            TokenKind::CloseArray => "close_array",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comma => "comma",
            TokenKind::Refers => "refers",
            TokenKind::Range => "range",
            TokenKind::SymbolPrefix => "symbol_prefix",
            TokenKind::Symbol => "symbol",
            TokenKind::OpenString => "open_string",
            TokenKind::String => "string",
            TokenKind::CloseString => "close_string",
            TokenKind::Keyword => "keyword",
            TokenKind::Class => "class",
            TokenKind::Number => "number",
            TokenKind::OpenObject => "open_object",
            TokenKind::ObjectAddrPrefix => "object_addr_prefix",
            TokenKind::ObjectAddr => "object_addr",
            TokenKind::ObjectLinePrefix => "object_line_prefix",
            TokenKind::ObjectLine => "object_line",
            TokenKind::CloseObject => "close_object",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
