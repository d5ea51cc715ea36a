//! Symbolic color names and their terminal escape codes.
//!
//! The escape table is fixed data: sixteen foreground colors in their
//! normal and bright variants, plus [`ColorName::Nothing`] which resets
//! attributes and doubles as the closing escape after every colorized
//! fragment.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A symbolic terminal color, resolvable to an ANSI escape sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorName {
    /// Attribute reset; closes every colorized fragment.
    Nothing,
    Black,
    Red,
    Green,
    Brown,
    Blue,
    Cyan,
    Purple,
    LightGray,
    DarkGray,
    LightRed,
    LightGreen,
    Yellow,
    LightBlue,
    LightCyan,
    LightPurple,
    White,
}

impl ColorName {
    /// Every color, in declaration order.
    pub const ALL: [ColorName; 17] = [
        ColorName::Nothing,
        ColorName::Black,
        ColorName::Red,
        ColorName::Green,
        ColorName::Brown,
        ColorName::Blue,
        ColorName::Cyan,
        ColorName::Purple,
        ColorName::LightGray,
        ColorName::DarkGray,
        ColorName::LightRed,
        ColorName::LightGreen,
        ColorName::Yellow,
        ColorName::LightBlue,
        ColorName::LightCyan,
        ColorName::LightPurple,
        ColorName::White,
    ];

    /// The ANSI escape sequence selecting this color.
    pub fn escape(self) -> &'static str {
        match self {
            ColorName::Nothing => "\x1b[0;0m",
            ColorName::Black => "\x1b[0;30m",
            ColorName::Red => "\x1b[0;31m",
            ColorName::Green => "\x1b[0;32m",
            ColorName::Brown => "\x1b[0;33m",
            ColorName::Blue => "\x1b[0;34m",
            ColorName::Purple => "\x1b[0;35m",
            ColorName::Cyan => "\x1b[0;36m",
            ColorName::LightGray => "\x1b[0;37m",
            ColorName::DarkGray => "\x1b[1;30m",
            ColorName::LightRed => "\x1b[1;31m",
            ColorName::LightGreen => "\x1b[1;32m",
            ColorName::Yellow => "\x1b[1;33m",
            ColorName::LightBlue => "\x1b[1;34m",
            ColorName::LightPurple => "\x1b[1;35m",
            ColorName::LightCyan => "\x1b[1;36m",
            ColorName::White => "\x1b[1;37m",
        }
    }

    /// Stable snake_case name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            ColorName::Nothing => "nothing",
            ColorName::Black => "black",
            ColorName::Red => "red",
            ColorName::Green => "green",
            ColorName::Brown => "brown",
            ColorName::Blue => "blue",
            ColorName::Cyan => "cyan",
            ColorName::Purple => "purple",
            ColorName::LightGray => "light_gray",
            ColorName::DarkGray => "dark_gray",
            ColorName::LightRed => "light_red",
            ColorName::LightGreen => "light_green",
            ColorName::Yellow => "yellow",
            ColorName::LightBlue => "light_blue",
            ColorName::LightCyan => "light_cyan",
            ColorName::LightPurple => "light_purple",
            ColorName::White => "white",
        }
    }

    /// Look up a color by its snake_case name.
    ///
    /// Unknown names yield `None`, which renders as "no color" rather
    /// than an error — configuration typos degrade, they don't break.
    pub fn from_name(name: &str) -> Option<ColorName> {
        ColorName::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
