//! ANSI colorizer for inspection strings.
//!
//! Drives the [`tinct_lexer_core`] scanner over a value's inspection dump,
//! maps each token kind to a symbolic color through a per-instance
//! [`Scheme`], and reassembles one escape-wrapped string for the console
//! to print.
//!
//! Colorization is a best-effort visual enhancement: [`Colorizer::colorize`]
//! is total. If the scan reports an internal fault the original input comes
//! back verbatim — the value shown to the user is never blocked or
//! corrupted by the highlighting layer.
//!
//! ```
//! use tinct_color::Colorizer;
//!
//! let colorizer = Colorizer::default();
//! assert_eq!(colorizer.colorize("1"), "\x1b[0;36m1\x1b[0;0m");
//! ```
//!
//! No I/O happens here; the embedding console owns the output pipeline
//! (and the `tracing` subscriber, if it wants the fallback events).

pub mod colorizer;
pub mod palette;
pub mod scheme;

pub use colorizer::{colorize_string, Colorizer};
pub use palette::ColorName;
pub use scheme::Scheme;
