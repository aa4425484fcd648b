//! # Cellwidth - Tab-Aware Widths for Table Cells
//!
//! `cellwidth` measures how many terminal columns a table cell occupies when
//! it contains tabs and wide Unicode runes, and escapes raw cell bytes into a
//! printable form without losing track of that width.
//!
//! It is a leaf of a table renderer: the renderer decides column widths and
//! positions, and asks this crate for each cell's escaped text and width.
//!
//! ## Core Concepts
//!
//! - [`tab_positions`]: where the tabs of a line are, and how wide the text
//!   between them is
//! - [`tab_width`]: the rendered width of a scanned line, tabs expanded to
//!   absolute stops
//! - [`escape`] / [`EscapeSpec::escape`]: escape a (possibly multi-line) cell
//!   and produce a [`Value`]
//! - [`RuneWidth`]: pluggable rune width, with [`WidthProfile`] as the
//!   `unicode-width` backed default
//!
//! ## Tab Stops
//!
//! Stops sit on every multiple of the tab size counted from column 0. A cell
//! that starts at column 14 with tab size 8 reaches its first stop at 16, not
//! at 22.
//!
//! ```rust
//! use cellwidth::{tab_positions, tab_width, WidthProfile};
//!
//! let line = "\u{8888}\t\u{8888}\t\t\u{8888}";
//! let (tabs, trailing) = tab_positions(line, &WidthProfile::Standard);
//!
//! assert_eq!(tab_width(&tabs, trailing, 0, 8).unwrap(), 26);
//! assert_eq!(tab_width(&tabs, trailing, 14, 8).unwrap(), 28);
//! ```
//!
//! ## Escaping Cells
//!
//! ```rust
//! use cellwidth::{EscapeSpec, TabPosition};
//!
//! let spec = EscapeSpec::builder().tab_size(4).build().unwrap();
//! let value = spec.escape(b"key\tvalue\r\nnext", 0);
//!
//! assert_eq!(value.as_str(), "key\tvalue\\r\nnext");
//! assert_eq!(value.tabs(), &[vec![TabPosition::new(3, 3)], vec![]]);
//! assert_eq!(value.line_widths(), &[11, 4]);
//! assert_eq!(value.width(), 11);
//!
//! // The same cell placed at column 2.
//! assert_eq!(value.width_at(2), 13);
//! ```
//!
//! ## Configuration
//!
//! Escape rules can be loaded from YAML or JSON:
//!
//! ```rust
//! use cellwidth::{EscapeSpec, InvalidUtf8};
//!
//! let spec = EscapeSpec::from_yaml(r#"
//! tab_size: 4
//! invalid_utf8: replace
//! escapes:
//!   "|": "\\|"
//! "#).unwrap();
//!
//! assert_eq!(spec.invalid_utf8(), InvalidUtf8::Replace);
//! assert_eq!(spec.escape(b"a|b", 0).as_str(), "a\\|b");
//! ```

mod error;
pub mod escape;
pub mod tabs;
mod width;

// Error type
pub use error::{Error, Result};

// Tab stop exports
pub use tabs::{tab_positions, tab_width, TabPosition, TabStops, DEFAULT_TAB_SIZE};

// Escaper exports
pub use escape::{escape, EscapeConfig, EscapeSpec, EscapeSpecBuilder, InvalidUtf8, Value};

// Width exports
pub use width::{display_width, RuneWidth, WidthProfile};
