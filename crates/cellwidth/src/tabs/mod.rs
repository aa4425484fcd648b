//! Tab stop arithmetic.
//!
//! Width of a line with tabs is computed in two steps that are kept apart on
//! purpose:
//!
//! 1. [`tab_positions`] scans the line and reports where each tab sits and
//!    how wide the text before it is. No expansion happens here.
//! 2. [`tab_width`] replays those segments from a starting column and
//!    expands every tab to the next absolute stop.
//!
//! ```rust
//! use cellwidth::{tab_positions, tab_width, WidthProfile};
//!
//! let (tabs, trailing) = tab_positions("foo\tbar\t", &WidthProfile::Standard);
//! assert_eq!(tab_width(&tabs, trailing, 0, 8).unwrap(), 16);
//!
//! // Stops are anchored at column 0, not at the starting column.
//! let (tabs, trailing) = tab_positions("\t", &WidthProfile::Standard);
//! assert_eq!(tab_width(&tabs, trailing, 1, 4).unwrap(), 3);
//! ```

mod resolve;
mod scan;

pub use resolve::{tab_width, TabStops, DEFAULT_TAB_SIZE};
pub use scan::{tab_positions, TabPosition};
