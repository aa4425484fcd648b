//! Locating tabs within a single line.

use serde::{Deserialize, Serialize};

use crate::width::RuneWidth;

/// A tab inside a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabPosition {
    /// Byte offset of the `\t` within its line.
    pub offset: usize,
    /// Width of the text between the previous tab (or line start) and this tab.
    pub width_before: usize,
}

impl TabPosition {
    pub fn new(offset: usize, width_before: usize) -> Self {
        TabPosition {
            offset,
            width_before,
        }
    }
}

/// Scans `line` for tabs.
///
/// Returns one [`TabPosition`] per tab in byte order, plus the width of the
/// text after the last tab (the whole line when there are none). Segment
/// widths never include tab expansion.
///
/// `line` is expected to hold a single line; a `\n` inside it is measured
/// like any other rune.
///
/// # Example
///
/// ```rust
/// use cellwidth::{tab_positions, TabPosition, WidthProfile};
///
/// let (tabs, trailing) = tab_positions("ab\t\u{8888}\tc", &WidthProfile::Standard);
/// assert_eq!(tabs, vec![TabPosition::new(2, 2), TabPosition::new(6, 2)]);
/// assert_eq!(trailing, 1);
/// ```
pub fn tab_positions<W: RuneWidth + ?Sized>(line: &str, widths: &W) -> (Vec<TabPosition>, usize) {
    let mut tabs = Vec::new();
    let mut last = 0;

    for (offset, _) in line.match_indices('\t') {
        tabs.push(TabPosition::new(offset, widths.str_width(&line[last..offset])));
        last = offset + 1;
    }

    (tabs, widths.str_width(&line[last..]))
}
