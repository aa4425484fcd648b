//! Rune width classification.
//!
//! Width accounting is pluggable through [`RuneWidth`]. The default
//! [`WidthProfile`] is backed by `unicode-width` and is East-Asian-width
//! aware: ASCII is 1 column, most CJK ideographs are 2, combining marks are 0.
//!
//! Any `Fn(char) -> usize` closure also works as a width function:
//!
//! ```rust
//! use cellwidth::{display_width, RuneWidth};
//!
//! let fixed = |_: char| 1usize;
//! assert_eq!(fixed.str_width("袈袈"), 2);
//! assert_eq!(display_width("袈袈"), 4);
//! ```

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

/// Maps a rune to the number of terminal columns it occupies.
///
/// Implementations must be pure: the same rune always has the same width.
pub trait RuneWidth {
    /// Width of a single rune in columns (typically 0, 1 or 2).
    fn rune_width(&self, c: char) -> usize;

    /// Width of a string, summed rune by rune.
    fn str_width(&self, s: &str) -> usize {
        s.chars().map(|c| self.rune_width(c)).sum()
    }
}

impl<F> RuneWidth for F
where
    F: Fn(char) -> usize,
{
    fn rune_width(&self, c: char) -> usize {
        self(c)
    }
}

/// Built-in width tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthProfile {
    /// Unicode East Asian Width, ambiguous characters are narrow.
    #[default]
    Standard,
    /// Ambiguous-width characters are wide, as in CJK locales.
    Cjk,
}

impl RuneWidth for WidthProfile {
    fn rune_width(&self, c: char) -> usize {
        let width = match self {
            WidthProfile::Standard => c.width(),
            WidthProfile::Cjk => c.width_cjk(),
        };
        // Runes without a classification still occupy a cell.
        width.unwrap_or(1)
    }
}

/// Display width of `s` using the standard profile.
///
/// Tabs are not expanded here; use [`tab_positions`](crate::tab_positions)
/// and [`tab_width`](crate::tab_width) for text that may contain them.
pub fn display_width(s: &str) -> usize {
    WidthProfile::Standard.str_width(s)
}
