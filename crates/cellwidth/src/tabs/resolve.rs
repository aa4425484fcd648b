//! Expanding tabs to absolute tab stops.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use super::scan::TabPosition;
use crate::error::{Error, Result};

/// Tab size used when none is configured.
pub const DEFAULT_TAB_SIZE: usize = 8;

/// A validated, positive tab size.
///
/// Stops fall on every multiple of the size, counted from column 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct TabStops(NonZeroUsize);

impl TabStops {
    /// Validates a tab size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when `size` is zero.
    pub fn new(size: usize) -> Result<Self> {
        NonZeroUsize::new(size).map(TabStops).ok_or_else(|| {
            tracing::debug!(size, "rejected tab size");
            Error::InvalidConfiguration(format!("tab size must be positive, got {size}"))
        })
    }

    pub fn size(self) -> usize {
        self.0.get()
    }

    /// First stop strictly after `column`.
    ///
    /// A column already on a stop advances a full tab size. Saturates at
    /// `usize::MAX`.
    pub fn next_stop(self, column: usize) -> usize {
        let size = self.size();
        (column / size).saturating_add(1).saturating_mul(size)
    }

    /// Width consumed by a line starting at `start_offset`.
    ///
    /// This is the infallible core of [`tab_width`].
    pub fn advance(self, tabs: &[TabPosition], trailing: usize, start_offset: usize) -> usize {
        let column = tabs.iter().fold(start_offset, |column, tab| {
            self.next_stop(column.saturating_add(tab.width_before))
        });
        column.saturating_add(trailing).saturating_sub(start_offset)
    }
}

impl Default for TabStops {
    fn default() -> Self {
        TabStops(NonZeroUsize::new(DEFAULT_TAB_SIZE).unwrap_or(NonZeroUsize::MIN))
    }
}

impl TryFrom<usize> for TabStops {
    type Error = Error;

    fn try_from(size: usize) -> Result<Self> {
        TabStops::new(size)
    }
}

impl From<TabStops> for usize {
    fn from(stops: TabStops) -> Self {
        stops.size()
    }
}

/// Rendered width of a scanned line.
///
/// Starts the cursor at `start_offset`, advances over each tab's preceding
/// segment, jumps to the next stop for the tab itself, and finally adds
/// `trailing`. The result is the width consumed relative to `start_offset`,
/// not the absolute end column.
///
/// # Errors
///
/// Returns [`Error::InvalidConfiguration`] when `tab_size` is zero.
///
/// # Example
///
/// ```rust
/// use cellwidth::{tab_positions, tab_width, WidthProfile};
///
/// let (tabs, trailing) = tab_positions(" \t\t ", &WidthProfile::Standard);
/// assert_eq!(tab_width(&tabs, trailing, 0, 8).unwrap(), 17);
/// assert!(tab_width(&tabs, trailing, 0, 0).is_err());
/// ```
pub fn tab_width(
    tabs: &[TabPosition],
    trailing: usize,
    start_offset: usize,
    tab_size: usize,
) -> Result<usize> {
    Ok(TabStops::new(tab_size)?.advance(tabs, trailing, start_offset))
}
