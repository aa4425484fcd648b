//! The escaped, width-annotated form of a cell.

use std::fmt;

use serde::Serialize;

use crate::tabs::{TabPosition, TabStops};

/// Escaped cell content plus the layout data a renderer needs.
///
/// Built once by [`escape`](crate::escape) and read-only afterwards. The
/// buffer is split into lines on `\n`; every per-line collection has exactly
/// one entry per line, so an empty cell has one empty line and a trailing
/// newline adds a final empty line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Value {
    buf: String,
    tabs: Vec<Vec<TabPosition>>,
    trailing: Vec<usize>,
    line_widths: Vec<usize>,
    width: usize,
    tab_stops: TabStops,
    start_offset: usize,
}

impl Value {
    /// Assembles a value from escaped text and each line's scan result.
    pub(crate) fn from_lines(
        buf: String,
        lines: Vec<(Vec<TabPosition>, usize)>,
        tab_stops: TabStops,
        start_offset: usize,
    ) -> Self {
        let mut tabs = Vec::with_capacity(lines.len());
        let mut trailing = Vec::with_capacity(lines.len());
        let mut line_widths = Vec::with_capacity(lines.len());

        for (line_tabs, line_trailing) in lines {
            line_widths.push(tab_stops.advance(&line_tabs, line_trailing, start_offset));
            tabs.push(line_tabs);
            trailing.push(line_trailing);
        }

        let width = line_widths.iter().copied().max().unwrap_or(0);

        Value {
            buf,
            tabs,
            trailing,
            line_widths,
            width,
            tab_stops,
            start_offset,
        }
    }

    /// The escaped bytes. Always valid UTF-8.
    pub fn buf(&self) -> &[u8] {
        self.buf.as_bytes()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Tab positions for each line, top to bottom.
    pub fn tabs(&self) -> &[Vec<TabPosition>] {
        &self.tabs
    }

    /// Width of the text after the last tab of each line.
    pub fn trailing_widths(&self) -> &[usize] {
        &self.trailing
    }

    /// Rendered width of each line at the escape-time start offset.
    pub fn line_widths(&self) -> &[usize] {
        &self.line_widths
    }

    /// Rendered width of the widest line.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn tab_size(&self) -> usize {
        self.tab_stops.size()
    }

    pub fn start_offset(&self) -> usize {
        self.start_offset
    }

    pub fn line_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.buf.split('\n')
    }

    /// Width of the widest line if the cell started at `start_offset`.
    ///
    /// Reuses the recorded tab positions, so no rescanning happens. Useful
    /// once the renderer knows the column the cell actually lands in.
    pub fn width_at(&self, start_offset: usize) -> usize {
        self.tabs
            .iter()
            .zip(&self.trailing)
            .map(|(tabs, trailing)| self.tab_stops.advance(tabs, *trailing, start_offset))
            .max()
            .unwrap_or(0)
    }
}

impl AsRef<[u8]> for Value {
    fn as_ref(&self) -> &[u8] {
        self.buf()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}
