use std::io::Write;

use tracing::debug;

use crate::LayoutError;

/// Size of one rendered record, in bytes.
pub const SECTOR_SIZE: usize = 512;

pub const HEADER: &str = "Sector ";
pub const CONTENT: &str = ": The quick brown fox jumped over the lazy dog.";
pub const END: &str = "end.";

/// Bytes of every record that do not depend on the index or the padding.
const FIXED_LEN: usize = HEADER.len() + CONTENT.len() + END.len();

/// Number of decimal digits in `n` (`0` has one digit).
pub fn decimal_width(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// Per-run record layout: a fixed-width index field followed by a
/// precomputed tail of content, dot padding and end marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorTemplate {
    width: usize,
    padding: usize,
    tail: String,
}

impl SectorTemplate {
    /// Template for a run of `sector_count` records. The index field is as
    /// wide as `sector_count` itself, not `sector_count - 1`.
    pub fn for_count(sector_count: u64) -> Result<Self, LayoutError> {
        Self::with_width(decimal_width(sector_count))
    }

    /// Template with an explicit index field width.
    pub fn with_width(width: usize) -> Result<Self, LayoutError> {
        let available = SECTOR_SIZE - FIXED_LEN;
        let padding = available
            .checked_sub(width)
            .ok_or(LayoutError::PaddingUnderflow { width, available })?;

        let mut tail = String::with_capacity(CONTENT.len() + padding + END.len());
        tail.push_str(CONTENT);
        tail.extend(std::iter::repeat('.').take(padding));
        tail.push_str(END);

        debug!(width, padding, "derived sector template");
        Ok(Self {
            width,
            padding,
            tail,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of `.` filler bytes between the content and the end marker.
    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Render the record for `index`.
    pub fn render(&self, index: u64) -> Result<String, LayoutError> {
        self.check_index(index)?;
        Ok(self.line(index))
    }

    /// Write the record for `index` straight to `out`.
    pub fn render_into<W: Write + ?Sized>(&self, index: u64, out: &mut W) -> Result<(), LayoutError> {
        self.check_index(index)?;
        write!(out, "{HEADER}{index:0width$}", width = self.width)?;
        out.write_all(self.tail.as_bytes())?;
        Ok(())
    }

    // A wider index would push the record past SECTOR_SIZE.
    fn check_index(&self, index: u64) -> Result<(), LayoutError> {
        if decimal_width(index) > self.width {
            return Err(LayoutError::IndexTooWide {
                index,
                width: self.width,
            });
        }
        Ok(())
    }

    fn line(&self, index: u64) -> String {
        let mut line = String::with_capacity(SECTOR_SIZE);
        line.push_str(HEADER);
        line.push_str(&format!("{index:0width$}", width = self.width));
        line.push_str(&self.tail);
        line
    }
}

/// Lazy iterator over every record of a run, in ascending index order.
#[derive(Debug, Clone)]
pub struct SectorLines {
    template: SectorTemplate,
    next: u64,
    end: u64,
}

impl SectorLines {
    pub fn new(sector_count: u64) -> Result<Self, LayoutError> {
        Ok(Self {
            template: SectorTemplate::for_count(sector_count)?,
            next: 0,
            end: sector_count,
        })
    }

    pub fn template(&self) -> &SectorTemplate {
        &self.template
    }
}

impl Iterator for SectorLines {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.next >= self.end {
            return None;
        }
        // Indices below the run's count always fit the field.
        let line = self.template.line(self.next);
        self.next += 1;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}
