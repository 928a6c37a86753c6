use std::io::Write;

use tracing::{debug, trace};

use crate::layout::{SectorTemplate, SECTOR_SIZE};
use crate::LayoutError;

/// What a completed run wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitSummary {
    pub sectors: u64,
    pub bytes: u64,
}

/// Total byte length of a run of `sector_count` records.
pub fn output_len(sector_count: u64) -> Result<u64, LayoutError> {
    sector_count
        .checked_mul(SECTOR_SIZE as u64)
        .ok_or(LayoutError::OutputTooLarge {
            sectors: sector_count,
        })
}

/// Write records `0..sector_count` back to back into `out`, then flush it.
///
/// No separator is written between records or after the last one.
pub fn write_sectors<W: Write + ?Sized>(
    sector_count: u64,
    out: &mut W,
) -> Result<EmitSummary, LayoutError> {
    let bytes = output_len(sector_count)?;
    let template = SectorTemplate::for_count(sector_count)?;

    for index in 0..sector_count {
        template.render_into(index, out)?;
        trace!(index, "sector written");
    }
    out.flush()?;

    debug!(sectors = sector_count, bytes, "sectors flushed");
    Ok(EmitSummary {
        sectors: sector_count,
        bytes,
    })
}
