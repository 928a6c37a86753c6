pub mod emit;
pub mod error;
pub mod layout;

pub use emit::{output_len, write_sectors, EmitSummary};
pub use error::LayoutError;
pub use layout::{SectorLines, SectorTemplate, SECTOR_SIZE};
