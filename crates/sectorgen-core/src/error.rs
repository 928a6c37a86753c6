use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("index width {width} leaves no room for padding ({available} bytes available)")]
    PaddingUnderflow { width: usize, available: usize },
    #[error("sector index {index} does not fit in a {width}-digit field")]
    IndexTooWide { index: u64, width: usize },
    #[error("output of {sectors} sectors overflows a 64-bit byte count")]
    OutputTooLarge { sectors: u64 },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
