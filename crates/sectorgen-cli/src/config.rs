use thiserror::Error;

const DEFAULT_PROGRAM: &str = "make-test-file";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("sector count must not be negative, got {0}")]
    NegativeSectorCount(i64),
}

/// Validated settings for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenConfig {
    pub sector_count: u64,
}

impl GenConfig {
    pub fn from_arg(raw: i64) -> Result<Self, ConfigError> {
        let sector_count = u64::try_from(raw).map_err(|_| ConfigError::NegativeSectorCount(raw))?;
        Ok(Self { sector_count })
    }
}

/// Usage line naming the program the way it was invoked.
pub fn usage() -> String {
    let program = std::env::args().next();
    usage_for(program.as_deref().unwrap_or(DEFAULT_PROGRAM))
}

fn usage_for(program: &str) -> String {
    format!("usage: {program} <sector_count>")
}
