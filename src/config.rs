use std::env;

use anyhow::Result;

/// Routes list consulted when no slip files are given on the command line.
pub const DEFAULT_ACTIVE_LIST: &str = "Active_Rides.txt";

/// Copies per print sheet when neither `--copies` nor the env var is set.
pub const DEFAULT_COPIES: u32 = 3;

/// Central configuration loaded from environment variables.
///
/// Nothing here is secret, but the .env file is still loaded automatically
/// at startup via dotenvy so a club can pin its routes list per directory.
pub struct Config {
    /// Path of the list naming the currently active route slips
    /// (SLIPSTREAM_ACTIVE_LIST env var)
    pub active_list: String,
    /// Copies per print sheet (SLIPSTREAM_COPIES env var)
    pub copies: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Both settings have defaults. A malformed SLIPSTREAM_COPIES is an
    /// error, not a silent fallback to the default.
    pub fn load() -> Result<Self> {
        let copies = match env::var("SLIPSTREAM_COPIES") {
            Ok(raw) => raw.parse::<u32>().map_err(|_| {
                anyhow::anyhow!("SLIPSTREAM_COPIES must be a whole number, got {raw:?}")
            })?,
            Err(_) => DEFAULT_COPIES,
        };
        if copies == 0 {
            anyhow::bail!("SLIPSTREAM_COPIES must be at least 1");
        }

        Ok(Self {
            active_list: env::var("SLIPSTREAM_ACTIVE_LIST")
                .unwrap_or_else(|_| DEFAULT_ACTIVE_LIST.to_string()),
            copies,
        })
    }
}
