use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::io::svg_util::SvgDrawOptions;

/// Configuration for the optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct OptConfig {
    /// Area represented by a single cell of the knapsack table. Smaller buckets are more precise but grow the table.
    pub bucket_size: f32,
    /// Upper bound on the number of entries of the knapsack table (8 bytes each).
    /// Instances needing a larger table are rejected instead of exhausting memory.
    #[serde(default = "default_max_table_entries")]
    pub max_table_entries: usize,
    /// Configuration of the rectangle packer
    pub packer: PackerConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

/// Limits on the packing search. The search is aborted when either is exceeded.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PackerConfig {
    /// Maximum number of fit attempts (searching the free-space tree for one block in one orientation).
    /// Unlimited if undefined.
    pub max_attempts: Option<u64>,
    /// Wall-clock limit in milliseconds. Unlimited if undefined.
    pub time_limit_ms: Option<u64>,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            max_attempts: Some(1_000_000),
            time_limit_ms: None,
        }
    }
}

fn default_max_table_entries() -> usize {
    50_000_000
}

impl Default for OptConfig {
    fn default() -> Self {
        Self {
            bucket_size: 100.0,
            max_table_entries: default_max_table_entries(),
            packer: PackerConfig::default(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

impl OptConfig {
    /// Checks the configuration for values the optimizer cannot work with.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.bucket_size.is_finite() && self.bucket_size > 0.0,
            "bucket size must be a positive number, got {}",
            self.bucket_size
        );
        ensure!(self.max_table_entries > 0, "max_table_entries must be positive");
        ensure!(
            self.packer.max_attempts != Some(0),
            "max_attempts must be positive if defined"
        );
        Ok(())
    }
}
