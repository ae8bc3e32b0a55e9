use std::sync::Arc;
use tracing::{info, warn};
use crate::{evaluate, grid_digest, ConfigError, HashGrid, HashVisConfig};

/// Owns the currently published hash buffer for one visualization.
/// Reconfiguring publishes a fresh grid; buffers already handed out are
/// never written to.
#[derive(Clone, Debug)]
pub struct HashField {
    config: HashVisConfig,
    grid: HashGrid,
}

impl HashField {
    pub fn new(config: HashVisConfig) -> Result<Self, ConfigError> {
        let grid = Self::build(&config)?;
        Ok(Self { config, grid })
    }

    fn build(config: &HashVisConfig) -> Result<HashGrid, ConfigError> {
        config.validate()?;
        evaluate(config.resolution as i64, config.seed)
    }

    /// On error the previous grid stays published.
    pub fn reconfigure(&mut self, config: HashVisConfig) -> Result<(), ConfigError> {
        if config == self.config { return Ok(()); }
        match Self::build(&config) {
            Ok(grid) => {
                info!(resolution = config.resolution, seed = config.seed, "hash field rebuilt");
                self.config = config;
                self.grid = grid;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "keeping previous hash field");
                Err(e)
            }
        }
    }

    #[inline] pub fn config(&self) -> &HashVisConfig { &self.config }
    #[inline] pub fn grid(&self) -> &HashGrid { &self.grid }
    #[inline] pub fn hashes(&self) -> Arc<[u32]> { self.grid.shared() }
    /// Instances to draw, one per cell.
    #[inline] pub fn instance_count(&self) -> usize { self.config.instance_count() }
    pub fn digest(&self) -> [u8; 32] { grid_digest(&self.grid) }
}
