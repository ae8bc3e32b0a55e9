use std::sync::Arc;
use rayon::prelude::*;
use tracing::{debug, debug_span, warn};
use crate::{cell_of, ConfigError, GridCell, SmallXxHash};

/// Largest accepted resolution. Keeps every cell index inside `u32` and the
/// buffer at 1 GiB.
pub const MAX_RESOLUTION: u32 = 1 << 14;

/// Finished evaluation pass. The buffer is shared read-only; a new pass
/// produces a new `HashGrid` instead of writing into this one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashGrid {
    resolution: u32,
    seed: i32,
    hashes: Arc<[u32]>,
}

impl HashGrid {
    #[inline] pub fn resolution(&self) -> u32 { self.resolution }
    #[inline] pub fn seed(&self) -> i32 { self.seed }
    #[inline] pub fn hashes(&self) -> &[u32] { &self.hashes }
    /// Cheap handle to the buffer for a consumer that outlives this grid.
    #[inline] pub fn shared(&self) -> Arc<[u32]> { Arc::clone(&self.hashes) }
    #[inline] pub fn len(&self) -> usize { self.hashes.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.hashes.is_empty() }

    pub fn get(&self, c: GridCell) -> Option<u32> {
        if c.u >= self.resolution || c.v >= self.resolution { return None; }
        self.hashes.get(crate::index_of(c, self.resolution) as usize).copied()
    }
}

#[inline]
pub fn cell_hash(seeded: SmallXxHash, c: GridCell) -> u32 {
    seeded.eat(c.u as i32).eat(c.v as i32).finalize()
}

pub fn checked_resolution(resolution: i64) -> Result<u32, ConfigError> {
    if resolution < 0 {
        warn!(resolution, "rejecting negative resolution");
        return Err(ConfigError::invalid("resolution", format!("{resolution} is negative")));
    }
    if resolution > MAX_RESOLUTION as i64 {
        warn!(resolution, max = MAX_RESOLUTION, "rejecting oversized resolution");
        return Err(ConfigError::invalid(
            "resolution",
            format!("{resolution} exceeds maximum {MAX_RESOLUTION}"),
        ));
    }
    Ok(resolution as u32)
}

/// Hashes every cell of a `resolution` x `resolution` grid on the rayon pool.
/// Work is split one row per task; the buffer is joined before return.
pub fn evaluate(resolution: i64, seed: i32) -> Result<HashGrid, ConfigError> {
    let r = checked_resolution(resolution)?;
    let _span = debug_span!("evaluate", resolution = r, seed).entered();
    let seeded = SmallXxHash::seed(seed);

    let mut hashes = vec![0u32; (r as usize) * (r as usize)];
    if r > 0 {
        hashes.par_chunks_mut(r as usize).enumerate().for_each(|(row, out)| {
            let base = row as u32 * r;
            for (col, slot) in out.iter_mut().enumerate() {
                *slot = cell_hash(seeded, cell_of(base + col as u32, r));
            }
        });
    }
    debug!(cells = hashes.len(), "hash grid ready");
    Ok(HashGrid { resolution: r, seed, hashes: hashes.into() })
}

/// Single-threaded reference pass; must match `evaluate` bit for bit.
pub fn evaluate_serial(resolution: i64, seed: i32) -> Result<HashGrid, ConfigError> {
    let r = checked_resolution(resolution)?;
    let seeded = SmallXxHash::seed(seed);
    let hashes: Vec<u32> = crate::cells(r).map(|c| cell_hash(seeded, c)).collect();
    Ok(HashGrid { resolution: r, seed, hashes: hashes.into() })
}
