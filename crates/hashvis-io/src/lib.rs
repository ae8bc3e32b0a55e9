use anyhow::{anyhow, Context, Result};
use hashvis_core::{evaluate, grid_digest, hex32, HashGrid, HashVisConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DUMP_VERSION: u32 = 1;

/// On-disk record of one evaluated grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashDump {
    pub version: u32,          // bump if layout changes
    pub resolution: u32,
    pub seed: i32,
    pub digest: String,        // hex blake3 of the grid
    pub hashes: Vec<u32>,      // row-major, u before v
}

impl HashDump {
    pub fn from_grid(g: &HashGrid) -> Self {
        Self {
            version: DUMP_VERSION,
            resolution: g.resolution(),
            seed: g.seed(),
            digest: hex32(grid_digest(g)),
            hashes: g.hashes().to_vec(),
        }
    }

    /// Re-evaluates the grid from (resolution, seed) and checks both the
    /// stored values and the stored digest.
    pub fn verify(&self) -> Result<()> {
        if self.version != DUMP_VERSION {
            return Err(anyhow!("unsupported dump version {}", self.version));
        }
        let cells = (self.resolution as u64).pow(2);
        if self.hashes.len() as u64 != cells {
            return Err(anyhow!(
                "resolution {} needs {} cells, dump has {}",
                self.resolution, cells, self.hashes.len()
            ));
        }
        let g = evaluate(self.resolution as i64, self.seed)?;
        if g.hashes() != self.hashes.as_slice() {
            return Err(anyhow!("hash values do not match resolution {} seed {}", self.resolution, self.seed));
        }
        let want = hex32(grid_digest(&g));
        if want != self.digest {
            return Err(anyhow!("digest mismatch: stored {} computed {}", self.digest, want));
        }
        Ok(())
    }
}

/// Write dump to JSON at `out_path`. If `pretty=true`, pretty-print JSON.
pub fn write_dump_json(dump: &HashDump, out_path: &Path, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(dump)?
    } else {
        serde_json::to_string(dump)?
    };
    std::fs::write(out_path, json).with_context(|| format!("write {}", out_path.display()))?;
    Ok(())
}

pub fn read_dump_json(path: &Path) -> Result<HashDump> {
    let s = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let dump: HashDump = serde_json::from_str(&s)
        .map_err(|e| anyhow!("{}: {}", path.display(), e))?;
    Ok(dump)
}

pub fn load_config(path: &Path) -> Result<HashVisConfig> {
    let s = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg = HashVisConfig::from_json_str(&s).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

/// Merges an optional config file with flag overrides, then validates the
/// merged result once. Flags win over file values.
pub fn resolve_config(file: Option<&Path>, resolution: Option<u32>, seed: Option<i32>) -> Result<HashVisConfig> {
    let mut cfg = match file {
        Some(p) => load_config(p)?,
        None => HashVisConfig::default(),
    };
    if let Some(r) = resolution { cfg.resolution = r; }
    if let Some(s) = seed { cfg.seed = s; }
    match file {
        Some(p) => cfg.validate().with_context(|| format!("config {} with flag overrides", p.display()))?,
        None => cfg.validate()?,
    }
    Ok(cfg)
}

/// fmt subscriber for the command-line tools. Filter from `RUST_LOG`,
/// defaulting to `info`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
