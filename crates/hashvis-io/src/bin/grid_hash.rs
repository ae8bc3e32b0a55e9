use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::{Parser, ArgAction};
use tracing::info;
use hashvis_core::{evaluate, evaluate_serial};
use hashvis_io::{init_tracing, resolve_config, write_dump_json, HashDump};

#[derive(Parser, Debug)]
#[command(name="grid_hash", version, about="Evaluate a SmallXXHash grid and emit a stable JSON dump + digest")]
struct Opts {
    /// JSON config (resolution, seed, vertical_offset). Flags override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid resolution (cells per side, 4..=512)
    #[arg(long)]
    resolution: Option<u32>,

    /// Hash seed
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i32>,

    /// Output .hashes.json path (default: grid_<res>_<seed>.hashes.json)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pretty-print JSON
    #[arg(long, action=ArgAction::SetTrue)]
    pretty: bool,

    /// Evaluate on the calling thread instead of the rayon pool
    #[arg(long, action=ArgAction::SetTrue)]
    serial: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let opts = Opts::parse();

    let cfg = resolve_config(opts.config.as_deref(), opts.resolution, opts.seed)?;

    let grid = if opts.serial {
        evaluate_serial(cfg.resolution as i64, cfg.seed)?
    } else {
        evaluate(cfg.resolution as i64, cfg.seed)?
    };
    let dump = HashDump::from_grid(&grid);

    let out = opts.out.clone().unwrap_or_else(|| {
        PathBuf::from(format!("grid_{}_{}.hashes.json", grid.resolution(), grid.seed()))
    });
    write_dump_json(&dump, &out, opts.pretty)?;

    let mut digest_path = out.clone();
    digest_path.set_extension("blake3");
    std::fs::write(&digest_path, format!("{}\n", dump.digest))
        .with_context(|| format!("write {}", digest_path.display()))?;
    info!(out = %out.display(), cells = grid.len(), "dump written");

    println!("Dump:       {}", out.display());
    println!("Digest:     {}", dump.digest);
    println!("Resolution: {}", grid.resolution());
    println!("Seed:       {}", grid.seed());
    println!("Cells:      {}", grid.len());
    let v = cfg.shader_config();
    println!("Config:     ({}, {:.6}, {:.6}, {})", v.x, v.y, v.z, v.w);
    Ok(())
}
