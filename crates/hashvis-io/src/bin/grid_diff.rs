use std::{path::PathBuf, process::ExitCode};
use anyhow::Result;
use clap::Parser;
use hashvis_core::cell_of;
use hashvis_io::{init_tracing, read_dump_json};

#[derive(Parser, Debug)]
#[command(name="grid_diff", version, about="Diff two .hashes.json dumps (config, digest, per-cell values)")]
struct Opts {
    /// Left dump
    left: PathBuf,
    /// Right dump
    right: PathBuf,
    /// Max differences to print before truncating
    #[arg(long, default_value_t = 50)]
    max: usize,
    /// Re-evaluate each dump and check it against its own values first
    #[arg(long)]
    verify: bool,
}

fn main() -> ExitCode {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn run() -> Result<()> {
    let opts = Opts::parse();
    let l = read_dump_json(&opts.left)?;
    let r = read_dump_json(&opts.right)?;
    if opts.verify {
        l.verify()?;
        r.verify()?;
    }

    let mut diffs = Vec::<String>::new();
    if l.resolution != r.resolution {
        diffs.push(format!("resolution: {} vs {}", l.resolution, r.resolution));
    }
    if l.seed != r.seed {
        diffs.push(format!("seed: {} vs {}", l.seed, r.seed));
    }
    if l.hashes.len() != r.hashes.len() {
        diffs.push(format!("cell count: {} vs {}", l.hashes.len(), r.hashes.len()));
    }

    let mut differing = 0usize;
    for (i, (a, b)) in l.hashes.iter().zip(&r.hashes).enumerate() {
        if a == b { continue; }
        differing += 1;
        if diffs.len() < opts.max {
            // cells are labelled with the left grid's layout
            let c = cell_of(i as u32, l.resolution.max(1));
            diffs.push(format!("[{i}] (u={}, v={}): {:08x} vs {:08x}", c.u, c.v, a, b));
        }
    }

    if diffs.is_empty() && l.digest == r.digest {
        println!("OK ✅ grids are identical ({} cells, digest {})", l.hashes.len(), l.digest);
    } else {
        println!("DIFF ❌ {} differing cells (showing up to {} diffs):", differing, opts.max);
        for d in &diffs { println!("  - {}", d); }
        if l.digest != r.digest {
            println!("  - digest: {} vs {}", l.digest, r.digest);
        }
    }
    Ok(())
}
