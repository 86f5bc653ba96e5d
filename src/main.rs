mod config;
mod harness;
mod preview;
mod report;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use config::{HarnessConfig, load_config_from_path};
use harness::{Harness, generate_seeds};
use preview::{CubeExtruder, NoPreview, PngRenderer};

#[derive(Parser, Debug)]
#[command(name = "relief", about = "Compare noise algorithms against a chunk height limit")]
struct Cli {
    /// Harness config (TOML). Built-in defaults are used when omitted.
    #[arg(long, short)]
    config: Option<PathBuf>,
    /// Override the number of seeds per test.
    #[arg(long)]
    seeds: Option<usize>,
    /// Seed the seed generator for a reproducible run.
    #[arg(long)]
    rng_seed: Option<u64>,
    /// Directory for preview PNGs.
    #[arg(long, default_value = "previews")]
    out: PathBuf,
    /// Write the run report as TOML.
    #[arg(long)]
    report: Option<PathBuf>,
    /// Skip rendering and extrusion.
    #[arg(long)]
    no_preview: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => load_config_from_path(path)?,
        None => HarnessConfig::default(),
    };
    if let Some(n) = cli.seeds {
        cfg.seeds.count = n;
    }
    cfg.validate()?;

    let mut rng = match cli.rng_seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let seeds = generate_seeds(&mut rng, &cfg.seeds);
    log::info!(target: "harness", "Seeds were generated!");

    let report = if cli.no_preview {
        Harness::new(&cfg, seeds, NoPreview, NoPreview)?.run(&cfg.tests)?
    } else {
        let renderer = PngRenderer::new(&cli.out);
        let extruder = CubeExtruder::new(cfg.world.width, cfg.world.height);
        let mut harness = Harness::new(&cfg, seeds, renderer, extruder)?;
        let report = harness.run(&cfg.tests)?;
        log::info!(
            target: "harness",
            "{} preview image(s) in {}, {} cube world(s) extruded",
            harness.renderer().written().len(),
            cli.out.display(),
            harness.extruder().layout().count()
        );
        report
    };

    for t in &report.tests {
        log::info!(
            target: "harness",
            "{}: {}/{} seeds within limit {}",
            t.name,
            t.passed(),
            t.results.len(),
            cfg.world.chunk_height_limit
        );
    }

    if let Some(path) = &cli.report {
        let text = report.to_toml().context("serializing report")?;
        fs::write(path, text).with_context(|| format!("writing report {}", path.display()))?;
        log::info!(target: "harness", "Report written to {}", path.display());
    }
    Ok(())
}
