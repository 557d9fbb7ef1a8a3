// src/main.rs
//
// Thin CLI around the projsynth library.
// All of the real logic lives in the lib crate (generator, serializers).
//
// Precedence for each setting: CLI flag > PROJSYNTH_* env var > default.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use projsynth::{write_dataset, GenConfig, Generator};

/// Synthetic project-portfolio dataset generator.
#[derive(Debug, Parser)]
#[command(name = "projsynth", version)]
struct Args {
    /// Number of projects to generate (default 1000).
    #[arg(long)]
    projects: Option<usize>,

    /// Output directory for projetos.json, projetos.csv and status_files/.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Deterministic seed for the shared randomness context.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut cfg = GenConfig::from_env_or_default();
    if let Some(n) = args.projects {
        cfg.num_projects = n;
    }
    if let Some(out) = args.out {
        cfg.output_dir = out;
    }
    if let Some(seed) = args.seed {
        cfg.seed = seed;
    }

    println!(
        "projsynth v{} | projetos={} seed={} out={}",
        env!("CARGO_PKG_VERSION"),
        cfg.num_projects,
        cfg.seed,
        cfg.output_dir.display()
    );
    println!("Gerando dataset com {} projetos...", cfg.num_projects);

    let projetos = Generator::new(cfg.clone()).run()?;
    write_dataset(&projetos, &cfg.output_dir)?;

    println!(
        "Dataset gerado com sucesso! Arquivos salvos em {}",
        cfg.output_dir.display()
    );

    Ok(())
}
