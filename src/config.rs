// src/config.rs
//
// Run configuration for the portfolio generator.
//
// Defaults match the reference dataset (1000 projects, seed 42, sibling
// "dataset" directory). The reference instant `now` is part of the config
// so tests and replays can pin it instead of depending on the wall clock.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Number of projects to generate (must be >= 1).
    pub num_projects: usize,
    /// Directory receiving projetos.json, projetos.csv and status_files/.
    pub output_dir: PathBuf,
    /// Seed for the shared randomness context.
    pub seed: u64,
    /// Reference instant all date arithmetic is anchored to.
    pub now: NaiveDate,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            num_projects: 1000,
            output_dir: PathBuf::from("dataset"),
            seed: 42,
            now: chrono::Local::now().date_naive(),
        }
    }
}

impl GenConfig {
    /// Fail fast before any generation starts.
    pub fn validate(&self) -> Result<()> {
        if self.num_projects == 0 {
            bail!("num_projects must be >= 1");
        }
        Ok(())
    }

    /// Build a config from defaults, then apply environment overrides.
    ///
    /// Recognized variables:
    ///   - PROJSYNTH_NUM_PROJECTS (usize, >= 1)
    ///   - PROJSYNTH_OUTPUT_DIR   (path)
    ///   - PROJSYNTH_SEED         (u64)
    ///
    /// Any variable that fails to parse is ignored with a warning.
    pub fn from_env_or_default() -> Self {
        use std::env;

        let mut cfg = GenConfig::default();

        if let Ok(raw) = env::var("PROJSYNTH_NUM_PROJECTS") {
            match raw.parse::<usize>() {
                Ok(v) if v >= 1 => cfg.num_projects = v,
                _ => eprintln!(
                    "[config] WARN: could not parse PROJSYNTH_NUM_PROJECTS = {:?} as usize >= 1; using default {}",
                    raw, cfg.num_projects
                ),
            }
        }

        if let Ok(raw) = env::var("PROJSYNTH_OUTPUT_DIR") {
            if raw.is_empty() {
                eprintln!("[config] WARN: PROJSYNTH_OUTPUT_DIR is empty; using default");
            } else {
                cfg.output_dir = PathBuf::from(raw);
            }
        }

        if let Ok(raw) = env::var("PROJSYNTH_SEED") {
            match raw.parse::<u64>() {
                Ok(v) => cfg.seed = v,
                Err(_) => eprintln!(
                    "[config] WARN: could not parse PROJSYNTH_SEED = {:?} as u64; using default {}",
                    raw, cfg.seed
                ),
            }
        }

        cfg
    }
}
