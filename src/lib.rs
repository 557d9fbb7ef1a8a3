//! Projsynth core library.
//!
//! This crate generates a synthetic, internally-consistent portfolio of
//! project-management records with embedded Earned Value Management
//! metrics, for use as training/evaluation data for downstream analysis
//! agents. The binary (`src/main.rs`) is just a thin CLI around these
//! components.

pub mod ancillary;
pub mod catalog;
pub mod config;
pub mod costs;
pub mod evm;
pub mod generator;
pub mod lifecycle;
pub mod output;
pub mod report;
pub mod rng;
pub mod types;

// --- Re-exports for ergonomic external use ---------------------------------

pub use config::GenConfig;
pub use generator::Generator;
pub use output::{to_json_string, write_dataset};
pub use rng::SamplerRng;
pub use types::{Project, Status};
