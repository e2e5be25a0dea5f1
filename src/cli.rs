// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::SceneConfig;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "dolly-zoom")]
#[command(about = "A car driving through a night city under a dolly-zoom camera", long_about = None)]
pub struct Cli {
    /// Car mesh to load (.obj, .gltf or .glb)
    #[arg(long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Seed for building heights and lit windows
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON scene configuration; unspecified fields keep their defaults
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Builds the scene configuration, flags overriding the config file
    pub fn resolve(&self) -> Result<SceneConfig> {
        let mut config = match &self.config {
            Some(path) => SceneConfig::from_json_file(path)?,
            None => SceneConfig::default(),
        };

        if let Some(model) = &self.model {
            config.model_path = model.clone();
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }

        Ok(config)
    }
}
