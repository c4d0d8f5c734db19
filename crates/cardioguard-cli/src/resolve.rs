use std::path::PathBuf;

use crate::config::{CardioguardConfig, OutputFormat};

/// Where the probability for an assessment comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelSource {
    Manual(f64),
    Artifact(PathBuf),
}

/// Command-line choices that can fall back to the config file.
#[derive(Debug, Clone, Default)]
pub struct AssessOptions {
    pub probability: Option<f64>,
    pub model: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub template: Option<PathBuf>,
}

impl AssessOptions {
    /// Flags win over the config. A manual probability needs no config.
    pub fn model_source(&self, config: Option<&CardioguardConfig>) -> eyre::Result<ModelSource> {
        match (self.probability, &self.model) {
            (Some(_), Some(_)) => Err(eyre::eyre!(
                "--probability and --model cannot be used together"
            )),
            (Some(p), None) => Ok(ModelSource::Manual(p)),
            (None, Some(path)) => Ok(ModelSource::Artifact(path.clone())),
            (None, None) => config
                .map(|c| ModelSource::Artifact(c.model_path.clone()))
                .ok_or_else(|| {
                    eyre::eyre!(
                        "no model configured; run `cardioguard init --model PATH` or pass --model"
                    )
                }),
        }
    }

    pub fn format(&self, config: Option<&CardioguardConfig>) -> OutputFormat {
        self.format
            .or(config.map(|c| c.default_format))
            .unwrap_or_default()
    }

    pub fn template(&self, config: Option<&CardioguardConfig>) -> Option<PathBuf> {
        self.template
            .clone()
            .or_else(|| config.and_then(|c| c.template_path.clone()))
    }
}
