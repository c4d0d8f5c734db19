use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("failed to read model artifact {path}: {source}")]
    ArtifactRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("model artifact parse error: {0}")]
    ArtifactParse(#[from] serde_json::Error),

    #[error("unsupported model artifact version {found} (this build reads version {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("model artifact feature mismatch: {0}")]
    FeatureMismatch(String),

    #[error("model artifact has invalid parameters: {0}")]
    InvalidArtifact(String),

    #[error("classifier produced an invalid probability: {0}")]
    InvalidOutput(f64),

    #[error("inference failed: {0}")]
    Inference(String),
}
