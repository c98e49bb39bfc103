use thiserror::Error;

#[derive(Debug, Error)]
pub enum CategorizeError {
    #[error("No candidate categories supplied")]
    NoCandidates,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse keyword rules: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CategorizeError>;
