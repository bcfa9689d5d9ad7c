use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteconfError {
    #[error("Missing required parameters: {}", .0.join(", "))]
    MissingParameters(Vec<&'static str>),

    #[error("Invalid arguments: {0}")]
    Usage(String),

    #[error("Template file not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("Invalid GitHub repo format. Expected \"owner/repo\", got: {0}")]
    InvalidRepo(String),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not generate config: {0}")]
    Render(#[from] minijinja::Error),

    #[error("Could not generate config: failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not determine site root: {0}")]
    Root(String),
}

pub type Result<T> = std::result::Result<T, SiteconfError>;
