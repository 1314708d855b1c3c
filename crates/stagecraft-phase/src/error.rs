//! Phase plugin error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by phase deployers and their collaborator ports
#[derive(Error, Debug)]
pub enum PhaseError {
    #[error("Invocation role could not be created: {0}")]
    RoleUnavailable(String),

    #[error("Could not load template {}", .0.display())]
    TemplateMissing(PathBuf),

    #[error("Stack {stack} has no output named {key}")]
    MissingOutput { key: String, stack: String },

    #[error("Missing secret: {0}")]
    MissingSecret(String),

    #[error("Stack registry error: {0}")]
    Registry(String),

    #[error("Artifact upload failed: {0}")]
    Upload(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PhaseError>;
