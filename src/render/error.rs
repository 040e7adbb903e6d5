use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Not visible, cannot generate ICS-file")]
    NotVisible,

    #[error("Failed to serialize report: {0}")]
    Serialize(String),

    #[error("Failed to format report")]
    Format(#[from] fmt::Error),
}
