// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Error type shared by the catalog, generator and output layers.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptemplateError {
    /// Bad command-line input: missing class, bad output path, bad arg map
    #[error("{0}")]
    Usage(String),

    #[error("invalid operator category: {0}")]
    InvalidCategory(String),

    #[error("unknown operator: {0}")]
    UnknownToken(String),

    #[error("unable to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl OptemplateError {
    pub fn usage(msg: impl Into<String>) -> Self {
        OptemplateError::Usage(msg.into())
    }

    /// True for errors the user caused and can fix by changing flags
    pub fn is_usage(&self) -> bool {
        matches!(self, OptemplateError::Usage(_) | OptemplateError::InvalidCategory(_))
    }
}

pub type Result<T> = std::result::Result<T, OptemplateError>;
