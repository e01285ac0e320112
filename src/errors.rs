// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{io, path::PathBuf};

pub type Result<T> = std::result::Result<T, ReheadError>;

/// Everything that can stop a run. None of these are retried: the run reports and exits.
#[derive(thiserror::Error, Debug)]
pub enum ReheadError {
    /// Bad or missing command-line option
    #[error("Argument error: {0}")]
    Argument(String),

    #[error("Cannot read input file {}: {source}", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input is not FastA. `line` is 1-based.
    #[error("Format error at line {line}: {msg}")]
    MalformedInput { line: usize, msg: String },

    #[error("Cannot write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Error reading config file {}: {msg}", path.display())]
    Config { path: PathBuf, msg: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
