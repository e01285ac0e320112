// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{
    fs::{self, File},
    io,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::errors::{ReheadError, Result};

pub const DEFAULT_HEADER_LENGTH: i64 = 18;
pub const MAX_HEADER_LENGTH: i64 = 4096;
/// Line width of the output FastA. Same as Biopython's FastA writer.
pub const DEFAULT_LINE_WIDTH: usize = 60;
pub const CONFIG_FILE_NAME: &str = ".reheadconfig";

/// Length of generated headers; always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLength(usize);

impl HeaderLength {
    pub fn new(length: i64) -> Result<Self> {
        if length <= 0 {
            return Err(ReheadError::InvalidConfiguration(format!(
                "header length must be a positive integer, got {}",
                length
            )));
        }
        if length > MAX_HEADER_LENGTH {
            return Err(ReheadError::InvalidConfiguration(format!(
                "header length must be at most {}, got {}",
                MAX_HEADER_LENGTH, length
            )));
        }
        Ok(HeaderLength(length as usize))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for HeaderLength {
    fn default() -> Self {
        HeaderLength(DEFAULT_HEADER_LENGTH as usize)
    }
}

// Optional defaults, read from a JSON file, e.g. {"length": 12, "wrap": 80}.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub length: Option<i64>,
    pub wrap: Option<usize>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| ReheadError::Config {
            path: path.to_path_buf(),
            msg: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| ReheadError::Config {
            path: path.to_path_buf(),
            msg: e.to_string(),
        })
    }
}

/// Looks for the defaults file in $HOME, then in the current directory.
pub fn find_rehead_config() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        let path = PathBuf::from(home).join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let path = cwd.join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    None
}

/// Settings for one run. Built once, never changed afterwards.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub outdir: PathBuf,
    pub length: HeaderLength,
    /// 0: no wrapping
    pub wrap: usize,
    pub seed: Option<u64>,
}

impl RunConfig {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(input: P, outdir: Q) -> Self {
        RunConfig {
            input: input.into(),
            outdir: outdir.into(),
            length: HeaderLength::default(),
            wrap: DEFAULT_LINE_WIDTH,
            seed: None,
        }
    }

    /// Command-line values win over the defaults file, which wins over built-in defaults.
    pub fn resolve(
        input: PathBuf,
        outdir: PathBuf,
        length: Option<i64>,
        wrap: Option<usize>,
        seed: Option<u64>,
        file: &FileConfig,
    ) -> Result<Self> {
        let length = HeaderLength::new(length.or(file.length).unwrap_or(DEFAULT_HEADER_LENGTH))?;
        let wrap = wrap.or(file.wrap).unwrap_or(DEFAULT_LINE_WIDTH);
        Ok(RunConfig {
            input,
            outdir,
            length,
            wrap,
            seed,
        })
    }

    /// Checks that the input can be opened and that the output directory exists. The output
    /// directory is never created.
    pub fn validate(&self) -> Result<()> {
        let input_err = |source| ReheadError::InputNotFound {
            path: self.input.clone(),
            source,
        };
        let meta = fs::metadata(&self.input).map_err(input_err)?;
        if !meta.is_file() {
            return Err(input_err(io::Error::other("not a regular file")));
        }
        File::open(&self.input).map_err(input_err)?;

        let outdir_err = |source| ReheadError::OutputWrite {
            path: self.outdir.clone(),
            source,
        };
        let meta = fs::metadata(&self.outdir).map_err(outdir_err)?;
        if !meta.is_dir() {
            return Err(outdir_err(io::Error::other("not a directory")));
        }
        Ok(())
    }
}
