// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::{
    ffi::OsString,
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::errors::{ReheadError, Result};
use crate::seq::fasta::write_fasta_record;

/// Where a run writes. For input `X.ext` these are `<outdir>/X.M.ext` and `<outdir>/X.M.ext.tsv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub fasta: PathBuf,
    pub mapping: PathBuf,
}

impl OutputPaths {
    pub fn derive(input: &Path, outdir: &Path) -> Result<Self> {
        let stem = input.file_stem().ok_or_else(|| {
            ReheadError::Argument(format!("input path {} has no file name", input.display()))
        })?;
        let mut name = OsString::from(stem);
        name.push(".M");
        if let Some(ext) = input.extension() {
            name.push(".");
            name.push(ext);
        }
        let fasta = outdir.join(&name);
        name.push(".tsv");
        let mapping = outdir.join(name);
        Ok(OutputPaths { fasta, mapping })
    }

    pub fn any_exists(&self) -> bool {
        self.fasta.exists() || self.mapping.exists()
    }
}

/// Appends renamed records and their mapping lines.
///
/// Both files are opened (in append mode) and closed again for every record, so whatever was
/// written before an interruption stays on disk. Existing files are extended, never truncated.
pub struct RecordSink {
    paths: OutputPaths,
    wrap: usize,
}

impl RecordSink {
    pub fn new(paths: OutputPaths, wrap: usize) -> Self {
        RecordSink { paths, wrap }
    }

    pub fn paths(&self) -> &OutputPaths {
        &self.paths
    }

    pub fn append(&self, old_id: &str, new_id: &str, sequence: &str) -> Result<()> {
        // Open both before writing either: no renamed record without its mapping line.
        let mut mapping = open_append(&self.paths.mapping)?;
        let mut fasta = BufWriter::new(open_append(&self.paths.fasta)?);

        let fasta_err = |source| ReheadError::OutputWrite {
            path: self.paths.fasta.clone(),
            source,
        };
        write_fasta_record(&mut fasta, new_id, sequence, self.wrap).map_err(fasta_err)?;
        fasta.flush().map_err(fasta_err)?;

        writeln!(mapping, "{}\t{}", old_id, new_id).map_err(|source| ReheadError::OutputWrite {
            path: self.paths.mapping.clone(),
            source,
        })
    }
}

fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| ReheadError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })
}
