// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::{fs, path::Path};

use rand::{rngs::SmallRng, SeedableRng};

use fasta_rehead::{
    config::RunConfig,
    seq::{fasta::FastaReader, record::SeqRecord},
};

#[allow(dead_code)]
pub fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Copies a fixture from data/ into `dir` and returns a config that writes into `dir/out`.
#[allow(dead_code)]
pub fn setup(dir: &Path, fixture: &str) -> RunConfig {
    let input = dir.join(fixture);
    fs::copy(Path::new("data").join(fixture), &input).expect("copy fixture");
    let outdir = dir.join("out");
    fs::create_dir(&outdir).expect("create outdir");
    RunConfig::new(input, outdir)
}

#[allow(dead_code)]
pub fn read_records<P: AsRef<Path>>(path: P) -> Vec<SeqRecord> {
    FastaReader::from_path(path)
        .expect("open")
        .collect::<Result<_, _>>()
        .expect("parse")
}

#[allow(dead_code)]
pub fn read_mapping<P: AsRef<Path>>(path: P) -> Vec<(String, String)> {
    fs::read_to_string(path)
        .expect("read mapping")
        .lines()
        .map(|l| {
            let (old, new) = l.split_once('\t').expect("two columns");
            (old.to_string(), new.to_string())
        })
        .collect()
}

/// Replaces every header line with ">ID", so that output can be compared across seeds.
#[allow(dead_code)]
pub fn mask_headers(text: &str) -> String {
    text.lines()
        .map(|l| if l.starts_with('>') { ">ID" } else { l })
        .collect::<Vec<_>>()
        .join("\n")
}
