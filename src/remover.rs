//! Candidate removal with per-item error reporting.

use crate::scanner::{Candidate, CandidateKind};

use std::fs;
use std::io;
use std::path::PathBuf;

/// A removal that did not succeed. The batch continues past it.
#[derive(Debug)]
pub struct RemovalFailure {
    pub path: PathBuf,
    pub source: io::Error,
}

/// Outcome of a removal batch.
#[derive(Debug, Default)]
pub struct RemovalSummary {
    pub removed: usize,
    pub reclaimed_bytes: u64,
    pub failures: Vec<RemovalFailure>,
}

/// Remove every candidate, files with `remove_file` and directories with
/// `remove_dir_all`. Failures are reported and recorded but never abort the
/// remaining items.
pub fn remove_all(candidates: &[Candidate], verbose: bool) -> RemovalSummary {
    let mut summary = RemovalSummary::default();

    for candidate in candidates {
        let result = match candidate.kind {
            CandidateKind::File => fs::remove_file(&candidate.path),
            CandidateKind::Directory => fs::remove_dir_all(&candidate.path),
        };

        match result {
            Ok(()) => {
                if verbose {
                    println!("Removed: {}", candidate.path.display());
                }
                summary.removed += 1;
                summary.reclaimed_bytes += candidate.size;
            }
            Err(err) => {
                eprintln!(
                    "Error removing {}: {}. Skipping.",
                    candidate.path.display(),
                    err
                );
                summary.failures.push(RemovalFailure {
                    path: candidate.path.clone(),
                    source: err,
                });
            }
        }
    }

    summary
}
