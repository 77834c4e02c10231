//! Tree walk and candidate classification.

use crate::config::SweepConfig;

use anyhow::{bail, Result};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

/// Kind of filesystem entry a candidate refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    File,
    Directory,
}

/// A single entry marked for removal during the scan.
#[derive(Debug)]
pub struct Candidate {
    pub kind: CandidateKind,
    pub path: PathBuf,
    pub size: u64,
}

impl Candidate {
    pub fn is_dir(&self) -> bool {
        self.kind == CandidateKind::Directory
    }
}

/// Calculate total size of a directory subtree.
/// Uses symlink_metadata throughout so symlinks are neither followed nor
/// counted.
fn calculate_dir_size(path: &Path) -> u64 {
    let mut total = 0u64;

    if let Ok(entries) = fs::read_dir(path) {
        for entry in entries.flatten() {
            let entry_path = entry.path();

            if let Ok(metadata) = fs::symlink_metadata(&entry_path) {
                if metadata.is_file() {
                    total += metadata.len();
                } else if metadata.is_dir() {
                    total += calculate_dir_size(&entry_path);
                }
            }
        }
    }

    total
}

/// Walk `root` top-down and collect every entry matching the configured
/// deny-lists.
///
/// A directory whose name is in the delete-folder set becomes exactly one
/// directory candidate; nothing beneath it is enumerated separately. A
/// directory whose name is in the skip-folder set is never descended into and
/// never a candidate itself. Files match when their lowercased name ends with
/// a delete-extension and no protected-extension.
pub fn scan(root: &Path, config: &SweepConfig) -> Result<Vec<Candidate>> {
    if !root.exists() {
        bail!("Root directory {} does not exist", root.display());
    }
    if !root.is_dir() {
        bail!("Root path {} is not a directory", root.display());
    }

    let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());

    let mut candidates = Vec::new();
    let mut pruned_dirs: Vec<PathBuf> = Vec::new();

    let skip_config = config.clone();
    let walker = WalkBuilder::new(&root)
        .hidden(false)
        // Gitignore handling is irrelevant here: the deny-lists are the
        // single source of truth for what gets removed.
        .git_ignore(false)
        .ignore(false)
        .git_global(false)
        .git_exclude(false)
        .filter_entry(move |entry| {
            // Never traverse skip-folders
            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                if let Some(name) = entry.path().file_name().and_then(|n| n.to_str()) {
                    if skip_config.dir_skipped(name) {
                        return false;
                    }
                }
            }
            true
        })
        .build();

    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("Warning: failed to access entry: {}", err);
                continue;
            }
        };

        let path = entry.path();

        // The root itself is never a candidate
        if path == root.as_path() {
            continue;
        }

        // Skip anything inside an already-matched directory
        if pruned_dirs.iter().any(|dir| path.starts_with(dir)) {
            continue;
        }

        let metadata = match fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(err) => {
                eprintln!(
                    "Warning: could not get metadata for {}: {}",
                    path.display(),
                    err
                );
                continue;
            }
        };

        // Symlinks are never candidates; removing them could reach outside
        // the tree being cleaned
        if metadata.is_symlink() {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        if metadata.is_dir() {
            if config.dir_matches(name) {
                candidates.push(Candidate {
                    kind: CandidateKind::Directory,
                    path: path.to_path_buf(),
                    size: calculate_dir_size(path),
                });
                pruned_dirs.push(path.to_path_buf());
            }
        } else if config.file_matches(name) {
            candidates.push(Candidate {
                kind: CandidateKind::File,
                path: path.to_path_buf(),
                size: metadata.len(),
            });
        }
    }

    Ok(candidates)
}
