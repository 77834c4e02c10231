//! Sweep configuration: default deny-lists and optional sidecar JSON merging.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Default file suffixes that mark disposable build/simulation output.
const DEFAULT_DELETE_EXTENSIONS: &[&str] = &[
    // ModelSim / Questa
    ".ini", ".wlf", ".vcd", ".qdb", ".qdf", ".qpg", ".qtl", ".mpf", ".mti", ".cr.mti", ".ucdb",
    ".vstf",
    // Quartus
    ".rpt", ".summary", ".smsg", ".pin", ".done", ".jam", ".jbc", ".ekp", ".jic", ".rbf",
    ".sopcinfo", ".pof", ".sof", ".html",
    // Scripting byproducts
    ".bak", ".pyc", ".pyo",
];

/// Suffixes that must never be removed, regardless of other matches.
/// Quartus project and settings files live here.
const DEFAULT_PROTECTED_EXTENSIONS: &[&str] = &[".qpf", ".qsf"];

/// Directory names whose entire subtree is disposable.
const DEFAULT_DELETE_FOLDERS: &[&str] = &[
    "db",
    "incremental_db",
    "output_files",
    "simulation",
    "greybox_tmp",
    "hc_output",
    "work",
    "cov",
    "__pycache__",
];

/// Directory names that must never be scanned or touched.
const DEFAULT_SKIP_FOLDERS: &[&str] = &[".git", ".venv", ".mypy_cache"];

/// Name of the optional sidecar config file, looked up next to the executable.
pub const SIDECAR_FILE_NAME: &str = "sweep_config.json";

/// The four deny-lists driving classification. All entries are stored
/// lowercased; every comparison is case-insensitive.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub delete_extensions: HashSet<String>,
    pub protected_extensions: HashSet<String>,
    pub delete_folders: HashSet<String>,
    pub skip_folders: HashSet<String>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        fn to_set(entries: &[&str]) -> HashSet<String> {
            entries.iter().map(|e| e.to_lowercase()).collect()
        }

        SweepConfig {
            delete_extensions: to_set(DEFAULT_DELETE_EXTENSIONS),
            protected_extensions: to_set(DEFAULT_PROTECTED_EXTENSIONS),
            delete_folders: to_set(DEFAULT_DELETE_FOLDERS),
            skip_folders: to_set(DEFAULT_SKIP_FOLDERS),
        }
    }
}

/// Structure to deserialize the sidecar JSON config.
/// Every key is optional; listed entries are unioned into the defaults.
#[derive(Debug, Default, Deserialize)]
pub struct SidecarConfig {
    #[serde(default)]
    extensions_to_delete: Vec<String>,
    #[serde(default)]
    protected_extensions: Vec<String>,
    #[serde(default)]
    folders_to_delete: Vec<String>,
    #[serde(default)]
    skip_dirs: Vec<String>,
}

impl SweepConfig {
    /// Check whether a file name marks the file for deletion.
    /// Protected suffixes take precedence over delete suffixes.
    pub fn file_matches(&self, file_name: &str) -> bool {
        let name = file_name.to_lowercase();

        if self
            .protected_extensions
            .iter()
            .any(|ext| name.ends_with(ext.as_str()))
        {
            return false;
        }

        self.delete_extensions
            .iter()
            .any(|ext| name.ends_with(ext.as_str()))
    }

    /// Check whether a directory name marks its whole subtree for deletion.
    pub fn dir_matches(&self, dir_name: &str) -> bool {
        self.delete_folders.contains(&dir_name.to_lowercase())
    }

    /// Check whether a directory name must never be descended into.
    pub fn dir_skipped(&self, dir_name: &str) -> bool {
        self.skip_folders.contains(&dir_name.to_lowercase())
    }

    /// Union sidecar entries into the built-in sets.
    pub fn merge(&mut self, sidecar: SidecarConfig) {
        let lowered = |entries: Vec<String>| entries.into_iter().map(|e| e.to_lowercase());

        self.delete_extensions
            .extend(lowered(sidecar.extensions_to_delete));
        self.protected_extensions
            .extend(lowered(sidecar.protected_extensions));
        self.delete_folders.extend(lowered(sidecar.folders_to_delete));
        self.skip_folders.extend(lowered(sidecar.skip_dirs));
    }

    /// Build the effective configuration: defaults, plus an optional sidecar
    /// JSON file. A missing file is silently ignored; a malformed one warns
    /// and leaves the defaults untouched.
    pub fn load(sidecar_path: Option<&Path>) -> Self {
        let mut config = SweepConfig::default();

        let path = match sidecar_path {
            Some(p) => {
                if !p.exists() {
                    eprintln!(
                        "Warning: config file {} not found, using built-in defaults.",
                        p.display()
                    );
                    return config;
                }
                p.to_path_buf()
            }
            // The implicit sidecar next to the executable is optional;
            // its absence is not worth a warning
            None => match default_sidecar_path().filter(|p| p.exists()) {
                Some(p) => p,
                None => return config,
            },
        };

        match read_sidecar(&path) {
            Ok(sidecar) => {
                println!("Using extra configuration from: {}", path.display());
                config.merge(sidecar);
            }
            Err(err) => {
                eprintln!("Warning: could not read {}: {:#}", path.display(), err);
                eprintln!("Falling back to built-in defaults.");
            }
        }

        config
    }
}

/// Parse sidecar JSON content.
pub fn parse_sidecar(text: &str) -> Result<SidecarConfig> {
    serde_json::from_str(text).context("Failed to parse sidecar config JSON")
}

fn read_sidecar(path: &Path) -> Result<SidecarConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_sidecar(&text)
}

/// Default sidecar location: next to the running executable.
fn default_sidecar_path() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.join(SIDECAR_FILE_NAME))
}
