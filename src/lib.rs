//! EdaSweep - EDA Artifact Sweeper
//!
//! EdaSweep removes build and simulation artifacts left behind by Quartus and
//! ModelSim/Questa runs (plus general scripting byproducts) from a project
//! tree. Classification is driven by four case-insensitive deny-lists:
//! file extensions to delete, protected extensions that always survive,
//! directory names whose whole subtree is disposable, and directory names
//! that are never scanned at all. Built-in defaults can be extended with a
//! sidecar `sweep_config.json` placed next to the executable.
//!
//! The pipeline is scan → report → confirm → remove; dry-run stops after the
//! report, and per-item removal failures never abort the batch.

pub mod config;
pub mod confirm;
pub mod remover;
pub mod report;
pub mod scanner;

// Re-export commonly used items
pub use config::{parse_sidecar, SidecarConfig, SweepConfig, SIDECAR_FILE_NAME};
pub use confirm::{AssumeYes, Confirmer, ConsoleConfirmer};
pub use remover::{remove_all, RemovalFailure, RemovalSummary};
pub use report::print_candidates;
pub use scanner::{scan, Candidate, CandidateKind};
