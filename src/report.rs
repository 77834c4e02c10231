//! Human-readable candidate listing.

use crate::scanner::Candidate;

use colored::Colorize;
use humansize::{format_size, BINARY};

/// Print the candidate list and a total line. No filesystem side effects.
pub fn print_candidates(candidates: &[Candidate]) {
    for candidate in candidates {
        let tag = if candidate.is_dir() {
            "[DIR] ".yellow()
        } else {
            "[FILE]".cyan()
        };
        println!(
            "{} {} ({})",
            tag,
            candidate.path.display(),
            format_size(candidate.size, BINARY)
        );
    }

    let total_bytes: u64 = candidates.iter().map(|c| c.size).sum();
    println!(
        "{}",
        format!(
            "Total: {} items ({})",
            candidates.len(),
            format_size(total_bytes, BINARY)
        )
        .bold()
    );
}
