use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use humansize::{format_size, BINARY};
use std::path::PathBuf;

use edasweep::{
    print_candidates, remove_all, scan, AssumeYes, Confirmer, ConsoleConfirmer, SweepConfig,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Find and remove Quartus/ModelSim build and simulation artifacts",
    long_about = None
)]
struct Args {
    /// Directory to sweep (defaults to current directory)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// List what would be removed, but don't remove anything
    #[arg(long, short = 'n')]
    dry_run: bool,

    /// Skip the confirmation prompt before removing
    #[arg(long, short)]
    yes: bool,

    /// Show each file/directory as it is removed
    #[arg(long, short)]
    verbose: bool,

    /// Extra configuration file (defaults to sweep_config.json next to the executable)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = SweepConfig::load(args.config.as_deref());

    println!("Sweeping: {}\n", args.root.display());

    let candidates = scan(&args.root, &config)
        .with_context(|| format!("Failed to scan {}", args.root.display()))?;

    if candidates.is_empty() {
        println!("Nothing to sweep.");
        return Ok(());
    }

    print_candidates(&candidates);

    if args.dry_run {
        println!("\nDry run: nothing was removed.");
        return Ok(());
    }

    let confirmer: Box<dyn Confirmer> = if args.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(ConsoleConfirmer)
    };

    if !confirmer.confirm("\nPermanently remove ALL of the above?") {
        println!("Cancelled. Nothing was removed.");
        return Ok(());
    }

    let summary = remove_all(&candidates, args.verbose);

    println!(
        "\n{}",
        format!(
            "Swept {} items ({} reclaimed)",
            summary.removed,
            format_size(summary.reclaimed_bytes, BINARY)
        )
        .green()
        .bold()
    );

    // Per-item failures were already reported; they don't fail the run
    if !summary.failures.is_empty() {
        eprintln!("{} items could not be removed.", summary.failures.len());
    }

    Ok(())
}
