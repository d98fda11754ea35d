// Wed Jan 21 2026 - Alex

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use interop_layout_verifier::{
    bindings::binding_catalog,
    catalog::StructCatalog,
    output::JsonSerializer,
    utils::logging::{self, LoggingUtils},
    verify::{StructVerifier, TypeOutcome, VerificationReport},
};
use parking_lot::Mutex;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Struct layout verifier for the native interop binding surface", long_about = None)]
struct Args {
    #[arg(short, long)]
    json: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    threads: Option<usize>,

    #[arg(long)]
    no_color: bool,

    #[arg(long)]
    no_progress: bool,

    #[arg(long)]
    list: bool,

    #[arg(long)]
    sequential: bool,
}

fn main() {
    let args = Args::parse();

    if args.no_color || !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    if std::env::var_os("RUST_LOG").is_some() {
        logging::init_from_env();
    } else {
        let verbosity = if args.verbose { 2 } else { 1 };
        LoggingUtils::init_logger(LoggingUtils::level_from_verbosity(verbosity));
    }

    let threads = args.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new().num_threads(threads).build_global().ok();

    println!("{}", "Interop Struct Layout Verifier".cyan().bold());
    println!("{}", "=".repeat(50).cyan());
    println!();

    let catalog = binding_catalog();

    if args.list {
        println!("{} {} struct types on the binding surface:", "[*]".blue(), catalog.distinct_count());
        for entry in catalog.iter() {
            println!("    {} ({} fields)", entry.type_name(), entry.decl().fields().len());
        }
        return;
    }

    println!(
        "{} Verifying {} struct types on {} thread(s)",
        "[*]".blue(),
        catalog.distinct_count(),
        if args.sequential { 1 } else { threads }
    );

    let start_time = Instant::now();
    let report = run_sweep(&catalog, args.sequential, !args.no_progress);
    let elapsed = start_time.elapsed();

    println!();
    for outcome in report.outcomes() {
        match outcome {
            TypeOutcome::Verified { report } if report.matches() => {
                println!("  {} {}", "[OK]".green(), report.struct_name());
            }
            TypeOutcome::Verified { report } => {
                println!("  {} {}", "[MISMATCH]".red().bold(), report.struct_name());
                for m in report.offset_mismatches() {
                    println!(
                        "      field {}: expected offset {}, actual {}",
                        m.field, m.expected, m.actual
                    );
                }
                if let Some(m) = report.size_mismatch() {
                    println!("      size: expected {}, actual {}", m.expected, m.actual);
                }
            }
            TypeOutcome::Aborted { type_name, reason } => {
                println!("  {} {}: {}", "[ABORTED]".yellow().bold(), type_name, reason);
            }
        }
    }

    let summary = report.summary();
    println!();
    println!(
        "{} {} matched, {} mismatched, {} aborted in {:.2}ms",
        "[*]".blue(),
        summary.matched,
        summary.mismatched,
        summary.aborted,
        elapsed.as_secs_f64() * 1000.0
    );

    if let Some(path) = &args.json {
        match export_json(&report, path) {
            Ok(()) => println!("{} Report written to {}", "[*]".blue(), path.display()),
            Err(e) => {
                eprintln!("{} {:#}", "[ERROR]".red().bold(), e);
                std::process::exit(1);
            }
        }
    }

    if report.is_pass() {
        println!("{}", "All struct layouts match the host ABI".green().bold());
    } else {
        println!("{}", "Layout verification failed".red().bold());
        std::process::exit(1);
    }
}

fn run_sweep(catalog: &StructCatalog, sequential: bool, show_progress: bool) -> VerificationReport {
    let verifier = StructVerifier::new();

    if sequential {
        return verifier.run(catalog);
    }

    let entries: Vec<_> = catalog.iter().collect();
    let bar = if show_progress {
        ProgressBar::new(entries.len() as u64).with_style(
            ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("=>-"),
        )
    } else {
        ProgressBar::hidden()
    };

    let outcomes = Mutex::new(Vec::with_capacity(entries.len()));
    entries.par_iter().for_each(|entry| {
        bar.set_message(entry.type_name().to_string());
        let outcome = verifier.verify_entry(entry);
        outcomes.lock().push(outcome);
        bar.inc(1);
    });
    bar.finish_and_clear();

    let mut collected = outcomes.into_inner();
    collected.sort_by(|a, b| a.type_name().cmp(b.type_name()));
    VerificationReport::from_outcomes(collected)
}

fn export_json(report: &VerificationReport, path: &Path) -> anyhow::Result<()> {
    JsonSerializer::new()
        .serialize_to_file(report, path)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    Ok(())
}
