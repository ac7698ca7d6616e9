use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use edupair_core::models::Category;
use edupair_core::pipeline::Pipeline;
use edupair_core::report::Report;
use std::path::PathBuf;

use cli::config::{self, AppConfig};
use cli::organize::{self, ApplyOptions, ConflictPolicy};
use cli::scanner;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Plan { source, json } => run_plan(cfg, source, json),
        Commands::Apply {
            source,
            output,
            execute,
            move_files,
            conflict,
            json,
        } => run_apply(cfg, source, output, execute, move_files, &conflict, json),
    }
}

#[derive(Parser)]
#[command(name = "edupair")]
#[command(about = "Pairs question papers with their solutions and sorts standalone study material", long_about = None)]
struct Cli {
    /// Path to config TOML
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a directory and print the pairing/classification report
    Plan {
        /// Source directory (overrides config scan.include)
        source: Option<PathBuf>,
        /// Output JSON instead of a text summary
        #[arg(long)]
        json: bool,
    },
    /// Organize files into the output layout
    Apply {
        /// Source directory (overrides config scan.include)
        source: Option<PathBuf>,
        /// Output directory (overrides config output.dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Actually place files; without this flag apply is a dry run
        #[arg(long, default_value_t = false)]
        execute: bool,
        /// Move files instead of copying them
        #[arg(long = "move", default_value_t = false)]
        move_files: bool,
        /// Conflict policy: rename|skip|overwrite
        #[arg(long, default_value = "rename")]
        conflict: String,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
}

fn scan_and_run(cfg: &AppConfig, source: Option<PathBuf>) -> Result<(Vec<PathBuf>, Report)> {
    let roots: Vec<PathBuf> = match source {
        Some(dir) => vec![dir],
        None => cfg.scan.include.iter().map(PathBuf::from).collect(),
    };
    if roots.is_empty() {
        bail!("no source directory: pass one as an argument or set scan.include in the config");
    }

    let files = scanner::list_documents(&roots, &cfg.scan.exclude, &cfg.scan.extensions)?;
    let names: Vec<String> = files
        .iter()
        .map(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
        .collect();

    let pipeline = Pipeline::new(cfg.matching.clone())?;
    let report = pipeline.run(&names);
    Ok((files, report))
}

fn run_plan(cfg: AppConfig, source: Option<PathBuf>, json: bool) -> Result<()> {
    let (_, report) = scan_and_run(&cfg, source)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report.entries)?);
        return Ok(());
    }

    println!("documents: {}", report.entries.len());
    println!("question/solution pairs: {}", report.pairs.len());
    for (n, pair) in report.pairs.iter().enumerate() {
        println!(
            "  pair_{}: {} <-> {} (score {:.2})",
            n + 1,
            pair.question.raw_name,
            pair.solution.raw_name,
            pair.score
        );
    }
    let counts = [
        ("standalone questions", Category::StandaloneQuestions),
        ("standalone solutions", Category::StandaloneSolutions),
        ("notes", Category::StandaloneNotes),
        ("notes with questions", Category::NotesWithQuestions),
        ("notes with solutions", Category::NotesWithSolutions),
        ("combined question+solution", Category::CombinedQuestionSolution),
    ];
    for (label, category) in counts {
        let count = report.category_count(category);
        if count > 0 {
            println!("{}: {}", label, count);
        }
    }
    Ok(())
}

fn run_apply(
    cfg: AppConfig,
    source: Option<PathBuf>,
    output: Option<PathBuf>,
    execute: bool,
    move_files: bool,
    conflict: &str,
    json: bool,
) -> Result<()> {
    let (files, report) = scan_and_run(&cfg, source)?;
    let out_dir = output.unwrap_or_else(|| PathBuf::from(&cfg.output.dir));
    let opts = ApplyOptions {
        dry_run: !execute,
        move_files,
        conflict: ConflictPolicy::from(conflict),
    };
    let placements = organize::organize(&report, &files, &out_dir, &opts)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&placements)?);
        return Ok(());
    }
    let mut copied = 0usize;
    let mut skipped = 0usize;
    for p in &placements {
        match p.status {
            "copied" | "moved" => copied += 1,
            "skipped" => skipped += 1,
            _ => {}
        }
    }
    if opts.dry_run {
        println!("dry-run: {} placements planned", placements.len());
        for p in &placements {
            println!("  {} -> {}", p.source.display(), p.dest.display());
        }
    } else {
        println!(
            "apply summary: placed={}, skipped={}, pairs={}",
            copied,
            skipped,
            report.pairs.len()
        );
    }
    Ok(())
}
