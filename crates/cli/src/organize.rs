//! Applies a pairing/classification report to the filesystem layout.

use anyhow::{ensure, Result};
use chrono::Utc;
use edupair_core::models::Category;
use edupair_core::report::{Disposition, Report};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Copy, Default)]
pub enum ConflictPolicy {
    #[default]
    Rename,
    Skip,
    Overwrite,
}

impl From<&str> for ConflictPolicy {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "skip" => ConflictPolicy::Skip,
            "overwrite" => ConflictPolicy::Overwrite,
            _ => ConflictPolicy::Rename,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ApplyOptions {
    pub dry_run: bool,
    pub move_files: bool,
    pub conflict: ConflictPolicy,
}

#[derive(Debug, Clone, Serialize)]
pub struct Placement {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub status: &'static str,
}

/// Relative directory for a standalone category, matching the documented
/// output layout.
pub fn category_dir(category: Category) -> &'static str {
    match category {
        Category::StandaloneNotes => "notes",
        Category::StandaloneQuestions => "standalone_questions",
        Category::StandaloneSolutions => "standalone_solutions",
        Category::NotesWithQuestions => "combined_materials/notes_with_questions",
        Category::NotesWithSolutions => "combined_materials/notes_with_solutions",
        Category::CombinedQuestionSolution => "combined_materials/combined_question_solution",
    }
}

/// Places every document according to its disposition. `sources` must align
/// with the report entries (same order the filenames were fed to the core).
/// Copies by default; `move_files` renames instead. Writes a `plan.json`
/// manifest next to the organized tree unless this is a dry run.
pub fn organize(
    report: &Report,
    sources: &[PathBuf],
    out_dir: &Path,
    opts: &ApplyOptions,
) -> Result<Vec<Placement>> {
    ensure!(
        sources.len() == report.entries.len(),
        "source list and report entries diverge: {} vs {}",
        sources.len(),
        report.entries.len()
    );

    let mut placements = Vec::with_capacity(sources.len());
    for (entry, src) in report.entries.iter().zip(sources) {
        let dest = out_dir.join(relative_dest(&entry.disposition, src));
        if opts.dry_run {
            placements.push(Placement {
                source: src.clone(),
                dest,
                status: "planned",
            });
            continue;
        }

        let target = if dest.exists() {
            match opts.conflict {
                ConflictPolicy::Skip => {
                    placements.push(Placement {
                        source: src.clone(),
                        dest,
                        status: "skipped",
                    });
                    continue;
                }
                ConflictPolicy::Overwrite => dest,
                ConflictPolicy::Rename => resolve_conflict(&dest),
            }
        } else {
            dest
        };

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let status = if opts.move_files {
            fs::rename(src, &target)?;
            "moved"
        } else {
            fs::copy(src, &target)?;
            "copied"
        };
        placements.push(Placement {
            source: src.clone(),
            dest: target,
            status,
        });
    }

    if !opts.dry_run {
        write_manifest(report, &placements, out_dir)?;
    }
    info!(
        placed = placements.len(),
        dry_run = opts.dry_run,
        "organize complete"
    );
    Ok(placements)
}

fn relative_dest(disposition: &Disposition, src: &Path) -> PathBuf {
    let ext = src.extension().and_then(|e| e.to_str());
    let role_file = |role: &str| match ext {
        Some(e) => format!("{}.{}", role, e),
        None => role.to_string(),
    };
    match disposition {
        Disposition::Question { pair, .. } => PathBuf::from("question_solution_pairs")
            .join(format!("pair_{}", pair))
            .join(role_file("question")),
        Disposition::Solution { pair, .. } => PathBuf::from("question_solution_pairs")
            .join(format!("pair_{}", pair))
            .join(role_file("solution")),
        Disposition::Standalone { category } => {
            let name = src
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "document".to_string());
            PathBuf::from(category_dir(*category)).join(name)
        }
    }
}

fn resolve_conflict(dest: &Path) -> PathBuf {
    let stem = dest
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("file")
        .to_string();
    let ext = dest
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_string();
    let parent = dest.parent().unwrap_or_else(|| Path::new("."));
    let mut counter = 1;
    loop {
        let name = if ext.is_empty() {
            format!("{}_{}", stem, counter)
        } else {
            format!("{}_{}.{}", stem, counter, ext)
        };
        let candidate = parent.join(name);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

fn write_manifest(report: &Report, placements: &[Placement], out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)?;
    let manifest = serde_json::json!({
        "generated_at": Utc::now().to_rfc3339(),
        "pairs": report.pairs.len(),
        "standalone": report.classifications.len(),
        "entries": report.entries,
        "placements": placements,
    });
    fs::write(
        out_dir.join("plan.json"),
        serde_json::to_string_pretty(&manifest)?,
    )?;
    Ok(())
}
