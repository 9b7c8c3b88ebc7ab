//! Candidate report (employers): filter, page through, and export to CSV.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use careerportal_core::Route;
use careerportal_core::api::CandidateRecord;
use careerportal_core::report::{
    CandidateFilters, default_export_filename, filter_candidates, paginate, write_csv,
};

use crate::fmt::{or_dash, truncate};
use crate::view::ViewContext;

/// Arguments of `report`.
#[derive(clap::Args, Debug, Default)]
pub struct ReportArgs {
    /// Filter by name (case-insensitive substring).
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub skills: String,
    #[arg(long, default_value = "")]
    pub status: String,
    /// Page to show (1-based, 10 candidates per page).
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
    /// Export every matching candidate to CSV instead of printing a page.
    #[arg(long)]
    pub export: bool,
    /// CSV destination (default: candidates_<date>.csv).
    #[arg(short, long, requires = "export")]
    pub output: Option<PathBuf>,
}

impl ReportArgs {
    fn filters(&self) -> CandidateFilters {
        CandidateFilters {
            name: self.name.clone(),
            email: self.email.clone(),
            skills: self.skills.clone(),
            status: self.status.clone(),
        }
    }
}

/// Write `candidates` as CSV to `path`.
pub fn export(path: &Path, candidates: &[&CandidateRecord]) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    write_csv(BufWriter::new(file), candidates.iter().copied())
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Execute `report`.
pub async fn run(args: ReportArgs, ctx: &ViewContext) -> anyhow::Result<()> {
    ctx.enter(Route::Report)?;
    let candidates = ctx.api.list_candidates().await?;
    let matching = filter_candidates(&candidates, &args.filters());
    let mut out = io::stdout();

    if args.export {
        let path = args.output.unwrap_or_else(|| {
            PathBuf::from(default_export_filename(chrono::Local::now().date_naive()))
        });
        export(&path, &matching)?;
        writeln!(out, "Exported {} candidate(s) to {}", matching.len(), path.display())?;
        return Ok(());
    }

    if matching.is_empty() {
        writeln!(out, "No candidates match.")?;
        return Ok(());
    }
    let page = paginate(&matching, args.page);
    writeln!(
        out,
        "{:<22} {:<28} {:<14} {:<12} {:<24}",
        "NAME", "EMAIL", "MOBILE", "STATUS", "SKILLS"
    )?;
    for c in page.items {
        writeln!(
            out,
            "{:<22} {:<28} {:<14} {:<12} {:<24}",
            truncate(or_dash(c.name.as_deref()), 22),
            truncate(or_dash(c.email.as_deref()), 28),
            or_dash(c.mobile.as_deref()),
            or_dash(c.status.as_deref()),
            truncate(or_dash(c.skills.as_deref()), 24),
        )?;
    }
    writeln!(
        out,
        "\nPage {} of {} ({} candidate(s))",
        page.number, page.total_pages, page.total_items
    )?;
    Ok(())
}
