//! Candidate report: filtering, pagination and CSV export over `/jobseekers/all`.

use std::io::Write;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::api::CandidateRecord;

/// Rows shown per report page.
pub const PAGE_SIZE: usize = 10;

const CSV_HEADERS: [&str; 10] = [
    "Name",
    "Email",
    "Mobile",
    "Gender",
    "Status",
    "Education",
    "Work Experience",
    "Skills",
    "Date of Birth",
    "Profile Created",
];

/// Case-insensitive substring filters. Blank filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateFilters {
    pub name: String,
    pub email: String,
    pub skills: String,
    pub status: String,
}

impl CandidateFilters {
    pub fn matches(&self, candidate: &CandidateRecord) -> bool {
        contains(candidate.name.as_deref(), &self.name)
            && contains(candidate.email.as_deref(), &self.email)
            && contains(candidate.skills.as_deref(), &self.skills)
            && contains(candidate.status.as_deref(), &self.status)
    }
}

fn contains(field: Option<&str>, filter: &str) -> bool {
    let filter = filter.trim();
    if filter.is_empty() {
        return true;
    }
    field.is_some_and(|value| value.to_lowercase().contains(&filter.to_lowercase()))
}

/// Candidates matching every non-blank filter, in their original order.
pub fn filter_candidates<'a>(
    candidates: &'a [CandidateRecord],
    filters: &CandidateFilters,
) -> Vec<&'a CandidateRecord> {
    candidates.iter().filter(|c| filters.matches(c)).collect()
}

/// One page of a result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// 1-based page number actually shown.
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items: &'a [T],
}

/// Slice out page `requested` (1-based), clamped to the available pages.
pub fn paginate<T>(items: &[T], requested: usize) -> Page<'_, T> {
    let total_pages = items.len().div_ceil(PAGE_SIZE);
    let number = requested.clamp(1, total_pages.max(1));
    let start = ((number - 1) * PAGE_SIZE).min(items.len());
    let end = (start + PAGE_SIZE).min(items.len());
    Page {
        number,
        total_pages,
        total_items: items.len(),
        items: &items[start..end],
    }
}

/// Export file name for a report generated on `date`.
pub fn default_export_filename(date: NaiveDate) -> String {
    format!("candidates_{}.csv", date.format("%Y-%m-%d"))
}

/// Write candidates as CSV. Every field is quoted.
pub fn write_csv<'a, W, I>(mut out: W, candidates: I) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a CandidateRecord>,
{
    writeln!(out, "{}", CSV_HEADERS.join(","))?;
    for c in candidates {
        let created = c.created_at.as_deref().map(created_date).unwrap_or_default();
        let row = [
            c.name.as_deref(),
            c.email.as_deref(),
            c.mobile.as_deref(),
            c.gender.as_deref(),
            c.status.as_deref(),
            c.education.as_deref(),
            c.work_experience.as_deref(),
            c.skills.as_deref(),
            c.dob.as_deref(),
            Some(created.as_str()),
        ]
        .map(|field| quote(field.unwrap_or_default()));
        writeln!(out, "{}", row.join(","))?;
    }
    out.flush()
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Calendar date of a `createdAt` timestamp; unparseable values pass through.
fn created_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    date.map_or_else(|_| raw.to_string(), |d| d.format("%Y-%m-%d").to_string())
}
