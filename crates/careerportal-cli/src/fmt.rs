//! Output formatting helpers.

use std::io::{self, Write};

use careerportal_core::api::{
    Application, Company, EmployerProfile, Job, JobSeekerProfile,
};

/// Shorten `s` to at most `max` characters, marking the cut with an ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
    let count = s.chars().count();
    if count <= max {
        s.to_string()
    } else {
        format!("{}…", s.chars().take(max.saturating_sub(1)).collect::<String>())
    }
}

/// Optional text, or `-` when absent or blank.
pub fn or_dash(value: Option<&str>) -> &str {
    value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or("-")
}

fn write_field(w: &mut impl Write, label: &str, value: Option<&str>) -> io::Result<()> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => writeln!(w, "  {:<12} {v}", format!("{label}:")),
        None => Ok(()),
    }
}

pub fn write_job_table(w: &mut impl Write, jobs: &[Job]) -> io::Result<()> {
    writeln!(
        w,
        "{:<6} {:<32} {:<20} {:<16} {:<6}",
        "ID", "TITLE", "COMPANY", "LOCATION", "APPS"
    )?;
    for job in jobs {
        writeln!(
            w,
            "{:<6} {:<32} {:<20} {:<16} {:<6}",
            job.id,
            truncate(job.title(), 32),
            truncate(or_dash(job.company_name.as_deref()), 20),
            truncate(or_dash(job.location.as_deref()), 16),
            job.application_count.map_or_else(|| "-".to_string(), |n| n.to_string()),
        )?;
    }
    writeln!(w, "\n{} job(s)", jobs.len())
}

pub fn write_job_detail(w: &mut impl Write, job: &Job) -> io::Result<()> {
    writeln!(w, "  {:<12} {}", "Job:", job.id)?;
    writeln!(w, "  {:<12} {}", "Title:", job.title())?;
    write_field(w, "Position", job.job_position.as_deref())?;
    write_field(w, "Company", job.company_name.as_deref())?;
    write_field(w, "Location", job.location.as_deref())?;
    write_field(w, "Experience", job.experience_level.as_deref())?;
    write_field(w, "Area", job.functional_area.as_deref())?;
    write_field(w, "Industry", job.industry.as_deref())?;
    write_field(w, "Salary", job.salary_details.as_deref())?;
    write_field(w, "Skills", job.required_skills.as_deref())?;
    write_field(w, "Posted", job.posted())?;
    if let Some(active) = job.is_active {
        writeln!(w, "  {:<12} {}", "Active:", if active { "yes" } else { "no" })?;
    }
    if let Some(description) = job.description.as_deref().filter(|d| !d.trim().is_empty()) {
        writeln!(w)?;
        writeln!(w, "{}", description.trim())?;
    }
    Ok(())
}

pub fn write_company_table(w: &mut impl Write, companies: &[Company]) -> io::Result<()> {
    writeln!(
        w,
        "{:<6} {:<28} {:<20} {:<20} {:<8}",
        "ID", "COMPANY", "INDUSTRY", "HEADQUARTERS", "FOUNDED"
    )?;
    for c in companies {
        writeln!(
            w,
            "{:<6} {:<28} {:<20} {:<20} {:<8}",
            c.id,
            truncate(or_dash(c.company_name.as_deref()), 28),
            truncate(or_dash(c.industry.as_deref()), 20),
            truncate(or_dash(c.headquarters.as_deref()), 20),
            c.founded.map_or_else(|| "-".to_string(), |y| y.to_string()),
        )?;
    }
    writeln!(w, "\n{} compan{}", companies.len(), if companies.len() == 1 { "y" } else { "ies" })
}

pub fn write_company_detail(w: &mut impl Write, c: &Company) -> io::Result<()> {
    writeln!(w, "  {:<12} {}", "Company:", or_dash(c.company_name.as_deref()))?;
    write_field(w, "Email", c.email.as_deref())?;
    write_field(w, "Industry", c.industry.as_deref())?;
    write_field(w, "Size", c.company_size.as_deref())?;
    write_field(w, "Type", c.company_type.as_deref())?;
    write_field(w, "HQ", c.headquarters.as_deref())?;
    if let Some(year) = c.founded {
        writeln!(w, "  {:<12} {year}", "Founded:")?;
    }
    write_field(w, "Specialities", c.specialities.as_deref())?;
    write_field(w, "Address", c.company_address.as_deref())?;
    write_field(w, "Phone", c.company_phone.as_deref())
}

pub fn write_job_seeker_profile(w: &mut impl Write, p: &JobSeekerProfile) -> io::Result<()> {
    writeln!(w, "  {:<12} {}", "Name:", or_dash(p.name.as_deref()))?;
    write_field(w, "Email", p.email.as_deref())?;
    write_field(w, "Mobile", p.mobile.as_deref())?;
    write_field(w, "Status", p.status.as_deref())?;
    write_field(w, "Gender", p.gender.as_deref())?;
    write_field(w, "Born", p.dob.as_deref())?;
    write_field(w, "Education", p.education.as_deref())?;
    write_field(w, "Experience", p.work_experience.as_deref())?;
    write_field(w, "Skills", p.skills.as_deref())?;
    write_field(w, "Resume", p.resume_file_path.as_deref())?;
    write_field(w, "Photo", p.photo_file_path.as_deref())
}

pub fn write_employer_profile(w: &mut impl Write, p: &EmployerProfile) -> io::Result<()> {
    writeln!(w, "  {:<12} {}", "Company:", or_dash(p.company_name.as_deref()))?;
    write_field(w, "Email", p.email.as_deref())?;
    write_field(w, "Industry", p.industry.as_deref())?;
    write_field(w, "Size", p.company_size.as_deref())?;
    write_field(w, "Type", p.company_type.as_deref())?;
    write_field(w, "HQ", p.headquarters.as_deref())?;
    if let Some(year) = p.founded {
        writeln!(w, "  {:<12} {year}", "Founded:")?;
    }
    write_field(w, "Specialities", p.specialities.as_deref())?;
    write_field(w, "Address", p.company_address.as_deref())?;
    write_field(w, "Phone", p.company_phone.as_deref())
}

/// Applications received for a job, as an employer sees them.
pub fn write_received_applications(w: &mut impl Write, apps: &[Application]) -> io::Result<()> {
    writeln!(
        w,
        "{:<6} {:<22} {:<28} {:<12} {:<12} {:<6}",
        "ID", "CANDIDATE", "EMAIL", "STATUS", "APPLIED", "CV"
    )?;
    for a in apps {
        writeln!(
            w,
            "{:<6} {:<22} {:<28} {:<12} {:<12} {:<6}",
            a.id,
            truncate(or_dash(a.candidate_name.as_deref()), 22),
            truncate(or_dash(a.candidate_email.as_deref()), 28),
            or_dash(a.status.as_deref()),
            truncate(or_dash(a.application_date.as_deref()), 12),
            if a.has_resume { "yes" } else { "no" },
        )?;
    }
    writeln!(w, "\n{} application(s)", apps.len())
}

/// The signed-in job seeker's own applications.
pub fn write_application_history(w: &mut impl Write, apps: &[Application]) -> io::Result<()> {
    writeln!(
        w,
        "{:<6} {:<36} {:<12} {:<12}",
        "ID", "JOB", "STATUS", "APPLIED"
    )?;
    for a in apps {
        writeln!(
            w,
            "{:<6} {:<36} {:<12} {:<12}",
            a.id,
            truncate(or_dash(a.job_title.as_deref()), 36),
            or_dash(a.status.as_deref()),
            truncate(or_dash(a.application_date.as_deref()), 12),
        )?;
    }
    writeln!(w, "\n{} application(s)", apps.len())
}
