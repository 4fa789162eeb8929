// Form input boundary: raw flag values -> trimmed JobDraft

use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::Args;
use jobfolio_core::domain::{JobDraft, JobRecord};

/// Parse `YYYY-MM-DD` (midnight UTC) or a full RFC 3339 timestamp
pub fn parse_date(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| anyhow!("Invalid date '{}': expected YYYY-MM-DD or RFC 3339", input))
}

/// Fields of the add form
#[derive(Debug, Args)]
pub struct AddForm {
    /// Job title (at least 3 characters)
    #[arg(short = 't', long)]
    pub title: String,

    /// Company name (at least 2 characters)
    #[arg(short, long)]
    pub company: String,

    /// Start date (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub start: String,

    /// End date (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub end: String,

    /// Description line (repeatable)
    #[arg(short = 'd', long = "description")]
    pub descriptions: Vec<String>,

    /// Skill (repeatable)
    #[arg(short = 's', long = "skill")]
    pub skills: Vec<String>,
}

impl AddForm {
    pub fn into_draft(self) -> Result<JobDraft> {
        let draft = JobDraft::new(
            self.title,
            self.company,
            parse_date(&self.start)?,
            parse_date(&self.end)?,
        )
        .with_descriptions(self.descriptions)
        .with_skills(self.skills);

        Ok(draft.normalized())
    }
}

/// Fields of the edit form; anything left out keeps its stored value
#[derive(Debug, Args)]
pub struct EditForm {
    #[arg(short = 't', long)]
    pub title: Option<String>,

    #[arg(short, long)]
    pub company: Option<String>,

    #[arg(long)]
    pub start: Option<String>,

    #[arg(long)]
    pub end: Option<String>,

    /// Replaces all descriptions when given (repeatable)
    #[arg(short = 'd', long = "description")]
    pub descriptions: Vec<String>,

    /// Replaces all skills when given (repeatable)
    #[arg(short = 's', long = "skill")]
    pub skills: Vec<String>,
}

impl EditForm {
    /// Prefill from the stored record, then overlay the given fields
    pub fn into_draft(self, current: &JobRecord) -> Result<JobDraft> {
        let mut draft = JobDraft::from_record(current);

        if let Some(title) = self.title {
            draft.job_title = title;
        }
        if let Some(company) = self.company {
            draft.company = company;
        }
        if let Some(start) = self.start {
            draft.start_date = parse_date(&start)?;
        }
        if let Some(end) = self.end {
            draft.end_date = parse_date(&end)?;
        }
        if !self.descriptions.is_empty() {
            draft.descriptions = self.descriptions;
        }
        if !self.skills.is_empty() {
            draft.skills = self.skills;
        }

        Ok(draft.normalized())
    }
}
