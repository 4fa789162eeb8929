// Job Draft Validation

use chrono::{DateTime, Utc};

use crate::domain::error::{Result, ValidationError};
use crate::domain::job::{Description, JobRecord, Skill};

/// Minimum job title length, in characters
pub const MIN_TITLE_LEN: usize = 3;

/// Minimum company name length, in characters
pub const MIN_COMPANY_LEN: usize = 2;

/// Raw form input for the add/edit flows.
///
/// Entries may be blank (an empty form row). Use [`JobDraft::normalized`] at
/// the input boundary before validating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDraft {
    pub job_title: String,
    pub company: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub descriptions: Vec<String>,
    pub skills: Vec<String>,
}

impl JobDraft {
    pub fn new(
        job_title: impl Into<String>,
        company: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            job_title: job_title.into(),
            company: company.into(),
            start_date,
            end_date,
            descriptions: Vec::new(),
            skills: Vec::new(),
        }
    }

    pub fn with_descriptions<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.descriptions.extend(texts.into_iter().map(Into::into));
        self
    }

    pub fn with_skills<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills.extend(names.into_iter().map(Into::into));
        self
    }

    /// Prefill a draft from a stored record (edit flow)
    pub fn from_record(record: &JobRecord) -> Self {
        Self {
            job_title: record.job_title.clone(),
            company: record.company.clone(),
            start_date: record.start_date,
            end_date: record.end_date,
            descriptions: record
                .sorted_descriptions()
                .into_iter()
                .map(|d| d.text.clone())
                .collect(),
            skills: record
                .sorted_skills()
                .into_iter()
                .map(|s| s.name.clone())
                .collect(),
        }
    }

    /// Trim title, company and every entry. Blank entries are kept so the
    /// validator still sees what the user submitted.
    pub fn normalized(self) -> Self {
        Self {
            job_title: self.job_title.trim().to_string(),
            company: self.company.trim().to_string(),
            start_date: self.start_date,
            end_date: self.end_date,
            descriptions: self
                .descriptions
                .iter()
                .map(|d| d.trim().to_string())
                .collect(),
            skills: self.skills.iter().map(|s| s.trim().to_string()).collect(),
        }
    }
}

/// A draft that passed [`validate`]. The only way to obtain one outside this
/// module, so the add/edit path cannot hand an unchecked record to a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidJob {
    record: JobRecord,
}

impl ValidJob {
    pub fn record(&self) -> &JobRecord {
        &self.record
    }

    pub fn into_record(self) -> JobRecord {
        self.record
    }
}

fn has_content(entry: &str) -> bool {
    !entry.trim().is_empty()
}

/// Validate a draft against the job invariants.
///
/// Rules run in a fixed order and the first failure is returned:
/// title/company length, date ordering, descriptions, skills.
pub fn validate(candidate: &JobDraft) -> Result<ValidJob> {
    if candidate.job_title.chars().count() < MIN_TITLE_LEN
        || candidate.company.chars().count() < MIN_COMPANY_LEN
    {
        return Err(ValidationError::TitleOrCompanyTooShort);
    }

    if candidate.start_date > candidate.end_date {
        return Err(ValidationError::DatesOutOfOrder);
    }

    if !candidate.descriptions.iter().any(|d| has_content(d)) {
        return Err(ValidationError::MissingDescription);
    }

    if !candidate.skills.iter().any(|s| has_content(s)) {
        return Err(ValidationError::MissingSkill);
    }

    let record = JobRecord {
        job_title: candidate.job_title.clone(),
        company: candidate.company.clone(),
        start_date: candidate.start_date,
        end_date: candidate.end_date,
        descriptions: candidate
            .descriptions
            .iter()
            .filter(|d| has_content(d))
            .map(Description::new)
            .collect(),
        skills: candidate
            .skills
            .iter()
            .filter(|s| has_content(s))
            .map(Skill::new)
            .collect(),
    };

    Ok(ValidJob { record })
}
