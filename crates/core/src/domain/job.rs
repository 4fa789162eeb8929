// Job Domain Model

use chrono::{DateTime, Utc};

/// Job ID (UUID v4, assigned by the store)
pub type JobId = String;

/// One description line, owned by exactly one job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    pub text: String,
}

impl Description {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// One skill, owned by exactly one job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
}

impl Skill {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Persisted content of a job entry, without identity.
///
/// `descriptions` and `skills` are sets: the `Vec` keeps whatever order the
/// record was built or loaded in, and every consumer that needs a stable
/// order goes through [`JobRecord::sorted_descriptions`] /
/// [`JobRecord::sorted_skills`]. Equality ignores child order.
#[derive(Debug, Clone)]
pub struct JobRecord {
    pub job_title: String,
    pub company: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub descriptions: Vec<Description>,
    pub skills: Vec<Skill>,
}

impl JobRecord {
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

    /// Builder-style helper: attach one description per text
    pub fn with_descriptions<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.descriptions
            .extend(texts.into_iter().map(Description::new));
        self
    }

    /// Builder-style helper: attach one skill per name
    pub fn with_skills<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills.extend(names.into_iter().map(Skill::new));
        self
    }

    /// Descriptions in ascending lexicographic order of their text
    pub fn sorted_descriptions(&self) -> Vec<&Description> {
        let mut sorted: Vec<&Description> = self.descriptions.iter().collect();
        sorted.sort_by(|a, b| a.text.cmp(&b.text));
        sorted
    }

    /// Skills in ascending lexicographic order of their name
    pub fn sorted_skills(&self) -> Vec<&Skill> {
        let mut sorted: Vec<&Skill> = self.skills.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }

    /// Case-insensitive substring match over title, company, description
    /// texts and skill names. An empty needle matches every record.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }

        let needle = needle.to_lowercase();
        let hit = |haystack: &str| haystack.to_lowercase().contains(&needle);

        hit(&self.job_title)
            || hit(&self.company)
            || self.descriptions.iter().any(|d| hit(&d.text))
            || self.skills.iter().any(|s| hit(&s.name))
    }
}

impl PartialEq for JobRecord {
    fn eq(&self, other: &Self) -> bool {
        self.job_title == other.job_title
            && self.company == other.company
            && self.start_date == other.start_date
            && self.end_date == other.end_date
            && self.sorted_descriptions() == other.sorted_descriptions()
            && self.sorted_skills() == other.sorted_skills()
    }
}

impl Eq for JobRecord {}

/// Job Entity: a stored record plus its identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: JobId,
    pub record: JobRecord,
}

impl Job {
    pub fn new(id: impl Into<String>, record: JobRecord) -> Self {
        Self {
            id: id.into(),
            record,
        }
    }

    pub fn sorted_descriptions(&self) -> Vec<&Description> {
        self.record.sorted_descriptions()
    }

    pub fn sorted_skills(&self) -> Vec<&Skill> {
        self.record.sorted_skills()
    }
}
