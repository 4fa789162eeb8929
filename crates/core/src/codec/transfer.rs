// Transfer Record - flat JSON shape used by export/import

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Description, JobRecord, Skill};

/// One job in a `*_export.json` file.
///
/// Field names are part of the file format. Timestamps are RFC 3339.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecord {
    pub job_title: String,
    pub company: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub descriptions: Vec<String>,
    pub skills: Vec<String>,
}

impl From<&JobRecord> for TransferRecord {
    fn from(record: &JobRecord) -> Self {
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
}

impl From<TransferRecord> for JobRecord {
    // Empty strings carry no child; everything else is taken as-is.
    fn from(transfer: TransferRecord) -> Self {
        Self {
            job_title: transfer.job_title,
            company: transfer.company,
            start_date: transfer.start_date,
            end_date: transfer.end_date,
            descriptions: transfer
                .descriptions
                .into_iter()
                .filter(|text| !text.is_empty())
                .map(Description::new)
                .collect(),
            skills: transfer
                .skills
                .into_iter()
                .filter(|name| !name.is_empty())
                .map(Skill::new)
                .collect(),
        }
    }
}
