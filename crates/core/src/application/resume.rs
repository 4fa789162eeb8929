//! Resume document layout for a single job entry.
//!
//! Produces the ordered content of the one-page resume (title, detail lines,
//! description bullets, skill line) independent of any drawing backend.

use crate::domain::JobRecord;

/// US Letter width in points
pub const PAGE_WIDTH_PT: f64 = 8.5 * 72.0;
/// US Letter height in points
pub const PAGE_HEIGHT_PT: f64 = 11.0 * 72.0;
/// Left/right margin in points
pub const MARGIN_PT: f64 = 72.0;

pub const DOCUMENT_TITLE: &str = "Job Details";
pub const BULLET: &str = "•";

/// Medium date style, e.g. `Jan 5, 2024`
const DATE_FORMAT: &str = "%b %-d, %Y";

#[derive(Debug, Clone, PartialEq)]
pub struct ResumeSection {
    pub heading: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResumeDocument {
    pub title: String,
    pub details: Vec<String>,
    pub sections: Vec<ResumeSection>,
    pub page_width_pt: f64,
    pub page_height_pt: f64,
    pub margin_pt: f64,
}

impl ResumeDocument {
    pub fn for_job(job: &JobRecord) -> Self {
        let details = vec![
            format!("Job Title: {}", job.job_title),
            format!("Company: {}", job.company),
            format!("Start Date: {}", job.start_date.format(DATE_FORMAT)),
            format!("End Date: {}", job.end_date.format(DATE_FORMAT)),
        ];

        let bullets = job
            .sorted_descriptions()
            .into_iter()
            .map(|d| format!("{} {}", BULLET, d.text))
            .collect();

        let skills = job
            .sorted_skills()
            .into_iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            title: DOCUMENT_TITLE.to_string(),
            details,
            sections: vec![
                ResumeSection {
                    heading: "Descriptions".to_string(),
                    lines: bullets,
                },
                ResumeSection {
                    heading: "Skills".to_string(),
                    lines: vec![skills],
                },
            ],
            page_width_pt: PAGE_WIDTH_PT,
            page_height_pt: PAGE_HEIGHT_PT,
            margin_pt: MARGIN_PT,
        }
    }

    /// Width of the text column in points
    pub fn content_width_pt(&self) -> f64 {
        self.page_width_pt - 2.0 * self.margin_pt
    }

    /// Plain-text rendition, one line per document line
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        out.push_str(&"=".repeat(self.title.chars().count()));
        out.push_str("\n\n");

        for line in &self.details {
            out.push_str(line);
            out.push('\n');
        }

        for section in &self.sections {
            out.push('\n');
            out.push_str(&section.heading);
            out.push_str(":\n");
            for line in &section.lines {
                out.push_str(line);
                out.push('\n');
            }
        }

        out
    }
}
