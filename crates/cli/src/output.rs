// Terminal rendering of jobs

use colored::Colorize;
use jobfolio_core::domain::Job;
use tabled::{Table, Tabled};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Tabled)]
struct JobListRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Skills")]
    skills: String,
}

impl From<&Job> for JobListRow {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id.clone(),
            title: job.record.job_title.clone(),
            company: job.record.company.clone(),
            start: job.record.start_date.format(DATE_FORMAT).to_string(),
            end: job.record.end_date.format(DATE_FORMAT).to_string(),
            skills: job
                .sorted_skills()
                .into_iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

pub fn print_jobs(jobs: &[Job]) {
    if jobs.is_empty() {
        println!("{}", "No jobs found".yellow());
        return;
    }

    let rows: Vec<JobListRow> = jobs.iter().map(JobListRow::from).collect();
    println!("{}", Table::new(rows));
}

pub fn print_job(job: &Job) {
    println!("{}", job.record.job_title.cyan().bold());
    println!("  {} {}", "ID:".bold(), job.id);
    println!("  {} {}", "Company:".bold(), job.record.company);
    println!(
        "  {} {} → {}",
        "Dates:".bold(),
        job.record.start_date.format(DATE_FORMAT),
        job.record.end_date.format(DATE_FORMAT)
    );

    println!();
    println!("  {}", "Descriptions".bold());
    for description in job.sorted_descriptions() {
        println!("    • {}", description.text);
    }

    println!();
    println!("  {}", "Skills".bold());
    for skill in job.sorted_skills() {
        println!("    • {}", skill.name);
    }
}

pub fn success(message: impl AsRef<str>) {
    println!("{}", format!("✓ {}", message.as_ref()).green().bold());
}

pub fn failure(message: impl AsRef<str>) {
    eprintln!("{}", format!("✗ {}", message.as_ref()).red().bold());
}
