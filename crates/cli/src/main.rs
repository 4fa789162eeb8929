//! Jobfolio CLI - track job-search entries, export/import them, lay out a
//! resume page. Composition root: owns config, logging and the store handle.

mod config;
mod form;
mod logging;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use jobfolio_core::application::JobService;
use jobfolio_core::codec::EXPORT_FILE_NAME;
use jobfolio_core::domain::JobId;
use jobfolio_core::port::{JobStore, UuidProvider};
use jobfolio_core::AppError;
use jobfolio_infra_sqlite::{create_pool, run_migrations, SqliteJobStore};

use crate::config::{Config, LogFormat, DEFAULT_DB_PATH};
use crate::form::{AddForm, EditForm};

#[derive(Parser)]
#[command(name = "jobfolio")]
#[command(about = "Track job-search entries", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// SQLite database file
    #[arg(long, global = true, env = "JOBFOLIO_DB_PATH", default_value = DEFAULT_DB_PATH)]
    db_path: String,

    /// Log output format
    #[arg(long, global = true, env = "JOBFOLIO_LOG_FORMAT", value_enum, default_value = "pretty")]
    log_format: LogFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new job
    Add(AddForm),

    /// Edit a job (omitted fields keep their values)
    Edit {
        /// Job ID
        id: JobId,

        #[command(flatten)]
        form: EditForm,
    },

    /// Delete a job with its descriptions and skills
    Delete {
        /// Job ID
        id: JobId,
    },

    /// Show one job
    Show {
        /// Job ID
        id: JobId,
    },

    /// List all jobs, newest first
    List,

    /// Search title, company, descriptions and skills
    Search {
        /// Case-insensitive text to look for
        query: String,
    },

    /// Export every job to a JSON transfer file
    Export {
        /// Destination file
        #[arg(short, long, default_value = EXPORT_FILE_NAME)]
        out: PathBuf,
    },

    /// Import jobs from a JSON transfer file
    Import {
        /// Source file
        file: PathBuf,
    },

    /// Lay out the resume page for one job
    Resume {
        /// Job ID
        id: JobId,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

async fn open_service(config: &Config) -> Result<JobService> {
    info!(db_path = %config.db_path.display(), "Opening database");

    let pool = create_pool(&config.database_url())
        .await
        .context("Failed to open database")?;
    run_migrations(&pool).await.context("Migration failed")?;

    let store: Arc<dyn JobStore> = Arc::new(SqliteJobStore::new(pool, Arc::new(UuidProvider)));
    Ok(JobService::new(store))
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(&cli.db_path, cli.log_format)?;
    logging::init(config.log_format)?;

    let service = open_service(&config).await?;

    match cli.command {
        Commands::Add(form) => {
            let draft = form.into_draft()?;
            let id = service.add(&draft).await?;
            output::success(format!("Job {} saved", id));
        }

        Commands::Edit { id, form } => {
            let current = service.get(&id).await?;
            let draft = form.into_draft(&current.record)?;
            service.edit(&id, &draft).await?;
            output::success(format!("Job {} updated", id));
        }

        Commands::Delete { id } => {
            service.delete(&id).await?;
            output::success(format!("Job {} deleted", id));
        }

        Commands::Show { id } => {
            let job = service.get(&id).await?;
            output::print_job(&job);
        }

        Commands::List => {
            let jobs = service.list().await?;
            output::print_jobs(&jobs);
        }

        Commands::Search { query } => {
            let jobs = service.search(&query).await?;
            output::print_jobs(&jobs);
        }

        Commands::Export { out } => {
            let bytes = service.export().await?;
            std::fs::write(&out, &bytes)
                .with_context(|| format!("Export failed: cannot write {}", out.display()))?;
            output::success(format!("Exported to {}", out.display()));
        }

        Commands::Import { file } => {
            let bytes = std::fs::read(&file)
                .with_context(|| format!("Import failed: cannot read {}", file.display()))?;
            let ids = service.import(&bytes).await?;
            output::success(format!("Imported {} jobs", ids.len()));
        }

        Commands::Resume { id, out } => {
            let text = service.resume(&id).await?.render_text();
            match out {
                Some(path) => {
                    std::fs::write(&path, text)
                        .with_context(|| format!("Cannot write {}", path.display()))?;
                    output::success(format!("Resume written to {}", path.display()));
                }
                None => print!("{}", text),
            }
        }
    }

    Ok(())
}

/// Validation failures read as the bare rule message; everything else keeps
/// its context chain
fn describe(err: &anyhow::Error) -> String {
    match err.downcast_ref::<AppError>() {
        Some(app @ AppError::Validation(_)) => app.user_message(),
        _ => format!("{:#}", err),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::failure(describe(&e));
            ExitCode::FAILURE
        }
    }
}
