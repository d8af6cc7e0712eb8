//! Command-line front end for the workforce task API.
//!
//! Usage:
//!
//! ```text
//! workforce-tasks [--config <path>] [--api-url <url>] <command> ...
//! ```
//!
//! Dates are accepted as `DD-MM-YYYY` (ISO `YYYY-MM-DD` is also tolerated).
//! Outcome notifications are written as `[level] message` lines; query
//! results follow them.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use mockable::DefaultClock;
use thiserror::Error;
use tokio::runtime::Builder;
use workforce_tasks::config::{BASE_URL_ENV, ClientConfig, ConfigError};
use workforce_tasks::task::{
    adapters::{
        console::ConsoleNotificationSink,
        http::{HttpEmployeeDirectory, HttpTaskStore},
    },
    domain::{CurrentStatus, History},
    ports::TaskStoreError,
    presentation,
    services::{
        AllocateTaskRequest, CreateTaskRequest, RecordStatusRequest, TaskLifecycleError,
        TaskLifecycleService, TaskOverview,
    },
};
use workforce_tasks::telemetry;

type Service = TaskLifecycleService<
    HttpTaskStore,
    HttpEmployeeDirectory,
    ConsoleNotificationSink,
    DefaultClock,
>;

/// Task allocation and status tracking against a workforce API.
#[derive(Parser, Debug)]
#[command(name = "workforce-tasks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML client configuration file
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    /// Base URL of the workforce API, overriding the configuration file
    #[arg(long, global = true, env = BASE_URL_ENV)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a task
    CreateTask {
        /// Task identifier (letters, digits, `-` and `_`)
        task_id: String,
        /// Task name
        #[arg(long)]
        name: String,
        /// Task description
        #[arg(long)]
        description: String,
        /// Owning project
        #[arg(long)]
        project: String,
        /// Date work begins
        #[arg(long)]
        initiative_date: String,
        /// Date work must be finished by
        #[arg(long)]
        target_completion_date: String,
    },

    /// Allocate a task to an employee
    Allocate {
        /// Task identifier
        task_id: String,
        /// Assignee
        #[arg(long)]
        employee: String,
        /// Supervisor of the assignee
        #[arg(long)]
        reporting_person: String,
        /// Date of allocation
        #[arg(long)]
        assigned_date: String,
        /// Date the assignee must finish by
        #[arg(long)]
        target_date: String,
    },

    /// Record a status change
    Status {
        /// Task identifier
        task_id: String,
        /// New status label, for example "In Progress"
        status: String,
        /// Why the status changed
        #[arg(long)]
        reason: String,
        /// Who made the change
        #[arg(long = "by")]
        actor: String,
    },

    /// Show recorded status changes, oldest first
    History {
        /// Task identifier
        task_id: String,
    },

    /// Show the current status
    Current {
        /// Task identifier
        task_id: String,
    },

    /// List the statuses worth offering next
    Next {
        /// Task identifier
        task_id: String,
    },

    /// Show task, allocation and history together
    Overview {
        /// Task identifier
        task_id: String,
    },

    /// Look up an employee
    Employee {
        /// Employee identifier
        employee_id: String,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to build API client: {0}")]
    Client(#[from] TaskStoreError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] io::Error),
    #[error("{}", .0.user_message())]
    Lifecycle(#[from] TaskLifecycleError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn main() -> ExitCode {
    telemetry::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        // Lifecycle failures were already reported through the sink.
        Err(CliError::Lifecycle(_)) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            if writeln!(io::stderr(), "error: {err}").is_err() {
                return ExitCode::from(2);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_ref())?.with_base_url_override(cli.api_url.as_deref());
    let service = build_service(config)?;
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::RuntimeInit)?;
    let mut out = io::stdout().lock();
    runtime.block_on(execute(&service, cli.command, &mut out))
}

fn load_config(path: Option<&Utf8PathBuf>) -> Result<ClientConfig, ConfigError> {
    path.map_or_else(|| Ok(ClientConfig::default()), |file| ClientConfig::load(file))
}

fn build_service(config: ClientConfig) -> Result<Service, CliError> {
    let directory = HttpEmployeeDirectory::new(config.clone())?;
    let store = HttpTaskStore::new(config)?;
    Ok(TaskLifecycleService::new(
        Arc::new(store),
        Arc::new(directory),
        Arc::new(ConsoleNotificationSink::stdout()),
        Arc::new(DefaultClock),
    ))
}

async fn execute(service: &Service, command: Command, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Command::CreateTask {
            task_id,
            name,
            description,
            project,
            initiative_date,
            target_completion_date,
        } => {
            let request = CreateTaskRequest::new(
                task_id,
                name,
                description,
                project,
                initiative_date,
                target_completion_date,
            );
            service.create_task(request).await?;
        }
        Command::Allocate {
            task_id,
            employee,
            reporting_person,
            assigned_date,
            target_date,
        } => {
            let request = AllocateTaskRequest::new(
                task_id,
                employee,
                reporting_person,
                assigned_date,
                target_date,
            );
            service.allocate(request).await?;
        }
        Command::Status {
            task_id,
            status,
            reason,
            actor,
        } => {
            service
                .record_status(RecordStatusRequest::new(task_id, status, reason, actor))
                .await?;
        }
        Command::History { task_id } => {
            let history = service.history(&task_id).await?;
            write_history(out, &history)?;
        }
        Command::Current { task_id } => {
            let status = service.current_status(&task_id).await?;
            write_status(out, status)?;
        }
        Command::Next { task_id } => {
            for status in service.suggested_next_steps(&task_id).await? {
                writeln!(out, "{status}")?;
            }
        }
        Command::Overview { task_id } => {
            let overview = service.overview(&task_id).await?;
            write_overview(out, &overview)?;
        }
        Command::Employee { employee_id } => {
            let profile = service.lookup_employee(&employee_id).await?;
            writeln!(out, "{} ({})", profile.name(), profile.id())?;
            if let Some(role) = profile.role_name() {
                writeln!(out, "role: {role}")?;
            }
            if let Some(supervisor) = profile.reporting_person() {
                writeln!(out, "reports to: {supervisor}")?;
            }
        }
    }
    Ok(())
}

fn write_status(out: &mut impl Write, status: CurrentStatus) -> io::Result<()> {
    writeln!(
        out,
        "{status} [{}] step {}",
        presentation::tone(status).as_str(),
        presentation::progress_step(status).index()
    )
}

fn write_history(out: &mut impl Write, history: &History) -> io::Result<()> {
    if history.is_empty() {
        return writeln!(out, "no status changes recorded");
    }
    for entry in history {
        writeln!(
            out,
            "{}  {:<15} {}: {}",
            presentation::format_timestamp(entry.recorded_at()),
            entry.status().as_str(),
            entry.actor(),
            entry.reason()
        )?;
    }
    Ok(())
}

fn write_overview(out: &mut impl Write, overview: &TaskOverview) -> io::Result<()> {
    let task = &overview.task;
    writeln!(out, "{} {}", task.id(), task.name())?;
    writeln!(out, "{}", task.description().as_str())?;
    writeln!(
        out,
        "project {}: {} to {}",
        task.project_id(),
        task.initiative_date(),
        task.target_completion_date()
    )?;
    match &overview.allocation {
        Some(allocation) => writeln!(
            out,
            "allocated to {} (reports to {}): {} to {}",
            allocation.employee_id(),
            allocation.reporting_person_id(),
            allocation.assigned_date(),
            allocation.target_date()
        )?,
        None => writeln!(out, "not allocated")?,
    }
    write_status(out, overview.current_status)?;
    write_history(out, &overview.history)
}

#[cfg(test)]
#[path = "workforce_tasks/tests.rs"]
mod tests;
