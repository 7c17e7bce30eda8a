use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use sensei_core::model::{TopicId, TopicProgressDraft};
use services::{AppServices, Clock, ProgressService, TopicPracticeService};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://quality-sensei.sqlite3";

#[derive(Debug, Parser)]
#[command(name = "quality-sensei")]
#[command(about = "Hands-on web automation practice with persisted progress")]
#[command(version)]
struct Cli {
    /// SQLite database URL or file path
    #[arg(long = "db", env = "SENSEI_DB_URL", default_value = DEFAULT_DB_URL, global = true)]
    db_url: String,

    /// Log filter directive
    #[arg(long = "log", env = "RUST_LOG", default_value = "info", global = true)]
    log: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
enum Command {
    /// Launch the desktop app (default)
    Ui,
    /// Mark topics as completed
    Seed {
        /// Topic ids such as `locators` or `drag-drop`
        #[arg(required_unless_present = "all")]
        topics: Vec<String>,
        /// Mark every topic in the catalog
        #[arg(long, conflicts_with = "topics")]
        all: bool,
    },
    /// Print per-topic completion
    Status,
}

struct DesktopApp {
    progress: Arc<ProgressService>,
    practice: Arc<TopicPracticeService>,
}

impl UiApp for DesktopApp {
    fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    fn practice(&self) -> Arc<TopicPracticeService> {
        Arc::clone(&self.practice)
    }
}

#[derive(Debug, thiserror::Error)]
enum SetupError {
    #[error("invalid --db value: {raw}")]
    InvalidDbUrl { raw: String },
}

fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == "sqlite::memory:" || trimmed.starts_with("sqlite://") {
        return trimmed.to_string();
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| SetupError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(SetupError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn seed(
    progress: &ProgressService,
    topics: Vec<String>,
    all: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let keys = if all {
        TopicId::ALL.iter().map(|t| t.as_str().to_string()).collect()
    } else {
        topics
    };
    let now = progress.clock().now();
    for key in keys {
        let draft = TopicProgressDraft::new(key.clone(), true).with_last_attempt(now);
        progress.put(&key, draft).await?;
        info!(topic = %key, "seeded completion");
    }
    Ok(())
}

async fn status(progress: &ProgressService) -> Result<(), Box<dyn std::error::Error>> {
    let overview = progress.course_overview().await?;
    for record in overview.topics() {
        let mark = if record.is_completed() { "x" } else { " " };
        let when = record
            .last_attempt()
            .map(|at| at.to_rfc3339())
            .unwrap_or_default();
        println!("[{mark}] {:<18} {when}", record.id().as_str());
    }
    println!(
        "{}/{} completed ({}%)",
        overview.completed(),
        overview.total(),
        overview.percentage()
    );
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.log);

    let db_url = normalize_sqlite_url(&cli.db_url);
    prepare_sqlite_file(&db_url)?;

    // Not entered: the desktop shell starts its own runtime. This one stays alive
    // so the sqlite pool's background tasks keep running.
    let runtime = tokio::runtime::Runtime::new()?;
    let services = runtime.block_on(AppServices::new_sqlite(&db_url, Clock::default_clock()))?;
    info!(db_url = %db_url, "storage ready");

    match cli.command.unwrap_or(Command::Ui) {
        Command::Seed { topics, all } => runtime.block_on(seed(&services.progress(), topics, all)),
        Command::Status => runtime.block_on(status(&services.progress())),
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                progress: services.progress(),
                practice: services.practice(),
            });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Quality Sensei")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_become_absolute_urls() {
        let url = normalize_sqlite_url("data/progress.sqlite3");
        assert!(url.starts_with("sqlite:///"), "{url}");
        assert!(url.ends_with("data/progress.sqlite3"), "{url}");

        let url = normalize_sqlite_url("sqlite:other.db");
        assert!(url.starts_with("sqlite:///") && url.ends_with("other.db"), "{url}");
    }

    #[test]
    fn explicit_urls_are_kept() {
        assert_eq!(normalize_sqlite_url("sqlite::memory:"), "sqlite::memory:");
        assert_eq!(
            normalize_sqlite_url(" sqlite:///tmp/x.db "),
            "sqlite:///tmp/x.db"
        );
    }

    #[test]
    fn prepare_rejects_non_sqlite_urls() {
        assert!(prepare_sqlite_file("postgres://db").is_err());
        assert!(prepare_sqlite_file("sqlite://").is_err());
        assert!(prepare_sqlite_file("sqlite::memory:").is_ok());
    }

    #[test]
    fn seed_subcommand_parses_topics() {
        let cli = Cli::try_parse_from(["quality-sensei", "seed", "hover", "drag-drop"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Seed {
                topics: vec!["hover".into(), "drag-drop".into()],
                all: false,
            })
        );

        let cli = Cli::try_parse_from(["quality-sensei", "--db", "x.db", "status"]).unwrap();
        assert_eq!(cli.db_url, "x.db");
        assert_eq!(cli.command, Some(Command::Status));

        assert!(Cli::try_parse_from(["quality-sensei", "seed", "--all", "hover"]).is_err());
    }

    #[test]
    fn seed_needs_topics_or_all() {
        assert!(Cli::try_parse_from(["quality-sensei", "seed"]).is_err());

        let cli = Cli::try_parse_from(["quality-sensei", "seed", "--all"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Seed {
                topics: Vec::new(),
                all: true,
            })
        );
    }

    #[tokio::test]
    async fn seed_rejects_unknown_topics() {
        let services = AppServices::in_memory(Clock::default_clock());
        let progress = services.progress();

        seed(&progress, vec!["waits".into()], false).await.unwrap();
        assert!(seed(&progress, vec!["selenium-grid".into()], false).await.is_err());

        let overview = progress.course_overview().await.unwrap();
        assert_eq!(overview.completed(), 1);
        assert!(overview.is_completed(TopicId::Waits));
    }
}
