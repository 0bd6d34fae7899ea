//! Illuminate - find beginner-friendly open-source issues from the terminal

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use illuminate_catalog::CatalogFilter;
use illuminate_cli::{render, theme_manager, CliConfig, CliError};
use illuminate_client::{ApiClient, Difficulty, FeedQuery, Page, ProgressStatus};
use illuminate_ui::ThemeId;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Exit status when the session is gone and the user must log in again.
const EXIT_LOGIN_REQUIRED: u8 = 2;

#[derive(Parser)]
#[command(name = "illuminate")]
#[command(about = "Find beginner-friendly open-source issues", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Copy)]
struct PageArgs {
    #[arg(long, default_value_t = 1)]
    page: u32,

    #[arg(long, default_value_t = 20)]
    per_page: u32,
}

impl From<PageArgs> for Page {
    fn from(args: PageArgs) -> Self {
        Page::new(args.page, args.per_page)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the curated repository catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Colour theme preference
    Theme {
        #[command(subcommand)]
        command: ThemeCommand,
    },
    /// Admin panel
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },
    #[command(flatten)]
    Api(ApiCommand),
}

/// Commands that talk to the API as the logged-in user.
#[derive(Subcommand)]
enum ApiCommand {
    /// Show the logged-in user, if any
    Whoami,
    /// Print the URL that starts the login flow
    Login,
    /// End the current session
    Logout,
    /// Personalised issue feed
    Feed {
        #[command(flatten)]
        page: PageArgs,
        /// Comma-separated languages to include
        #[arg(short, long, value_delimiter = ',')]
        languages: Vec<String>,
        #[arg(short, long)]
        difficulty: Option<DifficultyArg>,
        /// Category slug
        #[arg(long)]
        category: Option<String>,
    },
    /// Search indexed issues
    Search {
        query: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show one issue
    Issue {
        id: Uuid,
        /// Include comments from the issue thread
        #[arg(long)]
        comments: bool,
    },
    /// Bookmarked issues
    Saved {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Bookmark an issue
    Save { id: Uuid },
    /// Remove a bookmark
    Unsave { id: Uuid },
    /// Show or update progress on an issue
    Progress {
        id: Uuid,
        #[arg(long)]
        status: Option<StatusArg>,
        /// Append a note
        #[arg(long)]
        note: Option<String>,
    },
    /// Notifications
    Notifications {
        #[command(flatten)]
        page: PageArgs,
        /// Mark everything read
        #[arg(long)]
        read_all: bool,
    },
    /// Growth level and next steps
    Growth,
}

#[derive(Subcommand)]
enum CatalogCommand {
    /// List category ids and labels
    Categories,
    /// Distinct languages across the catalog
    Languages,
    /// Distinct tags across the catalog
    Tags,
    /// List repositories, optionally filtered
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        tag: Option<String>,
        /// Case-insensitive text in name or description
        #[arg(long)]
        text: Option<String>,
    },
}

#[derive(Subcommand)]
enum ThemeCommand {
    /// Print the current theme
    Get,
    /// Persist a theme
    Set { id: String },
    /// List available themes
    List,
}

#[derive(Subcommand)]
enum AdminCommand {
    Stats,
    Jobs,
    /// Seed the index from the curated list
    Seed,
    /// Re-index issues
    Index,
    /// Discover new repositories
    Discover,
}

#[derive(Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Beginner,
    Intermediate,
    Advanced,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Beginner => Difficulty::Beginner,
            DifficultyArg::Intermediate => Difficulty::Intermediate,
            DifficultyArg::Advanced => Difficulty::Advanced,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    Interested,
    Researching,
    Working,
    PrSubmitted,
    Completed,
    Abandoned,
}

impl From<StatusArg> for ProgressStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Interested => ProgressStatus::Interested,
            StatusArg::Researching => ProgressStatus::Researching,
            StatusArg::Working => ProgressStatus::Working,
            StatusArg::PrSubmitted => ProgressStatus::PrSubmitted,
            StatusArg::Completed => ProgressStatus::Completed,
            StatusArg::Abandoned => ProgressStatus::Abandoned,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout stays clean for --json
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "illuminate=info,illuminate_cli=info,illuminate_client=info,illuminate_ui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(url) = illuminate_cli::login_url(&e) {
                eprintln!("Session expired. Log in at {}", url);
                return ExitCode::from(EXIT_LOGIN_REQUIRED);
            }
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Print `value` as JSON or as the rendered text.
fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T) -> String) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text(value));
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    config.validate()?;

    let json = cli.json;

    match cli.command {
        Commands::Catalog { command } => catalog(command, json),
        Commands::Theme { command } => theme(&config, command, json),
        Commands::Admin { command } => admin(&connect(&config)?, command, json).await,
        Commands::Api(command) => api(&connect(&config)?, command, json).await,
    }
}

fn connect(config: &CliConfig) -> anyhow::Result<ApiClient> {
    let client = ApiClient::new(config.client_config()).context("Failed to create API client")?;
    tracing::debug!(base_url = %client.base_url(), "API client ready");
    Ok(client)
}

async fn api(client: &ApiClient, command: ApiCommand, json: bool) -> anyhow::Result<()> {
    match command {
        ApiCommand::Whoami => match client.probe_session().await {
            Some(user) => emit(json, &user, render::user)?,
            None => println!("Not logged in. Log in at {}", client.login_url()),
        },
        ApiCommand::Login => println!("{}", client.auth().login_url()),
        ApiCommand::Logout => {
            let response = client.auth().logout().await?;
            emit(json, &response, |r| r.status.clone())?;
        }
        ApiCommand::Feed {
            page,
            languages,
            difficulty,
            category,
        } => {
            let query = FeedQuery {
                page: page.into(),
                languages,
                difficulty: difficulty.map(Difficulty::from),
                category,
            };
            let feed = client.issues().feed(&query).await?;
            emit(json, &feed, render::feed)?;
        }
        ApiCommand::Search { query, page } => {
            let feed = client.issues().search(&query, page.into()).await?;
            emit(json, &feed, render::feed)?;
        }
        ApiCommand::Issue { id, comments } => {
            let issue = client.issues().get(id).await?;
            let thread = if comments {
                client.issues().comments(id).await?
            } else {
                Vec::new()
            };
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "issue": issue,
                        "comments": thread,
                    }))?
                );
            } else {
                println!("{}", render::issue_detail(&issue, &thread));
            }
        }
        ApiCommand::Saved { page } => {
            let feed = client.issues().saved(page.into()).await?;
            emit(json, &feed, render::feed)?;
        }
        ApiCommand::Save { id } => {
            let response = client.issues().save(id).await?;
            emit(json, &response, |r| r.status.clone())?;
        }
        ApiCommand::Unsave { id } => {
            let response = client.issues().unsave(id).await?;
            emit(json, &response, |r| r.status.clone())?;
        }
        ApiCommand::Progress { id, status, note } => {
            let issues = client.issues();
            let mut progress = match status {
                Some(status) => Some(issues.set_progress(id, status.into()).await?),
                None => None,
            };
            if let Some(note) = note {
                progress = Some(issues.add_progress_note(id, &note).await?);
            }
            if progress.is_none() {
                progress = issues.progress(id).await?;
            }
            emit(json, &progress, |p| render::progress(p.as_ref()))?;
        }
        ApiCommand::Notifications { page, read_all } => {
            if read_all {
                client.notifications().mark_all_read().await?;
            }
            let list = client.notifications().list(page.into()).await?;
            emit(json, &list, render::notifications)?;
        }
        ApiCommand::Growth => {
            let growth = client.users().growth().await?;
            emit(json, &growth, render::growth)?;
        }
    }

    Ok(())
}

async fn admin(client: &ApiClient, command: AdminCommand, json: bool) -> anyhow::Result<()> {
    let admin = client.admin();
    match command {
        AdminCommand::Stats => {
            let stats = admin.stats().await?;
            emit(json, &stats, |s| {
                format!(
                    "users: {}\nrepos: {}\nissues: {}",
                    s.user_count, s.repo_count, s.issue_count
                )
            })?;
        }
        AdminCommand::Jobs => {
            let jobs = admin.jobs().await?;
            emit(json, &jobs, |jobs| {
                jobs.iter().map(render::job).collect::<Vec<_>>().join("\n")
            })?;
        }
        AdminCommand::Seed => emit(json, &admin.trigger_seed().await?, render::job)?,
        AdminCommand::Index => emit(json, &admin.trigger_index().await?, render::job)?,
        AdminCommand::Discover => emit(json, &admin.trigger_discover().await?, render::job)?,
    }
    Ok(())
}

fn catalog(command: CatalogCommand, json: bool) -> anyhow::Result<()> {
    match command {
        CatalogCommand::Categories => {
            let categories = illuminate_catalog::categories();
            emit(json, &categories, |cats| {
                cats.iter()
                    .map(|c| format!("{:<20} {} ({} repos)", c.id, c.label, c.repos.len()))
                    .collect::<Vec<_>>()
                    .join("\n")
            })?;
        }
        CatalogCommand::Languages => {
            emit(json, &illuminate_catalog::all_languages(), |l| l.join("\n"))?;
        }
        CatalogCommand::Tags => {
            emit(json, &illuminate_catalog::all_tags(), |t| t.join("\n"))?;
        }
        CatalogCommand::List {
            category,
            language,
            tag,
            text,
        } => {
            if let Some(id) = &category {
                if illuminate_catalog::category(id).is_none() {
                    return Err(CliError::InvalidArgument(format!("unknown category {:?}", id)).into());
                }
            }

            let filter = CatalogFilter {
                category,
                language,
                tag,
                text,
            };
            let hits = filter.apply();
            let repos: Vec<_> = hits.iter().map(|(_, r)| *r).collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&repos)?);
            } else if hits.is_empty() {
                println!("No repositories match.");
            } else {
                for (category, repo) in &hits {
                    println!("{}", render::catalog_entry(category, repo));
                }
            }
        }
    }
    Ok(())
}

fn theme(config: &CliConfig, command: ThemeCommand, json: bool) -> anyhow::Result<()> {
    let mut themes = theme_manager(config);

    match command {
        ThemeCommand::Get => {
            let current = themes.get_theme();
            emit(json, &current, |t| t.id().to_string())?;
        }
        ThemeCommand::Set { id } => {
            let theme: ThemeId = id.parse().map_err(CliError::from)?;
            themes.set_theme(theme).map_err(CliError::from)?;
            tracing::info!(theme = %theme, path = %themes.store().path().display(), "Theme saved");
            emit(json, &theme, |t| t.id().to_string())?;
        }
        ThemeCommand::List => {
            let current = themes.get_theme();
            emit(json, &ThemeId::ALL, |all| {
                all.iter()
                    .map(|t| render::theme_line(*t, current))
                    .collect::<Vec<_>>()
                    .join("\n")
            })?;
        }
    }
    Ok(())
}
