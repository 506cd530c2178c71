//! userdash - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use userdash::config::CliOverrides;
use userdash::model::{AppError, SortKey};

/// userdash - browse users and their posts from a directory REST API
#[derive(Parser, Debug)]
#[command(name = "userdash")]
#[command(version)]
#[command(about = "TUI dashboard for browsing users and their posts")]
pub struct Args {
    /// Base URL of the directory service
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Initial sort key: name or company
    #[arg(long, value_name = "KEY")]
    pub sort: Option<SortKey>,

    /// Start with this search term
    #[arg(short, long)]
    pub search: Option<String>,

    /// Posts fetched per page (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            base_url: self.base_url.clone(),
            page_size: self.page_size,
            sort: self.sort,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}

fn run(args: Args) -> Result<(), AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = userdash::config::load_config_with_precedence(args.config.clone())?;
        let merged = userdash::config::merge_config(config_file);
        let with_env = userdash::config::apply_env_overrides(merged)?;
        let with_cli = userdash::config::apply_cli_overrides(with_env, args.overrides());
        userdash::config::validate(with_cli)?
    };

    userdash::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let directory = userdash::directory::HttpDirectory::new(&config.base_url)?;
    let worker = userdash::directory::DirectoryWorker::spawn(directory)?;

    let options = userdash::view::DashboardOptions {
        sort: config.sort,
        search: args.search,
        page_size: config.page_size,
        color: userdash::view::ColorConfig::from_env_and_args(args.no_color),
    };

    userdash::view::run_dashboard(worker, options)?;

    info!("Exited cleanly");
    Ok(())
}
