use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

use linear_tools::client::Client;
use linear_tools::clock::SystemClock;
use linear_tools::commands::{fetch_list, fetch_recently_done};
use linear_tools::config::{parse_days, Config, OUTPUT_DIR_NAME};
use linear_tools::markdown::DEFAULT_DAYS;
use linear_tools::{parse_view_url, Error, Result};


/// Export the issues of a Linear custom view to a markdown file, under ./linear/
#[derive(Parser)]
#[command(name = "linear-tools", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Save every issue of a view to linear/list-<date>.md
    #[command(name = "fetch")]
    Fetch {
        /// e.g. https://linear.app/my-team/view/<view-id>
        view_url: String,
    },
    /// Save the issues of a view that were completed recently to linear/recently-done-<date>.md
    #[command(name = "fetch:recently-done")]
    FetchRecentlyDone {
        view_url: String,
        /// Width of the time window, in days
        #[arg(allow_negative_numbers = true)]
        days: Option<String>,
    },
}


#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit();
            }
            // Usage errors exit with 1, like every other failure
            let _ = err.print();
            std::process::exit(1);
        },
    };

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let days = match &cli.command {
        Command::FetchRecentlyDone { days, .. } => parse_days(days.as_deref())?,
        Command::Fetch { .. } => DEFAULT_DAYS,
    };
    let config = Config::from_env()?;

    let output_dir = output_dir()?;
    let clock = SystemClock;

    match cli.command {
        Command::Fetch { view_url } => {
            let view = parse_view_url(&view_url)?;
            let client = Client::new(&config.api_url, &config.api_key)?;

            println!("Fetching tasks from view: {}", view.view_id());
            let report = fetch_list(&client, &view, &output_dir, &clock).await?;
            println!("Saved {} tasks to: {}", report.count, report.path.display());
        },
        Command::FetchRecentlyDone { view_url, .. } => {
            let view = parse_view_url(&view_url)?;
            let client = Client::new(&config.api_url, &config.api_key)?;

            println!("Fetching recently done tasks from view: {}", view.view_id());
            let report = fetch_recently_done(&client, &view, days, &output_dir, &clock).await?;
            println!("Saved {} tasks completed in last {} days to: {}", report.count, days, report.path.display());
        },
    }

    Ok(())
}

fn output_dir() -> Result<PathBuf> {
    let cwd = std::env::current_dir()
        .map_err(|source| Error::Io { path: PathBuf::from("."), source })?;
    Ok(cwd.join(OUTPUT_DIR_NAME))
}
