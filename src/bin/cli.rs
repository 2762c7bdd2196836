//! champion-builds command line
//!
//! Scrapes the champion roster (and optionally per-champion build pages) through a Chrome
//! session, then writes a static HTML summary or dumps the records as JSON.

use anyhow::{Context, bail};
use champion_builds::render::{DEFAULT_OUTPUT, DEFAULT_TITLE, Destination, emit, render_json, render_page};
use champion_builds::scrape::{DEFAULT_BASE_URL, DEFAULT_LOCALE, Scraper, Selection, SiteConfig};
use champion_builds::{BrowserSession, ConnectionOptions, LaunchOptions, PageSource, StaticPages};
use clap::Parser;
use std::{path::PathBuf, time::Duration};

#[derive(Parser)]
#[command(name = "champion-builds")]
#[command(version)]
#[command(about = "Scrape champion builds and render a local summary page", long_about = None)]
struct Cli {
    /// Launch browser in headed mode (default: headless)
    #[arg(long, short = 'H')]
    headed: bool,

    /// Path to custom browser executable
    #[arg(long, value_name = "PATH")]
    chrome_path: Option<PathBuf>,

    /// WebSocket endpoint URL of an already running browser
    #[arg(long, value_name = "URL")]
    ws_endpoint: Option<String>,

    /// Persistent browser profile directory
    #[arg(long, value_name = "DIR")]
    user_data_dir: Option<PathBuf>,

    /// Read saved pages from DIR instead of a browser (DIR/<url path>.html)
    #[arg(long, value_name = "DIR", conflicts_with_all = ["ws_endpoint", "show"])]
    fixtures: Option<PathBuf>,

    /// Statistics site root
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Site language
    #[arg(long, default_value = DEFAULT_LOCALE)]
    locale: String,

    /// Scrape build details for this champion slug (repeatable)
    #[arg(long = "champion", short = 'c', value_name = "SLUG")]
    champions: Vec<String>,

    /// Scrape build details for every champion in the roster
    #[arg(long, conflicts_with = "champions")]
    details: bool,

    /// Keep only the first N roster entries
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// Where to write the summary page
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Print the page instead of writing it
    #[arg(long)]
    stdout: bool,

    /// Print the scraped records as JSON instead of rendering HTML
    #[arg(long, conflicts_with_all = ["stdout", "show"])]
    json: bool,

    /// Open the written page in the browser session (use with --headed)
    #[arg(long, conflicts_with = "stdout")]
    show: bool,

    /// Milliseconds to let client-side scripts run after each page load
    #[arg(long, value_name = "MS", default_value_t = 500)]
    render_wait_ms: u64,

    /// Page title
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,
}

fn open_session(cli: &Cli) -> anyhow::Result<BrowserSession> {
    let render_wait = Duration::from_millis(cli.render_wait_ms);

    let session = match &cli.ws_endpoint {
        Some(ws_url) => BrowserSession::connect(ConnectionOptions::new(ws_url.clone()).render_wait(render_wait))?,
        None => {
            let mut options = LaunchOptions::new().headless(!cli.headed).render_wait(render_wait);
            if let Some(path) = &cli.chrome_path {
                options = options.chrome_path(path);
            }
            if let Some(dir) = &cli.user_data_dir {
                options = options.user_data_dir(dir);
            }
            BrowserSession::launch(options)?
        }
    };

    Ok(session)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let pages = cli.fixtures.as_ref().map(StaticPages::from_dir);
    let session = match &pages {
        Some(_) => None,
        None => Some(open_session(&cli).context("Failed to start browser session")?),
    };
    let source: &dyn PageSource = match (&pages, &session) {
        (Some(pages), _) => pages,
        (None, Some(session)) => session,
        (None, None) => bail!("No page source available"),
    };

    let site = SiteConfig::new().base_url(cli.base_url.as_str()).locale(cli.locale.as_str());
    let scraper = Scraper::new(source, site);

    let selection = Selection { champions: cli.champions.clone(), details: cli.details, limit: cli.limit };
    let summary = scraper.run(&selection).context("Scrape failed")?;

    let mut stdout = std::io::stdout().lock();

    if cli.json {
        emit(&Destination::Stdout, &render_json(&summary)?, &mut stdout)?;
        return Ok(());
    }

    let html = render_page(&cli.title, &summary.characters, &summary.reports);
    let destination = if cli.stdout { Destination::Stdout } else { Destination::File(cli.output.clone()) };

    emit(&destination, &html, &mut stdout).with_context(|| format!("Failed to write {}", cli.output.display()))?;
    if let Destination::File(path) = &destination {
        eprintln!("Summary written to {}", path.display());
    }

    if cli.show {
        if let Some(session) = &session {
            session.show(&cli.output)?;
            eprintln!("Showing summary; press Enter to close the browser");
            let mut line = String::new();
            std::io::stdin().read_line(&mut line)?;
        }
    }

    Ok(())
}
