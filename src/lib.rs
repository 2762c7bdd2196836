//! # champion-builds
//!
//! Scrapes champion build statistics from a leagueofgraphs-style site through a Chrome
//! DevTools session and renders them as a static HTML page.
//!
//! ## Features
//!
//! - **Browser Session**: one owned Chrome instance, launched or attached over WebSocket,
//!   loads each page and hands back the rendered HTML
//! - **Roster**: every champion with roles, popularity, win rate, ban rate, KDA and pentakills
//! - **Build details**: skill order grid, item builds per category, summoner spells, runes
//! - **Output**: static HTML summary page or JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use champion_builds::{BrowserSession, LaunchOptions};
//! use champion_builds::scrape::{Scraper, SiteConfig};
//!
//! # fn main() -> champion_builds::Result<()> {
//! let session = BrowserSession::launch(LaunchOptions::default())?;
//! let scraper = Scraper::new(&session, SiteConfig::default());
//!
//! let roster = scraper.roster()?;
//! println!("{} champions, {} rows skipped", roster.len(), roster.skipped);
//!
//! let report = scraper.report(&roster.items[0])?;
//! println!("Skill order: {:?}", report.skills.sequence());
//! # Ok(())
//! # }
//! ```
//!
//! ### Offline pages
//!
//! Anything implementing [`PageSource`] can stand in for the browser. [`StaticPages`] serves
//! documents from memory or from a directory of saved pages:
//!
//! ```rust
//! use champion_builds::{PageSource, StaticPages};
//!
//! let pages = StaticPages::new().with_page("https://example.com/", "<html></html>");
//! assert!(pages.fetch_html("https://example.com/").is_ok());
//! ```
//!
//! ## Module Overview
//!
//! - [`browser`]: Browser session, launch options and the [`PageSource`] seam
//! - [`dom`]: Table and cell helpers over parsed HTML
//! - [`extract`]: Roster and build-page extractors
//! - [`model`]: Plain records (characters, build entries, skill order)
//! - [`scrape`]: URL layout of the site and the [`Scraper`](scrape::Scraper) walk
//! - [`render`]: HTML summary page
//! - [`error`]: Error types and result aliases

pub mod browser;
pub mod dom;
pub mod error;
pub mod extract;
pub mod model;
pub mod render;
pub mod scrape;

pub use browser::{BrowserSession, ConnectionOptions, LaunchOptions, PageSource, StaticPages};
pub use error::{Result, ScrapeError};
pub use model::{BuildCategory, BuildEntry, Character, CharacterReport, Extraction, ItemBuilds, Kda, OverviewStats,
                Role, ScrapeSummary, SkillOrder};
pub use render::Destination;
pub use scrape::{Plan, Scraper, Selection, SiteConfig};
