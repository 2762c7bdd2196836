//! Scrape orchestration
//!
//! [`Scraper`] borrows a [`PageSource`] and walks the site: the roster first, then the build,
//! items, spells and runes pages of each requested champion.

pub mod urls;

pub use urls::{DEFAULT_BASE_URL, DEFAULT_LOCALE, SiteConfig, absolute_url, normalize_url};

use crate::browser::PageSource;
use crate::error::{Result, ScrapeError};
use crate::extract;
use crate::model::{Character, CharacterReport, Extraction, ScrapeSummary};
use scraper::Html;

/// Walks the site through a borrowed page source
pub struct Scraper<'a, S: PageSource + ?Sized> {
    source: &'a S,
    site: SiteConfig,
}

impl<'a, S: PageSource + ?Sized> Scraper<'a, S> {
    pub fn new(source: &'a S, site: SiteConfig) -> Self {
        Self { source, site }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    fn document(&self, url: &str) -> Result<Html> {
        let html = self.source.fetch_html(url)?;
        Ok(Html::parse_document(&html))
    }

    /// Fetch and read the roster listing
    pub fn roster(&self) -> Result<Extraction<Character>> {
        let document = self.document(&self.site.roster_url())?;
        let roster = extract::extract_roster(&document, &self.site)?;

        log::info!("Roster: {} champions", roster.len());
        if roster.skipped > 0 {
            log::warn!("Roster: skipped {} unreadable rows", roster.skipped);
        }

        Ok(roster)
    }

    /// Fetch every detail page of one champion
    pub fn report(&self, character: &Character) -> Result<CharacterReport> {
        let slug = &character.slug;
        let role = character.roles.first().copied();
        log::info!("Scraping details for {}", character);

        let builds = self.document(&self.site.builds_url(slug, role))?;
        let overview = extract::extract_overview(&builds)?;
        let skills = extract::extract_skill_order(&builds)?;

        let items = extract::extract_items(&self.document(&self.site.items_url(slug, role))?)?;
        let spells = extract::extract_spells(&self.document(&self.site.spells_url(slug, role))?)?;
        let runes = extract::extract_runes(&self.document(&self.site.runes_url(slug, role))?)?;

        let skipped_rows = items.skipped + spells.skipped + runes.skipped;
        if skipped_rows > 0 {
            log::warn!("{}: skipped {} unreadable build rows", slug, skipped_rows);
        }

        Ok(CharacterReport {
            character: character.clone(),
            overview,
            skills,
            spells: spells.items,
            runes: runes.items,
            items: items.builds,
            skipped_rows,
        })
    }

    /// Reports for several champions, one after another
    pub fn reports(&self, characters: &[Character]) -> Result<Vec<CharacterReport>> {
        characters.iter().map(|c| self.report(c)).collect()
    }

    /// Roster, then detail reports for whatever `selection` picks out of it
    pub fn run(&self, selection: &Selection) -> Result<ScrapeSummary> {
        let roster = self.roster()?;
        let skipped = roster.skipped;
        let plan = selection.apply(roster.items)?;

        if !plan.targets.is_empty() {
            log::info!("Scraping details for {} of {} champions", plan.targets.len(), plan.listed.len());
        }
        let reports = self.reports(&plan.targets)?;

        Ok(ScrapeSummary { characters: plan.listed, skipped, reports })
    }
}

/// Which roster rows to list and which champions to scrape in detail
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Slugs to scrape in detail, looked up in the full roster
    pub champions: Vec<String>,

    /// Scrape every listed champion in detail
    pub details: bool,

    /// Keep only the first N roster rows
    pub limit: Option<usize>,
}

/// Outcome of applying a [`Selection`] to a roster
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub listed: Vec<Character>,
    pub targets: Vec<Character>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: add a champion to scrape in detail
    pub fn champion(mut self, slug: impl Into<String>) -> Self {
        self.champions.push(slug.into());
        self
    }

    /// Builder method: scrape every listed champion in detail
    pub fn details(mut self, details: bool) -> Self {
        self.details = details;
        self
    }

    /// Builder method: cap the number of listed roster rows
    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Split a roster into listed rows and detail targets
    ///
    /// The limit applies before `details` picks its targets. Named champions are found in the
    /// whole roster, so a limit never turns a valid slug into an error.
    pub fn apply(&self, mut roster: Vec<Character>) -> Result<Plan> {
        let named = select_characters(&roster, &self.champions)?;

        if let Some(limit) = self.limit {
            roster.truncate(limit);
        }

        let targets = if !named.is_empty() {
            named
        } else if self.details {
            roster.clone()
        } else {
            Vec::new()
        };

        Ok(Plan { listed: roster, targets })
    }
}

/// Pick champions out of a roster by slug, in the order requested
pub fn select_characters(roster: &[Character], slugs: &[String]) -> Result<Vec<Character>> {
    slugs
        .iter()
        .map(|slug| {
            roster
                .iter()
                .find(|c| c.slug.eq_ignore_ascii_case(slug))
                .cloned()
                .ok_or_else(|| ScrapeError::missing(format!("champion '{}' in roster", slug)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(slugs: &[&str]) -> Vec<Character> {
        slugs.iter().map(|s| Character::from_link(s.to_uppercase(), format!("/ru/champions/builds/{}", s))).collect()
    }

    fn slugs(characters: &[Character]) -> Vec<&str> {
        characters.iter().map(|c| c.slug.as_str()).collect()
    }

    #[test]
    fn test_details_respect_limit() {
        let plan = Selection::new().details(true).limit(Some(2)).apply(roster(&["ahri", "kindred", "thresh"])).unwrap();

        assert_eq!(slugs(&plan.listed), vec!["ahri", "kindred"]);
        assert_eq!(slugs(&plan.targets), vec!["ahri", "kindred"]);
    }

    #[test]
    fn test_named_champions_ignore_limit() {
        let plan = Selection::new().champion("thresh").limit(Some(1)).apply(roster(&["ahri", "kindred", "thresh"])).unwrap();

        assert_eq!(slugs(&plan.listed), vec!["ahri"]);
        assert_eq!(slugs(&plan.targets), vec!["thresh"]);
    }

    #[test]
    fn test_no_details_by_default() {
        let plan = Selection::new().limit(Some(0)).apply(roster(&["ahri", "kindred"])).unwrap();

        assert!(plan.listed.is_empty());
        assert!(plan.targets.is_empty());

        let plan = Selection::new().apply(roster(&["ahri", "kindred"])).unwrap();
        assert_eq!(slugs(&plan.listed), vec!["ahri", "kindred"]);
        assert!(plan.targets.is_empty());
    }

    #[test]
    fn test_unknown_champion_is_an_error() {
        let err = Selection::new().champion("teemo").apply(roster(&["ahri"])).unwrap_err();
        assert!(matches!(err, ScrapeError::ElementNotFound(_)));
    }

    #[test]
    fn test_select_characters() {
        let roster = vec![
            Character::from_link("Ари", "/ru/champions/builds/ahri"),
            Character::from_link("Киндред", "/ru/champions/builds/kindred"),
        ];

        let picked = select_characters(&roster, &["Kindred".to_string(), "ahri".to_string()]).unwrap();
        assert_eq!(picked.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(), vec!["Киндред", "Ари"]);

        assert!(select_characters(&roster, &["teemo".to_string()]).is_err());
    }
}
