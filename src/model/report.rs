use crate::model::{build::{BuildEntry, ItemBuilds},
                   character::Character,
                   skills::SkillOrder};
use serde::{Deserialize, Serialize};

/// Headline percentages from the top of a champion's build page
///
/// Values are percentages on a 0-100 scale (`51.4` is 51.4%), unlike the roster's
/// fractional rates on [`Character`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct OverviewStats {
    pub popularity: f64,
    pub win_rate: f64,
    pub ban_rate: f64,
}

/// Everything scraped for a single champion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CharacterReport {
    pub character: Character,
    pub overview: OverviewStats,
    pub skills: SkillOrder,
    pub spells: Vec<BuildEntry>,
    pub runes: Vec<BuildEntry>,
    pub items: ItemBuilds,

    /// Table rows that could not be read across all of the champion's pages
    #[serde(default)]
    pub skipped_rows: usize,
}

/// Result of a whole run: the listed roster, its unreadable rows and any detail reports
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScrapeSummary {
    pub characters: Vec<Character>,

    /// Roster rows that could not be read
    pub skipped: usize,

    pub reports: Vec<CharacterReport>,
}
