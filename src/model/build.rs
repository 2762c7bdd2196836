use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of a build table: the items/spells/runes shown plus how often and how well they do
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuildEntry {
    /// Names in the order they appear in the row
    pub names: Vec<String>,
    pub popularity: f64,
    pub win_rate: f64,
}

impl BuildEntry {
    pub fn new(names: Vec<String>, popularity: f64, win_rate: f64) -> Self {
        Self { names, popularity, win_rate }
    }
}

/// Item tables on the items page, in page order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BuildCategory {
    Started,
    Main,
    Late,
    Boots,
    Global,
}

impl BuildCategory {
    pub const ALL: [BuildCategory; 5] =
        [BuildCategory::Started, BuildCategory::Main, BuildCategory::Late, BuildCategory::Boots, BuildCategory::Global];

    /// Position of the category's table among the page's sortable tables
    pub fn table_index(&self) -> usize {
        match self {
            BuildCategory::Started => 0,
            BuildCategory::Main => 1,
            BuildCategory::Late => 2,
            BuildCategory::Boots => 3,
            BuildCategory::Global => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BuildCategory::Started => "Starting items",
            BuildCategory::Main => "Core items",
            BuildCategory::Late => "Late game items",
            BuildCategory::Boots => "Boots",
            BuildCategory::Global => "Most popular items",
        }
    }
}

impl fmt::Display for BuildCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Item build entries grouped by category, kept in page order
pub type ItemBuilds = IndexMap<BuildCategory, Vec<BuildEntry>>;

/// Rows extracted from a table together with the number of rows that could not be read
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Extraction<T> {
    pub items: Vec<T>,
    pub skipped: usize,
}

impl<T> Default for Extraction<T> {
    fn default() -> Self {
        Self { items: Vec::new(), skipped: 0 }
    }
}

impl<T> Extraction<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn skip(&mut self) {
        self.skipped += 1;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rows looked at, read or not
    pub fn total(&self) -> usize {
        self.items.len() + self.skipped
    }
}
