//! Page extractors
//!
//! Each extractor takes a parsed document and maps the tables the site lays out into the
//! records in [`crate::model`]. Missing tables are errors; rows that cannot be read are
//! skipped and counted in [`Extraction::skipped`].

pub mod items;
pub mod overview;
pub mod roster;
pub mod runes;
pub mod skills;
pub mod spells;

pub use items::{ItemTables, extract_items};
pub use overview::extract_overview;
pub use roster::extract_roster;
pub use runes::extract_runes;
pub use skills::extract_skill_order;
pub use spells::extract_spells;

use crate::dom::{self, RowRange};
use crate::error::{Result, ScrapeError};
use crate::model::{BuildEntry, Extraction};
use scraper::{ElementRef, Html};

/// Where a build table sits on its page and how its rows are laid out
#[derive(Debug, Clone, Copy)]
pub struct BuildTableLayout {
    /// CSS selector matching the candidate tables
    pub table: &'static str,

    /// Which of the matching tables to read
    pub index: usize,

    pub rows: RowRange,

    /// Cells before the content cell (rank column)
    pub leading_cells: usize,

    /// Only images with this class name contribute names
    pub image_class: Option<&'static str>,
}

impl BuildTableLayout {
    /// Builder method: read another table with the same layout
    pub fn nth(mut self, index: usize) -> Self {
        self.index = index;
        self
    }
}

/// Read one build table: content cell names, then popularity and win rate progress bars
pub fn extract_build_table(document: &Html, layout: BuildTableLayout) -> Result<Extraction<BuildEntry>> {
    let table = dom::find_table(document, layout.table, layout.index)?;
    let mut extraction = Extraction::new();

    for (i, row) in dom::table_rows(table, layout.rows)?.into_iter().enumerate() {
        match build_entry(row, &layout) {
            Ok(entry) => extraction.push(entry),
            Err(e) => {
                log::debug!("Skipping row {} of {}[{}]: {}", i, layout.table, layout.index, e);
                extraction.skip();
            }
        }
    }

    Ok(extraction)
}

fn build_entry(row: ElementRef<'_>, layout: &BuildTableLayout) -> Result<BuildEntry> {
    let cells = dom::row_cells(row);
    let first = layout.leading_cells;

    let [content, popularity, win_rate] = match cells.get(first..first + 3) {
        Some(&[a, b, c]) => [a, b, c],
        _ => return Err(ScrapeError::missing(format!("3 data cells after {} leading cells", first))),
    };

    let names = dom::image_alts(content, layout.image_class)?;
    if names.is_empty() {
        return Err(ScrapeError::missing("named images in content cell"));
    }

    Ok(BuildEntry::new(
        names,
        dom::progress_value(popularity, "popularity")?,
        dom::progress_value(win_rate, "win rate")?,
    ))
}
