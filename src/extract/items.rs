use crate::dom::RowRange;
use crate::error::Result;
use crate::extract::{BuildTableLayout, extract_build_table};
use crate::model::{BuildCategory, ItemBuilds};
use scraper::Html;

/// The items page holds one sortable table per category; the last row of each is a "show more" footer
pub const ITEM_TABLES: BuildTableLayout = BuildTableLayout {
    table: "table.sortable_table",
    index: 0,
    rows: RowRange::HEADER_AND_FOOTER,
    leading_cells: 0,
    image_class: Some("requireTooltip"),
};

/// Item builds of every category plus the rows that could not be read
#[derive(Debug, Clone, Default)]
pub struct ItemTables {
    pub builds: ItemBuilds,
    pub skipped: usize,
}

/// Read the five item tables of a champion's items page
pub fn extract_items(document: &Html) -> Result<ItemTables> {
    let mut tables = ItemTables::default();

    for category in BuildCategory::ALL {
        let extraction = extract_build_table(document, ITEM_TABLES.nth(category.table_index()))?;
        tables.skipped += extraction.skipped;
        tables.builds.insert(category, extraction.items);
    }

    Ok(tables)
}
