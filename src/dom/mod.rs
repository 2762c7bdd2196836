//! DOM helpers over parsed HTML
//!
//! Thin layer over [`scraper`] used by the extractors:
//! - selector parsing that reports errors instead of panicking
//! - table lookup by class and position, row ranges, cell splitting
//! - cell readers for progress bars, image alt lists and percentage text

pub mod cell;
pub mod table;

pub use cell::{image_alts, parse_decimal, progress_value};
pub use table::{RowRange, find_table, row_cells, table_rows};

use crate::error::{Result, ScrapeError};
use scraper::{ElementRef, Selector};

/// Parse a CSS selector
pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ScrapeError::InvalidSelector { selector: css.to_string(), reason: e.to_string() })
}

/// Text content of an element with whitespace collapsed
pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().flat_map(str::split_whitespace).collect::<Vec<_>>().join(" ")
}

/// Check if element has a specific class
pub fn has_class(element: ElementRef<'_>, class_name: &str) -> bool {
    element.value().classes().any(|c| c == class_name)
}

/// First descendant matching `css`
pub fn find_first<'a>(element: ElementRef<'a>, css: &str) -> Result<Option<ElementRef<'a>>> {
    let sel = selector(css)?;
    Ok(element.select(&sel).next())
}
