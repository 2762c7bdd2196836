use crate::dom::selector;
use crate::error::{Result, ScrapeError};
use scraper::{ElementRef, Html};

/// Which rows of a table carry data: `skip_head` rows are dropped from the top, `skip_tail` from the bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    pub skip_head: usize,
    pub skip_tail: usize,
}

impl RowRange {
    /// Only the header row is dropped
    pub const HEADER: RowRange = RowRange { skip_head: 1, skip_tail: 0 };

    /// Header and trailing "show more" footer are dropped
    pub const HEADER_AND_FOOTER: RowRange = RowRange { skip_head: 1, skip_tail: 1 };

    /// Every row is data
    pub const ALL: RowRange = RowRange { skip_head: 0, skip_tail: 0 };

    pub fn new(skip_head: usize, skip_tail: usize) -> Self {
        Self { skip_head, skip_tail }
    }

    /// Apply the range to a row list; short tables yield nothing
    pub fn apply<T>(&self, rows: Vec<T>) -> Vec<T> {
        let end = rows.len().saturating_sub(self.skip_tail);
        if self.skip_head >= end {
            return Vec::new();
        }
        rows.into_iter().take(end).skip(self.skip_head).collect()
    }
}

/// Find the `index`-th table matching `css` (e.g. `table.sortable_table`)
pub fn find_table<'a>(document: &'a Html, css: &str, index: usize) -> Result<ElementRef<'a>> {
    let sel = selector(css)?;
    document
        .select(&sel)
        .nth(index)
        .ok_or_else(|| ScrapeError::missing(format!("{}[{}]", css, index)))
}

/// Rows of `table` restricted to `range`
pub fn table_rows<'a>(table: ElementRef<'a>, range: RowRange) -> Result<Vec<ElementRef<'a>>> {
    let sel = selector("tr")?;
    Ok(range.apply(table.select(&sel).collect()))
}

/// Direct `td` children of a row
pub fn row_cells<'a>(row: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name().eq_ignore_ascii_case("td"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLES: &str = r#"
        <table class="sortable_table"><tr><th>h</th></tr><tr><td>a1</td><td>a2</td></tr><tr><td>more</td></tr></table>
        <table class="sortable_table other"><tr><th>h</th></tr><tr><td>b1</td></tr><tr><td>b2</td></tr></table>
    "#;

    #[test]
    fn test_row_range_apply() {
        let rows = vec![0, 1, 2, 3, 4];

        assert_eq!(RowRange::HEADER.apply(rows.clone()), vec![1, 2, 3, 4]);
        assert_eq!(RowRange::HEADER_AND_FOOTER.apply(rows.clone()), vec![1, 2, 3]);
        assert_eq!(RowRange::ALL.apply(rows.clone()), rows);
        assert!(RowRange::new(3, 3).apply(rows).is_empty());
        assert!(RowRange::HEADER_AND_FOOTER.apply(vec![0]).is_empty());
    }

    #[test]
    fn test_find_table_by_index() {
        let doc = Html::parse_document(TABLES);

        let second = find_table(&doc, "table.sortable_table", 1).unwrap();
        assert!(second.value().classes().any(|c| c == "other"));

        let err = find_table(&doc, "table.sortable_table", 2).unwrap_err();
        assert_eq!(err.to_string(), "Element not found: table.sortable_table[2]");
    }

    #[test]
    fn test_rows_and_cells() {
        let doc = Html::parse_document(TABLES);
        let table = find_table(&doc, "table.sortable_table", 0).unwrap();

        let rows = table_rows(table, RowRange::HEADER_AND_FOOTER).unwrap();
        assert_eq!(rows.len(), 1);

        let cells = row_cells(rows[0]);
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[1].text().collect::<String>(), "a2");
    }
}
