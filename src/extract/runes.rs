use crate::dom::RowRange;
use crate::error::Result;
use crate::extract::{BuildTableLayout, extract_build_table};
use crate::model::{BuildEntry, Extraction};
use scraper::Html;

/// Rune pages, laid out like the spells table
pub const RUNES_TABLE: BuildTableLayout = BuildTableLayout {
    table: "table.data_table",
    index: 0,
    rows: RowRange::HEADER,
    leading_cells: 1,
    image_class: None,
};

pub fn extract_runes(document: &Html) -> Result<Extraction<BuildEntry>> {
    extract_build_table(document, RUNES_TABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_runes_skips_unreadable_rows() {
        let html = r#"<table class="data_table">
            <tr><th></th><th>Runes</th><th>Popularity</th><th>Win rate</th></tr>
            <tr><td>1</td><td><img alt="Conqueror"><img alt="Triumph"><img alt="Legend: Alacrity"></td>
                <td><progressbar data-value="0.33"></progressbar></td>
                <td><progressbar data-value="0.52"></progressbar></td></tr>
            <tr><td>2</td><td></td>
                <td><progressbar data-value="0.01"></progressbar></td>
                <td><progressbar data-value="0.4"></progressbar></td></tr>
        </table>"#;
        let doc = Html::parse_document(html);

        let runes = extract_runes(&doc).unwrap();

        assert_eq!(runes.len(), 1);
        assert_eq!(runes.skipped, 1);
        assert_eq!(runes.items[0].names, vec!["Conqueror", "Triumph", "Legend: Alacrity"]);
    }
}
