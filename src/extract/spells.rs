use crate::dom::RowRange;
use crate::error::Result;
use crate::extract::{BuildTableLayout, extract_build_table};
use crate::model::{BuildEntry, Extraction};
use scraper::Html;

/// Summoner spell pairs; the first column is the rank
pub const SPELLS_TABLE: BuildTableLayout = BuildTableLayout {
    table: "table.data_table.sortable_table",
    index: 0,
    rows: RowRange::HEADER,
    leading_cells: 1,
    image_class: None,
};

pub fn extract_spells(document: &Html) -> Result<Extraction<BuildEntry>> {
    extract_build_table(document, SPELLS_TABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_spells() {
        let html = r#"<table class="data_table sortable_table">
            <tr><th></th><th>Spells</th><th>Popularity</th><th>Win rate</th></tr>
            <tr><td>1</td><td><img src="f.png" alt="Flash"><img src="s.png" alt="Smite"></td>
                <td><progressbar data-value="0.871"></progressbar></td>
                <td><progressbar data-value="0.509"></progressbar></td></tr>
            <tr><td>2</td><td><img alt="Ghost"><img alt="Smite"></td>
                <td><progressbar data-value="0.1"></progressbar></td>
                <td><progressbar data-value="0.497"></progressbar></td></tr>
        </table>"#;
        let doc = Html::parse_document(html);

        let spells = extract_spells(&doc).unwrap();

        assert_eq!(spells.len(), 2);
        assert_eq!(spells.items[0].names, vec!["Flash", "Smite"]);
        assert_eq!(spells.items[1].popularity, 0.1);
        assert_eq!(spells.items[1].win_rate, 0.497);
    }
}
