use crate::dom::{self, RowRange};
use crate::error::Result;
use crate::model::SkillOrder;
use scraper::Html;

/// Compact skill order table on the build page
pub const SKILLS_TABLE: &str = "table.skillsOrdersTableSmall";

/// Class marking the level at which an ability is skilled
const SKILLED_CLASS: &str = "active";

/// Read the skill order grid. Each row starts with the ability icon, followed by one cell per level.
pub fn extract_skill_order(document: &Html) -> Result<SkillOrder> {
    let table = dom::find_table(document, SKILLS_TABLE, 0)?;
    let mut order = SkillOrder::new();

    for row in dom::table_rows(table, RowRange::ALL)? {
        let cells = dom::row_cells(row);
        let Some((label_cell, levels)) = cells.split_first() else {
            continue;
        };

        let label = match dom::image_alts(*label_cell, None)?.into_iter().next() {
            Some(alt) => alt,
            None => {
                let text = dom::text_of(*label_cell);
                if text.is_empty() { format!("Skill {}", order.rows() + 1) } else { text }
            }
        };

        let skilled = levels.iter().map(|cell| dom::has_class(*cell, SKILLED_CLASS)).collect();
        order.push_row(label, skilled);
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MAX_LEVEL;

    /// Table with one row per ability, `picks[level - 1]` naming the row skilled at that level
    fn skills_html(picks: &[usize]) -> String {
        let mut html = String::from(r#"<table class="skillsOrdersTableSmall">"#);
        for (row, key) in ["Q", "W", "E", "R"].iter().enumerate() {
            html.push_str(&format!(r#"<tr><td class="skillCell"><img alt="{}"></td>"#, key));
            for level in 0..MAX_LEVEL {
                let class = if picks.get(level) == Some(&row) { "level active" } else { "level" };
                html.push_str(&format!(r#"<td class="{}">{}</td>"#, class, level + 1));
            }
            html.push_str("</tr>");
        }
        html.push_str("</table>");
        html
    }

    #[test]
    fn test_active_cells_become_true() {
        let picks = [0, 1, 2, 0, 0, 3, 0, 2, 0, 2, 3, 2, 2, 1, 1, 3, 1, 1];
        let doc = Html::parse_document(&skills_html(&picks));

        let order = extract_skill_order(&doc).unwrap();

        assert_eq!(order.abilities, vec!["Q", "W", "E", "R"]);
        for (row, cells) in order.grid.iter().enumerate() {
            for (level, &skilled) in cells.iter().enumerate() {
                assert_eq!(skilled, picks[level] == row, "row {} level {}", row, level + 1);
            }
        }
        for level in 1..=MAX_LEVEL {
            assert_eq!(order.ability_at(level), Some(picks[level - 1]));
        }
    }

    #[test]
    fn test_text_label_fallback() {
        let doc = Html::parse_document(
            r#"<table class="skillsOrdersTableSmall"><tr><td> Q </td><td class="active"></td></tr><tr><td></td><td></td></tr></table>"#,
        );

        let order = extract_skill_order(&doc).unwrap();

        assert_eq!(order.abilities, vec!["Q", "Skill 2"]);
        assert!(order.is_skilled(0, 1));
    }

    #[test]
    fn test_missing_skill_table() {
        let doc = Html::parse_document("<table class=\"data_table\"></table>");

        assert!(extract_skill_order(&doc).is_err());
    }
}
