use crate::dom;
use crate::error::{Result, ScrapeError};
use crate::model::OverviewStats;
use scraper::Html;

fn graph_value(document: &Html, id: &str, field: &str) -> Result<f64> {
    let sel = dom::selector(&format!("#{}", id))?;
    let element = document.select(&sel).next().ok_or_else(|| ScrapeError::missing(format!("#{}", id)))?;

    let text = dom::text_of(element);
    dom::parse_decimal(&text).ok_or_else(|| ScrapeError::invalid(field, text))
}

/// Headline popularity, win rate and ban rate donuts of a build page
pub fn extract_overview(document: &Html) -> Result<OverviewStats> {
    Ok(OverviewStats {
        popularity: graph_value(document, "graphDD1", "popularity")?,
        win_rate: graph_value(document, "graphDD2", "win rate")?,
        ban_rate: graph_value(document, "graphDD3", "ban rate")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_overview() {
        let doc = Html::parse_document(
            r#"<div id="graphDD1"> 6.2% </div><div id="graphDD2">
                51.4%
            </div><div id="graphDD3">1,9%</div>"#,
        );

        let stats = extract_overview(&doc).unwrap();

        assert_eq!(stats, OverviewStats { popularity: 6.2, win_rate: 51.4, ban_rate: 1.9 });
    }

    #[test]
    fn test_missing_or_garbled_graph() {
        let missing = Html::parse_document(r#"<div id="graphDD1">6.2%</div><div id="graphDD2">51.4%</div>"#);
        assert!(matches!(extract_overview(&missing), Err(ScrapeError::ElementNotFound(_))));

        let garbled = Html::parse_document(
            r#"<div id="graphDD1">6.2%</div><div id="graphDD2">n/a</div><div id="graphDD3">1%</div>"#,
        );
        assert!(matches!(extract_overview(&garbled), Err(ScrapeError::InvalidValue { .. })));
    }
}
