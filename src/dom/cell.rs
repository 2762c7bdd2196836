use crate::dom::selector;
use crate::error::{Result, ScrapeError};
use scraper::ElementRef;

/// Numeric `data-value` of the first `progressbar` inside `cell`
pub fn progress_value(cell: ElementRef<'_>, field: &str) -> Result<f64> {
    let sel = selector("progressbar")?;
    let bar = cell
        .select(&sel)
        .next()
        .ok_or_else(|| ScrapeError::missing(format!("progressbar for {}", field)))?;

    let raw = bar
        .value()
        .attr("data-value")
        .ok_or_else(|| ScrapeError::missing(format!("progressbar[data-value] for {}", field)))?;

    raw.trim().parse::<f64>().map_err(|_| ScrapeError::invalid(field, raw))
}

/// Alt texts of the images inside `cell`, in document order.
///
/// With `class_filter` only images carrying that class count (item icons are mixed with
/// decorative arrows on the items page).
pub fn image_alts(cell: ElementRef<'_>, class_filter: Option<&str>) -> Result<Vec<String>> {
    let css = match class_filter {
        Some(class) => format!("img.{}", class),
        None => "img".to_string(),
    };
    let sel = selector(&css)?;

    Ok(cell
        .select(&sel)
        .filter_map(|img| img.value().attr("alt"))
        .map(str::trim)
        .filter(|alt| !alt.is_empty())
        .map(str::to_string)
        .collect())
}

/// Parse numbers as printed on the site: `"52.3%"`, `"52,3 %"` and `"52.3"` all give `52.3`
pub fn parse_decimal(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .trim_end_matches('%')
        .trim()
        .chars()
        .map(|c| if c == ',' { '.' } else { c })
        .filter(|c| !c.is_whitespace())
        .collect();

    cleaned.parse::<f64>().ok()
}
