use crate::dom::{self, RowRange};
use crate::error::{Result, ScrapeError};
use crate::model::{Character, Extraction, Kda, Role, slug_from_link};
use crate::scrape::SiteConfig;
use scraper::{ElementRef, Html};

/// Champion listing on the builds page
pub const ROSTER_TABLE: &str = "table.data_table";

/// Read every champion row of the roster page.
///
/// Rows missing a link, name, known role, one of the three rate bars, the KDA spans or the
/// pentakill cell are skipped and counted.
pub fn extract_roster(document: &Html, site: &SiteConfig) -> Result<Extraction<Character>> {
    let table = dom::find_table(document, ROSTER_TABLE, 0)?;
    let mut extraction = Extraction::new();

    for (i, row) in dom::table_rows(table, RowRange::HEADER)?.into_iter().enumerate() {
        match character_from_row(row, site) {
            Ok(character) => extraction.push(character),
            Err(e) => {
                log::debug!("Skipping roster row {}: {}", i + 1, e);
                extraction.skip();
            }
        }
    }

    Ok(extraction)
}

/// Build a [`Character`] from one roster row
pub fn character_from_row(row: ElementRef<'_>, site: &SiteConfig) -> Result<Character> {
    let href = dom::find_first(row, "a[href]")?
        .and_then(|a| a.value().attr("href"))
        .ok_or_else(|| ScrapeError::missing("a[href]"))?;
    let link = site.absolute_url(href);

    let name = required_text(row, "span.name")?;

    let roles = required_text(row, "div.txt i")?
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(|label| Role::from_label(label).ok_or_else(|| ScrapeError::invalid("role", label)))
        .collect::<Result<Vec<_>>>()?;
    if roles.is_empty() {
        return Err(ScrapeError::missing("role label"));
    }

    let bars = dom::row_cells(row)
        .into_iter()
        .filter(|cell| matches!(dom::find_first(*cell, "progressbar"), Ok(Some(_))))
        .collect::<Vec<_>>();
    let [popularity, win_rate, ban_rate] = match bars.as_slice() {
        &[a, b, c, ..] => [a, b, c],
        _ => return Err(ScrapeError::missing(format!("3 rate columns, found {}", bars.len()))),
    };

    let kda = Kda::new(
        required_number(row, "span.kills", "kills")?,
        required_number(row, "span.deaths", "deaths")?,
        required_number(row, "span.assists", "assists")?,
    );

    Ok(Character {
        slug: slug_from_link(&link).to_string(),
        link,
        name,
        roles,
        popularity: dom::progress_value(popularity, "popularity")?,
        win_rate: dom::progress_value(win_rate, "win rate")?,
        ban_rate: dom::progress_value(ban_rate, "ban rate")?,
        kda,
        pentakills: required_number(row, "td.pentakills", "pentakills")?,
    })
}

fn required_text(row: ElementRef<'_>, css: &str) -> Result<String> {
    let text = dom::find_first(row, css)?.map(dom::text_of).unwrap_or_default();
    if text.is_empty() { Err(ScrapeError::missing(css)) } else { Ok(text) }
}

fn required_number(row: ElementRef<'_>, css: &str, field: &str) -> Result<f64> {
    let text = required_text(row, css)?;
    dom::parse_decimal(&text).ok_or_else(|| ScrapeError::invalid(field, text))
}
