//! Static HTML output
//!
//! The page skeleton lives in `page.html`; roster rows and per-champion detail sections are
//! generated here and substituted into its `{{placeholder}}` slots.

use crate::error::Result;
use crate::model::{BuildEntry, Character, CharacterReport, MAX_LEVEL, ScrapeSummary};
use std::io::Write;
use std::path::{Path, PathBuf};

const PAGE_TEMPLATE: &str = include_str!("page.html");

/// Default location of the rendered summary
pub const DEFAULT_OUTPUT: &str = "web/champions.html";

pub const DEFAULT_TITLE: &str = "Champion builds";

/// Where rendered output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

/// Render the summary page: one roster row per character, then one section per report
pub fn render_page(title: &str, characters: &[Character], reports: &[CharacterReport]) -> String {
    let rows: String = characters.iter().map(roster_row).collect();
    let details: String = reports.iter().map(report_section).collect();
    let count = characters.len().to_string();

    fill(PAGE_TEMPLATE, &[("title", &escape_text(title)), ("count", &count), ("rows", &rows), ("details", &details)])
}

/// Pretty-printed JSON of a whole run
pub fn render_json(summary: &ScrapeSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Write rendered markup, creating parent directories as needed
pub fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    log::info!("Wrote {} bytes to {}", html.len(), path.display());
    Ok(())
}

/// Send output to its destination; `stdout` receives it for [`Destination::Stdout`]
pub fn emit(destination: &Destination, content: &str, stdout: &mut impl Write) -> Result<()> {
    match destination {
        Destination::Stdout => {
            writeln!(stdout, "{}", content)?;
            stdout.flush()?;
            Ok(())
        }
        Destination::File(path) => write_page(path, content),
    }
}

/// Substitute `{{key}}` slots in one pass; unknown slots are left as they are
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = after[..end].trim();
                match values.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => out.push_str(value),
                    None => out.push_str(&rest[start..start + 2 + end + 2]),
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Escape for element content
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape for double-quoted attribute values
pub fn escape_attr(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}

/// Progress-bar values are fractions of one
fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

fn roster_row(character: &Character) -> String {
    format!(
        "      <tr><td class=\"name\"><a href=\"#{slug}\">{name}</a></td><td>{roles}</td>\
         <td class=\"num\">{pop}</td><td class=\"num\">{win}</td><td class=\"num\">{ban}</td>\
         <td class=\"num\">{ratio:.2}</td><td class=\"num\">{penta:.2}</td></tr>\n",
        slug = escape_attr(&character.slug),
        name = escape_text(&character.name),
        roles = escape_text(&character.roles_label()),
        pop = percent(character.popularity),
        win = percent(character.win_rate),
        ban = percent(character.ban_rate),
        ratio = character.kda.ratio(),
        penta = character.pentakills,
    )
}

fn report_section(report: &CharacterReport) -> String {
    let mut html = format!(
        "  <section class=\"champion\" id=\"{id}\">\n    <h2>{heading}</h2>\n    \
         <p>Popularity {:.1}% &middot; Win rate {:.1}% &middot; Ban rate {:.1}%</p>\n",
        report.overview.popularity,
        report.overview.win_rate,
        report.overview.ban_rate,
        id = escape_attr(&report.character.slug),
        heading = escape_text(&report.character.slug),
    );

    html.push_str("    <h3>Skill order</h3>\n    <table class=\"skills\">\n");
    for (row, ability) in report.skills.abilities.iter().enumerate() {
        html.push_str(&format!("      <tr><th>{}</th>", escape_text(ability)));
        for level in 1..=MAX_LEVEL {
            if report.skills.is_skilled(row, level) {
                html.push_str(&format!("<td class=\"active\">{}</td>", level));
            } else {
                html.push_str("<td></td>");
            }
        }
        html.push_str("</tr>\n");
    }
    html.push_str("    </table>\n");

    html.push_str(&build_table("Summoner spells", &report.spells));
    html.push_str(&build_table("Runes", &report.runes));
    for (category, entries) in &report.items {
        html.push_str(&build_table(category.label(), entries));
    }

    html.push_str("  </section>\n");
    html
}

fn build_table(heading: &str, entries: &[BuildEntry]) -> String {
    let mut html = format!("    <h3>{}</h3>\n", escape_text(heading));
    if entries.is_empty() {
        html.push_str("    <p class=\"muted\">No data</p>\n");
        return html;
    }

    html.push_str("    <table>\n      <tr><th>Build</th><th>Popularity</th><th>Win rate</th></tr>\n");
    for entry in entries {
        let names = entry.names.iter().map(|n| escape_text(n)).collect::<Vec<_>>().join(" &rarr; ");
        html.push_str(&format!(
            "      <tr><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>\n",
            names,
            percent(entry.popularity),
            percent(entry.win_rate)
        ));
    }
    html.push_str("    </table>\n");
    html
}
