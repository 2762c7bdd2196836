use crate::model::Role;

/// Default statistics site
pub const DEFAULT_BASE_URL: &str = "https://www.leagueofgraphs.com";

/// Default site language; role labels in the roster are localized accordingly
pub const DEFAULT_LOCALE: &str = "ru";

/// Where the site is and which language to read it in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub base_url: String,
    pub locale: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), locale: DEFAULT_LOCALE.to_string() }
    }
}

impl SiteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the site root
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_url(&base_url.into()).trim_end_matches('/').to_string();
        self
    }

    /// Builder method: set the site language
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into().trim_matches('/').to_string();
        self
    }

    /// Roster listing of every champion
    pub fn roster_url(&self) -> String {
        format!("{}/{}/champions/builds", self.base_url, self.locale)
    }

    /// Build overview page (headline stats, skill order)
    pub fn builds_url(&self, slug: &str, role: Option<Role>) -> String {
        self.champion_page("builds", slug, role)
    }

    pub fn items_url(&self, slug: &str, role: Option<Role>) -> String {
        self.champion_page("items", slug, role)
    }

    pub fn spells_url(&self, slug: &str, role: Option<Role>) -> String {
        self.champion_page("spells", slug, role)
    }

    pub fn runes_url(&self, slug: &str, role: Option<Role>) -> String {
        self.champion_page("runes", slug, role)
    }

    /// Detail pages take an optional trailing role segment (`.../items/kindred/jungle`)
    fn champion_page(&self, kind: &str, slug: &str, role: Option<Role>) -> String {
        let page = format!("{}/{}/champions/{}/{}", self.base_url, self.locale, kind, slug);
        match role {
            Some(role) => format!("{}/{}", page, role.slug()),
            None => page,
        }
    }

    /// Resolve a link found on a page against the site root
    pub fn absolute_url(&self, href: &str) -> String {
        absolute_url(&self.base_url, href)
    }
}

/// Join a possibly relative `href` onto `base`
pub fn absolute_url(base: &str, href: &str) -> String {
    let href = href.trim();
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    if let Some(rest) = href.strip_prefix("//") {
        return format!("https://{}", rest);
    }
    format!("{}/{}", base.trim_end_matches('/'), href.trim_start_matches('/'))
}

/// Normalize an incomplete URL by adding missing protocol
pub fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();

    // If already has a protocol, return as-is
    if trimmed.starts_with("http://")
        || trimmed.starts_with("https://")
        || trimmed.starts_with("file://")
        || trimmed.starts_with("data:")
        || trimmed.starts_with("about:")
    {
        return trimmed.to_string();
    }

    // localhost special case - use http by default
    if trimmed.starts_with("localhost") || trimmed.starts_with("127.0.0.1") {
        return format!("http://{}", trimmed);
    }

    format!("https://{}", trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let site = SiteConfig::default();

        assert_eq!(site.roster_url(), "https://www.leagueofgraphs.com/ru/champions/builds");
        assert_eq!(site.builds_url("kindred", None), "https://www.leagueofgraphs.com/ru/champions/builds/kindred");
        assert_eq!(site.items_url("kindred", None), "https://www.leagueofgraphs.com/ru/champions/items/kindred");
        assert_eq!(site.spells_url("kindred", None), "https://www.leagueofgraphs.com/ru/champions/spells/kindred");
        assert_eq!(site.runes_url("kindred", None), "https://www.leagueofgraphs.com/ru/champions/runes/kindred");
    }

    #[test]
    fn test_role_urls() {
        let site = SiteConfig::default();

        assert_eq!(
            site.builds_url("kindred", Some(Role::Jungle)),
            "https://www.leagueofgraphs.com/ru/champions/builds/kindred/jungle"
        );
        assert_eq!(
            site.items_url("ahri", Some(Role::Mid)),
            "https://www.leagueofgraphs.com/ru/champions/items/ahri/middle"
        );
        assert_eq!(
            site.spells_url("thresh", Some(Role::Support)),
            "https://www.leagueofgraphs.com/ru/champions/spells/thresh/support"
        );
        assert_eq!(site.runes_url("jinx", Some(Role::Adc)), "https://www.leagueofgraphs.com/ru/champions/runes/jinx/adc");
    }

    #[test]
    fn test_custom_site() {
        let site = SiteConfig::new().base_url("localhost:8080/").locale("/en/");

        assert_eq!(site.base_url, "http://localhost:8080");
        assert_eq!(site.roster_url(), "http://localhost:8080/en/champions/builds");
    }

    #[test]
    fn test_absolute_url() {
        let base = "https://www.leagueofgraphs.com";

        assert_eq!(
            absolute_url(base, "/ru/champions/builds/kindred"),
            "https://www.leagueofgraphs.com/ru/champions/builds/kindred"
        );
        assert_eq!(absolute_url(base, "https://other.site/x"), "https://other.site/x");
        assert_eq!(absolute_url(base, "//cdn.site/x"), "https://cdn.site/x");
        assert_eq!(absolute_url("https://a.b/", "c"), "https://a.b/c");
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("  example.com  "), "https://example.com");
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("127.0.0.1:3000"), "http://127.0.0.1:3000");
        assert_eq!(normalize_url("file:///tmp/site"), "file:///tmp/site");
    }
}
