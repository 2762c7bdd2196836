use serde::{Deserialize, Serialize};
use std::fmt;

/// Position a champion is played in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Adc,
    Support,
}

/// Localized role labels as printed in the roster table (lowercased)
const ROLE_LABELS: &[(&str, Role)] = &[
    ("top", Role::Top),
    ("топ", Role::Top),
    ("верхняя линия", Role::Top),
    ("jungler", Role::Jungle),
    ("jungle", Role::Jungle),
    ("лесник", Role::Jungle),
    ("лес", Role::Jungle),
    ("mid", Role::Mid),
    ("middle", Role::Mid),
    ("мид", Role::Mid),
    ("мидер", Role::Mid),
    ("средняя линия", Role::Mid),
    ("ad carry", Role::Adc),
    ("adc", Role::Adc),
    ("bot", Role::Adc),
    ("стрелок", Role::Adc),
    ("нижняя линия", Role::Adc),
    ("support", Role::Support),
    ("саппорт", Role::Support),
    ("поддержка", Role::Support),
];

impl Role {
    pub const ALL: [Role; 5] = [Role::Top, Role::Jungle, Role::Mid, Role::Adc, Role::Support];

    /// Normalize a roster label (any supported locale) into a role
    pub fn from_label(label: &str) -> Option<Role> {
        let normalized = label.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
        ROLE_LABELS.iter().find(|(text, _)| *text == normalized).map(|(_, role)| *role)
    }

    /// Path segment the site uses for per-role pages
    pub fn slug(&self) -> &'static str {
        match self {
            Role::Top => "top",
            Role::Jungle => "jungle",
            Role::Mid => "middle",
            Role::Adc => "adc",
            Role::Support => "support",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Top => "Top",
            Role::Jungle => "Jungle",
            Role::Mid => "Mid",
            Role::Adc => "AD Carry",
            Role::Support => "Support",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Average kills, deaths and assists per game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Kda {
    pub kills: f64,
    pub deaths: f64,
    pub assists: f64,
}

impl Kda {
    pub fn new(kills: f64, deaths: f64, assists: f64) -> Self {
        Self { kills, deaths, assists }
    }

    /// `(kills + assists) / deaths`; a deathless record counts as `kills + assists`
    pub fn ratio(&self) -> f64 {
        let takedowns = self.kills + self.assists;
        if self.deaths == 0.0 { takedowns } else { takedowns / self.deaths }
    }
}

/// One champion as listed in the roster table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Character {
    pub name: String,

    /// Last path segment of [`link`](Self::link)
    pub slug: String,

    /// Absolute URL of the champion's build page
    pub link: String,

    pub roles: Vec<Role>,

    /// Share of games, as a fraction of one (`0.062` is 6.2%)
    pub popularity: f64,

    /// Fraction of one, like [`popularity`](Self::popularity)
    pub win_rate: f64,

    /// Fraction of one, like [`popularity`](Self::popularity)
    pub ban_rate: f64,

    pub kda: Kda,

    /// Pentakills per game
    pub pentakills: f64,
}

impl Character {
    /// Minimal record for a champion known only by its link; metrics default to zero
    pub fn from_link(name: impl Into<String>, link: impl Into<String>) -> Self {
        let link = link.into();
        Self {
            name: name.into(),
            slug: slug_from_link(&link).to_string(),
            link,
            roles: Vec::new(),
            popularity: 0.0,
            win_rate: 0.0,
            ban_rate: 0.0,
            kda: Kda::default(),
            pentakills: 0.0,
        }
    }

    /// Roles joined for display
    pub fn roles_label(&self) -> String {
        self.roles.iter().map(Role::label).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}] - {}", self.name, self.slug, self.roles_label())
    }
}

/// Last non-empty path segment of a link, without query string
pub fn slug_from_link(link: &str) -> &str {
    let path = link.split(['?', '#']).next().unwrap_or(link);
    path.trim_end_matches('/').rsplit('/').next().unwrap_or(path)
}
