//! Plain records produced by the extractors

pub mod build;
pub mod character;
pub mod report;
pub mod skills;

pub use build::{BuildCategory, BuildEntry, Extraction, ItemBuilds};
pub use character::{Character, Kda, Role, slug_from_link};
pub use report::{CharacterReport, OverviewStats, ScrapeSummary};
pub use skills::{MAX_LEVEL, SkillOrder};
