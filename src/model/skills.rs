use serde::{Deserialize, Serialize};

/// Levels shown in the skill order table
pub const MAX_LEVEL: usize = 18;

/// Skill order grid: one row per ability, one column per champion level.
///
/// `grid[row][level - 1]` is true when the ability in `row` is skilled at `level`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SkillOrder {
    /// Ability names, one per grid row
    pub abilities: Vec<String>,
    pub grid: Vec<Vec<bool>>,
}

impl SkillOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an ability row; cells beyond [`MAX_LEVEL`] are dropped and short rows padded
    pub fn push_row(&mut self, ability: impl Into<String>, mut cells: Vec<bool>) {
        cells.resize(MAX_LEVEL, false);
        self.abilities.push(ability.into());
        self.grid.push(cells);
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    /// Whether the ability in `row` is skilled at `level` (1-based)
    pub fn is_skilled(&self, row: usize, level: usize) -> bool {
        level >= 1 && self.grid.get(row).and_then(|cells| cells.get(level - 1)).copied().unwrap_or(false)
    }

    /// Row index of the ability skilled at `level`, if exactly one is
    pub fn ability_at(&self, level: usize) -> Option<usize> {
        let mut rows = (0..self.rows()).filter(|&row| self.is_skilled(row, level));
        let first = rows.next()?;
        if rows.next().is_some() { None } else { Some(first) }
    }

    /// Ability names in the order they are skilled, one entry per level that has a pick
    pub fn sequence(&self) -> Vec<&str> {
        (1..=MAX_LEVEL)
            .filter_map(|level| self.ability_at(level))
            .map(|row| self.abilities[row].as_str())
            .collect()
    }

    /// Number of levels at which the ability in `row` is skilled
    pub fn points_in(&self, row: usize) -> usize {
        self.grid.get(row).map(|cells| cells.iter().filter(|&&c| c).count()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(levels: &[usize]) -> Vec<bool> {
        let mut row = vec![false; MAX_LEVEL];
        for &level in levels {
            row[level - 1] = true;
        }
        row
    }

    fn standard_order() -> SkillOrder {
        let mut order = SkillOrder::new();
        order.push_row("Q", cells(&[1, 4, 5, 7, 9]));
        order.push_row("W", cells(&[2, 14, 15, 17, 18]));
        order.push_row("E", cells(&[3, 8, 10, 12, 13]));
        order.push_row("R", cells(&[6, 11, 16]));
        order
    }

    #[test]
    fn test_one_ability_per_level() {
        let order = standard_order();

        for level in 1..=MAX_LEVEL {
            assert!(order.ability_at(level).is_some(), "level {} has no single ability", level);
        }
        assert_eq!(order.ability_at(6), Some(3));
    }

    #[test]
    fn test_sequence_and_points() {
        let order = standard_order();

        assert_eq!(&order.sequence()[..6], &["Q", "W", "E", "Q", "Q", "R"]);
        assert_eq!(order.points_in(0), 5);
        assert_eq!(order.points_in(3), 3);
        assert_eq!(order.points_in(9), 0);
    }

    #[test]
    fn test_push_row_normalizes_width() {
        let mut order = SkillOrder::new();
        order.push_row("Q", vec![true]);
        order.push_row("W", vec![false; MAX_LEVEL + 3]);

        assert!(order.grid.iter().all(|row| row.len() == MAX_LEVEL));
        assert!(order.is_skilled(0, 1));
        assert!(!order.is_skilled(0, 0));
        assert!(!order.is_skilled(5, 1));
    }

    #[test]
    fn test_ambiguous_level() {
        let mut order = SkillOrder::new();
        order.push_row("Q", cells(&[1]));
        order.push_row("W", cells(&[1]));

        assert_eq!(order.ability_at(1), None);
        assert_eq!(order.ability_at(2), None);
    }
}
