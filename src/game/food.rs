use super::session_rng::SessionRng;
use super::settings::RuleSet;
use super::types::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoodKind {
    Regular,
    Bonus,
    SpeedBoost,
}

impl FoodKind {
    pub fn points(&self) -> u32 {
        match self {
            FoodKind::Regular => 1,
            FoodKind::Bonus => 3,
            FoodKind::SpeedBoost => 5,
        }
    }

    /// Color tag for renderers.
    pub fn color(&self) -> &'static str {
        match self {
            FoodKind::Regular => "red",
            FoodKind::Bonus => "gold",
            FoodKind::SpeedBoost => "purple",
        }
    }

    pub fn table(rule_set: RuleSet) -> &'static [FoodKind] {
        match rule_set {
            RuleSet::Classic => &[FoodKind::Regular, FoodKind::SpeedBoost],
            RuleSet::Arcade => &[FoodKind::Regular, FoodKind::Bonus, FoodKind::SpeedBoost],
        }
    }

    pub fn pick(rule_set: RuleSet, rng: &mut SessionRng) -> FoodKind {
        let table = Self::table(rule_set);
        table[rng.random_range(0..table.len())]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    pub position: Point,
    pub kind: FoodKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_table_has_no_bonus_food() {
        assert!(!FoodKind::table(RuleSet::Classic).contains(&FoodKind::Bonus));
        assert_eq!(FoodKind::table(RuleSet::Classic).len(), 2);
    }

    #[test]
    fn test_arcade_table_has_all_kinds() {
        assert_eq!(FoodKind::table(RuleSet::Arcade).len(), 3);
    }

    #[test]
    fn test_pick_only_returns_table_entries() {
        let mut rng = SessionRng::new(42);
        for _ in 0..100 {
            let kind = FoodKind::pick(RuleSet::Classic, &mut rng);
            assert!(FoodKind::table(RuleSet::Classic).contains(&kind));
        }
    }

    #[test]
    fn test_point_values() {
        assert_eq!(FoodKind::Regular.points(), 1);
        assert_eq!(FoodKind::Bonus.points(), 3);
        assert_eq!(FoodKind::SpeedBoost.points(), 5);
    }
}
