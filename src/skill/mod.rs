mod difficulty;
mod opposed;
mod resolve;
mod tier;

pub use difficulty::*;
pub use opposed::*;
pub use resolve::*;
pub use tier::*;

use crate::evaluate::source::DieSource;

/// A skill rating together with everything that adjusts it before the roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillTest {
    pub rating: i64,
    pub difficulty: Difficulty,
    /// Flat bonus or penalty added before the difficulty multiplier.
    pub modifier: i64,
    /// Roll to use instead of drawing one.
    pub forced_roll: Option<u32>,
}

impl SkillTest {
    /// A standard difficulty test without modifiers.
    pub fn new(rating: i64) -> Self {
        Self {
            rating,
            difficulty: Difficulty::Standard,
            modifier: 0,
            forced_roll: None,
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_modifier(mut self, modifier: i64) -> Self {
        self.modifier = modifier;
        self
    }

    pub fn with_forced_roll(mut self, roll: u32) -> Self {
        self.forced_roll = Some(roll);
        self
    }

    pub fn effective_skill(&self) -> i64 {
        effective_skill(self.rating, self.modifier, self.difficulty)
    }

    pub fn resolve_with(&self, mode: Mode, source: &mut impl DieSource) -> TestOutcome {
        resolve_with(self.effective_skill(), self.forced_roll, mode, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::source::ScriptedRolls;

    #[test]
    fn test_adjustments_apply_before_resolving() {
        let test = SkillTest::new(40)
            .with_modifier(5)
            .with_difficulty(Difficulty::Formidable)
            .with_forced_roll(23);

        assert_eq!(test.effective_skill(), 23);

        let outcome = test.resolve_with(Mode::Binary, &mut ScriptedRolls::default());
        assert_eq!(outcome.roll, 23);
        assert_eq!(outcome.tier, Tier::StandardSuccess);
    }

    #[test]
    fn test_impossible_difficulty_always_fails() {
        let test = SkillTest::new(90).with_difficulty(Difficulty::Impossible);
        let mut source = ScriptedRolls::new(1..=100);

        for _ in 1..=100 {
            let outcome = test.resolve_with(Mode::Tiered, &mut source);
            assert!(!outcome.success, "rolled {}", outcome.roll);
        }
    }
}
