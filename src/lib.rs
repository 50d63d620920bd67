//! Roll additive dice formulas and resolve percentile skill tests.
//!
//! ```rust
//! # use tiered_roller::{roll_with, resolve_with, compare, Mode, ScriptedRolls, Tier};
//! # use rand::rngs::StdRng;
//! # use rand::SeedableRng;
//! #
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Any rand::Rng can be used as the source of dice.
//! let mut rng = StdRng::seed_from_u64(1);
//! let rolled = roll_with("2d6 + 1d4 - 3", &mut rng)?;
//! println!("{}", rolled.total);
//!
//! // Or replay fixed values for the dice.
//! let mut script = ScriptedRolls::new([5, 2, 4]);
//! let rolled = roll_with("2d6 + 1d4 - 3", &mut script)?;
//! assert_eq!(rolled.total, 8);
//!
//! // Roll 18 against a skill of 20 in tiered mode.
//! let yours = resolve_with(20, Some(18), Mode::Tiered, &mut rng);
//! assert_eq!(yours.tier, Tier::StandardSuccess);
//!
//! // Compare it to an opponent who rolled 25 against the same skill.
//! let theirs = resolve_with(20, Some(25), Mode::Tiered, &mut rng);
//! println!("{:?}", compare(&yours, 20, &theirs, 20)?); // YouWinByDegrees(1)
//! # Ok(())
//! # }
//! ```

pub mod damage;
pub mod error;
mod evaluate;
pub mod location;
mod parse;
pub mod skill;

pub use damage::{roll_damage, DamageReport, Hit};
pub use error::{CompareError, DifficultyError, FormulaError};
pub use evaluate::formula::{Evaluation, RolledTerm};
pub use evaluate::source::{DieSource, ScriptedRolls};
pub use location::{LocationTable, RangeLocationTable};
pub use parse::{DiceGroup, Formula, ParseWarning, Sign, Term, MAX_DICE_PER_GROUP};
pub use skill::{
    compare, effective_skill, Difficulty, Mode, OpposedReport, OpposedTest, OpposedVerdict,
    SkillTest, TestOutcome, Thresholds, Tier,
};

/// Parses the formula without rolling any dice.
pub fn parse(formula: &str) -> Result<Formula, FormulaError> {
    Formula::parse(formula)
}

/// Parses the formula and rolls it with `rand::thread_rng()`.
pub fn roll(formula: &str) -> Result<Evaluation, FormulaError> {
    let formula = Formula::parse(formula)?;
    Ok(formula.roll(&mut rand::thread_rng()))
}

/// Same as `roll()` but allows you to choose where the dice come from.
pub fn roll_with(formula: &str, source: &mut impl DieSource) -> Result<Evaluation, FormulaError> {
    let formula = Formula::parse(formula)?;
    Ok(formula.roll(source))
}

/// Resolves a skill test, drawing the percentile roll from `rand::thread_rng()`
/// unless `forced_roll` is given.
pub fn resolve(skill: i64, forced_roll: Option<u32>, mode: Mode) -> TestOutcome {
    skill::resolve_with(skill, forced_roll, mode, &mut rand::thread_rng())
}

/// Same as `resolve()` but allows you to choose where the roll comes from.
pub fn resolve_with(
    skill: i64,
    forced_roll: Option<u32>,
    mode: Mode,
    source: &mut impl DieSource,
) -> TestOutcome {
    skill::resolve_with(skill, forced_roll, mode, source)
}
