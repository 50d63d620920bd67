use tracing::debug;

use super::tier::{Mode, TestOutcome, Tier};
use crate::evaluate::source::DieSource;

/// Rolls at or below each threshold reach the matching tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// `ceil(skill / 10)`
    pub critical: i64,
    /// `ceil(skill / 2)`
    pub grand: i64,
    /// `ceil(skill * 2 / 3)`
    pub superb: i64,
    /// `skill`
    pub standard: i64,
    /// `ceil(skill * 1.5)`
    pub modest: i64,
    /// `skill * 2`
    pub paltry: i64,
}

impl Thresholds {
    /// Thresholds past the range of `i64` saturate at its bounds.
    pub fn for_skill(skill: i64) -> Self {
        Self {
            critical: scaled(skill, 1, 10),
            grand: scaled(skill, 1, 2),
            superb: scaled(skill, 2, 3),
            standard: skill,
            modest: scaled(skill, 3, 2),
            paltry: scaled(skill, 2, 1),
        }
    }
}

/// `ceil(skill * numerator / denominator)` for a positive denominator.
fn scaled(skill: i64, numerator: i64, denominator: i64) -> i64 {
    let product = i128::from(skill) * i128::from(numerator);
    let denominator = i128::from(denominator);
    let ceiling = product / denominator + i128::from(product % denominator > 0);

    i64::try_from(ceiling).unwrap_or(if ceiling > 0 { i64::MAX } else { i64::MIN })
}

/// Resolves a percentile test against an effective skill rating.
///
/// `forced_roll` is used verbatim when given, otherwise a d100 is drawn from
/// `source`. Rolls of 96 and up always fail before any threshold is looked
/// at: 100 fumbles, 99 fumbles unless the skill is at least 100.
///
/// The skill is not validated. A skill of zero or less makes every threshold
/// zero or negative so any roll in `1..=100` fails.
pub fn resolve_with(
    skill: i64,
    forced_roll: Option<u32>,
    mode: Mode,
    source: &mut impl DieSource,
) -> TestOutcome {
    let roll = forced_roll.unwrap_or_else(|| source.roll_die(100));
    let tier = tier_for(skill, roll, mode);

    debug!(skill, roll, forced = forced_roll.is_some(), ?mode, ?tier, "resolved skill test");
    TestOutcome::new(roll, tier, mode)
}

fn tier_for(skill: i64, roll: u32, mode: Mode) -> Tier {
    match roll {
        100 => return Tier::Fumble,
        99 if skill < 100 => return Tier::Fumble,
        96..=99 => return Tier::Failure,
        _ => {}
    }

    let t = Thresholds::for_skill(skill);
    let roll = i64::from(roll);

    let binary = [
        (t.critical, Tier::CriticalSuccess),
        (t.standard, Tier::StandardSuccess),
    ];
    let tiered = [
        (t.critical, Tier::CriticalSuccess),
        (t.grand, Tier::GrandSuccess),
        (t.superb, Tier::SuperbSuccess),
        (t.standard, Tier::StandardSuccess),
        (t.modest, Tier::ModestSuccess),
        (t.paltry, Tier::PaltrySuccess),
    ];

    // Checked top down in this fixed order, never sorted by value.
    let ladder: &[(i64, Tier)] = match mode {
        Mode::Binary => &binary,
        Mode::Tiered => &tiered,
    };

    ladder
        .iter()
        .find(|(threshold, _)| roll <= *threshold)
        .map_or(Tier::Failure, |(_, tier)| *tier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::source::ScriptedRolls;

    fn forced(skill: i64, roll: u32, mode: Mode) -> Tier {
        resolve_with(skill, Some(roll), mode, &mut ScriptedRolls::default()).tier
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(
            Thresholds::for_skill(20),
            Thresholds {
                critical: 2,
                grand: 10,
                superb: 14,
                standard: 20,
                modest: 30,
                paltry: 40,
            }
        );
        assert_eq!(
            Thresholds::for_skill(55),
            Thresholds {
                critical: 6,
                grand: 28,
                superb: 37,
                standard: 55,
                modest: 83,
                paltry: 110,
            }
        );
    }

    #[test]
    fn test_thresholds_for_negative_skill() {
        assert_eq!(
            Thresholds::for_skill(-15),
            Thresholds {
                critical: -1,
                grand: -7,
                superb: -10,
                standard: -15,
                modest: -22,
                paltry: -30,
            }
        );
    }

    #[test]
    fn test_tiered_ladder() {
        #[rustfmt::skip]
        let inputs = [
            (1, Tier::CriticalSuccess),
            (2, Tier::CriticalSuccess),
            (5, Tier::GrandSuccess),
            (10, Tier::GrandSuccess),
            (12, Tier::SuperbSuccess),
            (18, Tier::StandardSuccess),
            (25, Tier::ModestSuccess),
            (35, Tier::PaltrySuccess),
            (41, Tier::Failure),
            (95, Tier::Failure),
        ];

        for (roll, expected) in inputs {
            assert_eq!(forced(20, roll, Mode::Tiered), expected, "roll {roll}");
        }
    }

    #[test]
    fn test_binary_ladder() {
        #[rustfmt::skip]
        let inputs = [
            (1, Tier::CriticalSuccess),
            (2, Tier::CriticalSuccess),
            (3, Tier::StandardSuccess),
            (20, Tier::StandardSuccess),
            (21, Tier::Failure),
            (35, Tier::Failure),
        ];

        for (roll, expected) in inputs {
            assert_eq!(forced(20, roll, Mode::Binary), expected, "roll {roll}");
        }
    }

    #[test]
    fn test_fixed_rolls() {
        for mode in [Mode::Binary, Mode::Tiered] {
            for skill in [-10, 0, 50, 99, 100, 150, 1000] {
                assert_eq!(forced(skill, 100, mode), Tier::Fumble);
                for roll in 96..=98 {
                    assert_eq!(forced(skill, roll, mode), Tier::Failure);
                }
            }

            assert_eq!(forced(50, 99, mode), Tier::Fumble);
            assert_eq!(forced(99, 99, mode), Tier::Fumble);
            assert_eq!(forced(100, 99, mode), Tier::Failure);
            assert_eq!(forced(150, 99, mode), Tier::Failure);
        }
    }

    #[test]
    fn test_high_skill_still_fails_on_fixed_rolls() {
        // 1000 would otherwise make 97 a critical success.
        assert_eq!(forced(1000, 95, Mode::Tiered), Tier::CriticalSuccess);
        assert_eq!(forced(1000, 97, Mode::Tiered), Tier::Failure);
    }

    #[test]
    fn test_thresholds_saturate_for_extreme_skill() {
        assert_eq!(
            Thresholds::for_skill(i64::MAX),
            Thresholds {
                critical: i64::MAX / 10 + 1,
                grand: i64::MAX / 2 + 1,
                superb: 6_148_914_691_236_517_205,
                standard: i64::MAX,
                modest: i64::MAX,
                paltry: i64::MAX,
            }
        );
        assert_eq!(Thresholds::for_skill(i64::MIN).paltry, i64::MIN);
        assert_eq!(Thresholds::for_skill(i64::MIN).modest, i64::MIN);
    }

    #[test]
    fn test_extreme_skill_resolves() {
        for skill in [i64::MAX, i64::MAX / 2 + 1] {
            for mode in [Mode::Binary, Mode::Tiered] {
                assert_eq!(forced(skill, 50, mode), Tier::CriticalSuccess);
                assert_eq!(forced(skill, 99, mode), Tier::Failure);
                assert_eq!(forced(skill, 100, mode), Tier::Fumble);
            }
        }
        for mode in [Mode::Binary, Mode::Tiered] {
            assert_eq!(forced(i64::MIN, 1, mode), Tier::Failure);
        }
    }

    #[test]
    fn test_non_positive_skill_always_fails() {
        for mode in [Mode::Binary, Mode::Tiered] {
            for skill in [0, -1, -40] {
                for roll in 1..=95 {
                    assert_eq!(forced(skill, roll, mode), Tier::Failure);
                }
            }
        }
    }

    #[test]
    fn test_modes_agree_on_critical_and_failure() {
        for skill in [1, 7, 20, 33, 64, 100, 140] {
            for roll in 1..=100 {
                let binary = forced(skill, roll, Mode::Binary);
                let tiered = forced(skill, roll, Mode::Tiered);

                assert_eq!(
                    binary == Tier::CriticalSuccess,
                    tiered == Tier::CriticalSuccess,
                    "skill {skill} roll {roll}"
                );
                if !tiered.is_success() {
                    assert_eq!(binary, tiered, "skill {skill} roll {roll}");
                }
            }
        }
    }

    #[test]
    fn test_draws_percentile_when_not_forced() {
        let mut source = ScriptedRolls::new([42]);
        let outcome = resolve_with(50, None, Mode::Binary, &mut source);

        assert_eq!(
            outcome,
            TestOutcome {
                roll: 42,
                tier: Tier::StandardSuccess,
                success: true,
                mode: Mode::Binary,
            }
        );
    }

    #[test]
    fn test_forced_roll_skips_the_source() {
        let mut source = ScriptedRolls::new([1, 2]);
        resolve_with(50, Some(60), Mode::Tiered, &mut source);

        assert_eq!(source.roll_die(100), 1);
    }
}
