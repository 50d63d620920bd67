use std::cmp::Ordering;

use tracing::debug;

use super::tier::{Mode, TestOutcome};
use super::SkillTest;
use crate::error::CompareError;
use crate::evaluate::source::DieSource;

/// Who won a head to head test, seen from "your" side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpposedVerdict {
    BothFail,
    /// You landed this many tiers above your opponent.
    YouWinByDegrees(u8),
    /// Your opponent landed this many tiers above you.
    OpponentWinsByDegrees(u8),
    /// Same tier, won on the tie-break.
    YouWinMarginal,
    /// Same tier, lost on the tie-break.
    OpponentWinsMarginal,
    TrueTie,
}

/// Compares two tiered outcomes.
///
/// Equal tiers are broken by the higher raw roll, then by the higher
/// effective skill. The roll comparison is numeric: a higher roll wins the
/// tie-break even though lower rolls reach better tiers.
///
/// Ranks only line up between tiered outcomes, so binary ones are rejected.
pub fn compare(
    yours: &TestOutcome,
    your_skill: i64,
    theirs: &TestOutcome,
    their_skill: i64,
) -> Result<OpposedVerdict, CompareError> {
    if yours.mode != Mode::Tiered || theirs.mode != Mode::Tiered {
        return Err(CompareError::NotTiered);
    }

    Ok(verdict_for(yours, your_skill, theirs, their_skill))
}

fn verdict_for(
    yours: &TestOutcome,
    your_skill: i64,
    theirs: &TestOutcome,
    their_skill: i64,
) -> OpposedVerdict {
    if !yours.success && !theirs.success {
        return OpposedVerdict::BothFail;
    }

    match yours.tier.rank().cmp(&theirs.tier.rank()) {
        Ordering::Greater => {
            OpposedVerdict::YouWinByDegrees(yours.tier.rank() - theirs.tier.rank())
        }
        Ordering::Less => {
            OpposedVerdict::OpponentWinsByDegrees(theirs.tier.rank() - yours.tier.rank())
        }
        Ordering::Equal => match yours
            .roll
            .cmp(&theirs.roll)
            .then(your_skill.cmp(&their_skill))
        {
            Ordering::Greater => OpposedVerdict::YouWinMarginal,
            Ordering::Less => OpposedVerdict::OpponentWinsMarginal,
            Ordering::Equal => OpposedVerdict::TrueTie,
        },
    }
}

/// Both sides of an opposed test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpposedTest {
    pub yours: SkillTest,
    pub theirs: SkillTest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpposedReport {
    pub yours: TestOutcome,
    pub your_skill: i64,
    pub theirs: TestOutcome,
    pub their_skill: i64,
    pub verdict: OpposedVerdict,
}

impl OpposedTest {
    pub fn new(yours: SkillTest, theirs: SkillTest) -> Self {
        Self { yours, theirs }
    }

    /// Resolves both tests in tiered mode, yours first, and compares them.
    pub fn resolve_with(&self, source: &mut impl DieSource) -> OpposedReport {
        let your_skill = self.yours.effective_skill();
        let their_skill = self.theirs.effective_skill();
        let yours = self.yours.resolve_with(Mode::Tiered, source);
        let theirs = self.theirs.resolve_with(Mode::Tiered, source);

        let verdict = verdict_for(&yours, your_skill, &theirs, their_skill);
        debug!(?verdict, "resolved opposed test");

        OpposedReport {
            yours,
            your_skill,
            theirs,
            their_skill,
            verdict,
        }
    }
}
