use tracing::{debug, trace};

use super::source::DieSource;
use crate::parse::{DiceGroup, Formula, ParseWarning, Sign, Term};

/// A term after its dice have been rolled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RolledTerm {
    Dice {
        sign: Sign,
        count: u32,
        sides: u32,
        /// Individual results in the order they were rolled.
        rolls: Vec<u32>,
        /// `sign * sum(rolls)`
        subtotal: i64,
    },
    Modifier {
        sign: Sign,
        value: u32,
    },
}

impl RolledTerm {
    pub fn sign(&self) -> Sign {
        match self {
            RolledTerm::Dice { sign, .. } | RolledTerm::Modifier { sign, .. } => *sign,
        }
    }

    pub fn subtotal(&self) -> i64 {
        match self {
            RolledTerm::Dice { subtotal, .. } => *subtotal,
            RolledTerm::Modifier { sign, value } => sign.apply(i64::from(*value)),
        }
    }

    /// The dice results of this term, empty for modifiers.
    pub fn rolls(&self) -> &[u32] {
        match self {
            RolledTerm::Dice { rolls, .. } => rolls,
            RolledTerm::Modifier { .. } => &[],
        }
    }
}

/// The outcome of rolling a [Formula].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Evaluation {
    pub total: i64,
    /// Terms in the order they appear in the formula.
    pub terms: Vec<RolledTerm>,
    /// Input that was skipped while parsing the formula.
    pub warnings: Vec<ParseWarning>,
}

impl Evaluation {
    /// Every die rolled, term by term.
    pub fn rolls(&self) -> impl Iterator<Item = u32> + '_ {
        self.terms.iter().flat_map(|term| term.rolls().iter().copied())
    }
}

impl Formula {
    /// Rolls every dice group in the formula and sums all the terms.
    pub fn roll(&self, source: &mut impl DieSource) -> Evaluation {
        let terms: Vec<_> = self
            .terms
            .iter()
            .map(|term| match *term {
                Term::Dice(sign, group) => roll_group(sign, group, source),
                Term::Modifier(sign, value) => RolledTerm::Modifier { sign, value },
            })
            .collect();

        let total = terms.iter().map(RolledTerm::subtotal).sum();
        debug!(formula = %self, total, "rolled formula");

        Evaluation {
            total,
            terms,
            warnings: self.warnings.clone(),
        }
    }
}

fn roll_group(sign: Sign, group: DiceGroup, source: &mut impl DieSource) -> RolledTerm {
    let rolls: Vec<u32> = (0..group.count)
        .map(|_| source.roll_die(group.sides))
        .collect();
    trace!(dice = %group, ?rolls, "rolled dice group");

    let sum: i64 = rolls.iter().copied().map(i64::from).sum();

    RolledTerm::Dice {
        sign,
        count: group.count,
        sides: group.sides,
        rolls,
        subtotal: sign.apply(sum),
    }
}
