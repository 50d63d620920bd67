mod formula;

pub use formula::MAX_DICE_PER_GROUP;

use crate::error::FormulaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// `+`, also implied when a term has no sign.
    Plus,
    /// `-`
    Minus,
}

impl Sign {
    pub fn apply(self, value: i64) -> i64 {
        match self {
            Sign::Plus => value,
            Sign::Minus => -value,
        }
    }
}

/// `{count}d{sides}`\
/// A group of identical dice, rolled and summed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceGroup {
    pub(crate) count: u32,
    pub(crate) sides: u32,
}

impl DiceGroup {
    /// Creates a new dice group.
    /// Fails when either number is zero or more than [MAX_DICE_PER_GROUP]
    /// dice are requested.
    pub fn new(count: u32, sides: u32) -> Result<Self, FormulaError> {
        let term = || format!("{count}d{sides}");

        if sides == 0 {
            return Err(FormulaError::ZeroSides { term: term() });
        }
        if count == 0 {
            return Err(FormulaError::ZeroDice { term: term() });
        }
        if count > MAX_DICE_PER_GROUP {
            return Err(FormulaError::TooManyDice {
                term: term(),
                max: MAX_DICE_PER_GROUP,
            });
        }

        Ok(Self { count, sides })
    }

    pub fn count(&self) -> u32 {
        self.count
    }
    pub fn sides(&self) -> u32 {
        self.sides
    }
}

/// One signed component of a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    /// `+2d6`, `-d4`
    Dice(Sign, DiceGroup),
    /// `+3`, `-1`
    Modifier(Sign, u32),
}

impl Term {
    pub fn sign(&self) -> Sign {
        match self {
            Term::Dice(sign, _) | Term::Modifier(sign, _) => *sign,
        }
    }
}

/// Input the scanner could not turn into a term.
/// Skipped input never changes the terms around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A run of characters that matched neither a dice group nor a number.
    /// `position` is a char offset into the formula after whitespace removal
    /// and lowercasing.
    Skipped { position: usize, text: String },
}

/// A parsed, not yet rolled, dice formula such as `2d6+1d4-3`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Formula {
    pub(crate) terms: Vec<Term>,
    pub(crate) warnings: Vec<ParseWarning>,
}

impl Formula {
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            Sign::Plus => "+",
            Sign::Minus => "-",
        };
        write!(f, "{str}")
    }
}

impl std::fmt::Display for DiceGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.sign() == Sign::Minus {
            write!(f, "-")?;
        }
        match self {
            Term::Dice(_, group) => write!(f, "{group}"),
            Term::Modifier(_, value) => write!(f, "{value}"),
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 && term.sign() == Sign::Plus {
                write!(f, "+")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}
