use thiserror::Error;

/// Errors produced while turning a formula into rollable terms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    #[error("`{term}` has a die with zero sides")]
    ZeroSides { term: String },
    #[error("`{term}` rolls zero dice")]
    ZeroDice { term: String },
    #[error("`{literal}` is too large to be a dice count, die size or modifier")]
    NumberTooLarge { literal: String },
    #[error("`{term}` rolls more than {max} dice at once")]
    TooManyDice { term: String, max: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DifficultyError {
    #[error("unknown difficulty `{0}`")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompareError {
    /// Tier ranks are only comparable between tests resolved in tiered mode.
    #[error("opposed tests can only compare outcomes resolved in tiered mode")]
    NotTiered,
}
