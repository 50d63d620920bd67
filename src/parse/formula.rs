use tracing::debug;
use winnow::{
    ascii::{digit0, digit1},
    combinator::{alt, dispatch, empty, fail, opt, separated_pair},
    token::any,
    PResult, Parser,
};

use super::{DiceGroup, Formula, ParseWarning, Sign, Term};
use crate::error::FormulaError;

/// Upper bound on the dice a single group may roll.
pub const MAX_DICE_PER_GROUP: u32 = 10_000;

/// Raw slices matched by the scanner, validated later by [Token::into_term].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'s> {
    Dice {
        sign: Sign,
        count: &'s str,
        sides: &'s str,
    },
    Modifier {
        sign: Sign,
        value: &'s str,
    },
}

impl Formula {
    /// Parses a formula like `2d6 + 1d4 - 3`.
    ///
    /// Whitespace is removed and the input is lowercased before scanning.
    /// Characters that don't belong to a term are skipped and reported as
    /// [ParseWarning]s, they never cause an error by themselves.
    pub fn parse(formula: &str) -> Result<Formula, FormulaError> {
        let normalized = normalize(formula);
        let (tokens, warnings) = scan(&normalized);

        for warning in &warnings {
            let ParseWarning::Skipped { position, text } = warning;
            debug!(formula = %normalized, position, text = %text, "skipped unrecognized input");
        }

        let terms = tokens
            .into_iter()
            .map(Token::into_term)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Formula { terms, warnings })
    }
}

fn normalize(formula: &str) -> String {
    formula
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Walks the whole input looking for terms, skipping one character whenever
/// nothing matches at the current position.
fn scan(normalized: &str) -> (Vec<Token<'_>>, Vec<ParseWarning>) {
    let mut input = normalized;
    let mut tokens = Vec::new();
    let mut warnings: Vec<ParseWarning> = Vec::new();
    let mut position = 0;
    let mut skipping = false;

    while !input.is_empty() {
        let checkpoint = input;

        if let Ok(found) = token(&mut input) {
            position += checkpoint[..checkpoint.len() - input.len()].chars().count();
            tokens.push(found);
            skipping = false;
            continue;
        }

        input = checkpoint;
        let mut chars = input.chars();
        let Some(skipped) = chars.next() else {
            break;
        };
        input = chars.as_str();

        match warnings.last_mut() {
            Some(ParseWarning::Skipped { text, .. }) if skipping => text.push(skipped),
            _ => warnings.push(ParseWarning::Skipped {
                position,
                text: skipped.to_string(),
            }),
        }
        position += 1;
        skipping = true;
    }

    (tokens, warnings)
}

fn token<'s>(input: &mut &'s str) -> PResult<Token<'s>> {
    let sign = opt(sign).parse_next(input)?.unwrap_or(Sign::Plus);

    alt((
        separated_pair(digit0, 'd', digit1).map(move |(count, sides)| Token::Dice {
            sign,
            count,
            sides,
        }),
        digit1.map(move |value| Token::Modifier { sign, value }),
    ))
    .parse_next(input)
}

fn sign(input: &mut &str) -> PResult<Sign> {
    dispatch!(any;
        '+' => empty.value(Sign::Plus),
        '-' => empty.value(Sign::Minus),
        _ => fail
    )
    .parse_next(input)
}

impl Token<'_> {
    fn into_term(self) -> Result<Term, FormulaError> {
        match self {
            Token::Dice { sign, count, sides } => {
                let count = if count.is_empty() { 1 } else { literal(count)? };
                let sides = literal(sides)?;
                Ok(Term::Dice(sign, DiceGroup::new(count, sides)?))
            }
            Token::Modifier { sign, value } => Ok(Term::Modifier(sign, literal(value)?)),
        }
    }
}

/// The scanner only hands over ASCII digits, so overflow is the only failure.
fn literal(digits: &str) -> Result<u32, FormulaError> {
    digits.parse().map_err(|_| FormulaError::NumberTooLarge {
        literal: digits.to_string(),
    })
}
