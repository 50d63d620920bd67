use std::str::FromStr;

use crate::error::DifficultyError;

/// Named multiplier applied to a skill rating before a test is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Impossible,
    Herculean,
    Formidable,
    Hard,
    #[default]
    Standard,
    Easy,
    VeryEasy,
    Automatic,
}

impl Difficulty {
    pub const ALL: [Difficulty; 8] = [
        Difficulty::Impossible,
        Difficulty::Herculean,
        Difficulty::Formidable,
        Difficulty::Hard,
        Difficulty::Standard,
        Difficulty::Easy,
        Difficulty::VeryEasy,
        Difficulty::Automatic,
    ];

    pub fn multiplier(self) -> f64 {
        match self {
            Difficulty::Impossible => 0.0,
            Difficulty::Herculean => 0.1,
            Difficulty::Formidable => 0.5,
            Difficulty::Hard => 0.67,
            Difficulty::Standard => 1.0,
            Difficulty::Easy => 1.5,
            Difficulty::VeryEasy => 2.0,
            Difficulty::Automatic => 100.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Impossible => "impossible",
            Difficulty::Herculean => "herculean",
            Difficulty::Formidable => "formidable",
            Difficulty::Hard => "hard",
            Difficulty::Standard => "standard",
            Difficulty::Easy => "easy",
            Difficulty::VeryEasy => "very_easy",
            Difficulty::Automatic => "automatic",
        }
    }
}

/// `ceil((base + modifier) * multiplier)`
///
/// Nothing is clamped: a negative result is handed to the resolver as is.
/// Results past the range of `i64` saturate at its bounds.
pub fn effective_skill(base: i64, modifier: i64, difficulty: Difficulty) -> i64 {
    (base.saturating_add(modifier) as f64 * difficulty.multiplier()).ceil() as i64
}

impl FromStr for Difficulty {
    type Err = DifficultyError;

    /// Case insensitive, words may be joined with `_`, `-` or a space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        Difficulty::ALL
            .into_iter()
            .find(|difficulty| difficulty.name() == name)
            .ok_or_else(|| DifficultyError::Unknown(s.to_string()))
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
