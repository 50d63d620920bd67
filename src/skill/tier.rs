/// Graded result of a skill test, declared from worst to best so the derived
/// ordering follows [Tier::rank].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Fumble,
    Failure,
    PaltrySuccess,
    ModestSuccess,
    StandardSuccess,
    SuperbSuccess,
    GrandSuccess,
    CriticalSuccess,
}

impl Tier {
    pub const ALL: [Tier; 8] = [
        Tier::Fumble,
        Tier::Failure,
        Tier::PaltrySuccess,
        Tier::ModestSuccess,
        Tier::StandardSuccess,
        Tier::SuperbSuccess,
        Tier::GrandSuccess,
        Tier::CriticalSuccess,
    ];

    /// Position on the ladder, 0 for a fumble up to 7 for a critical success.
    /// Differences between ranks are the "degrees" of an opposed test.
    pub fn rank(self) -> u8 {
        match self {
            Tier::Fumble => 0,
            Tier::Failure => 1,
            Tier::PaltrySuccess => 2,
            Tier::ModestSuccess => 3,
            Tier::StandardSuccess => 4,
            Tier::SuperbSuccess => 5,
            Tier::GrandSuccess => 6,
            Tier::CriticalSuccess => 7,
        }
    }

    pub fn is_success(self) -> bool {
        !matches!(self, Tier::Fumble | Tier::Failure)
    }
}

/// How many tiers a test can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Critical success, standard success or failure.
    #[default]
    Binary,
    /// The full seven step success ladder.
    Tiered,
}

/// The result of resolving one skill test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestOutcome {
    /// The percentile roll, forced or drawn.
    pub roll: u32,
    pub tier: Tier,
    /// Always equal to `tier.is_success()`.
    pub success: bool,
    pub mode: Mode,
}

impl TestOutcome {
    pub fn new(roll: u32, tier: Tier, mode: Mode) -> Self {
        Self {
            roll,
            tier,
            success: tier.is_success(),
            mode,
        }
    }
}
