use rand::Rng;

/// Anything that can roll a single die.
///
/// Every [rand::Rng] is a source, so `&mut rand::thread_rng()` or a seeded
/// [rand::rngs::StdRng] can be passed anywhere a source is expected.
pub trait DieSource {
    /// Returns a value in `1..=sides`. `sides` is never zero.
    fn roll_die(&mut self, sides: u32) -> u32;
}

impl<R: Rng + ?Sized> DieSource for R {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.gen_range(1..=sides)
    }
}

/// A source that replays a fixed list of values, starting over once it runs out.
///
/// Values are handed out verbatim whatever die is being rolled, an empty
/// script always rolls 1.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScriptedRolls {
    values: Vec<u32>,
    next: usize,
}

impl ScriptedRolls {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            next: 0,
        }
    }
}

impl DieSource for ScriptedRolls {
    fn roll_die(&mut self, _sides: u32) -> u32 {
        let Some(value) = self.values.get(self.next).copied() else {
            return 1;
        };
        self.next = (self.next + 1) % self.values.len();
        value
    }
}
