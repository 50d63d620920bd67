//! Hit location tables used to spread damage over a body.

/// Maps a location roll to a body part name.
pub trait LocationTable {
    fn name(&self) -> &str;
    /// Sides of the die rolled to pick a location.
    fn die_size(&self) -> u32;
    fn locate(&self, roll: u32) -> &str;
}

pub const UNKNOWN_LOCATION: &str = "Unknown";

/// Inclusive ranges checked in insertion order, the first match wins.
/// Rolls outside every range land on [UNKNOWN_LOCATION].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeLocationTable {
    name: String,
    die_size: u32,
    ranges: Vec<(u32, u32, String)>,
}

impl RangeLocationTable {
    pub fn new(name: impl Into<String>, die_size: u32) -> Self {
        Self {
            name: name.into(),
            die_size,
            ranges: Vec::new(),
        }
    }

    pub fn with_location(mut self, start: u32, end: u32, location: impl Into<String>) -> Self {
        self.ranges.push((start, end, location.into()));
        self
    }

    /// The d20 humanoid table.
    pub fn human() -> Self {
        Self::new("Human", 20)
            .with_location(1, 3, "Right Leg")
            .with_location(4, 6, "Left Leg")
            .with_location(7, 9, "Abdomen")
            .with_location(10, 12, "Chest")
            .with_location(13, 15, "Right Arm")
            .with_location(16, 18, "Left Arm")
            .with_location(19, 20, "Head")
    }
}

impl LocationTable for RangeLocationTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn die_size(&self) -> u32 {
        self.die_size
    }

    fn locate(&self, roll: u32) -> &str {
        self.ranges
            .iter()
            .find(|(start, end, _)| (*start..=*end).contains(&roll))
            .map_or(UNKNOWN_LOCATION, |(_, _, location)| location.as_str())
    }
}
