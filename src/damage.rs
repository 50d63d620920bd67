//! Rolling several hits of the same damage formula and spreading them over
//! hit locations.

use tracing::debug;

use crate::evaluate::{formula::Evaluation, source::DieSource};
use crate::location::LocationTable;
use crate::parse::Formula;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub evaluation: Evaluation,
    pub location_roll: u32,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DamageReport {
    pub hits: Vec<Hit>,
    /// Damage summed per location, in the order locations were first hit.
    pub totals: Vec<(String, i64)>,
}

impl DamageReport {
    pub fn total(&self) -> i64 {
        self.totals.iter().map(|(_, damage)| damage).sum()
    }

    fn add(&mut self, hit: Hit) {
        let damage = hit.evaluation.total;
        match self.totals.iter_mut().find(|(location, _)| *location == hit.location) {
            Some((_, total)) => *total += damage,
            None => self.totals.push((hit.location.clone(), damage)),
        }
        self.hits.push(hit);
    }
}

/// Rolls `formula` once per hit, then rolls the table's die to find where
/// that hit landed.
pub fn roll_damage(
    formula: &Formula,
    hits: u32,
    table: &impl LocationTable,
    source: &mut impl DieSource,
) -> DamageReport {
    let mut report = DamageReport::default();

    for _ in 0..hits {
        let evaluation = formula.roll(source);
        let location_roll = source.roll_die(table.die_size().max(1));
        let location = table.locate(location_roll).to_string();

        report.add(Hit {
            evaluation,
            location_roll,
            location,
        });
    }

    debug!(
        formula = %formula,
        hits,
        table = table.name(),
        total = report.total(),
        "rolled damage"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::source::ScriptedRolls;
    use crate::location::RangeLocationTable;

    #[test]
    fn test_hits_are_grouped_by_location() {
        let formula = Formula::parse("1d6+1").unwrap();
        let table = RangeLocationTable::human();
        // damage, location, damage, location, ...
        let mut source = ScriptedRolls::new([4, 20, 2, 11, 6, 19]);

        let report = roll_damage(&formula, 3, &table, &mut source);

        let locations: Vec<_> = report.hits.iter().map(|hit| hit.location.as_str()).collect();
        assert_eq!(locations, ["Head", "Chest", "Head"]);
        assert_eq!(
            report.totals,
            [("Head".to_string(), 12), ("Chest".to_string(), 3)]
        );
        assert_eq!(report.total(), 15);
        assert_eq!(report.hits[1].location_roll, 11);
        assert_eq!(report.hits[1].evaluation.rolls().collect::<Vec<_>>(), [2]);
    }

    #[test]
    fn test_zero_hits() {
        let formula = Formula::parse("2d6").unwrap();
        let report = roll_damage(
            &formula,
            0,
            &RangeLocationTable::human(),
            &mut ScriptedRolls::default(),
        );

        assert_eq!(report, DamageReport::default());
    }
}
