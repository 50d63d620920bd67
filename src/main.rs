use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use tiered_roller::{
    roll_damage, DamageReport, Difficulty, Evaluation, Formula, Mode, OpposedTest,
    OpposedVerdict, ParseWarning, RangeLocationTable, RolledTerm, Sign, SkillTest, Tier,
};

const MAX_HITS: i64 = 1_000;

#[derive(Debug, Parser)]
#[command(version, about = "Dice formulas and percentile skill tests")]
struct Cli {
    /// Seed the dice for a reproducible session.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Name used when reporting your rolls.
    #[arg(long, global = true, default_value = "You")]
    name: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Roll a dice formula such as `2d6+1d4-3`.
    Roll { formula: String },
    /// Resolve a pass/fail skill test.
    Test(TestArgs),
    /// Resolve a tiered skill test, optionally opposed.
    Tiered {
        #[command(flatten)]
        yours: TestArgs,
        #[command(flatten)]
        opponent: OpponentArgs,
    },
    /// Roll damage for one or more hits and spread it over hit locations.
    Damage {
        formula: String,
        /// Number of hits.
        #[arg(
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..=MAX_HITS)
        )]
        hits: u32,
        /// The target's species.
        #[arg(long, default_value = "human", value_parser = ["human"])]
        species: String,
    },
}

#[derive(Debug, Args)]
struct TestArgs {
    /// Your unmodified skill rating.
    #[arg(allow_negative_numbers = true)]
    skill: i64,
    /// The difficulty of the test.
    #[arg(short, long, default_value = "standard")]
    difficulty: Difficulty,
    /// Flat modifier added before the difficulty.
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    modifier: i64,
    /// Force a specific roll.
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=100))]
    roll: Option<u32>,
}

#[derive(Debug, Args)]
struct OpponentArgs {
    /// Opponent's unmodified skill rating, makes the test opposed.
    #[arg(long, allow_negative_numbers = true)]
    opponent_skill: Option<i64>,
    /// Opponent's test difficulty.
    #[arg(long, default_value = "standard")]
    opponent_difficulty: Difficulty,
    /// Opponent's flat modifier.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    opponent_modifier: i64,
    /// Force the opponent's roll.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
    opponent_roll: Option<u32>,
}

impl From<&TestArgs> for SkillTest {
    fn from(args: &TestArgs) -> Self {
        let test = SkillTest::new(args.skill)
            .with_difficulty(args.difficulty)
            .with_modifier(args.modifier);
        match args.roll {
            Some(roll) => test.with_forced_roll(roll),
            None => test,
        }
    }
}

impl OpponentArgs {
    fn skill_test(&self) -> Option<SkillTest> {
        let test = SkillTest::new(self.opponent_skill?)
            .with_difficulty(self.opponent_difficulty)
            .with_modifier(self.opponent_modifier);
        Some(match self.opponent_roll {
            Some(roll) => test.with_forced_roll(roll),
            None => test,
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let output = match &cli.command {
        Command::Roll { formula } => {
            let formula = parse_formula(formula)?;
            render_evaluation(&formula, &formula.roll(&mut rng))
        }
        Command::Test(args) => {
            let test = SkillTest::from(args);
            let outcome = test.resolve_with(Mode::Binary, &mut rng);
            render_outcome(&cli.name, outcome.roll, test.effective_skill(), outcome.tier)
        }
        Command::Tiered { yours, opponent } => {
            let yours = SkillTest::from(yours);
            match opponent.skill_test() {
                Some(theirs) => {
                    let report = OpposedTest::new(yours, theirs).resolve_with(&mut rng);
                    [
                        render_outcome(
                            &cli.name,
                            report.yours.roll,
                            report.your_skill,
                            report.yours.tier,
                        ),
                        render_outcome(
                            "Your opponent",
                            report.theirs.roll,
                            report.their_skill,
                            report.theirs.tier,
                        ),
                        render_verdict(report.verdict),
                    ]
                    .join("\n\n")
                }
                None => {
                    let outcome = yours.resolve_with(Mode::Tiered, &mut rng);
                    render_outcome(&cli.name, outcome.roll, yours.effective_skill(), outcome.tier)
                }
            }
        }
        Command::Damage {
            formula,
            hits,
            species,
        } => {
            let formula = parse_formula(formula)?;
            let table = location_table(species);
            let report = roll_damage(&formula, *hits, &table, &mut rng);
            render_damage(&cli.name, &formula, &report)
        }
    };

    println!("{output}");
    Ok(())
}

fn parse_formula(input: &str) -> Result<Formula> {
    let formula = Formula::parse(input)?;
    for warning in formula.warnings() {
        let ParseWarning::Skipped { position, text } = warning;
        warn!(position, "ignored `{text}` in `{input}`");
    }
    Ok(formula)
}

// Only the human table exists so far.
fn location_table(_species: &str) -> RangeLocationTable {
    RangeLocationTable::human()
}

fn tier_label(tier: Tier) -> &'static str {
    match tier {
        Tier::Fumble => "Fumble",
        Tier::Failure => "Failure",
        Tier::PaltrySuccess => "Paltry success",
        Tier::ModestSuccess => "Modest success",
        Tier::StandardSuccess => "Standard success",
        Tier::SuperbSuccess => "Superb success",
        Tier::GrandSuccess => "Grand success",
        Tier::CriticalSuccess => "Critical success",
    }
}

fn render_outcome(name: &str, roll: u32, skill: i64, tier: Tier) -> String {
    format!(
        "{name} rolled {roll} with a target of {skill}\n{}!",
        tier_label(tier)
    )
}

fn render_verdict(verdict: OpposedVerdict) -> String {
    match verdict {
        OpposedVerdict::BothFail => "You both fail.".to_string(),
        OpposedVerdict::YouWinByDegrees(n) => format!("You win by {n} degrees!"),
        OpposedVerdict::OpponentWinsByDegrees(n) => format!("Your opponent wins by {n} degrees!"),
        OpposedVerdict::YouWinMarginal => "You win with a marginal success.".to_string(),
        OpposedVerdict::OpponentWinsMarginal => {
            "Your opponent wins with a marginal success.".to_string()
        }
        OpposedVerdict::TrueTie => "A true tie!!!".to_string(),
    }
}

fn render_evaluation(formula: &Formula, evaluation: &Evaluation) -> String {
    let mut breakdown = String::new();
    for (i, term) in evaluation.terms.iter().enumerate() {
        match (i, term.sign()) {
            (0, Sign::Plus) => {}
            (0, Sign::Minus) => breakdown.push('-'),
            (_, sign) => breakdown.push_str(&format!(" {sign} ")),
        }
        match term {
            RolledTerm::Dice { rolls, .. } => breakdown.push_str(&format!("{rolls:?}")),
            RolledTerm::Modifier { value, .. } => breakdown.push_str(&value.to_string()),
        }
    }

    format!("{formula}: {breakdown} = {}", evaluation.total)
}

fn render_damage(name: &str, formula: &Formula, report: &DamageReport) -> String {
    let mut output = format!("{name} rolled {} hit(s) of: `{formula}`\n\n", report.hits.len());

    for (i, hit) in report.hits.iter().enumerate() {
        let rolls: Vec<_> = hit.evaluation.rolls().map(|roll| roll.to_string()).collect();
        output.push_str(&format!(
            "- Hit {}: Rolled {} ({})\n",
            i + 1,
            rolls.join(", "),
            hit.location
        ));
    }

    output.push_str("\nTotal Damage:\n");
    for (location, damage) in &report.totals {
        output.push_str(&format!("- {location}: {damage}\n"));
    }
    output
}
