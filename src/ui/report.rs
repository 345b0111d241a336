//! Console rendering of the theoretical and simulated results.

use {
    super::UI_TEXT,
    crate::{
        analysis::{
            monte_carlo::{MonteCarloSimulator, SimulationReport, Strategy},
            sample_space::{SampleSpace, TheoreticalReport},
        },
        config::{
            SimulationConfig,
            constants::output::{DEVIATION_DECIMALS, RATE_DECIMALS},
        },
        domain::WeightedEvent,
        error::Result,
    },
    itertools::Itertools,
    std::io::Write,
    strum::IntoEnumIterator,
    tabled::{Table, Tabled, settings::Style},
};

#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "prob")]
    probability: String,
    prize_door: u8,
    player_choice: u8,
    final_choice: u8,
    result: String,
}

impl From<&WeightedEvent> for EventRow {
    fn from(event: &WeightedEvent) -> Self {
        Self {
            probability: event.probability.to_string(),
            prize_door: event.outcome.prize.label(),
            player_choice: event.outcome.initial_choice.label(),
            final_choice: event.outcome.final_choice.label(),
            result: event.class.to_string(),
        }
    }
}

/// 100000 -> "100,000"
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

pub fn write_theoretical<W: Write>(
    space: &SampleSpace,
    report: &TheoreticalReport,
    display: bool,
    out: &mut W,
) -> Result<()> {
    if display {
        writeln!(
            out,
            "{} {{{}}}",
            UI_TEXT.label_win_event,
            space.win_configurations().iter().join(", ")
        )?;
        writeln!(out, "{} {}", UI_TEXT.label_win_event_size, report.win_configuration_count)?;

        for event in space.weighted_events() {
            writeln!(out, "{}", event.as_tuple())?;
        }

        let rows: Vec<EventRow> = space.weighted_events().iter().map(EventRow::from).collect();
        writeln!(out, "{}", Table::new(rows).with(Style::modern()))?;
    }
    writeln!(out, "{} {}", UI_TEXT.label_probability, report.probability_of_winning)?;
    Ok(())
}

/// Enumerates the sample space and writes the result. `display` adds the full
/// event listing.
pub fn compute_sample_space<W: Write>(display: bool, out: &mut W) -> Result<TheoreticalReport> {
    let space = SampleSpace::enumerate();
    let report = space.report()?;
    log::info!(
        "sample space: {} raw, {} switched, {} win configurations",
        report.raw_outcome_count,
        report.switch_outcome_count,
        report.win_configuration_count
    );
    write_theoretical(&space, &report, display, out)?;
    Ok(report)
}

pub fn write_simulation<W: Write>(report: &SimulationReport, out: &mut W) -> Result<()> {
    for strategy in Strategy::iter() {
        let label = match strategy {
            Strategy::Stay => UI_TEXT.label_stay,
            Strategy::Switch => UI_TEXT.label_switch,
        };
        let pct = 100.0 * report.rate(strategy);
        writeln!(out, "{} {:.*}%", label, RATE_DECIMALS, pct)?;
    }
    writeln!(
        out,
        "{} {:.*}",
        UI_TEXT.label_deviation,
        DEVIATION_DECIMALS,
        report.switch_deviation()
    )?;

    let ci = report.switch_interval();
    writeln!(
        out,
        "{} [{:.*}, {:.*}] (contains 2/3: {})",
        UI_TEXT.label_interval,
        DEVIATION_DECIMALS,
        ci.lower,
        DEVIATION_DECIMALS,
        ci.upper,
        ci.contains(crate::config::constants::THEORETICAL_SWITCH_WIN)
    )?;
    Ok(())
}

pub fn simulate_monte_carlo<W: Write>(
    config: &SimulationConfig,
    out: &mut W,
) -> Result<SimulationReport> {
    writeln!(out, "{} {}", UI_TEXT.label_running, format_count(config.trials()))?;
    let report = MonteCarloSimulator::run_with_config(config)?;
    write_simulation(&report, out)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_theoretical(display: bool) -> String {
        let mut out = Vec::new();
        compute_sample_space(display, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn counts_get_thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(100_000), "100,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn plain_mode_prints_only_the_fraction() {
        assert_eq!(render_theoretical(false), "Probability of winning = 2/3\n");
    }

    #[test]
    fn display_mode_lists_every_event() {
        let text = render_theoretical(true);
        assert!(text.starts_with("win event = {(1, 2, 1), (1, 3, 1), (2, 1, 2), "));
        assert!(text.contains("size win event = 6\n"));
        assert_eq!(text.matches("('1/9',").count(), 6);
        assert_eq!(text.matches("('1/18',").count(), 12);
        assert!(text.contains("prize_door"));
        assert!(text.ends_with("Probability of winning = 2/3\n"));
    }

    #[test]
    fn theoretical_output_is_idempotent() {
        assert_eq!(render_theoretical(true), render_theoretical(true));
    }

    #[test]
    fn simulation_output_has_fixed_precision() {
        let report = SimulationReport {
            trials: 3,
            stay_wins: 1,
            switch_wins: 2,
            seed: Some(0),
        };
        let mut out = Vec::new();
        write_simulation(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Original Door: You won 33.333%\n"));
        assert!(text.contains("Switch doors: You won 66.667%\n"));
        assert!(text.contains("(5 decimals) 0.00000\n"));
    }

    #[test]
    fn empty_report_prints_zero_percent() {
        let report = SimulationReport {
            trials: 0,
            stay_wins: 0,
            switch_wins: 0,
            seed: None,
        };
        let mut out = Vec::new();
        write_simulation(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("NaN"));
        assert!(text.contains("Original Door: You won 0.000%\n"));
        assert!(text.contains("Switch doors: You won 0.000%\n"));
    }
}
