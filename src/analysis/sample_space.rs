//! Exact enumeration of the three-door outcome tree.
//!
//! # Approach
//! 1. Take Door³ (27 raw triples of prize, initial choice, final choice).
//! 2. Keep the triples where the player switched (`initial != final`), sorted: 18.
//! 3. Separately collect the win configurations (first pick wrong, final pick
//!    on the prize): 6. These are informational only.
//! 4. Weight every switched triple via [`WeightedEvent::assign`].
//! 5. Sum the `W`-tagged leaf probabilities and bound the denominator by 9.
//!
//! The `W` tag follows the first pick, not the switch result. The headline
//! fraction is whatever that tag sum gives; see DESIGN.md before changing it.

use {
    crate::{
        config::{DF, constants::MAX_DENOMINATOR},
        domain::{Door, EventClass, Outcome, WeightedEvent},
        error::Result,
        utils::Fraction,
    },
    itertools::iproduct,
    serde::Serialize,
    std::collections::BTreeSet,
    strum::IntoEnumIterator,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSpace {
    raw_outcomes: Vec<Outcome>,
    switch_outcomes: Vec<Outcome>,
    win_configurations: Vec<Outcome>,
    weighted_events: Vec<WeightedEvent>,
}

/// Numeric result of one enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TheoreticalReport {
    pub raw_outcome_count: usize,
    pub switch_outcome_count: usize,
    pub win_configuration_count: usize,
    /// Exact sum of the `W`-tagged leaf probabilities.
    pub raw_win_total: Fraction,
    /// `raw_win_total` bounded to a denominator of at most 9.
    pub probability_of_winning: Fraction,
}

impl SampleSpace {
    pub fn enumerate() -> Self {
        let raw_outcomes: Vec<Outcome> = iproduct!(Door::iter(), Door::iter(), Door::iter())
            .map(|(prize, initial, last)| Outcome::new(prize, initial, last))
            .collect();
        log::debug!("raw sample space size = {}", raw_outcomes.len());

        let switch_outcomes: Vec<Outcome> = raw_outcomes
            .iter()
            .copied()
            .filter(Outcome::is_switch)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let win_configurations: Vec<Outcome> = switch_outcomes
            .iter()
            .copied()
            .filter(Outcome::is_win_configuration)
            .collect();

        let weighted_events: Vec<WeightedEvent> = switch_outcomes
            .iter()
            .map(|&outcome| {
                let event = WeightedEvent::assign(outcome);
                if DF.log_weighted_events {
                    log::info!("assigned {}", event);
                }
                event
            })
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Self {
            raw_outcomes,
            switch_outcomes,
            win_configurations,
            weighted_events,
        }
    }

    /// All 27 (prize, initial, final) triples in product order.
    pub fn raw_outcomes(&self) -> &[Outcome] {
        &self.raw_outcomes
    }

    /// Triples where the final choice differs from the initial one, sorted.
    pub fn switch_outcomes(&self) -> &[Outcome] {
        &self.switch_outcomes
    }

    pub fn win_configurations(&self) -> &[Outcome] {
        &self.win_configurations
    }

    /// Deduplicated weighted events in outcome order.
    pub fn weighted_events(&self) -> &[WeightedEvent] {
        &self.weighted_events
    }

    pub fn raw_win_total(&self) -> Fraction {
        self.weighted_events
            .iter()
            .filter(|e| e.class == EventClass::Win)
            .map(|e| e.probability)
            .sum()
    }

    /// Sum of every leaf weight, regardless of tag.
    pub fn total_mass(&self) -> Fraction {
        self.weighted_events.iter().map(|e| e.probability).sum()
    }

    pub fn probability_of_winning(&self) -> Result<Fraction> {
        self.raw_win_total().limit_denominator(MAX_DENOMINATOR)
    }

    pub fn report(&self) -> Result<TheoreticalReport> {
        Ok(TheoreticalReport {
            raw_outcome_count: self.raw_outcomes.len(),
            switch_outcome_count: self.switch_outcomes.len(),
            win_configuration_count: self.win_configurations.len(),
            raw_win_total: self.raw_win_total(),
            probability_of_winning: self.probability_of_winning()?,
        })
    }
}
