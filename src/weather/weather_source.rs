use std::collections::VecDeque;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::weather::{condition::Condition, outcome_set::OutcomeSet};

/// Strategy that decides the weather for one location.
///
/// The checker never owns a random generator itself; callers pass a source
/// so tests can substitute a seeded or scripted one.
pub trait WeatherSource {
    fn observe(&mut self, location: &str, outcomes: &OutcomeSet) -> Condition;
}

/// Uniform random draw from the outcome set.
pub struct RandomWeather<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomWeather<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomWeather<StdRng> {
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible source: equal seeds give equal sequences.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> WeatherSource for RandomWeather<R> {
    fn observe(&mut self, _location: &str, outcomes: &OutcomeSet) -> Condition {
        outcomes.pick(&mut self.rng)
    }
}

/// Replays a fixed sequence of conditions.
///
/// Once the script runs out, the outcome set's first member is returned.
#[derive(Debug, Clone, Default)]
pub struct ScriptedWeather {
    script: VecDeque<Condition>,
}

impl ScriptedWeather {
    pub fn new<I: IntoIterator<Item = Condition>>(script: I) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl WeatherSource for ScriptedWeather {
    fn observe(&mut self, _location: &str, outcomes: &OutcomeSet) -> Condition {
        self.script.pop_front().unwrap_or_else(|| outcomes.first())
    }
}
