use rand::Rng;

use crate::weather::condition::Condition;

/// Non-empty list of conditions a run may report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeSet {
    outcomes: Vec<Condition>,
}

impl OutcomeSet {
    /// Returns `None` when `outcomes` is empty.
    #[must_use]
    pub fn new(outcomes: Vec<Condition>) -> Option<Self> {
        (!outcomes.is_empty()).then_some(Self { outcomes })
    }

    /// Draws one member uniformly at random.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Condition {
        self.outcomes[rng.gen_range(0..self.outcomes.len())]
    }

    /// First member; used as the deterministic fallback.
    #[must_use]
    pub fn first(&self) -> Condition {
        self.outcomes[0]
    }

    #[must_use]
    pub fn contains(&self, c: Condition) -> bool {
        self.outcomes.contains(&c)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Condition] {
        &self.outcomes
    }
}

impl Default for OutcomeSet {
    fn default() -> Self {
        Self {
            outcomes: Condition::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    #[test]
    fn empty_set_is_rejected() {
        assert!(OutcomeSet::new(Vec::new()).is_none());
    }

    #[test]
    fn picks_stay_inside_the_set_and_cover_it() {
        let set = OutcomeSet::default();
        let mut rng = StdRng::seed_from_u64(7);

        let seen: HashSet<Condition> = (0..500).map(|_| set.pick(&mut rng)).collect();

        assert!(seen.iter().all(|c| set.contains(*c)));
        assert_eq!(seen.len(), Condition::ALL.len());
    }

    #[test]
    fn single_member_set_always_yields_it() {
        let set = OutcomeSet::new(vec![Condition::Cloudy]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!((0..20).all(|_| set.pick(&mut rng) == Condition::Cloudy));
    }
}
