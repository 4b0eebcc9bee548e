use crate::GameState;
use crate::Outcome;
use crate::Probability;
use num_traits::One;
use num_traits::Signed;
use num_traits::Zero;
use std::collections::BTreeMap;

/// A policy's answer at one node: an exact weight for every available key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution(BTreeMap<Outcome, Probability>);

impl Distribution {
    /// Weight assigned to `outcome`, zero if absent.
    pub fn weight(&self, outcome: &Outcome) -> Probability {
        self.0.get(outcome).cloned().unwrap_or_else(Probability::zero)
    }
    pub fn total(&self) -> Probability {
        self.0.values().fold(Probability::zero(), |sum, w| sum + w)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&Outcome, &Probability)> {
        self.0.iter()
    }

    /// Abort unless this is a probability distribution over exactly `choices`.
    pub fn validate(&self, state: &GameState, choices: &[Outcome]) {
        for outcome in choices {
            assert!(
                self.0.contains_key(outcome),
                "policy omitted {} at {}",
                outcome,
                state
            );
        }
        for (outcome, weight) in self.0.iter() {
            assert!(
                choices.contains(outcome),
                "policy weighted unavailable {} at {}",
                outcome,
                state
            );
            assert!(
                !weight.is_negative(),
                "policy weighted {} by {} at {}",
                outcome,
                weight,
                state
            );
        }
        let total = self.total();
        assert!(total.is_one(), "policy weights sum to {} at {}", total, state);
    }
}

impl FromIterator<(Outcome, Probability)> for Distribution {
    fn from_iter<T: IntoIterator<Item = (Outcome, Probability)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<BTreeMap<Outcome, Probability>> for Distribution {
    fn from(map: BTreeMap<Outcome, Probability>) -> Self {
        Self(map)
    }
}
