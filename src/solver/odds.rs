use super::*;
use crate::Leaf;
use crate::Probability;
use crate::Winner;
use num_traits::ToPrimitive;
use num_traits::Zero;

/// Total mass on decided leaves, split by winner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Odds {
    mafia: Probability,
    town: Probability,
}

impl Odds {
    pub fn mafia(&self) -> &Probability {
        &self.mafia
    }
    pub fn town(&self) -> &Probability {
        &self.town
    }
    /// One for any valid policy.
    pub fn total(&self) -> Probability {
        &self.mafia + &self.town
    }
}

impl From<&Mass<'_>> for Odds {
    fn from(mass: &Mass<'_>) -> Self {
        let mut odds = Self {
            mafia: Probability::zero(),
            town: Probability::zero(),
        };
        for (i, tree) in mass.forest().trees().iter().enumerate() {
            for (leaf, kind) in tree.leaves() {
                match kind {
                    Leaf::Decided(Winner::Mafia) => odds.mafia += mass.at(i, leaf),
                    Leaf::Decided(Winner::Town) => odds.town += mass.at(i, leaf),
                    Leaf::Carried => continue,
                }
            }
        }
        odds
    }
}

impl std::fmt::Display for Odds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let float = |p: &Probability| p.to_f64().unwrap_or(f64::NAN);
        write!(
            f,
            "mafia {} ({:.6})  town {} ({:.6})",
            self.mafia,
            float(&self.mafia),
            self.town,
            float(&self.town)
        )
    }
}
