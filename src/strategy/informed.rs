use super::*;
use crate::Category;
use crate::Distribution;
use crate::GameState;
use crate::Outcome;
use crate::Phase;
use crate::Policy;

/// A detective who uses what they learn, and a town and mafia who listen.
///
/// By day the detective comes out as soon as they have peeked a mafia
/// member. The town lynches exposed mafia first, and otherwise picks at
/// random among everyone not cleared. By night the mafia silences a public
/// detective first, then cleared citizens, otherwise a random town player.
/// Peeks, guards and sub-cases follow [`Uniform`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Informed;

impl Informed {
    /// Players the town knows to be on its side.
    fn cleared(category: Category) -> bool {
        matches!(
            category,
            Category::VerifiedCitizen | Category::VerifiedDetective | Category::VerifiedBodyguard
        )
    }
    fn day(state: &GameState, choices: &[Outcome]) -> Distribution {
        let population = state.population();
        if population.hidden_detectives() > 0 && population[Category::PeekedMafia] > 0 {
            only(state, choices, Outcome::Reveal)
        } else if population[Category::VerifiedMafia] > 0 {
            only(state, choices, Outcome::Eliminate(Category::VerifiedMafia))
        } else {
            lynch(state, choices, |c| !Self::cleared(c))
        }
    }
    fn night(state: &GameState, choices: &[Outcome]) -> Distribution {
        let population = state.population();
        let actions = actions(state, choices);
        let offered = kills(&actions).collect::<Vec<_>>();
        let victims = [Category::VerifiedDetective, Category::VerifiedCitizen]
            .into_iter()
            .map(Some)
            .find(|target| offered.contains(target))
            .map(|target| certain(offered.iter().copied(), target))
            .unwrap_or_else(|| shares(population, offered.iter().copied()));
        joint(state, choices, &victims, coincidence)
    }
}

impl Policy for Informed {
    fn decide(&self, state: &GameState, choices: &[Outcome]) -> Distribution {
        match state.phase() {
            Phase::Day => Self::day(state, choices),
            Phase::Night => Self::night(state, choices),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;
    use num_traits::Zero;
    use crate::CATEGORIES;
    use crate::Population;

    fn population(entries: &[(Category, crate::Count)]) -> Population {
        let mut counts = [0; CATEGORIES];
        for (category, count) in entries {
            counts[category.index()] = *count;
        }
        Population::from(counts)
    }

    #[test]
    fn reveals_after_catching_mafia() {
        use Category::*;
        let state = GameState::root(population(&[(Mafia, 1), (PeekedMafia, 1), (Citizen, 5), (Detective, 1)]));
        let choices = state.choices();
        let distribution = Informed.decide(&state, &choices);
        distribution.validate(&state, &choices);
        assert!(distribution.weight(&Outcome::Reveal).is_one());
    }

    #[test]
    fn stays_hidden_without_evidence() {
        use Category::*;
        let state = GameState::root(population(&[(Mafia, 2), (PeekedCitizen, 1), (Citizen, 4), (Detective, 1)]));
        let choices = state.choices();
        let distribution = Informed.decide(&state, &choices);
        distribution.validate(&state, &choices);
        assert!(distribution.weight(&Outcome::Reveal).is_zero());
        // peeked citizens are not yet cleared in public
        assert_eq!(distribution.weight(&Outcome::Eliminate(PeekedCitizen)), ratio(1, 8));
    }

    #[test]
    fn lynches_exposed_mafia() {
        use Category::*;
        let state = GameState::root(population(&[(Mafia, 1), (VerifiedMafia, 1), (Citizen, 5), (VerifiedDetective, 1)]));
        let choices = state.choices();
        let distribution = Informed.decide(&state, &choices);
        distribution.validate(&state, &choices);
        assert!(distribution.weight(&Outcome::Eliminate(VerifiedMafia)).is_one());
    }

    #[test]
    fn spares_cleared_players() {
        use Category::*;
        let state = GameState::root(population(&[(Mafia, 2), (Citizen, 4), (VerifiedCitizen, 2), (VerifiedDetective, 1)]));
        let choices = state.choices();
        let distribution = Informed.decide(&state, &choices);
        distribution.validate(&state, &choices);
        assert_eq!(distribution.weight(&Outcome::Eliminate(Mafia)), ratio(1, 3));
        assert!(distribution.weight(&Outcome::Eliminate(VerifiedCitizen)).is_zero());
        assert!(distribution.weight(&Outcome::Eliminate(VerifiedDetective)).is_zero());
    }

    #[test]
    fn silences_public_detective() {
        use Category::*;
        let state = GameState::new(
            2,
            Phase::Night,
            None,
            population(&[(Mafia, 2), (Citizen, 4), (VerifiedCitizen, 1), (VerifiedDetective, 1)]),
        );
        let choices = state.choices();
        let distribution = Informed.decide(&state, &choices);
        distribution.validate(&state, &choices);
        let detective = distribution
            .iter()
            .filter(|(o, _)| o.target() == Some(VerifiedDetective))
            .fold(crate::Probability::zero(), |sum, (_, w)| sum + w);
        assert!(detective.is_one());
    }

    #[test]
    fn then_cleared_citizens() {
        use Category::*;
        let state = GameState::new(
            2,
            Phase::Night,
            None,
            population(&[(Mafia, 2), (Citizen, 4), (VerifiedCitizen, 1)]),
        );
        let choices = state.choices();
        let distribution = Informed.decide(&state, &choices);
        distribution.validate(&state, &choices);
        let cleared = distribution.weight(&Outcome::from(crate::NightAction::new(VerifiedCitizen, None, None, None)));
        assert!(cleared.is_one());
    }
}
