use super::*;
use crate::Distribution;
use crate::GameState;
use crate::Outcome;
use crate::Phase;
use crate::Policy;

/// Everyone acts on population share alone.
///
/// The town lynches a random living player and the detective never comes
/// out. At night the mafia, detective and bodyguard each pick a random
/// eligible player, independently.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uniform;

impl Policy for Uniform {
    fn decide(&self, state: &GameState, choices: &[Outcome]) -> Distribution {
        match state.phase() {
            Phase::Day => lynch(state, choices, |_| true),
            Phase::Night => {
                let victims = shares(state.population(), kills(&actions(state, choices)));
                joint(state, choices, &victims, coincidence)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;
    use crate::Category;
    use crate::Population;

    #[test]
    fn day_by_headcount() {
        let state = GameState::root(Population::new(2, 5, 1, 0));
        let choices = state.choices();
        let distribution = Uniform.decide(&state, &choices);
        distribution.validate(&state, &choices);
        assert!(distribution.weight(&Outcome::Reveal).is_zero());
        assert_eq!(distribution.weight(&Outcome::Eliminate(Category::Citizen)), ratio(5, 8));
    }

    #[test]
    fn night_sums_to_one() {
        for population in [
            Population::new(2, 5, 1, 1),
            Population::new(1, 1, 1, 1),
            Population::new(2, 3, 0, 1),
        ] {
            let state = GameState::new(1, Phase::Night, None, population);
            assert!(!state.is_terminal(), "{}", state);
            let choices = state.choices();
            Uniform.decide(&state, &choices).validate(&state, &choices);
        }
    }
}
