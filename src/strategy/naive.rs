use super::*;
use crate::Distribution;
use crate::GameState;
use crate::Outcome;
use crate::Phase;
use crate::Policy;

/// [`Uniform`], except coinciding night choices always land on the same
/// player. A detective who peeks the victim learns nothing that outlives
/// the night, so the detective's information never reaches the town.
#[derive(Debug, Clone, Copy, Default)]
pub struct Naive;

impl Policy for Naive {
    fn decide(&self, state: &GameState, choices: &[Outcome]) -> Distribution {
        match state.phase() {
            Phase::Day => lynch(state, choices, |_| true),
            Phase::Night => {
                let victims = shares(state.population(), kills(&actions(state, choices)));
                joint(state, choices, &victims, exclusive)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;
    use crate::Category;
    use crate::NightAction;
    use crate::Population;

    #[test]
    fn coinciding_choices_collapse() {
        use Category::*;
        let state = GameState::new(1, Phase::Night, None, Population::new(2, 5, 1, 1));
        let choices = state.choices();
        let distribution = Naive.decide(&state, &choices);
        distribution.validate(&state, &choices);
        let same = NightAction::new(Citizen, Some(Citizen), Some(Citizen), Some(0));
        let apart = NightAction::new(Citizen, Some(Citizen), Some(Citizen), Some(4));
        // kill 5/7, peek 5/8, guard 5/9
        assert_eq!(distribution.weight(&Outcome::from(same)), ratio(125, 504));
        assert!(distribution.weight(&Outcome::from(apart)).is_zero());
    }
}
