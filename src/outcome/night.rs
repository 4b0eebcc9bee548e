use super::*;
use crate::Category;
use crate::GameState;
use crate::Phase;
use crate::Population;

/// All outcomes of a night phase.
///
/// Enumerates every mafia victim × detective peek × bodyguard guard, expands
/// coinciding choices into their [`Overlap`] sub-cases, then settles the
/// detective's private knowledge and advances to the next morning.
pub fn nightfall(state: &GameState) -> Vec<(Outcome, GameState)> {
    assert!(state.phase() == Phase::Night, "nightfall at {}", state);
    let mut outcomes = Vec::new();
    for kill in victims(state) {
        for peek in peeks(state) {
            for guard in guards(state) {
                let overlap = Overlap::of(kill, peek, guard);
                let shared = match overlap {
                    Overlap::PeekGuard => peek.expect("peek coincides"),
                    _ => kill,
                };
                let n = state.population()[shared];
                for case in 0..overlap.cases(n) {
                    let index = overlap.indexed().then_some(case);
                    let action = NightAction::new(kill, peek, guard, index);
                    let (population, protected) = resolve(state.population(), &action);
                    let (population, protected) = settle(population, protected);
                    let next = GameState::new(state.day() + 1, Phase::Day, protected, population);
                    outcomes.push((Outcome::from(action), next));
                }
            }
        }
    }
    outcomes
}

/// Town categories the mafia can reach. Never empty while the game is undecided.
fn victims(state: &GameState) -> Vec<Category> {
    state
        .population()
        .occupied()
        .filter(Category::is_town)
        .collect()
}

/// Plain peekable categories, or nobody when the detective is dead or has
/// nothing left to learn.
fn peeks(state: &GameState) -> Vec<Option<Category>> {
    let population = state.population();
    let peeks = Category::peekable()
        .iter()
        .filter(|_| population.detectives() > 0)
        .filter(|c| population[**c] > 0)
        .copied()
        .map(Some)
        .collect::<Vec<_>>();
    if peeks.is_empty() { vec![None] } else { peeks }
}

/// Any occupied category except a lone player guarded last night, or nobody
/// when the bodyguard is dead.
fn guards(state: &GameState) -> Vec<Option<Category>> {
    let population = state.population();
    let guards = population
        .occupied()
        .filter(|_| population.bodyguards() > 0)
        .filter(|c| population[*c] > 1 || Some(*c) != state.protected())
        .map(Some)
        .collect::<Vec<_>>();
    if guards.is_empty() { vec![None] } else { guards }
}

/// Apply one disambiguated night action, yielding the population and the
/// category the bodyguard should remember.
///
/// The kill is applied before the peek, so a peek landing on a different
/// member of the victim's category sees the reduced count.
fn resolve(population: &Population, action: &NightAction) -> (Population, Option<Category>) {
    let kill = action.kill();
    let guard = action.guard();
    let peeked = |p: Population| match action.peek() {
        Some(peek) => p.peek(peek),
        None => p,
    };
    let marked = |c: Category| c.peek().expect("peekable");
    match (action.overlap(), action.case()) {
        (Overlap::Distinct, None) => (peeked(population.kill(kill)), guard),
        // peek hits the corpse, or someone else in the same category
        (Overlap::KillPeek, Some(0)) => (population.kill(kill), guard),
        (Overlap::KillPeek, Some(1)) => (population.kill(kill).peek(kill), guard),
        // bodyguard intercepts, or guards someone else while the kill lands
        (Overlap::KillGuard, Some(0)) => (peeked(population.verify(kill)), Some(kill.verify())),
        (Overlap::KillGuard, Some(1)) => (peeked(population.kill(kill)), guard),
        // the guarded player is the peeked player, or not
        (Overlap::PeekGuard, Some(0)) => {
            let peek = action.peek().expect("peek coincides");
            (peeked(population.kill(kill)), Some(marked(peek)))
        }
        (Overlap::PeekGuard, Some(1)) => (peeked(population.kill(kill)), guard),
        (Overlap::Triple, Some(0)) => (population.verify(kill), Some(kill.verify())),
        (Overlap::Triple, Some(1)) => (population.kill(kill), guard),
        (Overlap::Triple, Some(2)) => (population.verify(kill).peek(kill), Some(kill.verify())),
        (Overlap::Triple, Some(3)) => (population.kill(kill).peek(kill), Some(marked(kill))),
        (Overlap::Triple, Some(4)) => (population.kill(kill).peek(kill), guard),
        (overlap, case) => unreachable!("no sub-case {:?} for {:?}", case, overlap),
    }
}

/// Detective knowledge after the night.
///
/// A dead detective takes every private result to the grave; a detective who
/// has already come out announces new results at once. The bodyguard's memory
/// follows its category either way.
fn settle(population: Population, protected: Option<Category>) -> (Population, Option<Category>) {
    if population.detectives() == 0 {
        let protected = protected.map(|c| c.unpeek().unwrap_or(c));
        (population.forget(), protected)
    } else if population[Category::VerifiedDetective] > 0 {
        let protected = protected.map(|c| if c.is_peeked() { c.verify() } else { c });
        (population.publish(), protected)
    } else {
        (population, protected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn night(population: Population) -> GameState {
        GameState::new(1, Phase::Night, None, population)
    }
    fn actions(state: &GameState) -> Vec<NightAction> {
        nightfall(state)
            .into_iter()
            .map(|(o, _)| *o.night().expect("night outcome"))
            .collect()
    }
    fn outcome(state: &GameState, action: NightAction) -> GameState {
        nightfall(state)
            .into_iter()
            .find(|(o, _)| *o == Outcome::from(action))
            .map(|(_, next)| next)
            .unwrap_or_else(|| panic!("{} not generated", action))
    }

    #[test]
    fn mafia_only_kills() {
        let state = night(Population::new(2, 19, 0, 0));
        let outcomes = nightfall(&state);
        assert_eq!(outcomes.len(), 1);
        let (outcome, next) = outcomes[0];
        assert_eq!(outcome.to_string(), "CCXXXX");
        assert_eq!(next, GameState::new(2, Phase::Day, None, Population::new(2, 18, 0, 0)));
    }

    #[test]
    fn kill_peek_splits_when_crowded() {
        use Category::*;
        let state = night(Population::new(2, 4, 1, 0));
        let cases = actions(&state)
            .into_iter()
            .filter(|a| a.kill() == Citizen && a.peek() == Some(Citizen))
            .collect::<Vec<_>>();
        assert_eq!(cases.len(), 2);
        let same = outcome(&state, NightAction::new(Citizen, Some(Citizen), None, Some(0)));
        let diff = outcome(&state, NightAction::new(Citizen, Some(Citizen), None, Some(1)));
        assert_eq!(same.population()[Citizen], 3);
        assert_eq!(same.population()[PeekedCitizen], 0);
        assert_eq!(diff.population()[Citizen], 2);
        assert_eq!(diff.population()[PeekedCitizen], 1);
    }

    #[test]
    fn kill_peek_single_member() {
        use Category::*;
        let state = night(Population::new(1, 1, 1, 1));
        let cases = actions(&state)
            .into_iter()
            .filter(|a| a.kill() == Citizen && a.peek() == Some(Citizen))
            .filter(|a| a.guard() == Some(Mafia))
            .collect::<Vec<_>>();
        assert_eq!(cases, vec![NightAction::new(Citizen, Some(Citizen), Some(Mafia), Some(0))]);
    }

    #[test]
    fn bodyguard_saves_and_verifies() {
        use Category::*;
        let state = night(Population::new(2, 4, 0, 1));
        let saved = outcome(&state, NightAction::new(Citizen, None, Some(Citizen), Some(0)));
        assert_eq!(saved.population().total(), state.population().total());
        assert_eq!(saved.population()[VerifiedCitizen], 1);
        assert_eq!(saved.protected(), Some(VerifiedCitizen));
        let missed = outcome(&state, NightAction::new(Citizen, None, Some(Citizen), Some(1)));
        assert_eq!(missed.population()[Citizen], 3);
        assert_eq!(missed.protected(), Some(Citizen));
    }

    #[test]
    fn guard_memory_blocks_lone_repeat() {
        use Category::*;
        let state = GameState::new(2, Phase::Night, Some(Bodyguard), Population::new(2, 4, 0, 1));
        assert!(actions(&state).iter().all(|a| a.guard() != Some(Bodyguard)));
        let state = GameState::new(2, Phase::Night, Some(Citizen), Population::new(2, 4, 0, 1));
        assert!(actions(&state).iter().any(|a| a.guard() == Some(Citizen)));
    }

    #[test]
    fn triple_case_counts() {
        use Category::*;
        let count = |citizens| {
            let state = night(Population::new(2, citizens, 1, 1));
            actions(&state)
                .into_iter()
                .filter(|a| a.overlap() == Overlap::Triple && a.kill() == Citizen)
                .count()
        };
        assert_eq!(count(1), 1);
        assert_eq!(count(2), 4);
        assert_eq!(count(3), 5);
        assert_eq!(count(6), 5);
    }

    #[test]
    fn triple_sub_cases() {
        use Category::*;
        let state = night(Population::new(2, 4, 1, 1));
        let case = |i| outcome(&state, NightAction::new(Citizen, Some(Citizen), Some(Citizen), Some(i)));
        let p = |i: u8, c: Category| case(i).population()[c];
        // all on one player: saved, peek adds nothing
        assert_eq!((p(0, Citizen), p(0, VerifiedCitizen), p(0, PeekedCitizen)), (3, 1, 0));
        assert_eq!(case(0).protected(), Some(VerifiedCitizen));
        // guard elsewhere: dead, peek wasted
        assert_eq!((p(1, Citizen), p(1, VerifiedCitizen), p(1, PeekedCitizen)), (3, 0, 0));
        assert_eq!(case(1).protected(), Some(Citizen));
        // saved, peek tags another
        assert_eq!((p(2, Citizen), p(2, VerifiedCitizen), p(2, PeekedCitizen)), (2, 1, 1));
        assert_eq!(case(2).protected(), Some(VerifiedCitizen));
        // guarded player is the peeked one, victim elsewhere
        assert_eq!((p(3, Citizen), p(3, VerifiedCitizen), p(3, PeekedCitizen)), (2, 0, 1));
        assert_eq!(case(3).protected(), Some(PeekedCitizen));
        // three different players
        assert_eq!((p(4, Citizen), p(4, VerifiedCitizen), p(4, PeekedCitizen)), (2, 0, 1));
        assert_eq!(case(4).protected(), Some(Citizen));
    }

    #[test]
    fn dead_detective_forgets() {
        use Category::*;
        let population = Population::new(2, 3, 1, 0).peek(Citizen).peek(Citizen).peek(Mafia);
        let state = night(population);
        for (outcome, next) in nightfall(&state) {
            let action = outcome.night().expect("night outcome");
            if action.kill() != Detective {
                continue;
            }
            assert_eq!(next.population().secrets(), 0);
            assert_eq!(next.population()[Citizen], 3);
            assert_eq!(next.population()[Mafia], 2);
        }
    }

    #[test]
    fn revealed_detective_announces() {
        use Category::*;
        let mut counts = [0; crate::CATEGORIES];
        counts[Mafia.index()] = 2;
        counts[Citizen.index()] = 5;
        counts[VerifiedDetective.index()] = 1;
        let population = Population::from(counts);
        let state = night(population);
        for (_, next) in nightfall(&state) {
            assert_eq!(next.population().secrets(), 0);
        }
        let peeked = outcome(&state, NightAction::new(Citizen, Some(Mafia), None, None));
        assert_eq!(peeked.population()[VerifiedMafia], 1);
    }

    #[test]
    fn kills_shrink_saves_keep() {
        for population in [
            Population::new(2, 4, 1, 1),
            Population::new(1, 2, 1, 1),
            Population::new(3, 6, 0, 1),
        ] {
            let state = night(population);
            for (outcome, next) in nightfall(&state) {
                let action = outcome.night().expect("night outcome");
                let before = state.population().total();
                let after = next.population().total();
                match action.saves() {
                    true => assert_eq!(after, before, "{}", action),
                    false => assert_eq!(after + 1, before, "{}", action),
                }
                assert_eq!(next.day(), 2);
                assert_eq!(next.phase(), Phase::Day);
            }
        }
    }

    #[test]
    fn peek_guard_splits_when_crowded() {
        use Category::*;
        let state = night(Population::new(2, 4, 1, 1));
        let same = outcome(&state, NightAction::new(Citizen, Some(Mafia), Some(Mafia), Some(0)));
        let diff = outcome(&state, NightAction::new(Citizen, Some(Mafia), Some(Mafia), Some(1)));
        assert_eq!(same.protected(), Some(PeekedMafia));
        assert_eq!(diff.protected(), Some(Mafia));
        assert_eq!(same.population(), diff.population());
        assert_eq!(same.to_string(), "D2 PM 101/300/100/100");
        assert_eq!(diff.to_string(), "D2 MM 101/300/100/100");
    }

    #[test]
    fn peek_guard_single_case_when_alone() {
        use Category::*;
        let state = night(Population::new(1, 4, 1, 1));
        let cases = actions(&state)
            .into_iter()
            .filter(|a| a.kill() == Citizen && a.peek() == Some(Mafia) && a.guard() == Some(Mafia))
            .collect::<Vec<_>>();
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].case(), Some(0));
        let next = outcome(&state, cases[0]);
        assert_eq!(next.protected(), Some(PeekedMafia));
    }
}
