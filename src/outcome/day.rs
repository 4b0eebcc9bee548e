use super::*;
use crate::Category;
use crate::GameState;
use crate::Phase;

/// All outcomes of a day phase.
///
/// - [`Outcome::Reveal`] while a detective is still hidden. Every private
///   result becomes public, the detective becomes verified, and a peeked
///   guard memory follows its category. Phase and day do not advance.
/// - [`Outcome::Eliminate`] once per occupied category. One member dies and
///   night falls on the same day.
pub fn daybreak(state: &GameState) -> Vec<(Outcome, GameState)> {
    assert!(state.phase() == Phase::Day, "daybreak at {}", state);
    let population = state.population();
    let announce = (population.hidden_detectives() > 0).then(|| (Outcome::Reveal, reveal(state)));
    let lynches = population.occupied().map(|category| {
        let next = GameState::new(
            state.day(),
            Phase::Night,
            state.protected(),
            population.kill(category),
        );
        (Outcome::Eliminate(category), next)
    });
    announce.into_iter().chain(lynches).collect()
}

/// The detective comes out.
fn reveal(state: &GameState) -> GameState {
    let population = state.population().publish();
    let population = [Category::Detective, Category::CitizenDetective]
        .into_iter()
        .fold(population, |population, hidden| {
            (0..population[hidden]).fold(population, |p, _| p.verify(hidden))
        });
    let protected = state
        .protected()
        .map(|c| if c.is_peeked() { c.verify() } else { c });
    GameState::new(state.day(), state.phase(), protected, population)
}
