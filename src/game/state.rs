use super::*;
use crate::Arbitrary;
use crate::Day;
use crate::Outcome;
use serde::Deserialize;
use serde::Serialize;

/// An immutable snapshot of the game between two events.
///
/// Structural equality over all four fields is what the [`Forest`](crate::Forest)
/// uses to merge states reached through different histories, so two states
/// with the same day, phase, guard memory and population are the same node.
///
/// `protected` remembers which category the bodyguard guarded last night:
/// the bodyguard may not guard it again unless it still holds more than one
/// living player.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameState {
    day: Day,
    phase: Phase,
    protected: Option<Category>,
    population: Population,
}

impl GameState {
    pub fn new(day: Day, phase: Phase, protected: Option<Category>, population: Population) -> Self {
        Self {
            day,
            phase,
            protected,
            population,
        }
    }
    /// Morning of the first day, nobody guarded yet.
    pub fn root(population: Population) -> Self {
        Self::new(1, Phase::Day, None, population)
    }

    pub fn day(&self) -> Day {
        self.day
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn protected(&self) -> Option<Category> {
        self.protected
    }
    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn winner(&self) -> Option<Winner> {
        Winner::of(&self.population)
    }
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some()
    }

    /// Every (key, successor) pair available from this state.
    /// Empty exactly when the game is already decided.
    pub fn outcomes(&self) -> Vec<(Outcome, GameState)> {
        if self.is_terminal() {
            return vec![];
        }
        match self.phase {
            Phase::Day => crate::daybreak(self),
            Phase::Night => crate::nightfall(self),
        }
    }
    /// Keys alone, in generator order.
    pub fn choices(&self) -> Vec<Outcome> {
        self.outcomes().into_iter().map(|(o, _)| o).collect()
    }
}

impl Arbitrary for GameState {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let population = Population::random();
        let phase = if rng.random_bool(0.5) {
            Phase::Day
        } else {
            Phase::Night
        };
        let protected = population
            .occupied()
            .filter(|c| !c.is_peeked())
            .filter(|_| population.bodyguards() > 0)
            .find(|_| rng.random_bool(0.25));
        Self::new(rng.random_range(1..=4), phase, protected, population)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{} {} {}",
            match self.phase {
                Phase::Day => "D",
                Phase::Night => "N",
            },
            self.day,
            Slot(self.protected),
            self.population
        )
    }
}
