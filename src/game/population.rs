use super::*;
use crate::Arbitrary;
use crate::CATEGORIES;
use crate::Count;
use serde::Deserialize;
use serde::Serialize;

/// Living players per [`Category`], indexed by discriminant.
///
/// Counts are unsigned, so the non-negativity invariant is structural. Every
/// event is expressed as a [`Delta`] and composed with `+`; composition that
/// would drive a count below zero is a precondition violation and panics.
///
/// # Events
///
/// - `kill(c)`: one member of `c` dies (total decreases by one)
/// - `peek(c)`: one plain member of `c` becomes privately known
/// - `verify(c)`: one member of `c` becomes publicly known
///
/// Peek and verify only move a player between categories of the same role,
/// so the total and every other role's count are untouched.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Population([Count; CATEGORIES]);

impl Population {
    /// A fresh table: nobody peeked or verified yet.
    pub fn new(mafia: Count, citizens: Count, detectives: Count, bodyguards: Count) -> Self {
        let mut counts = [0; CATEGORIES];
        counts[Category::Mafia.index()] = mafia;
        counts[Category::Citizen.index()] = citizens;
        counts[Category::Detective.index()] = detectives;
        counts[Category::Bodyguard.index()] = bodyguards;
        Self(counts)
    }

    pub fn total(&self) -> Count {
        self.0.iter().sum()
    }
    pub fn mafia(&self) -> Count {
        self.count(Category::is_mafia)
    }
    pub fn town(&self) -> Count {
        self.count(Category::is_town)
    }
    pub fn detectives(&self) -> Count {
        self.count(Category::is_detective)
    }
    pub fn bodyguards(&self) -> Count {
        self.count(Category::is_bodyguard)
    }
    /// Detectives that have not yet come out publicly.
    pub fn hidden_detectives(&self) -> Count {
        self[Category::Detective] + self[Category::CitizenDetective]
    }
    /// Players whose role the detective knows but the table doesn't.
    pub fn secrets(&self) -> Count {
        self.count(Category::is_peeked)
    }
    /// Sum over categories matching a predicate.
    pub fn count<F>(&self, predicate: F) -> Count
    where
        F: Fn(&Category) -> bool,
    {
        Category::all()
            .iter()
            .filter(|c| predicate(*c))
            .map(|c| self[*c])
            .sum()
    }
    /// Categories with at least one living member.
    pub fn occupied(&self) -> impl Iterator<Item = Category> + '_ {
        Category::all().iter().copied().filter(move |c| self[*c] > 0)
    }

    pub fn kill(self, category: Category) -> Self {
        self.require(category, "kill");
        self + Delta::kill(category)
    }
    pub fn peek(self, category: Category) -> Self {
        self.require(category, "peek");
        self + Delta::peek(category)
    }
    pub fn verify(self, category: Category) -> Self {
        self.require(category, "verify");
        self + Delta::verify(category)
    }

    /// Every private result becomes public at once.
    pub fn publish(self) -> Self {
        Category::peeked()
            .iter()
            .fold(self, |population, peeked| population.relabel(*peeked, peeked.verify()))
    }
    /// Every private result is lost.
    pub fn forget(self) -> Self {
        Category::peeked().iter().fold(self, |population, peeked| {
            population.relabel(*peeked, peeked.unpeek().expect("peeked has plain"))
        })
    }
    /// Move the whole of one category into another.
    fn relabel(mut self, from: Category, into: Category) -> Self {
        let moved = std::mem::take(&mut self.0[from.index()]);
        self.0[into.index()] += moved;
        self
    }

    fn require(&self, category: Category, event: &str) {
        assert!(
            self[category] > 0,
            "cannot {} from empty category {} in {}",
            event,
            category,
            self
        );
    }
}

impl std::ops::Index<Category> for Population {
    type Output = Count;
    fn index(&self, category: Category) -> &Self::Output {
        &self.0[category.index()]
    }
}

impl From<[Count; CATEGORIES]> for Population {
    fn from(counts: [Count; CATEGORIES]) -> Self {
        Self(counts)
    }
}

impl From<Population> for [Count; CATEGORIES] {
    fn from(population: Population) -> Self {
        population.0
    }
}

impl std::ops::Add<Delta> for Population {
    type Output = Self;
    fn add(self, delta: Delta) -> Self::Output {
        let mut counts = self.0;
        for (i, (count, change)) in counts.iter_mut().zip(delta.changes()).enumerate() {
            *count = count
                .checked_add_signed(change)
                .unwrap_or_else(|| panic!("population underflow at {} in {}", Category::from(i), self));
        }
        Self(counts)
    }
}

impl Arbitrary for Population {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let mut counts = [0; CATEGORIES];
        for count in counts.iter_mut() {
            *count = rng.random_range(0..=crate::ARBITRARY_COUNT);
        }
        // a single detective, whether or not it has come out
        counts[Category::VerifiedDetective.index()] = 0;
        counts[Category::CitizenDetective.index()] = 0;
        if counts[Category::Detective.index()] > 0 {
            counts[Category::Detective.index()] = 0;
            counts[rng.random_range(6..=7)] = 1;
        }
        Self(counts)
    }
}

/// Groups of three, one group per role: `MM MV PM / CC CV CP / ...`.
impl std::fmt::Display for Population {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let groups = self
            .0
            .chunks(3)
            .map(|group| group.iter().map(|n| n.to_string()).collect::<String>())
            .collect::<Vec<_>>();
        write!(f, "{}", groups.join("/"))
    }
}

/// Net change in [`Population`] caused by one event.
///
/// Has exactly one non-zero entry (a kill) or a `-1`/`+1` pair (a move
/// between two categories of the same role). Verifying an already verified
/// category is the zero delta.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Delta([i16; CATEGORIES]);

impl Delta {
    pub fn kill(category: Category) -> Self {
        let mut changes = [0; CATEGORIES];
        changes[category.index()] = -1;
        Self(changes)
    }
    pub fn peek(category: Category) -> Self {
        let peeked = category
            .peek()
            .unwrap_or_else(|| panic!("{} cannot be peeked", category));
        Self::transfer(category, peeked)
    }
    pub fn verify(category: Category) -> Self {
        Self::transfer(category, category.verify())
    }
    fn transfer(from: Category, into: Category) -> Self {
        let mut changes = [0; CATEGORIES];
        changes[from.index()] -= 1;
        changes[into.index()] += 1;
        Self(changes)
    }
    pub fn changes(&self) -> [i16; CATEGORIES] {
        self.0
    }
    pub fn net(&self) -> i16 {
        self.0.iter().sum()
    }
}
