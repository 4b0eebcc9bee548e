use super::*;
use crate::GameState;
use crate::Odds;
use crate::Policy;
use crate::Population;
use std::collections::BTreeSet;

/// The whole reachable state space, one [`Tree`] per game day.
///
/// Day `d + 1` is seeded by the distinct undecided leaves of day `d`, so
/// states reached through different histories share a single subtree.
/// The forest ends on the first day with no undecided leaves.
#[derive(Debug)]
pub struct Forest(Vec<Tree>);

impl Forest {
    pub fn build(root: GameState) -> Self {
        let mut trees = Vec::new();
        let mut seeds = vec![root];
        let mut day = root.day();
        while !seeds.is_empty() {
            let tree = Tree::grow(day, seeds);
            seeds = tree.carried();
            log::info!(
                "{:<32}{:<16}{:<16}",
                format!("growing day {}", day),
                format!("nodes {}", tree.n()),
                format!("carried {}", seeds.len())
            );
            trees.push(tree);
            day += 1;
        }
        Self(trees)
    }

    pub fn trees(&self) -> &[Tree] {
        &self.0
    }
    /// Total nodes across every day.
    pub fn n(&self) -> usize {
        self.0.iter().map(Tree::n).sum()
    }
    /// Every distinct undecided state anywhere in the forest, sorted.
    pub fn undecided(&self) -> Vec<GameState> {
        self.0
            .iter()
            .flat_map(|tree| tree.bfs().map(move |index| *tree.at(index)))
            .filter(|state| !state.is_terminal())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
    /// Exact odds of each side winning when every branch is weighted by `policy`.
    pub fn solve<P: Policy>(&self, policy: &P) -> Odds {
        let odds = Odds::from(&crate::Mass::propagate(self, policy));
        log::info!("{:<32}{}", "solved", odds);
        odds
    }
}

impl From<Population> for Forest {
    fn from(population: Population) -> Self {
        Self::build(GameState::root(population))
    }
}

impl std::fmt::Display for Forest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for tree in self.0.iter() {
            writeln!(f, "\nDAY {}", tree.day())?;
            write!(f, "{}", tree)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Phase;

    #[test]
    fn seeds_are_next_mornings() {
        let forest = Forest::from(Population::new(2, 6, 1, 1));
        for tree in forest.trees() {
            for seed in tree.seeds() {
                let state = tree.at(*seed);
                assert_eq!(state.day(), tree.day());
                assert_eq!(state.phase(), Phase::Day);
                assert!(!state.is_terminal());
            }
        }
    }

    #[test]
    fn last_day_decides() {
        let forest = Forest::from(Population::new(2, 6, 1, 1));
        let last = forest.trees().last().expect("at least one day");
        assert_eq!(last.boundary().count(), 0);
    }

    #[test]
    fn decided_root_is_single_node() {
        let forest = Forest::from(Population::new(0, 4, 1, 0));
        assert_eq!(forest.trees().len(), 1);
        assert_eq!(forest.n(), 1);
        assert!(forest.undecided().is_empty());
    }

    #[test]
    fn undecided_sorted_and_distinct() {
        let forest = Forest::from(Population::new(2, 5, 1, 0));
        let states = forest.undecided();
        assert!(states.windows(2).all(|w| w[0] < w[1]));
        assert!(states.iter().all(|s| !s.is_terminal()));
    }

    #[test]
    fn someone_dies_every_day() {
        let population = Population::new(3, 7, 1, 1);
        let forest = Forest::from(population);
        assert!(forest.trees().len() <= population.total() as usize);
    }
}
