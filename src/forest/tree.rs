use super::*;
use crate::Day;
use crate::GameState;
use crate::Outcome;
use crate::Phase;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use std::collections::HashMap;

/// Every state reachable within one game day.
///
/// Vertices hold [`GameState`]s and edges are labeled with the [`Outcome`]
/// key that produced the child. The tree is rooted at the day's seeds: the
/// initial state on the first day, and on later days the distinct undecided
/// states carried over from the previous day. Seeds are the children of the
/// day's implicit start-of-day root and are looked up by structural equality.
///
/// # Growth
///
/// Day-phase states of this day expand through [`daybreak`](crate::daybreak),
/// which may yield further day-phase states (a reveal does not advance time).
/// Night-phase states expand through [`nightfall`](crate::nightfall). Growth
/// stops at a fixed point: every leaf is either decided or a next-morning
/// state.
///
/// # Traversal
///
/// Nodes are inserted one expansion layer at a time, so index order is a
/// breadth-first order in which every parent precedes its children.
#[derive(Debug)]
pub struct Tree {
    day: Day,
    graph: DiGraph<GameState, Outcome>,
    seeds: Vec<NodeIndex>,
    dawn: HashMap<GameState, NodeIndex>,
}

impl Tree {
    /// Expand a day from its seeds to a fixed point.
    pub fn grow(day: Day, seeds: Vec<GameState>) -> Self {
        let mut tree = Self {
            day,
            graph: DiGraph::default(),
            seeds: Vec::new(),
            dawn: HashMap::new(),
        };
        let mut frontier = seeds
            .into_iter()
            .map(|seed| tree.plant(seed))
            .collect::<Vec<_>>();
        while !frontier.is_empty() {
            let parents = frontier
                .into_iter()
                .filter(|index| tree.expands(*index))
                .collect::<Vec<_>>();
            let states = parents
                .iter()
                .map(|index| *tree.at(*index))
                .collect::<Vec<_>>();
            let branches = expand(&states);
            log::debug!("{:<32}{:<16}", format!("expanding day {}", day), parents.len());
            frontier = Vec::new();
            for (parent, outcomes) in parents.into_iter().zip(branches) {
                for (outcome, state) in outcomes {
                    frontier.push(tree.graft(parent, outcome, state));
                }
            }
        }
        tree
    }

    pub fn day(&self) -> Day {
        self.day
    }
    /// Number of nodes in the tree.
    pub fn n(&self) -> usize {
        self.graph.node_count()
    }
    pub fn at(&self, index: NodeIndex) -> &GameState {
        self.graph
            .node_weight(index)
            .unwrap_or_else(|| panic!("no node {} on day {}", index.index(), self.day))
    }
    pub fn seeds(&self) -> &[NodeIndex] {
        &self.seeds
    }
    /// The seed structurally equal to a state carried over from yesterday.
    pub fn seed(&self, state: &GameState) -> NodeIndex {
        *self
            .dawn
            .get(state)
            .unwrap_or_else(|| panic!("no seed on day {} matches {}", self.day, state))
    }
    /// Parents before children.
    pub fn bfs(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }
    /// Outgoing edges in generation order.
    pub fn children(&self, index: NodeIndex) -> Vec<(Outcome, NodeIndex)> {
        let mut children = self
            .graph
            .edges_directed(index, petgraph::Direction::Outgoing)
            .map(|edge| {
                use petgraph::visit::EdgeRef;
                (*edge.weight(), edge.target())
            })
            .collect::<Vec<_>>();
        children.reverse();
        children
    }
    /// Child per outcome key. Keys are unique among siblings.
    pub fn branches(&self, index: NodeIndex) -> HashMap<Outcome, NodeIndex> {
        let mut branches = HashMap::new();
        for (outcome, child) in self.children(index) {
            if branches.insert(outcome, child).is_some() {
                panic!("duplicate branch {} at {} on day {}", outcome, self.at(index), self.day);
            }
        }
        branches
    }
    /// The unique child reached through `outcome`.
    pub fn follow(&self, index: NodeIndex, outcome: &Outcome) -> NodeIndex {
        self.branches(index).get(outcome).copied().unwrap_or_else(|| {
            panic!("no child matches {} at {} on day {}", outcome, self.at(index), self.day)
        })
    }
    pub fn is_leaf(&self, index: NodeIndex) -> bool {
        self.graph
            .neighbors_directed(index, petgraph::Direction::Outgoing)
            .next()
            .is_none()
    }
    pub fn leaves(&self) -> impl Iterator<Item = (NodeIndex, Leaf)> + '_ {
        self.bfs()
            .filter(move |index| self.is_leaf(*index))
            .map(move |index| (index, Leaf::from(self.at(index))))
    }
    /// Undecided leaves, each a state to carry into tomorrow.
    pub fn boundary(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.leaves()
            .filter(|(_, leaf)| *leaf == Leaf::Carried)
            .map(|(index, _)| index)
    }
    /// Distinct undecided leaf states, in order of first appearance.
    pub fn carried(&self) -> Vec<GameState> {
        let mut seen = std::collections::HashSet::new();
        self.boundary()
            .map(|index| *self.at(index))
            .filter(|state| seen.insert(*state))
            .collect()
    }

    fn expands(&self, index: NodeIndex) -> bool {
        let state = self.at(index);
        match state.phase() {
            _ if state.is_terminal() => false,
            Phase::Night => true,
            Phase::Day => state.day() == self.day,
        }
    }
    fn plant(&mut self, seed: GameState) -> NodeIndex {
        assert!(seed.day() == self.day, "seed {} planted on day {}", seed, self.day);
        let index = self.graph.add_node(seed);
        let twin = self.dawn.insert(seed, index);
        assert!(twin.is_none(), "duplicate seed {} on day {}", seed, self.day);
        self.seeds.push(index);
        index
    }
    fn graft(&mut self, parent: NodeIndex, outcome: Outcome, state: GameState) -> NodeIndex {
        let child = self.graph.add_node(state);
        self.graph.add_edge(parent, child, outcome);
        child
    }

    /// one line per edge below `x`, recursing depth-first
    fn show(&self, f: &mut std::fmt::Formatter, x: NodeIndex, prefix: &str) -> std::fmt::Result {
        let children = self.children(x);
        let n = children.len();
        for (i, (edge, child)) in children.into_iter().enumerate() {
            let last = i == n - 1;
            let gaps = if last { "    " } else { "│   " };
            let stem = if last { "└" } else { "├" };
            writeln!(f, "{}{}──{} → {}", prefix, stem, edge, self.at(child))?;
            self.show(f, child, &format!("{}{}", prefix, gaps))?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for seed in self.seeds() {
            writeln!(f, "\nROOT   {}", self.at(*seed))?;
            self.show(f, *seed, "")?;
        }
        Ok(())
    }
}

#[cfg(feature = "parallel")]
fn expand(states: &[GameState]) -> Vec<Vec<(Outcome, GameState)>> {
    use rayon::prelude::*;
    states.par_iter().map(GameState::outcomes).collect()
}
#[cfg(not(feature = "parallel"))]
fn expand(states: &[GameState]) -> Vec<Vec<(Outcome, GameState)>> {
    states.iter().map(GameState::outcomes).collect()
}
