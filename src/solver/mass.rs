use super::*;
use crate::Forest;
use crate::Probability;
use num_traits::One;
use num_traits::Zero;
use petgraph::graph::NodeIndex;

/// Probability of reaching every node of a [`Forest`], indexed by day then node.
#[derive(Debug, Clone)]
pub struct Mass<'f> {
    forest: &'f Forest,
    mass: Vec<Vec<Probability>>,
}

impl<'f> Mass<'f> {
    /// Push unit mass from the initial state through every day.
    ///
    /// Within a day, nodes are visited parents-first so each node's mass is
    /// final before it is split among its children. A day's undecided leaves
    /// hand their mass to the matching seed of the next day, where several
    /// histories may merge.
    pub fn propagate<P: Policy>(forest: &'f Forest, policy: &P) -> Self {
        let trees = forest.trees();
        let mut mass = trees
            .iter()
            .map(|tree| vec![Probability::zero(); tree.n()])
            .collect::<Vec<_>>();
        if let Some(first) = trees.first() {
            assert!(first.seeds().len() == 1, "first day has a single initial state");
            mass[0][first.seeds()[0].index()] = Probability::one();
        }
        for (i, tree) in trees.iter().enumerate() {
            for parent in tree.bfs() {
                let children = tree.children(parent);
                if children.is_empty() {
                    continue;
                }
                let state = tree.at(parent);
                let choices = children.iter().map(|(o, _)| *o).collect::<Vec<_>>();
                let distribution = policy.decide(state, &choices);
                distribution.validate(state, &choices);
                let reach = mass[i][parent.index()].clone();
                let branches = tree.branches(parent);
                for (outcome, weight) in distribution.iter() {
                    let child = branches.get(outcome).copied().unwrap_or_else(|| {
                        panic!("no child matches {} at {} on day {}", outcome, state, tree.day())
                    });
                    mass[i][child.index()] += weight * &reach;
                }
            }
            log::debug!("{:<32}{:<16}", format!("propagated day {}", tree.day()), tree.n());
            match trees.get(i + 1) {
                Some(next) => {
                    for leaf in tree.boundary() {
                        let seed = next.seed(tree.at(leaf));
                        let carried = mass[i][leaf.index()].clone();
                        mass[i + 1][seed.index()] += carried;
                    }
                }
                None => assert!(
                    tree.boundary().next().is_none(),
                    "undecided leaves on the last day {}",
                    tree.day()
                ),
            }
        }
        Self { forest, mass }
    }

    pub fn forest(&self) -> &Forest {
        self.forest
    }
    /// Mass at `node` of the `i`th day's tree.
    pub fn at(&self, i: usize, node: NodeIndex) -> &Probability {
        &self.mass[i][node.index()]
    }
}
