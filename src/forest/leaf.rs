use crate::GameState;
use crate::Winner;

/// How a branch of a day tree ends.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Leaf {
    /// The game is over.
    Decided(Winner),
    /// The game goes on; the state seeds the next day's tree.
    Carried,
}

impl From<&GameState> for Leaf {
    fn from(state: &GameState) -> Self {
        match state.winner() {
            Some(winner) => Self::Decided(winner),
            None => Self::Carried,
        }
    }
}
