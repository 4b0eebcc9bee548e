use super::*;
use crate::Category;
use serde::Deserialize;
use serde::Serialize;

/// Identifies one branch out of a state's generated outcomes.
///
/// This is the vocabulary a [`Policy`](crate::Policy) speaks: it is handed
/// the keys valid for a state and returns a weight for each.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outcome {
    /// The detective comes out during the day.
    Reveal,
    /// The town lynches one member of a category.
    Eliminate(Category),
    /// Mafia, detective and bodyguard act.
    Night(NightAction),
}

impl Outcome {
    pub fn is_reveal(&self) -> bool {
        matches!(self, Self::Reveal)
    }
    /// The category eliminated by day or attacked by night.
    pub fn target(&self) -> Option<Category> {
        match self {
            Self::Reveal => None,
            Self::Eliminate(category) => Some(*category),
            Self::Night(action) => Some(action.kill()),
        }
    }
    pub fn night(&self) -> Option<&NightAction> {
        match self {
            Self::Night(action) => Some(action),
            _ => None,
        }
    }
}

impl From<NightAction> for Outcome {
    fn from(action: NightAction) -> Self {
        Self::Night(action)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reveal => write!(f, "DO"),
            Self::Eliminate(category) => write!(f, "{}", category),
            Self::Night(action) => write!(f, "{}", action),
        }
    }
}
