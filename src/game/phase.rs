use serde::Deserialize;
use serde::Serialize;

/// Half of a game day.
///
/// The town deliberates and eliminates during the day; mafia, detective and
/// bodyguard act during the night.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    Day,
    Night,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Night => write!(f, "night"),
        }
    }
}
