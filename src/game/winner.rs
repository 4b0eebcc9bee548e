use super::*;

/// The faction that has already won, if any.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Winner {
    Town,
    Mafia,
}

impl Winner {
    /// Town wins once the mafia is gone; mafia wins once it matches the town.
    pub fn of(population: &Population) -> Option<Self> {
        let m = population.mafia();
        let c = population.town();
        if m == 0 {
            Some(Self::Town)
        } else if m >= c {
            Some(Self::Mafia)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Town => write!(f, "town"),
            Self::Mafia => write!(f, "mafia"),
        }
    }
}
