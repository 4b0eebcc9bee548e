/// Which side a player wins with.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Faction {
    Mafia,
    Town,
}

/// What a player is, independent of what anyone knows about it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    Mafia,
    Citizen,
    Detective,
    Bodyguard,
}

impl Role {
    pub const fn faction(&self) -> Faction {
        match self {
            Self::Mafia => Faction::Mafia,
            Self::Citizen | Self::Detective | Self::Bodyguard => Faction::Town,
        }
    }
}
