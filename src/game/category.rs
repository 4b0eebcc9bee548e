use super::*;
use serde::Deserialize;
use serde::Serialize;

/// One of twelve closed classes of living players.
///
/// A category combines a [`Role`] with what the table knows about it:
/// - **plain**: nothing beyond the player's own claim
/// - **peeked**: the detective privately knows the role
/// - **verified**: the role is public and trusted
///
/// Detectives have no peeked status (they are never peeked). Instead the
/// citizen-detective variant marks a citizen who turns out to be a second
/// detective. Discriminants double as indices into [`Population`].
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Mafia             = 0,
    VerifiedMafia     = 1,
    PeekedMafia       = 2,
    Citizen           = 3,
    VerifiedCitizen   = 4,
    PeekedCitizen     = 5,
    Detective         = 6,
    VerifiedDetective = 7,
    CitizenDetective  = 8,
    Bodyguard         = 9,
    VerifiedBodyguard = 10,
    PeekedBodyguard   = 11,
}

impl Category {
    pub const fn all() -> &'static [Self; crate::CATEGORIES] {
        &[
            Self::Mafia,
            Self::VerifiedMafia,
            Self::PeekedMafia,
            Self::Citizen,
            Self::VerifiedCitizen,
            Self::PeekedCitizen,
            Self::Detective,
            Self::VerifiedDetective,
            Self::CitizenDetective,
            Self::Bodyguard,
            Self::VerifiedBodyguard,
            Self::PeekedBodyguard,
        ]
    }
    /// Categories the detective may target at night.
    pub const fn peekable() -> &'static [Self; 3] {
        &[Self::Mafia, Self::Bodyguard, Self::Citizen]
    }
    /// Categories holding private, unannounced detective results.
    pub const fn peeked() -> &'static [Self; 3] {
        &[Self::PeekedMafia, Self::PeekedBodyguard, Self::PeekedCitizen]
    }

    pub const fn index(&self) -> usize {
        *self as usize
    }
    pub const fn role(&self) -> Role {
        match self {
            Self::Mafia | Self::VerifiedMafia | Self::PeekedMafia => Role::Mafia,
            Self::Citizen | Self::VerifiedCitizen | Self::PeekedCitizen => Role::Citizen,
            Self::Detective | Self::VerifiedDetective | Self::CitizenDetective => Role::Detective,
            Self::Bodyguard | Self::VerifiedBodyguard | Self::PeekedBodyguard => Role::Bodyguard,
        }
    }
    /// Fixed for the life of the category, whatever its status becomes.
    pub const fn faction(&self) -> Faction {
        self.role().faction()
    }

    pub const fn is_mafia(&self) -> bool {
        matches!(self.faction(), Faction::Mafia)
    }
    pub const fn is_town(&self) -> bool {
        matches!(self.faction(), Faction::Town)
    }
    pub const fn is_detective(&self) -> bool {
        matches!(self.role(), Role::Detective)
    }
    pub const fn is_bodyguard(&self) -> bool {
        matches!(self.role(), Role::Bodyguard)
    }
    pub const fn is_verified(&self) -> bool {
        matches!(
            self,
            Self::VerifiedMafia
                | Self::VerifiedCitizen
                | Self::VerifiedDetective
                | Self::VerifiedBodyguard
        )
    }
    pub const fn is_peeked(&self) -> bool {
        matches!(
            self,
            Self::PeekedMafia | Self::PeekedCitizen | Self::PeekedBodyguard
        )
    }

    /// Private counterpart of a plain, peekable category.
    pub const fn peek(&self) -> Option<Self> {
        match self {
            Self::Mafia => Some(Self::PeekedMafia),
            Self::Citizen => Some(Self::PeekedCitizen),
            Self::Bodyguard => Some(Self::PeekedBodyguard),
            _ => None,
        }
    }
    /// Plain counterpart of a peeked category.
    pub const fn unpeek(&self) -> Option<Self> {
        match self {
            Self::PeekedMafia => Some(Self::Mafia),
            Self::PeekedCitizen => Some(Self::Citizen),
            Self::PeekedBodyguard => Some(Self::Bodyguard),
            _ => None,
        }
    }
    /// Public counterpart. Total: verified categories map to themselves.
    pub const fn verify(&self) -> Self {
        match self {
            Self::Mafia | Self::PeekedMafia | Self::VerifiedMafia => Self::VerifiedMafia,
            Self::Citizen | Self::PeekedCitizen | Self::VerifiedCitizen => Self::VerifiedCitizen,
            Self::Detective | Self::CitizenDetective | Self::VerifiedDetective => {
                Self::VerifiedDetective
            }
            Self::Bodyguard | Self::PeekedBodyguard | Self::VerifiedBodyguard => {
                Self::VerifiedBodyguard
            }
        }
    }
}

impl From<usize> for Category {
    fn from(n: usize) -> Self {
        Self::all()
            .get(n)
            .copied()
            .unwrap_or_else(|| panic!("no category at index {}", n))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            Self::Mafia => "MM",
            Self::VerifiedMafia => "MV",
            Self::PeekedMafia => "PM",
            Self::Citizen => "CC",
            Self::VerifiedCitizen => "CV",
            Self::PeekedCitizen => "CP",
            Self::Detective => "DD",
            Self::VerifiedDetective => "DV",
            Self::CitizenDetective => "DC",
            Self::Bodyguard => "BB",
            Self::VerifiedBodyguard => "BV",
            Self::PeekedBodyguard => "BP",
        };
        write!(f, "{}", code)
    }
}

/// Displays an optional category, `XX` standing in for "nobody".
pub struct Slot(pub Option<Category>);

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(category) => write!(f, "{}", category),
            None => write!(f, "XX"),
        }
    }
}
