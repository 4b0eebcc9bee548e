use super::*;
use crate::Category;
use crate::Slot;
use serde::Deserialize;
use serde::Serialize;

/// The joint night choice of mafia, detective and bodyguard.
///
/// `case` disambiguates which individuals the choices actually landed on when
/// two or three of them name the same category. It is `None` whenever the
/// chosen categories are all different (or only one actor acts), and indexes
/// the sub-cases of the [`Overlap`] otherwise.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NightAction {
    kill: Category,
    peek: Option<Category>,
    guard: Option<Category>,
    case: Option<u8>,
}

impl NightAction {
    pub fn new(
        kill: Category,
        peek: Option<Category>,
        guard: Option<Category>,
        case: Option<u8>,
    ) -> Self {
        debug_assert!(
            case.is_some() == (Overlap::of(kill, peek, guard) != Overlap::Distinct),
            "case index must be present exactly when choices coincide"
        );
        Self {
            kill,
            peek,
            guard,
            case,
        }
    }
    pub fn kill(&self) -> Category {
        self.kill
    }
    pub fn peek(&self) -> Option<Category> {
        self.peek
    }
    pub fn guard(&self) -> Option<Category> {
        self.guard
    }
    pub fn case(&self) -> Option<u8> {
        self.case
    }
    pub fn overlap(&self) -> Overlap {
        Overlap::of(self.kill, self.peek, self.guard)
    }
    /// Whether the bodyguard stood in front of the mafia's victim.
    pub fn saves(&self) -> bool {
        match (self.overlap(), self.case) {
            (Overlap::KillGuard, Some(0)) => true,
            (Overlap::Triple, Some(0)) => true,
            (Overlap::Triple, Some(2)) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for NightAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.kill, Slot(self.peek), Slot(self.guard))?;
        match self.case {
            Some(case) => write!(f, "{}", case),
            None => Ok(()),
        }
    }
}
