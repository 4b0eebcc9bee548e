use crate::Category;
use crate::Count;

/// Which of the three night choices name the same category.
///
/// Members of a category are indistinguishable, so when choices coincide the
/// generator must enumerate every way they could have landed on individuals.
/// Each way is a sub-case; sub-cases are never merged even when their
/// resulting states are equal, since a policy may weight them differently.
///
/// | Overlap     | Sub-cases                                                   |
/// |-------------|-------------------------------------------------------------|
/// | `Distinct`  | one, unindexed                                              |
/// | `KillPeek`  | 0 same individual; 1 different (n ≥ 2)                      |
/// | `KillGuard` | 0 same individual; 1 different (n ≥ 2)                      |
/// | `PeekGuard` | 0 same individual; 1 different (n ≥ 2)                      |
/// | `Triple`    | 0 all same; 1 kill=peek; 2 kill=guard; 3 peek=guard (n ≥ 2); 4 all different (n ≥ 3) |
///
/// The triple's five sub-cases are the set partitions of {kill, peek, guard},
/// so the enumeration is complete for any population.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Overlap {
    Distinct,
    KillPeek,
    KillGuard,
    PeekGuard,
    Triple,
}

impl Overlap {
    pub fn of(kill: Category, peek: Option<Category>, guard: Option<Category>) -> Self {
        let kp = peek == Some(kill);
        let kg = guard == Some(kill);
        let pg = peek.is_some() && peek == guard;
        match (kp, kg, pg) {
            (true, true, _) => Self::Triple,
            (true, false, false) => Self::KillPeek,
            (false, true, false) => Self::KillGuard,
            (false, false, true) => Self::PeekGuard,
            (false, false, false) => Self::Distinct,
            (true, false, true) | (false, true, true) => unreachable!("equality is transitive"),
        }
    }
    /// Number of distinguishable sub-cases when the shared category holds `n`.
    pub fn cases(&self, n: Count) -> u8 {
        assert!(n > 0, "choices coincide on an empty category");
        match (self, n) {
            (Self::Distinct, _) => 1,
            (Self::Triple, 1) => 1,
            (Self::Triple, 2) => 4,
            (Self::Triple, _) => 5,
            (_, 1) => 1,
            (_, _) => 2,
        }
    }
    /// Whether keys carry a disambiguation index.
    pub fn indexed(&self) -> bool {
        !matches!(self, Self::Distinct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify() {
        use Category::*;
        assert_eq!(Overlap::of(Citizen, None, None), Overlap::Distinct);
        assert_eq!(Overlap::of(Citizen, Some(Mafia), Some(Bodyguard)), Overlap::Distinct);
        assert_eq!(Overlap::of(Citizen, Some(Citizen), None), Overlap::KillPeek);
        assert_eq!(Overlap::of(Citizen, Some(Citizen), Some(Mafia)), Overlap::KillPeek);
        assert_eq!(Overlap::of(Citizen, None, Some(Citizen)), Overlap::KillGuard);
        assert_eq!(Overlap::of(Citizen, Some(Mafia), Some(Mafia)), Overlap::PeekGuard);
        assert_eq!(Overlap::of(Citizen, Some(Citizen), Some(Citizen)), Overlap::Triple);
    }

    #[test]
    fn case_counts() {
        assert_eq!(Overlap::KillPeek.cases(1), 1);
        assert_eq!(Overlap::KillPeek.cases(2), 2);
        assert_eq!(Overlap::KillGuard.cases(7), 2);
        assert_eq!(Overlap::Triple.cases(1), 1);
        assert_eq!(Overlap::Triple.cases(2), 4);
        assert_eq!(Overlap::Triple.cases(3), 5);
        assert_eq!(Overlap::Triple.cases(9), 5);
    }
}
