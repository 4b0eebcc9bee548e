use crate::Category;
use crate::Distribution;
use crate::GameState;
use crate::NightAction;
use crate::Outcome;
use crate::Overlap;
use crate::Population;
use crate::Probability;
use num_bigint::BigInt;
use num_traits::One;
use num_traits::Zero;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Weight of each offered choice, keyed by the category it names.
pub type Shares = BTreeMap<Option<Category>, Probability>;

pub fn ratio(numerator: i64, denominator: i64) -> Probability {
    Probability::new(BigInt::from(numerator), BigInt::from(denominator))
}

/// Each offered category weighted by its share of the offered players.
/// An absent actor offers only `None`, which is certain.
pub fn shares<I>(population: &Population, offered: I) -> Shares
where
    I: IntoIterator<Item = Option<Category>>,
{
    let offered = offered.into_iter().collect::<BTreeSet<_>>();
    assert!(
        !offered.contains(&None) || offered.len() == 1,
        "an actor both acts and abstains in {}",
        population
    );
    let total = offered
        .iter()
        .flatten()
        .map(|c| i64::from(population[*c]))
        .sum::<i64>();
    offered
        .into_iter()
        .map(|slot| match slot {
            Some(c) => (slot, ratio(i64::from(population[c]), total)),
            None => (slot, Probability::one()),
        })
        .collect()
}

/// All weight on `target`, none on the other offered choices.
pub fn certain<I>(offered: I, target: Option<Category>) -> Shares
where
    I: IntoIterator<Item = Option<Category>>,
{
    let shares = offered
        .into_iter()
        .map(|slot| match slot == target {
            true => (slot, Probability::one()),
            false => (slot, Probability::zero()),
        })
        .collect::<Shares>();
    assert!(shares.contains_key(&target), "{:?} is not on offer", target);
    shares
}

/// Chance that independent uniform picks inside the shared category land
/// on individuals as this sub-case describes.
///
/// With `n` members, two picks coincide with odds `1/n`; three picks fall
/// on one individual with `1/n²`, on exactly two with `(n-1)/n²` per
/// pairing, and on three different individuals with `(n-1)(n-2)/n²`.
pub fn coincidence(action: &NightAction, population: &Population) -> Probability {
    let shared = match action.overlap() {
        Overlap::Distinct => return Probability::one(),
        Overlap::PeekGuard => action.peek().expect("peek coincides with guard"),
        _ => action.kill(),
    };
    let n = i64::from(population[shared]);
    match (action.overlap(), action.case()) {
        (Overlap::Triple, Some(0)) => ratio(1, n * n),
        (Overlap::Triple, Some(1..=3)) => ratio(n - 1, n * n),
        (Overlap::Triple, Some(4)) => ratio((n - 1) * (n - 2), n * n),
        (_, Some(0)) => ratio(1, n),
        (_, Some(1)) => ratio(n - 1, n),
        (overlap, case) => unreachable!("no sub-case {:?} for {:?}", case, overlap),
    }
}

/// Coinciding choices always land on one individual.
pub fn exclusive(action: &NightAction, _: &Population) -> Probability {
    match action.case() {
        None | Some(0) => Probability::one(),
        Some(_) => Probability::zero(),
    }
}

/// The night keys on offer, in generator order.
pub fn actions(state: &GameState, choices: &[Outcome]) -> Vec<NightAction> {
    choices
        .iter()
        .map(|outcome| match outcome.night() {
            Some(action) => *action,
            None => panic!("{} offered at night {}", outcome, state),
        })
        .collect()
}

/// Kill categories on offer.
pub fn kills(actions: &[NightAction]) -> impl Iterator<Item = Option<Category>> + '_ {
    actions.iter().map(|a| Some(a.kill()))
}

/// Independent mafia, detective and bodyguard choices, with coinciding
/// choices split among their sub-cases by `split`.
///
/// Peeks and guards are weighted by population share.
pub fn joint<S>(state: &GameState, choices: &[Outcome], kills: &Shares, split: S) -> Distribution
where
    S: Fn(&NightAction, &Population) -> Probability,
{
    let population = state.population();
    let actions = actions(state, choices);
    let peeks = shares(population, actions.iter().map(NightAction::peek));
    let guards = shares(population, actions.iter().map(NightAction::guard));
    choices
        .iter()
        .zip(actions.iter())
        .map(|(outcome, action)| {
            let weight = &kills[&Some(action.kill())]
                * &peeks[&action.peek()]
                * &guards[&action.guard()]
                * split(action, population);
            (*outcome, weight)
        })
        .collect()
}

/// Eliminate by population share among categories `suspect` accepts.
/// Never reveals.
pub fn lynch<F>(state: &GameState, choices: &[Outcome], suspect: F) -> Distribution
where
    F: Fn(Category) -> bool,
{
    let suspects = shares(
        state.population(),
        choices.iter().filter_map(|outcome| match outcome {
            Outcome::Eliminate(c) if suspect(*c) => Some(Some(*c)),
            _ => None,
        }),
    );
    choices
        .iter()
        .map(|outcome| match outcome {
            Outcome::Eliminate(c) => (*outcome, suspects.get(&Some(*c)).cloned().unwrap_or_else(Probability::zero)),
            _ => (*outcome, Probability::zero()),
        })
        .collect()
}

/// All weight on one key.
pub fn only(state: &GameState, choices: &[Outcome], target: Outcome) -> Distribution {
    assert!(choices.contains(&target), "{} is not on offer at {}", target, state);
    choices
        .iter()
        .map(|outcome| match *outcome == target {
            true => (*outcome, Probability::one()),
            false => (*outcome, Probability::zero()),
        })
        .collect()
}
