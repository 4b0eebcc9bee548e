//! Exact win probabilities for Mafia/Werewolf games.
//!
//! Players are never tracked individually. A [`GameState`] holds how many living
//! players sit in each of twelve role/knowledge [`Category`]s, and the whole
//! reachable state space is enumerated as a [`Forest`] of per-day trees. A
//! pluggable [`Policy`] assigns exact rational weights to every branch, and the
//! solver pushes probability mass through the forest to produce [`Odds`].
pub mod forest;
pub mod game;
pub mod outcome;
pub mod solver;
pub mod strategy;


pub use forest::*;
pub use game::*;
pub use outcome::*;
pub use solver::*;
pub use strategy::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Living players in a single category.
pub type Count = u16;
/// Day counter, starting at 1.
pub type Day = u16;
/// Exact probability mass. Never a float: sums must hit 1 without drift.
pub type Probability = num_rational::BigRational;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Number of role/knowledge categories.
pub const CATEGORIES: usize = 12;
/// Upper bound (inclusive) on any category drawn by [`Arbitrary`].
pub const ARBITRARY_COUNT: Count = 3;

// ============================================================================
// DEFAULT SCENARIO
// Two mafia hiding among nineteen citizens, no power roles.
// ============================================================================
/// Default mafia count for the driver.
pub const DEFAULT_MAFIA: Count = 2;
/// Default citizen count for the driver.
pub const DEFAULT_CITIZENS: Count = 19;
/// Default detective count for the driver.
pub const DEFAULT_DETECTIVES: Count = 0;
/// Default bodyguard count for the driver.
pub const DEFAULT_BODYGUARDS: Count = 0;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Terminal logger at INFO plus a per-run DEBUG file under `logs/`.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let path = logfile(std::time::SystemTime::now());
    let file = std::fs::File::create(&path).expect("create log file");
    simplelog::CombinedLogger::init(vec![
        simplelog::TermLogger::new(
            log::LevelFilter::Info,
            config.clone(),
            simplelog::TerminalMode::Stderr,
            simplelog::ColorChoice::Auto,
        ),
        simplelog::WriteLogger::new(log::LevelFilter::Debug, config, file),
    ])
    .expect("initialize logger");
    log::debug!("logging to {}", path);
}

/// `logs/odds-<unix seconds>.log`
#[cfg(feature = "cli")]
fn logfile(now: std::time::SystemTime) -> String {
    let secs = now
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    format!("logs/odds-{}.log", secs)
}
