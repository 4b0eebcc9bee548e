//! Odds Binary
//!
//! Builds the full game forest for one starting population and prints the
//! exact probability that each side wins under the chosen policy.
//!
//! Options: --mafia, --citizens, --detectives, --bodyguards, --policy, --states, --trees
use clap::Parser;
use clap::ValueEnum;
use robomafia::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    /// everyone acts on headcount alone
    Uniform,
    /// the detective's findings never reach the town
    Naive,
    /// the detective comes out once a mafia member is caught
    Informed,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = DEFAULT_MAFIA)]
    mafia: Count,
    #[arg(long, default_value_t = DEFAULT_CITIZENS)]
    citizens: Count,
    #[arg(long, default_value_t = DEFAULT_DETECTIVES)]
    detectives: Count,
    #[arg(long, default_value_t = DEFAULT_BODYGUARDS)]
    bodyguards: Count,
    #[arg(long, value_enum, default_value_t = Strategy::Uniform)]
    policy: Strategy,
    #[arg(long, help = "Dump every undecided state as JSON")]
    states: bool,
    #[arg(long, help = "Draw every day's tree")]
    trees: bool,
}

fn main() -> anyhow::Result<()> {
    robomafia::log();
    let args = Args::parse();
    anyhow::ensure!(args.detectives <= 1, "at most one detective is supported");
    anyhow::ensure!(args.bodyguards <= 1, "at most one bodyguard is supported");
    let population = Population::new(args.mafia, args.citizens, args.detectives, args.bodyguards);
    log::info!("{:<32}{}", "building forest", population);
    let forest = Forest::from(population);
    log::info!("{:<32}{}", "total nodes", forest.n());
    if args.trees {
        println!("{}", forest);
    }
    if args.states {
        println!("{}", serde_json::to_string_pretty(&forest.undecided())?);
    }
    let odds = match args.policy {
        Strategy::Uniform => forest.solve(&Uniform),
        Strategy::Naive => forest.solve(&Naive),
        Strategy::Informed => forest.solve(&Informed),
    };
    println!("{}", odds);
    Ok(())
}
