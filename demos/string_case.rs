//! Evolves random lowercase strings toward a target word.
//!
//! ```text
//! RUST_LOG=debug cargo run --example string_case -- hello 42
//! ```
//!
//! Arguments: target word (default `hello`), seed (default random).

use genealgo::ga::{
    GaConfig, GenomeFactory, GeneticAlgo, MutationStrategy, RandomAdderMutator,
    RandomResettingMutator, RouletteWheelSelector, SinglePointCrossover,
};
use genealgo::random::rng_from;
use genealgo::strings::{lowercase_alphabet, string_factory, to_string, StringFitness};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let target = args.next().unwrap_or_else(|| "hello".to_string());
    let seed = args.next().map(|s| s.parse::<u64>()).transpose()?;

    // Grow short strings when the target is long, otherwise reset genes in place
    let mutator: MutationStrategy<char> = if target.chars().count() > 10 {
        RandomAdderMutator::new(0.3, lowercase_alphabet())?.into()
    } else {
        RandomResettingMutator::new(0.1, lowercase_alphabet())?.into()
    };

    let config = GaConfig::default().with_generations(200);

    // One RNG drives both population generation and the run
    let mut rng = rng_from(seed);
    let population = string_factory(50, (1, 10))?.generate(&mut rng)?;
    let ga = GeneticAlgo::new(
        StringFitness::new(&target),
        RouletteWheelSelector::default(),
        SinglePointCrossover::from_key("balance")?,
        mutator,
        config,
    )?;

    let result = ga.run_with_rng(population, &mut rng)?;
    for record in &result.records {
        println!(
            "gen {:>4}  fitness {:.4}  {}",
            record.generation,
            record.fitness,
            to_string(&record.best)
        );
    }
    println!("{:?} after {} generations", result.state, result.generations());

    Ok(())
}
