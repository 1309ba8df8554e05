use std::process::ExitCode;

use address_space::AddressSpace;
use clock_paging::{
    access_pattern::AccessPattern,
    report::TextReporter,
    simulation,
};
use env_logger::Env;
use log::error;
use rand::{rngs::StdRng, SeedableRng};

const PAGE_SIZE: usize = 256;
const NUM_PAGES: usize = 16;
const NUM_FRAMES: usize = 4;
const NUM_ADDRESSES: usize = 20;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut space = match AddressSpace::<PAGE_SIZE, NUM_PAGES, NUM_FRAMES>::init() {
        Ok(space) => space,
        Err(err) => {
            error!("Invalid memory configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };

    // An optional seed makes the run reproducible.
    let pattern = match std::env::args().nth(1) {
        Some(seed) => match seed.parse::<u64>() {
            Ok(seed) => AccessPattern::random(
                NUM_ADDRESSES,
                space.memory_size(),
                &mut StdRng::seed_from_u64(seed),
            ),
            Err(err) => {
                error!("Seed {:?} is not a number: {}", seed, err);
                return ExitCode::FAILURE;
            }
        },
        None => AccessPattern::random(NUM_ADDRESSES, space.memory_size(), &mut rand::thread_rng()),
    };

    let stdout = std::io::stdout();
    let mut reporter = TextReporter::new(stdout.lock());
    let result = reporter
        .header()
        .and_then(|_| simulation::run(&mut space, &pattern, &mut reporter));
    if let Err(err) = result {
        error!("Failed to write report: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
