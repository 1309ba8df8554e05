use std::io;

use address_space::{AddressSpace, ReplacementPolicy, Stats};
use log::{debug, warn};

use crate::{access_pattern::AccessPattern, report::Reporter};

/// Pushes every address of `pattern` through `space`, in order, handing each
/// result to `reporter`.
///
/// Out-of-bounds addresses are reported and skipped; the batch keeps going.
/// Only a failing reporter stops the run.
pub fn run<const PAGE_SIZE: usize, const N_PAGES: usize, const N_FRAMES: usize, P, R>(
    space: &mut AddressSpace<PAGE_SIZE, N_PAGES, N_FRAMES, P>,
    pattern: &AccessPattern,
    reporter: &mut R,
) -> io::Result<Stats>
where
    P: ReplacementPolicy<N_PAGES, N_FRAMES>,
    R: Reporter,
{
    debug!("Translating {} addresses", pattern.len());
    for logical_address in pattern.iter() {
        let result = space.access(logical_address);
        if let Err(err) = &result {
            warn!("{}", err);
        }
        reporter.report(logical_address, &result)?;
    }

    let stats = space.stats();
    reporter.finish(&stats)?;
    Ok(stats)
}
