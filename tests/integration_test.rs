use address_space::{AccessKind, AddressSpace, TranslationError};
use clock_paging::{access_pattern::AccessPattern, report::TextReporter, simulation};
use rand::{rngs::StdRng, SeedableRng};

const PAGE_SIZE: usize = 256;
const NUM_PAGES: usize = 16;
const NUM_FRAMES: usize = 4;

#[test]
fn general() {
    let mut space = AddressSpace::<PAGE_SIZE, NUM_PAGES, NUM_FRAMES>::init().unwrap();
    let pattern = AccessPattern::random(
        200,
        space.memory_size(),
        &mut StdRng::seed_from_u64(1405),
    );
    let mut reporter = TextReporter::new(Vec::new());
    let stats = simulation::run(&mut space, &pattern, &mut reporter).unwrap();

    assert_eq!(stats.accesses, 200);
    assert_eq!(stats.hits + stats.faults, 200);
    assert!(stats.faults >= NUM_FRAMES as u64);
    assert_eq!(stats.evictions, stats.faults - NUM_FRAMES as u64);
    space.check_invariants().unwrap();

    let out = String::from_utf8(reporter.into_inner()).unwrap();
    // One line per address and the summary.
    assert_eq!(out.lines().count(), 201);
    assert!(out.lines().all(|line| !line.contains("Error")));
}

#[test]
fn same_seed_same_run() {
    let run = || {
        let mut space = AddressSpace::<PAGE_SIZE, NUM_PAGES, NUM_FRAMES>::init().unwrap();
        let pattern = AccessPattern::random(
            100,
            space.memory_size(),
            &mut StdRng::seed_from_u64(99),
        );
        let mut reporter = TextReporter::new(Vec::new()).verbose(true);
        simulation::run(&mut space, &pattern, &mut reporter).unwrap();
        (
            String::from_utf8(reporter.into_inner()).unwrap(),
            space.resident_pages(),
            space.cursor(),
        )
    };
    assert_eq!(run(), run());
}

#[test]
fn out_of_bounds_does_not_abort_batch() {
    let mut space = AddressSpace::<PAGE_SIZE, NUM_PAGES, NUM_FRAMES>::init().unwrap();
    let memory_size = space.memory_size();
    let pattern = AccessPattern::from_addresses(vec![0, memory_size, 257, memory_size + 300]);
    let mut reporter = TextReporter::new(Vec::new());
    let stats = simulation::run(&mut space, &pattern, &mut reporter).unwrap();
    assert_eq!(stats.accesses, 2);

    let out = String::from_utf8(reporter.into_inner()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Virtual Address:     0 -> Physical Address:     0");
    assert!(lines[1].contains("out of bounds"));
    assert_eq!(lines[2], "Virtual Address:   257 -> Physical Address:   257");
    assert!(lines[3].contains("out of bounds"));
}

#[test]
fn working_set_within_frames_stops_faulting() {
    let mut space = AddressSpace::<PAGE_SIZE, NUM_PAGES, NUM_FRAMES>::init().unwrap();
    let pages = [3u64, 9, 12, 0];
    for round in 0..5 {
        for page in pages {
            let rs = space.access(page * PAGE_SIZE as u64 + round).unwrap();
            if round == 0 {
                assert!(rs.kind.is_fault());
            } else {
                assert_eq!(rs.kind, AccessKind::Hit);
            }
        }
    }
    assert_eq!(space.stats().faults, 4);
}

#[test]
fn looping_over_one_page_more_than_frames_always_faults() {
    // Classic clock pathology: a cyclic scan over F + 1 pages misses every time.
    let mut space = AddressSpace::<PAGE_SIZE, NUM_PAGES, NUM_FRAMES>::init().unwrap();
    for _ in 0..4 {
        for page in 0..=NUM_FRAMES as u64 {
            space.translate(page * PAGE_SIZE as u64).unwrap();
        }
    }
    let stats = space.stats();
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.faults, 20);
}

#[test]
fn negative_like_addresses_are_out_of_bounds() {
    let mut space = AddressSpace::<PAGE_SIZE, NUM_PAGES, NUM_FRAMES>::init().unwrap();
    // A negative offset wraps around to a huge unsigned address.
    let address = (-1i64) as u64;
    assert!(matches!(
        space.translate(address),
        Err(TranslationError::OutOfBounds { .. })
    ));
    assert_eq!(space.stats().accesses, 0);
}
