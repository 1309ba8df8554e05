//! Demand-paged address translation over a frame pool smaller than the
//! logical address space, with clock (second-chance) replacement.

pub mod clock;
pub mod error;
pub mod frame_table;
pub mod page_table;


use log::{debug, warn};

pub use clock::{Clock, Fault, ReplacementPolicy};
pub use error::{ConfigError, InvariantViolation, TranslationError};
pub use frame_table::FrameTable;
pub use page_table::{PageTable, PageTableEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    Hit,
    Fault { evicted: Option<usize> },
}

impl AccessKind {
    pub fn is_fault(&self) -> bool {
        matches!(self, AccessKind::Fault { .. })
    }
}

/// Everything learned while translating one logical address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    pub logical_address: u64,
    pub page_number: usize,
    pub offset: u64,
    pub frame_number: usize,
    pub physical_address: u64,
    pub kind: AccessKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub accesses: u64,
    pub hits: u64,
    pub faults: u64,
    pub evictions: u64,
}

impl Stats {
    pub fn hit_ratio(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.hits as f64 / self.accesses as f64
        }
    }
}

/// A single process's address space: `N_PAGES` pages of `PAGE_SIZE` bytes
/// backed by `N_FRAMES` physical frames.
///
/// Pages are brought in on first touch. When every frame is taken the
/// replacement policy (clock by default) decides which resident page leaves.
#[derive(Debug, Clone)]
pub struct AddressSpace<
    const PAGE_SIZE: usize,
    const N_PAGES: usize,
    const N_FRAMES: usize,
    P = Clock,
> {
    page_table: PageTable<N_PAGES>,
    frames: FrameTable<N_FRAMES>,
    policy: P,
    stats: Stats,
}

impl<const PAGE_SIZE: usize, const N_PAGES: usize, const N_FRAMES: usize>
    AddressSpace<PAGE_SIZE, N_PAGES, N_FRAMES, Clock>
{
    pub fn init() -> Result<Self, ConfigError> {
        Self::with_policy(Clock::new())
    }
}

impl<const PAGE_SIZE: usize, const N_PAGES: usize, const N_FRAMES: usize, P>
    AddressSpace<PAGE_SIZE, N_PAGES, N_FRAMES, P>
where
    P: ReplacementPolicy<N_PAGES, N_FRAMES>,
{
    pub fn with_policy(policy: P) -> Result<Self, ConfigError> {
        if PAGE_SIZE == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if N_PAGES == 0 {
            return Err(ConfigError::NoPages);
        }
        if N_FRAMES == 0 {
            return Err(ConfigError::NoFrames);
        }
        if N_FRAMES >= N_PAGES {
            warn!(
                "{} frames for {} pages: every page fits, no page will be replaced",
                N_FRAMES, N_PAGES
            );
        }
        Ok(Self {
            page_table: PageTable::init(),
            frames: FrameTable::init(),
            policy,
            stats: Stats::default(),
        })
    }

    /// Size in bytes of the logical address space.
    pub fn memory_size(&self) -> u64 {
        (N_PAGES * PAGE_SIZE) as u64
    }

    /// Translates a logical address, faulting the page in when needed.
    pub fn translate(&mut self, logical_address: u64) -> Result<u64, TranslationError> {
        self.access(logical_address)
            .map(|translation| translation.physical_address)
    }

    /// Like [`translate`](Self::translate) but reports how the access was
    /// served. An out-of-bounds address leaves every table untouched.
    pub fn access(&mut self, logical_address: u64) -> Result<Translation, TranslationError> {
        let page_size = PAGE_SIZE as u64;
        let page = logical_address / page_size;
        let offset = logical_address % page_size;

        if page >= N_PAGES as u64 {
            return Err(TranslationError::OutOfBounds {
                address: logical_address,
                page_number: page,
            });
        }
        let page_number = page as usize;

        let (frame_number, kind) = match self.page_table.get_frame(page_number) {
            Some(frame_number) => {
                debug!("Page {} hit in frame {}", page_number, frame_number);
                self.stats.hits += 1;
                (frame_number, AccessKind::Hit)
            }
            None => {
                let fault = self
                    .policy
                    .handle_fault(page_number, &mut self.page_table, &mut self.frames);
                self.stats.faults += 1;
                if fault.evicted.is_some() {
                    self.stats.evictions += 1;
                }
                (
                    fault.frame_number,
                    AccessKind::Fault {
                        evicted: fault.evicted,
                    },
                )
            }
        };

        // Already set by a fresh fault; an access always marks the page used.
        self.page_table.set_used(page_number);
        self.stats.accesses += 1;

        Ok(Translation {
            logical_address,
            page_number,
            offset,
            frame_number,
            physical_address: frame_number as u64 * page_size + offset,
            kind,
        })
    }

    pub fn entry(&self, page_number: usize) -> Option<&PageTableEntry> {
        self.page_table.get_entry(page_number)
    }

    pub fn page_table(&self) -> &PageTable<N_PAGES> {
        &self.page_table
    }

    pub fn frames(&self) -> &FrameTable<N_FRAMES> {
        &self.frames
    }

    /// Resident pages in frame order.
    pub fn resident_pages(&self) -> Vec<usize> {
        self.frames.as_slice().iter().flatten().copied().collect()
    }

    pub fn cursor(&self) -> usize {
        self.policy.cursor()
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Cross-checks the page table against the frame table.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        for (page_number, entry) in self.page_table.iter() {
            if let Some(frame_number) = entry.frame_number() {
                let occupant = self.frames.occupant(frame_number);
                if occupant != Some(page_number) {
                    return Err(InvariantViolation::FrameMismatch {
                        page_number,
                        frame_number,
                        occupant,
                    });
                }
            }
        }

        let mut seen = [false; N_PAGES];
        for (frame_number, occupant) in self.frames.as_slice().iter().enumerate() {
            let Some(page_number) = *occupant else {
                continue;
            };
            if !self.page_table.is_present(page_number) {
                return Err(InvariantViolation::StaleOccupant {
                    frame_number,
                    page_number,
                });
            }
            if std::mem::replace(&mut seen[page_number], true) {
                return Err(InvariantViolation::DuplicateOccupant { page_number });
            }
        }

        let cursor = self.policy.cursor();
        if cursor >= N_FRAMES {
            return Err(InvariantViolation::CursorOutOfRange { cursor });
        }
        Ok(())
    }
}
