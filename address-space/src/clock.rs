use log::{debug, info, trace};

use crate::{frame_table::FrameTable, page_table::PageTable};

/// Outcome of servicing a page fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fault {
    /// Frame the faulting page now occupies.
    pub frame_number: usize,
    /// Page that had to leave that frame, if the frame was occupied.
    pub evicted: Option<usize>,
}

/// Picks a frame for a page that is not resident and installs it there.
///
/// Implementations mutate both tables: after `handle_fault` returns, the page
/// is present in the page table and referenced by exactly one frame slot, and
/// any evicted page is no longer present.
pub trait ReplacementPolicy<const N_PAGES: usize, const N_FRAMES: usize> {
    fn handle_fault(
        &mut self,
        page_number: usize,
        page_table: &mut PageTable<N_PAGES>,
        frames: &mut FrameTable<N_FRAMES>,
    ) -> Fault;

    /// Next frame the policy will look at.
    fn cursor(&self) -> usize;
}

/// Second-chance replacement with a single hand sweeping the frames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clock {
    hand: usize,
}

impl Clock {
    pub fn new() -> Self {
        Self { hand: 0 }
    }

    fn advance(&mut self, n_frames: usize) {
        self.hand = (self.hand + 1) % n_frames;
        trace!("Clock hand moved to frame {}", self.hand);
    }
}

impl<const N_PAGES: usize, const N_FRAMES: usize> ReplacementPolicy<N_PAGES, N_FRAMES> for Clock {
    fn handle_fault(
        &mut self,
        page_number: usize,
        page_table: &mut PageTable<N_PAGES>,
        frames: &mut FrameTable<N_FRAMES>,
    ) -> Fault {
        info!("Page fault occurred for page {}", page_number);

        // The first lap clears the use bit of every occupied frame it passes,
        // so by the time the hand returns to where it started every frame is
        // either empty or unused. A victim is found within two laps.
        for _ in 0..2 * N_FRAMES {
            let frame_number = self.hand;
            match frames.occupant(frame_number) {
                Some(resident) if page_table.is_used(resident) => {
                    debug!("Giving page {} in frame {} a second chance", resident, frame_number);
                    page_table.clear_used(resident);
                    self.advance(N_FRAMES);
                }
                occupant => {
                    if let Some(evicted) = occupant {
                        info!("Replacing page {} from frame {}", evicted, frame_number);
                        page_table.unmap_page(evicted);
                    }
                    frames.install(frame_number, page_number);
                    page_table.map_to_frame(page_number, frame_number);
                    self.advance(N_FRAMES);
                    return Fault {
                        frame_number,
                        evicted: occupant,
                    };
                }
            }
        }

        unreachable!(
            "clock scan over {} frames found no victim for page {}",
            N_FRAMES, page_number
        )
    }

    fn cursor(&self) -> usize {
        self.hand
    }
}
