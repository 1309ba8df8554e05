/// Physical frames and the page resident in each of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTable<const N_FRAMES: usize> {
    frames: [Option<usize>; N_FRAMES],
}

impl<const N_FRAMES: usize> FrameTable<N_FRAMES> {
    pub fn init() -> Self {
        Self {
            frames: [None; N_FRAMES],
        }
    }

    pub fn len(&self) -> usize {
        N_FRAMES
    }

    pub fn is_empty(&self) -> bool {
        N_FRAMES == 0
    }

    /// Page held by `frame_number`, `None` for an empty or nonexistent frame.
    pub fn occupant(&self, frame_number: usize) -> Option<usize> {
        self.frames.get(frame_number).copied().flatten()
    }

    /// Puts `page_number` in the frame and hands back the previous occupant.
    pub fn install(&mut self, frame_number: usize, page_number: usize) -> Option<usize> {
        self.frames[frame_number].replace(page_number)
    }

    pub fn find_page(&self, page_number: usize) -> Option<usize> {
        self.frames
            .iter()
            .position(|occupant| *occupant == Some(page_number))
    }

    pub fn occupied_count(&self) -> usize {
        self.frames.iter().filter(|occupant| occupant.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied_count() == N_FRAMES
    }

    pub fn as_slice(&self) -> &[Option<usize>] {
        &self.frames
    }
}

impl<const N_FRAMES: usize> Default for FrameTable<N_FRAMES> {
    fn default() -> Self {
        Self::init()
    }
}
