/// One entry per logical page: where the page lives and whether it was
/// touched since the clock hand last passed it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageTableEntry {
    frame_number: Option<usize>,
    present: bool,
    used: bool,
}

impl PageTableEntry {
    pub(super) fn unmapped() -> Self {
        PageTableEntry {
            frame_number: None,
            present: false,
            used: false,
        }
    }

    /// Frame holding the page, `None` while the page is not resident.
    pub fn frame_number(&self) -> Option<usize> {
        if self.present {
            self.frame_number
        } else {
            None
        }
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    pub fn is_used(&self) -> bool {
        self.used
    }

    pub(super) fn set_frame_number(&mut self, frame_number: usize) {
        self.frame_number = Some(frame_number);
        self.present = true;
    }

    pub(super) fn set_used(&mut self, used: bool) {
        self.used = used;
    }

    /// The use bit is left as it was; it is rewritten on the next install.
    pub(super) fn clear_frame(&mut self) {
        self.frame_number = None;
        self.present = false;
    }
}
