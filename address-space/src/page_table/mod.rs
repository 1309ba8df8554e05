mod iter;
mod page_table_entry;

pub use iter::PageTableIterator;
pub use page_table_entry::PageTableEntry;

/// Maps every logical page to the frame it occupies, if any.
///
/// Mutators take a page number that the caller has already validated against
/// `N_PAGES` and panic otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTable<const N_PAGES: usize> {
    entries: [PageTableEntry; N_PAGES],
}

impl<const N_PAGES: usize> PageTable<N_PAGES> {
    pub fn init() -> Self {
        Self {
            entries: [PageTableEntry::unmapped(); N_PAGES],
        }
    }

    pub fn len(&self) -> usize {
        N_PAGES
    }

    pub fn is_empty(&self) -> bool {
        N_PAGES == 0
    }

    pub fn get_entry(&self, page_number: usize) -> Option<&PageTableEntry> {
        self.entries.get(page_number)
    }

    /// Frame of a resident page. Unmapped and out-of-range pages give `None`.
    pub fn get_frame(&self, page_number: usize) -> Option<usize> {
        self.get_entry(page_number)?.frame_number()
    }

    pub fn is_present(&self, page_number: usize) -> bool {
        self.get_entry(page_number)
            .map_or(false, PageTableEntry::is_present)
    }

    pub fn is_used(&self, page_number: usize) -> bool {
        self.get_entry(page_number)
            .map_or(false, PageTableEntry::is_used)
    }

    pub fn set_used(&mut self, page_number: usize) {
        self.entries[page_number].set_used(true);
    }

    pub fn clear_used(&mut self, page_number: usize) {
        self.entries[page_number].set_used(false);
    }

    /// Installs a freshly faulted page: present, mapped and marked used.
    pub fn map_to_frame(&mut self, page_number: usize, frame_number: usize) {
        let entry = &mut self.entries[page_number];
        entry.set_frame_number(frame_number);
        entry.set_used(true);
    }

    pub fn unmap_page(&mut self, page_number: usize) {
        self.entries[page_number].clear_frame();
    }

    pub fn resident_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_present()).count()
    }

    pub fn iter(&self) -> PageTableIterator<'_> {
        PageTableIterator::new(&self.entries)
    }
}

impl<const N_PAGES: usize> Default for PageTable<N_PAGES> {
    fn default() -> Self {
        Self::init()
    }
}
