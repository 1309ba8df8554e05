use super::PageTableEntry;

/// Walks the page table in page-number order.
pub struct PageTableIterator<'a> {
    current: usize,
    entries: &'a [PageTableEntry],
}

impl<'a> PageTableIterator<'a> {
    pub(super) fn new(entries: &'a [PageTableEntry]) -> Self {
        Self {
            current: 0,
            entries,
        }
    }
}

impl<'a> Iterator for PageTableIterator<'a> {
    type Item = (usize, &'a PageTableEntry);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.get(self.current)?;
        let page_number = self.current;
        self.current += 1;
        Some((page_number, entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entries.len().saturating_sub(self.current);
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for PageTableIterator<'a> {}
