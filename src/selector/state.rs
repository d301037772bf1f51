use crate::corpus::{CorpusIndex, IndexedPage};
use std::collections::HashSet;

/// Everything one selection run mutates. The corpus index it starts from is
/// never touched.
pub struct SelectionState {
    /// Pages that can still be picked, in corpus order.
    pub active: Vec<IndexedPage>,
    /// Locations not yet covered by a sampled page.
    pub candidates: HashSet<String>,
    pub sample: Vec<String>,
}

impl SelectionState {
    pub fn new(index: &CorpusIndex) -> Self {
        Self {
            active: index.pages().to_vec(),
            candidates: index.distinct_locations().iter().cloned().collect(),
            sample: Vec::new(),
        }
    }

    /// Moves the active page at `position` into the sample and marks all of its
    /// locations as covered.
    pub fn commit(&mut self, position: usize) -> IndexedPage {
        let page = self.active.remove(position);
        for location in &page.locations {
            self.candidates.remove(location);
        }
        self.sample.push(page.url.clone());
        page
    }
}
