use super::PageId;

pub type SlotId = usize;

/// Fixed-capacity set of frames, each empty or holding one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet {
    slots: Vec<Option<PageId>>,
}

impl FrameSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slot holding `page`, scanning in index order.
    pub fn find(&self, page: PageId) -> Option<SlotId> {
        self.slots.iter().position(|&slot| slot == Some(page))
    }

    pub fn first_empty(&self) -> Option<SlotId> {
        self.slots.iter().position(|slot| slot.is_none())
    }

    /// Load `page` into `slot`, returning the page it replaced.
    ///
    /// `slot` must be below [`FrameSet::capacity`].
    pub fn load(&mut self, slot: SlotId, page: PageId) -> Option<PageId> {
        self.slots[slot].replace(page)
    }

    pub fn snapshot(&self) -> Vec<Option<PageId>> {
        self.slots.clone()
    }
}
