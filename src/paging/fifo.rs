use super::frame::{FrameSet, SlotId};
use super::replacer::Replacer;

/// Evicts pages in the order they were loaded.
#[derive(Debug)]
pub struct FifoReplacer {
    /// Slot holding the oldest loaded page
    next: SlotId,
    capacity: usize,
}

impl FifoReplacer {
    pub fn new(capacity: usize) -> Self {
        Self { next: 0, capacity }
    }
}

impl Replacer for FifoReplacer {
    fn capacity(&self) -> usize {
        self.capacity
    }

    // Hits never change insertion order.
    fn record_hit(&mut self, _slot: SlotId) {}

    fn victim(&mut self, _frames: &FrameSet) -> SlotId {
        self.next
    }

    fn record_insert(&mut self, _slot: SlotId) {
        self.next = (self.next + 1) % self.capacity;
    }

    fn reset(&mut self) {
        self.next = 0;
    }
}
