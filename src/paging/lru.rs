use super::frame::{FrameSet, SlotId};
use super::replacer::Replacer;

/// Evicts the page whose last use is oldest, using a logical clock.
#[derive(Debug)]
pub struct LruReplacer {
    /// Clock value at each slot's last access or insertion
    stamps: Vec<u64>,
    /// Ticks once per requested page
    clock: u64,
}

impl LruReplacer {
    pub fn new(capacity: usize) -> Self {
        Self {
            stamps: vec![0; capacity],
            clock: 0,
        }
    }

    pub fn clock(&self) -> u64 {
        self.clock
    }

    pub fn stamp(&self, slot: SlotId) -> Option<u64> {
        self.stamps.get(slot).copied()
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }
}

impl Replacer for LruReplacer {
    fn capacity(&self) -> usize {
        self.stamps.len()
    }

    fn record_hit(&mut self, slot: SlotId) {
        let now = self.tick();
        self.stamps[slot] = now;
    }

    fn victim(&mut self, frames: &FrameSet) -> SlotId {
        if let Some(slot) = frames.first_empty() {
            return slot;
        }

        // Strict comparison keeps the lowest index among equal stamps
        let mut victim = 0;
        for (slot, &stamp) in self.stamps.iter().enumerate() {
            if stamp < self.stamps[victim] {
                victim = slot;
            }
        }
        victim
    }

    fn record_insert(&mut self, slot: SlotId) {
        let now = self.tick();
        self.stamps[slot] = now;
    }

    fn reset(&mut self) {
        self.stamps.fill(0);
        self.clock = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_frames(pages: &[i64]) -> FrameSet {
        let mut frames = FrameSet::new(pages.len());
        for (slot, &page) in pages.iter().enumerate() {
            frames.load(slot, page);
        }
        frames
    }

    #[test]
    fn test_prefers_empty_slot() {
        let mut frames = FrameSet::new(3);
        let mut replacer = LruReplacer::new(3);

        frames.load(0, 1);
        replacer.record_insert(0);

        assert_eq!(replacer.victim(&frames), 1);
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let frames = full_frames(&[1, 2, 3]);
        let mut replacer = LruReplacer::new(3);

        replacer.record_insert(0);
        replacer.record_insert(1);
        replacer.record_insert(2);
        assert_eq!(replacer.victim(&frames), 0);

        // Touching slot 0 makes slot 1 the oldest
        replacer.record_hit(0);
        assert_eq!(replacer.victim(&frames), 1);
        assert_eq!(replacer.stamp(0), Some(4));
        assert_eq!(replacer.clock(), 4);
    }

    #[test]
    fn test_ties_resolve_to_lowest_index() {
        let frames = full_frames(&[5, 6, 7]);
        let mut replacer = LruReplacer::new(3);

        // All stamps are zero
        assert_eq!(replacer.victim(&frames), 0);
    }

    #[test]
    fn test_stamps_never_exceed_clock() {
        let frames = full_frames(&[1, 2]);
        let mut replacer = LruReplacer::new(2);

        for step in 0..10 {
            if step % 3 == 0 {
                let slot = replacer.victim(&frames);
                replacer.record_insert(slot);
            } else {
                replacer.record_hit(step % 2);
            }
            for slot in 0..2 {
                assert!(replacer.stamp(slot).unwrap() <= replacer.clock());
            }
        }
        assert_eq!(replacer.clock(), 10);
    }

    #[test]
    fn test_reset_clears_stamps_and_clock() {
        let frames = full_frames(&[1, 2]);
        let mut replacer = LruReplacer::new(2);

        replacer.record_insert(0);
        replacer.record_insert(1);
        replacer.record_hit(0);
        replacer.reset();

        assert_eq!(replacer.clock(), 0);
        assert_eq!(replacer.stamp(0), Some(0));
        assert_eq!(replacer.stamp(1), Some(0));
        assert_eq!(replacer.victim(&frames), 0);
    }
}
