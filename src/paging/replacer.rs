use std::fmt::Debug;

use super::frame::{FrameSet, SlotId};

pub trait Replacer: Debug {
    /// Number of slots in the frame set this replacer manages.
    fn capacity(&self) -> usize;

    /// Record that the page resident in `slot` was requested again.
    fn record_hit(&mut self, slot: SlotId);

    /// Select the slot to overwrite for a page that is not resident.
    ///
    /// The slot must be below `capacity()`; a replay rejects any other slot.
    fn victim(&mut self, frames: &FrameSet) -> SlotId;

    /// Record that `slot` now holds a newly loaded page.
    fn record_insert(&mut self, slot: SlotId);

    /// Forget all bookkeeping from an earlier run. Called before every replay.
    fn reset(&mut self) {}
}
