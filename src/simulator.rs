use crate::config::Limits;
use crate::error::{SimulationError, SimulationResult};
use crate::paging::{self, PageId, PagingRun, Policy, Replacer};
use crate::segmentation::{self, SegmentationRun};
use log::info;

/// Entry point to the simulations that checks inputs against [`Limits`]
/// before any item is processed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator {
    limits: Limits,
}

impl Simulator {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn fifo(&self, pages: &[PageId], frames: usize) -> SimulationResult<PagingRun> {
        self.paging(Policy::Fifo, pages, frames)
    }

    pub fn lru(&self, pages: &[PageId], frames: usize) -> SimulationResult<PagingRun> {
        self.paging(Policy::Lru, pages, frames)
    }

    pub fn paging(
        &self,
        policy: Policy,
        pages: &[PageId],
        frames: usize,
    ) -> SimulationResult<PagingRun> {
        // Bounds are checked before the replacer allocates per-frame state
        self.check_paging(pages, frames)?;
        let mut replacer = policy.replacer(frames);
        let run = paging::replay(pages, &mut *replacer)?;
        info!(
            "{} run over {} pages with {} frames: {} faults",
            policy,
            pages.len(),
            frames,
            run.total_faults
        );
        Ok(run)
    }

    /// Replay `pages` with any replacement policy, using a frame set of
    /// `replacer.capacity()` slots. The replacer is reset before the run.
    pub fn replay<R: Replacer + ?Sized>(
        &self,
        pages: &[PageId],
        replacer: &mut R,
    ) -> SimulationResult<PagingRun> {
        self.check_paging(pages, replacer.capacity())?;
        paging::replay(pages, replacer)
    }

    fn check_paging(&self, pages: &[PageId], frames: usize) -> SimulationResult<()> {
        self.limits.check_frames(frames)?;
        self.limits.check_items("pages", pages.len())
    }

    pub fn segmentation(
        &self,
        memory_size: i64,
        segments: &[i64],
    ) -> SimulationResult<SegmentationRun> {
        if memory_size < 0 {
            return Err(SimulationError::InvalidMemorySize(memory_size));
        }
        self.limits.check_items("segments", segments.len())?;

        let run = segmentation::allocate(memory_size, segments);
        info!(
            "segmentation of {} segments into {}: {} used, {} free",
            segments.len(),
            memory_size,
            run.used_memory,
            run.free_memory
        );
        Ok(run)
    }
}
