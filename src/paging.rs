//! Page replacement simulation.
//!
//! A reference string is replayed against a fixed-size [`FrameSet`]. Each
//! requested page is either already resident (a hit) or must be loaded into a
//! slot chosen by a [`Replacer`] (a fault). The replay records a snapshot of
//! the frame set after every request.
//!
//! - **FifoReplacer**: evicts the page that was loaded first
//! - **LruReplacer**: evicts the page whose last use is oldest

pub mod fifo;
pub mod frame;
pub mod lru;
pub mod replacer;

pub use fifo::FifoReplacer;
pub use frame::{FrameSet, SlotId};
pub use lru::LruReplacer;
pub use replacer::Replacer;

use crate::error::{SimulationError, SimulationResult};
use crate::simulator::Simulator;
use log::{debug, trace};
use std::fmt;

pub type PageId = i64;

/// Outcome of a single page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Hit,
    Fault,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Hit => write!(f, "HIT"),
            Verdict::Fault => write!(f, "FAULT"),
        }
    }
}

/// Page replacement policies offered by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Fifo,
    Lru,
}

impl Policy {
    pub fn replacer(&self, capacity: usize) -> Box<dyn Replacer> {
        match self {
            Policy::Fifo => Box::new(FifoReplacer::new(capacity)),
            Policy::Lru => Box::new(LruReplacer::new(capacity)),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Fifo => write!(f, "FIFO"),
            Policy::Lru => write!(f, "LRU"),
        }
    }
}

/// State of the frame set after one page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub page: PageId,
    pub frames: Vec<Option<PageId>>,
    pub verdict: Verdict,
}

/// Full log of a page replacement run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagingRun {
    pub steps: Vec<StepRecord>,
    pub total_faults: usize,
}

impl PagingRun {
    pub fn faults(&self) -> usize {
        self.count(Verdict::Fault)
    }

    pub fn hits(&self) -> usize {
        self.count(Verdict::Hit)
    }

    pub fn final_frames(&self) -> Option<&[Option<PageId>]> {
        self.steps.last().map(|step| step.frames.as_slice())
    }

    pub fn verdicts(&self) -> Vec<Verdict> {
        self.steps.iter().map(|step| step.verdict).collect()
    }

    fn count(&self, verdict: Verdict) -> usize {
        self.steps
            .iter()
            .filter(|step| step.verdict == verdict)
            .count()
    }
}

/// Replay `pages` with first-in-first-out eviction.
pub fn run_fifo(pages: &[PageId], frames: usize) -> SimulationResult<PagingRun> {
    Simulator::default().fifo(pages, frames)
}

/// Replay `pages` with least-recently-used eviction.
pub fn run_lru(pages: &[PageId], frames: usize) -> SimulationResult<PagingRun> {
    Simulator::default().lru(pages, frames)
}

/// Replay `pages` against a fresh frame set sized by `replacer`.
///
/// The replacer is reset first. Its capacity must be non-zero; callers go
/// through [`Simulator`], which checks it.
pub(crate) fn replay<R: Replacer + ?Sized>(
    pages: &[PageId],
    replacer: &mut R,
) -> SimulationResult<PagingRun> {
    replacer.reset();
    let mut frames = FrameSet::new(replacer.capacity());
    let mut run = PagingRun {
        steps: Vec::with_capacity(pages.len()),
        total_faults: 0,
    };

    for &page in pages {
        let verdict = match frames.find(page) {
            Some(slot) => {
                replacer.record_hit(slot);
                Verdict::Hit
            }
            None => {
                let slot = replacer.victim(&frames);
                if slot >= frames.capacity() {
                    return Err(SimulationError::InvalidVictim {
                        slot,
                        capacity: frames.capacity(),
                    });
                }
                if let Some(evicted) = frames.load(slot, page) {
                    debug!("evicted page {} from slot {} for page {}", evicted, slot, page);
                }
                replacer.record_insert(slot);
                run.total_faults += 1;
                Verdict::Fault
            }
        };

        trace!("page {} -> {:?} {}", page, frames.snapshot(), verdict);
        run.steps.push(StepRecord {
            page,
            frames: frames.snapshot(),
            verdict,
        });
    }

    Ok(run)
}
