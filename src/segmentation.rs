//! Contiguous segment allocation into a single bounded pool.
//!
//! Segments are placed first-fit in request order. A segment that does not
//! fit is rejected and the next one is tried; nothing is compacted or
//! reordered.

use crate::error::SimulationResult;
use crate::simulator::Simulator;
use log::{debug, trace};

/// Inclusive address range `[start, end]` given to an allocated segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocatedRange {
    pub start: i64,
    pub end: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentRecord {
    pub index: usize,
    pub requested_size: i64,
    /// `None` when the segment did not fit
    pub allocation: Option<AllocatedRange>,
}

impl SegmentRecord {
    pub fn allocated(&self) -> bool {
        self.allocation.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentationRun {
    pub segments: Vec<SegmentRecord>,
    pub used_memory: i64,
    pub free_memory: i64,
}

impl SegmentationRun {
    pub fn rejected(&self) -> usize {
        self.segments.iter().filter(|s| !s.allocated()).count()
    }
}

/// Allocate `segments` in order into a pool of `memory_size` units.
pub fn run_segmentation(memory_size: i64, segments: &[i64]) -> SimulationResult<SegmentationRun> {
    Simulator::default().segmentation(memory_size, segments)
}

pub(crate) fn allocate(memory_size: i64, segments: &[i64]) -> SegmentationRun {
    let mut used: i64 = 0;
    let mut records = Vec::with_capacity(segments.len());

    for (index, &size) in segments.iter().enumerate() {
        // Overflowing sums never fit
        let next = used.checked_add(size).filter(|&next| next <= memory_size);

        let allocation = if let Some(next) = next {
            let range = AllocatedRange {
                start: used,
                end: next.saturating_sub(1),
            };
            used = next;
            trace!("segment {} placed at [{}, {}]", index, range.start, range.end);
            Some(range)
        } else {
            debug!(
                "segment {} of size {} rejected with {} of {} used",
                index, size, used, memory_size
            );
            None
        };

        records.push(SegmentRecord {
            index,
            requested_size: size,
            allocation,
        });
    }

    SegmentationRun {
        segments: records,
        used_memory: used,
        free_memory: memory_size.saturating_sub(used),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocates_until_pool_is_full() {
        let run = allocate(100, &[20, 50, 40]);

        assert_eq!(
            run.segments[0].allocation,
            Some(AllocatedRange { start: 0, end: 19 })
        );
        assert_eq!(
            run.segments[1].allocation,
            Some(AllocatedRange { start: 20, end: 69 })
        );
        assert!(!run.segments[2].allocated());
        assert_eq!(run.used_memory, 70);
        assert_eq!(run.free_memory, 30);
        assert_eq!(run.rejected(), 1);
    }

    #[test]
    fn test_later_segment_fills_gap_after_rejection() {
        let run = allocate(100, &[60, 50, 40, 1]);

        assert!(run.segments[0].allocated());
        assert!(!run.segments[1].allocated());
        assert_eq!(
            run.segments[2].allocation,
            Some(AllocatedRange { start: 60, end: 99 })
        );
        assert!(!run.segments[3].allocated());
        assert_eq!(run.used_memory, 100);
        assert_eq!(run.free_memory, 0);
    }

    #[test]
    fn test_exact_fit() {
        let run = allocate(10, &[10]);

        assert_eq!(
            run.segments[0].allocation,
            Some(AllocatedRange { start: 0, end: 9 })
        );
        assert_eq!(run.free_memory, 0);
    }

    #[test]
    fn test_zero_and_negative_sizes_pass_through() {
        let run = allocate(10, &[0, 5, -3]);

        // A zero-size segment gets an empty range ending before it starts
        assert_eq!(
            run.segments[0].allocation,
            Some(AllocatedRange { start: 0, end: -1 })
        );
        assert_eq!(
            run.segments[2].allocation,
            Some(AllocatedRange { start: 5, end: 1 })
        );
        assert_eq!(run.used_memory, 2);
        assert_eq!(run.free_memory, 8);
    }

    #[test]
    fn test_overflow_is_rejected() {
        let run = allocate(i64::MAX, &[10, i64::MAX]);

        assert!(run.segments[0].allocated());
        assert!(!run.segments[1].allocated());
        assert_eq!(run.used_memory, 10);
    }

    #[test]
    fn test_empty_segment_list() {
        let run = allocate(64, &[]);

        assert!(run.segments.is_empty());
        assert_eq!(run.used_memory, 0);
        assert_eq!(run.free_memory, 64);
    }

    #[test]
    fn test_indices_follow_request_order() {
        let run = allocate(5, &[3, 3, 2]);

        let indices: Vec<usize> = run.segments.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(
            run.segments[2].allocation,
            Some(AllocatedRange { start: 3, end: 4 })
        );
    }
}
