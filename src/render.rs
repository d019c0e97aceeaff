//! Text rendering of simulation logs.

use crate::paging::{PagingRun, Policy, StepRecord};
use crate::segmentation::{SegmentRecord, SegmentationRun};
use std::fmt;
use std::io::{self, Write};

/// Placeholder printed for an empty frame.
pub const EMPTY_FRAME: &str = "-";

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page {} -> [ ", self.page)?;
        for frame in &self.frames {
            match frame {
                Some(page) => write!(f, "{} ", page)?,
                None => write!(f, "{} ", EMPTY_FRAME)?,
            }
        }
        write!(f, "] {}", self.verdict)
    }
}

impl fmt::Display for SegmentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment {} ({} KB): ", self.index, self.requested_size)?;
        match self.allocation {
            Some(range) => write!(f, "Allocated [{} - {}]", range.start, range.end),
            None => write!(f, "Not Allocated (Insufficient Memory)"),
        }
    }
}

pub fn render_paging<W: Write>(out: &mut W, policy: Policy, run: &PagingRun) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- {} Page Replacement ---", policy)?;
    for step in &run.steps {
        writeln!(out, "{}", step)?;
    }
    writeln!(out, "Total Page Faults = {}", run.total_faults)
}

pub fn render_segmentation<W: Write>(out: &mut W, run: &SegmentationRun) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Segmentation Allocation ---")?;
    for segment in &run.segments {
        writeln!(out, "{}", segment)?;
    }
    writeln!(out, "Used Memory = {} KB", run.used_memory)?;
    writeln!(out, "Free Memory = {} KB", run.free_memory)
}
