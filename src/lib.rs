pub mod config;
pub mod error;
pub mod menu;
pub mod paging;
pub mod render;
pub mod segmentation;
pub mod simulator;

pub use error::{SimulationError, SimulationResult};
pub use paging::{run_fifo, run_lru, PageId, PagingRun, Policy, StepRecord, Verdict};
pub use segmentation::{run_segmentation, AllocatedRange, SegmentRecord, SegmentationRun};
pub use simulator::Simulator;
