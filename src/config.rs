//! Capacity bounds enforced before a simulation runs.

use crate::error::{SimulationError, SimulationResult};

/// Default capacity for reference strings, segment lists and frame sets.
pub const DEFAULT_MAX_ITEMS: usize = 50;

/// Bounds checked by [`crate::simulator::Simulator`] before any item is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum length of a reference string or segment list
    pub max_items: usize,
    /// Maximum number of frames in a frame set
    pub max_frames: usize,
}

impl Limits {
    pub fn new(max_items: usize, max_frames: usize) -> Self {
        Self {
            max_items,
            max_frames,
        }
    }

    /// Uses the same bound for list lengths and frame counts.
    pub fn uniform(max: usize) -> Self {
        Self::new(max, max)
    }

    pub fn check_frames(&self, frames: usize) -> SimulationResult<()> {
        if frames == 0 || frames > self.max_frames {
            return Err(SimulationError::InvalidFrameCount {
                frames,
                max: self.max_frames,
            });
        }
        Ok(())
    }

    pub fn check_items(&self, kind: &'static str, count: usize) -> SimulationResult<()> {
        if count > self.max_items {
            return Err(SimulationError::TooManyItems {
                kind,
                count,
                max: self.max_items,
            });
        }
        Ok(())
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::uniform(DEFAULT_MAX_ITEMS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_items, 50);
        assert_eq!(limits.max_frames, 50);
    }

    #[test]
    fn test_check_frames() {
        let limits = Limits::new(10, 4);

        assert!(limits.check_frames(1).is_ok());
        assert!(limits.check_frames(4).is_ok());
        assert!(matches!(
            limits.check_frames(0),
            Err(SimulationError::InvalidFrameCount { frames: 0, max: 4 })
        ));
        assert!(matches!(
            limits.check_frames(5),
            Err(SimulationError::InvalidFrameCount { frames: 5, max: 4 })
        ));
    }

    #[test]
    fn test_check_items() {
        let limits = Limits::uniform(3);

        assert!(limits.check_items("pages", 0).is_ok());
        assert!(limits.check_items("pages", 3).is_ok());

        let err = limits.check_items("segments", 4).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Too many segments: 4 given but at most 3 allowed"
        );
    }
}
