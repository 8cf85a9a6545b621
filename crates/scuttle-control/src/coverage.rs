//! Visited-cell accounting and coverage percentage.

use crate::error::ControlError;
use scuttle_pose::Position;
use std::collections::HashSet;
use tracing::trace;

/// Accumulates the set of cells the robot has stood on and relates it to the
/// nominal room extent.
///
/// The percentage is deliberately uncapped: if the configured room is smaller
/// than the area actually traversed, coverage exceeds 100%. That is a known
/// boundary behavior of the room-extent configuration, not something this
/// tracker corrects.
#[derive(Debug, Clone)]
pub struct CoverageTracker {
    visited: HashSet<Position>,
    room_length: u32,
    room_width: u32,
}

impl CoverageTracker {
    /// Create a tracker for a `room_length` × `room_width` cell room with no
    /// cells visited yet.
    pub fn new(room_length: u32, room_width: u32) -> Self {
        CoverageTracker {
            visited: HashSet::new(),
            room_length,
            room_width,
        }
    }

    /// Forget all visited cells.
    pub fn reset(&mut self) {
        self.visited.clear();
    }

    /// Record that the robot stands on `position`. Idempotent; revisits have
    /// no effect beyond set membership.
    pub fn record_visit(&mut self, position: Position) {
        if self.visited.insert(position) {
            trace!(%position, "new cell visited");
        }
    }

    /// Whether a cell has been visited.
    pub fn contains(&self, position: Position) -> bool {
        self.visited.contains(&position)
    }

    /// Number of distinct cells visited.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Coverage as a percentage of the nominal room area.
    ///
    /// # Errors
    ///
    /// Returns `ControlError::DivisionByZeroArea` when the configured room
    /// area is zero; coverage is meaningless until the room is reconfigured.
    pub fn percent(&self) -> Result<f64, ControlError> {
        let area = u64::from(self.room_length) * u64::from(self.room_width);
        if area == 0 {
            return Err(ControlError::DivisionByZeroArea);
        }
        Ok(100.0 * self.visited.len() as f64 / area as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_visit_is_idempotent() {
        let mut tracker = CoverageTracker::new(3, 3);
        tracker.record_visit(Position::new(0, 0));
        tracker.record_visit(Position::new(0, 0));
        tracker.record_visit(Position::new(0, 1));
        assert_eq!(tracker.visited_count(), 2);
        assert!(tracker.contains(Position::new(0, 1)));
        assert!(!tracker.contains(Position::new(1, 1)));
    }

    #[test]
    fn test_three_of_nine_cells_is_a_third() {
        let mut tracker = CoverageTracker::new(3, 3);
        tracker.record_visit(Position::new(0, 0));
        tracker.record_visit(Position::new(0, 1));
        tracker.record_visit(Position::new(0, 2));
        // 100 * 3 / 9 = 33.33...
        let percent = tracker.percent().unwrap();
        assert!((percent - 33.33).abs() < 0.01);
    }

    #[test]
    fn test_zero_area_room_is_an_error() {
        let tracker = CoverageTracker::new(0, 0);
        assert_eq!(tracker.percent(), Err(ControlError::DivisionByZeroArea));
        // A single zero dimension is enough for the area to vanish
        let tracker = CoverageTracker::new(5, 0);
        assert_eq!(tracker.percent(), Err(ControlError::DivisionByZeroArea));
    }

    #[test]
    fn test_coverage_is_uncapped() {
        let mut tracker = CoverageTracker::new(1, 1);
        tracker.record_visit(Position::new(0, 0));
        tracker.record_visit(Position::new(0, 1));
        // 2 visited cells over a 1-cell room: 200%, not clamped
        assert!((tracker.percent().unwrap() - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reset_clears_visits() {
        let mut tracker = CoverageTracker::new(2, 2);
        tracker.record_visit(Position::new(1, 1));
        tracker.reset();
        assert_eq!(tracker.visited_count(), 0);
    }
}
