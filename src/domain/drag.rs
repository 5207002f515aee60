use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::domain::board::DropTarget;
use crate::domain::issue::IssueId;

/// Pointer displacement (in logical units) required before a grab becomes a drag.
///
/// Small movements stay clicks; the card only starts travelling once the
/// pointer has moved this far from where it went down.
pub const DRAG_ACTIVATION_DISTANCE: f64 = 5.0;

/// A pointer position in board coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A completed drag gesture, with identifiers resolved at release time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEvent {
    pub source: IssueId,
    /// `None` when the pointer was released outside any drop zone
    pub target: Option<DropTarget>,
}

#[derive(Debug, Clone)]
enum SensorState {
    Idle,
    /// Pointer is down on an issue but hasn't travelled far enough yet
    Armed { source: IssueId, origin: Point },
    Dragging { source: IssueId },
}

/// Gesture state machine for the board's pointer input: idle -> dragging -> idle.
///
/// One gesture is active at a time. Each release emits at most one
/// [`DragEvent`], so the board reducer runs exactly once per completed drag.
#[derive(Debug, Clone)]
pub struct DragSensor {
    state: SensorState,
}

impl DragSensor {
    pub fn new() -> Self {
        Self {
            state: SensorState::Idle,
        }
    }

    /// Grabs an issue. Not yet a drag: the gesture arms and waits for the
    /// activation displacement. A grab while another gesture is in flight
    /// abandons the old gesture without emitting an event.
    pub fn pointer_down(&mut self, source: IssueId, at: Point) {
        if !matches!(self.state, SensorState::Idle) {
            trace!("pointer_down during active gesture, resetting");
        }
        self.state = SensorState::Armed { source, origin: at };
    }

    /// Tracks pointer movement, activating the drag once the displacement
    /// from the grab origin exceeds [`DRAG_ACTIVATION_DISTANCE`].
    pub fn pointer_move(&mut self, at: Point) {
        if let SensorState::Armed { source, origin } = &self.state {
            if origin.distance_to(at) > DRAG_ACTIVATION_DISTANCE {
                trace!(source = %source, "drag activated");
                self.state = SensorState::Dragging {
                    source: source.clone(),
                };
            }
        }
    }

    /// Releases the pointer over the given target (or `None` when released
    /// outside every drop zone). Returns the gesture's single [`DragEvent`]
    /// if a drag was active; a release before activation is a plain click.
    /// The sensor is idle afterwards either way.
    pub fn pointer_up(&mut self, target: Option<DropTarget>) -> Option<DragEvent> {
        let state = std::mem::replace(&mut self.state, SensorState::Idle);
        match state {
            SensorState::Dragging { source } => Some(DragEvent { source, target }),
            SensorState::Armed { .. } | SensorState::Idle => None,
        }
    }

    /// The issue currently being dragged, if the gesture has activated
    pub fn active_issue(&self) -> Option<&IssueId> {
        match &self.state {
            SensorState::Dragging { source } => Some(source),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SensorState::Dragging { .. })
    }
}

impl Default for DragSensor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::board::ColumnId;

    fn issue_id(id: &str) -> IssueId {
        id.parse().unwrap()
    }

    #[test]
    fn test_sensor_starts_idle() {
        let sensor = DragSensor::new();
        assert!(!sensor.is_dragging());
        assert!(sensor.active_issue().is_none());
    }

    #[test]
    fn test_small_movement_stays_a_click() {
        let mut sensor = DragSensor::new();
        sensor.pointer_down(issue_id("TASK-1"), Point::new(0.0, 0.0));
        sensor.pointer_move(Point::new(3.0, 4.0)); // distance 5.0, not > 5.0

        assert!(!sensor.is_dragging());
        assert!(sensor.pointer_up(None).is_none());
    }

    #[test]
    fn test_drag_activates_past_threshold() {
        let mut sensor = DragSensor::new();
        sensor.pointer_down(issue_id("TASK-1"), Point::new(0.0, 0.0));
        sensor.pointer_move(Point::new(3.1, 4.1));

        assert!(sensor.is_dragging());
        assert_eq!(sensor.active_issue(), Some(&issue_id("TASK-1")));
    }

    #[test]
    fn test_release_emits_exactly_one_event() {
        let mut sensor = DragSensor::new();
        sensor.pointer_down(issue_id("TASK-1"), Point::new(0.0, 0.0));
        sensor.pointer_move(Point::new(10.0, 0.0));

        let target = DropTarget::Column(ColumnId::new("done"));
        let event = sensor.pointer_up(Some(target.clone())).unwrap();
        assert_eq!(event.source, issue_id("TASK-1"));
        assert_eq!(event.target, Some(target));

        // A second release with no gesture is silent
        assert!(sensor.pointer_up(None).is_none());
        assert!(!sensor.is_dragging());
    }

    #[test]
    fn test_release_outside_drop_zone() {
        let mut sensor = DragSensor::new();
        sensor.pointer_down(issue_id("TASK-1"), Point::new(0.0, 0.0));
        sensor.pointer_move(Point::new(0.0, 20.0));

        let event = sensor.pointer_up(None).unwrap();
        assert_eq!(event.target, None);
    }

    #[test]
    fn test_new_grab_abandons_active_gesture() {
        let mut sensor = DragSensor::new();
        sensor.pointer_down(issue_id("TASK-1"), Point::new(0.0, 0.0));
        sensor.pointer_move(Point::new(10.0, 0.0));
        assert!(sensor.is_dragging());

        sensor.pointer_down(issue_id("TASK-2"), Point::new(50.0, 50.0));
        assert!(!sensor.is_dragging());

        // The abandoned gesture emits nothing; the new one hasn't activated
        assert!(sensor.pointer_up(None).is_none());
    }

    #[test]
    fn test_movement_without_grab_is_ignored() {
        let mut sensor = DragSensor::new();
        sensor.pointer_move(Point::new(100.0, 100.0));
        assert!(!sensor.is_dragging());
    }

    #[test]
    fn test_gesture_drives_board_reducer() {
        // Full path: grab TASK-101, drag it over the Done column, release
        let board = crate::domain::seed::sample_board();
        let mut sensor = DragSensor::new();

        sensor.pointer_down(issue_id("TASK-101"), Point::new(10.0, 10.0));
        sensor.pointer_move(Point::new(260.0, 12.0));
        assert!(sensor.is_dragging());

        let target = board.resolve_target("done");
        let event = sensor.pointer_up(target).unwrap();
        let after = board.apply(&event);

        assert!(after
            .column_of(&issue_id("TASK-101"))
            .is_some_and(|col| col.id.as_str() == "done"));
        assert_eq!(after.issue_count(), board.issue_count());
    }
}
