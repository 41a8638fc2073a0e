//! Commands the presentation layer (and the tick source) feed into a session
//!
//! Geometry is in screen coordinates, the same space used for collisions.

use crate::sim::Rect;

/// One queued mutation. Commands are applied one at a time, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Begin a run and start ticking
    Start,
    /// Game-over screen tapped (same as `Start`)
    Restart,
    /// Steer left one step
    Left,
    /// Steer right one step
    Right,
    /// Road scroll offset
    SetRoadOffset(f32),
    /// One road shoulder segment's bounds
    ReportRoadRect(Rect),
    /// Latest bounds for one traffic car
    ReportTrafficRect { id: String, rect: Rect },
    /// Player car horizontal position
    SetPlayerOffset(f32),
    /// Player car bounds
    ReportPlayerRect(Rect),
    /// Timer firing, tagged with the generation of the timer that sent it
    Tick { generation: u64 },
    /// Stop the session loop
    Shutdown,
}

impl Command {
    /// Geometry and input commands come from the presentation layer;
    /// ticks and shutdown are plumbing.
    pub fn is_geometry(&self) -> bool {
        matches!(
            self,
            Command::SetRoadOffset(_)
                | Command::ReportRoadRect(_)
                | Command::ReportTrafficRect { .. }
                | Command::SetPlayerOffset(_)
                | Command::ReportPlayerRect(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_commands() {
        assert!(Command::ReportRoadRect(Rect::ZERO).is_geometry());
        assert!(
            Command::ReportTrafficRect {
                id: "car1".into(),
                rect: Rect::ZERO
            }
            .is_geometry()
        );
        assert!(Command::SetPlayerOffset(200.0).is_geometry());
        assert!(!Command::Left.is_geometry());
        assert!(!Command::Tick { generation: 1 }.is_geometry());
        assert!(!Command::Shutdown.is_geometry());
    }
}
