//! Headless presentation geometry
//!
//! Computes the rectangles a renderer would report for a given layout:
//! road shoulders, the five looping traffic cars, and the player car.
//! The simulation never calls into this; it only receives the results.

use std::time::Duration;

use glam::Vec2;

use crate::consts::*;
use crate::platform::Command;
use crate::sim::Rect;

/// One looping traffic car
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrafficLane {
    pub id: &'static str,
    /// Time for one trip down the screen
    pub loop_duration: Duration,
    /// Horizontal offset from the road center
    pub lane_offset: f32,
}

/// The five traffic cars
pub static TRAFFIC: [TrafficLane; 5] = [
    TrafficLane {
        id: "car1",
        loop_duration: Duration::from_secs(8),
        lane_offset: 40.0,
    },
    TrafficLane {
        id: "car2",
        loop_duration: Duration::from_secs(10),
        lane_offset: -50.0,
    },
    TrafficLane {
        id: "car3",
        loop_duration: Duration::from_secs(12),
        lane_offset: 90.0,
    },
    TrafficLane {
        id: "car4",
        loop_duration: Duration::from_secs(15),
        lane_offset: -30.0,
    },
    TrafficLane {
        id: "car5",
        loop_duration: Duration::from_secs(7),
        lane_offset: 0.0,
    },
];

/// Screen-space layout for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub max_width: f32,
    pub max_height: f32,
}

impl Layout {
    /// Layout for a screen; the height runs past the bottom edge
    pub fn for_screen(width: f32, height: f32) -> Self {
        Self {
            max_width: width,
            max_height: height + LAYOUT_OVERSCAN,
        }
    }

    /// Player offset when the car first appears
    pub fn player_start_offset(&self) -> f32 {
        self.max_width / 2.0
    }

    /// Player car bounds at a horizontal offset
    pub fn player_rect(&self, offset: f32) -> Rect {
        Rect::from_center_size(
            Vec2::new(offset, self.max_height - PLAYER_CAR_LIFT),
            Vec2::new(CAR_WIDTH, CAR_HEIGHT),
        )
    }

    /// Left and right shoulders of a road segment drawn at `y`
    pub fn shoulders_at(&self, y: f32) -> [Rect; 2] {
        // Whole percents keep the shoulder edges exact; 0.3 has no exact f32
        let left_w = self.max_width * LEFT_SHOULDER_PERCENT / 100.0;
        let lane_w = self.max_width * DRIVING_LANE_PERCENT / 100.0;
        let right_x = left_w + lane_w;
        [
            Rect::new(0.0, y, left_w, self.max_height),
            Rect::new(right_x, y, self.max_width - right_x, self.max_height),
        ]
    }

    /// Traffic car bounds after `elapsed` since the traffic epoch
    pub fn traffic_rect(&self, lane: &TrafficLane, elapsed: Duration) -> Rect {
        let cycle = lane.loop_duration.as_secs_f32();
        let progress = if cycle > 0.0 {
            (elapsed.as_secs_f32() / cycle).fract()
        } else {
            0.0
        };
        Rect::new(
            self.max_width / 2.0 + lane.lane_offset,
            progress * self.max_height,
            CAR_WIDTH,
            CAR_HEIGHT,
        )
    }

    /// Commands a freshly shown road sends: the scroll target, then both
    /// shoulders of both stacked segments.
    pub fn road_appear(&self, segment_offsets: [f32; 2]) -> Vec<Command> {
        let mut commands = vec![Command::SetRoadOffset(self.max_height)];
        for y in segment_offsets {
            commands.extend(self.shoulders_at(y).map(Command::ReportRoadRect));
        }
        commands
    }

    /// Commands a freshly shown player car sends: centered offset and its bounds
    pub fn player_appear(&self) -> [Command; 2] {
        let offset = self.player_start_offset();
        [
            Command::SetPlayerOffset(offset),
            Command::ReportPlayerRect(self.player_rect(offset)),
        ]
    }

    /// One frame of traffic geometry reports
    pub fn traffic_frame(&self, elapsed: Duration) -> impl Iterator<Item = Command> + '_ {
        TRAFFIC.iter().map(move |lane| Command::ReportTrafficRect {
            id: lane.id.to_string(),
            rect: self.traffic_rect(lane, elapsed),
        })
    }

    /// Is the player car on the driving surface?
    pub fn on_road(&self, player: Rect) -> bool {
        let [left, right] = self.shoulders_at(0.0);
        !player.intersects(left) && !player.intersects(right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameStatus, Road, step};

    fn layout() -> Layout {
        Layout::for_screen(400.0, 800.0)
    }

    #[test]
    fn test_layout_overscan() {
        let layout = layout();
        assert_eq!(layout.max_width, 400.0);
        assert_eq!(layout.max_height, 900.0);
    }

    #[test]
    fn test_player_starts_centered_on_road() {
        let layout = layout();
        let rect = layout.player_rect(layout.player_start_offset());
        assert_eq!(rect, Rect::new(188.0, 684.0, 24.0, 32.0));
        assert!(layout.on_road(rect));
    }

    #[test]
    fn test_shoulders() {
        let [left, right] = layout().shoulders_at(0.0);
        assert_eq!(left, Rect::new(0.0, 0.0, 120.0, 900.0));
        assert_eq!(right, Rect::new(320.0, 0.0, 80.0, 900.0));
    }

    #[test]
    fn test_drifting_onto_shoulder() {
        let layout = layout();
        // Left edge of the car at 120 touches the shoulder without overlapping
        assert!(layout.on_road(layout.player_rect(132.0)));
        assert!(!layout.on_road(layout.player_rect(131.0)));
        // Right edge of the car at 320 touches the right shoulder
        assert!(layout.on_road(layout.player_rect(308.0)));
        assert!(!layout.on_road(layout.player_rect(309.0)));
    }

    #[test]
    fn test_shoulders_are_exact_for_odd_widths() {
        let layout = Layout::for_screen(390.0, 844.0);
        let [left, right] = layout.shoulders_at(0.0);
        assert_eq!(left.size.x, 117.0);
        assert_eq!(right.origin.x, 312.0);
        assert_eq!(right.max().x, 390.0);
        // A car flush against the left shoulder is still on the road
        assert!(layout.on_road(Rect::new(117.0, 600.0, 24.0, 32.0)));
    }

    #[test]
    fn test_traffic_loops() {
        let layout = layout();
        let car1 = &TRAFFIC[0];
        let start = layout.traffic_rect(car1, Duration::ZERO);
        assert_eq!(start, Rect::new(240.0, 0.0, 24.0, 32.0));

        let halfway = layout.traffic_rect(car1, Duration::from_secs(4));
        assert_eq!(halfway.origin.y, 450.0);

        // One full cycle later it is back at the top
        let wrapped = layout.traffic_rect(car1, Duration::from_secs(8));
        assert_eq!(wrapped.origin.y, 0.0);
    }

    #[test]
    fn test_road_appear_reports_four_shoulders() {
        let layout = layout();
        let commands = layout.road_appear(Road::new().segment_offsets(layout.max_height));
        assert_eq!(commands[0], Command::SetRoadOffset(900.0));
        let rects: Vec<Rect> = commands
            .iter()
            .filter_map(|c| match c {
                Command::ReportRoadRect(r) => Some(*r),
                _ => None,
            })
            .collect();
        assert_eq!(rects.len(), 4);
        assert_eq!(rects[2].origin.y, -898.0);
    }

    #[test]
    fn test_centered_car_meets_lane_five_traffic() {
        let layout = layout();
        let mut state = crate::sim::GameState::new();
        crate::sim::start(&mut state);

        for command in layout.player_appear() {
            match command {
                Command::SetPlayerOffset(offset) => state.player.set_horizontal_offset(offset),
                Command::ReportPlayerRect(rect) => state.player.report_rect(rect),
                _ => unreachable!(),
            }
        }
        for shoulder in layout.shoulders_at(0.0) {
            state.road.report_rect(shoulder);
        }

        // car5 drives straight down the center lane: 684 / 900 of its 7s loop
        // puts it level with the player.
        let elapsed = Duration::from_secs_f32(7.0 * 684.0 / 900.0);
        let car5 = layout.traffic_rect(&TRAFFIC[4], elapsed);
        state.traffic.report_rect(TRAFFIC[4].id, car5);

        step(&mut state);
        assert_eq!(state.status, GameStatus::Over);
    }
}
