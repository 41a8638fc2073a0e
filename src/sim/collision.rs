//! Collision detection between the player car and everything it can hit
//!
//! Box-vs-box only: the player's bounds against each traffic car and each
//! road shoulder, using whatever geometry was most recently reported.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::road::Road;
use super::traffic::Traffic;

/// What the player ran into
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Obstacle {
    /// A traffic car, by id
    Traffic(String),
    /// A road shoulder, by report index
    Road(usize),
}

/// Result of a collision check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionResult {
    pub obstacle: Obstacle,
    /// Player bounds at the time of the hit
    pub player: Rect,
    /// Obstacle bounds at the time of the hit
    pub other: Rect,
}

/// Check the player's bounds against traffic, then the road shoulders.
///
/// Missing geometry (no player rect yet, no traffic, no road) is never a hit.
/// Returns the first obstacle found.
pub fn detect_collision(
    player: Option<Rect>,
    traffic: &Traffic,
    road: &Road,
) -> Option<CollisionResult> {
    let player = player?;

    let traffic_hit = traffic
        .rects()
        .find(|(_, rect)| player.intersects(*rect))
        .map(|(id, rect)| (Obstacle::Traffic(id.to_owned()), rect));

    let hit = traffic_hit.or_else(|| {
        road.rects()
            .iter()
            .enumerate()
            .find(|(_, rect)| player.intersects(**rect))
            .map(|(index, rect)| (Obstacle::Road(index), *rect))
    });

    hit.map(|(obstacle, other)| CollisionResult {
        obstacle,
        player,
        other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Option<Rect> {
        Some(Rect::new(0.0, 0.0, 10.0, 10.0))
    }

    #[test]
    fn test_no_geometry_no_collision() {
        let traffic = Traffic::new();
        let road = Road::new();
        assert!(detect_collision(None, &traffic, &road).is_none());
        assert!(detect_collision(player(), &traffic, &road).is_none());
    }

    #[test]
    fn test_hits_traffic() {
        let mut traffic = Traffic::new();
        traffic.report_rect("car1", Rect::new(50.0, 50.0, 10.0, 10.0));
        traffic.report_rect("car2", Rect::new(5.0, 5.0, 10.0, 10.0));
        let road = Road::new();

        let result = detect_collision(player(), &traffic, &road).unwrap();
        assert_eq!(result.obstacle, Obstacle::Traffic("car2".into()));
        assert_eq!(result.other, Rect::new(5.0, 5.0, 10.0, 10.0));
    }

    #[test]
    fn test_hits_road_shoulder() {
        let traffic = Traffic::new();
        let mut road = Road::new();
        road.report_rect(Rect::new(100.0, 0.0, 50.0, 500.0));
        road.report_rect(Rect::new(-40.0, 0.0, 45.0, 500.0));

        let result = detect_collision(player(), &traffic, &road).unwrap();
        assert_eq!(result.obstacle, Obstacle::Road(1));
    }

    #[test]
    fn test_traffic_checked_before_road() {
        let mut traffic = Traffic::new();
        traffic.report_rect("car5", Rect::new(5.0, 5.0, 10.0, 10.0));
        let mut road = Road::new();
        road.report_rect(Rect::new(-40.0, 0.0, 45.0, 500.0));

        let result = detect_collision(player(), &traffic, &road).unwrap();
        assert_eq!(result.obstacle, Obstacle::Traffic("car5".into()));
    }

    #[test]
    fn test_touching_is_not_a_hit() {
        let mut traffic = Traffic::new();
        traffic.report_rect("car1", Rect::new(10.0, 0.0, 24.0, 32.0));
        let mut road = Road::new();
        road.report_rect(Rect::new(-30.0, 0.0, 30.0, 500.0));

        assert!(detect_collision(player(), &traffic, &road).is_none());
    }
}
