use super::session_rng::SessionRng;
use super::types::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObstacleKind {
    Portal,
    Phasing,
    Disco,
}

impl ObstacleKind {
    pub fn pick(rng: &mut SessionRng) -> Self {
        match rng.random_range(0..3u8) {
            0 => ObstacleKind::Portal,
            1 => ObstacleKind::Phasing,
            _ => ObstacleKind::Disco,
        }
    }

    /// Color tag for renderers.
    pub fn color(&self) -> &'static str {
        match self {
            ObstacleKind::Portal => "cyan",
            ObstacleKind::Phasing => "rgba(255, 255, 255, 0.3)",
            ObstacleKind::Disco => "gradient",
        }
    }

    pub fn consumed_on_contact(&self) -> bool {
        matches!(self, ObstacleKind::Phasing | ObstacleKind::Disco)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Obstacle {
    pub position: Point,
    pub kind: ObstacleKind,
    /// Where the paired portal sits. Always set for portals, never for the
    /// single-use kinds.
    pub portal_exit: Option<Point>,
}

impl Obstacle {
    pub fn new(position: Point, kind: ObstacleKind) -> Self {
        Self {
            position,
            kind,
            portal_exit: None,
        }
    }

    pub fn portal_pair(first: Point, second: Point) -> (Obstacle, Obstacle) {
        (
            Obstacle {
                position: first,
                kind: ObstacleKind::Portal,
                portal_exit: Some(second),
            },
            Obstacle {
                position: second,
                kind: ObstacleKind::Portal,
                portal_exit: Some(first),
            },
        )
    }
}
