use std::collections::{HashSet, VecDeque};

use super::types::{Direction, GridSize, Point};

#[derive(Clone, Debug)]
pub struct Snake {
    pub body: VecDeque<Point>,
    pub body_set: HashSet<Point>,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
}

impl Snake {
    pub fn new(head: Point, direction: Direction, length: usize, grid: &GridSize) -> Self {
        // The body trails away from the direction of travel, wrapping if the
        // head starts close to an edge.
        let (dx, dy) = match direction {
            Direction::Up => (0i32, 1i32),
            Direction::Down => (0, -1),
            Direction::Left => (1, 0),
            Direction::Right => (-1, 0),
        };

        let width = grid.width as i32;
        let height = grid.height as i32;

        let mut body = VecDeque::with_capacity(length);
        let mut body_set = HashSet::new();
        let mut segment = head;
        for _ in 0..length {
            body.push_back(segment);
            body_set.insert(segment);
            segment = Point::new(
                ((segment.x as i32 + dx + width) % width) as usize,
                ((segment.y as i32 + dy + height) % height) as usize,
            );
        }

        Self {
            body,
            body_set,
            direction,
            pending_direction: None,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, point: &Point) -> bool {
        self.body_set.contains(point)
    }

    pub fn push_head(&mut self, point: Point) {
        self.body.push_front(point);
        self.body_set.insert(point);
    }

    pub fn pop_tail(&mut self) {
        let tail = self
            .body
            .pop_back()
            .expect("Snake body should never be empty");
        // Double growth duplicates the tail cell, so another segment may
        // still occupy it.
        if !self.body.contains(&tail) {
            self.body_set.remove(&tail);
        }
    }

    pub fn duplicate_tail(&mut self) {
        let tail = self.tail();
        self.body.push_back(tail);
    }
}
