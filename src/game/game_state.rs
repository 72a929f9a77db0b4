use std::time::Duration;

use crate::input::InputIntent;
use crate::log;

use super::effects::ActiveEffects;
use super::food::{Food, FoodKind};
use super::obstacle::{Obstacle, ObstacleKind};
use super::session_rng::SessionRng;
use super::settings::{GameSettings, RuleSet, SPEED_BOOST_FACTOR};
use super::snake::Snake;
use super::types::{Direction, GamePhase, GridSize, Point};

/// What happened during one tick. All fields are defaults when the game is
/// already over and the tick was a no-op.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickResult {
    pub moved: bool,
    pub ate: Option<FoodKind>,
    pub points_gained: u32,
    pub obstacle_hit: Option<ObstacleKind>,
    pub teleported_to: Option<Point>,
    pub game_over: bool,
}

/// Read-only view of the game for renderers.
#[derive(Clone, Debug)]
pub struct GameSnapshot {
    pub segments: Vec<Point>,
    pub direction: Direction,
    pub food_position: Point,
    pub food_kind: FoodKind,
    pub obstacles: Vec<Obstacle>,
    pub phasing_active: bool,
    pub disco_active: bool,
    pub speed_boost_active: bool,
    pub score: u32,
    pub tick: u64,
    pub game_over: bool,
}

pub struct GameState {
    grid: GridSize,
    snake: Snake,
    food: Food,
    obstacles: Vec<Obstacle>,
    pending_portal: Option<Point>,
    effects: ActiveEffects,
    score: u32,
    tick_count: u64,
    tick_interval_ms: u64,
    phase: GamePhase,
    settings: GameSettings,
}

impl GameState {
    pub fn new(settings: GameSettings, rng: &mut SessionRng) -> Self {
        let grid = settings.grid();
        let center = Point::new(grid.width / 2, grid.height / 2);
        let snake = Snake::new(center, Direction::Right, settings.initial_snake_length, &grid);

        let mut state = Self {
            grid,
            snake,
            food: Food {
                position: Point::new(0, 0),
                kind: FoodKind::Regular,
            },
            obstacles: Vec::new(),
            pending_portal: None,
            effects: ActiveEffects::default(),
            score: 0,
            tick_count: 0,
            tick_interval_ms: settings.tick_interval_ms,
            phase: GamePhase::Running,
            settings,
        };
        state.spawn_food(rng);
        state
    }

    pub fn wrapping_inc(value: usize, max: usize) -> usize {
        if value + 1 >= max { 0 } else { value + 1 }
    }

    pub fn wrapping_dec(value: usize, max: usize) -> usize {
        if value == 0 { max - 1 } else { value - 1 }
    }

    /// Stores a direction change for the next tick. Reversing into the neck
    /// is rejected against the current direction, not the pending one, so a
    /// queued turn cannot be chained into an instant reversal.
    pub fn set_direction(&mut self, requested: Direction) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        if requested.is_opposite(&self.snake.direction) {
            return;
        }
        self.snake.pending_direction = Some(requested);
    }

    pub fn handle_input(&mut self, intent: InputIntent, rng: &mut SessionRng) {
        match intent {
            InputIntent::Move(direction) => self.set_direction(direction),
            InputIntent::Restart => {
                if self.phase == GamePhase::GameOver {
                    self.restart(rng);
                }
            }
        }
    }

    /// Rebuilds the game from its settings. Clears obstacles, effects and
    /// score; the old expiry ticks cannot leak into the new run.
    pub fn restart(&mut self, rng: &mut SessionRng) {
        log!("Game restarted");
        *self = Self::new(self.settings.clone(), rng);
    }

    pub fn tick(&mut self, rng: &mut SessionRng) -> TickResult {
        let mut result = TickResult::default();
        if self.phase == GamePhase::GameOver {
            return result;
        }

        self.tick_count += 1;
        self.effects.expire(self.tick_count);

        if let Some(direction) = self.snake.pending_direction.take() {
            self.snake.direction = direction;
        }

        let mut next_head = self.next_head_position();

        if let Some(index) = self.obstacles.iter().position(|o| o.position == next_head) {
            let obstacle = self.obstacles[index];
            result.obstacle_hit = Some(obstacle.kind);
            match obstacle.kind {
                ObstacleKind::Portal => {
                    let exit = obstacle
                        .portal_exit
                        .expect("Portal should always have a paired exit");
                    log!(
                        "Teleported from ({}, {}) to ({}, {})",
                        next_head.x,
                        next_head.y,
                        exit.x,
                        exit.y
                    );
                    next_head = exit;
                    result.teleported_to = Some(exit);
                }
                ObstacleKind::Phasing => {
                    self.effects
                        .set_phasing(self.tick_count + self.settings.phasing_duration_ticks);
                    self.obstacles.remove(index);
                    log!("Phasing obstacle consumed at ({}, {})", next_head.x, next_head.y);
                }
                ObstacleKind::Disco => {
                    self.effects
                        .set_disco(self.tick_count + self.settings.disco_duration_ticks);
                    self.obstacles.remove(index);
                    log!("Disco obstacle consumed at ({}, {})", next_head.x, next_head.y);
                }
            }
        }

        // Checked against every segment, tail included, before the body is
        // touched this tick.
        if self.snake.occupies(&next_head) {
            log!(
                "Self collision at ({}, {}). Final score: {}",
                next_head.x,
                next_head.y,
                self.score
            );
            self.phase = GamePhase::GameOver;
            result.game_over = true;
            return result;
        }

        self.snake.push_head(next_head);
        result.moved = true;

        if next_head == self.food.position {
            let kind = self.food.kind;
            self.score += kind.points();
            result.ate = Some(kind);
            result.points_gained = kind.points();
            log!(
                "Ate {} food at ({}, {}). Score: {}",
                kind.color(),
                next_head.x,
                next_head.y,
                self.score
            );
            self.apply_food_effect(kind);
            self.spawn_food(rng);
        } else {
            self.snake.pop_tail();
        }

        if self.settings.rule_set == RuleSet::Arcade {
            self.try_spawn_obstacle(rng);
        }

        result
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            segments: self.snake.body.iter().copied().collect(),
            direction: self.snake.direction,
            food_position: self.food.position,
            food_kind: self.food.kind,
            obstacles: self.obstacles.clone(),
            phasing_active: self.effects.phasing_active(),
            disco_active: self.effects.disco_active(),
            speed_boost_active: self.effects.speed_boost_active(),
            score: self.score,
            tick: self.tick_count,
            game_over: self.phase == GamePhase::GameOver,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Food {
        self.food
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn effects(&self) -> &ActiveEffects {
        &self.effects
    }

    pub fn speed_multiplier(&self) -> f32 {
        if self.effects.speed_boost_active() {
            SPEED_BOOST_FACTOR
        } else {
            1.0
        }
    }

    /// Effective tick cadence for the scheduler. Classic rules ratchet the
    /// stored interval; arcade rules divide by the boost multiplier.
    pub fn current_tick_interval(&self) -> Duration {
        let ms = self.tick_interval_ms as f32 / self.speed_multiplier();
        Duration::from_millis(ms.round() as u64)
    }

    fn next_head_position(&self) -> Point {
        let head = self.snake.head();
        match self.snake.direction {
            Direction::Up => Point::new(head.x, Self::wrapping_dec(head.y, self.grid.height)),
            Direction::Down => Point::new(head.x, Self::wrapping_inc(head.y, self.grid.height)),
            Direction::Left => Point::new(Self::wrapping_dec(head.x, self.grid.width), head.y),
            Direction::Right => Point::new(Self::wrapping_inc(head.x, self.grid.width), head.y),
        }
    }

    fn apply_food_effect(&mut self, kind: FoodKind) {
        match kind {
            FoodKind::Regular => {}
            FoodKind::Bonus => self.snake.duplicate_tail(),
            FoodKind::SpeedBoost => match self.settings.rule_set {
                RuleSet::Arcade => {
                    self.effects.set_speed_boost(
                        self.tick_count + self.settings.speed_boost_duration_ticks,
                    );
                }
                RuleSet::Classic => {
                    self.tick_interval_ms = self
                        .tick_interval_ms
                        .saturating_sub(self.settings.speed_ratchet_decrement_ms)
                        .max(self.settings.min_tick_interval_ms);
                }
            },
        }
    }

    fn spawn_food(&mut self, rng: &mut SessionRng) {
        let kind = FoodKind::pick(self.settings.rule_set, rng);
        if let Some(position) = self.random_free_cell(rng, false) {
            self.food = Food { position, kind };
            log!("{} food spawned at ({}, {})", kind.color(), position.x, position.y);
        }
    }

    fn try_spawn_obstacle(&mut self, rng: &mut SessionRng) {
        // Two independent random gates.
        if rng.random::<f32>() >= self.settings.obstacle_tick_probability {
            return;
        }
        if rng.random::<f32>() >= self.settings.obstacle_spawn_probability {
            return;
        }

        let kind = ObstacleKind::pick(rng);
        let Some(position) = self.random_free_cell(rng, true) else {
            return;
        };
        self.place_spawned_obstacle(kind, position);
    }

    fn place_spawned_obstacle(&mut self, kind: ObstacleKind, position: Point) {
        if kind == ObstacleKind::Portal {
            match self.pending_portal.take() {
                Some(first) => {
                    let (entry, exit) = Obstacle::portal_pair(first, position);
                    self.obstacles.push(entry);
                    self.obstacles.push(exit);
                    log!(
                        "Portal pair opened at ({}, {}) and ({}, {})",
                        first.x,
                        first.y,
                        position.x,
                        position.y
                    );
                }
                None => {
                    // Held back until a partner exists, then both are added
                    // atomically.
                    self.pending_portal = Some(position);
                }
            }
        } else {
            self.obstacles.push(Obstacle::new(position, kind));
            log!("{:?} obstacle spawned at ({}, {})", kind, position.x, position.y);
        }
    }

    fn random_free_cell(&self, rng: &mut SessionRng, avoid_food: bool) -> Option<Point> {
        for _ in 0..100 {
            let pos = Point::new(
                rng.random_range(0..self.grid.width),
                rng.random_range(0..self.grid.height),
            );
            if self.is_free(&pos, avoid_food) {
                return Some(pos);
            }
        }

        // The grid is crowded; fall back to sampling the free-cell set so
        // placement always terminates.
        let mut free_cells = Vec::new();
        for y in 0..self.grid.height {
            for x in 0..self.grid.width {
                let pos = Point::new(x, y);
                if self.is_free(&pos, avoid_food) {
                    free_cells.push(pos);
                }
            }
        }
        if free_cells.is_empty() {
            None
        } else {
            Some(free_cells[rng.random_range(0..free_cells.len())])
        }
    }

    fn is_free(&self, pos: &Point, avoid_food: bool) -> bool {
        if self.snake.occupies(pos) {
            return false;
        }
        if avoid_food && self.food.position == *pos {
            return false;
        }
        if self.pending_portal == Some(*pos) {
            return false;
        }
        !self.obstacles.iter().any(|o| o.position == *pos)
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, position: Point, kind: FoodKind) {
        self.food = Food { position, kind };
    }
}
