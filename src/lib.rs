pub mod config;
pub mod game;
pub mod input;
pub mod logger;
pub mod score;
pub mod session;

pub use game::{
    ActiveEffects, Direction, Food, FoodKind, GamePhase, GameSettings, GameSnapshot, GameState,
    GridSize, Obstacle, ObstacleKind, Point, RuleSet, SessionRng, Snake, TickResult,
};
pub use input::{InputIntent, map_key};
pub use score::{InMemoryScoreStore, ScoreStore};
pub use session::{GameSession, Renderer};
