mod effects;
mod food;
mod game_state;
mod obstacle;
mod session_rng;
mod settings;
mod snake;
mod types;

pub use effects::ActiveEffects;
pub use food::{Food, FoodKind};
pub use game_state::{GameSnapshot, GameState, TickResult};
pub use obstacle::{Obstacle, ObstacleKind};
pub use session_rng::SessionRng;
pub use settings::{GameSettings, RuleSet, SPEED_BOOST_FACTOR};
pub use snake::Snake;
pub use types::{Direction, GamePhase, GridSize, Point};
