use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::interval;

use crate::config::Validate;
use crate::game::{Direction, GameSettings, GameSnapshot, GameState, SessionRng, TickResult};
use crate::input::InputIntent;
use crate::log;
use crate::score::ScoreStore;

/// Consumes snapshots. Stateless with respect to game rules.
pub trait Renderer {
    fn render(&mut self, snapshot: &GameSnapshot);
}

/// Owns one game and its tick cadence. All state mutation happens inside a
/// tick turn under the mutex, so there is exactly one writer.
pub struct GameSession {
    game_state: Arc<Mutex<GameState>>,
    rng: Arc<Mutex<SessionRng>>,
    seed: u64,
}

impl GameSession {
    pub fn new(settings: GameSettings, seed: u64) -> Result<Self, String> {
        settings.validate()?;
        let mut rng = SessionRng::new(seed);
        let game_state = GameState::new(settings, &mut rng);
        Ok(Self {
            game_state: Arc::new(Mutex::new(game_state)),
            rng: Arc::new(Mutex::new(rng)),
            seed,
        })
    }

    pub fn from_random_seed(settings: GameSettings) -> Result<Self, String> {
        let seed = SessionRng::from_random().seed();
        Self::new(settings, seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub async fn handle_input(&self, intent: InputIntent) {
        let mut game_state = self.game_state.lock().await;
        let mut rng = self.rng.lock().await;
        game_state.handle_input(intent, &mut rng);
    }

    pub async fn set_direction(&self, direction: Direction) {
        self.game_state.lock().await.set_direction(direction);
    }

    /// Performs at most one tick.
    pub async fn advance(&self) -> TickResult {
        let mut game_state = self.game_state.lock().await;
        let mut rng = self.rng.lock().await;
        game_state.tick(&mut rng)
    }

    pub async fn snapshot(&self) -> GameSnapshot {
        self.game_state.lock().await.snapshot()
    }

    pub async fn current_tick_interval(&self) -> Duration {
        self.game_state.lock().await.current_tick_interval()
    }

    /// Drives the game until it ends: one tick per timer expiry, snapshot to
    /// the renderer every frame, score reported to the store when it changes.
    /// A single timer governs the cadence; it is re-armed whenever a speed
    /// change alters the effective tick interval.
    pub async fn run<R, S>(&self, renderer: &mut R, score_store: &mut S)
    where
        R: Renderer,
        S: ScoreStore,
    {
        let mut current_interval = self.current_tick_interval().await;
        let mut timer = interval(current_interval);
        let mut last_score = 0;

        loop {
            timer.tick().await;

            self.advance().await;
            let snapshot = self.snapshot().await;

            if snapshot.score != last_score {
                score_store.record(snapshot.score);
                last_score = snapshot.score;
            }

            renderer.render(&snapshot);

            if snapshot.game_over {
                log!(
                    "Session over after {} ticks with score {}",
                    snapshot.tick,
                    snapshot.score
                );
                break;
            }

            let effective = self.current_tick_interval().await;
            if effective != current_interval {
                current_interval = effective;
                timer = interval(effective);
            }
        }
    }
}
