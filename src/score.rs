/// Receives the running score and keeps the best ever seen. The engine has
/// no gameplay dependency on the stored value; it exists for display only.
pub trait ScoreStore {
    fn record(&mut self, score: u32);
    fn best(&self) -> u32;
}

#[derive(Debug, Default)]
pub struct InMemoryScoreStore {
    best: u32,
}

impl InMemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for InMemoryScoreStore {
    fn record(&mut self, score: u32) {
        if score > self.best {
            self.best = score;
        }
    }

    fn best(&self) -> u32 {
        self.best
    }
}
