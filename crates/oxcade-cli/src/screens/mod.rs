use std::{cell::Cell, rc::Rc};

use oxcade_engine::GameSeed;

pub use self::{blocks::BlocksScreen, menu::MenuScreen, snake::SnakeScreen};

mod blocks;
mod menu;
mod snake;

/// Settings shared by the game screens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameOptions {
    /// Seed of the random source; a random one is drawn when unset.
    pub seed: Option<GameSeed>,
    pub fps: f64,
}

impl GameOptions {
    pub const DEFAULT_FPS: f64 = 60.0;
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            seed: None,
            fps: Self::DEFAULT_FPS,
        }
    }
}

/// Best scores of the process, shared between the menu and the game screens.
#[derive(Debug, Clone, Default)]
pub struct HighScores {
    blocks: Rc<Cell<usize>>,
    snake: Rc<Cell<usize>>,
}

impl HighScores {
    pub fn blocks(&self) -> usize {
        self.blocks.get()
    }

    pub fn snake(&self) -> usize {
        self.snake.get()
    }

    pub fn record_blocks(&self, score: usize) {
        self.blocks.set(self.blocks.get().max(score));
    }

    pub fn record_snake(&self, score: usize) {
        self.snake.set(self.snake.get().max(score));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_scores_are_shared_and_monotonic() {
        let scores = HighScores::default();
        let other = scores.clone();
        other.record_blocks(300);
        other.record_blocks(100);
        scores.record_snake(40);
        assert_eq!(scores.blocks(), 300);
        assert_eq!(other.snake(), 40);
    }
}
