//! Session bookkeeping: phase, score, lives, difficulty and the best score
//! that survives between runs.

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{GameError, GameResult};

/// Lifecycle of one session. There is no way back from `GameOver`; a new
/// session is a new [`Session`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Paused,
    GameOver,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub phase: Phase,
    pub score: u32,
    pub lives: u32,
    pub speed_multiplier: u32,
    /// Kills between two speed-ups.
    pub speed_up_every: u32,
}

impl Session {
    pub fn new(lives: u32, speed_multiplier: u32, speed_up_every: u32) -> Self {
        Session {
            phase: Phase::NotStarted,
            score: 0,
            lives,
            speed_multiplier,
            speed_up_every: speed_up_every.max(1),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn start(&mut self) {
        if self.phase == Phase::NotStarted {
            self.phase = Phase::Running;
        }
    }

    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            other => other,
        };
    }

    pub fn gain_life(&mut self) {
        self.lives += 1;
    }

    /// Take one life and run the game-over check.
    ///
    /// Returns `true` only on the call that ends the session.
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 && matches!(self.phase, Phase::Running | Phase::Paused) {
            self.phase = Phase::GameOver;
            return true;
        }
        false
    }

    /// Count one kill; every `speed_up_every`-th point raises the multiplier.
    pub fn record_kill(&mut self) {
        self.score += 1;
        if self.score % self.speed_up_every == 0 {
            self.speed_multiplier += 1;
        }
    }
}

// ── Best-score persistence ────────────────────────────────────────────────────

/// Somewhere a single best score can be kept between runs.
pub trait HighScoreStore {
    /// The stored best score; 0 when nothing has been stored yet.
    fn load(&self) -> GameResult<u32>;
    fn save(&mut self, score: u32) -> GameResult<()>;
}

/// Best score as a plain integer in a text file.
#[derive(Debug, Clone)]
pub struct FileHighScore {
    path: PathBuf,
}

impl FileHighScore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileHighScore { path: path.into() }
    }
}

impl HighScoreStore for FileHighScore {
    fn load(&self) -> GameResult<u32> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(path = %self.path.display(), "unreadable best score; treating as 0");
                0
            })),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(0),
            Err(e) => Err(GameError::io(
                format!("reading best score {}", self.path.display()),
                e,
            )),
        }
    }

    fn save(&mut self, score: u32) -> GameResult<()> {
        std::fs::write(&self.path, score.to_string()).map_err(|e| {
            GameError::io(format!("writing best score {}", self.path.display()), e)
        })
    }
}

/// In-memory store, for tests and for running without a writable home.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScore {
    pub best: Option<u32>,
}

impl HighScoreStore for MemoryHighScore {
    fn load(&self) -> GameResult<u32> {
        Ok(self.best.unwrap_or(0))
    }

    fn save(&mut self, score: u32) -> GameResult<()> {
        self.best = Some(score);
        Ok(())
    }
}

/// Compare a finished session's score with the stored best and overwrite it
/// only when beaten. Returns the best score after settling.
pub fn settle_best_score(store: &mut dyn HighScoreStore, score: u32) -> GameResult<u32> {
    let best = store.load()?;
    if score > best {
        store.save(score)?;
        tracing::info!(score, previous = best, "new best score");
        Ok(score)
    } else {
        Ok(best)
    }
}
