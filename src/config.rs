//! Runtime gameplay configuration.
//!
//! [`GameConfig`] mirrors every constant in [`crate::constants`]. A TOML file
//! may override any subset of fields; missing keys fall back to the compiled
//! defaults, so a one-line file that only changes `starting_lives` is valid.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::constants::*;
use crate::error::{GameError, GameResult};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Timing ───────────────────────────────────────────────────────────────
    pub frame_ms: u64,
    pub spawn_interval_ms: u64,

    // ── Session ──────────────────────────────────────────────────────────────
    pub starting_lives: u32,
    pub starting_speed_multiplier: u32,
    pub speed_up_every: u32,

    // ── Player ───────────────────────────────────────────────────────────────
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub player_speed: f32,
    pub fire_cooldown: u32,

    // ── Enemies ──────────────────────────────────────────────────────────────
    pub enemy_width: f32,
    pub enemy_height: f32,
    pub enemy_base_speed: f32,
    pub enemy_speed_step: f32,
    pub taunt_frames: u32,
    pub enemy_base_health: f32,
    pub enemy_tough_health: f32,
    pub tough_score_threshold: u32,

    // ── Bullets ──────────────────────────────────────────────────────────────
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_base_speed: f32,
    pub bullet_speed_step: f32,
    pub bullet_base_damage: f32,
    pub bullet_damage_step: f32,

    // ── Explosions ───────────────────────────────────────────────────────────
    pub explosion_frames: u32,
    pub explosion_frame_delay: u32,

    // ── Pickups ──────────────────────────────────────────────────────────────
    pub pickup_width: f32,
    pub pickup_height: f32,
    pub pickup_speed: f32,
    pub pickup_every: u32,

    // ── Files ────────────────────────────────────────────────────────────────
    /// Where the best score is kept. `None` means `$HOME/.rug_raiders_score`.
    pub high_score_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            frame_ms: FRAME_MS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            starting_lives: STARTING_LIVES,
            starting_speed_multiplier: STARTING_SPEED_MULTIPLIER,
            speed_up_every: SPEED_UP_EVERY,
            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_speed: PLAYER_SPEED,
            fire_cooldown: FIRE_COOLDOWN,
            enemy_width: ENEMY_WIDTH,
            enemy_height: ENEMY_HEIGHT,
            enemy_base_speed: ENEMY_BASE_SPEED,
            enemy_speed_step: ENEMY_SPEED_STEP,
            taunt_frames: TAUNT_FRAMES,
            enemy_base_health: ENEMY_BASE_HEALTH,
            enemy_tough_health: ENEMY_TOUGH_HEALTH,
            tough_score_threshold: TOUGH_SCORE_THRESHOLD,
            bullet_width: BULLET_WIDTH,
            bullet_height: BULLET_HEIGHT,
            bullet_base_speed: BULLET_BASE_SPEED,
            bullet_speed_step: BULLET_SPEED_STEP,
            bullet_base_damage: BULLET_BASE_DAMAGE,
            bullet_damage_step: BULLET_DAMAGE_STEP,
            explosion_frames: EXPLOSION_FRAMES,
            explosion_frame_delay: EXPLOSION_FRAME_DELAY,
            pickup_width: PICKUP_WIDTH,
            pickup_height: PICKUP_HEIGHT,
            pickup_speed: PICKUP_SPEED,
            pickup_every: PICKUP_EVERY,
            high_score_path: None,
        }
    }
}

impl GameConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist and parse. Without one, `rug_raiders.toml`
    /// in the working directory is used when present; otherwise the compiled
    /// defaults apply. The result is always validated.
    pub fn load(path: Option<&Path>) -> GameResult<GameConfig> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let fallback = Path::new(CONFIG_FILE);
                if fallback.exists() {
                    Self::from_file(fallback)?
                } else {
                    tracing::info!("no {CONFIG_FILE} found; using compiled defaults");
                    GameConfig::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> GameResult<GameConfig> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| GameError::io(format!("reading config {}", path.display()), e))?;
        let config = Self::from_toml_str(&contents).map_err(|message| GameError::Config {
            path: path.to_path_buf(),
            message,
        })?;
        tracing::info!(path = %path.display(), "loaded game config");
        Ok(config)
    }

    /// Parse a TOML document, filling absent keys with defaults.
    pub fn from_toml_str(contents: &str) -> Result<GameConfig, String> {
        toml::from_str::<GameConfig>(contents).map_err(|e| e.to_string())
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> GameResult<()> {
        if self.frame_ms == 0 {
            return Err(invalid("frame_ms", "must be greater than zero"));
        }
        if self.spawn_interval_ms == 0 {
            return Err(invalid("spawn_interval_ms", "must be greater than zero"));
        }
        if self.starting_lives == 0 {
            return Err(invalid("starting_lives", "must be at least 1"));
        }
        if self.speed_up_every == 0 {
            return Err(invalid("speed_up_every", "must be at least 1"));
        }
        if self.pickup_every == 0 {
            return Err(invalid("pickup_every", "must be at least 1"));
        }
        if self.explosion_frames == 0 {
            return Err(invalid("explosion_frames", "must be at least 1"));
        }
        if self.explosion_frame_delay == 0 {
            return Err(invalid("explosion_frame_delay", "must be at least 1"));
        }
        let positive = [
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("enemy_width", self.enemy_width),
            ("enemy_height", self.enemy_height),
            ("bullet_width", self.bullet_width),
            ("bullet_height", self.bullet_height),
            ("pickup_width", self.pickup_width),
            ("pickup_height", self.pickup_height),
            ("enemy_base_health", self.enemy_base_health),
            ("enemy_tough_health", self.enemy_tough_health),
        ];
        for (field, value) in positive {
            // NaN fails this too
            if !(value > 0.0) {
                return Err(invalid(field, "must be positive"));
            }
        }
        let non_negative = [
            ("enemy_base_speed", self.enemy_base_speed),
            ("enemy_speed_step", self.enemy_speed_step),
            ("bullet_base_speed", self.bullet_base_speed),
            ("bullet_speed_step", self.bullet_speed_step),
            ("pickup_speed", self.pickup_speed),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(invalid(field, "must not be negative"));
            }
        }
        Ok(())
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    /// Resolved location of the best-score file.
    pub fn high_score_file(&self) -> PathBuf {
        self.high_score_path.clone().unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(HIGH_SCORE_FILE)
        })
    }
}

fn invalid(field: &'static str, reason: &'static str) -> GameError {
    GameError::InvalidConfig { field, reason }
}
