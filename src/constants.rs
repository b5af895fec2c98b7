//! Compile-time gameplay defaults.
//!
//! These are the authoritative defaults behind [`crate::config::GameConfig`].
//! World units are terminal cells: one column horizontally, one row vertically.
//! Timers are counted in frames unless the name says otherwise.

// ── Timing ────────────────────────────────────────────────────────────────────

/// Frame duration in milliseconds (≈30 FPS).
pub const FRAME_MS: u64 = 33;

/// Wall-clock interval between spawn ticks, in milliseconds.
pub const SPAWN_INTERVAL_MS: u64 = 1000;

// ── Session ───────────────────────────────────────────────────────────────────

pub const STARTING_LIVES: u32 = 3;

/// The speed multiplier a fresh session starts with.
pub const STARTING_SPEED_MULTIPLIER: u32 = 1;

/// Every this many kills the speed multiplier goes up by one.
pub const SPEED_UP_EVERY: u32 = 10;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_X: f32 = 4.0;
pub const PLAYER_WIDTH: f32 = 6.0;
pub const PLAYER_HEIGHT: f32 = 3.0;

/// Rows moved per Up/Down key press.
pub const PLAYER_SPEED: f32 = 2.0;

/// Frames between two shots.
pub const FIRE_COOLDOWN: u32 = 8;

// ── Enemies ───────────────────────────────────────────────────────────────────

pub const ENEMY_WIDTH: f32 = 6.0;
pub const ENEMY_HEIGHT: f32 = 3.0;
pub const ENEMY_BASE_SPEED: f32 = 0.6;

/// Added to the enemy speed per point of speed multiplier.
pub const ENEMY_SPEED_STEP: f32 = 0.09;

/// Frames a freshly spawned enemy shows its taunt.
pub const TAUNT_FRAMES: u32 = 60;

pub const ENEMY_BASE_HEALTH: f32 = 1.0;
pub const ENEMY_TOUGH_HEALTH: f32 = 3.0;

/// From this score on, enemies spawn with [`ENEMY_TOUGH_HEALTH`].
pub const TOUGH_SCORE_THRESHOLD: u32 = 100;

// ── Bullets ───────────────────────────────────────────────────────────────────

pub const BULLET_WIDTH: f32 = 2.0;
pub const BULLET_HEIGHT: f32 = 1.0;
pub const BULLET_BASE_SPEED: f32 = 1.8;
pub const BULLET_SPEED_STEP: f32 = 0.06;
pub const BULLET_BASE_DAMAGE: f32 = 1.0;
pub const BULLET_DAMAGE_STEP: f32 = 0.1;

// ── Explosions ────────────────────────────────────────────────────────────────

/// Frames in the explosion sprite sheet.
pub const EXPLOSION_FRAMES: u32 = 6;

/// Ticks each sprite-sheet frame stays on screen.
pub const EXPLOSION_FRAME_DELAY: u32 = 5;

// ── Extra-life pickups ────────────────────────────────────────────────────────

pub const PICKUP_WIDTH: f32 = 3.0;
pub const PICKUP_HEIGHT: f32 = 2.0;
pub const PICKUP_SPEED: f32 = 0.6;

/// A pickup spawns while the score is a positive multiple of this.
pub const PICKUP_EVERY: u32 = 15;

// ── Files ─────────────────────────────────────────────────────────────────────

pub const CONFIG_FILE: &str = "rug_raiders.toml";
pub const HIGH_SCORE_FILE: &str = ".rug_raiders_score";
pub const LOG_FILE: &str = "rug_raiders.log";
