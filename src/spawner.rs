//! Timed enemy and pickup creation.
//!
//! Spawning runs off a wall-clock interval rather than the frame counter, so
//! a slow frame rate does not slow the waves down.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Enemy, EnemyKind, ExtraLife, GameState, TAUNTS};

// ── Spawn clock ──────────────────────────────────────────────────────────────

/// Fires once per elapsed interval. Intervals missed while the caller was
/// busy are skipped, not replayed as a burst.
#[derive(Debug, Clone)]
pub struct SpawnClock {
    interval: Duration,
    next_due: Instant,
}

impl SpawnClock {
    pub fn new(interval: Duration, now: Instant) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        SpawnClock {
            interval,
            next_due: now + interval,
        }
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        while self.next_due <= now {
            self.next_due += self.interval;
        }
        true
    }
}

// ── Spawning ─────────────────────────────────────────────────────────────────

/// A uniformly random top edge in `[0, span)`, or 0 when nothing fits.
fn random_y(rng: &mut impl Rng, span: f32) -> f32 {
    if span > 0.0 {
        rng.gen_range(0.0..span)
    } else {
        0.0
    }
}

/// Build one enemy at the right edge, scaled to the current difficulty.
pub fn make_enemy(state: &GameState, config: &GameConfig, rng: &mut impl Rng) -> Enemy {
    let session = &state.session;
    let health = if session.score >= config.tough_score_threshold {
        config.enemy_tough_health
    } else {
        config.enemy_base_health
    };
    let kind = EnemyKind::ALL[rng.gen_range(0..EnemyKind::ALL.len())];
    let taunt = TAUNTS[rng.gen_range(0..TAUNTS.len())];

    Enemy {
        x: state.width,
        y: random_y(rng, state.height - config.enemy_height),
        width: config.enemy_width,
        height: config.enemy_height,
        speed: config.enemy_base_speed + session.speed_multiplier as f32 * config.enemy_speed_step,
        health,
        max_health: health,
        kind,
        taunt,
        taunt_timer: config.taunt_frames,
    }
}

/// Whether the current score earns a pickup that has not been handed out yet.
fn pickup_due(state: &GameState, config: &GameConfig) -> bool {
    let score = state.session.score;
    score > 0 && score % config.pickup_every == 0 && state.last_pickup_score != Some(score)
}

/// One spawn tick: an enemy, plus an extra-life pickup when the score has
/// just reached a new multiple of `pickup_every`. Only a running session
/// spawns anything.
pub fn spawn_wave(state: &GameState, config: &GameConfig, rng: &mut impl Rng) -> GameState {
    if !state.session.is_running() {
        return state.clone();
    }

    let mut next = state.clone();
    next.enemies.push(make_enemy(state, config, rng));

    if pickup_due(state, config) {
        next.extra_lives.push(ExtraLife {
            x: state.width,
            y: random_y(rng, state.height - config.pickup_height),
            width: config.pickup_width,
            height: config.pickup_height,
            speed: config.pickup_speed,
        });
        next.last_pickup_score = Some(state.session.score);
        tracing::debug!(score = state.session.score, "extra life spawned");
    }

    next
}
