//! Game-loop driver and input-driven state transitions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` and returns a brand-new one, the same way for input actions
//! and for the per-frame `tick`.  Events produced along the way accumulate
//! in `GameState::events` until the shell drains them.

use crate::collision::{collect_pickups, prune_bullets, resolve_breaches, resolve_hits};
use crate::config::GameConfig;
use crate::entities::{Bullet, GameEvent, GameState, Player, Sound};
use crate::session::{Phase, Session};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh, not-yet-started session for a canvas of the given size.
pub fn init_state(config: &GameConfig, width: f32, height: f32, best_score: u32) -> GameState {
    let player = Player {
        x: config.player_x,
        y: clamp_player_y(height / 2.0 - config.player_height / 2.0, config.player_height, height),
        width: config.player_width,
        height: config.player_height,
        speed: config.player_speed,
        shoot_cooldown: 0,
    };
    GameState {
        player,
        enemies: Vec::new(),
        bullets: Vec::new(),
        explosions: Vec::new(),
        extra_lives: Vec::new(),
        session: Session::new(
            config.starting_lives,
            config.starting_speed_multiplier,
            config.speed_up_every,
        ),
        best_score,
        last_pickup_score: None,
        events: Vec::new(),
        frame: 0,
        width,
        height,
    }
}

// ── Phase transitions ────────────────────────────────────────────────────────

pub fn start_session(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.session.start();
    tracing::info!(lives = next.session.lives, "session started");
    next
}

pub fn toggle_pause(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.session.toggle_pause();
    tracing::info!(phase = ?next.session.phase, "pause toggled");
    next
}

/// A new running session on the same canvas, keeping the best score seen so
/// far.
pub fn restart_session(state: &GameState, config: &GameConfig) -> GameState {
    let best_score = state.best_score.max(state.session.score);
    let fresh = init_state(config, state.width, state.height, best_score);
    tracing::info!(previous_score = state.session.score, "restarting");
    start_session(&fresh)
}

// ── Input-driven transitions ─────────────────────────────────────────────────

fn clamp_player_y(y: f32, player_height: f32, canvas_height: f32) -> f32 {
    y.min(canvas_height - player_height).max(0.0)
}

/// Centre the ship on a pointer row, clamped to the canvas.
pub fn move_player_to(state: &GameState, pointer_y: f32) -> GameState {
    let p = &state.player;
    let y = clamp_player_y(pointer_y - p.height / 2.0, p.height, state.height);
    GameState {
        player: Player { y, ..p.clone() },
        ..state.clone()
    }
}

pub fn move_player_up(state: &GameState) -> GameState {
    let p = &state.player;
    move_player_to(state, p.y - p.speed + p.height / 2.0)
}

pub fn move_player_down(state: &GameState) -> GameState {
    let p = &state.player;
    move_player_to(state, p.y + p.speed + p.height / 2.0)
}

/// Fire from the ship's nose. Only while running and off cooldown; bullet
/// speed and damage grow with the speed multiplier.
pub fn player_shoot(state: &GameState, config: &GameConfig) -> GameState {
    if !state.session.is_running() || state.player.shoot_cooldown > 0 {
        return state.clone();
    }
    let m = state.session.speed_multiplier as f32;
    let p = &state.player;
    let bullet = Bullet {
        x: p.x + p.width,
        y: p.y + p.height / 2.0 - config.bullet_height / 2.0,
        width: config.bullet_width,
        height: config.bullet_height,
        speed: config.bullet_base_speed + m * config.bullet_speed_step,
        damage: config.bullet_base_damage + m * config.bullet_damage_step,
    };

    let mut next = state.clone();
    next.bullets.push(bullet);
    next.player.shoot_cooldown = config.fire_cooldown;
    next.events.push(GameEvent::Sound(Sound::Shot));
    next
}

/// Follow a viewport resize and keep the ship on screen.
pub fn resize(state: &GameState, width: f32, height: f32) -> GameState {
    let mut next = state.clone();
    next.width = width;
    next.height = height;
    next.player.y = clamp_player_y(next.player.y, next.player.height, height);
    next
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame. Does nothing unless the session is
/// running.
pub fn tick(state: &GameState, config: &GameConfig) -> GameState {
    let mut next = state.clone();
    if !next.session.is_running() {
        return next;
    }

    // ── 1. Pickups ───────────────────────────────────────────────────────────
    for life in &mut next.extra_lives {
        life.advance();
    }
    collect_pickups(&mut next);

    // ── 2. Explosions ────────────────────────────────────────────────────────
    for explosion in &mut next.explosions {
        explosion.advance();
    }
    next.explosions.retain(|e| !e.finished);

    // ── 3. Enemies vs. player / left edge ────────────────────────────────────
    for enemy in &mut next.enemies {
        enemy.advance();
    }
    resolve_breaches(&mut next, config);
    if next.session.phase == Phase::GameOver {
        // The score is final; nothing else moves this session.
        tracing::info!(score = next.session.score, frame = next.frame, "game over");
        next.frame += 1;
        return next;
    }

    // ── 4. Bullets ───────────────────────────────────────────────────────────
    for bullet in &mut next.bullets {
        bullet.advance();
    }
    prune_bullets(&mut next);

    // ── 5. Bullets vs. enemies ───────────────────────────────────────────────
    resolve_hits(&mut next, config);

    next.player.shoot_cooldown = next.player.shoot_cooldown.saturating_sub(1);
    next.frame += 1;
    next
}
