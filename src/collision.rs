//! Overlap tests and the four resolution passes run every frame.
//!
//! Each pass works on the lists as the previous pass left them, so the
//! order `tick` calls them in is part of the game rules: an enemy that
//! touches the player costs a life even if a bullet would have killed it
//! later in the same frame.

use crate::config::GameConfig;
use crate::entities::{Explosion, GameEvent, GameState, Rect};
use crate::session::Phase;

/// Two rectangles overlap iff each one's min edge is strictly before the
/// other's max edge, on both axes. Touching edges do not count.
pub fn overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && b.x < a.right() && a.y < b.bottom() && b.y < a.bottom()
}

// ── 1. Pickups ↔ player ───────────────────────────────────────────────────────

/// Collect touched pickups (+1 life each) and drop the ones that scrolled
/// past the left edge.
pub fn collect_pickups(state: &mut GameState) {
    let player = state.player.bounds();
    let mut gained = 0;
    state.extra_lives.retain(|life| {
        let bounds = life.bounds();
        if overlap(&bounds, &player) {
            gained += 1;
            false
        } else {
            bounds.right() >= 0.0
        }
    });
    for _ in 0..gained {
        state.session.gain_life();
        state.events.push(GameEvent::LifeGained);
    }
}

// ── 2. Enemies ↔ player / left edge ───────────────────────────────────────────

/// Remove every enemy that touched the player or slipped past the left edge.
/// Each one costs a life and leaves an explosion on the ship; only contact
/// plays the enemy's sound. Once the last life is gone the pass stops.
pub fn resolve_breaches(state: &mut GameState, config: &GameConfig) {
    let player = state.player.bounds();
    let enemies = std::mem::take(&mut state.enemies);
    let mut kept = Vec::with_capacity(enemies.len());

    for enemy in enemies {
        // Lives are spent; the rest of the wave stays where it is.
        if state.session.phase == Phase::GameOver {
            kept.push(enemy);
            continue;
        }
        let bounds = enemy.bounds();
        let contact = overlap(&bounds, &player);
        if !contact && bounds.right() >= 0.0 {
            kept.push(enemy);
            continue;
        }

        state.explosions.push(Explosion::new(
            player.x,
            player.y,
            config.explosion_frames,
            config.explosion_frame_delay,
        ));
        if contact {
            state.events.push(GameEvent::Sound(enemy.sound()));
        }
        state.events.push(GameEvent::LifeLost);
        tracing::debug!(kind = ?enemy.kind, contact, lives = state.session.lives, "enemy breached");

        if state.session.lose_life() {
            state.events.push(GameEvent::GameOver {
                score: state.session.score,
            });
        }
    }

    state.enemies = kept;
}

// ── 3. Bullets ↔ right edge ───────────────────────────────────────────────────

pub fn prune_bullets(state: &mut GameState) {
    let width = state.width;
    state.bullets.retain(|b| b.x <= width);
}

// ── 4. Bullets ↔ enemies ──────────────────────────────────────────────────────

/// Apply bullet damage. A bullet is spent on the first enemy it overlaps;
/// an enemy stops absorbing bullets as soon as its health drops to zero.
pub fn resolve_hits(state: &mut GameState, config: &GameConfig) {
    let enemies = std::mem::take(&mut state.enemies);
    let mut survivors = Vec::with_capacity(enemies.len());

    for mut enemy in enemies {
        let mut i = 0;
        while enemy.is_alive() && i < state.bullets.len() {
            if overlap(&state.bullets[i].bounds(), &enemy.bounds()) {
                let bullet = state.bullets.remove(i);
                enemy.health -= bullet.damage;
            } else {
                i += 1;
            }
        }

        if enemy.is_alive() {
            survivors.push(enemy);
            continue;
        }

        state.session.record_kill();
        state.events.push(GameEvent::Sound(enemy.sound()));
        state.events.push(GameEvent::EnemyDestroyed { kind: enemy.kind });
        state.explosions.push(Explosion::new(
            enemy.x,
            enemy.y,
            config.explosion_frames,
            config.explosion_frame_delay,
        ));
        tracing::debug!(
            kind = ?enemy.kind,
            score = state.session.score,
            speed_multiplier = state.session.speed_multiplier,
            "enemy destroyed"
        );
    }

    state.enemies = survivors;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let b = Rect::new(2.0, 0.0, 2.0, 2.0);
        assert!(!overlap(&a, &b));
        let c = Rect::new(0.0, 2.0, 2.0, 2.0);
        assert!(!overlap(&a, &c));
    }

    #[test]
    fn contained_rect_overlaps() {
        let outer = Rect::new(0.0, 0.0, 10.0, 10.0);
        let inner = Rect::new(4.0, 4.0, 1.0, 1.0);
        assert!(overlap(&outer, &inner));
        assert!(overlap(&inner, &outer));
    }
}
