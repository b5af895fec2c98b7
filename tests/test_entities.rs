use rug_raiders::entities::*;
use rug_raiders::session::Session;

fn enemy_at(x: f32, y: f32) -> Enemy {
    Enemy {
        x,
        y,
        width: 6.0,
        height: 3.0,
        speed: 0.5,
        health: 1.0,
        max_health: 1.0,
        kind: EnemyKind::Spacecraft,
        taunt: TAUNTS[0],
        taunt_timer: 2,
    }
}

// ── Explosion lifecycle ───────────────────────────────────────────────────────

#[test]
fn explosion_finishes_after_frames_times_delay() {
    let mut e = Explosion::new(0.0, 0.0, 6, 5);
    for tick in 1..30 {
        e.advance();
        assert!(!e.finished, "finished early at tick {}", tick);
        assert!(e.frame < e.total_frames);
    }
    e.advance();
    assert!(e.finished);
}

#[test]
fn explosion_never_shows_past_last_frame() {
    let mut e = Explosion::new(0.0, 0.0, 6, 5);
    let mut shown = Vec::new();
    for _ in 0..40 {
        if let Some(f) = e.visible_frame() {
            shown.push(f);
        }
        e.advance();
    }
    assert_eq!(shown.first(), Some(&0));
    assert_eq!(shown.iter().max(), Some(&5));
    assert_eq!(shown.len(), 30); // 6 frames × 5 ticks each
}

#[test]
fn explosion_frame_steps_on_delay() {
    let mut e = Explosion::new(0.0, 0.0, 6, 5);
    for _ in 0..4 {
        e.advance();
    }
    assert_eq!(e.frame, 0);
    e.advance();
    assert_eq!(e.frame, 1);
    assert_eq!(e.delay_counter, 0);
}

// ── Motion ────────────────────────────────────────────────────────────────────

#[test]
fn enemy_moves_left_and_counts_down_taunt() {
    let mut e = enemy_at(10.0, 4.0);
    e.advance();
    assert_eq!(e.x, 9.5);
    assert_eq!(e.y, 4.0);
    assert_eq!(e.taunt_timer, 1);
    e.advance();
    e.advance();
    assert_eq!(e.taunt_timer, 0); // saturates
}

#[test]
fn bullet_moves_right() {
    let mut b = Bullet {
        x: 3.0,
        y: 1.0,
        width: 2.0,
        height: 1.0,
        speed: 1.5,
        damage: 1.0,
    };
    b.advance();
    assert_eq!(b.x, 4.5);
}

#[test]
fn extra_life_drifts_left() {
    let mut life = ExtraLife {
        x: 5.0,
        y: 2.0,
        width: 3.0,
        height: 2.0,
        speed: 0.5,
    };
    life.advance();
    assert_eq!(life.x, 4.5);
}

#[test]
fn bounds_match_position_and_size() {
    let e = enemy_at(2.0, 3.0);
    let r = e.bounds();
    assert_eq!(r, Rect::new(2.0, 3.0, 6.0, 3.0));
    assert_eq!(r.right(), 8.0);
    assert_eq!(r.bottom(), 6.0);
}

// ── Kinds ─────────────────────────────────────────────────────────────────────

#[test]
fn each_sprite_has_its_own_sound() {
    assert_eq!(EnemyKind::Spacecraft.sound(), Sound::SpacecraftBlast);
    assert_eq!(EnemyKind::Octopus.sound(), Sound::OctopusSplat);
    assert_ne!(EnemyKind::Spacecraft.sound(), EnemyKind::Octopus.sound());
}

#[test]
fn health_fraction_is_clamped() {
    let mut e = enemy_at(0.0, 0.0);
    e.max_health = 3.0;
    e.health = 1.5;
    assert_eq!(e.health_fraction(), 0.5);
    e.health = -0.3;
    assert_eq!(e.health_fraction(), 0.0);
    assert!(!e.is_alive());
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        player: Player {
            x: 4.0,
            y: 10.0,
            width: 6.0,
            height: 3.0,
            speed: 2.0,
            shoot_cooldown: 0,
        },
        enemies: Vec::new(),
        bullets: Vec::new(),
        explosions: Vec::new(),
        extra_lives: Vec::new(),
        session: Session::new(3, 1, 10),
        best_score: 0,
        last_pickup_score: None,
        events: Vec::new(),
        frame: 0,
        width: 80.0,
        height: 24.0,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.y = 99.0;
    cloned.session.score = 999;
    cloned.enemies.push(enemy_at(5.0, 5.0));

    assert_eq!(original.player.y, 10.0);
    assert_eq!(original.session.score, 0);
    assert!(original.enemies.is_empty());
}
