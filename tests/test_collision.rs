use rug_raiders::collision::*;
use rug_raiders::compute::{init_state, start_session};
use rug_raiders::config::GameConfig;
use rug_raiders::entities::*;

fn make_state() -> GameState {
    start_session(&init_state(&GameConfig::default(), 80.0, 24.0, 0))
}

fn enemy_at(x: f32, y: f32, health: f32) -> Enemy {
    Enemy {
        x,
        y,
        width: 6.0,
        height: 3.0,
        speed: 0.0,
        health,
        max_health: health,
        kind: EnemyKind::Spacecraft,
        taunt: TAUNTS[2],
        taunt_timer: 0,
    }
}

fn bullet_at(x: f32, y: f32, damage: f32) -> Bullet {
    Bullet {
        x,
        y,
        width: 2.0,
        height: 1.0,
        speed: 0.0,
        damage,
    }
}

// ── overlap ───────────────────────────────────────────────────────────────────

#[test]
fn overlap_is_symmetric() {
    let base = Rect::new(10.0, 10.0, 4.0, 3.0);
    for dx in -6..=6 {
        for dy in -5..=5 {
            let other = Rect::new(10.0 + dx as f32, 10.0 + dy as f32, 2.0, 2.0);
            assert_eq!(
                overlap(&base, &other),
                overlap(&other, &base),
                "asymmetric at offset ({}, {})",
                dx,
                dy
            );
        }
    }
}

#[test]
fn overlap_requires_both_axes() {
    let a = Rect::new(0.0, 0.0, 4.0, 4.0);
    assert!(overlap(&a, &Rect::new(3.0, 3.0, 4.0, 4.0)));
    assert!(!overlap(&a, &Rect::new(3.0, 5.0, 4.0, 4.0))); // x overlaps only
    assert!(!overlap(&a, &Rect::new(5.0, 3.0, 4.0, 4.0))); // y overlaps only
}

// ── prune_bullets ─────────────────────────────────────────────────────────────

#[test]
fn bullets_on_the_right_edge_survive() {
    let mut s = make_state();
    s.bullets.push(bullet_at(80.0, 0.0, 1.0));
    s.bullets.push(bullet_at(80.5, 0.0, 1.0));
    prune_bullets(&mut s);
    assert_eq!(s.bullets.len(), 1);
    assert_eq!(s.bullets[0].x, 80.0);
}

// ── resolve_hits ──────────────────────────────────────────────────────────────

#[test]
fn a_bullet_is_spent_on_one_enemy_only() {
    let cfg = GameConfig::default();
    let mut s = make_state();
    // Two stacked enemies both overlapping the same bullet
    s.enemies.push(enemy_at(40.0, 2.0, 1.0));
    s.enemies.push(enemy_at(40.0, 3.0, 1.0));
    s.bullets.push(bullet_at(39.0, 3.0, 1.0));
    resolve_hits(&mut s, &cfg);

    assert_eq!(s.enemies.len(), 1);
    assert!(s.bullets.is_empty());
    assert_eq!(s.session.score, 1);
}

#[test]
fn a_dead_enemy_absorbs_no_more_bullets() {
    let cfg = GameConfig::default();
    let mut s = make_state();
    s.enemies.push(enemy_at(40.0, 2.0, 1.0));
    s.bullets.push(bullet_at(39.0, 3.0, 1.0));
    s.bullets.push(bullet_at(41.0, 3.0, 1.0));
    resolve_hits(&mut s, &cfg);

    assert!(s.enemies.is_empty());
    assert_eq!(s.bullets.len(), 1);
    assert_eq!(s.bullets[0].x, 41.0);
}

#[test]
fn a_wounded_enemy_keeps_its_damage() {
    let cfg = GameConfig::default();
    let mut s = make_state();
    s.enemies.push(enemy_at(40.0, 2.0, 3.0));
    s.bullets.push(bullet_at(39.0, 3.0, 1.1));
    resolve_hits(&mut s, &cfg);

    assert_eq!(s.enemies.len(), 1);
    assert!((s.enemies[0].health - 1.9).abs() < 1e-5);
    assert!(s.explosions.is_empty());
    assert_eq!(s.session.score, 0);
}

// ── collect_pickups / resolve_breaches ────────────────────────────────────────

#[test]
fn several_pickups_in_one_frame_each_count() {
    let mut s = make_state();
    for dy in [0.0, 1.0] {
        s.extra_lives.push(ExtraLife {
            x: 5.0,
            y: 11.0 + dy,
            width: 3.0,
            height: 2.0,
            speed: 0.0,
        });
    }
    collect_pickups(&mut s);
    assert!(s.extra_lives.is_empty());
    assert_eq!(s.session.lives, 5);
}

#[test]
fn breaches_leave_distant_enemies_alone() {
    let cfg = GameConfig::default();
    let mut s = make_state();
    s.enemies.push(enemy_at(50.0, 2.0, 1.0));
    s.enemies.push(enemy_at(5.0, 11.0, 1.0)); // on the ship
    resolve_breaches(&mut s, &cfg);

    assert_eq!(s.enemies.len(), 1);
    assert_eq!(s.enemies[0].x, 50.0);
    assert_eq!(s.session.lives, 2);
    assert!(s
        .events
        .contains(&GameEvent::Sound(Sound::SpacecraftBlast)));
}

#[test]
fn breaches_stop_at_the_last_life() {
    let cfg = GameConfig::default();
    let mut s = make_state();
    s.session.lives = 1;
    s.enemies = vec![enemy_at(-10.0, 5.0, 1.0), enemy_at(5.0, 11.0, 1.0)];

    resolve_breaches(&mut s, &cfg);

    assert_eq!(s.session.lives, 0);
    assert_eq!(s.events, vec![GameEvent::LifeLost, GameEvent::GameOver { score: 0 }]);
    assert_eq!(s.explosions.len(), 1);
    // The contact enemy was never processed
    assert_eq!(s.enemies.len(), 1);
    assert_eq!(s.enemies[0].x, 5.0);
}
