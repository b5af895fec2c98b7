//! Rendering layer. All terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; this module only translates
//! state into terminal commands.

mod sprites;

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use rug_raiders::entities::{Bullet, Enemy, EnemyKind, Explosion, ExtraLife, GameState};
use rug_raiders::session::Phase;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_STARS: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::White;
const C_LIFE_ICON: Color = Color::Green;
const C_HUD_BEST: Color = Color::DarkYellow;
const C_PLAYER: Color = Color::White;
const C_ENEMY_SPACECRAFT: Color = Color::Green;
const C_ENEMY_OCTOPUS: Color = Color::Red;
const C_TAUNT: Color = Color::White;
const C_HEALTH_FULL: Color = Color::Green;
const C_HEALTH_LOST: Color = Color::Red;
const C_BULLET: Color = Color::Yellow;
const C_EXTRA_LIFE: Color = Color::Magenta;
const C_EXPLOSION: Color = Color::DarkYellow;
const C_HINT: Color = Color::DarkGrey;

const CONTROLS: &str = "Mouse / ↑ ↓ : Move   SPACE / Click : Shoot   P : Pause   Q : Quit";

// ── Clipped drawing ───────────────────────────────────────────────────────────

/// The visible terminal area. Anything outside it is cut, not wrapped.
#[derive(Clone, Copy)]
struct Viewport {
    width: i32,
    height: i32,
}

impl Viewport {
    fn of(state: &GameState) -> Self {
        Viewport {
            width: state.width as i32,
            height: state.height as i32,
        }
    }

    /// Print `text` with its first char at world position (`x`, `y`).
    fn put<W: Write>(&self, out: &mut W, x: f32, y: f32, text: &str) -> std::io::Result<()> {
        let row = y.round() as i32;
        let col = x.round() as i32;
        if row < 0 || row >= self.height || col >= self.width {
            return Ok(());
        }
        let skip = (-col).max(0) as usize;
        let start = col.max(0);
        let room = (self.width - start) as usize;
        let visible: String = text.chars().skip(skip).take(room).collect();
        if visible.is_empty() {
            return Ok(());
        }
        out.queue(cursor::MoveTo(start as u16, row as u16))?;
        out.queue(Print(visible))?;
        Ok(())
    }

    fn put_sprite<W: Write>(
        &self,
        out: &mut W,
        x: f32,
        y: f32,
        rows: &[&str],
    ) -> std::io::Result<()> {
        for (i, row) in rows.iter().enumerate() {
            self.put(out, x, y + i as f32, row)?;
        }
        Ok(())
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let view = Viewport::of(state);
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_background(out, &view, state)?;
    draw_player(out, &view, state)?;

    for life in &state.extra_lives {
        draw_extra_life(out, &view, life)?;
    }
    for explosion in &state.explosions {
        draw_explosion(out, &view, explosion)?;
    }
    for enemy in &state.enemies {
        draw_enemy(out, &view, enemy)?;
    }
    for bullet in &state.bullets {
        draw_bullet(out, &view, bullet)?;
    }

    draw_hud(out, &view, state)?;
    draw_controls_hint(out, state)?;

    match state.session.phase {
        Phase::Paused => draw_pause(out, state)?,
        Phase::GameOver => draw_game_over(out, state)?,
        Phase::NotStarted | Phase::Running => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, (state.height as u16).saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// The start menu, with the persisted best score.
pub fn render_menu<W: Write>(out: &mut W, best_score: u32) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let lines: [(String, Color); 5] = [
        ("★  RUG  RAIDERS  ★".to_string(), Color::Cyan),
        (format!("Best Score: {}", best_score), Color::Yellow),
        (String::new(), Color::Reset),
        ("ENTER / SPACE : Start".to_string(), Color::White),
        (CONTROLS.to_string(), C_HINT),
    ];

    let start_row = cy.saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(msg))?;
    }

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── Background ────────────────────────────────────────────────────────────────

/// A slow starfield drifting left, derived from the frame counter.
fn draw_background<W: Write>(
    out: &mut W,
    view: &Viewport,
    state: &GameState,
) -> std::io::Result<()> {
    if view.width <= 0 || view.height <= 0 {
        return Ok(());
    }
    out.queue(style::SetForegroundColor(C_STARS))?;
    let drift = (state.frame / 4) as i32;
    let stars = (view.width * view.height / 60).max(1);
    for i in 0..stars {
        let x = (i * 37 + 11 - drift).rem_euclid(view.width);
        let y = (i * 17 + 5) % view.height;
        view.put(out, x as f32, y as f32, ".")?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, view: &Viewport, state: &GameState) -> std::io::Result<()> {
    let p = &state.player;
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    view.put_sprite(out, p.x, p.y, &sprites::PLAYER)
}

fn draw_enemy<W: Write>(out: &mut W, view: &Viewport, enemy: &Enemy) -> std::io::Result<()> {
    let (sprite, color) = match enemy.kind {
        EnemyKind::Spacecraft => (&sprites::SPACECRAFT, C_ENEMY_SPACECRAFT),
        EnemyKind::Octopus => (&sprites::OCTOPUS, C_ENEMY_OCTOPUS),
    };
    out.queue(style::SetForegroundColor(color))?;
    view.put_sprite(out, enemy.x, enemy.y, sprite)?;

    // Health bar on the row above the sprite
    let bar_len = enemy.width.round().max(1.0) as usize;
    let filled = (enemy.health_fraction() * bar_len as f32).ceil() as usize;
    out.queue(style::SetForegroundColor(C_HEALTH_FULL))?;
    view.put(out, enemy.x, enemy.y - 1.0, &"▀".repeat(filled))?;
    out.queue(style::SetForegroundColor(C_HEALTH_LOST))?;
    view.put(
        out,
        enemy.x + filled as f32,
        enemy.y - 1.0,
        &"▀".repeat(bar_len - filled.min(bar_len)),
    )?;

    if enemy.taunt_timer > 0 {
        out.queue(style::SetForegroundColor(C_TAUNT))?;
        view.put(out, enemy.x - 1.0, enemy.y - 2.0, enemy.taunt)?;
    }
    Ok(())
}

fn draw_bullet<W: Write>(out: &mut W, view: &Viewport, bullet: &Bullet) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_BULLET))?;
    view.put(out, bullet.x, bullet.y, sprites::BULLET)
}

fn draw_extra_life<W: Write>(out: &mut W, view: &Viewport, life: &ExtraLife) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_EXTRA_LIFE))?;
    view.put_sprite(out, life.x, life.y, &sprites::EXTRA_LIFE)
}

/// Blit the current sprite-sheet frame. Finished explosions draw nothing.
fn draw_explosion<W: Write>(
    out: &mut W,
    view: &Viewport,
    explosion: &Explosion,
) -> std::io::Result<()> {
    let Some(step) = explosion.visible_frame() else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(C_EXPLOSION))?;
    view.put_sprite(out, explosion.x, explosion.y, sprites::explosion_frame(step))
}

// ── HUD (rows 0–2) ────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, view: &Viewport, state: &GameState) -> std::io::Result<()> {
    let session = &state.session;

    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    view.put(out, 1.0, 0.0, &format!("Score: {}", session.score))?;

    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    view.put(out, 1.0, 1.0, &format!("Lives: {}", session.lives))?;

    out.queue(style::SetForegroundColor(C_LIFE_ICON))?;
    view.put(out, 1.0, 2.0, &"▬ ".repeat(session.lives as usize))?;

    let best = format!("Best: {}", state.best_score.max(session.score));
    out.queue(style::SetForegroundColor(C_HUD_BEST))?;
    view.put(
        out,
        (view.width - best.chars().count() as i32 - 1) as f32,
        0.0,
        &best,
    )?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, (state.height as u16).saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(CONTROLS))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_panel<W: Write>(
    out: &mut W,
    state: &GameState,
    lines: &[(&str, Color)],
) -> std::io::Result<()> {
    let cx = (state.width as u16) / 2;
    let start_row = (state.height as u16 / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}

fn draw_pause<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    draw_panel(
        out,
        state,
        &[
            ("╔══════════════════╗", Color::Cyan),
            ("║      PAUSED      ║", Color::Cyan),
            ("╚══════════════════╝", Color::Cyan),
            ("P - Resume  Q - Quit", Color::White),
        ],
    )
}

fn draw_game_over<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", state.session.score);
    let best_line = format!("Best Score: {}", state.best_score);
    draw_panel(
        out,
        state,
        &[
            ("╔══════════════════╗", Color::Red),
            ("║    GAME  OVER    ║", Color::Red),
            ("╚══════════════════╝", Color::Red),
            (score_line.as_str(), Color::Yellow),
            (best_line.as_str(), C_HUD_BEST),
            ("R - Play Again  Q - Quit", Color::White),
        ],
    )
}
