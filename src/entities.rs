//! All game entity types and the per-frame motion each one owns.
//!
//! Positions and sizes are in world units (terminal cells). `advance` only
//! ever touches the entity itself; anything involving two entities lives in
//! `collision`.

use crate::session::Session;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle, `x`/`y` being the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

// ── Kinds & cues ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    Spacecraft,
    Octopus,
}

impl EnemyKind {
    /// Sprite pool the spawner draws from.
    pub const ALL: [EnemyKind; 2] = [EnemyKind::Spacecraft, EnemyKind::Octopus];

    /// The destruction sound bound to this sprite.
    pub fn sound(self) -> Sound {
        match self {
            EnemyKind::Spacecraft => Sound::SpacecraftBlast,
            EnemyKind::Octopus => Sound::OctopusSplat,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sound {
    SpacecraftBlast,
    OctopusSplat,
    Shot,
}

/// Taunts an enemy shouts while it enters the screen.
pub const TAUNTS: [&str; 5] = [
    "I'm gonna rob you!",
    "I'm gonna RUG you!",
    "Give up!",
    "Your wallet is mine!",
    "It's just a meme coin!",
];

/// Things that happened during a tick, for the shell to react to.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    Sound(Sound),
    LifeLost,
    LifeGained,
    EnemyDestroyed { kind: EnemyKind },
    GameOver { score: u32 },
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Rows per keyboard step.
    pub speed: f32,
    /// Frames until the next shot is allowed.
    pub shoot_cooldown: u32,
}

impl Player {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Leftward cells per frame.
    pub speed: f32,
    pub health: f32,
    /// Health at spawn time, used to scale the health bar.
    pub max_health: f32,
    pub kind: EnemyKind,
    pub taunt: &'static str,
    /// Frames the taunt is still shown.
    pub taunt_timer: u32,
}

impl Enemy {
    pub fn advance(&mut self) {
        self.x -= self.speed;
        self.taunt_timer = self.taunt_timer.saturating_sub(1);
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn sound(&self) -> Sound {
        self.kind.sound()
    }

    /// Fraction of health left, clamped to `0.0..=1.0`.
    pub fn health_fraction(&self) -> f32 {
        (self.health / self.max_health).clamp(0.0, 1.0)
    }
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Rightward cells per frame.
    pub speed: f32,
    pub damage: f32,
}

impl Bullet {
    pub fn advance(&mut self) {
        self.x += self.speed;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Explosion ─────────────────────────────────────────────────────────────────

/// A sprite-sheet animation. `frame` stays below `total_frames` until
/// `finished` flips.
#[derive(Clone, Debug, PartialEq)]
pub struct Explosion {
    pub x: f32,
    pub y: f32,
    pub frame: u32,
    pub total_frames: u32,
    /// Ticks each frame stays on screen.
    pub frame_delay: u32,
    pub delay_counter: u32,
    pub finished: bool,
}

impl Explosion {
    pub fn new(x: f32, y: f32, total_frames: u32, frame_delay: u32) -> Self {
        Explosion {
            x,
            y,
            frame: 0,
            total_frames,
            frame_delay,
            delay_counter: 0,
            finished: false,
        }
    }

    pub fn advance(&mut self) {
        if self.finished {
            return;
        }
        self.delay_counter += 1;
        if self.delay_counter >= self.frame_delay {
            self.delay_counter = 0;
            self.frame += 1;
            if self.frame >= self.total_frames {
                self.finished = true;
            }
        }
    }

    /// The sprite-sheet frame to draw, or `None` once the animation is over.
    pub fn visible_frame(&self) -> Option<u32> {
        if self.finished {
            None
        } else {
            Some(self.frame)
        }
    }
}

// ── Extra-life pickup ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct ExtraLife {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl ExtraLife {
    pub fn advance(&mut self) {
        self.x -= self.speed;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything one session owns. Cloneable so the update functions in
/// `compute` can return a new copy instead of mutating their input.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub explosions: Vec<Explosion>,
    pub extra_lives: Vec<ExtraLife>,
    pub session: Session,
    /// Persisted best score, shown in the HUD and the end panel.
    pub best_score: u32,
    /// Score value that last produced a pickup, so each qualifying score
    /// yields one pickup at most.
    pub last_pickup_score: Option<u32>,
    /// Events produced by the most recent update.
    pub events: Vec<GameEvent>,
    pub frame: u64,
    pub width: f32,
    pub height: f32,
}
