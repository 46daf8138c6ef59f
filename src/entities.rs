/// All game entity types — pure data, no logic.

use crate::config::GameConfig;

/// Visual/physics state of the player, replacing the original trio of
/// boolean flags (animating / shooting pose / flyover). `Landed` is
/// terminal: only an explicit reset leaves it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerPose {
    /// Falling or hovering; idle frame.
    Idle,
    /// Thrust dominates gravity; the looping flight animation runs.
    Rising,
    /// Locked on the shoot frame until thrust input or landing.
    Shooting,
    /// Resting on the floor. Suppresses rising motion and bullet firing.
    Landed,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A projectile with an implicit fixed rightward velocity.
#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Decays by 1 per tick, clamped at the configured floor. High thrust
    /// lifts the player; decayed thrust lets the gravity term win.
    pub thrust: f64,
    pub pose: PlayerPose,
    /// Current spritesheet frame (1-based; 1 = idle).
    pub frame: u32,
    /// Elapsed-clock reading at the last animation frame advance.
    pub last_frame_advance: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    /// Bullet hits taken so far.
    pub score: u32,
}

/// Static backdrop — no per-frame state; update and reset are no-ops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Background;

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state. The loop owns it by value; every component is
/// reached through here, so the actors need no back-references into the
/// bullet pool. Cloneable so pure update functions can return a new copy
/// without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct World {
    pub config: GameConfig,
    pub background: Background,
    /// In-flight bullets in insertion order. Bounded by `config.bullet_cap`:
    /// reaching the cap clears the whole pool before the next add.
    pub bullets: Vec<Bullet>,
    pub player: Player,
    pub enemy: Enemy,
}
