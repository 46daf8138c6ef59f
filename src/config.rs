/// All game tunables in one immutable value.
///
/// The configuration is handed to `init_world` once and stored inside the
/// `World`; nothing mutates it afterwards. Coordinates are in simulation
/// units (a 640×600 world), not terminal cells — the display layer scales.

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// World width in simulation units.
    pub width: f32,
    /// World height in simulation units.
    pub height: f32,
    /// Gravity constant feeding the vertical-displacement formula.
    pub gravity: f64,

    // ── Bullets ──────────────────────────────────────────────────────────
    /// Horizontal advance per tick.
    pub bullet_step: f32,
    /// Pool capacity; reaching it clears the whole pool before the next add.
    pub bullet_cap: usize,
    /// Bullets past `width + bullet_margin` are dropped during the advance.
    pub bullet_margin: f32,

    // ── Enemy ────────────────────────────────────────────────────────────
    /// Side length of the enemy's square bounding box.
    pub enemy_box: f32,
    /// Leftward drift per tick while patrolling.
    pub enemy_drift: f32,
    /// Horizontal overshoot when (re)placed off-screen right.
    pub enemy_spawn_margin: f32,
    /// Vertical band for random placement: [band_top, height - band_bottom].
    pub enemy_band_top: f32,
    pub enemy_band_bottom: f32,

    // ── Player ───────────────────────────────────────────────────────────
    /// Thrust after a reset.
    pub thrust_initial: f64,
    /// Thrust added per Up press.
    pub thrust_boost: f64,
    /// Lower clamp for the decaying thrust.
    pub thrust_floor: f64,
    /// Sprite frame height; the floor sits at `height - frame_size + 14`.
    pub frame_size: f32,
    /// Bullet spawn offset from the player position.
    pub muzzle_offset: (f32, f32),
    /// Looping animation cycle bounds and the dedicated shoot frame.
    pub anim_start_frame: u32,
    pub anim_end_frame: u32,
    pub shoot_frame: u32,
    /// Min elapsed seconds between animation frame advances. Deliberately
    /// decoupled from the tick rate.
    pub anim_interval: f64,
}

impl GameConfig {
    /// Row the player rests on once landed.
    pub fn floor_y(&self) -> f32 {
        self.height - self.frame_size + 14.0
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 640.0,
            height: 600.0,
            gravity: 9.8,

            bullet_step: 6.0,
            bullet_cap: 100,
            bullet_margin: 60.0,

            enemy_box: 64.0,
            enemy_drift: 0.1,
            enemy_spawn_margin: 70.0,
            enemy_band_top: 40.0,
            enemy_band_bottom: 200.0,

            thrust_initial: 100.0,
            thrust_boost: 600.0,
            thrust_floor: -600.0,
            frame_size: 128.0,
            muzzle_offset: (128.0, 30.0),
            anim_start_frame: 2,
            anim_end_frame: 6,
            shoot_frame: 7,
            anim_interval: 0.001,
        }
    }
}
