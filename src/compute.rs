/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `World` (and, where needed, an RNG handle or the elapsed-clock reading)
/// and returns a brand-new `World`.  Side effects are limited to the
/// injected RNG and log output.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Background, Bullet, Enemy, Player, PlayerPose, World};

// ── Constructors ─────────────────────────────────────────────────────────────

fn init_player(config: &GameConfig) -> Player {
    Player {
        x: 0.0,
        y: 0.0,
        thrust: config.thrust_initial,
        pose: PlayerPose::Idle,
        frame: 1,
        last_frame_advance: 0.0,
    }
}

/// Build the initial game state for a given configuration.  The enemy is
/// placed immediately, so construction already consumes randomness.
pub fn init_world(config: GameConfig, rng: &mut impl Rng) -> World {
    let player = init_player(&config);
    let enemy = place_enemy(&Enemy { x: 0.0, y: 0.0, score: 0 }, &config, rng);
    World {
        config,
        background: Background,
        bullets: Vec::new(),
        player,
        enemy,
    }
}

// ── Bullet pool ──────────────────────────────────────────────────────────────

/// Append a bullet at (x, y).  A full pool is cleared first, so the count
/// never exceeds the cap immediately after an add — a deliberate
/// whole-pool memory bound rather than per-element eviction.
pub fn add_bullet(state: &World, x: f32, y: f32) -> World {
    let mut bullets = state.bullets.clone();
    if bullets.len() >= state.config.bullet_cap {
        bullets.clear();
    }
    bullets.push(Bullet { x, y });
    World {
        bullets,
        ..state.clone()
    }
}

/// Advance every bullet by the fixed step; bullets past the right margin
/// leave play and are dropped.
pub fn update_bullets(state: &World) -> World {
    let limit = state.config.width + state.config.bullet_margin;
    let bullets: Vec<Bullet> = state
        .bullets
        .iter()
        .filter_map(|b| {
            let new_x = b.x + state.config.bullet_step;
            if new_x >= limit {
                None
            } else {
                Some(Bullet { x: new_x, ..b.clone() })
            }
        })
        .collect();
    World {
        bullets,
        ..state.clone()
    }
}

// ── Enemy ────────────────────────────────────────────────────────────────────

/// Relocate the enemy off-screen right at a fresh random height inside the
/// patrol band.  The score travels along.
pub fn place_enemy(enemy: &Enemy, config: &GameConfig, rng: &mut impl Rng) -> Enemy {
    let y = rng.gen_range(config.enemy_band_top..=config.height - config.enemy_band_bottom);
    Enemy {
        x: config.width + config.enemy_spawn_margin,
        y,
        score: enemy.score,
    }
}

/// One enemy tick: scan bullets in insertion order for the first overlap
/// with the enemy's square bounding box (at most one hit per tick); on a
/// hit, score and relocate.  Otherwise relocate past the left boundary or
/// drift slowly left.
pub fn update_enemy(state: &World, rng: &mut impl Rng) -> World {
    let config = &state.config;
    let e = &state.enemy;

    for b in &state.bullets {
        let hit = b.x >= e.x
            && b.x <= e.x + config.enemy_box
            && b.y >= e.y
            && b.y <= e.y + config.enemy_box;
        if hit {
            let scored = Enemy {
                score: e.score + 1,
                ..e.clone()
            };
            log::debug!("enemy hit at ({:.0}, {:.0}) — score {}", e.x, e.y, scored.score);
            return World {
                enemy: place_enemy(&scored, config, rng),
                ..state.clone()
            };
        }
    }

    let enemy = if e.x < 0.0 {
        place_enemy(e, config, rng)
    } else {
        Enemy {
            x: e.x - config.enemy_drift,
            ..e.clone()
        }
    };
    World {
        enemy,
        ..state.clone()
    }
}

// ── Player ───────────────────────────────────────────────────────────────────

/// Fire a bullet from the muzzle offset and lock the shoot pose.  Landed
/// players fire nothing: `Landed` is a one-way latch until reset.
pub fn shoot(state: &World) -> World {
    let p = &state.player;
    if p.pose == PlayerPose::Landed {
        return state.clone();
    }
    let (dx, dy) = state.config.muzzle_offset;
    let state = add_bullet(state, p.x + dx, p.y + dy);
    World {
        player: Player {
            pose: PlayerPose::Shooting,
            ..state.player.clone()
        },
        ..state
    }
}

/// Add one burst of thrust.  Thrust input cancels the shoot pose; the
/// reclassification into Rising or Idle happens on the next update.
pub fn add_thrust(state: &World) -> World {
    let p = &state.player;
    let pose = if p.pose == PlayerPose::Shooting {
        PlayerPose::Idle
    } else {
        p.pose
    };
    World {
        player: Player {
            thrust: p.thrust + state.config.thrust_boost,
            pose,
            ..p.clone()
        },
        ..state.clone()
    }
}

/// One player tick.  `elapsed` is the seconds since the last reset, owned
/// by the loop; the animation throttle keys off it rather than the tick
/// rate, so animation speed is independent of the frame cadence.
pub fn update_player(state: &World, elapsed: f64) -> World {
    let config = &state.config;
    let p = &state.player;

    // 1. Thrust decay, clamped at the floor.
    let thrust = (p.thrust - 1.0).max(config.thrust_floor);

    // 2. Frame selection from the current pose.
    let mut frame = p.frame;
    let mut last_frame_advance = p.last_frame_advance;
    match p.pose {
        PlayerPose::Shooting => frame = config.shoot_frame,
        PlayerPose::Rising => {
            if elapsed - last_frame_advance >= config.anim_interval {
                last_frame_advance = elapsed;
                frame = if frame >= config.anim_start_frame && frame < config.anim_end_frame {
                    frame + 1
                } else {
                    config.anim_start_frame
                };
            }
        }
        PlayerPose::Idle | PlayerPose::Landed => frame = 1,
    }

    // 3. Vertical motion.  On the floor: clamp and latch Landed.  Airborne:
    //    integrate the gravity/thrust displacement; a negative displacement
    //    means thrust is winning and the flight animation should run.  The
    //    shoot pose is sticky until thrust input or landing.
    let floor = config.floor_y();
    let (y, pose) = if p.y >= floor {
        frame = 1;
        (floor, PlayerPose::Landed)
    } else {
        let dy = (config.gravity * 0.1 * elapsed * 0.1 * 0.5 - thrust * 0.001) as f32;
        let pose = match p.pose {
            PlayerPose::Shooting => PlayerPose::Shooting,
            _ if dy < 0.0 => PlayerPose::Rising,
            _ => PlayerPose::Idle,
        };
        (p.y + dy, pose)
    };

    World {
        player: Player {
            y,
            thrust,
            pose,
            frame,
            last_frame_advance,
            ..p.clone()
        },
        ..state.clone()
    }
}

// ── Per-frame tick & reset ───────────────────────────────────────────────────

/// Advance the simulation by one frame in the fixed component order:
/// background (a no-op), bullets, player, enemy.  A bullet appended by
/// `shoot` during the event drain is first seen by the enemy's collision
/// check on the next tick.
pub fn tick(state: &World, rng: &mut impl Rng, elapsed: f64) -> World {
    let state = update_bullets(state);
    let state = update_player(&state, elapsed);
    update_enemy(&state, rng)
}

/// Return every component to its post-construction state, in the fixed
/// order background, bullets, player, enemy.  The caller restarts the
/// elapsed clock alongside.
pub fn reset_world(state: &World, rng: &mut impl Rng) -> World {
    let config = state.config.clone();
    let player = init_player(&config);
    let enemy = place_enemy(
        &Enemy {
            score: 0,
            ..state.enemy.clone()
        },
        &config,
        rng,
    );
    World {
        config,
        background: Background,
        bullets: Vec::new(),
        player,
        enemy,
    }
}
