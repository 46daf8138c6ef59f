/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.  Simulation coordinates (a 640×600
/// world) are scaled to the current terminal size; anything that lands
/// outside the playfield is clipped, never wrapped.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use ironfly::entities::{PlayerPose, World};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_GROUND: Color = Color::DarkGrey;
const C_STAR: Color = Color::DarkGrey;
const C_HUD: Color = Color::Yellow;
const C_PLAYER: Color = Color::Red;
const C_FLAME: Color = Color::Yellow;
const C_ENEMY: Color = Color::Green;
const C_BULLET: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

/// Fixed star positions in world coordinates (static backdrop).
const STARS: &[(f32, f32)] = &[
    (60.0, 80.0),
    (150.0, 40.0),
    (240.0, 130.0),
    (330.0, 60.0),
    (430.0, 110.0),
    (520.0, 50.0),
    (600.0, 150.0),
    (110.0, 210.0),
    (470.0, 230.0),
];

// ── Coordinate scaling ────────────────────────────────────────────────────────

struct Viewport {
    cols: u16,
    rows: u16,
    world_w: f32,
    world_h: f32,
}

impl Viewport {
    fn new(state: &World) -> std::io::Result<Viewport> {
        let (cols, rows) = terminal::size()?;
        Ok(Viewport {
            cols,
            rows,
            world_w: state.config.width,
            world_h: state.config.height,
        })
    }

    /// Map a world position onto the bordered playfield (columns
    /// 1..cols-2, rows 2..rows-3), or None when it lies outside the world
    /// — off-screen actors are simply not drawn.
    fn cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        let in_world = x.is_finite()
            && y.is_finite()
            && (0.0..self.world_w).contains(&x)
            && (0.0..self.world_h).contains(&y);
        if !in_world {
            return None;
        }
        let play_cols = f32::from(self.cols.saturating_sub(2));
        let play_rows = f32::from(self.rows.saturating_sub(5));
        if play_cols < 1.0 || play_rows < 1.0 {
            return None;
        }
        let col = 1 + (x / self.world_w * play_cols) as u16;
        let row = 2 + (y / self.world_h * play_rows) as u16;
        Some((col, row))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame in the fixed order background → player →
/// bullets → enemy, then the HUD.
pub fn render<W: Write>(out: &mut W, state: &World) -> std::io::Result<()> {
    let vp = Viewport::new(state)?;

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_background(out, state, &vp)?;
    draw_player(out, state, &vp)?;
    draw_bullets(out, state, &vp)?;
    draw_enemy(out, state, &vp)?;
    draw_hud(out, state, &vp)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, vp.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Background ────────────────────────────────────────────────────────────────

fn draw_background<W: Write>(out: &mut W, state: &World, vp: &Viewport) -> std::io::Result<()> {
    let w = vp.cols as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;
    out.queue(cursor::MoveTo(0, vp.rows.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;
    for row in 2..vp.rows.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(vp.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    out.queue(style::SetForegroundColor(C_STAR))?;
    for &(x, y) in STARS {
        if x >= state.config.width || y >= state.config.height {
            continue;
        }
        if let Some((col, row)) = vp.cell(x, y) {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print("·"))?;
        }
    }

    // Ground line: the landing floor sits at the bottom of the world, which
    // maps to the last playfield row.
    if vp.rows >= 6 {
        out.queue(style::SetForegroundColor(C_GROUND))?;
        let row = vp.rows.saturating_sub(3);
        for col in 1..vp.cols.saturating_sub(1) {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print("▔"))?;
        }
    }

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, state: &World, vp: &Viewport) -> std::io::Result<()> {
    let p = &state.player;
    let Some((col, row)) = vp.cell(p.x, p.y) else {
        return Ok(());
    };

    // Two-row sprite; the lower row carries the frame-dependent exhaust
    // (flight frames 2..=6) or the extended arm (shoot frame).
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(cursor::MoveTo(col, row))?;
    match p.pose {
        PlayerPose::Shooting => {
            out.queue(Print("[◉]═▶"))?;
        }
        _ => {
            out.queue(Print("[◉]"))?;
        }
    }

    if row + 1 < vp.rows.saturating_sub(2) {
        out.queue(cursor::MoveTo(col, row + 1))?;
        match p.pose {
            PlayerPose::Rising => {
                // Exhaust intensity cycles with the animation frame
                let flames = ["╵ ╵", "╹ ╹", "║ ║", "█ █", "╹ ╹"];
                let idx = p
                    .frame
                    .saturating_sub(state.config.anim_start_frame)
                    .min(flames.len() as u32 - 1) as usize;
                out.queue(style::SetForegroundColor(C_FLAME))?;
                out.queue(Print(flames[idx]))?;
            }
            PlayerPose::Landed => {
                out.queue(Print("╨ ╨"))?;
            }
            _ => {
                out.queue(Print("╿ ╿"))?;
            }
        }
    }

    Ok(())
}

fn draw_bullets<W: Write>(out: &mut W, state: &World, vp: &Viewport) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_BULLET))?;
    for b in &state.bullets {
        if let Some((col, row)) = vp.cell(b.x, b.y) {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print("•"))?;
        }
    }
    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, state: &World, vp: &Viewport) -> std::io::Result<()> {
    let e = &state.enemy;
    // The enemy spawns off-screen right and drifts into view; clip until
    // its box intersects the world.
    let Some((col, row)) = vp.cell(e.x, e.y) else {
        return Ok(());
    };

    out.queue(style::SetForegroundColor(C_ENEMY))?;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print("◄■►"))?;
    if row + 1 < vp.rows.saturating_sub(2) {
        out.queue(cursor::MoveTo(col, row + 1))?;
        out.queue(Print("╚═╝"))?;
    }
    Ok(())
}

// ── HUD (row 0) and controls hint (last row) ──────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &World, vp: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!("Hits:{:>4}", state.enemy.score)))?;

    let thrust_str = format!("Thrust:{:>5.0}", state.player.thrust);
    let rx = vp.cols.saturating_sub(thrust_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(Print(&thrust_str))?;

    out.queue(cursor::MoveTo(1, vp.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("→ : Shoot   ↑ : Thrust   R : Reset   Q : Quit"))?;
    Ok(())
}
