mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
    ExecutableCommand,
};
use rand::thread_rng;

use ironfly::compute::{add_thrust, init_world, reset_world, shoot, tick};
use ironfly::config::GameConfig;

/// Frame cadence: 5 ms per iteration ≈ 200 FPS.
const FRAME: Duration = Duration::from_millis(5);

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Each iteration: advance the simulation, render, then drain all pending
/// input events.  Input is dispatched after update and render, so a shot
/// fired this iteration is first checked for collision on the next one.
fn game_loop<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut state = init_world(GameConfig::default(), &mut rng);

    // Elapsed clock feeding the player's integrator and animation throttle.
    // Restarted on reset, never anywhere else.
    let mut clock = Instant::now();

    loop {
        let frame_start = Instant::now();

        state = tick(&state, &mut rng, clock.elapsed().as_secs_f64());

        display::render(out, &state)?;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            if kind != KeyEventKind::Press {
                continue;
            }
            match code {
                KeyCode::Right => state = shoot(&state),
                KeyCode::Up => state = add_thrust(&state),
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    state = reset_world(&state, &mut rng);
                    clock = Instant::now();
                    log::info!("game reset");
                }
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(());
                }
                _ => {}
            }
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    env_logger::init();
    log::info!("ironfly starting");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    log::info!("ironfly exiting");
    result
}
