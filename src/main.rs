mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal,
    ExecutableCommand,
};
use rand::thread_rng;

use ghost_hop::compute::{advance, init_world};
use ghost_hop::framebuffer::FrameBuffer;
use ghost_hop::input::{sample_intent, RawSample};
use ghost_hop::render::{render, SpriteStyle};
use ghost_hop::store::FileEeprom;

const FRAME: Duration = Duration::from_millis(33); // ≈30 ticks/sec

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 4 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 4;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

// ── Persistent store ──────────────────────────────────────────────────────────

fn eeprom_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".ghost_hop_eeprom")
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// One tick = sample held keys → advance the simulation → paint the
/// framebuffer → flush to the terminal.  The monotonic millisecond clock is
/// read once per tick and handed to the simulation; restart after a loss is
/// the jump intent, handled inside `advance`.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    style: SpriteStyle,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut store = FileEeprom::open(eeprom_path())?;
    let start = Instant::now();
    let mut world = init_world(0, &mut rng, &store);
    let mut fb = FrameBuffer::new();

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code.clone(), frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(());
                        }
                        KeyCode::Char('c')
                            if modifiers.contains(KeyModifiers::CONTROL) =>
                        {
                            return Ok(());
                        }
                        _ => {}
                    }
                }
                // Repeat: refresh timestamp so key stays "held"
                KeyEventKind::Repeat => {
                    key_frame.insert(code.clone(), frame);
                }
                // Release: remove key immediately (keyboard-enhancement path)
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // ── Normalize held keys into this tick's intent ───────────────────────
        let left = is_held(&key_frame, &KeyCode::Left, frame)
            || is_held(&key_frame, &KeyCode::Char('a'), frame)
            || is_held(&key_frame, &KeyCode::Char('A'), frame);
        let right = is_held(&key_frame, &KeyCode::Right, frame)
            || is_held(&key_frame, &KeyCode::Char('d'), frame)
            || is_held(&key_frame, &KeyCode::Char('D'), frame);
        let up = is_held(&key_frame, &KeyCode::Up, frame)
            || is_held(&key_frame, &KeyCode::Char('w'), frame)
            || is_held(&key_frame, &KeyCode::Char('W'), frame)
            || is_held(&key_frame, &KeyCode::Char(' '), frame);
        let intent = sample_intent(RawSample::Digital { left, right, up });

        let now = start.elapsed().as_millis() as u64;
        advance(&mut world, intent, now, &mut rng, &mut store);

        render(&world, style, &mut fb);
        display::present(out, &fb)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_display<W: Write>(out: &mut W) -> std::io::Result<()> {
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    Ok(())
}

fn main() -> std::io::Result<()> {
    let style = if std::env::args().any(|a| a == "--bitmap") {
        SpriteStyle::Bitmap
    } else {
        SpriteStyle::Procedural
    };

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    if let Err(err) = init_display(&mut out) {
        // The screen never came up: signal once out-of-band, then stay alive
        // as a no-op loop.  No retry, no crash.
        eprintln!("ghost_hop: display init failed ({err}); going dark");
        loop {
            thread::sleep(FRAME);
        }
    }

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped → program exiting
                    }
                }
                Err(_) => break,
            }
        }
    });

    let result = game_loop(&mut out, &rx, style);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
