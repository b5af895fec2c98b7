mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;
use tracing_subscriber::EnvFilter;

use rug_raiders::audio::{play_cues, AudioSink, Muted, TerminalBell};
use rug_raiders::compute::{
    init_state, move_player_down, move_player_to, move_player_up, player_shoot, resize,
    restart_session, start_session, tick, toggle_pause,
};
use rug_raiders::config::GameConfig;
use rug_raiders::constants::LOG_FILE;
use rug_raiders::entities::{GameEvent, GameState};
use rug_raiders::session::{settle_best_score, FileHighScore, HighScoreStore, Phase};
use rug_raiders::spawner::{spawn_wave, SpawnClock};

#[derive(Parser)]
#[command(name = "rug_raiders")]
#[command(about = "Side-scrolling terminal shooter")]
struct Args {
    /// TOML file overriding gameplay defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the log (default: rug_raiders.log in the temp dir)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Disable the terminal bell
    #[arg(long)]
    mute: bool,
}

// ── Held-key input ────────────────────────────────────────────────────────────

/// Min frames between keyboard steps while Up/Down is held.
const MOVE_COOLDOWN: u32 = 3;

/// A key counts as held if its last press/repeat event arrived within this
/// many frames.  Covers terminals that never send key-release events.
const HOLD_WINDOW: u64 = 4;

fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal belongs to the game, so logs go to a file.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ── Menu ──────────────────────────────────────────────────────────────────────

enum MenuResult {
    Start,
    Quit,
}

fn is_quit(code: &KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn show_menu<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    best_score: u32,
) -> std::io::Result<MenuResult> {
    display::render_menu(out, best_score)?;

    // Block until the user makes a choice
    loop {
        match rx.recv() {
            Ok(Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            })) => match code {
                KeyCode::Enter | KeyCode::Char(' ') => return Ok(MenuResult::Start),
                _ if is_quit(&code, modifiers) => return Ok(MenuResult::Quit),
                _ => {}
            },
            Ok(Event::Resize(..)) => display::render_menu(out, best_score)?,
            Ok(_) => {}
            Err(_) => return Ok(MenuResult::Quit),
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

enum LoopExit {
    Quit,
    PlayAgain,
}

/// Run one session until the player quits or asks for a new one.
///
/// Input is drained without blocking every frame.  Up/Down and Space work
/// from a `key_frame` map of when each key was last seen, so moving and
/// firing can be held together.  The spawn clock is polled on this same
/// thread, so spawns never race a tick.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    config: &GameConfig,
    rx: &mpsc::Receiver<Event>,
    audio: &mut dyn AudioSink,
    store: &mut dyn HighScoreStore,
) -> std::io::Result<LoopExit> {
    let mut rng = thread_rng();
    let mut spawn_clock = SpawnClock::new(config.spawn_interval(), Instant::now());
    let frame_time = config.frame_duration();

    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut move_cooldown: u32 = 0;
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => match kind {
                    KeyEventKind::Press => {
                        if is_quit(&code, modifiers) {
                            return Ok(LoopExit::Quit);
                        }
                        match code {
                            KeyCode::Char('p') | KeyCode::Char('P') => {
                                *state = toggle_pause(state);
                            }
                            KeyCode::Char('r') | KeyCode::Char('R')
                                if state.session.phase == Phase::GameOver =>
                            {
                                return Ok(LoopExit::PlayAgain);
                            }
                            _ => {}
                        }
                        key_frame.insert(code, frame);
                    }
                    KeyEventKind::Repeat => {
                        key_frame.insert(code, frame);
                    }
                    KeyEventKind::Release => {
                        key_frame.remove(&code);
                    }
                },
                Event::Mouse(MouseEvent { kind, row, .. }) => match kind {
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                        *state = move_player_to(state, row as f32 + 0.5);
                    }
                    MouseEventKind::Down(MouseButton::Left) => {
                        *state = player_shoot(state, config);
                    }
                    _ => {}
                },
                Event::Resize(width, height) => {
                    *state = resize(state, width as f32, height as f32);
                }
                _ => {}
            }
        }

        // ── Held keys ─────────────────────────────────────────────────────────
        if state.session.is_running() {
            let up = any_held(
                &key_frame,
                &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')],
                frame,
            );
            let down = any_held(
                &key_frame,
                &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')],
                frame,
            );
            if move_cooldown == 0 {
                if up {
                    *state = move_player_up(state);
                    move_cooldown = MOVE_COOLDOWN;
                } else if down {
                    *state = move_player_down(state);
                    move_cooldown = MOVE_COOLDOWN;
                }
            }
            if is_held(&key_frame, &KeyCode::Char(' '), frame) {
                *state = player_shoot(state, config);
            }
        }
        move_cooldown = move_cooldown.saturating_sub(1);

        // ── Simulation ────────────────────────────────────────────────────────
        if spawn_clock.poll(Instant::now()) {
            *state = spawn_wave(state, config, &mut rng);
        }
        *state = tick(state, config);

        let events = std::mem::take(&mut state.events);
        play_cues(audio, &events);
        if let Some(GameEvent::GameOver { score }) = events
            .iter()
            .find(|e| matches!(e, GameEvent::GameOver { .. }))
        {
            state.best_score = match settle_best_score(store, *score) {
                Ok(best) => best,
                Err(e) => {
                    tracing::warn!("could not persist best score: {e}");
                    state.best_score.max(*score)
                }
            };
        }

        display::render(out, state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE));
    init_logging(&log_path)?;

    let config = GameConfig::load(args.config.as_deref()).context("loading game config")?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Ask for key-release events where the terminal supports them.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Blocking event reads live on their own thread so the frame loop never
    // waits on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &rx, &config, args.mute);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &GameConfig,
    mute: bool,
) -> Result<()> {
    let mut store = FileHighScore::new(config.high_score_file());
    let mut audio: Box<dyn AudioSink> = if mute {
        Box::new(Muted)
    } else {
        Box::new(TerminalBell::new(stdout()))
    };

    let best_score = store.load().unwrap_or_else(|e| {
        tracing::warn!("could not read best score: {e}");
        0
    });
    if let MenuResult::Quit = show_menu(out, rx, best_score)? {
        return Ok(());
    }

    let (width, height) = terminal::size()?;
    let mut state = start_session(&init_state(config, width as f32, height as f32, best_score));
    loop {
        match game_loop(out, &mut state, config, rx, audio.as_mut(), &mut store)? {
            LoopExit::Quit => {
                tracing::info!(score = state.session.score, "quit");
                break;
            }
            LoopExit::PlayAgain => state = restart_session(&state, config),
        }
    }
    Ok(())
}
