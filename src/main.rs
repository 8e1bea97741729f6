mod audio;
mod build_info;
mod config;
mod constants;
mod game;
mod input;
mod ui;

use audio::Speaker;
use config::GameConfig;
use constants::{MENU_POLL_MS, PLAY_TICK_MS};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use game::{GameSession, TickEvent};
use input::{GameOverInput, PlayInput, StartInput};
use rand::rngs::ThreadRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// The screen-level state machine. The live session is owned by the
/// `Playing` variant and dropped on game over; replay builds a new one.
enum Screen {
    Start,
    Playing(GameSession),
    GameOver { final_score: i64 },
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<PathBuf> = None;
    let mut index = 1;
    while index < args.len() {
        match args[index].as_str() {
            "--version" | "-v" => {
                println!(
                    "flap {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                return Ok(());
            }
            "--help" | "-h" => {
                println!("flap - Terminal Flappy Bird\n");
                println!("Usage: flap [options]\n");
                println!("Options:");
                println!("  --config PATH  Load tuning values from PATH");
                println!("                 (default: ~/.flap/config.json if present)");
                println!("  --version      Show version information");
                println!("  --help         Show this help message");
                return Ok(());
            }
            "--config" => {
                index += 1;
                match args.get(index) {
                    Some(path) => config_path = Some(PathBuf::from(path)),
                    None => {
                        eprintln!("flap: --config requires a path");
                        std::process::exit(1);
                    }
                }
            }
            other => {
                eprintln!("flap: unknown option: {}", other);
                eprintln!("Run 'flap --help' for usage.");
                std::process::exit(1);
            }
        }
        index += 1;
    }

    // Config problems are fatal before the terminal enters raw mode, so
    // the message lands on a usable screen.
    let config = match GameConfig::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("flap: {}", error);
            std::process::exit(1);
        }
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config);

    // Always restore the terminal, even when run() failed. Each step is
    // best-effort so one failure cannot skip the rest of the teardown.
    let _ = disable_raw_mode();
    let _ = terminal.backend_mut().execute(DisableMouseCapture);
    let _ = terminal.backend_mut().execute(LeaveAlternateScreen);

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &GameConfig,
) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut speaker = Speaker::new(config.sound);
    let mut screen = Screen::Start;

    loop {
        screen = match screen {
            Screen::Start => match start_screen(terminal)? {
                Some(StartInput::Launch) => {
                    let mut session = GameSession::new(config, &mut rng, false);
                    // The launch press doubles as the first flap.
                    session.queue_flap();
                    Screen::Playing(session)
                }
                Some(StartInput::Quit) => return Ok(()),
                _ => Screen::Start,
            },
            Screen::Playing(session) => {
                match play_screen(terminal, session, &mut rng, &mut speaker)? {
                    Some(final_score) => Screen::GameOver { final_score },
                    None => return Ok(()),
                }
            }
            Screen::GameOver { final_score } => {
                match game_over_screen(terminal, final_score)? {
                    Some(GameOverInput::Replay) => {
                        // Replay runs use the slower gravity constant.
                        Screen::Playing(GameSession::new(config, &mut rng, true))
                    }
                    Some(GameOverInput::Quit) => return Ok(()),
                    _ => Screen::GameOver { final_score },
                }
            }
        };
    }
}

/// One modal poll of the start screen. `None` means nothing decided yet.
fn start_screen(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> io::Result<Option<StartInput>> {
    terminal.draw(|frame| ui::start_scene::render_start(frame, frame.size()))?;
    if event::poll(Duration::from_millis(MENU_POLL_MS))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                let mapped = input::map_start_input(key);
                if mapped != StartInput::Ignored {
                    return Ok(Some(mapped));
                }
            }
        }
    }
    Ok(None)
}

/// The fixed-rate play loop. Returns the final score on collision, or
/// `None` when the player quit mid-run.
fn play_screen(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut session: GameSession,
    rng: &mut ThreadRng,
    speaker: &mut Speaker,
) -> io::Result<Option<i64>> {
    let tick_interval = Duration::from_millis(PLAY_TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::play_scene::render_play(frame, frame.size(), &session))?;

        // Sleep only until the next tick boundary; input arriving earlier
        // is buffered into the session immediately.
        let timeout = tick_interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match input::map_play_input(key) {
                        PlayInput::Flap => session.queue_flap(),
                        PlayInput::Quit => return Ok(None),
                        PlayInput::Ignored => {}
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_interval {
            for event in session.step(rng) {
                match event {
                    TickEvent::Sound(cue) => speaker.play(cue),
                    // The notice overlay already announces the level.
                    TickEvent::LevelUp(_) => {}
                }
            }
            last_tick = Instant::now();

            if !session.active {
                return Ok(Some(session.score as i64));
            }
        }
    }
}

/// One modal poll of the game-over screen. Mouse clicks on the replay
/// button count as replay; everything unrecognized is dropped.
fn game_over_screen(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    final_score: i64,
) -> io::Result<Option<GameOverInput>> {
    terminal
        .draw(|frame| ui::game_over_scene::render_game_over(frame, frame.size(), final_score))?;
    if event::poll(Duration::from_millis(MENU_POLL_MS))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let mapped = input::map_game_over_input(key);
                if mapped != GameOverInput::Ignored {
                    return Ok(Some(mapped));
                }
            }
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    let area = terminal.size()?;
                    if ui::game_over_scene::hits_replay_button(area, mouse.column, mouse.row) {
                        return Ok(Some(GameOverInput::Replay));
                    }
                }
            }
            _ => {}
        }
    }
    Ok(None)
}
