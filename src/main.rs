use clap::Parser;
use crossterm::cursor::Show;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use snake_arcade::core::constants::{MENU_POLL_MS, SPLASH_DURATION_MS};
use snake_arcade::input::{map_menu_key, read_key, MenuInput, TerminalInput};
use snake_arcade::menu::{
    level_from_index, MainMenuChoice, MenuAction, MenuState, LEVEL_MENU_ITEMS, MAIN_MENU_ITEMS,
};
use snake_arcade::scores::BestScores;
use snake_arcade::snake::{FailurePolicy, SpeedCurve};
use snake_arcade::ui::menu_scene::{render_best_scores, render_menu, render_splash, render_tutorial};
use snake_arcade::ui::snake_scene::ensure_grid_fits;
use snake_arcade::ui::TerminalSink;
use snake_arcade::utils::{logging, version_line};
use snake_arcade::{run_session, Difficulty, EndReason, GameConfig, GameError, Settings};

#[derive(Parser, Debug)]
#[command(
    name = "snake",
    about = "Snake - grid snake game for the terminal",
    disable_version_flag = true
)]
struct Cli {
    /// Preselected difficulty: easy, medium, hard
    #[arg(long, value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,

    /// Failure handling: instant or lives
    #[arg(long, value_parser = parse_mode)]
    mode: Option<FailurePolicy>,

    /// Speed curve: ratchet or recompute
    #[arg(long, value_parser = parse_speed)]
    speed: Option<SpeedCurve>,

    /// Lives at session start (lives mode)
    #[arg(long)]
    lives: Option<u32>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<i16>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<i16>,

    /// Seed for food and obstacle placement
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the splash screen
    #[arg(long)]
    skip_splash: bool,

    /// Write the effective preferences to ~/.snake/settings.json
    #[arg(long)]
    save_settings: bool,

    /// Show version information
    #[arg(short = 'v', long)]
    version: bool,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::parse(s).ok_or_else(|| format!("unknown difficulty '{}'", s))
}

fn parse_mode(s: &str) -> Result<FailurePolicy, String> {
    FailurePolicy::parse(s).ok_or_else(|| format!("unknown mode '{}' (instant, lives)", s))
}

fn parse_speed(s: &str) -> Result<SpeedCurve, String> {
    SpeedCurve::parse(s).ok_or_else(|| format!("unknown speed curve '{}' (ratchet, recompute)", s))
}

impl Cli {
    /// Overlay command-line choices on the stored preferences.
    fn apply(&self, settings: &mut Settings) {
        if let Some(difficulty) = self.difficulty {
            settings.difficulty = difficulty;
        }
        if let Some(mode) = self.mode {
            settings.failure_policy = mode;
        }
        if let Some(speed) = self.speed {
            settings.speed_curve = speed;
        }
        if let Some(lives) = self.lives {
            settings.starting_lives = lives;
        }
        if self.skip_splash {
            settings.skip_splash = true;
        }
    }

    fn config(&self, settings: &Settings) -> GameConfig {
        let mut config = settings.to_config();
        if let Some(width) = self.width {
            config.grid.width = width;
        }
        if let Some(height) = self.height {
            config.grid.height = height;
        }
        config
    }
}

enum Screen {
    MainMenu,
    LevelMenu,
    BestScores,
    Tutorial,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", version_line());
        return ExitCode::SUCCESS;
    }

    let log_path = logging::init();
    log::info!("Starting {}", version_line());

    let mut settings = Settings::load();
    cli.apply(&mut settings);

    if cli.save_settings {
        if let Err(e) = settings.save() {
            eprintln!("snake: could not save settings: {}", e);
            return ExitCode::FAILURE;
        }
        println!("Settings saved.");
    }

    let config = cli.config(&settings);
    if let Err(e) = config.validate() {
        eprintln!("snake: {}", e);
        return ExitCode::from(2);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match run(&config, settings.skip_splash, &mut rng) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Exiting on error: {}", e);
            eprintln!("snake: {}", e);
            if let Some(path) = log_path {
                eprintln!("See {} for details.", path.display());
            }
            ExitCode::FAILURE
        }
    }
}

/// Set up the terminal, run the menus, and always restore the terminal.
///
/// Teardown runs on every path once raw mode is on. The first error wins.
fn run(config: &GameConfig, skip_splash: bool, rng: &mut StdRng) -> snake_arcade::Result<()> {
    enable_raw_mode()?;
    let result = enter_and_run(config, skip_splash, rng);
    first_error(result, restore_terminal())
}

fn enter_and_run(
    config: &GameConfig,
    skip_splash: bool,
    rng: &mut StdRng,
) -> snake_arcade::Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    run_app(&mut terminal, config, skip_splash, rng)
}

/// Leave raw mode and the alternate screen, then show the cursor. Every step
/// is attempted even if an earlier one fails.
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let mut stdout = io::stdout();
    let screen = stdout.execute(LeaveAlternateScreen).map(|_| ());
    let cursor = stdout.execute(Show).map(|_| ());
    all_steps([raw, screen, cursor])
}

fn all_steps<const N: usize>(steps: [io::Result<()>; N]) -> io::Result<()> {
    steps.into_iter().collect()
}

fn first_error(
    result: snake_arcade::Result<()>,
    teardown: io::Result<()>,
) -> snake_arcade::Result<()> {
    result.and(teardown.map_err(GameError::from))
}

fn show_splash<B: Backend>(terminal: &mut Terminal<B>) -> io::Result<()> {
    let version = version_line();
    terminal.draw(|frame| render_splash(frame, frame.size(), &version))?;

    let deadline = Instant::now() + Duration::from_millis(SPLASH_DURATION_MS);
    while let Some(left) = deadline.checked_duration_since(Instant::now()) {
        if left.is_zero() || read_key(left)?.is_some() {
            break;
        }
    }
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    config: &GameConfig,
    skip_splash: bool,
    rng: &mut StdRng,
) -> snake_arcade::Result<()> {
    if !skip_splash {
        show_splash(terminal)?;
    }

    let mut screen = Screen::MainMenu;
    let mut main_menu = MenuState::new(MAIN_MENU_ITEMS.len());
    let mut level_menu = MenuState::new(LEVEL_MENU_ITEMS.len());
    level_menu.selected_index = Difficulty::ALL
        .iter()
        .position(|&d| d == config.difficulty)
        .unwrap_or(0);
    let mut scores = BestScores::new();

    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            match screen {
                Screen::MainMenu => {
                    render_menu(frame, area, "Snake Game", &MAIN_MENU_ITEMS, &main_menu)
                }
                Screen::LevelMenu => {
                    render_menu(frame, area, "Choose a level", &LEVEL_MENU_ITEMS, &level_menu)
                }
                Screen::BestScores => render_best_scores(frame, area, &scores),
                Screen::Tutorial => render_tutorial(frame, area),
            }
        })?;

        let Some(key) = read_key(Duration::from_millis(MENU_POLL_MS))? else {
            continue;
        };
        let input = map_menu_key(key);

        match screen {
            Screen::MainMenu => match main_menu.process_input(input) {
                MenuAction::Picked(index) => match MainMenuChoice::from_index(index) {
                    MainMenuChoice::Play => screen = Screen::LevelMenu,
                    MainMenuChoice::BestScores => screen = Screen::BestScores,
                    MainMenuChoice::Tutorial => screen = Screen::Tutorial,
                    MainMenuChoice::Quit => return Ok(()),
                },
                MenuAction::Quit => return Ok(()),
                MenuAction::Back | MenuAction::None => {}
            },
            Screen::LevelMenu => match level_menu.process_input(input) {
                MenuAction::Picked(index) => match level_from_index(index) {
                    Some(difficulty) => {
                        let session_config = config.clone().with_difficulty(difficulty);
                        ensure_grid_fits(session_config.grid, terminal.size()?)?;
                        let summary = run_session(
                            &session_config,
                            rng,
                            &mut TerminalInput,
                            &mut TerminalSink::new(terminal),
                        )?;
                        scores.record(summary.difficulty, summary.score);
                        terminal.clear()?;
                        if summary.end_reason == EndReason::Quit {
                            return Ok(());
                        }
                        screen = Screen::MainMenu;
                    }
                    None => screen = Screen::MainMenu,
                },
                MenuAction::Back => screen = Screen::MainMenu,
                MenuAction::Quit => return Ok(()),
                MenuAction::None => {}
            },
            Screen::BestScores | Screen::Tutorial => {
                if input == MenuInput::Quit {
                    return Ok(());
                }
                screen = Screen::MainMenu;
            }
        }
    }
}
