use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy_rounds::core::{GameConfig, INPUT_POLL_MS, MAX_CATCH_UP_MS};
use flappy_rounds::game::Match;
use flappy_rounds::input::{map_key, KeyCommand};
use flappy_rounds::setup::{CliArgs, MatchSettings, Prompter};
use flappy_rounds::ui;
use flappy_rounds::utils::logging::{init_file_logging, resolve_log_path};
use flappy_rounds::utils::version_line;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let cli = CliArgs::parse();
    if let Err(message) = cli.check() {
        CliArgs::command()
            .error(ErrorKind::ArgumentConflict, message)
            .exit();
    }

    if let Some(path) = resolve_log_path(cli.log_path.as_deref()) {
        if let Err(e) = init_file_logging(&path) {
            eprintln!("Warning: could not open log file {}: {}", path.display(), e);
        }
    }

    let config = match GameConfig::resolve(cli.config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: could not load config: {}", e);
            std::process::exit(1);
        }
    };

    let settings = match prompt_settings(&cli) {
        Ok(settings) => settings,
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            println!();
            std::process::exit(0);
        }
        Err(e) => return Err(e),
    };

    tracing::info!(
        version = %version_line(),
        players = settings.num_players(),
        rounds = settings.num_rounds,
        seed = ?settings.seed,
        "starting match"
    );
    let game = Match::new(
        config,
        settings.num_players(),
        settings.num_rounds,
        settings.seed,
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, game, &settings);

    // Cleanup terminal, even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "terminal loop failed");
    }
    result
}

fn prompt_settings(cli: &CliArgs) -> io::Result<MatchSettings> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    prompter.complete(cli)
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut game: Match,
    settings: &MatchSettings,
) -> io::Result<()> {
    let started = Instant::now();
    let mut fed_ms: u64 = 0;

    loop {
        terminal.draw(|frame| ui::draw(frame, &game, settings))?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    KeyCommand::Game(action) => game.apply(action),
                    KeyCommand::Quit => break,
                    KeyCommand::Ignore => {}
                }
            }
        }

        // Whole milliseconds since the last pass, measured from a fixed origin so
        // truncation never accumulates
        let total_ms = started.elapsed().as_millis() as u64;
        let elapsed = total_ms - fed_ms;
        fed_ms = total_ms;
        game.advance_clock(elapsed.min(MAX_CATCH_UP_MS));
    }

    tracing::info!("quit");
    Ok(())
}
