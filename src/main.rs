use std::error::Error;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crossterm::cursor::Show;
use crossterm::event;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use proctab::ProctabError;
use proctab::app::{App, Config};
use proctab::events::{AppEvent, handle_event};
use proctab::ui;

type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let config = match Config::from_args() {
        Ok(config) => config,
        Err(ProctabError::Usage(message)) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("proctab: {err}");
            std::process::exit(1);
        }
    };
    let tick_rate = config.tick_rate;
    let once = config.once;
    let mut app = App::new(config)?;

    if once {
        return print_once(&mut app);
    }

    let mut terminal = setup_terminal()?;
    install_panic_hook();
    info!(tick_ms = millis(tick_rate), "starting");

    let result = run_app(&mut terminal, &mut app, tick_rate);
    restore_terminal(&mut terminal)?;

    if let Err(err) = result {
        eprintln!("proctab error: {err}");
    }

    Ok(())
}

/// Logs are discarded unless `PROCTAB_LOG` names a file; the TUI owns the terminal.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let log_file = std::env::var_os("PROCTAB_LOG").and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()
    });
    match log_file {
        Some(file) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::sink)
                .try_init();
        }
    }
}

fn print_once(app: &mut App) -> Result<(), Box<dyn Error>> {
    app.refresh()?;
    if let Some(err) = app.last_error.as_deref() {
        eprintln!("proctab: {err}");
        std::process::exit(1);
    }
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", app.header)?;
    writeln!(out, "{}", app.rule())?;
    for line in &app.lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn setup_terminal() -> io::Result<AppTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut AppTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal_raw();
        default_hook(info);
    }));
}

fn restore_terminal_raw() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen, Show);
}

fn run_app(
    terminal: &mut AppTerminal,
    app: &mut App,
    tick_rate: Duration,
) -> Result<(), Box<dyn Error>> {
    app.refresh()?;
    let mut last_tick = Instant::now();

    loop {
        app.tick();
        terminal.draw(|frame| ui::render(frame, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let Some(event) = AppEvent::from_terminal(event::read()?) else {
                continue;
            };

            if handle_event(app, event)?.should_exit() {
                return Ok(());
            }
        }

        if last_tick.elapsed() >= tick_rate {
            let started = Instant::now();
            if handle_event(app, AppEvent::Tick)?.should_exit() {
                return Ok(());
            }
            if started.elapsed() > tick_rate {
                warn!(
                    elapsed_ms = millis(started.elapsed()),
                    "refresh took longer than the tick interval"
                );
            }
            last_tick = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_saturates() {
        assert_eq!(millis(Duration::from_millis(1500)), 1500);
        assert_eq!(millis(Duration::MAX), u64::MAX);
    }
}
