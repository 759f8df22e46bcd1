use std::fs::OpenOptions;
use std::io::{Stdout, Write};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

mod app;
mod config;
mod content;
mod dispatch;
mod registry;
mod storage;

use app::{CommandOutcome, ThemePreset};
use config::{Cli, Config, OutputFormat};
use storage::{load_theme, open_storage, store_theme, Storage};

pub(crate) use dispatch::{autocomplete, execute_command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);
    init_logging(&config, cli.run.is_some())?;

    let storage = open_storage(&config);
    if let Some(words) = &cli.run {
        return run_once(&words.join(" "), cli.format, storage);
    }

    log::info!(
        "starting portfolio-term {} (data dir {})",
        env!("CARGO_PKG_VERSION"),
        config.data_dir.display()
    );
    let mut terminal = setup_terminal()?;
    let result = app::run_app(&mut terminal, &config, storage);
    restore_terminal(&mut terminal)?;
    result
}

/// The TUI owns stdout and stderr, so interactive logging only goes to a file.
/// One-shot runs fall back to stderr at `warn`.
fn init_logging(config: &Config, one_shot: bool) -> Result<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open log file {}", path.display()))?;
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
    } else if one_shot {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .init();
    }
    Ok(())
}

fn run_once(input: &str, format: OutputFormat, mut storage: Box<dyn Storage>) -> Result<()> {
    let current = load_theme(storage.as_ref());
    let outcome = execute_command(input, current, storage.as_ref(), &mut |_: ThemePreset| {});
    if let Some(theme) = outcome.theme {
        store_theme(storage.as_mut(), theme);
    }

    let mut stdout = std::io::stdout().lock();
    write_outcome(&mut stdout, &outcome, format).context("write command output")?;
    stdout.flush().context("flush stdout")?;
    Ok(())
}

fn write_outcome(out: &mut impl Write, outcome: &CommandOutcome, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for line in &outcome.lines {
                writeln!(out, "{}", line.plain_text())?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, outcome).context("serialize outcome")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("enable raw mode")?;
    crossterm::execute!(std::io::stdout(), EnterAlternateScreen, EnableMouseCapture)
        .context("enter alternate screen")?;

    let mut terminal =
        Terminal::new(CrosstermBackend::new(std::io::stdout())).context("create terminal")?;

    if matches!(supports_keyboard_enhancement(), Ok(true)) {
        crossterm::execute!(
            std::io::stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )
        .ok();
    }
    crossterm::execute!(std::io::stdout(), EnableBracketedPaste).ok();

    terminal.clear().context("clear terminal")?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    crossterm::execute!(std::io::stdout(), DisableBracketedPaste).ok();
    crossterm::execute!(std::io::stdout(), PopKeyboardEnhancementFlags).ok();
    crossterm::execute!(std::io::stdout(), DisableMouseCapture, LeaveAlternateScreen).ok();
    disable_raw_mode().context("disable raw mode")?;
    terminal.show_cursor().context("show cursor")?;
    Ok(())
}
