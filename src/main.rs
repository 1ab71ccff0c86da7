use clap::{Parser, Subcommand};
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use scrollsync::App;
use scrollsync::config::{self, Config, ScrollbarMode};
use scrollsync::content::PaneContent;
use scrollsync::error::ScrollsyncError;
use scrollsync::geometry::Size;
use scrollsync::inspect::{InspectRequest, parse_size};

/// Synchronized scrolling across text panes
#[derive(Parser, Debug)]
#[command(
    version,
    about = "View files side by side with custom scrollbars and synchronized scrolling",
    args_conflicts_with_subcommands = true
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Files to open, one pane each
    files: Vec<PathBuf>,

    /// Scrollbar mode (overrides the config file)
    #[arg(long, value_enum)]
    mode: Option<ScrollbarMode>,

    /// Scroll panes independently
    #[arg(long)]
    no_sync: bool,

    /// Also synchronize horizontal scrolling
    #[arg(long)]
    sync_horizontal: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the render model of one region as JSON
    Inspect {
        /// Container size, e.g. 400x300
        #[arg(long, value_parser = parse_size)]
        container: Size,

        /// Content size, e.g. 400x1200
        #[arg(long, value_parser = parse_size)]
        content: Size,

        /// Requested vertical offset
        #[arg(long, default_value_t = 0.0)]
        top: f64,

        /// Requested horizontal offset
        #[arg(long, default_value_t = 0.0)]
        left: f64,

        #[arg(long, value_enum, default_value_t = ScrollbarMode::Normal)]
        mode: ScrollbarMode,
    },
}

fn main() -> Result<()> {
    // Writes to /tmp/scrollsync-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let args = Args::parse();

    if let Some(Command::Inspect {
        container,
        content,
        top,
        left,
        mode,
    }) = args.command
    {
        let request = InspectRequest {
            container,
            content,
            top,
            left,
            mode,
        };
        println!("{}", request.to_json()?);
        return Ok(());
    }

    if args.files.is_empty() {
        return Err(ScrollsyncError::NoInput.into());
    }

    // Read everything before touching the terminal so errors print cleanly
    let contents = args
        .files
        .iter()
        .map(|path| PaneContent::load(path))
        .collect::<Result<Vec<_>, _>>()?;

    let config = apply_overrides(config_result.config, &args);
    let terminal = init_terminal()?;

    let app = App::new(contents, &config);
    let result = run(terminal, app, config_result.warning);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== SCROLLSYNC DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/scrollsync-debug.log")
    else {
        return;
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== SCROLLSYNC DEBUG SESSION STARTED ===");
}

/// CLI flags win over the config file
fn apply_overrides(mut config: Config, args: &Args) -> Config {
    if let Some(mode) = args.mode {
        config.scrollbar.mode = Some(mode);
    }
    if args.no_sync {
        config.sync.enabled = false;
    }
    if args.sync_horizontal {
        config.sync.horizontal = true;
    }
    config
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode().map_err(ScrollsyncError::Terminal)?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(ScrollsyncError::Terminal(e).into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(ScrollsyncError::Terminal(e).into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, warning: Option<String>) -> Result<()> {
    if let Some(warning) = warning {
        app.show_warning(&warning);
    }

    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
