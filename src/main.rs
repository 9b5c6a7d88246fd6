use std::io::stdout;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use ratatui::DefaultTerminal;
use toaster::config::{load_config, load_config_from_path};

mod app;

use app::App;

/// Toast notification playground
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Config file to use instead of ~/.config/toaster/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_logging();

    let (config, warning) = match &args.config {
        Some(path) => (load_config_from_path(path)?, None),
        None => {
            let loaded = load_config();
            (loaded.config, loaded.warning)
        }
    };

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;

    let result = run(terminal, App::new(&config, warning));

    // Restore terminal (automatic cleanup)
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        app.tick(Instant::now());

        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(app.poll_timeout(Instant::now()))? {
            match event::read()? {
                // Only process key press events (avoid duplicates)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key, Instant::now())
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse, Instant::now()),
                _ => {}
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Debug builds log to a file; the terminal is owned by the UI
#[cfg(debug_assertions)]
fn init_logging() {
    use std::fs::{self, OpenOptions};
    use std::io::Write;

    let Some(dir) = dirs::cache_dir().map(|p| p.join("toaster")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("toaster.log"))
    else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .try_init();
}
