// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};
use tracing_subscriber::EnvFilter;

mod app;
mod data;
mod events;
mod settings;
mod source;
mod ui;

use app::App;
use data::Channel;
use settings::Settings;
use source::{EventSource, SimSource, StreamSource};

#[derive(Parser, Debug)]
#[command(name = "sensorwatch")]
#[command(about = "Terminal dashboard for live IoT sensor readings")]
struct Args {
    /// Gateway endpoint serving newline-delimited sensor_update JSON (host:port).
    /// Defaults to the settings file, SENSORWATCH_ENDPOINT, or 127.0.0.1:5000.
    #[arg(short, long, conflicts_with = "simulate")]
    connect: Option<String>,

    /// Path to an optional TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run against a built-in simulated sensor feed
    #[arg(long)]
    simulate: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let settings = Settings::load(args.config.as_deref())?;

    if args.simulate {
        return run_with_sim(settings.update_interval());
    }

    let endpoint = args.connect.unwrap_or_else(|| settings.endpoint.clone());
    run_with_endpoint(&endpoint, settings.retry_interval())
}

/// Run against a live TCP gateway
fn run_with_endpoint(endpoint: &str, retry: Duration) -> Result<()> {
    // Build a tokio runtime for the transport task
    let rt = tokio::runtime::Runtime::new()?;

    let source = rt
        .block_on(async { Box::new(StreamSource::connect(endpoint, retry)) as Box<dyn EventSource> });

    run_tui(source)
}

/// Run against the built-in simulated feed
fn run_with_sim(interval: Duration) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;

    let source = rt.block_on(async { Box::new(SimSource::spawn(interval)) as Box<dyn EventSource> });

    run_tui(source)
}

/// Run the TUI with the given event source
fn run_tui(source: Box<dyn EventSource>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    let mut app = App::new(source);

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Release the transport handle before tearing down the terminal
    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 60;
    const MIN_HEIGHT: u16 = 16;

    while app.running {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                let centered = ratatui::layout::Rect::new(0, area.height / 2 - 2, area.width, 5);
                frame.render_widget(paragraph, centered);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Length(5), // Current-value tiles
                Constraint::Min(8),    // History charts
                Constraint::Length(1), // Status bar with connection badge
            ])
            .split(area);

            ui::common::render_header(frame, app, chunks[0]);
            ui::tiles::render(frame, app, chunks[1]);

            let charts = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                .split(chunks[2]);
            ui::chart::render(frame, app, charts[0], Channel::Temperature);
            ui::chart::render(frame, app, charts[1], Channel::Humidity);

            ui::common::render_status_bar(frame, app, chunks[3]);

            // Render help overlay if active
            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for terminal events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // Drain any transport events that arrived since the last pass
        app.pump();
    }

    Ok(())
}
