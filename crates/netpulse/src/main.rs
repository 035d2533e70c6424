use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
};
use netpulse_background::{BackgroundState, DEFAULT_CELL_SIZE};
use netpulse_config::{Config, MarkerStyle};
use ratatui::{DefaultTerminal, symbols::Marker};

mod logging;
mod scheduler;

use scheduler::FixedRateScheduler;

/// Poll timeout used when no frame is pending.
const IDLE_POLL: Duration = Duration::from_millis(100);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    logging::init(&config)?;

    let terminal = ratatui::init();
    let result = App::new(&config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// The animated network.
    background: BackgroundState,
    /// Paces frames at the configured rate.
    scheduler: FixedRateScheduler,
    /// Canvas marker for plotting.
    marker: Marker,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: &Config) -> Self {
        Self {
            running: false,
            background: BackgroundState::new(),
            scheduler: FixedRateScheduler::new(config.frame_interval()),
            marker: canvas_marker(config.marker),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.sync_cell_size();
        while self.running {
            if self.scheduler.take_due(Instant::now()) {
                terminal.draw(|frame| {
                    self.background
                        .render(frame, self.marker, &mut self.scheduler)
                })?;
            }
            self.handle_crossterm_events()?;
        }
        log::info!("shutting down");
        Ok(())
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits no longer than the time left until the next frame is due.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = self
            .scheduler
            .time_until_due(Instant::now())
            .unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(columns, rows) => {
                    log::debug!("terminal resized to {columns}x{rows}");
                    self.sync_cell_size();
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Use the terminal's reported pixel size per cell when available.
    fn sync_cell_size(&mut self) {
        let (width, height) = match terminal::window_size() {
            Ok(size) if size.columns > 0 && size.rows > 0 && size.width > 0 && size.height > 0 => (
                size.width as f64 / size.columns as f64,
                size.height as f64 / size.rows as f64,
            ),
            _ => DEFAULT_CELL_SIZE,
        };
        self.background.set_cell_size(width, height);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

fn canvas_marker(style: MarkerStyle) -> Marker {
    match style {
        MarkerStyle::Braille => Marker::Braille,
        MarkerStyle::Dot => Marker::Dot,
        MarkerStyle::HalfBlock => Marker::HalfBlock,
        MarkerStyle::Block => Marker::Block,
    }
}
