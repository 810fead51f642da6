// App state and main event loop.
// Manages section navigation, keyboard input, the animation clock, and the
// background feed resolution.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use tokio::sync::mpsc::{self, error::TryRecvError};

use crate::cache::{CacheSlot, FileStore, MemoryStore};
use crate::config::Config;
use crate::content;
use crate::error::Result;
use crate::feed::{FeedOutcome, ProjectFeed};
use crate::github::{GitHubClient, RateLimit};
use crate::state::{ConsoleMessage, FeedState, RevealLatch, ScrollState, Typer};
use crate::ui;

/// Navbar styling flips once the active section scrolls past this offset.
const NAV_SCROLL_THRESHOLD: u16 = 2;

/// Active section of the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Hero,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Visible ratio at which the section's reveal latch fires.
    fn reveal_threshold(&self) -> f64 {
        match self {
            Section::Hero => 0.0,
            Section::About | Section::Skills | Section::Experience => 0.2,
            Section::Projects => 0.1,
            Section::Contact => 0.3,
        }
    }
}

/// What a finished resolution reports back to the event loop.
struct FeedReport {
    result: Result<FeedOutcome>,
    rate_limit: RateLimit,
}

/// Main application state.
pub struct App {
    config: Config,
    /// Currently active section.
    pub active_section: Section,
    /// Scroll offset within the active section.
    pub scroll: ScrollState,
    /// Per-section reveal latches, indexed by `Section::index`.
    pub reveals: [RevealLatch; 6],
    /// Hero subtitle animation.
    pub typer: Typer,
    typer_due: Instant,
    /// Project feed display state.
    pub projects: FeedState,
    feed_rx: Option<mpsc::UnboundedReceiver<FeedReport>>,
    /// Rate limit observed by the most recent resolution.
    pub rate_limit: Option<RateLimit>,
    /// Activity log; the status bar shows the newest entry.
    pub console: Vec<ConsoleMessage>,
    /// Whether the help overlay is open.
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let reveals = Section::ALL.map(|section| RevealLatch::new(section.reveal_threshold()));

        let mut app = Self {
            config,
            active_section: Section::default(),
            scroll: ScrollState::new(NAV_SCROLL_THRESHOLD),
            reveals,
            typer: Typer::new(&content::TYPED_PHRASES),
            typer_due: Instant::now(),
            projects: FeedState::default(),
            feed_rx: None,
            rate_limit: None,
            console: Vec::new(),
            show_help: false,
            should_quit: false,
        };
        app.reveals[Section::Hero.index()].on_intersection(1.0);
        app
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        self.start_resolution();

        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.drain_feed_report();
            self.handle_events()?;
            self.on_tick();
        }
        Ok(())
    }

    /// Handle keyboard events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.on_key(key.code);
                }
            }
        }
        Ok(())
    }

    fn on_key(&mut self, code: KeyCode) {
        if self.show_help {
            if matches!(code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab | KeyCode::Right => self.set_section(self.active_section.next()),
            KeyCode::BackTab | KeyCode::Left => self.set_section(self.active_section.prev()),
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                self.set_section(Section::ALL[index]);
            }
            KeyCode::Down => self.scroll_by(1),
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::PageDown => self.scroll_by(10),
            KeyCode::PageUp => self.scroll_by(-10),
            KeyCode::Home => self.scroll.on_scroll(0),
            KeyCode::Char('r') => {
                // Manual retry is the only way out of a failed resolution.
                if self.projects.can_retry() {
                    self.start_resolution();
                }
            }
            _ => {}
        }
    }

    /// Switch sections: reset the scroll position and fire the reveal
    /// latch, since the section now fills the viewport.
    fn set_section(&mut self, section: Section) {
        self.active_section = section;
        self.scroll.on_scroll(0);
        self.reveals[section.index()].on_intersection(1.0);
    }

    fn scroll_by(&mut self, delta: i32) {
        let offset = i32::from(self.scroll.offset()) + delta;
        self.scroll.on_scroll(offset.clamp(0, u16::MAX as i32) as u16);
    }

    /// Advance the animation clocks.
    fn on_tick(&mut self) {
        let now = Instant::now();
        if now >= self.typer_due {
            let delay = self.typer.step();
            self.typer_due = now + delay;
        }
        self.reveals[self.active_section.index()].on_tick();
    }

    /// Kick off a resolution in the background, if the feed state allows
    /// one. The task reports through a channel the loop drains; if the
    /// loop is gone by then, the send fails and the result is dropped.
    fn start_resolution(&mut self) {
        if !self.projects.begin() {
            return;
        }

        self.log(ConsoleMessage::info("Loading projects from GitHub..."));

        let config = self.config.clone();
        let (tx, rx) = mpsc::unbounded_channel();
        self.feed_rx = Some(rx);

        tokio::spawn(async move {
            let report = resolve_in_background(config).await;
            let _ = tx.send(report);
        });
    }

    /// Non-blocking drain of the resolution channel.
    fn drain_feed_report(&mut self) {
        let Some(rx) = self.feed_rx.as_mut() else {
            return;
        };

        match rx.try_recv() {
            Ok(report) => {
                self.feed_rx = None;
                if report.rate_limit.limit > 0 {
                    self.rate_limit = Some(report.rate_limit);
                }
                match report.result {
                    Ok(outcome) => {
                        for warning in &outcome.warnings {
                            self.log(ConsoleMessage::warn(warning.clone()));
                        }
                        let source = if outcome.from_cache { "cache" } else { "GitHub" };
                        self.log(ConsoleMessage::info(format!(
                            "Loaded {} projects from {}",
                            outcome.projects.len(),
                            source
                        )));
                        self.projects.ready(outcome.projects);
                    }
                    Err(err) => {
                        let message = err.to_string();
                        self.log(ConsoleMessage::error(message.clone()));
                        self.projects.fail(message);
                    }
                }
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.feed_rx = None;
            }
        }
    }

    fn log(&mut self, message: ConsoleMessage) {
        self.console.push(message);
    }

    /// Newest activity log entry, for the status bar.
    pub fn latest_message(&self) -> Option<&ConsoleMessage> {
        self.console.last()
    }
}

/// Build the client and cache, resolve once, and report.
async fn resolve_in_background(config: Config) -> FeedReport {
    let client = match GitHubClient::new(config.token.as_deref()) {
        Ok(client) => client,
        Err(err) => {
            return FeedReport {
                result: Err(err),
                rate_limit: RateLimit::default(),
            };
        }
    };

    // No resolvable cache directory degrades to a per-session cache.
    let cache: Box<dyn CacheSlot> = match FileStore::new() {
        Some(store) => Box::new(store),
        None => Box::new(MemoryStore::new()),
    };

    let mut feed = ProjectFeed::new(client, cache, config.username);
    let result = feed.resolve().await;
    FeedReport {
        result,
        rate_limit: feed.rate_limit(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_cycle_in_order() {
        assert_eq!(Section::Hero.next(), Section::About);
        assert_eq!(Section::Contact.next(), Section::Hero);
        assert_eq!(Section::Hero.prev(), Section::Contact);
        assert_eq!(Section::Projects.prev(), Section::Experience);
    }

    #[test]
    fn switching_sections_fires_their_reveal_latch() {
        let mut app = App::new(Config {
            username: "someone".to_string(),
            token: None,
        });

        assert!(app.reveals[Section::Hero.index()].is_visible());
        assert!(!app.reveals[Section::Skills.index()].is_visible());

        app.set_section(Section::Skills);
        assert!(app.reveals[Section::Skills.index()].is_visible());
        assert_eq!(app.scroll.offset(), 0);
    }

    #[test]
    fn retry_key_is_inert_unless_failed() {
        let mut app = App::new(Config {
            username: "someone".to_string(),
            token: None,
        });

        app.projects = FeedState::Ready(Vec::new());
        app.on_key(KeyCode::Char('r'));
        assert!(app.projects.projects().is_some());
    }
}
