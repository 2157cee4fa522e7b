//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the board,
//! and translates mouse and keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Tick Strategy
//!
//! The dwell controller has no timer of its own; this loop is its ticker.
//!
//! - **Pressing**: polls with `tick_interval` (~60 Hz by default), sends
//!   `Action::Tick` every iteration and redraws.
//! - **Idle**: sleeps up to 500ms and only redraws on events.
//!
//! Because ticking is gated on `dwell.is_pressing()` inside one loop, there
//! is never more than one ticker, and a release stops it before the next
//! iteration.

mod component;
pub mod components;
pub mod event;
pub mod input;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::supports_keyboard_enhancement;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::MenuSession;
use crate::tui::event::{poll_event_immediate, poll_event_timeout};
use crate::tui::input::route_event;
use crate::wordlist::{HttpWordSource, WordSource};

const IDLE_POLL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Dwell menu.
    Menu,
    /// Slider letter picker.
    Letters,
}

impl Screen {
    pub fn other(self) -> Self {
        match self {
            Screen::Menu => Screen::Letters,
            Screen::Letters => Screen::Menu,
        }
    }
}

/// TUI-specific presentation state (not part of core board logic)
pub struct TuiState {
    pub screen: Screen,
    /// Space toggles press/release instead of press-and-hold.
    pub latch: bool,
    // Pointer targets, recorded on every draw
    pub menu_area: Rect,
    pub slider_area: Rect,
    // Left button went down on a target and hasn't come up yet
    pub pointer_held: bool,
    pub slider_held: bool,
}

impl TuiState {
    pub fn new(latch: bool) -> Self {
        Self {
            screen: Screen::Menu,
            latch,
            menu_area: Rect::default(),
            slider_area: Rect::default(),
            pointer_held: false,
            slider_held: false,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Pushed even when detection says no: detection fails in WSL, and
        // terminals without the Kitty protocol ignore the flags.
        execute!(
            stdout(),
            EnableMouseCapture,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, DisableMouseCapture);
    }
}

/// Whether Space latches. Terminals that can't report key releases never
/// end a held press, so they always latch.
fn resolve_latch(configured: bool, release_support: std::io::Result<bool>) -> bool {
    match release_support {
        Ok(false) if !configured => {
            info!("Terminal does not report key releases, Space will latch");
            true
        }
        Ok(_) => configured,
        Err(e) => {
            warn!("Could not detect keyboard enhancement support: {}", e);
            configured
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut session = MenuSession::from_config(&config);

    let mut terminal = ratatui::init();
    let latch = resolve_latch(config.latch, supports_keyboard_enhancement());
    let mut tui = TuiState::new(latch);
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Could not enable terminal modes: {}", e);
            None
        }
    };

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    if config.words_enabled {
        spawn_word_fetch(Arc::new(HttpWordSource::new(config.words_url.clone())), tx);
    }

    let mut needs_redraw = true; // Force first frame

    let result = loop {
        if session.dwell.is_pressing()
            && update(&mut session, Action::Tick(Instant::now())) == Effect::Redraw
        {
            needs_redraw = true;
        }

        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &session, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let timeout = if session.dwell.is_pressing() {
            config.tick_interval
        } else {
            IDLE_POLL
        };

        // Process first event + drain ALL pending events before next draw
        match drain_events(&mut session, &mut tui, timeout) {
            Ok((redraw, quit)) => {
                needs_redraw |= redraw;
                if quit {
                    break Ok(());
                }
            }
            Err(e) => break Err(e),
        }

        // Handle background task actions (word list)
        while let Ok(action) = rx.try_recv() {
            debug!("Event loop received: {:?}", action);
            if update(&mut session, action) == Effect::Redraw {
                needs_redraw = true;
            }
        }
    };

    info!("Shutting down, buffer holds {} bytes", session.buffer.text().len());
    ratatui::restore();
    result
}

/// Waits up to `timeout` for the first event, then handles everything
/// already queued. Returns `(needs_redraw, should_quit)`.
fn drain_events(
    session: &mut MenuSession,
    tui: &mut TuiState,
    timeout: Duration,
) -> std::io::Result<(bool, bool)> {
    let mut redraw = false;
    let mut next = poll_event_timeout(timeout)?;
    while let Some(event) = next {
        match route_event(session, tui, event, Instant::now()) {
            Effect::Quit => return Ok((redraw, true)),
            Effect::Redraw => redraw = true,
            Effect::None => {}
        }
        next = poll_event_immediate()?;
    }
    Ok((redraw, false))
}

/// Fetches the word list once in the background and reports the result as
/// an `Action`.
pub fn spawn_word_fetch(source: Arc<dyn WordSource>, tx: mpsc::Sender<Action>) {
    info!("Spawning word list fetch ({})", source.name());
    tokio::spawn(async move {
        let action = match source.load().await {
            Ok(words) => Action::WordsLoaded(words),
            Err(e) => Action::WordsFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver word list: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::words::WordList;
    use crate::wordlist::WordListError;
    use async_trait::async_trait;

    struct FixedSource(Option<&'static str>);

    #[async_trait]
    impl WordSource for FixedSource {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn load(&self) -> Result<WordList, WordListError> {
            match self.0 {
                Some(body) => Ok(WordList::parse(body)),
                None => Err(WordListError::Http { status: 404 }),
            }
        }
    }

    #[test]
    fn test_latch_forced_without_key_releases() {
        assert!(resolve_latch(false, Ok(false)));
        assert!(resolve_latch(true, Ok(false)));
    }

    #[test]
    fn test_latch_follows_config_with_key_releases() {
        assert!(!resolve_latch(false, Ok(true)));
        assert!(resolve_latch(true, Ok(true)));
    }

    #[test]
    fn test_latch_follows_config_when_detection_fails() {
        let failed = || Err(std::io::Error::other("no reply"));
        assert!(!resolve_latch(false, failed()));
        assert!(resolve_latch(true, failed()));
    }

    #[test]
    fn test_screen_other() {
        assert_eq!(Screen::Menu.other(), Screen::Letters);
        assert_eq!(Screen::Letters.other(), Screen::Menu);
    }

    #[tokio::test]
    async fn test_word_fetch_reports_loaded() {
        let (tx, rx) = mpsc::channel();
        spawn_word_fetch(Arc::new(FixedSource(Some("casa\ncarro\n"))), tx);
        let action = tokio::task::spawn_blocking(move || rx.recv().unwrap())
            .await
            .unwrap();
        assert_eq!(action, Action::WordsLoaded(WordList::parse("casa\ncarro")));
    }

    #[tokio::test]
    async fn test_word_fetch_reports_failure() {
        let (tx, rx) = mpsc::channel();
        spawn_word_fetch(Arc::new(FixedSource(None)), tx);
        let action = tokio::task::spawn_blocking(move || rx.recv().unwrap())
            .await
            .unwrap();
        assert_eq!(action, Action::WordsFailed("HTTP error! status: 404".to_string()));
    }
}
