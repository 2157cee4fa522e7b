//! # TitleBar Component
//!
//! Top status bar: which screen is showing, where in the menu we are, and
//! the latest status message.
//!
//! ## Conditional Formatting
//!
//! 1. **Menu with path**: `"Dwellboard | Início › Básico | Selecionado: Sim"`
//! 2. **Letters**: `"Dwellboard | Letras | Modo: Inferior (N-Z)"`
//! 3. **No status**: the trailing section is omitted.

use crate::tui::Screen;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub const ROOT_CRUMB: &str = "Início";
const SEPARATOR: &str = " › ";

/// Stateless title bar; all fields are props.
pub struct TitleBar {
    pub screen: Screen,
    /// Branch labels from the root down.
    pub path: Vec<String>,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(screen: Screen, path: Vec<String>, status_message: String) -> Self {
        Self {
            screen,
            path,
            status_message,
        }
    }

    fn location(&self) -> String {
        match self.screen {
            Screen::Menu => std::iter::once(ROOT_CRUMB)
                .chain(self.path.iter().map(String::as_str))
                .collect::<Vec<_>>()
                .join(SEPARATOR),
            Screen::Letters => "Letras".to_string(),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("Dwellboard", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" | "),
            Span::raw(self.location()),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(self.status_message.as_str()));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
