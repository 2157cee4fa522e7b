//! # OutputPanel Component
//!
//! Shows the composed text, pinned to its last lines so new phrases are
//! always visible.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::component::Component;

pub struct OutputPanel<'a> {
    pub text: &'a str,
}

impl<'a> OutputPanel<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

/// Rows to skip so the last `visible` lines of `text` are shown.
fn bottom_offset(text: &str, visible: u16) -> u16 {
    let lines = text.lines().count() as u16;
    lines.saturating_sub(visible)
}

impl Component for OutputPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Texto ");
        let visible = area.height.saturating_sub(2);
        let paragraph = Paragraph::new(self.text)
            .block(block)
            .scroll((bottom_offset(self.text, visible), 0));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_bottom_offset() {
        assert_eq!(bottom_offset("", 3), 0);
        assert_eq!(bottom_offset("a\nb\n", 3), 0);
        assert_eq!(bottom_offset("a\nb\nc\nd\ne\n", 3), 2);
    }

    #[test]
    fn test_shows_latest_lines() {
        let backend = TestBackend::new(30, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let text = "primeira\nsegunda\nterceira\n";
        terminal
            .draw(|f| {
                OutputPanel::new(text).render(f, f.area());
            })
            .unwrap();
        let rendered = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(rendered.contains("Texto"));
        assert!(rendered.contains("terceira"));
        assert!(!rendered.contains("primeira"));
    }
}
