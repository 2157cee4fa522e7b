//! # LetterPanel Component
//!
//! The slider keyboard screen:
//!
//! ```text
//! ┌ Letra ───────────────┐
//! │          G           │   current symbol
//! └──────────────────────┘
//! ┌ Pressão ─────────────┐
//! │██████████     48     │   slider (pointer target)
//! └──────────────────────┘
//!  Modo: Superior (A-M)
//!  1 casa  2 carro  3 cama   suggestions
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

use crate::core::letters::{LetterPicker, MAX_SLIDER};
use crate::tui::component::Component;

pub struct LetterPanel<'a> {
    pub picker: &'a LetterPicker,
    pub suggestions: Vec<&'a str>,
}

impl<'a> LetterPanel<'a> {
    pub fn new(picker: &'a LetterPicker, suggestions: Vec<&'a str>) -> Self {
        Self {
            picker,
            suggestions,
        }
    }

    fn areas(area: Rect) -> [Rect; 4] {
        Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area)
    }

    /// Where the slider gauge lands inside `area`, for pointer hit testing.
    pub fn slider_area(area: Rect) -> Rect {
        Self::areas(area)[1]
    }
}

/// Slider value under `column`, proportional across the inside of the
/// slider's border.
pub fn slider_value_at(slider: Rect, column: u16) -> u8 {
    let inner_x = slider.x.saturating_add(1);
    let inner_width = slider.width.saturating_sub(2);
    if inner_width <= 1 {
        return 0;
    }
    let offset = column.saturating_sub(inner_x).min(inner_width - 1);
    let value = u32::from(offset) * u32::from(MAX_SLIDER) / u32::from(inner_width - 1);
    value as u8
}

impl Component for LetterPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [symbol_area, slider_area, mode_area, suggestion_area] = Self::areas(area);

        let symbol = Paragraph::new(self.picker.current().display())
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).title(" Letra "));
        frame.render_widget(symbol, symbol_area);

        let value = self.picker.value();
        let slider = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" Pressão "))
            .gauge_style(Style::default().fg(Color::Cyan))
            .ratio(f64::from(value) / f64::from(MAX_SLIDER))
            .label(value.to_string());
        frame.render_widget(slider, slider_area);

        frame.render_widget(Line::from(self.picker.mode().label()), mode_area);

        let spans: Vec<Span> = self
            .suggestions
            .iter()
            .enumerate()
            .flat_map(|(i, word)| {
                [
                    Span::styled(format!("{} ", i + 1), Style::default().fg(Color::Yellow)),
                    Span::raw(format!("{word}  ")),
                ]
            })
            .collect();
        frame.render_widget(Paragraph::new(Line::from(spans)), suggestion_area);
    }
}
