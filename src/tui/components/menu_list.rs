//! # MenuList Component
//!
//! The dwell menu: the visible items with the highlighted one marked, and a
//! progress gauge underneath that fills while the press is held.
//!
//! The area this renders into is also the pointer target for press and
//! release; see `TuiState::menu_area`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph};

use crate::core::menu::MenuItem;
use crate::tui::component::Component;

pub const HIGHLIGHT_SYMBOL: &str = "▶ ";

pub struct MenuList<'a> {
    pub items: &'a [MenuItem],
    pub highlighted: Option<usize>,
    /// Dwell progress, 0–100.
    pub progress: f64,
}

impl<'a> MenuList<'a> {
    pub fn new(items: &'a [MenuItem], highlighted: Option<usize>, progress: f64) -> Self {
        Self {
            items,
            highlighted,
            progress,
        }
    }
}

/// Display text for one item; the prefix hints at what committing it does.
pub fn item_text(item: &MenuItem) -> String {
    match item {
        MenuItem::Back => format!("← {}", item.label()),
        MenuItem::Branch { label, .. } => format!("{label} ›"),
        MenuItem::CustomAction { label, .. } => format!("✎ {label}"),
        MenuItem::Leaf { label, .. } => label.clone(),
    }
}

fn item_style(item: &MenuItem) -> Style {
    match item {
        MenuItem::Back => Style::default().fg(Color::Yellow),
        MenuItem::Branch { .. } => Style::default().fg(Color::Cyan),
        MenuItem::CustomAction { .. } => Style::default().fg(Color::Magenta),
        MenuItem::Leaf { .. } => Style::default(),
    }
}

impl Component for MenuList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [list_area, gauge_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Menu ");

        if self.items.is_empty() {
            let empty = Paragraph::new("Nenhuma categoria configurada")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, list_area);
        } else {
            let items: Vec<ListItem> = self
                .items
                .iter()
                .map(|item| ListItem::new(Line::from(item_text(item))).style(item_style(item)))
                .collect();

            let list = List::new(items)
                .block(block)
                .highlight_symbol(HIGHLIGHT_SYMBOL)
                .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED));
            let mut state = ListState::default().with_selected(self.highlighted);
            frame.render_stateful_widget(list, list_area, &mut state);
        }

        let ratio = (self.progress / 100.0).clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" Segure "))
            .gauge_style(Style::default().fg(Color::Green))
            .ratio(ratio)
            .label(format!("{:.0}%", ratio * 100.0));
        frame.render_widget(gauge, gauge_area);
    }
}
