use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields, usually borrowed from
/// the session) and render to a `Frame` within a given `Rect`. They hold no
/// state between frames: a new one is built for every draw.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
