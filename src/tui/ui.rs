use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::state::MenuSession;
use crate::tui::component::Component;
use crate::tui::components::{LetterPanel, MenuList, OutputPanel, TitleBar};
use crate::tui::{Screen, TuiState};

const MENU_HELP: &str = " Segure espaço ou o botão do mouse para escolher · Tab letras · q sair";
const LETTERS_HELP: &str =
    " ←/→ ↑/↓ ajustar · Enter escrever · m modo · 1-9 sugestão · Tab menu · q sair";

/// Draws the whole board and records the pointer targets in `tui`.
pub fn draw_ui(frame: &mut Frame, session: &MenuSession, tui: &mut TuiState) {
    use Constraint::{Length, Min, Percentage};
    let [title_area, main_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());
    let [left_area, output_area] =
        Layout::horizontal([Percentage(50), Percentage(50)]).areas(main_area);

    TitleBar::new(
        tui.screen,
        session.navigation.path().to_vec(),
        session.status_message.clone(),
    )
    .render(frame, title_area);

    match tui.screen {
        Screen::Menu => {
            MenuList::new(
                session.current_items(),
                session.highlighted(),
                session.dwell.progress(),
            )
            .render(frame, left_area);
            tui.menu_area = left_area;
            tui.slider_area = Default::default();
        }
        Screen::Letters => {
            LetterPanel::new(&session.letters, session.suggestions()).render(frame, left_area);
            tui.slider_area = LetterPanel::slider_area(left_area);
            tui.menu_area = Default::default();
        }
    }

    OutputPanel::new(session.buffer.text()).render(frame, output_area);

    let help = match tui.screen {
        Screen::Menu => MENU_HELP,
        Screen::Letters => LETTERS_HELP,
    };
    frame.render_widget(
        Span::styled(help, Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_session;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    fn draw(session: &MenuSession, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, session, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_menu_screen_records_menu_area() {
        let mut session = test_session();
        session.buffer.push_str("Olá\n");
        let mut tui = TuiState::new(false);
        let text = draw(&session, &mut tui);

        assert!(text.contains("Básico"));
        assert!(text.contains("Editar"));
        assert!(text.contains("Olá"));
        assert_eq!(tui.menu_area, Rect::new(0, 1, 50, 22));
        assert_eq!(tui.slider_area, Rect::default());
    }

    #[test]
    fn test_letters_screen_records_slider_area() {
        let session = test_session();
        let mut tui = TuiState::new(false);
        tui.screen = Screen::Letters;
        let text = draw(&session, &mut tui);

        assert!(text.contains("Modo: Superior (A-M)"));
        assert!(!text.contains("Básico"));
        assert_eq!(tui.slider_area, Rect::new(0, 4, 50, 3));
        assert_eq!(tui.menu_area, Rect::default());
    }
}
