//! Routes `TuiEvent`s to core `Action`s for the active screen.
//!
//! This is where physical gestures become the two dwell signals. A pointer
//! press counts only inside the menu panel; dragging out of the panel while
//! held counts as a release, the same as lifting the button.

use std::time::Instant;

use log::debug;
use ratatui::layout::Position;

use crate::core::action::{Action, Effect, update};
use crate::core::state::MenuSession;
use crate::tui::components::letter_panel::slider_value_at;
use crate::tui::event::TuiEvent;
use crate::tui::{Screen, TuiState};

pub fn route_event(
    session: &mut MenuSession,
    tui: &mut TuiState,
    event: TuiEvent,
    now: Instant,
) -> Effect {
    match event {
        TuiEvent::Quit => update(session, Action::Quit),
        TuiEvent::Resize => Effect::Redraw,
        TuiEvent::SwitchScreen => {
            // A held dwell ends with the screen it belongs to.
            update(session, Action::Release(now));
            tui.pointer_held = false;
            tui.slider_held = false;
            tui.screen = tui.screen.other();
            debug!("Switched to {:?}", tui.screen);
            Effect::Redraw
        }
        _ => match tui.screen {
            Screen::Menu => route_menu(session, tui, event, now),
            Screen::Letters => route_letters(session, tui, event),
        },
    }
}

fn route_menu(
    session: &mut MenuSession,
    tui: &mut TuiState,
    event: TuiEvent,
    now: Instant,
) -> Effect {
    match event {
        TuiEvent::PressKey if tui.latch && session.dwell.is_pressing() => {
            update(session, Action::Release(now))
        }
        TuiEvent::PressKey => update(session, Action::Press(now)),
        TuiEvent::ReleaseKey if tui.latch => Effect::None,
        TuiEvent::ReleaseKey => update(session, Action::Release(now)),
        TuiEvent::PointerDown(col, row) if tui.menu_area.contains(Position::new(col, row)) => {
            tui.pointer_held = true;
            update(session, Action::Press(now))
        }
        TuiEvent::PointerDrag(col, row)
            if tui.pointer_held && !tui.menu_area.contains(Position::new(col, row)) =>
        {
            debug!("Pointer left the menu while held");
            tui.pointer_held = false;
            update(session, Action::Release(now))
        }
        TuiEvent::PointerUp(..) if tui.pointer_held => {
            tui.pointer_held = false;
            update(session, Action::Release(now))
        }
        _ => Effect::None,
    }
}

fn route_letters(session: &mut MenuSession, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Nudge(delta) => update(session, Action::NudgeSlider(delta)),
        TuiEvent::Commit => update(session, Action::CommitLetter),
        TuiEvent::ToggleMode => update(session, Action::ToggleAlphabet),
        TuiEvent::Digit(n) if n >= 1 => {
            update(session, Action::AcceptSuggestion(usize::from(n) - 1))
        }
        TuiEvent::PointerDown(col, row) if tui.slider_area.contains(Position::new(col, row)) => {
            tui.slider_held = true;
            update(session, Action::SetSlider(slider_value_at(tui.slider_area, col)))
        }
        TuiEvent::PointerDrag(col, _) if tui.slider_held => {
            update(session, Action::SetSlider(slider_value_at(tui.slider_area, col)))
        }
        TuiEvent::PointerUp(..) if tui.slider_held => {
            tui.slider_held = false;
            update(session, Action::CommitLetter)
        }
        _ => Effect::None,
    }
}
