use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    SwitchScreen,

    // Dwell signals from the keyboard
    PressKey,
    ReleaseKey,

    // Left mouse button, with (column, row)
    PointerDown(u16, u16),
    PointerDrag(u16, u16),
    PointerUp(u16, u16),

    // Letters screen
    Nudge(i16),
    Commit,
    ToggleMode,
    Digit(u8),

    Resize,
}

/// Poll for an event with timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> std::io::Result<Option<TuiEvent>> {
    if event::poll(timeout)? {
        Ok(translate(event::read()?))
    } else {
        Ok(None)
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> std::io::Result<Option<TuiEvent>> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Maps a raw crossterm event to a `TuiEvent`, dropping what the board
/// doesn't use.
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Mouse(mouse_event) => {
            let (col, row) = (mouse_event.column, mouse_event.row);
            match mouse_event.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(TuiEvent::PointerDown(col, row)),
                MouseEventKind::Drag(MouseButton::Left) => Some(TuiEvent::PointerDrag(col, row)),
                MouseEventKind::Up(MouseButton::Left) => Some(TuiEvent::PointerUp(col, row)),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    log::debug!(
        "Key event: {:?} {:?} with modifiers {:?}",
        key_event.code,
        key_event.kind,
        key_event.modifiers
    );

    // Space is the only key whose release matters; auto-repeat never does.
    if key_event.code == KeyCode::Char(' ') {
        return match key_event.kind {
            KeyEventKind::Press => Some(TuiEvent::PressKey),
            KeyEventKind::Release => Some(TuiEvent::ReleaseKey),
            KeyEventKind::Repeat => None,
        };
    }
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Esc) | (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Tab) => Some(TuiEvent::SwitchScreen),
        (_, KeyCode::Enter) => Some(TuiEvent::Commit),
        (_, KeyCode::Char('m')) => Some(TuiEvent::ToggleMode),
        (_, KeyCode::Char(c @ '1'..='9')) => c.to_digit(10).map(|d| TuiEvent::Digit(d as u8)),
        (_, KeyCode::Left) => Some(TuiEvent::Nudge(-1)),
        (_, KeyCode::Right) => Some(TuiEvent::Nudge(1)),
        (_, KeyCode::Down) => Some(TuiEvent::Nudge(-5)),
        (_, KeyCode::Up) => Some(TuiEvent::Nudge(5)),
        _ => None,
    }
}
