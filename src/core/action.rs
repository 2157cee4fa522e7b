//! # Actions
//!
//! Everything that can happen on the board becomes an `Action`.
//! Finger goes down? That's `Action::Press(now)`.
//! Word list arrives? That's `Action::WordsLoaded(list)`.
//!
//! `update()` applies an action to the session and returns an `Effect`
//! telling the host what to do next. No I/O here.
//!
//! ```text
//! Session + Action  →  update()  →  Session' + Effect
//! ```
//!
//! `Effect::Redraw` is the render signal: the host redraws
//! `current_items()` with `highlighted()`. It follows every tick and every
//! committed selection.

use std::time::Instant;

use log::{debug, info, warn};

use crate::core::dispatch::dispatch;
use crate::core::selection::select_index;
use crate::core::state::MenuSession;
use crate::core::words::WordList;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Dwell menu
    Press(Instant),
    Release(Instant),
    Tick(Instant),

    // Letter picker
    SetSlider(u8),
    NudgeSlider(i16),
    CommitLetter,
    ToggleAlphabet,
    AcceptSuggestion(usize),

    // Background word-list fetch
    WordsLoaded(WordList),
    WordsFailed(String),

    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Redraw,
    Quit,
}

pub fn update(session: &mut MenuSession, action: Action) -> Effect {
    match action {
        Action::Press(now) => {
            if session.dwell.press(now) {
                debug!("Dwell started over {} items", session.current_items().len());
                Effect::Redraw
            } else {
                Effect::None
            }
        }
        Action::Tick(now) => match session.dwell.tick(now) {
            Some(_) => Effect::Redraw,
            None => Effect::None,
        },
        Action::Release(now) => {
            let Some(progress) = session.dwell.release(now) else {
                return Effect::None;
            };
            commit(session, progress);
            Effect::Redraw
        }
        Action::SetSlider(value) => {
            session.letters.set_value(value);
            Effect::Redraw
        }
        Action::NudgeSlider(delta) => {
            session.letters.nudge(delta);
            Effect::Redraw
        }
        Action::CommitLetter => {
            let symbol = session.letters.commit();
            session.buffer.push_str(&symbol.as_text());
            debug!("Letter committed: {:?}", symbol);
            Effect::Redraw
        }
        Action::ToggleAlphabet => {
            session.letters.toggle_mode();
            session.status_message = session.letters.mode().label();
            Effect::Redraw
        }
        Action::AcceptSuggestion(n) => {
            let Some(word) = session.suggestions().get(n).map(|w| w.to_string()) else {
                return Effect::None;
            };
            session.buffer.complete_word(&word);
            Effect::Redraw
        }
        Action::WordsLoaded(words) => {
            info!("Word list loaded: {} words", words.len());
            session.status_message = format!("{} palavras carregadas", words.len());
            session.words = Some(words);
            Effect::Redraw
        }
        Action::WordsFailed(message) => {
            warn!("Word list unavailable: {}", message);
            session.status_message = format!("Falha ao carregar palavras: {message}");
            Effect::Redraw
        }
        Action::Quit => Effect::Quit,
    }
}

/// Resolves the selection at `progress` and runs it. An empty list commits
/// nothing.
fn commit(session: &mut MenuSession, progress: f64) {
    let items = session.navigation.current_items();
    let Some(index) = select_index(progress, items.len()) else {
        debug!("Release over empty list, nothing to commit");
        return;
    };
    let item = items[index].clone();
    info!(
        "Committed index {} ('{}') at progress {:.1}",
        index,
        item.label(),
        progress
    );
    session.status_message = format!("Selecionado: {}", item.label());
    dispatch(&item, &mut session.navigation, &mut session.buffer);
}
