//! # Session State
//!
//! Everything one board needs at runtime, in one place. There are no
//! globals: the host owns a `MenuSession` and feeds it `Action`s.
//!
//! ```text
//! MenuSession
//! ├── tree: Arc<MenuTree>            // static menu definition
//! ├── navigation: NavigationStack    // visible list + history
//! ├── dwell: DwellController         // press/release timing
//! ├── buffer: OutputBuffer           // composed text
//! ├── letters: LetterPicker          // slider keyboard
//! ├── words: Option<WordList>        // suggestions, once fetched
//! ├── suggestion_limit: usize
//! └── status_message: String         // title bar text
//! ```
//!
//! State changes only happen through `update(session, action)` in action.rs.

use std::sync::Arc;
use std::time::Duration;

use crate::core::buffer::OutputBuffer;
use crate::core::config::{DEFAULT_SUGGESTION_LIMIT, ResolvedConfig};
use crate::core::dwell::DwellController;
use crate::core::letters::LetterPicker;
use crate::core::menu::{MenuItem, MenuTree};
use crate::core::navigation::NavigationStack;
use crate::core::selection::select_index;
use crate::core::words::WordList;

pub struct MenuSession {
    pub tree: Arc<MenuTree>,
    pub navigation: NavigationStack,
    pub dwell: DwellController,
    pub buffer: OutputBuffer,
    pub letters: LetterPicker,
    pub words: Option<WordList>,
    pub suggestion_limit: usize,
    pub status_message: String,
}

impl MenuSession {
    pub fn new(tree: MenuTree, target: Duration) -> Self {
        let tree = Arc::new(tree);
        Self {
            navigation: NavigationStack::new(tree.clone()),
            tree,
            dwell: DwellController::new(target),
            buffer: OutputBuffer::new(),
            letters: LetterPicker::new(),
            words: None,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            status_message: String::from("Segure para escolher"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut session = Self::new(
            MenuTree::from_categories(&config.categories),
            config.target_duration,
        );
        session.suggestion_limit = config.suggestion_limit;
        session
    }

    pub fn current_items(&self) -> &[MenuItem] {
        self.navigation.current_items()
    }

    /// The item under the dwell cursor, only while a press is active.
    pub fn highlighted(&self) -> Option<usize> {
        if !self.dwell.is_pressing() {
            return None;
        }
        select_index(self.dwell.progress(), self.current_items().len())
    }

    /// Completions for the word currently being typed.
    pub fn suggestions(&self) -> Vec<&str> {
        match &self.words {
            Some(words) => words.suggestions(self.buffer.partial_word(), self.suggestion_limit),
            None => Vec::new(),
        }
    }
}
