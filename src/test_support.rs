//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::time::Duration;

use crate::core::menu::{MenuItem, MenuTree, TextEffect};
use crate::core::state::MenuSession;

/// Two categories: three phrases, and the three editing actions.
pub fn sample_tree() -> MenuTree {
    MenuTree::from_items(vec![
        MenuItem::branch(
            "Básico",
            vec![
                MenuItem::leaf("Sim"),
                MenuItem::leaf("Não"),
                MenuItem::leaf("Talvez"),
            ],
        ),
        MenuItem::branch(
            "Editar",
            vec![
                MenuItem::action(TextEffect::DeleteLastWord),
                MenuItem::action(TextEffect::DeleteLastSentence),
                MenuItem::action(TextEffect::ClearAll),
            ],
        ),
    ])
}

/// Creates a session over `sample_tree()` with the default 2.5s dwell.
pub fn test_session() -> MenuSession {
    MenuSession::new(sample_tree(), Duration::from_millis(2500))
}
