//! # Navigation Stack
//!
//! Cursor over the menu tree: the visible list plus the ancestor lists
//! that `ascend` returns to. `history` is empty exactly when `current`
//! is the root list.

use std::sync::Arc;

use log::{debug, warn};

use crate::core::menu::{MenuItem, MenuTree};

#[derive(Debug, Clone)]
pub struct NavigationStack {
    tree: Arc<MenuTree>,
    current: Vec<MenuItem>,
    history: Vec<Vec<MenuItem>>,
    /// Labels of the branches descended into, parallel to `history`.
    path: Vec<String>,
}

impl NavigationStack {
    pub fn new(tree: Arc<MenuTree>) -> Self {
        let current = tree.root().to_vec();
        Self {
            tree,
            current,
            history: Vec::new(),
            path: Vec::new(),
        }
    }

    pub fn current_items(&self) -> &[MenuItem] {
        &self.current
    }

    pub fn is_at_root(&self) -> bool {
        self.history.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Branch labels from the root down to the current list.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Opens `children` of the branch labeled `label`, with `Back` first.
    pub fn descend(&mut self, label: &str, children: &[MenuItem]) {
        let mut next = Vec::with_capacity(children.len() + 1);
        next.push(MenuItem::Back);
        next.extend_from_slice(children);

        let previous = std::mem::replace(&mut self.current, next);
        self.history.push(previous);
        self.path.push(label.to_string());
        debug!("Descended into '{}' (depth {})", label, self.depth());
    }

    pub fn ascend(&mut self) {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                self.path.pop();
                debug!("Ascended to depth {}", self.depth());
            }
            None => {
                warn!("Ascend requested with empty history, resetting to root");
                self.reset_to_root();
            }
        }
    }

    pub fn reset_to_root(&mut self) {
        self.current = self.tree.root().to_vec();
        self.history.clear();
        self.path.clear();
    }
}
