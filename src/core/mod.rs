//! # Core Board Logic
//!
//! This module contains the dwell menu, the letter picker and the text they
//! write into. It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • MenuSession (state)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │ Word list  │
//!     │  Adapter   │                          │  fetcher   │
//!     │ (ratatui)  │                          │ (reqwest)  │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`menu`]: `MenuItem` and the static `MenuTree`
//! - [`navigation`]: `NavigationStack`, the cursor over the tree
//! - [`dwell`]: `DwellController`, the press/release timing machine
//! - [`selection`]: progress → index mapping
//! - [`dispatch`]: runs a committed item
//! - [`buffer`]: `OutputBuffer` and its text transforms
//! - [`letters`]: slider letter picker
//! - [`words`]: word list suggestions
//! - [`state`]: `MenuSession`, all of the above in one place
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: settings and their override hierarchy

pub mod action;
pub mod buffer;
pub mod config;
pub mod dispatch;
pub mod dwell;
pub mod letters;
pub mod menu;
pub mod navigation;
pub mod selection;
pub mod state;
pub mod words;
