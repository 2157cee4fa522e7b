//! # TUI Components
//!
//! All UI components for the terminal board.
//!
//! Every component here is a transient, props-based wrapper: it borrows
//! what it needs from `MenuSession` for one frame and renders it. Nothing
//! is cached between frames, so drawing at tick rate is safe.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (screen, breadcrumb, status)
//! ├── menu_list.rs     (dwell items + progress gauge)
//! ├── letter_panel.rs  (slider keyboard + suggestions)
//! └── output_panel.rs  (composed text)
//! ```

pub mod letter_panel;
pub mod menu_list;
pub mod output_panel;
pub mod title_bar;

pub use letter_panel::LetterPanel;
pub use menu_list::MenuList;
pub use output_panel::OutputPanel;
pub use title_bar::TitleBar;
