//! Executes a committed menu item.
//!
//! | Item           | Buffer                 | Navigation      |
//! |----------------|------------------------|-----------------|
//! | `Back`         | unchanged              | ascend          |
//! | `Leaf`         | append `text + "\n"`   | reset to root   |
//! | `Branch`       | unchanged              | descend         |
//! | `CustomAction` | apply effect           | unchanged       |

use log::info;

use crate::core::buffer::OutputBuffer;
use crate::core::menu::MenuItem;
use crate::core::navigation::NavigationStack;

pub fn dispatch(item: &MenuItem, navigation: &mut NavigationStack, buffer: &mut OutputBuffer) {
    match item {
        MenuItem::Back => navigation.ascend(),
        MenuItem::Leaf { text, .. } => {
            buffer.append_phrase(text);
            navigation.reset_to_root();
        }
        MenuItem::Branch { label, children } => navigation.descend(label, children),
        MenuItem::CustomAction { effect, .. } => {
            info!("Applying {:?} to buffer", effect);
            buffer.apply(*effect);
        }
    }
}
