//! # Menu Tree
//!
//! The static menu definition: categories of phrases plus the text-editing
//! actions. Built once at startup from configuration and never mutated.
//!
//! ```text
//! root
//! ├── Branch "Básico"
//! │   ├── Leaf "Sim"
//! │   └── Leaf "Não"
//! └── Branch "Editar"
//!     ├── CustomAction DeleteLastWord
//!     └── CustomAction ClearAll
//! ```
//!
//! `Back` never appears in the tree itself. `NavigationStack::descend` inserts
//! it at index 0 of every list it pushes.

use serde::{Deserialize, Serialize};

use crate::core::config::ItemConfig;

/// Label shown for the synthetic back entry.
pub const BACK_LABEL: &str = "Voltar";

/// A text transform applied to the output buffer by a `CustomAction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextEffect {
    DeleteLastWord,
    DeleteLastSentence,
    ClearAll,
}

impl TextEffect {
    /// Default menu label when the configuration doesn't provide one.
    pub fn default_label(self) -> &'static str {
        match self {
            TextEffect::DeleteLastWord => "Apagar palavra",
            TextEffect::DeleteLastSentence => "Apagar frase",
            TextEffect::ClearAll => "Limpar tudo",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MenuItem {
    /// Commits `text` to the buffer and returns to the root.
    Leaf { label: String, text: String },
    /// Opens `children` as a new list (prefixed with `Back`).
    Branch { label: String, children: Vec<MenuItem> },
    /// Pops one navigation level.
    Back,
    /// Edits the buffer without moving.
    CustomAction { label: String, effect: TextEffect },
}

impl MenuItem {
    pub fn leaf(text: impl Into<String>) -> Self {
        let text = text.into();
        MenuItem::Leaf {
            label: text.clone(),
            text,
        }
    }

    pub fn branch(label: impl Into<String>, children: Vec<MenuItem>) -> Self {
        MenuItem::Branch {
            label: label.into(),
            children,
        }
    }

    pub fn action(effect: TextEffect) -> Self {
        MenuItem::CustomAction {
            label: effect.default_label().to_string(),
            effect,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MenuItem::Leaf { label, .. }
            | MenuItem::Branch { label, .. }
            | MenuItem::CustomAction { label, .. } => label,
            MenuItem::Back => BACK_LABEL,
        }
    }

    pub fn is_back(&self) -> bool {
        matches!(self, MenuItem::Back)
    }

    /// Converts one configured entry into a menu item.
    fn from_config(entry: &ItemConfig) -> Self {
        match entry {
            ItemConfig::Phrase(text) => MenuItem::leaf(text.as_str()),
            ItemConfig::Group { label, items } => MenuItem::Branch {
                label: label.clone(),
                children: items.iter().map(MenuItem::from_config).collect(),
            },
            ItemConfig::LabeledPhrase { label, text } => MenuItem::Leaf {
                label: label.clone(),
                text: text.clone(),
            },
            ItemConfig::Action { action, label } => MenuItem::CustomAction {
                label: label
                    .clone()
                    .unwrap_or_else(|| action.default_label().to_string()),
                effect: *action,
            },
        }
    }
}

/// A top-level category as it appears in configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CategoryConfig {
    pub label: String,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

/// The immutable menu: the ordered root list of category branches.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuTree {
    root: Vec<MenuItem>,
}

impl MenuTree {
    /// Builds the tree from configured categories, preserving their order.
    pub fn from_categories(categories: &[CategoryConfig]) -> Self {
        let root = categories
            .iter()
            .map(|category| MenuItem::Branch {
                label: category.label.clone(),
                children: category.items.iter().map(MenuItem::from_config).collect(),
            })
            .collect();
        Self { root }
    }

    /// Wraps an already-built root list.
    pub fn from_items(root: Vec<MenuItem>) -> Self {
        debug_assert!(!root.iter().any(MenuItem::is_back));
        Self { root }
    }

    pub fn root(&self) -> &[MenuItem] {
        &self.root
    }
}

/// The phrase board used when no categories are configured.
pub fn default_categories() -> Vec<CategoryConfig> {
    fn phrases(items: &[&str]) -> Vec<ItemConfig> {
        items.iter().map(|s| ItemConfig::Phrase(s.to_string())).collect()
    }

    vec![
        CategoryConfig {
            label: "Básico".to_string(),
            items: phrases(&["Sim", "Não", "Talvez", "Obrigado", "Por favor"]),
        },
        CategoryConfig {
            label: "Necessidades".to_string(),
            items: phrases(&[
                "Estou com fome",
                "Estou com sede",
                "Preciso ir ao banheiro",
                "Quero descansar",
            ]),
        },
        CategoryConfig {
            label: "Sentimentos".to_string(),
            items: phrases(&["Estou feliz", "Estou triste", "Estou com dor", "Estou cansado"]),
        },
        CategoryConfig {
            label: "Conversa".to_string(),
            items: vec![
                ItemConfig::Phrase("Oi, tudo bem?".to_string()),
                ItemConfig::Phrase("Como você está?".to_string()),
                ItemConfig::Group {
                    label: "Despedidas".to_string(),
                    items: phrases(&["Tchau", "Até logo", "Boa noite"]),
                },
            ],
        },
        CategoryConfig {
            label: "Editar".to_string(),
            items: vec![
                ItemConfig::Action {
                    action: TextEffect::DeleteLastWord,
                    label: None,
                },
                ItemConfig::Action {
                    action: TextEffect::DeleteLastSentence,
                    label: None,
                },
                ItemConfig::Action {
                    action: TextEffect::ClearAll,
                    label: None,
                },
            ],
        },
    ]
}
