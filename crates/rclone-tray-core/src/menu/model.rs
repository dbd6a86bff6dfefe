//! Platform-neutral menu description.
//!
//! The host turns a [`Menu`] into native menu items and routes clicks back
//! through [`Menu::action`].

use std::{fmt, sync::Arc};

use async_trait::async_trait;

/// Behaviour attached to a menu item.
#[async_trait]
pub trait MenuAction: Send + Sync {
    /// Run the action. Failures are logged by the action itself.
    async fn invoke(&self);
}

/// A clickable menu entry.
#[derive(Clone)]
pub struct MenuItem {
    /// Stable item id, reported back by the platform on click.
    pub id: String,
    /// Visible label.
    pub text: String,
    /// Whether the item can be clicked.
    pub enabled: bool,
    /// Action run on click, if any.
    pub action: Option<Arc<dyn MenuAction>>,
}

impl MenuItem {
    /// Enabled item with an action.
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        action: Arc<dyn MenuAction>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            enabled: true,
            action: Some(action),
        }
    }

    /// Disabled, action-less item used as a label.
    pub fn label(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            enabled: false,
            action: None,
        }
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("id", &self.id)
            .field("text", &self.text)
            .field("enabled", &self.enabled)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

/// One row of a menu.
#[derive(Debug, Clone)]
pub enum MenuEntry {
    /// Clickable or label item.
    Item(MenuItem),
    /// Horizontal separator.
    Separator,
}

/// A tray context menu.
#[derive(Debug, Clone)]
pub struct Menu {
    /// Menu identifier.
    pub id: String,
    /// Rows, top to bottom.
    pub entries: Vec<MenuEntry>,
}

impl Menu {
    /// Empty menu.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entries: Vec::new(),
        }
    }

    /// Append an item.
    pub fn with_item(mut self, item: MenuItem) -> Self {
        self.entries.push(MenuEntry::Item(item));
        self
    }

    /// Append a separator.
    pub fn with_separator(mut self) -> Self {
        self.entries.push(MenuEntry::Separator);
        self
    }

    /// Items in display order, separators skipped.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.entries.iter().filter_map(|entry| match entry {
            MenuEntry::Item(item) => Some(item),
            MenuEntry::Separator => None,
        })
    }

    /// Action of the enabled item with `item_id`.
    pub fn action(&self, item_id: &str) -> Option<Arc<dyn MenuAction>> {
        self.items()
            .find(|item| item.id == item_id && item.enabled)
            .and_then(|item| item.action.clone())
    }
}
