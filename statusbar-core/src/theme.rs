// statusbar-core/src/theme.rs
use crate::event::{Bus, Subscription};
use crossbeam::channel::Receiver;
use ratatui::style::Color;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Well-known color keys the strip container resolves.
pub mod keys {
    pub const BACKGROUND: &str = "statusBar.background";
    pub const FOREGROUND: &str = "statusBar.foreground";
    pub const BORDER: &str = "statusBar.border";
    pub const NO_FOLDER_BACKGROUND: &str = "statusBar.noFolderBackground";
    pub const NO_FOLDER_FOREGROUND: &str = "statusBar.noFolderForeground";
    pub const NO_FOLDER_BORDER: &str = "statusBar.noFolderBorder";
}

/// A named table of symbolic color keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    colors: HashMap<String, Color>,
}

impl Theme {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: HashMap::new(),
        }
    }

    /// The built-in dark theme with the strip's standard keys populated.
    pub fn default_dark() -> Self {
        let mut theme = Self::new("dark");
        theme
            .set(keys::BACKGROUND, Color::Rgb(0, 122, 204))
            .set(keys::FOREGROUND, Color::White)
            .set(keys::BORDER, Color::Rgb(0, 96, 160))
            .set(keys::NO_FOLDER_BACKGROUND, Color::Rgb(104, 42, 122))
            .set(keys::NO_FOLDER_FOREGROUND, Color::White)
            .set(keys::NO_FOLDER_BORDER, Color::Rgb(82, 33, 96));
        theme
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set(&mut self, key: impl Into<String>, color: Color) -> &mut Self {
        self.colors.insert(key.into(), color);
        self
    }

    pub fn color(&self, key: &str) -> Option<Color> {
        self.colors.get(key).copied()
    }
}

/// A literal color or a symbolic reference into the current theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryColor {
    Literal(Color),
    Theme(String),
}

impl EntryColor {
    pub fn theme(key: impl Into<String>) -> Self {
        Self::Theme(key.into())
    }

    pub fn is_theme(&self) -> bool {
        matches!(self, Self::Theme(_))
    }

    /// Resolve against `theme`. A key missing from the theme resolves to the
    /// terminal default (`Color::Reset`), never an error.
    pub fn resolve(&self, theme: &Theme) -> Color {
        match self {
            Self::Literal(color) => *color,
            Self::Theme(key) => theme.color(key).unwrap_or(Color::Reset),
        }
    }
}

/// Shared handle to the current theme plus its change bus.
///
/// `switch` replaces the current theme and notifies every subscriber;
/// renderers with symbolic colors hold a subscription for their lifetime.
#[derive(Clone)]
pub struct ThemeHandle {
    current: Rc<RefCell<Theme>>,
    bus: Bus<Theme>,
}

impl ThemeHandle {
    pub fn new(theme: Theme) -> Self {
        Self {
            current: Rc::new(RefCell::new(theme)),
            bus: Bus::new(),
        }
    }

    pub fn current(&self) -> Theme {
        self.current.borrow().clone()
    }

    pub fn switch(&self, theme: Theme) {
        *self.current.borrow_mut() = theme.clone();
        self.bus.publish(theme);
    }

    pub fn subscribe(&self) -> (Subscription<Theme>, Receiver<Theme>) {
        self.bus.subscribe()
    }

    #[cfg(test)]
    pub(crate) fn subscriber_count(&self) -> usize {
        self.bus.subscriber_count()
    }
}
