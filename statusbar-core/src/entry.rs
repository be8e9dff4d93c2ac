// statusbar-core/src/entry.rs
use crate::theme::EntryColor;

/// Which end of the strip an entry anchors to. Fixed at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Identifier of one rendered entry, unique within a strip.
pub type EntryId = u64;

/// Caller-supplied description of one status entry. Immutable once rendered.
///
/// Priorities order entries within one alignment side; ties keep insertion
/// order, and extremes are expressed with `i32::MIN`/`i32::MAX` rather than
/// any special-cased value.
#[derive(Debug, Clone, Default)]
pub struct EntryDescriptor {
    pub text: String,
    pub tooltip: Option<String>,
    /// Foreground color; symbolic theme references are re-resolved on every
    /// theme change.
    pub color: Option<EntryColor>,
    /// Background color; when set the container fills its background fully.
    pub background_color: Option<EntryColor>,
    /// Command activated by clicking the entry. Without it the entry renders
    /// as static text.
    pub command: Option<String>,
    pub command_args: Vec<String>,
    /// Render a beak glyph ahead of the text.
    pub show_beak: bool,
    /// Identifier of the contributing extension, if any. Enables the shared
    /// manage-extension context menu action.
    pub extension_id: Option<String>,
}

impl EntryDescriptor {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn with_color(mut self, color: EntryColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_background_color(mut self, color: EntryColor) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    pub fn with_command_args(mut self, args: Vec<String>) -> Self {
        self.command_args = args;
        self
    }

    pub fn with_beak(mut self) -> Self {
        self.show_beak = true;
        self
    }

    pub fn with_extension_id(mut self, extension_id: impl Into<String>) -> Self {
        self.extension_id = Some(extension_id.into());
        self
    }
}
