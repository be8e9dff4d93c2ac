// statusbar-core/src/render.rs
use crate::dispose::DisposeBag;
use crate::entry::EntryDescriptor;
use crate::schedule::Scheduler;
use crate::services::{MenuAction, Services};
use crate::theme::{EntryColor, Theme, ThemeHandle};
use crossbeam::channel::Receiver;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use std::rc::Rc;
use std::time::Duration;

/// Glyph rendered ahead of the text when an entry asks for a beak.
const BEAK: &str = "\u{25b4} ";

/// Visual state for one rendered entry.
///
/// Colors are resolved against the current theme at construction. An entry
/// with at least one symbolic color keeps a theme subscription for its
/// lifetime and re-resolves on every change; literal colors are applied once
/// and never touched again.
pub struct EntryRenderer {
    entry: EntryDescriptor,
    foreground: Option<Color>,
    background: Option<Color>,
    theme_rx: Option<Receiver<Theme>>,
    registrations: DisposeBag,
    disposed: bool,
}

impl EntryRenderer {
    pub fn new(entry: EntryDescriptor, theme: &ThemeHandle) -> Self {
        let current = theme.current();
        let foreground = entry.color.as_ref().map(|color| color.resolve(&current));
        let background = entry
            .background_color
            .as_ref()
            .map(|color| color.resolve(&current));

        let needs_theme = entry.color.as_ref().is_some_and(EntryColor::is_theme)
            || entry
                .background_color
                .as_ref()
                .is_some_and(EntryColor::is_theme);

        let mut registrations = DisposeBag::new();
        let theme_rx = if needs_theme {
            let (subscription, rx) = theme.subscribe();
            registrations.push(move || drop(subscription));
            Some(rx)
        } else {
            None
        };

        Self {
            entry,
            foreground,
            background,
            theme_rx,
            registrations,
            disposed: false,
        }
    }

    pub fn entry(&self) -> &EntryDescriptor {
        &self.entry
    }

    /// Whether a click activates a command.
    pub fn is_interactive(&self) -> bool {
        self.entry.command.is_some()
    }

    /// Set only when the descriptor carries a background color: the container
    /// fills its background fully instead of inheriting the strip's.
    pub fn fills_background(&self) -> bool {
        self.background.is_some()
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.entry.tooltip.as_deref()
    }

    pub fn foreground(&self) -> Option<Color> {
        self.foreground
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Drain pending theme changes and re-resolve symbolic colors against the
    /// most recent one. Entries with only literal colors have no receiver and
    /// return immediately.
    pub fn poll_theme(&mut self) {
        let Some(rx) = &self.theme_rx else { return };
        let mut latest = None;
        while let Ok(theme) = rx.try_recv() {
            latest = Some(theme);
        }
        if let Some(theme) = latest {
            self.apply_theme(&theme);
        }
    }

    fn apply_theme(&mut self, theme: &Theme) {
        if let Some(color @ EntryColor::Theme(_)) = &self.entry.color {
            self.foreground = Some(color.resolve(theme));
        }
        if let Some(color @ EntryColor::Theme(_)) = &self.entry.background_color {
            self.background = Some(color.resolve(theme));
        }
    }

    pub fn style(&self) -> Style {
        let mut style = Style::default();
        if let Some(foreground) = self.foreground {
            style = style.fg(foreground);
        }
        if let Some(background) = self.background {
            style = style.bg(background);
        }
        style
    }

    /// The renderable line for this entry.
    pub fn line(&self) -> Line<'_> {
        let style = self.style();
        let mut spans = Vec::with_capacity(2);
        if self.entry.show_beak {
            spans.push(Span::styled(BEAK, style));
        }
        spans.push(Span::styled(self.entry.text.as_str(), style));
        Line::from(spans)
    }

    /// Rendered width in cells.
    pub fn width(&self) -> u16 {
        let beak = if self.entry.show_beak {
            BEAK.chars().count()
        } else {
            0
        };
        (beak + self.entry.text.chars().count()) as u16
    }

    /// Release the theme subscription and stop reacting to theme changes.
    /// Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.registrations.dispose();
        self.theme_rx = None;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

/// Dispatch an entry's command: focus the editor surface if one exists,
/// record one telemetry event, then invoke the command on the next tick.
/// A failed command surfaces once through the notification sink and stops
/// there; nothing propagates back to the click site.
pub fn execute_command(services: &Services, scheduler: &Scheduler, id: &str, args: &[String]) {
    if let Some(editor) = &services.editor {
        editor.focus();
    }
    services
        .telemetry
        .public_log("actionExecuted", &[("id", id), ("from", "status bar")]);

    let commands = Rc::clone(&services.commands);
    let notifications = Rc::clone(&services.notifications);
    let id = id.to_string();
    let args = args.to_vec();
    let _detached = scheduler.schedule(Duration::ZERO, move || {
        if let Err(error) = commands.execute(&id, &args) {
            notifications.error(&error.to_string());
        }
    });
}

/// The shared "manage this extension" context-menu action.
///
/// Stateless apart from the extension id supplied at run time, so the strip
/// builds one instance lazily and every extension-contributed entry shares it.
#[derive(Debug)]
pub struct ManageExtensionAction {
    action: MenuAction,
}

impl Default for ManageExtensionAction {
    fn default() -> Self {
        Self::new()
    }
}

impl ManageExtensionAction {
    pub const COMMAND: &'static str = "extension.manage";

    pub fn new() -> Self {
        Self {
            action: MenuAction {
                id: Self::COMMAND.to_string(),
                label: "Manage Extension".to_string(),
            },
        }
    }

    pub fn menu_action(&self) -> MenuAction {
        self.action.clone()
    }

    pub fn run(&self, services: &Services, scheduler: &Scheduler, extension_id: &str) {
        execute_command(
            services,
            scheduler,
            &self.action.id,
            &[extension_id.to_string()],
        );
    }
}
