// statusbar-core/src/strip.rs
use crate::config::StatusBarConfig;
use crate::dispose::Disposer;
use crate::entry::{Alignment, EntryDescriptor, EntryId};
use crate::event::Subscription;
use crate::message::MessageController;
use crate::order::{self, EntryOrder, EntryRecord};
use crate::registry::EntryRegistry;
use crate::render::{EntryRenderer, ManageExtensionAction, execute_command};
use crate::schedule::Scheduler;
use crate::services::{ContextMenuRequest, Services, WorkspaceState, WorkspaceHandle};
use crate::theme::{Theme, ThemeHandle, keys};
use crossbeam::channel::Receiver;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use std::cell::RefCell;
use std::collections::HashMap;
use std::ops::Range;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Height of the strip in terminal rows.
pub const STRIP_HEIGHT: u16 = 1;

/// Gap between adjacent entries, in cells.
const ENTRY_GAP: u16 = 1;

/// Live state shared between the strip, entry handles and the message
/// controller: the ordered container list, the renderers keyed by id, and the
/// last render geometry for hit testing.
pub(crate) struct StripInner {
    order: EntryOrder,
    renderers: HashMap<EntryId, EntryRenderer>,
    next_id: EntryId,
    theme: ThemeHandle,
    container_style: Style,
    border_color: Option<Color>,
    hits: Vec<(EntryId, Range<u16>)>,
    last_area: Option<Rect>,
    geometry: (u16, u16),
}

impl StripInner {
    /// Positional insertion: the ordering engine picks the slot, then the
    /// renderer is built for it. Returns the new entry's id.
    pub(crate) fn insert(
        &mut self,
        entry: EntryDescriptor,
        alignment: Alignment,
        priority: i32,
    ) -> EntryId {
        let id = self.allocate_id();
        self.order.insert(EntryRecord {
            id,
            alignment,
            priority,
        });
        let renderer = EntryRenderer::new(entry, &self.theme);
        self.renderers.insert(id, renderer);
        id
    }

    /// Direct append for the pre-sorted static set; no positional scan.
    fn append(&mut self, entry: EntryDescriptor, alignment: Alignment, priority: i32) -> EntryId {
        let id = self.allocate_id();
        self.order.push(EntryRecord {
            id,
            alignment,
            priority,
        });
        let renderer = EntryRenderer::new(entry, &self.theme);
        self.renderers.insert(id, renderer);
        id
    }

    /// Remove the container record and dispose its renderer. Both steps
    /// always run; calling again for the same id is a no-op.
    pub(crate) fn remove(&mut self, id: EntryId) -> bool {
        let existed = self.order.remove(id);
        if let Some(mut renderer) = self.renderers.remove(&id) {
            renderer.dispose();
        }
        existed
    }

    fn allocate_id(&mut self) -> EntryId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn hit(&self, column: u16) -> Option<EntryId> {
        self.hits
            .iter()
            .find(|(_, range)| range.contains(&column))
            .map(|(id, _)| *id)
    }
}

/// Removal handle for one entry.
///
/// Disposing removes exactly that entry's container and releases its
/// renderer; repeated calls are no-ops. Dropping the handle without disposing
/// leaves the entry on the strip.
pub struct EntryHandle {
    id: EntryId,
    disposer: Disposer,
}

impl EntryHandle {
    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn dispose(&mut self) {
        self.disposer.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.disposer.is_disposed()
    }
}

/// Disposer for a transient message: cancels timers that have not fired and
/// removes the entry if it was already shown. Safe to call more than once.
pub struct MessageHandle {
    disposer: Disposer,
}

impl MessageHandle {
    pub fn dispose(&mut self) {
        self.disposer.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.disposer.is_disposed()
    }
}

/// The status strip controller.
///
/// Owns the live container list and the single transient-message slot,
/// bootstraps statically-declared entries, and routes mouse interaction into
/// entry commands and the shared manage-extension action.
pub struct StatusBar {
    inner: Rc<RefCell<StripInner>>,
    scheduler: Scheduler,
    messages: MessageController,
    services: Services,
    workspace: WorkspaceHandle,
    workspace_rx: Receiver<WorkspaceState>,
    _workspace_sub: Subscription<WorkspaceState>,
    theme_rx: Receiver<Theme>,
    _theme_sub: Subscription<Theme>,
    manage_action: Option<Rc<ManageExtensionAction>>,
}

impl StatusBar {
    pub fn new(theme: ThemeHandle, workspace: WorkspaceHandle, services: Services) -> Self {
        let scheduler = Scheduler::new();
        let (theme_sub, theme_rx) = theme.subscribe();
        let (workspace_sub, workspace_rx) = workspace.subscribe();

        let inner = Rc::new(RefCell::new(StripInner {
            order: EntryOrder::new(),
            renderers: HashMap::new(),
            next_id: 0,
            theme,
            container_style: Style::default(),
            border_color: None,
            hits: Vec::new(),
            last_area: None,
            geometry: (0, 0),
        }));

        let messages = MessageController::new(Rc::downgrade(&inner), scheduler.clone());

        let mut bar = Self {
            inner,
            scheduler,
            messages,
            services,
            workspace,
            workspace_rx,
            _workspace_sub: workspace_sub,
            theme_rx,
            _theme_sub: theme_sub,
            manage_action: None,
        };
        bar.update_styles();
        bar
    }

    /// Render the statically-declared entries.
    ///
    /// The whole set is stable-sorted once by the alignment/priority rule and
    /// appended directly; no per-item positional search. Config names without
    /// a registered declaration are skipped (a host may register fewer
    /// entries than its config mentions).
    pub fn bootstrap(&mut self, registry: &EntryRegistry, config: &StatusBarConfig) {
        let mut declared = Vec::new();
        for item in &config.entry {
            let Some(declaration) = registry.get(&item.name) else {
                continue;
            };
            let alignment = item
                .alignment
                .map(|a| a.to_alignment())
                .unwrap_or(declaration.alignment);
            let priority = item.priority.unwrap_or(declaration.priority);
            declared.push(((declaration.factory)(&self.services), alignment, priority));
        }

        order::sort_declarations(&mut declared, |(_, alignment, priority)| {
            (*alignment, *priority)
        });

        let mut inner = self.inner.borrow_mut();
        for (entry, alignment, priority) in declared {
            inner.append(entry, alignment, priority);
        }
    }

    /// Add one entry at the position the ordering engine derives from its
    /// alignment and priority. The returned handle removes the container and
    /// disposes the renderer; disposal is idempotent.
    pub fn add_entry(
        &mut self,
        entry: EntryDescriptor,
        alignment: Alignment,
        priority: i32,
    ) -> EntryHandle {
        let id = self.inner.borrow_mut().insert(entry, alignment, priority);
        let weak = Rc::downgrade(&self.inner);
        EntryHandle {
            id,
            disposer: Disposer::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().remove(id);
                }
            }),
        }
    }

    /// Show a transient status message, superseding any previous one.
    ///
    /// `delay_by` postpones display (zero means the next tick, never
    /// synchronously); `auto_dispose_after` removes the message that long
    /// after it becomes visible, `None` keeps it until disposed.
    pub fn set_message(
        &mut self,
        text: impl Into<String>,
        auto_dispose_after: Option<Duration>,
        delay_by: Duration,
    ) -> MessageHandle {
        MessageHandle {
            disposer: self
                .messages
                .set_message(text.into(), auto_dispose_after, delay_by),
        }
    }

    /// Pass-through geometry notification from the outer layout.
    pub fn layout(&mut self, width: u16, height: u16) {
        self.inner.borrow_mut().geometry = (width, height);
    }

    pub fn geometry(&self) -> (u16, u16) {
        self.inner.borrow().geometry
    }

    /// Pump change notifications and run due timers. Call once per host tick.
    pub fn update(&mut self, now: Instant) {
        let mut theme_changed = false;
        while self.theme_rx.try_recv().is_ok() {
            theme_changed = true;
        }
        let mut workspace_changed = false;
        while self.workspace_rx.try_recv().is_ok() {
            workspace_changed = true;
        }
        if theme_changed || workspace_changed {
            self.update_styles();
        }

        {
            let mut inner = self.inner.borrow_mut();
            for renderer in inner.renderers.values_mut() {
                renderer.poll_theme();
            }
        }

        self.scheduler.run_due(now);
    }

    /// Recompute the container colors for the current workspace state. An
    /// empty workspace uses the no-folder color pair.
    pub fn update_styles(&mut self) {
        let (background_key, foreground_key, border_key) = match self.workspace.state() {
            WorkspaceState::Empty => (
                keys::NO_FOLDER_BACKGROUND,
                keys::NO_FOLDER_FOREGROUND,
                keys::NO_FOLDER_BORDER,
            ),
            WorkspaceState::HasFolder => (keys::BACKGROUND, keys::FOREGROUND, keys::BORDER),
        };

        let mut inner = self.inner.borrow_mut();
        let theme = inner.theme.current();
        let mut style = Style::default();
        if let Some(background) = theme.color(background_key) {
            style = style.bg(background);
        }
        if let Some(foreground) = theme.color(foreground_key) {
            style = style.fg(foreground);
        }
        inner.container_style = style;
        inner.border_color = theme.color(border_key);
    }

    pub fn container_style(&self) -> Style {
        self.inner.borrow().container_style
    }

    /// Color for the separator the host may paint above the strip.
    pub fn border_color(&self) -> Option<Color> {
        self.inner.borrow().border_color
    }

    /// Paint the strip into `area` (expected `STRIP_HEIGHT` rows tall).
    ///
    /// Left-aligned containers flow from the left edge, right-aligned ones
    /// are right-aligned, both in list order. Hit regions are recorded for
    /// mouse dispatch.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let inner = &mut *self.inner.borrow_mut();
        inner.last_area = Some(area);
        buf.set_style(area, inner.container_style);
        inner.hits.clear();

        if area.width == 0 || area.height == 0 {
            return;
        }

        let order = &inner.order;
        let renderers = &inner.renderers;
        let hits = &mut inner.hits;

        let mut x = area.x;
        for record in order.ordered(Alignment::Left) {
            let Some(renderer) = renderers.get(&record.id) else {
                continue;
            };
            if x >= area.right() {
                break;
            }
            let width = renderer.width().min(area.right() - x);
            if width == 0 {
                continue;
            }
            buf.set_line(x, area.y, &renderer.line(), width);
            hits.push((record.id, x..x + width));
            x += width + ENTRY_GAP;
        }
        let left_end = x;

        let right: Vec<(EntryId, u16)> = order
            .ordered(Alignment::Right)
            .filter_map(|record| {
                renderers
                    .get(&record.id)
                    .map(|renderer| (record.id, renderer.width()))
            })
            .collect();
        if right.is_empty() {
            return;
        }

        let gaps = (right.len() as u16 - 1) * ENTRY_GAP;
        let total: u16 = right.iter().map(|(_, width)| width).sum::<u16>() + gaps;
        let mut x = area.right().saturating_sub(total).max(left_end);

        for (id, width) in right {
            if x >= area.right() {
                break;
            }
            let Some(renderer) = renderers.get(&id) else {
                continue;
            };
            let width = width.min(area.right() - x);
            buf.set_line(x, area.y, &renderer.line(), width);
            hits.push((id, x..x + width));
            x += width + ENTRY_GAP;
        }
    }

    /// The entry occupying `column` in the last rendered frame.
    pub fn hit_test(&self, column: u16) -> Option<EntryId> {
        self.inner.borrow().hit(column)
    }

    /// Tooltip of the entry under `column`, for the host's hover surface.
    pub fn tooltip_at(&self, column: u16) -> Option<String> {
        let inner = self.inner.borrow();
        let id = inner.hit(column)?;
        inner
            .renderers
            .get(&id)
            .and_then(|renderer| renderer.tooltip())
            .map(str::to_string)
    }

    /// Route a mouse event into the strip. Left click activates an entry's
    /// command; right click offers the manage action for extension entries.
    /// Events outside the strip's row are ignored.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        let on_strip = self
            .inner
            .borrow()
            .last_area
            .is_some_and(|area| event.row == area.y);
        if !on_strip {
            return;
        }

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.click(event.column),
            MouseEventKind::Down(MouseButton::Right) => {
                self.context_menu(event.column, event.row)
            }
            _ => {}
        }
    }

    fn click(&mut self, column: u16) {
        let command = {
            let inner = self.inner.borrow();
            inner.hit(column).and_then(|id| {
                let entry = inner.renderers.get(&id)?.entry();
                entry
                    .command
                    .clone()
                    .map(|command| (command, entry.command_args.clone()))
            })
        };

        if let Some((command, args)) = command {
            execute_command(&self.services, &self.scheduler, &command, &args);
        }
    }

    fn context_menu(&mut self, column: u16, row: u16) {
        let extension_id = {
            let inner = self.inner.borrow();
            inner
                .hit(column)
                .and_then(|id| inner.renderers.get(&id)?.entry().extension_id.clone())
        };
        let Some(extension_id) = extension_id else {
            return;
        };

        let action = self
            .manage_action
            .get_or_insert_with(|| Rc::new(ManageExtensionAction::new()));
        self.services.context_menu.show(ContextMenuRequest {
            anchor: (column, row),
            actions: vec![action.menu_action()],
            context: &extension_id,
        });
    }

    /// Priorities of the live containers on one side, in visual order.
    pub fn priorities(&self, alignment: Alignment) -> Vec<i32> {
        self.inner
            .borrow()
            .order
            .ordered(alignment)
            .map(|record| record.priority)
            .collect()
    }

    /// Texts of the live containers on one side, in visual order.
    pub fn texts(&self, alignment: Alignment) -> Vec<String> {
        let inner = self.inner.borrow();
        inner
            .order
            .ordered(alignment)
            .filter_map(|record| inner.renderers.get(&record.id))
            .map(|renderer| renderer.entry().text.clone())
            .collect()
    }

    pub fn entry_count(&self) -> usize {
        self.inner.borrow().order.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigFile, StatusBarConfig};
    use crate::register_entry;
    use crate::services::testing::{Recorder, recording_services};
    use crate::theme::EntryColor;
    use crossterm::event::KeyModifiers;

    fn test_bar() -> (Rc<Recorder>, StatusBar, ThemeHandle, WorkspaceHandle) {
        let theme = ThemeHandle::new(Theme::default_dark());
        let workspace = WorkspaceHandle::new(WorkspaceState::HasFolder);
        let (recorder, services) = recording_services();
        let bar = StatusBar::new(theme.clone(), workspace.clone(), services);
        (recorder, bar, theme, workspace)
    }

    fn mouse(kind: MouseEventKind, column: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn strip_buffer() -> (Rect, Buffer) {
        let area = Rect::new(0, 0, 60, STRIP_HEIGHT);
        (area, Buffer::empty(area))
    }

    #[test]
    fn test_left_entries_scan_non_increasing() {
        let (_recorder, mut bar, _theme, _workspace) = test_bar();
        for priority in [10, 50, 30, 50, 0] {
            bar.add_entry(
                EntryDescriptor::text(format!("p{priority}")),
                Alignment::Left,
                priority,
            );
        }

        assert_eq!(bar.priorities(Alignment::Left), vec![50, 50, 30, 10, 0]);
    }

    #[test]
    fn test_right_entries_scan_non_decreasing() {
        let (_recorder, mut bar, _theme, _workspace) = test_bar();
        for priority in [40, 10, 90, 10] {
            bar.add_entry(
                EntryDescriptor::text(format!("p{priority}")),
                Alignment::Right,
                priority,
            );
        }

        assert_eq!(bar.priorities(Alignment::Right), vec![10, 10, 40, 90]);
    }

    #[test]
    fn test_equal_priority_preserves_insertion_order() {
        let (_recorder, mut bar, _theme, _workspace) = test_bar();
        bar.add_entry(EntryDescriptor::text("first"), Alignment::Right, 5);
        bar.add_entry(EntryDescriptor::text("second"), Alignment::Right, 5);

        assert_eq!(bar.texts(Alignment::Right), vec!["first", "second"]);
    }

    #[test]
    fn test_dispose_removes_exactly_one_entry() {
        let (_recorder, mut bar, _theme, _workspace) = test_bar();
        let _keep_a = bar.add_entry(EntryDescriptor::text("a"), Alignment::Left, 10);
        let mut drop_b = bar.add_entry(EntryDescriptor::text("b"), Alignment::Left, 5);
        let _keep_c = bar.add_entry(EntryDescriptor::text("c"), Alignment::Left, 1);

        drop_b.dispose();
        assert_eq!(bar.texts(Alignment::Left), vec!["a", "c"]);

        drop_b.dispose();
        assert_eq!(bar.texts(Alignment::Left), vec!["a", "c"]);
        assert!(drop_b.is_disposed());
    }

    #[test]
    fn test_click_runs_command_once_with_one_telemetry_record() {
        let (recorder, mut bar, _theme, _workspace) = test_bar();
        bar.add_entry(
            EntryDescriptor::text("2 problems")
                .with_command("problems.focus")
                .with_command_args(vec!["warnings".to_string()]),
            Alignment::Left,
            0,
        );

        let (area, mut buf) = strip_buffer();
        bar.render(area, &mut buf);

        bar.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0));
        assert_eq!(recorder.telemetry.borrow().len(), 1);
        assert!(recorder.executed.borrow().is_empty());

        bar.update(Instant::now() + Duration::from_millis(5));
        assert_eq!(
            *recorder.executed.borrow(),
            vec![(
                "problems.focus".to_string(),
                vec!["warnings".to_string()]
            )]
        );
        assert_eq!(recorder.focus_count.get(), 1);
    }

    #[test]
    fn test_click_on_static_entry_is_inert() {
        let (recorder, mut bar, _theme, _workspace) = test_bar();
        bar.add_entry(EntryDescriptor::text("UTF-8"), Alignment::Left, 0);

        let (area, mut buf) = strip_buffer();
        bar.render(area, &mut buf);
        bar.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0));
        bar.update(Instant::now() + Duration::from_millis(5));

        assert!(recorder.executed.borrow().is_empty());
        assert!(recorder.telemetry.borrow().is_empty());
    }

    #[test]
    fn test_failed_command_notifies_and_stops() {
        let (recorder, mut bar, _theme, _workspace) = test_bar();
        bar.add_entry(
            EntryDescriptor::text("sync").with_command("test.fail"),
            Alignment::Left,
            0,
        );

        let (area, mut buf) = strip_buffer();
        bar.render(area, &mut buf);
        bar.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0));
        bar.update(Instant::now() + Duration::from_millis(5));

        assert_eq!(recorder.errors.borrow().len(), 1);
    }

    #[test]
    fn test_right_click_offers_manage_action_for_extension_entries() {
        let (recorder, mut bar, _theme, _workspace) = test_bar();
        bar.add_entry(
            EntryDescriptor::text("spell: en").with_extension_id("vendor.spellcheck"),
            Alignment::Right,
            0,
        );

        let (area, mut buf) = strip_buffer();
        bar.render(area, &mut buf);
        let column = area.right() - 1;

        bar.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Right), column));
        bar.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Right), column));

        assert_eq!(
            *recorder.menus.borrow(),
            vec!["vendor.spellcheck".to_string(), "vendor.spellcheck".to_string()]
        );
        // One shared action instance serves every request.
        assert!(bar.manage_action.is_some());
    }

    #[test]
    fn test_update_styles_follows_workspace_state() {
        let (_recorder, mut bar, _theme, workspace) = test_bar();
        assert_eq!(
            bar.container_style().bg,
            Some(Color::Rgb(0, 122, 204))
        );

        workspace.set_state(WorkspaceState::Empty);
        bar.update(Instant::now());

        assert_eq!(
            bar.container_style().bg,
            Some(Color::Rgb(104, 42, 122))
        );
        assert_eq!(bar.border_color(), Some(Color::Rgb(82, 33, 96)));
    }

    #[test]
    fn test_theme_switch_recolors_rendered_entry() {
        let (_recorder, mut bar, theme, _workspace) = test_bar();
        bar.add_entry(
            EntryDescriptor::text("debugging")
                .with_background_color(EntryColor::theme("statusBar.debuggingBackground")),
            Alignment::Left,
            0,
        );

        let mut with_debug = Theme::default_dark();
        with_debug.set("statusBar.debuggingBackground", Color::Rgb(204, 102, 51));
        theme.switch(with_debug);
        bar.update(Instant::now());

        let (area, mut buf) = strip_buffer();
        bar.render(area, &mut buf);
        assert_eq!(buf[(0, 0)].style().bg, Some(Color::Rgb(204, 102, 51)));
    }

    #[test]
    fn test_bootstrap_pre_sorts_static_entries() {
        let (_recorder, mut bar, _theme, _workspace) = test_bar();

        let mut registry = EntryRegistry::new();
        register_entry!(registry, "mode", Alignment::Left, 10, |_services| {
            EntryDescriptor::text("mode")
        });
        register_entry!(registry, "branch", Alignment::Left, 100, |_services| {
            EntryDescriptor::text("branch")
        });
        register_entry!(registry, "position", Alignment::Right, 80, |_services| {
            EntryDescriptor::text("position")
        });
        register_entry!(registry, "encoding", Alignment::Right, 20, |_services| {
            EntryDescriptor::text("encoding")
        });

        let config: ConfigFile = toml::from_str(
            r#"
            [[status_bar.entry]]
            name = "position"
            [[status_bar.entry]]
            name = "mode"
            [[status_bar.entry]]
            name = "unknown-is-skipped"
            [[status_bar.entry]]
            name = "encoding"
            [[status_bar.entry]]
            name = "branch"
            "#,
        )
        .unwrap();

        bar.bootstrap(&registry, &config.status_bar);

        assert_eq!(bar.texts(Alignment::Left), vec!["branch", "mode"]);
        assert_eq!(bar.texts(Alignment::Right), vec!["encoding", "position"]);
        assert_eq!(bar.entry_count(), 4);
    }

    #[test]
    fn test_bootstrap_respects_config_overrides() {
        let (_recorder, mut bar, _theme, _workspace) = test_bar();

        let mut registry = EntryRegistry::new();
        register_entry!(registry, "clock", Alignment::Right, 10, |_services| {
            EntryDescriptor::text("12:00")
        });

        let config = StatusBarConfig {
            visible: true,
            entry: vec![crate::config::EntryConfig {
                name: "clock".to_string(),
                alignment: Some(crate::config::ConfigAlignment::Left),
                priority: Some(99),
            }],
        };

        bar.bootstrap(&registry, &config);
        assert_eq!(bar.priorities(Alignment::Left), vec![99]);
        assert!(bar.priorities(Alignment::Right).is_empty());
    }

    #[test]
    fn test_render_records_hit_regions_for_both_sides() {
        let (_recorder, mut bar, _theme, _workspace) = test_bar();
        let left = bar.add_entry(EntryDescriptor::text("left"), Alignment::Left, 0);
        let right = bar.add_entry(EntryDescriptor::text("right"), Alignment::Right, 0);

        let (area, mut buf) = strip_buffer();
        bar.render(area, &mut buf);

        assert_eq!(bar.hit_test(0), Some(left.id()));
        assert_eq!(bar.hit_test(area.right() - 1), Some(right.id()));
        assert_eq!(bar.hit_test(30), None);
    }

    #[test]
    fn test_tooltip_lookup() {
        let (_recorder, mut bar, _theme, _workspace) = test_bar();
        bar.add_entry(
            EntryDescriptor::text("main").with_tooltip("Checkout branch"),
            Alignment::Left,
            0,
        );

        let (area, mut buf) = strip_buffer();
        bar.render(area, &mut buf);

        assert_eq!(bar.tooltip_at(0).as_deref(), Some("Checkout branch"));
        assert_eq!(bar.tooltip_at(40), None);
    }

    #[test]
    fn test_layout_stores_geometry() {
        let (_recorder, mut bar, _theme, _workspace) = test_bar();
        bar.layout(120, STRIP_HEIGHT);
        assert_eq!(bar.geometry(), (120, STRIP_HEIGHT));
    }
}
