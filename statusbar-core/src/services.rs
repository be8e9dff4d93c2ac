// statusbar-core/src/services.rs
use crate::event::{Bus, Subscription};
use crossbeam::channel::Receiver;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("command '{id}' failed: {reason}")]
    Failed { id: String, reason: String },
}

/// Executes commands contributed by the host. Invocations from the strip are
/// fire-and-forget; failures are reported, never propagated.
pub trait CommandExecutor {
    fn execute(&self, id: &str, args: &[String]) -> Result<(), CommandError>;
}

/// User-visible error channel. The only failure surface the strip uses.
pub trait NotificationSink {
    fn error(&self, message: &str);
}

pub trait TelemetrySink {
    fn public_log(&self, event: &str, properties: &[(&str, &str)]);
}

/// One actionable item offered in a context menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuAction {
    pub id: String,
    pub label: String,
}

/// Request to present a context menu anchored at a strip cell.
pub struct ContextMenuRequest<'a> {
    pub anchor: (u16, u16),
    pub actions: Vec<MenuAction>,
    pub context: &'a str,
}

pub trait ContextMenuPresenter {
    fn show(&self, request: ContextMenuRequest<'_>);
}

/// The editor surface that regains focus when a status command runs.
pub trait EditorSurface {
    fn focus(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceState {
    /// No project open; the strip uses the no-folder color pair.
    Empty,
    HasFolder,
}

/// Current workspace state plus its change bus.
#[derive(Clone)]
pub struct WorkspaceHandle {
    state: Rc<RefCell<WorkspaceState>>,
    bus: Bus<WorkspaceState>,
}

impl WorkspaceHandle {
    pub fn new(state: WorkspaceState) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
            bus: Bus::new(),
        }
    }

    pub fn state(&self) -> WorkspaceState {
        *self.state.borrow()
    }

    pub fn set_state(&self, state: WorkspaceState) {
        let changed = {
            let mut current = self.state.borrow_mut();
            let changed = *current != state;
            *current = state;
            changed
        };
        if changed {
            self.bus.publish(state);
        }
    }

    pub fn subscribe(&self) -> (Subscription<WorkspaceState>, Receiver<WorkspaceState>) {
        self.bus.subscribe()
    }
}

/// Collaborator handles the strip calls out to. All trait objects; hosts and
/// tests swap in their own implementations.
#[derive(Clone)]
pub struct Services {
    pub commands: Rc<dyn CommandExecutor>,
    pub notifications: Rc<dyn NotificationSink>,
    pub telemetry: Rc<dyn TelemetrySink>,
    pub context_menu: Rc<dyn ContextMenuPresenter>,
    /// Absent when the host has no focusable editor surface.
    pub editor: Option<Rc<dyn EditorSurface>>,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_state_change_notifies_once() {
        let workspace = WorkspaceHandle::new(WorkspaceState::HasFolder);
        let (_subscription, rx) = workspace.subscribe();

        workspace.set_state(WorkspaceState::Empty);
        workspace.set_state(WorkspaceState::Empty);

        assert_eq!(rx.try_recv().unwrap(), WorkspaceState::Empty);
        assert!(rx.try_recv().is_err());
        assert_eq!(workspace.state(), WorkspaceState::Empty);
    }
}
