pub mod config;
pub mod dispose;
pub mod entry;
pub mod event;
mod message;
pub mod order;
pub mod registry;
pub mod render;
pub mod schedule;
pub mod services;
pub mod strip;
pub mod theme;

pub use config::{ConfigAlignment, ConfigError, ConfigFile, EntryConfig, StatusBarConfig};
pub use dispose::{DisposeBag, Disposer};
pub use entry::{Alignment, EntryDescriptor, EntryId};
pub use event::{Bus, Subscription};
pub use order::{EntryOrder, EntryRecord, sort_declarations};
pub use registry::{EntryDeclaration, EntryFactory, EntryRegistry};
pub use render::{EntryRenderer, ManageExtensionAction, execute_command};
pub use schedule::{Scheduler, TaskHandle};
pub use services::{
    CommandError, CommandExecutor, ContextMenuPresenter, ContextMenuRequest, EditorSurface,
    MenuAction, NotificationSink, Services, TelemetrySink, WorkspaceHandle, WorkspaceState,
};
pub use strip::{STRIP_HEIGHT, EntryHandle, MessageHandle, StatusBar};
pub use theme::{EntryColor, Theme, ThemeHandle};
