pub mod common;
pub mod git;
pub mod memory;

pub use common::format_bytes;
pub use git::{GitSummary, git_branch_entry, summarize};
pub use memory::memory_entry;

use statusbar_core::{Alignment, EntryRegistry, register_entry};

/// Register the built-in entry declarations: the git branch on the left and
/// memory usage on the right. Config selects and may re-place them.
pub fn register_builtin_entries(registry: &mut EntryRegistry) {
    register_entry!(registry, "git", Alignment::Left, 100, |_services| {
        git::git_branch_entry()
    });
    register_entry!(registry, "memory", Alignment::Right, 50, |_services| {
        memory::memory_entry()
    });
}
