// statusbar-entries/src/memory.rs
use statusbar_core::EntryDescriptor;
use sysinfo::System;

use crate::common::format_bytes;

/// The memory usage entry, read once at build time from the system.
pub fn memory_entry() -> EntryDescriptor {
    let mut system = System::new();
    system.refresh_memory();
    memory_entry_from(system.used_memory(), system.total_memory())
}

fn memory_entry_from(used: u64, total: u64) -> EntryDescriptor {
    let percent = if total > 0 {
        (used as f64 / total as f64) * 100.0
    } else {
        0.0
    };

    EntryDescriptor::text(format!("MEM {}", format_bytes(used))).with_tooltip(format!(
        "{} / {} ({percent:.0}%)",
        format_bytes(used),
        format_bytes(total)
    ))
}
