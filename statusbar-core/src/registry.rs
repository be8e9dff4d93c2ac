// statusbar-core/src/registry.rs
use crate::entry::{Alignment, EntryDescriptor};
use crate::services::Services;
use std::collections::HashMap;

pub type EntryFactory = Box<dyn Fn(&Services) -> EntryDescriptor>;

/// A statically-declared entry: how to build its descriptor and where it goes
/// by default. Config may override alignment and priority per entry.
pub struct EntryDeclaration {
    pub factory: EntryFactory,
    pub alignment: Alignment,
    pub priority: i32,
}

/// Named set of statically-declared entries, read once at strip bootstrap.
#[derive(Default)]
pub struct EntryRegistry {
    declarations: HashMap<String, EntryDeclaration>,
}

impl EntryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        name: &str,
        alignment: Alignment,
        priority: i32,
        factory: EntryFactory,
    ) {
        self.declarations.insert(
            name.to_string(),
            EntryDeclaration {
                factory,
                alignment,
                priority,
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&EntryDeclaration> {
        self.declarations.get(name)
    }

    pub fn names(&self) -> Vec<&String> {
        self.declarations.keys().collect()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

#[macro_export]
macro_rules! register_entry {
    ($registry:expr, $name:expr, $alignment:expr, $priority:expr, $factory:expr) => {
        $registry.register($name, $alignment, $priority, Box::new($factory));
    };
}
