// statusbar-core/src/order.rs
use crate::entry::{Alignment, EntryId};
use std::cmp::Ordering;

/// Ordering record for one rendered container: the queryable alignment and
/// priority tag the engine re-derives order from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryRecord {
    pub id: EntryId,
    pub alignment: Alignment,
    pub priority: i32,
}

/// The live visual-order list of rendered containers.
///
/// One interleaved list covers both sides. Scanning the list filtered to one
/// side always yields priorities in that side's sort order: descending on the
/// left, ascending on the right. Order is derived purely from scan order at
/// insertion time; nothing re-sorts on mutation.
#[derive(Debug, Default)]
pub struct EntryOrder {
    records: Vec<EntryRecord>,
}

impl EntryOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert before the first same-side neighbour the record outranks:
    /// strictly lower priority on the left side, strictly higher on the
    /// right. Ties skip ahead, so equal priorities keep insertion order.
    /// With no qualifying neighbour the record appends to the end of the
    /// whole list, which can interleave sides depending on history.
    ///
    /// Returns the position the record landed at. O(n) scan; n is tens of
    /// entries at most.
    pub fn insert(&mut self, record: EntryRecord) -> usize {
        let position = self.insert_position(record.alignment, record.priority);
        self.records.insert(position, record);
        position
    }

    fn insert_position(&self, alignment: Alignment, priority: i32) -> usize {
        for (index, neighbour) in self.records.iter().enumerate() {
            if neighbour.alignment != alignment {
                continue;
            }
            let insert_before = match alignment {
                Alignment::Left => neighbour.priority < priority,
                Alignment::Right => neighbour.priority > priority,
            };
            if insert_before {
                return index;
            }
        }
        self.records.len()
    }

    /// Append without a positional scan. Bootstrap only: the static set is
    /// pre-sorted in one pass before any append.
    pub fn push(&mut self, record: EntryRecord) {
        self.records.push(record);
    }

    pub fn remove(&mut self, id: EntryId) -> bool {
        match self.records.iter().position(|record| record.id == id) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Records of one side in current visual order.
    pub fn ordered(&self, alignment: Alignment) -> impl Iterator<Item = &EntryRecord> {
        self.records
            .iter()
            .filter(move |record| record.alignment == alignment)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EntryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Stable sort for the statically-declared entry set: left side before right,
/// descending priority on the left, ascending on the right. Computed once
/// over the whole set at bootstrap so entries can be appended directly.
pub fn sort_declarations<T>(items: &mut [T], key: impl Fn(&T) -> (Alignment, i32)) {
    items.sort_by(|a, b| {
        let (alignment_a, priority_a) = key(a);
        let (alignment_b, priority_b) = key(b);
        match (alignment_a, alignment_b) {
            (Alignment::Left, Alignment::Right) => Ordering::Less,
            (Alignment::Right, Alignment::Left) => Ordering::Greater,
            (Alignment::Left, Alignment::Left) => priority_b.cmp(&priority_a),
            (Alignment::Right, Alignment::Right) => priority_a.cmp(&priority_b),
        }
    });
}
