use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Slot identifier with generation tracking to prevent stale references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct SlotId {
    pub index: usize,
    pub generation: u32,
}

impl SlotId {
    pub fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }
}

/// Generational arena that hands out stable IDs while preventing use-after-free.
///
/// Removing a slot bumps its generation, so IDs held by callers after a
/// removal simply stop resolving instead of aliasing a recycled slot.
pub struct Arena<T> {
    items: Vec<Option<T>>,
    generations: Vec<u32>,
    free_list: VecDeque<usize>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            generations: Vec::new(),
            free_list: VecDeque::new(),
        }
    }

    pub fn insert(&mut self, item: T) -> SlotId {
        if let Some(index) = self.free_list.pop_front() {
            let generation = self.generations[index];
            self.items[index] = Some(item);
            return SlotId::new(index, generation);
        }

        let index = self.items.len();
        self.items.push(Some(item));
        self.generations.push(0);
        SlotId::new(index, 0)
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        if self.is_valid(id) {
            self.items.get(id.index).and_then(|slot| slot.as_ref())
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        if self.is_valid(id) {
            self.items.get_mut(id.index).and_then(|slot| slot.as_mut())
        } else {
            None
        }
    }

    pub fn contains(&self, id: SlotId) -> bool {
        self.is_valid(id) && self.items.get(id.index).is_some_and(|slot| slot.is_some())
    }

    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        if !self.is_valid(id) {
            return None;
        }
        if let Some(slot) = self.items.get_mut(id.index) {
            if slot.is_some() {
                self.generations[id.index] = self.generations[id.index].wrapping_add(1);
                self.free_list.push_back(id.index);
            }
            slot.take()
        } else {
            None
        }
    }

    /// Iterates live slots along with their current IDs.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> + '_ {
        self.items.iter().enumerate().filter_map(|(index, slot)| {
            slot.as_ref()
                .map(|item| (SlotId::new(index, self.generations[index]), item))
        })
    }

    pub fn len(&self) -> usize {
        self.items.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_valid(&self, id: SlotId) -> bool {
        self.generations
            .get(id.index)
            .copied()
            .map(|generation| generation == id.generation)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_get_round_trips() {
        let mut arena = Arena::new();
        let id = arena.insert(42u32);
        assert_eq!(arena.get(id), Some(&42));
        assert!(arena.contains(id));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn removed_ids_stop_resolving() {
        let mut arena = Arena::new();
        let id = arena.insert("ball");
        assert_eq!(arena.remove(id), Some("ball"));
        assert_eq!(arena.get(id), None);
        assert!(!arena.contains(id));
        assert_eq!(arena.remove(id), None);
        assert!(arena.is_empty());
    }

    #[test]
    fn recycled_slot_does_not_alias_old_id() {
        let mut arena = Arena::new();
        let first = arena.insert(1u8);
        arena.remove(first);
        let second = arena.insert(2u8);
        assert_eq!(first.index, second.index);
        assert_ne!(first.generation, second.generation);
        assert_eq!(arena.get(first), None);
        assert_eq!(arena.get(second), Some(&2));
    }

    #[test]
    fn iter_yields_live_slots_with_ids() {
        let mut arena = Arena::new();
        let a = arena.insert(10u32);
        let b = arena.insert(20u32);
        arena.remove(a);
        let collected: Vec<_> = arena.iter().collect();
        assert_eq!(collected, vec![(b, &20)]);
    }
}
