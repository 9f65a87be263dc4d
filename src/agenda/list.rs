/// Handle to a checklist entry. The generation changes whenever a slot is
/// freed, so a handle never addresses an entry added after its own removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    index: usize,
    generation: u32,
}

impl TaskId {
    pub const fn index(self) -> usize {
        self.index
    }

    pub const fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub text: String,
    pub done: bool,
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    task: Option<Task>,
}

/// In-memory checklist. Entries are never persisted.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    slots: Vec<Slot>,
    free: Vec<usize>,
    // Slot indices of live entries, oldest first.
    order: Vec<usize>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a task with trimmed `text`; blank input adds nothing.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let task = Task {
            text: text.to_string(),
            done: false,
        };
        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index].task = Some(task);
                index
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    task: Some(task),
                });
                self.slots.len() - 1
            }
        };
        self.order.push(index);

        let id = TaskId {
            index,
            generation: self.slots[index].generation,
        };
        tracing::debug!(?id, "added task");
        Some(id)
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.task.as_ref())
    }

    pub(super) fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.task.as_mut())
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    pub(super) fn remove(&mut self, id: TaskId) -> Option<Task> {
        let slot = self
            .slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)?;
        let task = slot.task.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.order.retain(|index| *index != id.index);
        tracing::debug!(?id, "removed task");
        Some(task)
    }

    /// Live entries in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = (TaskId, &Task)> + '_ {
        self.order.iter().filter_map(move |&index| {
            let slot = &self.slots[index];
            slot.task.as_ref().map(|task| {
                (
                    TaskId {
                        index,
                        generation: slot.generation,
                    },
                    task,
                )
            })
        })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.iter().filter(|(_, task)| !task.done).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_trims_text_and_ignores_blank_input() {
        let mut list = TaskList::new();
        assert_eq!(list.add("   "), None);
        assert_eq!(list.add(""), None);

        let id = list.add("  buy milk \n").expect("non-blank text should add");
        assert_eq!(
            list.get(id),
            Some(&Task {
                text: "buy milk".to_string(),
                done: false
            })
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn iter_keeps_insertion_order_after_slot_reuse() {
        let mut list = TaskList::new();
        let first = list.add("first").unwrap();
        let _second = list.add("second").unwrap();
        list.remove(first).unwrap();
        let third = list.add("third").unwrap();

        assert_eq!(third.index(), first.index());
        let texts: Vec<_> = list.iter().map(|(_, task)| task.text.as_str()).collect();
        assert_eq!(texts, ["second", "third"]);
    }

    #[test]
    fn stale_id_does_not_address_reused_slot() {
        let mut list = TaskList::new();
        let old = list.add("old").unwrap();
        list.remove(old).unwrap();
        let new = list.add("new").unwrap();

        assert_eq!(old.index(), new.index());
        assert_ne!(old.generation(), new.generation());
        assert!(list.get(old).is_none());
        assert!(list.remove(old).is_none());
        assert_eq!(list.get(new).map(|task| task.text.as_str()), Some("new"));
    }

    #[test]
    fn pending_count_ignores_done_entries() {
        let mut list = TaskList::new();
        let a = list.add("a").unwrap();
        list.add("b").unwrap();
        list.get_mut(a).unwrap().done = true;

        assert_eq!(list.pending_count(), 1);
        assert!(!list.is_empty());
    }
}
