//! Per-item swipe flags, index-aligned with the host list.

/// Flags for one list row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ItemState {
    pub opened: bool,
    /// Direction the row was opened towards; meaningful while `opened`.
    pub opened_right: bool,
    pub checked: bool,
}

/// Index-aligned row flags.
///
/// Every accessor is range-checked: positions held by in-flight gestures or
/// animations can go stale after a removal, and a stale position simply
/// reads as "no such item".
#[derive(Clone, Debug, Default)]
pub struct ItemStateStore {
    items: Vec<ItemState>,
}

impl ItemStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_len(len: usize) -> Self {
        let mut store = Self::new();
        store.grow_to(len);
        store
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.items.len()
    }

    /// Appends default entries until the store holds at least `count` items.
    /// Never shrinks.
    pub fn grow_to(&mut self, count: usize) {
        if count > self.items.len() {
            self.items.resize(count, ItemState::default());
        }
    }

    /// Removes the entry at `index`, shifting later entries down by one.
    pub fn remove(&mut self, index: usize) -> Option<ItemState> {
        if self.contains(index) {
            Some(self.items.remove(index))
        } else {
            log::warn!(
                "ignoring removal of item {index}; store holds {}",
                self.items.len()
            );
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<ItemState> {
        self.items.get(index).copied()
    }

    pub fn is_opened(&self, index: usize) -> bool {
        self.get(index).is_some_and(|item| item.opened)
    }

    pub fn is_opened_right(&self, index: usize) -> bool {
        self.get(index).is_some_and(|item| item.opened_right)
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.get(index).is_some_and(|item| item.checked)
    }

    pub fn set_opened(&mut self, index: usize, right: bool) -> bool {
        self.update(index, |item| {
            item.opened = true;
            item.opened_right = right;
        })
    }

    /// Clears `opened`; `opened_right` keeps the last direction for
    /// close notifications.
    pub fn set_closed(&mut self, index: usize) -> bool {
        self.update(index, |item| item.opened = false)
    }

    /// Clears both `opened` and `opened_right`.
    pub fn reset_opened(&mut self, index: usize) -> bool {
        self.update(index, |item| {
            item.opened = false;
            item.opened_right = false;
        })
    }

    /// Flips `checked` and returns the new value.
    pub fn toggle_checked(&mut self, index: usize) -> Option<bool> {
        let item = self.items.get_mut(index)?;
        item.checked = !item.checked;
        Some(item.checked)
    }

    pub fn selected_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    pub fn selected_positions(&self) -> Vec<usize> {
        self.positions_where(|item| item.checked)
    }

    /// Unchecks every row, returning the positions that were checked.
    pub fn clear_checked(&mut self) -> Vec<usize> {
        let cleared = self.selected_positions();
        for index in &cleared {
            self.items[*index].checked = false;
        }
        cleared
    }

    fn positions_where(&self, predicate: impl Fn(&ItemState) -> bool) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| predicate(item))
            .map(|(index, _)| index)
            .collect()
    }

    fn update(&mut self, index: usize, f: impl FnOnce(&mut ItemState)) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                f(item);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grow_appends_default_entries() {
        let mut store = ItemStateStore::with_len(2);
        store.set_opened(1, true);
        store.grow_to(5);

        assert_eq!(store.len(), 5);
        assert!(store.is_opened(1));
        for index in 2..5 {
            assert_eq!(store.get(index), Some(ItemState::default()));
        }
    }

    #[test]
    fn grow_never_shrinks() {
        let mut store = ItemStateStore::with_len(4);
        store.grow_to(1);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn remove_shifts_later_entries_only() {
        let mut store = ItemStateStore::with_len(5);
        store.toggle_checked(0);
        store.set_opened(1, false);
        store.set_opened(3, true);
        store.toggle_checked(4);

        let removed = store.remove(2);

        assert_eq!(removed, Some(ItemState::default()));
        assert_eq!(store.len(), 4);
        assert!(store.is_checked(0));
        assert!(store.is_opened(1) && !store.is_opened_right(1));
        assert!(store.is_opened(2) && store.is_opened_right(2));
        assert!(store.is_checked(3));
    }

    #[test]
    fn stale_indices_are_rejected() {
        let mut store = ItemStateStore::with_len(2);
        assert_eq!(store.remove(2), None);
        assert!(!store.set_opened(7, true));
        assert_eq!(store.toggle_checked(3), None);
        assert!(!store.is_checked(9));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn selection_bookkeeping() {
        let mut store = ItemStateStore::with_len(6);
        assert_eq!(store.toggle_checked(4), Some(true));
        assert_eq!(store.toggle_checked(1), Some(true));
        assert_eq!(store.selected_count(), 2);
        assert_eq!(store.selected_positions(), vec![1, 4]);

        assert_eq!(store.clear_checked(), vec![1, 4]);
        assert_eq!(store.selected_count(), 0);
    }

    #[test]
    fn close_keeps_direction_until_reset() {
        let mut store = ItemStateStore::with_len(1);
        store.set_opened(0, true);
        store.set_closed(0);
        assert!(!store.is_opened(0));
        assert!(store.is_opened_right(0));
        store.reset_opened(0);
        assert!(!store.is_opened_right(0));
    }
}
