//! Display-order bookkeeping. The key list is the single source of truth;
//! the reverse flag is applied only when producing the visible sequence.

use crate::types::ZoneKey;

#[derive(Debug, Default)]
pub(crate) struct DisplayOrder {
    keys: Vec<ZoneKey>,
    reversed: bool,
}

impl DisplayOrder {
    pub(crate) fn push(&mut self, key: ZoneKey) {
        self.keys.push(key);
    }

    pub(crate) fn remove(&mut self, key: &ZoneKey) {
        self.keys.retain(|k| k != key);
    }

    pub(crate) fn toggle_reverse(&mut self) -> bool {
        self.reversed = !self.reversed;
        self.reversed
    }

    pub(crate) fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Relocate `dragged` to `target`'s index, shifting the keys between
    /// them. No-op when the keys are equal or either is unlisted. Operates on
    /// the canonical list regardless of the reverse flag.
    pub(crate) fn move_to(&mut self, dragged: &ZoneKey, target: &ZoneKey) -> bool {
        if dragged == target {
            return false;
        }
        let Some(from) = self.keys.iter().position(|k| k == dragged) else {
            return false;
        };
        let Some(to) = self.keys.iter().position(|k| k == target) else {
            return false;
        };
        let key = self.keys.remove(from);
        self.keys.insert(to, key);
        true
    }

    /// First key in canonical (insertion) order, ignoring the reverse flag.
    pub(crate) fn first(&self) -> Option<&ZoneKey> {
        self.keys.first()
    }

    /// Keys in the order the view shows them.
    pub(crate) fn visible(&self) -> Vec<ZoneKey> {
        let mut keys = self.keys.clone();
        if self.reversed {
            keys.reverse();
        }
        keys
    }
}
