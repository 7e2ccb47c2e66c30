// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rotating sequence of items backing the visible cards.
//!
//! The last element is the active card. Committing a swipe moves it to the
//! front, so the sequence never shrinks and cycles through the same items.
//!
//! ```
//! use understory_card_stack::CardStack;
//!
//! let mut stack = CardStack::new(vec!['a', 'b', 'c']);
//! assert_eq!(stack.active(), Some(&'c'));
//!
//! stack.rotate();
//! assert_eq!(stack.items(), &['c', 'a', 'b']);
//! assert_eq!(stack.active(), Some(&'b'));
//! ```

use alloc::vec::Vec;

/// Ordered items with the active card last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardStack<T> {
    items: Vec<T>,
    revision: u64,
}

impl<T> CardStack<T> {
    /// Creates a stack from items ordered back-to-front.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self { items, revision: 0 }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items, back-to-front.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Item at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Index of the active card.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }

    /// The active (front, draggable) item.
    #[must_use]
    pub fn active(&self) -> Option<&T> {
        self.items.last()
    }

    /// Index of the item `depth` positions behind the active one, wrapping
    /// around the front of the sequence.
    #[must_use]
    pub fn index_behind(&self, depth: usize) -> Option<usize> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        let active = len - 1;
        Some((active + len - depth % len) % len)
    }

    /// The item `depth` positions behind the active one, wrapping.
    #[must_use]
    pub fn behind(&self, depth: usize) -> Option<&T> {
        self.index_behind(depth).and_then(|i| self.items.get(i))
    }

    /// Moves the active item to the front and returns the new active item.
    ///
    /// The move is a single in-place rotation, so no intermediate state with
    /// a missing or duplicated active item is ever observable.
    ///
    /// Rotating an empty stack is a caller error: it asserts in debug builds
    /// and does nothing in release builds.
    pub fn rotate(&mut self) -> Option<&T> {
        debug_assert!(!self.items.is_empty(), "rotate called on an empty card stack");
        if self.items.is_empty() {
            return None;
        }
        self.items.rotate_right(1);
        self.revision = self.revision.wrapping_add(1);
        self.items.last()
    }

    /// Replaces the items, for example after the stack ran empty.
    pub fn reset(&mut self, items: Vec<T>) {
        self.items = items;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Counter bumped on every rotation or reset.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Consumes the stack, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> FromIterator<T> for CardStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn rotation_moves_last_to_front_and_keeps_length() {
        for n in 1..=6_u32 {
            let original: Vec<u32> = (0..n).collect();
            let mut stack = CardStack::new(original.clone());
            stack.rotate();

            let mut expected = original.clone();
            expected.rotate_right(1);
            assert_eq!(stack.items(), expected.as_slice());
            assert_eq!(stack.len(), original.len());
        }
    }

    #[test]
    fn full_cycle_restores_order() {
        let mut stack: CardStack<_> = ["a", "b", "c", "d"].into_iter().collect();
        for _ in 0..4 {
            stack.rotate();
        }
        assert_eq!(stack.items(), &["a", "b", "c", "d"]);
        assert_eq!(stack.revision(), 4);
    }

    #[test]
    fn rotate_returns_new_active() {
        let mut stack = CardStack::new(vec![1, 2, 3]);
        assert_eq!(stack.rotate(), Some(&2));
        assert_eq!(stack.active_index(), Some(2));
    }

    #[test]
    fn behind_wraps_around() {
        let stack = CardStack::new(vec!['a', 'b', 'c']);
        assert_eq!(stack.behind(0), Some(&'c'));
        assert_eq!(stack.behind(1), Some(&'b'));
        assert_eq!(stack.behind(2), Some(&'a'));
        assert_eq!(stack.behind(3), Some(&'c'));

        let pair = CardStack::new(vec!['x', 'y']);
        assert_eq!(pair.behind(2), Some(&'y'));
    }

    #[test]
    fn empty_stack_queries() {
        let stack = CardStack::<u8>::new(Vec::new());
        assert!(stack.is_empty());
        assert_eq!(stack.active(), None);
        assert_eq!(stack.active_index(), None);
        assert_eq!(stack.behind(1), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "rotate called on an empty card stack")]
    fn rotating_empty_stack_asserts() {
        let mut stack = CardStack::<u8>::default();
        stack.rotate();
    }

    #[test]
    fn reset_replaces_items_and_bumps_revision() {
        let mut stack = CardStack::new(Vec::<u8>::new());
        stack.reset(vec![4, 5]);
        assert_eq!(stack.active(), Some(&5));
        assert_eq!(stack.revision(), 1);
    }
}
