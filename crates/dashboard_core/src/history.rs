use std::collections::VecDeque;

use serde::Serialize;

/// Most-recent-first list with a fixed capacity.
///
/// New items go to the front; once the list is full the oldest item at the
/// tail is evicted. The length never exceeds `capacity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BoundedHistory<T> {
    #[serde(skip)]
    capacity: usize,
    items: VecDeque<T>,
}

impl<T> BoundedHistory<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Insert at the front, returning the tail item evicted to stay within capacity.
    pub fn push_front(&mut self, item: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(item);
        }
        self.items.push_front(item);
        if self.items.len() > self.capacity {
            self.items.pop_back()
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Newest item.
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }
}

impl<T: Clone> BoundedHistory<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_when_full() {
        let mut history = BoundedHistory::with_capacity(3);
        assert_eq!(history.push_front(1), None);
        assert_eq!(history.push_front(2), None);
        assert_eq!(history.push_front(3), None);
        assert_eq!(history.push_front(4), Some(1));

        assert_eq!(history.to_vec(), vec![4, 3, 2]);
        assert_eq!(history.front(), Some(&4));
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut history = BoundedHistory::with_capacity(0);
        assert_eq!(history.push_front("a"), Some("a"));
        assert!(history.is_empty());
    }
}
