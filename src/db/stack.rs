//! A stack with a fixed capacity.
//!
//! Each log of a search is sized to the worst case before the search begins, so a push beyond capacity can only follow from a miscount.
//! As such, exceeding capacity panics rather than growing the stack.

/// A stack holding at most `capacity` items.
#[derive(Clone, Debug)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        BoundedStack {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes an item to the top of the stack.
    ///
    /// # Panics
    /// If the stack is full.
    pub fn push(&mut self, item: T) {
        assert!(
            self.items.len() < self.capacity,
            "push beyond the capacity of a bounded stack ({})",
            self.capacity
        );
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Empties the stack, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The items of the stack, from bottom to top.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifo() {
        let mut stack = BoundedStack::with_capacity(3);
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.pop(), Some(2));
        stack.push(3);
        assert_eq!(stack.as_slice(), &[1, 3]);

        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.capacity(), 3);
    }

    #[test]
    #[should_panic(expected = "capacity of a bounded stack (1)")]
    fn overflow() {
        let mut stack = BoundedStack::with_capacity(1);
        stack.push('a');
        stack.push('b');
    }
}
