//! A last-in-first-out stack of overrides that always keeps its bottom element.

/// A non-empty stack of settings whose top is the current setting.
///
/// The bottom element is the default and is never removed, so `current`
/// always has something to return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeStack<T> {
    /// The settings, bottom first.
    items: Vec<T>,
}

impl<T: Copy + core::fmt::Debug> ModeStack<T> {
    /// Creates a stack holding only `default`.
    #[must_use]
    pub fn new(default: T) -> Self {
        Self { items: vec![default] }
    }

    /// Makes `value` the current setting.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Restores the setting that was current before the last `push`.
    ///
    /// When only the default is left this does nothing and returns `None`.
    pub fn pop(&mut self) -> Option<T> {
        if self.items.len() > 1 {
            self.items.pop()
        } else {
            ftlog::trace!("Not popping the last remaining mode: {:?}", self.items.first());
            None
        }
    }

    /// Pops settings until at most `depth` remain.
    ///
    /// The default is always kept, so a `depth` of `0` behaves like `1`.
    pub fn truncate_to(&mut self, depth: usize) {
        self.items.truncate(depth.max(1));
    }

    /// The current setting.
    #[must_use]
    pub fn current(&self) -> Option<T> {
        self.items.last().copied()
    }

    /// The bottom element, which `pop` never removes.
    #[must_use]
    pub fn default_value(&self) -> Option<T> {
        self.items.first().copied()
    }

    /// Number of settings on the stack, counting the default.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.items.len()
    }
}

impl<T: Copy + Default + core::fmt::Debug> Default for ModeStack<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::ModeStack;

    #[test]
    fn push_pop() {
        let mut stack = ModeStack::new(1_u8);
        assert_eq!(stack.current(), Some(1));

        stack.push(2);
        stack.push(3);
        assert_eq!(stack.depth(), 3);
        assert_eq!(stack.current(), Some(3));

        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.current(), Some(2));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.current(), Some(1));
    }

    #[test]
    fn floor() {
        let mut stack = ModeStack::new('a');
        for _ in 0..10 {
            assert_eq!(stack.pop(), None);
            assert_eq!(stack.depth(), 1);
            assert_eq!(stack.current(), Some('a'));
        }

        stack.push('b');
        stack.pop();
        stack.pop();
        assert_eq!(stack.current(), Some('a'));
        assert_eq!(stack.default_value(), Some('a'));
    }

    #[test]
    fn truncate() {
        let mut stack = ModeStack::new(0_u8);
        for i in 1..=5 {
            stack.push(i);
        }

        stack.truncate_to(3);
        assert_eq!(stack.depth(), 3);
        assert_eq!(stack.current(), Some(2));

        stack.truncate_to(10);
        assert_eq!(stack.depth(), 3);

        stack.truncate_to(0);
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current(), Some(0));
    }
}
