use crate::ring::RingQueue;
use std::fmt;
use std::iter::FusedIterator;

/// A positional view of one slot of a [`RingQueue`].
pub struct Slot<'a, T> {
    index: usize,
    item: Option<&'a T>,
    is_next_write: bool,
    is_next_read: bool,
}

impl<'a, T> Slot<'a, T> {
    fn at(queue: &'a RingQueue<T>, index: usize) -> Self {
        Self {
            index,
            item: queue.item_at(index),
            is_next_write: index == queue.write_cursor(),
            is_next_read: index == queue.read_cursor(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The resident item, or `None` for an unused slot.
    pub fn item(&self) -> Option<&'a T> {
        self.item
    }

    pub fn is_occupied(&self) -> bool {
        self.item.is_some()
    }

    pub fn is_next_write(&self) -> bool {
        self.is_next_write
    }

    pub fn is_next_read(&self) -> bool {
        self.is_next_read
    }
}

impl<T> Clone for Slot<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slot<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Slot<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("index", &self.index)
            .field("item", &self.item)
            .field("is_next_write", &self.is_next_write)
            .field("is_next_read", &self.is_next_read)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Slot<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell_{:02}: ", self.index)?;
        match self.item {
            Some(item) => write!(f, "{}", item)?,
            None => f.write_str("<empty>")?,
        }
        if self.is_next_write {
            f.write_str(" <== In")?;
        }
        if self.is_next_read {
            f.write_str(" <== Out")?;
        }
        Ok(())
    }
}

/// Iterator over the slots of a [`RingQueue`] in index order.
///
/// Created by [`RingQueue::slots`].
pub struct Slots<'a, T> {
    queue: &'a RingQueue<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Slots<'a, T> {
    pub(crate) fn new(queue: &'a RingQueue<T>) -> Self {
        Self {
            queue,
            front: 0,
            back: queue.capacity(),
        }
    }
}

impl<'a, T> Iterator for Slots<'a, T> {
    type Item = Slot<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let slot = Slot::at(self.queue, self.front);
        self.front += 1;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Slots<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(Slot::at(self.queue, self.back))
    }
}

impl<T> ExactSizeIterator for Slots<'_, T> {}

impl<T> FusedIterator for Slots<'_, T> {}
