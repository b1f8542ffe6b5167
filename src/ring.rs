use crate::error::{CapacityError, PopError, PushError, SlotError, TryPushError};
use crate::slot::{Slot, Slots};
use std::fmt;
use std::mem::MaybeUninit;
use tracing::{debug, trace};

/// A fixed-capacity FIFO queue backed by a circular array of slots.
///
/// Which slots hold live items is derived only from the read cursor and the
/// number of occupied slots, never from the slot contents. The write cursor
/// and the read cursor coincide both when the queue is empty and when it is
/// full; `len` tells the two apart.
pub struct RingQueue<T> {
    buf: Box<[MaybeUninit<T>]>,
    write: usize,
    read: usize,
    len: usize,
}

impl<T> RingQueue<T> {
    /// Creates a queue with `cap` empty slots.
    ///
    /// Fails with [`CapacityError::InvalidCapacity`] when `cap` is zero.
    pub fn with_capacity(cap: usize) -> Result<Self, CapacityError> {
        if cap == 0 {
            return Err(CapacityError::InvalidCapacity);
        }

        let buf = (0..cap).map(|_| MaybeUninit::uninit()).collect();
        Ok(Self {
            buf,
            write: 0,
            read: 0,
            len: 0,
        })
    }

    /// Appends `item` at the write cursor.
    ///
    /// A full queue rejects the item and hands it back inside the error, so
    /// the caller keeps ownership of it.
    pub fn push(&mut self, item: T) -> Result<(), TryPushError<T>> {
        if self.is_full() {
            trace!(capacity = self.capacity(), "push rejected, queue is full");
            return Err(TryPushError {
                err: PushError::Full,
                val: item,
            });
        }

        self.buf[self.write] = MaybeUninit::new(item);
        self.write = self.index(self.write + 1);
        self.len += 1;
        Ok(())
    }

    /// Removes the item at the read cursor and returns it to the caller.
    pub fn pop(&mut self) -> Result<T, PopError> {
        if self.is_empty() {
            trace!("pop rejected, queue is empty");
            return Err(PopError::Empty);
        }

        let idx = self.read;
        // SAFETY: the read cursor is the first occupied slot whenever len > 0.
        // Advancing the cursor below marks the slot unoccupied, so the value
        // is never read or dropped a second time.
        let item = unsafe { self.buf[idx].assume_init_read() };
        self.read = self.index(idx + 1);
        self.len -= 1;
        Ok(item)
    }

    /// Returns the item the next `pop` would return.
    pub fn peek(&self) -> Option<&T> {
        self.item_at(self.read)
    }

    /// Drops every resident item in FIFO order.
    pub fn clear(&mut self) {
        while let Ok(item) = self.pop() {
            drop(item);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn occupied_count(&self) -> usize {
        self.len
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Index of the slot that receives the next pushed item.
    pub fn write_cursor(&self) -> usize {
        self.write
    }

    /// Index of the slot returned by the next pop.
    pub fn read_cursor(&self) -> usize {
        self.read
    }

    /// Reports whether slot `index` holds a live item.
    ///
    /// Fails with [`SlotError::OutOfRange`] for indices outside `0..capacity`.
    pub fn slot_is_occupied(&self, index: usize) -> Result<bool, SlotError> {
        if index >= self.capacity() {
            return Err(SlotError::OutOfRange {
                index,
                capacity: self.capacity(),
            });
        }

        Ok(self.occupied_at(index))
    }

    /// Iterates over every slot in index order, not in FIFO order.
    pub fn slots(&self) -> Slots<'_, T> {
        Slots::new(self)
    }

    pub fn for_each_slot<F>(&self, visitor: F)
    where
        F: FnMut(Slot<'_, T>),
    {
        self.slots().for_each(visitor)
    }

    /// Destroys the queue, releasing the resident items from the read cursor
    /// forward and then the slot array. Dropping the queue does the same.
    pub fn teardown(self) {
        drop(self)
    }

    fn occupied_at(&self, index: usize) -> bool {
        self.offset(index) < self.len
    }

    pub(crate) fn item_at(&self, index: usize) -> Option<&T> {
        if index < self.capacity() && self.occupied_at(index) {
            // SAFETY: occupied slots always hold an initialised value.
            Some(unsafe { self.buf[index].assume_init_ref() })
        } else {
            None
        }
    }

    // distance of `index` past the read cursor, in [0, capacity)
    fn offset(&self, index: usize) -> usize {
        self.index(index + self.capacity() - self.read)
    }

    fn index(&self, pos: usize) -> usize {
        pos % self.capacity()
    }
}

impl<T> Drop for RingQueue<T> {
    fn drop(&mut self) {
        // walk the occupied run only, unoccupied slots hold no value
        let mut slot = self.read;
        while let Ok(item) = self.pop() {
            debug!(slot, "releasing resident item");
            drop(item);
            slot = self.read;
        }
        debug!(capacity = self.capacity(), "releasing slot table");
    }
}

impl<T> fmt::Debug for RingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingQueue")
            .field("capacity", &self.capacity())
            .field("len", &self.len)
            .field("write", &self.write)
            .field("read", &self.read)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_is_rejected() {
        let err = RingQueue::<u32>::with_capacity(0).unwrap_err();
        assert_eq!(err, CapacityError::InvalidCapacity);
    }

    #[test]
    fn new_queue_is_empty() {
        let queue = RingQueue::<u32>::with_capacity(8).unwrap();

        assert!(queue.is_empty());
        assert!(!queue.is_full());
        assert_eq!(queue.capacity(), 8);
        assert_eq!(queue.occupied_count(), 0);
        assert_eq!(queue.write_cursor(), 0);
        assert_eq!(queue.read_cursor(), 0);
        assert_eq!(queue.peek(), None);
    }

    #[test]
    fn cursors_track_count() {
        let mut queue = RingQueue::with_capacity(5).unwrap();

        for round in 0..3 {
            for i in 0..4 {
                queue.push(round * 10 + i).unwrap();
                assert_eq!(
                    queue.write_cursor(),
                    (queue.read_cursor() + queue.len()) % queue.capacity()
                );
            }
            for _ in 0..4 {
                queue.pop().unwrap();
                assert_eq!(
                    queue.write_cursor(),
                    (queue.read_cursor() + queue.len()) % queue.capacity()
                );
            }
        }

        // 12 pushes and pops over 5 slots
        assert_eq!(queue.read_cursor(), 2);
        assert_eq!(queue.write_cursor(), 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn full_and_empty_share_cursor_position() {
        let mut queue = RingQueue::with_capacity(3).unwrap();
        queue.push('a').unwrap();
        queue.push('b').unwrap();
        queue.push('c').unwrap();

        assert_eq!(queue.write_cursor(), queue.read_cursor());
        assert!(queue.is_full());
        for i in 0..3 {
            assert_eq!(queue.slot_is_occupied(i), Ok(true));
        }

        queue.clear();

        assert_eq!(queue.write_cursor(), queue.read_cursor());
        assert!(queue.is_empty());
        for i in 0..3 {
            assert_eq!(queue.slot_is_occupied(i), Ok(false));
        }
    }

    #[test]
    fn occupancy_after_wrap() {
        let mut queue = RingQueue::with_capacity(4).unwrap();
        for i in 0..4 {
            queue.push(i).unwrap();
        }
        queue.pop().unwrap();
        queue.pop().unwrap();
        queue.push(4).unwrap();

        // read = 2, len = 3: slots 2, 3 and 0 are live
        let occupied: Vec<bool> = (0..4).map(|i| queue.slot_is_occupied(i).unwrap()).collect();
        assert_eq!(occupied, [true, false, true, true]);
        assert_eq!(queue.write_cursor(), 1);
        assert_eq!(queue.peek(), Some(&2));
    }

    #[test]
    fn out_of_range_slot() {
        let queue = RingQueue::<u8>::with_capacity(4).unwrap();
        assert_eq!(
            queue.slot_is_occupied(4),
            Err(SlotError::OutOfRange {
                index: 4,
                capacity: 4
            })
        );
    }

    #[test]
    fn stored_none_is_still_occupied() {
        let mut queue = RingQueue::with_capacity(2).unwrap();
        queue.push(None::<u8>).unwrap();

        assert_eq!(queue.slot_is_occupied(0), Ok(true));
        assert_eq!(queue.peek(), Some(&None));
        assert_eq!(queue.pop(), Ok(None));
        assert_eq!(queue.pop(), Err(PopError::Empty));
    }

    #[test]
    fn debug_shows_cursors() {
        let mut queue = RingQueue::with_capacity(2).unwrap();
        queue.push(1).unwrap();
        assert_eq!(
            format!("{:?}", queue),
            "RingQueue { capacity: 2, len: 1, write: 1, read: 0 }"
        );
    }
}
