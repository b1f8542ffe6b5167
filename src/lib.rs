//! A fixed-capacity circular FIFO queue.
//!
//! [`RingQueue`] stores items in a fixed array of slots addressed by a write
//! cursor and a read cursor. Pushing into a full queue or popping from an
//! empty one fails immediately instead of blocking.
//!
//! ```
//! use ring_queue::RingQueue;
//!
//! let mut queue = RingQueue::with_capacity(2).unwrap();
//! queue.push("a").unwrap();
//! queue.push("b").unwrap();
//!
//! let rejected = queue.push("c").unwrap_err();
//! assert!(rejected.is_full());
//! assert_eq!(rejected.into_inner(), "c");
//!
//! assert_eq!(queue.pop(), Ok("a"));
//! ```

pub mod error;
mod ring;
mod slot;

pub use crate::error::{CapacityError, PopError, PushError, SlotError, TryPushError};
pub use crate::ring::RingQueue;
pub use crate::slot::{Slot, Slots};
