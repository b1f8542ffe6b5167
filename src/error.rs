use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CapacityError {
    InvalidCapacity,
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            CapacityError::InvalidCapacity => write!(f, "queue capacity must be at least one slot"),
        }
    }
}

impl std::error::Error for CapacityError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PushError {
    Full,
}

/// A rejected push. The item is handed back, the queue never took ownership of it.
#[derive(Clone, PartialEq, Eq)]
pub struct TryPushError<T> {
    pub(crate) err: PushError,
    pub(crate) val: T,
}

impl fmt::Display for PushError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            PushError::Full => write!(f, "push failed because queue is full"),
        }
    }
}

impl std::error::Error for PushError {}

impl<T> fmt::Debug for TryPushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryPushError")
            .field("kind", &self.err)
            .finish()
    }
}

impl<T> fmt::Display for TryPushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.err, f)
    }
}

impl<T> std::error::Error for TryPushError<T> {}

impl<T> TryPushError<T> {
    pub fn is_full(&self) -> bool {
        matches!(self.err, PushError::Full)
    }

    pub fn into_inner(self) -> T {
        self.val
    }

    pub fn into_push_error(self) -> PushError {
        self.err
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PopError {
    Empty,
}

impl fmt::Display for PopError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PopError::Empty => write!(fmt, "popping from an empty queue"),
        }
    }
}

impl std::error::Error for PopError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlotError {
    OutOfRange { index: usize, capacity: usize },
}

impl fmt::Display for SlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SlotError::OutOfRange { index, capacity } => write!(
                f,
                "slot index {} is out of range for a queue of {} slots",
                index, capacity
            ),
        }
    }
}

impl std::error::Error for SlotError {}
