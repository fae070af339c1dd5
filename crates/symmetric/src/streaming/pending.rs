//! Parked writes

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Hands out a ticket no other parked write has used
pub(crate) fn next_ticket() -> u64 {
    NEXT_TICKET.fetch_add(1, Ordering::Relaxed)
}

/// A write that a sink suspended
///
/// Holds the caller's input and the offset of the first byte that has not
/// been consumed yet. Everything before the offset has been transformed and
/// pushed, or sits in the context's tail buffer. Pass it to
/// [`CipherContext::continue_write`](crate::CipherContext::continue_write)
/// on the context that produced it to carry on.
///
/// The context stays parked until the write is continued. Dropping a
/// `PendingWrite` does not release it: `write` and `reset` keep failing with
/// `InvalidState` until the context is closed, which discards the parked
/// write (reopen to start a new session). Destroying the context discards it
/// as well.
#[must_use = "a suspended write does nothing unless it is continued"]
pub struct PendingWrite<'a> {
    pub(crate) input: &'a [u8],
    pub(crate) offset: usize,
    pub(crate) ticket: u64,
}

impl<'a> PendingWrite<'a> {
    pub(crate) fn new(input: &'a [u8], offset: usize, ticket: u64) -> Self {
        Self {
            input,
            offset,
            ticket,
        }
    }

    /// Offset of the first unconsumed input byte
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of input bytes not consumed yet
    pub fn remaining(&self) -> usize {
        self.input.len() - self.offset
    }

    /// Length of the original input
    pub fn input_len(&self) -> usize {
        self.input.len()
    }
}

impl fmt::Debug for PendingWrite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingWrite")
            .field("offset", &self.offset)
            .field("input_len", &self.input.len())
            .finish()
    }
}
