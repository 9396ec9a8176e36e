//! Bounded FIFO used by the delay compositor
//!
//! The capacity bound is structural: pushing into a full queue returns the
//! evicted oldest entry in the same call, so the queue can never be
//! observed holding more than `capacity` entries.

use std::collections::VecDeque;

use crate::error::{Error, Result};

/// Bounded FIFO of delayed entries
pub struct DelayQueue<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> DelayQueue<T> {
    /// Create a queue holding at most `capacity` entries
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfiguration` if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidConfiguration(
                "delay queue capacity must be >= 1".to_string(),
            ));
        }
        Ok(Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Push the newest entry, returning the evicted oldest one when full
    pub fn push(&mut self, entry: T) -> Option<T> {
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(entry);
        evicted
    }

    /// The oldest entry, if any
    pub fn front(&self) -> Option<&T> {
        self.entries.front()
    }

    /// Number of entries currently queued
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the queue has reached capacity
    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remove and yield every entry, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.entries.drain(..)
    }
}

#[cfg(test)]
#[path = "delay_queue_tests.rs"]
mod tests;
