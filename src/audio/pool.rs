// ABOUTME: Handle-indexed pool of input buffers for the software decoder
// ABOUTME: Handles grow monotonically and are never reused; backing storage is recycled

use crossbeam::queue::ArrayQueue;
use std::collections::HashMap;

/// Number of spare buffers kept for reuse
const SPARE_BUFFERS: usize = 4;

/// Pool of pending input buffers keyed by handle
///
/// A slot lives from [`InputBufferPool::acquire`] until [`InputBufferPool::take`]
/// removes it. Its storage goes back to a spare list via [`InputBufferPool::recycle`].
pub struct InputBufferPool {
    pending: HashMap<usize, Vec<u8>>,
    spare: ArrayQueue<Vec<u8>>,
    next_handle: usize,
    capacity: usize,
}

impl InputBufferPool {
    /// Create a new input buffer pool
    ///
    /// # Arguments
    /// * `buffer_capacity` - Size of each input buffer in bytes
    pub fn new(buffer_capacity: usize) -> Self {
        Self {
            pending: HashMap::new(),
            spare: ArrayQueue::new(SPARE_BUFFERS),
            next_handle: 0,
            capacity: buffer_capacity,
        }
    }

    /// Allocate a zeroed slot and return its fresh handle
    pub fn acquire(&mut self) -> usize {
        self.next_handle += 1;
        let handle = self.next_handle;

        let mut buf = self.spare.pop().unwrap_or_else(|| Vec::with_capacity(self.capacity));
        buf.clear();
        buf.resize(self.capacity, 0);
        self.pending.insert(handle, buf);
        handle
    }

    /// Writable storage of a live slot
    pub fn get_mut(&mut self, handle: usize) -> Option<&mut [u8]> {
        self.pending.get_mut(&handle).map(Vec::as_mut_slice)
    }

    /// Remove a live slot, consuming its handle
    pub fn take(&mut self, handle: usize) -> Option<Vec<u8>> {
        self.pending.remove(&handle)
    }

    /// Return storage taken from the pool so later slots can reuse it
    pub fn recycle(&self, buf: Vec<u8>) {
        let _ = self.spare.push(buf); // Dropped if the spare list is full
    }

    /// Whether `handle` refers to a live slot
    pub fn contains(&self, handle: usize) -> bool {
        self.pending.contains_key(&handle)
    }

    /// Number of slots dequeued but not yet queued
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Forget every pending slot. Handles keep counting up.
    pub fn clear(&mut self) {
        for (_, buf) in self.pending.drain() {
            let _ = self.spare.push(buf);
        }
    }

    /// Get the buffer capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
