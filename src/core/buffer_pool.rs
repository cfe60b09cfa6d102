//! Reusable scratch buffers for line assembly
//!
//! Pool membership is advisory: a buffer that is not returned, or one that
//! grew too large to keep, is simply replaced by a fresh allocation later.

use parking_lot::Mutex;
use std::ops::{Deref, DerefMut};

/// Initial capacity of a freshly allocated buffer
pub const DEFAULT_BUFFER_CAPACITY: usize = 256;
/// Number of idle buffers kept around
pub const DEFAULT_MAX_BUFFERS: usize = 64;
/// Buffers that grew beyond this are dropped instead of pooled
pub const DEFAULT_MAX_RETAINED_CAPACITY: usize = 64 * 1024;

#[derive(Debug)]
pub struct BufferPool {
    free: Mutex<Vec<Vec<u8>>>,
    buffer_capacity: usize,
    max_buffers: usize,
    max_retained_capacity: usize,
}

/// A buffer borrowed from a [`BufferPool`]; returned to it on drop.
pub struct PooledBuffer<'a> {
    data: Vec<u8>,
    pool: &'a BufferPool,
}

impl BufferPool {
    pub fn new() -> Self {
        Self::with_limits(
            DEFAULT_BUFFER_CAPACITY,
            DEFAULT_MAX_BUFFERS,
            DEFAULT_MAX_RETAINED_CAPACITY,
        )
    }

    pub fn with_limits(buffer_capacity: usize, max_buffers: usize, max_retained_capacity: usize) -> Self {
        Self {
            free: Mutex::new(Vec::with_capacity(max_buffers)),
            buffer_capacity,
            max_buffers,
            max_retained_capacity,
        }
    }

    /// Take an empty buffer, allocating if none is idle.
    pub fn acquire(&self) -> PooledBuffer<'_> {
        let data = self
            .free
            .lock()
            .pop()
            .unwrap_or_else(|| Vec::with_capacity(self.buffer_capacity));
        PooledBuffer { data, pool: self }
    }

    /// Clear `buffer` and keep it for reuse if there is room.
    pub fn release(&self, mut buffer: Vec<u8>) {
        if buffer.capacity() > self.max_retained_capacity {
            return;
        }
        buffer.clear();
        let mut free = self.free.lock();
        if free.len() < self.max_buffers {
            free.push(buffer);
        }
    }

    /// Number of idle buffers currently held
    pub fn idle(&self) -> usize {
        self.free.lock().len()
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new()
    }
}

impl PooledBuffer<'_> {
    /// Detach the buffer; it will not go back to the pool.
    pub fn into_inner(mut self) -> Vec<u8> {
        std::mem::take(&mut self.data)
    }
}

impl Deref for PooledBuffer<'_> {
    type Target = Vec<u8>;

    fn deref(&self) -> &Vec<u8> {
        &self.data
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut Vec<u8> {
        &mut self.data
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        let data = std::mem::take(&mut self.data);
        if data.capacity() > 0 {
            self.pool.release(data);
        }
    }
}
