//! Natively-owned growable storage with copy-on-write sharing.

use alloc::{rc::Rc, vec::Vec};

/// Heap-resident UTF-8 storage behind a reference-counted handle.
///
/// Cloning a [`NativeBuf`] shares the allocation. Mutation goes through
/// [`NativeBuf::make_unique_with_capacity`], which reallocates unless the
/// handle is the sole owner — shared bytes are never written in place.
#[derive(Clone)]
pub(crate) struct NativeBuf {
    bytes: Rc<Vec<u8>>,
    known_ascii: bool,
}

impl NativeBuf {
    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        NativeBuf {
            known_ascii: bytes.iter().all(u8::is_ascii),
            bytes: Rc::new(bytes.to_vec()),
        }
    }

    /// Wraps an owned buffer whose contents were already validated or
    /// materialized by the caller.
    pub(crate) fn from_vec(bytes: Vec<u8>) -> Self {
        NativeBuf {
            known_ascii: bytes.iter().all(u8::is_ascii),
            bytes: Rc::new(bytes),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    #[inline]
    pub(crate) fn is_known_ascii(&self) -> bool {
        self.known_ascii
    }

    #[inline]
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// `true` when this handle is the only owner of the allocation, i.e.
    /// in-place mutation is permitted.
    #[inline]
    pub(crate) fn is_unique(&self) -> bool {
        Rc::strong_count(&self.bytes) == 1
    }

    /// Ensures exclusive ownership with capacity for at least `capacity`
    /// bytes, reallocating (and copying the current contents) otherwise.
    pub(crate) fn make_unique_with_capacity(&mut self, capacity: usize) {
        if self.is_unique() && self.capacity() >= capacity {
            return;
        }
        let mut fresh = Vec::with_capacity(capacity.max(self.len()));
        fresh.extend_from_slice(&self.bytes);
        self.bytes = Rc::new(fresh);
    }

    /// Appends bytes in place. Contract: the handle is uniquely owned with
    /// sufficient spare capacity (see [`NativeBuf::make_unique_with_capacity`]).
    pub(crate) fn push_bytes(&mut self, bytes: &[u8]) {
        debug_assert!(self.is_unique(), "in-place append on a shared buffer");
        let vec = Rc::get_mut(&mut self.bytes).expect("unique native buffer");
        vec.extend_from_slice(bytes);
        self.known_ascii = self.known_ascii && bytes.iter().all(u8::is_ascii);
    }
}
