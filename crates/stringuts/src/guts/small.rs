//! Inline small-string storage.

/// Inline capacity in bytes. Matches the 15-byte budget of a two-word
/// representation on 64-bit targets.
pub const SMALL_CAP: usize = 15;

/// A string stored entirely inline, without heap allocation.
///
/// Always a fast UTF-8 representation: its bytes are contiguous and
/// directly addressable for the full extent.
#[derive(Clone, Copy)]
pub(crate) struct SmallBuf {
    len: u8,
    known_ascii: bool,
    bytes: [u8; SMALL_CAP],
}

impl SmallBuf {
    pub(crate) const fn empty() -> Self {
        SmallBuf {
            len: 0,
            known_ascii: true,
            bytes: [0; SMALL_CAP],
        }
    }

    /// Packs `bytes` inline, or `None` when it exceeds [`SMALL_CAP`].
    pub(crate) fn try_from_bytes(bytes: &[u8]) -> Option<Self> {
        Self::try_concat(bytes, &[])
    }

    /// Packs two concatenated byte sources inline, or `None` when the
    /// combined length exceeds [`SMALL_CAP`].
    pub(crate) fn try_concat(head: &[u8], tail: &[u8]) -> Option<Self> {
        let total = head.len() + tail.len();
        if total > SMALL_CAP {
            return None;
        }
        let mut buf = SmallBuf::empty();
        buf.bytes[..head.len()].copy_from_slice(head);
        buf.bytes[head.len()..total].copy_from_slice(tail);
        buf.len = total as u8;
        buf.known_ascii = buf.as_bytes().iter().all(u8::is_ascii);
        Some(buf)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub(crate) fn is_known_ascii(&self) -> bool {
        self.known_ascii
    }

    #[inline]
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Appends `bytes` in place. Contract: the combined length fits.
    pub(crate) fn push_bytes(&mut self, bytes: &[u8]) {
        let len = self.len();
        debug_assert!(len + bytes.len() <= SMALL_CAP);
        self.bytes[len..len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len() as u8;
        self.known_ascii = self.known_ascii && bytes.iter().all(u8::is_ascii);
    }
}
