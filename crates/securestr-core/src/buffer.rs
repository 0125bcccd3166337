//! The [`SecureStr`] buffer type: construction, introspection, character
//! access, and the in-place mutators truncate, clear, wipe and swap.

use core::fmt;
use core::mem;

use zeroize::Zeroize;

use crate::error::{StrError, StrResult};
use crate::CAP_MAX;

/// An owned, capacity-bounded, length-tracked byte string.
///
/// The backing storage is always `capacity + 1` bytes; the byte at offset
/// `len` is always NUL, so [`as_bytes_with_nul`](Self::as_bytes_with_nul)
/// can hand the content to terminator-based APIs without copying. The
/// capacity is fixed at construction: there is no grow or resize operation,
/// and no operation silently truncates.
///
/// Each buffer exclusively owns its storage. [`swap`](Self::swap) is the
/// only way ownership moves between two live buffers; release happens when
/// the buffer is dropped.
pub struct SecureStr {
    pub(crate) data: Box<[u8]>,
    pub(crate) cap: usize,
    pub(crate) len: usize,
}

impl SecureStr {
    /// Allocates a buffer able to hold up to `cap` content bytes.
    ///
    /// The backing allocation is `cap + 1` bytes, the extra byte holding the
    /// NUL terminator. The new buffer is empty, with the terminator at
    /// offset 0.
    ///
    /// Fails with [`StrError::CapacityCeiling`] when `cap` exceeds
    /// [`CAP_MAX`], and with [`StrError::AllocationFailed`] when the storage
    /// cannot be obtained. A partially constructed buffer is never returned.
    pub fn with_capacity(cap: usize) -> StrResult<Self> {
        if cap > CAP_MAX {
            return Err(StrError::CapacityCeiling { requested: cap });
        }
        let mut storage = Vec::new();
        storage
            .try_reserve_exact(cap + 1)
            .map_err(|_| StrError::AllocationFailed { requested: cap + 1 })?;
        storage.resize(cap + 1, 0);
        Ok(Self {
            data: storage.into_boxed_slice(),
            cap,
            len: 0,
        })
    }

    /// Current content length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Maximum content length, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// True when the buffer holds no content bytes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Content bytes, without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Content bytes including the trailing NUL terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.data[..=self.len]
    }

    /// Reads the byte at `index`.
    ///
    /// Valid positions are `0..len()`; positions between the content length
    /// and the capacity fail even though storage exists there.
    pub fn byte_at(&self, index: usize) -> StrResult<u8> {
        if index < self.len {
            Ok(self.data[index])
        } else {
            Err(StrError::Range {
                index,
                limit: self.len,
            })
        }
    }

    /// Overwrites the byte at `index`.
    ///
    /// Same position rule as [`byte_at`](Self::byte_at): only positions
    /// inside the current content are writable. Out-of-range writes fail
    /// without touching the buffer.
    pub fn set_byte(&mut self, index: usize, byte: u8) -> StrResult<()> {
        if index < self.len {
            self.data[index] = byte;
            Ok(())
        } else {
            Err(StrError::Range {
                index,
                limit: self.len,
            })
        }
    }

    /// Shortens the content to `new_len` bytes.
    ///
    /// `new_len` must not exceed the current length; truncate never grows
    /// a buffer's apparent content.
    pub fn truncate(&mut self, new_len: usize) -> StrResult<()> {
        if new_len > self.len {
            return Err(StrError::Range {
                index: new_len,
                limit: self.len,
            });
        }
        self.len = new_len;
        self.data[new_len] = 0;
        Ok(())
    }

    /// Resets the length to zero and rewrites the terminator at offset 0.
    ///
    /// Storage beyond offset 0 is left untouched; use [`wipe`](Self::wipe)
    /// when residual content bytes must not survive.
    pub fn clear(&mut self) {
        self.len = 0;
        self.data[0] = 0;
    }

    /// Overwrites the entire backing storage with zero bytes and resets the
    /// length.
    ///
    /// All `capacity + 1` bytes are zeroized, including the reserved tail
    /// beyond the current content, so no residual content bytes survive in
    /// memory. The zeroization is performed through the `zeroize` crate and
    /// is not elided by the optimizer.
    pub fn wipe(&mut self) {
        self.data.zeroize();
        self.len = 0;
    }

    /// Exchanges storage, capacity and length with `other`.
    ///
    /// The exchange is total: after the call each buffer owns what the
    /// other owned before, with no allocation and no copying of content.
    pub fn swap(&mut self, other: &mut SecureStr) {
        mem::swap(self, other);
    }
}

impl fmt::Debug for SecureStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureStr")
            .field("cap", &self.cap)
            .field("len", &self.len)
            .field("content", &self.as_bytes().escape_ascii().to_string())
            .finish()
    }
}
