//! Whole-buffer and substring edit operations: overwriting copy, append,
//! single-byte append, and substring extraction.
//!
//! Every operation checks capacity and range up front and is all-or-nothing:
//! on failure the destination is left byte-for-byte unchanged. Partial
//! writes never occur.

use crate::buffer::SecureStr;
use crate::error::{StrError, StrResult};

impl SecureStr {
    /// Overwrites `self` with the full content of `src`.
    ///
    /// Requires `self.capacity() >= src.len()`; fails with
    /// [`StrError::Capacity`] otherwise, leaving `self` unmodified.
    pub fn copy_from(&mut self, src: &SecureStr) -> StrResult<()> {
        self.copy_from_bytes(src.as_bytes())
    }

    /// Appends the full content of `src` after the existing content.
    ///
    /// Requires `src.len()` free bytes in the tail
    /// (`self.capacity() - self.len()`); fails with [`StrError::Capacity`]
    /// otherwise, leaving `self` unmodified.
    pub fn append_from(&mut self, src: &SecureStr) -> StrResult<()> {
        self.append_bytes(src.as_bytes())
    }

    /// Appends a single byte, requiring exactly one free slot.
    pub fn append_byte(&mut self, byte: u8) -> StrResult<()> {
        if self.len >= self.cap {
            return Err(StrError::Capacity {
                required: 1,
                available: 0,
            });
        }
        self.data[self.len] = byte;
        self.len += 1;
        self.data[self.len] = 0;
        Ok(())
    }

    /// Overwrites `self` with `count` bytes of `src` starting at `start`.
    ///
    /// The window must lie entirely inside the source content
    /// (`start <= src.len()` and `start + count <= src.len()`), and `self`
    /// must have capacity for `count` bytes. Range violations report
    /// [`StrError::Range`], capacity violations [`StrError::Capacity`];
    /// either way `self` is unmodified.
    pub fn substr_from(&mut self, src: &SecureStr, start: usize, count: usize) -> StrResult<()> {
        let window = substr_window(src, start, count)?;
        self.copy_from_bytes(window)
    }

    /// Appends `count` bytes of `src` starting at `start` after the
    /// existing content.
    ///
    /// Same source window rule as [`substr_from`](Self::substr_from); the
    /// destination check runs against the free tail space instead of the
    /// whole capacity.
    pub fn append_substr_from(
        &mut self,
        src: &SecureStr,
        start: usize,
        count: usize,
    ) -> StrResult<()> {
        let window = substr_window(src, start, count)?;
        self.append_bytes(window)
    }
}

/// Validates a source window and returns the content slice it selects.
fn substr_window(src: &SecureStr, start: usize, count: usize) -> StrResult<&[u8]> {
    if start > src.len {
        return Err(StrError::Range {
            index: start,
            limit: src.len,
        });
    }
    if count > src.len - start {
        return Err(StrError::Range {
            index: start + count,
            limit: src.len,
        });
    }
    Ok(&src.data[start..start + count])
}
