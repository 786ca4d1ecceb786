//! String decoding at the foreign-function boundary.
//!
//! The compiled module passes strings as offsets into its linear memory,
//! either with an explicit byte length or terminated by a NUL byte. The
//! recorder only sees the [`StringDecoder`] capability, never the memory.

use crate::error::{DcError, Result};

/// A string reference handed across the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrHandle {
    pub ptr: u32,
    /// Byte length, or `None` for a NUL-terminated string.
    pub len: Option<u32>,
}

impl StrHandle {
    pub fn with_len(ptr: u32, len: u32) -> Self {
        Self {
            ptr,
            len: Some(len),
        }
    }

    pub fn nul_terminated(ptr: u32) -> Self {
        Self { ptr, len: None }
    }
}

/// Decodes a [`StrHandle`] into an owned string.
///
/// The referenced bytes only need to stay valid for the duration of the call.
pub trait StringDecoder {
    fn decode(&self, handle: StrHandle) -> Result<String>;
}

/// A borrowed view of a module's linear memory.
#[derive(Debug, Clone, Copy)]
pub struct LinearMemory<'a> {
    bytes: &'a [u8],
}

impl<'a> LinearMemory<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    fn slice(&self, handle: StrHandle) -> Result<&'a [u8]> {
        let start = handle.ptr as usize;
        let tail = self.bytes.get(start..).ok_or_else(|| {
            DcError::invalid(format!(
                "string pointer {start} outside memory of {} bytes",
                self.bytes.len()
            ))
        })?;
        match handle.len {
            Some(len) => tail.get(..len as usize).ok_or_else(|| {
                DcError::invalid(format!("string at {start} with length {len} overruns memory"))
            }),
            None => {
                let end = tail
                    .iter()
                    .position(|&b| b == 0)
                    .ok_or_else(|| DcError::invalid(format!("string at {start} is not terminated")))?;
                Ok(&tail[..end])
            }
        }
    }
}

impl StringDecoder for LinearMemory<'_> {
    fn decode(&self, handle: StrHandle) -> Result<String> {
        let bytes = self.slice(handle)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|e| DcError::invalid(format!("string at {} is not UTF-8: {e}", handle.ptr)))
    }
}
