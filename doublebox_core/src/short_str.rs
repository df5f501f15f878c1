//! Inline short strings: up to 5 bytes carried in a 48-bit payload.
//!
//! Packing and unpacking use shift arithmetic on the payload, so byte 0 of
//! the string always lands in the lowest 8 bits of the word. This matches
//! the little-endian memory layout of the reference encoding on every host
//! and needs no endianness detection.

use std::fmt;

use crate::tag::PAYLOAD_MASK;

/// Pack up to [`ShortStr::MAX_LEN`] bytes into the low bytes of a payload.
///
/// Bytes beyond the capacity are silently dropped; missing bytes are zero.
#[must_use]
pub(crate) const fn pack(bytes: &[u8]) -> u64 {
    let n = if bytes.len() < ShortStr::MAX_LEN {
        bytes.len()
    } else {
        ShortStr::MAX_LEN
    };
    let mut payload = 0u64;
    let mut i = 0;
    while i < n {
        payload |= (bytes[i] as u64) << (8 * i);
        i += 1;
    }
    payload
}

/// A short text value stored inline in a doublebox payload.
///
/// Holds the 5 raw payload bytes plus the logical length, which runs up to
/// the first NUL byte (the encoder zero-pads, so for encoder-produced
/// payloads this is the original string length). Bytes after a NUL are
/// preserved verbatim so that a fabricated irregular payload round-trips,
/// but they are not part of [`ShortStr::as_bytes`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShortStr {
    bytes: [u8; Self::MAX_LEN],
    len: u8,
}

impl ShortStr {
    /// Maximum number of bytes an inline string can carry.
    pub const MAX_LEN: usize = 5;

    /// Build from a string, keeping at most the first 5 bytes.
    ///
    /// Truncation is silent by contract.
    #[must_use]
    pub const fn new(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }

    /// Build from raw bytes, keeping at most the first 5.
    #[must_use]
    pub const fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_payload(pack(bytes))
    }

    /// Unpack from a 48-bit payload.
    ///
    /// Bits above the payload are ignored, so passing a whole tagged word is
    /// fine.
    #[must_use]
    pub const fn from_payload(payload: u64) -> Self {
        let payload = payload & PAYLOAD_MASK;
        let mut bytes = [0u8; Self::MAX_LEN];
        let mut len = 0u8;
        let mut i = 0;
        while i < Self::MAX_LEN {
            let b = ((payload >> (8 * i)) & 0xFF) as u8;
            bytes[i] = b;
            // Length runs to the first NUL only.
            if b != 0 && len as usize == i {
                len = i as u8 + 1;
            }
            i += 1;
        }
        Self { bytes, len }
    }

    /// Re-pack into a 48-bit payload (low 5 bytes, high byte zero).
    #[must_use]
    pub const fn to_payload(self) -> u64 {
        let mut payload = 0u64;
        let mut i = 0;
        while i < Self::MAX_LEN {
            payload |= (self.bytes[i] as u64) << (8 * i);
            i += 1;
        }
        payload
    }

    /// The string bytes up to the first NUL.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// View as `&str` if the bytes are valid UTF-8.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    /// Number of bytes up to the first NUL.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether the string holds no bytes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Copy into a NUL-terminated 6-byte buffer.
    ///
    /// At most 5 string bytes are written and the remainder is zeroed, so
    /// `buf` always holds a valid C string for FFI consumers.
    pub fn write_c_buf(&self, buf: &mut [u8; 6]) {
        *buf = [0; 6];
        buf[..self.len as usize].copy_from_slice(self.as_bytes());
    }
}

impl fmt::Display for ShortStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl fmt::Debug for ShortStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShortStr({:?})", String::from_utf8_lossy(self.as_bytes()))
    }
}
