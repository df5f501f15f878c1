//! The doublebox value: a tagged union packed into one 64-bit word.
//!
//! Every [`DoubleBox`] is a valid pattern of 8 bytes. Ordinary doubles pass
//! through unboxed; the six symbolic variants live in the NaN tag space
//! defined in [`crate::tag`]. Encoding is a pure function of (tag, payload)
//! and decoding is total: every 64-bit word classifies to exactly one
//! [`Kind`].
//!
//! Contracts worth knowing:
//!
//! - Foreign NaNs (any bit pattern above the numeric boundary) are
//!   canonicalized by [`DoubleBox::double`], never passed through, so an
//!   encoded double can never masquerade as a reserved tag.
//! - Integer and string payloads truncate silently to 48 bits / 5 bytes.
//! - Accessors are checked: calling `as_integer` on a string word returns
//!   `None` rather than garbage payload bits.

use crate::error::ParseBitsError;
use crate::short_str::ShortStr;
use crate::tag::{
    Kind, BOOL_TAG, CANONICAL_NAN, CUSTOM_TAG, EMPTY_BITS, EMPTY_TAG, FALSE_BITS, INTEGER_TAG,
    MAX_NUMBER, NULL_BITS, PAYLOAD_MASK, STRING_TAG, TYPE_MASK, UNDEFINED_BITS,
};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A dynamically-typed value encoded in a single 64-bit IEEE 754 double.
///
/// This type is exactly 8 bytes, `Copy`, and owns no resources. It can
/// represent:
///
/// - Any double, including ±0.0, ±infinity, and canonical NaN (unboxed)
/// - The null and undefined sentinels
/// - Booleans
/// - 48-bit unsigned integers
/// - Short strings of up to 5 bytes, stored inline
/// - 48-bit custom payloads with caller-defined meaning
/// - The all-ones "empty" sentinel
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct DoubleBox {
    bits: u64,
}

impl DoubleBox {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Encode a double.
    ///
    /// Any bit pattern above the numeric boundary — a foreign or
    /// non-canonical NaN that would collide with a reserved tag — collapses
    /// to the canonical NaN word. Everything else passes through unchanged,
    /// preserving sign, exponent, and mantissa exactly.
    #[inline]
    #[must_use]
    pub fn double(value: f64) -> Self {
        let bits = value.to_bits();
        if bits > MAX_NUMBER {
            Self {
                bits: CANONICAL_NAN,
            }
        } else {
            Self { bits }
        }
    }

    /// The null sentinel.
    #[inline]
    #[must_use]
    pub const fn null() -> Self {
        Self { bits: NULL_BITS }
    }

    /// The undefined sentinel.
    #[inline]
    #[must_use]
    pub const fn undefined() -> Self {
        Self {
            bits: UNDEFINED_BITS,
        }
    }

    /// Encode a boolean. The encoder sets only payload bit 0.
    #[inline]
    #[must_use]
    pub const fn bool(b: bool) -> Self {
        Self {
            bits: BOOL_TAG | b as u64,
        }
    }

    /// Encode a 48-bit unsigned integer.
    ///
    /// Values needing more than 48 bits are silently truncated; callers
    /// must not rely on overflow detection.
    #[inline]
    #[must_use]
    pub const fn integer(n: u64) -> Self {
        Self {
            bits: INTEGER_TAG | (n & PAYLOAD_MASK),
        }
    }

    /// Encode up to the first 5 bytes of a string, zero padded.
    ///
    /// Longer input is silently truncated, never an error.
    #[inline]
    #[must_use]
    pub const fn short_str(s: &str) -> Self {
        Self {
            bits: STRING_TAG | ShortStr::new(s).to_payload(),
        }
    }

    /// Encode a 48-bit custom payload. Same packing as [`Self::integer`];
    /// the meaning of the payload is opaque to the codec.
    #[inline]
    #[must_use]
    pub const fn custom(n: u64) -> Self {
        Self {
            bits: CUSTOM_TAG | (n & PAYLOAD_MASK),
        }
    }

    /// The all-ones empty sentinel (memset-friendly).
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { bits: EMPTY_BITS }
    }

    /// Escape hatch: wrap an arbitrary 64-bit pattern unconditionally.
    ///
    /// For diagnostics, tests, and storage round-trips; not a normal
    /// production path.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    /// Parse a hex word such as `0xFFF9000000000000` or `FFFC_0000_075B_CD15`.
    ///
    /// Accepts an optional `0x`/`0X` prefix and underscore separators, up to
    /// 16 hex digits. This is a diagnostic entry point; the resulting box is
    /// whatever the bits say it is.
    ///
    /// # Errors
    ///
    /// Returns [`ParseBitsError`] on empty input, a non-hex character, or
    /// more than 16 digits.
    pub fn from_hex(input: &str) -> Result<Self, ParseBitsError> {
        let digits = input
            .strip_prefix("0x")
            .or_else(|| input.strip_prefix("0X"))
            .unwrap_or(input);

        let mut bits = 0u64;
        let mut count = 0usize;
        for c in digits.chars() {
            if c == '_' {
                continue;
            }
            let d = c
                .to_digit(16)
                .ok_or(ParseBitsError::InvalidDigit { digit: c })?;
            count += 1;
            if count > 16 {
                return Err(ParseBitsError::Overflow);
            }
            bits = (bits << 4) | u64::from(d);
        }
        if count == 0 {
            return Err(ParseBitsError::Empty);
        }
        Ok(Self { bits })
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Classify this word. The single source of truth for discrimination.
    #[inline]
    #[must_use]
    pub const fn kind(self) -> Kind {
        Kind::of_bits(self.bits)
    }

    /// Check if this is an ordinary double (including ±inf and NaN).
    #[inline]
    #[must_use]
    pub const fn is_double(self) -> bool {
        self.bits <= MAX_NUMBER
    }

    /// Check if this is the null sentinel.
    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.bits & TYPE_MASK == NULL_BITS
    }

    /// Check if this is the undefined sentinel.
    #[inline]
    #[must_use]
    pub const fn is_undefined(self) -> bool {
        self.bits & TYPE_MASK == UNDEFINED_BITS
    }

    /// Check if this is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(self) -> bool {
        self.bits & TYPE_MASK == BOOL_TAG
    }

    /// Check if this is exactly the canonical false word.
    #[inline]
    #[must_use]
    pub const fn is_false(self) -> bool {
        self.bits == FALSE_BITS
    }

    /// Check if this is a boolean with any nonzero payload.
    #[inline]
    #[must_use]
    pub const fn is_true(self) -> bool {
        self.is_bool() && self.payload() != 0
    }

    /// Check if this is a 48-bit integer.
    #[inline]
    #[must_use]
    pub const fn is_integer(self) -> bool {
        self.bits & TYPE_MASK == INTEGER_TAG
    }

    /// Check if this is an inline short string.
    #[inline]
    #[must_use]
    pub const fn is_short_str(self) -> bool {
        self.bits & TYPE_MASK == STRING_TAG
    }

    /// Check if this carries a custom payload.
    #[inline]
    #[must_use]
    pub const fn is_custom(self) -> bool {
        self.bits & TYPE_MASK == CUSTOM_TAG
    }

    /// Check if this is the empty sentinel (by tag, any payload).
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits & TYPE_MASK == EMPTY_TAG
    }

    /// Get the 48-bit payload.
    #[inline]
    const fn payload(self) -> u64 {
        self.bits & PAYLOAD_MASK
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Try to extract as a double.
    #[inline]
    #[must_use]
    pub fn as_double(self) -> Option<f64> {
        if self.is_double() {
            Some(f64::from_bits(self.bits))
        } else {
            None
        }
    }

    /// Try to extract as a boolean. Any nonzero payload is true.
    #[inline]
    #[must_use]
    pub const fn as_bool(self) -> Option<bool> {
        if self.is_bool() {
            Some(self.payload() != 0)
        } else {
            None
        }
    }

    /// Try to extract as a 48-bit unsigned integer.
    #[inline]
    #[must_use]
    pub const fn as_integer(self) -> Option<u64> {
        if self.is_integer() {
            Some(self.payload())
        } else {
            None
        }
    }

    /// Try to extract the 48-bit custom payload.
    #[inline]
    #[must_use]
    pub const fn as_custom(self) -> Option<u64> {
        if self.is_custom() {
            Some(self.payload())
        } else {
            None
        }
    }

    /// Try to extract the inline short string.
    #[inline]
    #[must_use]
    pub const fn as_short_str(self) -> Option<ShortStr> {
        if self.is_short_str() {
            Some(ShortStr::from_payload(self.payload()))
        } else {
            None
        }
    }

    /// Get the raw bits as an unsigned 64-bit integer.
    ///
    /// Useful for hashing, storage, and branchless tag checks against the
    /// constants in [`crate::tag`].
    #[inline(always)]
    #[must_use]
    pub const fn raw_bits(self) -> u64 {
        self.bits
    }

    /// Get the raw bits (alias of [`Self::raw_bits`], serialization style).
    #[inline]
    #[must_use]
    pub const fn to_bits(self) -> u64 {
        self.bits
    }

    /// Human-readable name of this word's kind.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        self.kind().as_str()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl PartialEq for DoubleBox {
    /// Doubles compare under IEEE 754 rules (`NaN != NaN`, `-0.0 == 0.0`);
    /// everything else compares by raw bit pattern, which is canonical for
    /// the symbolic variants.
    ///
    /// There is deliberately no `Eq` impl: a NaN-carrying box is not equal
    /// to itself, so equality is not reflexive. Key hash containers by
    /// [`DoubleBox::raw_bits`] instead.
    fn eq(&self, other: &Self) -> bool {
        if self.is_double() && other.is_double() {
            return f64::from_bits(self.bits) == f64::from_bits(other.bits);
        }
        self.bits == other.bits
    }
}

impl Hash for DoubleBox {
    /// Hashes the raw bit pattern. Bit-distinct doubles that compare equal
    /// (`0.0` vs `-0.0`) hash differently, consistent with keying containers
    /// by [`DoubleBox::raw_bits`].
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl Default for DoubleBox {
    /// The undefined sentinel.
    fn default() -> Self {
        Self::undefined()
    }
}

impl fmt::Debug for DoubleBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            Kind::Double => write!(f, "DoubleBox({:?})", f64::from_bits(self.bits)),
            Kind::Null => write!(f, "DoubleBox(null)"),
            Kind::Undefined => write!(f, "DoubleBox(undefined)"),
            Kind::Bool => write!(f, "DoubleBox({})", self.payload() != 0),
            Kind::Integer => write!(f, "DoubleBox(integer {})", self.payload()),
            Kind::Str => write!(
                f,
                "DoubleBox(string {:?})",
                ShortStr::from_payload(self.payload()).to_string()
            ),
            Kind::Custom => write!(f, "DoubleBox(custom {})", self.payload()),
            Kind::Empty => write!(f, "DoubleBox(empty)"),
            Kind::Unrecognized => write!(f, "DoubleBox(bits={:#018X})", self.bits),
        }
    }
}

impl fmt::Display for DoubleBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            Kind::Double => write!(f, "{}", f64::from_bits(self.bits)),
            Kind::Null => f.write_str("null"),
            Kind::Undefined => f.write_str("undefined"),
            Kind::Bool => write!(f, "{}", self.payload() != 0),
            Kind::Integer => write!(f, "{}", self.payload()),
            Kind::Str => write!(f, "\"{}\"", ShortStr::from_payload(self.payload())),
            Kind::Custom => write!(f, "custom({})", self.payload()),
            Kind::Empty => f.write_str("empty"),
            Kind::Unrecognized => write!(f, "<unrecognized {:#018X}>", self.bits),
        }
    }
}

impl From<f64> for DoubleBox {
    fn from(value: f64) -> Self {
        Self::double(value)
    }
}

impl From<f32> for DoubleBox {
    fn from(value: f32) -> Self {
        Self::double(f64::from(value))
    }
}

impl From<bool> for DoubleBox {
    fn from(b: bool) -> Self {
        Self::bool(b)
    }
}

impl From<u32> for DoubleBox {
    fn from(n: u32) -> Self {
        Self::integer(u64::from(n))
    }
}

impl From<u16> for DoubleBox {
    fn from(n: u16) -> Self {
        Self::integer(u64::from(n))
    }
}

impl From<u8> for DoubleBox {
    fn from(n: u8) -> Self {
        Self::integer(u64::from(n))
    }
}

impl From<ShortStr> for DoubleBox {
    fn from(s: ShortStr) -> Self {
        Self {
            bits: STRING_TAG | s.to_payload(),
        }
    }
}
