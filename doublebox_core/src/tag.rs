//! Tag space definition and type classification.
//!
//! IEEE 754 double-precision NaNs with the high 16 bits in 0xFFF8–0xFFFF are
//! never produced by hardware arithmetic except for 0xFFF8 (the canonical
//! quiet NaN with the sign bit set). That leaves seven 16-bit tags free for
//! encoding non-numeric data in the low 48 bits:
//!
//! | Tag    | Kind      | Payload (low 48 bits)               |
//! |--------|-----------|-------------------------------------|
//! | 0xFFF9 | Null      | unused, zero                        |
//! | 0xFFFA | Undefined | unused, zero                        |
//! | 0xFFFB | Bool      | 0 = false, nonzero = true           |
//! | 0xFFFC | Integer   | 48-bit unsigned integer             |
//! | 0xFFFD | Str       | up to 5 bytes, zero padded          |
//! | 0xFFFE | Custom    | 48 bits, opaque to the codec        |
//! | 0xFFFF | Empty     | all ones (memset-friendly sentinel) |
//!
//! Every bit pattern at or below [`MAX_NUMBER`] is an ordinary double,
//! including ±infinity and the canonical NaN. Classification is a single
//! unsigned comparison followed by a match on the high 16 bits.

use std::fmt;

// =============================================================================
// Masks and Boundaries
// =============================================================================

/// Mask selecting the 16-bit tag in the high bits of a word.
pub const TYPE_MASK: u64 = 0xFFFF_0000_0000_0000;

/// Mask selecting the 48-bit payload in the low bits of a word.
pub const PAYLOAD_MASK: u64 = 0x0000_FFFF_FFFF_FFFF;

/// Largest bit pattern that still classifies as a double.
///
/// Everything strictly greater is one of the reserved non-numeric tags.
/// 0xFFF8 itself is the hardware NaN range and stays on the double side.
pub const MAX_NUMBER: u64 = 0xFFF8_FFFF_FFFF_FFFF;

/// The canonical quiet NaN bit pattern.
///
/// [`crate::DoubleBox::double`] collapses every foreign NaN that would
/// collide with the reserved tags to exactly this word.
pub const CANONICAL_NAN: u64 = 0x7FF8_0000_0000_0000;

// =============================================================================
// Reserved Tag Words
// =============================================================================

/// The null word (tag 0xFFF9, zero payload).
pub const NULL_BITS: u64 = 0xFFF9_0000_0000_0000;

/// The undefined word (tag 0xFFFA, zero payload).
pub const UNDEFINED_BITS: u64 = 0xFFFA_0000_0000_0000;

/// The boolean tag word (tag 0xFFFB, payload carries truth).
pub const BOOL_TAG: u64 = 0xFFFB_0000_0000_0000;

/// The canonical false word (boolean tag, zero payload).
pub const FALSE_BITS: u64 = BOOL_TAG;

/// The canonical true word (boolean tag, payload 1).
///
/// Decoding treats any nonzero payload as true; this is merely the word the
/// encoder produces.
pub const TRUE_BITS: u64 = BOOL_TAG | 1;

/// The integer tag word (tag 0xFFFC).
pub const INTEGER_TAG: u64 = 0xFFFC_0000_0000_0000;

/// The short-string tag word (tag 0xFFFD).
pub const STRING_TAG: u64 = 0xFFFD_0000_0000_0000;

/// The custom tag word (tag 0xFFFE, payload semantics are the caller's).
pub const CUSTOM_TAG: u64 = 0xFFFE_0000_0000_0000;

/// The empty tag (tag 0xFFFF).
///
/// Classification is by tag alone; the canonical encoded form is the
/// all-ones word [`EMPTY_BITS`].
pub const EMPTY_TAG: u64 = 0xFFFF_0000_0000_0000;

/// The canonical empty word: all 64 bits set.
pub const EMPTY_BITS: u64 = u64::MAX;

// =============================================================================
// Kind
// =============================================================================

/// The closed set of variants a 64-bit word can decode to.
///
/// Classification is total: every word maps to exactly one kind. The
/// [`Kind::Unrecognized`] variant is a defensive default for future
/// tag-space extension; it is unreachable through the fixed 16-way partition
/// (tags 0xFFF9–0xFFFF cover everything above [`MAX_NUMBER`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// An ordinary IEEE 754 double, including ±infinity and canonical NaN.
    Double,
    /// The null sentinel.
    Null,
    /// The undefined sentinel.
    Undefined,
    /// A boolean; any nonzero payload is true.
    Bool,
    /// A 48-bit unsigned integer.
    Integer,
    /// An inline short string of up to 5 bytes.
    Str,
    /// A 48-bit payload with caller-defined meaning.
    Custom,
    /// The all-ones "no value here" sentinel.
    Empty,
    /// Defensive fallback for tag patterns outside the partition.
    Unrecognized,
}

impl Kind {
    /// Classify a raw 64-bit word.
    ///
    /// The single source of truth for type discrimination: an unsigned
    /// boundary compare, then a match on the high 16 bits.
    #[inline]
    #[must_use]
    pub const fn of_bits(bits: u64) -> Self {
        if bits <= MAX_NUMBER {
            return Self::Double;
        }
        match bits >> 48 {
            0xFFF9 => Self::Null,
            0xFFFA => Self::Undefined,
            0xFFFB => Self::Bool,
            0xFFFC => Self::Integer,
            0xFFFD => Self::Str,
            0xFFFE => Self::Custom,
            0xFFFF => Self::Empty,
            _ => Self::Unrecognized,
        }
    }

    /// Human-readable name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Double => "double",
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Str => "string",
            Self::Custom => "custom",
            Self::Empty => "empty",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
