//! Rendering of doublebox words as human-readable lines.
//!
//! Each line shows the two 32-bit hex halves of the word followed by the
//! decoded contents. The exact text is diagnostic output, not part of the
//! codec contract; the decoded variant and payload are.

use doublebox_core::{DoubleBox, Kind};

// =============================================================================
// Line Rendering
// =============================================================================

/// Render one line for a word: hex halves plus decoded description.
#[must_use]
pub fn describe_line(value: DoubleBox) -> String {
    let bits = value.raw_bits();
    format!(
        "{:#010X} {:#010X} = {}",
        bits >> 32,
        bits & 0xFFFF_FFFF,
        describe(value)
    )
}

/// Decode a word via its kind and the matching accessor.
fn describe(value: DoubleBox) -> String {
    match value.kind() {
        Kind::Double => match value.as_double() {
            Some(d) => d.to_string(),
            None => unreachable!("kind() said double"),
        },
        Kind::Null => "null".to_string(),
        Kind::Undefined => "undefined".to_string(),
        Kind::Bool => {
            if value.as_bool() == Some(true) {
                "boolean true".to_string()
            } else {
                "boolean false".to_string()
            }
        }
        Kind::Integer => format!("integer {}", value.as_integer().unwrap_or(0)),
        Kind::Str => match value.as_short_str() {
            Some(s) => format!("string \"{s}\""),
            None => unreachable!("kind() said string"),
        },
        Kind::Custom => format!("custom {}", value.as_custom().unwrap_or(0)),
        Kind::Empty => "empty".to_string(),
        Kind::Unrecognized => format!("unrecognized {:#018X}", value.raw_bits()),
    }
}

// =============================================================================
// Demo Sequence
// =============================================================================

/// One line per word of the built-in sample sequence, exercising every
/// variant the codec can produce plus the raw-bits escape hatch.
#[must_use]
pub fn demo_lines() -> Vec<String> {
    let samples = [
        DoubleBox::double(0.0),
        DoubleBox::double(10.0),
        DoubleBox::double(-10.0),
        DoubleBox::double(std::f64::consts::PI),
        DoubleBox::double(1e-16),
        DoubleBox::double(f64::INFINITY),
        DoubleBox::double(f64::NEG_INFINITY),
        DoubleBox::double(f64::NAN),
        DoubleBox::null(),
        DoubleBox::undefined(),
        DoubleBox::bool(false),
        DoubleBox::bool(true),
        DoubleBox::integer(123_456_789),
        DoubleBox::short_str("ABCDEF"),
        DoubleBox::custom(123),
        DoubleBox::from_bits(u64::MAX),
    ];

    samples.iter().map(|&v| describe_line(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_null() {
        assert_eq!(
            describe_line(DoubleBox::null()),
            "0xFFF90000 0x00000000 = null"
        );
    }

    #[test]
    fn test_line_undefined() {
        assert_eq!(
            describe_line(DoubleBox::undefined()),
            "0xFFFA0000 0x00000000 = undefined"
        );
    }

    #[test]
    fn test_line_bools() {
        assert_eq!(
            describe_line(DoubleBox::bool(false)),
            "0xFFFB0000 0x00000000 = boolean false"
        );
        assert_eq!(
            describe_line(DoubleBox::bool(true)),
            "0xFFFB0000 0x00000001 = boolean true"
        );
    }

    #[test]
    fn test_line_integer() {
        assert_eq!(
            describe_line(DoubleBox::integer(123_456_789)),
            "0xFFFC0000 0x075BCD15 = integer 123456789"
        );
    }

    #[test]
    fn test_line_string_truncated() {
        // "ABCDEF" keeps only 5 bytes, packed little-endian into the
        // payload: 'E' spills into the high half.
        assert_eq!(
            describe_line(DoubleBox::short_str("ABCDEF")),
            "0xFFFD0045 0x44434241 = string \"ABCDE\""
        );
    }

    #[test]
    fn test_line_custom() {
        assert_eq!(
            describe_line(DoubleBox::custom(123)),
            "0xFFFE0000 0x0000007B = custom 123"
        );
    }

    #[test]
    fn test_line_empty() {
        assert_eq!(
            describe_line(DoubleBox::from_bits(u64::MAX)),
            "0xFFFFFFFF 0xFFFFFFFF = empty"
        );
    }

    #[test]
    fn test_line_zero_double() {
        assert_eq!(
            describe_line(DoubleBox::double(0.0)),
            "0x00000000 0x00000000 = 0"
        );
    }

    #[test]
    fn test_line_nan() {
        assert_eq!(
            describe_line(DoubleBox::double(f64::NAN)),
            "0x7FF80000 0x00000000 = NaN"
        );
    }

    #[test]
    fn test_line_infinities() {
        assert_eq!(
            describe_line(DoubleBox::double(f64::INFINITY)),
            "0x7FF00000 0x00000000 = inf"
        );
        assert_eq!(
            describe_line(DoubleBox::double(f64::NEG_INFINITY)),
            "0xFFF00000 0x00000000 = -inf"
        );
    }

    #[test]
    fn test_demo_covers_every_variant() {
        let lines = demo_lines();
        assert_eq!(lines.len(), 16);
        for needle in [
            "null",
            "undefined",
            "boolean false",
            "boolean true",
            "integer 123456789",
            "string \"ABCDE\"",
            "custom 123",
            "empty",
        ] {
            assert!(
                lines.iter().any(|l| l.ends_with(needle)),
                "missing {needle:?} in demo output"
            );
        }
    }
}
