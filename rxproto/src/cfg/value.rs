//! Typed configuration value codec.
//!
//! Every configuration item stores one value of a fixed width; the width is
//! also recoverable from the item key alone (bits 28..=30). Decoding applies
//! the item's scale factor, encoding removes it and truncates to the
//! declared width with wraparound — the receiver firmware silently truncates
//! the same way, so an out-of-range write is a caller mistake the wire
//! format cannot express.

use core::fmt;

use crate::error::Error;
use crate::wire;

/// Value-type tag of a configuration item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueType {
    /// Single-bit flag, stored as one byte.
    Bool,
    U1,
    U2,
    U4,
    U8,
    I1,
    I2,
    I4,
    I8,
    R4,
    R8,
    X1,
    X2,
    X4,
    X8,
}

impl ValueType {
    /// Storage width in bytes.
    pub const fn width(self) -> usize {
        match self {
            Self::Bool | Self::U1 | Self::I1 | Self::X1 => 1,
            Self::U2 | Self::I2 | Self::X2 => 2,
            Self::U4 | Self::I4 | Self::X4 | Self::R4 => 4,
            Self::U8 | Self::I8 | Self::X8 | Self::R8 => 8,
        }
    }

    /// The default type for a key whose item is not in the registry: the
    /// unsigned type matching the size class in the key's bits 28..=30.
    /// Reserved size classes fall back to one byte.
    pub const fn from_size_class(class: u32) -> Self {
        match class & 0b111 {
            1 | 2 => Self::U1,
            3 => Self::U2,
            4 => Self::U4,
            5 => Self::U8,
            _ => Self::U1,
        }
    }

    pub const fn is_float(self) -> bool {
        matches!(self, Self::R4 | Self::R8)
    }

    pub const fn is_signed(self) -> bool {
        matches!(self, Self::I1 | Self::I2 | Self::I4 | Self::I8)
    }

    pub const fn is_bitmask(self) -> bool {
        matches!(self, Self::X1 | Self::X2 | Self::X4 | Self::X8)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "L",
            Self::U1 => "U1",
            Self::U2 => "U2",
            Self::U4 => "U4",
            Self::U8 => "U8",
            Self::I1 => "I1",
            Self::I2 => "I2",
            Self::I4 => "I4",
            Self::I8 => "I8",
            Self::R4 => "R4",
            Self::R8 => "R8",
            Self::X1 => "X1",
            Self::X2 => "X2",
            Self::X4 => "X4",
            Self::X8 => "X8",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded configuration value, scale already applied.
///
/// Values of items with a scale other than 1.0 always surface as [`Float`]
/// (Self::Float); unscaled values keep their natural class.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Bool(bool),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::Unsigned(v) => write!(f, "{v}"),
            Value::Signed(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Decode `width(ty)` raw bytes into a value, applying `scale`.
///
/// `raw` must hold at least `ty.width()` bytes; the body walker guarantees
/// this before calling in.
pub fn decode(ty: ValueType, raw: &[u8], scale: f64) -> Value {
    match ty {
        ValueType::Bool => Value::Bool(raw[0] != 0),
        ValueType::R4 => Value::Float(f64::from(wire::f32_at(raw, 0)) * scale),
        ValueType::R8 => Value::Float(wire::f64_at(raw, 0) * scale),
        _ if ty.is_signed() => {
            let v = match ty.width() {
                1 => i64::from(wire::i8_at(raw, 0)),
                2 => i64::from(wire::i16_at(raw, 0)),
                4 => i64::from(wire::i32_at(raw, 0)),
                _ => wire::i64_at(raw, 0),
            };
            if scale != 1.0 {
                Value::Float(v as f64 * scale)
            } else {
                Value::Signed(v)
            }
        },
        _ => {
            let v = match ty.width() {
                1 => u64::from(wire::u8_at(raw, 0)),
                2 => u64::from(wire::u16_at(raw, 0)),
                4 => u64::from(wire::u32_at(raw, 0)),
                _ => wire::u64_at(raw, 0),
            };
            if scale != 1.0 {
                Value::Float(v as f64 * scale)
            } else {
                Value::Unsigned(v)
            }
        },
    }
}

/// Encode a value into the raw bytes of type `ty`, removing `scale`.
///
/// Numeric values truncate deterministically to the declared byte width with
/// wraparound. The only refusals are shape mismatches (a boolean for a
/// numeric item or vice versa), reported against `item_name`.
pub fn encode(ty: ValueType, value: &Value, scale: f64, item_name: &str) -> Result<Vec<u8>, Error> {
    if ty == ValueType::Bool {
        return match value {
            Value::Bool(b) => Ok(vec![u8::from(*b)]),
            _ => Err(Error::ValueType {
                item: item_name.to_owned(),
                expected: "boolean",
            }),
        };
    }
    let unscaled: f64 = match value {
        Value::Bool(_) => {
            return Err(Error::ValueType {
                item: item_name.to_owned(),
                expected: "numeric",
            })
        },
        Value::Unsigned(v) => {
            if scale == 1.0 && !ty.is_float() {
                // integer fast path, no float rounding
                return Ok(trunc_bytes(*v as i128, ty.width()));
            }
            *v as f64 / scale
        },
        Value::Signed(v) => {
            if scale == 1.0 && !ty.is_float() {
                return Ok(trunc_bytes(i128::from(*v), ty.width()));
            }
            *v as f64 / scale
        },
        Value::Float(v) => *v / scale,
    };
    Ok(match ty {
        ValueType::R4 => (unscaled as f32).to_le_bytes().to_vec(),
        ValueType::R8 => unscaled.to_le_bytes().to_vec(),
        // nearest raw step, then width truncation; plain `as` truncation
        // toward zero would turn 199.999…, an artifact of the scale
        // division, into 199
        _ => trunc_bytes(unscaled.round() as i128, ty.width()),
    })
}

/// Low `width` bytes of the two's-complement representation.
fn trunc_bytes(v: i128, width: usize) -> Vec<u8> {
    let bytes = (v as u64).to_le_bytes();
    bytes[..width].to_vec()
}
