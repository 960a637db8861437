//! Typed configuration registry and the get/set/delete sub-protocol.
//!
//! Every receiver setting is a `(key, value)` pair: a globally unique 32-bit
//! key whose bits 28..=30 encode the value storage width, and a typed value
//! scaled into engineering units. The registry maps dashed item names to
//! keys and back; [`body`] walks the wire bodies of the get/set/delete
//! messages; [`value`] converts individual values.

pub mod body;
mod keys;
pub mod value;

use std::borrow::Cow;

use crate::error::Error;
pub use body::{CfgBody, CfgHeader, CfgKeyValue, CfgLayer, CfgLayers};
pub use value::{Value, ValueType};

/// Size class of a key, bits 28..=30.
pub const fn size_class(key: u32) -> u32 {
    (key >> 28) & 0b111
}

/// Group id of a key, bits 16..=23.
pub const fn group_id(key: u32) -> u8 {
    (key >> 16) as u8
}

/// Item id of a key, bits 0..=11.
pub const fn item_id(key: u32) -> u16 {
    (key & 0x0fff) as u16
}

/// One entry of the typed configuration registry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConfigItem {
    pub name: Cow<'static, str>,
    pub key: u32,
    pub ty: ValueType,
    /// Multiplier applied on decode, divided out on encode.
    pub scale: f64,
    pub unit: &'static str,
    pub description: &'static str,
}

impl ConfigItem {
    /// Storage width of the value in bytes.
    pub fn width(&self) -> usize {
        self.ty.width()
    }

    /// Whether this item was synthesized for a key missing from the table.
    pub fn is_synthetic(&self) -> bool {
        matches!(self.name, Cow::Owned(_))
    }

    /// Decode this item's raw value bytes, applying the scale.
    pub fn decode_value(&self, raw: &[u8]) -> Value {
        value::decode(self.ty, raw, self.scale)
    }

    /// Encode a value into this item's raw bytes, removing the scale.
    pub fn encode_value(&self, val: &Value) -> Result<Vec<u8>, Error> {
        value::encode(self.ty, val, self.scale, &self.name)
    }

    /// Parse a textual value the way the command front ends accept it:
    /// `true`/`false`/`0`/`1` for booleans, decimal or `0x…` integers for
    /// the integer and bitmask types, decimal floats everywhere scales or
    /// float types make the value fractional.
    pub fn parse_value(&self, s: &str) -> Result<Value, Error> {
        let invalid = |expected: &'static str| Error::InvalidValue {
            item: self.name.clone().into_owned(),
            value: s.to_owned(),
            expected,
        };
        if self.ty == ValueType::Bool {
            return match s {
                "1" | "true" => Ok(Value::Bool(true)),
                "0" | "false" => Ok(Value::Bool(false)),
                _ => Err(invalid("boolean")),
            };
        }
        if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            return u64::from_str_radix(hex, 16)
                .map(Value::Unsigned)
                .map_err(|_| invalid("hexadecimal"));
        }
        if self.scale == 1.0 && !self.ty.is_float() {
            if self.ty.is_signed() {
                if let Ok(v) = s.parse::<i64>() {
                    return Ok(Value::Signed(v));
                }
            } else if let Ok(v) = s.parse::<u64>() {
                return Ok(Value::Unsigned(v));
            }
        }
        s.parse::<f64>().map(Value::Float).map_err(|_| invalid("numeric"))
    }
}

/// Look a configuration item up by its dashed name. Names are exact; there
/// is no fuzzy matching on the command path.
pub fn lookup_by_name(name: &str) -> Result<ConfigItem, Error> {
    keys::ITEMS
        .iter()
        .find(|entry| entry.name == name)
        .map(from_entry)
        .ok_or_else(|| Error::UnknownConfigItem(name.to_owned()))
}

/// Look a configuration item up by key. Never fails: a key missing from the
/// table synthesizes an `Unk-…` item whose width is inferred from the size
/// class the key itself carries, typed as the matching unsigned integer.
pub fn lookup_by_key(key: u32) -> ConfigItem {
    keys::ITEMS
        .iter()
        .find(|entry| entry.key == key)
        .map(from_entry)
        .unwrap_or_else(|| ConfigItem {
            name: Cow::Owned(format!("Unk-0x{key:08x}")),
            key,
            ty: ValueType::from_size_class(size_class(key)),
            scale: 1.0,
            unit: "",
            description: "",
        })
}

fn from_entry(entry: &'static keys::Entry) -> ConfigItem {
    ConfigItem {
        name: Cow::Borrowed(entry.name),
        key: entry.key,
        ty: entry.ty,
        scale: entry.scale,
        unit: entry.unit,
        description: entry.info,
    }
}

/// Number of items in the registry.
pub fn len() -> usize {
    keys::ITEMS.len()
}

/// Iterate the registry in table order.
pub fn iter() -> impl Iterator<Item = ConfigItem> {
    keys::ITEMS.iter().map(from_entry)
}
