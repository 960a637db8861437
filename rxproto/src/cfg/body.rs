//! Wire bodies of the configuration get/set/delete messages.
//!
//! All three share the same shape: a 4-byte header, then a run of items.
//! Set bodies and get *responses* carry `key (4 bytes LE) + value
//! (width(key) bytes)` per item; delete bodies and get *requests* carry bare
//! keys. A body whose tail does not form a whole item is reported as
//! trailing bytes and otherwise ignored — the stream keeps moving.

use bitflags::bitflags;
use tracing::debug;

use super::{lookup_by_key, ConfigItem, Value};
use crate::wire;

pub(crate) const HEADER_LEN: usize = 4;

bitflags! {
    /// Storage layers a set/delete applies to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CfgLayers: u8 {
        const RAM = 0x01;
        const BBR = 0x02;
        const FLASH = 0x04;
    }
}

/// Layer selector of a get request: a single layer id, not a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CfgLayer {
    #[default]
    Ram,
    Bbr,
    Flash,
    Default,
}

impl CfgLayer {
    pub const fn id(self) -> u8 {
        match self {
            Self::Ram => 0,
            Self::Bbr => 1,
            Self::Flash => 2,
            Self::Default => 7,
        }
    }
}

/// The fixed 4-byte body header.
///
/// `layer` is a layer id on the get path and a [`CfgLayers`] mask on the
/// set/delete path; `position` is the skip count of a get request and the
/// transaction/reserved pair of a set/delete, raw either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CfgHeader {
    pub version: u8,
    pub layer: u8,
    pub position: u16,
}

/// One decoded body item: the registry item the key resolved to (synthetic
/// for unknown keys) and the value, absent in key-only bodies.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CfgKeyValue {
    pub item: ConfigItem,
    pub value: Option<Value>,
}

/// A decoded get/set/delete body.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CfgBody {
    pub header: CfgHeader,
    pub items: Vec<CfgKeyValue>,
    /// Bytes at the tail that did not form a whole item. Informational;
    /// everything before them decoded normally.
    pub trailing: usize,
}

/// Parse a body whose items carry values (set bodies, get responses).
pub fn parse_key_values(body: &[u8]) -> CfgBody {
    parse(body, true)
}

/// Parse a key-only body (delete bodies, get requests).
pub fn parse_keys(body: &[u8]) -> CfgBody {
    parse(body, false)
}

fn parse(body: &[u8], with_values: bool) -> CfgBody {
    if body.len() < HEADER_LEN {
        debug!(len = body.len(), "configuration body shorter than its header");
        return CfgBody {
            header: CfgHeader::default(),
            items: Vec::new(),
            trailing: body.len(),
        };
    }
    let header = CfgHeader {
        version: body[0],
        layer: body[1],
        position: wire::u16_at(body, 2),
    };

    let mut items = Vec::new();
    let mut pos = HEADER_LEN;
    let mut trailing = 0;
    while pos < body.len() {
        let rem = body.len() - pos;
        if rem < 4 {
            trailing = rem;
            break;
        }
        let key = wire::u32_at(body, pos);
        let item = lookup_by_key(key);
        if with_values {
            let width = item.width();
            if rem - 4 < width {
                trailing = rem;
                break;
            }
            let value = item.decode_value(&body[pos + 4..pos + 4 + width]);
            pos += 4 + width;
            items.push(CfgKeyValue {
                item,
                value: Some(value),
            });
        } else {
            pos += 4;
            items.push(CfgKeyValue { item, value: None });
        }
    }
    if trailing > 0 {
        debug!(trailing, "configuration body has trailing bytes");
    }
    CfgBody {
        header,
        items,
        trailing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_response_single_boolean() {
        // version 0, layer 0, position 0, then CFG-ANA-USE_ANA = true
        let body = [0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x23, 0x10, 0x01];
        let decoded = parse_key_values(&body);
        assert_eq!(decoded.header, CfgHeader::default());
        assert_eq!(decoded.trailing, 0);
        assert_eq!(decoded.items.len(), 1);
        let kv = &decoded.items[0];
        assert_eq!(kv.item.name, "CFG-ANA-USE_ANA");
        assert_eq!(kv.value, Some(Value::Bool(true)));
    }

    #[test]
    fn mixed_widths_walk() {
        let mut body = vec![0x01, 0x07, 0x00, 0x00];
        // CFG-RATE-MEAS (U2, 0.001 s scale) = 1000
        body.extend_from_slice(&0x3021_0001u32.to_le_bytes());
        body.extend_from_slice(&1000u16.to_le_bytes());
        // CFG-UART1-BAUDRATE (U4) = 460800
        body.extend_from_slice(&0x4052_0001u32.to_le_bytes());
        body.extend_from_slice(&460_800u32.to_le_bytes());
        let decoded = parse_key_values(&body);
        assert_eq!(decoded.items.len(), 2);
        assert_eq!(decoded.items[0].value, Some(Value::Float(1.0)));
        assert_eq!(decoded.items[1].value, Some(Value::Unsigned(460_800)));
        assert_eq!(decoded.trailing, 0);
    }

    #[test]
    fn unknown_key_width_comes_from_size_class() {
        let mut body = vec![0x00, 0x00, 0x00, 0x00];
        body.extend_from_slice(&0x3099_0042u32.to_le_bytes());
        body.extend_from_slice(&0xbeefu16.to_le_bytes());
        let decoded = parse_key_values(&body);
        assert_eq!(decoded.items.len(), 1);
        assert!(decoded.items[0].item.is_synthetic());
        assert_eq!(decoded.items[0].value, Some(Value::Unsigned(0xbeef)));
    }

    #[test]
    fn trailing_bytes_are_reported_not_fatal() {
        let mut body = vec![0x00, 0x01, 0x00, 0x00];
        body.extend_from_slice(&0x1023_0001u32.to_le_bytes());
        body.push(0x01);
        // a torn second item: three bytes of key
        body.extend_from_slice(&[0x44, 0x00, 0x23]);
        let decoded = parse_key_values(&body);
        assert_eq!(decoded.items.len(), 1);
        assert_eq!(decoded.trailing, 3);
    }

    #[test]
    fn key_only_walk() {
        let mut body = vec![0x00, 0x07, 0x00, 0x00];
        body.extend_from_slice(&0x1023_0001u32.to_le_bytes());
        body.extend_from_slice(&0x4052_0001u32.to_le_bytes());
        let decoded = parse_keys(&body);
        assert_eq!(decoded.items.len(), 2);
        assert!(decoded.items.iter().all(|kv| kv.value.is_none()));
    }

    #[test]
    fn body_shorter_than_header() {
        let decoded = parse_key_values(&[0x00, 0x01]);
        assert!(decoded.items.is_empty());
        assert_eq!(decoded.trailing, 2);
    }

    #[test]
    fn layer_ids() {
        assert_eq!(CfgLayer::Ram.id(), 0);
        assert_eq!(CfgLayer::Bbr.id(), 1);
        assert_eq!(CfgLayer::Flash.id(), 2);
        assert_eq!(CfgLayer::Default.id(), 7);
        assert_eq!(CfgLayers::RAM | CfgLayers::BBR, CfgLayers::from_bits_truncate(0x03));
    }
}
