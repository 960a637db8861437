//! CFG class: legacy configuration messages and the typed key/value
//! get/set/delete sub-protocol.

use super::{FieldValue, MessageDecode, MessageDescriptor, RenderedMessage, Verbosity};
use crate::cfg::{body, CfgKeyValue, CfgLayers};
use crate::wire::Cursor;

pub(crate) static MESSAGES: &[MessageDescriptor] = &[
    MessageDescriptor {
        id: 0x00,
        name: "UBX-CFG-PRT",
        min_len: 1,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x01,
        name: "UBX-CFG-MSG",
        min_len: 2,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x02,
        name: "UBX-CFG-INF",
        min_len: 1,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x04,
        name: "UBX-CFG-RST",
        min_len: 4,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x08,
        name: "UBX-CFG-RATE",
        min_len: 6,
        decoder: Some(&CfgRate),
    },
    MessageDescriptor {
        id: 0x09,
        name: "UBX-CFG-CFG",
        min_len: 12,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x13,
        name: "UBX-CFG-ANT",
        min_len: 4,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x16,
        name: "UBX-CFG-SBAS",
        min_len: 8,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x17,
        name: "UBX-CFG-NMEA",
        min_len: 4,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x1b,
        name: "UBX-CFG-USB",
        min_len: 108,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x23,
        name: "UBX-CFG-NAVX5",
        min_len: 40,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x24,
        name: "UBX-CFG-NAV5",
        min_len: 36,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x31,
        name: "UBX-CFG-TP5",
        min_len: 32,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x39,
        name: "UBX-CFG-ITFM",
        min_len: 8,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x3e,
        name: "UBX-CFG-GNSS",
        min_len: 4,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x71,
        name: "UBX-CFG-TMODE3",
        min_len: 40,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x86,
        name: "UBX-CFG-PMS",
        min_len: 8,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x8a,
        name: "UBX-CFG-VALSET",
        min_len: 4,
        decoder: Some(&CfgValSet),
    },
    MessageDescriptor {
        id: 0x8b,
        name: "UBX-CFG-VALGET",
        min_len: 4,
        decoder: Some(&CfgValGet),
    },
    MessageDescriptor {
        id: 0x8c,
        name: "UBX-CFG-VALDEL",
        min_len: 4,
        decoder: Some(&CfgValDel),
    },
];

fn layers_text(mask: u8) -> String {
    let layers = CfgLayers::from_bits_truncate(mask);
    if layers.is_empty() {
        return format!("{mask:#04x}");
    }
    let mut parts = Vec::new();
    if layers.contains(CfgLayers::RAM) {
        parts.push("RAM");
    }
    if layers.contains(CfgLayers::BBR) {
        parts.push("BBR");
    }
    if layers.contains(CfgLayers::FLASH) {
        parts.push("Flash");
    }
    parts.join("+")
}

fn get_layer_text(id: u8) -> String {
    match id {
        0 => "RAM".into(),
        1 => "BBR".into(),
        2 => "Flash".into(),
        7 => "Default".into(),
        other => format!("{other:#04x}"),
    }
}

fn item_text(kv: &CfgKeyValue) -> String {
    match &kv.value {
        Some(value) => {
            if kv.item.unit.is_empty() {
                format!("{}={value}", kv.item.name)
            } else {
                format!("{}={value}{}", kv.item.name, kv.item.unit)
            }
        },
        None => kv.item.name.clone().into_owned(),
    }
}

fn push_items(msg: &mut RenderedMessage, decoded: &body::CfgBody) {
    for kv in &decoded.items {
        msg.push("item", FieldValue::Text(item_text(kv)));
    }
    if decoded.trailing > 0 {
        msg.push("trailing", FieldValue::Unsigned(decoded.trailing as u64));
    }
}

struct CfgValGet;

impl MessageDecode for CfgValGet {
    fn decode(&self, payload: &[u8], _verbosity: Verbosity) -> RenderedMessage {
        // version 0 is the request (bare keys), version 1 the response
        let decoded = if payload[0] == 0 {
            body::parse_keys(payload)
        } else {
            body::parse_key_values(payload)
        };
        let mut msg = RenderedMessage::new("UBX-CFG-VALGET")
            .field("layer", FieldValue::Text(get_layer_text(decoded.header.layer)))
            .field(
                "position",
                FieldValue::Unsigned(u64::from(decoded.header.position)),
            );
        push_items(&mut msg, &decoded);
        msg
    }
}

struct CfgValSet;

impl MessageDecode for CfgValSet {
    fn decode(&self, payload: &[u8], _verbosity: Verbosity) -> RenderedMessage {
        let decoded = body::parse_key_values(payload);
        let mut msg = RenderedMessage::new("UBX-CFG-VALSET")
            .field("layers", FieldValue::Text(layers_text(decoded.header.layer)));
        push_items(&mut msg, &decoded);
        msg
    }
}

struct CfgValDel;

impl MessageDecode for CfgValDel {
    fn decode(&self, payload: &[u8], _verbosity: Verbosity) -> RenderedMessage {
        let decoded = body::parse_keys(payload);
        let mut msg = RenderedMessage::new("UBX-CFG-VALDEL")
            .field("layers", FieldValue::Text(layers_text(decoded.header.layer)));
        push_items(&mut msg, &decoded);
        msg
    }
}

struct CfgRate;

impl MessageDecode for CfgRate {
    fn decode(&self, payload: &[u8], _verbosity: Verbosity) -> RenderedMessage {
        let mut c = Cursor::new(payload);
        let meas = c.u2();
        let nav = c.u2();
        let time_ref = c.u2();
        let time_ref_name = match time_ref {
            0 => "UTC".into(),
            1 => "GPS".into(),
            2 => "GLONASS".into(),
            3 => "BeiDou".into(),
            4 => "Galileo".into(),
            other => format!("{other}"),
        };
        RenderedMessage::new("UBX-CFG-RATE")
            .field_unit("measRate", FieldValue::Unsigned(u64::from(meas)), "ms")
            .field("navRate", FieldValue::Unsigned(u64::from(nav)))
            .field("timeRef", FieldValue::Text(time_ref_name))
    }
}
