//! Message catalog and the generic decode/dispatch contract.
//!
//! The catalog is a static table mapping `(class, id)` to a descriptor:
//! canonical name, minimum payload length and, for the messages the engine
//! interprets structurally, a decoder. Lookup is total — an unknown pair
//! resolves to a synthetic descriptor so callers never branch on absence —
//! and the tables are immutable after process start, shared by reference
//! across every classifier instance.

pub mod ack;
pub mod cfg;
pub mod inf;
pub mod mon;
pub mod nav;
pub mod rxm;
pub mod sec;
pub(crate) mod sfrbx;
pub mod tim;

use core::fmt;
use std::borrow::Cow;

use tracing::warn;

use crate::frame::UbxFrame;

/// How much optional detail a decoder emits. Always threaded explicitly
/// into the render call; the engine keeps no ambient verbosity state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Headline fields only.
    Brief,
    /// The fields a dashboard shows.
    #[default]
    Normal,
    /// Everything, including reserved fields and per-block detail.
    Full,
}

/// Capability interface every per-message decoder implements.
///
/// A decoder is only invoked once the dispatch layer has verified
/// `payload.len() >= min_len` for its descriptor, so it may index the fixed
/// part of the payload without further checks.
pub trait MessageDecode: Sync {
    fn decode(&self, payload: &[u8], verbosity: Verbosity) -> RenderedMessage;
}

/// Immutable catalog entry.
pub struct MessageDescriptor {
    pub id: u8,
    pub name: &'static str,
    pub min_len: u16,
    pub decoder: Option<&'static dyn MessageDecode>,
}

pub(crate) struct ClassTable {
    pub class: u8,
    pub name: &'static str,
    pub messages: &'static [MessageDescriptor],
}

pub(crate) static CLASSES: &[ClassTable] = &[
    ClassTable {
        class: 0x01,
        name: "NAV",
        messages: nav::MESSAGES,
    },
    ClassTable {
        class: 0x02,
        name: "RXM",
        messages: rxm::MESSAGES,
    },
    ClassTable {
        class: 0x04,
        name: "INF",
        messages: inf::MESSAGES,
    },
    ClassTable {
        class: 0x05,
        name: "ACK",
        messages: ack::MESSAGES,
    },
    ClassTable {
        class: 0x06,
        name: "CFG",
        messages: cfg::MESSAGES,
    },
    ClassTable {
        class: 0x09,
        name: "UPD",
        messages: UPD_MESSAGES,
    },
    ClassTable {
        class: 0x0a,
        name: "MON",
        messages: mon::MESSAGES,
    },
    ClassTable {
        class: 0x0d,
        name: "TIM",
        messages: tim::MESSAGES,
    },
    ClassTable {
        class: 0x13,
        name: "MGA",
        messages: MGA_MESSAGES,
    },
    ClassTable {
        class: 0x21,
        name: "LOG",
        messages: LOG_MESSAGES,
    },
    ClassTable {
        class: 0x27,
        name: "SEC",
        messages: sec::MESSAGES,
    },
];

// Classes the engine names but does not interpret beyond the generic
// contract. Kept here rather than in per-class modules to avoid a file per
// three-line table.
static UPD_MESSAGES: &[MessageDescriptor] = &[MessageDescriptor {
    id: 0x14,
    name: "UBX-UPD-SOS",
    min_len: 4,
    decoder: None,
}];

static MGA_MESSAGES: &[MessageDescriptor] = &[
    MessageDescriptor {
        id: 0x00,
        name: "UBX-MGA-GPS",
        min_len: 16,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x02,
        name: "UBX-MGA-GAL",
        min_len: 12,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x03,
        name: "UBX-MGA-BDS",
        min_len: 16,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x05,
        name: "UBX-MGA-QZSS",
        min_len: 12,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x06,
        name: "UBX-MGA-GLO",
        min_len: 16,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x21,
        name: "UBX-MGA-FLASH",
        min_len: 2,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x40,
        name: "UBX-MGA-INI",
        min_len: 12,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x60,
        name: "UBX-MGA-ACK",
        min_len: 8,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x80,
        name: "UBX-MGA-DBD",
        min_len: 12,
        decoder: None,
    },
];

static LOG_MESSAGES: &[MessageDescriptor] = &[
    MessageDescriptor {
        id: 0x03,
        name: "UBX-LOG-ERASE",
        min_len: 0,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x04,
        name: "UBX-LOG-STRING",
        min_len: 0,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x07,
        name: "UBX-LOG-CREATE",
        min_len: 8,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x08,
        name: "UBX-LOG-INFO",
        min_len: 48,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x09,
        name: "UBX-LOG-RETRIEVE",
        min_len: 12,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x0b,
        name: "UBX-LOG-RETRIEVEPOS",
        min_len: 40,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x0d,
        name: "UBX-LOG-RETRIEVESTRING",
        min_len: 16,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x0e,
        name: "UBX-LOG-FINDTIME",
        min_len: 8,
        decoder: None,
    },
];

/// Resolved descriptor for a `(class, id)` pair. Total: unknown pairs get a
/// synthesized name, zero minimum length and no decoder.
pub struct MessageInfo {
    pub class: u8,
    pub id: u8,
    pub name: Cow<'static, str>,
    pub min_len: u16,
    pub decoder: Option<&'static dyn MessageDecode>,
}

/// Name of a message class, if the catalog knows it.
pub fn class_name(class: u8) -> Option<&'static str> {
    CLASSES.iter().find(|t| t.class == class).map(|t| t.name)
}

/// Look up the descriptor for a `(class, id)` pair.
pub fn lookup(class: u8, id: u8) -> MessageInfo {
    let table = CLASSES.iter().find(|t| t.class == class);
    if let Some(table) = table {
        if let Some(desc) = table.messages.iter().find(|m| m.id == id) {
            return MessageInfo {
                class,
                id,
                name: Cow::Borrowed(desc.name),
                min_len: desc.min_len,
                decoder: desc.decoder,
            };
        }
    }
    let name = match table {
        Some(table) => format!("UBX-{}-0x{id:02x}", table.name),
        None => format!("UBX-0x{class:02x}-0x{id:02x}"),
    };
    MessageInfo {
        class,
        id,
        name: Cow::Owned(name),
        min_len: 0,
        decoder: None,
    }
}

/// A decoder's structured output: the message name plus named fields in
/// payload order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderedMessage {
    pub name: Cow<'static, str>,
    pub fields: Vec<RenderedField>,
}

impl RenderedMessage {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: &'static str, value: FieldValue) -> Self {
        self.fields.push(RenderedField {
            name,
            value,
            unit: "",
        });
        self
    }

    pub fn field_unit(mut self, name: &'static str, value: FieldValue, unit: &'static str) -> Self {
        self.fields.push(RenderedField { name, value, unit });
        self
    }

    pub fn push(&mut self, name: &'static str, value: FieldValue) {
        self.fields.push(RenderedField {
            name,
            value,
            unit: "",
        });
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.value)
    }
}

impl fmt::Display for RenderedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for field in &self.fields {
            write!(f, " {}={}{}", field.name, field.value, field.unit)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderedField {
    pub name: &'static str,
    pub value: FieldValue,
    pub unit: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldValue {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Bool(bool),
    Hex(u64),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Unsigned(v) => write!(f, "{v}"),
            FieldValue::Signed(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Bool(v) => write!(f, "{v}"),
            FieldValue::Hex(v) => write!(f, "{v:#x}"),
            FieldValue::Text(v) => write!(f, "{v}"),
        }
    }
}

/// What the dispatch layer makes of one complete binary frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Rendered {
    /// Zero-length payload for a message that normally carries one: a
    /// request for the receiver to send its current value.
    Poll { name: Cow<'static, str> },
    /// Payload shorter than the descriptor's minimum; the decoder was not
    /// invoked.
    BadLength {
        name: Cow<'static, str>,
        expected: u16,
        got: usize,
    },
    /// Structured decoder output.
    Message(RenderedMessage),
    /// No decoder registered: raw class/id/length/payload.
    Raw {
        name: Cow<'static, str>,
        class: u8,
        id: u8,
        payload: Vec<u8>,
    },
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Poll { name } => write!(f, "{name} poll request"),
            Rendered::BadLength {
                name,
                expected,
                got,
            } => write!(f, "{name} bad length {got} (expected at least {expected})"),
            Rendered::Message(msg) => write!(f, "{msg}"),
            Rendered::Raw {
                name,
                class,
                id,
                payload,
            } => write!(
                f,
                "{name} class {class:#04x} id {id:#04x} len {}: {}",
                payload.len(),
                hex(payload)
            ),
        }
    }
}

/// Dispatch one complete binary frame against the catalog.
///
/// The policy, in order: an empty payload where the descriptor expects one
/// is a poll request; a short payload is reported without invoking the
/// decoder (decoders index the fixed payload region and must never see less
/// than their minimum); otherwise the decoder runs, or the frame renders
/// raw.
pub fn dispatch(frame: &UbxFrame, verbosity: Verbosity) -> Rendered {
    let info = lookup(frame.class, frame.id);
    if frame.payload.is_empty() && info.min_len > 0 {
        return Rendered::Poll { name: info.name };
    }
    if frame.payload.len() < usize::from(info.min_len) {
        warn!(
            name = %info.name,
            got = frame.payload.len(),
            expected = info.min_len,
            "payload below minimum length"
        );
        return Rendered::BadLength {
            name: info.name,
            expected: info.min_len,
            got: frame.payload.len(),
        };
    }
    match info.decoder {
        Some(decoder) => Rendered::Message(decoder.decode(&frame.payload, verbosity)),
        None => Rendered::Raw {
            name: info.name,
            class: frame.class,
            id: frame.id,
            payload: frame.payload.clone(),
        },
    }
}

pub(crate) fn hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{b:02x}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(class: u8, id: u8, payload: &[u8]) -> UbxFrame {
        UbxFrame {
            class,
            id,
            payload: payload.to_vec(),
            checksum: (0, 0),
            checksum_ok: true,
        }
    }

    #[test]
    fn lookup_known() {
        let info = lookup(0x05, 0x01);
        assert_eq!(info.name, "UBX-ACK-ACK");
        assert_eq!(info.min_len, 2);
        assert!(info.decoder.is_some());
    }

    #[test]
    fn lookup_unknown_id_in_known_class() {
        let info = lookup(0x01, 0xee);
        assert_eq!(info.name, "UBX-NAV-0xee");
        assert_eq!(info.min_len, 0);
        assert!(info.decoder.is_none());
    }

    #[test]
    fn lookup_unknown_class() {
        let info = lookup(0x77, 0x01);
        assert_eq!(info.name, "UBX-0x77-0x01");
        assert_eq!(info.min_len, 0);
    }

    #[test]
    fn catalog_ids_unique_per_class() {
        for table in CLASSES {
            for (i, a) in table.messages.iter().enumerate() {
                for b in &table.messages[i + 1..] {
                    assert_ne!(a.id, b.id, "duplicate id in class {}", table.name);
                }
            }
        }
    }

    #[test]
    fn dispatch_poll_request() {
        let rendered = dispatch(&frame(0x06, 0x8a, &[]), Verbosity::Normal);
        assert!(matches!(rendered, Rendered::Poll { .. }));
        assert_eq!(rendered.to_string(), "UBX-CFG-VALSET poll request");
    }

    #[test]
    fn dispatch_bad_length_skips_decoder() {
        let rendered = dispatch(&frame(0x05, 0x01, &[0x06]), Verbosity::Normal);
        assert!(matches!(
            rendered,
            Rendered::BadLength {
                expected: 2,
                got: 1,
                ..
            }
        ));
    }

    #[test]
    fn dispatch_raw_for_unknown() {
        let rendered = dispatch(&frame(0x77, 0x01, &[0xde, 0xad]), Verbosity::Normal);
        match &rendered {
            Rendered::Raw { payload, .. } => assert_eq!(payload, &vec![0xde, 0xad]),
            other => panic!("expected raw rendering, got {other:?}"),
        }
        assert!(rendered.to_string().contains("de ad"));
    }

    #[test]
    fn zero_payload_zero_min_is_not_a_poll() {
        // UBX-LOG-ERASE legitimately has an empty payload
        let rendered = dispatch(&frame(0x21, 0x03, &[]), Verbosity::Normal);
        assert!(matches!(rendered, Rendered::Raw { .. }));
    }
}
