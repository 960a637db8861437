//! ACK class: acknowledgement and rejection of configuration input.

use super::{lookup, FieldValue, MessageDecode, MessageDescriptor, RenderedMessage, Verbosity};

pub(crate) static MESSAGES: &[MessageDescriptor] = &[
    MessageDescriptor {
        id: 0x00,
        name: "UBX-ACK-NAK",
        min_len: 2,
        decoder: Some(&AckNak),
    },
    MessageDescriptor {
        id: 0x01,
        name: "UBX-ACK-ACK",
        min_len: 2,
        decoder: Some(&AckAck),
    },
];

/// Both payloads are the class/id pair of the message being answered; the
/// rendering names the answered message through the catalog.
fn acked_message(payload: &[u8]) -> FieldValue {
    FieldValue::Text(lookup(payload[0], payload[1]).name.into_owned())
}

struct AckAck;

impl MessageDecode for AckAck {
    fn decode(&self, payload: &[u8], _verbosity: Verbosity) -> RenderedMessage {
        RenderedMessage::new("UBX-ACK-ACK").field("acked", acked_message(payload))
    }
}

struct AckNak;

impl MessageDecode for AckNak {
    fn decode(&self, payload: &[u8], _verbosity: Verbosity) -> RenderedMessage {
        RenderedMessage::new("UBX-ACK-NAK").field("rejected", acked_message(payload))
    }
}
