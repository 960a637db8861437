//! INF class: free-text information messages from the receiver.

use super::{FieldValue, MessageDecode, MessageDescriptor, RenderedMessage, Verbosity};

pub(crate) static MESSAGES: &[MessageDescriptor] = &[
    MessageDescriptor {
        id: 0x00,
        name: "UBX-INF-ERROR",
        min_len: 0,
        decoder: Some(&InfText("UBX-INF-ERROR")),
    },
    MessageDescriptor {
        id: 0x01,
        name: "UBX-INF-WARNING",
        min_len: 0,
        decoder: Some(&InfText("UBX-INF-WARNING")),
    },
    MessageDescriptor {
        id: 0x02,
        name: "UBX-INF-NOTICE",
        min_len: 0,
        decoder: Some(&InfText("UBX-INF-NOTICE")),
    },
    MessageDescriptor {
        id: 0x03,
        name: "UBX-INF-TEST",
        min_len: 0,
        decoder: Some(&InfText("UBX-INF-TEST")),
    },
    MessageDescriptor {
        id: 0x04,
        name: "UBX-INF-DEBUG",
        min_len: 0,
        decoder: Some(&InfText("UBX-INF-DEBUG")),
    },
];

/// The whole payload is the message text; non-UTF-8 bytes are replaced
/// rather than refused, the stream keeps moving either way.
struct InfText(&'static str);

impl MessageDecode for InfText {
    fn decode(&self, payload: &[u8], _verbosity: Verbosity) -> RenderedMessage {
        RenderedMessage::new(self.0).field(
            "text",
            FieldValue::Text(String::from_utf8_lossy(payload).into_owned()),
        )
    }
}
