//! SEC class: security features and chip identification.

use super::{FieldValue, MessageDecode, MessageDescriptor, RenderedMessage, Verbosity};

pub(crate) static MESSAGES: &[MessageDescriptor] = &[
    MessageDescriptor {
        id: 0x01,
        name: "UBX-SEC-SIGN",
        min_len: 40,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x03,
        name: "UBX-SEC-UNIQID",
        min_len: 9,
        decoder: Some(&SecUniqId),
    },
];

struct SecUniqId;

impl MessageDecode for SecUniqId {
    fn decode(&self, payload: &[u8], verbosity: Verbosity) -> RenderedMessage {
        let version = payload[0];
        // five id bytes after the version and three reserved bytes
        let id = payload[4..9]
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<String>();
        let mut msg = RenderedMessage::new("UBX-SEC-UNIQID").field("uniqueId", FieldValue::Text(id));
        if verbosity >= Verbosity::Full {
            msg.push("version", FieldValue::Unsigned(u64::from(version)));
        }
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::super::{dispatch, Rendered, Verbosity};
    use crate::frame::UbxFrame;

    #[test]
    fn uniqid_hex_rendering() {
        let frame = UbxFrame {
            class: 0x27,
            id: 0x03,
            payload: vec![0x01, 0, 0, 0, 0xaa, 0xbb, 0xcc, 0xdd, 0xee],
            checksum: (0, 0),
            checksum_ok: true,
        };
        match dispatch(&frame, Verbosity::Normal) {
            Rendered::Message(msg) => {
                assert_eq!(msg.to_string(), "UBX-SEC-UNIQID uniqueId=aabbccddee");
            },
            other => panic!("unexpected rendering {other:?}"),
        }
    }
}
