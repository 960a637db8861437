//! MON class: receiver health and version reporting.

use super::{FieldValue, MessageDecode, MessageDescriptor, RenderedMessage, Verbosity};
use crate::wire;

pub(crate) static MESSAGES: &[MessageDescriptor] = &[
    MessageDescriptor {
        id: 0x02,
        name: "UBX-MON-IO",
        min_len: 20,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x04,
        name: "UBX-MON-VER",
        min_len: 40,
        decoder: Some(&MonVer),
    },
    MessageDescriptor {
        id: 0x06,
        name: "UBX-MON-MSGPP",
        min_len: 120,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x07,
        name: "UBX-MON-RXBUF",
        min_len: 24,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x08,
        name: "UBX-MON-TXBUF",
        min_len: 28,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x09,
        name: "UBX-MON-HW",
        min_len: 60,
        decoder: Some(&MonHw),
    },
    MessageDescriptor {
        id: 0x0b,
        name: "UBX-MON-HW2",
        min_len: 28,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x21,
        name: "UBX-MON-RXR",
        min_len: 1,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x27,
        name: "UBX-MON-PATCH",
        min_len: 4,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x28,
        name: "UBX-MON-GNSS",
        min_len: 8,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x36,
        name: "UBX-MON-COMMS",
        min_len: 8,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x37,
        name: "UBX-MON-HW3",
        min_len: 22,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x38,
        name: "UBX-MON-RF",
        min_len: 4,
        decoder: None,
    },
];

/// Text up to the first NUL of a fixed-width, NUL-padded field.
fn padded_str(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

struct MonVer;

impl MessageDecode for MonVer {
    fn decode(&self, payload: &[u8], verbosity: Verbosity) -> RenderedMessage {
        let mut msg = RenderedMessage::new("UBX-MON-VER")
            .field("swVersion", FieldValue::Text(padded_str(&payload[..30])))
            .field("hwVersion", FieldValue::Text(padded_str(&payload[30..40])));
        if verbosity >= Verbosity::Normal {
            // trailing 30-byte extension strings, as many as the payload carries
            for chunk in payload[40..].chunks_exact(30) {
                msg.push("extension", FieldValue::Text(padded_str(chunk)));
            }
        }
        msg
    }
}

fn antenna_status(code: u8) -> &'static str {
    match code {
        0 => "init",
        1 => "unknown",
        2 => "ok",
        3 => "short",
        4 => "open",
        _ => "reserved",
    }
}

fn antenna_power(code: u8) -> &'static str {
    match code {
        0 => "off",
        1 => "on",
        _ => "unknown",
    }
}

struct MonHw;

impl MessageDecode for MonHw {
    fn decode(&self, payload: &[u8], verbosity: Verbosity) -> RenderedMessage {
        let noise = wire::u16_at(payload, 16);
        let agc = wire::u16_at(payload, 18);
        let a_status = payload[20];
        let a_power = payload[21];
        let flags = payload[22];
        let jam_ind = payload[45];
        let mut msg = RenderedMessage::new("UBX-MON-HW")
            .field("aStatus", FieldValue::Text(antenna_status(a_status).into()))
            .field("aPower", FieldValue::Text(antenna_power(a_power).into()))
            .field("jamInd", FieldValue::Unsigned(u64::from(jam_ind)));
        if verbosity >= Verbosity::Normal {
            msg = msg
                .field("noisePerMS", FieldValue::Unsigned(u64::from(noise)))
                .field("agcCnt", FieldValue::Unsigned(u64::from(agc)))
                .field("rtcCalib", FieldValue::Bool(flags & 0x01 != 0));
        }
        if verbosity >= Verbosity::Full {
            msg = msg
                .field("pinSel", FieldValue::Hex(u64::from(wire::u32_at(payload, 0))))
                .field("pinVal", FieldValue::Hex(u64::from(wire::u32_at(payload, 12))))
                .field("usedMask", FieldValue::Hex(u64::from(wire::u32_at(payload, 24))));
        }
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::super::{dispatch, Rendered, Verbosity};
    use super::*;
    use crate::frame::UbxFrame;

    #[test]
    fn ver_extracts_padded_strings() {
        let mut payload = vec![0u8; 70];
        payload[..14].copy_from_slice(b"EXT CORE 1.00 ");
        payload[30..38].copy_from_slice(b"00190000");
        payload[40..53].copy_from_slice(b"PROTVER=27.11");
        let frame = UbxFrame {
            class: 0x0a,
            id: 0x04,
            payload,
            checksum: (0, 0),
            checksum_ok: true,
        };
        match dispatch(&frame, Verbosity::Normal) {
            Rendered::Message(msg) => {
                assert_eq!(
                    msg.get("swVersion"),
                    Some(&FieldValue::Text("EXT CORE 1.00 ".into()))
                );
                assert_eq!(msg.get("hwVersion"), Some(&FieldValue::Text("00190000".into())));
                assert_eq!(
                    msg.get("extension"),
                    Some(&FieldValue::Text("PROTVER=27.11".into()))
                );
            },
            other => panic!("unexpected rendering {other:?}"),
        }
    }

    #[test]
    fn hw_antenna_and_jamming() {
        let mut payload = vec![0u8; 60];
        payload[16..18].copy_from_slice(&87u16.to_le_bytes());
        payload[20] = 2; // antenna ok
        payload[21] = 1; // powered
        payload[45] = 42;
        let frame = UbxFrame {
            class: 0x0a,
            id: 0x09,
            payload,
            checksum: (0, 0),
            checksum_ok: true,
        };
        match dispatch(&frame, Verbosity::Normal) {
            Rendered::Message(msg) => {
                assert_eq!(msg.get("aStatus"), Some(&FieldValue::Text("ok".into())));
                assert_eq!(msg.get("aPower"), Some(&FieldValue::Text("on".into())));
                assert_eq!(msg.get("jamInd"), Some(&FieldValue::Unsigned(42)));
                assert_eq!(msg.get("noisePerMS"), Some(&FieldValue::Unsigned(87)));
            },
            other => panic!("unexpected rendering {other:?}"),
        }
    }

    #[test]
    fn padded_str_stops_at_nul() {
        assert_eq!(padded_str(b"abc\0\0\0"), "abc");
        assert_eq!(padded_str(b"abc"), "abc");
        assert_eq!(padded_str(b"\0\0"), "");
    }
}
