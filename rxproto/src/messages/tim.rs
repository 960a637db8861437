//! TIM class: timing and time-pulse reporting.

use super::{FieldValue, MessageDecode, MessageDescriptor, RenderedMessage, Verbosity};
use crate::wire::Cursor;

pub(crate) static MESSAGES: &[MessageDescriptor] = &[
    MessageDescriptor {
        id: 0x01,
        name: "UBX-TIM-TP",
        min_len: 16,
        decoder: Some(&TimTp),
    },
    MessageDescriptor {
        id: 0x03,
        name: "UBX-TIM-TM2",
        min_len: 28,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x04,
        name: "UBX-TIM-SVIN",
        min_len: 28,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x06,
        name: "UBX-TIM-VRFY",
        min_len: 20,
        decoder: None,
    },
];

struct TimTp;

impl MessageDecode for TimTp {
    fn decode(&self, payload: &[u8], verbosity: Verbosity) -> RenderedMessage {
        let mut c = Cursor::new(payload);
        let tow_ms = c.u4();
        let tow_sub_ms = c.u4();
        let q_err = c.i4();
        let week = c.u2();
        let flags = c.u1();
        // sub-millisecond part scales by 2^-32 ms
        let tow = f64::from(tow_ms) + f64::from(tow_sub_ms) / 4_294_967_296.0;
        let timebase = if flags & 0x01 != 0 { "UTC" } else { "GNSS" };
        let mut msg = RenderedMessage::new("UBX-TIM-TP")
            .field_unit("tow", FieldValue::Float(tow), "ms")
            .field("week", FieldValue::Unsigned(u64::from(week)))
            .field("timebase", FieldValue::Text(timebase.into()));
        if verbosity >= Verbosity::Normal {
            msg = msg.field_unit("qErr", FieldValue::Signed(i64::from(q_err)), "ps");
        }
        if verbosity >= Verbosity::Full {
            msg = msg.field("flags", FieldValue::Hex(u64::from(flags)));
        }
        msg
    }
}
