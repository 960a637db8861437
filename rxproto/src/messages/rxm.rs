//! RXM class: raw measurement and broadcast navigation data.

use super::sfrbx::{self, GpsSubframe};
use super::{FieldValue, MessageDecode, MessageDescriptor, RenderedMessage, Verbosity};
use crate::messages::nav::gnss_name;
use crate::wire;

pub(crate) static MESSAGES: &[MessageDescriptor] = &[
    MessageDescriptor {
        id: 0x13,
        name: "UBX-RXM-SFRBX",
        min_len: 8,
        decoder: Some(&RxmSfrbx),
    },
    MessageDescriptor {
        id: 0x14,
        name: "UBX-RXM-MEASX",
        min_len: 44,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x15,
        name: "UBX-RXM-RAWX",
        min_len: 16,
        decoder: Some(&RxmRawx),
    },
    MessageDescriptor {
        id: 0x32,
        name: "UBX-RXM-RTCM",
        min_len: 8,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x41,
        name: "UBX-RXM-PMREQ",
        min_len: 8,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x59,
        name: "UBX-RXM-RLM",
        min_len: 16,
        decoder: None,
    },
];

const GNSS_GPS: u8 = 0;
const GNSS_QZSS: u8 = 5;

struct RxmSfrbx;

impl MessageDecode for RxmSfrbx {
    fn decode(&self, payload: &[u8], verbosity: Verbosity) -> RenderedMessage {
        let gnss = payload[0];
        let sv = payload[1];
        let num_words = payload[4];
        let words: Vec<u32> = payload[8..]
            .chunks_exact(4)
            .take(usize::from(num_words))
            .map(|c| wire::u32_at(c, 0))
            .collect();
        let mut msg = RenderedMessage::new("UBX-RXM-SFRBX")
            .field("gnss", FieldValue::Text(gnss_name(gnss).into()))
            .field("sv", FieldValue::Unsigned(u64::from(sv)))
            .field("numWords", FieldValue::Unsigned(u64::from(num_words)));
        // LNAV interpretation exists for GPS and QZSS; everything else
        // renders as raw words
        let frame = if gnss == GNSS_GPS || gnss == GNSS_QZSS {
            sfrbx::decode_gps(&words)
        } else {
            None
        };
        match frame {
            Some(frame) => {
                msg.push("tow", FieldValue::Unsigned(u64::from(frame.handover.tow_s)));
                push_subframe(&mut msg, &frame.subframe, verbosity);
            },
            None => {
                if verbosity >= Verbosity::Full {
                    for word in &words {
                        msg.push("word", FieldValue::Hex(u64::from(*word)));
                    }
                }
            },
        }
        msg
    }
}

fn push_subframe(msg: &mut RenderedMessage, subframe: &GpsSubframe, verbosity: Verbosity) {
    match subframe {
        GpsSubframe::Eph1(eph) => {
            msg.push("subframe", FieldValue::Unsigned(1));
            msg.push("week", FieldValue::Unsigned(u64::from(eph.week)));
            msg.push("health", FieldValue::Unsigned(u64::from(eph.health)));
            msg.push("iodc", FieldValue::Unsigned(u64::from(eph.iodc)));
            if verbosity >= Verbosity::Full {
                msg.push("ura", FieldValue::Unsigned(u64::from(eph.ura)));
                msg.push("toc", FieldValue::Unsigned(u64::from(eph.toc_s)));
                msg.push("tgd", FieldValue::Float(eph.tgd_s));
                msg.push("af0", FieldValue::Float(eph.af0));
                msg.push("af1", FieldValue::Float(eph.af1));
                msg.push("af2", FieldValue::Float(eph.af2));
            }
        },
        GpsSubframe::Eph2(eph) => {
            msg.push("subframe", FieldValue::Unsigned(2));
            msg.push("iode", FieldValue::Unsigned(u64::from(eph.iode)));
            msg.push("toe", FieldValue::Unsigned(u64::from(eph.toe_s)));
            if verbosity >= Verbosity::Full {
                msg.push("e", FieldValue::Float(eph.e));
                msg.push("sqrtA", FieldValue::Float(eph.sqrt_a));
                msg.push("m0", FieldValue::Float(eph.m0));
                msg.push("deltaN", FieldValue::Float(eph.delta_n));
                msg.push("crs", FieldValue::Float(eph.crs));
                msg.push("cuc", FieldValue::Float(eph.cuc));
                msg.push("cus", FieldValue::Float(eph.cus));
            }
        },
        GpsSubframe::Eph3(eph) => {
            msg.push("subframe", FieldValue::Unsigned(3));
            msg.push("iode", FieldValue::Unsigned(u64::from(eph.iode)));
            if verbosity >= Verbosity::Full {
                msg.push("omega0", FieldValue::Float(eph.omega0));
                msg.push("i0", FieldValue::Float(eph.i0));
                msg.push("omega", FieldValue::Float(eph.omega));
                msg.push("omegaDot", FieldValue::Float(eph.omega_dot));
                msg.push("idot", FieldValue::Float(eph.idot));
                msg.push("crc", FieldValue::Float(eph.crc));
                msg.push("cic", FieldValue::Float(eph.cic));
                msg.push("cis", FieldValue::Float(eph.cis));
            }
        },
        GpsSubframe::Almanac(alm) => {
            msg.push("subframe", FieldValue::Text("almanac".into()));
            msg.push("pageSv", FieldValue::Unsigned(u64::from(alm.page_sv)));
            msg.push("health", FieldValue::Unsigned(u64::from(alm.health)));
            if verbosity >= Verbosity::Full {
                msg.push("e", FieldValue::Float(alm.e));
                msg.push("toa", FieldValue::Unsigned(u64::from(alm.toa_s)));
                msg.push("sqrtA", FieldValue::Float(alm.sqrt_a));
                msg.push("af0", FieldValue::Float(alm.af0));
                msg.push("af1", FieldValue::Float(alm.af1));
            }
        },
        GpsSubframe::Other { subframe_id } => {
            msg.push("subframe", FieldValue::Unsigned(u64::from(*subframe_id)));
        },
    }
}

struct RxmRawx;

impl MessageDecode for RxmRawx {
    fn decode(&self, payload: &[u8], verbosity: Verbosity) -> RenderedMessage {
        let rcv_tow = wire::f64_at(payload, 0);
        let week = wire::u16_at(payload, 8);
        let leap_s = wire::i8_at(payload, 10);
        let num_meas = payload[11];
        let mut msg = RenderedMessage::new("UBX-RXM-RAWX")
            .field_unit("rcvTow", FieldValue::Float(rcv_tow), "s")
            .field("week", FieldValue::Unsigned(u64::from(week)))
            .field("numMeas", FieldValue::Unsigned(u64::from(num_meas)));
        if verbosity >= Verbosity::Normal {
            msg.push("leapS", FieldValue::Signed(i64::from(leap_s)));
        }
        // one 32-byte block per measurement
        if verbosity >= Verbosity::Full {
            let blocks = usize::from(num_meas).min((payload.len() - 16) / 32);
            for i in 0..blocks {
                let base = 16 + i * 32;
                let pr = wire::f64_at(payload, base);
                let gnss = payload[base + 20];
                let sv = payload[base + 21];
                let cno = payload[base + 26];
                msg.push(
                    "meas",
                    FieldValue::Text(format!(
                        "{}:{sv} pr={pr:.1} cno={cno}",
                        gnss_name(gnss)
                    )),
                );
            }
        }
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::super::{dispatch, Rendered, Verbosity};
    use super::*;
    use crate::frame::UbxFrame;

    fn sfrbx_payload(gnss: u8, words: &[u32]) -> Vec<u8> {
        let mut payload = vec![gnss, 12, 0, 0, words.len() as u8, 0, 0x02, 0];
        for w in words {
            payload.extend_from_slice(&w.to_le_bytes());
        }
        payload
    }

    #[test]
    fn sfrbx_interprets_gps_subframe() {
        let mut words = [0u32; 10];
        words[0] = 0x8b << 22; // preamble at data bits 23..=16, word bits 29..=22
        words[1] = ((600 / 6) << 13) | (2 << 8); // HOW: tow, subframe 2
        let frame = UbxFrame {
            class: 0x02,
            id: 0x13,
            payload: sfrbx_payload(0, &words),
            checksum: (0, 0),
            checksum_ok: true,
        };
        match dispatch(&frame, Verbosity::Normal) {
            Rendered::Message(msg) => {
                assert_eq!(msg.get("gnss"), Some(&FieldValue::Text("GPS".into())));
                assert_eq!(msg.get("tow"), Some(&FieldValue::Unsigned(600)));
                assert_eq!(msg.get("subframe"), Some(&FieldValue::Unsigned(2)));
            },
            other => panic!("unexpected rendering {other:?}"),
        }
    }

    #[test]
    fn sfrbx_galileo_stays_raw() {
        let words = [0u32; 8];
        let frame = UbxFrame {
            class: 0x02,
            id: 0x13,
            payload: sfrbx_payload(2, &words),
            checksum: (0, 0),
            checksum_ok: true,
        };
        match dispatch(&frame, Verbosity::Normal) {
            Rendered::Message(msg) => {
                assert_eq!(msg.get("gnss"), Some(&FieldValue::Text("Galileo".into())));
                assert!(msg.get("subframe").is_none());
            },
            other => panic!("unexpected rendering {other:?}"),
        }
    }

    #[test]
    fn rawx_header() {
        let mut payload = vec![0u8; 16];
        payload[0..8].copy_from_slice(&123456.5f64.to_le_bytes());
        payload[8..10].copy_from_slice(&2345u16.to_le_bytes());
        payload[10] = 18;
        payload[11] = 0;
        let frame = UbxFrame {
            class: 0x02,
            id: 0x15,
            payload,
            checksum: (0, 0),
            checksum_ok: true,
        };
        match dispatch(&frame, Verbosity::Normal) {
            Rendered::Message(msg) => {
                assert_eq!(msg.get("rcvTow"), Some(&FieldValue::Float(123456.5)));
                assert_eq!(msg.get("week"), Some(&FieldValue::Unsigned(2345)));
                assert_eq!(msg.get("leapS"), Some(&FieldValue::Signed(18)));
            },
            other => panic!("unexpected rendering {other:?}"),
        }
    }
}
