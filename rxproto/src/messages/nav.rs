//! NAV class: navigation solutions, fix status, survey-in progress.

use bitflags::bitflags;
use chrono::NaiveDate;

use super::{FieldValue, MessageDecode, MessageDescriptor, RenderedMessage, Verbosity};
use crate::wire::Cursor;

pub(crate) static MESSAGES: &[MessageDescriptor] = &[
    MessageDescriptor {
        id: 0x01,
        name: "UBX-NAV-POSECEF",
        min_len: 20,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x02,
        name: "UBX-NAV-POSLLH",
        min_len: 28,
        decoder: Some(&NavPosLlh),
    },
    MessageDescriptor {
        id: 0x03,
        name: "UBX-NAV-STATUS",
        min_len: 16,
        decoder: Some(&NavStatus),
    },
    MessageDescriptor {
        id: 0x04,
        name: "UBX-NAV-DOP",
        min_len: 18,
        decoder: Some(&NavDop),
    },
    MessageDescriptor {
        id: 0x05,
        name: "UBX-NAV-ATT",
        min_len: 32,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x06,
        name: "UBX-NAV-SOL",
        min_len: 52,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x07,
        name: "UBX-NAV-PVT",
        min_len: 92,
        decoder: Some(&NavPvt),
    },
    MessageDescriptor {
        id: 0x09,
        name: "UBX-NAV-ODO",
        min_len: 20,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x10,
        name: "UBX-NAV-RESETODO",
        min_len: 0,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x11,
        name: "UBX-NAV-VELECEF",
        min_len: 20,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x12,
        name: "UBX-NAV-VELNED",
        min_len: 36,
        decoder: Some(&NavVelNed),
    },
    MessageDescriptor {
        id: 0x13,
        name: "UBX-NAV-HPPOSECEF",
        min_len: 28,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x14,
        name: "UBX-NAV-HPPOSLLH",
        min_len: 36,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x20,
        name: "UBX-NAV-TIMEGPS",
        min_len: 16,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x21,
        name: "UBX-NAV-TIMEUTC",
        min_len: 20,
        decoder: Some(&NavTimeUtc),
    },
    MessageDescriptor {
        id: 0x22,
        name: "UBX-NAV-CLOCK",
        min_len: 20,
        decoder: Some(&NavClock),
    },
    MessageDescriptor {
        id: 0x26,
        name: "UBX-NAV-TIMELS",
        min_len: 24,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x30,
        name: "UBX-NAV-SVINFO",
        min_len: 8,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x32,
        name: "UBX-NAV-SBAS",
        min_len: 12,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x35,
        name: "UBX-NAV-SAT",
        min_len: 8,
        decoder: Some(&NavSat),
    },
    MessageDescriptor {
        id: 0x36,
        name: "UBX-NAV-COV",
        min_len: 64,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x39,
        name: "UBX-NAV-GEOFENCE",
        min_len: 8,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x3b,
        name: "UBX-NAV-SVIN",
        min_len: 40,
        decoder: Some(&NavSvin),
    },
    MessageDescriptor {
        id: 0x3c,
        name: "UBX-NAV-RELPOSNED",
        min_len: 40,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x43,
        name: "UBX-NAV-SIG",
        min_len: 8,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x60,
        name: "UBX-NAV-AOPSTATUS",
        min_len: 16,
        decoder: None,
    },
    MessageDescriptor {
        id: 0x61,
        name: "UBX-NAV-EOE",
        min_len: 4,
        decoder: None,
    },
];

bitflags! {
    /// Validity bits of the PVT time solution.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct NavPvtValid: u8 {
        const VALID_DATE = 0x01;
        const VALID_TIME = 0x02;
        const FULLY_RESOLVED = 0x04;
        const VALID_MAG = 0x08;
    }
}

bitflags! {
    /// Fix status bits shared by the PVT and STATUS solutions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct NavFixFlags: u8 {
        const GNSS_FIX_OK = 0x01;
        const DIFF_SOLN = 0x02;
        const WKN_SET = 0x04;
        const TOW_SET = 0x08;
    }
}

pub fn fix_type_name(fix_type: u8) -> &'static str {
    match fix_type {
        0 => "none",
        1 => "dead-reckoning",
        2 => "2D",
        3 => "3D",
        4 => "GNSS+DR",
        5 => "time-only",
        _ => "reserved",
    }
}

pub fn gnss_name(gnss_id: u8) -> &'static str {
    match gnss_id {
        0 => "GPS",
        1 => "SBAS",
        2 => "Galileo",
        3 => "BeiDou",
        4 => "IMES",
        5 => "QZSS",
        6 => "GLONASS",
        _ => "unknown",
    }
}

fn deg7(v: i32) -> FieldValue {
    FieldValue::Float(f64::from(v) * 1e-7)
}

fn mm(v: i32) -> FieldValue {
    FieldValue::Float(f64::from(v) / 1000.0)
}

fn mm_u(v: u32) -> FieldValue {
    FieldValue::Float(f64::from(v) / 1000.0)
}

fn cm(v: i32) -> FieldValue {
    FieldValue::Float(f64::from(v) / 100.0)
}

struct NavPosLlh;

impl MessageDecode for NavPosLlh {
    fn decode(&self, payload: &[u8], verbosity: Verbosity) -> RenderedMessage {
        let mut c = Cursor::new(payload);
        let itow = c.u4();
        let mut msg = RenderedMessage::new("UBX-NAV-POSLLH")
            .field_unit("lon", deg7(c.i4()), "deg")
            .field_unit("lat", deg7(c.i4()), "deg")
            .field_unit("height", mm(c.i4()), "m")
            .field_unit("hMSL", mm(c.i4()), "m");
        if verbosity >= Verbosity::Normal {
            msg = msg
                .field_unit("hAcc", mm_u(c.u4()), "m")
                .field_unit("vAcc", mm_u(c.u4()), "m");
        }
        if verbosity >= Verbosity::Full {
            msg.push("iTOW", FieldValue::Unsigned(u64::from(itow)));
        }
        msg
    }
}

struct NavStatus;

impl MessageDecode for NavStatus {
    fn decode(&self, payload: &[u8], verbosity: Verbosity) -> RenderedMessage {
        let mut c = Cursor::new(payload);
        let itow = c.u4();
        let fix = c.u1();
        let flags = NavFixFlags::from_bits_truncate(c.u1());
        c.skip(2); // fixStat, flags2
        let ttff = c.u4();
        let msss = c.u4();
        let mut msg = RenderedMessage::new("UBX-NAV-STATUS")
            .field("fix", FieldValue::Text(fix_type_name(fix).into()))
            .field("fixOk", FieldValue::Bool(flags.contains(NavFixFlags::GNSS_FIX_OK)))
            .field("diffSoln", FieldValue::Bool(flags.contains(NavFixFlags::DIFF_SOLN)));
        if verbosity >= Verbosity::Normal {
            msg = msg
                .field_unit("ttff", FieldValue::Unsigned(u64::from(ttff)), "ms")
                .field_unit("msss", FieldValue::Unsigned(u64::from(msss)), "ms");
        }
        if verbosity >= Verbosity::Full {
            msg.push("iTOW", FieldValue::Unsigned(u64::from(itow)));
        }
        msg
    }
}

struct NavDop;

impl MessageDecode for NavDop {
    fn decode(&self, payload: &[u8], verbosity: Verbosity) -> RenderedMessage {
        let mut c = Cursor::new(payload);
        c.skip(4); // iTOW
        let dop = |c: &mut Cursor<'_>| FieldValue::Float(f64::from(c.u2()) * 0.01);
        let g = dop(&mut c);
        let p = dop(&mut c);
        let t = dop(&mut c);
        let v = dop(&mut c);
        let h = dop(&mut c);
        let mut msg = RenderedMessage::new("UBX-NAV-DOP")
            .field("pDOP", p)
            .field("hDOP", h)
            .field("vDOP", v);
        if verbosity >= Verbosity::Full {
            msg.push("gDOP", g);
            msg.push("tDOP", t);
            msg.push("nDOP", dop(&mut c));
            msg.push("eDOP", dop(&mut c));
        }
        msg
    }
}

struct NavPvt;

impl MessageDecode for NavPvt {
    fn decode(&self, payload: &[u8], verbosity: Verbosity) -> RenderedMessage {
        let mut c = Cursor::new(payload);
        let itow = c.u4();
        let year = c.u2();
        let month = c.u1();
        let day = c.u1();
        let hour = c.u1();
        let min = c.u1();
        let sec = c.u1();
        let valid = NavPvtValid::from_bits_truncate(c.u1());
        let tacc = c.u4();
        let nano = c.i4();
        let fix = c.u1();
        let flags = c.u1();
        c.skip(1); // flags2
        let num_sv = c.u1();
        let lon = c.i4();
        let lat = c.i4();
        let height = c.i4();
        let h_msl = c.i4();
        let h_acc = c.u4();
        let v_acc = c.u4();
        c.skip(12); // velN, velE, velD
        let g_speed = c.i4();
        let head_mot = c.i4();
        let s_acc = c.u4();
        let head_acc = c.u4();
        let p_dop = c.u2();

        let mut msg = RenderedMessage::new("UBX-NAV-PVT");
        if valid.contains(NavPvtValid::VALID_DATE | NavPvtValid::VALID_TIME) {
            msg.push("time", FieldValue::Text(utc_text(year, month, day, hour, min, sec)));
        }
        msg.push("fix", FieldValue::Text(fix_type_name(fix).into()));
        msg.push("fixOk", FieldValue::Bool(flags & 0x01 != 0));
        msg.push("numSV", FieldValue::Unsigned(u64::from(num_sv)));
        let mut msg = msg
            .field_unit("lon", deg7(lon), "deg")
            .field_unit("lat", deg7(lat), "deg")
            .field_unit("hMSL", mm(h_msl), "m");
        if verbosity >= Verbosity::Normal {
            msg = msg
                .field_unit("hAcc", mm_u(h_acc), "m")
                .field_unit("vAcc", mm_u(v_acc), "m")
                .field_unit("gSpeed", mm(g_speed), "m/s")
                .field("pDOP", FieldValue::Float(f64::from(p_dop) * 0.01));
            // carrier phase state, bits 6..=7 of flags
            let carr = (flags >> 6) & 0x03;
            if carr != 0 {
                msg.push(
                    "carrSoln",
                    FieldValue::Text(if carr == 2 { "fixed" } else { "float" }.into()),
                );
            }
        }
        if verbosity >= Verbosity::Full {
            msg = msg
                .field_unit("height", mm(height), "m")
                .field_unit("headMot", FieldValue::Float(f64::from(head_mot) * 1e-5), "deg")
                .field_unit("sAcc", mm(s_acc as i32), "m/s")
                .field_unit("headAcc", FieldValue::Float(f64::from(head_acc) * 1e-5), "deg")
                .field_unit("tAcc", FieldValue::Unsigned(u64::from(tacc)), "ns")
                .field("nano", FieldValue::Signed(i64::from(nano)))
                .field("iTOW", FieldValue::Unsigned(u64::from(itow)));
        }
        msg
    }
}

struct NavVelNed;

impl MessageDecode for NavVelNed {
    fn decode(&self, payload: &[u8], verbosity: Verbosity) -> RenderedMessage {
        let mut c = Cursor::new(payload);
        let itow = c.u4();
        let vel_n = c.i4();
        let vel_e = c.i4();
        let vel_d = c.i4();
        c.skip(4); // 3D speed
        let g_speed = c.u4();
        let heading = c.i4();
        let mut msg = RenderedMessage::new("UBX-NAV-VELNED")
            .field_unit("gSpeed", cm(g_speed as i32), "m/s")
            .field_unit("heading", FieldValue::Float(f64::from(heading) * 1e-5), "deg");
        if verbosity >= Verbosity::Normal {
            msg = msg
                .field_unit("velN", cm(vel_n), "m/s")
                .field_unit("velE", cm(vel_e), "m/s")
                .field_unit("velD", cm(vel_d), "m/s");
        }
        if verbosity >= Verbosity::Full {
            msg = msg
                .field_unit("sAcc", cm(c.u4() as i32), "m/s")
                .field_unit("cAcc", FieldValue::Float(f64::from(c.u4()) * 1e-5), "deg")
                .field("iTOW", FieldValue::Unsigned(u64::from(itow)));
        }
        msg
    }
}

struct NavTimeUtc;

impl MessageDecode for NavTimeUtc {
    fn decode(&self, payload: &[u8], verbosity: Verbosity) -> RenderedMessage {
        let mut c = Cursor::new(payload);
        c.skip(4); // iTOW
        let tacc = c.u4();
        let nano = c.i4();
        let year = c.u2();
        let month = c.u1();
        let day = c.u1();
        let hour = c.u1();
        let min = c.u1();
        let sec = c.u1();
        let valid = c.u1();
        let mut msg = RenderedMessage::new("UBX-NAV-TIMEUTC");
        if valid & 0x04 != 0 {
            msg.push("time", FieldValue::Text(utc_text(year, month, day, hour, min, sec)));
        } else {
            msg.push("validUTC", FieldValue::Bool(false));
        }
        if verbosity >= Verbosity::Full {
            msg = msg
                .field_unit("tAcc", FieldValue::Unsigned(u64::from(tacc)), "ns")
                .field("nano", FieldValue::Signed(i64::from(nano)))
                .field("valid", FieldValue::Hex(u64::from(valid)));
        }
        msg
    }
}

struct NavClock;

impl MessageDecode for NavClock {
    fn decode(&self, payload: &[u8], verbosity: Verbosity) -> RenderedMessage {
        let mut c = Cursor::new(payload);
        c.skip(4); // iTOW
        let mut msg = RenderedMessage::new("UBX-NAV-CLOCK")
            .field_unit("clkB", FieldValue::Signed(i64::from(c.i4())), "ns")
            .field_unit("clkD", FieldValue::Signed(i64::from(c.i4())), "ns/s");
        if verbosity >= Verbosity::Full {
            msg = msg
                .field_unit("tAcc", FieldValue::Unsigned(u64::from(c.u4())), "ns")
                .field_unit("fAcc", FieldValue::Unsigned(u64::from(c.u4())), "ps/s");
        }
        msg
    }
}

struct NavSat;

impl MessageDecode for NavSat {
    fn decode(&self, payload: &[u8], verbosity: Verbosity) -> RenderedMessage {
        let mut c = Cursor::new(payload);
        c.skip(4); // iTOW
        let version = c.u1();
        let num_svs = c.u1();
        c.skip(2);
        // only count the blocks the payload actually carries; a lying
        // numSvs must not walk off the end
        let blocks = usize::from(num_svs).min(c.remaining() / 12);
        let mut used = 0u64;
        let mut msg = RenderedMessage::new("UBX-NAV-SAT");
        for _ in 0..blocks {
            let gnss = c.u1();
            let sv = c.u1();
            let cno = c.u1();
            let elev = c.i1();
            let azim = c.i2();
            c.skip(2); // prRes
            let flags = c.u4();
            if flags & 0x08 != 0 {
                used += 1;
            }
            if verbosity >= Verbosity::Full {
                msg.push(
                    "sv",
                    FieldValue::Text(format!(
                        "{}:{sv} cno={cno} elev={elev} azim={azim} used={}",
                        gnss_name(gnss),
                        flags & 0x08 != 0
                    )),
                );
            }
        }
        msg.push("numSvs", FieldValue::Unsigned(u64::from(num_svs)));
        msg.push("used", FieldValue::Unsigned(used));
        if verbosity >= Verbosity::Full {
            msg.push("version", FieldValue::Unsigned(u64::from(version)));
        }
        msg
    }
}

struct NavSvin;

impl MessageDecode for NavSvin {
    fn decode(&self, payload: &[u8], verbosity: Verbosity) -> RenderedMessage {
        let mut c = Cursor::new(payload);
        c.skip(4); // version, reserved
        c.skip(4); // iTOW
        let dur = c.u4();
        let mean_x = c.i4();
        let mean_y = c.i4();
        let mean_z = c.i4();
        let x_hp = c.i1();
        let y_hp = c.i1();
        let z_hp = c.i1();
        c.skip(1);
        let mean_acc = c.u4();
        let obs = c.u4();
        let valid = c.u1();
        let active = c.u1();
        // centimeter mean plus 0.1 mm high-precision component
        let coord = |cm_part: i32, hp: i8| {
            FieldValue::Float(f64::from(cm_part) / 100.0 + f64::from(hp) * 1e-4)
        };
        let mut msg = RenderedMessage::new("UBX-NAV-SVIN")
            .field("active", FieldValue::Bool(active != 0))
            .field("valid", FieldValue::Bool(valid != 0))
            .field_unit("dur", FieldValue::Unsigned(u64::from(dur)), "s")
            .field("obs", FieldValue::Unsigned(u64::from(obs)))
            .field_unit("meanAcc", FieldValue::Float(f64::from(mean_acc) * 1e-4), "m");
        if verbosity >= Verbosity::Normal {
            msg = msg
                .field_unit("meanX", coord(mean_x, x_hp), "m")
                .field_unit("meanY", coord(mean_y, y_hp), "m")
                .field_unit("meanZ", coord(mean_z, z_hp), "m");
        }
        msg
    }
}

fn utc_text(year: u16, month: u8, day: u8, hour: u8, min: u8, sec: u8) -> String {
    match NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
        .and_then(|d| d.and_hms_opt(u32::from(hour), u32::from(min), u32::from(sec)))
    {
        Some(dt) => format!("{}Z", dt.format("%Y-%m-%dT%H:%M:%S")),
        // a receiver can emit out-of-range calendar fields before its first fix
        None => format!("{year:04}-{month:02}-{day:02}T{hour:02}:{min:02}:{sec:02}?"),
    }
}
