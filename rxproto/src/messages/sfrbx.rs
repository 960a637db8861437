//! GPS / QZSS LNAV subframe interpretation for broadcast navigation data.
//!
//! The receiver hands over each subframe as ten 32-bit words with the six
//! parity bits still attached in the low bits; the 24 data bits of a word
//! sit at bits 29..=6. Fields land on no particular byte boundary and
//! several span two words (an 8-bit MSB chunk completing in the next word's
//! 24 LSBs), which is what the bit-field extractor exists for.

use crate::bitfield::{signed, split_signed, split_unsigned, unsigned};

const PARITY_BITS: u32 = 6;
const WORDS_PER_SUBFRAME: usize = 10;

const TLM_PREAMBLE: u64 = 0x8b;

/// Scale factor 2^exp.
fn pow2(exp: i32) -> f64 {
    (2.0f64).powi(exp)
}

/// Telemetry word, the first word of every subframe.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Telemetry {
    pub message: u16,
    pub integrity: bool,
}

impl Telemetry {
    fn decode(word: u32) -> Option<Self> {
        let d = word >> PARITY_BITS;
        if unsigned(d, 16, 8) != TLM_PREAMBLE {
            // not a valid subframe start
            return None;
        }
        Some(Self {
            message: unsigned(d, 2, 14) as u16,
            integrity: unsigned(d, 1, 1) != 0,
        })
    }
}

/// Handover word: transmission time and the id of the subframe that
/// follows.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Handover {
    /// Time of week at the leading edge of the next subframe, seconds.
    pub tow_s: u32,
    pub alert: bool,
    pub anti_spoofing: bool,
    pub subframe_id: u8,
}

impl Handover {
    fn decode(word: u32) -> Self {
        let d = word >> PARITY_BITS;
        Self {
            // 17-bit TOW count in units of six seconds
            tow_s: (unsigned(d, 7, 17) as u32) * 6,
            alert: unsigned(d, 6, 1) != 0,
            anti_spoofing: unsigned(d, 5, 1) != 0,
            subframe_id: unsigned(d, 2, 3) as u8,
        }
    }
}

/// Subframe 1: clock correction and SV health.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Eph1 {
    /// 10-bit week counter, no rollover compensation.
    pub week: u16,
    /// 4-bit user range accuracy index.
    pub ura: u8,
    /// 6-bit SV health, 0 is healthy.
    pub health: u8,
    /// 10-bit issue of data, clock.
    pub iodc: u16,
    /// Group delay, seconds.
    pub tgd_s: f64,
    /// Clock reference time, seconds.
    pub toc_s: u32,
    pub af2: f64,
    pub af1: f64,
    pub af0: f64,
}

fn decode_eph1(d: &[u32]) -> Eph1 {
    let iodc_msb = unsigned(d[0], 0, 2);
    let iodc_lsb = unsigned(d[5], 16, 8);
    Eph1 {
        week: unsigned(d[0], 14, 10) as u16,
        ura: unsigned(d[0], 8, 4) as u8,
        health: unsigned(d[0], 2, 6) as u8,
        iodc: ((iodc_msb << 8) | iodc_lsb) as u16,
        tgd_s: signed(d[4], 0, 8) as f64 * pow2(-31),
        toc_s: (unsigned(d[5], 0, 16) as u32) << 4,
        af2: signed(d[6], 16, 8) as f64 * pow2(-55),
        af1: signed(d[6], 0, 16) as f64 * pow2(-43),
        af0: signed(d[7], 2, 22) as f64 * pow2(-31),
    }
}

/// Subframe 2: first half of the ephemeris.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Eph2 {
    pub iode: u8,
    /// Orbit radius sine correction, meters.
    pub crs: f64,
    /// Mean motion difference, semicircles/s.
    pub delta_n: f64,
    /// Mean anomaly at reference time, semicircles.
    pub m0: f64,
    pub cuc: f64,
    /// Eccentricity, dimensionless.
    pub e: f64,
    pub cus: f64,
    /// Square root of the semi-major axis, sqrt(m).
    pub sqrt_a: f64,
    /// Ephemeris reference time, seconds.
    pub toe_s: u32,
}

fn decode_eph2(d: &[u32]) -> Eph2 {
    Eph2 {
        iode: unsigned(d[0], 16, 8) as u8,
        crs: signed(d[0], 0, 16) as f64 * pow2(-5),
        delta_n: signed(d[1], 8, 16) as f64 * pow2(-43),
        m0: split_signed(d[1], 0, 8, d[2], 0, 24) as f64 * pow2(-31),
        cuc: signed(d[3], 8, 16) as f64 * pow2(-29),
        e: split_unsigned(d[3], 0, 8, d[4], 0, 24) as f64 * pow2(-33),
        cus: signed(d[5], 8, 16) as f64 * pow2(-29),
        sqrt_a: split_unsigned(d[5], 0, 8, d[6], 0, 24) as f64 * pow2(-19),
        toe_s: (unsigned(d[7], 8, 16) as u32) << 4,
    }
}

/// Subframe 3: second half of the ephemeris.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Eph3 {
    pub cic: f64,
    /// Longitude of ascending node, semicircles.
    pub omega0: f64,
    pub cis: f64,
    /// Inclination at reference time, semicircles.
    pub i0: f64,
    /// Orbit radius cosine correction, meters.
    pub crc: f64,
    /// Argument of perigee, semicircles.
    pub omega: f64,
    /// Rate of right ascension, semicircles/s.
    pub omega_dot: f64,
    pub iode: u8,
    /// Inclination rate, semicircles/s.
    pub idot: f64,
}

fn decode_eph3(d: &[u32]) -> Eph3 {
    Eph3 {
        cic: signed(d[0], 8, 16) as f64 * pow2(-29),
        omega0: split_signed(d[0], 0, 8, d[1], 0, 24) as f64 * pow2(-31),
        cis: signed(d[2], 8, 16) as f64 * pow2(-29),
        i0: split_signed(d[2], 0, 8, d[3], 0, 24) as f64 * pow2(-31),
        crc: signed(d[4], 8, 16) as f64 * pow2(-5),
        omega: split_signed(d[4], 0, 8, d[5], 0, 24) as f64 * pow2(-31),
        omega_dot: signed(d[6], 0, 24) as f64 * pow2(-43),
        iode: unsigned(d[7], 16, 8) as u8,
        idot: signed(d[7], 2, 14) as f64 * pow2(-43),
    }
}

/// Almanac page of subframes 4 and 5, pages carrying SV data.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Almanac {
    /// SV the page describes (1..=32); other page ids carry no almanac.
    pub page_sv: u8,
    pub e: f64,
    /// Almanac reference time, seconds.
    pub toa_s: u32,
    /// Inclination offset from 0.3 semicircles.
    pub delta_i: f64,
    pub omega_dot: f64,
    pub health: u8,
    pub sqrt_a: f64,
    pub omega0: f64,
    pub omega: f64,
    pub m0: f64,
    pub af0: f64,
    pub af1: f64,
}

fn decode_almanac(d: &[u32]) -> Almanac {
    Almanac {
        page_sv: unsigned(d[0], 16, 6) as u8,
        e: unsigned(d[0], 0, 16) as f64 * pow2(-21),
        toa_s: (unsigned(d[1], 16, 8) as u32) << 12,
        delta_i: signed(d[1], 0, 16) as f64 * pow2(-19),
        omega_dot: signed(d[2], 8, 16) as f64 * pow2(-38),
        health: unsigned(d[2], 0, 8) as u8,
        sqrt_a: unsigned(d[3], 0, 24) as f64 * pow2(-11),
        omega0: signed(d[4], 0, 24) as f64 * pow2(-23),
        omega: signed(d[5], 0, 24) as f64 * pow2(-23),
        m0: signed(d[6], 0, 24) as f64 * pow2(-23),
        // af0 is 11 bits split around af1 inside the last data word
        af0: split_signed(d[7], 16, 8, d[7], 2, 3) as f64 * pow2(-20),
        af1: signed(d[7], 5, 11) as f64 * pow2(-38),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GpsSubframe {
    Eph1(Eph1),
    Eph2(Eph2),
    Eph3(Eph3),
    Almanac(Almanac),
    /// Subframe 4/5 pages without almanac content, and reserved ids.
    Other { subframe_id: u8 },
}

/// One interpreted LNAV subframe.
#[derive(Debug, Clone, PartialEq)]
pub struct GpsFrame {
    pub telemetry: Telemetry,
    pub handover: Handover,
    pub subframe: GpsSubframe,
}

/// Interpret ten raw subframe words. `None` when the words do not start
/// with a telemetry preamble or there are too few of them — the caller then
/// falls back to a raw rendering.
pub fn decode_gps(words: &[u32]) -> Option<GpsFrame> {
    if words.len() < WORDS_PER_SUBFRAME {
        return None;
    }
    let telemetry = Telemetry::decode(words[0])?;
    let handover = Handover::decode(words[1]);
    let data: Vec<u32> = words[2..WORDS_PER_SUBFRAME]
        .iter()
        .map(|w| w >> PARITY_BITS)
        .collect();
    let subframe = match handover.subframe_id {
        1 => GpsSubframe::Eph1(decode_eph1(&data)),
        2 => GpsSubframe::Eph2(decode_eph2(&data)),
        3 => GpsSubframe::Eph3(decode_eph3(&data)),
        4 | 5 => {
            let alm = decode_almanac(&data);
            if (1..=32).contains(&alm.page_sv) {
                GpsSubframe::Almanac(alm)
            } else {
                GpsSubframe::Other {
                    subframe_id: handover.subframe_id,
                }
            }
        },
        id => GpsSubframe::Other { subframe_id: id },
    };
    Some(GpsFrame {
        telemetry,
        handover,
        subframe,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pack a 24-bit data value into word form: data in bits 29..=6, zero
    /// parity.
    fn word(data: u32) -> u32 {
        data << PARITY_BITS
    }

    fn tlm(message: u32) -> u32 {
        word((TLM_PREAMBLE as u32) << 16 | message << 2)
    }

    fn how(tow_s: u32, subframe_id: u32) -> u32 {
        word(((tow_s / 6) << 7) | (subframe_id << 2))
    }

    #[test]
    fn rejects_missing_preamble() {
        let words = [word(0x123456); 10];
        assert!(decode_gps(&words).is_none());
    }

    #[test]
    fn rejects_short_input() {
        let words = [tlm(0); 9];
        assert!(decode_gps(&words).is_none());
    }

    #[test]
    fn handover_fields() {
        let mut words = [word(0); 10];
        words[0] = tlm(0x155);
        words[1] = how(30, 1);
        let frame = decode_gps(&words).unwrap();
        assert_eq!(frame.telemetry.message, 0x155);
        assert_eq!(frame.handover.tow_s, 30);
        assert_eq!(frame.handover.subframe_id, 1);
        assert!(matches!(frame.subframe, GpsSubframe::Eph1(_)));
    }

    #[test]
    fn eph1_clock_terms() {
        let mut words = [word(0); 10];
        words[0] = tlm(0);
        words[1] = how(0, 1);
        // word 3: week 0x123, C/A-P 0, URA 5, health 0x2a, IODC MSBs 0b10
        words[2] = word(0x123 << 14 | 5 << 8 | 0x2a << 2 | 0b10);
        // word 7: TGD = -2 raw
        words[6] = word(0xfe);
        // word 8: IODC LSBs 0x34, toc raw 0x1000 -> 65536 s
        words[7] = word(0x34 << 16 | 0x1000);
        // word 9: af2 = 1 raw, af1 = -1 raw
        words[8] = word(1 << 16 | 0xffff);
        // word 10: af0 = -5 raw in bits 23..=2
        words[9] = word(((-5i32 as u32) & 0x3f_ffff) << 2);
        let frame = decode_gps(&words).unwrap();
        let eph = match frame.subframe {
            GpsSubframe::Eph1(eph) => eph,
            other => panic!("unexpected subframe {other:?}"),
        };
        assert_eq!(eph.week, 0x123);
        assert_eq!(eph.ura, 5);
        assert_eq!(eph.health, 0x2a);
        assert_eq!(eph.iodc, 0b10 << 8 | 0x34);
        assert_eq!(eph.toc_s, 65536);
        assert_eq!(eph.tgd_s, -2.0 * (2.0f64).powi(-31));
        assert_eq!(eph.af2, (2.0f64).powi(-55));
        assert_eq!(eph.af1, -(2.0f64).powi(-43));
        assert_eq!(eph.af0, -5.0 * (2.0f64).powi(-31));
    }

    #[test]
    fn eph2_split_fields() {
        let mut words = [word(0); 10];
        words[0] = tlm(0);
        words[1] = how(6, 2);
        // M0 = -1: MSB chunk all ones in word 4 low byte, LSB chunk all
        // ones in word 5
        words[3] = word(0xff);
        words[4] = word(0xff_ffff);
        // sqrtA = 5153.6 roughly: raw = 5153.6 * 2^19
        let sqrt_a_raw: u64 = (5153.6 * (2.0f64).powi(19)) as u64;
        words[7] = word((sqrt_a_raw >> 24) as u32 & 0xff);
        words[8] = word((sqrt_a_raw & 0xff_ffff) as u32);
        let frame = decode_gps(&words).unwrap();
        let eph = match frame.subframe {
            GpsSubframe::Eph2(eph) => eph,
            other => panic!("unexpected subframe {other:?}"),
        };
        assert_eq!(eph.m0, -(2.0f64).powi(-31));
        assert!((eph.sqrt_a - 5153.6).abs() < 1e-4);
    }

    #[test]
    fn almanac_split_af0() {
        let mut words = [word(0); 10];
        words[0] = tlm(0);
        words[1] = how(12, 5);
        // page for SV 7
        words[2] = word(7 << 16);
        // af0 = -3 raw: MSB byte 0xff, LSB bits 0b101; af1 = 9 raw
        let af0_raw = (-3i32 as u32) & 0x7ff;
        words[9] = word(((af0_raw >> 3) << 16) | ((af0_raw & 0b111) << 2) | (9 << 5));
        let frame = decode_gps(&words).unwrap();
        let alm = match frame.subframe {
            GpsSubframe::Almanac(alm) => alm,
            other => panic!("unexpected subframe {other:?}"),
        };
        assert_eq!(alm.page_sv, 7);
        assert_eq!(alm.af0, -3.0 * (2.0f64).powi(-20));
        assert_eq!(alm.af1, 9.0 * (2.0f64).powi(-38));
    }

    #[test]
    fn non_almanac_page_is_other() {
        let mut words = [word(0); 10];
        words[0] = tlm(0);
        words[1] = how(18, 4);
        words[2] = word(56 << 16); // ionosphere page id
        let frame = decode_gps(&words).unwrap();
        assert!(matches!(
            frame.subframe,
            GpsSubframe::Other { subframe_id: 4 }
        ));
    }
}
