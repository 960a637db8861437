//! Outgoing command construction.
//!
//! [`build_frame`] is the only place that writes the wire framing: sync
//! pair, class, id, little-endian length, payload, checksum. The
//! configuration builders sit on top of it and the registry, turning
//! `(name, value)` pairs into ready-to-transmit get/set/delete frames.
//! Pure functions throughout; the transport collaborator does the writing.

use crate::cfg::{self, body::HEADER_LEN as CFG_HEADER_LEN, CfgLayer, CfgLayers, Value};
use crate::checksum::Checksum;
use crate::constants::{CHECKSUM_LEN, HEADER_LEN, SYNC_CHAR_1, SYNC_CHAR_2};
use crate::error::Result;
use crate::wire;

const CLASS_CFG: u8 = 0x06;
const ID_VALSET: u8 = 0x8a;
const ID_VALGET: u8 = 0x8b;
const ID_VALDEL: u8 = 0x8c;

/// Assemble one complete frame around `payload`.
///
/// The payload must fit the 16-bit length field; larger payloads are a
/// caller contract violation (nothing the protocol can represent).
pub fn build_frame(class: u8, id: u8, payload: &[u8]) -> Vec<u8> {
    debug_assert!(payload.len() <= usize::from(u16::MAX));
    let mut out = Vec::with_capacity(HEADER_LEN + payload.len() + CHECKSUM_LEN);
    out.push(SYNC_CHAR_1);
    out.push(SYNC_CHAR_2);
    out.push(class);
    out.push(id);
    wire::put_u16(&mut out, payload.len() as u16);
    out.extend_from_slice(payload);
    let (ck_a, ck_b) = {
        let mut calc = Checksum::new();
        calc.update(&out[2..]);
        calc.pair()
    };
    out.push(ck_a);
    out.push(ck_b);
    out
}

/// A zero-payload frame: the poll request for whatever `(class, id)`
/// normally carries.
pub fn build_poll(class: u8, id: u8) -> Vec<u8> {
    build_frame(class, id, &[])
}

/// Request the current values of named items from one storage layer,
/// starting `position` items in (0 for the first chunk).
pub fn build_valget(layer: CfgLayer, position: u16, names: &[&str]) -> Result<Vec<u8>> {
    let mut body = Vec::with_capacity(CFG_HEADER_LEN + names.len() * 4);
    body.push(0x00); // request version
    body.push(layer.id());
    wire::put_u16(&mut body, position);
    for name in names {
        let item = cfg::lookup_by_name(name)?;
        wire::put_u32(&mut body, item.key);
    }
    Ok(build_frame(CLASS_CFG, ID_VALGET, &body))
}

/// Set named items to values across the given storage layers.
pub fn build_valset(layers: CfgLayers, pairs: &[(&str, Value)]) -> Result<Vec<u8>> {
    let mut body = Vec::with_capacity(CFG_HEADER_LEN + pairs.len() * 8);
    body.push(0x00); // no transaction
    body.push(layers.bits());
    wire::put_u16(&mut body, 0); // transaction + reserved
    for (name, value) in pairs {
        let item = cfg::lookup_by_name(name)?;
        wire::put_u32(&mut body, item.key);
        body.extend_from_slice(&item.encode_value(value)?);
    }
    Ok(build_frame(CLASS_CFG, ID_VALSET, &body))
}

/// Delete named items from the given storage layers, reverting them to
/// defaults.
pub fn build_valdel(layers: CfgLayers, names: &[&str]) -> Result<Vec<u8>> {
    let mut body = Vec::with_capacity(CFG_HEADER_LEN + names.len() * 4);
    body.push(0x00);
    body.push(layers.bits());
    wire::put_u16(&mut body, 0);
    for name in names {
        let item = cfg::lookup_by_name(name)?;
        wire::put_u32(&mut body, item.key);
    }
    Ok(build_frame(CLASS_CFG, ID_VALDEL, &body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn frame_layout_and_checksum() {
        let bytes = build_frame(0x05, 0x01, &[0x06, 0x01]);
        assert_eq!(
            bytes,
            vec![0xb5, 0x62, 0x05, 0x01, 0x02, 0x00, 0x06, 0x01, 0x0f, 0x38]
        );
    }

    #[test]
    fn poll_is_zero_length() {
        let bytes = build_poll(0x0a, 0x04);
        assert_eq!(&bytes[..6], &[0xb5, 0x62, 0x0a, 0x04, 0x00, 0x00]);
        assert_eq!(bytes.len(), 8);
    }

    #[test]
    fn valget_request_body() {
        let bytes = build_valget(CfgLayer::Flash, 0, &["CFG-ANA-USE_ANA"]).unwrap();
        // skip framing: payload starts at offset 6
        let body = &bytes[6..bytes.len() - 2];
        assert_eq!(body[0], 0x00);
        assert_eq!(body[1], 2); // flash layer id
        assert_eq!(&body[4..8], &0x1023_0001u32.to_le_bytes());
    }

    #[test]
    fn valset_encodes_values() {
        let bytes = build_valset(
            CfgLayers::RAM | CfgLayers::FLASH,
            &[
                ("CFG-ANA-USE_ANA", Value::Bool(true)),
                ("CFG-UART1-BAUDRATE", Value::Unsigned(460_800)),
            ],
        )
        .unwrap();
        let body = &bytes[6..bytes.len() - 2];
        assert_eq!(body[1], 0x05); // RAM | FLASH
        assert_eq!(&body[4..8], &0x1023_0001u32.to_le_bytes());
        assert_eq!(body[8], 0x01);
        assert_eq!(&body[9..13], &0x4052_0001u32.to_le_bytes());
        assert_eq!(&body[13..17], &460_800u32.to_le_bytes());
    }

    #[test]
    fn valdel_keys_only() {
        let bytes = build_valdel(CfgLayers::BBR, &["CFG-UART1OUTPROT-NMEA"]).unwrap();
        let body = &bytes[6..bytes.len() - 2];
        assert_eq!(body.len(), 8);
        assert_eq!(&body[4..8], &0x1074_0002u32.to_le_bytes());
    }

    #[test]
    fn unknown_name_is_refused() {
        assert_eq!(
            build_valget(CfgLayer::Ram, 0, &["CFG-XX-NOPE"]),
            Err(Error::UnknownConfigItem("CFG-XX-NOPE".into()))
        );
    }

    #[test]
    fn built_frames_carry_valid_checksums() {
        for (class, id, payload) in [
            (0x06u8, 0x8au8, vec![0u8; 12]),
            (0x01, 0x07, vec![0xff; 92]),
            (0x0a, 0x04, Vec::new()),
        ] {
            let bytes = build_frame(class, id, &payload);
            let mut calc = Checksum::new();
            calc.update(&bytes[2..bytes.len() - 2]);
            let (a, b) = calc.pair();
            assert_eq!(&bytes[bytes.len() - 2..], &[a, b]);
        }
    }
}
