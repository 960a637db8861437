//! Frame types produced by the stream classifier.

use crate::builder::build_frame;
use crate::checksum::Checksum;

/// One complete, delimited message extracted from the receiver byte stream.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Frame {
    /// Primary binary protocol frame.
    Ubx(UbxFrame),
    /// ASCII sentence (`$…`), terminator stripped.
    Sentence(String),
    /// Structured receiver log line (`{…`), terminator stripped.
    StructuredLog(String),
    /// Comment line (`#…`), terminator stripped.
    Comment(String),
    /// Secondary binary protocol frame; only the message type survives.
    Rtcm(RtcmFrame),
}

impl Frame {
    pub fn kind(&self) -> FrameKind {
        match self {
            Frame::Ubx(_) => FrameKind::Binary,
            Frame::Sentence(_) => FrameKind::Sentence,
            Frame::StructuredLog(_) => FrameKind::StructuredLog,
            Frame::Comment(_) => FrameKind::Comment,
            Frame::Rtcm(_) => FrameKind::Secondary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameKind {
    Binary,
    Sentence,
    StructuredLog,
    Comment,
    Secondary,
}

/// A complete primary-protocol binary frame.
///
/// `payload.len()` always equals the length the frame declared on the wire;
/// the classifier does not surface a binary frame until the declared payload
/// and both checksum bytes have been read. A checksum mismatch is recorded
/// in [`checksum_ok`](Self::checksum_ok), never dropped — the caller decides
/// whether to trust the contents.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UbxFrame {
    pub class: u8,
    pub id: u8,
    pub payload: Vec<u8>,
    /// Checksum pair as received on the wire.
    pub checksum: (u8, u8),
    pub checksum_ok: bool,
}

impl UbxFrame {
    /// Compute the checksum pair this frame's contents should carry.
    pub fn expected_checksum(&self) -> (u8, u8) {
        let mut calc = Checksum::new();
        calc.push(self.class);
        calc.push(self.id);
        calc.update(&(self.payload.len() as u16).to_le_bytes());
        calc.update(&self.payload);
        calc.pair()
    }

    /// Re-serialize into ready-to-transmit bytes (with a correct checksum).
    pub fn to_bytes(&self) -> Vec<u8> {
        build_frame(self.class, self.id, &self.payload)
    }
}

/// Minimal record of a secondary-protocol frame.
///
/// The secondary protocol is carried for stream hygiene only: the classifier
/// skips the frame as a unit and surfaces its 12-bit message number, taken
/// from the first two payload bytes. The trailer is not verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RtcmFrame {
    /// Message number from the first 12 payload bits, 0 if the payload was
    /// too short to carry one.
    pub msg_type: u16,
    /// Declared payload length (trailer excluded).
    pub payload_len: u16,
}
