//! # rxproto
//!
//! Receiver-protocol engine for GNSS base-station links. The crate turns the
//! byte stream of a u-blox-style receiver into classified frames and decoded
//! messages, and builds the outgoing command bytes the receiver expects —
//! nothing here touches a serial port or socket; transports hand slices in
//! and write slices out.
//!
//! Classifying a stream
//! ====================
//!
//! Feed whatever the transport produced into a [`Classifier`] (or a
//! [`StreamDecoder`], which also runs binary frames through the message
//! catalog) and collect frames as they complete:
//! ```
//! use rxproto::{Classifier, Frame};
//!
//! let mut classifier = Classifier::new();
//! let bytes = [0xb5, 0x62, 0x05, 0x01, 0x02, 0x00, 0x06, 0x01, 0x0f, 0x38];
//! let (consumed, frame) = classifier.advance(&bytes);
//! assert_eq!(consumed, bytes.len());
//! assert!(matches!(frame, Some(Frame::Ubx(_))));
//! ```
//! The classifier owns the mid-frame state: when `advance` returns without a
//! frame, supply the next bytes from the stream and it picks up where it
//! left off. Checksum mismatches are flagged on the frame, never fatal.
//!
//! Building commands
//! =================
//!
//! Outgoing frames come from the builder, either raw or through the typed
//! configuration registry:
//! ```
//! use rxproto::cfg::{CfgLayers, Value};
//!
//! let bytes = rxproto::build_valset(
//!     CfgLayers::RAM,
//!     &[("CFG-RATE-MEAS", Value::Float(0.2))],
//! )
//! .unwrap();
//! assert_eq!(&bytes[..2], &[0xb5, 0x62]);
//! ```
//!
//! Configuration items are addressed by name or by 32-bit key; unknown keys
//! degrade to synthesized items sized from the key itself, so decoding a
//! response from newer firmware than the registry knows still works.

pub use crate::{
    builder::{build_frame, build_poll, build_valdel, build_valget, build_valset},
    classifier::{Classifier, DecodedFrame, StreamDecoder},
    constants::{MAX_PAYLOAD_LEN, RTCM_SYNC_CHAR, SYNC_CHAR_1, SYNC_CHAR_2},
    error::{Error, Result},
    frame::{Frame, FrameKind, RtcmFrame, UbxFrame},
    messages::{
        class_name, dispatch, lookup, FieldValue, MessageDecode, MessageInfo, Rendered,
        RenderedField, RenderedMessage, Verbosity,
    },
};

pub mod bitfield;
mod builder;
pub mod cfg;
mod checksum;
mod classifier;
mod constants;
mod error;
mod frame;
pub mod messages;
pub mod wire;

pub use checksum::{checksum, Checksum};
