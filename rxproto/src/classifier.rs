//! Stream classifier: the framing state machine.
//!
//! A live receiver link interleaves binary frames with ASCII sentences,
//! structured log lines, comments and secondary-protocol frames, plus
//! whatever line noise the cable contributes. The classifier consumes the
//! stream one byte at a time through an explicit state type and surfaces at
//! most one complete [`Frame`] per call.
//!
//! Malformed input is never an error here. A byte that does not fit the
//! current state's alphabet resynchronizes the machine to its initial state
//! and is reported as consumed without a frame; a checksum mismatch is
//! logged and flagged on the surfaced frame. The stream always moves
//! forward.

use tracing::{debug, warn};

use crate::checksum::Checksum;
use crate::constants::{
    COMMENT_START, END_CHAR_1, END_CHAR_2, LOG_START, MAX_LINE_LEN, MAX_PAYLOAD_LEN,
    RTCM_RESERVED_MASK, RTCM_SYNC_CHAR, RTCM_TRAILER_LEN, SENTENCE_START, SYNC_CHAR_1, SYNC_CHAR_2,
};
use crate::frame::{Frame, RtcmFrame, UbxFrame};
use crate::messages::{self, Rendered, Verbosity};

/// Classifier state. One variant per position in a partially read frame;
/// the payload-carrying variants own the bytes accumulated so far.
#[derive(Debug, Clone, PartialEq, Default)]
enum State {
    /// Hunting for a start byte.
    #[default]
    Initial,
    /// Saw sync 1, expecting sync 2.
    Sync2,
    /// Reading the frame header, byte by byte.
    Class,
    MsgId {
        class: u8,
    },
    LenLow {
        class: u8,
        id: u8,
    },
    LenHigh {
        class: u8,
        id: u8,
        len_low: u8,
    },
    Payload {
        class: u8,
        id: u8,
        declared: u16,
        payload: Vec<u8>,
    },
    Csum1 {
        class: u8,
        id: u8,
        payload: Vec<u8>,
    },
    Csum2 {
        class: u8,
        id: u8,
        payload: Vec<u8>,
        ck_a: u8,
    },
    /// ASCII sentence, structured log line or comment, up to CR/LF.
    Line {
        kind: LineKind,
        line: Vec<u8>,
    },
    /// Secondary protocol: first length byte (6 reserved bits + 2 length
    /// MSBs).
    AltLenHigh,
    AltLenLow {
        len_high: u8,
    },
    AltPayload {
        payload_len: u16,
        remaining: usize,
        head: [u8; 2],
        seen: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Sentence,
    StructuredLog,
    Comment,
}

impl LineKind {
    fn finish(self, line: Vec<u8>) -> Frame {
        let text = String::from_utf8_lossy(&line).into_owned();
        match self {
            LineKind::Sentence => Frame::Sentence(text),
            LineKind::StructuredLog => Frame::StructuredLog(text),
            LineKind::Comment => Frame::Comment(text),
        }
    }
}

/// What one byte did to the machine.
enum Step {
    /// Byte absorbed, nothing to report yet.
    Advance(State),
    /// Byte completed a frame; back to initial.
    Emit(Frame),
    /// Byte forced a resynchronization; back to initial, consumed without
    /// a frame.
    Resync,
}

/// The framing state machine. One instance per physical byte stream; the
/// in-progress state persists across calls, so a frame may arrive split
/// over arbitrarily many reads. Not internally synchronized — concurrent
/// feeding must be serialized by the caller.
#[derive(Debug, Default)]
pub struct Classifier {
    state: State,
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no frame is partially read.
    pub fn is_idle(&self) -> bool {
        self.state == State::Initial
    }

    /// Consume bytes from `input` until one frame completes, a
    /// resynchronization point is reached, or the slice is exhausted.
    ///
    /// Returns `(consumed, Some(frame))` when a frame completed at byte
    /// `consumed - 1`; `(consumed, None)` with `consumed > 0` when bytes
    /// were absorbed (into an in-progress frame, as discarded noise, or up
    /// to a resynchronization) without completing one; `(0, None)` only for
    /// an empty slice. Callers resupply the *unconsumed* tail plus new
    /// bytes on the next call — consumed bytes are never re-fed.
    pub fn advance(&mut self, input: &[u8]) -> (usize, Option<Frame>) {
        for (i, &byte) in input.iter().enumerate() {
            match self.step(byte) {
                Step::Advance(next) => self.state = next,
                Step::Emit(frame) => {
                    self.state = State::Initial;
                    return (i + 1, Some(frame));
                },
                Step::Resync => {
                    self.state = State::Initial;
                    return (i + 1, None);
                },
            }
        }
        (input.len(), None)
    }

    /// Feed every byte of `input`, collecting completed frames. Partial
    /// trailing frames stay buffered for the next call.
    pub fn advance_all(&mut self, input: &[u8]) -> Vec<Frame> {
        let mut frames = Vec::new();
        let mut pos = 0;
        while pos < input.len() {
            let (consumed, frame) = self.advance(&input[pos..]);
            pos += consumed;
            if let Some(frame) = frame {
                frames.push(frame);
            }
        }
        frames
    }

    fn step(&mut self, byte: u8) -> Step {
        // take() leaves Initial behind; every arm either returns the state
        // it was handed (moved into the new state) or falls back to Initial
        let state = std::mem::take(&mut self.state);
        match state {
            State::Initial => match byte {
                SYNC_CHAR_1 => Step::Advance(State::Sync2),
                SENTENCE_START => Step::Advance(State::Line {
                    kind: LineKind::Sentence,
                    line: vec![byte],
                }),
                LOG_START => Step::Advance(State::Line {
                    kind: LineKind::StructuredLog,
                    line: vec![byte],
                }),
                COMMENT_START => Step::Advance(State::Line {
                    kind: LineKind::Comment,
                    line: vec![byte],
                }),
                RTCM_SYNC_CHAR => Step::Advance(State::AltLenHigh),
                // a stray terminator is consumed on its own so the caller
                // keeps progressing through blank lines
                END_CHAR_1 | END_CHAR_2 => Step::Resync,
                _ => Step::Advance(State::Initial),
            },
            State::Sync2 => {
                if byte == SYNC_CHAR_2 {
                    Step::Advance(State::Class)
                } else if byte == SYNC_CHAR_1 {
                    // a repeated sync 1 may open the real frame; keep hunting
                    Step::Advance(State::Sync2)
                } else {
                    debug!(byte, "false sync, resynchronizing");
                    Step::Resync
                }
            },
            State::Class => Step::Advance(State::MsgId { class: byte }),
            State::MsgId { class } => Step::Advance(State::LenLow { class, id: byte }),
            State::LenLow { class, id } => Step::Advance(State::LenHigh {
                class,
                id,
                len_low: byte,
            }),
            State::LenHigh { class, id, len_low } => {
                let declared = u16::from(len_low) | (u16::from(byte) << 8);
                if declared > MAX_PAYLOAD_LEN {
                    debug!(declared, "implausible frame length, resynchronizing");
                    return Step::Resync;
                }
                if declared == 0 {
                    Step::Advance(State::Csum1 {
                        class,
                        id,
                        payload: Vec::new(),
                    })
                } else {
                    Step::Advance(State::Payload {
                        class,
                        id,
                        declared,
                        payload: Vec::with_capacity(usize::from(declared)),
                    })
                }
            },
            State::Payload {
                class,
                id,
                declared,
                mut payload,
            } => {
                payload.push(byte);
                if payload.len() == usize::from(declared) {
                    Step::Advance(State::Csum1 { class, id, payload })
                } else {
                    Step::Advance(State::Payload {
                        class,
                        id,
                        declared,
                        payload,
                    })
                }
            },
            State::Csum1 { class, id, payload } => Step::Advance(State::Csum2 {
                class,
                id,
                payload,
                ck_a: byte,
            }),
            State::Csum2 {
                class,
                id,
                payload,
                ck_a,
            } => {
                let expected = {
                    let mut calc = Checksum::new();
                    calc.push(class);
                    calc.push(id);
                    calc.update(&(payload.len() as u16).to_le_bytes());
                    calc.update(&payload);
                    calc.pair()
                };
                let received = (ck_a, byte);
                let checksum_ok = expected == received;
                if !checksum_ok {
                    warn!(
                        class,
                        id,
                        "checksum mismatch (expected {:02x}{:02x}, received {:02x}{:02x}), surfacing frame anyway",
                        expected.0,
                        expected.1,
                        received.0,
                        received.1
                    );
                }
                Step::Emit(Frame::Ubx(UbxFrame {
                    class,
                    id,
                    payload,
                    checksum: received,
                    checksum_ok,
                }))
            },
            State::Line { kind, mut line } => match byte {
                END_CHAR_1 | END_CHAR_2 => Step::Emit(kind.finish(line)),
                _ => {
                    if line.len() >= MAX_LINE_LEN {
                        debug!("unterminated line overran its limit, resynchronizing");
                        return Step::Resync;
                    }
                    line.push(byte);
                    Step::Advance(State::Line { kind, line })
                },
            },
            State::AltLenHigh => {
                if byte & RTCM_RESERVED_MASK != 0 {
                    // reserved bits set: not a secondary-protocol frame
                    Step::Resync
                } else {
                    Step::Advance(State::AltLenLow { len_high: byte })
                }
            },
            State::AltLenLow { len_high } => {
                let payload_len = (u16::from(len_high) << 8) | u16::from(byte);
                Step::Advance(State::AltPayload {
                    payload_len,
                    remaining: usize::from(payload_len) + RTCM_TRAILER_LEN,
                    head: [0; 2],
                    seen: 0,
                })
            },
            State::AltPayload {
                payload_len,
                mut remaining,
                mut head,
                mut seen,
            } => {
                if seen < 2 {
                    head[seen] = byte;
                }
                seen += 1;
                remaining -= 1;
                if remaining == 0 {
                    // only the message type survives; the trailer is not
                    // verified for this protocol
                    let msg_type = if payload_len >= 2 {
                        (u16::from(head[0]) << 4) | u16::from(head[1] >> 4)
                    } else {
                        0
                    };
                    Step::Emit(Frame::Rtcm(RtcmFrame {
                        msg_type,
                        payload_len,
                    }))
                } else {
                    Step::Advance(State::AltPayload {
                        payload_len,
                        remaining,
                        head,
                        seen,
                    })
                }
            },
        }
    }
}

/// A classified frame plus, for binary frames, its catalog rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedFrame {
    pub frame: Frame,
    pub rendered: Option<Rendered>,
}

/// Classifier wired to the message catalog: every surfaced binary frame is
/// dispatched per the catalog policy. The catalogs are static and shared;
/// the verbosity is explicit per decoder instance.
#[derive(Debug, Default)]
pub struct StreamDecoder {
    classifier: Classifier,
    verbosity: Verbosity,
}

impl StreamDecoder {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            classifier: Classifier::new(),
            verbosity,
        }
    }

    /// Same contract as [`Classifier::advance`], with binary frames
    /// rendered through the catalog.
    pub fn advance(&mut self, input: &[u8]) -> (usize, Option<DecodedFrame>) {
        let (consumed, frame) = self.classifier.advance(input);
        let decoded = frame.map(|frame| {
            let rendered = match &frame {
                Frame::Ubx(ubx) => Some(messages::dispatch(ubx, self.verbosity)),
                _ => None,
            };
            DecodedFrame { frame, rendered }
        });
        (consumed, decoded)
    }

    /// Decode every complete frame in `input`.
    pub fn advance_all(&mut self, input: &[u8]) -> Vec<DecodedFrame> {
        let mut out = Vec::new();
        let mut pos = 0;
        while pos < input.len() {
            let (consumed, frame) = self.advance(&input[pos..]);
            pos += consumed;
            if let Some(frame) = frame {
                out.push(frame);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACK_FRAME: [u8; 10] = [0xb5, 0x62, 0x05, 0x01, 0x02, 0x00, 0x06, 0x01, 0x0f, 0x38];

    #[test]
    fn single_frame_in_one_call() {
        let mut classifier = Classifier::new();
        let (consumed, frame) = classifier.advance(&ACK_FRAME);
        assert_eq!(consumed, ACK_FRAME.len());
        match frame {
            Some(Frame::Ubx(ubx)) => {
                assert_eq!((ubx.class, ubx.id), (0x05, 0x01));
                assert_eq!(ubx.payload, vec![0x06, 0x01]);
                assert!(ubx.checksum_ok);
            },
            other => panic!("unexpected {other:?}"),
        }
        assert!(classifier.is_idle());
    }

    #[test]
    fn frame_split_across_calls() {
        let mut classifier = Classifier::new();
        for &b in &ACK_FRAME[..9] {
            let (consumed, frame) = classifier.advance(&[b]);
            assert_eq!(consumed, 1);
            assert!(frame.is_none());
        }
        assert!(!classifier.is_idle());
        let (consumed, frame) = classifier.advance(&ACK_FRAME[9..]);
        assert_eq!(consumed, 1);
        assert!(matches!(frame, Some(Frame::Ubx(_))));
    }

    #[test]
    fn empty_input_consumes_nothing() {
        let mut classifier = Classifier::new();
        assert_eq!(classifier.advance(&[]), (0, None));
    }

    #[test]
    fn garbage_is_absorbed_silently() {
        let mut classifier = Classifier::new();
        let (consumed, frame) = classifier.advance(&[0x00, 0x42, 0x99]);
        assert_eq!(consumed, 3);
        assert!(frame.is_none());
        assert!(classifier.is_idle());
    }

    #[test]
    fn bad_second_sync_resynchronizes() {
        let mut classifier = Classifier::new();
        let mut bytes = vec![0xb5, 0x99];
        bytes.extend_from_slice(&ACK_FRAME);
        // first call: consumed-but-frameless through the false sync
        let (consumed, frame) = classifier.advance(&bytes);
        assert_eq!(consumed, 2);
        assert!(frame.is_none());
        // second call: the real frame
        let (consumed, frame) = classifier.advance(&bytes[2..]);
        assert_eq!(consumed, ACK_FRAME.len());
        assert!(matches!(frame, Some(Frame::Ubx(_))));
    }

    #[test]
    fn repeated_first_sync_still_finds_the_frame() {
        let mut bytes = vec![0xb5];
        bytes.extend_from_slice(&ACK_FRAME);
        let mut classifier = Classifier::new();
        let frames = classifier.advance_all(&bytes);
        assert_eq!(frames.len(), 1);
        assert!(matches!(frames[0], Frame::Ubx(_)));
    }

    #[test]
    fn checksum_mismatch_is_flagged_not_dropped() {
        let mut corrupted = ACK_FRAME;
        corrupted[6] = 0x07;
        let mut classifier = Classifier::new();
        let (_, frame) = classifier.advance(&corrupted);
        match frame {
            Some(Frame::Ubx(ubx)) => {
                assert!(!ubx.checksum_ok);
                assert_eq!(ubx.payload, vec![0x07, 0x01]);
            },
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn zero_length_frame() {
        // MON-VER poll: B5 62 0A 04 00 00 0E 34
        let bytes = [0xb5, 0x62, 0x0a, 0x04, 0x00, 0x00, 0x0e, 0x34];
        let mut classifier = Classifier::new();
        let (consumed, frame) = classifier.advance(&bytes);
        assert_eq!(consumed, 8);
        match frame {
            Some(Frame::Ubx(ubx)) => {
                assert!(ubx.payload.is_empty());
                assert!(ubx.checksum_ok);
            },
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn implausible_length_resynchronizes() {
        let bytes = [0xb5, 0x62, 0x05, 0x01, 0xff, 0xff];
        let mut classifier = Classifier::new();
        let (consumed, frame) = classifier.advance(&bytes);
        assert_eq!(consumed, 6);
        assert!(frame.is_none());
        assert!(classifier.is_idle());
    }

    #[test]
    fn sentence_terminated_by_cr() {
        let mut classifier = Classifier::new();
        let line = b"$GPGGA,110617.00,4251.47,N*7D\r";
        let (consumed, frame) = classifier.advance(line);
        assert_eq!(consumed, line.len());
        assert_eq!(
            frame,
            Some(Frame::Sentence("$GPGGA,110617.00,4251.47,N*7D".into()))
        );
        // the trailing LF of a CRLF pair is consumed as a bare terminator
        let (consumed, frame) = classifier.advance(b"\n");
        assert_eq!((consumed, frame), (1, None));
    }

    #[test]
    fn structured_log_and_comment_lines() {
        let mut classifier = Classifier::new();
        let frames = classifier.advance_all(b"{\"event\":\"fix\"}\n# boot v2.1\r\n");
        assert_eq!(
            frames,
            vec![
                Frame::StructuredLog("{\"event\":\"fix\"}".into()),
                Frame::Comment("# boot v2.1".into()),
            ]
        );
    }

    #[test]
    fn secondary_protocol_frame() {
        // sync D3, length 8, payload starting with message number 1005
        let mut bytes = vec![0xd3, 0x00, 0x08];
        bytes.extend_from_slice(&[0x3e, 0xd0, 0x00, 0x03, 0x8a, 0x0e, 0x1c, 0x88]);
        bytes.extend_from_slice(&[0xaa, 0xbb, 0xcc]); // unverified trailer
        let mut classifier = Classifier::new();
        let (consumed, frame) = classifier.advance(&bytes);
        assert_eq!(consumed, bytes.len());
        assert_eq!(
            frame,
            Some(Frame::Rtcm(RtcmFrame {
                msg_type: 1005,
                payload_len: 8,
            }))
        );
    }

    #[test]
    fn secondary_protocol_reserved_bits_abort() {
        let mut classifier = Classifier::new();
        let (consumed, frame) = classifier.advance(&[0xd3, 0xfc]);
        assert_eq!(consumed, 2);
        assert!(frame.is_none());
        assert!(classifier.is_idle());
    }

    #[test]
    fn interleaved_sentence_then_binary() {
        let mut input = b"$GPGGA,110617.00*7D\r\n".to_vec();
        input.extend_from_slice(&ACK_FRAME);
        let mut classifier = Classifier::new();
        let mut consumed_total = 0;
        let mut frames = Vec::new();
        while consumed_total < input.len() {
            let (consumed, frame) = classifier.advance(&input[consumed_total..]);
            consumed_total += consumed;
            if let Some(frame) = frame {
                frames.push(frame);
            }
        }
        assert_eq!(consumed_total, input.len());
        assert_eq!(frames.len(), 2);
        assert!(matches!(frames[0], Frame::Sentence(_)));
        assert!(matches!(frames[1], Frame::Ubx(_)));
    }

    #[test]
    fn progress_on_any_nonempty_input() {
        // every byte value, fed alone from every state the stream can
        // reach, consumes at least one byte
        let mut classifier = Classifier::new();
        for b in 0..=255u8 {
            let (consumed, _) = classifier.advance(&[b]);
            assert!(consumed > 0, "no progress on byte {b:#04x}");
        }
    }

    #[test]
    fn stream_decoder_renders_binary_frames() {
        let mut decoder = StreamDecoder::new(Verbosity::Normal);
        let frames = decoder.advance_all(&ACK_FRAME);
        assert_eq!(frames.len(), 1);
        let rendered = frames[0].rendered.as_ref().unwrap();
        assert_eq!(rendered.to_string(), "UBX-ACK-ACK acked=UBX-CFG-MSG");
    }

    #[test]
    fn stream_decoder_passes_sentences_through() {
        let mut decoder = StreamDecoder::new(Verbosity::Normal);
        let frames = decoder.advance_all(b"$GNRMC,,V,,,,,,,,,,N*4D\r\n");
        assert_eq!(frames.len(), 1);
        assert!(frames[0].rendered.is_none());
    }
}
