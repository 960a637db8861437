use rxproto::{Classifier, Frame, Rendered, StreamDecoder, Verbosity};

// UBX-ACK-ACK acknowledging class 6 id 1 (UBX-CFG-MSG)
static FULL_ACK_ACK_PACK: [u8; 10] = [0xb5, 0x62, 0x05, 0x01, 0x02, 0x00, 0x06, 0x01, 0x0f, 0x38];

fn drain(classifier: &mut Classifier, input: &[u8]) -> (usize, Vec<Frame>) {
    let mut consumed_total = 0;
    let mut frames = Vec::new();
    while consumed_total < input.len() {
        let (consumed, frame) = classifier.advance(&input[consumed_total..]);
        assert!(consumed > 0, "classifier stalled on non-empty input");
        consumed_total += consumed;
        if let Some(frame) = frame {
            frames.push(frame);
        }
    }
    (consumed_total, frames)
}

#[test]
fn scenario_a_ack_frame_end_to_end() {
    let mut decoder = StreamDecoder::new(Verbosity::Normal);
    let frames = decoder.advance_all(&FULL_ACK_ACK_PACK);
    assert_eq!(frames.len(), 1);

    let ubx = match &frames[0].frame {
        Frame::Ubx(ubx) => ubx,
        other => panic!("expected a binary frame, got {other:?}"),
    };
    assert!(ubx.checksum_ok);
    assert_eq!((ubx.class, ubx.id), (0x05, 0x01));

    let rendered = frames[0].rendered.as_ref().unwrap();
    assert!(matches!(rendered, Rendered::Message(_)));
    assert_eq!(rendered.to_string(), "UBX-ACK-ACK acked=UBX-CFG-MSG");
}

#[test]
fn scenario_c_sentence_interleaved_with_binary() {
    let mut input = b"$GPGGA,110617.00,4251.478,N,08326.689,W,1,05,1.5,0.3,M,0,M,,*64\r\n".to_vec();
    input.extend_from_slice(&FULL_ACK_ACK_PACK);

    let mut classifier = Classifier::new();
    let (consumed, frames) = drain(&mut classifier, &input);

    // consumed counts across calls sum to the whole input
    assert_eq!(consumed, input.len());
    assert_eq!(frames.len(), 2);
    match &frames[0] {
        Frame::Sentence(line) => assert!(line.starts_with("$GPGGA")),
        other => panic!("expected the sentence first, got {other:?}"),
    }
    assert!(matches!(frames[1], Frame::Ubx(_)));
}

#[test]
fn corrupted_prefix_then_good_frame_emits_exactly_one() {
    // a frame whose second sync byte is wrong, then a well-formed frame
    let mut input = vec![0xb5, 0x42];
    input.extend_from_slice(&FULL_ACK_ACK_PACK);

    let mut classifier = Classifier::new();
    let (consumed, frames) = drain(&mut classifier, &input);
    assert_eq!(consumed, input.len());
    assert_eq!(frames.len(), 1);
    assert!(matches!(frames[0], Frame::Ubx(_)));
}

#[test]
fn byte_by_byte_feeding_matches_single_call() {
    let mut one_call = Classifier::new();
    let (_, expected) = drain(&mut one_call, &FULL_ACK_ACK_PACK);

    let mut dribble = Classifier::new();
    let mut frames = Vec::new();
    for &b in &FULL_ACK_ACK_PACK {
        let (consumed, frame) = dribble.advance(&[b]);
        assert_eq!(consumed, 1);
        if let Some(frame) = frame {
            frames.push(frame);
        }
    }
    assert_eq!(frames, expected);
}

#[test]
fn back_to_back_frames() {
    let mut input = Vec::new();
    for _ in 0..5 {
        input.extend_from_slice(&FULL_ACK_ACK_PACK);
    }
    let mut classifier = Classifier::new();
    let (_, frames) = drain(&mut classifier, &input);
    assert_eq!(frames.len(), 5);
}

#[test]
fn all_stream_kinds_interleaved() {
    let mut input = Vec::new();
    input.extend_from_slice(b"# receiver boot\r\n");
    input.extend_from_slice(&FULL_ACK_ACK_PACK);
    input.extend_from_slice(b"{\"fix\":\"3d\"}\n");
    // secondary-protocol frame, payload 4 + trailer 3
    input.extend_from_slice(&[0xd3, 0x00, 0x04, 0x3e, 0xd0, 0x00, 0x00, 0x01, 0x02, 0x03]);
    input.extend_from_slice(b"$GNRMC,,V,,,,,,,,,,N*4D\r\n");

    let mut classifier = Classifier::new();
    let (consumed, frames) = drain(&mut classifier, &input);
    assert_eq!(consumed, input.len());

    let kinds: Vec<_> = frames.iter().map(Frame::kind).collect();
    use rxproto::FrameKind::*;
    assert_eq!(kinds, vec![Comment, Binary, StructuredLog, Secondary, Sentence]);
    match &frames[3] {
        Frame::Rtcm(rtcm) => assert_eq!(rtcm.msg_type, 1005),
        other => panic!("expected the secondary frame, got {other:?}"),
    }
}

#[test]
fn split_point_everywhere_still_one_frame() {
    // cutting the stream at every possible point must never lose or
    // duplicate a frame
    for split in 1..FULL_ACK_ACK_PACK.len() {
        let mut classifier = Classifier::new();
        let (first, second) = FULL_ACK_ACK_PACK.split_at(split);
        let (_, mut frames) = drain(&mut classifier, first);
        let (_, tail) = drain(&mut classifier, second);
        frames.extend(tail);
        assert_eq!(frames.len(), 1, "split at {split}");
    }
}

#[test]
fn bad_checksum_frame_is_surfaced_and_flagged() {
    let mut corrupted = FULL_ACK_ACK_PACK;
    corrupted[7] = 0x02; // payload byte changed, checksum now stale
    let mut decoder = StreamDecoder::new(Verbosity::Normal);
    let frames = decoder.advance_all(&corrupted);
    assert_eq!(frames.len(), 1);
    match &frames[0].frame {
        Frame::Ubx(ubx) => assert!(!ubx.checksum_ok),
        other => panic!("expected a binary frame, got {other:?}"),
    }
    // the frame still dispatches; the caller decides whether to trust it
    assert!(frames[0].rendered.is_some());
}

#[test]
fn poll_request_renders_as_poll() {
    // zero-length NAV-PVT frame: a request, not data
    let bytes = rxproto::build_poll(0x01, 0x07);
    let mut decoder = StreamDecoder::new(Verbosity::Normal);
    let frames = decoder.advance_all(&bytes);
    assert_eq!(frames.len(), 1);
    match frames[0].rendered.as_ref().unwrap() {
        Rendered::Poll { name } => assert_eq!(name, "UBX-NAV-PVT"),
        other => panic!("expected a poll rendering, got {other:?}"),
    }
}

#[test]
fn truncated_payload_against_descriptor_minimum() {
    // an ACK frame claiming only one payload byte: classifies fine,
    // dispatch reports the short payload without invoking the decoder
    let bytes = rxproto::build_frame(0x05, 0x01, &[0x06]);
    let mut decoder = StreamDecoder::new(Verbosity::Normal);
    let frames = decoder.advance_all(&bytes);
    assert_eq!(frames.len(), 1);
    assert!(matches!(
        frames[0].rendered,
        Some(Rendered::BadLength {
            expected: 2,
            got: 1,
            ..
        })
    ));
}

#[test]
fn noise_between_frames_is_tolerated() {
    let mut input = vec![0x00, 0xff, 0x17];
    input.extend_from_slice(&FULL_ACK_ACK_PACK);
    input.extend_from_slice(&[0x62, 0xb5]); // sync bytes out of order
    input.extend_from_slice(&FULL_ACK_ACK_PACK);

    let mut classifier = Classifier::new();
    let (consumed, frames) = drain(&mut classifier, &input);
    assert_eq!(consumed, input.len());
    assert_eq!(frames.len(), 2);
}
