pub const SYNC_CHAR_1: u8 = 0xb5;
pub const SYNC_CHAR_2: u8 = 0x62;
pub(crate) const SYNC_SIZE: usize = 2;
pub(crate) const PAYLOAD_SIZE_LEN: usize = 2;
pub(crate) const CLASS_LEN: usize = 1;
pub(crate) const ID_LEN: usize = 1;
pub(crate) const HEADER_LEN: usize = SYNC_SIZE + PAYLOAD_SIZE_LEN + CLASS_LEN + ID_LEN;
pub(crate) const CHECKSUM_LEN: usize = 2;

/// Frames declaring a longer payload than this are treated as noise and
/// resynchronized away. Large enough for the biggest messages a receiver
/// emits (raw measurement batches, VALGET responses at the 64-item limit).
pub const MAX_PAYLOAD_LEN: u16 = 8192;

pub const SENTENCE_START: u8 = 0x24; // '$'
pub const LOG_START: u8 = 0x7b; // '{'
pub const COMMENT_START: u8 = 0x23; // '#'
pub const END_CHAR_1: u8 = 0x0d; // '\r' (<CR>)
pub const END_CHAR_2: u8 = 0x0a; // '\n' (<LF>)

/// Longest line accepted before the accumulator gives up on a terminator.
/// Sentences are bounded at 82 characters by their own standard; structured
/// log lines run longer but never anywhere near this.
pub(crate) const MAX_LINE_LEN: usize = 1024;

pub const RTCM_SYNC_CHAR: u8 = 0xd3;
/// Reserved top 6 bits of the first secondary-protocol length byte.
pub(crate) const RTCM_RESERVED_MASK: u8 = 0xfc;
pub(crate) const RTCM_TRAILER_LEN: usize = 3;
