//! Bit-field extraction for navigation-subframe words.
//!
//! Subframe decoders pull fields of arbitrary width out of 32-bit words,
//! rarely on byte boundaries and sometimes split across two adjacent words
//! (an 8-bit MSB chunk in one word, a 24-bit LSB chunk in the next). Offsets
//! count from bit 0, the least significant bit of the word.
//!
//! This sits on the hot decode loop, so arguments are a caller contract
//! rather than a runtime check: `offset + width` must not exceed 32 for the
//! single-word forms, and `width` must be non-zero for the signed forms.
//! Violations produce garbage values, not panics.

const fn mask(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

const fn sign_extend(value: u64, width: u32) -> i64 {
    let shift = 64 - width;
    ((value << shift) as i64) >> shift
}

/// Unsigned field `width` bits wide starting `offset` bits from the LSB.
pub const fn unsigned(word: u32, offset: u32, width: u32) -> u64 {
    ((word >> offset) as u64) & mask(width)
}

/// Signed (two's complement) field, sign-extended to the full i64 width.
pub const fn signed(word: u32, offset: u32, width: u32) -> i64 {
    sign_extend(unsigned(word, offset, width), width)
}

/// Unsigned field split across two words: the `high_width` most significant
/// bits live in `high`, the `low_width` least significant bits in `low`.
pub const fn split_unsigned(
    high: u32,
    high_offset: u32,
    high_width: u32,
    low: u32,
    low_offset: u32,
    low_width: u32,
) -> u64 {
    (unsigned(high, high_offset, high_width) << low_width)
        | unsigned(low, low_offset, low_width)
}

/// Signed field split across two words, sign bit in the high chunk.
pub const fn split_signed(
    high: u32,
    high_offset: u32,
    high_width: u32,
    low: u32,
    low_offset: u32,
    low_width: u32,
) -> i64 {
    sign_extend(
        split_unsigned(high, high_offset, high_width, low, low_offset, low_width),
        high_width + low_width,
    )
}
