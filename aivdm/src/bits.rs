//! Bit-level access to 6-bit armored AIS payloads.
//!
//! Each payload byte carries six bits. Fields are addressed by a start bit and
//! a width and are composed most-significant bit first, spanning character
//! boundaries as needed. Only the characters a read touches are decoded, so a
//! [`BitReader`] costs nothing to build beyond validation and can be copied
//! freely into every message view.
//!
//! Reads are never checked against the payload length. Any bit at or beyond
//! [`BitReader::bit_len`], padding bits included, reads as zero.

use std::fmt;

use crate::error::{AisError, ErrorKind};

/// Characters of the AIS 6-bit text alphabet, indexed by value.
const AIS_CHARSET: &[u8; 64] =
    b"@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_ !\"#$%&'()*+,-./0123456789:;<=>?";

/// Maps an armor byte to its 6-bit value.
///
/// Legal bytes are `'0'..='W'` (0..=39) and `` '`'..='w' `` (40..=63).
pub fn sixbit_value(byte: u8) -> Option<u8> {
    match byte {
        0x30..=0x57 => Some(byte - 0x30),
        0x60..=0x77 => Some(byte - 0x38),
        _ => None,
    }
}

/// A validated, borrowed view over an armored payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitReader<'a> {
    ascii: &'a [u8],
    padding: u8,
}

impl<'a> BitReader<'a> {
    /// Validates `ascii` and `padding` and builds a reader over them.
    pub fn new(ascii: &'a [u8], padding: u8) -> Result<Self, AisError> {
        if padding > 5 {
            return Err(AisError::new(
                ErrorKind::InvalidPadding,
                format!("padding must be between 0 and 5, was {}", padding),
                String::from_utf8_lossy(ascii),
            ));
        }

        if let Some((index, byte)) = ascii
            .iter()
            .enumerate()
            .find(|(_, byte)| sixbit_value(**byte).is_none())
        {
            return Err(AisError::new(
                ErrorKind::InvalidCharacter,
                format!(
                    "byte 0x{:02X} at index {} is not a 6-bit armor character",
                    byte, index
                ),
                String::from_utf8_lossy(ascii),
            ));
        }

        Ok(Self { ascii, padding })
    }

    /// Builds a reader over bytes that already passed [`BitReader::new`].
    pub(crate) fn from_validated(ascii: &'a [u8], padding: u8) -> Self {
        Self { ascii, padding }
    }

    pub fn payload(&self) -> &'a [u8] {
        self.ascii
    }

    pub fn padding(&self) -> u8 {
        self.padding
    }

    /// Number of meaningful bits: characters × 6 − padding.
    pub fn bit_len(&self) -> usize {
        (self.ascii.len() * 6).saturating_sub(self.padding as usize)
    }

    /// Whether the field `(width, start)` lies entirely within the payload.
    pub fn has_bits(&self, width: u32, start: usize) -> bool {
        start
            .checked_add(width as usize)
            .is_some_and(|end| end <= self.bit_len())
    }

    fn sixbit_at(&self, index: usize) -> u64 {
        let Some(&byte) = self.ascii.get(index) else {
            return 0;
        };
        let mut value = sixbit_value(byte).unwrap_or(0);
        if index + 1 == self.ascii.len() {
            value &= 0x3F & !((1u8 << self.padding) - 1);
        }
        value as u64
    }

    /// Reads `width` (at most 32) bits starting at `start`, MSB first.
    pub fn unsigned(&self, width: u32, start: usize) -> u32 {
        let width = width.min(32);
        if width == 0 || start >= self.bit_len() {
            return 0;
        }

        let end = start + width as usize;
        let first = start / 6;
        let last = (end - 1) / 6;

        // At most 7 characters (42 bits) for a 32-bit field.
        let mut acc: u64 = 0;
        for index in first..=last {
            acc = (acc << 6) | self.sixbit_at(index);
        }

        let trailing = (last + 1) * 6 - end;
        ((acc >> trailing) & ((1u64 << width) - 1)) as u32
    }

    /// Reads `width` bits and sign-extends from the top extracted bit.
    pub fn signed(&self, width: u32, start: usize) -> i32 {
        let width = width.min(32);
        if width == 0 {
            return 0;
        }
        let shift = 32 - width;
        ((self.unsigned(width, start) << shift) as i32) >> shift
    }

    pub fn bit(&self, index: usize) -> bool {
        self.unsigned(1, index) != 0
    }

    /// A view over `chars` 6-bit text characters starting at `start`.
    pub fn text(&self, start: usize, chars: usize) -> AisText<'a> {
        AisText {
            bits: *self,
            start,
            chars,
        }
    }

    /// A view over the bits from `start` to the end of the payload.
    pub fn data_from(&self, start: usize) -> BinaryData<'a> {
        BinaryData {
            bits: *self,
            start,
            len: self.bit_len().saturating_sub(start),
        }
    }

    /// A view over `len` bits starting at `start`.
    pub fn data(&self, start: usize, len: usize) -> BinaryData<'a> {
        BinaryData {
            bits: *self,
            start,
            len,
        }
    }
}

/// A run of AIS 6-bit text characters, decoded on demand.
///
/// Rendering stops at the first `@` (the AIS terminator) and drops trailing
/// spaces, which transmitters use as padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AisText<'a> {
    bits: BitReader<'a>,
    start: usize,
    chars: usize,
}

impl<'a> AisText<'a> {
    /// Every character of the field, padding included.
    pub fn raw_chars(&self) -> impl Iterator<Item = char> + 'a {
        let bits = self.bits;
        let start = self.start;
        (0..self.chars).map(move |i| {
            let offset = start.saturating_add(i.saturating_mul(6));
            AIS_CHARSET[bits.unsigned(6, offset) as usize] as char
        })
    }

    /// Characters of the text proper, terminator and trailing spaces removed.
    pub fn chars(&self) -> impl Iterator<Item = char> + 'a {
        self.raw_chars().take(self.trimmed_len())
    }

    fn trimmed_len(&self) -> usize {
        let mut len = 0;
        for (i, c) in self.raw_chars().enumerate() {
            match c {
                '@' => break,
                ' ' => {}
                _ => len = i + 1,
            }
        }
        len
    }

    pub fn is_empty(&self) -> bool {
        self.trimmed_len() == 0
    }
}

impl fmt::Display for AisText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for c in self.chars() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl PartialEq<&str> for AisText<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.chars().eq(other.chars())
    }
}

/// The binary application payload of a message, addressed relative to its
/// first bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryData<'a> {
    bits: BitReader<'a>,
    start: usize,
    len: usize,
}

impl BinaryData<'_> {
    pub fn bit_len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reads `width` bits at `offset` within the data; bits past the end of
    /// the data read as zero.
    pub fn unsigned(&self, width: u32, offset: usize) -> u32 {
        let width = width.min(32);
        let available = self.len.saturating_sub(offset).min(width as usize) as u32;
        if available == 0 {
            return 0;
        }
        let value = self.bits.unsigned(available, self.start.saturating_add(offset));
        if available == width {
            value
        } else {
            value << (width - available)
        }
    }

    /// Copies the data into bytes, MSB first, zero-filling the last byte.
    pub fn to_bytes(&self) -> Vec<u8> {
        (0..self.len.div_ceil(8))
            .map(|i| self.unsigned(8, i * 8) as u8)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ONES: &[u8] = b"wwwwwwwwwwww";

    #[test]
    fn test_armor_is_bijective() {
        let mut seen = [false; 64];
        for byte in 0u8..=255 {
            if let Some(value) = sixbit_value(byte) {
                assert!(value < 64);
                assert!(!seen[value as usize], "value {} decoded twice", value);
                seen[value as usize] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_invalid_character_is_rejected() {
        for byte in [b'X', b'_', b'x', b'!', b' ', 0x7F] {
            let payload = [b'1', b'5', byte];
            let err = BitReader::new(&payload, 0).unwrap_err();
            assert_eq!(err.kind, ErrorKind::InvalidCharacter);
            assert!(err.message.contains(&format!("0x{:02X}", byte)));
            assert!(err.message.contains("index 2"));
        }
    }

    #[test]
    fn test_invalid_padding_is_rejected() {
        let err = BitReader::new(b"15", 6).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidPadding);
    }

    #[test]
    fn test_signed_all_ones_is_minus_one_for_every_width() {
        let bits = BitReader::new(ALL_ONES, 0).unwrap();
        for width in 1..=32 {
            for start in [0, 3, 5, 7, 13] {
                assert_eq!(bits.signed(width, start), -1, "width {} start {}", width, start);
            }
        }
    }

    #[test]
    fn test_unsigned_all_ones() {
        let bits = BitReader::new(ALL_ONES, 0).unwrap();
        assert_eq!(bits.unsigned(8, 3), 0xFF);
        assert_eq!(bits.unsigned(32, 1), u32::MAX);
        assert_eq!(bits.unsigned(0, 4), 0);
    }

    #[test]
    fn test_reads_span_character_boundaries() {
        // '1' = 000001, 'w' = 111111, '0' = 000000
        let bits = BitReader::new(b"1w0", 0).unwrap();
        assert_eq!(bits.unsigned(6, 0), 1);
        assert_eq!(bits.unsigned(2, 4), 0b01);
        assert_eq!(bits.unsigned(4, 5), 0b1111);
        assert_eq!(bits.unsigned(8, 4), 0b0111_1111);
        assert_eq!(bits.signed(3, 11), 0b100u32 as i32 - 8);
        assert!(bits.bit(5));
        assert!(!bits.bit(12));
    }

    #[test]
    fn test_signed_positive_values_are_not_extended() {
        // 0b011111 = 31
        let bits = BitReader::new(b"O", 0).unwrap();
        assert_eq!(bits.signed(6, 0), 31);
        assert_eq!(bits.signed(5, 1), -1);
    }

    #[test]
    fn test_padding_bits_read_as_zero() {
        let bits = BitReader::new(b"ww", 2).unwrap();
        assert_eq!(bits.bit_len(), 10);
        assert_eq!(bits.unsigned(12, 0), 0b1111_1111_1100);
        assert!(bits.has_bits(10, 0));
        assert!(!bits.has_bits(11, 0));
    }

    #[test]
    fn test_exact_length_read() {
        let bits = BitReader::new(b"www", 0).unwrap();
        assert_eq!(bits.bit_len(), 18);
        assert_eq!(bits.unsigned(18, 0), (1 << 18) - 1);
        assert_eq!(bits.signed(18, 0), -1);
    }

    #[test]
    fn test_short_payload_reads_are_zero_filled() {
        let bits = BitReader::new(b"ww", 0).unwrap();
        // Half the field lies beyond the payload.
        assert_eq!(bits.unsigned(12, 6), 0b1111_1100_0000);
        // Entirely beyond.
        assert_eq!(bits.unsigned(30, 40), 0);
        assert_eq!(bits.signed(8, 100), 0);
        assert!(!bits.bit(12));
    }

    #[test]
    fn test_reads_near_usize_max_are_zero() {
        let bits = BitReader::new(b"ww", 0).unwrap();
        assert!(!bits.has_bits(8, usize::MAX - 2));
        assert!(!bits.has_bits(32, usize::MAX));
        assert_eq!(bits.unsigned(32, usize::MAX - 2), 0);
        assert_eq!(bits.signed(8, usize::MAX), 0);
        assert!(!bits.bit(usize::MAX));
        assert_eq!(bits.text(usize::MAX - 5, 4).to_string(), "");
        assert_eq!(bits.data(usize::MAX - 1, 16).unsigned(8, 4), 0);
    }

    #[test]
    fn test_empty_payload() {
        let bits = BitReader::new(b"", 0).unwrap();
        assert_eq!(bits.bit_len(), 0);
        assert_eq!(bits.unsigned(6, 0), 0);
    }

    #[test]
    fn test_reads_are_idempotent() {
        let bits = BitReader::new(b"177KQJ5000G?tO`K>RA1wUbN0TKH", 0).unwrap();
        let first: Vec<u32> = (0..160).step_by(7).map(|s| bits.unsigned(9, s)).collect();
        let second: Vec<u32> = (0..160).step_by(7).map(|s| bits.unsigned(9, s)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_text_trims_terminator_and_spaces() {
        // "AB" followed by a space and '@' padding
        let bits = BitReader::new(b"12P00", 0).unwrap();
        let text = bits.text(0, 5);
        assert_eq!(text.raw_chars().collect::<String>(), "AB @@");
        assert_eq!(text.to_string(), "AB");
        assert!(text == "AB");
        assert!(!text.is_empty());
        assert!(bits.text(18, 2).is_empty());
    }

    #[test]
    fn test_binary_data_to_bytes() {
        // 0b111111_000000_111111 -> 0xFC 0x0F 0xC0 (zero-filled)
        let bits = BitReader::new(b"w0w", 0).unwrap();
        let data = bits.data_from(0);
        assert_eq!(data.bit_len(), 18);
        assert_eq!(data.to_bytes(), vec![0xFC, 0x0F, 0xC0]);

        let window = bits.data(4, 4);
        assert_eq!(window.unsigned(4, 0), 0b1100);
        assert_eq!(window.unsigned(8, 0), 0b1100_0000);
    }
}
