//! `!AIVDM` / `!AIVDO` sentence fields.
//!
//! ```text
//! !AIVDM,2,1,1,A,55?MbV02;H;s<HtKR20EHE:0@T4@Dn2222222216L961O5Gf0NSQEp6ClRp8,0*1C
//!   |    | | | |  |                                                           |  |
//!   |    | | | |  payload                                            padding  checksum
//!   |    | | | radio channel
//!   |    | | sequential message id
//!   |    | fragment number
//!   |    fragment count
//!   talker + formatter
//! ```

use crate::error::{AisError, ErrorKind, ErrorReport, Reported};
use crate::tag_block::nmea_checksum;

/// The fields of one AIS sentence, borrowed from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NmeaSentence<'a> {
    /// Two-character talker id, e.g. `AI` or `BS`.
    pub talker: &'a str,
    /// `VDO`: a report of the receiving station's own vessel.
    pub own_vessel: bool,
    pub fragment_count: u32,
    pub fragment_number: u32,
    pub sequential_message_id: Option<u8>,
    pub channel: Option<char>,
    pub payload: &'a str,
    pub padding: u8,
    pub checksum: u8,
}

fn malformed(message: impl Into<String>, raw: &str) -> AisError {
    AisError::new(ErrorKind::MalformedSentence, message, raw)
}

fn parse_count(field: &str, name: &str, raw: &str) -> Result<u32, AisError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(
            format!("{} should be a decimal integer, but was '{}'", name, field),
            raw,
        ));
    }
    field
        .parse()
        .map_err(|_| malformed(format!("{} '{}' is out of range", name, field), raw))
}

impl<'a> NmeaSentence<'a> {
    /// Splits a sentence into its fields.
    ///
    /// Structural problems return `Err`; a checksum mismatch is reported and
    /// the fields are returned anyway.
    pub fn parse(text: &'a str) -> Result<Reported<NmeaSentence<'a>>, AisError> {
        let line = text.trim_end();
        let Some(body_and_checksum) = line.strip_prefix('!').or_else(|| line.strip_prefix('$')) else {
            return Err(malformed("Sentence should start with '!' or '$'", text));
        };
        let Some((body, checksum)) = body_and_checksum.rsplit_once('*') else {
            return Err(malformed("Sentence has no checksum", text));
        };
        let declared = match u8::from_str_radix(checksum, 16) {
            Ok(declared) if checksum.len() == 2 => declared,
            _ => {
                return Err(malformed(
                    format!(
                        "Sentence checksum should be two hexadecimal digits, but was '{}'",
                        checksum
                    ),
                    text,
                ));
            }
        };

        let fields: Vec<&'a str> = body.split(',').collect();
        let &[formatter, count, number, sequence, channel, payload, padding] = fields.as_slice() else {
            return Err(malformed(
                format!("Sentence should have 7 fields, but had {}", fields.len()),
                text,
            ));
        };

        let own_vessel = match formatter.get(2..) {
            Some("VDM") if formatter.len() == 5 => false,
            Some("VDO") if formatter.len() == 5 => true,
            _ => {
                return Err(malformed(
                    format!("Unsupported sentence formatter '{}'", formatter),
                    text,
                ));
            }
        };

        let fragment_count = parse_count(count, "Fragment count", text)?;
        let fragment_number = parse_count(number, "Fragment number", text)?;

        let sequential_message_id = match sequence {
            "" => None,
            _ => match sequence.parse::<u8>() {
                Ok(id) if id <= 9 => Some(id),
                _ => {
                    return Err(malformed(
                        format!(
                            "Sequential message id should be a digit, but was '{}'",
                            sequence
                        ),
                        text,
                    ));
                }
            },
        };

        let mut chars = channel.chars();
        let channel = match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(c), None) => Some(c),
            _ => {
                return Err(malformed(
                    format!("Radio channel should be one character, but was '{}'", channel),
                    text,
                ));
            }
        };

        let padding = match padding.parse::<u8>() {
            Ok(padding) if padding <= 5 => padding,
            Ok(padding) => {
                return Err(AisError::new(
                    ErrorKind::InvalidPadding,
                    format!("padding must be between 0 and 5, was {}", padding),
                    text,
                ));
            }
            Err(_) => {
                return Err(malformed(
                    format!("Padding should be a decimal digit, but was '{}'", padding),
                    text,
                ));
            }
        };

        let mut errors = ErrorReport::new();
        let computed = nmea_checksum(body);
        if computed != declared {
            errors.report(
                ErrorKind::ChecksumMismatch,
                format!(
                    "Sentence checksum was {:02X} but the content checksum is {:02X}",
                    declared, computed
                ),
                text,
            );
        }

        Ok(Reported::new(
            NmeaSentence {
                talker: &formatter[..2],
                own_vessel,
                fragment_count,
                fragment_number,
                sequential_message_id,
                channel,
                payload,
                padding,
                checksum: declared,
            },
            errors,
        ))
    }
}
