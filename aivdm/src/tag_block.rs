//! NMEA 4.x tag blocks.
//!
//! A tag block is the `\…\` prefix some receivers put in front of a sentence:
//! comma separated `key:value` fields followed by an optional `*hh` checksum,
//! e.g. `s:AIS,c:1706800491*63`. Grouping of multi-sentence messages is
//! written differently depending on the standard the source follows, so the
//! caller states which one to expect.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, ErrorReport, Reported};

/// Grouping syntax expected in tag blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagBlockStandard {
    /// Accept both grouping forms: `g:1-2-7764` and a leading `1G2:7764`.
    #[default]
    Unspecified,
    /// Grouping is `<int>-<int>-<int>`.
    Iec,
    /// Grouping is `<int>G<int>:<int>`.
    Nmea,
}

/// Position of a sentence within a multi-sentence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentenceGrouping {
    pub sentence_number: u32,
    pub sentence_total: u32,
    pub group_id: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagBlock {
    /// `s:` source station identifier.
    pub source: Option<String>,
    /// `c:` UNIX time in seconds.
    pub unix_time: Option<i64>,
    /// `g:` field or leading grouping token.
    pub grouping: Option<SentenceGrouping>,
    /// `n:` line count.
    pub line_count: Option<u32>,
    /// `d:` destination identifier.
    pub destination: Option<String>,
    /// `r:` relative time.
    pub relative_time: Option<u32>,
    /// `t:` free text.
    pub text: Option<String>,
    /// Declared checksum, if any.
    pub checksum: Option<u8>,
    /// Unrecognised fields, kept when not parsing strictly.
    pub extra_fields: Vec<(String, String)>,
    pub raw: String,
}

#[derive(Debug, Clone, Copy)]
enum GroupingGrammar {
    Iec,
    Nmea,
}

const PART_NAMES: [&str; 3] = ["first", "second", "third"];

impl GroupingGrammar {
    fn pattern(self) -> &'static str {
        match self {
            GroupingGrammar::Iec => "<int>-<int>-<int>",
            GroupingGrammar::Nmea => "<int>G<int>:<int>",
        }
    }

    fn split(self, value: &str) -> Vec<&str> {
        match self {
            GroupingGrammar::Iec => value.split('-').collect(),
            GroupingGrammar::Nmea => match value.split_once('G') {
                Some((first, rest)) => match rest.split_once(':') {
                    Some((second, third)) => vec![first, second, third],
                    None => vec![first, rest],
                },
                None => vec![value],
            },
        }
    }

    fn parse(self, value: &str) -> Result<SentenceGrouping, String> {
        let parts = self.split(value);
        if parts.len() > PART_NAMES.len() {
            return Err(format!(
                "Tag block sentence grouping should be {}, but it had {} parts",
                self.pattern(),
                parts.len()
            ));
        }

        let mut numbers = [0u32; 3];
        for (index, name) in PART_NAMES.iter().enumerate() {
            let Some(part) = parts.get(index) else {
                return Err(format!(
                    "Tag block sentence grouping should be {}, but {} part was missing",
                    self.pattern(),
                    name
                ));
            };
            numbers[index] = parse_decimal(part).ok_or_else(|| {
                format!(
                    "Tag block sentence grouping should be {}, but {} part was not a decimal integer",
                    self.pattern(),
                    name
                )
            })?;
        }

        Ok(SentenceGrouping {
            sentence_number: numbers[0],
            sentence_total: numbers[1],
            group_id: numbers[2],
        })
    }
}

fn parse_decimal<T: std::str::FromStr>(text: &str) -> Option<T> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// XOR of every byte, as used by both tag block and sentence checksums.
pub(crate) fn nmea_checksum(text: &str) -> u8 {
    text.bytes().fold(0, |acc, byte| acc ^ byte)
}

impl TagBlock {
    /// Parses the text between the two backslashes.
    ///
    /// Never fails: problems are reported alongside whatever could be
    /// recovered. A checksum mismatch does not stop parsing. With `strict`
    /// set, unrecognised fields are reported as `UnknownField` and dropped;
    /// otherwise they are kept in `extra_fields`.
    pub fn parse(text: &str, standard: TagBlockStandard, strict: bool) -> Reported<TagBlock> {
        let mut errors = ErrorReport::new();
        let mut block = TagBlock {
            raw: text.to_string(),
            ..Default::default()
        };

        let body = match text.rsplit_once('*') {
            Some((body, checksum)) => {
                match u8::from_str_radix(checksum, 16) {
                    Ok(declared) if checksum.len() == 2 => {
                        block.checksum = Some(declared);
                        let computed = nmea_checksum(body);
                        if computed != declared {
                            errors.report(
                                ErrorKind::ChecksumMismatch,
                                format!(
                                    "Tag block checksum was {:02X} but the content checksum is {:02X}",
                                    declared, computed
                                ),
                                text,
                            );
                        }
                    }
                    _ => errors.report(
                        ErrorKind::MalformedField,
                        format!(
                            "Tag block checksum should be two hexadecimal digits, but was '{}'",
                            checksum
                        ),
                        text,
                    ),
                }
                body
            }
            None => text,
        };

        if body.is_empty() {
            return Reported::new(block, errors);
        }

        let (field_grammar, prefix_grammar) = match standard {
            TagBlockStandard::Unspecified => (GroupingGrammar::Iec, GroupingGrammar::Nmea),
            TagBlockStandard::Iec => (GroupingGrammar::Iec, GroupingGrammar::Iec),
            TagBlockStandard::Nmea => (GroupingGrammar::Nmea, GroupingGrammar::Nmea),
        };

        for field in body.split(',') {
            let Some((key, value)) = field.split_once(':') else {
                errors.report(
                    ErrorKind::MalformedField,
                    format!("Tag block field '{}' should be of the form key:value", field),
                    text,
                );
                continue;
            };

            // A grouping token such as 1G2:7764 carries no key of its own.
            if key.starts_with(|c: char| c.is_ascii_digit()) {
                block.set_grouping(prefix_grammar.parse(field), field, &mut errors);
                continue;
            }

            match key {
                "s" => block.source = Some(value.to_string()),
                "c" => match parse_decimal(value) {
                    Some(time) => block.unix_time = Some(time),
                    None => errors.report(
                        ErrorKind::MalformedField,
                        format!(
                            "Tag block timestamp should be a decimal integer, but was '{}'",
                            value
                        ),
                        field,
                    ),
                },
                "g" => block.set_grouping(field_grammar.parse(value), field, &mut errors),
                "n" => match parse_decimal(value) {
                    Some(count) => block.line_count = Some(count),
                    None => errors.report(
                        ErrorKind::MalformedField,
                        format!(
                            "Tag block line count should be a decimal integer, but was '{}'",
                            value
                        ),
                        field,
                    ),
                },
                "d" => block.destination = Some(value.to_string()),
                "r" => match parse_decimal(value) {
                    Some(time) => block.relative_time = Some(time),
                    None => errors.report(
                        ErrorKind::MalformedField,
                        format!(
                            "Tag block relative time should be a decimal integer, but was '{}'",
                            value
                        ),
                        field,
                    ),
                },
                "t" => block.text = Some(value.to_string()),
                _ if strict => errors.report(
                    ErrorKind::UnknownField,
                    format!("Tag block contains unknown field '{}'", key),
                    field,
                ),
                _ => block
                    .extra_fields
                    .push((key.to_string(), value.to_string())),
            }
        }

        Reported::new(block, errors)
    }

    fn set_grouping(
        &mut self,
        grouping: Result<SentenceGrouping, String>,
        field: &str,
        errors: &mut ErrorReport,
    ) {
        match grouping {
            Ok(grouping) => self.grouping = Some(grouping),
            Err(message) => errors.report(ErrorKind::MalformedField, message, field),
        }
    }

    /// The `c:` field as a UTC time.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.unix_time
            .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn parse(text: &str) -> Reported<TagBlock> {
        TagBlock::parse(text, TagBlockStandard::Unspecified, false)
    }

    #[test]
    fn test_source_and_timestamp() {
        let (block, errors) = parse("s:AIS,c:1706800491*63").into_parts();

        assert!(errors.is_empty());
        assert_eq!(block.source.as_deref(), Some("AIS"));
        assert_eq!(block.unix_time, Some(1706800491));
        assert_eq!(block.grouping, None);
        assert_eq!(block.checksum, Some(0x63));
        assert_eq!(
            block.timestamp(),
            Some(Utc.with_ymd_and_hms(2024, 2, 1, 15, 14, 51).unwrap())
        );
    }

    #[test]
    fn test_iec_grouping() {
        for standard in [TagBlockStandard::Unspecified, TagBlockStandard::Iec] {
            let (block, errors) =
                TagBlock::parse("g:1-2-7764,s:AIS,c:1706800480*13", standard, false).into_parts();

            assert!(errors.is_empty(), "{:?}", errors);
            assert_eq!(
                block.grouping,
                Some(SentenceGrouping {
                    sentence_number: 1,
                    sentence_total: 2,
                    group_id: 7764,
                })
            );
            assert_eq!(block.source.as_deref(), Some("AIS"));
            assert_eq!(block.unix_time, Some(1706800480));
        }
    }

    #[test]
    fn test_nmea_grouping_token() {
        for standard in [TagBlockStandard::Unspecified, TagBlockStandard::Nmea] {
            let (block, errors) =
                TagBlock::parse("1G2:9628,s:AIS,c:1701650788*33", standard, false).into_parts();

            assert!(errors.is_empty(), "{:?}", errors);
            assert_eq!(
                block.grouping,
                Some(SentenceGrouping {
                    sentence_number: 1,
                    sentence_total: 2,
                    group_id: 9628,
                })
            );
            assert_eq!(block.unix_time, Some(1701650788));
        }
    }

    #[test]
    fn test_nmea_grammar_applies_to_g_field() {
        let (block, errors) =
            TagBlock::parse("g:2G3:17,s:AIS", TagBlockStandard::Nmea, false).into_parts();
        assert!(errors.is_empty());
        assert_eq!(
            block.grouping,
            Some(SentenceGrouping {
                sentence_number: 2,
                sentence_total: 3,
                group_id: 17,
            })
        );
    }

    #[test]
    fn test_nmea_standard_rejects_iec_grouping() {
        let (block, errors) =
            TagBlock::parse("g:1-2-7764,s:AIS,c:1706800480*13", TagBlockStandard::Nmea, false)
                .into_parts();

        assert_eq!(block.grouping, None);
        assert_eq!(block.source.as_deref(), Some("AIS"));
        assert_eq!(errors.len(), 1);
        let error = errors.iter().next().unwrap();
        assert_eq!(error.kind, ErrorKind::MalformedField);
        assert_eq!(
            error.message,
            "Tag block sentence grouping should be <int>G<int>:<int>, but first part was not a decimal integer"
        );
    }

    #[test]
    fn test_iec_standard_rejects_nmea_grouping() {
        let (block, errors) =
            TagBlock::parse("1G2:7764,s:AIS,c:1706800480*33", TagBlockStandard::Iec, false)
                .into_parts();

        assert_eq!(block.grouping, None);
        assert_eq!(block.unix_time, Some(1706800480));
        assert_eq!(errors.len(), 1);
        let error = errors.iter().next().unwrap();
        assert_eq!(error.kind, ErrorKind::MalformedField);
        assert_eq!(
            error.message,
            "Tag block sentence grouping should be <int>-<int>-<int>, but first part was not a decimal integer"
        );
    }

    #[test]
    fn test_grouping_part_errors() {
        let cases = [
            ("g:1-2", "third part was missing"),
            ("g:1-x-3", "second part was not a decimal integer"),
            ("g:1-2-3-4", "it had 4 parts"),
            ("g:-2-3", "first part was not a decimal integer"),
        ];
        for (text, expected) in cases {
            let (block, errors) = parse(text).into_parts();
            assert_eq!(block.grouping, None, "{}", text);
            let error = errors.iter().next().unwrap();
            assert_eq!(error.kind, ErrorKind::MalformedField);
            assert!(error.message.ends_with(expected), "{}: {}", text, error.message);
        }

        let (_, errors) = TagBlock::parse("1G2", TagBlockStandard::Nmea, false).into_parts();
        assert!(errors.contains(ErrorKind::MalformedField));
    }

    #[test]
    fn test_checksum_mismatch_keeps_fields() {
        let (block, errors) = parse("1G2:7764,s:AIS,c:1706800480*13").into_parts();

        assert_eq!(errors.len(), 1);
        assert!(errors.contains(ErrorKind::ChecksumMismatch));
        assert_eq!(block.grouping.map(|g| g.group_id), Some(7764));
        assert_eq!(block.source.as_deref(), Some("AIS"));
    }

    #[test]
    fn test_missing_checksum_is_accepted() {
        let (block, errors) = parse("s:ASS,c:1706745485").into_parts();
        assert!(errors.is_empty());
        assert_eq!(block.checksum, None);
        assert_eq!(block.source.as_deref(), Some("ASS"));

        let (block, errors) = parse("s:ASS,c:1706745485*72").into_parts();
        assert!(errors.is_empty());
        assert_eq!(block.checksum, Some(0x72));
    }

    #[test]
    fn test_malformed_checksum() {
        let (block, errors) = parse("s:AIS*Z1").into_parts();
        assert!(errors.contains(ErrorKind::MalformedField));
        assert_eq!(block.source.as_deref(), Some("AIS"));
    }

    #[test]
    fn test_unknown_fields() {
        let (block, errors) = parse("s:AIS,x:42,q:abc").into_parts();
        assert!(errors.is_empty());
        assert_eq!(
            block.extra_fields,
            vec![
                ("x".to_string(), "42".to_string()),
                ("q".to_string(), "abc".to_string())
            ]
        );

        let (block, errors) =
            TagBlock::parse("s:AIS,x:42", TagBlockStandard::Unspecified, true).into_parts();
        assert!(errors.contains(ErrorKind::UnknownField));
        assert!(block.extra_fields.is_empty());
        assert_eq!(block.source.as_deref(), Some("AIS"));
    }

    #[test]
    fn test_additional_fields() {
        let (block, errors) = parse("s:r003669945,c:1241544035,n:12,d:SHORE,r:35,t:hello").into_parts();

        assert!(errors.is_empty());
        assert_eq!(block.source.as_deref(), Some("r003669945"));
        assert_eq!(block.line_count, Some(12));
        assert_eq!(block.destination.as_deref(), Some("SHORE"));
        assert_eq!(block.relative_time, Some(35));
        assert_eq!(block.text.as_deref(), Some("hello"));
    }

    #[test]
    fn test_malformed_fields_are_reported() {
        let (block, errors) = parse("s:AIS,c:17068x,junk").into_parts();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.kind == ErrorKind::MalformedField));
        assert_eq!(block.unix_time, None);
        assert_eq!(block.source.as_deref(), Some("AIS"));
    }

    #[test]
    fn test_empty_tag_block() {
        let (block, errors) = parse("").into_parts();
        assert!(errors.is_empty());
        assert_eq!(block, TagBlock::default());
    }

    #[test]
    fn test_standard_from_config() {
        let standard: TagBlockStandard = serde_json::from_str("\"nmea\"").unwrap();
        assert_eq!(standard, TagBlockStandard::Nmea);
        assert_eq!(TagBlockStandard::default(), TagBlockStandard::Unspecified);
    }
}
