use std::borrow::Cow;

use tracing::debug;

use crate::bits::BitReader;
use crate::config::DecoderOptions;
use crate::error::{AisError, ErrorKind, ErrorReport};
use crate::messages::{AisMessage, MessageType};
use crate::reassembly::{FragmentInfo, GroupKey, Reassembly, SentenceReassembler};
use crate::sentence::NmeaSentence;
use crate::tag_block::TagBlock;

/// AIS Stream Reader
///
/// Stateful line decoder for one NMEA feed. It handles:
/// - Optional `\…\` tag blocks in front of each sentence
/// - Single-sentence messages (returned immediately, borrowing the line)
/// - Multi-sentence messages (assembled from fragments, grouped by the tag
///   block when it declares a group and by the sentence fields otherwise)
///
/// # Usage
///
/// ```
/// use aivdm::{AisStreamReader, DecodedLine, DecoderOptions};
///
/// let mut reader = AisStreamReader::new(DecoderOptions::default());
///
/// if let DecodedLine::Message(message) =
///     reader.process_line("!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C")
/// {
///     assert_eq!(message.message().mmsi(), 477553000);
/// }
/// ```
pub struct AisStreamReader {
    options: DecoderOptions,
    reassembler: SentenceReassembler<FragmentOrigin>,
}

/// Line metadata held with each stored fragment
#[derive(Debug, Clone)]
struct FragmentOrigin {
    tag_block: Option<TagBlock>,
    talker: String,
    own_vessel: bool,
    channel: Option<char>,
}

/// A complete AIS message with the metadata of the line(s) it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage<'a> {
    /// Tag block of the first fragment
    pub tag_block: Option<TagBlock>,
    /// Sentence fields below are also those of the first fragment
    pub talker: Cow<'a, str>,
    /// `!AIVDO`: the receiving station's own vessel
    pub own_vessel: bool,
    pub channel: Option<char>,
    /// Armored payload, borrowed from the line unless reassembled
    pub payload: Cow<'a, [u8]>,
    pub padding: u8,
    /// Non-fatal problems reported for this message and, for
    /// multi-sentence messages, for the line that completed it
    pub errors: ErrorReport,
}

impl ParsedMessage<'_> {
    pub fn bits(&self) -> BitReader<'_> {
        // Every fragment passed armor validation before it was accepted.
        BitReader::from_validated(&self.payload, self.padding)
    }

    pub fn message(&self) -> AisMessage<'_> {
        AisMessage::from_bits(self.bits())
    }

    pub fn message_type(&self) -> MessageType {
        self.bits().unsigned(6, 0).into()
    }

    pub fn into_owned(self) -> ParsedMessage<'static> {
        ParsedMessage {
            tag_block: self.tag_block,
            talker: Cow::Owned(self.talker.into_owned()),
            own_vessel: self.own_vessel,
            channel: self.channel,
            payload: Cow::Owned(self.payload.into_owned()),
            padding: self.padding,
            errors: self.errors,
        }
    }
}

/// Outcome of one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedLine<'a> {
    Message(ParsedMessage<'a>),
    /// A fragment was stored; the message is not complete yet
    Incomplete(ErrorReport),
    /// The line could not be used
    Discarded(ErrorReport),
}

fn split_tag_block(line: &str) -> Result<(Option<&str>, &str), AisError> {
    let Some(rest) = line.strip_prefix('\\') else {
        return Ok((None, line));
    };
    match rest.split_once('\\') {
        Some((tag_block, sentence)) => Ok((Some(tag_block), sentence)),
        None => Err(AisError::new(
            ErrorKind::MalformedSentence,
            "Tag block is not terminated by '\\'",
            line,
        )),
    }
}

fn fragment_info(tag_block: Option<&TagBlock>, sentence: &NmeaSentence<'_>) -> FragmentInfo {
    match tag_block.and_then(|block| block.grouping) {
        Some(grouping) => FragmentInfo {
            key: GroupKey::TagBlock(grouping.group_id),
            index: grouping.sentence_number,
            total: grouping.sentence_total,
        },
        None => FragmentInfo {
            key: GroupKey::Sentence {
                sequence: sentence.sequential_message_id,
                channel: sentence.channel,
            },
            index: sentence.fragment_number,
            total: sentence.fragment_count,
        },
    }
}

fn discard(errors: ErrorReport) -> DecodedLine<'static> {
    if let Some(error) = errors.iter().last() {
        debug!("Discarding line: {}", error);
    }
    DecodedLine::Discarded(errors)
}

impl AisStreamReader {
    pub fn new(options: DecoderOptions) -> Self {
        Self {
            reassembler: SentenceReassembler::new(options.max_pending_group_age, options.max_fragments),
            options,
        }
    }

    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Process one line and return a complete message if available
    pub fn process_line<'a>(&mut self, line: &'a str) -> DecodedLine<'a> {
        let mut errors = ErrorReport::new();
        let line = line.trim();

        let (tag_block_text, sentence_text) = match split_tag_block(line) {
            Ok(parts) => parts,
            Err(error) => return discard(error.into()),
        };

        let tag_block = match tag_block_text {
            Some(text) => {
                let (block, tag_errors) = TagBlock::parse(
                    text,
                    self.options.tag_block_standard,
                    self.options.strict_tag_blocks,
                )
                .into_parts();
                let unknown_field = tag_errors.contains(ErrorKind::UnknownField);
                errors.append(tag_errors);
                if self.options.strict_tag_blocks && unknown_field {
                    return discard(errors);
                }
                Some(block)
            }
            None => None,
        };

        let sentence = match NmeaSentence::parse(sentence_text) {
            Ok(reported) => {
                let (sentence, sentence_errors) = reported.into_parts();
                errors.append(sentence_errors);
                sentence
            }
            Err(error) => {
                errors.push(error);
                return discard(errors);
            }
        };

        let payload = sentence.payload.as_bytes();
        if let Err(error) = BitReader::new(payload, sentence.padding) {
            errors.push(error);
            return discard(errors);
        }

        let info = fragment_info(tag_block.as_ref(), &sentence);
        let origin = FragmentOrigin {
            tag_block,
            talker: sentence.talker.to_string(),
            own_vessel: sentence.own_vessel,
            channel: sentence.channel,
        };
        let (reassembly, reassembly_errors) = self
            .reassembler
            .offer(info, payload, sentence.padding, origin)
            .into_parts();
        errors.append(reassembly_errors);

        match reassembly {
            Reassembly::Pending => DecodedLine::Incomplete(errors),
            Reassembly::Rejected => discard(errors),
            Reassembly::Complete(assembled) => {
                let origin = assembled.context;
                let talker = match assembled.payload {
                    Cow::Borrowed(_) => Cow::Borrowed(sentence.talker),
                    Cow::Owned(_) => Cow::Owned(origin.talker),
                };
                DecodedLine::Message(ParsedMessage {
                    tag_block: origin.tag_block,
                    talker,
                    own_vessel: origin.own_vessel,
                    channel: origin.channel,
                    payload: assembled.payload,
                    padding: assembled.padding,
                    errors,
                })
            }
        }
    }

    /// Drop every partially received message
    pub fn reset(&mut self) {
        self.reassembler.reset();
    }

    pub fn pending_groups(&self) -> usize {
        self.reassembler.pending_groups()
    }
}

impl Default for AisStreamReader {
    fn default() -> Self {
        Self::new(DecoderOptions::default())
    }
}
