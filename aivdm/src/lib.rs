//! AIS over NMEA 0183 Library
//!
//! This library decodes AIS messages carried in `!AIVDM` / `!AIVDO` sentences:
//! - 6-bit payload armor and bit-level field extraction
//! - Field layouts for message types 1 to 27
//! - NMEA 4.x tag block parsing (IEC and NMEA grouping syntax)
//! - Reassembly of messages split over several sentences
//! - Message handler trait for processing decoded messages
//!
//! # Features
//!
//! - **Zero-copy decoding**: Message views read fields straight from the line
//! - **Out-of-order reassembly**: Fragments complete in any order, stale groups are evicted
//! - **Structured errors**: Problems are reported alongside best-effort results
//!
//! # Example
//!
//! ```
//! use aivdm::{AisMessage, AisStreamReader, DecodedLine, DecoderOptions};
//!
//! let mut reader = AisStreamReader::new(DecoderOptions::default());
//!
//! let lines = [
//!     "!AIVDM,2,1,1,A,55?MbV02;H;s<HtKR20EHE:0@T4@Dn2222222216L961O5Gf0NSQEp6ClRp8,0*1C",
//!     "!AIVDM,2,2,1,A,88888888880,2*25",
//! ];
//!
//! for line in lines {
//!     if let DecodedLine::Message(message) = reader.process_line(line) {
//!         if let AisMessage::StaticAndVoyageData(data) = message.message() {
//!             assert_eq!(data.vessel_name().to_string(), "EVER DIADEM");
//!         }
//!     }
//! }
//! ```

pub mod bits;
pub mod config;
pub mod error;
pub mod message_handler;
pub mod messages;
pub mod reassembly;
pub mod sentence;
pub mod stream_reader;
pub mod tag_block;

// Re-export commonly used types
pub use bits::{AisText, BinaryData, BitReader};
pub use config::DecoderOptions;
pub use error::{AisError, ErrorKind, ErrorReport, Reported};
pub use message_handler::MessageHandler;
pub use messages::{AisMessage, MessageType, Position};
pub use reassembly::{Assembled, FragmentInfo, GroupKey, Reassembly, SentenceReassembler};
pub use sentence::NmeaSentence;
pub use stream_reader::{AisStreamReader, DecodedLine, ParsedMessage};
pub use tag_block::{SentenceGrouping, TagBlock, TagBlockStandard};
