//! Field layouts of the AIS message types.
//!
//! Each view wraps a [`BitReader`](crate::bits::BitReader) and exposes one
//! accessor per field at the bit address fixed by ITU-R M.1371. Views own
//! nothing, never fail and can be read any number of times. [`AisMessage`]
//! selects the view matching a payload's message type.

use serde::Serialize;

/// Declares a view struct over a payload with the header fields every AIS
/// message shares: type (6 bits), repeat indicator (2 bits) and MMSI (30 bits).
macro_rules! message_view {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name<'a> {
            bits: $crate::bits::BitReader<'a>,
        }

        impl<'a> $name<'a> {
            pub fn new(ascii: &'a [u8], padding: u8) -> Result<Self, $crate::error::AisError> {
                Ok(Self::from_bits($crate::bits::BitReader::new(ascii, padding)?))
            }

            pub fn from_bits(bits: $crate::bits::BitReader<'a>) -> Self {
                Self { bits }
            }

            pub fn bits(&self) -> $crate::bits::BitReader<'a> {
                self.bits
            }

            pub fn message_type(&self) -> $crate::messages::codes::MessageType {
                self.bits.unsigned(6, 0).into()
            }

            /// Times this message has been repeated; 3 means no further
            /// retransmission.
            pub fn repeat_indicator(&self) -> u32 {
                self.bits.unsigned(2, 6)
            }

            pub fn mmsi(&self) -> u32 {
                self.bits.unsigned(30, 8)
            }
        }
    };
}

pub mod codes;
pub mod message;
pub mod type1;
pub mod type4;
pub mod type5;
pub mod type6;
pub mod type7;
pub mod type8;
pub mod type9;
pub mod type10;
pub mod type12;
pub mod type14;
pub mod type15;
pub mod type16;
pub mod type17;
pub mod type18;
pub mod type19;
pub mod type20;
pub mod type21;
pub mod type22;
pub mod type23;
pub mod type24;
pub mod type25;
pub mod type27;

pub use codes::{
    AidToNavigationType, ClassBRadioStatusType, ClassBUnit, EpfdFixType, ManoeuvreIndicator,
    MessageType, NavigationStatus, RadioSyncState, ShipType,
};
pub use message::AisMessage;
pub use type1::PositionReportClassA;
pub use type4::BaseStationReport;
pub use type5::StaticAndVoyageData;
pub use type6::BinaryAddressedMessage;
pub use type7::{Acknowledgement, BinaryAcknowledge};
pub use type8::BinaryBroadcastMessage;
pub use type9::SarAircraftPositionReport;
pub use type10::UtcDateInquiry;
pub use type12::AddressedSafetyMessage;
pub use type14::SafetyBroadcastMessage;
pub use type15::{Interrogation, InterrogationRequest};
pub use type16::{AssignmentModeCommand, StationAssignment};
pub use type17::DgnssBroadcast;
pub use type18::PositionReportClassB;
pub use type19::ExtendedPositionReportClassB;
pub use type20::{DataLinkManagement, SlotReservation};
pub use type21::AidToNavigationReport;
pub use type22::ChannelManagement;
pub use type23::GroupAssignmentCommand;
pub use type24::{StaticDataReportPartA, StaticDataReportPartB};
pub use type25::{MultipleSlotBinaryMessage, SingleSlotBinaryMessage};
pub use type27::LongRangeBroadcast;

/// A reported position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    /// From the 1/10000 minute units of the high resolution reports.
    /// `None` when either coordinate is out of range, which includes the
    /// 181°/91° "not available" values.
    pub fn from_10000th_mins(longitude: i32, latitude: i32) -> Option<Self> {
        Self::checked(longitude as f64 / 600_000.0, latitude as f64 / 600_000.0)
    }

    /// From the 1/10 minute units of long range, DGNSS and area fields.
    pub fn from_10th_mins(longitude: i32, latitude: i32) -> Option<Self> {
        Self::checked(longitude as f64 / 600.0, latitude as f64 / 600.0)
    }

    fn checked(longitude: f64, latitude: f64) -> Option<Self> {
        if longitude.abs() <= 180.0 && latitude.abs() <= 90.0 {
            Some(Self { latitude, longitude })
        } else {
            None
        }
    }
}

/// Overall dimensions of a vessel relative to its position reference point,
/// in metres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub to_bow: u32,
    pub to_stern: u32,
    pub to_port: u32,
    pub to_starboard: u32,
}

impl Dimensions {
    pub(crate) fn read(bits: &crate::bits::BitReader<'_>, start: usize) -> Self {
        Self {
            to_bow: bits.unsigned(9, start),
            to_stern: bits.unsigned(9, start + 9),
            to_port: bits.unsigned(6, start + 18),
            to_starboard: bits.unsigned(6, start + 24),
        }
    }

    pub fn length(&self) -> u32 {
        self.to_bow + self.to_stern
    }

    pub fn beam(&self) -> u32 {
        self.to_port + self.to_starboard
    }
}

/// Speed in tenths of a knot; 1023 is not available.
pub(crate) fn speed_tenths(raw: u32) -> Option<f64> {
    (raw != 1023).then(|| raw as f64 / 10.0)
}

/// Course in tenths of a degree; 3600 and above is not available.
pub(crate) fn course_tenths(raw: u32) -> Option<f64> {
    (raw < 3600).then(|| raw as f64 / 10.0)
}

/// Heading in degrees; 511 is not available.
pub(crate) fn heading(raw: u32) -> Option<u32> {
    (raw < 360).then_some(raw)
}
