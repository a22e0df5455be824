use std::fmt;

use crate::bits::{AisText, BitReader};
use crate::error::AisError;

use super::codes::{MessageType, NavigationStatus, ShipType};
use super::*;

/// A decoded AIS message, one variant per message layout.
///
/// Types 1-3, 4/11 and 7/13 share a layout and therefore a variant; the
/// actual type is available from [`AisMessage::message_type`]. Undefined
/// message types and type 24 part numbers 2 and 3 decode as
/// [`AisMessage::Unsupported`], which still exposes the common header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AisMessage<'a> {
    PositionReportClassA(PositionReportClassA<'a>),
    BaseStationReport(BaseStationReport<'a>),
    StaticAndVoyageData(StaticAndVoyageData<'a>),
    BinaryAddressed(BinaryAddressedMessage<'a>),
    BinaryAcknowledge(BinaryAcknowledge<'a>),
    BinaryBroadcast(BinaryBroadcastMessage<'a>),
    SarAircraftPosition(SarAircraftPositionReport<'a>),
    UtcDateInquiry(UtcDateInquiry<'a>),
    AddressedSafety(AddressedSafetyMessage<'a>),
    SafetyBroadcast(SafetyBroadcastMessage<'a>),
    Interrogation(Interrogation<'a>),
    AssignmentModeCommand(AssignmentModeCommand<'a>),
    DgnssBroadcast(DgnssBroadcast<'a>),
    PositionReportClassB(PositionReportClassB<'a>),
    ExtendedPositionReportClassB(ExtendedPositionReportClassB<'a>),
    DataLinkManagement(DataLinkManagement<'a>),
    AidToNavigationReport(AidToNavigationReport<'a>),
    ChannelManagement(ChannelManagement<'a>),
    GroupAssignmentCommand(GroupAssignmentCommand<'a>),
    StaticDataReportPartA(StaticDataReportPartA<'a>),
    StaticDataReportPartB(StaticDataReportPartB<'a>),
    SingleSlotBinary(SingleSlotBinaryMessage<'a>),
    MultipleSlotBinary(MultipleSlotBinaryMessage<'a>),
    LongRangeBroadcast(LongRangeBroadcast<'a>),
    Unsupported(BitReader<'a>),
}

macro_rules! with_view {
    ($message:expr, $view:ident => $body:expr, $bits:ident => $fallback:expr) => {
        match $message {
            AisMessage::PositionReportClassA($view) => $body,
            AisMessage::BaseStationReport($view) => $body,
            AisMessage::StaticAndVoyageData($view) => $body,
            AisMessage::BinaryAddressed($view) => $body,
            AisMessage::BinaryAcknowledge($view) => $body,
            AisMessage::BinaryBroadcast($view) => $body,
            AisMessage::SarAircraftPosition($view) => $body,
            AisMessage::UtcDateInquiry($view) => $body,
            AisMessage::AddressedSafety($view) => $body,
            AisMessage::SafetyBroadcast($view) => $body,
            AisMessage::Interrogation($view) => $body,
            AisMessage::AssignmentModeCommand($view) => $body,
            AisMessage::DgnssBroadcast($view) => $body,
            AisMessage::PositionReportClassB($view) => $body,
            AisMessage::ExtendedPositionReportClassB($view) => $body,
            AisMessage::DataLinkManagement($view) => $body,
            AisMessage::AidToNavigationReport($view) => $body,
            AisMessage::ChannelManagement($view) => $body,
            AisMessage::GroupAssignmentCommand($view) => $body,
            AisMessage::StaticDataReportPartA($view) => $body,
            AisMessage::StaticDataReportPartB($view) => $body,
            AisMessage::SingleSlotBinary($view) => $body,
            AisMessage::MultipleSlotBinary($view) => $body,
            AisMessage::LongRangeBroadcast($view) => $body,
            AisMessage::Unsupported($bits) => $fallback,
        }
    };
}

impl<'a> AisMessage<'a> {
    pub fn new(ascii: &'a [u8], padding: u8) -> Result<Self, AisError> {
        Ok(Self::from_bits(BitReader::new(ascii, padding)?))
    }

    /// Selects the view matching the message type in the first six bits.
    pub fn from_bits(bits: BitReader<'a>) -> Self {
        match bits.unsigned(6, 0) {
            1..=3 => Self::PositionReportClassA(PositionReportClassA::from_bits(bits)),
            4 | 11 => Self::BaseStationReport(BaseStationReport::from_bits(bits)),
            5 => Self::StaticAndVoyageData(StaticAndVoyageData::from_bits(bits)),
            6 => Self::BinaryAddressed(BinaryAddressedMessage::from_bits(bits)),
            7 | 13 => Self::BinaryAcknowledge(BinaryAcknowledge::from_bits(bits)),
            8 => Self::BinaryBroadcast(BinaryBroadcastMessage::from_bits(bits)),
            9 => Self::SarAircraftPosition(SarAircraftPositionReport::from_bits(bits)),
            10 => Self::UtcDateInquiry(UtcDateInquiry::from_bits(bits)),
            12 => Self::AddressedSafety(AddressedSafetyMessage::from_bits(bits)),
            14 => Self::SafetyBroadcast(SafetyBroadcastMessage::from_bits(bits)),
            15 => Self::Interrogation(Interrogation::from_bits(bits)),
            16 => Self::AssignmentModeCommand(AssignmentModeCommand::from_bits(bits)),
            17 => Self::DgnssBroadcast(DgnssBroadcast::from_bits(bits)),
            18 => Self::PositionReportClassB(PositionReportClassB::from_bits(bits)),
            19 => Self::ExtendedPositionReportClassB(ExtendedPositionReportClassB::from_bits(bits)),
            20 => Self::DataLinkManagement(DataLinkManagement::from_bits(bits)),
            21 => Self::AidToNavigationReport(AidToNavigationReport::from_bits(bits)),
            22 => Self::ChannelManagement(ChannelManagement::from_bits(bits)),
            23 => Self::GroupAssignmentCommand(GroupAssignmentCommand::from_bits(bits)),
            24 => match bits.unsigned(2, 38) {
                0 => Self::StaticDataReportPartA(StaticDataReportPartA::from_bits(bits)),
                1 => Self::StaticDataReportPartB(StaticDataReportPartB::from_bits(bits)),
                _ => Self::Unsupported(bits),
            },
            25 => Self::SingleSlotBinary(SingleSlotBinaryMessage::from_bits(bits)),
            26 => Self::MultipleSlotBinary(MultipleSlotBinaryMessage::from_bits(bits)),
            27 => Self::LongRangeBroadcast(LongRangeBroadcast::from_bits(bits)),
            _ => Self::Unsupported(bits),
        }
    }

    pub fn bits(&self) -> BitReader<'a> {
        with_view!(self, view => view.bits(), bits => *bits)
    }

    pub fn message_type(&self) -> MessageType {
        self.bits().unsigned(6, 0).into()
    }

    pub fn repeat_indicator(&self) -> u32 {
        self.bits().unsigned(2, 6)
    }

    pub fn mmsi(&self) -> u32 {
        self.bits().unsigned(30, 8)
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }

    /// Reported position in degrees, for the messages that carry one.
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::PositionReportClassA(m) => m.position(),
            Self::BaseStationReport(m) => m.position(),
            Self::SarAircraftPosition(m) => m.position(),
            Self::DgnssBroadcast(m) => m.position(),
            Self::PositionReportClassB(m) => m.position(),
            Self::ExtendedPositionReportClassB(m) => m.position(),
            Self::AidToNavigationReport(m) => m.position(),
            Self::LongRangeBroadcast(m) => m.position(),
            _ => None,
        }
    }

    pub fn speed_over_ground_knots(&self) -> Option<f64> {
        match self {
            Self::PositionReportClassA(m) => m.speed_over_ground_knots(),
            Self::SarAircraftPosition(m) => m.speed_over_ground_knots(),
            Self::PositionReportClassB(m) => m.speed_over_ground_knots(),
            Self::ExtendedPositionReportClassB(m) => m.speed_over_ground_knots(),
            Self::LongRangeBroadcast(m) => m.speed_over_ground_knots(),
            _ => None,
        }
    }

    pub fn course_over_ground_degrees(&self) -> Option<f64> {
        match self {
            Self::PositionReportClassA(m) => m.course_over_ground_degrees(),
            Self::SarAircraftPosition(m) => m.course_over_ground_degrees(),
            Self::PositionReportClassB(m) => m.course_over_ground_degrees(),
            Self::ExtendedPositionReportClassB(m) => m.course_over_ground_degrees(),
            Self::LongRangeBroadcast(m) => m.course_over_ground_degrees(),
            _ => None,
        }
    }

    pub fn true_heading(&self) -> Option<u32> {
        match self {
            Self::PositionReportClassA(m) => m.true_heading(),
            Self::PositionReportClassB(m) => m.true_heading(),
            Self::ExtendedPositionReportClassB(m) => m.true_heading(),
            _ => None,
        }
    }

    pub fn navigation_status(&self) -> Option<NavigationStatus> {
        match self {
            Self::PositionReportClassA(m) => Some(m.navigation_status()),
            Self::LongRangeBroadcast(m) => Some(m.navigation_status()),
            _ => None,
        }
    }

    /// Vessel name, or the aid name for aid-to-navigation reports.
    pub fn vessel_name(&self) -> Option<AisText<'a>> {
        match self {
            Self::StaticAndVoyageData(m) => Some(m.vessel_name()),
            Self::ExtendedPositionReportClassB(m) => Some(m.vessel_name()),
            Self::StaticDataReportPartA(m) => Some(m.vessel_name()),
            Self::AidToNavigationReport(m) => Some(m.name()),
            _ => None,
        }
    }

    pub fn ship_type(&self) -> Option<ShipType> {
        match self {
            Self::StaticAndVoyageData(m) => Some(m.ship_type()),
            Self::ExtendedPositionReportClassB(m) => Some(m.ship_type()),
            Self::StaticDataReportPartB(m) => Some(m.ship_type()),
            _ => None,
        }
    }

    pub fn call_sign(&self) -> Option<AisText<'a>> {
        match self {
            Self::StaticAndVoyageData(m) => Some(m.call_sign()),
            Self::StaticDataReportPartB(m) => Some(m.call_sign()),
            _ => None,
        }
    }
}

impl fmt::Display for AisMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "type {} {} from {}",
            self.message_type().raw(),
            self.message_type(),
            self.mmsi()
        )?;
        if let Some(name) = self.vessel_name().filter(|name| !name.is_empty()) {
            write!(f, " \"{}\"", name)?;
        }
        if let Some(position) = self.position() {
            write!(f, " at {:.5}, {:.5}", position.latitude, position.longitude)?;
        }
        if let Some(speed) = self.speed_over_ground_knots() {
            write!(f, " {:.1} kn", speed)?;
        }
        if let Some(course) = self.course_over_ground_degrees() {
            write!(f, " {:.1}°", course)?;
        }
        Ok(())
    }
}
