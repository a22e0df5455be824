use crate::bits::AisText;

use super::codes::{AidToNavigationType, EpfdFixType};
use super::{Dimensions, Position};

message_view! {
    /// Aid-to-navigation report (type 21).
    AidToNavigationReport
}

impl<'a> AidToNavigationReport<'a> {
    pub fn aid_type(&self) -> AidToNavigationType {
        self.bits.unsigned(5, 38).into()
    }

    pub fn name(&self) -> AisText<'a> {
        self.bits.text(43, 20)
    }

    pub fn position_accuracy(&self) -> bool {
        self.bits.bit(163)
    }

    pub fn longitude_10000th_mins(&self) -> i32 {
        self.bits.signed(28, 164)
    }

    pub fn latitude_10000th_mins(&self) -> i32 {
        self.bits.signed(27, 192)
    }

    pub fn position(&self) -> Option<Position> {
        Position::from_10000th_mins(self.longitude_10000th_mins(), self.latitude_10000th_mins())
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::read(&self.bits, 219)
    }

    pub fn epfd_fix_type(&self) -> EpfdFixType {
        self.bits.unsigned(4, 249).into()
    }

    pub fn time_stamp_second(&self) -> u32 {
        self.bits.unsigned(6, 253)
    }

    /// Only meaningful for floating aids when the time stamp is below 60.
    pub fn off_position(&self) -> bool {
        self.bits.bit(259)
    }

    pub fn regional_reserved(&self) -> u32 {
        self.bits.unsigned(8, 260)
    }

    pub fn raim_flag(&self) -> bool {
        self.bits.bit(268)
    }

    /// Whether the aid is virtual, reported without a physical station.
    pub fn virtual_aid(&self) -> bool {
        self.bits.bit(269)
    }

    pub fn assigned_mode(&self) -> bool {
        self.bits.bit(270)
    }

    /// Up to 14 further name characters after the 272-bit fixed part.
    pub fn name_extension(&self) -> AisText<'a> {
        self.bits.text(272, self.bits.bit_len().saturating_sub(272) / 6)
    }

    /// The name with its extension appended.
    pub fn full_name(&self) -> String {
        format!("{}{}", self.name(), self.name_extension())
    }
}
