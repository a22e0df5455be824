use crate::bits::AisText;

use super::codes::{EpfdFixType, ShipType};
use super::{Dimensions, Position, course_tenths, heading, speed_tenths};

message_view! {
    /// Extended class B equipment position report (type 19): a class B
    /// position report with the static data of the vessel appended.
    ExtendedPositionReportClassB
}

impl<'a> ExtendedPositionReportClassB<'a> {
    pub fn regional_reserved(&self) -> u32 {
        self.bits.unsigned(8, 38)
    }

    pub fn speed_over_ground_tenths(&self) -> u32 {
        self.bits.unsigned(10, 46)
    }

    pub fn speed_over_ground_knots(&self) -> Option<f64> {
        speed_tenths(self.speed_over_ground_tenths())
    }

    pub fn position_accuracy(&self) -> bool {
        self.bits.bit(56)
    }

    pub fn longitude_10000th_mins(&self) -> i32 {
        self.bits.signed(28, 57)
    }

    pub fn latitude_10000th_mins(&self) -> i32 {
        self.bits.signed(27, 85)
    }

    pub fn position(&self) -> Option<Position> {
        Position::from_10000th_mins(self.longitude_10000th_mins(), self.latitude_10000th_mins())
    }

    pub fn course_over_ground_10th_degrees(&self) -> u32 {
        self.bits.unsigned(12, 112)
    }

    pub fn course_over_ground_degrees(&self) -> Option<f64> {
        course_tenths(self.course_over_ground_10th_degrees())
    }

    pub fn true_heading_degrees(&self) -> u32 {
        self.bits.unsigned(9, 124)
    }

    pub fn true_heading(&self) -> Option<u32> {
        heading(self.true_heading_degrees())
    }

    pub fn time_stamp_second(&self) -> u32 {
        self.bits.unsigned(6, 133)
    }

    pub fn regional_reserved_139(&self) -> u32 {
        self.bits.unsigned(4, 139)
    }

    pub fn vessel_name(&self) -> AisText<'a> {
        self.bits.text(143, 20)
    }

    pub fn ship_type(&self) -> ShipType {
        self.bits.unsigned(8, 263).into()
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::read(&self.bits, 271)
    }

    pub fn epfd_fix_type(&self) -> EpfdFixType {
        self.bits.unsigned(4, 301).into()
    }

    pub fn raim_flag(&self) -> bool {
        self.bits.bit(305)
    }

    pub fn dte(&self) -> bool {
        self.bits.bit(306)
    }

    pub fn assigned_mode(&self) -> bool {
        self.bits.bit(307)
    }
}
