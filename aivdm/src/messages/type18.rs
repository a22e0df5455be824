use super::codes::{ClassBRadioStatusType, ClassBUnit};
use super::{Position, course_tenths, heading, speed_tenths};

message_view! {
    /// Standard class B equipment position report (type 18).
    PositionReportClassB
}

impl PositionReportClassB<'_> {
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
        self.bits.unsigned(2, 139)
    }

    pub fn unit(&self) -> ClassBUnit {
        if self.bits.bit(141) {
            ClassBUnit::Cstdma
        } else {
            ClassBUnit::Sotdma
        }
    }

    /// Whether the unit has a display for safety related messages.
    pub fn has_display(&self) -> bool {
        self.bits.bit(142)
    }

    /// Whether the unit is attached to a VHF voice radio with DSC.
    pub fn has_dsc(&self) -> bool {
        self.bits.bit(143)
    }

    /// Whether the unit can use the whole marine band.
    pub fn whole_band(&self) -> bool {
        self.bits.bit(144)
    }

    /// Whether the unit accepts channel management (type 22) commands.
    pub fn accepts_message_22(&self) -> bool {
        self.bits.bit(145)
    }

    pub fn assigned_mode(&self) -> bool {
        self.bits.bit(146)
    }

    pub fn raim_flag(&self) -> bool {
        self.bits.bit(147)
    }

    pub fn radio_status_type(&self) -> ClassBRadioStatusType {
        if self.bits.bit(148) {
            ClassBRadioStatusType::Itdma
        } else {
            ClassBRadioStatusType::Sotdma
        }
    }

    /// The 19-bit communication state, interpreted per
    /// [`Self::radio_status_type`].
    pub fn radio_status(&self) -> u32 {
        self.bits.unsigned(19, 149)
    }
}
