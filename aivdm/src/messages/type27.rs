use super::Position;
use super::codes::NavigationStatus;

message_view! {
    /// Long range AIS broadcast (type 27), a 96-bit position report for
    /// satellite reception.
    LongRangeBroadcast
}

impl LongRangeBroadcast<'_> {
    pub fn position_accuracy(&self) -> bool {
        self.bits.bit(38)
    }

    pub fn raim_flag(&self) -> bool {
        self.bits.bit(39)
    }

    pub fn navigation_status(&self) -> NavigationStatus {
        self.bits.unsigned(4, 40).into()
    }

    /// Longitude in 1/10 minutes; 181° (108600) is not available.
    pub fn longitude_10th_mins(&self) -> i32 {
        self.bits.signed(18, 44)
    }

    /// Latitude in 1/10 minutes; 91° (54600) is not available.
    pub fn latitude_10th_mins(&self) -> i32 {
        self.bits.signed(17, 62)
    }

    pub fn position(&self) -> Option<Position> {
        Position::from_10th_mins(self.longitude_10th_mins(), self.latitude_10th_mins())
    }

    /// Speed over ground in whole knots, 0-62; 63 is not available.
    pub fn speed_over_ground(&self) -> u32 {
        self.bits.unsigned(6, 79)
    }

    pub fn speed_over_ground_knots(&self) -> Option<f64> {
        let raw = self.speed_over_ground();
        (raw != 63).then_some(raw as f64)
    }

    /// Course over ground in whole degrees; 511 is not available.
    pub fn course_over_ground(&self) -> u32 {
        self.bits.unsigned(9, 85)
    }

    pub fn course_over_ground_degrees(&self) -> Option<f64> {
        let raw = self.course_over_ground();
        (raw < 360).then_some(raw as f64)
    }

    /// `false` when the reported position is less than five seconds old.
    pub fn position_latency(&self) -> bool {
        self.bits.bit(94)
    }

    pub fn spare_bit_95(&self) -> bool {
        self.bits.bit(95)
    }
}
