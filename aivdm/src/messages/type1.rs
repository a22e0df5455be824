use super::codes::{ManoeuvreIndicator, NavigationStatus, RadioSyncState};
use super::{Position, course_tenths, heading, speed_tenths};

message_view! {
    /// Position report class A, message types 1, 2 and 3.
    ///
    /// Type 1 is the scheduled report, type 2 the report sent under an
    /// assigned schedule and type 3 the response to an interrogation. All
    /// three share this 168-bit layout.
    PositionReportClassA
}

impl PositionReportClassA<'_> {
    pub fn navigation_status(&self) -> NavigationStatus {
        self.bits.unsigned(4, 38).into()
    }

    /// Raw rate of turn, `4.733 * sqrt(degrees per minute)` with sign.
    /// `-128` means not available, `±127` turning faster than 5°/30s.
    pub fn rate_of_turn(&self) -> i32 {
        self.bits.signed(8, 42)
    }

    /// Rate of turn in degrees per minute, when a turn indicator value is
    /// available.
    pub fn rate_of_turn_degrees_per_minute(&self) -> Option<f64> {
        let raw = self.rate_of_turn();
        if raw.abs() >= 127 {
            return None;
        }
        let magnitude = (raw as f64 / 4.733).powi(2);
        Some(if raw < 0 { -magnitude } else { magnitude })
    }

    /// Speed over ground in tenths of a knot; 1023 is not available.
    pub fn speed_over_ground_tenths(&self) -> u32 {
        self.bits.unsigned(10, 50)
    }

    pub fn speed_over_ground_knots(&self) -> Option<f64> {
        speed_tenths(self.speed_over_ground_tenths())
    }

    /// `true` for DGPS-quality fixes (better than 10 m).
    pub fn position_accuracy(&self) -> bool {
        self.bits.bit(60)
    }

    /// Longitude in 1/10000 minutes; 181° means not available.
    pub fn longitude_10000th_mins(&self) -> i32 {
        self.bits.signed(28, 61)
    }

    /// Latitude in 1/10000 minutes; 91° means not available.
    pub fn latitude_10000th_mins(&self) -> i32 {
        self.bits.signed(27, 89)
    }

    pub fn position(&self) -> Option<Position> {
        Position::from_10000th_mins(self.longitude_10000th_mins(), self.latitude_10000th_mins())
    }

    /// Course over ground in tenths of a degree; 3600 is not available.
    pub fn course_over_ground_10th_degrees(&self) -> u32 {
        self.bits.unsigned(12, 116)
    }

    pub fn course_over_ground_degrees(&self) -> Option<f64> {
        course_tenths(self.course_over_ground_10th_degrees())
    }

    /// True heading in degrees; 511 is not available.
    pub fn true_heading_degrees(&self) -> u32 {
        self.bits.unsigned(9, 128)
    }

    pub fn true_heading(&self) -> Option<u32> {
        heading(self.true_heading_degrees())
    }

    /// Second of the UTC minute the report was generated in. 60 and above
    /// flag missing or degraded positioning.
    pub fn time_stamp_second(&self) -> u32 {
        self.bits.unsigned(6, 137)
    }

    pub fn manoeuvre_indicator(&self) -> ManoeuvreIndicator {
        self.bits.unsigned(2, 143).into()
    }

    pub fn spare_bits_145(&self) -> u32 {
        self.bits.unsigned(3, 145)
    }

    /// Receiver autonomous integrity monitoring in use.
    pub fn raim_flag(&self) -> bool {
        self.bits.bit(148)
    }

    pub fn radio_sync_state(&self) -> RadioSyncState {
        self.bits.unsigned(2, 149).into()
    }

    /// Frames remaining until a new slot is selected.
    pub fn radio_slot_timeout(&self) -> u32 {
        self.bits.unsigned(3, 151)
    }

    /// Communication state sub message; its meaning depends on
    /// [`Self::radio_slot_timeout`].
    pub fn radio_sub_message(&self) -> u32 {
        self.bits.unsigned(14, 154)
    }
}
