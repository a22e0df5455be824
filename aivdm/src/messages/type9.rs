use super::{Position, course_tenths};

message_view! {
    /// Standard search and rescue aircraft position report (type 9).
    SarAircraftPositionReport
}

impl SarAircraftPositionReport<'_> {
    /// Altitude in metres; 4095 is not available, 4094 means 4094 or higher.
    pub fn altitude_metres(&self) -> u32 {
        self.bits.unsigned(12, 38)
    }

    /// Speed over ground in whole knots; 1023 is not available.
    pub fn speed_over_ground(&self) -> u32 {
        self.bits.unsigned(10, 50)
    }

    pub fn speed_over_ground_knots(&self) -> Option<f64> {
        let raw = self.speed_over_ground();
        (raw != 1023).then_some(raw as f64)
    }

    pub fn position_accuracy(&self) -> bool {
        self.bits.bit(60)
    }

    pub fn longitude_10000th_mins(&self) -> i32 {
        self.bits.signed(28, 61)
    }

    pub fn latitude_10000th_mins(&self) -> i32 {
        self.bits.signed(27, 89)
    }

    pub fn position(&self) -> Option<Position> {
        Position::from_10000th_mins(self.longitude_10000th_mins(), self.latitude_10000th_mins())
    }

    pub fn course_over_ground_10th_degrees(&self) -> u32 {
        self.bits.unsigned(12, 116)
    }

    pub fn course_over_ground_degrees(&self) -> Option<f64> {
        course_tenths(self.course_over_ground_10th_degrees())
    }

    pub fn time_stamp_second(&self) -> u32 {
        self.bits.unsigned(6, 128)
    }

    pub fn regional_reserved(&self) -> u32 {
        self.bits.unsigned(8, 134)
    }

    pub fn dte(&self) -> bool {
        self.bits.bit(142)
    }

    pub fn spare_bits_143(&self) -> u32 {
        self.bits.unsigned(3, 143)
    }

    pub fn assigned_mode(&self) -> bool {
        self.bits.bit(146)
    }

    pub fn raim_flag(&self) -> bool {
        self.bits.bit(147)
    }

    /// Radio status bit 148 selects SOTDMA (0) or ITDMA (1) for the
    /// remaining 19 bits; both are returned together.
    pub fn radio_status(&self) -> u32 {
        self.bits.unsigned(20, 148)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sar_aircraft_position_report() {
        let report = SarAircraftPositionReport::new(b"91b55wi;ip099t1wKH@:S3024005", 0).unwrap();

        assert_eq!(report.mmsi(), 111232511);
        assert_eq!(report.altitude_metres(), 303);
        assert_eq!(report.speed_over_ground(), 120);
        assert_eq!(report.speed_over_ground_knots(), Some(120.0));
        assert!(!report.position_accuracy());
        assert_eq!(report.longitude_10000th_mins(), 1200000);
        assert_eq!(report.latitude_10000th_mins(), -600000);
        assert_eq!(
            report.position(),
            Some(Position { latitude: -1.0, longitude: 2.0 })
        );
        assert_eq!(report.course_over_ground_degrees(), Some(270.0));
        assert_eq!(report.time_stamp_second(), 12);
        assert_eq!(report.regional_reserved(), 0);
        assert!(report.dte());
        assert!(!report.assigned_mode());
        assert!(report.raim_flag());
        assert_eq!(report.radio_status(), 5);
    }
}
