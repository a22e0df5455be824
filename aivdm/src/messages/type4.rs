use chrono::{DateTime, NaiveDate, Utc};

use super::Position;
use super::codes::{EpfdFixType, RadioSyncState};

message_view! {
    /// Base station report (type 4) and UTC/date response (type 11).
    BaseStationReport
}

impl BaseStationReport<'_> {
    /// UTC year, 0 when not available.
    pub fn year(&self) -> u32 {
        self.bits.unsigned(14, 38)
    }

    pub fn month(&self) -> u32 {
        self.bits.unsigned(4, 52)
    }

    pub fn day(&self) -> u32 {
        self.bits.unsigned(5, 56)
    }

    pub fn hour(&self) -> u32 {
        self.bits.unsigned(5, 61)
    }

    pub fn minute(&self) -> u32 {
        self.bits.unsigned(6, 66)
    }

    pub fn second(&self) -> u32 {
        self.bits.unsigned(6, 72)
    }

    /// The reported UTC time, if every component is available and valid.
    pub fn utc(&self) -> Option<DateTime<Utc>> {
        let date = NaiveDate::from_ymd_opt(self.year() as i32, self.month(), self.day())?;
        let time = date.and_hms_opt(self.hour(), self.minute(), self.second())?;
        Some(time.and_utc())
    }

    pub fn position_accuracy(&self) -> bool {
        self.bits.bit(78)
    }

    pub fn longitude_10000th_mins(&self) -> i32 {
        self.bits.signed(28, 79)
    }

    pub fn latitude_10000th_mins(&self) -> i32 {
        self.bits.signed(27, 107)
    }

    pub fn position(&self) -> Option<Position> {
        Position::from_10000th_mins(self.longitude_10000th_mins(), self.latitude_10000th_mins())
    }

    pub fn epfd_fix_type(&self) -> EpfdFixType {
        self.bits.unsigned(4, 134).into()
    }

    pub fn spare_bits_138(&self) -> u32 {
        self.bits.unsigned(10, 138)
    }

    pub fn raim_flag(&self) -> bool {
        self.bits.bit(148)
    }

    /// The complete 19-bit SOTDMA communication state.
    pub fn radio_status(&self) -> u32 {
        self.bits.unsigned(19, 149)
    }

    pub fn radio_sync_state(&self) -> RadioSyncState {
        self.bits.unsigned(2, 149).into()
    }

    pub fn radio_slot_timeout(&self) -> u32 {
        self.bits.unsigned(3, 151)
    }

    pub fn radio_sub_message(&self) -> u32 {
        self.bits.unsigned(14, 154)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::codes::MessageType;
    use chrono::TimeZone;

    #[test]
    fn test_base_station_report_fields() {
        let report = BaseStationReport::new(b"403OviQvPPfRko?tO`K>RA70218l", 0).unwrap();

        assert_eq!(report.message_type(), MessageType::BASE_STATION_REPORT);
        assert_eq!(report.mmsi(), 3669702);
        assert_eq!(
            (report.year(), report.month(), report.day()),
            (2024, 2, 1)
        );
        assert_eq!(
            (report.hour(), report.minute(), report.second()),
            (14, 34, 51)
        );
        assert!(report.position_accuracy());
        assert_eq!(report.longitude_10000th_mins(), -73407500);
        assert_eq!(report.latitude_10000th_mins(), 28549700);
        assert_eq!(report.epfd_fix_type(), EpfdFixType::SURVEYED);
        assert!(report.raim_flag());
        assert_eq!(report.radio_status(), 0x1234);
        assert_eq!(report.radio_sync_state(), RadioSyncState::UTC_DIRECT);
        assert_eq!(report.radio_slot_timeout(), 0);
        assert_eq!(report.radio_sub_message(), 0x1234);
    }

    #[test]
    fn test_base_station_report_utc() {
        let report = BaseStationReport::new(b"403OviQvPPfRko?tO`K>RA70218l", 0).unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 2, 1, 14, 34, 51).unwrap();
        assert_eq!(report.utc(), Some(expected));
    }

    #[test]
    fn test_base_station_report_without_time() {
        // Header only: every time field reads as zero.
        let report = BaseStationReport::new(b"403Ovi", 0).unwrap();
        assert_eq!(report.year(), 0);
        assert_eq!(report.utc(), None);
    }
}
