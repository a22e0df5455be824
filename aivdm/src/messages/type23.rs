use super::Position;
use super::codes::ShipType;

message_view! {
    /// Group assignment command (type 23).
    GroupAssignmentCommand
}

impl GroupAssignmentCommand<'_> {
    pub fn ne_longitude_10th_mins(&self) -> i32 {
        self.bits.signed(18, 40)
    }

    pub fn ne_latitude_10th_mins(&self) -> i32 {
        self.bits.signed(17, 58)
    }

    pub fn sw_longitude_10th_mins(&self) -> i32 {
        self.bits.signed(18, 75)
    }

    pub fn sw_latitude_10th_mins(&self) -> i32 {
        self.bits.signed(17, 93)
    }

    pub fn area(&self) -> Option<(Position, Position)> {
        let ne = Position::from_10th_mins(self.ne_longitude_10th_mins(), self.ne_latitude_10th_mins())?;
        let sw = Position::from_10th_mins(self.sw_longitude_10th_mins(), self.sw_latitude_10th_mins())?;
        Some((ne, sw))
    }

    pub fn station_type(&self) -> u32 {
        self.bits.unsigned(4, 110)
    }

    pub fn ship_type(&self) -> ShipType {
        self.bits.unsigned(8, 114).into()
    }

    pub fn tx_rx_mode(&self) -> u32 {
        self.bits.unsigned(2, 144)
    }

    pub fn report_interval(&self) -> u32 {
        self.bits.unsigned(4, 146)
    }

    /// Quiet time in minutes, 0 for none.
    pub fn quiet_time(&self) -> u32 {
        self.bits.unsigned(4, 150)
    }
}
