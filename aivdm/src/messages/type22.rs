use super::Position;

message_view! {
    /// Channel management (type 22).
    ///
    /// Applies either to a rectangular area or to two addressed stations,
    /// selected by [`ChannelManagement::addressed`]. The bits at 69..139
    /// hold the area corners or the two MMSIs accordingly.
    ChannelManagement
}

impl ChannelManagement<'_> {
    pub fn channel_a(&self) -> u32 {
        self.bits.unsigned(12, 40)
    }

    pub fn channel_b(&self) -> u32 {
        self.bits.unsigned(12, 52)
    }

    /// 0 = TxA/TxB RxA/RxB, 1 = TxA RxA/RxB, 2 = TxB RxA/RxB.
    pub fn tx_rx_mode(&self) -> u32 {
        self.bits.unsigned(4, 64)
    }

    /// `true` for low (1 W) transmit power.
    pub fn low_power(&self) -> bool {
        self.bits.bit(68)
    }

    pub fn ne_longitude_10th_mins(&self) -> i32 {
        self.bits.signed(18, 69)
    }

    pub fn ne_latitude_10th_mins(&self) -> i32 {
        self.bits.signed(17, 87)
    }

    pub fn sw_longitude_10th_mins(&self) -> i32 {
        self.bits.signed(18, 104)
    }

    pub fn sw_latitude_10th_mins(&self) -> i32 {
        self.bits.signed(17, 122)
    }

    /// North-east and south-west corners of the area, for broadcasts.
    pub fn area(&self) -> Option<(Position, Position)> {
        if self.addressed() {
            return None;
        }
        let ne = Position::from_10th_mins(self.ne_longitude_10th_mins(), self.ne_latitude_10th_mins())?;
        let sw = Position::from_10th_mins(self.sw_longitude_10th_mins(), self.sw_latitude_10th_mins())?;
        Some((ne, sw))
    }

    pub fn destination_mmsi_1(&self) -> u32 {
        self.bits.unsigned(30, 69)
    }

    pub fn destination_mmsi_2(&self) -> u32 {
        self.bits.unsigned(30, 104)
    }

    /// Both addressed stations, when the message is addressed.
    pub fn destinations(&self) -> Option<(u32, u32)> {
        self.addressed()
            .then(|| (self.destination_mmsi_1(), self.destination_mmsi_2()))
    }

    pub fn addressed(&self) -> bool {
        self.bits.bit(139)
    }

    /// `true` for 12.5 kHz bandwidth on channel A.
    pub fn channel_a_bandwidth(&self) -> bool {
        self.bits.bit(140)
    }

    pub fn channel_b_bandwidth(&self) -> bool {
        self.bits.bit(141)
    }

    /// Size of the transitional zone in nautical miles, minus one.
    pub fn zone_size(&self) -> u32 {
        self.bits.unsigned(3, 142)
    }
}
