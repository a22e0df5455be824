use crate::bits::BinaryData;

use super::Position;

message_view! {
    /// DGNSS broadcast binary message (type 17).
    DgnssBroadcast
}

impl<'a> DgnssBroadcast<'a> {
    /// Reference station longitude in 1/10 minutes.
    pub fn longitude_10th_mins(&self) -> i32 {
        self.bits.signed(18, 40)
    }

    pub fn latitude_10th_mins(&self) -> i32 {
        self.bits.signed(17, 58)
    }

    pub fn position(&self) -> Option<Position> {
        Position::from_10th_mins(self.longitude_10th_mins(), self.latitude_10th_mins())
    }

    /// DGNSS correction data words.
    pub fn data(&self) -> BinaryData<'a> {
        self.bits.data_from(80)
    }
}
