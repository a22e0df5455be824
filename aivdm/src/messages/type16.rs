message_view! {
    /// Assignment mode command (type 16), sent by base stations to assign a
    /// reporting schedule to one or two stations.
    AssignmentModeCommand
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationAssignment {
    pub mmsi: u32,
    pub offset: u32,
    pub increment: u32,
}

impl AssignmentModeCommand<'_> {
    pub fn first_assignment(&self) -> StationAssignment {
        StationAssignment {
            mmsi: self.bits.unsigned(30, 40),
            offset: self.bits.unsigned(12, 70),
            increment: self.bits.unsigned(10, 82),
        }
    }

    pub fn second_assignment(&self) -> Option<StationAssignment> {
        self.bits.has_bits(52, 92).then(|| StationAssignment {
            mmsi: self.bits.unsigned(30, 92),
            offset: self.bits.unsigned(12, 122),
            increment: self.bits.unsigned(10, 134),
        })
    }
}
