use crate::bits::AisText;

message_view! {
    /// Addressed safety related message (type 12).
    AddressedSafetyMessage
}

impl<'a> AddressedSafetyMessage<'a> {
    pub fn sequence_number(&self) -> u32 {
        self.bits.unsigned(2, 38)
    }

    pub fn destination_mmsi(&self) -> u32 {
        self.bits.unsigned(30, 40)
    }

    pub fn retransmit_flag(&self) -> bool {
        self.bits.bit(70)
    }

    /// Free text filling the rest of the payload.
    pub fn text(&self) -> AisText<'a> {
        self.bits.text(72, self.bits.bit_len().saturating_sub(72) / 6)
    }
}
