use crate::bits::BinaryData;

message_view! {
    /// Binary addressed message (type 6).
    BinaryAddressedMessage
}

impl<'a> BinaryAddressedMessage<'a> {
    pub fn sequence_number(&self) -> u32 {
        self.bits.unsigned(2, 38)
    }

    pub fn destination_mmsi(&self) -> u32 {
        self.bits.unsigned(30, 40)
    }

    pub fn retransmit_flag(&self) -> bool {
        self.bits.bit(70)
    }

    pub fn spare_bit_71(&self) -> bool {
        self.bits.bit(71)
    }

    /// Designated area code of the application identifier.
    pub fn dac(&self) -> u32 {
        self.bits.unsigned(10, 72)
    }

    /// Function identifier of the application identifier.
    pub fn fid(&self) -> u32 {
        self.bits.unsigned(6, 82)
    }

    pub fn data(&self) -> BinaryData<'a> {
        self.bits.data_from(88)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_addressed_message() {
        let message = BinaryAddressedMessage::new(b"6@2R5`t0`QH<>d`?3h", 4).unwrap();

        assert_eq!(message.repeat_indicator(), 1);
        assert_eq!(message.mmsi(), 2655651);
        assert_eq!(message.sequence_number(), 3);
        assert_eq!(message.destination_mmsi(), 2655619);
        assert!(!message.retransmit_flag());
        assert_eq!(message.dac(), 235);
        assert_eq!(message.fid(), 10);

        let data = message.data();
        assert_eq!(data.bit_len(), 16);
        assert_eq!(data.unsigned(16, 0), 0x0F0F);
        assert_eq!(data.to_bytes(), vec![0x0F, 0x0F]);
    }
}
