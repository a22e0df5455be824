use crate::bits::BinaryData;

message_view! {
    /// Binary broadcast message (type 8).
    BinaryBroadcastMessage
}

impl<'a> BinaryBroadcastMessage<'a> {
    pub fn spare_bits_38(&self) -> u32 {
        self.bits.unsigned(2, 38)
    }

    pub fn dac(&self) -> u32 {
        self.bits.unsigned(10, 40)
    }

    pub fn fid(&self) -> u32 {
        self.bits.unsigned(6, 50)
    }

    pub fn data(&self) -> BinaryData<'a> {
        self.bits.data_from(56)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_broadcast_message() {
        let message = BinaryBroadcastMessage::new(b"802R5`h0Gssg", 0).unwrap();

        assert_eq!(message.mmsi(), 2655651);
        assert_eq!(message.dac(), 1);
        assert_eq!(message.fid(), 31);
        assert_eq!(message.data().bit_len(), 16);
        assert_eq!(message.data().to_bytes(), vec![0xBE, 0xEF]);
    }
}
