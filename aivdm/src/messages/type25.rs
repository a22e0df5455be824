use crate::bits::{BinaryData, BitReader};

message_view! {
    /// Single slot binary message (type 25).
    SingleSlotBinaryMessage
}

message_view! {
    /// Multiple slot binary message with communications state (type 26).
    MultipleSlotBinaryMessage
}

/// Both types share the same header: an addressed flag, a structured flag,
/// then an optional destination MMSI and an optional 16-bit application id.
fn destination(bits: &BitReader<'_>) -> Option<u32> {
    bits.bit(38).then(|| bits.unsigned(30, 40))
}

fn application_id_start(bits: &BitReader<'_>) -> usize {
    if bits.bit(38) { 70 } else { 40 }
}

fn application_id(bits: &BitReader<'_>) -> Option<u32> {
    bits.bit(39)
        .then(|| bits.unsigned(16, application_id_start(bits)))
}

fn data_start(bits: &BitReader<'_>) -> usize {
    application_id_start(bits) + if bits.bit(39) { 16 } else { 0 }
}

impl<'a> SingleSlotBinaryMessage<'a> {
    pub fn addressed(&self) -> bool {
        self.bits.bit(38)
    }

    pub fn structured(&self) -> bool {
        self.bits.bit(39)
    }

    pub fn destination_mmsi(&self) -> Option<u32> {
        destination(&self.bits)
    }

    pub fn application_id(&self) -> Option<u32> {
        application_id(&self.bits)
    }

    pub fn data(&self) -> BinaryData<'a> {
        self.bits.data_from(data_start(&self.bits))
    }
}

impl<'a> MultipleSlotBinaryMessage<'a> {
    pub fn addressed(&self) -> bool {
        self.bits.bit(38)
    }

    pub fn structured(&self) -> bool {
        self.bits.bit(39)
    }

    pub fn destination_mmsi(&self) -> Option<u32> {
        destination(&self.bits)
    }

    pub fn application_id(&self) -> Option<u32> {
        application_id(&self.bits)
    }

    /// The data between the header and the trailing radio status.
    pub fn data(&self) -> BinaryData<'a> {
        let start = data_start(&self.bits);
        let len = self.bits.bit_len().saturating_sub(20).saturating_sub(start);
        self.bits.data(start, len)
    }

    /// The 20-bit communication state in the last bits of the payload.
    pub fn radio_status(&self) -> u32 {
        let start = self.bits.bit_len().saturating_sub(20).max(data_start(&self.bits));
        self.bits.unsigned(20, start)
    }
}
