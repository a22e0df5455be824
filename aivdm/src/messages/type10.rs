message_view! {
    /// UTC and date inquiry (type 10).
    UtcDateInquiry
}

impl UtcDateInquiry<'_> {
    pub fn destination_mmsi(&self) -> u32 {
        self.bits.unsigned(30, 40)
    }
}
