message_view! {
    /// Data link management (type 20): slot reservations made by a base
    /// station, one to four per message.
    DataLinkManagement
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotReservation {
    pub offset: u32,
    pub number_of_slots: u32,
    pub timeout_minutes: u32,
    pub increment: u32,
}

impl DataLinkManagement<'_> {
    pub fn reservation_count(&self) -> usize {
        (self.bits.bit_len().saturating_sub(40) / 30).min(4)
    }

    pub fn reservations(&self) -> impl Iterator<Item = SlotReservation> + '_ {
        let bits = self.bits;
        (0..self.reservation_count()).map(move |i| {
            let start = 40 + 30 * i;
            SlotReservation {
                offset: bits.unsigned(12, start),
                number_of_slots: bits.unsigned(4, start + 12),
                timeout_minutes: bits.unsigned(3, start + 16),
                increment: bits.unsigned(11, start + 19),
            }
        })
    }
}
