message_view! {
    /// Binary acknowledge (type 7) and safety related acknowledge (type 13).
    ///
    /// Carries one to four acknowledgements of 32 bits each.
    BinaryAcknowledge
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acknowledgement {
    pub mmsi: u32,
    pub sequence_number: u32,
}

impl BinaryAcknowledge<'_> {
    /// Number of complete acknowledgements in the payload.
    pub fn acknowledgement_count(&self) -> usize {
        (self.bits.bit_len().saturating_sub(40) / 32).min(4)
    }

    pub fn acknowledgements(&self) -> impl Iterator<Item = Acknowledgement> + '_ {
        let bits = self.bits;
        (0..self.acknowledgement_count()).map(move |i| Acknowledgement {
            mmsi: bits.unsigned(30, 40 + 32 * i),
            sequence_number: bits.unsigned(2, 70 + 32 * i),
        })
    }
}
