message_view! {
    /// Interrogation (type 15).
    ///
    /// Requests up to two messages from a first station and one from a
    /// second. The optional parts are present only when the payload is long
    /// enough to carry them.
    Interrogation
}

/// One requested message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterrogationRequest {
    pub mmsi: u32,
    pub message_type: u32,
    pub slot_offset: u32,
}

impl Interrogation<'_> {
    pub fn first_request(&self) -> InterrogationRequest {
        InterrogationRequest {
            mmsi: self.bits.unsigned(30, 40),
            message_type: self.bits.unsigned(6, 70),
            slot_offset: self.bits.unsigned(12, 76),
        }
    }

    /// A second message requested from the first station.
    pub fn second_request(&self) -> Option<InterrogationRequest> {
        self.bits.has_bits(20, 90).then(|| InterrogationRequest {
            mmsi: self.bits.unsigned(30, 40),
            message_type: self.bits.unsigned(6, 90),
            slot_offset: self.bits.unsigned(12, 96),
        })
    }

    pub fn second_station_request(&self) -> Option<InterrogationRequest> {
        self.bits.has_bits(48, 110).then(|| InterrogationRequest {
            mmsi: self.bits.unsigned(30, 110),
            message_type: self.bits.unsigned(6, 140),
            slot_offset: self.bits.unsigned(12, 146),
        })
    }

    pub fn requests(&self) -> impl Iterator<Item = InterrogationRequest> {
        std::iter::once(self.first_request())
            .chain(self.second_request())
            .chain(self.second_station_request())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrogation_with_all_requests() {
        let interrogation = Interrogation::new(b"?03Ovn1GP<K0<6@5383`l5N61;0", 2).unwrap();

        assert_eq!(interrogation.mmsi(), 3669720);
        let requests: Vec<_> = interrogation.requests().collect();
        assert_eq!(
            requests,
            vec![
                InterrogationRequest { mmsi: 367014320, message_type: 3, slot_offset: 100 },
                InterrogationRequest { mmsi: 367014320, message_type: 5, slot_offset: 200 },
                InterrogationRequest { mmsi: 244123000, message_type: 24, slot_offset: 300 },
            ]
        );
    }

    #[test]
    fn test_interrogation_single_request() {
        // First 88 bits of the same message.
        let interrogation = Interrogation::new(b"?03Ovn1GP<K0<6@", 2).unwrap();

        assert_eq!(interrogation.first_request().message_type, 3);
        assert_eq!(interrogation.second_request(), None);
        assert_eq!(interrogation.second_station_request(), None);
        assert_eq!(interrogation.requests().count(), 1);
    }
}
