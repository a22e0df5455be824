use crate::bits::AisText;

use super::Dimensions;
use super::codes::ShipType;

message_view! {
    /// Static data report part A (type 24, part number 0): the vessel name.
    StaticDataReportPartA
}

message_view! {
    /// Static data report part B (type 24, part number 1).
    StaticDataReportPartB
}

impl<'a> StaticDataReportPartA<'a> {
    pub fn part_number(&self) -> u32 {
        self.bits.unsigned(2, 38)
    }

    pub fn vessel_name(&self) -> AisText<'a> {
        self.bits.text(40, 20)
    }
}

impl<'a> StaticDataReportPartB<'a> {
    pub fn part_number(&self) -> u32 {
        self.bits.unsigned(2, 38)
    }

    pub fn ship_type(&self) -> ShipType {
        self.bits.unsigned(8, 40).into()
    }

    pub fn vendor_id(&self) -> AisText<'a> {
        self.bits.text(48, 3)
    }

    pub fn unit_model_code(&self) -> u32 {
        self.bits.unsigned(4, 66)
    }

    pub fn serial_number(&self) -> u32 {
        self.bits.unsigned(20, 70)
    }

    pub fn call_sign(&self) -> AisText<'a> {
        self.bits.text(90, 7)
    }

    /// Auxiliary craft (MMSI 98XXXXXXX) report their mothership here
    /// instead of dimensions.
    pub fn is_auxiliary_craft(&self) -> bool {
        self.mmsi() / 10_000_000 == 98
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::read(&self.bits, 132)
    }

    pub fn mothership_mmsi(&self) -> u32 {
        self.bits.unsigned(30, 132)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_data_report_part_a() {
        let report = StaticDataReportPartA::new(b"H42O55i18tMET00000000000000", 2).unwrap();

        assert_eq!(report.mmsi(), 271041815);
        assert_eq!(report.part_number(), 0);
        assert_eq!(report.vessel_name().to_string(), "PROGUY");
    }

    #[test]
    fn test_static_data_report_part_b() {
        let report = StaticDataReportPartB::new(b"H42O55ltCD=8N90D3nink01@5230", 0).unwrap();

        assert_eq!(report.mmsi(), 271041815);
        assert_eq!(report.part_number(), 1);
        assert_eq!(report.ship_type(), ShipType(60));
        assert_eq!(report.vendor_id().to_string(), "STM");
        assert_eq!(report.unit_model_code(), 2);
        assert_eq!(report.serial_number(), 123456);
        assert_eq!(report.call_sign().to_string(), "TC6163");
        assert!(!report.is_auxiliary_craft());
        assert_eq!(
            report.dimensions(),
            Dimensions {
                to_bow: 10,
                to_stern: 5,
                to_port: 2,
                to_starboard: 3,
            }
        );
        assert_eq!(report.mothership_mmsi(), 20992131);
    }
}
