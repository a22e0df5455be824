use crate::bits::AisText;

use super::Dimensions;
use super::codes::{EpfdFixType, ShipType};

message_view! {
    /// Static and voyage related data (type 5), sent by class A stations
    /// every six minutes. 424 bits, normally split over two sentences.
    StaticAndVoyageData
}

impl<'a> StaticAndVoyageData<'a> {
    /// 0 = ITU-R M.1371-1, 1-3 = later editions.
    pub fn ais_version(&self) -> u32 {
        self.bits.unsigned(2, 38)
    }

    pub fn imo_number(&self) -> u32 {
        self.bits.unsigned(30, 40)
    }

    pub fn call_sign(&self) -> AisText<'a> {
        self.bits.text(70, 7)
    }

    pub fn vessel_name(&self) -> AisText<'a> {
        self.bits.text(112, 20)
    }

    pub fn ship_type(&self) -> ShipType {
        self.bits.unsigned(8, 232).into()
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::read(&self.bits, 240)
    }

    pub fn epfd_fix_type(&self) -> EpfdFixType {
        self.bits.unsigned(4, 270).into()
    }

    /// ETA month, 0 when not available.
    pub fn eta_month(&self) -> u32 {
        self.bits.unsigned(4, 274)
    }

    pub fn eta_day(&self) -> u32 {
        self.bits.unsigned(5, 278)
    }

    /// ETA hour, 24 when not available.
    pub fn eta_hour(&self) -> u32 {
        self.bits.unsigned(5, 283)
    }

    /// ETA minute, 60 when not available.
    pub fn eta_minute(&self) -> u32 {
        self.bits.unsigned(6, 288)
    }

    /// Maximum present static draught in tenths of a metre.
    pub fn draught_10th_metres(&self) -> u32 {
        self.bits.unsigned(8, 294)
    }

    pub fn draught_metres(&self) -> f64 {
        self.draught_10th_metres() as f64 / 10.0
    }

    pub fn destination(&self) -> AisText<'a> {
        self.bits.text(302, 20)
    }

    /// Data terminal equipment; `false` when a display is ready.
    pub fn dte(&self) -> bool {
        self.bits.bit(422)
    }

    pub fn spare_bit_423(&self) -> bool {
        self.bits.bit(423)
    }
}
