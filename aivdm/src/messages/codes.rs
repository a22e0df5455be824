//! Integer-backed domain codes.
//!
//! AIS reserves unused values of most coded fields for future use. These
//! wrappers keep the raw value so that reserved codes survive decoding
//! unchanged; the named constants and descriptions cover the defined ones.

use std::fmt;

use serde::Serialize;

macro_rules! integer_code {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($konst:ident = $value:literal => $text:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub u8);

        impl $name {
            $(pub const $konst: Self = Self($value);)*

            pub fn raw(self) -> u8 {
                self.0
            }

            /// Description of a defined code, `None` for reserved values.
            pub fn name(self) -> Option<&'static str> {
                match self.0 {
                    $($value => Some($text),)*
                    _ => None,
                }
            }

            pub fn is_reserved(self) -> bool {
                self.name().is_none()
            }
        }

        impl From<u8> for $name {
            fn from(value: u8) -> Self {
                Self(value)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value as u8)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                match self.name() {
                    Some(text) => f.write_str(text),
                    None => write!(f, "reserved ({})", self.0),
                }
            }
        }
    };
}

integer_code! {
    /// AIS message type (6 bits). Codes 1 to 27 are defined.
    MessageType {
        POSITION_REPORT_SCHEDULED = 1 => "position report class A",
        POSITION_REPORT_ASSIGNED = 2 => "position report class A (assigned schedule)",
        POSITION_REPORT_RESPONSE = 3 => "position report class A (response to interrogation)",
        BASE_STATION_REPORT = 4 => "base station report",
        STATIC_AND_VOYAGE_DATA = 5 => "static and voyage related data",
        BINARY_ADDRESSED = 6 => "binary addressed message",
        BINARY_ACKNOWLEDGE = 7 => "binary acknowledge",
        BINARY_BROADCAST = 8 => "binary broadcast message",
        SAR_AIRCRAFT_POSITION = 9 => "standard SAR aircraft position report",
        UTC_DATE_INQUIRY = 10 => "UTC and date inquiry",
        UTC_DATE_RESPONSE = 11 => "UTC and date response",
        ADDRESSED_SAFETY = 12 => "addressed safety related message",
        SAFETY_ACKNOWLEDGE = 13 => "safety related acknowledgement",
        SAFETY_BROADCAST = 14 => "safety related broadcast message",
        INTERROGATION = 15 => "interrogation",
        ASSIGNMENT_MODE_COMMAND = 16 => "assignment mode command",
        DGNSS_BROADCAST = 17 => "DGNSS binary broadcast message",
        POSITION_REPORT_CLASS_B = 18 => "standard class B position report",
        EXTENDED_POSITION_REPORT_CLASS_B = 19 => "extended class B position report",
        DATA_LINK_MANAGEMENT = 20 => "data link management",
        AID_TO_NAVIGATION_REPORT = 21 => "aid-to-navigation report",
        CHANNEL_MANAGEMENT = 22 => "channel management",
        GROUP_ASSIGNMENT_COMMAND = 23 => "group assignment command",
        STATIC_DATA_REPORT = 24 => "static data report",
        SINGLE_SLOT_BINARY = 25 => "single slot binary message",
        MULTIPLE_SLOT_BINARY = 26 => "multiple slot binary message",
        LONG_RANGE_BROADCAST = 27 => "long range AIS broadcast message",
    }
}

integer_code! {
    /// Navigational status of a class A vessel (4 bits).
    NavigationStatus {
        UNDER_WAY_USING_ENGINE = 0 => "under way using engine",
        AT_ANCHOR = 1 => "at anchor",
        NOT_UNDER_COMMAND = 2 => "not under command",
        RESTRICTED_MANOEUVERABILITY = 3 => "restricted manoeuverability",
        CONSTRAINED_BY_DRAUGHT = 4 => "constrained by her draught",
        MOORED = 5 => "moored",
        AGROUND = 6 => "aground",
        ENGAGED_IN_FISHING = 7 => "engaged in fishing",
        UNDER_WAY_SAILING = 8 => "under way sailing",
        AIS_SART_ACTIVE = 14 => "AIS-SART active",
        NOT_DEFINED = 15 => "not defined",
    }
}

integer_code! {
    /// Special manoeuvre indicator (2 bits).
    ManoeuvreIndicator {
        NOT_AVAILABLE = 0 => "not available",
        NO_SPECIAL_MANOEUVRE = 1 => "no special manoeuvre",
        SPECIAL_MANOEUVRE = 2 => "special manoeuvre",
    }
}

integer_code! {
    /// SOTDMA synchronization state (2 bits).
    RadioSyncState {
        UTC_DIRECT = 0 => "UTC direct",
        UTC_INDIRECT = 1 => "UTC indirect",
        BASE_STATION = 2 => "synchronized to base station",
        OTHER_STATION = 3 => "synchronized to another station",
    }
}

integer_code! {
    /// Type of electronic position fixing device (4 bits).
    EpfdFixType {
        UNDEFINED = 0 => "undefined",
        GPS = 1 => "GPS",
        GLONASS = 2 => "GLONASS",
        COMBINED_GPS_GLONASS = 3 => "combined GPS/GLONASS",
        LORAN_C = 4 => "Loran-C",
        CHAYKA = 5 => "Chayka",
        INTEGRATED_NAVIGATION = 6 => "integrated navigation system",
        SURVEYED = 7 => "surveyed",
        GALILEO = 8 => "Galileo",
        INTERNAL_GNSS = 15 => "internal GNSS",
    }
}

integer_code! {
    /// Type of aid to navigation (5 bits).
    AidToNavigationType {
        NOT_SPECIFIED = 0 => "not specified",
        REFERENCE_POINT = 1 => "reference point",
        RACON = 2 => "RACON",
        FIXED_STRUCTURE_OFF_SHORE = 3 => "fixed structure off shore",
        LIGHT_WITHOUT_SECTORS = 5 => "light, without sectors",
        LIGHT_WITH_SECTORS = 6 => "light, with sectors",
        LEADING_LIGHT_FRONT = 7 => "leading light front",
        LEADING_LIGHT_REAR = 8 => "leading light rear",
        BEACON_CARDINAL_NORTH = 9 => "beacon, cardinal N",
        BEACON_CARDINAL_EAST = 10 => "beacon, cardinal E",
        BEACON_CARDINAL_SOUTH = 11 => "beacon, cardinal S",
        BEACON_CARDINAL_WEST = 12 => "beacon, cardinal W",
        BEACON_PORT_HAND = 13 => "beacon, port hand",
        BEACON_STARBOARD_HAND = 14 => "beacon, starboard hand",
        BEACON_PREFERRED_CHANNEL_PORT = 15 => "beacon, preferred channel port hand",
        BEACON_PREFERRED_CHANNEL_STARBOARD = 16 => "beacon, preferred channel starboard hand",
        BEACON_ISOLATED_DANGER = 17 => "beacon, isolated danger",
        BEACON_SAFE_WATER = 18 => "beacon, safe water",
        BEACON_SPECIAL_MARK = 19 => "beacon, special mark",
        CARDINAL_MARK_NORTH = 20 => "cardinal mark N",
        CARDINAL_MARK_EAST = 21 => "cardinal mark E",
        CARDINAL_MARK_SOUTH = 22 => "cardinal mark S",
        CARDINAL_MARK_WEST = 23 => "cardinal mark W",
        PORT_HAND_MARK = 24 => "port hand mark",
        STARBOARD_HAND_MARK = 25 => "starboard hand mark",
        PREFERRED_CHANNEL_PORT = 26 => "preferred channel port hand",
        PREFERRED_CHANNEL_STARBOARD = 27 => "preferred channel starboard hand",
        ISOLATED_DANGER = 28 => "isolated danger",
        SAFE_WATER = 29 => "safe water",
        SPECIAL_MARK = 30 => "special mark",
        LIGHT_VESSEL = 31 => "light vessel / LANBY / rigs",
    }
}

/// Ship and cargo type (8 bits).
///
/// Only the first digit carries a category in most of the range, so the
/// description is derived from the tens digit rather than a full catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ShipType(pub u8);

impl ShipType {
    pub const NOT_AVAILABLE: Self = Self(0);
    pub const FISHING: Self = Self(30);
    pub const TOWING: Self = Self(31);
    pub const SAILING: Self = Self(36);
    pub const PLEASURE_CRAFT: Self = Self(37);
    pub const PILOT_VESSEL: Self = Self(50);
    pub const SEARCH_AND_RESCUE: Self = Self(51);
    pub const TUG: Self = Self(52);
    pub const LAW_ENFORCEMENT: Self = Self(55);
    pub const CARGO: Self = Self(70);
    pub const TANKER: Self = Self(80);

    pub fn raw(self) -> u8 {
        self.0
    }

    pub fn category(self) -> &'static str {
        match self.0 {
            0 => "not available",
            20..=29 => "wing in ground",
            30 => "fishing",
            31 | 32 => "towing",
            33 => "dredging or underwater ops",
            34 => "diving ops",
            35 => "military ops",
            36 => "sailing",
            37 => "pleasure craft",
            40..=49 => "high speed craft",
            50 => "pilot vessel",
            51 => "search and rescue vessel",
            52 => "tug",
            53 => "port tender",
            54 => "anti-pollution equipment",
            55 => "law enforcement",
            58 => "medical transport",
            59 => "noncombatant ship",
            60..=69 => "passenger",
            70..=79 => "cargo",
            80..=89 => "tanker",
            90..=99 => "other",
            _ => "reserved",
        }
    }

    pub fn is_reserved(self) -> bool {
        self.category() == "reserved"
    }
}

impl From<u32> for ShipType {
    fn from(value: u32) -> Self {
        Self(value as u8)
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.category(), self.0)
    }
}

/// Class B transceiver technology (1 bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClassBUnit {
    /// Class B "SO", self-organized TDMA.
    Sotdma,
    /// Class B "CS", carrier-sense TDMA.
    Cstdma,
}

/// Format of the class B radio status field (1 bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClassBRadioStatusType {
    Sotdma,
    Itdma,
}
